//! YAML configuration file.
//!
//! Every key is optional; command-line flags take precedence over the file.

use crate::generator::TimestampMode;
use anyhow::Context;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use uuid::Uuid;

/// Clock policy when no explicit timestamp is configured
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimestampPolicy {
    /// Every record reads the clock (default)
    #[default]
    PerRecord,
    /// One clock reading for the whole run
    PerBatch,
}

impl std::str::FromStr for TimestampPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "per_record" | "record" => Ok(TimestampPolicy::PerRecord),
            "per_batch" | "batch" => Ok(TimestampPolicy::PerBatch),
            _ => Err(format!(
                "Unknown timestamp policy: {}. Valid options: per_record, per_batch",
                s
            )),
        }
    }
}

impl std::fmt::Display for TimestampPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TimestampPolicy::PerRecord => write!(f, "per_record"),
            TimestampPolicy::PerBatch => write!(f, "per_batch"),
        }
    }
}

impl From<TimestampPolicy> for TimestampMode {
    fn from(policy: TimestampPolicy) -> Self {
        match policy {
            TimestampPolicy::PerRecord => TimestampMode::PerRecord,
            TimestampPolicy::PerBatch => TimestampMode::PerBatch,
        }
    }
}

/// Parse an RFC 3339 timestamp and normalize it to UTC
pub fn parse_timestamp(s: &str) -> anyhow::Result<DateTime<Utc>> {
    let ts = DateTime::parse_from_rfc3339(s.trim())
        .with_context(|| format!("invalid RFC 3339 timestamp: {}", s))?;
    Ok(ts.with_timezone(&Utc))
}

/// Contents of a `--config` YAML file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SeedYamlConfig {
    /// Number of items to generate
    pub count: Option<usize>,
    /// Random seed for reproducible output
    pub seed: Option<u64>,
    /// Value for created_by / updated_by
    pub user_id: Option<Uuid>,
    /// Clock policy
    pub timestamps: Option<TimestampPolicy>,
    /// Fixed RFC 3339 timestamp; overrides `timestamps`
    pub timestamp: Option<String>,
    /// Emit the initial stock ledger row after each item
    pub initial_stock: Option<bool>,
}

impl SeedYamlConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        Self::from_yaml(&content)
            .with_context(|| format!("invalid config file: {}", path.display()))
    }

    pub fn from_yaml(content: &str) -> anyhow::Result<Self> {
        let config: SeedYamlConfig = serde_yaml_ng::from_str(content)?;
        Ok(config)
    }

    /// Timestamp mode described by this file, if any
    pub fn timestamp_mode(&self) -> anyhow::Result<Option<TimestampMode>> {
        if let Some(ref ts) = self.timestamp {
            return Ok(Some(TimestampMode::Fixed(parse_timestamp(ts)?)));
        }
        Ok(self.timestamps.map(TimestampMode::from))
    }
}
