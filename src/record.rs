//! Generated row types and their rendering as PostgreSQL `INSERT` statements.
//!
//! Every value is emitted as a single-quoted literal, matching the layout the
//! seed files have always used. String values are escaped before quoting.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Target table for inventory items
pub const INVENTORY_ITEMS_TABLE: &str = r#""public"."inventory_items""#;

/// Target table for the stock ledger
pub const STOCK_TRANSACTIONS_TABLE: &str = r#""public"."stock_transactions""#;

/// Column order of `public.inventory_items`. Must match the existing schema.
pub const INVENTORY_ITEM_COLUMNS: [&str; 12] = [
    "id",
    "item_name",
    "item_brand",
    "size",
    "stock_qty",
    "remark",
    "created_at",
    "updated_at",
    "created_by",
    "updated_by",
    "reserved_quantity",
    "low_stock_warning",
];

/// Column order of `public.stock_transactions`
pub const STOCK_TRANSACTION_COLUMNS: [&str; 9] = [
    "id",
    "item_id",
    "transaction_type",
    "quantity",
    "previous_stock",
    "new_stock",
    "reason",
    "created_by",
    "created_at",
];

/// Line grouping for the column and value lists
const INVENTORY_ITEM_LINES: &[usize] = &[6, 4, 2];
const STOCK_TRANSACTION_LINES: &[usize] = &[5, 4];

/// Reason recorded on the ledger row written for a newly created item
pub const INITIAL_STOCK_REASON: &str = "Initial stock";

/// Render a timestamp as `YYYY-MM-DD HH:MM:SS.ffffff+00`
pub fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.format("%Y-%m-%d %H:%M:%S%.6f+00").to_string()
}

/// Render a size as `"{W}mm x {H}mm"`
pub fn format_size(width_mm: u32, height_mm: u32) -> String {
    format!("{}mm x {}mm", width_mm, height_mm)
}

/// SQL value representation
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    Uuid(Uuid),
    Int(i64),
    String(String),
    Timestamp(DateTime<Utc>),
}

impl SqlValue {
    /// Format as a quoted PostgreSQL literal
    pub fn to_postgres(&self) -> String {
        match self {
            SqlValue::Uuid(u) => format!("'{}'", u.hyphenated()),
            SqlValue::Int(n) => format!("'{}'", n),
            SqlValue::String(s) => format!("'{}'", escape_postgres_string(s)),
            SqlValue::Timestamp(ts) => format!("'{}'", format_timestamp(ts)),
        }
    }
}

fn escape_postgres_string(s: &str) -> String {
    s.replace('\'', "''")
}

/// Transaction direction in the stock ledger
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionType {
    In,
    Out,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::In => "in",
            TransactionType::Out => "out",
        }
    }
}

impl std::fmt::Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One synthetic row of `public.inventory_items`
#[derive(Debug, Clone, PartialEq)]
pub struct InventoryItem {
    pub id: Uuid,
    pub item_name: String,
    pub item_brand: String,
    pub size: String,
    pub stock_qty: u32,
    pub remark: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub created_by: Uuid,
    pub updated_by: Uuid,
    pub reserved_quantity: u32,
    pub low_stock_warning: u32,
}

impl InventoryItem {
    /// Values in `INVENTORY_ITEM_COLUMNS` order
    pub fn values(&self) -> [SqlValue; 12] {
        [
            SqlValue::Uuid(self.id),
            SqlValue::String(self.item_name.clone()),
            SqlValue::String(self.item_brand.clone()),
            SqlValue::String(self.size.clone()),
            SqlValue::Int(i64::from(self.stock_qty)),
            SqlValue::String(self.remark.clone()),
            SqlValue::Timestamp(self.created_at),
            SqlValue::Timestamp(self.updated_at),
            SqlValue::Uuid(self.created_by),
            SqlValue::Uuid(self.updated_by),
            SqlValue::Int(i64::from(self.reserved_quantity)),
            SqlValue::Int(i64::from(self.low_stock_warning)),
        ]
    }

    pub fn insert_statement(&self) -> String {
        render_insert(
            INVENTORY_ITEMS_TABLE,
            &INVENTORY_ITEM_COLUMNS,
            &self.values(),
            INVENTORY_ITEM_LINES,
        )
    }
}

/// One row of `public.stock_transactions`
#[derive(Debug, Clone, PartialEq)]
pub struct StockTransaction {
    pub id: Uuid,
    pub item_id: Uuid,
    pub transaction_type: TransactionType,
    pub quantity: u32,
    pub previous_stock: u32,
    pub new_stock: u32,
    pub reason: String,
    pub created_by: Uuid,
    pub created_at: DateTime<Utc>,
}

impl StockTransaction {
    /// Ledger row for an item created with stock, or `None` if it has none
    pub fn initial_stock(id: Uuid, item: &InventoryItem) -> Option<Self> {
        if item.stock_qty == 0 {
            return None;
        }

        Some(Self {
            id,
            item_id: item.id,
            transaction_type: TransactionType::In,
            quantity: item.stock_qty,
            previous_stock: 0,
            new_stock: item.stock_qty,
            reason: INITIAL_STOCK_REASON.to_string(),
            created_by: item.created_by,
            created_at: item.created_at,
        })
    }

    /// Values in `STOCK_TRANSACTION_COLUMNS` order
    pub fn values(&self) -> [SqlValue; 9] {
        [
            SqlValue::Uuid(self.id),
            SqlValue::Uuid(self.item_id),
            SqlValue::String(self.transaction_type.as_str().to_string()),
            SqlValue::Int(i64::from(self.quantity)),
            SqlValue::Int(i64::from(self.previous_stock)),
            SqlValue::Int(i64::from(self.new_stock)),
            SqlValue::String(self.reason.clone()),
            SqlValue::Uuid(self.created_by),
            SqlValue::Timestamp(self.created_at),
        ]
    }

    pub fn insert_statement(&self) -> String {
        render_insert(
            STOCK_TRANSACTIONS_TABLE,
            &STOCK_TRANSACTION_COLUMNS,
            &self.values(),
            STOCK_TRANSACTION_LINES,
        )
    }
}

fn render_insert(table: &str, columns: &[&str], values: &[SqlValue], lines: &[usize]) -> String {
    debug_assert_eq!(columns.len(), values.len());

    let columns: Vec<String> = columns.iter().map(|c| format!("\"{}\"", c)).collect();
    let values: Vec<String> = values.iter().map(SqlValue::to_postgres).collect();

    format!(
        "INSERT INTO {}\n({})\nVALUES\n({});",
        table,
        wrap_list(&columns, lines),
        wrap_list(&values, lines)
    )
}

/// Join items with ", ", breaking onto a new line after each group
fn wrap_list(items: &[String], lines: &[usize]) -> String {
    let mut out = Vec::with_capacity(lines.len() + 1);
    let mut start = 0;
    for &len in lines {
        let end = (start + len).min(items.len());
        if start < end {
            out.push(items[start..end].join(", "));
        }
        start = end;
    }
    if start < items.len() {
        out.push(items[start..].join(", "));
    }
    out.join(",\n")
}
