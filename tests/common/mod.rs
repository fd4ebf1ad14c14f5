//! Helpers shared by integration tests.

#![allow(dead_code)]

use inventory_seed::generator::FakeProvider;

/// Split the statement's VALUES list into unquoted, unescaped literals
pub fn extract_values(stmt: &str) -> Vec<String> {
    let start = stmt.find("VALUES\n(").expect("statement has VALUES") + "VALUES\n(".len();
    let body = &stmt[start..];

    let mut values = Vec::new();
    let mut chars = body.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '\'' {
            continue;
        }
        let mut value = String::new();
        loop {
            match chars.next() {
                Some('\'') if chars.peek() == Some(&'\'') => {
                    chars.next();
                    value.push('\'');
                }
                Some('\'') => break,
                Some(ch) => value.push(ch),
                None => panic!("unterminated literal in {stmt}"),
            }
        }
        values.push(value);
    }
    values
}

/// Provider returning the same values every call
pub struct FixedProvider {
    pub word: &'static str,
    pub company: &'static str,
    pub sentence: &'static str,
}

impl Default for FixedProvider {
    fn default() -> Self {
        Self {
            word: "widget",
            company: "Acme Corp",
            sentence: "Lorem ipsum dolor sit amet.",
        }
    }
}

impl FakeProvider for FixedProvider {
    fn word(&mut self) -> String {
        self.word.to_string()
    }

    fn company_name(&mut self) -> String {
        self.company.to_string()
    }

    fn sentence(&mut self, _word_count: usize) -> String {
        self.sentence.to_string()
    }
}
