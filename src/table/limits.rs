// Validation limits applied when scanning a table

use serde::{Deserialize, Serialize};

/// Default number of bytes a scan examines before giving up on a terminator
pub const DEFAULT_MAX_SCAN: usize = 1000;

/// Largest payload an Si446x command string may carry
pub const DEFAULT_MAX_ENTRY_LEN: usize = 16;

/// Bounds for traversing and validating a configuration table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableLimits {
    /// Scan ceiling in bytes
    #[serde(default = "default_max_scan")]
    pub max_scan: usize,

    /// Longest legitimate entry payload
    #[serde(default = "default_max_entry_len")]
    pub max_entry_len: usize,
}

fn default_max_scan() -> usize {
    DEFAULT_MAX_SCAN
}

fn default_max_entry_len() -> usize {
    DEFAULT_MAX_ENTRY_LEN
}

impl Default for TableLimits {
    fn default() -> Self {
        Self {
            max_scan: DEFAULT_MAX_SCAN,
            max_entry_len: DEFAULT_MAX_ENTRY_LEN,
        }
    }
}

impl TableLimits {
    /// Set the scan ceiling
    pub fn with_max_scan(mut self, max_scan: usize) -> Self {
        self.max_scan = max_scan;
        self
    }

    /// Set the entry-size ceiling
    pub fn with_max_entry_len(mut self, max_entry_len: usize) -> Self {
        self.max_entry_len = max_entry_len;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let limits = TableLimits::default();
        assert_eq!(limits.max_scan, 1000);
        assert_eq!(limits.max_entry_len, 16);
    }

    #[test]
    fn test_builder() {
        let limits = TableLimits::default()
            .with_max_scan(64)
            .with_max_entry_len(32);
        assert_eq!(limits.max_scan, 64);
        assert_eq!(limits.max_entry_len, 32);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let limits: TableLimits = serde_json::from_str(r#"{"max_entry_len": 24}"#).unwrap();
        assert_eq!(limits.max_scan, DEFAULT_MAX_SCAN);
        assert_eq!(limits.max_entry_len, 24);

        let limits: TableLimits = serde_json::from_str("{}").unwrap();
        assert_eq!(limits, TableLimits::default());
    }
}
