// Length-prefixed configuration-string tables
pub mod config_table;
pub mod error;
pub mod limits;

pub use config_table::{ConfigTable, Entries, Entry, ScanReport};
pub use error::{ConfigError, ConfigResult, MalformedReason, RangeFault};
pub use limits::{TableLimits, DEFAULT_MAX_ENTRY_LEN, DEFAULT_MAX_SCAN};
