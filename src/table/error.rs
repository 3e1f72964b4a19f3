// Error kinds shared by tables and the selector

use thiserror::Error;

/// Why a scan stopped before reaching a terminator
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedReason {
    #[error("no terminator within the {ceiling}-byte scan ceiling")]
    Unterminated { ceiling: usize },

    #[error("entry at offset {offset} declares {length} bytes, limit is {max}")]
    EntryTooLong { offset: usize, length: usize, max: usize },

    #[error("table ends at {len} bytes, record at offset {offset} is cut short")]
    Truncated { offset: usize, len: usize },
}

/// Which bound a lookup violated
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeFault {
    #[error("offset {offset} is outside the {len}-byte table")]
    Offset { offset: usize, len: usize },

    #[error("length byte {length} at offset {offset} exceeds the {max}-byte entry limit")]
    EntryTooLong { offset: usize, length: usize, max: usize },

    #[error("entry at offset {offset} ends at {end}, past the {len}-byte table")]
    Overrun { offset: usize, end: usize, len: usize },

    #[error("entry index {index} with only {count} entries")]
    Index { index: usize, count: usize },

    #[error("level {level} with only {count} registered tables")]
    Level { level: usize, count: usize },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Malformed table: {0}")]
    Malformed(MalformedReason),

    #[error("Out of range: {0}")]
    OutOfRange(RangeFault),

    #[error("Configuration not found: {0}")]
    NotFound(String),
}

impl ConfigError {
    pub fn is_malformed(&self) -> bool {
        matches!(self, ConfigError::Malformed(_))
    }

    pub fn is_out_of_range(&self) -> bool {
        matches!(self, ConfigError::OutOfRange(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ConfigError::NotFound(_))
    }
}

impl From<MalformedReason> for ConfigError {
    fn from(reason: MalformedReason) -> Self {
        ConfigError::Malformed(reason)
    }
}

impl From<RangeFault> for ConfigError {
    fn from(fault: RangeFault) -> Self {
        ConfigError::OutOfRange(fault)
    }
}

pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
