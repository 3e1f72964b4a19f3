// SI446X-CONFIG: pre-baked Si446x radio configuration tables for bench tooling

pub mod binding;
pub mod builtin;
pub mod formats;
pub mod memmap;
pub mod selector;
pub mod table;

// Re-export commonly used types
pub use builtin::default_selector;
pub use formats::{load_descriptor, load_raw, save_descriptor, save_raw, ConfigDescriptor};
pub use memmap::MemoryMap;
pub use selector::{ConfigSelector, DefaultChoice, Identifiers, RegisteredConfig};
pub use table::{
    ConfigError, ConfigResult, ConfigTable, Entries, Entry, MalformedReason, RangeFault,
    ScanReport, TableLimits,
};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
