// Configuration tables compiled into the crate
pub mod device;
pub mod local;
pub mod wds;

use crate::selector::{ConfigSelector, RegisteredConfig};
use crate::table::ConfigTable;

pub static WDS_CONFIG: ConfigTable = ConfigTable::from_static(wds::CONFIG);
pub static DEVICE_CONFIG: ConfigTable = ConfigTable::from_static(device::CONFIG);
pub static LOCAL_CONFIG: ConfigTable = ConfigTable::from_static(local::CONFIG);

/// Symbolic names of the built-in tables, in level order
pub const BUILTIN_NAMES: [&str; 3] = ["wds", "device", "local"];

/// Tables replayed, in order, to bring up a deployed device
pub const BOOT_SEQUENCE: [&str; 2] = ["wds", "device"];

/// Tables replayed, in order, on the bench rig
pub const BENCH_SEQUENCE: [&str; 2] = ["wds", "local"];

/// Build a selector holding every built-in table, defaulting to "wds"
pub fn default_selector() -> ConfigSelector {
    ConfigSelector::new()
        .with(RegisteredConfig::new(
            "wds",
            wds::ORIGIN,
            wds::IDENTIFIERS,
            WDS_CONFIG.clone(),
        ))
        .with(RegisteredConfig::new(
            "device",
            device::ORIGIN,
            device::IDENTIFIERS,
            DEVICE_CONFIG.clone(),
        ))
        .with(RegisteredConfig::new(
            "local",
            local::ORIGIN,
            local::IDENTIFIERS,
            LOCAL_CONFIG.clone(),
        ))
}
