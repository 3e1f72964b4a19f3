// Selection among named configuration tables
pub mod config_selector;
pub mod identifiers;

pub use config_selector::{ConfigSelector, DefaultChoice, RegisteredConfig};
pub use identifiers::{Identifiers, IDENTIFIERS_SIG};
