// File formats for configuration tables
pub mod descriptor;
pub mod raw;

pub use descriptor::{load_descriptor, save_descriptor, ConfigDescriptor, DescriptorError};
pub use raw::{load_raw, save_raw, RawError};
