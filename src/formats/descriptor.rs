// JSON descriptor files carrying one configuration table
//
// {"name": "...", "origin": "...", "identifiers": {...}, "limits": {...}, "data": "<base64>"}

use crate::selector::{ConfigSelector, Identifiers, RegisteredConfig};
use crate::table::{ConfigError, ConfigTable, TableLimits};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DescriptorError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse descriptor JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to decode base64 table data: {0}")]
    Base64Decode(String),

    #[error("Descriptor table rejected: {0}")]
    Table(#[from] ConfigError),
}

pub type Result<T> = std::result::Result<T, DescriptorError>;

/// On-disk shape of a descriptor
#[derive(Debug, Serialize, Deserialize)]
struct DescriptorFile {
    name: String,

    #[serde(default)]
    origin: String,

    identifiers: Identifiers,

    #[serde(default)]
    limits: TableLimits,

    /// Encoded table, base64
    data: String,
}

/// A configuration table loaded from (or destined for) a descriptor file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigDescriptor {
    pub name: String,
    pub origin: String,
    pub identifiers: Identifiers,
    pub table: ConfigTable,
}

impl ConfigDescriptor {
    /// Parse a descriptor and validate its table
    pub fn from_json(json: &str) -> Result<Self> {
        let file: DescriptorFile = serde_json::from_str(json)?;
        let bytes = STANDARD
            .decode(file.data.trim())
            .map_err(|e| DescriptorError::Base64Decode(e.to_string()))?;
        let table = ConfigTable::validated(bytes, file.limits)?;

        Ok(Self {
            name: file.name,
            origin: file.origin,
            identifiers: file.identifiers,
            table,
        })
    }

    /// Serialize to pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        let file = DescriptorFile {
            name: self.name.clone(),
            origin: self.origin.clone(),
            identifiers: self.identifiers,
            limits: *self.table.limits(),
            data: STANDARD.encode(self.table.map().get_packed()),
        };
        Ok(serde_json::to_string_pretty(&file)?)
    }

    /// Add this table to @selector and return its level
    pub fn register_into(self, selector: &mut ConfigSelector) -> usize {
        selector.register(self.into())
    }
}

impl From<ConfigDescriptor> for RegisteredConfig {
    fn from(desc: ConfigDescriptor) -> Self {
        RegisteredConfig::new(desc.name, desc.origin, desc.identifiers, desc.table)
    }
}

impl From<&RegisteredConfig> for ConfigDescriptor {
    fn from(config: &RegisteredConfig) -> Self {
        Self {
            name: config.name.clone(),
            origin: config.origin.clone(),
            identifiers: config.identifiers,
            table: config.table.clone(),
        }
    }
}

/// Load a descriptor file
///
/// A descriptor without an origin label is labelled with its file name.
pub fn load_descriptor(filename: impl AsRef<Path>) -> Result<ConfigDescriptor> {
    let path = filename.as_ref();
    let json = fs::read_to_string(path)?;
    let mut desc = ConfigDescriptor::from_json(&json)?;

    if desc.origin.is_empty() {
        desc.origin = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
    }

    tracing::debug!(
        "Loaded descriptor '{}' from {}: {} bytes",
        desc.name,
        path.display(),
        desc.table.len()
    );
    Ok(desc)
}

/// Write a descriptor file
pub fn save_descriptor(filename: impl AsRef<Path>, desc: &ConfigDescriptor) -> Result<()> {
    fs::write(filename, desc.to_json()?)?;
    Ok(())
}
