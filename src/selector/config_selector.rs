// Runtime selection among named configuration tables

use super::identifiers::Identifiers;
use crate::table::{ConfigError, ConfigResult, ConfigTable, RangeFault};
use std::sync::atomic::{AtomicUsize, Ordering};

/// A table plus the metadata it was registered with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisteredConfig {
    /// Symbolic name, e.g. "wds"
    pub name: String,
    /// Where the table came from, e.g. the WDS project file
    pub origin: String,
    pub identifiers: Identifiers,
    pub table: ConfigTable,
}

impl RegisteredConfig {
    pub fn new(
        name: impl Into<String>,
        origin: impl Into<String>,
        identifiers: Identifiers,
        table: ConfigTable,
    ) -> Self {
        Self {
            name: name.into(),
            origin: origin.into(),
            identifiers,
            table,
        }
    }
}

/// Argument to [`ConfigSelector::set_default`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultChoice<'a> {
    /// Registration index; negative values only query
    Level(i64),
    Name(&'a str),
}

impl From<i64> for DefaultChoice<'_> {
    fn from(level: i64) -> Self {
        DefaultChoice::Level(level)
    }
}

impl From<i32> for DefaultChoice<'_> {
    fn from(level: i32) -> Self {
        DefaultChoice::Level(level.into())
    }
}

impl<'a> From<&'a str> for DefaultChoice<'a> {
    fn from(name: &'a str) -> Self {
        DefaultChoice::Name(name)
    }
}

/// Named tables with a swappable default
///
/// Tables are registered up front and never change afterwards. The default
/// is held as a registration index and swapped atomically, so a shared
/// selector can be read and re-pointed from several threads.
#[derive(Debug, Default)]
pub struct ConfigSelector {
    configs: Vec<RegisteredConfig>,
    current: AtomicUsize,
}

impl ConfigSelector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a table under @name and return its level
    ///
    /// Re-registering a name replaces the earlier table at the same level.
    pub fn register(&mut self, config: RegisteredConfig) -> usize {
        if let Some(level) = self.level_of(&config.name) {
            tracing::warn!(
                "Replacing configuration '{}' ({} -> {})",
                config.name,
                self.configs[level].origin,
                config.origin
            );
            self.configs[level] = config;
            return level;
        }

        tracing::debug!("Registered configuration '{}' from {}", config.name, config.origin);
        self.configs.push(config);
        self.configs.len() - 1
    }

    /// Builder-style [`register`](Self::register)
    pub fn with(mut self, config: RegisteredConfig) -> Self {
        self.register(config);
        self
    }

    pub fn len(&self) -> usize {
        self.configs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.configs.is_empty()
    }

    /// Registered names in level order
    pub fn names(&self) -> Vec<&str> {
        self.configs.iter().map(|c| c.name.as_str()).collect()
    }

    /// Level of the current default
    pub fn current_level(&self) -> usize {
        self.current.load(Ordering::Acquire)
    }

    fn level_of(&self, name: &str) -> Option<usize> {
        self.configs.iter().position(|c| c.name == name)
    }

    /// Full registration for @name, or for the current default
    pub fn selection(&self, name: Option<&str>) -> ConfigResult<&RegisteredConfig> {
        match name {
            Some(name) => self
                .level_of(name)
                .map(|level| &self.configs[level])
                .ok_or_else(|| ConfigError::NotFound(name.to_string())),
            None => self
                .configs
                .get(self.current_level())
                .ok_or_else(|| ConfigError::NotFound("<default>".to_string())),
        }
    }

    /// Table registered under @name, or the current default
    pub fn select(&self, name: Option<&str>) -> ConfigResult<&ConfigTable> {
        self.selection(name).map(|c| &c.table)
    }

    /// Entry payloads of several tables, in the order given
    ///
    /// Every name is resolved before any table is walked. The first
    /// malformed table aborts the whole sequence.
    pub fn sequence(&self, names: &[&str]) -> ConfigResult<Vec<&[u8]>> {
        let tables = names
            .iter()
            .map(|name| self.select(Some(*name)))
            .collect::<ConfigResult<Vec<_>>>()?;

        let mut payloads = Vec::new();
        for table in tables {
            for entry in table.entries() {
                payloads.push(entry?.payload);
            }
        }
        Ok(payloads)
    }

    pub fn identifiers(&self, name: Option<&str>) -> ConfigResult<&Identifiers> {
        self.selection(name).map(|c| &c.identifiers)
    }

    /// Origin label of the selected table
    pub fn name(&self, name: Option<&str>) -> ConfigResult<&str> {
        self.selection(name).map(|c| c.origin.as_str())
    }

    /// Point the default at a new table and return the previous level
    ///
    /// A negative level changes nothing and reports the current level.
    pub fn set_default<'a>(&self, choice: impl Into<DefaultChoice<'a>>) -> ConfigResult<usize> {
        let level = match choice.into() {
            DefaultChoice::Level(level) if level < 0 => return Ok(self.current_level()),
            DefaultChoice::Level(level) => {
                let level = usize::try_from(level).unwrap_or(usize::MAX);
                if level >= self.configs.len() {
                    return Err(RangeFault::Level {
                        level,
                        count: self.configs.len(),
                    }
                    .into());
                }
                level
            }
            DefaultChoice::Name(name) => self
                .level_of(name)
                .ok_or_else(|| ConfigError::NotFound(name.to_string()))?,
        };

        let previous = self.current.swap(level, Ordering::AcqRel);
        if previous != level {
            tracing::info!(
                "Default configuration changed from level {} to '{}' (level {})",
                previous,
                self.configs[level].name,
                level
            );
        }
        Ok(previous)
    }
}
