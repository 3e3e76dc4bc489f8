//! Runtime configuration for choosing a dataset source.
//! Environment first, then command-line overrides on top.

use std::path::PathBuf;

use crate::source::{DatasetSource, DirectorySource, EmbeddedSource};

pub const DATA_DIR_ENV: &str = "RELAZIONI_DATA_DIR";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistryConfig {
    /// Directory holding the three JSON documents. `None` means embedded data.
    pub data_dir: Option<PathBuf>,
}

impl RegistryConfig {
    pub fn from_env() -> Self {
        Self::from_env_value(std::env::var(DATA_DIR_ENV).ok())
    }

    fn from_env_value(value: Option<String>) -> Self {
        let data_dir = value
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);
        Self { data_dir }
    }

    pub fn with_data_dir(mut self, dir: Option<PathBuf>) -> Self {
        if dir.is_some() { self.data_dir = dir; }
        self
    }

    pub fn source(&self) -> Box<dyn DatasetSource> {
        match &self.data_dir {
            Some(dir) => Box::new(DirectorySource::new(dir.clone())),
            None => Box::new(EmbeddedSource),
        }
    }
}
