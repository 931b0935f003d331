//! Configuration loading and validation

mod schema;

pub use schema::*;

use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::info;

use crate::error::{Error, Result};

/// Read and deserialize a YAML file
pub(crate) fn read_yaml<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let contents = std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_yaml::from_str(&contents).map_err(|source| Error::Yaml {
        path: path.to_path_buf(),
        source,
    })
}

/// Load configuration from a YAML file
pub fn load_config(path: &Path) -> Result<InstrumentConfig> {
    let config: InstrumentConfig = read_yaml(path)?;
    config.validate()?;
    info!(path = %path.display(), channels = config.channels.len(), "loaded configuration");
    Ok(config)
}
