//! Load and save [`HexMetadata`] as TOML.
//!
//! ```toml
//! size = 32.0
//! pointy_top = false
//! vertical_stretch = 0.75
//! ```
//!
//! Missing keys take their [`Default`] values.

use crate::geometry::{hex::NonFiniteField, HexMetadata};
use std::path::Path;
use thiserror::Error;

/// Parse metadata from a TOML document.
///
/// Every numeric field must be finite; zero and negative values are accepted.
pub fn from_toml_str(data: &str) -> Result<HexMetadata, Error> {
    let metadata: HexMetadata = toml::from_str(data)?;
    metadata.validate()?;
    Ok(metadata)
}

pub fn load(path: impl AsRef<Path>) -> Result<HexMetadata, Error> {
    let path = path.as_ref();
    log::debug!("loading hex metadata from {}", path.display());
    let data = std::fs::read_to_string(path)?;
    from_toml_str(&data)
}

pub fn save(metadata: &HexMetadata, path: impl AsRef<Path>) -> Result<(), Error> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let serialized = toml::to_string_pretty(metadata)?;
    log::debug!("saving hex metadata to {}", path.display());
    std::fs::write(path, serialized.as_bytes()).map_err(Into::into)
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("configuration could not be loaded")]
    CouldNotLoad(#[from] std::io::Error),
    #[error("malformed configuration")]
    Malformed(#[from] toml::de::Error),
    #[error("failed to serialize")]
    CouldNotSerialize(#[from] toml::ser::Error),
    #[error(transparent)]
    NonFinite(#[from] NonFiniteField),
}
