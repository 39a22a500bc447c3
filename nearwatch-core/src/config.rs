//! Configuration for store construction.
//!
//! The only tunable is the unresolved-reference policy: what the linker
//! does with a close approach whose foreign key matches no NEO.

use serde::{Deserialize, Serialize};

use crate::error::{DatabaseError, Result};

/// Top-level store configuration, loadable from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Linker behavior.
    #[serde(default)]
    pub link: LinkConfig,
}

impl DatabaseConfig {
    /// Load configuration from a TOML string.
    ///
    /// # Errors
    /// Returns [`DatabaseError::Config`] if the TOML is invalid.
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        toml::from_str(toml_str).map_err(|e| DatabaseError::Config(e.to_string()))
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| DatabaseError::Config(e.to_string()))?;
        Self::from_toml(&content)
    }
}

/// Linker configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LinkConfig {
    /// What to do with a close approach whose designation matches no NEO.
    #[serde(default)]
    pub policy: LinkPolicy,
}

/// Policy for close approaches whose foreign key resolves to nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkPolicy {
    /// Leave the approach's `neo` handle as `None` and log a warning.
    #[default]
    LeaveUnresolved,
    /// Abort construction with
    /// [`DatabaseError::UnresolvedApproach`] rather than produce a
    /// partially-linked store.
    Fail,
}
