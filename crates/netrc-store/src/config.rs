//! Store configuration
//!
//! Controls which files are treated as encrypted, the mode new files are
//! written with, and how the gpg collaborator is invoked. Can be loaded from
//! TOML; every field has a default.
//!
//! ```toml
//! encrypted_extension = "gpg"
//! file_mode = 0o600
//!
//! [gpg]
//! program = "gpg2"
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// How `NetrcFile` reads and writes files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Extension (without the dot) that marks an encrypted store.
    pub encrypted_extension: String,
    /// Permission bits for written files; ignored on non-Unix platforms.
    pub file_mode: u32,
    pub gpg: GpgConfig,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            encrypted_extension: "gpg".to_string(),
            file_mode: 0o600,
            gpg: GpgConfig::default(),
        }
    }
}

impl StoreConfig {
    pub fn from_toml_str(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::from_toml_str(&content).map_err(|e| Error::ConfigParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Whether `path` names an encrypted store.
    pub fn is_encrypted(&self, path: &Path) -> bool {
        path.extension()
            .is_some_and(|ext| ext == self.encrypted_extension.as_str())
    }
}

/// Invocation of the external gpg program.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GpgConfig {
    pub program: String,
    pub decrypt_args: Vec<String>,
    pub encrypt_args: Vec<String>,
}

impl Default for GpgConfig {
    fn default() -> Self {
        Self {
            program: "gpg".to_string(),
            decrypt_args: ["--batch", "--quiet", "--decrypt"].map(String::from).to_vec(),
            encrypt_args: ["-a", "--batch", "--default-recipient-self", "-e"]
                .map(String::from)
                .to_vec(),
        }
    }
}
