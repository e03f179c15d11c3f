//! Configuration loading errors.

use thiserror::Error;

/// Config load error
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigLoadError {
    /// The file could not be read
    #[error("IO error: {0}")]
    Io(String),
    /// The YAML did not match the expected sections
    #[error("Parse error: {0}")]
    Parse(String),
}
