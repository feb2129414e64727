//! Errors raised while loading manifest options.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while reading a manifest options file.
#[derive(Debug, Error)]
pub enum ConfigError {
  /// Failed to read the options file from disk.
  #[error("failed to read {}: {source}", .path.display())]
  Io {
    /// Path that caused the error.
    path: PathBuf,
    /// Source I/O error.
    source: std::io::Error,
  },
  /// Failed to parse a JSON options file.
  #[error("failed to parse {}: {source}", .path.display())]
  Parse {
    /// Path that caused the error.
    path: PathBuf,
    /// Source parse error.
    source: serde_json::Error,
  },
  /// Failed to parse a YAML options file.
  #[error("failed to parse {}: {source}", .path.display())]
  ParseYaml {
    /// Path that caused the error.
    path: PathBuf,
    /// Source parse error.
    source: serde_yaml::Error,
  },
}
