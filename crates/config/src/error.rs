//! Error types for settings parsing.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when loading settings.
#[derive(Debug, Error)]
pub enum ConfigError {
	/// Error parsing KDL syntax.
	#[error("KDL parse error: {0}")]
	Kdl(#[from] kdl::KdlError),

	/// Error reading the settings file.
	#[error("I/O error reading {path}: {error}")]
	Io {
		/// Path to the file that failed to read.
		path: PathBuf,
		/// The underlying I/O error.
		error: std::io::Error,
	},

	/// The open-item limit is not a positive integer.
	#[error("invalid open-item-limit: {0}")]
	InvalidLimit(String),
}

/// Result type for settings operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
