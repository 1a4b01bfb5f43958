//! Settings loading for the per-group open-item limit.
//!
//! One KDL file, one option:
//!
//! ```kdl
//! options {
//!     open-item-limit 50
//! }
//! ```
//!
//! The limit is read once at startup and fixed for the life of the process.
//! A missing or malformed settings file never stops the engine;
//! [`Config::load_or_default`] falls back to [`DEFAULT_OPEN_ITEM_LIMIT`].

pub mod error;

use std::path::Path;

use tracing::{debug, warn};

pub use error::{ConfigError, Result};

/// Built-in per-group open-item limit.
pub const DEFAULT_OPEN_ITEM_LIMIT: usize = 50;

/// Parsed engine settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
	/// Maximum number of simultaneously open items per group.
	pub open_item_limit: usize,
}

impl Default for Config {
	fn default() -> Self {
		Self {
			open_item_limit: DEFAULT_OPEN_ITEM_LIMIT,
		}
	}
}

impl Config {
	/// Parse a KDL string into a [`Config`].
	///
	/// Options not present in the document keep their defaults.
	pub fn parse(input: &str) -> Result<Self> {
		let doc: kdl::KdlDocument = input.parse()?;
		let mut config = Config::default();

		if let Some(options) = doc.get("options").and_then(|n| n.children())
			&& let Some(node) = options.get("open-item-limit")
		{
			let value = node
				.get(0)
				.and_then(|v| v.as_integer())
				.ok_or_else(|| ConfigError::InvalidLimit(node.to_string().trim().to_string()))?;
			config.open_item_limit = usize::try_from(value)
				.ok()
				.filter(|&limit| limit > 0)
				.ok_or_else(|| ConfigError::InvalidLimit(value.to_string()))?;
		}

		Ok(config)
	}

	/// Load settings from a file.
	pub fn load(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
			path: path.to_path_buf(),
			error: e,
		})?;
		Self::parse(&content)
	}

	/// Load settings, falling back to defaults on any failure.
	///
	/// An absent file is the normal first-run state; anything else is worth
	/// a warning. Neither is fatal.
	pub fn load_or_default(path: impl AsRef<Path>) -> Self {
		let path = path.as_ref();
		match Self::load(path) {
			Ok(config) => config,
			Err(ConfigError::Io { error, .. }) if error.kind() == std::io::ErrorKind::NotFound => {
				debug!(path = %path.display(), "no settings file, using defaults");
				Self::default()
			}
			Err(e) => {
				warn!(path = %path.display(), error = %e, "failed to load settings, using defaults");
				Self::default()
			}
		}
	}
}
