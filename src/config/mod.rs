/* src/config/mod.rs */

//!
//! Loading [`RenderOptions`] from configuration files.

mod error;
pub mod format;

pub use error::ConfigError;
pub use format::AnyFormat;

use std::path::Path;

use serde::de::DeserializeOwned;

use crate::render::RenderOptions;

/// Parser that turns raw bytes into a structured value.
pub trait Format: Send + Sync {
	/// File extensions handled by this format.
	fn extensions(&self) -> &'static [&'static str];

	fn parse<T: DeserializeOwned>(&self, input: &[u8]) -> Result<T, ConfigError>;
}

impl RenderOptions {
	/// Parses options from `input`. Missing fields take their defaults.
	pub fn load<F: Format>(format: &F, input: &[u8]) -> Result<Self, ConfigError> {
		let options = format.parse::<RenderOptions>(input)?;

		#[cfg(feature = "logging")]
		log::debug!("loaded render options: {options:?}");

		Ok(options)
	}

	/// Reads and parses a file, choosing the format from its extension.
	pub fn load_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
		let path = path.as_ref();
		let ext = path
			.extension()
			.and_then(|ext| ext.to_str())
			.ok_or_else(|| ConfigError::UnsupportedFormat(path.display().to_string()))?;
		let format = AnyFormat::from_extension(ext)?;
		let input = std::fs::read(path)?;

		Self::load(&format, &input)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_unknown_extension() {
		let err = AnyFormat::from_extension("ini").unwrap_err();
		assert!(matches!(err, ConfigError::UnsupportedFormat(ext) if ext == "ini"));
	}

	#[test]
	fn test_missing_extension() {
		let err = RenderOptions::load_file("render-options").unwrap_err();
		assert!(matches!(err, ConfigError::UnsupportedFormat(_)));
	}

	#[cfg(feature = "json")]
	#[test]
	fn test_extension_lookup_ignores_case() {
		assert_eq!(AnyFormat::from_extension("JSON").unwrap(), AnyFormat::Json);
	}
}
