/* src/config/format/mod.rs */

use super::{ConfigError, Format};
use serde::de::DeserializeOwned;

#[cfg(feature = "json")]
mod json;
#[cfg(feature = "json")]
pub use json::Json;

#[cfg(feature = "toml")]
mod toml;
#[cfg(feature = "toml")]
pub use toml::Toml;

/// Every format enabled at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnyFormat {
	#[cfg(feature = "json")]
	Json,
	#[cfg(feature = "toml")]
	Toml,
}

impl AnyFormat {
	/// Picks the format that handles `ext` (without the leading dot).
	pub fn from_extension(ext: &str) -> Result<Self, ConfigError> {
		let formats: &[AnyFormat] = &[
			#[cfg(feature = "json")]
			Self::Json,
			#[cfg(feature = "toml")]
			Self::Toml,
		];

		formats
			.iter()
			.copied()
			.find(|format| format.extensions().iter().any(|e| e.eq_ignore_ascii_case(ext)))
			.ok_or_else(|| ConfigError::UnsupportedFormat(ext.to_string()))
	}
}

impl Format for AnyFormat {
	fn extensions(&self) -> &'static [&'static str] {
		match self {
			#[cfg(feature = "json")]
			Self::Json => Json.extensions(),
			#[cfg(feature = "toml")]
			Self::Toml => Toml.extensions(),
			#[cfg(not(any(feature = "json", feature = "toml")))]
			_ => unreachable!(),
		}
	}

	fn parse<T: DeserializeOwned>(&self, _input: &[u8]) -> Result<T, ConfigError> {
		match self {
			#[cfg(feature = "json")]
			Self::Json => Json.parse(_input),
			#[cfg(feature = "toml")]
			Self::Toml => Toml.parse(_input),
			#[cfg(not(any(feature = "json", feature = "toml")))]
			_ => unreachable!(),
		}
	}
}
