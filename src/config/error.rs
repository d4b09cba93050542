/* src/config/error.rs */

/// Errors raised while loading renderer configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
	/// Parsing error from a format implementation.
	#[error("parse error: {0}")]
	Parse(String),

	/// No enabled format handles the given extension.
	#[error("unsupported format: {0}")]
	UnsupportedFormat(String),

	/// IO error while reading a config file.
	#[error("io error: {0}")]
	Io(#[from] std::io::Error),
}
