/* src/descriptor/names.rs */

use std::fmt;
use std::sync::Arc;

/// A simple (unqualified) identifier, e.g. a parameter or enum entry name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Name(Arc<str>);

impl Name {
	pub fn new(name: impl Into<Arc<str>>) -> Self {
		Self(name.into())
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl fmt::Display for Name {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl From<&str> for Name {
	fn from(name: &str) -> Self {
		Self::new(name)
	}
}

/// A dot-separated fully qualified name, e.g. `kotlin.Deprecated`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FqName(Arc<str>);

impl FqName {
	pub fn new(fq_name: impl Into<Arc<str>>) -> Self {
		Self(fq_name.into())
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}

	/// Last segment of the name.
	pub fn short_name(&self) -> &str {
		match self.0.rfind('.') {
			Some(pos) => &self.0[pos + 1..],
			None => &self.0,
		}
	}

	/// Everything before the last segment, or `None` for a top-level name.
	pub fn parent(&self) -> Option<FqName> {
		self.0.rfind('.').map(|pos| FqName::new(&self.0[..pos]))
	}

	/// Appends a segment.
	pub fn child(&self, name: &Name) -> FqName {
		if self.0.is_empty() {
			FqName::new(name.as_str())
		} else {
			FqName::new(format!("{}.{}", self.0, name))
		}
	}
}

impl fmt::Display for FqName {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl From<&str> for FqName {
	fn from(fq_name: &str) -> Self {
		Self::new(fq_name)
	}
}
