/* src/descriptor/source.rs */

use std::fmt;
use std::ops::Range;
use std::path::Path;
use std::sync::Arc;

/// Byte offsets of a syntax element within its file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
	pub start: usize,
	pub end: usize,
}

impl From<Range<usize>> for Span {
	fn from(range: Range<usize>) -> Self {
		Self {
			start: range.start,
			end: range.end,
		}
	}
}

/// Where a descriptor came from. Only used for diagnostics.
#[derive(Debug, Clone, Default)]
pub enum SourceElement {
	/// Synthesized by the compiler, no location in user input.
	#[default]
	NoSource,
	/// A range inside a source file.
	File { path: Arc<Path>, span: Span },
}

impl SourceElement {
	pub fn file(path: impl AsRef<Path>, span: Range<usize>) -> Self {
		Self::File {
			path: Arc::from(path.as_ref()),
			span: span.into(),
		}
	}

	pub fn is_synthetic(&self) -> bool {
		matches!(self, Self::NoSource)
	}

	pub fn path(&self) -> Option<&Path> {
		match self {
			Self::NoSource => None,
			Self::File { path, .. } => Some(&**path),
		}
	}

	pub fn span(&self) -> Option<Span> {
		match self {
			Self::NoSource => None,
			Self::File { span, .. } => Some(*span),
		}
	}
}

impl fmt::Display for SourceElement {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::NoSource => f.write_str("<no source>"),
			Self::File { path, span } => {
				write!(f, "{}:{}..{}", path.display(), span.start, span.end)
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_no_source() {
		let source = SourceElement::NoSource;
		assert!(source.is_synthetic());
		assert!(source.path().is_none());
		assert!(source.span().is_none());
		assert_eq!(source.to_string(), "<no source>");
	}

	#[test]
	fn test_file_source() {
		let source = SourceElement::file("src/main.kt", 10..24);
		assert!(!source.is_synthetic());
		assert_eq!(source.path(), Some(Path::new("src/main.kt")));
		assert_eq!(source.span(), Some(Span { start: 10, end: 24 }));
		assert_eq!(source.to_string(), "src/main.kt:10..24");
	}
}
