/* src/annotations/target.rs */

use std::fmt;

/// Explicit use-site target written before an annotation, e.g. `@field:Inject`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnnotationUseSiteTarget {
	Field,
	File,
	Property,
	PropertyGetter,
	PropertySetter,
	Receiver,
	ConstructorParameter,
	SetterParameter,
}

impl AnnotationUseSiteTarget {
	pub const ALL: [AnnotationUseSiteTarget; 8] = [
		Self::Field,
		Self::File,
		Self::Property,
		Self::PropertyGetter,
		Self::PropertySetter,
		Self::Receiver,
		Self::ConstructorParameter,
		Self::SetterParameter,
	];

	/// The keyword used in source, before the colon.
	pub fn render_name(self) -> &'static str {
		match self {
			Self::Field => "field",
			Self::File => "file",
			Self::Property => "property",
			Self::PropertyGetter => "get",
			Self::PropertySetter => "set",
			Self::Receiver => "receiver",
			Self::ConstructorParameter => "param",
			Self::SetterParameter => "setparam",
		}
	}

	pub fn from_render_name(name: &str) -> Option<Self> {
		Self::ALL.into_iter().find(|target| target.render_name() == name)
	}
}

impl fmt::Display for AnnotationUseSiteTarget {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.render_name())
	}
}
