/* src/descriptor/builder.rs */

use super::annotation::missing;
use super::{AnnotationDescriptor, DescriptorError, SourceElement, TypeRef, ValueArguments};

/// Builder for [`AnnotationDescriptor`].
///
/// Every input is required; an empty argument mapping counts as present.
#[derive(Debug, Default)]
pub struct AnnotationDescriptorBuilder {
	annotation_type: Option<TypeRef>,
	value_arguments: Option<ValueArguments>,
	source: Option<SourceElement>,
}

impl AnnotationDescriptorBuilder {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn annotation_type(mut self, annotation_type: TypeRef) -> Self {
		self.annotation_type = Some(annotation_type);
		self
	}

	/// Sets the arguments. The mapping is copied immediately.
	pub fn value_arguments(mut self, value_arguments: impl Into<ValueArguments>) -> Self {
		self.value_arguments = Some(value_arguments.into());
		self
	}

	pub fn source(mut self, source: SourceElement) -> Self {
		self.source = Some(source);
		self
	}

	pub fn build(self) -> Result<AnnotationDescriptor, DescriptorError> {
		let annotation_type = self
			.annotation_type
			.ok_or_else(|| missing("annotation_type"))?;
		let value_arguments = self
			.value_arguments
			.ok_or_else(|| missing("value_arguments"))?;
		let source = self.source.ok_or_else(|| missing("source"))?;

		Ok(AnnotationDescriptor::new(
			annotation_type,
			value_arguments,
			source,
		))
	}
}
