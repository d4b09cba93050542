/* src/descriptor/annotation.rs */

use std::fmt;

use super::{
	AnnotationDescriptorBuilder, DescriptorError, FqName, SourceElement, TypeRef, ValueArguments,
};
use crate::annotations::AnnotationUseSiteTarget;
use crate::constant::ConstantValue;
use crate::render::{AnnotationRenderer, DescriptorRenderer};

/// A fully resolved application of an annotation.
///
/// Immutable once built. Share it with `Arc`; equality is identity
/// (`Arc::ptr_eq`), there is no structural comparison.
#[derive(Debug)]
pub struct AnnotationDescriptor {
	annotation_type: TypeRef,
	value_arguments: ValueArguments,
	source: SourceElement,
}

impl AnnotationDescriptor {
	/// Creates a descriptor, taking a frozen copy of `value_arguments`.
	pub fn new(
		annotation_type: TypeRef,
		value_arguments: impl Into<ValueArguments>,
		source: SourceElement,
	) -> Self {
		Self {
			annotation_type,
			value_arguments: value_arguments.into(),
			source,
		}
	}

	/// Like [`new`](Self::new), but for callers whose inputs may be absent.
	///
	/// Fails with [`DescriptorError::InvalidArgument`] naming the first missing input.
	pub fn try_new<A>(
		annotation_type: Option<TypeRef>,
		value_arguments: Option<A>,
		source: Option<SourceElement>,
	) -> Result<Self, DescriptorError>
	where
		A: Into<ValueArguments>,
	{
		let annotation_type = annotation_type.ok_or_else(|| missing("annotation_type"))?;
		let value_arguments = value_arguments.ok_or_else(|| missing("value_arguments"))?;
		let source = source.ok_or_else(|| missing("source"))?;

		Ok(Self::new(annotation_type, value_arguments, source))
	}

	pub fn builder() -> AnnotationDescriptorBuilder {
		AnnotationDescriptorBuilder::new()
	}

	pub fn annotation_type(&self) -> &TypeRef {
		&self.annotation_type
	}

	/// Read-only view of the resolved arguments.
	pub fn value_arguments(&self) -> &ValueArguments {
		&self.value_arguments
	}

	pub fn source(&self) -> &SourceElement {
		&self.source
	}

	/// Fully qualified name of the annotation class.
	pub fn fq_name(&self) -> &FqName {
		self.annotation_type.fq_name()
	}

	/// Looks up an argument by parameter name.
	pub fn argument(&self, name: &str) -> Option<&ConstantValue> {
		self.value_arguments.get_by_name(name)
	}

	/// Renders this descriptor through `renderer`, returning its output unchanged.
	pub fn render(
		&self,
		renderer: &dyn AnnotationRenderer,
		target: Option<AnnotationUseSiteTarget>,
	) -> String {
		renderer.render_annotation(self, target)
	}
}

impl fmt::Display for AnnotationDescriptor {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.render(DescriptorRenderer::fq_names_in_types(), None))
	}
}

pub(crate) fn missing(argument: &'static str) -> DescriptorError {
	#[cfg(feature = "logging")]
	log::debug!("rejected annotation descriptor: {argument} is absent");

	DescriptorError::InvalidArgument { argument }
}
