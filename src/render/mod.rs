/* src/render/mod.rs */

//!
//! Turning descriptors into source-like text.
//!
//! Descriptors never format themselves; they hand off to an
//! [`AnnotationRenderer`]. [`DescriptorRenderer`] is the stock implementation.

mod options;
mod renderer;

pub use options::{NameStyle, RenderOptions};
pub use renderer::DescriptorRenderer;

use crate::annotations::AnnotationUseSiteTarget;
use crate::descriptor::AnnotationDescriptor;

/// Produces display text for an annotation descriptor.
///
/// Implementations must only read the descriptor.
pub trait AnnotationRenderer: Send + Sync {
	/// `target` is `None` when the annotation is rendered on its own rather
	/// than as part of a declaration signature.
	fn render_annotation(
		&self,
		annotation: &AnnotationDescriptor,
		target: Option<AnnotationUseSiteTarget>,
	) -> String;
}
