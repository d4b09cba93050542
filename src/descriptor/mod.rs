/* src/descriptor/mod.rs */

//!
//! The resolved annotation descriptor and the opaque handles it refers to.

mod annotation;
mod arguments;
mod builder;
mod error;
mod handle;
mod names;
mod source;

pub use annotation::AnnotationDescriptor;
pub use arguments::ValueArguments;
pub use builder::AnnotationDescriptorBuilder;
pub use error::DescriptorError;
pub use handle::{ParameterRef, TypeRef};
pub use names::{FqName, Name};
pub use source::{SourceElement, Span};
