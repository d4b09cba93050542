/* src/lib.rs */

//!
//! Immutable descriptors for resolved annotation applications.
//!
//! - **descriptor**: [`AnnotationDescriptor`](descriptor::AnnotationDescriptor), the
//!   resolved type, frozen value arguments and source of one annotation usage.
//! - **constant**: [`ConstantValue`](constant::ConstantValue), the closed set of
//!   argument value kinds.
//! - **annotations**: [`Annotations`](annotations::Annotations), the immutable
//!   collection a declaration owns.
//! - **render**: the [`AnnotationRenderer`](render::AnnotationRenderer) seam and
//!   the stock [`DescriptorRenderer`](render::DescriptorRenderer).
//! - **config**: loading render options from JSON/TOML.
//!
//! ## Feature Flags
//!
//! - `full`: Enables all features (default).
//! - `config`: Enables the `config` module and serde support for `RenderOptions`.
//! - `json`, `toml`: Config formats.
//! - `logging`: Debug logging through `log`.

pub mod annotations;
pub mod constant;
pub mod descriptor;
pub mod render;

#[cfg(feature = "config")]
pub mod config;

pub use annotations::{AnnotationUseSiteTarget, Annotations};
pub use constant::ConstantValue;
pub use descriptor::{
	AnnotationDescriptor, DescriptorError, FqName, Name, ParameterRef, SourceElement, TypeRef,
	ValueArguments,
};
pub use render::{AnnotationRenderer, DescriptorRenderer, RenderOptions};
