/* src/annotations/mod.rs */

//!
//! Immutable collections of annotation descriptors owned by a declaration.

mod target;

pub use target::AnnotationUseSiteTarget;

use std::sync::Arc;

use crate::descriptor::{AnnotationDescriptor, FqName};

/// A descriptor together with the use-site target it was written with.
#[derive(Debug, Clone)]
pub struct AnnotationWithTarget {
	pub annotation: Arc<AnnotationDescriptor>,
	pub target: Option<AnnotationUseSiteTarget>,
}

impl AnnotationWithTarget {
	pub fn new(annotation: Arc<AnnotationDescriptor>, target: Option<AnnotationUseSiteTarget>) -> Self {
		Self { annotation, target }
	}
}

/// The annotations of one declaration or type usage.
///
/// Cloning is cheap and shares the underlying list.
#[derive(Debug, Clone, Default)]
pub struct Annotations {
	entries: Arc<[AnnotationWithTarget]>,
}

impl Annotations {
	pub fn empty() -> Self {
		Self::default()
	}

	/// Builds a collection of annotations without explicit use-site targets.
	pub fn new(annotations: impl IntoIterator<Item = Arc<AnnotationDescriptor>>) -> Self {
		annotations
			.into_iter()
			.map(|annotation| AnnotationWithTarget::new(annotation, None))
			.collect()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// All descriptors, in declaration order, regardless of target.
	pub fn iter(&self) -> impl Iterator<Item = &Arc<AnnotationDescriptor>> {
		self.entries.iter().map(|entry| &entry.annotation)
	}

	pub fn entries(&self) -> &[AnnotationWithTarget] {
		&self.entries
	}

	/// First annotation whose class has the given name.
	pub fn find_annotation(&self, fq_name: &FqName) -> Option<&Arc<AnnotationDescriptor>> {
		self.iter().find(|annotation| annotation.fq_name() == fq_name)
	}

	pub fn has_annotation(&self, fq_name: &FqName) -> bool {
		self.find_annotation(fq_name).is_some()
	}

	/// Entries written with an explicit use-site target.
	pub fn use_site_targeted(&self) -> impl Iterator<Item = &AnnotationWithTarget> {
		self.entries.iter().filter(|entry| entry.target.is_some())
	}

	pub fn with_target(
		&self,
		target: AnnotationUseSiteTarget,
	) -> impl Iterator<Item = &Arc<AnnotationDescriptor>> {
		self.entries
			.iter()
			.filter(move |entry| entry.target == Some(target))
			.map(|entry| &entry.annotation)
	}

	/// A new collection holding `self` followed by `other`.
	pub fn compose(&self, other: &Annotations) -> Annotations {
		if other.is_empty() {
			return self.clone();
		}
		if self.is_empty() {
			return other.clone();
		}
		self.entries.iter().chain(other.entries.iter()).cloned().collect()
	}

	/// True if both collections share the same list.
	pub fn ptr_eq(&self, other: &Self) -> bool {
		Arc::ptr_eq(&self.entries, &other.entries)
	}
}

impl FromIterator<AnnotationWithTarget> for Annotations {
	fn from_iter<I: IntoIterator<Item = AnnotationWithTarget>>(iter: I) -> Self {
		Self {
			entries: iter.into_iter().collect(),
		}
	}
}

impl<'a> IntoIterator for &'a Annotations {
	type Item = &'a AnnotationWithTarget;
	type IntoIter = std::slice::Iter<'a, AnnotationWithTarget>;

	fn into_iter(self) -> Self::IntoIter {
		self.entries.iter()
	}
}
