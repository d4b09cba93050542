/* src/descriptor/handle.rs */

//!
//! Opaque handles produced by the resolver. Both compare and hash by identity:
//! two handles are equal only if they point at the same resolved entity.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use super::{FqName, Name};

#[derive(Debug)]
struct TypeData {
	fq_name: FqName,
	arguments: Vec<TypeRef>,
	nullable: bool,
}

/// Handle to a resolved type.
#[derive(Clone)]
pub struct TypeRef(Arc<TypeData>);

impl TypeRef {
	/// Creates a handle to a non-generic, non-nullable class type.
	pub fn new(fq_name: impl Into<FqName>) -> Self {
		Self::with_arguments(fq_name, Vec::new())
	}

	/// Creates a handle to a generic class type.
	pub fn with_arguments(fq_name: impl Into<FqName>, arguments: Vec<TypeRef>) -> Self {
		Self(Arc::new(TypeData {
			fq_name: fq_name.into(),
			arguments,
			nullable: false,
		}))
	}

	/// Returns a new, distinct handle for the nullable variant of this type.
	pub fn marked_nullable(&self) -> Self {
		Self(Arc::new(TypeData {
			fq_name: self.0.fq_name.clone(),
			arguments: self.0.arguments.clone(),
			nullable: true,
		}))
	}

	pub fn fq_name(&self) -> &FqName {
		&self.0.fq_name
	}

	pub fn arguments(&self) -> &[TypeRef] {
		&self.0.arguments
	}

	pub fn is_marked_nullable(&self) -> bool {
		self.0.nullable
	}
}

impl PartialEq for TypeRef {
	fn eq(&self, other: &Self) -> bool {
		Arc::ptr_eq(&self.0, &other.0)
	}
}

impl Eq for TypeRef {}

impl Hash for TypeRef {
	fn hash<H: Hasher>(&self, state: &mut H) {
		Arc::as_ptr(&self.0).hash(state);
	}
}

impl fmt::Debug for TypeRef {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "TypeRef({}", self.0.fq_name)?;
		if self.0.nullable {
			f.write_str("?")?;
		}
		f.write_str(")")
	}
}

#[derive(Debug)]
struct ParameterData {
	name: Name,
	index: usize,
}

/// Handle to a declared annotation parameter.
#[derive(Clone)]
pub struct ParameterRef(Arc<ParameterData>);

impl ParameterRef {
	pub fn new(name: impl Into<Name>, index: usize) -> Self {
		Self(Arc::new(ParameterData {
			name: name.into(),
			index,
		}))
	}

	pub fn name(&self) -> &Name {
		&self.0.name
	}

	/// Position of the parameter in the annotation's declaration.
	pub fn index(&self) -> usize {
		self.0.index
	}
}

impl PartialEq for ParameterRef {
	fn eq(&self, other: &Self) -> bool {
		Arc::ptr_eq(&self.0, &other.0)
	}
}

impl Eq for ParameterRef {}

impl Hash for ParameterRef {
	fn hash<H: Hasher>(&self, state: &mut H) {
		Arc::as_ptr(&self.0).hash(state);
	}
}

impl fmt::Debug for ParameterRef {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "ParameterRef({}#{})", self.0.name, self.0.index)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::collections::HashSet;

	#[test]
	fn test_type_ref_identity() {
		let a = TypeRef::new("kotlin.Deprecated");
		let b = TypeRef::new("kotlin.Deprecated");
		assert_eq!(a, a.clone());
		assert_ne!(a, b);
		assert_eq!(a.fq_name(), b.fq_name());
	}

	#[test]
	fn test_marked_nullable_is_distinct() {
		let a = TypeRef::new("kotlin.String");
		let n = a.marked_nullable();
		assert!(n.is_marked_nullable());
		assert!(!a.is_marked_nullable());
		assert_ne!(a, n);
	}

	#[test]
	fn test_parameter_ref_hash_by_identity() {
		let p1 = ParameterRef::new("message", 0);
		let p2 = ParameterRef::new("message", 0);
		let mut set = HashSet::new();
		set.insert(p1.clone());
		set.insert(p1.clone());
		set.insert(p2);
		assert_eq!(set.len(), 2);
		assert_eq!(p1.name().as_str(), "message");
		assert_eq!(p1.index(), 0);
	}
}
