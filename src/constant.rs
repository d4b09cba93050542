/* src/constant.rs */

//!
//! Compile-time constant values carried by annotation arguments.

use std::sync::Arc;

use crate::descriptor::{AnnotationDescriptor, FqName, Name, TypeRef};

/// A resolved, typed constant. The set of kinds is closed.
#[derive(Debug, Clone)]
pub enum ConstantValue {
	Boolean(bool),
	Char(char),
	Byte(i8),
	Short(i16),
	Int(i32),
	Long(i64),
	Float(f32),
	Double(f64),
	String(Arc<str>),
	Null,
	/// Reference to an enum entry, e.g. `DeprecationLevel.ERROR`.
	Enum { class: FqName, entry: Name },
	/// Class literal, e.g. `String::class`.
	Class(TypeRef),
	Array {
		/// Element type, if the resolver knew it.
		element: Option<TypeRef>,
		values: Vec<ConstantValue>,
	},
	/// Annotation used as an argument of another annotation.
	Annotation(Arc<AnnotationDescriptor>),
	/// A constant the evaluator could not compute.
	Error(String),
}

impl ConstantValue {
	pub fn string(value: impl Into<Arc<str>>) -> Self {
		Self::String(value.into())
	}

	pub fn enum_entry(class: impl Into<FqName>, entry: impl Into<Name>) -> Self {
		Self::Enum {
			class: class.into(),
			entry: entry.into(),
		}
	}

	pub fn array(values: Vec<ConstantValue>) -> Self {
		Self::Array {
			element: None,
			values,
		}
	}

	pub fn annotation(descriptor: impl Into<Arc<AnnotationDescriptor>>) -> Self {
		Self::Annotation(descriptor.into())
	}

	pub fn as_str(&self) -> Option<&str> {
		match self {
			Self::String(value) => Some(value),
			_ => None,
		}
	}

	pub fn as_bool(&self) -> Option<bool> {
		match self {
			Self::Boolean(value) => Some(*value),
			_ => None,
		}
	}

	/// Widens any integral kind to `i64`.
	pub fn as_i64(&self) -> Option<i64> {
		match self {
			Self::Byte(value) => Some(i64::from(*value)),
			Self::Short(value) => Some(i64::from(*value)),
			Self::Int(value) => Some(i64::from(*value)),
			Self::Long(value) => Some(*value),
			_ => None,
		}
	}

	pub fn as_array(&self) -> Option<&[ConstantValue]> {
		match self {
			Self::Array { values, .. } => Some(values),
			_ => None,
		}
	}

	pub fn as_annotation(&self) -> Option<&Arc<AnnotationDescriptor>> {
		match self {
			Self::Annotation(descriptor) => Some(descriptor),
			_ => None,
		}
	}

	pub fn is_null(&self) -> bool {
		matches!(self, Self::Null)
	}

	pub fn is_error(&self) -> bool {
		matches!(self, Self::Error(_))
	}
}

/// Nested annotations compare by identity; everything else by value.
impl PartialEq for ConstantValue {
	fn eq(&self, other: &Self) -> bool {
		use ConstantValue::*;

		match (self, other) {
			(Boolean(a), Boolean(b)) => a == b,
			(Char(a), Char(b)) => a == b,
			(Byte(a), Byte(b)) => a == b,
			(Short(a), Short(b)) => a == b,
			(Int(a), Int(b)) => a == b,
			(Long(a), Long(b)) => a == b,
			(Float(a), Float(b)) => a == b,
			(Double(a), Double(b)) => a == b,
			(String(a), String(b)) => a == b,
			(Null, Null) => true,
			(
				Enum {
					class: c1,
					entry: e1,
				},
				Enum {
					class: c2,
					entry: e2,
				},
			) => c1 == c2 && e1 == e2,
			(Class(a), Class(b)) => a == b,
			(
				Array {
					element: t1,
					values: v1,
				},
				Array {
					element: t2,
					values: v2,
				},
			) => t1 == t2 && v1 == v2,
			(Annotation(a), Annotation(b)) => Arc::ptr_eq(a, b),
			(Error(a), Error(b)) => a == b,
			_ => false,
		}
	}
}

impl From<bool> for ConstantValue {
	fn from(value: bool) -> Self {
		Self::Boolean(value)
	}
}

impl From<i32> for ConstantValue {
	fn from(value: i32) -> Self {
		Self::Int(value)
	}
}

impl From<i64> for ConstantValue {
	fn from(value: i64) -> Self {
		Self::Long(value)
	}
}

impl From<&str> for ConstantValue {
	fn from(value: &str) -> Self {
		Self::string(value)
	}
}
