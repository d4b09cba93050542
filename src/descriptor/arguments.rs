/* src/descriptor/arguments.rs */

use std::collections::HashMap;
use std::sync::Arc;

use indexmap::IndexMap;

use super::ParameterRef;
use crate::constant::ConstantValue;

/// Frozen, read-only mapping from annotation parameters to their resolved values.
///
/// Built once by copying the caller's mapping; there is no way to mutate it
/// afterwards. Cloning shares the same frozen data. Iteration follows the
/// order in which the entries were supplied.
#[derive(Debug, Clone, Default)]
pub struct ValueArguments {
	inner: Arc<IndexMap<ParameterRef, ConstantValue>>,
}

impl ValueArguments {
	/// An empty mapping, for annotations without parameters.
	pub fn empty() -> Self {
		Self::default()
	}

	pub fn get(&self, parameter: &ParameterRef) -> Option<&ConstantValue> {
		self.inner.get(parameter)
	}

	/// Looks a value up by parameter name.
	pub fn get_by_name(&self, name: &str) -> Option<&ConstantValue> {
		self.inner
			.iter()
			.find(|(parameter, _)| parameter.name().as_str() == name)
			.map(|(_, value)| value)
	}

	pub fn contains(&self, parameter: &ParameterRef) -> bool {
		self.inner.contains_key(parameter)
	}

	pub fn len(&self) -> usize {
		self.inner.len()
	}

	pub fn is_empty(&self) -> bool {
		self.inner.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = (&ParameterRef, &ConstantValue)> {
		self.inner.iter()
	}

	pub fn parameters(&self) -> impl Iterator<Item = &ParameterRef> {
		self.inner.keys()
	}

	pub fn values(&self) -> impl Iterator<Item = &ConstantValue> {
		self.inner.values()
	}

	/// Returns an owned copy. Changes to the copy are not seen by this view.
	pub fn to_map(&self) -> IndexMap<ParameterRef, ConstantValue> {
		(*self.inner).clone()
	}

	/// True if both views share the same frozen data.
	pub fn ptr_eq(&self, other: &Self) -> bool {
		Arc::ptr_eq(&self.inner, &other.inner)
	}
}

impl<'a> IntoIterator for &'a ValueArguments {
	type Item = (&'a ParameterRef, &'a ConstantValue);
	type IntoIter = indexmap::map::Iter<'a, ParameterRef, ConstantValue>;

	fn into_iter(self) -> Self::IntoIter {
		self.inner.iter()
	}
}

impl FromIterator<(ParameterRef, ConstantValue)> for ValueArguments {
	fn from_iter<I: IntoIterator<Item = (ParameterRef, ConstantValue)>>(iter: I) -> Self {
		Self {
			inner: Arc::new(iter.into_iter().collect()),
		}
	}
}

impl<'a> FromIterator<(&'a ParameterRef, &'a ConstantValue)> for ValueArguments {
	fn from_iter<I: IntoIterator<Item = (&'a ParameterRef, &'a ConstantValue)>>(iter: I) -> Self {
		iter.into_iter()
			.map(|(parameter, value)| (parameter.clone(), value.clone()))
			.collect()
	}
}

impl From<IndexMap<ParameterRef, ConstantValue>> for ValueArguments {
	fn from(map: IndexMap<ParameterRef, ConstantValue>) -> Self {
		Self {
			inner: Arc::new(map),
		}
	}
}

impl From<&IndexMap<ParameterRef, ConstantValue>> for ValueArguments {
	fn from(map: &IndexMap<ParameterRef, ConstantValue>) -> Self {
		map.iter().collect()
	}
}

impl From<HashMap<ParameterRef, ConstantValue>> for ValueArguments {
	fn from(map: HashMap<ParameterRef, ConstantValue>) -> Self {
		map.into_iter().collect()
	}
}

impl From<&HashMap<ParameterRef, ConstantValue>> for ValueArguments {
	fn from(map: &HashMap<ParameterRef, ConstantValue>) -> Self {
		map.iter().collect()
	}
}

impl From<Vec<(ParameterRef, ConstantValue)>> for ValueArguments {
	fn from(entries: Vec<(ParameterRef, ConstantValue)>) -> Self {
		entries.into_iter().collect()
	}
}
