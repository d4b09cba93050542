/* tests/descriptor_tests.rs */

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use annodesc::{
	AnnotationDescriptor, AnnotationRenderer, AnnotationUseSiteTarget, ConstantValue,
	DescriptorError, ParameterRef, SourceElement, TypeRef, ValueArguments,
};

fn deprecated_type() -> TypeRef {
	TypeRef::new("kotlin.Deprecated")
}

#[test]
fn test_single_argument_synthetic_source() {
	let message = ParameterRef::new("message", 0);
	let mut args = HashMap::new();
	args.insert(message.clone(), ConstantValue::string("old"));

	let descriptor = AnnotationDescriptor::new(deprecated_type(), &args, SourceElement::NoSource);

	let view = descriptor.value_arguments();
	assert_eq!(view.len(), 1);
	let (key, value) = view.iter().next().unwrap();
	assert_eq!(key, &message);
	assert_eq!(value, &ConstantValue::string("old"));
	assert!(descriptor.source().is_synthetic());
}

#[test]
fn test_empty_arguments() {
	let descriptor = AnnotationDescriptor::builder()
		.annotation_type(TypeRef::new("kotlin.jvm.JvmStatic"))
		.value_arguments(HashMap::<ParameterRef, ConstantValue>::new())
		.source(SourceElement::NoSource)
		.build()
		.unwrap();

	assert!(descriptor.value_arguments().is_empty());
	assert_eq!(descriptor.value_arguments().iter().count(), 0);
}

#[test]
fn test_missing_annotation_type() {
	let result = AnnotationDescriptor::builder()
		.value_arguments(ValueArguments::empty())
		.source(SourceElement::NoSource)
		.build();

	match result {
		Err(DescriptorError::InvalidArgument { argument }) => assert_eq!(argument, "annotation_type"),
		Ok(_) => panic!("Expected InvalidArgument"),
	}
}

#[test]
fn test_missing_inputs_with_try_new() {
	let missing_args = AnnotationDescriptor::try_new(
		Some(deprecated_type()),
		None::<ValueArguments>,
		Some(SourceElement::NoSource),
	);
	assert!(matches!(
		missing_args,
		Err(DescriptorError::InvalidArgument {
			argument: "value_arguments"
		})
	));

	let missing_source =
		AnnotationDescriptor::try_new(Some(deprecated_type()), Some(ValueArguments::empty()), None);
	assert!(matches!(
		missing_source,
		Err(DescriptorError::InvalidArgument { argument: "source" })
	));
}

#[test]
fn test_caller_mutation_after_construction() {
	let message = ParameterRef::new("message", 0);
	let level = ParameterRef::new("level", 2);
	let mut args = HashMap::new();
	args.insert(message.clone(), ConstantValue::string("old"));

	let descriptor = AnnotationDescriptor::new(deprecated_type(), &args, SourceElement::NoSource);

	args.insert(
		level.clone(),
		ConstantValue::enum_entry("kotlin.DeprecationLevel", "ERROR"),
	);
	args.insert(message.clone(), ConstantValue::string("changed"));
	assert_eq!(args.len(), 2);

	let view = descriptor.value_arguments();
	assert_eq!(view.len(), 1);
	assert!(!view.contains(&level));
	assert_eq!(view.get(&message), Some(&ConstantValue::string("old")));
}

#[test]
fn test_owned_copy_does_not_write_through() {
	let message = ParameterRef::new("message", 0);
	let descriptor = AnnotationDescriptor::new(
		deprecated_type(),
		vec![(message.clone(), ConstantValue::string("old"))],
		SourceElement::NoSource,
	);

	let mut copy = descriptor.value_arguments().to_map();
	copy.insert(ParameterRef::new("extra", 1), ConstantValue::Int(1));
	copy.shift_remove(&message);

	assert_eq!(descriptor.value_arguments().len(), 1);
	assert_eq!(
		descriptor.argument("message"),
		Some(&ConstantValue::string("old"))
	);
}

#[test]
fn test_accessors_are_referentially_stable() {
	let descriptor = AnnotationDescriptor::new(
		deprecated_type(),
		vec![(ParameterRef::new("message", 0), ConstantValue::string("old"))],
		SourceElement::file("src/lib.kt", 3..20),
	);

	assert!(std::ptr::eq(descriptor.annotation_type(), descriptor.annotation_type()));
	assert!(std::ptr::eq(descriptor.value_arguments(), descriptor.value_arguments()));
	assert!(std::ptr::eq(descriptor.source(), descriptor.source()));
	assert_eq!(descriptor.annotation_type(), &descriptor.annotation_type().clone());
	assert!(
		descriptor
			.value_arguments()
			.ptr_eq(&descriptor.value_arguments().clone())
	);
}

#[test]
fn test_insertion_order_is_preserved() {
	let names = ["since", "message", "level", "replaceWith"];
	let entries: Vec<_> = names
		.iter()
		.enumerate()
		.map(|(i, name)| (ParameterRef::new(*name, i), ConstantValue::Int(i as i32)))
		.collect();

	let descriptor = AnnotationDescriptor::new(deprecated_type(), entries, SourceElement::NoSource);

	let seen: Vec<_> = descriptor
		.value_arguments()
		.parameters()
		.map(|p| p.name().as_str())
		.collect();
	assert_eq!(seen, names);
}

struct CountingRenderer {
	calls: AtomicUsize,
	seen: Mutex<Vec<(usize, Option<AnnotationUseSiteTarget>)>>,
}

impl AnnotationRenderer for CountingRenderer {
	fn render_annotation(
		&self,
		annotation: &AnnotationDescriptor,
		target: Option<AnnotationUseSiteTarget>,
	) -> String {
		self.calls.fetch_add(1, Ordering::SeqCst);
		self.seen
			.lock()
			.unwrap()
			.push((annotation as *const AnnotationDescriptor as usize, target));
		format!("<rendered {}>", annotation.fq_name())
	}
}

#[test]
fn test_render_delegates_once() {
	let descriptor = AnnotationDescriptor::new(
		deprecated_type(),
		vec![(ParameterRef::new("message", 0), ConstantValue::string("old"))],
		SourceElement::NoSource,
	);
	let renderer = CountingRenderer {
		calls: AtomicUsize::new(0),
		seen: Mutex::new(Vec::new()),
	};

	let text = descriptor.render(&renderer, None);
	assert_eq!(text, "<rendered kotlin.Deprecated>");
	assert_eq!(renderer.calls.load(Ordering::SeqCst), 1);

	let text = descriptor.render(&renderer, Some(AnnotationUseSiteTarget::Property));
	assert_eq!(text, "<rendered kotlin.Deprecated>");
	assert_eq!(renderer.calls.load(Ordering::SeqCst), 2);

	let address = &descriptor as *const AnnotationDescriptor as usize;
	let seen = renderer.seen.lock().unwrap();
	assert_eq!(
		*seen,
		[
			(address, None),
			(address, Some(AnnotationUseSiteTarget::Property))
		]
	);
	assert_eq!(descriptor.value_arguments().len(), 1);
	assert_eq!(descriptor.argument("message"), Some(&ConstantValue::string("old")));
}

#[test]
fn test_display_is_idempotent() {
	let descriptor = AnnotationDescriptor::new(
		TypeRef::new("kotlin.Suppress"),
		vec![(
			ParameterRef::new("names", 0),
			ConstantValue::array(vec![
				ConstantValue::string("UNUSED"),
				ConstantValue::string("DEPRECATION"),
			]),
		)],
		SourceElement::NoSource,
	);

	let first = descriptor.to_string();
	assert_eq!(first, "@kotlin.Suppress(names = {\"UNUSED\", \"DEPRECATION\"})");
	assert_eq!(descriptor.to_string(), first);
}

#[test]
fn test_shared_across_threads() {
	let message = ParameterRef::new("message", 0);
	let descriptor = Arc::new(AnnotationDescriptor::new(
		deprecated_type(),
		vec![(message.clone(), ConstantValue::string("old"))],
		SourceElement::NoSource,
	));

	std::thread::scope(|scope| {
		for _ in 0..8 {
			let descriptor = Arc::clone(&descriptor);
			let message = message.clone();
			scope.spawn(move || {
				for _ in 0..100 {
					assert_eq!(
						descriptor.value_arguments().get(&message),
						Some(&ConstantValue::string("old"))
					);
					assert_eq!(descriptor.to_string(), "@kotlin.Deprecated(message = \"old\")");
				}
			});
		}
	});

	assert_eq!(Arc::strong_count(&descriptor), 1);
}

#[test]
fn test_nested_annotation_argument() {
	let replace_with = Arc::new(AnnotationDescriptor::new(
		TypeRef::new("kotlin.ReplaceWith"),
		vec![
			(ParameterRef::new("expression", 0), ConstantValue::string("newApi()")),
			(ParameterRef::new("imports", 1), ConstantValue::array(Vec::new())),
		],
		SourceElement::NoSource,
	));
	let descriptor = AnnotationDescriptor::new(
		deprecated_type(),
		vec![
			(ParameterRef::new("message", 0), ConstantValue::string("use newApi")),
			(
				ParameterRef::new("replaceWith", 1),
				ConstantValue::annotation(Arc::clone(&replace_with)),
			),
		],
		SourceElement::file("Api.kt", 120..190),
	);

	let nested = descriptor
		.argument("replaceWith")
		.and_then(ConstantValue::as_annotation)
		.unwrap();
	assert!(Arc::ptr_eq(nested, &replace_with));
	assert_eq!(
		descriptor.to_string(),
		"@kotlin.Deprecated(message = \"use newApi\", replaceWith = kotlin.ReplaceWith(expression = \"newApi()\", imports = {}))"
	);
}
