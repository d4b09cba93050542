/* src/render/renderer.rs */

use std::fmt::Write;
use std::sync::LazyLock;

use super::{AnnotationRenderer, NameStyle, RenderOptions};
use crate::annotations::AnnotationUseSiteTarget;
use crate::constant::ConstantValue;
use crate::descriptor::{AnnotationDescriptor, FqName, TypeRef};

static FQ_NAMES_IN_TYPES: LazyLock<DescriptorRenderer> =
	LazyLock::new(|| DescriptorRenderer::new(RenderOptions::default()));

/// Renders descriptors as annotation syntax: `@field:pkg.Name(arg = value)`.
#[derive(Debug, Clone, Default)]
pub struct DescriptorRenderer {
	options: RenderOptions,
}

impl DescriptorRenderer {
	pub fn new(options: RenderOptions) -> Self {
		Self { options }
	}

	/// Shared renderer printing fully qualified names, used by `Display`.
	pub fn fq_names_in_types() -> &'static DescriptorRenderer {
		&FQ_NAMES_IN_TYPES
	}

	pub fn options(&self) -> &RenderOptions {
		&self.options
	}

	pub fn render_type(&self, ty: &TypeRef) -> String {
		let mut out = String::new();
		self.write_type(&mut out, ty);
		out
	}

	pub fn render_constant(&self, value: &ConstantValue) -> String {
		let mut out = String::new();
		self.write_constant(&mut out, value);
		out
	}

	fn class_name<'a>(&self, fq_name: &'a FqName) -> &'a str {
		match self.options.name_style {
			NameStyle::FullyQualified => fq_name.as_str(),
			NameStyle::Short => fq_name.short_name(),
		}
	}

	fn write_type(&self, out: &mut String, ty: &TypeRef) {
		out.push_str(self.class_name(ty.fq_name()));
		if !ty.arguments().is_empty() {
			out.push('<');
			for (i, argument) in ty.arguments().iter().enumerate() {
				if i > 0 {
					out.push_str(", ");
				}
				self.write_type(out, argument);
			}
			out.push('>');
		}
		if ty.is_marked_nullable() {
			out.push('?');
		}
	}

	fn write_arguments(&self, out: &mut String, annotation: &AnnotationDescriptor) {
		let mut arguments: Vec<(&str, String)> = annotation
			.value_arguments()
			.iter()
			.map(|(parameter, value)| (parameter.name().as_str(), self.render_constant(value)))
			.collect();

		if self.options.sort_arguments {
			arguments.sort_by(|a, b| a.0.cmp(b.0));
		}

		if arguments.is_empty() && !self.options.render_empty_parentheses {
			return;
		}

		out.push('(');
		for (i, (name, value)) in arguments.iter().enumerate() {
			if i > 0 {
				out.push_str(", ");
			}
			let _ = write!(out, "{name} = {value}");
		}
		out.push(')');
	}

	fn write_constant(&self, out: &mut String, value: &ConstantValue) {
		match value {
			ConstantValue::Boolean(v) => {
				let _ = write!(out, "{v}");
			}
			ConstantValue::Char(c) => {
				out.push('\'');
				escape_into(out, *c, '\'');
				out.push('\'');
			}
			ConstantValue::Byte(v) => write_converted(out, &v.to_string(), "toByte"),
			ConstantValue::Short(v) => write_converted(out, &v.to_string(), "toShort"),
			ConstantValue::Int(v) => {
				let _ = write!(out, "{v}");
			}
			ConstantValue::Long(v) => write_converted(out, &v.to_string(), "toLong"),
			ConstantValue::Float(v) if !v.is_finite() => {
				write_non_finite(out, "Float", f64::from(*v));
			}
			ConstantValue::Float(v) => write_converted(out, &format!("{v:?}"), "toFloat"),
			ConstantValue::Double(v) if !v.is_finite() => write_non_finite(out, "Double", *v),
			ConstantValue::Double(v) => {
				let _ = write!(out, "{v:?}");
			}
			ConstantValue::String(s) => write_quoted(out, s),
			ConstantValue::Null => out.push_str("null"),
			ConstantValue::Enum { class, entry } => {
				let _ = write!(out, "{}.{}", self.class_name(class), entry);
			}
			ConstantValue::Class(ty) => {
				self.write_type(out, ty);
				out.push_str("::class");
			}
			ConstantValue::Array { values, .. } => {
				out.push('{');
				for (i, value) in values.iter().enumerate() {
					if i > 0 {
						out.push_str(", ");
					}
					self.write_constant(out, value);
				}
				out.push('}');
			}
			ConstantValue::Annotation(nested) => {
				self.write_type(out, nested.annotation_type());
				self.write_arguments(out, nested);
			}
			ConstantValue::Error(message) => {
				out.push_str("error(");
				write_quoted(out, message);
				out.push(')');
			}
		}
	}
}

impl AnnotationRenderer for DescriptorRenderer {
	fn render_annotation(
		&self,
		annotation: &AnnotationDescriptor,
		target: Option<AnnotationUseSiteTarget>,
	) -> String {
		let mut out = String::from("@");
		if let Some(target) = target
			&& self.options.render_use_site_target
		{
			out.push_str(target.render_name());
			out.push(':');
		}
		self.write_type(&mut out, annotation.annotation_type());
		self.write_arguments(&mut out, annotation);
		out
	}
}

/// Negative operands are parenthesized: `-2.toByte()` would parse as `-(2.toByte())`.
fn write_converted(out: &mut String, literal: &str, conversion: &str) {
	if literal.starts_with('-') {
		let _ = write!(out, "({literal}).{conversion}()");
	} else {
		let _ = write!(out, "{literal}.{conversion}()");
	}
}

fn write_non_finite(out: &mut String, kind: &str, value: f64) {
	let constant = if value.is_nan() {
		"NaN"
	} else if value.is_sign_positive() {
		"POSITIVE_INFINITY"
	} else {
		"NEGATIVE_INFINITY"
	};
	let _ = write!(out, "{kind}.{constant}");
}

fn write_quoted(out: &mut String, s: &str) {
	out.push('"');
	for c in s.chars() {
		escape_into(out, c, '"');
	}
	out.push('"');
}

fn escape_into(out: &mut String, c: char, quote: char) {
	match c {
		'\\' => out.push_str("\\\\"),
		'\n' => out.push_str("\\n"),
		'\r' => out.push_str("\\r"),
		'\t' => out.push_str("\\t"),
		'\u{8}' => out.push_str("\\b"),
		'$' if quote == '"' => out.push_str("\\$"),
		c if c == quote => {
			out.push('\\');
			out.push(c);
		}
		c if c.is_control() => {
			let _ = write!(out, "\\u{:04X}", u32::from(c));
		}
		c => out.push(c),
	}
}
