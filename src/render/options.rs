/* src/render/options.rs */

#[cfg(feature = "config")]
use serde::{Deserialize, Serialize};

/// How class names are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "config", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "config", serde(rename_all = "snake_case"))]
pub enum NameStyle {
	/// `kotlin.Deprecated`
	#[default]
	FullyQualified,
	/// `Deprecated`
	Short,
}

/// Settings for [`DescriptorRenderer`](super::DescriptorRenderer).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "config", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "config", serde(default))]
pub struct RenderOptions {
	pub name_style: NameStyle,
	/// Sort arguments by parameter name. Otherwise keep resolution order.
	pub sort_arguments: bool,
	/// Print `target:` after `@` when a use-site target is given.
	pub render_use_site_target: bool,
	/// Print `()` for annotations without arguments.
	pub render_empty_parentheses: bool,
}

impl Default for RenderOptions {
	fn default() -> Self {
		Self {
			name_style: NameStyle::FullyQualified,
			sort_arguments: true,
			render_use_site_target: true,
			render_empty_parentheses: false,
		}
	}
}

impl RenderOptions {
	pub fn short_names() -> Self {
		Self {
			name_style: NameStyle::Short,
			..Self::default()
		}
	}
}
