/* src/descriptor/error.rs */

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DescriptorError {
	/// A required construction input was absent.
	///
	/// This is a resolver contract violation, not a user-facing compile error.
	#[error("invalid argument: {argument} is required")]
	InvalidArgument { argument: &'static str },
}
