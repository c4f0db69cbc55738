//! Turning raw test identifiers into readable sentences.

/// Derives display labels from raw class and test identifiers.
///
/// The reporter consults its prettifier only when a test carries no
/// author-supplied label for the slot in question. The identity
/// implementation is [`NoPrettifier`]; hosts plug in their own naming
/// scheme by implementing this trait.
pub trait Prettifier {
    /// Label for the class under test.
    fn prettify_class(&self, class_name: &str) -> String;

    /// Label for a single test.
    fn prettify_test(&self, test_name: &str) -> String;
}

/// A [`Prettifier`] that passes raw identifiers through unchanged.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NoPrettifier;

impl Prettifier for NoPrettifier {
    fn prettify_class(&self, class_name: &str) -> String {
        class_name.to_owned()
    }

    fn prettify_test(&self, test_name: &str) -> String {
        test_name.to_owned()
    }
}
