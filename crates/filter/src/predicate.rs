//! The decision seam between the tree walk and the selector.
use partial_response_selector::{FieldMatcher, FieldSet};

/// Decides whether the property at `path` is kept.
///
/// Paths are `/`-joined property names from the root, e.g. `Characters/Id`.
/// Array indices never appear in a path. Implementations must give the same
/// answer for the same path within one filtering call.
pub trait FieldPredicate {
    fn should_keep(&self, path: &str) -> bool;
}

impl<F> FieldPredicate for F
where
    F: Fn(&str) -> bool,
{
    fn should_keep(&self, path: &str) -> bool {
        self(path)
    }
}

/// Case-sensitive matching against the set.
impl FieldPredicate for FieldSet {
    fn should_keep(&self, path: &str) -> bool {
        self.matches(path, false)
    }
}

impl FieldPredicate for FieldMatcher<'_> {
    fn should_keep(&self, path: &str) -> bool {
        self.matches(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_predicate() {
        let predicate = |path: &str| path.starts_with("foo");
        assert!(predicate.should_keep("foo/bar"));
        assert!(!predicate.should_keep("qux"));
    }

    #[test]
    fn test_field_set_predicate_is_case_sensitive() {
        let fields = FieldSet::try_parse("Id").unwrap();
        assert!(fields.should_keep("Id"));
        assert!(!fields.should_keep("id"));
        assert!(fields.matcher(true).should_keep("id"));
    }

    #[test]
    fn test_trait_object_predicate() {
        let fields = FieldSet::try_parse("a").unwrap();
        let predicate: &dyn FieldPredicate = &fields;
        assert!(predicate.should_keep("a"));
    }
}
