//! The field selector language used to request partial JSON responses.
//!
//! A selector such as `id,name,developer(name),characters/*` names the parts
//! of a response a client wants back. This crate turns the raw selector into a
//! [`FieldSet`] that answers whether a given property path should be kept.
//!
//! ```
//! use partial_response_selector::FieldSet;
//!
//! let fields = FieldSet::try_parse("foo(bar,baz)").unwrap();
//! assert!(fields.matches("foo/bar", false));
//! assert!(fields.matches("foo/baz", false));
//! assert!(!fields.matches("foo/qux", false));
//! ```

pub mod error;
pub mod field;
pub mod field_set;
pub mod parser;
pub mod token;
pub mod tokenizer;

// --- Public API ---
pub use error::SyntaxError;
pub use field::{Field, WILDCARD};
pub use field_set::{FieldMatcher, FieldSet};
pub use parser::{ParseContext, Parser};
pub use token::{Token, TokenKind};
pub use tokenizer::Tokenizer;

/// Parses a raw selector into a [`FieldSet`].
///
/// The value must already be URL-decoded. An empty selector is valid and
/// yields a set that matches nothing.
pub fn parse_selector(raw: &str) -> Result<FieldSet, SyntaxError> {
    FieldSet::try_parse(raw)
}
