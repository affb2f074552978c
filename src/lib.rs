//! Partial JSON responses driven by a field selector.
//!
//! A client asks for part of a resource with a query parameter such as
//! `fields=id,name,developer(name),characters/*`. This crate ties the selector
//! language ([`partial_response_selector`]) and the tree filter
//! ([`partial_response_filter`]) to the two things a web framework hands over:
//! the raw query string and the value to serialise.
//!
//! ## Usage
//!
//! ```
//! use partial_response::{PartialJsonOptions, PartialJsonWriter, PartialRequest};
//! use serde_json::json;
//!
//! let options = PartialJsonOptions::default();
//! let writer = PartialJsonWriter::new(options.clone());
//! let request = PartialRequest::from_query("fields=Id,Developer(Name)", &options);
//!
//! let game = json!({
//!     "Id": 1,
//!     "Name": "Star Fox",
//!     "Developer": { "Id": 1, "Name": "Nintendo EAD" }
//! });
//! let body = writer.to_vec(&game, &request).unwrap();
//! assert_eq!(body, br#"{"Id":1,"Developer":{"Name":"Nintendo EAD"}}"#);
//! ```
//!
//! A malformed selector surfaces as [`PartialResponseError::InvalidSelector`],
//! which the framework layer is expected to turn into a client error.

pub mod config;
pub mod error;
pub mod request;
pub mod writer;

pub use config::{DEFAULT_QUERY_PARAMETER, PartialJsonOptions};
pub use error::PartialResponseError;
pub use request::{PartialRequest, selector_from_query};
pub use writer::{PartialJsonWriter, filter_and_write, filter_value};

// Re-export the core crates' public API.
pub use partial_response_filter::{FieldPredicate, FilterStats, TreeFilter, filter};
pub use partial_response_selector::{Field, FieldSet, SyntaxError, Token, TokenKind};

/// Parses the raw (already URL-decoded) value of the `fields` parameter.
pub fn try_parse_field_selector(raw: &str) -> Result<FieldSet, SyntaxError> {
    FieldSet::try_parse(raw)
}
