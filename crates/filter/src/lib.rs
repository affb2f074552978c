//! Selective filtering of JSON value trees.
//!
//! The [`TreeFilter`] walks a [`serde_json::Value`] depth first and asks a
//! [`FieldPredicate`] whether each object property path should survive.
//! Properties that are not kept are dropped; objects and arrays that end up
//! empty are dropped as well, except for the root.
//!
//! ```
//! use partial_response_filter::filter;
//! use partial_response_selector::FieldSet;
//! use serde_json::json;
//!
//! let fields = FieldSet::try_parse("Developer(Name)").unwrap();
//! let value = json!({ "Id": 1, "Developer": { "Id": 1, "Name": "Nintendo EAD" } });
//! assert_eq!(
//!     filter(&value, &fields),
//!     json!({ "Developer": { "Name": "Nintendo EAD" } })
//! );
//! ```

pub mod predicate;
pub mod tree;

// --- Public API ---
pub use predicate::FieldPredicate;
pub use tree::{FilterStats, TreeFilter, combine_path, filter};
