// src/config.rs
use serde::{Deserialize, Serialize};

/// The query parameter that carries the selector unless configured otherwise.
pub const DEFAULT_QUERY_PARAMETER: &str = "fields";

/// Process-wide settings for partial JSON responses.
///
/// Build it once at startup, from code or from any serde format, and pass it
/// to a [`PartialJsonWriter`](crate::PartialJsonWriter). Missing keys fall back
/// to their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PartialJsonOptions {
    /// Match selector segments against property names case-insensitively.
    pub ignore_case: bool,
    /// Name of the query parameter holding the selector.
    pub query_parameter: String,
    /// Write indented JSON.
    pub pretty: bool,
}

impl Default for PartialJsonOptions {
    fn default() -> Self {
        Self {
            ignore_case: false,
            query_parameter: DEFAULT_QUERY_PARAMETER.to_string(),
            pretty: false,
        }
    }
}

impl PartialJsonOptions {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn with_ignore_case(mut self, ignore_case: bool) -> Self {
        self.ignore_case = ignore_case;
        self
    }

    pub fn with_query_parameter(mut self, name: impl Into<String>) -> Self {
        self.query_parameter = name.into();
        self
    }

    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}
