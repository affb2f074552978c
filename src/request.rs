// src/request.rs
//! Per-request selector resolution.
use crate::config::PartialJsonOptions;
use partial_response_selector::{FieldSet, SyntaxError};
use url::form_urlencoded;

/// Returns the decoded value of the first `parameter` in a URL query string.
///
/// The query may be given with or without its leading `?`.
pub fn selector_from_query(query: &str, parameter: &str) -> Option<String> {
    let query = query.strip_prefix('?').unwrap_or(query);
    form_urlencoded::parse(query.as_bytes())
        .find(|(name, _)| name == parameter)
        .map(|(_, value)| value.into_owned())
}

/// The partial response state of one request.
///
/// No selector means the response is written unfiltered. A handler can also
/// opt a single request out with [`set_bypass`](PartialRequest::set_bypass).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartialRequest {
    selector: Option<String>,
    bypass: bool,
}

impl PartialRequest {
    pub fn new(selector: Option<String>) -> Self {
        Self {
            selector,
            bypass: false,
        }
    }

    /// Reads the selector from the query parameter named in `options`.
    pub fn from_query(query: &str, options: &PartialJsonOptions) -> Self {
        Self::new(selector_from_query(query, &options.query_parameter))
    }

    pub fn selector(&self) -> Option<&str> {
        self.selector.as_deref()
    }

    pub fn set_bypass(&mut self, bypass: bool) {
        self.bypass = bypass;
    }

    pub fn bypass(&self) -> bool {
        self.bypass
    }

    /// Parses the selector, if filtering applies to this request.
    ///
    /// Returns `Ok(None)` when no selector was supplied or the request bypasses
    /// partial responses.
    pub fn fields(&self) -> Result<Option<FieldSet>, SyntaxError> {
        if self.bypass {
            return Ok(None);
        }
        self.selector.as_deref().map(FieldSet::try_parse).transpose()
    }
}
