//! Logical operation to HTTP verb translation.
//!
//! The REST API accepts a POST carrying a `_HttpMethod` query parameter when
//! the caller's environment cannot issue PATCH or DELETE directly. The
//! override is part of the wire contract and always travels in the query
//! string, never in the body.

use forcelink_client::RequestMethod;

/// Query parameter naming the semantic verb a POST stands in for.
pub(crate) const METHOD_OVERRIDE_PARAM: &str = "_HttpMethod";

/// The transport verb for a logical operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Verb {
    /// Plain GET (list, get, describe, get-deleted, get-blob).
    Get,
    /// Plain POST (create).
    Post,
    /// POST with `_HttpMethod=PATCH` (update).
    PostAsPatch,
    /// POST with `_HttpMethod=DELETE` (delete).
    PostAsDelete,
}

impl Verb {
    pub(crate) fn method(self) -> RequestMethod {
        match self {
            Verb::Get => RequestMethod::Get,
            Verb::Post | Verb::PostAsPatch | Verb::PostAsDelete => RequestMethod::Post,
        }
    }

    pub(crate) fn override_value(self) -> Option<&'static str> {
        match self {
            Verb::Get | Verb::Post => None,
            Verb::PostAsPatch => Some("PATCH"),
            Verb::PostAsDelete => Some("DELETE"),
        }
    }

    /// Append the method override to a URL, composing with any query
    /// parameters already present without duplicating keys.
    pub(crate) fn apply(self, url: &str) -> String {
        match self.override_value() {
            None => url.to_string(),
            Some(value) => {
                let sep = if url.contains('?') { '&' } else { '?' };
                format!("{url}{sep}{METHOD_OVERRIDE_PARAM}={value}")
            }
        }
    }
}
