use crate::constants::{header, method};
use std::fmt;

/// Read access to the headers of an already-parsed request.
///
/// Lookups are case-insensitive on the header name.
pub trait RequestHeaders {
    /// First value carried for `name`.
    fn get(&self, name: &str) -> Option<&str>;

    /// Every value carried for `name`, in arrival order.
    fn get_all(&self, name: &str) -> Vec<&str>;
}

/// Whether a request is a browser preflight probe or an actual request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestKind {
    Preflight,
    Actual,
}

impl RequestKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestKind::Preflight => "preflight",
            RequestKind::Actual => "actual",
        }
    }
}

impl fmt::Display for RequestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classifies a request: `OPTIONS` (method names are case-sensitive) carrying both a
/// non-empty `Origin` and a non-empty `Access-Control-Request-Method` is a
/// preflight, anything else is an actual request.
pub fn classify(method: &str, headers: &dyn RequestHeaders) -> RequestKind {
    let present = |name: &str| headers.get(name).is_some_and(|value| !value.is_empty());

    if method == method::OPTIONS
        && present(header::ACCESS_CONTROL_REQUEST_METHOD)
        && present(header::ORIGIN)
    {
        RequestKind::Preflight
    } else {
        RequestKind::Actual
    }
}

/// Borrowed view of the request being evaluated.
#[derive(Clone, Copy)]
pub struct RequestContext<'a> {
    pub method: &'a str,
    pub uri: &'a str,
    pub headers: &'a dyn RequestHeaders,
}

impl<'a> RequestContext<'a> {
    pub fn new(method: &'a str, uri: &'a str, headers: &'a dyn RequestHeaders) -> Self {
        Self {
            method,
            uri,
            headers,
        }
    }

    /// First value of `name`, or the empty string when the header is missing.
    pub fn header(&self, name: &str) -> &'a str {
        self.headers.get(name).unwrap_or_default()
    }

    pub fn header_values(&self, name: &str) -> Vec<&'a str> {
        self.headers.get_all(name)
    }

    pub fn origin(&self) -> &'a str {
        self.header(header::ORIGIN)
    }

    pub fn kind(&self) -> RequestKind {
        classify(self.method, self.headers)
    }
}

impl fmt::Debug for RequestContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestContext")
            .field("method", &self.method)
            .field("uri", &self.uri)
            .field("origin", &self.origin())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "context_test.rs"]
mod context_test;
