use crate::context::RequestKind;
use std::fmt;

/// Why a request was left without `Access-Control-Allow-*` headers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RejectReason {
    EmptyOrigin,
    OriginNotAllowed { origin: String },
    MethodNotAllowed { method: String },
    HeadersNotAllowed { headers: String },
    /// The origin was accepted but no origins are configured to echo back.
    NoAllowedOrigin,
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectReason::EmptyOrigin => f.write_str("empty origin"),
            RejectReason::OriginNotAllowed { origin } => {
                write!(f, "origin '{origin}' not allowed")
            }
            RejectReason::MethodNotAllowed { method } => {
                write!(f, "method '{method}' not allowed")
            }
            RejectReason::HeadersNotAllowed { headers } => {
                write!(f, "header '{headers}' not allowed")
            }
            RejectReason::NoAllowedOrigin => f.write_str("no allowed origin"),
        }
    }
}

/// Outcome of evaluating one request against the policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Authorized,
    Rejected(RejectReason),
}

impl Verdict {
    pub fn is_authorized(&self) -> bool {
        matches!(self, Verdict::Authorized)
    }

    pub fn reason(&self) -> Option<&RejectReason> {
        match self {
            Verdict::Authorized => None,
            Verdict::Rejected(reason) => Some(reason),
        }
    }
}

/// What [`crate::Cors::serve`] did with a request.
///
/// Informational only: the browser learns the outcome from response headers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorsDecision {
    pub kind: RequestKind,
    pub verdict: Verdict,
    /// Whether the next handler was invoked.
    pub forwarded: bool,
}
