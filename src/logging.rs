use crate::context::RequestKind;
use crate::headers::Header;
use crate::result::RejectReason;
use std::fmt;

/// Diagnostic sink for engine events.
///
/// Implementations must tolerate concurrent calls.
pub trait CorsLogger: Send + Sync {
    fn log(&self, event: &CorsEvent<'_>);
}

impl<F> CorsLogger for F
where
    F: Fn(&CorsEvent<'_>) + Send + Sync,
{
    fn log(&self, event: &CorsEvent<'_>) {
        self(event)
    }
}

/// Structured description of a point in request evaluation.
#[derive(Debug, Clone, Copy)]
pub enum CorsEvent<'a> {
    Request {
        kind: RequestKind,
        method: &'a str,
        uri: &'a str,
        origin: &'a str,
    },
    Aborted {
        kind: RequestKind,
        uri: &'a str,
        reason: &'a RejectReason,
    },
    Authorized {
        kind: RequestKind,
        uri: &'a str,
        headers: &'a [Header],
    },
}

impl<'a> CorsEvent<'a> {
    pub fn kind(&self) -> RequestKind {
        match self {
            CorsEvent::Request { kind, .. }
            | CorsEvent::Aborted { kind, .. }
            | CorsEvent::Authorized { kind, .. } => *kind,
        }
    }

    pub fn uri(&self) -> &'a str {
        match self {
            CorsEvent::Request { uri, .. }
            | CorsEvent::Aborted { uri, .. }
            | CorsEvent::Authorized { uri, .. } => *uri,
        }
    }
}

impl fmt::Display for CorsEvent<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CorsEvent::Request {
                kind,
                method,
                uri,
                origin,
            } => write!(f, "{kind} request: uri={uri} method={method} origin={origin}"),
            CorsEvent::Aborted { kind, uri, reason } => {
                write!(f, "{kind} aborted: {reason} (uri={uri})")
            }
            CorsEvent::Authorized { kind, uri, headers } => {
                write!(f, "{kind} response headers (uri={uri}):")?;
                for header in headers.iter() {
                    write!(f, " [{header}]")?;
                }
                Ok(())
            }
        }
    }
}

/// Forwards events to `tracing` at debug level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLogger;

impl CorsLogger for TracingLogger {
    fn log(&self, event: &CorsEvent<'_>) {
        tracing::debug!(
            target: "cors_gate",
            kind = event.kind().as_str(),
            uri = event.uri(),
            "{event}"
        );
    }
}

#[cfg(test)]
#[path = "logging_test.rs"]
mod logging_test;
