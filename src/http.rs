//! Adapter for the [`http`] crate's request and response types.
//!
//! Any framework built on `http` (axum, hyper, tonic) can drive the engine
//! through [`request_context`] and the [`ResponseSink`] implementation for
//! [`http::Response`].

use crate::context::{RequestContext, RequestHeaders};
use crate::cors::Cors;
use crate::response::ResponseSink;
use http::header::VARY;
use http::{HeaderMap, HeaderName, HeaderValue, Request, Response, StatusCode};

/// Header values that are not visible ASCII are treated as absent.
impl RequestHeaders for HeaderMap {
    fn get(&self, name: &str) -> Option<&str> {
        HeaderMap::get(self, name).and_then(|value| value.to_str().ok())
    }

    fn get_all(&self, name: &str) -> Vec<&str> {
        HeaderMap::get_all(self, name)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .collect()
    }
}

/// Writes are skipped for names or values `http` cannot represent.
impl<B: Default> ResponseSink for Response<B> {
    fn header_values(&self, name: &str) -> Vec<String> {
        self.headers()
            .get_all(name)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .map(str::to_string)
            .collect()
    }

    fn append_header(&mut self, name: &str, value: &str) {
        if let (Ok(name), Ok(value)) = (
            HeaderName::from_bytes(name.as_bytes()),
            HeaderValue::from_str(value),
        ) {
            self.headers_mut().append(name, value);
        }
    }

    fn set_header(&mut self, name: &str, values: &[&str]) {
        let Ok(name) = HeaderName::from_bytes(name.as_bytes()) else {
            return;
        };
        let headers = self.headers_mut();
        headers.remove(&name);
        for value in values {
            if let Ok(value) = HeaderValue::from_str(value) {
                headers.append(name.clone(), value);
            }
        }
    }

    fn terminate(&mut self, status: u16) {
        if let Ok(status) = StatusCode::from_u16(status) {
            *self.status_mut() = status;
        }
        *self.body_mut() = B::default();
    }
}

/// Borrows `request` as the engine's view of it.
pub fn request_context<B>(request: &Request<B>) -> RequestContext<'_> {
    let uri = request
        .uri()
        .path_and_query()
        .map(|path_and_query| path_and_query.as_str())
        .unwrap_or_else(|| request.uri().path());

    RequestContext::new(request.method().as_str(), uri, request.headers())
}

/// Copies CORS headers staged before the handler ran into its response.
///
/// `Vary` values are appended; any other header the handler already set wins.
pub fn merge_headers(staged: &HeaderMap, target: &mut HeaderMap) {
    for name in staged.keys() {
        if *name != VARY && target.contains_key(name) {
            continue;
        }
        for value in staged.get_all(name) {
            target.append(name.clone(), value.clone());
        }
    }
}

/// Runs `cors` in front of a synchronous `next` handler.
///
/// A preflight that is not passed through is answered directly with an
/// empty `204` response carrying the CORS headers.
pub fn serve_http<ReqB, ResB, F>(cors: &Cors, request: &Request<ReqB>, next: F) -> Response<ResB>
where
    ResB: Default,
    F: FnOnce(&Request<ReqB>) -> Response<ResB>,
{
    let mut staged = Response::new(ResB::default());
    let decision = cors.serve(&request_context(request), &mut staged, |_| {});
    if !decision.forwarded {
        return staged;
    }

    let mut response = next(request);
    merge_headers(staged.headers(), response.headers_mut());
    response
}

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;
