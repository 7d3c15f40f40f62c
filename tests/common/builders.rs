#![allow(dead_code)]

use cors_gate::constants::{header, method};
use cors_gate::{
    AllowedHeaders, AllowedMethods, AllowedOrigins, Cors, CorsDecision, CorsLogger, CorsOptions,
    HeaderList, MemoryResponse, RequestContext,
};

pub const HANDLER_BODY: &[u8] = b"handler";

#[derive(Default)]
pub struct CorsBuilder {
    options: CorsOptions,
}

impl CorsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn origins<I, S>(mut self, origins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options.allowed_origins = AllowedOrigins::list(origins);
        self
    }

    pub fn methods<I, S>(mut self, methods: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options.allowed_methods = AllowedMethods::list(methods);
        self
    }

    pub fn allowed_headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options.allowed_headers = AllowedHeaders::list(headers);
        self
    }

    pub fn exposed_headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options.exposed_headers = Some(headers.into_iter().map(Into::into).collect());
        self
    }

    pub fn without_exposed_headers(mut self) -> Self {
        self.options.exposed_headers = None;
        self
    }

    pub fn credentials(mut self, enabled: bool) -> Self {
        self.options.credentials = enabled;
        self
    }

    pub fn max_age(mut self, seconds: i64) -> Self {
        self.options.max_age = seconds;
        self
    }

    pub fn preflight_pass(mut self, enabled: bool) -> Self {
        self.options.preflight_pass = enabled;
        self
    }

    pub fn origin_predicate<F>(mut self, predicate: F) -> Self
    where
        F: for<'a> Fn(&RequestContext<'a>, &str) -> bool + Send + Sync + 'static,
    {
        self.options = self.options.with_origin_predicate(predicate);
        self
    }

    pub fn logger<L: CorsLogger + 'static>(mut self, logger: L) -> Self {
        self.options = self.options.with_logger(logger);
        self
    }

    pub fn build(self) -> Cors {
        Cors::new(self.options)
    }
}

/// Outcome of pushing one request through [`Cors::serve`].
#[derive(Debug)]
pub struct Served {
    pub decision: CorsDecision,
    pub response: MemoryResponse,
    pub handler_calls: usize,
}

pub struct RequestBuilder {
    method: String,
    uri: String,
    headers: HeaderList,
    response: MemoryResponse,
}

impl RequestBuilder {
    fn new(method: &str) -> Self {
        Self {
            method: method.to_string(),
            uri: "/".to_string(),
            headers: HeaderList::new(),
            response: MemoryResponse::new(),
        }
    }

    pub fn uri(mut self, uri: impl Into<String>) -> Self {
        self.uri = uri.into();
        self
    }

    pub fn origin(self, origin: impl Into<String>) -> Self {
        self.header(header::ORIGIN, origin)
    }

    pub fn request_method(self, method: impl Into<String>) -> Self {
        self.header(header::ACCESS_CONTROL_REQUEST_METHOD, method)
    }

    pub fn request_headers(self, headers: impl Into<String>) -> Self {
        self.header(header::ACCESS_CONTROL_REQUEST_HEADERS, headers)
    }

    pub fn header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.headers.append(name, value);
        self
    }

    /// Pre-populates a response header, as an earlier layer would.
    pub fn response_header(mut self, name: &str, value: &str) -> Self {
        self.response.headers.append(name, value);
        self
    }

    pub fn serve(self, cors: &Cors) -> Served {
        let RequestBuilder {
            method,
            uri,
            headers,
            mut response,
        } = self;
        let request = RequestContext::new(&method, &uri, &headers);
        let mut handler_calls = 0;

        let decision = cors.serve(&request, &mut response, |response| {
            handler_calls += 1;
            response.write_body(HANDLER_BODY);
        });

        Served {
            decision,
            response,
            handler_calls,
        }
    }
}

pub fn cors() -> CorsBuilder {
    CorsBuilder::new()
}

pub fn preflight_request() -> RequestBuilder {
    RequestBuilder::new(method::OPTIONS)
}

pub fn actual_request(method: &str) -> RequestBuilder {
    RequestBuilder::new(method)
}
