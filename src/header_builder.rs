use crate::constants::header;
use crate::context::RequestContext;
use crate::headers::{Header, HeaderCollection};
use crate::options::CorsOptions;

/// Builds the headers written once a request has passed every check.
pub(crate) struct HeaderBuilder<'a> {
    options: &'a CorsOptions,
}

impl<'a> HeaderBuilder<'a> {
    pub(crate) fn new(options: &'a CorsOptions) -> Self {
        Self { options }
    }

    /// `None` when no origin is configured to echo back.
    pub(crate) fn build_origin_header(&self) -> Option<HeaderCollection> {
        let values = self.options.allowed_origins.header_values()?;
        let mut headers = HeaderCollection::new();
        headers.push(Header::new(header::ACCESS_CONTROL_ALLOW_ORIGIN, values));
        Some(headers)
    }

    /// Mirrors the requested method rather than the allow-list.
    pub(crate) fn build_methods_header(&self, request: &RequestContext<'_>) -> HeaderCollection {
        let mut headers = HeaderCollection::with_estimate(1);
        headers.push(Header::new(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            request.header_values(header::ACCESS_CONTROL_REQUEST_METHOD),
        ));
        headers
    }

    /// Mirrors the requested headers when the request asked for any.
    pub(crate) fn build_allowed_headers(&self, request: &RequestContext<'_>) -> HeaderCollection {
        if request
            .header(header::ACCESS_CONTROL_REQUEST_HEADERS)
            .is_empty()
        {
            return HeaderCollection::with_estimate(0);
        }

        let mut headers = HeaderCollection::with_estimate(1);
        headers.push(Header::new(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            request.header_values(header::ACCESS_CONTROL_REQUEST_HEADERS),
        ));
        headers
    }

    pub(crate) fn build_credentials_header(&self) -> HeaderCollection {
        let mut headers = HeaderCollection::with_estimate(1);
        if self.options.credentials {
            headers.push(Header::new(
                header::ACCESS_CONTROL_ALLOW_CREDENTIALS,
                ["true"],
            ));
        }
        headers
    }

    pub(crate) fn build_max_age_header(&self) -> HeaderCollection {
        let value = if self.options.max_age > 0 {
            self.options.max_age.to_string()
        } else {
            "0".to_string()
        };

        let mut headers = HeaderCollection::with_estimate(1);
        headers.push(Header::new(header::ACCESS_CONTROL_MAX_AGE, [value]));
        headers
    }

    /// Copies the request's own `Access-Control-Expose-Headers` values when
    /// exposed headers are configured at all. The configured list itself is
    /// not written.
    pub(crate) fn build_exposed_headers(&self, request: &RequestContext<'_>) -> HeaderCollection {
        let mut headers = HeaderCollection::with_estimate(1);
        if self.options.exposed_headers.is_some() {
            headers.push(Header::new(
                header::ACCESS_CONTROL_EXPOSE_HEADERS,
                request.header_values(header::ACCESS_CONTROL_EXPOSE_HEADERS),
            ));
        }
        headers
    }
}

#[cfg(test)]
#[path = "header_builder_test.rs"]
mod header_builder_test;
