use crate::constants::{NO_CONTENT, PREFLIGHT_VARY, header};
use crate::context::{RequestContext, RequestKind};
use crate::header_builder::HeaderBuilder;
use crate::logging::CorsEvent;
use crate::options::{CorsOptions, ValidationError};
use crate::origin::resolve_origin;
use crate::response::ResponseSink;
use crate::result::{CorsDecision, RejectReason, Verdict};

/// CORS decision engine over an immutable [`CorsOptions`].
///
/// Holds no per-request state, so one instance can serve any number of
/// concurrent requests.
#[derive(Clone, Debug)]
pub struct Cors {
    options: CorsOptions,
    preflight_vary: String,
}

impl Default for Cors {
    fn default() -> Self {
        Self::new(CorsOptions::default())
    }
}

impl Cors {
    /// Builds an engine without validating `options`.
    pub fn new(options: CorsOptions) -> Self {
        Self {
            options,
            preflight_vary: PREFLIGHT_VARY.join(", "),
        }
    }

    /// Builds an engine after [`CorsOptions::validate`] accepts `options`.
    pub fn try_new(options: CorsOptions) -> Result<Self, ValidationError> {
        options.validate()?;
        Ok(Self::new(options))
    }

    pub fn options(&self) -> &CorsOptions {
        &self.options
    }

    pub fn classify(&self, request: &RequestContext<'_>) -> RequestKind {
        request.kind()
    }

    pub fn is_origin_allowed(&self, request: &RequestContext<'_>, origin: &str) -> bool {
        resolve_origin(
            &self.options.allowed_origins,
            self.options.origin_predicate.as_deref(),
            request,
            origin,
        )
    }

    /// Evaluates `request`, writes CORS headers to `response` and hands over
    /// to `next` when the request should proceed.
    ///
    /// Preflights end with `204` unless `preflight_pass` is set. Actual requests
    /// always reach `next`; a rejection only withholds the CORS headers.
    pub fn serve<S, F>(
        &self,
        request: &RequestContext<'_>,
        response: &mut S,
        next: F,
    ) -> CorsDecision
    where
        S: ResponseSink + ?Sized,
        F: FnOnce(&mut S),
    {
        let kind = self.classify(request);
        self.log(CorsEvent::Request {
            kind,
            method: request.method,
            uri: request.uri,
            origin: request.origin(),
        });

        let (verdict, forwarded) = match kind {
            RequestKind::Preflight => {
                let verdict = self.preflight(request, response);
                if self.options.preflight_pass {
                    next(response);
                    (verdict, true)
                } else {
                    response.terminate(NO_CONTENT);
                    (verdict, false)
                }
            }
            RequestKind::Actual => {
                let verdict = self.actual(request, response);
                next(response);
                (verdict, true)
            }
        };

        CorsDecision {
            kind,
            verdict,
            forwarded,
        }
    }

    /// Authorizes a preflight and writes its headers.
    ///
    /// `Vary` is extended before any check so caches key rejected preflights
    /// by origin too. Each call appends again.
    pub fn preflight<S>(&self, request: &RequestContext<'_>, response: &mut S) -> Verdict
    where
        S: ResponseSink + ?Sized,
    {
        const KIND: RequestKind = RequestKind::Preflight;

        response.append_header(header::VARY, &self.preflight_vary);

        let origin = request.origin();
        if origin.is_empty() {
            return self.reject(KIND, request, RejectReason::EmptyOrigin);
        }
        if !self.is_origin_allowed(request, origin) {
            return self.reject(
                KIND,
                request,
                RejectReason::OriginNotAllowed {
                    origin: origin.to_string(),
                },
            );
        }

        let requested_method = request.header(header::ACCESS_CONTROL_REQUEST_METHOD);
        if !self.options.allowed_methods.allows_method(requested_method) {
            return self.reject(
                KIND,
                request,
                RejectReason::MethodNotAllowed {
                    method: requested_method.to_string(),
                },
            );
        }

        let requested_headers = request.header(header::ACCESS_CONTROL_REQUEST_HEADERS);
        if !self
            .options
            .allowed_headers
            .allows_headers(requested_headers)
        {
            return self.reject(
                KIND,
                request,
                RejectReason::HeadersNotAllowed {
                    headers: requested_headers.to_string(),
                },
            );
        }

        let builder = HeaderBuilder::new(&self.options);
        let Some(mut headers) = builder.build_origin_header() else {
            return self.reject(KIND, request, RejectReason::NoAllowedOrigin);
        };
        headers.extend(builder.build_methods_header(request));
        headers.extend(builder.build_allowed_headers(request));
        headers.extend(builder.build_credentials_header());
        headers.extend(builder.build_max_age_header());
        headers.extend(builder.build_exposed_headers(request));
        headers.write_to(response);

        self.log(CorsEvent::Authorized {
            kind: KIND,
            uri: request.uri,
            headers: headers.as_slice(),
        });
        Verdict::Authorized
    }

    /// Authorizes an actual cross-origin request and writes its headers.
    pub fn actual<S>(&self, request: &RequestContext<'_>, response: &mut S) -> Verdict
    where
        S: ResponseSink + ?Sized,
    {
        const KIND: RequestKind = RequestKind::Actual;

        response.append_header(header::VARY, header::ORIGIN);

        let origin = request.origin();
        if origin.is_empty() {
            return self.reject(KIND, request, RejectReason::EmptyOrigin);
        }
        if !self.is_origin_allowed(request, origin) {
            return self.reject(
                KIND,
                request,
                RejectReason::OriginNotAllowed {
                    origin: origin.to_string(),
                },
            );
        }
        if !self.options.allowed_methods.allows_method(request.method) {
            return self.reject(
                KIND,
                request,
                RejectReason::MethodNotAllowed {
                    method: request.method.to_string(),
                },
            );
        }

        let builder = HeaderBuilder::new(&self.options);
        let Some(mut headers) = builder.build_origin_header() else {
            return self.reject(KIND, request, RejectReason::NoAllowedOrigin);
        };
        headers.extend(builder.build_credentials_header());
        headers.write_to(response);

        self.log(CorsEvent::Authorized {
            kind: KIND,
            uri: request.uri,
            headers: headers.as_slice(),
        });
        Verdict::Authorized
    }

    fn reject(
        &self,
        kind: RequestKind,
        request: &RequestContext<'_>,
        reason: RejectReason,
    ) -> Verdict {
        self.log(CorsEvent::Aborted {
            kind,
            uri: request.uri,
            reason: &reason,
        });
        Verdict::Rejected(reason)
    }

    fn log(&self, event: CorsEvent<'_>) {
        if !self.options.debug {
            return;
        }
        if let Some(logger) = &self.options.logger {
            logger.log(&event);
        }
    }
}

#[cfg(test)]
#[path = "cors_test.rs"]
mod cors_test;
