use crate::allowed_headers::AllowedHeaders;
use crate::allowed_methods::AllowedMethods;
use crate::constants::header;
use crate::context::RequestContext;
use crate::logging::CorsLogger;
use crate::origin::{AllowedOrigins, OriginPredicateFn};
use crate::util::is_http_token;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Immutable CORS policy.
#[derive(Clone)]
pub struct CorsOptions {
    pub allowed_origins: AllowedOrigins,
    pub allowed_methods: AllowedMethods,
    pub allowed_headers: AllowedHeaders,
    /// `None` disables the preflight `Access-Control-Expose-Headers` echo.
    pub exposed_headers: Option<Vec<String>>,
    pub credentials: bool,
    /// Seconds a browser may cache a preflight. Zero or negative renders `0`.
    pub max_age: i64,
    /// Forward authorized preflights to the next handler instead of ending with 204.
    pub preflight_pass: bool,
    pub origin_predicate: Option<Arc<OriginPredicateFn>>,
    pub debug: bool,
    pub logger: Option<Arc<dyn CorsLogger>>,
}

impl Default for CorsOptions {
    fn default() -> Self {
        Self {
            allowed_origins: AllowedOrigins::any(),
            allowed_methods: AllowedMethods::default(),
            allowed_headers: AllowedHeaders::default(),
            exposed_headers: Some(vec![
                header::CONTENT_TYPE.to_string(),
                header::AUTHORIZATION.to_string(),
            ]),
            credentials: true,
            max_age: 0,
            preflight_pass: false,
            origin_predicate: None,
            debug: false,
            logger: None,
        }
    }
}

impl CorsOptions {
    /// Uses `predicate` in place of the origin allow-list lookup.
    pub fn with_origin_predicate<F>(mut self, predicate: F) -> Self
    where
        F: for<'a> Fn(&RequestContext<'a>, &str) -> bool + Send + Sync + 'static,
    {
        self.origin_predicate = Some(Arc::new(predicate));
        self
    }

    /// Installs `logger` and turns on debug output.
    pub fn with_logger<L: CorsLogger + 'static>(mut self, logger: L) -> Self {
        self.logger = Some(Arc::new(logger));
        self.debug = true;
        self
    }

    /// Checks for contradictory or malformed settings.
    ///
    /// Not called by [`crate::Cors::new`]; opt in through [`crate::Cors::try_new`].
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.credentials && self.allowed_origins.is_any() {
            return Err(ValidationError::CredentialsRequireSpecificOrigin);
        }

        if let Some(origin) = self
            .allowed_origins
            .values()
            .iter()
            .find(|origin| origin.trim().is_empty())
        {
            return Err(ValidationError::InvalidOrigin(origin.clone()));
        }

        if let Some(method) = self
            .allowed_methods
            .values()
            .iter()
            .find(|method| !is_http_token(method))
        {
            return Err(ValidationError::InvalidMethod(method.clone()));
        }

        let exposed = self.exposed_headers.iter().flatten();
        if let Some(name) = self
            .allowed_headers
            .values()
            .iter()
            .chain(exposed)
            .find(|name| !is_http_token(name))
        {
            return Err(ValidationError::InvalidHeaderName(name.clone()));
        }

        Ok(())
    }
}

impl fmt::Debug for CorsOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CorsOptions")
            .field("allowed_origins", &self.allowed_origins)
            .field("allowed_methods", &self.allowed_methods)
            .field("allowed_headers", &self.allowed_headers)
            .field("exposed_headers", &self.exposed_headers)
            .field("credentials", &self.credentials)
            .field("max_age", &self.max_age)
            .field("preflight_pass", &self.preflight_pass)
            .field("origin_predicate", &self.origin_predicate.is_some())
            .field("debug", &self.debug)
            .field("logger", &self.logger.is_some())
            .finish()
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error(
        "credentials cannot be combined with a wildcard origin; browsers reject `Access-Control-Allow-Origin: *` on credentialed requests"
    )]
    CredentialsRequireSpecificOrigin,
    #[error("allowed origin entry '{0}' is empty")]
    InvalidOrigin(String),
    #[error("allowed method '{0}' is not a valid HTTP method token")]
    InvalidMethod(String),
    #[error("header name '{0}' is not a valid HTTP header token")]
    InvalidHeaderName(String),
}

#[cfg(test)]
#[path = "options_test.rs"]
mod options_test;
