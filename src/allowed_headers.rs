use crate::constants::header;
use crate::util::{equals_ignore_case, normalize_lower, split_list};
use std::collections::HashSet;

/// Request headers a client may send on a cross-origin request.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct AllowedHeaders {
    values: Vec<String>,
}

impl AllowedHeaders {
    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = HashSet::new();
        let mut deduped: Vec<String> = Vec::new();
        for value in values {
            let trimmed = value.into().trim().to_string();
            if seen.insert(normalize_lower(&trimmed)) {
                deduped.push(trimmed);
            }
        }

        Self { values: deduped }
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub fn allows_header(&self, name: &str) -> bool {
        self.values
            .iter()
            .any(|allowed| equals_ignore_case(allowed, name))
    }

    /// True when every token of a comma-separated `Access-Control-Request-Headers`
    /// value is allowed. An empty value requests nothing and is always allowed.
    pub fn allows_headers(&self, request_headers: &str) -> bool {
        split_list(request_headers).all(|name| self.allows_header(name))
    }
}

impl Default for AllowedHeaders {
    /// `Content-Type` and `Authorization`.
    fn default() -> Self {
        Self::list([header::CONTENT_TYPE, header::AUTHORIZATION])
    }
}

#[cfg(test)]
#[path = "allowed_headers_test.rs"]
mod allowed_headers_test;
