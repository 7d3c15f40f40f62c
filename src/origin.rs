use crate::constants::WILDCARD;
use crate::context::RequestContext;
use crate::util::equals_ignore_case;

/// Custom origin check. When configured it replaces the allow-list lookup.
pub type OriginPredicateFn = dyn for<'a> Fn(&RequestContext<'a>, &str) -> bool + Send + Sync;

/// Ordered allow-list of origins.
///
/// A list whose first entry is `*` admits every origin; the remaining
/// entries are then ignored.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AllowedOrigins {
    values: Vec<String>,
}

impl Default for AllowedOrigins {
    fn default() -> Self {
        Self::any()
    }
}

impl AllowedOrigins {
    pub fn any() -> Self {
        Self {
            values: vec![WILDCARD.to_string()],
        }
    }

    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_any(&self) -> bool {
        self.values.first().is_some_and(|first| first == WILDCARD)
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Literal, case-insensitive membership. No subdomain or pattern matching.
    pub fn contains(&self, origin: &str) -> bool {
        self.values
            .iter()
            .any(|allowed| equals_ignore_case(allowed, origin))
    }

    /// Values for `Access-Control-Allow-Origin`: `*` under the wildcard,
    /// otherwise the whole configured list. `None` when nothing is configured.
    pub fn header_values(&self) -> Option<Vec<&str>> {
        if self.is_any() {
            Some(vec![WILDCARD])
        } else if self.values.is_empty() {
            None
        } else {
            Some(self.values.iter().map(String::as_str).collect())
        }
    }
}

/// Decides whether `origin` may receive the response to `request`.
pub fn resolve_origin(
    origins: &AllowedOrigins,
    predicate: Option<&OriginPredicateFn>,
    request: &RequestContext<'_>,
    origin: &str,
) -> bool {
    if let Some(predicate) = predicate {
        return predicate(request, origin);
    }

    origins.is_any() || origins.contains(origin)
}

#[cfg(test)]
#[path = "origin_test.rs"]
mod origin_test;
