use crate::constants::method;
use crate::util::normalize_upper;

/// Methods permitted for cross-origin requests.
///
/// Entries are upper-cased and de-duplicated on construction, so matching is
/// case-insensitive on both sides.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct AllowedMethods {
    values: Vec<String>,
}

impl AllowedMethods {
    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut deduped: Vec<String> = Vec::new();
        for value in values {
            let upper = normalize_upper(value.into().trim());
            if !deduped.contains(&upper) {
                deduped.push(upper);
            }
        }

        Self { values: deduped }
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub fn allows_method(&self, method: &str) -> bool {
        let method = normalize_upper(method);
        self.values.iter().any(|allowed| *allowed == method)
    }
}

impl Default for AllowedMethods {
    /// `GET`, `POST`, `PUT`, `DELETE` and `OPTIONS`.
    fn default() -> Self {
        Self::list([
            method::GET,
            method::POST,
            method::PUT,
            method::DELETE,
            method::OPTIONS,
        ])
    }
}

#[cfg(test)]
#[path = "allowed_methods_test.rs"]
mod allowed_methods_test;
