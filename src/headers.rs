use crate::context::RequestHeaders;
use crate::response::ResponseSink;
use crate::util::normalize_lower;
use indexmap::IndexMap;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Entry {
    name: String,
    values: Vec<String>,
}

/// Ordered multi-value header map with case-insensitive names.
///
/// The first spelling of a name is kept for display; values keep insertion
/// order. Serves as the in-memory header store on both sides of a request.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct HeaderList {
    entries: IndexMap<String, Entry>,
}

impl HeaderList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, name: &str, value: impl Into<String>) {
        self.entries
            .entry(normalize_lower(name))
            .or_insert_with(|| Entry {
                name: name.to_string(),
                values: Vec::new(),
            })
            .values
            .push(value.into());
    }

    /// Replaces every value of `name`. An empty `values` removes the header.
    pub fn set<I, S>(&mut self, name: &str, values: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let values: Vec<String> = values.into_iter().map(Into::into).collect();
        let key = normalize_lower(name);
        if values.is_empty() {
            self.entries.shift_remove(&key);
            return;
        }

        match self.entries.get_mut(&key) {
            Some(entry) => entry.values = values,
            None => {
                self.entries.insert(
                    key,
                    Entry {
                        name: name.to_string(),
                        values,
                    },
                );
            }
        }
    }

    pub fn remove(&mut self, name: &str) -> Option<Vec<String>> {
        self.entries
            .shift_remove(&normalize_lower(name))
            .map(|entry| entry.values)
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values(name).first().map(String::as_str)
    }

    pub fn values(&self, name: &str) -> &[String] {
        self.entries
            .get(&normalize_lower(name))
            .map(|entry| entry.values.as_slice())
            .unwrap_or_default()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(&normalize_lower(name))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .values()
            .map(|entry| (entry.name.as_str(), entry.values.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for HeaderList
where
    K: AsRef<str>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut list = HeaderList::new();
        for (name, value) in iter {
            list.append(name.as_ref(), value);
        }
        list
    }
}

impl RequestHeaders for HeaderList {
    fn get(&self, name: &str) -> Option<&str> {
        HeaderList::get(self, name)
    }

    fn get_all(&self, name: &str) -> Vec<&str> {
        self.values(name).iter().map(String::as_str).collect()
    }
}

/// A single response header staged by the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub name: &'static str,
    pub values: Vec<String>,
}

impl Header {
    pub fn new<I, S>(name: &'static str, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name,
            values: values.into_iter().map(Into::into).collect(),
        }
    }
}

impl fmt::Display for Header {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.values.join(", "))
    }
}

/// Headers authorized for one request, written to the sink in one pass.
#[derive(Debug, Default, Clone)]
pub(crate) struct HeaderCollection {
    headers: Vec<Header>,
}

impl HeaderCollection {
    pub(crate) fn new() -> Self {
        Self::with_estimate(6)
    }

    pub(crate) fn with_estimate(estimate: usize) -> Self {
        Self {
            headers: Vec::with_capacity(estimate),
        }
    }

    /// Stages `header`, replacing an earlier header of the same name.
    pub(crate) fn push(&mut self, header: Header) {
        match self
            .headers
            .iter_mut()
            .find(|existing| existing.name.eq_ignore_ascii_case(header.name))
        {
            Some(existing) => *existing = header,
            None => self.headers.push(header),
        }
    }

    pub(crate) fn extend(&mut self, other: HeaderCollection) {
        for header in other.headers {
            self.push(header);
        }
    }

    pub(crate) fn write_to<S: ResponseSink + ?Sized>(&self, sink: &mut S) {
        for header in &self.headers {
            let values: Vec<&str> = header.values.iter().map(String::as_str).collect();
            sink.set_header(header.name, &values);
        }
    }

    pub(crate) fn as_slice(&self) -> &[Header] {
        &self.headers
    }

    #[cfg(test)]
    pub(crate) fn get(&self, name: &str) -> Option<&Header> {
        self.headers
            .iter()
            .find(|header| header.name.eq_ignore_ascii_case(name))
    }

    #[cfg(test)]
    pub(crate) fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }
}

#[cfg(test)]
#[path = "headers_test.rs"]
mod headers_test;
