use crate::headers::HeaderList;

/// Mutable view of the response under construction.
///
/// Any framework's response type can satisfy this through a thin wrapper.
pub trait ResponseSink {
    /// Every value currently set for `name`.
    fn header_values(&self, name: &str) -> Vec<String>;

    /// Adds `value` after any existing values of `name`.
    fn append_header(&mut self, name: &str, value: &str);

    /// Replaces every value of `name`; an empty slice removes the header.
    fn set_header(&mut self, name: &str, values: &[&str]);

    /// Ends the response with `status` and an empty body.
    fn terminate(&mut self, status: u16);
}

/// In-memory response used by hosts without their own response type.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MemoryResponse {
    pub headers: HeaderList,
    pub status: Option<u16>,
    pub body: Vec<u8>,
}

impl MemoryResponse {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn write_body(&mut self, bytes: &[u8]) {
        self.body.extend_from_slice(bytes);
    }

    pub fn write_status(&mut self, status: u16) {
        self.status = Some(status);
    }
}

impl ResponseSink for MemoryResponse {
    fn header_values(&self, name: &str) -> Vec<String> {
        self.headers.values(name).to_vec()
    }

    fn append_header(&mut self, name: &str, value: &str) {
        self.headers.append(name, value);
    }

    fn set_header(&mut self, name: &str, values: &[&str]) {
        self.headers.set(name, values.iter().copied());
    }

    fn terminate(&mut self, status: u16) {
        self.status = Some(status);
        self.body.clear();
    }
}

#[cfg(test)]
#[path = "response_test.rs"]
mod response_test;
