#![allow(dead_code)]

use cors_gate::HeaderList;
use cors_gate::constants::header;

pub fn header_value<'a>(headers: &'a HeaderList, name: &str) -> Option<&'a str> {
    headers.get(name)
}

pub fn header_values(headers: &HeaderList, name: &str) -> Vec<String> {
    headers.values(name).to_vec()
}

pub fn has_header(headers: &HeaderList, name: &str) -> bool {
    headers.contains(name)
}

/// Every `Vary` token across all values.
pub fn vary_tokens(headers: &HeaderList) -> Vec<String> {
    headers
        .values(header::VARY)
        .iter()
        .flat_map(|value| value.split(','))
        .map(|token| token.trim().to_string())
        .filter(|token| !token.is_empty())
        .collect()
}

pub fn has_cors_grant(headers: &HeaderList) -> bool {
    [
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        header::ACCESS_CONTROL_ALLOW_METHODS,
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        header::ACCESS_CONTROL_ALLOW_CREDENTIALS,
        header::ACCESS_CONTROL_MAX_AGE,
        header::ACCESS_CONTROL_EXPOSE_HEADERS,
    ]
    .iter()
    .any(|name| headers.contains(name))
}
