#![allow(dead_code)]

use super::builders::{HANDLER_BODY, Served};
use super::headers::vary_tokens;
use cors_gate::HeaderList;
use cors_gate::constants::PREFLIGHT_VARY;

pub fn assert_header_eq(headers: &HeaderList, name: &str, expected: &[&str]) {
    assert_eq!(
        headers.values(name),
        expected,
        "unexpected values for header {name}"
    );
}

pub fn assert_preflight_vary(headers: &HeaderList) {
    let tokens = vary_tokens(headers);
    for token in PREFLIGHT_VARY {
        assert!(
            tokens.iter().any(|existing| existing == token),
            "Vary {tokens:?} is missing {token}"
        );
    }
}

/// The request was forwarded and the handler ran exactly once.
pub fn assert_forwarded(served: &Served) {
    assert!(served.decision.forwarded, "request was not forwarded");
    assert_eq!(served.handler_calls, 1);
    assert_eq!(served.response.body, HANDLER_BODY);
}

/// The preflight was answered with an empty 204 and never reached the handler.
pub fn assert_terminated(served: &Served) {
    assert!(!served.decision.forwarded, "preflight was forwarded");
    assert_eq!(served.handler_calls, 0);
    assert_eq!(served.response.status, Some(204));
    assert!(served.response.body.is_empty());
}
