mod common;

use common::asserts::assert_header_eq;
use common::builders::{cors, preflight_request};
use common::headers::has_header;
use cors_gate::constants::{header, method};

#[test]
fn custom_allowed_headers_are_matched_case_insensitively() {
    let cors = cors().allowed_headers(["X-Request-Id", "X-Trace"]).build();

    let served = preflight_request()
        .origin("https://a.com")
        .request_method(method::GET)
        .request_headers("x-trace,X-REQUEST-ID")
        .serve(&cors);

    assert!(served.decision.verdict.is_authorized());
    assert_header_eq(
        &served.response.headers,
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        &["x-trace,X-REQUEST-ID"],
    );
}

#[test]
fn empty_allow_list_rejects_any_requested_header() {
    let cors = cors().allowed_headers(Vec::<String>::new()).build();

    let served = preflight_request()
        .origin("https://a.com")
        .request_method(method::GET)
        .request_headers("Content-Type")
        .serve(&cors);

    assert!(!served.decision.verdict.is_authorized());
}

#[test]
fn only_first_request_headers_value_is_checked() {
    let served = preflight_request()
        .origin("https://a.com")
        .request_method(method::POST)
        .request_headers("Content-Type")
        .request_headers("X-Unlisted")
        .serve(&cors().build());

    assert!(served.decision.verdict.is_authorized());
    assert_header_eq(
        &served.response.headers,
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        &["Content-Type", "X-Unlisted"],
    );
}

#[test]
fn exposed_headers_echo_request_values_on_preflight() {
    let served = preflight_request()
        .origin("https://a.com")
        .request_method(method::GET)
        .header(header::ACCESS_CONTROL_EXPOSE_HEADERS, "X-Total-Count")
        .serve(&cors().exposed_headers(["X-Configured"]).build());

    assert_header_eq(
        &served.response.headers,
        header::ACCESS_CONTROL_EXPOSE_HEADERS,
        &["X-Total-Count"],
    );
}

#[test]
fn exposed_headers_absent_when_request_sends_none() {
    let served = preflight_request()
        .origin("https://a.com")
        .request_method(method::GET)
        .serve(&cors().exposed_headers(["X-Configured"]).build());

    assert!(!has_header(
        &served.response.headers,
        header::ACCESS_CONTROL_EXPOSE_HEADERS
    ));
}

#[test]
fn exposed_headers_echo_disabled_when_unconfigured() {
    let served = preflight_request()
        .origin("https://a.com")
        .request_method(method::GET)
        .header(header::ACCESS_CONTROL_EXPOSE_HEADERS, "X-Total-Count")
        .serve(&cors().without_exposed_headers().build());

    assert!(!has_header(
        &served.response.headers,
        header::ACCESS_CONTROL_EXPOSE_HEADERS
    ));
}

#[test]
fn exposed_headers_replace_prior_response_value() {
    let served = preflight_request()
        .origin("https://a.com")
        .request_method(method::GET)
        .header(header::ACCESS_CONTROL_EXPOSE_HEADERS, "X-New")
        .response_header(header::ACCESS_CONTROL_EXPOSE_HEADERS, "X-Stale")
        .serve(&cors().build());

    assert_header_eq(
        &served.response.headers,
        header::ACCESS_CONTROL_EXPOSE_HEADERS,
        &["X-New"],
    );
}
