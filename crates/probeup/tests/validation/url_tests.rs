//! URL classification tests

use std::time::Duration;

use probeup::{FormType, Request, RequestError};

#[test]
fn test_http_schemes_classify_as_http() {
    for url in ["http://example.com", "https://example.com/health", "http://"] {
        let request = Request::new(url, "GET", "", Duration::ZERO, false).unwrap();
        assert_eq!(request.form(), FormType::Http, "{url} should be http");
        assert_eq!(request.url(), url);
    }
}

#[test]
fn test_websocket_schemes_classify_as_websocket() {
    for url in ["ws://example.com/socket", "wss://example.com/socket"] {
        let result = Request::new(url, "GET", "", Duration::ZERO, false);

        // No websocket verifier is built in, so classification is observed
        // through the composite key of the lookup failure.
        assert_eq!(
            result.unwrap_err(),
            RequestError::VerifierNotFound { key: "webSocket.statusCode".to_string() }
        );
    }
}

#[test]
fn test_unsupported_scheme_is_rejected() {
    let result = Request::new("ftp://example.com", "get", "", Duration::from_secs(5), false);

    assert_eq!(result.unwrap_err(), RequestError::InvalidUrl { url: "ftp://example.com".to_string() });
}

#[test]
fn test_malformed_urls_are_rejected() {
    for url in ["", "example.com", "not-a-url", "HTTP://example.com", " http://example.com", "http:/example.com"] {
        let result = Request::new(url, "GET", "", Duration::ZERO, false);
        assert!(
            matches!(result, Err(RequestError::InvalidUrl { .. })),
            "{url:?} should fail classification"
        );
    }
}

#[test]
fn test_invalid_url_message_names_url() {
    let error = Request::new("gopher://example.com", "GET", "", Duration::ZERO, false).unwrap_err();

    assert!(error.to_string().contains("gopher://example.com"));
}

#[test]
fn test_url_checked_before_policy() {
    let result = Request::new("ftp://example.com", "GET", "missing", Duration::ZERO, false);

    assert!(matches!(result, Err(RequestError::InvalidUrl { .. })));
}
