//! Registry lookup and extension tests

use std::{sync::Arc, time::Duration};

use probeup::{
    verify::composite_key, FormType, ProbeResponse, Request, RequestBuilder, RequestError,
    Verification, VerifierRegistry,
};

#[test]
fn test_builtin_entries_resolve() {
    let registry = VerifierRegistry::builtin();

    assert_eq!(registry.len(), 2);
    assert_eq!(registry.resolve(FormType::Http, "statusCode").unwrap().key(), "http.statusCode");
    assert_eq!(registry.resolve(FormType::Http, "json").unwrap().key(), "http.json");
}

#[test]
fn test_unregistered_key_fails() {
    let registry = VerifierRegistry::builtin();

    let error = registry.resolve(FormType::WebSocket, "json").unwrap_err();

    assert_eq!(error, RequestError::VerifierNotFound { key: "webSocket.json".to_string() });
    assert!(error.to_string().contains("webSocket.json"));
}

#[test]
fn test_composite_key_format() {
    assert_eq!(composite_key(FormType::Http, "json"), "http.json");
    assert_eq!(composite_key(FormType::WebSocket, "statusCode"), "webSocket.statusCode");
}

#[test]
fn test_shared_registry_is_initialized_once() {
    let first = VerifierRegistry::shared();
    let second = VerifierRegistry::shared();

    assert!(Arc::ptr_eq(&first, &second));
    assert!(first.contains(FormType::Http, "statusCode"));
    assert!(first.contains(FormType::Http, "json"));
}

#[test]
fn test_empty_registry() {
    let registry = VerifierRegistry::builder().build();

    assert!(registry.is_empty());
    assert!(registry.resolve(FormType::Http, "statusCode").is_err());
}

#[test]
fn test_custom_verifier_registered_at_startup() {
    let registry = VerifierRegistry::builder()
        .with_builtins()
        .register(FormType::WebSocket, "json", |_: &Request, response: Option<&ProbeResponse>| {
            match response {
                Some(response) if response.body.as_deref() == Some("pong") => Verification::new(200, true),
                _ => Verification::failure(509),
            }
        })
        .build();

    let mut keys: Vec<_> = registry.keys().collect();
    keys.sort_unstable();
    assert_eq!(keys, ["http.json", "http.statusCode", "webSocket.json"]);

    let builder = RequestBuilder::new(Arc::new(registry));
    let request = builder.build("ws://example.com/socket", "GET", "json", Duration::ZERO, false).unwrap();

    assert_eq!(request.form(), FormType::WebSocket);
    assert_eq!(request.verify(Some(&ProbeResponse::new(101).with_body("pong"))), Verification::new(200, true));
    assert_eq!(request.verify(None), Verification::failure(509));
}

#[test]
fn test_later_registration_replaces_earlier() {
    let registry = VerifierRegistry::builder()
        .with_builtins()
        .register(FormType::Http, "statusCode", |_: &Request, _: Option<&ProbeResponse>| {
            Verification::new(204, true)
        })
        .build();
    let request = RequestBuilder::new(Arc::new(registry))
        .build("http://example.com", "GET", "", Duration::ZERO, false)
        .unwrap();

    assert_eq!(request.verify(Some(&ProbeResponse::new(500))), Verification::new(204, true));
}

#[test]
fn test_verifier_debug_shows_key() {
    let verifier = VerifierRegistry::builtin().resolve(FormType::Http, "json").unwrap();

    assert!(format!("{verifier:?}").contains("http.json"));
}
