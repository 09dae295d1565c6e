//! Timeout defaulting tests

use std::time::Duration;

use probeup::Request;

#[test]
fn test_zero_timeout_defaults_to_three_seconds() {
    let request = Request::new("https://example.com", "GET", "", Duration::ZERO, false).unwrap();

    assert_eq!(request.timeout(), Duration::from_secs(3));
}

#[test]
fn test_explicit_timeout_is_kept() {
    for timeout in [Duration::from_nanos(1), Duration::from_millis(250), Duration::from_secs(30)] {
        let request = Request::new("https://example.com", "GET", "", timeout, false).unwrap();
        assert_eq!(request.timeout(), timeout);
    }
}
