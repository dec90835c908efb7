// Host-side tests for contact form response handling and the status banner.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod contact {
    include!("../src/core/contact.rs");
}

use constants::*;
use contact::*;

#[test]
fn success_response_shows_success_and_resets() {
    let outcome = interpret_response(r#"{"success": true, "message": "Email sent"}"#);
    assert!(outcome.is_ok());
    let kind = BannerKind::for_outcome(&outcome);
    assert_eq!(kind, BannerKind::Success);
    assert_eq!(kind.message(), SUCCESS_MESSAGE);
    assert!(kind.resets_form());
}

#[test]
fn rejected_response_shows_error_and_keeps_fields() {
    let outcome = interpret_response(r#"{"success": false, "message": "Invalid key"}"#);
    assert!(matches!(outcome, Err(SubmitError::Rejected(ref m)) if m == "Invalid key"));
    let kind = BannerKind::for_outcome(&outcome);
    assert_eq!(kind, BannerKind::Error);
    assert_eq!(kind.message(), ERROR_MESSAGE);
    assert!(!kind.resets_form());
}

#[test]
fn missing_flag_counts_as_failure() {
    assert!(matches!(
        interpret_response("{}"),
        Err(SubmitError::Rejected(_))
    ));
}

#[test]
fn unparsable_body_and_network_error_map_to_same_banner() {
    let parse = interpret_response("<html>502</html>");
    assert!(matches!(parse, Err(SubmitError::Parse(_))));
    let network: Result<RelayResponse, SubmitError> =
        Err(SubmitError::Network("TypeError: Failed to fetch".into()));
    assert_eq!(
        BannerKind::for_outcome(&parse),
        BannerKind::for_outcome(&network)
    );
    assert_eq!(BannerKind::for_outcome(&network), BannerKind::Error);
}

#[test]
fn every_banner_arms_a_five_second_hide() {
    let mut banner = StatusBanner::default();
    let first = banner.show(BannerKind::Success);
    assert_eq!(first.delay_ms, 5000);
    let second = banner.show(BannerKind::Error);
    assert_eq!(second.delay_ms, BANNER_HIDE_MS);
    assert_ne!(first.generation, second.generation);
}

#[test]
fn timer_hides_the_banner_it_was_armed_for() {
    let mut banner = StatusBanner::default();
    let timer = banner.show(BannerKind::Success);
    assert_eq!(banner.expire(timer), Some(BannerKind::Success));
    // Firing again is a no-op
    assert_eq!(banner.expire(timer), None);
}

#[test]
fn stale_timer_does_not_hide_newer_banner() {
    let mut banner = StatusBanner::default();
    let first = banner.show(BannerKind::Error);
    let second = banner.show(BannerKind::Success);
    assert_eq!(banner.expire(first), None);
    assert_eq!(banner.expire(second), Some(BannerKind::Success));
    assert_eq!(banner.expire(second), None);
}

#[test]
fn error_display_names_the_cause() {
    let e = SubmitError::Network("offline".into());
    assert_eq!(e.to_string(), "network error: offline");
}
