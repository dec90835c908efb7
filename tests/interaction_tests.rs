// Host-side tests for scroll, navigation, logo and frame-loop logic.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod scroll {
    include!("../src/core/scroll.rs");
}
mod nav {
    include!("../src/core/nav.rs");
}
mod logo {
    include!("../src/core/logo.rs");
}
mod schedule {
    include!("../src/core/schedule.rs");
}

use logo::*;
use nav::*;
use schedule::*;
use scroll::*;

#[test]
fn nav_shadow_follows_threshold() {
    assert!(nav_has_shadow(150.0));
    assert!(!nav_has_shadow(50.0));
    assert!(!nav_has_shadow(100.0));
}

#[test]
fn anchor_targets() {
    assert_eq!(anchor_target("#"), Some(ScrollTarget::Top));
    assert_eq!(anchor_target("#home"), Some(ScrollTarget::Top));
    assert_eq!(
        anchor_target("#projects"),
        Some(ScrollTarget::Element("projects".into()))
    );
    assert_eq!(anchor_target("https://example.com/#x"), None);
    assert_eq!(anchor_target("/about"), None);
}

#[test]
fn element_offset_clears_header() {
    assert_eq!(offset_for_element(500.0), 420.0);
    assert_eq!(offset_for_element(30.0), 0.0);
}

fn sections() -> Vec<(String, f64)> {
    vec![
        ("home".into(), 0.0),
        ("about".into(), 800.0),
        ("projects".into(), 1600.0),
        ("contact".into(), 2400.0),
    ]
}

#[test]
fn active_section_uses_lookahead() {
    let s = sections();
    assert_eq!(active_section(&s, 0.0), Some("home"));
    assert_eq!(active_section(&s, 599.0), Some("home"));
    assert_eq!(active_section(&s, 600.0), Some("about"));
    assert_eq!(active_section(&s, 1500.0), Some("projects"));
    assert_eq!(active_section(&s, 9000.0), Some("contact"));
    assert_eq!(active_section(&[], 100.0), None);
}

#[test]
fn nav_links_match_section_ids() {
    assert!(link_targets_section("#about", "about"));
    assert!(!link_targets_section("#about", "projects"));
    assert!(!link_targets_section("about", "about"));
}

#[test]
fn reveal_is_one_way() {
    assert!(!reveal(false, false));
    assert!(reveal(false, true));
    assert!(reveal(true, false));
}

#[test]
fn mobile_nav_toggle_twice_is_closed() {
    let mut nav = MobileNav::default();
    assert!(nav.toggle());
    assert!(!nav.toggle());
    assert!(!nav.open);
}

#[test]
fn mobile_nav_link_click_closes() {
    let mut nav = MobileNav::default();
    nav.toggle();
    assert!(!nav.link_clicked());
}

#[test]
fn mobile_nav_outside_click_closes_inside_does_not() {
    let mut nav = MobileNav::default();
    nav.toggle();
    assert!(nav.document_clicked(true, false));
    assert!(nav.document_clicked(false, true));
    assert!(!nav.document_clicked(false, false));
}

#[test]
fn logo_cycles_through_four_frames() {
    let mut c = LogoCycler::default();
    assert_eq!(c.current(), LOGO_FRAMES[0]);
    let seen: Vec<LogoFrame> = (0..8).map(|_| c.advance()).collect();
    assert_eq!(seen[0], LOGO_FRAMES[1]);
    assert_eq!(seen[3], LOGO_FRAMES[0]);
    assert_eq!(seen[4..], seen[..4]);
}

#[test]
fn loop_handle_cancels_for_all_clones() {
    let handle = LoopHandle::new();
    let driver = handle.clone();
    assert!(driver.begin_frame());
    assert!(driver.begin_frame());
    handle.cancel();
    assert!(driver.is_cancelled());
    assert!(!driver.begin_frame());
    assert_eq!(handle.frames(), 2);
}
