// Host-side tests for theme resolution and change notification.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod theme {
    include!("../src/core/theme.rs");
}

use constants::*;
use std::cell::RefCell;
use std::rc::Rc;
use theme::*;

#[test]
fn parse_and_format_round_trip_the_two_values() {
    assert_eq!(Theme::parse("light"), Some(Theme::Light));
    assert_eq!(Theme::parse(" dark "), Some(Theme::Dark));
    assert_eq!(Theme::parse("Dark"), None);
    assert_eq!(Theme::parse(""), None);
    assert_eq!(Theme::Light.as_str(), "light");
    assert_eq!(Theme::Dark.as_str(), "dark");
}

#[test]
fn toggle_flips_between_light_and_dark() {
    let mut t = Theme::Light;
    for i in 0..5 {
        t = t.toggled();
        let expected = if i % 2 == 0 { Theme::Dark } else { Theme::Light };
        assert_eq!(t, expected);
    }
}

#[test]
fn stored_preference_wins_over_system() {
    assert_eq!(Theme::initial(Some("light"), true), Theme::Light);
    assert_eq!(Theme::initial(Some("dark"), false), Theme::Dark);
    assert_eq!(Theme::initial(None, true), Theme::Dark);
    assert_eq!(Theme::initial(None, false), Theme::Light);
    // Garbage in storage falls back to the system preference
    assert_eq!(Theme::initial(Some("purple"), true), Theme::Dark);
}

#[test]
fn accent_colours_match_designated_hex() {
    assert_eq!(Theme::Dark.accent_hex(), DARK_ACCENT_HEX);
    assert_eq!(Theme::Light.accent_hex(), LIGHT_ACCENT_HEX);
    assert_eq!(hex_to_rgb(0xff8000), [1.0, 128.0 / 255.0, 0.0]);
}

// Stand-in for a renderer: holds the accent it will draw with next frame.
struct FakeRenderer {
    accent: [f32; 3],
}

#[test]
fn every_toggle_reaches_both_subscribers() {
    let bus = ThemeBus::default();
    let scene = Rc::new(RefCell::new(FakeRenderer {
        accent: Theme::Light.accent_rgb(),
    }));
    let canvas = Rc::new(RefCell::new(FakeRenderer {
        accent: Theme::Light.accent_rgb(),
    }));
    for r in [scene.clone(), canvas.clone()] {
        bus.subscribe(move |t| r.borrow_mut().accent = t.accent_rgb());
    }
    assert_eq!(bus.len(), 2);

    let mut current = Theme::Light;
    for _ in 0..4 {
        current = current.toggled();
        bus.publish(current);
        assert_eq!(scene.borrow().accent, current.accent_rgb());
        assert_eq!(canvas.borrow().accent, current.accent_rgb());
    }
}

#[test]
fn cloned_bus_shares_listeners() {
    let bus = ThemeBus::default();
    assert!(bus.is_empty());
    let seen = Rc::new(RefCell::new(Vec::new()));
    let s = seen.clone();
    bus.clone().subscribe(move |t| s.borrow_mut().push(t));
    bus.publish(Theme::Dark);
    assert_eq!(*seen.borrow(), vec![Theme::Dark]);
}

#[test]
fn late_subscriber_catches_up_with_last_toggle() {
    let bus = ThemeBus::default();
    let early = Rc::new(RefCell::new(FakeRenderer {
        accent: Theme::Light.accent_rgb(),
    }));
    let e = early.clone();
    bus.subscribe(move |t| e.borrow_mut().accent = t.accent_rgb());

    // Toggle lands while the other renderer is still being set up
    bus.publish(Theme::Dark);

    let late = Rc::new(RefCell::new(FakeRenderer {
        accent: Theme::Light.accent_rgb(),
    }));
    let l = late.clone();
    bus.subscribe(move |t| l.borrow_mut().accent = t.accent_rgb());
    assert_eq!(late.borrow().accent, Theme::Dark.accent_rgb());
    assert_eq!(early.borrow().accent, late.borrow().accent);

    bus.publish(Theme::Light);
    assert_eq!(late.borrow().accent, Theme::Light.accent_rgb());
}

#[test]
fn subscriber_before_any_publish_is_not_called() {
    let bus = ThemeBus::default();
    let calls = Rc::new(RefCell::new(0));
    let c = calls.clone();
    bus.subscribe(move |_| *c.borrow_mut() += 1);
    assert_eq!(*calls.borrow(), 0);
}
