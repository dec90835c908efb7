// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_are_within_reasonable_bounds() {
    // Damping is a per-frame blend factor
    assert!(ROTATION_DAMPING > 0.0 && ROTATION_DAMPING < 1.0);

    // Opacities are alpha values
    assert!(SOLID_OPACITY > 0.0 && SOLID_OPACITY < 1.0);
    assert!(SCENE_POINT_OPACITY > 0.0 && SCENE_POINT_OPACITY <= 1.0);
    assert!(PARTICLE_OPACITY_MIN > 0.0 && PARTICLE_OPACITY_MAX <= 1.0);
    assert!(LINK_MAX_OPACITY > 0.0 && LINK_MAX_OPACITY <= 1.0);

    // Gains stay well under unity
    assert!(AMBIENT_GAIN > 0.0 && AMBIENT_GAIN <= 0.5);
    assert!(BLIP_END_GAIN > 0.0, "exponential ramps cannot target zero");
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_have_logical_relationships() {
    assert!(PARTICLE_RADIUS_MAX > PARTICLE_RADIUS_MIN);
    assert!(PARTICLE_OPACITY_MAX > PARTICLE_OPACITY_MIN);
    assert!(BLIP_START_GAIN > BLIP_END_GAIN);

    // Click is the longer, higher blip
    assert!(CLICK_FREQUENCY_HZ > HOVER_FREQUENCY_HZ);
    assert!(CLICK_DURATION_SEC > HOVER_DURATION_SEC);

    // Logo grace delay is shorter than the rotation interval
    assert!(LOGO_START_DELAY_MS < LOGO_INTERVAL_MS);

    // Camera sits outside the solid
    assert!(CAMERA_Z > SOLID_RADIUS);
}

#[test]
fn page_contract_values() {
    assert_eq!(PARTICLE_COUNT, 50);
    assert_eq!(SCENE_POINT_COUNT, 500);
    assert_eq!(HEADER_OFFSET, 80.0);
    assert_eq!(NAV_SHADOW_THRESHOLD, 100.0);
    assert_eq!(SECTION_LOOKAHEAD, 200.0);
    assert_eq!(BANNER_HIDE_MS, 5000);
    assert_eq!(THEME_ATTRIBUTE, "data-theme");
    assert_eq!(THEME_STORAGE_KEY, "theme");
    assert_ne!(DARK_ACCENT_HEX, LIGHT_ACCENT_HEX);
}
