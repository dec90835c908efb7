// Host-side tests for audio synthesis and the playback state machine.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod synth {
    include!("../src/core/synth.rs");
}

use constants::*;
use synth::*;

#[test]
fn toggle_alternates_play_and_pause() {
    let mut t = Transport::default();
    assert_eq!(t.phase, Phase::Uninitialized);
    for i in 0..7 {
        let cmd = t.toggle();
        let expected = if i % 2 == 0 {
            TransportCommand::Play
        } else {
            TransportCommand::Pause
        };
        assert_eq!(cmd, expected, "call {i}");
        match cmd {
            TransportCommand::Play => {
                t.begin_play();
            }
            TransportCommand::Pause => {
                t.begin_pause();
            }
        }
    }
    assert!(t.is_playing());
}

#[test]
fn play_starts_a_source_only_when_not_already_playing() {
    let mut t = Transport::default();
    assert!(t.begin_play());
    assert!(!t.begin_play());
    assert!(t.begin_pause());
    assert!(t.begin_play(), "each play cycle needs a fresh source");
}

#[test]
fn pausing_twice_is_harmless() {
    let mut t = Transport::default();
    assert!(!t.begin_pause());
    assert!(!t.begin_pause());
    t.begin_play();
    assert!(t.begin_pause());
    assert!(!t.begin_pause());
    assert_eq!(t.phase, Phase::Paused);
}

// Drive the transport the way the audio toggle button does.
fn press(t: &mut Transport) -> TransportCommand {
    let cmd = t.toggle();
    match cmd {
        TransportCommand::Play => {
            t.begin_play();
        }
        TransportCommand::Pause => {
            t.begin_pause();
        }
    }
    cmd
}

#[test]
fn visibility_pause_keeps_blips_and_next_toggle_resumes() {
    let mut t = Transport::default();
    press(&mut t);
    assert!(t.is_playing() && t.blips_enabled());

    // page hidden
    t.begin_pause();
    assert!(!t.is_playing());
    assert!(t.blips_enabled(), "hiding the page is not a mute");

    assert_eq!(press(&mut t), TransportCommand::Play);
    assert!(t.is_playing() && t.blips_enabled());
    assert_eq!(press(&mut t), TransportCommand::Pause);
    assert!(!t.blips_enabled());
}

#[test]
fn blips_follow_muted_flag_not_phase() {
    let mut t = Transport::default();
    assert!(!t.blips_enabled());
    // Phase changes alone never unmute
    t.begin_play();
    assert!(!t.blips_enabled());
    t.begin_pause();
    assert!(!t.blips_enabled());

    press(&mut t);
    t.begin_pause();
    t.begin_play();
    t.begin_pause();
    assert!(t.blips_enabled());
}

#[test]
fn failed_start_rolls_back_to_muted() {
    let mut t = Transport::default();
    assert_eq!(t.toggle(), TransportCommand::Play);
    assert!(t.begin_play());
    // no audio device
    t.abort_play();
    assert!(!t.is_playing());
    assert!(!t.blips_enabled());
    // The next press retries with a fresh source
    assert_eq!(t.toggle(), TransportCommand::Play);
    assert!(t.begin_play());
}

#[test]
fn ambient_pad_is_stereo_four_seconds_and_bounded() {
    let sr = 8000.0;
    let [l, r] = ambient_pad(sr, AMBIENT_SECONDS);
    assert_eq!(l.len(), (sr * AMBIENT_SECONDS) as usize);
    assert_eq!(l.len(), r.len());
    assert!(l.iter().chain(r.iter()).all(|s| s.abs() <= 1.0));
    assert!(l.iter().any(|s| s.abs() > 0.05));
    assert_ne!(l, r, "channels are detuned against each other");
}

#[test]
fn ambient_pad_decays_over_time() {
    let sr = 8000.0;
    let [l, _] = ambient_pad(sr, AMBIENT_SECONDS);
    let n = l.len();
    let energy = |s: &[f32]| s.iter().map(|x| x * x).sum::<f32>();
    let head = energy(&l[..n / 4]);
    let tail = energy(&l[3 * n / 4..]);
    assert!(head > tail);
}

#[test]
fn blip_specs() {
    assert_eq!(CLICK_BLIP.frequency_hz, 800.0);
    assert_eq!(CLICK_BLIP.duration_sec, 0.1);
    assert_eq!(HOVER_BLIP.frequency_hz, 600.0);
    assert_eq!(HOVER_BLIP.duration_sec, 0.05);
    assert!(CLICK_BLIP.end_gain < CLICK_BLIP.start_gain);
}
