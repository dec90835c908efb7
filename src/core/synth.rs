use crate::constants::{
    BLIP_END_GAIN, BLIP_START_GAIN, CLICK_DURATION_SEC, CLICK_FREQUENCY_HZ, HOVER_DURATION_SEC,
    HOVER_FREQUENCY_HZ,
};
use std::f32::consts::TAU;

/// One partial of the ambient pad: frequency, peak level and decay rate (1/s).
#[derive(Clone, Copy, Debug)]
pub struct PadLayer {
    pub frequency_hz: f32,
    pub amplitude: f32,
    pub decay_per_sec: f32,
}

/// A soft A-minor stack; levels sum below 1 so the mix never clips.
pub const PAD_LAYERS: [PadLayer; 4] = [
    PadLayer {
        frequency_hz: 110.0,
        amplitude: 0.30,
        decay_per_sec: 0.25,
    },
    PadLayer {
        frequency_hz: 164.81,
        amplitude: 0.20,
        decay_per_sec: 0.35,
    },
    PadLayer {
        frequency_hz: 220.0,
        amplitude: 0.15,
        decay_per_sec: 0.50,
    },
    PadLayer {
        frequency_hz: 261.63,
        amplitude: 0.10,
        decay_per_sec: 0.70,
    },
];

// Right channel runs slightly sharp for a wider image.
const STEREO_DETUNE: f32 = 1.003;

/// Render the looping ambient pad as two channels of `seconds * sample_rate`
/// samples.
pub fn ambient_pad(sample_rate: f32, seconds: f32) -> [Vec<f32>; 2] {
    let len = (sample_rate * seconds).max(0.0) as usize;
    let mut left = vec![0.0_f32; len];
    let mut right = vec![0.0_f32; len];
    let dt = 1.0 / sample_rate;
    for i in 0..len {
        let t = i as f32 * dt;
        let mut l = 0.0;
        let mut r = 0.0;
        for layer in PAD_LAYERS.iter() {
            let env = layer.amplitude * (-t * layer.decay_per_sec).exp();
            l += env * (TAU * layer.frequency_hz * t).sin();
            r += env * (TAU * layer.frequency_hz * STEREO_DETUNE * t).sin();
        }
        left[i] = l;
        right[i] = r;
    }
    [left, right]
}

/// Short UI tone with an exponential fade to near silence.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Blip {
    pub frequency_hz: f32,
    pub duration_sec: f64,
    pub start_gain: f32,
    pub end_gain: f32,
}

pub const CLICK_BLIP: Blip = Blip {
    frequency_hz: CLICK_FREQUENCY_HZ,
    duration_sec: CLICK_DURATION_SEC,
    start_gain: BLIP_START_GAIN,
    end_gain: BLIP_END_GAIN,
};

pub const HOVER_BLIP: Blip = Blip {
    frequency_hz: HOVER_FREQUENCY_HZ,
    duration_sec: HOVER_DURATION_SEC,
    start_gain: BLIP_START_GAIN,
    end_gain: BLIP_END_GAIN,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Uninitialized,
    Paused,
    Playing,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransportCommand {
    Play,
    Pause,
}

/// Playback bookkeeping for the ambient loop, independent of Web Audio.
///
/// `muted` is the listener's choice and only `toggle` changes it (plus the
/// rollback when playback cannot start). `phase` tracks the looping source
/// and also moves on visibility pauses, which leave `muted` alone so the
/// hover/click blips keep working.
#[derive(Clone, Copy, Debug)]
pub struct Transport {
    pub phase: Phase,
    pub muted: bool,
}

impl Default for Transport {
    fn default() -> Self {
        Self {
            phase: Phase::Uninitialized,
            muted: true,
        }
    }
}

impl Transport {
    /// Pause and mute while the loop is audible; otherwise unmute and play.
    /// After a visibility pause the loop is silent, so the next toggle plays.
    pub fn toggle(&mut self) -> TransportCommand {
        if !self.muted && self.phase == Phase::Playing {
            self.muted = true;
            TransportCommand::Pause
        } else {
            self.muted = false;
            TransportCommand::Play
        }
    }

    /// Returns true when a fresh playback source must be started.
    pub fn begin_play(&mut self) -> bool {
        if self.phase == Phase::Playing {
            return false;
        }
        self.phase = Phase::Playing;
        true
    }

    /// Playback could not start; drop back to a silent, muted state so the
    /// next toggle tries again.
    pub fn abort_play(&mut self) {
        if self.phase == Phase::Playing {
            self.phase = Phase::Paused;
        }
        self.muted = true;
    }

    /// Returns true when a running source must be stopped.
    pub fn begin_pause(&mut self) -> bool {
        match self.phase {
            Phase::Playing => {
                self.phase = Phase::Paused;
                true
            }
            _ => false,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.phase == Phase::Playing
    }

    pub fn blips_enabled(&self) -> bool {
        !self.muted
    }
}
