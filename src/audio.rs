use crate::constants::{AMBIENT_GAIN, AMBIENT_SECONDS};
use crate::core::synth::{ambient_pad, Blip, Transport, TransportCommand, CLICK_BLIP, HOVER_BLIP};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// Everything that only exists once the audio context has been created.
struct AudioGraph {
    ctx: web::AudioContext,
    pad: web::AudioBuffer,
    master: web::GainNode,
}

/// Looping ambient pad plus hover/click blips, all synthesized in memory.
///
/// The context is created on the first `play` (browsers only allow audio
/// after a user gesture). If the platform has no Web Audio the component
/// logs once, stays muted and every call becomes a no-op.
#[derive(Default)]
pub struct AmbientAudio {
    graph: Option<AudioGraph>,
    source: Option<web::AudioBufferSourceNode>,
    transport: Transport,
    unavailable: bool,
}

fn create_gain(
    audio_ctx: &web::AudioContext,
    value: f32,
    label: &str,
) -> Result<web::GainNode, ()> {
    match web::GainNode::new(audio_ctx) {
        Ok(g) => {
            g.gain().set_value(value);
            Ok(g)
        }
        Err(e) => {
            log::error!("{} GainNode error: {:?}", label, e);
            Err(())
        }
    }
}

fn build_graph() -> Result<AudioGraph, ()> {
    let ctx = web::AudioContext::new().map_err(|e| {
        log::warn!("[audio] AudioContext unavailable: {:?}", e);
    })?;
    let master = create_gain(&ctx, AMBIENT_GAIN, "Master")?;
    _ = master.connect_with_audio_node(&ctx.destination());

    let sr = ctx.sample_rate();
    let [mut left, mut right] = ambient_pad(sr, AMBIENT_SECONDS);
    let pad = ctx
        .create_buffer(2, left.len() as u32, sr)
        .map_err(|e| {
            log::error!("[audio] create_buffer error: {:?}", e);
        })?;
    _ = pad.copy_to_channel(&mut left, 0);
    _ = pad.copy_to_channel(&mut right, 1);
    log::info!("[audio] pad ready: {} samples @ {} Hz", left.len(), sr);
    Ok(AudioGraph { ctx, pad, master })
}

fn resume_if_suspended(ctx: &web::AudioContext) {
    if ctx.state() != web::AudioContextState::Suspended {
        return;
    }
    match ctx.resume() {
        Ok(promise) => spawn_local(async move {
            if let Err(e) = JsFuture::from(promise).await {
                log::warn!("[audio] resume failed: {:?}", e);
            }
        }),
        Err(e) => log::warn!("[audio] resume error: {:?}", e),
    }
}

impl AmbientAudio {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip between audible and muted. Returns whether the pad actually
    /// started, so callers never show "playing" for a loop that failed.
    pub fn toggle(&mut self) -> bool {
        match self.transport.toggle() {
            TransportCommand::Play => self.play(),
            TransportCommand::Pause => self.pause(),
        }
        self.transport.is_playing()
    }

    fn ensure_graph(&mut self) -> Option<&AudioGraph> {
        if self.graph.is_none() && !self.unavailable {
            match build_graph() {
                Ok(g) => self.graph = Some(g),
                Err(()) => self.unavailable = true,
            }
        }
        self.graph.as_ref()
    }

    pub fn play(&mut self) {
        if !self.transport.begin_play() {
            if let Some(graph) = self.graph.as_ref() {
                resume_if_suspended(&graph.ctx);
            }
            return;
        }
        match self.start_source() {
            Some(src) => {
                self.source = Some(src);
                log::info!("[audio] ambient playing");
            }
            None => self.transport.abort_play(),
        }
    }

    // Buffer sources are single-use; every play cycle gets a new one.
    fn start_source(&mut self) -> Option<web::AudioBufferSourceNode> {
        let graph = self.ensure_graph()?;
        resume_if_suspended(&graph.ctx);
        let src = web::AudioBufferSourceNode::new(&graph.ctx)
            .map_err(|e| log::error!("[audio] AudioBufferSourceNode error: {:?}", e))
            .ok()?;
        src.set_buffer(Some(&graph.pad));
        src.set_loop(true);
        _ = src.connect_with_audio_node(&graph.master);
        if let Err(e) = src.start() {
            log::error!("[audio] start error: {:?}", e);
            _ = src.disconnect();
            return None;
        }
        Some(src)
    }

    pub fn pause(&mut self) {
        self.transport.begin_pause();
        if let Some(src) = self.source.take() {
            // Stopping an already-stopped source throws; that is fine here.
            if let Err(e) = src.stop() {
                log::debug!("[audio] stop on stopped source: {:?}", e);
            }
            _ = src.disconnect();
            log::info!("[audio] ambient paused");
        }
    }

    pub fn play_click_sound(&self) {
        self.blip(CLICK_BLIP);
    }

    pub fn play_hover_sound(&self) {
        self.blip(HOVER_BLIP);
    }

    // Fire a one-shot sine routed straight to the destination
    fn blip(&self, blip: Blip) {
        if !self.transport.blips_enabled() {
            return;
        }
        let Some(graph) = self.graph.as_ref() else {
            return;
        };
        let ctx = &graph.ctx;
        let Ok(src) = web::OscillatorNode::new(ctx) else {
            return;
        };
        src.set_type(web::OscillatorType::Sine);
        src.frequency().set_value(blip.frequency_hz);
        let Ok(g) = create_gain(ctx, blip.start_gain, "Blip") else {
            return;
        };
        let now = ctx.current_time();
        _ = g.gain().set_value_at_time(blip.start_gain, now);
        _ = g
            .gain()
            .exponential_ramp_to_value_at_time(blip.end_gain, now + blip.duration_sec);
        _ = src.connect_with_audio_node(&g);
        _ = g.connect_with_audio_node(&ctx.destination());
        _ = src.start_with_when(now);
        _ = src.stop_with_when(now + blip.duration_sec);
    }
}
