#![cfg(target_arch = "wasm32")]
use crate::audio::AmbientAudio;
use crate::canvas::CanvasParticleField;
use crate::constants::{ID_PARTICLES_CANVAS, ID_SCENE_CANVAS, ID_THEME_TOGGLE};
use crate::core::schedule::LoopHandle;
use crate::core::{Theme, ThemeBus};
use crate::render::SceneRenderer;
use crate::theme::ThemeController;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod audio;
mod canvas;
mod constants;
mod contact;
mod core;
mod dom;
mod events;
mod frame;
mod overlay;
mod render;
mod theme;

fn canvas_by_id(document: &web::Document, id: &str) -> Option<web::HtmlCanvasElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlCanvasElement>().ok())
}

type Loops = Rc<RefCell<Vec<LoopHandle>>>;

async fn start_scene(
    canvas: web::HtmlCanvasElement,
    theme: Theme,
    bus: ThemeBus,
    loops: Loops,
) {
    // Match the backing store to CSS size * devicePixelRatio before configuring
    dom::sync_canvas_backing_size(&canvas);
    let scene = match SceneRenderer::new(&canvas, theme).await {
        Ok(s) => Rc::new(RefCell::new(s)),
        Err(e) => {
            log::warn!("[scene] disabled: {:?}", e);
            return;
        }
    };

    let scene_theme = scene.clone();
    bus.subscribe(move |t| scene_theme.borrow_mut().set_theme(t));
    events::wire_scene_pointer(canvas, scene.clone());

    let handle = frame::start_loop(move || {
        if let Err(e) = scene.borrow_mut().render() {
            log::error!("render error: {:?}", e);
        }
    });
    loops.borrow_mut().push(handle);
}

fn start_particles(canvas: web::HtmlCanvasElement, theme: Theme, bus: &ThemeBus, loops: &Loops) {
    let field = match CanvasParticleField::new(canvas, theme) {
        Ok(f) => Rc::new(RefCell::new(f)),
        Err(e) => {
            log::warn!("[particles] disabled: {:?}", e);
            return;
        }
    };

    let field_theme = field.clone();
    bus.subscribe(move |t| field_theme.borrow_mut().set_theme(t));
    events::wire_canvas_pointer(field.clone());

    let handle = frame::start_loop(move || field.borrow_mut().frame());
    loops.borrow_mut().push(handle);
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("portfolio-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    // Theme first so both renderers start with the right accent
    let bus = ThemeBus::default();
    let controller = Rc::new(RefCell::new(ThemeController::new(
        document.clone(),
        bus.clone(),
    )));
    let theme = controller.borrow().current();
    let controller_click = controller.clone();
    dom::add_click_listener(&document, ID_THEME_TOGGLE, move || {
        controller_click.borrow_mut().toggle();
    });

    let loops: Loops = Rc::new(RefCell::new(Vec::new()));
    match canvas_by_id(&document, ID_SCENE_CANVAS) {
        Some(canvas) => {
            spawn_local(start_scene(canvas, theme, bus.clone(), loops.clone()));
        }
        None => log::info!("[scene] no #{} on this page", ID_SCENE_CANVAS),
    }
    match canvas_by_id(&document, ID_PARTICLES_CANVAS) {
        Some(canvas) => start_particles(canvas, theme, &bus, &loops),
        None => log::info!("[particles] no #{} on this page", ID_PARTICLES_CANVAS),
    }

    // One audio handle shared by the toggle, interaction sounds and visibility
    let audio = Rc::new(RefCell::new(AmbientAudio::new()));
    events::wire_audio_toggle(&document, audio.clone());
    events::wire_interaction_sounds(&document, audio.clone());
    events::wire_visibility_pause(&document, audio);

    events::wire_smooth_scroll(&document);
    events::wire_reveal(&document);
    events::wire_mobile_nav(&document);
    events::wire_nav_scroll(&document);
    events::start_logo_cycler(&document);
    contact::wire_contact_form(&document);

    // Stop both render loops when the page is being torn down (not when it
    // goes into the back/forward cache)
    dom::listen(&window, "pagehide", move |ev: web::PageTransitionEvent| {
        if ev.persisted() {
            return;
        }
        for handle in loops.borrow().iter() {
            handle.cancel();
        }
    });

    log::info!("[init] wired; theme={} listeners={}", theme.as_str(), bus.len());
    Ok(())
}
