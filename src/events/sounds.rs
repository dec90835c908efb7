use crate::audio::AmbientAudio;
use crate::constants::{CLASS_PLAYING, ID_AUDIO_TOGGLE, SEL_SOUND_TARGETS};
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// `#audio-toggle` flips the ambient loop and mirrors it in a class.
pub fn wire_audio_toggle(document: &web::Document, audio: Rc<RefCell<AmbientAudio>>) {
    let Some(button) = document.get_element_by_id(ID_AUDIO_TOGGLE) else {
        return;
    };
    let el = button.clone();
    dom::listen(&button, "click", move |_: web::Event| {
        let audible = audio.borrow_mut().toggle();
        _ = el.class_list().toggle_with_force(CLASS_PLAYING, audible);
    });
}

/// Hover and click blips on links, buttons and project cards.
pub fn wire_interaction_sounds(document: &web::Document, audio: Rc<RefCell<AmbientAudio>>) {
    let targets = dom::query_all(document, SEL_SOUND_TARGETS);
    for el in &targets {
        let hover = audio.clone();
        dom::listen(el, "mouseenter", move |_: web::Event| {
            hover.borrow().play_hover_sound();
        });
        let click = audio.clone();
        dom::listen(el, "click", move |_: web::Event| {
            click.borrow().play_click_sound();
        });
    }
}

/// Pause the ambient loop whenever the page is hidden.
pub fn wire_visibility_pause(document: &web::Document, audio: Rc<RefCell<AmbientAudio>>) {
    let doc = document.clone();
    dom::listen(document, "visibilitychange", move |_: web::Event| {
        if doc.visibility_state() == web::VisibilityState::Hidden {
            audio.borrow_mut().pause();
            if let Some(button) = doc.get_element_by_id(ID_AUDIO_TOGGLE) {
                _ = button.class_list().remove_1(CLASS_PLAYING);
            }
        }
    });
}
