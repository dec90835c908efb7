use crate::constants::{
    CLASS_FADE_IN, CLASS_VISIBLE, REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD, SEL_REVEAL_TARGETS,
};
use crate::core::scroll::reveal;
use crate::dom;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Tag content blocks for fade-in and mark each one visible the first time
/// enough of it enters the viewport. Revealed elements are unobserved.
pub fn wire_reveal(document: &web::Document) {
    let targets = dom::query_all(document, SEL_REVEAL_TARGETS);
    if targets.is_empty() {
        return;
    }

    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                    continue;
                };
                let target = entry.target();
                let cl = target.class_list();
                if reveal(cl.contains(CLASS_VISIBLE), entry.is_intersecting()) {
                    _ = cl.add_1(CLASS_VISIBLE);
                    observer.unobserve(&target);
                }
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let opts = web::IntersectionObserverInit::new();
    opts.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    opts.set_root_margin(REVEAL_ROOT_MARGIN);
    let observer = match web::IntersectionObserver::new_with_options(
        callback.as_ref().unchecked_ref(),
        &opts,
    ) {
        Ok(o) => o,
        Err(e) => {
            log::warn!("[reveal] IntersectionObserver unavailable: {:?}", e);
            // Without an observer nothing would ever appear; show everything.
            for el in &targets {
                _ = el.class_list().add_1(CLASS_VISIBLE);
            }
            return;
        }
    };
    callback.forget();

    for el in &targets {
        _ = el.class_list().add_1(CLASS_FADE_IN);
        observer.observe(el);
    }
    log::info!("[reveal] observing {} elements", targets.len());
}
