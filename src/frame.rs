use crate::core::schedule::LoopHandle;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Drive `tick` from requestAnimationFrame until the returned handle is
/// cancelled.
pub fn start_loop(mut tick: impl FnMut() + 'static) -> LoopHandle {
    let handle = LoopHandle::new();
    let raf: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let raf_next = raf.clone();
    let loop_handle = handle.clone();
    *raf.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !loop_handle.begin_frame() {
            log::info!("frame loop stopped after {} frames", loop_handle.frames());
            return;
        }
        tick();
        request_frame(&raf_next);
    }) as Box<dyn FnMut()>));
    request_frame(&raf);
    handle
}

fn request_frame(raf: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = raf.borrow().as_ref() {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
