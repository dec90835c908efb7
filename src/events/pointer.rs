use crate::canvas::CanvasParticleField;
use crate::core::scene::client_to_ndc;
use crate::dom;
use crate::render::SceneRenderer;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Window pointer movement steers the scene's target rotation; window resize
/// resizes the surface.
pub fn wire_scene_pointer(
    canvas: web::HtmlCanvasElement,
    scene: Rc<RefCell<SceneRenderer<'static>>>,
) {
    let Some(window) = web::window() else {
        return;
    };

    let scene_move = scene.clone();
    dom::listen(&window, "mousemove", move |ev: web::MouseEvent| {
        let (w, h) = dom::window_inner_size();
        let ndc = client_to_ndc(ev.client_x() as f64, ev.client_y() as f64, w, h);
        scene_move.borrow_mut().set_pointer_ndc(ndc);
    });

    dom::listen(&window, "resize", move |_: web::Event| {
        dom::sync_canvas_backing_size(&canvas);
        scene
            .borrow_mut()
            .resize_if_needed(canvas.width(), canvas.height());
    });
}

/// Canvas-local pointer feeds repulsion; leaving the canvas turns it off.
/// Window resize regenerates the particle set.
pub fn wire_canvas_pointer(field: Rc<RefCell<CanvasParticleField>>) {
    let canvas = field.borrow().canvas().clone();

    let field_move = field.clone();
    let canvas_move = canvas.clone();
    dom::listen(&canvas, "mousemove", move |ev: web::MouseEvent| {
        let rect = canvas_move.get_bounding_client_rect();
        let pos = Vec2::new(
            (ev.client_x() as f64 - rect.left()) as f32,
            (ev.client_y() as f64 - rect.top()) as f32,
        );
        field_move.borrow_mut().set_pointer(Some(pos));
    });

    let field_leave = field.clone();
    dom::listen(&canvas, "mouseleave", move |_: web::MouseEvent| {
        field_leave.borrow_mut().set_pointer(None);
    });

    if let Some(window) = web::window() {
        dom::listen(&window, "resize", move |_: web::Event| {
            field.borrow_mut().resize();
        });
    }
}
