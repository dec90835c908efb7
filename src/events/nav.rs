use crate::constants::{CLASS_ACTIVE, ID_NAV_MENU, ID_NAV_TOGGLE};
use crate::core::nav::MobileNav;
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

fn apply(open: bool, toggle: &web::Element, menu: &web::Element) {
    for el in [toggle, menu] {
        _ = el.class_list().toggle_with_force(CLASS_ACTIVE, open);
    }
}

/// Collapsible mobile menu. No-op when either element is missing.
pub fn wire_mobile_nav(document: &web::Document) {
    let (Some(toggle), Some(menu)) = (
        document.get_element_by_id(ID_NAV_TOGGLE),
        document.get_element_by_id(ID_NAV_MENU),
    ) else {
        return;
    };
    let state = Rc::new(RefCell::new(MobileNav::default()));

    {
        let state = state.clone();
        let (t, m) = (toggle.clone(), menu.clone());
        dom::listen(&toggle, "click", move |_: web::Event| {
            let open = state.borrow_mut().toggle();
            apply(open, &t, &m);
        });
    }

    if let Ok(links) = menu.query_selector_all("a") {
        for link in (0..links.length()).filter_map(|i| links.item(i)) {
            let state = state.clone();
            let (t, m) = (toggle.clone(), menu.clone());
            dom::listen(&link, "click", move |_: web::Event| {
                let open = state.borrow_mut().link_clicked();
                apply(open, &t, &m);
            });
        }
    }

    let (t, m) = (toggle, menu);
    dom::listen(document, "click", move |ev: web::Event| {
        let node = ev.target().and_then(|t| t.dyn_into::<web::Node>().ok());
        let on_toggle = t.contains(node.as_ref());
        let in_menu = m.contains(node.as_ref());
        let open = state.borrow_mut().document_clicked(on_toggle, in_menu);
        apply(open, &t, &m);
    });
}
