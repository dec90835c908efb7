use crate::constants::{
    CLASS_ACTIVE, CLASS_SCROLLED, ID_NAVBAR, SEL_NAV_LINKS, SEL_SAME_PAGE_ANCHORS, SEL_SECTIONS,
};
use crate::core::scroll::{
    active_section, anchor_target, link_targets_section, nav_has_shadow, offset_for_element,
    ScrollTarget,
};
use crate::dom;
use web_sys as web;

fn smooth_scroll_to(top: f64) {
    if let Some(w) = web::window() {
        let opts = web::ScrollToOptions::new();
        opts.set_top(top);
        opts.set_behavior(web::ScrollBehavior::Smooth);
        w.scroll_to_with_scroll_to_options(&opts);
    }
}

/// Intercept same-page anchor clicks and animate the scroll instead.
pub fn wire_smooth_scroll(document: &web::Document) {
    let anchors = dom::query_all(document, SEL_SAME_PAGE_ANCHORS);
    for anchor in anchors {
        let doc = document.clone();
        let el = anchor.clone();
        dom::listen(&anchor, "click", move |ev: web::Event| {
            let Some(href) = el.get_attribute("href") else {
                return;
            };
            match anchor_target(&href) {
                Some(ScrollTarget::Top) => {
                    ev.prevent_default();
                    smooth_scroll_to(0.0);
                }
                Some(ScrollTarget::Element(id)) => {
                    if let Some(target) = doc.get_element_by_id(&id) {
                        ev.prevent_default();
                        smooth_scroll_to(offset_for_element(dom::document_top(&target)));
                    }
                }
                None => {}
            }
        });
    }
}

/// Scroll-driven nav styling: shadow past the threshold and the current
/// section's link highlighted.
pub fn wire_nav_scroll(document: &web::Document) {
    let Some(window) = web::window() else {
        return;
    };
    let navbar = document.get_element_by_id(ID_NAVBAR);
    let sections = dom::query_all(document, SEL_SECTIONS);
    let links = dom::query_all(document, SEL_NAV_LINKS);

    let update = move || {
        let y = dom::scroll_y();
        if let Some(nav) = &navbar {
            let cl = nav.class_list();
            if nav_has_shadow(y) {
                _ = cl.add_1(CLASS_SCROLLED);
            } else {
                _ = cl.remove_1(CLASS_SCROLLED);
            }
        }

        let tops: Vec<(String, f64)> = sections
            .iter()
            .map(|s| (s.id(), dom::document_top(s)))
            .collect();
        let current = active_section(&tops, y);
        for link in &links {
            let href = link.get_attribute("href").unwrap_or_default();
            let cl = link.class_list();
            match current {
                Some(id) if link_targets_section(&href, id) => {
                    _ = cl.add_1(CLASS_ACTIVE);
                }
                _ => {
                    _ = cl.remove_1(CLASS_ACTIVE);
                }
            }
        }
    };
    update();
    dom::listen(&window, "scroll", move |_: web::Event| update());
}
