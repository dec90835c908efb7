use crate::constants::{CLASS_HIDDEN, ID_FORM_STATUS};
use crate::core::contact::BannerKind;
use web_sys as web;

/// Show the form status banner with the message for `kind`.
pub fn show_status(document: &web::Document, kind: BannerKind) {
    if let Some(el) = document.get_element_by_id(ID_FORM_STATUS) {
        el.set_text_content(Some(kind.message()));
        el.set_class_name(&format!("form-status {}", kind.class()));
        // fallback for environments without CSS class
        _ = el.set_attribute("style", "");
    }
}

pub fn hide_status(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(ID_FORM_STATUS) {
        let cl = el.class_list();
        _ = cl.add_1(CLASS_HIDDEN);
        // fallback
        _ = el.set_attribute("style", "display:none");
    }
}

