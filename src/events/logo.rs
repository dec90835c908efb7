use crate::constants::{ID_LOGO_ICON, ID_LOGO_TEXT, LOGO_INTERVAL_MS, LOGO_START_DELAY_MS};
use crate::core::logo::LogoCycler;
use crate::dom;
use web_sys as web;

/// Rotate the logo label/icon on a fixed interval. The first rotation waits
/// a short grace period so the icon font can load.
pub fn start_logo_cycler(document: &web::Document) {
    let Some(text) = document.get_element_by_id(ID_LOGO_TEXT) else {
        return;
    };
    let icon = document.get_element_by_id(ID_LOGO_ICON);

    dom::set_timeout(LOGO_START_DELAY_MS, move || {
        let mut cycler = LogoCycler::default();
        dom::set_interval(LOGO_INTERVAL_MS, move || {
            let frame = cycler.advance();
            text.set_text_content(Some(frame.label));
            if let Some(icon) = &icon {
                icon.set_class_name(frame.icon_class);
            }
        });
    });
}
