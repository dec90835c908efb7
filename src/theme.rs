use crate::constants::{DARK_SCHEME_QUERY, THEME_ATTRIBUTE, THEME_STORAGE_KEY};
use crate::core::{Theme, ThemeBus};
use web_sys as web;

/// Owns the page theme: writes `data-theme` for CSS, persists the choice and
/// publishes changes to subscribed renderers.
pub struct ThemeController {
    document: web::Document,
    bus: ThemeBus,
    current: Theme,
}

fn local_storage() -> Option<web::Storage> {
    web::window().and_then(|w| w.local_storage().ok().flatten())
}

fn stored_theme() -> Option<String> {
    local_storage().and_then(|s| s.get_item(THEME_STORAGE_KEY).ok().flatten())
}

fn system_prefers_dark() -> bool {
    web::window()
        .and_then(|w| w.match_media(DARK_SCHEME_QUERY).ok().flatten())
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

impl ThemeController {
    /// Resolve the starting theme and apply it to the document without
    /// persisting it (an untouched preference keeps following the system).
    pub fn new(document: web::Document, bus: ThemeBus) -> Self {
        let stored = stored_theme();
        let current = Theme::initial(stored.as_deref(), system_prefers_dark());
        log::info!(
            "[theme] initial={} (stored={:?})",
            current.as_str(),
            stored
        );
        let controller = Self {
            document,
            bus,
            current,
        };
        controller.apply_attribute();
        controller
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    pub fn toggle(&mut self) -> Theme {
        self.current = self.current.toggled();
        self.apply_attribute();
        if let Some(storage) = local_storage() {
            if let Err(e) = storage.set_item(THEME_STORAGE_KEY, self.current.as_str()) {
                log::warn!("[theme] could not persist preference: {:?}", e);
            }
        }
        self.bus.publish(self.current);
        log::info!("[theme] switched to {}", self.current.as_str());
        self.current
    }

    fn apply_attribute(&self) {
        if let Some(root) = self.document.document_element() {
            _ = root.set_attribute(THEME_ATTRIBUTE, self.current.as_str());
        }
    }
}
