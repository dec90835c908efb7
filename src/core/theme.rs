use crate::constants::{DARK_ACCENT_HEX, LIGHT_ACCENT_HEX};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Colour scheme applied to the whole page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    /// Parse the value stored in `data-theme` or local storage.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    /// Resolve the starting theme: a stored preference wins, otherwise the
    /// system colour scheme decides.
    pub fn initial(stored: Option<&str>, system_prefers_dark: bool) -> Self {
        match stored.and_then(Theme::parse) {
            Some(t) => t,
            None if system_prefers_dark => Theme::Dark,
            None => Theme::Light,
        }
    }

    /// Accent colour shared by the wireframe solid and both particle layers.
    pub fn accent_hex(self) -> u32 {
        match self {
            Theme::Dark => DARK_ACCENT_HEX,
            Theme::Light => LIGHT_ACCENT_HEX,
        }
    }

    pub fn accent_rgb(self) -> [f32; 3] {
        hex_to_rgb(self.accent_hex())
    }
}

#[inline]
pub fn hex_to_rgb(hex: u32) -> [f32; 3] {
    [
        ((hex >> 16) & 0xff) as f32 / 255.0,
        ((hex >> 8) & 0xff) as f32 / 255.0,
        (hex & 0xff) as f32 / 255.0,
    ]
}

type Listener = Box<dyn FnMut(Theme)>;

/// Notification channel the theme controller publishes to.
///
/// Cloning the bus shares the same listener list. The last published theme
/// is replayed to anyone subscribing later, so a renderer that finishes
/// async setup after a toggle still picks it up. Listeners must not
/// subscribe from inside a publish.
#[derive(Clone, Default)]
pub struct ThemeBus {
    listeners: Rc<RefCell<Vec<Listener>>>,
    last: Rc<Cell<Option<Theme>>>,
}

impl ThemeBus {
    pub fn subscribe(&self, mut listener: impl FnMut(Theme) + 'static) {
        if let Some(theme) = self.last.get() {
            listener(theme);
        }
        self.listeners.borrow_mut().push(Box::new(listener));
    }

    pub fn publish(&self, theme: Theme) {
        self.last.set(Some(theme));
        for listener in self.listeners.borrow_mut().iter_mut() {
            listener(theme);
        }
    }

    pub fn len(&self) -> usize {
        self.listeners.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
