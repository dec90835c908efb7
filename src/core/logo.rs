/// One step of the cycling logo: label text and an icon class list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LogoFrame {
    pub label: &'static str,
    pub icon_class: &'static str,
}

pub const LOGO_FRAMES: [LogoFrame; 4] = [
    LogoFrame {
        label: "Developer",
        icon_class: "fas fa-code",
    },
    LogoFrame {
        label: "Designer",
        icon_class: "fas fa-palette",
    },
    LogoFrame {
        label: "Creator",
        icon_class: "fas fa-lightbulb",
    },
    LogoFrame {
        label: "Engineer",
        icon_class: "fas fa-cogs",
    },
];

/// Position within `LOGO_FRAMES`; the first tick shows the frame after the
/// one rendered in the page markup.
#[derive(Clone, Debug, Default)]
pub struct LogoCycler {
    index: usize,
}

impl LogoCycler {
    pub fn current(&self) -> LogoFrame {
        LOGO_FRAMES[self.index]
    }

    pub fn advance(&mut self) -> LogoFrame {
        self.index = (self.index + 1) % LOGO_FRAMES.len();
        self.current()
    }
}
