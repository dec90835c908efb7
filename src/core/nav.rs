/// Open/closed state of the collapsible mobile menu.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MobileNav {
    pub open: bool,
}

impl MobileNav {
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    pub fn link_clicked(&mut self) -> bool {
        self.open = false;
        self.open
    }

    /// Document click: closes the menu unless it landed on the toggle or
    /// inside the menu.
    pub fn document_clicked(&mut self, on_toggle: bool, in_menu: bool) -> bool {
        if !on_toggle && !in_menu {
            self.open = false;
        }
        self.open
    }
}
