use crate::constants::{HEADER_OFFSET, NAV_SHADOW_THRESHOLD, SECTION_LOOKAHEAD};

/// Where a same-page anchor click should scroll to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScrollTarget {
    Top,
    Element(String),
}

/// Interpret an anchor `href`; `None` means the link is not a same-page
/// anchor and the browser should handle it.
pub fn anchor_target(href: &str) -> Option<ScrollTarget> {
    let id = href.strip_prefix('#')?;
    match id {
        "" | "home" => Some(ScrollTarget::Top),
        _ => Some(ScrollTarget::Element(id.to_string())),
    }
}

/// Document offset to scroll to so the element clears the fixed header.
#[inline]
pub fn offset_for_element(element_doc_top: f64) -> f64 {
    (element_doc_top - HEADER_OFFSET).max(0.0)
}

#[inline]
pub fn nav_has_shadow(scroll_y: f64) -> bool {
    scroll_y > NAV_SHADOW_THRESHOLD
}

/// Id of the last section whose top, less the lookahead, has been scrolled
/// past. `sections` are `(id, document_top)` in document order.
pub fn active_section<'a>(sections: &'a [(String, f64)], scroll_y: f64) -> Option<&'a str> {
    sections
        .iter()
        .filter(|(_, top)| scroll_y >= top - SECTION_LOOKAHEAD)
        .last()
        .map(|(id, _)| id.as_str())
}

/// Whether a nav link `href` points at the section with `id`.
#[inline]
pub fn link_targets_section(href: &str, id: &str) -> bool {
    href.strip_prefix('#') == Some(id)
}

/// One-way reveal latch: once visible, always visible.
#[inline]
pub fn reveal(already_visible: bool, intersecting: bool) -> bool {
    already_visible || intersecting
}
