pub mod logo;
pub mod nav;
pub mod pointer;
pub mod reveal;
pub mod scroll;
pub mod sounds;

pub use logo::start_logo_cycler;
pub use nav::wire_mobile_nav;
pub use pointer::{wire_canvas_pointer, wire_scene_pointer};
pub use reveal::wire_reveal;
pub use scroll::{wire_nav_scroll, wire_smooth_scroll};
pub use sounds::{wire_audio_toggle, wire_interaction_sounds, wire_visibility_pause};
