pub mod contact;
pub mod logo;
pub mod nav;
pub mod particles;
pub mod scene;
pub mod schedule;
pub mod scroll;
pub mod synth;
pub mod theme;

pub use theme::{Theme, ThemeBus};

// Shaders bundled as string constants
pub static SCENE_WGSL: &str = include_str!("../../shaders/scene.wgsl");
