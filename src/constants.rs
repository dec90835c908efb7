/// Page wiring and tuning constants.
///
/// Element ids, selectors and the numbers that shape each effect live here so
/// the wiring code reads as behavior rather than magic values.
// Element ids
pub const ID_SCENE_CANVAS: &str = "bg-canvas";
pub const ID_PARTICLES_CANVAS: &str = "particles-canvas";
pub const ID_THEME_TOGGLE: &str = "theme-toggle";
pub const ID_AUDIO_TOGGLE: &str = "audio-toggle";
pub const ID_NAVBAR: &str = "navbar";
pub const ID_NAV_TOGGLE: &str = "nav-toggle";
pub const ID_NAV_MENU: &str = "nav-menu";
pub const ID_LOGO_TEXT: &str = "logo-text";
pub const ID_LOGO_ICON: &str = "logo-icon";
pub const ID_CONTACT_FORM: &str = "contact-form";
pub const ID_FORM_STATUS: &str = "form-status";

// Selectors
pub const SEL_SAME_PAGE_ANCHORS: &str = "a[href^=\"#\"]";
pub const SEL_REVEAL_TARGETS: &str = ".section, .project-card, .skill-category, .timeline-item";
pub const SEL_SECTIONS: &str = "section[id]";
pub const SEL_NAV_LINKS: &str = ".nav-link";
pub const SEL_SOUND_TARGETS: &str = "a, button, .project-card";
pub const SEL_SUBMIT_BUTTON: &str = "button[type=\"submit\"]";

// CSS classes toggled by the interactions
pub const CLASS_ACTIVE: &str = "active";
pub const CLASS_FADE_IN: &str = "fade-in";
pub const CLASS_VISIBLE: &str = "visible";
pub const CLASS_SCROLLED: &str = "scrolled";
pub const CLASS_PLAYING: &str = "playing";
pub const CLASS_HIDDEN: &str = "hidden";

// Theme
pub const THEME_ATTRIBUTE: &str = "data-theme";
pub const THEME_STORAGE_KEY: &str = "theme";
pub const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";
pub const DARK_ACCENT_HEX: u32 = 0x64ffda;
pub const LIGHT_ACCENT_HEX: u32 = 0x6366f1;

// 3D scene
pub const CAMERA_Z: f32 = 5.0;
pub const CAMERA_FOVY_DEG: f32 = 75.0;
pub const SOLID_RADIUS: f32 = 1.5;
pub const SOLID_OPACITY: f32 = 0.3;
pub const SCENE_POINT_COUNT: usize = 500;
pub const SCENE_POINT_EXTENT: f32 = 5.0; // half-size of the cube points are scattered in
pub const SCENE_POINT_OPACITY: f32 = 0.8;
pub const AUTO_ROTATE_X: f32 = 0.001;
pub const AUTO_ROTATE_Y: f32 = 0.002;
pub const POINTER_ROTATION_SCALE: f32 = 0.5;
pub const ROTATION_DAMPING: f32 = 0.05;
pub const POINT_FIELD_SPIN: f32 = 0.0005;
pub const LIGHT_POSITION: [f32; 3] = [5.0, 5.0, 5.0];
pub const LIGHT_INTENSITY: f32 = 0.8;
pub const AMBIENT_LIGHT: f32 = 0.5;

// 2D particle field
pub const PARTICLE_COUNT: usize = 50;
pub const PARTICLE_MAX_SPEED: f32 = 0.5;
pub const PARTICLE_RADIUS_MIN: f32 = 1.0;
pub const PARTICLE_RADIUS_MAX: f32 = 3.0;
pub const PARTICLE_OPACITY_MIN: f32 = 0.2;
pub const PARTICLE_OPACITY_MAX: f32 = 0.7;
pub const REPULSION_RADIUS: f32 = 100.0;
pub const REPULSION_STRENGTH: f32 = 3.0;
pub const LINK_DISTANCE: f32 = 120.0;
pub const LINK_MAX_OPACITY: f32 = 0.2;

// Audio
pub const AMBIENT_SECONDS: f32 = 4.0;
pub const AMBIENT_GAIN: f32 = 0.1;
pub const BLIP_START_GAIN: f32 = 0.1;
pub const BLIP_END_GAIN: f32 = 0.01;
pub const CLICK_FREQUENCY_HZ: f32 = 800.0;
pub const CLICK_DURATION_SEC: f64 = 0.1;
pub const HOVER_FREQUENCY_HZ: f32 = 600.0;
pub const HOVER_DURATION_SEC: f64 = 0.05;

// Scrolling and navigation
pub const HEADER_OFFSET: f64 = 80.0;
pub const NAV_SHADOW_THRESHOLD: f64 = 100.0;
pub const SECTION_LOOKAHEAD: f64 = 200.0;
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

// Logo cycler
pub const LOGO_INTERVAL_MS: i32 = 3000;
pub const LOGO_START_DELAY_MS: i32 = 500;

// Contact form
pub const CONTACT_ENDPOINT: &str = "https://api.web3forms.com/submit";
pub const SENDING_LABEL: &str = "Sending...";
pub const SUCCESS_MESSAGE: &str = "Thank you! Your message has been sent successfully.";
pub const ERROR_MESSAGE: &str = "Oops! Something went wrong. Please try again.";
pub const BANNER_HIDE_MS: i32 = 5000;
