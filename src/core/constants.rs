/// Simulation tuning constants.
///
/// Every particle effect on the page is tuned by hand; keeping the numbers
/// here makes the per-frame code read as behavior rather than arithmetic.
// Star field
pub const STAR_COUNT: usize = 100;
pub const STAR_MAX_RADIUS: f32 = 2.0;
pub const STAR_MAX_SPEED: f32 = 0.25; // per axis, px per frame
pub const STAR_LINK_DISTANCE: f32 = 100.0; // pointer link radius in px
pub const STAR_LINK_WIDTH: f32 = 1.0;
pub const STAR_LINK_COLOR: &str = "rgba(255, 105, 180, 0.2)";
pub const STAR_COLOR_DARK: &str = "white";
pub const STAR_COLOR_LIGHT: &str = "#FF69B4";

// Cursor trail
pub const TRAIL_BURST: usize = 3; // particles per pointer move
pub const TRAIL_MIN_SPAWN_RADIUS: f32 = 1.0;
pub const TRAIL_SPAWN_RADIUS_SPAN: f32 = 5.0;
pub const TRAIL_MAX_SPEED: f32 = 1.5; // per axis, px per frame
pub const TRAIL_DECAY: f32 = 0.1; // radius lost per frame
pub const TRAIL_MIN_RADIUS: f32 = 0.2; // removed at or below this

// Particle text
pub const TEXT_BUFFER_WIDTH: u32 = 800;
pub const TEXT_BUFFER_HEIGHT: u32 = 150;
pub const TEXT_WORD: &str = "Birthday";
pub const TEXT_FONT: &str = "bold 80px Playfair Display";
pub const TEXT_RASTER_COLOR: &str = "#FF69B4";
pub const TEXT_PARTICLE_COLOR: &str = "pink";
pub const TEXT_ALPHA_THRESHOLD: u8 = 128;
pub const TEXT_PARTICLE_RADIUS: f32 = 2.0;
pub const TEXT_MIN_DENSITY: f32 = 1.0;
pub const TEXT_DENSITY_SPAN: f32 = 30.0;
pub const TEXT_INTERACTION_RADIUS: f32 = 100.0;
pub const TEXT_RETURN_DIVISOR: f32 = 10.0; // fraction of offset recovered per frame is 1/this

// Frame clock
pub const FRAME_FAILURE_LOG_EVERY: u64 = 600; // ~10 s at 60 Hz
