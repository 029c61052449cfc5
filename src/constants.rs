/// Page wiring constants: element ids, timings and asset paths.
///
/// The markup lives in `index.html`; these names must match it.
// Canvases
pub const STAR_CANVAS_ID: &str = "star-map";
pub const TRAIL_CANVAS_ID: &str = "mouse-trail";
pub const TEXT_CANVAS_ID: &str = "text-particles";
pub const GARDEN_CANVAS_ID: &str = "flower-garden";
pub const GARDEN_HEIGHT_PX: u32 = 200;

// Particle text waits for web fonts before rasterizing
pub const TEXT_INIT_DELAY_MS: i32 = 1000;

// Music
pub const MUSIC_SRC: &str = "assets/music.mp3";
pub const MUSIC_DEFAULT_VOLUME: f64 = 0.5;
pub const MUSIC_TOGGLE_ID: &str = "music-toggle-btn";
pub const VOLUME_SLIDER_ID: &str = "volume-slider";
pub const ENTRY_OVERLAY_ID: &str = "entry-overlay";
pub const ENTER_BUTTON_ID: &str = "enter-btn";
pub const ENTRY_FADE_MS: i32 = 1000;

// Balloons
pub const BALLOON_CONTAINER_ID: &str = "balloon-container";
pub const BALLOON_SPAWN_MS: i32 = 1500;
pub const BALLOON_POP_MS: i32 = 200;

// Theme
pub const THEME_TOGGLE_ID: &str = "theme-toggle";
pub const THEME_ATTR: &str = "data-theme";

// Reveal on scroll
pub const REVEAL_SELECTOR: &str = ".fade-in-up, .section-title, .reveal-text";
pub const REVEAL_THRESHOLD: f64 = 0.1;

// Cake
pub const WISH_MESSAGE_ID: &str = "wish-message";
pub const WISH_DELAY_MS: i32 = 500;

// Modals (letters and gift popup)
pub const LETTER_MODAL_ID: &str = "letter-modal";
pub const LETTER_TITLE_ID: &str = "letter-title";
pub const LETTER_BODY_ID: &str = "letter-body";
pub const MODAL_SHOW_DELAY_MS: i32 = 10;
pub const MODAL_HIDE_DELAY_MS: i32 = 300;

// Gift
pub const GIFT_CONTAINER_ID: &str = "gift-container";
pub const POPUP_OVERLAY_ID: &str = "popup-overlay";
pub const CLOSE_POPUP_ID: &str = "close-popup";
pub const GIFT_CONFETTI_MS: u64 = 3000;
pub const GIFT_POPUP_DELAY_MS: i32 = 1500;

// Garden
pub const GARDEN_TRIGGER_MARGIN_PX: f64 = 50.0;

// Carousel
pub const CAROUSEL_AUTOPLAY_MS: i32 = 5000;

// Countdown gate
pub const COUNTDOWN_OVERLAY_ID: &str = "countdown-overlay";
pub const COUNTDOWN_DIGIT_IDS: [&str; 4] = ["days", "hours", "minutes", "seconds"];
pub const COUNTDOWN_TARGET: &str = "December 28, 2025 00:00:00";
pub const COUNTDOWN_TICK_MS: i32 = 1000;

// Footer
pub const CURRENT_DATE_ID: &str = "current-date";
