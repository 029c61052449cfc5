pub mod carousel;
pub mod clock;
pub mod constants;
pub mod countdown;
pub mod decor;
pub mod flipbook;
pub mod launch;
pub mod letters;
pub mod pointer;
pub mod stars;
pub mod surface;
pub mod text;
pub mod trail;

pub use clock::FrameStats;
pub use launch::Launch;
pub use pointer::PointerState;
pub use stars::StarField;
pub use surface::{Surface, Theme};
pub use text::TextSim;
pub use trail::TrailSim;
