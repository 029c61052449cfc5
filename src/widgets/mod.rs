//! DOM widgets of the greeting page. Each `wire_*` function attaches its
//! listeners once; pure state lives in `crate::core`.

pub mod balloons;
pub mod book;
pub mod cake;
pub mod carousel;
pub mod confetti;
pub mod countdown;
pub mod footer;
pub mod garden;
pub mod gift;
pub mod letters;
pub mod reveal;
pub mod theme;
