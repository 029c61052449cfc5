// Randomized decorations: floating balloons, footer flowers and confetti
// burst presets.

use crate::core::surface::Surface;
use glam::Vec2;
use rand::Rng;

pub const BALLOON_COLORS: [&str; 5] = ["#FF69B4", "#FFB7C5", "#DDA0DD", "#87CEEB", "#FFD700"];
pub const BALLOON_MAX_LEFT_VW: f32 = 95.0;
pub const BALLOON_MIN_DURATION_SEC: f32 = 5.0;
pub const BALLOON_DURATION_SPAN_SEC: f32 = 5.0;

pub const FLOWER_SPACING_PX: usize = 30;
pub const FLOWER_HEAD_Y: f32 = 150.0;
pub const FLOWER_STEM_LEN: f32 = 50.0;
pub const FLOWER_PETALS: usize = 5;
pub const FLOWER_PETAL_OFFSET: f32 = 10.0;
pub const FLOWER_PETAL_RADIUS: f32 = 5.0;
pub const FLOWER_CENTER_RADIUS: f32 = 3.0;
pub const FLOWER_STEM_COLOR: &str = "green";
pub const FLOWER_CENTER_COLOR: &str = "yellow";
pub const FLOWER_MAX_DELAY_MS: f64 = 1000.0;

/// Appearance of one rising balloon.
#[derive(Clone, Copy, Debug)]
pub struct BalloonSpec {
    pub color: &'static str,
    pub left_vw: f32,
    pub duration_sec: f32,
}

impl BalloonSpec {
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            color: BALLOON_COLORS[rng.gen_range(0..BALLOON_COLORS.len())],
            left_vw: rng.gen::<f32>() * BALLOON_MAX_LEFT_VW,
            duration_sec: rng.gen::<f32>() * BALLOON_DURATION_SPAN_SEC + BALLOON_MIN_DURATION_SEC,
        }
    }
}

/// X positions of the footer flowers across a garden `width` px wide.
pub fn flower_columns(width: u32) -> impl Iterator<Item = f32> {
    (0..width as usize)
        .step_by(FLOWER_SPACING_PX)
        .map(|x| x as f32)
}

/// Pastel petal color for a random hue.
pub fn random_petal_color<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!("hsl({:.0}, 70%, 70%)", rng.gen::<f32>() * 360.0)
}

pub fn petal_centers(head: Vec2) -> [Vec2; FLOWER_PETALS] {
    std::array::from_fn(|i| {
        let a = i as f32;
        head + Vec2::new(a.sin(), a.cos()) * FLOWER_PETAL_OFFSET
    })
}

/// Stem hanging below `head`, five petals around it and a yellow center.
pub fn draw_flower<S: Surface + ?Sized>(
    surface: &mut S,
    head: Vec2,
    petal_color: &str,
) -> anyhow::Result<()> {
    surface.stroke_line(
        head,
        head + Vec2::new(0.0, FLOWER_STEM_LEN),
        FLOWER_STEM_COLOR,
        1.0,
    );
    for c in petal_centers(head) {
        surface.fill_circle(c, FLOWER_PETAL_RADIUS, petal_color)?;
    }
    surface.fill_circle(head, FLOWER_CENTER_RADIUS, FLOWER_CENTER_COLOR)
}

/// Options passed to the page's confetti library.
///
/// Origins are fractions of the viewport; `None` leaves the library default.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConfettiBurst {
    pub particle_count: u32,
    pub spread: f32,
    pub angle: Option<f32>,
    pub origin_x: Option<f32>,
    pub origin_y: Option<f32>,
}

impl ConfettiBurst {
    /// Small puff where a balloon was popped, given client coordinates.
    pub fn balloon_pop(client: Vec2, viewport: Vec2) -> Self {
        let origin = if viewport.x > 0.0 && viewport.y > 0.0 {
            client / viewport
        } else {
            Vec2::splat(0.5)
        };
        Self {
            particle_count: 20,
            spread: 30.0,
            angle: None,
            origin_x: Some(origin.x),
            origin_y: Some(origin.y),
        }
    }

    /// Celebration once every candle is out.
    pub fn candles_out() -> Self {
        Self {
            particle_count: 100,
            spread: 70.0,
            angle: None,
            origin_x: None,
            origin_y: Some(0.6),
        }
    }

    /// One of the two side cannons fired while the gift opens.
    pub fn gift_side(left: bool) -> Self {
        Self {
            particle_count: 5,
            spread: 55.0,
            angle: Some(if left { 60.0 } else { 120.0 }),
            origin_x: Some(if left { 0.0 } else { 1.0 }),
            origin_y: None,
        }
    }
}
