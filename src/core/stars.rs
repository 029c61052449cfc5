// Ambient star field drawn behind the page.
//
// Stars drift with a constant velocity and wrap around the edges of the
// viewport. Stars close to the pointer are linked to it with a faint line.

use crate::core::constants::*;
use crate::core::surface::{DrawErrors, Surface, Theme};
use glam::Vec2;
use rand::Rng;

#[derive(Clone, Copy, Debug)]
pub struct Star {
    pub pos: Vec2,
    pub radius: f32,
    pub vel: Vec2,
}

impl Star {
    /// A star placed uniformly on a `width` × `height` surface.
    pub fn random<R: Rng + ?Sized>(width: f32, height: f32, rng: &mut R) -> Self {
        Self {
            pos: Vec2::new(rng.gen::<f32>() * width, rng.gen::<f32>() * height),
            radius: rng.gen::<f32>() * STAR_MAX_RADIUS,
            vel: Vec2::new(
                rng.gen::<f32>() * 2.0 * STAR_MAX_SPEED - STAR_MAX_SPEED,
                rng.gen::<f32>() * 2.0 * STAR_MAX_SPEED - STAR_MAX_SPEED,
            ),
        }
    }

    #[inline]
    pub fn step(&mut self, width: f32, height: f32) {
        self.pos += self.vel;
        self.pos.x = wrap_axis(self.pos.x, width);
        self.pos.y = wrap_axis(self.pos.y, height);
    }
}

/// Toroidal wrap of `v` into `[0, bound)`. The overshoot past an edge is
/// carried over to the opposite side.
#[inline]
pub fn wrap_axis(v: f32, bound: f32) -> f32 {
    if bound <= 0.0 {
        return 0.0;
    }
    let w = v.rem_euclid(bound);
    // rem_euclid may round up to `bound` for tiny negative inputs
    if w >= bound {
        0.0
    } else {
        w
    }
}

pub struct StarField {
    pub stars: Vec<Star>,
    width: f32,
    height: f32,
}

impl StarField {
    pub fn new<R: Rng + ?Sized>(width: f32, height: f32, rng: &mut R) -> Self {
        let mut field = Self {
            stars: Vec::with_capacity(STAR_COUNT),
            width,
            height,
        };
        field.reseed(rng);
        field
    }

    /// Adopt new surface dimensions and regenerate every star.
    pub fn resize<R: Rng + ?Sized>(&mut self, width: f32, height: f32, rng: &mut R) {
        self.width = width.max(0.0);
        self.height = height.max(0.0);
        self.reseed(rng);
    }

    fn reseed<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.stars.clear();
        for _ in 0..STAR_COUNT {
            self.stars.push(Star::random(self.width, self.height, rng));
        }
    }

    #[inline]
    pub fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    pub fn update(&mut self) {
        let (w, h) = (self.width, self.height);
        for star in &mut self.stars {
            star.step(w, h);
        }
    }

    pub fn draw<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        pointer: Option<Vec2>,
        theme: Theme,
    ) -> anyhow::Result<()> {
        surface.clear();
        let color = match theme {
            Theme::Dark => STAR_COLOR_DARK,
            Theme::Light => STAR_COLOR_LIGHT,
        };
        let mut errors = DrawErrors::default();
        for star in &self.stars {
            errors.record(surface.fill_circle(star.pos, star.radius, color));
            if let Some(p) = pointer {
                if star.pos.distance(p) < STAR_LINK_DISTANCE {
                    surface.stroke_line(star.pos, p, STAR_LINK_COLOR, STAR_LINK_WIDTH);
                }
            }
        }
        errors.finish()
    }
}
