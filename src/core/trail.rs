// Cursor trail: short-lived colored sparks emitted at the pointer.

use crate::core::constants::*;
use crate::core::surface::{DrawErrors, Surface};
use glam::Vec2;
use rand::Rng;
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug)]
pub struct TrailParticle {
    pub pos: Vec2,
    pub radius: f32,
    pub vel: Vec2,
    /// Hue in degrees; drawn fully saturated at 50% lightness.
    pub hue: f32,
}

impl TrailParticle {
    pub fn new<R: Rng + ?Sized>(origin: Vec2, rng: &mut R) -> Self {
        Self {
            pos: origin,
            radius: rng.gen::<f32>() * TRAIL_SPAWN_RADIUS_SPAN + TRAIL_MIN_SPAWN_RADIUS,
            vel: Vec2::new(
                rng.gen::<f32>() * 2.0 * TRAIL_MAX_SPEED - TRAIL_MAX_SPEED,
                rng.gen::<f32>() * 2.0 * TRAIL_MAX_SPEED - TRAIL_MAX_SPEED,
            ),
            hue: rng.gen::<f32>() * 360.0,
        }
    }

    #[inline]
    pub fn step(&mut self) {
        self.pos += self.vel;
        if self.radius > TRAIL_MIN_RADIUS {
            self.radius -= TRAIL_DECAY;
        }
    }

    #[inline]
    pub fn is_spent(&self) -> bool {
        self.radius <= TRAIL_MIN_RADIUS
    }

    pub fn css_color(&self) -> String {
        format!("hsl({:.0}, 100%, 50%)", self.hue)
    }
}

/// A burst of `count` fresh particles at `origin`.
pub fn burst<R: Rng + ?Sized>(
    origin: Vec2,
    count: usize,
    rng: &mut R,
) -> SmallVec<[TrailParticle; TRAIL_BURST]> {
    (0..count).map(|_| TrailParticle::new(origin, rng)).collect()
}

#[derive(Default)]
pub struct TrailSim {
    pub particles: Vec<TrailParticle>,
}

impl TrailSim {
    pub fn spawn<R: Rng + ?Sized>(&mut self, origin: Vec2, count: usize, rng: &mut R) {
        self.particles.extend(burst(origin, count, rng));
    }

    /// Advance every particle one frame and drop the spent ones.
    pub fn update(&mut self) {
        for p in &mut self.particles {
            p.step();
        }
        self.particles.retain(|p| !p.is_spent());
    }

    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) -> anyhow::Result<()> {
        surface.clear();
        let mut errors = DrawErrors::default();
        for p in &self.particles {
            errors.record(surface.fill_circle(p.pos, p.radius, &p.css_color()));
        }
        errors.finish()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}
