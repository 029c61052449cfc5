// Hero text made of particles.
//
// A word is rasterized once into an offscreen RGBA buffer; every opaque
// pixel becomes a particle. The pointer pushes particles away, and they ease
// back to their pixel once it leaves.

use crate::core::constants::*;
use crate::core::surface::{DrawErrors, Surface};
use glam::Vec2;
use rand::Rng;

#[derive(Clone, Copy, Debug)]
pub struct TextParticle {
    pub base: Vec2,
    pub pos: Vec2,
    pub radius: f32,
    /// Displacement weight in [1, 31).
    pub density: f32,
}

impl TextParticle {
    pub fn new<R: Rng + ?Sized>(base: Vec2, rng: &mut R) -> Self {
        Self {
            base,
            pos: base,
            radius: TEXT_PARTICLE_RADIUS,
            density: rng.gen::<f32>() * TEXT_DENSITY_SPAN + TEXT_MIN_DENSITY,
        }
    }

    /// One physics step against a pointer in buffer-local coordinates.
    pub fn step(&mut self, pointer: Option<Vec2>) {
        match pointer {
            Some(p) if self.pos.distance(p) < TEXT_INTERACTION_RADIUS => {
                self.pos -= push_displacement(self.pos, p, self.density);
            }
            _ => {
                self.pos -= (self.pos - self.base) / TEXT_RETURN_DIVISOR;
            }
        }
    }

    #[inline]
    pub fn offset(&self) -> Vec2 {
        self.pos - self.base
    }
}

/// Vector pointing from `pos` toward `pointer`, scaled by the linear
/// proximity force and `density`. Subtracting it pushes the particle away.
/// Zero when the pointer sits exactly on the particle.
pub fn push_displacement(pos: Vec2, pointer: Vec2, density: f32) -> Vec2 {
    let delta = pointer - pos;
    let distance = delta.length();
    if distance <= 0.0 || distance >= TEXT_INTERACTION_RADIUS {
        return Vec2::ZERO;
    }
    let force = (TEXT_INTERACTION_RADIUS - distance) / TEXT_INTERACTION_RADIUS;
    delta / distance * force * density
}

/// Positions of every pixel in a row-major RGBA buffer whose alpha exceeds
/// the threshold.
pub fn opaque_pixels(rgba: &[u8], width: u32, height: u32) -> impl Iterator<Item = Vec2> + '_ {
    let w = width as usize;
    (0..height as usize).flat_map(move |y| {
        (0..w).filter_map(move |x| {
            let alpha = rgba.get((y * w + x) * 4 + 3).copied().unwrap_or(0);
            (alpha > TEXT_ALPHA_THRESHOLD).then(|| Vec2::new(x as f32, y as f32))
        })
    })
}

#[derive(Default)]
pub struct TextSim {
    pub particles: Vec<TextParticle>,
}

impl TextSim {
    /// Build one particle per opaque pixel of a rasterized glyph buffer.
    pub fn from_rgba<R: Rng + ?Sized>(rgba: &[u8], width: u32, height: u32, rng: &mut R) -> Self {
        let particles = opaque_pixels(rgba, width, height)
            .map(|base| TextParticle::new(base, rng))
            .collect();
        Self { particles }
    }

    pub fn update(&mut self, pointer: Option<Vec2>) {
        for p in &mut self.particles {
            p.step(pointer);
        }
    }

    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) -> anyhow::Result<()> {
        surface.clear();
        let mut errors = DrawErrors::default();
        for p in &self.particles {
            errors.record(surface.fill_circle(p.pos, p.radius, TEXT_PARTICLE_COLOR));
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
