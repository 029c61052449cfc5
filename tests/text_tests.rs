// Host-side tests for the particle text physics.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod surface {
        include!("../src/core/surface.rs");
    }
    pub mod text {
        include!("../src/core/text.rs");
    }
}
mod common;

use crate::core::constants::*;
use crate::core::text::*;
use common::{rng, RecordingSurface};
use glam::Vec2;

fn particle_at(base: Vec2, density: f32) -> TextParticle {
    TextParticle {
        base,
        pos: base,
        radius: TEXT_PARTICLE_RADIUS,
        density,
    }
}

/// RGBA buffer with the given pixels fully opaque.
fn raster(width: u32, height: u32, opaque: &[(u32, u32)], alpha: u8) -> Vec<u8> {
    let mut buf = vec![0u8; (width * height * 4) as usize];
    for &(x, y) in opaque {
        let i = ((y * width + x) * 4) as usize;
        buf[i] = 255;
        buf[i + 3] = alpha;
    }
    buf
}

#[test]
fn pointer_on_particle_causes_no_displacement() {
    let mut p = particle_at(Vec2::new(40.0, 20.0), 17.0);
    p.step(Some(Vec2::new(40.0, 20.0)));
    assert_eq!(p.pos, Vec2::new(40.0, 20.0));
    assert!(p.pos.is_finite());
    assert_eq!(push_displacement(p.pos, p.pos, 31.0), Vec2::ZERO);
}

#[test]
fn pointer_at_fifty_px_pushes_density_ten_particle_five_px_away() {
    let mut p = particle_at(Vec2::new(100.0, 100.0), 10.0);
    p.step(Some(Vec2::new(150.0, 100.0)));
    assert!((p.pos.x - 95.0).abs() < 1e-4, "x = {}", p.pos.x);
    assert!((p.pos.y - 100.0).abs() < 1e-6);

    // diagonal: same magnitude, opposite direction to the pointer
    let mut q = particle_at(Vec2::new(0.0, 0.0), 10.0);
    q.step(Some(Vec2::new(30.0, 40.0)));
    assert!((q.pos.length() - 5.0).abs() < 1e-4);
    assert!(q.pos.x < 0.0 && q.pos.y < 0.0);
}

#[test]
fn denser_particles_are_pushed_further() {
    let pointer = Some(Vec2::new(10.0, 0.0));
    let mut light = particle_at(Vec2::ZERO, 2.0);
    let mut heavy = particle_at(Vec2::ZERO, 20.0);
    light.step(pointer);
    heavy.step(pointer);
    assert!(heavy.offset().length() > light.offset().length());
}

#[test]
fn outside_radius_returns_a_tenth_of_offset_per_step() {
    let base = Vec2::new(200.0, 50.0);
    let mut p = particle_at(base, 12.0);
    p.pos = base + Vec2::new(20.0, -10.0);
    let far = Some(p.pos + Vec2::new(150.0, 0.0));

    let mut prev = p.offset();
    for _ in 0..50 {
        p.step(far); // pointer stays 150+ px away
        let now = p.offset();
        assert!((now - prev * 0.9).length() < 1e-3);
        // converges without crossing the base
        assert!(now.x >= 0.0 && now.y <= 0.0);
        prev = now;
    }
    assert!(p.offset().length() < 0.2);
}

#[test]
fn undefined_pointer_means_return_to_rest() {
    let base = Vec2::new(5.0, 5.0);
    let mut p = particle_at(base, 30.0);
    p.pos = Vec2::new(15.0, 5.0);
    p.step(None);
    assert!((p.pos.x - 14.0).abs() < 1e-5);
    assert_eq!(p.pos.y, 5.0);
}

#[test]
fn particle_at_rest_stays_at_rest_without_pointer() {
    let mut p = particle_at(Vec2::new(3.0, 4.0), 5.0);
    for _ in 0..10 {
        p.step(None);
    }
    assert_eq!(p.pos, p.base);
}

#[test]
fn samples_one_particle_per_pixel_above_alpha_threshold() {
    let mut buf = raster(8, 4, &[(0, 0), (7, 3), (3, 1)], 255);
    // exactly at the threshold does not count
    let i = ((2 * 8 + 5) * 4 + 3) as usize;
    buf[i] = TEXT_ALPHA_THRESHOLD;

    let sim = TextSim::from_rgba(&buf, 8, 4, &mut rng());
    assert_eq!(sim.len(), 3);
    let bases: Vec<Vec2> = sim.particles.iter().map(|p| p.base).collect();
    assert_eq!(
        bases,
        vec![Vec2::new(0.0, 0.0), Vec2::new(3.0, 1.0), Vec2::new(7.0, 3.0)]
    );
    for p in &sim.particles {
        assert_eq!(p.pos, p.base);
        assert_eq!(p.radius, TEXT_PARTICLE_RADIUS);
        assert!(p.density >= 1.0 && p.density < 31.0);
    }
}

#[test]
fn short_buffer_yields_no_out_of_bounds_particles() {
    let buf = vec![255u8; 10]; // far smaller than 4x4 RGBA
    let sim = TextSim::from_rgba(&buf, 4, 4, &mut rng());
    assert!(sim.len() <= 2);
}

#[test]
fn update_then_draw_keeps_every_particle_finite() {
    let buf = raster(16, 16, &[(8, 8), (9, 8), (8, 9)], 200);
    let mut sim = TextSim::from_rgba(&buf, 16, 16, &mut rng());
    let mut surface = RecordingSurface::default();
    for pointer in [Some(Vec2::new(8.0, 8.0)), Some(Vec2::new(9.0, 9.0)), None] {
        sim.update(pointer);
        sim.draw(&mut surface).unwrap();
    }
    assert!(sim.particles.iter().all(|p| p.pos.is_finite()));
    let circles = surface.circles();
    assert_eq!(circles.len(), 3 * sim.len());
    assert!(circles.iter().all(|(_, _, c)| c == TEXT_PARTICLE_COLOR));
}

#[test]
fn draw_continues_past_a_rejected_particle() {
    let mut sim = TextSim::default();
    sim.particles.push(particle_at(Vec2::new(1.0, 1.0), 5.0));
    let mut bad = particle_at(Vec2::new(2.0, 2.0), 5.0);
    bad.radius = -2.0;
    sim.particles.push(bad);
    sim.particles.push(particle_at(Vec2::new(3.0, 3.0), 5.0));
    let mut surface = RecordingSurface::default();
    assert!(sim.draw(&mut surface).is_err());
    let centers: Vec<Vec2> = surface.circles().iter().map(|(c, _, _)| *c).collect();
    assert_eq!(centers, vec![Vec2::new(1.0, 1.0), Vec2::new(3.0, 3.0)]);
}
