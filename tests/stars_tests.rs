// Host-side tests for the star field.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod surface {
        include!("../src/core/surface.rs");
    }
    pub mod stars {
        include!("../src/core/stars.rs");
    }
}
mod common;

use common::{rng, Op, RecordingSurface};
use crate::core::constants::*;
use crate::core::stars::*;
use crate::core::surface::Theme;
use glam::Vec2;

fn in_bounds(field: &StarField) -> bool {
    let (w, h) = field.size();
    field
        .stars
        .iter()
        .all(|s| s.pos.x >= 0.0 && s.pos.x < w && s.pos.y >= 0.0 && s.pos.y < h)
}

#[test]
fn new_field_has_exact_count_within_ranges() {
    let field = StarField::new(800.0, 600.0, &mut rng());
    assert_eq!(field.stars.len(), STAR_COUNT);
    assert!(in_bounds(&field));
    for s in &field.stars {
        assert!(s.radius >= 0.0 && s.radius < STAR_MAX_RADIUS);
        assert!(s.vel.x.abs() <= STAR_MAX_SPEED);
        assert!(s.vel.y.abs() <= STAR_MAX_SPEED);
    }
}

#[test]
fn stars_stay_in_bounds_over_many_updates() {
    let mut field = StarField::new(320.0, 240.0, &mut rng());
    for _ in 0..5000 {
        field.update();
    }
    assert!(in_bounds(&field));
}

#[test]
fn star_crossing_right_edge_reappears_near_left_edge() {
    let mut star = Star {
        pos: Vec2::new(799.9, 10.0),
        radius: 1.0,
        vel: Vec2::new(0.2, 0.0),
    };
    star.step(800.0, 600.0);
    // overshoot of ~0.1 is carried over, not clamped to the edge
    assert!((star.pos.x - 0.1).abs() < 1e-3, "x = {}", star.pos.x);
    assert_eq!(star.pos.y, 10.0);
}

#[test]
fn star_crossing_top_edge_reappears_at_bottom() {
    let mut star = Star {
        pos: Vec2::new(50.0, 0.1),
        radius: 1.0,
        vel: Vec2::new(0.0, -0.25),
    };
    star.step(800.0, 600.0);
    assert!((star.pos.y - 599.85).abs() < 1e-3, "y = {}", star.pos.y);
}

#[test]
fn wrap_axis_never_returns_the_upper_bound() {
    assert_eq!(wrap_axis(800.0, 800.0), 0.0);
    assert!(wrap_axis(-1e-9, 800.0) < 800.0);
    assert_eq!(wrap_axis(5.0, 0.0), 0.0);
    assert!((wrap_axis(-0.5, 100.0) - 99.5).abs() < 1e-4);
}

#[test]
fn resize_regenerates_exactly_one_hundred_stars_in_new_bounds() {
    let mut r = rng();
    let mut field = StarField::new(800.0, 600.0, &mut r);
    let before: Vec<Vec2> = field.stars.iter().map(|s| s.pos).collect();
    field.resize(400.0, 300.0, &mut r);
    assert_eq!(field.stars.len(), STAR_COUNT);
    assert_eq!(field.size(), (400.0, 300.0));
    assert!(in_bounds(&field));
    let after: Vec<Vec2> = field.stars.iter().map(|s| s.pos).collect();
    assert_ne!(before, after);
}

#[test]
fn draw_uses_theme_color_and_clears_first() {
    let field = StarField::new(200.0, 200.0, &mut rng());
    let mut dark = RecordingSurface::default();
    field.draw(&mut dark, None, Theme::Dark).unwrap();
    assert_eq!(dark.ops.first(), Some(&Op::Clear));
    assert!(dark.circles().iter().all(|(_, _, c)| c == STAR_COLOR_DARK));

    let mut light = RecordingSurface::default();
    field.draw(&mut light, None, Theme::Light).unwrap();
    assert!(light.circles().iter().all(|(_, _, c)| c == STAR_COLOR_LIGHT));
    assert_eq!(light.circles().len(), STAR_COUNT);
}

#[test]
fn undefined_pointer_draws_no_links() {
    let field = StarField::new(100.0, 100.0, &mut rng());
    let mut surface = RecordingSurface::default();
    field.draw(&mut surface, None, Theme::Dark).unwrap();
    assert!(surface.lines().is_empty());
}

#[test]
fn links_only_stars_within_link_distance() {
    let mut field = StarField::new(1000.0, 1000.0, &mut rng());
    field.stars.truncate(3);
    field.stars[0].pos = Vec2::new(100.0, 100.0); // 50 px away
    field.stars[1].pos = Vec2::new(150.0, 199.0); // 99 px away
    field.stars[2].pos = Vec2::new(150.0, 250.0); // 150 px away
    let pointer = Vec2::new(150.0, 100.0);

    let mut surface = RecordingSurface::default();
    field.draw(&mut surface, Some(pointer), Theme::Light).unwrap();
    let lines = surface.lines();
    assert_eq!(lines.len(), 2);
    assert!(lines.iter().all(|(_, to)| *to == pointer));
    assert!(lines.iter().any(|(from, _)| *from == Vec2::new(100.0, 100.0)));
    assert!(lines.iter().any(|(from, _)| *from == Vec2::new(150.0, 199.0)));
}

#[test]
fn theme_round_trips_through_attribute() {
    assert_eq!(Theme::from_attr(Some("dark")), Theme::Dark);
    assert_eq!(Theme::from_attr(Some("light")), Theme::Light);
    assert_eq!(Theme::from_attr(None), Theme::Light);
    assert_eq!(Theme::Dark.toggled(), Theme::Light);
    assert_eq!(Theme::Light.toggled().as_attr(), "dark");
    assert_eq!(Theme::Dark.icon_class(), "fas fa-sun");
    assert_eq!(Theme::Light.icon_class(), "fas fa-moon");
}

#[test]
fn one_rejected_star_does_not_hide_the_rest() {
    let mut field = StarField::new(300.0, 300.0, &mut rng());
    field.stars[0].radius = -1.0;
    field.stars[0].pos = Vec2::new(10.0, 10.0);
    let mut surface = RecordingSurface::default();
    let err = field
        .draw(&mut surface, Some(Vec2::new(12.0, 10.0)), Theme::Dark)
        .unwrap_err();
    assert_eq!(err.to_string(), "1 draw call(s) failed");
    assert_eq!(surface.circles().len(), STAR_COUNT - 1);
    // the rejected star still gets its pointer link
    assert!(surface
        .lines()
        .iter()
        .any(|(from, _)| *from == Vec2::new(10.0, 10.0)));
}
