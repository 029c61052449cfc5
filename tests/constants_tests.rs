// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core_constants {
    include!("../src/core/constants.rs");
}

use constants::*;
use core_constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn star_field_is_tuned_as_documented() {
    assert_eq!(STAR_COUNT, 100);
    assert!(STAR_MAX_RADIUS > 0.0);
    assert!(STAR_MAX_SPEED > 0.0 && STAR_MAX_SPEED < STAR_LINK_DISTANCE);
    assert_eq!(STAR_LINK_DISTANCE, 100.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn trail_particles_expire() {
    assert!(TRAIL_DECAY > 0.0);
    assert!(TRAIL_MIN_RADIUS > 0.0);
    // every spawned particle starts above the removal threshold
    assert!(TRAIL_MIN_SPAWN_RADIUS > TRAIL_MIN_RADIUS);
    assert!(TRAIL_BURST > 0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn text_physics_is_stable() {
    assert!(TEXT_INTERACTION_RADIUS > 0.0);
    // recovering more than the whole offset per frame would oscillate
    assert!(TEXT_RETURN_DIVISOR >= 1.0);
    assert!(TEXT_MIN_DENSITY > 0.0);
    assert!(TEXT_BUFFER_WIDTH > 0 && TEXT_BUFFER_HEIGHT > 0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn page_timings_are_ordered() {
    assert!(MODAL_SHOW_DELAY_MS < MODAL_HIDE_DELAY_MS);
    assert!(GIFT_POPUP_DELAY_MS as u64 <= GIFT_CONFETTI_MS);
    assert!(BALLOON_POP_MS < BALLOON_SPAWN_MS);
    assert!(MUSIC_DEFAULT_VOLUME >= 0.0 && MUSIC_DEFAULT_VOLUME <= 1.0);
    assert!(REVEAL_THRESHOLD > 0.0 && REVEAL_THRESHOLD <= 1.0);
}

#[test]
fn canvas_ids_are_distinct() {
    let ids = [
        STAR_CANVAS_ID,
        TRAIL_CANVAS_ID,
        TEXT_CANVAS_ID,
        GARDEN_CANVAS_ID,
    ];
    for (i, a) in ids.iter().enumerate() {
        for b in &ids[i + 1..] {
            assert_ne!(a, b);
        }
    }
}
