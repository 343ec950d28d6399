//! Screen shake and score flash.
//!
//! Both are frame counters on [`GameState`]: an event sets them to a fixed
//! value and they decay by one per frame until zero.

use super::state::GameState;
use crate::constants::{CRASH_SHAKE_INTENSITY, SCORE_FLASH_FRAMES};
use crate::palette::{Rgb, GOLD, WHITE};
use rand::Rng;

/// Random render offset within ±`intensity` on both axes.
pub fn shake_offset<R: Rng>(intensity: u32, rng: &mut R) -> (i32, i32) {
    if intensity == 0 {
        return (0, 0);
    }
    let i = intensity as i32;
    (rng.gen_range(-i..=i), rng.gen_range(-i..=i))
}

/// Sample this frame's shake offset, then decay shake and flash.
pub fn begin_frame<R: Rng>(state: &mut GameState, rng: &mut R) {
    state.shake_offset = shake_offset(state.shake_intensity, rng);
    state.shake_intensity = state.shake_intensity.saturating_sub(1);
    state.score_flash = state.score_flash.saturating_sub(1);
}

pub fn trigger_shake(state: &mut GameState) {
    state.shake_intensity = CRASH_SHAKE_INTENSITY;
}

pub fn trigger_score_flash(state: &mut GameState) {
    state.score_flash = SCORE_FLASH_FRAMES;
}

/// Score text colour: gold right after a point, fading back to white.
pub fn score_color(score_flash: u32) -> Rgb {
    let t = score_flash.min(SCORE_FLASH_FRAMES) as f64 / SCORE_FLASH_FRAMES as f64;
    WHITE.lerp(GOLD, t)
}
