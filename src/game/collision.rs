//! Collision and bounds predicates.
//!
//! Obstacle collision is an AABB overlap between the bird's hitbox square
//! and a pipe rectangle, not exact circle geometry. All comparisons are
//! strict, so a hitbox whose edge exactly touches a pipe edge does not
//! collide. Gameplay difficulty is tuned against this rule.

use super::state::CrashCause;
use crate::constants::GROUND_LINE;
use crate::entities::{Bird, Obstacle};
use crate::geometry::{Hitbox, Rect};

fn overlaps_horizontally(hitbox: &Hitbox, rect: &Rect) -> bool {
    hitbox.x + hitbox.radius > rect.x && hitbox.x - hitbox.radius < rect.right()
}

/// Hitbox against a pipe hanging from the ceiling (only its bottom edge matters).
pub fn hits_top_pipe(hitbox: &Hitbox, rect: &Rect) -> bool {
    overlaps_horizontally(hitbox, rect) && hitbox.y - hitbox.radius < rect.bottom()
}

/// Hitbox against a pipe standing on the ground (only its top edge matters).
pub fn hits_bottom_pipe(hitbox: &Hitbox, rect: &Rect) -> bool {
    overlaps_horizontally(hitbox, rect) && hitbox.y + hitbox.radius > rect.y
}

pub fn hits_obstacle(hitbox: &Hitbox, obstacle: &Obstacle) -> bool {
    hits_top_pipe(hitbox, &obstacle.top_rect()) || hits_bottom_pipe(hitbox, &obstacle.bottom_rect())
}

/// Ground and ceiling test. Uses the drawn body, not the hitbox.
pub fn bounds_crash(bird: &Bird) -> Option<CrashCause> {
    if bird.y >= GROUND_LINE - bird.radius() {
        Some(CrashCause::Ground)
    } else if bird.y < bird.radius() {
        Some(CrashCause::Ceiling)
    } else {
        None
    }
}
