//! The player-controlled bird.

use crate::constants::{
    BIRD_RADIUS, BIRD_START_Y, BIRD_X, GRAVITY, HITBOX_FORWARD_FACTOR, HITBOX_RADIUS_FACTOR,
    JUMP_VELOCITY, MAX_TILT_DEGREES, TILT_PER_VELOCITY, TRAIL_CAPACITY, TRAIL_Y_OFFSET,
    WING_FLAP_ON_JUMP, WING_FLAP_SPEED, WING_FLAP_WRAP,
};
use crate::geometry::Hitbox;
use std::collections::VecDeque;

#[derive(Debug, Clone, PartialEq)]
pub struct Bird {
    /// Horizontal position. Fixed for the game bird; only the start-screen
    /// demo bird is placed elsewhere.
    pub x: f64,
    pub y: f64,
    /// Vertical velocity in px/frame (positive = downward).
    pub velocity: f64,
    /// Tilt in degrees, always within ±[`MAX_TILT_DEGREES`].
    pub angle: f64,
    /// Wing animation phase, cycles through `0.0..=WING_FLAP_WRAP`.
    pub wing_phase: f64,
    /// Recent positions, oldest first.
    pub trail: VecDeque<(f64, f64)>,
}

impl Default for Bird {
    fn default() -> Self {
        Self::new()
    }
}

impl Bird {
    /// A fresh bird at the spawn position.
    pub fn new() -> Self {
        Self::at(BIRD_X, BIRD_START_Y)
    }

    pub fn at(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            velocity: 0.0,
            angle: 0.0,
            wing_phase: 0.0,
            trail: VecDeque::with_capacity(TRAIL_CAPACITY + 1),
        }
    }

    pub const fn radius(&self) -> f64 {
        BIRD_RADIUS
    }

    /// Upward impulse. Overrides the current velocity rather than adding to it.
    pub fn jump(&mut self) {
        self.velocity = JUMP_VELOCITY;
        self.wing_phase = WING_FLAP_ON_JUMP;
    }

    /// Integrate one frame of motion.
    pub fn advance(&mut self) {
        self.velocity += GRAVITY;
        self.y += self.velocity;

        self.angle = (-self.velocity * TILT_PER_VELOCITY).clamp(-MAX_TILT_DEGREES, MAX_TILT_DEGREES);

        self.wing_phase += WING_FLAP_SPEED;
        if self.wing_phase > WING_FLAP_WRAP {
            self.wing_phase = 0.0;
        }

        self.trail.push_back((self.x, self.y + TRAIL_Y_OFFSET));
        while self.trail.len() > TRAIL_CAPACITY {
            self.trail.pop_front();
        }
    }

    /// Collision circle: pushed forward towards the beak and shrunk
    /// slightly, so grazing the tail feathers is forgiven.
    pub fn hitbox(&self) -> Hitbox {
        Hitbox {
            x: self.x + BIRD_RADIUS * HITBOX_FORWARD_FACTOR,
            y: self.y,
            radius: BIRD_RADIUS * HITBOX_RADIUS_FACTOR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_bird_at_spawn() {
        let bird = Bird::new();
        assert_eq!(bird.x, BIRD_X);
        assert_eq!(bird.y, BIRD_START_Y);
        assert_eq!(bird.velocity, 0.0);
        assert!(bird.trail.is_empty());
    }

    #[test]
    fn test_jump_overrides_velocity() {
        let mut bird = Bird::new();
        bird.velocity = 9.0;
        bird.jump();
        assert_eq!(bird.velocity, JUMP_VELOCITY);
        assert_eq!(bird.wing_phase, WING_FLAP_ON_JUMP);
    }

    #[test]
    fn test_advance_applies_gravity_then_moves() {
        let mut bird = Bird::new();
        bird.advance();
        assert!((bird.velocity - GRAVITY).abs() < 1e-9);
        assert!((bird.y - (BIRD_START_Y + GRAVITY)).abs() < 1e-9);
    }

    #[test]
    fn test_angle_stays_clamped_for_extreme_velocities() {
        for v in [-1000.0, -7.5, -6.0, 0.0, 3.0, 7.5, 1000.0] {
            let mut bird = Bird::new();
            bird.velocity = v;
            bird.advance();
            assert!(bird.angle >= -MAX_TILT_DEGREES && bird.angle <= MAX_TILT_DEGREES);
        }
    }

    #[test]
    fn test_angle_tracks_velocity_inside_clamp() {
        let mut bird = Bird::new();
        bird.velocity = -2.25;
        bird.advance();
        // velocity is now -2.0, so the tilt is +8 degrees (nose up)
        assert!((bird.angle - 8.0).abs() < 1e-9);
    }

    #[test]
    fn test_wing_phase_wraps() {
        let mut bird = Bird::new();
        bird.wing_phase = WING_FLAP_WRAP - 0.1;
        bird.advance();
        assert_eq!(bird.wing_phase, 0.0);
    }

    #[test]
    fn test_trail_is_bounded_fifo() {
        let mut bird = Bird::new();
        for _ in 0..50 {
            bird.advance();
            assert!(bird.trail.len() <= TRAIL_CAPACITY);
        }
        assert_eq!(bird.trail.len(), TRAIL_CAPACITY);
        let newest = *bird.trail.back().unwrap();
        assert!((newest.1 - (bird.y + TRAIL_Y_OFFSET)).abs() < 1e-9);
        // Falling bird: older entries are higher up (smaller y)
        assert!(bird.trail.front().unwrap().1 < newest.1);
    }

    #[test]
    fn test_hitbox_is_forward_and_narrower() {
        let bird = Bird::new();
        let hb = bird.hitbox();
        assert!(hb.x > bird.x);
        assert!(hb.radius < bird.radius());
        assert_eq!(hb.y, bird.y);
    }
}
