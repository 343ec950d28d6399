//! Scripted pilot: flap whenever the bird sinks below the next gap.

use crate::constants::BIRD_START_Y;
use crate::game::GameState;
use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Autopilot {
    pub skill: f64,
    pub aim_offset: f64,
}

impl Autopilot {
    pub fn new(skill: f64, aim_offset: f64) -> Self {
        Self {
            skill: skill.clamp(0.0, 1.0),
            aim_offset,
        }
    }

    /// Height the pilot tries to stay above: the centre of the first gap
    /// the bird has not cleared yet, or the start height on an open screen.
    pub fn target_y(&self, state: &GameState) -> f64 {
        let bird = &state.bird;
        state
            .obstacles
            .iter()
            .find(|o| o.right_edge() > bird.x - bird.radius())
            .map_or(BIRD_START_Y, |o| o.gap_center().1)
            + self.aim_offset
    }

    pub fn wants_flap(&self, state: &GameState) -> bool {
        let bird = &state.bird;
        bird.y > self.target_y(state) && bird.velocity >= 0.0
    }

    /// `wants_flap`, subject to the pilot's reaction misses.
    pub fn decide<R: Rng>(&self, state: &GameState, rng: &mut R) -> bool {
        self.wants_flap(state) && rng.gen_bool(self.skill)
    }
}
