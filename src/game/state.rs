//! Authoritative game state, threaded through every frame.

use super::spawner::Spawner;
use crate::entities::cloud::spawn_clouds;
use crate::entities::{Bird, Cloud, Obstacle, Particle};
use rand::Rng;
use serde::Serialize;
use std::fmt;

/// Top-level game phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Title screen; only reachable at process start.
    NotStarted,
    Playing,
    GameOver,
}

/// What ended the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CrashCause {
    Pipe,
    Ground,
    Ceiling,
}

impl fmt::Display for CrashCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Pipe => "pipe",
            Self::Ground => "ground",
            Self::Ceiling => "ceiling",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone)]
pub struct GameState {
    pub phase: Phase,
    pub bird: Bird,
    pub obstacles: Vec<Obstacle>,
    pub clouds: Vec<Cloud>,
    pub particles: Vec<Particle>,
    pub spawner: Spawner,

    /// Pipes passed this run.
    pub score: u32,
    /// Best score this session. Never decreases.
    pub high_score: u32,

    /// Remaining shake frames, also the shake amplitude.
    pub shake_intensity: u32,
    /// Remaining score-flash frames.
    pub score_flash: u32,
    /// Render offset sampled at the start of the current frame.
    pub shake_offset: (i32, i32),

    pub last_crash: Option<CrashCause>,
    /// Frames since process start.
    pub frame_count: u64,
    /// Runs started this session, restarts included.
    pub runs_started: u32,
}

impl GameState {
    pub fn new<R: Rng>(now_ms: u64, rng: &mut R) -> Self {
        Self {
            phase: Phase::NotStarted,
            bird: Bird::new(),
            obstacles: Vec::new(),
            clouds: spawn_clouds(rng),
            particles: Vec::new(),
            spawner: Spawner::new(now_ms),
            score: 0,
            high_score: 0,
            shake_intensity: 0,
            score_flash: 0,
            shake_offset: (0, 0),
            last_crash: None,
            frame_count: 0,
            runs_started: 0,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.phase == Phase::Playing
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    /// Start a fresh run after a crash. High score, clouds and live
    /// particles carry over.
    pub fn restart(&mut self, now_ms: u64) {
        self.bird = Bird::new();
        self.obstacles.clear();
        self.score = 0;
        self.shake_intensity = 0;
        self.last_crash = None;
        self.spawner.reset(now_ms);
        self.phase = Phase::Playing;
        self.runs_started += 1;
    }

    /// Award a point and refresh the session best.
    pub fn add_point(&mut self) {
        self.score += 1;
        if self.score > self.high_score {
            self.high_score = self.score;
            log::debug!("new high score {}", self.high_score);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::CLOUD_COUNT;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_new_state_defaults() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let state = GameState::new(250, &mut rng);
        assert_eq!(state.phase, Phase::NotStarted);
        assert_eq!(state.score, 0);
        assert_eq!(state.high_score, 0);
        assert!(state.obstacles.is_empty());
        assert!(state.particles.is_empty());
        assert_eq!(state.clouds.len(), CLOUD_COUNT);
        assert_eq!(state.spawner.last_spawn_ms(), 250);
    }

    #[test]
    fn test_restart_keeps_session_data() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut state = GameState::new(0, &mut rng);
        state.phase = Phase::GameOver;
        state.score = 4;
        state.high_score = 7;
        state.score_flash = 3;
        state.shake_intensity = 6;
        state.bird.y = 10.0;
        state.obstacles.push(Obstacle::new(100.0, 200.0));

        state.restart(9000);

        assert_eq!(state.phase, Phase::Playing);
        assert_eq!(state.score, 0);
        assert_eq!(state.high_score, 7);
        assert_eq!(state.score_flash, 3);
        assert_eq!(state.shake_intensity, 0);
        assert!(state.obstacles.is_empty());
        assert_eq!(state.bird, Bird::new());
        assert_eq!(state.spawner.last_spawn_ms(), 9000);
    }

    #[test]
    fn test_add_point_tracks_high_score() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut state = GameState::new(0, &mut rng);
        state.high_score = 2;
        state.add_point();
        assert_eq!((state.score, state.high_score), (1, 2));
        state.add_point();
        state.add_point();
        assert_eq!((state.score, state.high_score), (3, 3));
    }
}
