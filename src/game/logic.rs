//! Frame orchestration for the game.
//!
//! One call to [`run_frame`] is one frame: effects decay, the frame's input
//! is applied, the simulation steps if a run is live, and particles always
//! advance so crash debris keeps flying on the game-over screen.

use super::collision::{bounds_crash, hits_obstacle};
use super::effects;
use super::state::{CrashCause, GameState, Phase};
use crate::constants::{FLAP_BURST_X_OFFSET, SPAWN_INTERVAL_MS};
use crate::entities::particle::{advance_all, emit_burst};
use crate::entities::BurstKind;
use rand::Rng;

/// Input actions, already decoded from the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameInput {
    /// Flap, start or restart (Space, Up, Enter).
    Activate,
    /// Leave the game (Esc, q, Ctrl-C).
    Quit,
    /// Any other key.
    Other,
}

/// Whether the loop should keep running after this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    Continue,
    Quit,
}

/// Everything that happened during one simulation tick.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickResult {
    /// Obstacles passed this tick.
    pub points: u32,
    /// Set when the run ended this tick.
    pub crash: Option<CrashCause>,
    pub spawned: bool,
    /// Obstacles dropped after leaving the screen.
    pub removed: usize,
}

/// Run one frame. `inputs` is everything polled for this frame, in order.
pub fn run_frame<R: Rng>(
    state: &mut GameState,
    inputs: &[GameInput],
    now_ms: u64,
    rng: &mut R,
) -> FrameOutcome {
    effects::begin_frame(state, rng);

    let mut outcome = FrameOutcome::Continue;
    for input in inputs {
        match input {
            GameInput::Activate => process_activate(state, now_ms, rng),
            GameInput::Quit => outcome = FrameOutcome::Quit,
            GameInput::Other => {}
        }
    }

    if state.is_playing() {
        for cloud in &mut state.clouds {
            cloud.advance(rng);
        }
        process_tick(state, now_ms, rng);
    }

    advance_all(&mut state.particles);
    state.frame_count += 1;

    outcome
}

/// Handle the activate key in every phase.
pub fn process_activate<R: Rng>(state: &mut GameState, now_ms: u64, rng: &mut R) {
    match state.phase {
        Phase::NotStarted => {
            log::info!("run started");
            state.phase = Phase::Playing;
            state.runs_started += 1;
            flap(state, rng);
        }
        Phase::Playing => flap(state, rng),
        Phase::GameOver => {
            log::info!("restart (session best {})", state.high_score);
            state.restart(now_ms);
        }
    }
}

fn flap<R: Rng>(state: &mut GameState, rng: &mut R) {
    state.bird.jump();
    let (x, y) = (state.bird.x + FLAP_BURST_X_OFFSET, state.bird.y);
    emit_burst(&mut state.particles, BurstKind::Flap, x, y, rng);
}

/// One physics/spawn/collision/scoring pass. No-op unless playing.
///
/// Stops at the first crash: nothing else in the tick is evaluated once
/// the phase flips to game over.
pub fn process_tick<R: Rng>(state: &mut GameState, now_ms: u64, rng: &mut R) -> TickResult {
    let mut result = TickResult::default();
    if !state.is_playing() {
        return result;
    }

    state.bird.advance();

    if let Some(obstacle) = state.spawner.maybe_spawn(now_ms, SPAWN_INTERVAL_MS, rng) {
        state.obstacles.push(obstacle);
        result.spawned = true;
    }

    for obstacle in &mut state.obstacles {
        obstacle.advance();
    }

    let hitbox = state.bird.hitbox();
    for i in 0..state.obstacles.len() {
        if hits_obstacle(&hitbox, &state.obstacles[i]) {
            crash(state, CrashCause::Pipe, rng);
            result.crash = Some(CrashCause::Pipe);
            return result;
        }

        let bird_x = state.bird.x;
        if state.obstacles[i].try_pass(bird_x) {
            let (cx, cy) = state.obstacles[i].gap_center();
            state.add_point();
            effects::trigger_score_flash(state);
            emit_burst(&mut state.particles, BurstKind::Score, cx, cy, rng);
            result.points += 1;
        }
    }

    let before = state.obstacles.len();
    state.obstacles.retain(|o| !o.is_off_screen());
    result.removed = before - state.obstacles.len();

    if let Some(cause) = bounds_crash(&state.bird) {
        crash(state, cause, rng);
        result.crash = Some(cause);
    }

    result
}

fn crash<R: Rng>(state: &mut GameState, cause: CrashCause, rng: &mut R) {
    log::info!("crashed into {} with score {}", cause, state.score);
    state.phase = Phase::GameOver;
    state.last_crash = Some(cause);
    effects::trigger_shake(state);
    let (x, y) = (state.bird.x, state.bird.y);
    emit_burst(&mut state.particles, BurstKind::Crash, x, y, rng);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{
        BIRD_START_Y, CRASH_BURST_COUNT, CRASH_SHAKE_INTENSITY, FLAP_BURST_COUNT, GRAVITY,
        JUMP_VELOCITY, PLAY_WIDTH, SCORE_BURST_COUNT, SCORE_FLASH_FRAMES,
    };
    use crate::entities::Obstacle;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn create_test_rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(2024)
    }

    fn playing_state(rng: &mut ChaCha8Rng) -> GameState {
        let mut state = GameState::new(0, rng);
        state.phase = Phase::Playing;
        state
    }

    #[test]
    fn test_activate_starts_and_flaps() {
        let mut rng = create_test_rng();
        let mut state = GameState::new(0, &mut rng);
        process_activate(&mut state, 0, &mut rng);
        assert_eq!(state.phase, Phase::Playing);
        assert_eq!(state.bird.velocity, JUMP_VELOCITY);
        assert_eq!(state.particles.len(), FLAP_BURST_COUNT);
        assert_eq!(state.runs_started, 1);
    }

    #[test]
    fn test_no_simulation_before_start() {
        let mut rng = create_test_rng();
        let mut state = GameState::new(0, &mut rng);
        let clouds = state.clouds.clone();
        for i in 0..300 {
            run_frame(&mut state, &[], i * 16, &mut rng);
        }
        assert_eq!(state.bird.y, BIRD_START_Y);
        assert!(state.obstacles.is_empty());
        assert_eq!(state.clouds, clouds);
        assert_eq!(state.frame_count, 300);
    }

    #[test]
    fn test_tick_is_noop_when_not_playing() {
        let mut rng = create_test_rng();
        let mut state = GameState::new(0, &mut rng);
        state.phase = Phase::GameOver;
        let result = process_tick(&mut state, 99_999, &mut rng);
        assert_eq!(result, TickResult::default());
        assert_eq!(state.bird.y, BIRD_START_Y);
    }

    #[test]
    fn test_spawn_happens_inside_tick() {
        let mut rng = create_test_rng();
        let mut state = playing_state(&mut rng);
        let result = process_tick(&mut state, SPAWN_INTERVAL_MS + 1, &mut rng);
        assert!(result.spawned);
        assert_eq!(state.obstacles.len(), 1);
        // Spawned at the edge, then moved with the rest this tick
        assert_eq!(state.obstacles[0].x, PLAY_WIDTH - 3.0);
    }

    #[test]
    fn test_scoring_flips_passed_once() {
        let mut rng = create_test_rng();
        let mut state = playing_state(&mut rng);
        state.high_score = 0;
        // Trailing edge lands at 79 after one tick: just behind the bird
        state.obstacles.push(Obstacle::new(22.0, 200.0));
        state.bird.y = 290.0;

        let result = process_tick(&mut state, 0, &mut rng);
        assert_eq!(result.points, 1);
        assert_eq!(state.score, 1);
        assert_eq!(state.high_score, 1);
        assert_eq!(state.score_flash, SCORE_FLASH_FRAMES);
        assert_eq!(state.particles.len(), SCORE_BURST_COUNT);
        assert!(state.obstacles[0].passed);

        let result = process_tick(&mut state, 0, &mut rng);
        assert_eq!(result.points, 0);
        assert_eq!(state.score, 1);
    }

    #[test]
    fn test_pipe_crash_stops_tick() {
        let mut rng = create_test_rng();
        let mut state = playing_state(&mut rng);
        state.bird.y = 100.0;
        // First obstacle is on top of the bird, second would score
        state.obstacles.push(Obstacle::new(80.0, 200.0));
        state.obstacles.push(Obstacle::new(0.0, 200.0));

        let result = process_tick(&mut state, 0, &mut rng);
        assert_eq!(result.crash, Some(CrashCause::Pipe));
        assert_eq!(result.points, 0);
        assert_eq!(state.phase, Phase::GameOver);
        assert_eq!(state.shake_intensity, CRASH_SHAKE_INTENSITY);
        assert_eq!(state.particles.len(), CRASH_BURST_COUNT);
        assert!(!state.obstacles[1].passed);
    }

    #[test]
    fn test_ground_crash() {
        let mut rng = create_test_rng();
        let mut state = playing_state(&mut rng);
        state.bird.y = 534.0;
        state.bird.velocity = 2.0;
        let result = process_tick(&mut state, 0, &mut rng);
        assert_eq!(result.crash, Some(CrashCause::Ground));
        assert_eq!(state.last_crash, Some(CrashCause::Ground));
        assert!(state.is_game_over());
    }

    #[test]
    fn test_offscreen_obstacles_removed() {
        let mut rng = create_test_rng();
        let mut state = playing_state(&mut rng);
        let mut gone = Obstacle::new(-58.0, 200.0);
        gone.passed = true;
        state.obstacles.push(gone);
        state.obstacles.push(Obstacle::new(300.0, 200.0));
        let result = process_tick(&mut state, 0, &mut rng);
        assert_eq!(result.removed, 1);
        assert_eq!(state.obstacles.len(), 1);
        assert_eq!(state.obstacles[0].x, 297.0);
    }

    #[test]
    fn test_quit_finishes_frame() {
        let mut rng = create_test_rng();
        let mut state = playing_state(&mut rng);
        let outcome = run_frame(&mut state, &[GameInput::Quit], 0, &mut rng);
        assert_eq!(outcome, FrameOutcome::Quit);
        assert!((state.bird.velocity - GRAVITY).abs() < 1e-9);
        assert_eq!(state.frame_count, 1);
    }

    #[test]
    fn test_other_keys_ignored() {
        let mut rng = create_test_rng();
        let mut state = GameState::new(0, &mut rng);
        let outcome = run_frame(&mut state, &[GameInput::Other], 0, &mut rng);
        assert_eq!(outcome, FrameOutcome::Continue);
        assert_eq!(state.phase, Phase::NotStarted);
    }

    #[test]
    fn test_particles_advance_during_game_over() {
        let mut rng = create_test_rng();
        let mut state = playing_state(&mut rng);
        state.bird.y = 5.0;
        run_frame(&mut state, &[], 0, &mut rng);
        assert!(state.is_game_over());
        let first: Vec<f64> = state.particles.iter().map(|p| p.x).collect();
        assert!(!first.is_empty());
        run_frame(&mut state, &[], 16, &mut rng);
        let moved = state
            .particles
            .iter()
            .zip(&first)
            .any(|(p, x)| (p.x - x).abs() > 1e-9);
        assert!(moved);
    }
}
