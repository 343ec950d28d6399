//! Plays simulated runs through the real frame loop.

use super::autopilot::Autopilot;
use super::config::SimConfig;
use super::report::{RunStats, SimReport};
use crate::clock::{Clock, FixedStepClock};
use crate::game::{run_frame, GameInput, GameState};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Run the full simulation and return a report.
pub fn run_simulation(config: &SimConfig) -> SimReport {
    let mut all_runs = Vec::with_capacity(config.num_runs as usize);

    for run_idx in 0..config.num_runs {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(run_idx as u64)),
            None => StdRng::from_entropy(),
        };

        let stats = simulate_single_run(config, &mut rng);
        if config.verbosity >= 2 {
            println!(
                "Run {}/{} - score {}, frames {}, flaps {}, ended by {}",
                run_idx + 1,
                config.num_runs,
                stats.score,
                stats.frames,
                stats.flaps,
                stats
                    .crash
                    .map_or_else(|| "timeout".to_string(), |c| c.to_string())
            );
        }
        all_runs.push(stats);
    }

    SimReport::from_runs(all_runs, config.max_frames_per_run)
}

/// Play one run from the title screen until a crash or the frame cap.
pub fn simulate_single_run<R: Rng>(config: &SimConfig, rng: &mut R) -> RunStats {
    let clock = FixedStepClock::per_frame();
    let pilot = Autopilot::new(config.skill, config.aim_offset);
    let mut state = GameState::new(clock.now_ms(), rng);

    // First input starts the run
    let mut inputs = vec![GameInput::Activate];
    let mut flaps = 0;
    let mut frames = 0;

    while frames < config.max_frames_per_run {
        clock.advance();
        run_frame(&mut state, &inputs, clock.now_ms(), rng);
        frames += 1;
        flaps += inputs.len() as u32;

        if state.is_game_over() {
            break;
        }

        inputs.clear();
        if pilot.decide(&state, rng) {
            inputs.push(GameInput::Activate);
        }
    }

    log::debug!(
        "simulated run: score {} in {} frames ({:?})",
        state.score,
        frames,
        state.last_crash
    );

    RunStats {
        score: state.score,
        frames,
        flaps,
        crash: state.last_crash,
    }
}
