//! Headless simulator for tuning and regression checks.
//!
//! Plays many runs with a scripted pilot on a fixed-step clock and
//! aggregates the results. It drives the same [`run_frame`] the terminal
//! game uses, so the numbers reflect real gameplay.
//!
//! [`run_frame`]: crate::game::run_frame

mod autopilot;
mod config;
mod report;
mod runner;

pub use autopilot::Autopilot;
pub use config::SimConfig;
pub use report::{RunStats, SimReport};
pub use runner::{run_simulation, simulate_single_run};
