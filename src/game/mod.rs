//! The real-time game engine.
//!
//! `logic::run_frame` is the single entry point the binaries call once per
//! frame; everything else here is a pure building block it composes.

pub mod collision;
pub mod effects;
pub mod logic;
pub mod spawner;
pub mod state;

pub use logic::{process_activate, process_tick, run_frame, FrameOutcome, GameInput, TickResult};
pub use state::{CrashCause, GameState, Phase};
