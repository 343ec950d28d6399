//! Skyflap - single-screen side-scrolling arcade game for the terminal.
//!
//! The library holds the whole game so the terminal binary and the
//! headless simulator share one implementation.

pub mod build_info;
pub mod clock;
pub mod config;
pub mod constants;
pub mod entities;
pub mod error;
pub mod game;
pub mod geometry;
pub mod input;
pub mod logging;
pub mod palette;
pub mod simulator;
pub mod ui;
