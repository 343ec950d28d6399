//! Simulation configuration.

/// Configuration for a simulation run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of runs to play
    pub num_runs: u32,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,

    /// Frames per run before giving up
    pub max_frames_per_run: u64,

    /// Chance per frame that the pilot acts when it wants to flap (0..=1)
    pub skill: f64,

    /// Pixels below the gap centre the pilot aims for
    pub aim_offset: f64,

    /// Log verbosity (0 = silent, 1 = summary, 2 = per run)
    pub verbosity: u8,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_runs: 200,
            seed: None,
            max_frames_per_run: 60 * 60 * 5,
            skill: 0.9,
            aim_offset: 20.0,
            verbosity: 1,
        }
    }
}
