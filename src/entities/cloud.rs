//! Decorative clouds drifting across the sky.

use crate::constants::{
    CLOUD_COUNT, CLOUD_SIZE_MAX, CLOUD_SIZE_MIN, CLOUD_SPEED_MAX, CLOUD_SPEED_MIN,
    CLOUD_WRAP_MARGIN, CLOUD_X_MIN, CLOUD_Y_MAX, CLOUD_Y_MIN, PLAY_WIDTH,
};
use rand::Rng;

#[derive(Debug, Clone, PartialEq)]
pub struct Cloud {
    pub x: f64,
    pub y: f64,
    pub speed: f64,
    pub size: f64,
}

impl Cloud {
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self {
            x: rng.gen_range(CLOUD_X_MIN..=PLAY_WIDTH as i32) as f64,
            y: random_altitude(rng),
            speed: rng.gen_range(CLOUD_SPEED_MIN..CLOUD_SPEED_MAX),
            size: rng.gen_range(CLOUD_SIZE_MIN..=CLOUD_SIZE_MAX) as f64,
        }
    }

    /// Drift right; past the right margin the cloud re-enters on the left
    /// at a new altitude.
    pub fn advance<R: Rng>(&mut self, rng: &mut R) {
        self.x += self.speed;
        if self.x > PLAY_WIDTH + CLOUD_WRAP_MARGIN {
            self.x = -CLOUD_WRAP_MARGIN;
            self.y = random_altitude(rng);
        }
    }
}

fn random_altitude<R: Rng>(rng: &mut R) -> f64 {
    rng.gen_range(CLOUD_Y_MIN..=CLOUD_Y_MAX) as f64
}

/// The initial sky.
pub fn spawn_clouds<R: Rng>(rng: &mut R) -> Vec<Cloud> {
    (0..CLOUD_COUNT).map(|_| Cloud::random(rng)).collect()
}
