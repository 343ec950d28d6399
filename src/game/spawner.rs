//! Time-gated obstacle spawning.

use crate::constants::{GAP_TOP_MAX, GAP_TOP_MIN, PLAY_WIDTH};
use crate::entities::Obstacle;
use rand::Rng;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spawner {
    last_spawn_ms: u64,
}

impl Spawner {
    pub fn new(now_ms: u64) -> Self {
        Self {
            last_spawn_ms: now_ms,
        }
    }

    pub fn last_spawn_ms(&self) -> u64 {
        self.last_spawn_ms
    }

    /// Restart the interval from `now_ms`.
    pub fn reset(&mut self, now_ms: u64) {
        self.last_spawn_ms = now_ms;
    }

    /// Produce a new obstacle at the right edge once more than
    /// `interval_ms` has elapsed since the last one.
    pub fn maybe_spawn<R: Rng>(
        &mut self,
        now_ms: u64,
        interval_ms: u64,
        rng: &mut R,
    ) -> Option<Obstacle> {
        if now_ms.saturating_sub(self.last_spawn_ms) <= interval_ms {
            return None;
        }
        self.last_spawn_ms = now_ms;
        let gap_top = random_gap_top(rng);
        log::debug!("spawned obstacle with gap top {}", gap_top);
        Some(Obstacle::new(PLAY_WIDTH, gap_top))
    }
}

/// Whole-pixel gap top, uniform over the range that keeps both pipe stubs visible.
pub fn random_gap_top<R: Rng>(rng: &mut R) -> f64 {
    rng.gen_range(GAP_TOP_MIN as i32..=GAP_TOP_MAX as i32) as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::SPAWN_INTERVAL_MS;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_no_spawn_until_interval_strictly_exceeded() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut spawner = Spawner::new(1000);
        assert!(spawner.maybe_spawn(1000, SPAWN_INTERVAL_MS, &mut rng).is_none());
        assert!(spawner
            .maybe_spawn(1000 + SPAWN_INTERVAL_MS, SPAWN_INTERVAL_MS, &mut rng)
            .is_none());
        let o = spawner
            .maybe_spawn(1001 + SPAWN_INTERVAL_MS, SPAWN_INTERVAL_MS, &mut rng)
            .expect("interval elapsed");
        assert_eq!(o.x, PLAY_WIDTH);
        assert!(!o.passed);
        assert_eq!(spawner.last_spawn_ms(), 1001 + SPAWN_INTERVAL_MS);
    }

    #[test]
    fn test_spawn_resets_timer() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut spawner = Spawner::new(0);
        assert!(spawner.maybe_spawn(2000, 1800, &mut rng).is_some());
        assert!(spawner.maybe_spawn(2500, 1800, &mut rng).is_none());
        assert!(spawner.maybe_spawn(3801, 1800, &mut rng).is_some());
    }

    #[test]
    fn test_gap_top_in_range_and_whole() {
        let mut rng = ChaCha8Rng::seed_from_u64(99);
        for _ in 0..500 {
            let g = random_gap_top(&mut rng);
            assert!((GAP_TOP_MIN..=GAP_TOP_MAX).contains(&g));
            assert_eq!(g.fract(), 0.0);
        }
    }

    #[test]
    fn test_same_seed_same_obstacles() {
        let run = |seed| {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let mut spawner = Spawner::new(0);
            (1..=5)
                .filter_map(|i| spawner.maybe_spawn(i * 2000, 1800, &mut rng))
                .map(|o| o.gap_top)
                .collect::<Vec<_>>()
        };
        assert_eq!(run(42), run(42));
        assert_eq!(run(42).len(), 5);
    }

    #[test]
    fn test_reset_restarts_interval() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut spawner = Spawner::new(0);
        spawner.reset(5000);
        assert!(spawner.maybe_spawn(6000, 1800, &mut rng).is_none());
        assert!(spawner.maybe_spawn(6801, 1800, &mut rng).is_some());
    }
}
