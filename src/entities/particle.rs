//! Short-lived particles for flap, score and crash bursts.

use crate::constants::{
    CRASH_BURST_COUNT, FLAP_BURST_COUNT, MAX_PARTICLES, PARTICLE_GRAVITY, PARTICLE_LIFETIME_MAX,
    PARTICLE_LIFETIME_MIN, PARTICLE_SIZE_MAX, PARTICLE_SIZE_MIN, PARTICLE_SPEED_MAX,
    PARTICLE_SPEED_MIN, SCORE_BURST_COUNT,
};
use crate::palette::{Rgb, RED, WHITE, YELLOW};
use rand::Rng;
use std::f64::consts::TAU;

/// What triggered a burst. Decides colour and particle count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BurstKind {
    Flap,
    Score,
    Crash,
}

impl BurstKind {
    pub fn color(self) -> Rgb {
        match self {
            Self::Flap => WHITE,
            Self::Score => YELLOW,
            Self::Crash => RED,
        }
    }

    pub fn count(self) -> usize {
        match self {
            Self::Flap => FLAP_BURST_COUNT,
            Self::Score => SCORE_BURST_COUNT,
            Self::Crash => CRASH_BURST_COUNT,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub size: f64,
    /// Frames left to live.
    pub lifetime: u32,
    pub color: Rgb,
}

impl Particle {
    /// Step one frame. Returns whether the particle is still alive.
    pub fn advance(&mut self) -> bool {
        self.x += self.vx;
        self.y += self.vy;
        self.vy += PARTICLE_GRAVITY;
        self.lifetime = self.lifetime.saturating_sub(1);
        self.lifetime > 0
    }

    /// Fade factor in `0.0..=1.0`.
    pub fn opacity(&self) -> f64 {
        (self.lifetime as f64 / PARTICLE_LIFETIME_MAX as f64).min(1.0)
    }
}

/// Spray `count` particles from `(x, y)` in random directions.
///
/// Emission stops at [`MAX_PARTICLES`]; returns how many were added.
pub fn emit<R: Rng>(
    particles: &mut Vec<Particle>,
    x: f64,
    y: f64,
    color: Rgb,
    count: usize,
    rng: &mut R,
) -> usize {
    let room = MAX_PARTICLES.saturating_sub(particles.len());
    let n = count.min(room);
    if n < count {
        log::trace!("particle cap reached, dropped {} of {}", count - n, count);
    }

    particles.reserve(n);
    for _ in 0..n {
        let angle = rng.gen_range(0.0..TAU);
        let speed = rng.gen_range(PARTICLE_SPEED_MIN..PARTICLE_SPEED_MAX);
        particles.push(Particle {
            x,
            y,
            vx: angle.cos() * speed,
            vy: angle.sin() * speed,
            size: rng.gen_range(PARTICLE_SIZE_MIN..PARTICLE_SIZE_MAX),
            lifetime: rng.gen_range(PARTICLE_LIFETIME_MIN..=PARTICLE_LIFETIME_MAX),
            color,
        });
    }
    n
}

pub fn emit_burst<R: Rng>(
    particles: &mut Vec<Particle>,
    kind: BurstKind,
    x: f64,
    y: f64,
    rng: &mut R,
) -> usize {
    emit(particles, x, y, kind.color(), kind.count(), rng)
}

/// Step every particle and drop the expired ones. Order is not preserved.
pub fn advance_all(particles: &mut Vec<Particle>) {
    let mut i = 0;
    while i < particles.len() {
        if particles[i].advance() {
            i += 1;
        } else {
            particles.swap_remove(i);
        }
    }
}
