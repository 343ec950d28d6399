//! Colour values shared by the simulation and the renderer.
//!
//! The simulation only stores [`Rgb`] values (particle colours, burst
//! kinds); converting them to terminal colours is the renderer's job.

use serde::{Deserialize, Serialize};

/// A 24-bit colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Multiply every channel by `factor` (clamped to `0.0..=1.0`).
    pub fn scale(self, factor: f64) -> Rgb {
        let f = factor.clamp(0.0, 1.0);
        Rgb(
            (self.0 as f64 * f).round() as u8,
            (self.1 as f64 * f).round() as u8,
            (self.2 as f64 * f).round() as u8,
        )
    }

    /// Linear blend from `self` (t = 0) to `other` (t = 1).
    pub fn lerp(self, other: Rgb, t: f64) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
        Rgb(mix(self.0, other.0), mix(self.1, other.1), mix(self.2, other.2))
    }
}

pub const SKY_BLUE: Rgb = Rgb(135, 206, 235);
pub const WHITE: Rgb = Rgb(255, 255, 255);
pub const BLACK: Rgb = Rgb(30, 30, 40);
pub const GREEN: Rgb = Rgb(76, 175, 80);
pub const DARK_GREEN: Rgb = Rgb(56, 142, 60);
pub const RED: Rgb = Rgb(231, 76, 60);
pub const YELLOW: Rgb = Rgb(241, 196, 15);
pub const ORANGE: Rgb = Rgb(230, 126, 34);
pub const BROWN: Rgb = Rgb(139, 69, 19);
pub const CLOUD: Rgb = Rgb(250, 250, 252);
pub const GOLD: Rgb = Rgb(255, 215, 0);
pub const PANEL: Rgb = Rgb(40, 40, 50);
