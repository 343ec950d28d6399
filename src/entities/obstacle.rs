//! Pipe pair obstacles.

use crate::constants::{GROUND_LINE, PIPE_GAP, PIPE_SPEED, PIPE_WIDTH};
use crate::geometry::Rect;

/// A top and bottom pipe with a vertical gap between them.
#[derive(Debug, Clone, PartialEq)]
pub struct Obstacle {
    /// Left edge, decreasing every frame.
    pub x: f64,
    /// Height of the top pipe; the gap spans `gap_top..gap_top + PIPE_GAP`.
    pub gap_top: f64,
    /// Set once the bird clears the trailing edge. Never reset.
    pub passed: bool,
}

impl Obstacle {
    pub fn new(x: f64, gap_top: f64) -> Self {
        Self {
            x,
            gap_top,
            passed: false,
        }
    }

    pub const fn width(&self) -> f64 {
        PIPE_WIDTH
    }

    pub fn advance(&mut self) {
        self.x -= PIPE_SPEED;
    }

    pub fn right_edge(&self) -> f64 {
        self.x + PIPE_WIDTH
    }

    pub fn gap_bottom(&self) -> f64 {
        self.gap_top + PIPE_GAP
    }

    pub fn top_rect(&self) -> Rect {
        Rect::new(self.x, 0.0, PIPE_WIDTH, self.gap_top)
    }

    /// Bottom pipe, from the end of the gap down to the ground line.
    pub fn bottom_rect(&self) -> Rect {
        let top = self.gap_bottom();
        Rect::new(self.x, top, PIPE_WIDTH, GROUND_LINE - top)
    }

    pub fn gap_center(&self) -> (f64, f64) {
        (
            self.x + (PIPE_WIDTH / 2.0).floor(),
            self.gap_top + (PIPE_GAP / 2.0).floor(),
        )
    }

    /// Fully scrolled past the left edge of the play area.
    pub fn is_off_screen(&self) -> bool {
        self.x < -PIPE_WIDTH
    }

    /// Flip `passed` if the trailing edge is behind `bird_x`.
    ///
    /// Returns true only on the tick the flag flips.
    pub fn try_pass(&mut self, bird_x: f64) -> bool {
        if !self.passed && self.right_edge() < bird_x {
            self.passed = true;
            return true;
        }
        false
    }
}
