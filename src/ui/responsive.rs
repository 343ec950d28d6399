//! Fitting the fixed-size play area into whatever terminal we get.
//!
//! The world is 400x600 pixels. Terminal cells are roughly twice as tall as
//! they are wide, so the play area wants four columns for every three rows.

use crate::constants::{PLAY_HEIGHT, PLAY_WIDTH};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph},
    Frame,
};

pub const MIN_COLS: u16 = 24;
pub const MIN_ROWS: u16 = 16;

/// Rows kept below the play area for the controls line.
pub const STATUS_ROWS: u16 = 1;

/// Terminal cell height divided by width.
const CELL_ASPECT: f64 = 2.0;

/// Per-frame layout, computed once from the terminal size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutContext {
    pub cols: u16,
    pub rows: u16,
    /// Aspect-correct play area, or `None` when the terminal is too small.
    pub play_area: Option<Rect>,
    /// Controls line under the play area.
    pub status_bar: Option<Rect>,
}

impl LayoutContext {
    pub fn from_frame(frame: &Frame) -> Self {
        Self::from_area(frame.size())
    }

    pub fn from_area(area: Rect) -> Self {
        let (play_area, status_bar) = if area.width < MIN_COLS || area.height < MIN_ROWS {
            (None, None)
        } else {
            let available = Rect {
                height: area.height - STATUS_ROWS,
                ..area
            };
            let play = fit_play_area(available);
            let status = Rect {
                x: play.x,
                y: play.y + play.height,
                width: play.width,
                height: STATUS_ROWS,
            };
            (Some(play), Some(status))
        };

        Self {
            cols: area.width,
            rows: area.height,
            play_area,
            status_bar,
        }
    }
}

/// Largest rectangle with the play area's on-screen aspect, centred in `area`.
pub fn fit_play_area(area: Rect) -> Rect {
    let cols_per_row = (PLAY_WIDTH / PLAY_HEIGHT) * CELL_ASPECT;
    let (width, height) = if area.width as f64 >= area.height as f64 * cols_per_row {
        let h = area.height;
        ((h as f64 * cols_per_row).round() as u16, h)
    } else {
        let w = area.width;
        (w, (w as f64 / cols_per_row).round() as u16)
    };
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Render a "terminal too small" message.
pub fn render_too_small(frame: &mut Frame, ctx: &LayoutContext) {
    let area = frame.size();
    frame.render_widget(Clear, area);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Terminal too small",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!(
                "Need {}x{}, have {}x{}",
                MIN_COLS, MIN_ROWS, ctx.cols, ctx.rows
            ),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}
