//! Terminal rendering of a [`Scene`].
//!
//! The backdrop sets cell backgrounds, shapes are rasterised on a ratatui
//! canvas and merged over it, labels are written straight into the buffer.
//! Overlays darken everything drawn so far before their own pass.

use super::responsive::{render_too_small, LayoutContext};
use super::scene::{build_scene, Anchor, Label, Pass, Primitive, Scene};
use super::theme::Theme;
use crate::constants::{PLAY_HEIGHT, PLAY_WIDTH};
use crate::game::GameState;
use crate::palette::{Rgb, BLACK};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::canvas::{Canvas, Circle, Context, Line as Segment, Rectangle},
    widgets::{Paragraph, Widget},
    Frame,
};

const CONTROLS: &[(&str, &str)] = &[("[Space/Up/Enter]", "Flap"), ("[Esc/Q]", "Quit")];

/// Draw the whole game screen for `state`.
pub fn render_game(frame: &mut Frame, state: &GameState, theme: &Theme, elapsed_ms: u64) {
    let ctx = LayoutContext::from_frame(frame);
    let (Some(play), Some(status)) = (ctx.play_area, ctx.status_bar) else {
        render_too_small(frame, &ctx);
        return;
    };

    let scene = build_scene(state, elapsed_ms);
    render_scene(frame.buffer_mut(), play, &scene, theme);
    render_controls(frame, status);
}

pub fn render_scene(buf: &mut Buffer, area: Rect, scene: &Scene, theme: &Theme) {
    paint_backdrop(buf, area, scene);
    render_pass(buf, area, &scene.world, scene.offset, theme);
    if let Some(overlay) = &scene.overlay {
        darken(buf, area, overlay.shade);
        render_pass(buf, area, &overlay.pass, scene.offset, theme);
    }
}

fn to_color(c: Rgb) -> Color {
    Color::Rgb(c.0, c.1, c.2)
}

fn paint_backdrop(buf: &mut Buffer, area: Rect, scene: &Scene) {
    let (Some(first), Some(last)) = (scene.backdrop.first(), scene.backdrop.last()) else {
        return;
    };
    let row_height = PLAY_HEIGHT / area.height as f64;
    for row in 0..area.height {
        let world_y = (row as f64 + 0.5) * row_height - scene.offset.1;
        let band = scene
            .backdrop
            .iter()
            .find(|b| world_y >= b.top && world_y < b.bottom)
            .unwrap_or(if world_y < first.top { first } else { last });
        let style = Style::default().bg(to_color(band.color));
        buf.set_style(
            Rect {
                y: area.y + row,
                height: 1,
                ..area
            },
            style,
        );
    }
}

/// Blend every cell in `area` toward black by `shade / 255`.
fn darken(buf: &mut Buffer, area: Rect, shade: u8) {
    let t = shade as f64 / 255.0;
    let dim = |c: Color| match c {
        Color::Rgb(r, g, b) => to_color(Rgb(r, g, b).lerp(BLACK, t)),
        other => other,
    };
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            let cell = buf.get_mut(x, y);
            let (fg, bg) = (dim(cell.fg), dim(cell.bg));
            cell.set_fg(fg).set_bg(bg);
        }
    }
}

fn render_pass(buf: &mut Buffer, area: Rect, pass: &Pass, offset: (f64, f64), theme: &Theme) {
    if !pass.layers.is_empty() {
        let raster = Raster::new(area, theme, offset);
        let canvas = Canvas::default()
            .marker(theme.marker.marker())
            .x_bounds([0.0, PLAY_WIDTH])
            .y_bounds([0.0, PLAY_HEIGHT])
            .paint(|ctx| {
                for layer in &pass.layers {
                    for primitive in &layer.primitives {
                        raster.draw(ctx, primitive);
                    }
                    ctx.layer();
                }
            });

        // Canvas resets backgrounds, so draw off-screen and copy the ink.
        let mut scratch = Buffer::empty(area);
        canvas.render(area, &mut scratch);
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                let src = scratch.get(x, y);
                if src.symbol() == " " {
                    continue;
                }
                let (symbol, fg) = (src.symbol().to_string(), src.fg);
                buf.get_mut(x, y).set_symbol(&symbol).set_fg(fg);
            }
        }
    }

    for label in &pass.labels {
        place_label(buf, area, label, offset, theme);
    }
}

fn place_label(buf: &mut Buffer, area: Rect, label: &Label, offset: (f64, f64), theme: &Theme) {
    let col_width = PLAY_WIDTH / area.width as f64;
    let row_height = PLAY_HEIGHT / area.height as f64;
    let len = label.text.chars().count() as f64;
    let left = match label.anchor {
        Anchor::Left => label.x,
        Anchor::Center => label.x - len * col_width / 2.0,
    } + offset.0;
    let top = label.y + offset.1;

    let col = ((left / col_width).floor().max(0.0) as u16).min(area.width - 1);
    let row = ((top / row_height).floor().max(0.0) as u16).min(area.height - 1);
    let style = theme
        .text_style(label.role)
        .to_style()
        .fg(to_color(label.color));
    let x = area.x + col;
    buf.set_line(
        x,
        area.y + row,
        &Line::from(Span::styled(label.text.clone(), style)),
        area.right() - x,
    );
}

/// Turns scene primitives into canvas shapes at the marker's dot pitch.
struct Raster {
    step_x: f64,
    step_y: f64,
    offset: (f64, f64),
}

impl Raster {
    fn new(area: Rect, theme: &Theme, offset: (f64, f64)) -> Self {
        let (dots_x, dots_y) = theme.marker.resolution();
        Self {
            step_x: PLAY_WIDTH / (area.width.max(1) * dots_x) as f64,
            step_y: PLAY_HEIGHT / (area.height.max(1) * dots_y) as f64,
            offset,
        }
    }

    /// World (y down) to canvas (y up), shifted by the shake offset.
    fn point(&self, x: f64, y: f64) -> (f64, f64) {
        (x + self.offset.0, PLAY_HEIGHT - (y + self.offset.1))
    }

    fn segment(&self, ctx: &mut Context, from: (f64, f64), to: (f64, f64), color: Color) {
        let (x1, y1) = self.point(from.0, from.1);
        let (x2, y2) = self.point(to.0, to.1);
        ctx.draw(&Segment {
            x1,
            y1,
            x2,
            y2,
            color,
        });
    }

    /// Sample rows covering `top..bottom`, at least one.
    fn scanlines(&self, top: f64, bottom: f64) -> Vec<f64> {
        let mut rows = Vec::new();
        let mut y = top + self.step_y / 2.0;
        while y < bottom {
            rows.push(y);
            y += self.step_y;
        }
        if rows.is_empty() && bottom >= top {
            rows.push((top + bottom) / 2.0);
        }
        rows
    }

    fn draw(&self, ctx: &mut Context, primitive: &Primitive) {
        match primitive {
            Primitive::Line { from, to, color } => self.segment(ctx, *from, *to, to_color(*color)),
            Primitive::Rect {
                rect,
                color,
                filled: true,
            } => {
                let color = to_color(*color);
                for y in self.scanlines(rect.y, rect.bottom()) {
                    self.segment(ctx, (rect.x, y), (rect.right(), y), color);
                }
            }
            Primitive::Rect {
                rect,
                color,
                filled: false,
            } => {
                let (x, y) = self.point(rect.x, rect.bottom());
                ctx.draw(&Rectangle {
                    x,
                    y,
                    width: rect.width,
                    height: rect.height,
                    color: to_color(*color),
                });
            }
            Primitive::Circle {
                x,
                y,
                radius,
                color,
                filled: true,
            } => {
                let color = to_color(*color);
                for sy in self.scanlines(y - radius, y + radius) {
                    let dy = sy - y;
                    let half = (radius * radius - dy * dy).max(0.0).sqrt();
                    self.segment(ctx, (x - half, sy), (x + half, sy), color);
                }
            }
            Primitive::Circle {
                x,
                y,
                radius,
                color,
                filled: false,
            } => {
                let (cx, cy) = self.point(*x, *y);
                ctx.draw(&Circle {
                    x: cx,
                    y: cy,
                    radius: *radius,
                    color: to_color(*color),
                });
            }
            Primitive::Polygon { points, color } => self.fill_polygon(ctx, points, to_color(*color)),
        }
    }

    /// Even-odd scanline fill, plus the outline so slivers stay visible.
    fn fill_polygon(&self, ctx: &mut Context, points: &[(f64, f64)], color: Color) {
        if points.len() < 2 {
            return;
        }
        let top = points.iter().map(|p| p.1).fold(f64::INFINITY, f64::min);
        let bottom = points.iter().map(|p| p.1).fold(f64::NEG_INFINITY, f64::max);
        let edges = || points.iter().zip(points.iter().cycle().skip(1));

        for y in self.scanlines(top, bottom) {
            let mut crossings: Vec<f64> = edges()
                .filter(|(a, b)| (a.1 <= y && b.1 > y) || (b.1 <= y && a.1 > y))
                .map(|(a, b)| a.0 + (y - a.1) / (b.1 - a.1) * (b.0 - a.0))
                .collect();
            crossings.sort_by(|a, b| a.total_cmp(b));
            for pair in crossings.chunks_exact(2) {
                self.segment(ctx, (pair[0], y), (pair[1], y), color);
            }
        }
        for (a, b) in edges() {
            self.segment(ctx, *a, *b, color);
        }
    }
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let mut spans = Vec::new();
    for (i, (key, action)) in CONTROLS.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(*key, Style::default().fg(Color::White)));
        spans.push(Span::styled(
            format!(" {}", action),
            Style::default().fg(Color::DarkGray),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)).alignment(Alignment::Center), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Phase;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use ratatui::{backend::TestBackend, Terminal};

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer.get(x, y).symbol());
            }
            text.push('\n');
        }
        text
    }

    fn draw(state: &GameState, width: u16, height: u16) -> String {
        let theme = Theme::resolve(None).unwrap();
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|frame| render_game(frame, state, &theme, 0))
            .unwrap();
        screen_text(&terminal)
    }

    fn test_state() -> GameState {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        GameState::new(0, &mut rng)
    }

    #[test]
    fn test_start_screen_renders() {
        let text = draw(&test_state(), 80, 40);
        assert!(text.contains("Score: 0"));
        assert!(text.contains("Press SPACE to Start"));
        assert!(text.contains("Flap"));
    }

    #[test]
    fn test_game_over_renders() {
        let mut state = test_state();
        state.phase = Phase::GameOver;
        state.score = 7;
        let text = draw(&state, 80, 40);
        assert!(text.contains("GAME OVER"));
        assert!(text.contains("Final Score: 7"));
    }

    #[test]
    fn test_shaken_frame_still_renders() {
        let mut state = test_state();
        state.phase = Phase::Playing;
        state.shake_offset = (-10, 10);
        let text = draw(&state, 80, 40);
        assert!(text.contains("Score: 0"));
    }

    #[test]
    fn test_tiny_terminal_shows_notice() {
        let text = draw(&test_state(), 20, 10);
        assert!(text.contains("Terminal too small"));
    }

    #[test]
    fn test_darken_scales_rgb() {
        let area = Rect::new(0, 0, 1, 1);
        let mut buf = Buffer::empty(area);
        buf.get_mut(0, 0).set_fg(Color::Rgb(200, 100, 50)).set_bg(Color::Reset);
        darken(&mut buf, area, 255);
        assert_eq!(buf.get(0, 0).fg, to_color(BLACK));
        assert_eq!(buf.get(0, 0).bg, Color::Reset);
    }

    #[test]
    fn test_scanlines_never_empty() {
        let theme = Theme::resolve(None).unwrap();
        let raster = Raster::new(Rect::new(0, 0, 40, 30), &theme, (0.0, 0.0));
        assert_eq!(raster.scanlines(10.0, 10.5).len(), 1);
        assert!(raster.scanlines(0.0, 100.0).len() > 10);
    }
}
