//! What to draw each frame.
//!
//! [`build_scene`] turns a [`GameState`] into backdrop bands, layers of
//! shape primitives and text labels, all in play-area pixels with y growing
//! downward. It does no terminal I/O, so every frame's picture can be
//! inspected in tests; `game_scene` does the rasterising.

use super::theme::TextRole;
use crate::constants::{
    GROUND_LINE, PIPE_CAP_HEIGHT, PIPE_CAP_OVERHANG, PLAY_HEIGHT, PLAY_WIDTH,
};
use crate::entities::{Bird, Cloud, Obstacle, Particle};
use crate::game::effects::score_color;
use crate::game::{GameState, Phase};
use crate::geometry::Rect;
use crate::palette::{
    Rgb, BLACK, BROWN, CLOUD, DARK_GREEN, GREEN, ORANGE, PANEL, RED, SKY_BLUE, WHITE, YELLOW,
};

pub const GAME_TITLE: &str = "SKYFLAP";

const SKY_BAND_HEIGHT: f64 = 25.0;
const SUN_X: f64 = PLAY_WIDTH - 80.0;
const SUN_Y: f64 = 80.0;
const GRASS_HEIGHT: f64 = 10.0;
const BLADE_SPACING: usize = 5;
const STRIPE_SPACING: usize = 20;
const START_SHADE: u8 = 128;
const GAME_OVER_SHADE: u8 = 180;
const TRAIL_MAX_OPACITY: f64 = 0.3;

#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Circle {
        x: f64,
        y: f64,
        radius: f64,
        color: Rgb,
        filled: bool,
    },
    /// Always filled.
    Polygon { points: Vec<(f64, f64)>, color: Rgb },
    Rect { rect: Rect, color: Rgb, filled: bool },
    Line {
        from: (f64, f64),
        to: (f64, f64),
        color: Rgb,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    Left,
    Center,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    /// Left edge or centre, depending on `anchor`.
    pub x: f64,
    /// Top of the text.
    pub y: f64,
    pub text: String,
    pub color: Rgb,
    pub role: TextRole,
    pub anchor: Anchor,
}

impl Label {
    fn centered(x: f64, y: f64, text: impl Into<String>, color: Rgb, role: TextRole) -> Self {
        Self {
            x,
            y,
            text: text.into(),
            color,
            role,
            anchor: Anchor::Center,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerKind {
    Sun,
    Clouds,
    Obstacles,
    Ground,
    Particles,
    Bird,
    Hud,
    DemoBird,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    pub kind: LayerKind,
    pub primitives: Vec<Primitive>,
}

/// Horizontal background strip (`top..bottom`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Band {
    pub top: f64,
    pub bottom: f64,
    pub color: Rgb,
}

/// Shapes and text drawn together; later layers cover earlier ones.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Pass {
    pub layers: Vec<Layer>,
    pub labels: Vec<Label>,
}

impl Pass {
    pub fn layer(&self, kind: LayerKind) -> Option<&Layer> {
        self.layers.iter().find(|l| l.kind == kind)
    }
}

/// Darkening veil over the world plus whatever sits on top of it.
#[derive(Debug, Clone, PartialEq)]
pub struct Overlay {
    /// 0 = invisible, 255 = opaque black.
    pub shade: u8,
    pub pass: Pass,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    /// Shake offset applied to everything.
    pub offset: (f64, f64),
    pub backdrop: Vec<Band>,
    pub world: Pass,
    pub overlay: Option<Overlay>,
}

/// Describe the frame for `state`. `elapsed_ms` drives idle animations.
pub fn build_scene(state: &GameState, elapsed_ms: u64) -> Scene {
    let mut world = Pass::default();

    world.layers.push(Layer {
        kind: LayerKind::Sun,
        primitives: sun(),
    });
    world.layers.push(Layer {
        kind: LayerKind::Clouds,
        primitives: state.clouds.iter().flat_map(cloud).collect(),
    });
    world.layers.push(Layer {
        kind: LayerKind::Obstacles,
        primitives: state.obstacles.iter().flat_map(obstacle).collect(),
    });
    world.layers.push(Layer {
        kind: LayerKind::Ground,
        primitives: ground(),
    });
    world.layers.push(Layer {
        kind: LayerKind::Particles,
        primitives: state.particles.iter().map(particle).collect(),
    });
    if state.phase != Phase::NotStarted {
        world.layers.push(Layer {
            kind: LayerKind::Bird,
            primitives: bird(&state.bird),
        });
    }
    world.layers.push(Layer {
        kind: LayerKind::Hud,
        primitives: vec![Primitive::Rect {
            rect: Rect::new(5.0, 5.0, 150.0, 70.0),
            color: PANEL,
            filled: true,
        }],
    });
    world.labels.push(Label {
        x: 15.0,
        y: 15.0,
        text: format!("Score: {}", state.score),
        color: score_color(state.score_flash),
        role: TextRole::Score,
        anchor: Anchor::Left,
    });
    world.labels.push(Label {
        x: 15.0,
        y: 45.0,
        text: format!("High: {}", state.high_score),
        color: WHITE,
        role: TextRole::Score,
        anchor: Anchor::Left,
    });

    let overlay = match state.phase {
        Phase::NotStarted => Some(start_overlay(elapsed_ms)),
        Phase::GameOver => Some(game_over_overlay(state.score)),
        Phase::Playing => None,
    };

    Scene {
        offset: (state.shake_offset.0 as f64, state.shake_offset.1 as f64),
        backdrop: backdrop(),
        world,
        overlay,
    }
}

fn start_overlay(elapsed_ms: u64) -> Overlay {
    let center = PLAY_WIDTH / 2.0;
    let mut demo = Bird::at(center, 400.0);
    demo.wing_phase = (elapsed_ms as f64 * 0.005).sin() * 10.0;

    Overlay {
        shade: START_SHADE,
        pass: Pass {
            layers: vec![Layer {
                kind: LayerKind::DemoBird,
                primitives: bird(&demo),
            }],
            labels: vec![
                Label::centered(center, 150.0, GAME_TITLE, WHITE, TextRole::Title),
                Label::centered(center, 250.0, "Press SPACE to Start", WHITE, TextRole::Instruction),
                Label::centered(center, 300.0, "Press SPACE to Flap", WHITE, TextRole::Instruction),
            ],
        },
    }
}

fn game_over_overlay(score: u32) -> Overlay {
    let center = PLAY_WIDTH / 2.0;
    Overlay {
        shade: GAME_OVER_SHADE,
        pass: Pass {
            layers: Vec::new(),
            labels: vec![
                Label::centered(center, 200.0, "GAME OVER", RED, TextRole::Banner),
                Label::centered(center, 280.0, format!("Final Score: {}", score), YELLOW, TextRole::Score),
                Label::centered(center, 350.0, "Press SPACE to Restart", WHITE, TextRole::Instruction),
            ],
        },
    }
}

/// Sky gradient down to the ground line, then solid earth.
fn backdrop() -> Vec<Band> {
    let mut bands = Vec::new();
    let mut top = 0.0;
    while top < GROUND_LINE {
        let bottom = (top + SKY_BAND_HEIGHT).min(GROUND_LINE);
        let t = ((top + bottom) / 2.0) / PLAY_HEIGHT;
        bands.push(Band {
            top,
            bottom,
            color: Rgb(
                (135.0 + t * 100.0) as u8,
                (206.0 - t * 50.0) as u8,
                235,
            ),
        });
        top = bottom;
    }
    bands.push(Band {
        top: GROUND_LINE,
        bottom: PLAY_HEIGHT,
        color: BROWN,
    });
    bands
}

fn sun() -> Vec<Primitive> {
    let mut out = vec![
        Primitive::Circle {
            x: SUN_X,
            y: SUN_Y,
            radius: 40.0,
            color: YELLOW,
            filled: true,
        },
        Primitive::Circle {
            x: SUN_X,
            y: SUN_Y,
            radius: 35.0,
            color: ORANGE,
            filled: true,
        },
    ];
    for deg in (0..360).step_by(30) {
        let rad = (deg as f64).to_radians();
        out.push(Primitive::Line {
            from: (SUN_X + 40.0 * rad.cos(), SUN_Y + 40.0 * rad.sin()),
            to: (SUN_X + 55.0 * rad.cos(), SUN_Y + 55.0 * rad.sin()),
            color: YELLOW,
        });
    }
    out
}

/// Five overlapping puffs: three along the base, two on top.
fn cloud(c: &Cloud) -> Vec<Primitive> {
    let base = (0..3).map(|i| {
        let i = i as f64;
        (c.x + i * c.size * 0.6, c.y, c.size * (0.8 + i * 0.1))
    });
    let top = (0..2).map(|i| {
        let i = i as f64;
        (
            c.x + i * c.size * 0.6 + c.size * 0.3,
            c.y - c.size * 0.3,
            c.size * (0.7 + i * 0.1),
        )
    });
    base.chain(top)
        .map(|(x, y, radius)| Primitive::Circle {
            x,
            y,
            radius,
            color: CLOUD,
            filled: true,
        })
        .collect()
}

fn obstacle(o: &Obstacle) -> Vec<Primitive> {
    let fill = |rect: Rect, color: Rgb| Primitive::Rect {
        rect,
        color,
        filled: true,
    };
    let top = o.top_rect();
    let bottom = o.bottom_rect();
    let cap_width = o.width() + PIPE_CAP_OVERHANG * 2.0;
    let stripe = GREEN.scale(0.9);

    let mut out = vec![
        fill(top, GREEN),
        fill(
            Rect::new(o.x - PIPE_CAP_OVERHANG, top.bottom() - PIPE_CAP_HEIGHT, cap_width, PIPE_CAP_HEIGHT),
            DARK_GREEN,
        ),
        fill(bottom, GREEN),
        fill(
            Rect::new(o.x - PIPE_CAP_OVERHANG, bottom.y, cap_width, PIPE_CAP_HEIGHT),
            DARK_GREEN,
        ),
    ];

    let stripe_rect = |y: f64| fill(Rect::new(o.x + 10.0, y, o.width() - 20.0, 10.0), stripe);
    let cap_top = top.bottom() - PIPE_CAP_HEIGHT;
    for y in (0..cap_top.max(0.0) as usize).step_by(STRIPE_SPACING) {
        out.push(stripe_rect(y as f64));
    }
    let first = (bottom.y + PIPE_CAP_HEIGHT) as usize;
    for y in (first..GROUND_LINE as usize).step_by(STRIPE_SPACING) {
        out.push(stripe_rect(y as f64));
    }
    out
}

fn ground() -> Vec<Primitive> {
    let mut out = vec![Primitive::Rect {
        rect: Rect::new(0.0, GROUND_LINE, PLAY_WIDTH, GRASS_HEIGHT),
        color: DARK_GREEN,
        filled: true,
    }];
    for x in (0..PLAY_WIDTH as usize).step_by(BLADE_SPACING) {
        let h = blade_height(x);
        let x = x as f64;
        out.push(Primitive::Polygon {
            points: vec![(x, GROUND_LINE), (x + 2.0, GROUND_LINE - h), (x + 4.0, GROUND_LINE)],
            color: GREEN,
        });
    }
    out
}

/// Grass blade height in `5..=15`, fixed per column so the lawn does not flicker.
pub fn blade_height(x: usize) -> f64 {
    5.0 + ((x / BLADE_SPACING) * 7 % 11) as f64
}

/// Blend toward the sky so faded things look translucent.
fn fade(color: Rgb, opacity: f64) -> Rgb {
    SKY_BLUE.lerp(color, opacity)
}

fn particle(p: &Particle) -> Primitive {
    Primitive::Circle {
        x: p.x,
        y: p.y,
        radius: p.size,
        color: fade(p.color, p.opacity()),
        filled: true,
    }
}

/// The bird, tilted by its angle (positive = nose up).
fn bird(b: &Bird) -> Vec<Primitive> {
    let r = b.radius();
    let mut out = Vec::new();

    let n = b.trail.len();
    for (i, &(tx, ty)) in b.trail.iter().enumerate() {
        let frac = i as f64 / n as f64;
        let radius = r * frac;
        if radius < 1.0 {
            continue;
        }
        out.push(Primitive::Circle {
            x: tx,
            y: ty,
            radius,
            color: fade(YELLOW, TRAIL_MAX_OPACITY * frac),
            filled: true,
        });
    }

    out.push(Primitive::Circle {
        x: b.x,
        y: b.y,
        radius: r,
        color: YELLOW,
        filled: true,
    });

    // y grows downward, so nose-up is a negative screen rotation
    let rad = (-b.angle).to_radians();
    let (sin_a, cos_a) = rad.sin_cos();
    let at = |along: f64, across: f64| {
        (
            b.x + along * cos_a - across * sin_a,
            b.y + along * sin_a + across * cos_a,
        )
    };

    let wing_dy = b.wing_phase.sin() * 3.0;
    let (w0x, w0y) = at(-10.0, 5.0);
    let (w2x, w2y) = at(-10.0, -5.0);
    out.push(Primitive::Polygon {
        points: vec![(w0x, w0y + wing_dy), at(-15.0, 0.0), (w2x, w2y + wing_dy)],
        color: YELLOW.scale(0.8),
    });

    let (ex, ey) = at(5.0, -3.0);
    out.push(Primitive::Circle {
        x: ex,
        y: ey,
        radius: 5.0,
        color: BLACK,
        filled: true,
    });
    out.push(Primitive::Circle {
        x: ex + 2.0,
        y: ey - 2.0,
        radius: 2.0,
        color: WHITE,
        filled: true,
    });

    out.push(Primitive::Polygon {
        points: vec![at(10.0, 3.0), at(20.0, 0.0), at(10.0, -3.0)],
        color: ORANGE,
    });
    out
}
