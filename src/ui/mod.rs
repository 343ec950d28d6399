//! Terminal presentation: scene description, rasterising, layout and theme.

pub mod game_scene;
pub mod responsive;
pub mod scene;
pub mod theme;

pub use game_scene::render_game;
pub use theme::Theme;
