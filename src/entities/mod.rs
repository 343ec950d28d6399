//! Entity models.
//!
//! Each entity is plain state plus its per-tick update rule. Nothing here
//! knows about terminals or colours beyond the [`Rgb`](crate::palette::Rgb)
//! carried by particles, so the whole simulation can run headless.

pub mod bird;
pub mod cloud;
pub mod obstacle;
pub mod particle;

pub use bird::Bird;
pub use cloud::Cloud;
pub use obstacle::Obstacle;
pub use particle::{BurstKind, Particle};
