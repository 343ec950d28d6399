// Frame timing constants
pub const TARGET_FPS: u32 = 60;
pub const FRAME_INTERVAL_MS: u64 = 1000 / TARGET_FPS as u64;

// Play area layout (pixels, y grows downward)
pub const PLAY_WIDTH: f64 = 400.0;
pub const PLAY_HEIGHT: f64 = 600.0;
pub const GROUND_HEIGHT: f64 = 50.0;
pub const GROUND_LINE: f64 = PLAY_HEIGHT - GROUND_HEIGHT;

// Bird physics (per frame)
pub const GRAVITY: f64 = 0.25;
pub const JUMP_VELOCITY: f64 = -6.0;
pub const BIRD_X: f64 = 80.0;
pub const BIRD_START_Y: f64 = PLAY_HEIGHT / 2.0;
pub const BIRD_RADIUS: f64 = 15.0;
pub const MAX_TILT_DEGREES: f64 = 30.0;
pub const TILT_PER_VELOCITY: f64 = 4.0;
pub const WING_FLAP_SPEED: f64 = 0.3;
pub const WING_FLAP_WRAP: f64 = 20.0;
pub const WING_FLAP_ON_JUMP: f64 = 10.0;
pub const TRAIL_CAPACITY: usize = 8;
pub const TRAIL_Y_OFFSET: f64 = 2.0;

// Hitbox sits forward of the body and is narrower than the drawn radius
pub const HITBOX_FORWARD_FACTOR: f64 = 0.7;
pub const HITBOX_RADIUS_FACTOR: f64 = 0.9;

// Obstacles
pub const PIPE_SPEED: f64 = 3.0;
pub const PIPE_GAP: f64 = 180.0;
pub const PIPE_WIDTH: f64 = 60.0;
pub const PIPE_CAP_HEIGHT: f64 = 20.0;
pub const PIPE_CAP_OVERHANG: f64 = 5.0;
pub const SPAWN_INTERVAL_MS: u64 = 1800;
pub const MIN_STUB_HEIGHT: f64 = 50.0;
pub const GAP_TOP_MIN: f64 = 100.0;
pub const GAP_TOP_MAX: f64 = GROUND_LINE - PIPE_GAP - MIN_STUB_HEIGHT;

// Effects
pub const CRASH_SHAKE_INTENSITY: u32 = 10;
pub const SCORE_FLASH_FRAMES: u32 = 10;

// Particles
pub const PARTICLE_GRAVITY: f64 = 0.1;
pub const PARTICLE_SPEED_MIN: f64 = 2.0;
pub const PARTICLE_SPEED_MAX: f64 = 8.0;
pub const PARTICLE_SIZE_MIN: f64 = 2.0;
pub const PARTICLE_SIZE_MAX: f64 = 6.0;
pub const PARTICLE_LIFETIME_MIN: u32 = 20;
pub const PARTICLE_LIFETIME_MAX: u32 = 40;
pub const MAX_PARTICLES: usize = 500;
pub const FLAP_BURST_COUNT: usize = 10;
pub const SCORE_BURST_COUNT: usize = 15;
pub const CRASH_BURST_COUNT: usize = 30;
pub const FLAP_BURST_X_OFFSET: f64 = -10.0;

// Clouds (decorative)
pub const CLOUD_COUNT: usize = 5;
pub const CLOUD_X_MIN: i32 = -100;
pub const CLOUD_Y_MIN: i32 = 50;
pub const CLOUD_Y_MAX: i32 = 200;
pub const CLOUD_SPEED_MIN: f64 = 0.2;
pub const CLOUD_SPEED_MAX: f64 = 0.8;
pub const CLOUD_SIZE_MIN: i32 = 30;
pub const CLOUD_SIZE_MAX: i32 = 60;
pub const CLOUD_WRAP_MARGIN: f64 = 100.0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gap_range_leaves_room_for_both_stubs() {
        assert!(GAP_TOP_MIN >= MIN_STUB_HEIGHT);
        assert!(GAP_TOP_MAX + PIPE_GAP + MIN_STUB_HEIGHT <= GROUND_LINE);
        assert!(GAP_TOP_MIN < GAP_TOP_MAX);
    }

    #[test]
    fn test_frame_interval_matches_fps() {
        assert_eq!(FRAME_INTERVAL_MS, 16);
    }
}
