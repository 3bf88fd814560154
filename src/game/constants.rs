//! Game constants for grid size, timing, colors, and rendering layers.

use bevy::prelude::*;
use std::time::Duration;

// Grid dimensions, in cells. The outermost ring of cells is wall.
pub const GRID_WIDTH: u32 = 17;
pub const GRID_HEIGHT: u32 = 15;

// Visual settings
pub const CELL_SIZE: f32 = 30.0;
pub const STAGE_WIDTH: f32 = GRID_WIDTH as f32 * CELL_SIZE;
pub const STAGE_HEIGHT: f32 = GRID_HEIGHT as f32 * CELL_SIZE;
pub const STAGE_SCALE: f32 = 1.5;

// Timing
pub const TICK_INTERVAL: Duration = Duration::from_millis(200);
pub const RESPAWN_DELAY: Duration = Duration::from_millis(500);

// Snake spawn: a vertical line in this column, head at the bottom.
pub const INITIAL_LENGTH: usize = 3;
pub const SPAWN_COLUMN: i32 = 1;

// Colors
pub const SNAKE_HEAD_COLOR: Color = Color::srgba(1.0, 0.0, 0.0, 1.0);
pub const SNAKE_BODY_COLOR: Color = Color::srgba(1.0, 1.0, 1.0, 1.0);
pub const FOOD_COLOR: Color = Color::srgba(0.0, 1.0, 0.0, 1.0);
pub const WALL_COLOR: Color = Color::srgba(0.39, 0.0, 0.0, 1.0);
pub const ARENA_COLOR: Color = Color::srgba(0.08, 0.08, 0.1, 1.0);
pub const BACKGROUND_COLOR: Color = Color::srgba(0.0, 0.0, 0.0, 1.0);

// Z-index constants for rendering layers
pub const Z_BACKGROUND: f32 = 0.0;
pub const Z_WALL: f32 = 1.0;
pub const Z_FOOD: f32 = 1.5;
pub const Z_SNAKE: f32 = 2.0;
