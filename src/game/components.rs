//! ECS components shared across the game plugins.

use bevy::prelude::*;

use super::{CELL_SIZE, GRID_HEIGHT, GRID_WIDTH};

/// Grid cell component. `y` grows downward, matching the level layout rows.
#[derive(Component, Clone, Copy, PartialEq, Eq, Debug)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Check if this position occupies the same cell as another.
    pub fn collides_with(&self, other: &Position) -> bool {
        self.x == other.x && self.y == other.y
    }

    /// The neighboring cell one step away in the given direction.
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self::new(self.x + dx, self.y + dy)
    }

    /// World-space translation for this cell, arena centered on the origin.
    pub fn to_world(self, z: f32) -> Vec3 {
        Vec3::new(
            (self.x as f32 - GRID_WIDTH as f32 / 2.0 + 0.5) * CELL_SIZE,
            (GRID_HEIGHT as f32 / 2.0 - self.y as f32 - 0.5) * CELL_SIZE,
            z,
        )
    }
}

/// Movement direction.
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns the opposite direction.
    pub fn opposite(&self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Grid displacement for one step. `y` grows downward.
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// Maps a directional key press (arrows or WASD) to a direction.
    pub fn from_keys(keyboard_input: &ButtonInput<KeyCode>) -> Option<Direction> {
        if keyboard_input.any_just_pressed([KeyCode::ArrowUp, KeyCode::KeyW]) {
            Some(Direction::Up)
        } else if keyboard_input.any_just_pressed([KeyCode::ArrowDown, KeyCode::KeyS]) {
            Some(Direction::Down)
        } else if keyboard_input.any_just_pressed([KeyCode::ArrowLeft, KeyCode::KeyA]) {
            Some(Direction::Left)
        } else if keyboard_input.any_just_pressed([KeyCode::ArrowRight, KeyCode::KeyD]) {
            Some(Direction::Right)
        } else {
            None
        }
    }
}

/// Component marking one cell of the snake body. The body order lives in
/// [`crate::game::GameState`]; the head is whichever entity sits at the back.
#[derive(Component)]
pub struct SnakeSegment;

/// Component marking the food entity.
#[derive(Component)]
pub struct Food;

/// Component for the food pulsing animation.
#[derive(Component)]
pub struct FoodPulse {
    pub timer: Timer,
}

/// Component marking a wall cell.
#[derive(Component)]
pub struct Wall;
