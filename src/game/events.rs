//! Game messages passed between the gameplay plugins.

use bevy::prelude::*;

use super::Position;

/// Message written once per tick after the snake has moved. Carries the new
/// head so the collision resolver can exclude it from body checks.
#[derive(Message)]
pub struct SnakeAdvanced {
    pub head: Entity,
    pub position: Position,
}

/// Message written when the head lands on the food cell.
#[derive(Message)]
pub struct FoodEaten {
    pub food: Entity,
    pub position: Position,
}

/// Message written when the head lands on a lethal cell.
#[derive(Message)]
pub struct SnakeCrashed;
