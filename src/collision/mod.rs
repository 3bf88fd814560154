//! Collision plugin - classifies the head cell after each tick and
//! dispatches the outcome to the food and respawn systems.

use bevy::prelude::*;

use crate::game::{
    Food, FoodEaten, GameRules, Position, SnakeAdvanced, SnakeCrashed, SnakeSegment, Wall,
};

/// Plugin for per-tick contact resolution.
pub struct CollisionPlugin;

impl Plugin for CollisionPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            resolve_contacts.after(crate::snake::advance_snake),
        );
    }
}

/// What the head cell overlaps after a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contact {
    Food(Entity),
    Wall,
    Body,
}

/// Classifies the head cell. Walls win over food, food over body; the body
/// check only applies when the self-collision rule is switched on.
pub(crate) fn classify(
    head: Position,
    walls: &[Position],
    foods: &[(Entity, Position)],
    body: &[Position],
    rules: &GameRules,
) -> Option<Contact> {
    if walls.iter().any(|wall| head.collides_with(wall)) {
        return Some(Contact::Wall);
    }
    if let Some(&(entity, _)) = foods.iter().find(|(_, cell)| head.collides_with(cell)) {
        return Some(Contact::Food(entity));
    }
    if rules.self_collision && body.iter().any(|cell| head.collides_with(cell)) {
        return Some(Contact::Body);
    }
    None
}

/// System to resolve the contact for each movement tick.
pub(crate) fn resolve_contacts(
    mut advanced: MessageReader<SnakeAdvanced>,
    rules: Res<GameRules>,
    walls: Query<&Position, With<Wall>>,
    foods: Query<(Entity, &Position), With<Food>>,
    segments: Query<(Entity, &Position), With<SnakeSegment>>,
    mut eaten: MessageWriter<FoodEaten>,
    mut crashed: MessageWriter<SnakeCrashed>,
) {
    for tick in advanced.read() {
        let wall_cells: Vec<Position> = walls.iter().copied().collect();
        let food_cells: Vec<(Entity, Position)> =
            foods.iter().map(|(entity, cell)| (entity, *cell)).collect();
        // Every segment except the head itself counts as body.
        let body_cells: Vec<Position> = segments
            .iter()
            .filter(|(entity, _)| *entity != tick.head)
            .map(|(_, cell)| *cell)
            .collect();

        match classify(tick.position, &wall_cells, &food_cells, &body_cells, &rules) {
            Some(Contact::Food(food)) => {
                eaten.write(FoodEaten {
                    food,
                    position: tick.position,
                });
            }
            Some(Contact::Wall) | Some(Contact::Body) => {
                crashed.write(SnakeCrashed);
            }
            None => {}
        }
    }
}
