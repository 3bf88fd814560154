//! Food plugin - placement, the eat/grow handler, and the pulse animation.

use bevy::log::debug;
use bevy::prelude::*;
use bevy_vector_shapes::prelude::*;
use rand::prelude::*;

use crate::game::{
    CELL_SIZE, FOOD_COLOR, Food, FoodEaten, FoodPulse, GRID_HEIGHT, GRID_WIDTH, GameState,
    Position, Z_FOOD, in_interior,
};

/// Plugin for food systems.
pub struct FoodPlugin;

impl Plugin for FoodPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (
                handle_food_eaten.after(crate::collision::resolve_contacts),
                food_pulse_animation,
            ),
        );
    }
}

/// Picks a uniformly random cell strictly inside the wall border.
///
/// The snake body is deliberately not avoided; food may appear under it.
pub fn random_food_cell(rng: &mut impl Rng) -> Position {
    Position::new(
        rng.random_range(1..GRID_WIDTH as i32 - 1),
        rng.random_range(1..GRID_HEIGHT as i32 - 1),
    )
}

/// Spawns the food entity at a random interior cell.
pub fn spawn_food(commands: &mut Commands) {
    let cell = random_food_cell(&mut rand::rng());
    debug_assert!(in_interior(cell));

    commands.spawn((
        ShapeBundle::circle(
            &ShapeConfig {
                color: FOOD_COLOR,
                transform: Transform::from_translation(cell.to_world(Z_FOOD)),
                ..ShapeConfig::default_2d()
            },
            CELL_SIZE * 0.4,
        ),
        Food,
        cell,
        FoodPulse {
            timer: Timer::from_seconds(0.8, TimerMode::Repeating),
        },
    ));
}

/// System to consume the eaten food, raise the growth target, and place the
/// replacement.
pub(crate) fn handle_food_eaten(
    mut eaten: MessageReader<FoodEaten>,
    mut game_state: ResMut<GameState>,
    mut commands: Commands,
) {
    for meal in eaten.read() {
        commands.entity(meal.food).despawn();
        game_state.target_len += 1;
        debug!(
            "food eaten at {:?}, target length now {}",
            meal.position, game_state.target_len
        );
        spawn_food(&mut commands);
    }
}

/// System to animate the food with a slow pulse.
fn food_pulse_animation(
    time: Res<Time>,
    mut foods: Query<(&mut Transform, &mut FoodPulse), With<Food>>,
) {
    for (mut transform, mut pulse) in foods.iter_mut() {
        pulse.timer.tick(time.delta());

        let progress = pulse.timer.fraction();
        let scale = 1.0 + (progress * std::f32::consts::PI * 2.0).sin() * 0.15;

        transform.scale = Vec3::splat(scale);
    }
}
