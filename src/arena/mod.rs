//! Arena plugin - spawns the static playfield: floor and wall cells.

use bevy::prelude::*;

use crate::game::{
    ARENA_COLOR, CELL_SIZE, STAGE_HEIGHT, STAGE_WIDTH, WALL_COLOR, Wall, Z_BACKGROUND, Z_WALL,
    wall_cells,
};

/// Plugin for the static level geometry.
pub struct ArenaPlugin;

impl Plugin for ArenaPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_arena);
    }
}

/// Startup system building the floor and the wall ring from the level layout.
fn setup_arena(mut commands: Commands) {
    commands.spawn((
        Sprite {
            color: ARENA_COLOR,
            custom_size: Some(Vec2::new(STAGE_WIDTH, STAGE_HEIGHT)),
            ..default()
        },
        Transform::from_xyz(0.0, 0.0, Z_BACKGROUND),
    ));

    for cell in wall_cells() {
        commands.spawn((
            Sprite {
                color: WALL_COLOR,
                custom_size: Some(Vec2::splat(CELL_SIZE)),
                ..default()
            },
            Transform::from_translation(cell.to_world(Z_WALL)),
            Wall,
            cell,
        ));
    }
}
