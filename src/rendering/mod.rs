//! Rendering plugin - camera framing and grid-to-world transform sync.

use bevy::prelude::*;

use crate::game::{
    Food, Position, STAGE_SCALE, SnakeSegment, Wall, Z_BACKGROUND, Z_FOOD, Z_SNAKE, Z_WALL,
};

/// Plugin for the camera and per-frame transform updates.
pub struct RenderingPlugin;

impl Plugin for RenderingPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_camera)
            .add_systems(Update, sync_positions.after(crate::snake::respawn_countdown));
    }
}

// Type alias for the grid-to-transform sync query
type PositionSyncQuery<'w, 's> = Query<
    'w,
    's,
    (
        &'static Position,
        &'static mut Transform,
        Option<&'static SnakeSegment>,
        Option<&'static Food>,
        Option<&'static Wall>,
    ),
>;

/// Startup system framing the fixed stage: one camera, zoomed so the whole
/// grid fills the window.
fn setup_camera(mut commands: Commands) {
    commands.spawn((
        Camera2d,
        Projection::Orthographic(OrthographicProjection {
            scale: 1.0 / STAGE_SCALE,
            ..OrthographicProjection::default_2d()
        }),
    ));
}

/// System to keep every gridded entity's translation on its cell.
fn sync_positions(mut entities: PositionSyncQuery) {
    for (cell, mut transform, segment, food, wall) in entities.iter_mut() {
        let z = if segment.is_some() {
            Z_SNAKE
        } else if food.is_some() {
            Z_FOOD
        } else if wall.is_some() {
            Z_WALL
        } else {
            Z_BACKGROUND
        };

        transform.translation = cell.to_world(z);
    }
}
