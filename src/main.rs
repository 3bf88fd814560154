//! A single-screen snake game on a fixed walled grid: eat to grow, hit the
//! wall and the board resets after a short pause.

use bevy::{prelude::*, window::WindowResolution};
use bevy_vector_shapes::prelude::*;

mod arena;
mod collision;
mod food;
mod game;
mod rendering;
mod snake;

use arena::ArenaPlugin;
use collision::CollisionPlugin;
use food::FoodPlugin;
use game::{
    BACKGROUND_COLOR, FoodEaten, GameRules, GameState, RespawnTimer, STAGE_HEIGHT, STAGE_SCALE,
    STAGE_WIDTH, SnakeAdvanced, SnakeCrashed, TickTimer,
};
use rendering::RenderingPlugin;
use snake::SnakePlugin;

fn main() {
    App::new()
        .add_plugins((
            DefaultPlugins.set(WindowPlugin {
                primary_window: Some(Window {
                    resolution: WindowResolution::new(
                        (STAGE_WIDTH * STAGE_SCALE) as u32,
                        (STAGE_HEIGHT * STAGE_SCALE) as u32,
                    ),
                    title: "Snake".to_string(),
                    ..Default::default()
                }),
                ..default()
            }),
            Shape2dPlugin::default(),
        ))
        .insert_resource(ClearColor(BACKGROUND_COLOR))
        .init_resource::<GameState>()
        .init_resource::<GameRules>()
        .init_resource::<TickTimer>()
        .init_resource::<RespawnTimer>()
        .add_message::<SnakeAdvanced>()
        .add_message::<FoodEaten>()
        .add_message::<SnakeCrashed>()
        .add_plugins((
            ArenaPlugin,
            SnakePlugin,
            CollisionPlugin,
            FoodPlugin,
            RenderingPlugin,
        ))
        .run();
}
