//! Snake plugin - direction input, the fixed-step movement tick, and the
//! crash/respawn cycle.

use bevy::log::info;
use bevy::prelude::*;

use crate::food::spawn_food;
use crate::game::{
    CELL_SIZE, Direction, Food, GameState, INITIAL_LENGTH, Phase, Position, RespawnTimer,
    SNAKE_BODY_COLOR, SNAKE_HEAD_COLOR, SPAWN_COLUMN, SnakeAdvanced, SnakeCrashed, SnakeSegment,
    TickTimer, Z_SNAKE,
};

/// Plugin for snake movement and lifecycle systems.
pub struct SnakePlugin;

impl Plugin for SnakePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (
                (snake_direction_input, advance_snake).chain(),
                (schedule_respawn, respawn_countdown)
                    .chain()
                    .after(crate::collision::resolve_contacts),
            ),
        );
    }
}

/// Spawns one body segment at the given cell.
pub fn spawn_segment(commands: &mut Commands, position: Position, color: Color) -> Entity {
    commands
        .spawn((
            Sprite {
                color,
                custom_size: Some(Vec2::splat(CELL_SIZE)),
                ..default()
            },
            Transform::from_translation(position.to_world(Z_SNAKE)),
            SnakeSegment,
            position,
        ))
        .id()
}

/// System to turn directional key presses into the pending heading.
///
/// A press that would reverse the current heading is ignored; anything else
/// overwrites the pending slot, so the last press before a tick wins.
pub(crate) fn snake_direction_input(
    keyboard_input: Res<ButtonInput<KeyCode>>,
    mut game_state: ResMut<GameState>,
) {
    if let Some(direction) = Direction::from_keys(&keyboard_input)
        && direction != game_state.heading.opposite()
    {
        game_state.pending = Some(direction);
    }
}

/// System to execute one movement tick once the fixed step has accumulated.
///
/// Applies the pending heading, appends a new head cell, and removes exactly
/// one tail cell once the body has reached its target length.
pub(crate) fn advance_snake(
    time: Res<Time>,
    mut tick: ResMut<TickTimer>,
    mut game_state: ResMut<GameState>,
    positions: Query<&Position>,
    mut sprites: Query<&mut Sprite>,
    mut advanced: MessageWriter<SnakeAdvanced>,
    mut commands: Commands,
) {
    if game_state.phase != Phase::Running {
        return;
    }

    tick.0.tick(time.delta());
    if !tick.0.just_finished() {
        return;
    }

    if let Some(direction) = game_state.pending.take() {
        game_state.heading = direction;
    }

    let Some(head) = game_state.head() else {
        return;
    };
    let Ok(&head_position) = positions.get(head) else {
        return;
    };
    let next = head_position.step(game_state.heading);

    // The old head becomes a plain body cell.
    if let Ok(mut sprite) = sprites.get_mut(head) {
        sprite.color = SNAKE_BODY_COLOR;
    }

    let new_head = spawn_segment(&mut commands, next, SNAKE_HEAD_COLOR);
    game_state.segments.push_back(new_head);

    if game_state.segments.len() > game_state.target_len
        && let Some(tail) = game_state.segments.pop_front()
    {
        commands.entity(tail).despawn();
    }

    advanced.write(SnakeAdvanced {
        head: new_head,
        position: next,
    });
}

/// System to pause the loop and arm the respawn delay after a crash.
pub(crate) fn schedule_respawn(
    mut crashed: MessageReader<SnakeCrashed>,
    mut game_state: ResMut<GameState>,
    mut respawn: ResMut<RespawnTimer>,
) {
    if crashed.read().next().is_some() && game_state.phase == Phase::Running {
        game_state.phase = Phase::Paused;
        respawn.0.reset();
        info!("snake crashed, respawning");
    }
}

/// System to rebuild the snake and food once the respawn delay has elapsed.
///
/// The whole board is recreated wholesale: every segment and the food are
/// despawned, the body comes back as a vertical line of [`INITIAL_LENGTH`]
/// cells in the spawn column with the head at the bottom, heading down.
pub(crate) fn respawn_countdown(
    time: Res<Time>,
    mut game_state: ResMut<GameState>,
    mut respawn: ResMut<RespawnTimer>,
    mut tick: ResMut<TickTimer>,
    food: Query<Entity, With<Food>>,
    mut commands: Commands,
) {
    if game_state.phase != Phase::Paused {
        return;
    }

    respawn.0.tick(time.delta());
    if !respawn.0.just_finished() {
        return;
    }

    for &segment in &game_state.segments {
        commands.entity(segment).despawn();
    }
    game_state.segments.clear();
    for entity in food.iter() {
        commands.entity(entity).despawn();
    }

    game_state.target_len = INITIAL_LENGTH;
    game_state.heading = Direction::Down;
    game_state.pending = None;

    for row in 1..=INITIAL_LENGTH as i32 {
        let segment = spawn_segment(
            &mut commands,
            Position::new(SPAWN_COLUMN, row),
            SNAKE_BODY_COLOR,
        );
        game_state.segments.push_back(segment);
    }
    spawn_food(&mut commands);

    tick.0.reset();
    game_state.phase = Phase::Running;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{
        FoodEaten, GRID_HEIGHT, GameRules, RESPAWN_DELAY, TICK_INTERVAL, Wall, in_interior,
        wall_cells,
    };
    use std::time::Duration;

    /// Headless app running the full tick pipeline against the real walls.
    fn test_app() -> App {
        let mut app = App::new();
        app.insert_resource(Time::<()>::default());
        app.insert_resource(ButtonInput::<KeyCode>::default());
        app.init_resource::<GameState>();
        app.init_resource::<GameRules>();
        app.init_resource::<TickTimer>();
        app.init_resource::<RespawnTimer>();
        app.add_message::<SnakeAdvanced>();
        app.add_message::<FoodEaten>();
        app.add_message::<SnakeCrashed>();
        app.add_systems(
            Update,
            (
                snake_direction_input,
                advance_snake,
                crate::collision::resolve_contacts,
                crate::food::handle_food_eaten,
                schedule_respawn,
                respawn_countdown,
            )
                .chain(),
        );
        for cell in wall_cells() {
            app.world_mut().spawn((Wall, cell));
        }
        app
    }

    fn advance(app: &mut App, duration: Duration) {
        app.world_mut().resource_mut::<Time>().advance_by(duration);
        app.update();
    }

    /// Boots the app and runs out the initial respawn delay.
    fn spawned_app() -> App {
        let mut app = test_app();
        advance(&mut app, RESPAWN_DELAY);
        app
    }

    fn body_cells(app: &mut App) -> Vec<Position> {
        let segments: Vec<Entity> = app
            .world()
            .resource::<GameState>()
            .segments
            .iter()
            .copied()
            .collect();
        segments
            .iter()
            .map(|&entity| *app.world().get::<Position>(entity).unwrap())
            .collect()
    }

    fn food_entity(app: &mut App) -> Entity {
        let mut foods = app.world_mut().query_filtered::<Entity, With<Food>>();
        foods.single(app.world()).unwrap()
    }

    /// Moves the food out of the snake's path so ticks are deterministic.
    fn park_food(app: &mut App, cell: Position) {
        let food = food_entity(app);
        *app.world_mut().get_mut::<Position>(food).unwrap() = cell;
    }

    fn press(app: &mut App, key: KeyCode) {
        app.world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .press(key);
    }

    fn release_keys(app: &mut App) {
        app.world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .reset_all();
    }

    #[test]
    fn initial_respawn_builds_vertical_snake() {
        let mut app = test_app();

        // Nothing exists until the spawn delay runs out.
        advance(&mut app, Duration::from_millis(400));
        assert!(app.world().resource::<GameState>().segments.is_empty());
        assert_eq!(app.world().resource::<GameState>().phase, Phase::Paused);

        advance(&mut app, Duration::from_millis(100));
        assert_eq!(
            body_cells(&mut app),
            vec![
                Position::new(1, 1),
                Position::new(1, 2),
                Position::new(1, 3),
            ]
        );
        let game_state = app.world().resource::<GameState>();
        assert_eq!(game_state.heading, Direction::Down);
        assert_eq!(game_state.target_len, INITIAL_LENGTH);
        assert_eq!(game_state.phase, Phase::Running);

        let food = food_entity(&mut app);
        let food_cell = *app.world().get::<Position>(food).unwrap();
        assert!(in_interior(food_cell));
    }

    #[test]
    fn tick_appends_head_and_trims_tail() {
        let mut app = spawned_app();
        park_food(&mut app, Position::new(10, 10));

        advance(&mut app, TICK_INTERVAL);

        assert_eq!(
            body_cells(&mut app),
            vec![
                Position::new(1, 2),
                Position::new(1, 3),
                Position::new(1, 4),
            ]
        );
    }

    #[test]
    fn no_tick_before_the_full_interval() {
        let mut app = spawned_app();
        park_food(&mut app, Position::new(10, 10));
        let before = body_cells(&mut app);

        advance(&mut app, Duration::from_millis(100));
        assert_eq!(body_cells(&mut app), before);

        // The accumulator carries the partial step over.
        advance(&mut app, Duration::from_millis(100));
        assert_ne!(body_cells(&mut app), before);
    }

    #[test]
    fn reversing_input_is_ignored() {
        let mut app = spawned_app();
        park_food(&mut app, Position::new(10, 10));

        // Heading is Down, so Up must not register.
        press(&mut app, KeyCode::ArrowUp);
        advance(&mut app, TICK_INTERVAL);

        let game_state = app.world().resource::<GameState>();
        assert_eq!(game_state.heading, Direction::Down);
        assert_eq!(
            *body_cells(&mut app).last().unwrap(),
            Position::new(1, 4)
        );
    }

    #[test]
    fn turn_applies_on_the_next_tick() {
        let mut app = spawned_app();
        park_food(&mut app, Position::new(10, 10));

        press(&mut app, KeyCode::ArrowRight);
        advance(&mut app, TICK_INTERVAL);

        let game_state = app.world().resource::<GameState>();
        assert_eq!(game_state.heading, Direction::Right);
        assert_eq!(
            *body_cells(&mut app).last().unwrap(),
            Position::new(2, 3)
        );
    }

    #[test]
    fn last_press_before_the_tick_wins() {
        let mut app = spawned_app();
        park_food(&mut app, Position::new(10, 10));

        press(&mut app, KeyCode::ArrowLeft);
        advance(&mut app, Duration::from_millis(50));
        release_keys(&mut app);
        press(&mut app, KeyCode::ArrowRight);
        advance(&mut app, Duration::from_millis(150));

        let game_state = app.world().resource::<GameState>();
        assert_eq!(game_state.heading, Direction::Right);
        assert_eq!(
            *body_cells(&mut app).last().unwrap(),
            Position::new(2, 3)
        );
    }

    #[test]
    fn eating_raises_target_length_and_respawns_food() {
        let mut app = spawned_app();
        park_food(&mut app, Position::new(1, 4));
        let old_food = food_entity(&mut app);

        advance(&mut app, TICK_INTERVAL);

        let game_state = app.world().resource::<GameState>();
        assert_eq!(game_state.target_len, INITIAL_LENGTH + 1);
        assert_eq!(game_state.segments.len(), INITIAL_LENGTH);

        let new_food = food_entity(&mut app);
        assert_ne!(new_food, old_food);
        let food_cell = *app.world().get::<Position>(new_food).unwrap();
        assert!(in_interior(food_cell));

        // The body catches up to the new target on the next tick.
        park_food(&mut app, Position::new(10, 10));
        advance(&mut app, TICK_INTERVAL);
        let game_state = app.world().resource::<GameState>();
        assert_eq!(game_state.segments.len(), game_state.target_len);
        assert_eq!(
            body_cells(&mut app),
            vec![
                Position::new(1, 2),
                Position::new(1, 3),
                Position::new(1, 4),
                Position::new(1, 5),
            ]
        );
    }

    #[test]
    fn body_never_exceeds_target_length() {
        let mut app = spawned_app();
        park_food(&mut app, Position::new(1, 4));

        for _ in 0..6 {
            advance(&mut app, TICK_INTERVAL);
            park_food(&mut app, Position::new(10, 10));
            let game_state = app.world().resource::<GameState>();
            assert!(game_state.segments.len() <= game_state.target_len);
        }
    }

    #[test]
    fn wall_crash_pauses_then_resets_the_board() {
        let mut app = spawned_app();
        park_food(&mut app, Position::new(10, 10));

        // Head starts at (1, 3) heading down; the bottom wall row sits at
        // y = GRID_HEIGHT - 1, reached on the eleventh tick.
        let ticks_to_wall = GRID_HEIGHT as i32 - 1 - 3;
        for _ in 0..ticks_to_wall {
            advance(&mut app, TICK_INTERVAL);
        }
        assert_eq!(app.world().resource::<GameState>().phase, Phase::Paused);

        // Frozen during the pause: ticks elapse but nothing moves.
        let frozen = body_cells(&mut app);
        advance(&mut app, TICK_INTERVAL);
        assert_eq!(body_cells(&mut app), frozen);
        assert_eq!(app.world().resource::<GameState>().phase, Phase::Paused);

        // 400ms of the delay elapsed since the crash; run out the remainder.
        advance(&mut app, Duration::from_millis(200));
        advance(&mut app, Duration::from_millis(100));

        let game_state = app.world().resource::<GameState>();
        assert_eq!(game_state.phase, Phase::Running);
        assert_eq!(game_state.heading, Direction::Down);
        assert_eq!(game_state.target_len, INITIAL_LENGTH);
        assert_eq!(
            body_cells(&mut app),
            vec![
                Position::new(1, 1),
                Position::new(1, 2),
                Position::new(1, 3),
            ]
        );

        // No stale segments or food survive the reset.
        let mut segments = app
            .world_mut()
            .query_filtered::<Entity, With<SnakeSegment>>();
        assert_eq!(segments.iter(app.world()).count(), INITIAL_LENGTH);
        let mut foods = app.world_mut().query_filtered::<Entity, With<Food>>();
        assert_eq!(foods.iter(app.world()).count(), 1);
    }

    #[test]
    fn stale_pending_heading_is_dropped_on_respawn() {
        let mut app = spawned_app();
        park_food(&mut app, Position::new(10, 10));

        // Crash into the left wall, queueing a turn that never lands.
        press(&mut app, KeyCode::ArrowLeft);
        advance(&mut app, TICK_INTERVAL);
        release_keys(&mut app);
        assert_eq!(app.world().resource::<GameState>().phase, Phase::Paused);
        press(&mut app, KeyCode::ArrowUp);

        advance(&mut app, RESPAWN_DELAY);
        release_keys(&mut app);
        park_food(&mut app, Position::new(10, 10));
        advance(&mut app, TICK_INTERVAL);

        let game_state = app.world().resource::<GameState>();
        assert_eq!(game_state.heading, Direction::Down);
        assert_eq!(
            *body_cells(&mut app).last().unwrap(),
            Position::new(1, 4)
        );
    }
}
