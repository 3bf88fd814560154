//! Game resources (singleton state).

use bevy::prelude::*;
use std::collections::VecDeque;

use super::{Direction, INITIAL_LENGTH, RESPAWN_DELAY, TICK_INTERVAL};

/// Which state the update loop is in. The game boots in `Paused` so the
/// first spawn runs through the same respawn path as every later reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    Running,
    #[default]
    Paused,
}

/// Main game state resource: the body sequence, growth target, heading, and
/// run phase, as explicit fields rather than scattered globals.
#[derive(Resource)]
pub struct GameState {
    /// Body segment entities, tail at the front, head at the back.
    pub segments: VecDeque<Entity>,
    /// Desired body length; the tail is trimmed only once this is reached.
    pub target_len: usize,
    /// Heading applied on the most recent tick.
    pub heading: Direction,
    /// Heading requested by input, applied at the start of the next tick.
    pub pending: Option<Direction>,
    pub phase: Phase,
}

impl Default for GameState {
    fn default() -> Self {
        GameState {
            segments: VecDeque::new(),
            target_len: INITIAL_LENGTH,
            heading: Direction::Down,
            pending: None,
            phase: Phase::default(),
        }
    }
}

impl GameState {
    /// The entity at the head of the body, if the snake exists.
    pub fn head(&self) -> Option<Entity> {
        self.segments.back().copied()
    }
}

/// Optional rules. Self-collision is a known relaxation of the ruleset: the
/// check exists but ships disabled, so only walls end a run by default.
#[derive(Resource, Default)]
pub struct GameRules {
    pub self_collision: bool,
}

/// Fixed-step accumulator driving the movement tick.
#[derive(Resource)]
pub struct TickTimer(pub Timer);

impl Default for TickTimer {
    fn default() -> Self {
        TickTimer(Timer::new(TICK_INTERVAL, TimerMode::Repeating))
    }
}

/// Delay between a crash and the full respawn.
#[derive(Resource)]
pub struct RespawnTimer(pub Timer);

impl Default for RespawnTimer {
    fn default() -> Self {
        RespawnTimer(Timer::new(RESPAWN_DELAY, TimerMode::Once))
    }
}
