//! Simulation half of one frame
//!
//! Physics, then the opponent, then scoring. Nothing runs once the match is over.

use rand::Rng;

use super::collision::step_physics;
use super::opponent::step_opponent;
use super::scoring::check_scoring;
use super::state::{GameEvent, GameState};

/// Advance the game state by one tick, returning what happened
pub fn tick<R: Rng>(state: &mut GameState, rng: &mut R) -> Vec<GameEvent> {
    let mut events = Vec::new();
    if state.is_game_over() {
        return events;
    }

    step_physics(state, rng, &mut events);
    step_opponent(state);
    check_scoring(state, rng, &mut events);

    events
}
