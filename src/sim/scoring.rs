//! Scoring and match lifecycle
//!
//! Both exits are checked every tick with no mutual exclusion. Under normal
//! speeds only one can fire, but an extreme ball can award both sides a point
//! in the same tick.

use rand::Rng;

use super::state::{Ball, GameEvent, GamePhase, GameState, Side};
use crate::consts::*;

/// Award points for a ball leaving the surface, then reset or end the match
pub fn check_scoring<R: Rng>(state: &mut GameState, rng: &mut R, events: &mut Vec<GameEvent>) {
    if state.ball.pos.x - BALL_RADIUS < 0.0 {
        award_point(state, Side::Opponent, rng, events);
    }
    if state.ball.pos.x + BALL_RADIUS > state.surface.width {
        award_point(state, Side::Player, rng, events);
    }
}

fn award_point<R: Rng>(
    state: &mut GameState,
    side: Side,
    rng: &mut R,
    events: &mut Vec<GameEvent>,
) {
    let score = match side {
        Side::Player => &mut state.player_score,
        Side::Opponent => &mut state.opponent_score,
    };
    *score = score.saturating_add(1);
    let score = *score;

    log::info!(
        "{:?} scores ({} - {})",
        side,
        state.player_score,
        state.opponent_score
    );
    events.push(GameEvent::Scored { side });

    if score >= WINNING_SCORE {
        state.phase = GamePhase::GameOver;
        log::info!("Match over, {:?} wins", side);
        events.push(GameEvent::MatchOver { winner: side });
    } else {
        point_reset(state, rng, events);
    }
}

/// Put the ball back in the middle with a new serve and shake the screen
pub fn point_reset<R: Rng>(state: &mut GameState, rng: &mut R, events: &mut Vec<GameEvent>) {
    state
        .effects
        .trigger_shake(SCORE_SHAKE_FRAMES, SCORE_SHAKE_INTENSITY);
    state.ball = Ball::serve(state.surface.center(), rng);
    events.push(GameEvent::BallReset);
}

/// Start a new match: zero the scores, leave game over, serve again
pub fn full_reset<R: Rng>(state: &mut GameState, rng: &mut R, events: &mut Vec<GameEvent>) {
    state.player_score = 0;
    state.opponent_score = 0;
    state.phase = GamePhase::Playing;
    point_reset(state, rng, events);
}

/// The side that has reached the winning score, player first
pub fn winner(state: &GameState) -> Option<Side> {
    if state.player_score >= WINNING_SCORE {
        Some(Side::Player)
    } else if state.opponent_score >= WINNING_SCORE {
        Some(Side::Opponent)
    } else {
        None
    }
}

/// Headline for the game-over overlay
pub fn overlay_message(state: &GameState) -> &'static str {
    if state.player_score >= WINNING_SCORE {
        "You Win!"
    } else {
        "Game Over"
    }
}
