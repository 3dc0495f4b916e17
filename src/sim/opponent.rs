//! Scripted opponent: chase the ball's height at a fixed step, with a dead zone
//!
//! No prediction and no randomness, so it is beatable on purpose.

use super::state::GameState;
use crate::consts::*;

/// Move the opponent paddle one step toward the ball
pub fn step_opponent(state: &mut GameState) {
    let center = state.opponent_y + PADDLE_HEIGHT / 2.0;
    let target = state.ball.pos.y;

    if center < target - AI_DEAD_ZONE {
        state.opponent_y += AI_STEP;
    } else if center > target + AI_DEAD_ZONE {
        state.opponent_y -= AI_STEP;
    }
    state.opponent_y = state.surface.clamp_paddle_y(state.opponent_y);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::Surface;
    use glam::Vec2;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn state_with(opponent_y: f32, ball_y: f32) -> GameState {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut state = GameState::new(Surface::default(), &mut rng);
        state.opponent_y = opponent_y;
        state.ball.pos = Vec2::new(400.0, ball_y);
        state
    }

    #[test]
    fn test_moves_down_toward_ball() {
        let mut state = state_with(100.0, 300.0);
        step_opponent(&mut state);
        assert_eq!(state.opponent_y, 106.0);
    }

    #[test]
    fn test_moves_up_toward_ball() {
        let mut state = state_with(300.0, 100.0);
        step_opponent(&mut state);
        assert_eq!(state.opponent_y, 294.0);
    }

    #[test]
    fn test_holds_inside_dead_zone() {
        // Paddle center at 250
        for ball_y in [250.0, 235.0, 265.0, 230.0, 270.0] {
            let mut state = state_with(200.0, ball_y);
            step_opponent(&mut state);
            assert_eq!(state.opponent_y, 200.0, "moved for ball_y={ball_y}");
        }
    }

    #[test]
    fn test_dead_zone_boundary_is_inclusive() {
        let mut state = state_with(200.0, 230.0);
        step_opponent(&mut state);
        assert_eq!(state.opponent_y, 200.0);

        let mut state = state_with(200.0, 270.001);
        step_opponent(&mut state);
        assert_eq!(state.opponent_y, 206.0);
    }

    #[test]
    fn test_clamped_at_top() {
        let mut state = state_with(2.0, 0.0);
        step_opponent(&mut state);
        assert_eq!(state.opponent_y, 0.0);
    }

    #[test]
    fn test_clamped_at_bottom() {
        let mut state = state_with(398.0, 500.0);
        step_opponent(&mut state);
        assert_eq!(state.opponent_y, 400.0);
    }

    #[test]
    fn test_out_of_range_paddle_is_pulled_back() {
        let mut state = state_with(-50.0, 250.0);
        step_opponent(&mut state);
        assert_eq!(state.opponent_y, 0.0);
    }
}
