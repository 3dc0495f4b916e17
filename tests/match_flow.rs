//! End-to-end match flow through the frame orchestrator

use glam::Vec2;
use paddle_duel::audio::{SoundCue, SoundSink};
use paddle_duel::consts::*;
use paddle_duel::renderer::DrawList;
use paddle_duel::sim::{GameEvent, GamePhase, Side, Surface};
use paddle_duel::{Game, ManualScheduler};

#[derive(Default)]
struct Recorder {
    cues: Vec<SoundCue>,
}

impl SoundSink for Recorder {
    fn play(&mut self, cue: SoundCue) {
        self.cues.push(cue);
    }
}

fn game(seed: u64) -> Game<DrawList, Recorder> {
    Game::new(Surface::default(), seed, DrawList::new(), Recorder::default())
}

#[test]
fn test_ball_past_right_edge_scores_for_player() {
    let mut game = game(11);
    let mut scheduler = ManualScheduler::new();
    {
        let state = game.state_mut();
        state.player_y = 0.0;
        state.opponent_y = 0.0;
        state.ball.pos = Vec2::new(790.0, 250.0);
        state.ball.vel = Vec2::new(10.0, 0.0);
    }

    let events = game.frame(&mut scheduler);

    assert!(events.contains(&GameEvent::Scored { side: Side::Player }));
    let state = game.state();
    assert_eq!(state.player_score, 1);
    assert_eq!(state.opponent_score, 0);
    assert_eq!(state.ball.pos, Vec2::new(400.0, 250.0));
    assert_eq!(state.ball.vel.x.abs(), BALL_BASE_SPEED);
    // One shake frame already burnt by the render
    assert_eq!(state.effects.shake_frames_remaining, SCORE_SHAKE_FRAMES - 1);
    assert_eq!(game.sound().cues, vec![SoundCue::Score]);
    assert!(scheduler.take_request());
}

#[test]
fn test_player_paddle_returns_ball() {
    let mut game = game(12);
    let mut scheduler = ManualScheduler::new();
    {
        let state = game.state_mut();
        state.player_y = 200.0;
        state.ball.pos = Vec2::new(34.0, 225.0);
        state.ball.vel = Vec2::new(-5.0, 0.0);
    }

    let events = game.frame(&mut scheduler);

    assert!(matches!(
        events.as_slice(),
        [GameEvent::PaddleHit {
            side: Side::Player,
            ..
        }]
    ));
    let state = game.state();
    assert_eq!(state.ball.vel.x, 5.0);
    assert!(state.ball.vel.y < 0.0);
    assert_eq!(state.effects.particles.len(), PARTICLE_BURST);
    assert!(
        state
            .effects
            .particles
            .iter()
            .all(|p| p.color == PLAYER_COLOR)
    );
    assert_eq!(game.sound().cues, vec![SoundCue::Hit]);
}

#[test]
fn test_win_freezes_then_restart() {
    let mut game = game(13);
    let mut scheduler = ManualScheduler::new();
    {
        let state = game.state_mut();
        state.player_score = WINNING_SCORE - 1;
        state.opponent_y = 0.0;
        state.ball.pos = Vec2::new(790.0, 250.0);
        state.ball.vel = Vec2::new(10.0, 0.0);
    }

    let events = game.frame(&mut scheduler);
    assert_eq!(
        events,
        vec![
            GameEvent::Scored { side: Side::Player },
            GameEvent::MatchOver {
                winner: Side::Player
            },
        ]
    );
    assert_eq!(game.state().phase, GamePhase::GameOver);
    assert!(game.sound().cues.is_empty());

    let texts: Vec<&str> = game
        .renderer()
        .texts
        .iter()
        .map(|t| t.text.as_str())
        .collect();
    assert!(texts.contains(&"You Win!"));
    assert!(texts.contains(&"Click to Restart"));

    // Frozen: further frames change nothing but keep drawing
    let frozen_ball = game.state().ball;
    assert!(game.frame(&mut scheduler).is_empty());
    assert!(game.frame(&mut scheduler).is_empty());
    assert_eq!(game.state().ball, frozen_ball);
    assert_eq!(game.state().player_score, WINNING_SCORE);
    assert_eq!(game.renderer().frames(), 3);

    assert!(game.restart());
    let state = game.state();
    assert_eq!(state.phase, GamePhase::Playing);
    assert_eq!(state.player_score, 0);
    assert_eq!(state.opponent_score, 0);
    assert_eq!(state.ball.pos, state.surface.center());
    assert_eq!(game.sound().cues, vec![SoundCue::Score]);
    assert!(!game.restart());
}

#[test]
fn test_same_seed_same_match() {
    let mut a = game(99);
    let mut b = game(99);
    let mut sa = ManualScheduler::new();
    let mut sb = ManualScheduler::new();

    for i in 0..2_000 {
        let pointer = 250.0 + (i as f32 * 0.05).sin() * 200.0;
        a.pointer_moved(pointer);
        b.pointer_moved(pointer);
        assert_eq!(a.frame(&mut sa), b.frame(&mut sb));
    }
    assert_eq!(a.state().ball, b.state().ball);
    assert_eq!(a.state().player_score, b.state().player_score);
    assert_eq!(a.state().opponent_score, b.state().opponent_score);
    assert_eq!(a.sound().cues, b.sound().cues);
}
