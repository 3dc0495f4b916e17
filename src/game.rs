//! Frame orchestration
//!
//! `Game` owns the state and its collaborators and runs one frame per
//! scheduler callback: simulate (unless the match is over), forward sound cues,
//! burn a shake frame, age particles, draw, and ask for the next frame.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::audio::{SoundCue, SoundSink};
use crate::renderer::{FrameView, Renderer};
use crate::settings::Settings;
use crate::sim::{GameEvent, GameState, Surface, full_reset, tick};

/// Mixed into the seed for the camera RNG so shake never perturbs gameplay
const CAMERA_SEED_SALT: u64 = 0x5eed_cafe_f00d_d00d;

/// Whatever drives frames: a display-synced callback, a timer, or a test
pub trait FrameScheduler {
    /// Ask for one more `Game::frame` call
    fn request_frame(&mut self);
}

/// Scheduler that just remembers whether a frame was asked for
#[derive(Debug, Default, Clone)]
pub struct ManualScheduler {
    pending: bool,
    requested: u64,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume the outstanding request, if any
    pub fn take_request(&mut self) -> bool {
        std::mem::take(&mut self.pending)
    }

    /// Total requests seen
    pub fn requested(&self) -> u64 {
        self.requested
    }
}

impl FrameScheduler for ManualScheduler {
    fn request_frame(&mut self) {
        self.pending = true;
        self.requested += 1;
    }
}

/// Game instance holding all state
pub struct Game<R: Renderer, S: SoundSink> {
    state: GameState,
    seed: u64,
    rng: Pcg32,
    camera_rng: Pcg32,
    renderer: R,
    sound: S,
    settings: Settings,
    frames: u64,
}

impl<R: Renderer, S: SoundSink> Game<R, S> {
    pub fn new(surface: Surface, seed: u64, renderer: R, sound: S) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let state = GameState::new(surface, &mut rng);
        log::info!(
            "New game {}x{} with seed {}",
            surface.width,
            surface.height,
            seed
        );
        Self {
            state,
            seed,
            rng,
            camera_rng: Pcg32::seed_from_u64(seed ^ CAMERA_SEED_SALT),
            renderer,
            sound,
            settings: Settings::default(),
            frames: 0,
        }
    }

    pub fn with_settings(mut self, settings: Settings) -> Self {
        self.settings = settings;
        self
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Direct state access for tests and tooling
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn sound(&self) -> &S {
        &self.sound
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Frames run so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Throw away the current match and start over from a fresh state
    pub fn reinitialize(&mut self) {
        self.rng = Pcg32::seed_from_u64(self.seed);
        self.camera_rng = Pcg32::seed_from_u64(self.seed ^ CAMERA_SEED_SALT);
        self.state = GameState::new(self.state.surface, &mut self.rng);
        self.frames = 0;
    }

    /// Pointer moved to `y` in surface coordinates
    pub fn pointer_moved(&mut self, y: f32) {
        self.state.apply_pointer(y);
    }

    /// Restart signal (click). Only acts once the match is over.
    pub fn restart(&mut self) -> bool {
        if !self.state.is_game_over() {
            return false;
        }

        let mut events = Vec::new();
        full_reset(&mut self.state, &mut self.rng, &mut events);
        log::info!("Match restarted");
        self.dispatch(&events);
        true
    }

    /// Run one frame and schedule the next
    pub fn frame(&mut self, scheduler: &mut impl FrameScheduler) -> Vec<GameEvent> {
        let events = tick(&mut self.state, &mut self.rng);
        self.dispatch(&events);
        self.render();
        self.frames += 1;

        scheduler.request_frame();
        events
    }

    fn dispatch(&mut self, events: &[GameEvent]) {
        for event in events {
            if let Some(cue) = SoundCue::for_event(event) {
                self.sound.play(cue);
            }
        }
    }

    /// Shake bookkeeping and particle aging live here so both run once per drawn frame
    fn render(&mut self) {
        let camera_offset = match self.state.effects.consume_shake_frame() {
            Some(intensity) => {
                let offset = Vec2::new(
                    (self.camera_rng.random::<f32>() - 0.5) * intensity,
                    (self.camera_rng.random::<f32>() - 0.5) * intensity,
                );
                if self.settings.effective_screen_shake() {
                    offset
                } else {
                    Vec2::ZERO
                }
            }
            None => Vec2::ZERO,
        };

        self.state.effects.update_particles();

        let view = FrameView {
            state: &self.state,
            camera_offset,
            draw_particles: self.settings.particles,
        };
        if let Err(e) = self.renderer.render(&view) {
            log::warn!("Render error: {}", e);
        }
    }
}
