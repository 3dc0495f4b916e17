//! Sound cues and the sinks that play them
//!
//! The simulation only emits events; the orchestrator turns them into cues.
//! Every `play` starts the cue from the beginning. Nothing is queued.

use crate::settings::Settings;
use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundCue {
    /// Ball hits top or bottom wall
    Wall,
    /// Ball hits a paddle
    Hit,
    /// A point was scored and the ball re-served
    Score,
}

impl SoundCue {
    pub fn as_str(&self) -> &'static str {
        match self {
            SoundCue::Wall => "wall",
            SoundCue::Hit => "hit",
            SoundCue::Score => "score",
        }
    }

    /// Cue for a simulation event, if it has one
    pub fn for_event(event: &GameEvent) -> Option<Self> {
        match event {
            GameEvent::WallBounce { .. } => Some(SoundCue::Wall),
            GameEvent::PaddleHit { .. } => Some(SoundCue::Hit),
            GameEvent::BallReset => Some(SoundCue::Score),
            GameEvent::Scored { .. } | GameEvent::MatchOver { .. } => None,
        }
    }

    /// Oscillator recipe for synthesizing this cue
    pub fn tone(&self) -> Tone {
        match self {
            // Higher ping
            SoundCue::Wall => Tone {
                wave: Waveform::Sine,
                freq_start: 400.0,
                freq_end: 400.0,
                gain: 0.3,
                duration: 0.1,
            },
            // Solid thump
            SoundCue::Hit => Tone {
                wave: Waveform::Sine,
                freq_start: 150.0,
                freq_end: 60.0,
                gain: 0.6,
                duration: 0.15,
            },
            // Rising chirp
            SoundCue::Score => Tone {
                wave: Waveform::Triangle,
                freq_start: 440.0,
                freq_end: 880.0,
                gain: 0.5,
                duration: 0.3,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Waveform {
    Sine,
    Triangle,
}

/// A single oscillator with an exponential pitch sweep and decay
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tone {
    pub wave: Waveform,
    /// Hz
    pub freq_start: f32,
    pub freq_end: f32,
    /// Peak gain before volume scaling
    pub gain: f32,
    /// Seconds
    pub duration: f32,
}

/// Fire-and-forget sound playback
pub trait SoundSink {
    /// Play `cue` from the start. Must never fail or block.
    fn play(&mut self, cue: SoundCue);
}

/// Silent sink for headless runs
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSound;

impl SoundSink for NullSound {
    fn play(&mut self, _cue: SoundCue) {}
}

/// Sink that logs each cue with its synthesized tone, honoring volume settings
#[derive(Debug, Clone)]
pub struct LogSound {
    /// Output gain, zero when muted
    volume: f32,
    /// Cue currently "sounding"; replaced by every call
    current: Option<SoundCue>,
    played: u64,
}

impl Default for LogSound {
    fn default() -> Self {
        Self::new()
    }
}

impl LogSound {
    pub fn new() -> Self {
        Self {
            volume: Settings::default().effective_volume(),
            current: None,
            played: 0,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        let mut sound = Self::new();
        sound.apply_settings(settings);
        sound
    }

    pub fn apply_settings(&mut self, settings: &Settings) {
        self.volume = settings.effective_volume();
    }

    pub fn effective_volume(&self) -> f32 {
        self.volume
    }

    pub fn current(&self) -> Option<SoundCue> {
        self.current
    }

    /// Number of cues actually played (muted calls excluded)
    pub fn played(&self) -> u64 {
        self.played
    }
}

impl SoundSink for LogSound {
    fn play(&mut self, cue: SoundCue) {
        let vol = self.effective_volume();
        if vol <= 0.0 {
            return;
        }

        let tone = cue.tone();
        self.current = Some(cue);
        self.played += 1;
        log::debug!(
            "Sound '{}': {:?} {:.0}->{:.0} Hz, gain {:.2}, {:.2}s",
            cue.as_str(),
            tone.wave,
            tone.freq_start,
            tone.freq_end,
            tone.gain * vol,
            tone.duration
        );
    }
}
