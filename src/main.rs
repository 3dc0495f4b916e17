//! Paddle Duel entry point
//!
//! Native builds run a headless match: an autopilot steers the player paddle,
//! frames are built into a draw list, and sound cues go to the log.
//!
//! Usage: `paddle-duel [--seed N] [--frames N] [--matches N] [--settings PATH] [--dump]`

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    native::run(native::Options::from_args(std::env::args().skip(1)));
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // No browser front end yet
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    use paddle_duel::audio::LogSound;
    use paddle_duel::renderer::DrawList;
    use paddle_duel::sim::{GameState, Surface, winner};
    use paddle_duel::{Game, ManualScheduler, Settings};

    /// Pointer speed limit for the autopilot, in units per frame
    const AUTOPILOT_MAX_STEP: f32 = 7.0;

    pub struct Options {
        pub seed: u64,
        pub max_frames: u64,
        pub matches: u32,
        pub settings: Option<PathBuf>,
        pub dump: bool,
    }

    impl Default for Options {
        fn default() -> Self {
            let seed = SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_millis() as u64)
                .unwrap_or(0);
            Self {
                seed,
                max_frames: 60 * 60 * 10,
                matches: 1,
                settings: None,
                dump: false,
            }
        }
    }

    impl Options {
        pub fn from_args(mut args: impl Iterator<Item = String>) -> Self {
            let mut opts = Self::default();
            while let Some(arg) = args.next() {
                match arg.as_str() {
                    "--seed" => parse_next(&mut args, &arg, &mut opts.seed),
                    "--frames" => parse_next(&mut args, &arg, &mut opts.max_frames),
                    "--matches" => parse_next(&mut args, &arg, &mut opts.matches),
                    "--settings" => opts.settings = args.next().map(PathBuf::from),
                    "--dump" => opts.dump = true,
                    other => log::warn!("Ignoring unknown argument '{}'", other),
                }
            }
            opts
        }
    }

    fn parse_next<T: std::str::FromStr>(
        args: &mut impl Iterator<Item = String>,
        flag: &str,
        out: &mut T,
    ) {
        match args.next().map(|v| v.parse::<T>()) {
            Some(Ok(v)) => *out = v,
            _ => log::warn!("{} expects a number, keeping default", flag),
        }
    }

    /// Where the autopilot wants the pointer: trail the ball with a slow wobble
    fn autopilot_target(state: &GameState, frame: u64) -> f32 {
        let t = frame as f32 * 0.01;
        let wobble = (t.sin() * 0.6 + (t * 0.7).sin() * 0.3) * 40.0;
        state.ball.pos.y + wobble
    }

    pub fn run(opts: Options) {
        log::info!("Paddle Duel (native, headless) starting...");

        let settings = opts
            .settings
            .as_deref()
            .map(Settings::load_from)
            .unwrap_or_default();
        let sound = LogSound::from_settings(&settings);
        let mut game = Game::new(Surface::default(), opts.seed, DrawList::new(), sound)
            .with_settings(settings);

        let mut scheduler = ManualScheduler::new();
        let mut pointer = game.state().surface.height / 2.0;
        let mut matches_left = opts.matches;
        let mut was_over = false;

        game.frame(&mut scheduler);
        while scheduler.take_request() && game.frames() < opts.max_frames {
            let target = autopilot_target(game.state(), game.frames());
            pointer += (target - pointer).clamp(-AUTOPILOT_MAX_STEP, AUTOPILOT_MAX_STEP);
            game.pointer_moved(pointer);

            game.frame(&mut scheduler);

            let over = game.state().is_game_over();
            if over && !was_over {
                let state = game.state();
                log::info!(
                    "Match finished after {} frames: {} - {} ({:?} wins)",
                    game.frames(),
                    state.player_score,
                    state.opponent_score,
                    winner(state)
                );
                matches_left = matches_left.saturating_sub(1);
                if matches_left == 0 {
                    break;
                }
                game.restart();
            }
            was_over = over && game.state().is_game_over();
        }

        let state = game.state();
        log::info!(
            "Stopped at frame {}: {} - {}, {} cues played, last frame {} vertex bytes",
            game.frames(),
            state.player_score,
            state.opponent_score,
            game.sound().played(),
            game.renderer().vertex_bytes().len()
        );

        if opts.dump {
            match serde_json::to_string_pretty(state) {
                Ok(json) => println!("{json}"),
                Err(e) => log::error!("Failed to serialize state: {}", e),
            }
        }
    }
}
