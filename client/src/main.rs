//! Headless runner: plays a match against the computer on synthetic time
//! and reports the score.

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::path::PathBuf;

    use anyhow::{bail, Context, Result};
    use clap::Parser;
    use client::{
        cues_for, load_or_default, AudioSink, GameLoop, JsonFileStore, LogAudio, ManualClock,
        ManualScheduler, Settings, SettingsStore,
    };
    use game_core::{Arena, Config, Difficulty, GameEvent};

    #[derive(Debug, Parser)]
    #[command(name = "pong-headless", about = "Simulate a Pong match without a display")]
    struct Args {
        /// Seconds of game time to simulate
        #[arg(long, default_value_t = 60.0)]
        seconds: f64,

        /// Simulated display refresh rate
        #[arg(long, default_value_t = 60)]
        fps: u32,

        #[arg(long, default_value_t = 12345)]
        seed: u64,

        /// easy, medium or hard; overrides the settings file
        #[arg(long)]
        difficulty: Option<String>,

        /// JSON tuning overrides
        #[arg(long)]
        config: Option<PathBuf>,

        /// JSON settings file, created if missing
        #[arg(long)]
        settings: Option<PathBuf>,

        #[arg(long, default_value_t = 840.0)]
        viewport_width: f32,

        /// Let the left paddle follow the ball instead of idling
        #[arg(long)]
        autopilot: bool,
    }

    pub fn run() -> Result<()> {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
        let args = Args::parse();

        if args.fps == 0 {
            bail!("--fps must be at least 1");
        }

        let config = match &args.config {
            Some(path) => {
                let json = std::fs::read_to_string(path)
                    .with_context(|| format!("reading {}", path.display()))?;
                Config::from_json(&json).with_context(|| format!("parsing {}", path.display()))?
            }
            None => Config::new(),
        };

        let mut store = args.settings.as_ref().map(JsonFileStore::new);
        let mut settings = match &store {
            Some(store) => load_or_default(store),
            None => Settings::default(),
        };
        if let Some(name) = &args.difficulty {
            settings.difficulty = match Difficulty::from_str(name) {
                Some(d) => d,
                None => bail!("unknown difficulty '{}'", name),
            };
        }

        let clock = ManualClock::new(0.0);
        let mut game = GameLoop::new(
            args.seed,
            Arena::from_viewport(args.viewport_width),
            config,
            settings,
            clock.clone(),
            ManualScheduler::new(),
        );
        let mut audio = LogAudio::default();

        log::info!(
            "Simulating {}s at {} fps on {} ({}x{})",
            args.seconds,
            args.fps,
            game.settings().difficulty,
            game.state().arena.width,
            game.state().arena.height
        );

        let frame_dt = 1.0 / f64::from(args.fps);
        let frames = (args.seconds * f64::from(args.fps)).round() as u64;
        let mut skipped = 0u64;
        game.start();

        for _ in 0..frames {
            clock.advance(frame_dt);
            if args.autopilot {
                steer(&mut game);
            }

            let report = game.frame();
            if !report.stepped {
                skipped += 1;
            }
            for cue in cues_for(&report.events, game.settings().sound_enabled) {
                audio.play(cue);
            }
            for event in report.events.iter() {
                if let GameEvent::Score { winner } = event {
                    let score = game.state().score;
                    log::info!(
                        "{:?} scores: {} - {}",
                        winner,
                        score.player,
                        score.opponent
                    );
                }
            }
        }

        if let Some(store) = store.as_mut() {
            store.save(game.settings())?;
        }

        let score = game.state().score;
        log::info!("{} frames, {} skipped, {} cues", frames, skipped, audio.played);
        println!("Final score: player {} - opponent {}", score.player, score.opponent);
        Ok(())
    }

    /// Press up/down to keep the left paddle centred on the ball
    fn steer(game: &mut GameLoop<ManualClock, ManualScheduler>) {
        let center = game.state().player.center_y(game.config());
        let ball_y = game.state().ball.pos.y;
        let slack = game.config().paddle_height / 4.0;

        if ball_y < center - slack {
            game.key_up("ArrowDown");
            game.key_down("ArrowUp");
        } else if ball_y > center + slack {
            game.key_up("ArrowUp");
            game.key_down("ArrowDown");
        } else {
            game.key_up("ArrowUp");
            game.key_up("ArrowDown");
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    native::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {}
