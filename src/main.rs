//! Platform Speedrun entry point
//!
//! Runs the course headless: a scripted player answers the prompts, starts
//! the run and holds right while jumping. Scenes are built every frame the
//! same way a windowed host would build them before drawing.
//!
//! Usage: platform-speedrun [--tuning PATH] [--level PATH] [--frames N] [--dump-scene]

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Platform Speedrun (headless) starting...");

    if let Err(e) = headless::run() {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // A browser host embeds the library directly
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use platform_speedrun::consts::FPS_CAP;
    use platform_speedrun::platform::{FrameClock, InputMapper, InputSnapshot, Key, MonotonicClock};
    use platform_speedrun::render::{FrameStats, Scene, build_scene};
    use platform_speedrun::sim::{GameEvent, GamePhase, GameState, tick};
    use platform_speedrun::{ConfigError, Level, Tuning};

    struct Options {
        tuning: Option<String>,
        level: Option<String>,
        frames: u64,
        dump_scene: bool,
    }

    fn parse_args() -> Options {
        let mut options = Options {
            tuning: None,
            level: None,
            frames: 600,
            dump_scene: false,
        };
        let mut args = std::env::args().skip(1);
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--tuning" => options.tuning = args.next(),
                "--level" => options.level = args.next(),
                "--frames" => {
                    if let Some(n) = args.next().and_then(|v| v.parse().ok()) {
                        options.frames = n;
                    }
                }
                "--dump-scene" => options.dump_scene = true,
                other => log::warn!("Ignoring unknown argument {}", other),
            }
        }
        options
    }

    fn read(path: &str) -> Result<String, ConfigError> {
        std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_string(),
            source,
        })
    }

    /// Keys the scripted player holds on a given frame
    fn script(frame: u64, limit: u64) -> InputSnapshot {
        match frame {
            _ if frame + 1 >= limit => InputSnapshot::with_keys([Key::Escape]),
            // No death screen, speedrun on, start
            0 => InputSnapshot::with_keys([Key::N]),
            2 => InputSnapshot::with_keys([Key::Y]),
            4 => InputSnapshot::with_keys([Key::Space]),
            0..=5 => InputSnapshot::new(),
            _ if frame % 30 < 10 => InputSnapshot::with_keys([Key::D, Key::Space]),
            _ => InputSnapshot::with_keys([Key::D]),
        }
    }

    pub fn run() -> Result<(), ConfigError> {
        let options = parse_args();

        let tuning = match &options.tuning {
            Some(path) => Tuning::from_json(&read(path)?)?,
            None => Tuning::default(),
        };
        let level = match &options.level {
            Some(path) => Level::from_json(&read(path)?)?,
            None => Level::course(),
        };
        let mut state = GameState::new(&level, tuning)?;
        log::info!(
            "Loaded level: {} surfaces, {} spikes, {} checkpoints",
            state.world.surfaces.len(),
            state.world.hazards.len(),
            state.world.checkpoints.len()
        );

        let time = MonotonicClock::new();
        let mut clock = FrameClock::new(FPS_CAP);
        let mut mapper = InputMapper::new();
        let mut scene = None;

        for frame in 0..options.frames {
            let timing = clock.tick(time.now_ms());
            let intents = mapper.map(&script(frame, options.frames));
            if intents.quit {
                log::info!("Quit requested");
                break;
            }

            tick(&mut state, &intents.tick, timing.dt, timing.now_ms);

            for event in state.drain_events() {
                match event {
                    GameEvent::Died { cause, .. } => log::debug!("Death #{}: {:?}", state.deaths, cause),
                    GameEvent::CheckpointReached { index } => log::info!("Checkpoint {} reached", index),
                    GameEvent::Finished { time_ms, deaths } => {
                        log::info!("Finished in {} ms with {} deaths", time_ms, deaths)
                    }
                    GameEvent::PhaseChanged(_) | GameEvent::Jumped { .. } => {}
                }
            }

            let stats = FrameStats {
                fps: clock.fps(),
                now_ms: timing.now_ms,
            };
            let built = build_scene(&state, &stats);
            if let Scene::Playing { shapes, hud, .. } = &built {
                if frame % 60 == 0 {
                    log::info!(
                        "t={:.1}s pos=({:.0}, {:.0}) shapes={} checkpoints={}/{} deaths={} fps={}",
                        hud.elapsed_secs,
                        state.player.pos.x,
                        state.player.pos.y,
                        shapes.len(),
                        hud.checkpoints_collected,
                        hud.checkpoints_total,
                        hud.deaths,
                        hud.fps
                    );
                }
            }
            scene = Some(built);

            if state.phase == GamePhase::Finished {
                break;
            }

            // Yield once per frame
            std::thread::sleep(clock.remaining(timing.now_ms, time.now_ms()));
        }

        println!(
            "Phase: {:?}  Position: ({:.0}, {:.0})  Checkpoints: {}/{}  Deaths: {}",
            state.phase,
            state.player.pos.x,
            state.player.pos.y,
            state.world.checkpoints.collected_count(),
            state.world.checkpoints.len(),
            state.deaths
        );
        if let Some(time) = state.finish_time() {
            println!(
                "Time: {:02}:{:02}.{:02}",
                time.minutes, time.seconds, time.hundredths
            );
        }
        if let Some(scene) = scene.filter(|_| options.dump_scene) {
            println!("{}", serde_json::to_string_pretty(&scene)?);
        }
        Ok(())
    }
}
