//! Egg Jump headless driver
//!
//! Plays one run on an in-memory ledger, steering with the autopilot, and
//! prints the result. Usage: `egg-jump [settings.json]`
//!
//! The ledger starts blank unless the settings name a progress snapshot.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Egg Jump (headless) starting...");

    let settings = match load_settings() {
        Ok(settings) => settings,
        Err(e) => {
            log::error!("{e}");
            std::process::exit(1);
        }
    };

    let progress = match load_progress(&settings) {
        Ok(progress) => progress,
        Err(e) => {
            log::error!("{e}");
            std::process::exit(1);
        }
    };

    let summary = native::play(&settings, progress);
    println!("{summary}");
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The host page drives GameSession directly on the web
}

#[cfg(not(target_arch = "wasm32"))]
fn load_settings() -> Result<egg_jump::Settings, String> {
    let Some(path) = std::env::args().nth(1) else {
        return Ok(egg_jump::Settings::default());
    };
    let json = std::fs::read_to_string(&path).map_err(|e| format!("cannot read {path}: {e}"))?;
    egg_jump::Settings::from_json(&json).map_err(|e| format!("{path}: {e}"))
}

/// Starting ledger: the saved snapshot if configured, else a blank one
#[cfg(not(target_arch = "wasm32"))]
fn load_progress(settings: &egg_jump::Settings) -> Result<egg_jump::PlayerProgress, String> {
    use egg_jump::ProgressLedger;

    let Some(path) = settings.progress_path.as_deref() else {
        let mut progress = egg_jump::PlayerProgress::new();
        progress.save_level(settings.start_level);
        return Ok(progress);
    };
    let json = std::fs::read_to_string(path).map_err(|e| format!("cannot read {path}: {e}"))?;
    let progress =
        egg_jump::PlayerProgress::from_json(&json).map_err(|e| format!("{path}: {e}"))?;
    log::info!(
        "Loaded progress from {path}: level {}, {} coins",
        progress.level,
        progress.coins
    );
    Ok(progress)
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use egg_jump::sim::{GameEvent, autopilot};
    use egg_jump::{EggSkin, GameSession, PlayerProgress, Settings};

    /// Equip the configured skin, keeping the current one if that fails
    fn apply_skin(progress: &mut PlayerProgress, name: &str) {
        let Some(skin) = EggSkin::from_str(name) else {
            log::warn!("Unknown skin {name:?}, keeping {:?}", progress.selected_skin);
            return;
        };
        match progress.select_skin(skin) {
            Ok(()) => log::info!("Wearing the {}", skin.title()),
            Err(e) => log::warn!("Cannot wear {}: {e}", skin.title()),
        }
    }

    /// Run a single session to completion and describe the outcome as JSON
    pub fn play(settings: &Settings, mut progress: PlayerProgress) -> String {
        if let Some(name) = settings.skin.as_deref() {
            apply_skin(&mut progress, name);
        }

        let mut session = GameSession::new(settings.session_seed(), progress);
        session.start_run();

        let mut ticks = 0u64;
        let mut jumps = 0u32;
        while session.state().can_tick() && ticks < settings.max_ticks {
            if settings.autopilot {
                let delta = autopilot::steer(session.state());
                session.move_player(delta);
            }
            session.tick();
            ticks += 1;

            for event in session.drain_events() {
                match event {
                    GameEvent::Jumped => jumps += 1,
                    GameEvent::CoinCollected => {
                        log::debug!("Coin! {} so far", session.state().coins)
                    }
                    GameEvent::GameOver => log::info!("Game over after {ticks} ticks"),
                    GameEvent::Win => log::info!("Level cleared after {ticks} ticks"),
                }
            }

            if settings.realtime {
                std::thread::sleep(settings.tick_interval());
            }
        }

        if !session.current_result().finished {
            log::warn!("Tick cap of {} reached, stopping run", settings.max_ticks);
            session.stop_and_show_game_over();
        }

        let result = session.current_result();
        let seed = session.seed();
        log::info!("Seed {seed}: {ticks} ticks, {jumps} jumps");

        let progress = session.into_ledger();
        let summary = serde_json::json!({
            "seed": seed,
            "ticks": ticks,
            "jumps": jumps,
            "result": result,
            "progress": progress,
        });
        serde_json::to_string_pretty(&summary).unwrap_or_else(|e| format!("{{\"error\": \"{e}\"}}"))
    }
}
