//! Run lifecycle and intent handling
//!
//! [`GameSession`] is what the UI layer talks to. It owns the RNG, the current
//! [`RunState`] snapshot, a queue of pending [`GameEvent`]s and the progress
//! ledger. Every intent is a synchronous transition; intents that make no
//! sense in the current phase are ignored.
//!
//! ```text
//! Intro --start_run--> Running <--pause/resume--> Paused
//! Running --tick--> GameOver | Won
//! Running | Paused --stop_and_show_game_over--> GameOver
//! any --retry/show_intro_on_enter--> Intro
//! Won --advance_to_next_level--> Intro (level + 1)
//! ```

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::progress::{EggSkin, ProgressLedger};
use crate::sim::field::{seed_coins, seed_platforms};
use crate::sim::{GameEvent, GameResult, RunPhase, RunState, tick};
use crate::wrap_position;

/// Everything the UI layer can ask of a session
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Intent {
    ShowIntroOnEnter,
    StartRun,
    Pause,
    Resume,
    Retry,
    AdvanceToNextLevel,
    /// Horizontal drag/tilt, in world units
    MovePlayer(f32),
    Tick,
    StopAndShowGameOver,
    SetSkin(EggSkin),
}

/// Everything needed to pick a session back up mid-run
///
/// Carries the RNG position, so a restored session draws the same platforms
/// and coins the original would have.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub seed: u64,
    pub rng: Pcg32,
    pub state: RunState,
    /// Whether the ledger already saw this run's result
    pub result_recorded: bool,
}

impl SessionSnapshot {
    /// Wrap a hand-built state with an RNG freshly seeded from `seed`
    ///
    /// A state that is already finished counts as recorded.
    pub fn with_fresh_rng(state: RunState, seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            result_recorded: state.phase.is_terminal(),
            state,
        }
    }
}

/// One play session: a sequence of runs sharing an RNG and a ledger
pub struct GameSession<L: ProgressLedger> {
    seed: u64,
    rng: Pcg32,
    state: RunState,
    events: Vec<GameEvent>,
    ledger: L,
    /// Set once the current run's result reached the ledger
    result_recorded: bool,
}

impl<L: ProgressLedger> GameSession<L> {
    /// Start a session at the ledger's level, showing the intro
    pub fn new(seed: u64, ledger: L) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let platforms = seed_platforms(&mut rng);
        let coins = seed_coins(&mut rng);
        let state = RunState::new(
            ledger.current_level(),
            ledger.selected_skin(),
            platforms,
            coins,
        );
        log::info!("Session seeded with {seed}, level {}", state.level);

        Self {
            seed,
            rng,
            state,
            events: Vec::new(),
            ledger,
            result_recorded: false,
        }
    }

    /// Resume from a captured snapshot, RNG position included
    pub fn restore(snapshot: SessionSnapshot, ledger: L) -> Self {
        Self {
            seed: snapshot.seed,
            rng: snapshot.rng,
            state: snapshot.state,
            events: Vec::new(),
            ledger,
            result_recorded: snapshot.result_recorded,
        }
    }

    /// Capture the session for a later [`GameSession::restore`]
    ///
    /// Queued events are not part of the snapshot.
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            seed: self.seed,
            rng: self.rng.clone(),
            state: self.state.clone(),
            result_recorded: self.result_recorded,
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Current snapshot
    pub fn state(&self) -> &RunState {
        &self.state
    }

    pub fn ledger(&self) -> &L {
        &self.ledger
    }

    pub fn into_ledger(self) -> L {
        self.ledger
    }

    /// Take all events queued since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Result of the current run (`finished` once it is over)
    pub fn current_result(&self) -> GameResult {
        self.state.result()
    }

    /// Dispatch an intent
    pub fn apply(&mut self, intent: Intent) {
        match intent {
            Intent::ShowIntroOnEnter => self.show_intro_on_enter(),
            Intent::StartRun => self.start_run(),
            Intent::Pause => self.pause(),
            Intent::Resume => self.resume(),
            Intent::Retry => self.retry(),
            Intent::AdvanceToNextLevel => self.advance_to_next_level(),
            Intent::MovePlayer(delta) => self.move_player(delta),
            Intent::Tick => self.tick(),
            Intent::StopAndShowGameOver => self.stop_and_show_game_over(),
            Intent::SetSkin(skin) => self.set_skin(skin),
        }
    }

    /// Fresh field and intro screen at the current level
    pub fn show_intro_on_enter(&mut self) {
        self.reset_run(self.state.level);
    }

    /// Leave the intro and start playing on a fresh field
    pub fn start_run(&mut self) {
        if self.state.phase != RunPhase::Intro {
            return;
        }
        self.reset_run(self.state.level);
        self.state.phase = RunPhase::Running;
        log::info!(
            "Run started on level {} (target {} coins)",
            self.state.level,
            self.state.target_coins
        );
    }

    pub fn pause(&mut self) {
        if self.state.phase == RunPhase::Running {
            self.state.phase = RunPhase::Paused;
            log::debug!("Paused at {}m", self.state.height);
        }
    }

    pub fn resume(&mut self) {
        if self.state.phase == RunPhase::Paused {
            self.state.phase = RunPhase::Running;
            log::debug!("Resumed at {}m", self.state.height);
        }
    }

    /// Back to the intro of the same level
    pub fn retry(&mut self) {
        self.show_intro_on_enter();
    }

    /// After a win: bump the level, save it, and show the next intro
    pub fn advance_to_next_level(&mut self) {
        if self.state.phase != RunPhase::Won {
            return;
        }
        let next_level = self.state.level.saturating_add(1);
        self.reset_run(next_level);
        self.ledger.save_level(next_level);
        log::info!(
            "Advanced to level {} (target {} coins)",
            next_level,
            self.state.target_coins
        );
    }

    /// Shift the egg sideways, wrapping around the world edge
    pub fn move_player(&mut self, delta: f32) {
        if !self.state.can_tick() || !delta.is_finite() {
            return;
        }
        let player = &mut self.state.player;
        player.pos.x = wrap_position(player.pos.x + delta);
    }

    /// Advance the simulation one step
    pub fn tick(&mut self) {
        tick(&mut self.state, &mut self.rng, &mut self.events);
        self.record_result_if_needed();
    }

    /// Force the current run to end (e.g. the app went to background)
    pub fn stop_and_show_game_over(&mut self) {
        if !self.state.running() {
            return;
        }
        self.state.phase = RunPhase::GameOver;
        self.events.push(GameEvent::GameOver);
        log::info!("Run stopped at {}m", self.state.height);
        self.record_result_if_needed();
    }

    pub fn set_skin(&mut self, skin: EggSkin) {
        self.state.selected_skin = skin;
    }

    /// Replace the run with a fresh intro state; the RNG carries on
    fn reset_run(&mut self, level: u32) {
        let platforms = seed_platforms(&mut self.rng);
        let coins = seed_coins(&mut self.rng);
        self.state = RunState::new(level, self.state.selected_skin, platforms, coins);
        self.result_recorded = false;
    }

    /// Report a finished run to the ledger, once
    fn record_result_if_needed(&mut self) {
        if self.result_recorded || !self.state.phase.is_terminal() {
            return;
        }
        self.result_recorded = true;

        let state = &self.state;
        self.ledger
            .record_finished_run(state.coins, state.height, state.level);
        if state.has_won() {
            self.ledger.save_level(state.level);
        }
    }
}
