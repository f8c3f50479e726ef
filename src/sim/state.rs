//! Game state and core simulation types
//!
//! One `GameState` is the whole session: phase, player, world and timers.
//! It is owned by the host loop and passed into `tick`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Contacts;
use super::player::Player;
use super::world::World;
use crate::error::ConfigError;
use crate::level::Level;
use crate::tuning::Tuning;

/// Current phase of the session. Phases only move forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Asking whether to show a death screen
    DeathScreenPrompt,
    /// Asking whether checkpoints may be skipped
    SpeedrunPrompt,
    /// Rules screen, waiting for start
    Rules,
    /// Active gameplay
    Playing,
    /// Run complete
    Finished,
}

/// Why the player was sent back to the reset position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeathCause {
    ManualReset,
    Void,
    HazardPlatform,
    OutOfBounds,
    Spike,
}

/// Things the host may want to react to (sound, death screen, HUD flashes)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    PhaseChanged(GamePhase),
    Jumped { count: u32 },
    Died { cause: DeathCause, at: Vec2 },
    CheckpointReached { index: usize },
    Finished { time_ms: u64, deaths: u32 },
}

/// Finish time split for display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinishTime {
    pub minutes: u64,
    pub seconds: u64,
    pub hundredths: u64,
}

impl FinishTime {
    pub fn from_ms(ms: u64) -> Self {
        Self {
            minutes: ms / 60_000,
            seconds: (ms % 60_000) / 1000,
            hundredths: (ms % 1000) / 10,
        }
    }
}

#[derive(Debug, Clone)]
pub struct GameState {
    pub phase: GamePhase,
    pub tuning: Tuning,
    pub world: World,
    pub player: Player,
    /// Contacts from the most recent resolve
    pub contacts: Contacts,
    /// Gravity and jump limit for the player's current region
    pub gravity: f32,
    pub max_jumps: u32,
    /// Monotonic death counter
    pub deaths: u32,
    /// Presentation flag chosen in the first prompt
    pub death_screen_enabled: bool,
    /// Finish without collecting every checkpoint
    pub speedrun_mode: bool,
    /// Clock time when play started
    pub run_started_ms: u64,
    /// Frozen run time, set exactly once at the finish line
    pub finish_time_ms: Option<u64>,
    /// Events raised since the host last drained them
    pub events: Vec<GameEvent>,
}

impl GameState {
    pub fn new(level: &Level, tuning: Tuning) -> Result<Self, ConfigError> {
        tuning.validate()?;
        let world = World::build(level)?;
        let player = Player::new(world.spawn);
        let (gravity, max_jumps) = tuning.regime_at(player.pos.x);

        Ok(Self {
            phase: GamePhase::DeathScreenPrompt,
            tuning,
            world,
            player,
            contacts: Contacts::default(),
            gravity,
            max_jumps,
            deaths: 0,
            death_screen_enabled: false,
            speedrun_mode: false,
            run_started_ms: 0,
            finish_time_ms: None,
            events: Vec::new(),
        })
    }

    /// Session on the shipped course with default tuning
    pub fn with_course() -> Result<Self, ConfigError> {
        Self::new(&Level::course(), Tuning::default())
    }

    pub fn set_phase(&mut self, phase: GamePhase) {
        if self.phase != phase {
            log::info!("Phase {:?} -> {:?}", self.phase, phase);
            self.phase = phase;
            self.events.push(GameEvent::PhaseChanged(phase));
        }
    }

    /// Run time so far, frozen once finished
    pub fn elapsed_ms(&self, now_ms: u64) -> u64 {
        match (self.phase, self.finish_time_ms) {
            (_, Some(frozen)) => frozen,
            (GamePhase::Playing, None) => now_ms.saturating_sub(self.run_started_ms),
            _ => 0,
        }
    }

    pub fn finish_time(&self) -> Option<FinishTime> {
        self.finish_time_ms.map(FinishTime::from_ms)
    }

    /// Past the hard-mode threshold
    pub fn in_hard_mode(&self) -> bool {
        self.player.pos.x >= self.tuning.hard_mode.threshold_x
    }

    /// Send the player back to the last checkpoint and count a death.
    ///
    /// Manual resets go through here too.
    pub fn reset_player(&mut self, cause: DeathCause) {
        let at = self.player.pos;
        log::info!("Player died at ({:.0}, {:.0}): {:?}", at.x, at.y, cause);
        self.player.respawn();
        self.deaths += 1;
        self.events.push(GameEvent::Died { cause, at });
    }

    /// Take all pending events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_starts_at_first_prompt() {
        let state = GameState::with_course().unwrap();
        assert_eq!(state.phase, GamePhase::DeathScreenPrompt);
        assert_eq!(state.player.pos, Vec2::new(-9425.0, 979.0));
        assert_eq!(state.deaths, 0);
        assert_eq!((state.gravity, state.max_jumps), (1500.0, 2));
    }

    #[test]
    fn test_invalid_tuning_is_rejected() {
        let tuning = Tuning {
            max_jumps: 0,
            ..Default::default()
        };
        assert!(GameState::new(&Level::course(), tuning).is_err());
    }

    #[test]
    fn test_finish_time_split() {
        assert_eq!(
            FinishTime::from_ms(125_678),
            FinishTime {
                minutes: 2,
                seconds: 5,
                hundredths: 67
            }
        );
    }

    #[test]
    fn test_reset_counts_death_and_records_event() {
        let mut state = GameState::with_course().unwrap();
        state.player.pos = Vec2::new(0.0, 0.0);
        state.reset_player(DeathCause::ManualReset);
        assert_eq!(state.deaths, 1);
        assert_eq!(state.player.pos, state.world.spawn);
        assert_eq!(
            state.drain_events(),
            vec![GameEvent::Died {
                cause: DeathCause::ManualReset,
                at: Vec2::ZERO
            }]
        );
        assert!(state.events.is_empty());
    }
}
