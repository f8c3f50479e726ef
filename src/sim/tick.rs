//! Per-frame simulation tick
//!
//! Advances the phase machine and, while playing, the whole gameplay step in
//! a fixed order: movers, physics regime, collision, controls, deaths,
//! checkpoints, finish.

use super::collision::{apply_gravity, resolve};
use super::state::{DeathCause, GameEvent, GamePhase, GameState};

/// Input intents for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    pub move_left: bool,
    pub move_right: bool,
    /// Jump held
    pub jump: bool,
    /// Manual reset to the last checkpoint
    pub reset: bool,
    /// Yes/No answer on a prompt screen (edge-triggered by the host)
    pub choice: Option<bool>,
    /// Leave the rules screen
    pub start: bool,
}

/// Advance the session by `dt` seconds. `now_ms` is a monotonic clock used
/// for the jump cooldown and the run timer.
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32, now_ms: u64) {
    match state.phase {
        GamePhase::DeathScreenPrompt => {
            if let Some(yes) = input.choice {
                state.death_screen_enabled = yes;
                log::info!("Death screen {}", if yes { "enabled" } else { "disabled" });
                state.set_phase(GamePhase::SpeedrunPrompt);
            }
        }
        GamePhase::SpeedrunPrompt => {
            if let Some(yes) = input.choice {
                state.speedrun_mode = yes;
                log::info!("Speedrun mode {}", if yes { "enabled" } else { "disabled" });
                state.set_phase(GamePhase::Rules);
            }
        }
        GamePhase::Rules => {
            if input.start {
                state.run_started_ms = now_ms;
                state.set_phase(GamePhase::Playing);
            }
        }
        GamePhase::Playing => play(state, input, dt, now_ms),
        GamePhase::Finished => {}
    }
}

fn play(state: &mut GameState, input: &TickInput, dt: f32, now_ms: u64) {
    state.world.advance(dt);

    let (gravity, max_jumps) = state.tuning.regime_at(state.player.pos.x);
    if max_jumps != state.max_jumps {
        log::debug!("Physics regime: gravity {}, max jumps {}", gravity, max_jumps);
    }
    state.gravity = gravity;
    state.max_jumps = max_jumps;

    // Collision
    let res = resolve(
        state.player.rect(),
        state.player.vel,
        state.world.collidable_rects(),
        dt,
    );
    state.player.pos = res.rect.pos();
    state.player.vel = res.velocity;
    state.contacts = res.contacts;
    if res.contacts.restores_jumps() {
        state.player.jump_count = 0;
    }
    apply_gravity(&mut state.player.vel, &res.contacts, state.gravity, dt);

    // Controls
    let tuning = state.tuning;
    state
        .player
        .apply_horizontal_input(input.move_left, input.move_right, tuning.move_speed);
    state
        .player
        .update_rotation(&res.contacts, tuning.rotation_rate, dt);
    if input.jump && state.player.try_jump(now_ms, &tuning, state.max_jumps) {
        log::trace!("Jump {} at {}ms", state.player.jump_count, now_ms);
        state.events.push(GameEvent::Jumped {
            count: state.player.jump_count,
        });
    }

    if let Some(cause) = death_cause(state, input) {
        state.reset_player(cause);
        return;
    }

    let rect = state.player.rect();
    if let Some((index, reset_pos)) = state.world.checkpoints.capture(&rect) {
        state.player.reset_pos = reset_pos;
        log::info!(
            "Checkpoint {} reached ({}/{})",
            index,
            state.world.checkpoints.collected_count(),
            state.world.checkpoints.len()
        );
        state.events.push(GameEvent::CheckpointReached { index });
    }

    let may_finish = state.speedrun_mode || state.world.checkpoints.all_collected();
    if state.finish_time_ms.is_none() && may_finish && rect.intersects(&state.world.finish) {
        let time_ms = now_ms.saturating_sub(state.run_started_ms);
        state.finish_time_ms = Some(time_ms);
        log::info!(
            "Finished in {:.2}s with {} deaths",
            time_ms as f64 / 1000.0,
            state.deaths
        );
        state.events.push(GameEvent::Finished {
            time_ms,
            deaths: state.deaths,
        });
        state.set_phase(GamePhase::Finished);
    }
}

/// First death condition that holds this tick, if any
fn death_cause(state: &GameState, input: &TickInput) -> Option<DeathCause> {
    let rect = state.player.rect();
    let world = &state.world;

    if input.reset {
        Some(DeathCause::ManualReset)
    } else if world.in_void(state.player.pos) {
        Some(DeathCause::Void)
    } else if world.touches_hazard_mover(&rect) {
        Some(DeathCause::HazardPlatform)
    } else if world.out_of_bounds(state.player.pos) {
        Some(DeathCause::OutOfBounds)
    } else if world.hazards.overlaps(&rect) {
        Some(DeathCause::Spike)
    } else {
        None
    }
}
