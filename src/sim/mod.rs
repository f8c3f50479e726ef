//! Simulation module
//!
//! All gameplay logic lives here. No rendering or platform dependencies:
//! - Time comes in as `dt` and a millisecond clock
//! - Input comes in as intents (`TickInput`)
//! - Stable iteration order (level order)

pub mod checkpoint;
pub mod collision;
pub mod kinematic;
pub mod mask;
pub mod player;
pub mod rect;
pub mod state;
pub mod tick;
pub mod world;

pub use checkpoint::Checkpoints;
pub use collision::{Contacts, Resolution, Surface, apply_gravity, resolve};
pub use kinematic::{Axis, KinematicPlatform};
pub use mask::{HazardIndex, HazardMask, Mask};
pub use player::Player;
pub use rect::Rect;
pub use state::{DeathCause, FinishTime, GameEvent, GamePhase, GameState};
pub use tick::{TickInput, tick};
pub use world::World;
