//! Platform Speedrun - A side-scrolling platformer against the clock
//!
//! Core modules:
//! - `sim`: Simulation (collision resolution, hazards, player, phases)
//! - `level`: Level geometry and the built-in course
//! - `tuning`: Data-driven physics constants
//! - `render`: Scene description handed to the host renderer
//! - `platform`: Frame clock and input mapping

pub mod error;
pub mod level;
pub mod platform;
pub mod render;
pub mod sim;
pub mod tuning;

pub use error::ConfigError;
pub use level::Level;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Frame-rate cap of the host loop
    pub const FPS_CAP: u32 = 60;
    /// Largest dt handed to the simulation (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Screen dimensions used for the camera
    pub const SCREEN_WIDTH: f32 = 1920.0;
    pub const SCREEN_HEIGHT: f32 = 1080.0;

    /// Player box
    pub const PLAYER_WIDTH: f32 = 49.0;
    pub const PLAYER_HEIGHT: f32 = 51.0;

    /// Ground tiles and side walls
    pub const GROUND_TILE_WIDTH: f32 = 200.0;
    pub const GROUND_TILE_HEIGHT: f32 = 50.0;
    /// Largest ground a level may ask for
    pub const MAX_GROUND_TILES: usize = 10_000;
    pub const WALL_WIDTH: f32 = 500.0;
    pub const WALL_HEIGHT: f32 = 2000.0;
}
