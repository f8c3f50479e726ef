//! Render scene module
//!
//! The game does not draw anything itself. Each frame it produces a `Scene`
//! (screen-space shapes, HUD values, or a menu screen) for the host to draw.

pub mod scene;

pub use scene::{Color, FrameStats, Hud, Scene, Shape, build_scene, camera_offset};
