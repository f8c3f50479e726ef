//! Scene generation for the host renderer
//!
//! World geometry is shifted by the camera offset so the player sits in the
//! middle of the screen. Shapes entirely off screen are left out.

use glam::Vec2;
use serde::Serialize;

use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::sim::{FinishTime, GamePhase, GameState, Rect, Surface};

/// RGBA, 0-1
pub type Color = [f32; 4];

pub const GROUND_COLOR: Color = [1.0, 1.0, 1.0, 1.0];
pub const WALL_COLOR: Color = [0.39, 0.39, 1.0, 1.0];
pub const PLATFORM_COLOR: Color = [0.0, 1.0, 0.0, 1.0];
pub const HAZARD_COLOR: Color = [1.0, 0.0, 0.0, 1.0];
pub const CHECKPOINT_COLOR: Color = [0.59, 0.2, 0.86, 1.0];
pub const CHECKPOINT_DONE_COLOR: Color = [0.0, 1.0, 0.0, 1.0];
pub const FINISH_COLOR: Color = [0.0, 1.0, 1.0, 1.0];

pub const RULES: &[&str] = &[
    "Welcome to Platform Speedrun!",
    "Press SPACE to start",
    "WASD/Arrows to move, SPACE to jump",
    "R to reset, avoid red spikes!",
    "Collect checkpoints (purple/green)",
    "Reach cyan finish line",
];

/// A drawable in screen coordinates
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Shape {
    Rect {
        rect: Rect,
        color: Color,
        /// Draw only the border
        outline: bool,
    },
    Polygon {
        points: Vec<Vec2>,
        color: Color,
    },
    /// Player box, rotated about its center (degrees)
    Player { rect: Rect, rotation: f32 },
}

/// Raw HUD values; formatting is up to the host
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Hud {
    pub checkpoints_collected: usize,
    pub checkpoints_total: usize,
    pub fps: u32,
    pub elapsed_secs: f32,
    pub deaths: u32,
    pub hard_mode: bool,
}

/// Host-side frame information the scene needs
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameStats {
    pub fps: u32,
    pub now_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "screen", rename_all = "snake_case")]
pub enum Scene {
    Prompt {
        question: &'static str,
    },
    Rules {
        lines: &'static [&'static str],
    },
    Playing {
        camera: Vec2,
        shapes: Vec<Shape>,
        hud: Hud,
    },
    Finished {
        time: FinishTime,
        deaths: u32,
    },
}

/// Camera offset that centers the player on screen
pub fn camera_offset(player_pos: Vec2, player_size: Vec2) -> Vec2 {
    player_pos - Vec2::new(SCREEN_WIDTH, SCREEN_HEIGHT) / 2.0 + player_size / 2.0
}

pub fn build_scene(state: &GameState, stats: &FrameStats) -> Scene {
    match state.phase {
        GamePhase::DeathScreenPrompt => Scene::Prompt {
            question: "Enable Death Screen?",
        },
        GamePhase::SpeedrunPrompt => Scene::Prompt {
            question: "Enable Speedrun Mode?",
        },
        GamePhase::Rules => Scene::Rules { lines: RULES },
        GamePhase::Playing => playing_scene(state, stats),
        GamePhase::Finished => Scene::Finished {
            time: FinishTime::from_ms(state.finish_time_ms.unwrap_or_default()),
            deaths: state.deaths,
        },
    }
}

fn playing_scene(state: &GameState, stats: &FrameStats) -> Scene {
    let world = &state.world;
    let camera = camera_offset(state.player.pos, state.player.size);
    let screen = Rect::new(0.0, 0.0, SCREEN_WIDTH, SCREEN_HEIGHT);
    let mut shapes = Vec::new();

    let mut push_rect = |rect: Rect, color: Color, outline: bool| {
        let rect = rect.translated(-camera);
        if rect.intersects(&screen) {
            shapes.push(Shape::Rect {
                rect,
                color,
                outline,
            });
        }
    };

    for surface in &world.surfaces {
        let color = match surface {
            Surface::Boundary(rect) if rect.h > rect.w => WALL_COLOR,
            Surface::Boundary(_) => GROUND_COLOR,
            Surface::Static(_) | Surface::Kinematic(_) => PLATFORM_COLOR,
        };
        push_rect(surface.rect(), color, false);
    }
    for mover in &world.hazard_movers {
        push_rect(mover.rect(), HAZARD_COLOR, false);
    }
    for (checkpoint, collected) in world.checkpoints.iter() {
        let color = if collected {
            CHECKPOINT_DONE_COLOR
        } else {
            CHECKPOINT_COLOR
        };
        push_rect(checkpoint.rect, color, true);
    }
    push_rect(world.finish, FINISH_COLOR, false);

    for hazard in world.hazards.hazards() {
        if hazard.bounds.translated(-camera).intersects(&screen) {
            shapes.push(Shape::Polygon {
                points: hazard.polygon.iter().map(|&p| p - camera).collect(),
                color: HAZARD_COLOR,
            });
        }
    }

    shapes.push(Shape::Player {
        rect: state.player.rect().translated(-camera),
        rotation: state.player.rotation,
    });

    let hud = Hud {
        checkpoints_collected: world.checkpoints.collected_count(),
        checkpoints_total: world.checkpoints.len(),
        fps: stats.fps,
        elapsed_secs: state.elapsed_ms(stats.now_ms) as f32 / 1000.0,
        deaths: state.deaths,
        hard_mode: state.in_hard_mode(),
    };

    Scene::Playing {
        camera,
        shapes,
        hud,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camera_centers_player() {
        let pos = Vec2::new(-9425.0, 979.0);
        let size = Vec2::new(49.0, 51.0);
        let camera = camera_offset(pos, size);
        let on_screen = Rect::from_pos_size(pos - camera, size);
        assert_eq!(on_screen.center(), Vec2::new(960.0, 540.0));
    }

    #[test]
    fn test_menu_scenes() {
        let mut state = GameState::with_course().unwrap();
        let stats = FrameStats::default();
        assert!(matches!(build_scene(&state, &stats), Scene::Prompt { .. }));
        state.phase = GamePhase::Rules;
        assert_eq!(build_scene(&state, &stats), Scene::Rules { lines: RULES });
    }

    #[test]
    fn test_playing_scene_has_player_and_hud() {
        let mut state = GameState::with_course().unwrap();
        state.phase = GamePhase::Playing;
        state.run_started_ms = 1000;
        let stats = FrameStats {
            fps: 60,
            now_ms: 3500,
        };

        let Scene::Playing { shapes, hud, .. } = build_scene(&state, &stats) else {
            panic!("expected playing scene");
        };
        assert_eq!(hud.checkpoints_total, 13);
        assert_eq!(hud.checkpoints_collected, 0);
        assert_eq!(hud.elapsed_secs, 2.5);
        assert_eq!(hud.fps, 60);

        // Player is drawn last, in the middle of the screen
        let Some(Shape::Player { rect, .. }) = shapes.last() else {
            panic!("player missing");
        };
        assert_eq!(rect.center(), Vec2::new(960.0, 540.0));
        // Spawn is next to the left wall and spike field
        assert!(shapes.iter().any(|s| matches!(s, Shape::Rect { color, .. } if *color == WALL_COLOR)));
        assert!(shapes.iter().any(|s| matches!(s, Shape::Polygon { .. })));
        // Far-away geometry is culled
        assert!(shapes.len() < state.world.surfaces.len());
    }

    #[test]
    fn test_finished_scene_uses_frozen_time() {
        let mut state = GameState::with_course().unwrap();
        state.phase = GamePhase::Finished;
        state.finish_time_ms = Some(61_230);
        state.deaths = 4;
        let scene = build_scene(&state, &FrameStats::default());
        assert_eq!(
            scene,
            Scene::Finished {
                time: FinishTime {
                    minutes: 1,
                    seconds: 1,
                    hundredths: 23
                },
                deaths: 4
            }
        );
    }

    #[test]
    fn test_scene_serializes() {
        let state = GameState::with_course().unwrap();
        let json = serde_json::to_string(&build_scene(&state, &FrameStats::default())).unwrap();
        assert!(json.contains("\"screen\":\"prompt\""));
    }
}
