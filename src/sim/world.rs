//! Runtime form of a level
//!
//! Built once from a validated `Level`. Collidable geometry lives in a single
//! `Surface` list so the resolver walks one homogeneous sequence.

use glam::Vec2;

use super::checkpoint::Checkpoints;
use super::collision::Surface;
use super::kinematic::KinematicPlatform;
use super::mask::HazardIndex;
use super::rect::Rect;
use crate::consts::*;
use crate::error::ConfigError;
use crate::level::{Bounds, Level};

#[derive(Debug, Clone)]
pub struct World {
    pub spawn: Vec2,
    pub bounds: Bounds,
    /// Safe movers, static platforms, ground tiles, then both walls
    pub surfaces: Vec<Surface>,
    /// Moving platforms that kill on contact
    pub hazard_movers: Vec<KinematicPlatform>,
    pub hazards: HazardIndex,
    pub checkpoints: Checkpoints,
    pub void_zones: Vec<Rect>,
    pub finish: Rect,
}

impl World {
    pub fn build(level: &Level) -> Result<Self, ConfigError> {
        let bounds = level.bounds;
        if !bounds.half_extent.is_finite()
            || !bounds.ground_y.is_finite()
            || !bounds.fall_margin.is_finite()
            || bounds.half_extent <= 0.0
        {
            return Err(ConfigError::NonFinite("world bounds"));
        }
        if ground_tile_count(bounds.half_extent) > MAX_GROUND_TILES as f32 {
            return Err(ConfigError::WorldTooLarge {
                half_extent: bounds.half_extent,
                max_tiles: MAX_GROUND_TILES,
            });
        }
        if !level.spawn.is_finite() {
            return Err(ConfigError::NonFinite("spawn"));
        }
        let mut fixed_rects = level
            .platforms
            .iter()
            .chain(&level.checkpoints)
            .chain(&level.void_zones)
            .chain(std::iter::once(&level.finish));
        if fixed_rects.any(|r| !r.is_finite()) {
            return Err(ConfigError::NonFinite("level rectangle"));
        }

        let mut surfaces = Vec::new();
        for spec in &level.safe_movers {
            surfaces.push(Surface::Kinematic(spec.build()?));
        }
        surfaces.extend(level.platforms.iter().copied().map(Surface::Static));
        surfaces.extend(boundary_rects(&bounds).into_iter().map(Surface::Boundary));

        let hazard_movers = level
            .hazard_movers
            .iter()
            .map(|spec| spec.build())
            .collect::<Result<Vec<_>, _>>()?;

        let hazards = HazardIndex::build(&level.spikes, Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT));
        let checkpoints = Checkpoints::new(&level.checkpoints, &level.checkpoint_groups)?;

        log::info!(
            "World built: {} surfaces, {} hazard movers, {} spikes, {} checkpoints",
            surfaces.len(),
            hazard_movers.len(),
            hazards.len(),
            checkpoints.len()
        );

        Ok(Self {
            spawn: level.spawn,
            bounds,
            surfaces,
            hazard_movers,
            hazards,
            checkpoints,
            void_zones: level.void_zones.clone(),
            finish: level.finish,
        })
    }

    /// Move every kinematic platform, safe and hazardous
    pub fn advance(&mut self, dt: f32) {
        for surface in &mut self.surfaces {
            surface.advance(dt);
        }
        for mover in &mut self.hazard_movers {
            mover.advance(dt);
        }
    }

    /// Current rectangles of everything the player collides with
    pub fn collidable_rects(&self) -> impl Iterator<Item = Rect> + Clone + '_ {
        self.surfaces.iter().map(Surface::rect)
    }

    pub fn touches_hazard_mover(&self, player: &Rect) -> bool {
        self.hazard_movers
            .iter()
            .any(|mover| player.intersects(&mover.rect()))
    }

    /// Void zones test the player's position (top-left corner), not its box
    pub fn in_void(&self, pos: Vec2) -> bool {
        self.void_zones.iter().any(|zone| zone.contains_point(pos))
    }

    pub fn out_of_bounds(&self, pos: Vec2) -> bool {
        pos.x > self.bounds.half_extent
            || pos.x < -self.bounds.half_extent
            || pos.y > self.bounds.ground_y + self.bounds.fall_margin
    }
}

fn ground_tile_count(half_extent: f32) -> f32 {
    ((2.0 * half_extent) / GROUND_TILE_WIDTH).ceil()
}

/// Ground tiles across [-half_extent, half_extent) followed by the left and
/// right walls
fn boundary_rects(bounds: &Bounds) -> Vec<Rect> {
    let start = -bounds.half_extent;
    let tiles = ground_tile_count(bounds.half_extent) as usize;

    let mut rects: Vec<Rect> = (0..tiles)
        .map(|i| {
            Rect::new(
                start + i as f32 * GROUND_TILE_WIDTH,
                bounds.ground_y,
                GROUND_TILE_WIDTH,
                GROUND_TILE_HEIGHT,
            )
        })
        .collect();

    let wall_top = bounds.ground_y - WALL_HEIGHT;
    rects.push(Rect::new(start, wall_top, WALL_WIDTH, WALL_HEIGHT));
    rects.push(Rect::new(
        bounds.half_extent - WALL_WIDTH,
        wall_top,
        WALL_WIDTH,
        WALL_HEIGHT,
    ));
    rects
}
