//! Pixel occupancy masks for shape-accurate hazard tests
//!
//! A bounding-box test alone would kill the player on the empty corners of a
//! spike's box. Each hazard is rasterized once into a mask over its bounding
//! box; a query first rejects by box and then compares masks cell by cell.

use glam::{IVec2, Vec2};

use super::rect::Rect;

/// Row-major binary occupancy grid
#[derive(Debug, Clone, PartialEq)]
pub struct Mask {
    width: usize,
    height: usize,
    bits: Vec<bool>,
}

impl Mask {
    /// Fully occupied mask (used for the player box)
    pub fn filled(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            bits: vec![true; width * height],
        }
    }

    /// Rasterize a polygon given in mask-local coordinates.
    ///
    /// A cell is occupied when its center lies inside the polygon or on its
    /// boundary.
    pub fn from_polygon(width: usize, height: usize, points: &[Vec2]) -> Self {
        let mut bits = vec![false; width * height];
        for y in 0..height {
            for x in 0..width {
                let center = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
                bits[y * width + x] = polygon_contains(points, center);
            }
        }
        Self { width, height, bits }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn get(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height && self.bits[y * self.width + x]
    }

    /// True if any occupied cell of `other`, placed at `offset` relative to
    /// this mask's origin, coincides with an occupied cell of this mask.
    pub fn overlaps(&self, other: &Mask, offset: IVec2) -> bool {
        let x0 = offset.x.max(0);
        let y0 = offset.y.max(0);
        let x1 = (offset.x + other.width as i32).min(self.width as i32);
        let y1 = (offset.y + other.height as i32).min(self.height as i32);
        if x0 >= x1 || y0 >= y1 {
            return false;
        }

        for y in y0..y1 {
            for x in x0..x1 {
                if self.bits[y as usize * self.width + x as usize]
                    && other.bits[(y - offset.y) as usize * other.width + (x - offset.x) as usize]
                {
                    return true;
                }
            }
        }
        false
    }
}

/// Even-odd containment that also accepts points on an edge
fn polygon_contains(points: &[Vec2], p: Vec2) -> bool {
    const EDGE_EPSILON: f32 = 1e-4;

    let n = points.len();
    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let a = points[i];
        let b = points[j];

        if distance_to_segment(p, a, b) <= EDGE_EPSILON {
            return true;
        }

        if (a.y > p.y) != (b.y > p.y) {
            let cross_x = a.x + (p.y - a.y) / (b.y - a.y) * (b.x - a.x);
            if p.x < cross_x {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

fn distance_to_segment(p: Vec2, a: Vec2, b: Vec2) -> f32 {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq == 0.0 {
        return p.distance(a);
    }
    let t = ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    p.distance(a + ab * t)
}

/// Twice the signed area (shoelace)
fn doubled_area(points: &[Vec2]) -> f32 {
    let n = points.len();
    (0..n)
        .map(|i| points[i].perp_dot(points[(i + 1) % n]))
        .sum()
}

/// A rasterized hazard
#[derive(Debug, Clone)]
pub struct HazardMask {
    /// World-space polygon, kept for rendering
    pub polygon: Vec<Vec2>,
    /// Integer world position of the mask's top-left cell
    pub origin: IVec2,
    /// Bounding box in world units
    pub bounds: Rect,
    pub mask: Mask,
}

impl HazardMask {
    /// Rasterize a world-space polygon. Returns `None` for shapes that cannot
    /// hurt anyone (too few vertices, non-finite, zero area).
    pub fn build(polygon: &[Vec2]) -> Option<Self> {
        if polygon.len() < 3 || polygon.iter().any(|p| !p.is_finite()) {
            return None;
        }
        if doubled_area(polygon).abs() < f32::EPSILON {
            return None;
        }

        let min = polygon.iter().copied().reduce(Vec2::min)?;
        let max = polygon.iter().copied().reduce(Vec2::max)?;
        let origin = min.floor();
        let width = (max.x - origin.x).max(1.0) as usize;
        let height = (max.y - origin.y).max(1.0) as usize;

        let local: Vec<Vec2> = polygon.iter().map(|&p| p - origin).collect();
        let mask = Mask::from_polygon(width, height, &local);

        Some(Self {
            polygon: polygon.to_vec(),
            origin: origin.as_ivec2(),
            bounds: Rect::new(origin.x, origin.y, width as f32, height as f32),
            mask,
        })
    }
}

/// All hazards of a level, plus the player's precomputed mask
#[derive(Debug, Clone)]
pub struct HazardIndex {
    hazards: Vec<HazardMask>,
    player_mask: Mask,
}

impl HazardIndex {
    /// Build masks for every polygon. Malformed polygons are skipped with a
    /// warning; they never abort the level.
    pub fn build(polygons: &[Vec<Vec2>], player_size: Vec2) -> Self {
        let mut hazards = Vec::with_capacity(polygons.len());
        for (i, polygon) in polygons.iter().enumerate() {
            match HazardMask::build(polygon) {
                Some(hazard) => hazards.push(hazard),
                None => log::warn!("Hazard {} is degenerate ({:?}), ignoring it", i, polygon),
            }
        }
        log::debug!("Built {} hazard masks", hazards.len());

        Self {
            hazards,
            player_mask: Mask::filled(player_size.x.ceil() as usize, player_size.y.ceil() as usize),
        }
    }

    pub fn hazards(&self) -> &[HazardMask] {
        &self.hazards
    }

    pub fn len(&self) -> usize {
        self.hazards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hazards.is_empty()
    }

    /// Pixel-accurate test of the player box against every hazard
    pub fn overlaps(&self, player: &Rect) -> bool {
        let player_origin = player.pos().floor().as_ivec2();
        self.hazards.iter().any(|hazard| {
            player.intersects(&hazard.bounds)
                && hazard
                    .mask
                    .overlaps(&self.player_mask, player_origin - hazard.origin)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spike() -> Vec<Vec2> {
        vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(-25.0, 43.0),
            Vec2::new(25.0, 43.0),
        ]
    }

    fn index() -> HazardIndex {
        HazardIndex::build(&[spike()], Vec2::new(10.0, 10.0))
    }

    #[test]
    fn test_triangle_mask_dimensions() {
        let hazard = HazardMask::build(&spike()).unwrap();
        assert_eq!(hazard.mask.width(), 50);
        assert_eq!(hazard.mask.height(), 43);
        assert_eq!(hazard.origin, IVec2::new(-25, 0));
        // Apex row is narrow, base row is nearly full
        assert!(!hazard.mask.get(0, 0));
        assert!(hazard.mask.get(25, 1));
        assert!(hazard.mask.get(1, 42));
        assert!(hazard.mask.get(48, 42));
    }

    #[test]
    fn test_box_corner_outside_triangle_misses() {
        // Top-left corner of the bounding box, mask-local (0, 0)
        let player = Rect::new(-25.0, 0.0, 10.0, 10.0);
        assert!(player.intersects(&index().hazards()[0].bounds));
        assert!(!index().overlaps(&player));
    }

    #[test]
    fn test_box_in_triangle_center_hits() {
        let player = Rect::new(-5.0, 24.0, 10.0, 10.0);
        assert!(index().overlaps(&player));
    }

    #[test]
    fn test_box_touching_apex_hits() {
        assert!(index().overlaps(&Rect::new(0.0, 0.0, 10.0, 10.0)));
    }

    #[test]
    fn test_far_away_misses() {
        assert!(!index().overlaps(&Rect::new(500.0, 500.0, 10.0, 10.0)));
    }

    #[test]
    fn test_degenerate_hazards_are_skipped() {
        let flat = vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(20.0, 0.0),
        ];
        let short = vec![Vec2::new(0.0, 0.0), Vec2::new(5.0, 5.0)];
        let index = HazardIndex::build(&[flat, spike(), short], Vec2::new(49.0, 51.0));
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn test_mask_offset_overlap() {
        let mut a = Mask::filled(4, 4);
        a.bits.iter_mut().for_each(|b| *b = false);
        a.bits[3 * 4 + 3] = true;
        let b = Mask::filled(2, 2);
        assert!(a.overlaps(&b, IVec2::new(2, 2)));
        assert!(a.overlaps(&b, IVec2::new(3, 3)));
        assert!(!a.overlaps(&b, IVec2::new(0, 0)));
        assert!(!a.overlaps(&b, IVec2::new(4, 4)));
        assert!(!a.overlaps(&b, IVec2::new(-2, 3)));
    }
}
