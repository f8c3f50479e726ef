//! Axis-aligned rectangles in world units
//!
//! Y grows downward. Overlap is strict: rectangles that only share an edge
//! do not overlap, so a player resting exactly on a platform is not inside it.

use glam::Vec2;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn from_pos_size(pos: Vec2, size: Vec2) -> Self {
        Self::new(pos.x, pos.y, size.x, size.y)
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    pub fn pos(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.w, self.h)
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    pub fn set_right(&mut self, right: f32) {
        self.x = right - self.w;
    }

    pub fn set_bottom(&mut self, bottom: f32) {
        self.y = bottom - self.h;
    }

    /// Strict overlap test. Empty rectangles never overlap anything.
    #[inline]
    pub fn intersects(&self, other: &Rect) -> bool {
        self.w > 0.0
            && self.h > 0.0
            && other.w > 0.0
            && other.h > 0.0
            && self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }

    /// Closed containment: points on an edge are inside
    pub fn contains_point(&self, p: Vec2) -> bool {
        p.x >= self.x && p.x <= self.right() && p.y >= self.y && p.y <= self.bottom()
    }

    /// Copy moved by `offset`
    pub fn translated(&self, offset: Vec2) -> Rect {
        Rect::new(self.x + offset.x, self.y + offset.y, self.w, self.h)
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.w.is_finite() && self.h.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let floor = Rect::new(0.0, 50.0, 100.0, 20.0);
        let resting = Rect::new(10.0, -1.0, 49.0, 51.0);
        assert_eq!(resting.bottom(), floor.top());
        assert!(!resting.intersects(&floor));
        assert!(resting.translated(Vec2::new(0.0, 0.5)).intersects(&floor));
    }

    #[test]
    fn test_empty_rect_never_overlaps() {
        let empty = Rect::new(5.0, 5.0, 0.0, 10.0);
        let big = Rect::new(0.0, 0.0, 100.0, 100.0);
        assert!(!empty.intersects(&big));
        assert!(!big.intersects(&empty));
    }

    #[test]
    fn test_contains_point_includes_edges() {
        let r = Rect::new(2500.0, 979.0, 5200.0, 1000.0);
        assert!(r.contains_point(Vec2::new(2500.0, 979.0)));
        assert!(r.contains_point(Vec2::new(7700.0, 1979.0)));
        assert!(!r.contains_point(Vec2::new(2499.9, 1000.0)));
        assert!(!r.contains_point(Vec2::new(3000.0, 978.9)));
        assert!(!r.contains_point(Vec2::new(7700.1, 1000.0)));
    }

    #[test]
    fn test_edge_setters() {
        let mut r = Rect::new(0.0, 0.0, 10.0, 20.0);
        r.set_bottom(100.0);
        r.set_right(50.0);
        assert_eq!(r, Rect::new(40.0, 80.0, 10.0, 20.0));
    }
}
