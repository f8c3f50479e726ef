//! Kinematic platforms
//!
//! A platform with scripted motion: it slides along one axis at constant
//! speed and turns around when its leading edge reaches a bound.

use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::error::ConfigError;

/// Axis of motion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    Y,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KinematicPlatform {
    rect: Rect,
    axis: Axis,
    /// Bound for the trailing/leading edge along `axis`
    min: f32,
    max: f32,
    /// Units per second
    speed: f32,
    /// +1 or -1
    direction: f32,
}

impl KinematicPlatform {
    pub fn new(rect: Rect, axis: Axis, min: f32, max: f32, speed: f32) -> Result<Self, ConfigError> {
        if !rect.is_finite() || !min.is_finite() || !max.is_finite() {
            return Err(ConfigError::NonFinite("kinematic platform"));
        }
        if min > max {
            return Err(ConfigError::InvertedBounds { min, max });
        }
        if !speed.is_finite() || speed < 0.0 {
            return Err(ConfigError::InvalidSpeed(speed));
        }
        Ok(Self {
            rect,
            axis,
            min,
            max,
            speed,
            direction: 1.0,
        })
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn direction(&self) -> f32 {
        self.direction
    }

    /// Move by `speed * dt` and turn around once the leading edge hits a bound.
    ///
    /// The step that reaches the bound is not clamped, so the platform may
    /// overshoot by at most one step.
    pub fn advance(&mut self, dt: f32) {
        let step = self.speed * dt * self.direction;
        let (near, far) = match self.axis {
            Axis::X => {
                self.rect.x += step;
                (self.rect.left(), self.rect.right())
            }
            Axis::Y => {
                self.rect.y += step;
                (self.rect.top(), self.rect.bottom())
            }
        };

        if self.direction > 0.0 && far >= self.max {
            self.direction = -1.0;
        } else if self.direction < 0.0 && near <= self.min {
            self.direction = 1.0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn slider() -> KinematicPlatform {
        KinematicPlatform::new(Rect::new(0.0, 0.0, 50.0, 20.0), Axis::X, 0.0, 200.0, 100.0).unwrap()
    }

    #[test]
    fn test_rejects_inverted_bounds() {
        let err = KinematicPlatform::new(Rect::new(0.0, 0.0, 10.0, 10.0), Axis::Y, 700.0, 450.0, 10.0)
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvertedBounds { .. }));
    }

    #[test]
    fn test_rejects_negative_speed() {
        let err = KinematicPlatform::new(Rect::new(0.0, 0.0, 10.0, 10.0), Axis::X, 0.0, 100.0, -5.0)
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidSpeed(_)));
    }

    #[test]
    fn test_reverses_at_max_on_next_step() {
        let mut p = slider();
        // Right edge travels 50 -> 200 in 1.5s
        p.advance(1.5);
        assert_eq!(p.rect().right(), 200.0);
        assert_eq!(p.direction(), -1.0);
        p.advance(0.5);
        assert_eq!(p.rect().x, 100.0);
    }

    #[test]
    fn test_overshoot_is_not_clamped() {
        let mut p = slider();
        p.advance(2.0);
        assert_eq!(p.rect().right(), 250.0);
        assert_eq!(p.direction(), -1.0);
    }

    #[test]
    fn test_vertical_platform_uses_top_and_bottom() {
        let mut p =
            KinematicPlatform::new(Rect::new(0.0, 600.0, 50.0, 20.0), Axis::Y, 450.0, 700.0, 100.0)
                .unwrap();
        p.advance(0.8);
        assert_eq!(p.rect().bottom(), 700.0);
        assert_eq!(p.direction(), -1.0);
        p.advance(2.5);
        assert_eq!(p.rect().top(), 430.0);
        assert_eq!(p.direction(), 1.0);
        assert_eq!(p.rect().x, 0.0);
    }

    proptest! {
        #[test]
        fn prop_stays_within_bounds_plus_one_step(
            speed in 1.0f32..400.0,
            steps in proptest::collection::vec(0.001f32..0.1, 1..400),
        ) {
            let mut p = KinematicPlatform::new(
                Rect::new(100.0, 0.0, 50.0, 20.0), Axis::X, 100.0, 600.0, speed,
            ).unwrap();
            // One frame of travel at the largest generated dt
            let eps = speed * 0.1 + 1e-2;
            for dt in steps {
                p.advance(dt);
                prop_assert!(p.rect().left() >= 100.0 - eps);
                prop_assert!(p.rect().right() <= 600.0 + eps);
            }
        }
    }
}
