//! Axis-separated collision resolution
//!
//! The player box is moved along Y first and pushed out of anything it
//! entered, then the same for X. Resolving the axes separately avoids any
//! corner ambiguity: a diagonal approach always lands or walls in a
//! predictable order.

use glam::Vec2;

use super::kinematic::KinematicPlatform;
use super::rect::Rect;

/// Anything the player can stand on or push against
#[derive(Debug, Clone)]
pub enum Surface {
    Static(Rect),
    /// Safe moving platform (collides like a static one)
    Kinematic(KinematicPlatform),
    /// Ground tile or side wall
    Boundary(Rect),
}

impl Surface {
    /// Current rectangle of the surface
    pub fn rect(&self) -> Rect {
        match self {
            Surface::Static(rect) | Surface::Boundary(rect) => *rect,
            Surface::Kinematic(platform) => platform.rect(),
        }
    }

    /// Advance scripted motion (no-op for fixed surfaces)
    pub fn advance(&mut self, dt: f32) {
        if let Surface::Kinematic(platform) = self {
            platform.advance(dt);
        }
    }
}

/// Which sides of the player touched something this tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Contacts {
    pub ground: bool,
    pub ceiling: bool,
    pub wall_left: bool,
    pub wall_right: bool,
}

impl Contacts {
    pub fn any(&self) -> bool {
        self.ground || self.ceiling || self.wall_left || self.wall_right
    }

    /// Landing or touching a wall gives all jumps back
    pub fn restores_jumps(&self) -> bool {
        self.ground || self.wall_left || self.wall_right
    }
}

/// Output of [`resolve`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resolution {
    pub rect: Rect,
    pub velocity: Vec2,
    pub contacts: Contacts,
}

/// Integrate `velocity * dt` into `rect`, Y then X, pushing the box out of
/// every surface it overlaps.
///
/// On an axis with zero velocity nothing is snapped; once a snap zeroes the
/// velocity, further overlaps on that axis are left alone.
pub fn resolve<I>(mut rect: Rect, mut velocity: Vec2, surfaces: I, dt: f32) -> Resolution
where
    I: IntoIterator<Item = Rect>,
    I::IntoIter: Clone,
{
    let surfaces = surfaces.into_iter();
    let mut contacts = Contacts::default();

    rect.y += velocity.y * dt;
    for surface in surfaces.clone() {
        if !rect.intersects(&surface) {
            continue;
        }
        if velocity.y > 0.0 {
            rect.set_bottom(surface.top());
            velocity.y = 0.0;
            contacts.ground = true;
        } else if velocity.y < 0.0 {
            rect.y = surface.bottom();
            velocity.y = 0.0;
            contacts.ceiling = true;
        }
    }

    rect.x += velocity.x * dt;
    for surface in surfaces {
        if !rect.intersects(&surface) {
            continue;
        }
        if velocity.x > 0.0 {
            rect.set_right(surface.left());
            velocity.x = 0.0;
            contacts.wall_right = true;
        } else if velocity.x < 0.0 {
            rect.x = surface.right();
            velocity.x = 0.0;
            contacts.wall_left = true;
        }
    }

    Resolution {
        rect,
        velocity,
        contacts,
    }
}

/// Gravity step applied after [`resolve`]: any contact stops vertical motion,
/// otherwise gravity accumulates.
pub fn apply_gravity(velocity: &mut Vec2, contacts: &Contacts, gravity: f32, dt: f32) {
    if contacts.any() {
        velocity.y = 0.0;
    } else {
        velocity.y += gravity * dt;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_falling_player_lands_on_platform() {
        let player = Rect::new(0.0, 0.0, 49.0, 51.0);
        let platform = Rect::new(0.0, 50.0, 100.0, 20.0);

        let res = resolve(player, Vec2::new(0.0, 100.0), [platform], 1.0);
        assert_eq!(res.rect.bottom(), 50.0);
        assert_eq!(res.rect.y, -1.0);
        assert_eq!(res.velocity.y, 0.0);
        assert!(res.contacts.ground);
        assert!(res.contacts.restores_jumps());
    }

    #[test]
    fn test_rising_player_hits_ceiling() {
        let player = Rect::new(0.0, 100.0, 49.0, 51.0);
        let ceiling = Rect::new(0.0, 50.0, 100.0, 20.0);

        let res = resolve(player, Vec2::new(0.0, -800.0), [ceiling], 0.05);
        assert_eq!(res.rect.top(), 70.0);
        assert!(res.contacts.ceiling);
        assert!(!res.contacts.restores_jumps());
    }

    #[test]
    fn test_walls_set_side_flags() {
        let wall = Rect::new(100.0, 0.0, 10.0, 200.0);

        let right = resolve(Rect::new(40.0, 50.0, 49.0, 51.0), Vec2::new(300.0, 0.0), [wall], 0.1);
        assert_eq!(right.rect.right(), 100.0);
        assert!(right.contacts.wall_right);
        assert_eq!(right.velocity.x, 0.0);

        let left = resolve(Rect::new(115.0, 50.0, 49.0, 51.0), Vec2::new(-300.0, 0.0), [wall], 0.1);
        assert_eq!(left.rect.left(), 110.0);
        assert!(left.contacts.wall_left);
        assert!(left.contacts.restores_jumps());
    }

    #[test]
    fn test_resolve_is_idempotent_at_rest() {
        let platform = Rect::new(0.0, 50.0, 100.0, 20.0);
        let first = resolve(Rect::new(0.0, 0.0, 49.0, 51.0), Vec2::new(0.0, 100.0), [platform], 1.0);
        let second = resolve(first.rect, Vec2::ZERO, [platform], 1.0);
        assert_eq!(second.rect, first.rect);
        assert_eq!(second.contacts, Contacts::default());
    }

    #[test]
    fn test_y_resolves_before_x() {
        // Moving down-right into a block. Y alone clears the block's left
        // side, so only the X step collides and the player is walled.
        let player = Rect::new(0.0, 0.0, 10.0, 10.0);
        let block = Rect::new(15.0, 12.0, 20.0, 20.0);

        let res = resolve(player, Vec2::new(100.0, 100.0), [block], 0.1);
        assert_eq!(res.rect, Rect::new(5.0, 10.0, 10.0, 10.0));
        assert!(res.contacts.wall_right);
        assert!(!res.contacts.ground);

        // Resolving X first would have landed the player on top instead
        let mut x_first = player;
        x_first.x += 10.0;
        x_first.y += 10.0;
        assert!(x_first.intersects(&block));
        x_first.set_bottom(block.top());
        assert_ne!(x_first, res.rect);
    }

    #[test]
    fn test_zero_velocity_does_not_snap() {
        let platform = Rect::new(0.0, 0.0, 100.0, 100.0);
        let inside = Rect::new(10.0, 10.0, 10.0, 10.0);
        let res = resolve(inside, Vec2::ZERO, [platform], 0.016);
        assert_eq!(res.rect, inside);
        assert!(!res.contacts.any());
    }

    #[test]
    fn test_gravity_only_without_contact() {
        let mut vel = Vec2::new(0.0, 10.0);
        apply_gravity(&mut vel, &Contacts::default(), 1500.0, 0.1);
        assert_eq!(vel.y, 160.0);

        let walled = Contacts {
            wall_left: true,
            ..Default::default()
        };
        apply_gravity(&mut vel, &walled, 1500.0, 0.1);
        assert_eq!(vel.y, 0.0);
    }
}
