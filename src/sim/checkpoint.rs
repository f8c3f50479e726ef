//! Checkpoints and checkpoint groups
//!
//! Each checkpoint points at a collected flag. Checkpoints in the same group
//! share a flag, so touching any of them collects all of them. Flags only
//! ever go from false to true.

use glam::Vec2;

use super::rect::Rect;
use crate::error::ConfigError;

#[derive(Debug, Clone)]
pub struct Checkpoint {
    pub rect: Rect,
    /// Index into `Checkpoints::flags`
    flag: usize,
}

#[derive(Debug, Clone, Default)]
pub struct Checkpoints {
    points: Vec<Checkpoint>,
    flags: Vec<bool>,
}

impl Checkpoints {
    /// Build from rectangles and groups of checkpoint indices.
    ///
    /// Checkpoints not named in any group get a flag of their own.
    pub fn new(rects: &[Rect], groups: &[Vec<usize>]) -> Result<Self, ConfigError> {
        let count = rects.len();
        let mut flag_of: Vec<Option<usize>> = vec![None; count];
        let mut flags = Vec::new();

        for group in groups.iter().filter(|g| !g.is_empty()) {
            let flag = flags.len();
            flags.push(false);
            for &index in group {
                let slot = flag_of
                    .get_mut(index)
                    .ok_or(ConfigError::UnknownCheckpoint { index, count })?;
                if slot.replace(flag).is_some() {
                    return Err(ConfigError::DuplicateGroupMember(index));
                }
            }
        }

        let points = rects
            .iter()
            .zip(flag_of)
            .map(|(&rect, flag)| {
                let flag = flag.unwrap_or_else(|| {
                    flags.push(false);
                    flags.len() - 1
                });
                Checkpoint { rect, flag }
            })
            .collect();

        Ok(Self { points, flags })
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Checkpoint, bool)> {
        self.points.iter().map(|cp| (cp, self.flags[cp.flag]))
    }

    pub fn is_collected(&self, index: usize) -> bool {
        self.points
            .get(index)
            .is_some_and(|cp| self.flags[cp.flag])
    }

    /// Number of checkpoints (not groups) marked collected
    pub fn collected_count(&self) -> usize {
        self.points.iter().filter(|cp| self.flags[cp.flag]).count()
    }

    pub fn all_collected(&self) -> bool {
        self.flags.iter().all(|&f| f)
    }

    /// Collect the first uncollected checkpoint the player overlaps.
    ///
    /// Returns its index and the new reset position.
    pub fn capture(&mut self, player: &Rect) -> Option<(usize, Vec2)> {
        let flags = &self.flags;
        let (index, flag, pos) = self
            .points
            .iter()
            .enumerate()
            .find(|(_, cp)| !flags[cp.flag] && player.intersects(&cp.rect))
            .map(|(i, cp)| (i, cp.flag, cp.rect.pos()))?;
        self.flags[flag] = true;
        Some((index, pos))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rects() -> Vec<Rect> {
        vec![
            Rect::new(0.0, 0.0, 49.0, 51.0),
            Rect::new(1000.0, 0.0, 49.0, 51.0),
            Rect::new(2000.0, 0.0, 49.0, 51.0),
        ]
    }

    #[test]
    fn test_grouped_checkpoints_collect_together() {
        let mut cps = Checkpoints::new(&rects(), &[vec![0, 1]]).unwrap();
        let hit = cps.capture(&Rect::new(10.0, 10.0, 49.0, 51.0));
        assert_eq!(hit, Some((0, Vec2::ZERO)));
        assert!(cps.is_collected(0));
        assert!(cps.is_collected(1));
        assert!(!cps.is_collected(2));
        assert_eq!(cps.collected_count(), 2);
        assert!(!cps.all_collected());

        // Grouped partner is already collected, so touching it does nothing
        assert_eq!(cps.capture(&Rect::new(1010.0, 10.0, 49.0, 51.0)), None);
    }

    #[test]
    fn test_capture_only_once() {
        let mut cps = Checkpoints::new(&rects(), &[]).unwrap();
        let player = Rect::new(2000.0, 0.0, 49.0, 51.0);
        assert_eq!(cps.capture(&player), Some((2, Vec2::new(2000.0, 0.0))));
        assert_eq!(cps.capture(&player), None);
        assert!(cps.is_collected(2));
    }

    #[test]
    fn test_all_collected() {
        let mut cps = Checkpoints::new(&rects(), &[vec![1, 2]]).unwrap();
        cps.capture(&Rect::new(0.0, 0.0, 10.0, 10.0));
        cps.capture(&Rect::new(2000.0, 0.0, 10.0, 10.0));
        assert!(cps.all_collected());
        assert_eq!(cps.collected_count(), 3);
    }

    #[test]
    fn test_group_validation() {
        let err = Checkpoints::new(&rects(), &[vec![0, 7]]).unwrap_err();
        assert!(matches!(err, ConfigError::UnknownCheckpoint { index: 7, count: 3 }));

        let err = Checkpoints::new(&rects(), &[vec![0, 1], vec![1, 2]]).unwrap_err();
        assert!(matches!(err, ConfigError::DuplicateGroupMember(1)));
    }

    #[test]
    fn test_empty_level_counts_as_all_collected() {
        let cps = Checkpoints::new(&[], &[]).unwrap();
        assert!(cps.all_collected());
        assert!(cps.is_empty());
    }
}
