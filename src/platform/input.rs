//! Keyboard mapping
//!
//! The host reports which keys are held each frame. Movement, jump and reset
//! follow the held state; prompt answers fire only on the frame a key goes down.

use std::collections::HashSet;

use crate::sim::TickInput;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    A,
    D,
    W,
    Left,
    Right,
    Up,
    Space,
    R,
    Y,
    N,
    Escape,
}

/// Keys held during one frame
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputSnapshot {
    held: HashSet<Key>,
}

impl InputSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_keys(keys: impl IntoIterator<Item = Key>) -> Self {
        Self {
            held: keys.into_iter().collect(),
        }
    }

    pub fn press(&mut self, key: Key) {
        self.held.insert(key);
    }

    pub fn release(&mut self, key: Key) {
        self.held.remove(&key);
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.held.contains(&key)
    }

    fn any(&self, keys: &[Key]) -> bool {
        keys.iter().any(|&k| self.is_held(k))
    }
}

/// What the host should do this frame
#[derive(Debug, Clone, Default)]
pub struct Intents {
    pub tick: TickInput,
    pub quit: bool,
}

/// Turns key snapshots into intents, remembering the previous frame
#[derive(Debug, Clone, Default)]
pub struct InputMapper {
    previous: InputSnapshot,
}

impl InputMapper {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn map(&mut self, snapshot: &InputSnapshot) -> Intents {
        let pressed = |key: Key| snapshot.is_held(key) && !self.previous.is_held(key);

        let choice = if pressed(Key::Y) {
            Some(true)
        } else if pressed(Key::N) {
            Some(false)
        } else {
            None
        };

        let intents = Intents {
            tick: TickInput {
                move_left: snapshot.any(&[Key::A, Key::Left]),
                move_right: snapshot.any(&[Key::D, Key::Right]),
                jump: snapshot.any(&[Key::Space, Key::W, Key::Up]),
                reset: snapshot.is_held(Key::R),
                choice,
                start: snapshot.is_held(Key::Space),
            },
            quit: snapshot.is_held(Key::Escape),
        };

        self.previous = snapshot.clone();
        intents
    }
}
