//! Logical keys and the per-frame input contract.
//!
//! The core never polls a device. Each frame the driver builds an
//! [`InputSnapshot`] (or any other [`InputSource`]) and passes it down.

use std::collections::HashSet;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    Left,
    Right,
    Jump,
    Shoot,
    Level1,
    Level2,
    Level3,
    Confirm,
    Quit,
}

pub trait InputSource {
    /// Held this frame.
    fn is_down(&self, key: Key) -> bool;
    /// Went down this frame.
    fn was_pressed(&self, key: Key) -> bool;
    /// Went up this frame.
    fn was_released(&self, key: Key) -> bool;

    fn is_up(&self, key: Key) -> bool {
        !self.is_down(key)
    }
}

/// Plain per-frame key state.
#[derive(Clone, Debug, Default)]
pub struct InputSnapshot {
    down: HashSet<Key>,
    pressed: HashSet<Key>,
    released: HashSet<Key>,
}

impl InputSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget the edges of the previous frame; held keys stay held.
    pub fn begin_frame(&mut self) {
        self.pressed.clear();
        self.released.clear();
    }

    pub fn press(&mut self, key: Key) {
        if self.down.insert(key) {
            self.pressed.insert(key);
        }
    }

    pub fn release(&mut self, key: Key) {
        if self.down.remove(&key) {
            self.released.insert(key);
        }
    }

    /// Builder form of [`press`](Self::press).
    pub fn with(mut self, key: Key) -> Self {
        self.press(key);
        self
    }
}

impl InputSource for InputSnapshot {
    fn is_down(&self, key: Key) -> bool {
        self.down.contains(&key)
    }

    fn was_pressed(&self, key: Key) -> bool {
        self.pressed.contains(&key)
    }

    fn was_released(&self, key: Key) -> bool {
        self.released.contains(&key)
    }
}

/// Edge detector owned by the entity that consumes a key.
///
/// Fires once when the key goes down and re-arms only after it is seen up.
#[derive(Clone, Copy, Debug, Default)]
pub struct KeyLatch {
    held: bool,
}

impl KeyLatch {
    pub fn trigger(&mut self, down: bool) -> bool {
        let fired = down && !self.held;
        self.held = down;
        fired
    }
}
