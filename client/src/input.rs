//! Keyboard input handling

use std::collections::HashSet;

use game_core::InputSnapshot;
use winit::keyboard::KeyCode;

pub const LEFT_UP: KeyCode = KeyCode::KeyW;
pub const LEFT_DOWN: KeyCode = KeyCode::KeyS;
pub const RIGHT_UP: KeyCode = KeyCode::KeyO;
pub const RIGHT_DOWN: KeyCode = KeyCode::KeyL;
pub const SERVE: KeyCode = KeyCode::KeyG;
pub const QUIT: KeyCode = KeyCode::Escape;

/// Held keys plus a pending window close, turned into one snapshot per frame
#[derive(Debug, Default)]
pub struct KeyState {
    keys_down: HashSet<KeyCode>,
    close_requested: bool,
}

impl KeyState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process a key press event
    pub fn process_key_down(&mut self, key: KeyCode) {
        self.keys_down.insert(key);
    }

    /// Process a key release event
    pub fn process_key_up(&mut self, key: KeyCode) {
        self.keys_down.remove(&key);
    }

    /// Forget held keys, e.g. when the window loses focus and misses releases
    pub fn release_all(&mut self) {
        self.keys_down.clear();
    }

    pub fn request_close(&mut self) {
        self.close_requested = true;
    }

    pub fn is_down(&self, key: KeyCode) -> bool {
        self.keys_down.contains(&key)
    }

    pub fn snapshot(&self) -> InputSnapshot {
        InputSnapshot {
            left_up: self.is_down(LEFT_UP),
            left_down: self.is_down(LEFT_DOWN),
            right_up: self.is_down(RIGHT_UP),
            right_down: self.is_down(RIGHT_DOWN),
            serve: self.is_down(SERVE),
            quit: self.close_requested || self.is_down(QUIT),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_snapshot() {
        assert_eq!(KeyState::new().snapshot(), InputSnapshot::default());
    }

    #[test]
    fn test_player_bindings() {
        let mut keys = KeyState::new();
        keys.process_key_down(KeyCode::KeyW);
        keys.process_key_down(KeyCode::KeyL);

        let snapshot = keys.snapshot();
        assert!(snapshot.left_up);
        assert!(!snapshot.left_down);
        assert!(!snapshot.right_up);
        assert!(snapshot.right_down);
        assert!(!snapshot.serve);
    }

    #[test]
    fn test_key_release() {
        let mut keys = KeyState::new();
        keys.process_key_down(KeyCode::KeyG);
        assert!(keys.snapshot().serve);

        keys.process_key_up(KeyCode::KeyG);
        assert!(!keys.snapshot().serve);
    }

    #[test]
    fn test_arrow_keys_are_not_bound() {
        let mut keys = KeyState::new();
        keys.process_key_down(KeyCode::ArrowUp);
        keys.process_key_down(KeyCode::ArrowDown);
        assert_eq!(keys.snapshot(), InputSnapshot::default());
    }

    #[test]
    fn test_escape_and_close_quit() {
        let mut keys = KeyState::new();
        keys.process_key_down(KeyCode::Escape);
        assert!(keys.snapshot().quit);

        let mut keys = KeyState::new();
        keys.request_close();
        assert!(keys.snapshot().quit);
    }

    #[test]
    fn test_release_all_keeps_close_request() {
        let mut keys = KeyState::new();
        keys.process_key_down(KeyCode::KeyS);
        keys.process_key_down(KeyCode::KeyO);
        keys.request_close();

        keys.release_all();

        let snapshot = keys.snapshot();
        assert!(!snapshot.left_down && !snapshot.right_up);
        assert!(snapshot.quit);
    }
}
