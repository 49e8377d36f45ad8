use std::collections::HashSet;

use super::types::{InputEvent, Key, KeyState};

/// Keyboard state for one window.
///
/// Events may arrive at any point between paint callbacks; `on_frame_start`
/// snapshots the presses seen since the previous call into the "typed" set,
/// which then stays stable for every simulation step of that frame.
#[derive(Debug, Default)]
pub struct InputState {
    /// Whether the window is focused.
    pub focused: bool,

    keys_down: HashSet<Key>,
    pending: HashSet<Key>,
    typed: HashSet<Key>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies one event to the held-key state.
    pub fn apply_event(&mut self, ev: &InputEvent) {
        match *ev {
            InputEvent::Focused(f) => {
                self.focused = f;
                if !f {
                    // Releases are never delivered to an unfocused window.
                    self.keys_down.clear();
                }
            }

            InputEvent::Key { key, state, repeat } => match state {
                KeyState::Pressed => {
                    let inserted = self.keys_down.insert(key);
                    if inserted && !repeat {
                        self.pending.insert(key);
                    }
                }
                KeyState::Released => {
                    self.keys_down.remove(&key);
                }
            },
        }
    }

    /// Publishes presses received since the previous frame as typed.
    pub fn on_frame_start(&mut self) {
        self.typed.clear();
        std::mem::swap(&mut self.typed, &mut self.pending);
    }

    pub fn is_key_down(&self, key: Key) -> bool {
        self.keys_down.contains(&key)
    }

    /// True when `key` went down since the previous frame start.
    pub fn is_key_typed(&self, key: Key) -> bool {
        self.typed.contains(&key)
    }

    /// Held keys, in no particular order.
    pub fn keys_down(&self) -> impl Iterator<Item = Key> + '_ {
        self.keys_down.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(key: Key) -> InputEvent {
        InputEvent::Key { key, state: KeyState::Pressed, repeat: false }
    }

    fn release(key: Key) -> InputEvent {
        InputEvent::Key { key, state: KeyState::Released, repeat: false }
    }

    #[test]
    fn down_tracks_press_and_release() {
        let mut s = InputState::new();
        s.apply_event(&press(Key::A));
        assert!(s.is_key_down(Key::A));
        s.apply_event(&release(Key::A));
        assert!(!s.is_key_down(Key::A));
    }

    #[test]
    fn typed_only_after_frame_start_and_for_one_frame() {
        let mut s = InputState::new();
        s.apply_event(&press(Key::Space));
        assert!(!s.is_key_typed(Key::Space));

        s.on_frame_start();
        assert!(s.is_key_typed(Key::Space));

        s.on_frame_start();
        assert!(!s.is_key_typed(Key::Space));
        assert!(s.is_key_down(Key::Space));
    }

    #[test]
    fn tap_between_frames_still_types() {
        let mut s = InputState::new();
        s.apply_event(&press(Key::Enter));
        s.apply_event(&release(Key::Enter));
        s.on_frame_start();
        assert!(s.is_key_typed(Key::Enter));
        assert!(!s.is_key_down(Key::Enter));
    }

    #[test]
    fn repeats_do_not_retype() {
        let mut s = InputState::new();
        s.apply_event(&press(Key::Z));
        s.on_frame_start();
        s.apply_event(&InputEvent::Key { key: Key::Z, state: KeyState::Pressed, repeat: true });
        s.on_frame_start();
        assert!(!s.is_key_typed(Key::Z));
    }

    #[test]
    fn focus_loss_clears_held_keys() {
        let mut s = InputState::new();
        s.apply_event(&InputEvent::Focused(true));
        s.apply_event(&press(Key::ArrowLeft));
        s.apply_event(&InputEvent::Focused(false));
        assert!(!s.focused);
        assert!(!s.is_key_down(Key::ArrowLeft));
        assert_eq!(s.keys_down().count(), 0);
    }
}
