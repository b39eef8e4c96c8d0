use std::collections::HashSet;

use super::frame::InputFrame;
use super::types::{ButtonState, InputEvent, Key, MouseButton};

/// Current input state for a single window.
///
/// Holds "is down" information and current pointer position.
/// Per-frame transitions are recorded into an `InputFrame`.
#[derive(Debug, Default)]
pub struct InputState {
    /// Whether the window is focused.
    pub focused: bool,

    /// Pointer position in logical pixels.
    pub pointer_pos: Option<(f32, f32)>,

    /// Set of currently held keys.
    pub keys_down: HashSet<Key>,

    /// Set of currently held mouse buttons.
    pub buttons_down: HashSet<MouseButton>,
}

impl InputState {
    /// Applies a platform-agnostic input event to the current state and writes deltas to `frame`.
    pub fn apply_event(&mut self, frame: &mut InputFrame, ev: InputEvent) {
        match &ev {
            InputEvent::Focused(f) => {
                self.focused = *f;
                if !*f {
                    // Avoids stuck keys/buttons when focus changes mid-press.
                    self.keys_down.clear();
                    self.buttons_down.clear();
                }
            }

            InputEvent::PointerMoved { x, y } => {
                if let Some((px, py)) = self.pointer_pos {
                    frame.pointer_delta.0 += x - px;
                    frame.pointer_delta.1 += y - py;
                }
                self.pointer_pos = Some((*x, *y));
            }

            InputEvent::PointerLeft => {
                self.pointer_pos = None;
            }

            InputEvent::Key { key, state, repeat } => match state {
                ButtonState::Pressed => {
                    if self.keys_down.insert(*key) && !*repeat {
                        frame.keys_pressed.insert(*key);
                    }
                }
                ButtonState::Released => {
                    self.keys_down.remove(key);
                }
            },

            InputEvent::PointerButton { button, state, x, y } => {
                self.pointer_pos = Some((*x, *y));

                match state {
                    ButtonState::Pressed => {
                        if self.buttons_down.insert(*button) {
                            frame.buttons_pressed.insert(*button);
                        }
                    }
                    ButtonState::Released => {
                        if self.buttons_down.remove(button) {
                            frame.buttons_released.insert(*button);
                        }
                    }
                }
            }

            InputEvent::MouseWheel(delta) => {
                frame.wheel_lines += delta.lines_y();
            }
        }

        frame.push_event(ev);
    }

    pub fn button_down(&self, btn: MouseButton) -> bool {
        self.buttons_down.contains(&btn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::MouseWheelDelta;

    fn apply(state: &mut InputState, frame: &mut InputFrame, events: &[InputEvent]) {
        for ev in events {
            state.apply_event(frame, ev.clone());
        }
    }

    #[test]
    fn pointer_delta_accumulates_after_first_position() {
        let (mut state, mut frame) = (InputState::default(), InputFrame::default());
        apply(&mut state, &mut frame, &[
            InputEvent::PointerMoved { x: 10.0, y: 10.0 },
            InputEvent::PointerMoved { x: 15.0, y: 8.0 },
            InputEvent::PointerMoved { x: 20.0, y: 12.0 },
        ]);
        assert_eq!(frame.pointer_delta, (10.0, 2.0));
        assert_eq!(state.pointer_pos, Some((20.0, 12.0)));
        assert_eq!(frame.events.len(), 3);
    }

    #[test]
    fn key_repeat_is_not_a_new_press() {
        let (mut state, mut frame) = (InputState::default(), InputFrame::default());
        let press = |repeat| InputEvent::Key { key: Key::Digit(1), state: ButtonState::Pressed, repeat };

        apply(&mut state, &mut frame, &[press(false)]);
        assert!(frame.key_pressed(Key::Digit(1)));

        frame.clear();
        apply(&mut state, &mut frame, &[press(true)]);
        assert!(!frame.key_pressed(Key::Digit(1)));
        assert!(state.keys_down.contains(&Key::Digit(1)));
    }

    #[test]
    fn focus_loss_releases_everything() {
        let (mut state, mut frame) = (InputState::default(), InputFrame::default());
        apply(&mut state, &mut frame, &[
            InputEvent::PointerButton { button: MouseButton::Left, state: ButtonState::Pressed, x: 0.0, y: 0.0 },
            InputEvent::Key { key: Key::Space, state: ButtonState::Pressed, repeat: false },
            InputEvent::Focused(false),
        ]);
        assert!(!state.button_down(MouseButton::Left));
        assert!(state.keys_down.is_empty());
    }

    #[test]
    fn wheel_accumulates_lines_and_clear_resets() {
        let (mut state, mut frame) = (InputState::default(), InputFrame::default());
        apply(&mut state, &mut frame, &[
            InputEvent::MouseWheel(MouseWheelDelta::Line { x: 0.0, y: 1.0 }),
            InputEvent::MouseWheel(MouseWheelDelta::Pixel { x: 0.0, y: 20.0 }),
        ]);
        assert_eq!(frame.wheel_lines, 1.5);

        frame.clear();
        assert_eq!(frame.wheel_lines, 0.0);
        assert!(frame.events.is_empty());
    }

    #[test]
    fn button_release_is_recorded_once() {
        let (mut state, mut frame) = (InputState::default(), InputFrame::default());
        let release = InputEvent::PointerButton {
            button: MouseButton::Right,
            state: ButtonState::Released,
            x: 0.0,
            y: 0.0,
        };
        apply(&mut state, &mut frame, &[release]);
        assert!(frame.buttons_released.is_empty());
    }
}
