use std::collections::HashSet;
use winit::event::{ElementState, MouseScrollDelta, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use super::controller::{Button, Controller};

/// Adapter that bridges winit events to the Controller trait.
///
/// Keeps held-key state for per-frame polling and accumulates cursor
/// samples and scroll deltas so the frame driver can drain them once per
/// frame, after all events for that frame have been processed.
#[derive(Debug, Clone)]
pub struct WinitController {
    /// Currently pressed buttons
    pressed_keys: HashSet<Button>,
    /// All pressed buttons as a vec (for efficient get_down_keys)
    pressed_vec: Vec<Button>,
    /// Cursor samples received since the last drain, in event order
    cursor_samples: Vec<(f32, f32)>,
    /// Accumulated scroll delta since the last drain
    scroll_delta: f32,
}

impl WinitController {
    /// Create a new WinitController with no pressed keys
    pub fn new() -> Self {
        Self {
            pressed_keys: HashSet::new(),
            pressed_vec: Vec::new(),
            cursor_samples: Vec::new(),
            scroll_delta: 0.0,
        }
    }

    /// Process a winit WindowEvent and update internal state
    pub fn process_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(keycode) = event.physical_key {
                    if let Some(button) = Self::keycode_to_button(keycode) {
                        match event.state {
                            ElementState::Pressed => {
                                if self.pressed_keys.insert(button) {
                                    self.pressed_vec.push(button);
                                }
                            }
                            ElementState::Released => {
                                if self.pressed_keys.remove(&button) {
                                    self.pressed_vec.retain(|&b| b != button);
                                }
                            }
                        }
                    }
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor_samples
                    .push((position.x as f32, position.y as f32));
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let y = match delta {
                    MouseScrollDelta::LineDelta(_, y) => *y,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32,
                };
                self.scroll_delta += y;
            }
            _ => {}
        }
    }

    /// Take the cursor samples accumulated since the last drain
    pub fn drain_cursor_samples(&mut self) -> Vec<(f32, f32)> {
        std::mem::take(&mut self.cursor_samples)
    }

    /// Take the scroll delta accumulated since the last drain
    pub fn take_scroll_delta(&mut self) -> f32 {
        std::mem::take(&mut self.scroll_delta)
    }

    /// Map winit KeyCode to Button
    fn keycode_to_button(keycode: KeyCode) -> Option<Button> {
        match keycode {
            KeyCode::KeyW => Some(Button::KeyW),
            KeyCode::KeyA => Some(Button::KeyA),
            KeyCode::KeyS => Some(Button::KeyS),
            KeyCode::KeyD => Some(Button::KeyD),
            KeyCode::KeyQ => Some(Button::KeyQ),
            KeyCode::KeyE => Some(Button::KeyE),
            KeyCode::KeyO => Some(Button::KeyO),
            KeyCode::KeyP => Some(Button::KeyP),
            KeyCode::Escape => Some(Button::Escape),
            _ => None,
        }
    }
}

impl Default for WinitController {
    fn default() -> Self {
        Self::new()
    }
}

impl Controller for WinitController {
    fn is_down(&self, button: Button) -> bool {
        self.pressed_keys.contains(&button)
    }

    fn get_down_keys(&self) -> &[Button] {
        &self.pressed_vec
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Note: winit event construction requires internal fields that are not
    // publicly accessible. These tests verify the Controller trait
    // implementation and the accumulator behavior.

    #[test]
    fn test_new_controller_empty() {
        let mut controller = WinitController::new();
        assert!(!controller.is_down(Button::KeyW));
        assert_eq!(controller.get_down_keys().len(), 0);
        assert!(controller.drain_cursor_samples().is_empty());
        assert_eq!(controller.take_scroll_delta(), 0.0);
    }

    #[test]
    fn test_cursor_samples_drain_in_order() {
        let mut controller = WinitController::new();
        controller.cursor_samples.push((400.0, 300.0));
        controller.cursor_samples.push((410.0, 295.0));

        let samples = controller.drain_cursor_samples();
        assert_eq!(samples, vec![(400.0, 300.0), (410.0, 295.0)]);
        assert!(controller.drain_cursor_samples().is_empty());
    }

    #[test]
    fn test_scroll_delta_accumulates_and_resets() {
        let mut controller = WinitController::new();
        controller.scroll_delta += 1.0;
        controller.scroll_delta += -3.0;

        assert_eq!(controller.take_scroll_delta(), -2.0);
        assert_eq!(controller.take_scroll_delta(), 0.0);
    }

    #[test]
    fn test_keycode_mapping_covers_bindings() {
        let cases = [
            (KeyCode::KeyW, Button::KeyW),
            (KeyCode::KeyA, Button::KeyA),
            (KeyCode::KeyS, Button::KeyS),
            (KeyCode::KeyD, Button::KeyD),
            (KeyCode::KeyQ, Button::KeyQ),
            (KeyCode::KeyE, Button::KeyE),
            (KeyCode::KeyO, Button::KeyO),
            (KeyCode::KeyP, Button::KeyP),
            (KeyCode::Escape, Button::Escape),
        ];
        for (keycode, button) in cases {
            assert_eq!(WinitController::keycode_to_button(keycode), Some(button));
        }
        assert_eq!(WinitController::keycode_to_button(KeyCode::KeyZ), None);
    }
}
