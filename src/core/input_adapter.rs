use std::collections::HashSet;
use winit::event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use super::controller::{Button, Controller};

/// Pixel-based wheels report distance in pixels; this many make one line
const PIXELS_PER_LINE: f32 = 40.0;

/// Adapter that bridges Winit events to the Controller trait
#[derive(Debug, Clone)]
pub struct WinitController {
    pressed_keys: HashSet<Button>,
    /// Cursor position in logical pixels
    mouse_position: Option<(f32, f32)>,
    mouse_delta: (f32, f32),
    scroll: f32,
    scale_factor: f64,
}

impl WinitController {
    pub fn new() -> Self {
        Self {
            pressed_keys: HashSet::new(),
            mouse_position: None,
            mouse_delta: (0.0, 0.0),
            scroll: 0.0,
            scale_factor: 1.0,
        }
    }

    /// Cursor events arrive in physical pixels; divide by this to get logical ones
    pub fn set_scale_factor(&mut self, scale_factor: f64) {
        if scale_factor > 0.0 {
            self.scale_factor = scale_factor;
        }
    }

    /// Process a Winit WindowEvent and update internal state
    pub fn process_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(keycode) = event.physical_key {
                    if let Some(button) = Self::keycode_to_button(keycode) {
                        self.set_button(button, event.state);
                    }
                }
            }
            WindowEvent::MouseInput { state, button, .. } => {
                if let Some(btn) = Self::mouse_button_to_button(*button) {
                    self.set_button(btn, *state);
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                let logical = position.to_logical::<f64>(self.scale_factor);
                self.move_pointer(logical.x as f32, logical.y as f32);
            }
            WindowEvent::CursorLeft { .. } => {
                self.mouse_position = None;
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let lines = match delta {
                    MouseScrollDelta::LineDelta(_, y) => *y,
                    MouseScrollDelta::PixelDelta(position) => {
                        (position.y / self.scale_factor) as f32 / PIXELS_PER_LINE
                    }
                };
                self.scroll_by(lines);
            }
            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                self.set_scale_factor(*scale_factor);
            }
            WindowEvent::Focused(false) => {
                // Releases are lost while unfocused.
                self.pressed_keys.clear();
            }
            _ => {}
        }
    }

    pub fn set_button(&mut self, button: Button, state: ElementState) {
        match state {
            ElementState::Pressed => {
                self.pressed_keys.insert(button);
            }
            ElementState::Released => {
                self.pressed_keys.remove(&button);
            }
        }
    }

    /// Move the cursor to a logical position, accumulating the delta
    pub fn move_pointer(&mut self, x: f32, y: f32) {
        if let Some((old_x, old_y)) = self.mouse_position {
            self.mouse_delta.0 += x - old_x;
            self.mouse_delta.1 += y - old_y;
        }
        self.mouse_position = Some((x, y));
    }

    /// Positive `lines` scroll away from the user
    pub fn scroll_by(&mut self, lines: f32) {
        self.scroll += lines;
    }

    /// Reset per-frame state (pointer and scroll deltas)
    /// Call this at the end of each frame after processing input
    pub fn reset_deltas(&mut self) {
        self.mouse_delta = (0.0, 0.0);
        self.scroll = 0.0;
    }

    pub fn mouse_position(&self) -> Option<(f32, f32)> {
        self.mouse_position
    }

    fn keycode_to_button(keycode: KeyCode) -> Option<Button> {
        match keycode {
            KeyCode::ShiftLeft | KeyCode::ShiftRight => Some(Button::Shift),
            KeyCode::ControlLeft | KeyCode::ControlRight => Some(Button::Control),
            KeyCode::Escape => Some(Button::Escape),
            _ => None,
        }
    }

    fn mouse_button_to_button(button: MouseButton) -> Option<Button> {
        match button {
            MouseButton::Left => Some(Button::MouseLeft),
            MouseButton::Right => Some(Button::MouseRight),
            MouseButton::Middle => Some(Button::MouseMiddle),
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

    fn pointer_delta(&self) -> (f32, f32) {
        self.mouse_delta
    }

    fn scroll_delta(&self) -> f32 {
        self.scroll
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Winit events carry device ids that tests cannot build, so these drive
    // the adapter through its public setters.

    #[test]
    fn test_new_controller_empty() {
        let controller = WinitController::new();
        assert!(!controller.is_down(Button::MouseLeft));
        assert_eq!(controller.mouse_position(), None);
        assert_eq!(controller.pointer_delta(), (0.0, 0.0));
        assert_eq!(controller.scroll_delta(), 0.0);
    }

    #[test]
    fn test_first_move_has_no_delta() {
        let mut controller = WinitController::new();
        controller.move_pointer(100.0, 50.0);
        assert_eq!(controller.pointer_delta(), (0.0, 0.0));

        controller.move_pointer(110.0, 45.0);
        controller.move_pointer(112.0, 40.0);
        assert_eq!(controller.pointer_delta(), (12.0, -10.0));
    }

    #[test]
    fn test_delta_reset() {
        let mut controller = WinitController::new();
        controller.move_pointer(100.0, 200.0);
        controller.move_pointer(110.0, 205.0);
        controller.scroll_by(2.0);

        controller.reset_deltas();
        assert_eq!(controller.pointer_delta(), (0.0, 0.0));
        assert_eq!(controller.scroll_delta(), 0.0);
        assert_eq!(controller.mouse_position(), Some((110.0, 205.0)));
    }

    #[test]
    fn test_press_and_release() {
        let mut controller = WinitController::new();
        controller.set_button(Button::MouseLeft, ElementState::Pressed);
        controller.set_button(Button::MouseLeft, ElementState::Pressed);
        assert!(controller.is_down(Button::MouseLeft));

        controller.set_button(Button::MouseRight, ElementState::Pressed);
        controller.set_button(Button::MouseLeft, ElementState::Released);
        assert!(!controller.is_down(Button::MouseLeft));
        assert!(controller.is_down(Button::MouseRight));
    }

    #[test]
    fn test_escape_maps_to_button() {
        let mut controller = WinitController::new();
        let escape = WinitController::keycode_to_button(KeyCode::Escape);
        assert_eq!(escape, Some(Button::Escape));
        assert_eq!(WinitController::keycode_to_button(KeyCode::KeyA), None);

        controller.set_button(Button::Escape, ElementState::Pressed);
        assert!(controller.is_down(Button::Escape));
    }

    #[test]
    fn test_scale_factor_rejects_non_positive() {
        let mut controller = WinitController::new();
        controller.set_scale_factor(0.0);
        assert_eq!(controller.scale_factor, 1.0);
        controller.set_scale_factor(2.0);
        assert_eq!(controller.scale_factor, 2.0);
    }
}
