/// Input button identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    MouseLeft,
    MouseRight,
    MouseMiddle,
    Shift,
    Control,
    Escape,
}

/// Controller - pointer and button state accumulated between frames
pub trait Controller {
    /// Check if button is currently down
    fn is_down(&self, button: Button) -> bool;

    /// Pointer movement in logical pixels since the last reset
    fn pointer_delta(&self) -> (f32, f32);

    /// Scroll distance in lines since the last reset; positive scrolls away from the user
    fn scroll_delta(&self) -> f32;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_button_equality() {
        assert_eq!(Button::MouseLeft, Button::MouseLeft);
        assert_ne!(Button::MouseLeft, Button::MouseRight);
    }

    #[test]
    fn test_button_debug() {
        assert_eq!(format!("{:?}", Button::MouseMiddle), "MouseMiddle");
    }

    #[test]
    fn test_button_hash_duplicates() {
        let mut set = HashSet::new();
        set.insert(Button::Shift);
        set.insert(Button::Shift);

        assert_eq!(set.len(), 1);
    }

    struct MockController {
        pressed: Vec<Button>,
        pointer: (f32, f32),
        scroll: f32,
    }

    impl Controller for MockController {
        fn is_down(&self, button: Button) -> bool {
            self.pressed.contains(&button)
        }

        fn pointer_delta(&self) -> (f32, f32) {
            self.pointer
        }

        fn scroll_delta(&self) -> f32 {
            self.scroll
        }
    }

    #[test]
    fn test_controller_is_down() {
        let controller = MockController {
            pressed: vec![Button::MouseLeft, Button::Shift],
            pointer: (0.0, 0.0),
            scroll: 0.0,
        };

        assert!(controller.is_down(Button::MouseLeft));
        assert!(controller.is_down(Button::Shift));
        assert!(!controller.is_down(Button::MouseRight));
    }

    #[test]
    fn test_controller_no_keys_pressed() {
        let controller = MockController {
            pressed: vec![],
            pointer: (3.0, -2.0),
            scroll: 1.0,
        };

        assert!(!controller.is_down(Button::Escape));
        assert_eq!(controller.pointer_delta(), (3.0, -2.0));
        assert_eq!(controller.scroll_delta(), 1.0);
    }
}
