use std::collections::{HashMap, HashSet};

use winit::event::{ElementState, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use crate::controls::{Control, ControlState};

/// Tracks keyboard state between frames.
#[derive(Default)]
pub struct Input {
    keys_down: HashSet<KeyCode>,
    keys_pressed: HashSet<KeyCode>,
    keys_released: HashSet<KeyCode>,
}

impl Input {
    pub fn new() -> Self {
        Self::default()
    }

    /// Call at the end of each frame to reset per-frame state.
    pub fn begin_frame(&mut self) {
        self.keys_pressed.clear();
        self.keys_released.clear();
    }

    /// Process a window event and update input state.
    pub fn handle_event(&mut self, event: &WindowEvent) {
        if let WindowEvent::KeyboardInput { event, .. } = event {
            if let PhysicalKey::Code(key) = event.physical_key {
                match event.state {
                    ElementState::Pressed => self.press(key),
                    ElementState::Released => self.release(key),
                }
            }
        }
    }

    /// Record a key going down. Key repeat does not count as a new press.
    pub fn press(&mut self, key: KeyCode) {
        if self.keys_down.insert(key) {
            self.keys_pressed.insert(key);
        }
    }

    pub fn release(&mut self, key: KeyCode) {
        self.keys_down.remove(&key);
        self.keys_released.insert(key);
    }

    /// Returns true if the key is currently held down.
    pub fn key_down(&self, key: KeyCode) -> bool {
        self.keys_down.contains(&key)
    }

    /// Returns true if the key was pressed this frame.
    pub fn key_pressed(&self, key: KeyCode) -> bool {
        self.keys_pressed.contains(&key)
    }

    /// Returns true if the key was released this frame.
    pub fn key_released(&self, key: KeyCode) -> bool {
        self.keys_released.contains(&key)
    }
}

/// Maps keys to cube controls.
///
/// Defaults:
///
/// | Key   | Control        |
/// |-------|----------------|
/// | A / D | RotateYNeg / RotateYPos |
/// | W / S | RotateXNeg / RotateXPos |
/// | Q / E | RotateZPos / RotateZNeg |
/// | Arrows| Translate      |
/// | Z / X | ScaleDown / ScaleUp |
#[derive(Clone, Debug)]
pub struct KeyBindings {
    bindings: HashMap<KeyCode, Control>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self::empty()
            .bind(KeyCode::KeyA, Control::RotateYNeg)
            .bind(KeyCode::KeyD, Control::RotateYPos)
            .bind(KeyCode::KeyW, Control::RotateXNeg)
            .bind(KeyCode::KeyS, Control::RotateXPos)
            .bind(KeyCode::KeyQ, Control::RotateZPos)
            .bind(KeyCode::KeyE, Control::RotateZNeg)
            .bind(KeyCode::ArrowUp, Control::TranslateUp)
            .bind(KeyCode::ArrowDown, Control::TranslateDown)
            .bind(KeyCode::ArrowLeft, Control::TranslateLeft)
            .bind(KeyCode::ArrowRight, Control::TranslateRight)
            .bind(KeyCode::KeyZ, Control::ScaleDown)
            .bind(KeyCode::KeyX, Control::ScaleUp)
    }
}

impl KeyBindings {
    /// No keys bound.
    pub fn empty() -> Self {
        Self {
            bindings: HashMap::new(),
        }
    }

    /// Binds `key` to `control`, replacing any previous binding for `key`.
    pub fn bind(mut self, key: KeyCode, control: Control) -> Self {
        self.bindings.insert(key, control);
        self
    }

    pub fn control_for(&self, key: KeyCode) -> Option<Control> {
        self.bindings.get(&key).copied()
    }

    /// Samples which controls are held right now.
    pub fn sample(&self, input: &Input) -> ControlState {
        self.bindings
            .iter()
            .filter(|(key, _)| input.key_down(**key))
            .map(|(_, control)| *control)
            .collect()
    }
}
