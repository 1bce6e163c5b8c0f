//! The fixed set of control signals that drive the cube.
//!
//! A [`ControlState`] is a per-frame snapshot of which [`Control`]s are held.
//! It knows nothing about keys; [`KeyBindings`](crate::KeyBindings) does the
//! mapping from the keyboard.

use std::fmt;

/// One recognized control signal.
///
/// Declaration order is the evaluation order used by
/// [`CubeState::apply`](crate::CubeState::apply): when several controls are
/// active in the same frame their increments compound in this order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Control {
    RotateYNeg,
    RotateYPos,
    RotateXNeg,
    RotateXPos,
    RotateZPos,
    RotateZNeg,
    TranslateUp,
    TranslateDown,
    TranslateLeft,
    TranslateRight,
    ScaleDown,
    ScaleUp,
}

impl Control {
    pub const COUNT: usize = 12;

    /// Every control, in evaluation order.
    pub const ALL: [Control; Self::COUNT] = [
        Control::RotateYNeg,
        Control::RotateYPos,
        Control::RotateXNeg,
        Control::RotateXPos,
        Control::RotateZPos,
        Control::RotateZNeg,
        Control::TranslateUp,
        Control::TranslateDown,
        Control::TranslateLeft,
        Control::TranslateRight,
        Control::ScaleDown,
        Control::ScaleUp,
    ];

    fn bit(self) -> u16 {
        1 << self as u16
    }

    pub fn is_translation(self) -> bool {
        matches!(
            self,
            Control::TranslateUp
                | Control::TranslateDown
                | Control::TranslateLeft
                | Control::TranslateRight
        )
    }
}

/// Which controls are active this frame.
#[derive(Clone, Copy, Default, PartialEq, Eq)]
pub struct ControlState {
    bits: u16,
}

impl ControlState {
    /// No controls active.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, control: Control, active: bool) {
        if active {
            self.bits |= control.bit();
        } else {
            self.bits &= !control.bit();
        }
    }

    /// Builder form of [`set`](Self::set) with `active = true`.
    pub fn with(mut self, control: Control) -> Self {
        self.set(control, true);
        self
    }

    pub fn is_active(&self, control: Control) -> bool {
        self.bits & control.bit() != 0
    }

    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    pub fn clear(&mut self) {
        self.bits = 0;
    }

    /// Active controls in evaluation order.
    pub fn active(&self) -> impl Iterator<Item = Control> + '_ {
        Control::ALL.into_iter().filter(|c| self.is_active(*c))
    }
}

impl FromIterator<Control> for ControlState {
    fn from_iter<I: IntoIterator<Item = Control>>(iter: I) -> Self {
        let mut state = ControlState::new();
        for control in iter {
            state.set(control, true);
        }
        state
    }
}

impl fmt::Debug for ControlState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.active()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_is_in_declaration_order() {
        for (i, control) in Control::ALL.iter().enumerate() {
            assert_eq!(*control as usize, i);
        }
    }

    #[test]
    fn set_and_clear() {
        let mut state = ControlState::new();
        assert!(state.is_empty());

        state.set(Control::ScaleUp, true);
        state.set(Control::RotateYPos, true);
        assert!(state.is_active(Control::ScaleUp));
        assert!(!state.is_active(Control::ScaleDown));

        state.set(Control::ScaleUp, false);
        assert!(!state.is_active(Control::ScaleUp));

        state.clear();
        assert!(state.is_empty());
    }

    #[test]
    fn active_iterates_in_evaluation_order() {
        let state: ControlState = [Control::ScaleUp, Control::TranslateLeft, Control::RotateYPos]
            .into_iter()
            .collect();

        let order: Vec<_> = state.active().collect();
        assert_eq!(
            order,
            vec![Control::RotateYPos, Control::TranslateLeft, Control::ScaleUp]
        );
    }

    #[test]
    fn debug_lists_active_controls() {
        let state = ControlState::new().with(Control::RotateXNeg);
        assert_eq!(format!("{state:?}"), "{RotateXNeg}");
    }
}
