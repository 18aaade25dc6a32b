// SPDX-License-Identifier: MPL-2.0
//! Card face domain types and the tap-toggle state machine.
//!
//! A card rests on one of two faces and a flip moves it to the other one.
//! The machine has no terminal state; it cycles Back ↔ Front indefinitely.

/// The face of the card currently presented to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Face {
    Front,
    Back,
}

/// Direction the flip animation turns the card.
///
/// Revealing the front turns the card from the right edge; returning to the
/// back turns it from the left, so consecutive flips read as one continuous
/// motion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlipDirection {
    FromLeft,
    FromRight,
}

/// Which face the card is resting on.
///
/// The default state shows the **back** face (`is_showing_front == false`),
/// matching the widget's resting position before any interaction.
///
/// # Example
///
/// ```
/// use flip_card::ui::state::{Face, FaceState, FlipDirection};
///
/// let mut state = FaceState::default();
/// assert_eq!(state.visible_face(), Face::Back);
///
/// let direction = state.flip();
/// assert_eq!(state.visible_face(), Face::Front);
/// assert_eq!(direction, FlipDirection::FromRight);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FaceState {
    showing_front: bool,
}

impl FaceState {
    /// Creates a state with the given facing.
    #[must_use]
    pub fn new(showing_front: bool) -> Self {
        Self { showing_front }
    }

    /// Returns true if the front face is visible.
    #[must_use]
    pub fn is_showing_front(self) -> bool {
        self.showing_front
    }

    /// Returns the face currently visible.
    #[must_use]
    pub fn visible_face(self) -> Face {
        if self.showing_front {
            Face::Front
        } else {
            Face::Back
        }
    }

    /// Toggles the visible face and returns the direction the flip that was
    /// just performed should animate in.
    pub fn flip(&mut self) -> FlipDirection {
        self.showing_front = !self.showing_front;
        if self.showing_front {
            FlipDirection::FromRight
        } else {
            FlipDirection::FromLeft
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_shows_back() {
        let state = FaceState::default();
        assert!(!state.is_showing_front());
        assert_eq!(state.visible_face(), Face::Back);
    }

    #[test]
    fn new_respects_requested_facing() {
        assert_eq!(FaceState::new(true).visible_face(), Face::Front);
        assert_eq!(FaceState::new(false).visible_face(), Face::Back);
    }

    #[test]
    fn flip_from_back_reveals_front_from_right() {
        let mut state = FaceState::default();
        let direction = state.flip();
        assert_eq!(state.visible_face(), Face::Front);
        assert_eq!(direction, FlipDirection::FromRight);
    }

    #[test]
    fn flip_from_front_returns_to_back_from_left() {
        let mut state = FaceState::new(true);
        let direction = state.flip();
        assert_eq!(state.visible_face(), Face::Back);
        assert_eq!(direction, FlipDirection::FromLeft);
    }

    #[test]
    fn two_flips_round_trip_to_original_face() {
        let mut state = FaceState::default();
        state.flip();
        state.flip();
        assert_eq!(state.visible_face(), Face::Back);
        assert!(!state.is_showing_front());
    }

    #[test]
    fn flips_cycle_indefinitely() {
        let mut state = FaceState::default();
        for i in 0..10 {
            state.flip();
            let expect_front = i % 2 == 0;
            assert_eq!(state.is_showing_front(), expect_front);
        }
    }

    #[test]
    fn flip_never_repeats_a_face() {
        let mut state = FaceState::default();
        let mut previous = state.visible_face();
        for _ in 0..6 {
            state.flip();
            assert_ne!(state.visible_face(), previous);
            previous = state.visible_face();
        }
    }
}
