// SPDX-License-Identifier: MPL-2.0
//! UI state management modules
//!
//! Pure toggle logic for the card, kept free of any rendering toolkit types
//! so it can be exercised without a windowing environment.

pub mod face;

// Re-export commonly used types for convenience
pub use face::{Face, FaceState, FlipDirection};
