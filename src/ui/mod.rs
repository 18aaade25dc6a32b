// SPDX-License-Identifier: MPL-2.0
//! UI modules: the card component, its toggle state, and the flip transition.

pub mod card;
pub mod state;
pub mod transition;

pub use card::{FlipCard, Message};
