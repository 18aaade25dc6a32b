// SPDX-License-Identifier: MPL-2.0
//! `flip_card` provides a flippable card image widget for the Iced GUI framework.
//!
//! The widget displays one of two images ("front" and "back") and plays a
//! directional flip transition between them when tapped. It is a leaf
//! component meant to be embedded into a host Iced application.

#![doc(html_root_url = "https://docs.rs/flip_card/0.1.0")]

pub mod config;
pub mod error;
pub mod media;
pub mod ui;

pub use ui::card::FlipCard;
