// SPDX-License-Identifier: MPL-2.0
//! Media loading for the card faces.

pub mod image;

pub use image::{load_image, ImageData};
