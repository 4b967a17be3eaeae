// SPDX-License-Identifier: MPL-2.0
//! Domain types for the lightbox core.
//!
//! These types represent pure data without any presentation dependencies.
//! The embedding shell converts them to framework-specific geometry and
//! element attributes.

pub mod geometry;
pub mod media;

pub use geometry::{AvailableBox, DisplayBox, DisplaySize, NaturalSize, Viewport, WindowSize};
pub use media::{LoadState, MediaId};
