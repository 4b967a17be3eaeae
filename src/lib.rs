// SPDX-License-Identifier: MPL-2.0
//! `media_lightbox` is the UI-toolkit-agnostic core of a modal lightbox
//! overlay: the sizing decision for fitting arbitrary-aspect-ratio media
//! into a viewport, and the navigation/session state machine that steps
//! through an ordered media collection.
//!
//! Element construction, styling, input wiring, and image decoding stay in
//! the embedding shell, behind the traits in [`port`]. The shell forwards
//! device events and decode completions to
//! [`controller::NavigationController`]; all core state mutates
//! synchronously on that single logical thread of control.

#![doc(html_root_url = "https://docs.rs/media_lightbox/0.1.0")]

pub mod config;
pub mod controller;
pub mod diagnostics;
pub mod domain;
pub mod error;
pub mod media;
pub mod port;
pub mod session;
pub mod sizing;

#[cfg(test)]
pub(crate) mod test_utils;
