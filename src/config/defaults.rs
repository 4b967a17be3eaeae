// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for layout and configuration constants.
//!
//! This module serves as the single source of truth for the fixed numbers
//! the lightbox layout is built from. Constants are organized by category.
//!
//! # Categories
//!
//! - **Viewport**: inset between the viewport edge and the media box
//! - **Wrapper chrome**: spacing reserved around the centered wrapper
//! - **Upscale**: bounds for the small-image 2× upscale branch
//! - **Extreme aspect**: ratios that switch sizing to scroll-overflow mode
//! - **Diagnostics**: event buffer capacity

// ==========================================================================
// Viewport Defaults
// ==========================================================================

/// Default inset (in pixels) subtracted from each viewport axis to obtain
/// the box available to media content.
pub const DEFAULT_VIEWPORT_INSET: u32 = 64;

// ==========================================================================
// Wrapper Chrome
// ==========================================================================

/// Horizontal spacing (in pixels) reserved around the centered wrapper.
pub const WRAPPER_MARGIN_HORIZONTAL: u32 = 32;

/// Vertical chrome allowance (in pixels) added below the media content for
/// the close affordance row.
pub const WRAPPER_MARGIN_VERTICAL: u32 = 24;

// ==========================================================================
// Upscale Defaults
// ==========================================================================

/// Maximum natural width (in pixels) eligible for the 2× upscale branch.
pub const UPSCALE_MAX_WIDTH: u32 = 400;

/// Maximum natural height (in pixels) eligible for the 2× upscale branch.
pub const UPSCALE_MAX_HEIGHT: u32 = 300;

/// Factor applied when upscaling a small image.
pub const UPSCALE_FACTOR: u32 = 2;

// ==========================================================================
// Extreme Aspect Ratios
// ==========================================================================

/// An image at least this many times taller than wide is rendered at
/// natural width with vertical scroll overflow.
pub const TALL_ASPECT_RATIO: u32 = 4;

/// An image at least this many times wider than tall is rendered at
/// natural height with horizontal scroll overflow.
pub const WIDE_ASPECT_RATIO: u32 = 6;

// ==========================================================================
// Diagnostics Defaults
// ==========================================================================

/// Maximum number of diagnostic events retained in the ring buffer.
pub const DIAGNOSTICS_BUFFER_CAPACITY: usize = 256;
