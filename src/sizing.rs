// SPDX-License-Identifier: MPL-2.0
//! Sizing engine: decides the dimensions at which to render a media item
//! within an available box.
//!
//! The decision policy is ordered; the first matching rule wins:
//!
//! 1. Small image that still fits at double size → render at 2× natural
//!    size with nearest-neighbor scaling.
//! 2. Natural size fits → render as-is.
//! 3. Extremely tall image (height ≥ 4× width) → natural width where
//!    possible, vertical scroll overflow for the height.
//! 4. Extremely wide image (width ≥ 6× height) → mirror of rule 3.
//! 5. Proportional downscale to the largest size fitting both bounds.
//!
//! Rules 3 and 4 deliberately allow the render size to exceed the
//! available box on one axis; the visible window is clipped via
//! [`DisplaySize::window_within`] and the wrapper scrolls internally.

use crate::config::defaults::{
    TALL_ASPECT_RATIO, UPSCALE_FACTOR, UPSCALE_MAX_HEIGHT, UPSCALE_MAX_WIDTH, WIDE_ASPECT_RATIO,
};
use crate::domain::{AvailableBox, DisplaySize, NaturalSize};

/// Tuning knobs for the sizing decision, derived from [`Config`](crate::config::Config).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizingOptions {
    /// Whether rule 1 (small-image 2× upscale) is enabled.
    pub upscale_small: bool,
}

impl Default for SizingOptions {
    fn default() -> Self {
        Self {
            upscale_small: true,
        }
    }
}

/// Computes the render size for a media item with the given natural
/// dimensions inside the given available box.
///
/// The returned dimensions are always positive. The `pixelated` flag is
/// set exactly when the render width exceeds the natural width.
#[must_use]
pub fn compute_display_size(
    natural: NaturalSize,
    bounds: AvailableBox,
    options: SizingOptions,
) -> DisplaySize {
    let (nw, nh) = (natural.width(), natural.height());
    let (mw, mh) = (bounds.width(), bounds.height());

    let (width, height) = if options.upscale_small
        && nw <= UPSCALE_MAX_WIDTH
        && nh <= UPSCALE_MAX_HEIGHT
        && mw >= nw * UPSCALE_FACTOR
        && mh >= nh * UPSCALE_FACTOR
    {
        (nw * UPSCALE_FACTOR, nh * UPSCALE_FACTOR)
    } else if nw <= mw && nh <= mh {
        (nw, nh)
    } else if is_extreme(nh, nw, TALL_ASPECT_RATIO) {
        if nw <= mw {
            // Fits the width; the height overflows into a scrollbar.
            (nw, nh)
        } else {
            (mw, scale(nh, mw, nw))
        }
    } else if is_extreme(nw, nh, WIDE_ASPECT_RATIO) {
        if nh <= mh {
            (nw, nh)
        } else {
            // May still overflow the width; accepted, the window clips it.
            (scale(nw, mh, nh), mh)
        }
    } else {
        let full_width = nw.min(mw);
        let full_height = nh.min(mh);
        let height_at_full_width = full_width as f64 * nh as f64 / nw as f64;

        if height_at_full_width <= mh as f64 {
            (full_width, round_px(height_at_full_width))
        } else {
            let width_at_full_height = full_height as f64 * nw as f64 / nh as f64;
            (round_px(width_at_full_height), full_height)
        }
    };

    DisplaySize {
        width,
        height,
        pixelated: width > nw,
    }
}

/// Checks `major >= ratio * minor` without overflowing `u32`.
fn is_extreme(major: u32, minor: u32, ratio: u32) -> bool {
    u64::from(major) >= u64::from(ratio) * u64::from(minor)
}

/// Uniformly scales `value` by `numerator / denominator`, rounded to the
/// nearest pixel and kept positive.
fn scale(value: u32, numerator: u32, denominator: u32) -> u32 {
    round_px(value as f64 * numerator as f64 / denominator as f64)
}

fn round_px(value: f64) -> u32 {
    (value.round() as u32).max(1)
}
