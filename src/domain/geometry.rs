// SPDX-License-Identifier: MPL-2.0
//! Geometry newtypes used by the sizing engine and session layout.
//!
//! All values are integer pixels. Sizing math happens in `f64` internally
//! and is rounded to the nearest pixel at the boundary, so these types
//! never carry fractional values.

use crate::config::defaults;

/// The available on-screen area reported by the external size provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    /// Viewport width in pixels.
    pub width: u32,
    /// Viewport height in pixels.
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// The box available to media content: the viewport minus a fixed inset on
/// each axis.
///
/// Never collapses to zero; a degenerate viewport still yields a 1×1 box so
/// sizing arithmetic stays well defined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AvailableBox {
    width: u32,
    height: u32,
}

impl AvailableBox {
    /// Creates an available box with explicit bounds.
    ///
    /// # Panics
    ///
    /// Panics if either bound is zero.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        assert!(
            width > 0 && height > 0,
            "available box must be positive, got {width}x{height}"
        );
        Self { width, height }
    }

    /// Derives the available box from a viewport, subtracting `inset` from
    /// each axis and clamping to at least one pixel.
    #[must_use]
    pub fn from_viewport(viewport: Viewport, inset: u32) -> Self {
        Self {
            width: viewport.width.saturating_sub(inset).max(1),
            height: viewport.height.saturating_sub(inset).max(1),
        }
    }

    /// Maximum media width in pixels.
    #[must_use]
    pub fn width(self) -> u32 {
        self.width
    }

    /// Maximum media height in pixels.
    #[must_use]
    pub fn height(self) -> u32 {
        self.height
    }
}

/// Intrinsic dimensions of a media item, as reported by its decoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NaturalSize {
    width: u32,
    height: u32,
}

impl NaturalSize {
    /// Creates a natural size from decoded dimensions.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero. Decode completions are validated
    /// before reaching this constructor (see
    /// [`MediaError::InvalidDimensions`](crate::error::MediaError)).
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        assert!(
            width > 0 && height > 0,
            "natural size must be positive, got {width}x{height}"
        );
        Self { width, height }
    }

    /// Natural width in pixels.
    #[must_use]
    pub fn width(self) -> u32 {
        self.width
    }

    /// Natural height in pixels.
    #[must_use]
    pub fn height(self) -> u32 {
        self.height
    }
}

/// The dimensions at which to render a media item, plus the
/// nearest-neighbor scaling hint.
///
/// `width`/`height` may exceed the available box for extreme aspect
/// ratios; the visible window is then clipped (see
/// [`DisplaySize::window_within`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplaySize {
    /// Render width in pixels.
    pub width: u32,
    /// Render height in pixels.
    pub height: u32,
    /// True when the render size exceeds the natural size, warranting
    /// crisp (non-smoothed) scaling.
    pub pixelated: bool,
}

impl DisplaySize {
    /// Returns the visible (clipped) window for this render size within
    /// the given bounds: `min(width, max)` on each axis.
    #[must_use]
    pub fn window_within(self, bounds: AvailableBox) -> WindowSize {
        WindowSize {
            width: self.width.min(bounds.width()),
            height: self.height.min(bounds.height()),
        }
    }
}

/// The visible portion of a rendered media item. Differs from
/// [`DisplaySize`] only when scroll overflow applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowSize {
    /// Visible width in pixels.
    pub width: u32,
    /// Visible height in pixels.
    pub height: u32,
}

/// Position and size of the centered wrapper within the viewport.
///
/// `left`/`top` are signed: a window larger than the viewport centers to a
/// negative origin rather than clamping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayBox {
    pub left: i32,
    pub top: i32,
    pub width: u32,
    pub height: u32,
}

impl DisplayBox {
    /// Computes the wrapper geometry for a media window centered in the
    /// viewport, with the fixed chrome allowance around it.
    #[must_use]
    pub fn centered(window: WindowSize, viewport: Viewport) -> Self {
        let margin_x = defaults::WRAPPER_MARGIN_HORIZONTAL;
        let margin_y = defaults::WRAPPER_MARGIN_VERTICAL;
        Self {
            left: (viewport.width as i32 - (window.width + margin_x) as i32) / 2,
            top: (viewport.height as i32 - (window.height + margin_y) as i32) / 2,
            width: window.width,
            height: window.height + margin_y,
        }
    }
}
