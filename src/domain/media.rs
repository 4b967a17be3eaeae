// SPDX-License-Identifier: MPL-2.0
//! Media identity and load-state types.

use crate::domain::geometry::NaturalSize;
use crate::error::MediaError;
use std::fmt;

/// Stable identity of a media item, unique within a collection.
///
/// Identity survives collection replacement: an incoming item whose id
/// matches an existing one resolves to the existing object (see
/// [`NavigationController::set_media_items`](crate::controller::NavigationController::set_media_items)).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MediaId(String);

impl MediaId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MediaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for MediaId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Load lifecycle of a media item.
///
/// Content preparation is asynchronous relative to attachment: an item
/// attached while `Pending` moves to `Loading` and only mounts once the
/// decode completion arrives. Sizing requests are no-ops until `Ready`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    /// No load has been requested yet.
    Pending,
    /// A load is in flight; natural dimensions are not yet known.
    Loading,
    /// Natural dimensions are known and content can be mounted.
    Ready(NaturalSize),
    /// The load failed; the item renders an error state instead.
    Failed(MediaError),
}

impl LoadState {
    /// Returns the natural size if the item is ready.
    #[must_use]
    pub fn natural_size(&self) -> Option<NaturalSize> {
        match self {
            LoadState::Ready(size) => Some(*size),
            _ => None,
        }
    }
}
