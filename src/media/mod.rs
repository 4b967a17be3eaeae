// SPDX-License-Identifier: MPL-2.0
//! Media item capability.
//!
//! A media item is anything that can report a stable id, prepare its
//! renderable content, accept a target size, and detach cleanly. The one
//! concrete variant is [`ImageMediaItem`]; the trait exists so future
//! variants (video, animation) slot in without touching the session or
//! controller.

use crate::domain::{AvailableBox, LoadState, MediaId, NaturalSize, WindowSize};
use crate::error::MediaError;
use crate::port::RenderSurface;
use crate::sizing::SizingOptions;
use std::cell::RefCell;
use std::rc::Rc;

pub mod image;

pub use image::ImageMediaItem;

/// A media item owned by a collection and displayed by at most one open
/// session at a time.
pub trait MediaItem {
    /// Stable identity within the collection.
    fn id(&self) -> &MediaId;

    /// Current load lifecycle state.
    fn load_state(&self) -> &LoadState;

    /// Natural dimensions, once known.
    fn natural_size(&self) -> Option<NaturalSize> {
        self.load_state().natural_size()
    }

    /// Begins preparing the item's renderable content and mounts it into
    /// the surface once ready.
    ///
    /// Safe to call repeatedly: a load already in flight is not
    /// re-requested, and ready content is not mounted twice. `autoplay`
    /// is reserved for media with a time axis; images ignore it.
    fn attach(&mut self, surface: &mut dyn RenderSurface, autoplay: bool);

    /// Recomputes and applies the item's display geometry for the given
    /// available box, returning the visible window so the session can
    /// re-center.
    ///
    /// Returns `None` (and touches nothing) until natural dimensions are
    /// known and the content is mounted.
    fn set_size(
        &mut self,
        surface: &mut dyn RenderSurface,
        bounds: AvailableBox,
        options: SizingOptions,
    ) -> Option<WindowSize>;

    /// Removes the item's rendered content from the surface.
    ///
    /// A no-op when the item was never fully mounted.
    fn unload(&mut self, surface: &mut dyn RenderSurface);

    /// Records the decode completion for this item.
    ///
    /// Does not touch the surface; the session re-runs [`MediaItem::attach`]
    /// if this item is still the one on display.
    fn media_ready(&mut self, natural: NaturalSize);

    /// Records a load failure for this item.
    fn media_failed(&mut self, error: MediaError);
}

/// Shared handle to a media item.
///
/// The collection owns items through these handles; an open session holds
/// a clone for the attached item. Identity is handle identity
/// ([`Rc::ptr_eq`]), which is what keeps in-flight state alive across
/// collection replacement.
pub type SharedMediaItem = Rc<RefCell<dyn MediaItem>>;
