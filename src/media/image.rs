// SPDX-License-Identifier: MPL-2.0
//! Image media item.
//!
//! Wraps an opaque image URL. Attachment requests an asynchronous fetch
//! through the [`ImageFetcher`] port; the decode completion arrives later
//! through the controller and flips the item to `Ready`, at which point a
//! re-attach mounts the content and sizing becomes effective.

use crate::domain::{AvailableBox, LoadState, MediaId, NaturalSize, WindowSize};
use crate::error::MediaError;
use crate::media::MediaItem;
use crate::port::{ImageFetcher, RenderSurface};
use crate::sizing::{self, SizingOptions};
use std::rc::Rc;

pub struct ImageMediaItem {
    id: MediaId,
    url: String,
    fetcher: Rc<dyn ImageFetcher>,
    state: LoadState,
    mounted: bool,
}

impl ImageMediaItem {
    /// Creates an image item for the given source URL. No fetch is issued
    /// until the item is first attached.
    #[must_use]
    pub fn new(id: MediaId, url: impl Into<String>, fetcher: Rc<dyn ImageFetcher>) -> Self {
        Self {
            id,
            url: url.into(),
            fetcher,
            state: LoadState::Pending,
            mounted: false,
        }
    }

    /// The opaque source URL.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl MediaItem for ImageMediaItem {
    fn id(&self) -> &MediaId {
        &self.id
    }

    fn load_state(&self) -> &LoadState {
        &self.state
    }

    fn attach(&mut self, surface: &mut dyn RenderSurface, _autoplay: bool) {
        match &self.state {
            LoadState::Pending => {
                self.state = LoadState::Loading;
                self.fetcher.fetch(&self.id, &self.url);
            }
            LoadState::Loading => {}
            LoadState::Ready(_) => {
                if !self.mounted {
                    surface.mount_media(&self.id);
                    self.mounted = true;
                }
            }
            LoadState::Failed(error) => {
                surface.show_load_error(&self.id, &error.to_string());
            }
        }
    }

    fn set_size(
        &mut self,
        surface: &mut dyn RenderSurface,
        bounds: AvailableBox,
        options: SizingOptions,
    ) -> Option<WindowSize> {
        if !self.mounted {
            return None;
        }
        let natural = self.state.natural_size()?;
        let display = sizing::compute_display_size(natural, bounds, options);
        let window = display.window_within(bounds);
        surface.apply_media_geometry(&self.id, display, window);
        Some(window)
    }

    fn unload(&mut self, surface: &mut dyn RenderSurface) {
        if self.mounted {
            surface.unmount_media(&self.id);
            self.mounted = false;
        }
    }

    fn media_ready(&mut self, natural: NaturalSize) {
        // Decoded dimensions stay cached; a later re-attach mounts
        // without a second fetch.
        self.state = LoadState::Ready(natural);
    }

    fn media_failed(&mut self, error: MediaError) {
        self.state = LoadState::Failed(error);
    }
}

impl std::fmt::Debug for ImageMediaItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageMediaItem")
            .field("id", &self.id)
            .field("url", &self.url)
            .field("state", &self.state)
            .field("mounted", &self.mounted)
            .finish()
    }
}
