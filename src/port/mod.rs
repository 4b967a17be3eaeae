// SPDX-License-Identifier: MPL-2.0
//! Ports to the external collaborators of the lightbox core.
//!
//! The core never builds overlay elements, reads device events, or decodes
//! image bytes itself. Those concerns live behind the traits in this
//! module; the embedding shell implements them for its UI toolkit and
//! forwards notifications back through
//! [`NavigationController`](crate::controller::NavigationController).

use crate::domain::{DisplayBox, DisplaySize, MediaId, Viewport, WindowSize};
use std::cell::RefCell;
use std::rc::Rc;

/// Polls the current available on-screen area.
///
/// Queried on demand: once when a session opens and again on every resize
/// notification. No persistent subscription object is required.
pub trait ViewportProvider {
    fn viewport(&self) -> Viewport;
}

/// Accepts insertion and removal of opaque renderable nodes: the overlay
/// backdrop, the centered wrapper with its close affordance, the optional
/// prev/next affordance, and media content.
///
/// Implementations own all element construction and styling. The core only
/// dictates geometry and which nodes exist.
pub trait RenderSurface {
    /// Mounts the overlay backdrop and centered wrapper, sized to the
    /// viewport. Called once per session open.
    fn mount_overlay(&mut self, viewport: Viewport);

    /// Resizes the overlay backdrop after a viewport change.
    fn resize_overlay(&mut self, viewport: Viewport);

    /// Removes the overlay and everything inside it. Called once per
    /// session close.
    fn unmount_overlay(&mut self);

    /// Mounts the prev/next navigation affordance inside the wrapper.
    fn mount_navigation(&mut self);

    /// Positions and sizes the centered wrapper.
    fn place_wrapper(&mut self, frame: DisplayBox);

    /// Inserts the content node for a media item into the wrapper.
    fn mount_media(&mut self, id: &MediaId);

    /// Applies render dimensions and the visible window to a mounted
    /// media node. `display` may exceed `window`; the node then scrolls.
    fn apply_media_geometry(&mut self, id: &MediaId, display: DisplaySize, window: WindowSize);

    /// Removes a media item's content node from the wrapper.
    fn unmount_media(&mut self, id: &MediaId);

    /// Shows a visible error state in place of a media item that failed
    /// to load.
    fn show_load_error(&mut self, id: &MediaId, message: &str);
}

/// Begins an asynchronous fetch/decode of an image source.
///
/// Completion is delivered by the shell calling
/// [`NavigationController::notify_media_ready`](crate::controller::NavigationController::notify_media_ready)
/// or
/// [`notify_media_failed`](crate::controller::NavigationController::notify_media_failed)
/// with the same id.
pub trait ImageFetcher {
    fn fetch(&self, id: &MediaId, url: &str);
}

/// The kinds of device notifications a session registers interest in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventInterest {
    ViewportResize,
    KeyPress,
}

/// Identifies a registration with an [`EventSource`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriptionId(pub u64);

/// Registers and releases interest in device notifications.
///
/// The source itself delivers nothing; the shell forwards matching events
/// to the controller. Registration exists so the shell knows which events
/// the core currently wants, and so cleanup is observable.
pub trait EventSource {
    fn subscribe(&mut self, interest: EventInterest) -> SubscriptionId;
    fn unsubscribe(&mut self, id: SubscriptionId);
}

/// Scoped event registration: unsubscribes on drop.
///
/// A session stores one guard per registration, so every exit path (user
/// close, cancel key, programmatic close, session drop) releases it.
pub struct Subscription {
    source: Rc<RefCell<dyn EventSource>>,
    id: SubscriptionId,
}

impl Subscription {
    /// Registers `interest` with the source and returns the guard.
    #[must_use]
    pub fn new(source: Rc<RefCell<dyn EventSource>>, interest: EventInterest) -> Self {
        let id = source.borrow_mut().subscribe(interest);
        Self { source, id }
    }

    /// Returns the registration id.
    #[must_use]
    pub fn id(&self) -> SubscriptionId {
        self.id
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.source.borrow_mut().unsubscribe(self.id);
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}
