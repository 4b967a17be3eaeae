// SPDX-License-Identifier: MPL-2.0
//! Lightbox session: the live, open instance of the overlay.
//!
//! A session exists only while the overlay is open. On open it registers
//! interest in viewport-resize and key-press notifications; on close it
//! releases them unconditionally through [`Subscription`] drop guards, so
//! every exit path (cancel key, user close, programmatic close) cleans up.
//!
//! The session binds at most one attached media item at a time and owns
//! the centering geometry of the display box.

use crate::config::Config;
use crate::domain::{AvailableBox, DisplayBox, MediaId, WindowSize};
use crate::media::SharedMediaItem;
use crate::port::{EventInterest, EventSource, RenderSurface, Subscription, ViewportProvider};
use crate::sizing::SizingOptions;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// A device key, by code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyCode(pub u32);

impl KeyCode {
    pub const ESCAPE: KeyCode = KeyCode(27);
    pub const ARROW_LEFT: KeyCode = KeyCode(37);
    pub const ARROW_RIGHT: KeyCode = KeyCode(39);
}

/// Zero-argument actions a key can be bound to while a session is open.
///
/// The session owns the mapping; the controller executes the action, since
/// navigation needs collection state the session does not have.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    CloseLightbox,
    NavigatePrevious,
    NavigateNext,
}

/// Layout and sizing knobs resolved from [`Config`] once, at session open.
#[derive(Debug, Clone, Copy)]
pub struct SessionOptions {
    pub viewport_inset: u32,
    pub sizing: SizingOptions,
}

impl SessionOptions {
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self {
            viewport_inset: config.viewport_inset(),
            sizing: SizingOptions {
                upscale_small: config.upscale_small_images(),
            },
        }
    }
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

pub struct LightboxSession {
    surface: Rc<RefCell<dyn RenderSurface>>,
    viewport: Rc<dyn ViewportProvider>,
    subscriptions: Vec<Subscription>,
    key_actions: HashMap<KeyCode, KeyAction>,
    attached: Option<SharedMediaItem>,
    options: SessionOptions,
    open: bool,
    on_close: Option<Box<dyn FnMut()>>,
}

impl LightboxSession {
    /// Opens a session: registers event interest, mounts the overlay at
    /// the current viewport size, and binds the cancel key.
    #[must_use]
    pub fn open(
        surface: Rc<RefCell<dyn RenderSurface>>,
        viewport: Rc<dyn ViewportProvider>,
        events: Rc<RefCell<dyn EventSource>>,
        options: SessionOptions,
    ) -> Self {
        let subscriptions = vec![
            Subscription::new(events.clone(), EventInterest::ViewportResize),
            Subscription::new(events, EventInterest::KeyPress),
        ];

        let initial = viewport.viewport();
        surface.borrow_mut().mount_overlay(initial);

        let mut key_actions = HashMap::new();
        key_actions.insert(KeyCode::ESCAPE, KeyAction::CloseLightbox);

        Self {
            surface,
            viewport,
            subscriptions,
            key_actions,
            attached: None,
            options,
            open: true,
            on_close: None,
        }
    }

    /// Whether the session is still open.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Registers an observer invoked exactly once, when the session
    /// closes.
    pub fn set_on_close(&mut self, on_close: Box<dyn FnMut()>) {
        self.on_close = Some(on_close);
    }

    /// Binds a key to an action for the lifetime of this session.
    pub fn bind_key(&mut self, code: KeyCode, action: KeyAction) {
        self.key_actions.insert(code, action);
    }

    /// Looks up the action bound to a key code.
    #[must_use]
    pub fn action_for(&self, code: KeyCode) -> Option<KeyAction> {
        self.key_actions.get(&code).copied()
    }

    /// Mounts the prev/next affordance. Called by the controller only when
    /// the collection holds more than one item.
    pub fn mount_navigation(&mut self) {
        self.surface.borrow_mut().mount_navigation();
    }

    /// Id of the currently attached item, if any.
    #[must_use]
    pub fn attached_id(&self) -> Option<MediaId> {
        self.attached.as_ref().map(|item| item.borrow().id().clone())
    }

    /// Attaches a media item and computes its initial geometry.
    ///
    /// The previous item must have been detached first; there is no
    /// implicit replace.
    pub fn attach(&mut self, item: SharedMediaItem, autoplay: bool) {
        debug_assert!(self.open, "attach on a closed session");
        debug_assert!(
            self.attached.is_none(),
            "detach the current item before attaching another"
        );
        self.attached = Some(item.clone());
        item.borrow_mut()
            .attach(&mut *self.surface.borrow_mut(), autoplay);
        self.layout_attached();
    }

    /// Unloads and clears the attached item, if any.
    pub fn detach(&mut self) {
        if let Some(item) = self.attached.take() {
            item.borrow_mut().unload(&mut *self.surface.borrow_mut());
        }
    }

    /// Re-runs attachment for the current item. Used after its decode
    /// completion arrives: the item mounts now that it is ready (or shows
    /// its error state) and geometry is recomputed.
    pub fn refresh_attached(&mut self) {
        let Some(item) = self.attached.clone() else {
            return;
        };
        item.borrow_mut()
            .attach(&mut *self.surface.borrow_mut(), false);
        self.layout_attached();
    }

    /// Recomputes overlay and media geometry after a viewport change.
    pub fn handle_resize(&mut self) {
        let viewport = self.viewport.viewport();
        self.surface.borrow_mut().resize_overlay(viewport);
        self.layout_attached();
    }

    /// Closes the session: unloads the attached item, releases event
    /// registrations, removes the overlay, and fires the close observer.
    ///
    /// Idempotent: closing an already-closed session is a no-op.
    pub fn close(&mut self) {
        if !self.open {
            return;
        }
        self.open = false;
        self.detach();
        self.subscriptions.clear();
        self.surface.borrow_mut().unmount_overlay();
        if let Some(on_close) = self.on_close.as_mut() {
            on_close();
        }
    }

    /// The box currently available to media content.
    #[must_use]
    pub fn available_box(&self) -> AvailableBox {
        AvailableBox::from_viewport(self.viewport.viewport(), self.options.viewport_inset)
    }

    fn layout_attached(&mut self) {
        let Some(item) = self.attached.clone() else {
            return;
        };
        let bounds = self.available_box();
        let window = item
            .borrow_mut()
            .set_size(&mut *self.surface.borrow_mut(), bounds, self.options.sizing);
        if let Some(window) = window {
            self.place_wrapper(window);
        }
    }

    fn place_wrapper(&mut self, window: WindowSize) {
        let viewport = self.viewport.viewport();
        let frame = DisplayBox::centered(window, viewport);
        self.surface.borrow_mut().place_wrapper(frame);
    }
}

impl std::fmt::Debug for LightboxSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LightboxSession")
            .field("open", &self.open)
            .field("attached_id", &self.attached_id())
            .field("subscriptions", &self.subscriptions)
            .finish()
    }
}
