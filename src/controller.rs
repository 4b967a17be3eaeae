// SPDX-License-Identifier: MPL-2.0
//! Navigation controller: owns the ordered media collection, the cursor,
//! and the open session (if any).
//!
//! This is the single entry point for the embedding shell. Device events
//! and decode completions all arrive here; the controller mutates state
//! synchronously and drives the session.

use crate::config::Config;
use crate::diagnostics::{DiagnosticEvent, DiagnosticsLog, IgnoredNavigation};
use crate::domain::{MediaId, NaturalSize};
use crate::error::MediaError;
use crate::media::SharedMediaItem;
use crate::port::{EventSource, RenderSurface, ViewportProvider};
use crate::session::{KeyAction, KeyCode, LightboxSession, SessionOptions};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

pub struct NavigationController {
    items: Vec<SharedMediaItem>,
    items_by_id: HashMap<MediaId, SharedMediaItem>,
    current_id: Option<MediaId>,
    current_index: usize,
    session: Option<LightboxSession>,
    surface: Rc<RefCell<dyn RenderSurface>>,
    viewport: Rc<dyn ViewportProvider>,
    events: Rc<RefCell<dyn EventSource>>,
    options: SessionOptions,
    diagnostics: DiagnosticsLog,
    on_navigate: Option<Box<dyn FnMut(&MediaId)>>,
}

impl NavigationController {
    /// Creates a controller with an empty collection and no open session.
    #[must_use]
    pub fn new(
        surface: Rc<RefCell<dyn RenderSurface>>,
        viewport: Rc<dyn ViewportProvider>,
        events: Rc<RefCell<dyn EventSource>>,
        config: &Config,
    ) -> Self {
        Self {
            items: Vec::new(),
            items_by_id: HashMap::new(),
            current_id: None,
            current_index: 0,
            session: None,
            surface,
            viewport,
            events,
            options: SessionOptions::from_config(config),
            diagnostics: DiagnosticsLog::default(),
            on_navigate: None,
        }
    }

    /// Registers an observer fired after every `prev`/`next` navigation.
    pub fn set_on_navigate(&mut self, on_navigate: Box<dyn FnMut(&MediaId)>) {
        self.on_navigate = Some(on_navigate);
    }

    /// Replaces the managed collection.
    ///
    /// An incoming item whose id matches an existing item resolves to the
    /// existing object, preserving in-flight load state and attachment on
    /// an item still being displayed. If the current id appears in the new
    /// list the cursor index follows it; otherwise the index is left
    /// unchanged (stale), which is tolerated while the lightbox is closed.
    pub fn set_media_items(&mut self, incoming: Vec<SharedMediaItem>) {
        let mut items = Vec::with_capacity(incoming.len());
        let mut items_by_id = HashMap::with_capacity(incoming.len());

        for candidate in incoming {
            let id = candidate.borrow().id().clone();
            let item = self.items_by_id.get(&id).cloned().unwrap_or(candidate);

            if self.current_id.as_ref() == Some(&id) {
                self.current_index = items.len();
            }
            items_by_id.insert(id, item.clone());
            items.push(item);
        }

        self.items = items;
        self.items_by_id = items_by_id;
    }

    /// Number of items in the collection.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the collection is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Id of the item the cursor points at, if any.
    #[must_use]
    pub fn current_id(&self) -> Option<&MediaId> {
        self.current_id.as_ref()
    }

    /// Cursor position within the collection.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Whether a session is currently open.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.session.is_some()
    }

    /// Read access to the diagnostic event log.
    #[must_use]
    pub fn diagnostics(&self) -> &DiagnosticsLog {
        &self.diagnostics
    }

    /// Opens a session if none is open. No-op otherwise.
    ///
    /// The prev/next affordance and arrow-key bindings are added only when
    /// the collection holds more than one item.
    pub fn open_lightbox(&mut self) {
        if self.session.is_some() {
            return;
        }

        let mut session = LightboxSession::open(
            self.surface.clone(),
            self.viewport.clone(),
            self.events.clone(),
            self.options,
        );

        if self.items.len() > 1 {
            session.mount_navigation();
            session.bind_key(KeyCode::ARROW_LEFT, KeyAction::NavigatePrevious);
            session.bind_key(KeyCode::ARROW_RIGHT, KeyAction::NavigateNext);
        }

        self.session = Some(session);
    }

    /// Closes the open session, if any, and clears the reference to it.
    pub fn close_lightbox(&mut self) {
        if let Some(mut session) = self.session.take() {
            session.close();
        }
    }

    /// Steps the cursor backwards, wrapping past the first item.
    pub fn prev(&mut self) {
        let Some(len) = self.navigable_len() else {
            return;
        };
        self.navigate_to((self.current_index + len - 1) % len);
    }

    /// Steps the cursor forwards, wrapping past the last item.
    pub fn next(&mut self) {
        let Some(len) = self.navigable_len() else {
            return;
        };
        self.navigate_to((self.current_index + 1) % len);
    }

    /// Opens the lightbox at the item with the given id.
    ///
    /// An unknown id is ignored: no session opens and controller state is
    /// unchanged (a diagnostic is recorded).
    pub fn open_at_id(&mut self, id: &MediaId) {
        let Some(item) = self.items_by_id.get(id).cloned() else {
            self.diagnostics.record(DiagnosticEvent::UnknownMediaId {
                id: id.to_string(),
            });
            return;
        };

        self.open_lightbox();
        if let Some(session) = self.session.as_mut() {
            session.detach();
            session.attach(item, true);
        }
        self.current_id = Some(id.clone());
        if let Some(position) = self
            .items
            .iter()
            .position(|item| item.borrow().id() == id)
        {
            self.current_index = position;
        }
    }

    /// Routes a key press through the open session's key-action mapping.
    /// Ignored while no session is open or for unbound keys.
    pub fn handle_key(&mut self, code: KeyCode) {
        let Some(action) = self
            .session
            .as_ref()
            .and_then(|session| session.action_for(code))
        else {
            return;
        };
        match action {
            KeyAction::CloseLightbox => self.close_lightbox(),
            KeyAction::NavigatePrevious => self.prev(),
            KeyAction::NavigateNext => self.next(),
        }
    }

    /// Forwards a viewport-size change to the open session.
    pub fn handle_resize(&mut self) {
        if let Some(session) = self.session.as_mut() {
            session.handle_resize();
        }
    }

    /// Records a decode completion for the item with the given id.
    ///
    /// Completions for ids no longer in the collection are dropped (a
    /// diagnostic is recorded). Zero dimensions are treated as a load
    /// failure. If the item is currently attached to the open session,
    /// the session mounts and lays it out now; otherwise only the item's
    /// state is updated.
    pub fn notify_media_ready(&mut self, id: &MediaId, width: u32, height: u32) {
        let Some(item) = self.items_by_id.get(id).cloned() else {
            self.diagnostics.record(DiagnosticEvent::StaleMediaReady {
                id: id.to_string(),
            });
            return;
        };

        if width == 0 || height == 0 {
            self.notify_media_failed(id, MediaError::InvalidDimensions { width, height });
            return;
        }

        item.borrow_mut()
            .media_ready(NaturalSize::new(width, height));
        self.refresh_if_attached(id);
    }

    /// Records a load failure for the item with the given id.
    ///
    /// The item moves to the failed state; if it is the one on display,
    /// the session shows a visible error state in its place.
    pub fn notify_media_failed(&mut self, id: &MediaId, error: MediaError) {
        let Some(item) = self.items_by_id.get(id).cloned() else {
            self.diagnostics.record(DiagnosticEvent::StaleMediaReady {
                id: id.to_string(),
            });
            return;
        };

        self.diagnostics.record(DiagnosticEvent::MediaLoadFailed {
            id: id.to_string(),
            message: error.to_string(),
        });
        item.borrow_mut().media_failed(error);
        self.refresh_if_attached(id);
    }

    fn refresh_if_attached(&mut self, id: &MediaId) {
        if let Some(session) = self.session.as_mut() {
            if session.attached_id().as_ref() == Some(id) {
                session.refresh_attached();
            }
        }
    }

    /// Guards navigation: returns the collection length only when both a
    /// non-empty collection and an open session exist.
    fn navigable_len(&mut self) -> Option<usize> {
        if self.items.is_empty() {
            self.diagnostics.record(DiagnosticEvent::NavigationIgnored {
                reason: IgnoredNavigation::EmptyCollection,
            });
            return None;
        }
        if self.session.is_none() {
            self.diagnostics.record(DiagnosticEvent::NavigationIgnored {
                reason: IgnoredNavigation::NoOpenSession,
            });
            return None;
        }
        Some(self.items.len())
    }

    fn navigate_to(&mut self, index: usize) {
        self.current_index = index;
        let item = self.items[index].clone();
        let id = item.borrow().id().clone();
        self.current_id = Some(id.clone());

        if let Some(session) = self.session.as_mut() {
            session.detach();
            session.attach(item, false);
        }

        if let Some(on_navigate) = self.on_navigate.as_mut() {
            on_navigate(&id);
        }
    }
}

impl std::fmt::Debug for NavigationController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NavigationController")
            .field("len", &self.items.len())
            .field("current_id", &self.current_id)
            .field("current_index", &self.current_index)
            .field("open", &self.is_open())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Viewport;
    use crate::media::ImageMediaItem;
    use crate::test_utils::{FakeEventSource, FakeFetcher, FakeSurface, FakeViewport, SurfaceOp};

    struct Harness {
        surface: Rc<RefCell<FakeSurface>>,
        viewport: Rc<FakeViewport>,
        events: Rc<RefCell<FakeEventSource>>,
        fetcher: Rc<FakeFetcher>,
    }

    impl Harness {
        fn new() -> Self {
            Self {
                surface: Rc::new(RefCell::new(FakeSurface::default())),
                viewport: Rc::new(FakeViewport::new(Viewport::new(1064, 864))),
                events: Rc::new(RefCell::new(FakeEventSource::default())),
                fetcher: Rc::new(FakeFetcher::default()),
            }
        }

        fn controller(&self) -> NavigationController {
            NavigationController::new(
                self.surface.clone(),
                self.viewport.clone(),
                self.events.clone(),
                &Config::default(),
            )
        }

        fn item(&self, id: &str) -> SharedMediaItem {
            Rc::new(RefCell::new(ImageMediaItem::new(
                MediaId::new(id),
                format!("https://example.test/{id}.png"),
                self.fetcher.clone(),
            )))
        }

        fn ready_item(&self, id: &str) -> SharedMediaItem {
            let item = self.item(id);
            item.borrow_mut().media_ready(NaturalSize::new(400, 400));
            item
        }
    }

    #[test]
    fn set_media_items_keeps_existing_object_for_matching_id() {
        let harness = Harness::new();
        let mut controller = harness.controller();

        let a = harness.item("a");
        let b = harness.item("b");
        let c = harness.item("c");
        controller.set_media_items(vec![a, b.clone(), c.clone()]);
        controller.open_lightbox();
        controller.open_at_id(&MediaId::new("b"));
        assert_eq!(controller.current_index(), 1);

        // Replace with [b', c, d]; b' carries b's id.
        let b_replacement = harness.item("b");
        let d = harness.item("d");
        controller.set_media_items(vec![b_replacement.clone(), c, d]);

        // The original b object survives at index 0 and the cursor follows.
        assert_eq!(controller.current_index(), 0);
        assert_eq!(controller.current_id(), Some(&MediaId::new("b")));
        assert!(!Rc::ptr_eq(&controller.items[0], &b_replacement));
        assert!(Rc::ptr_eq(&controller.items[0], &b));
    }

    #[test]
    fn set_media_items_leaves_index_stale_when_current_id_disappears() {
        let harness = Harness::new();
        let mut controller = harness.controller();
        controller.set_media_items(vec![
            harness.item("a"),
            harness.item("b"),
            harness.item("c"),
        ]);
        controller.open_lightbox();
        controller.open_at_id(&MediaId::new("c"));
        assert_eq!(controller.current_index(), 2);

        controller.set_media_items(vec![harness.item("x"), harness.item("y")]);

        // Intentionally tolerant: the index is stale but untouched.
        assert_eq!(controller.current_index(), 2);
        assert_eq!(controller.current_id(), Some(&MediaId::new("c")));
    }

    #[test]
    fn open_lightbox_twice_is_noop() {
        let harness = Harness::new();
        let mut controller = harness.controller();
        controller.set_media_items(vec![harness.ready_item("a")]);

        controller.open_lightbox();
        controller.open_lightbox();

        let overlays = harness
            .surface
            .borrow()
            .ops()
            .iter()
            .filter(|op| matches!(op, SurfaceOp::MountOverlay(_)))
            .count();
        assert_eq!(overlays, 1);
    }

    #[test]
    fn navigation_affordance_requires_multiple_items() {
        let harness = Harness::new();
        let mut controller = harness.controller();
        controller.set_media_items(vec![harness.ready_item("a")]);
        controller.open_lightbox();

        let mounted_nav = harness
            .surface
            .borrow()
            .ops()
            .iter()
            .any(|op| matches!(op, SurfaceOp::MountNavigation));
        assert!(!mounted_nav);

        // Arrow keys stay unbound with a single item.
        controller.handle_key(KeyCode::ARROW_RIGHT);
        assert_eq!(controller.current_index(), 0);
    }

    #[test]
    fn multi_item_session_binds_arrow_keys_and_mounts_navbar() {
        let harness = Harness::new();
        let mut controller = harness.controller();
        controller.set_media_items(vec![harness.ready_item("a"), harness.ready_item("b")]);
        controller.open_at_id(&MediaId::new("a"));

        assert!(harness
            .surface
            .borrow()
            .ops()
            .iter()
            .any(|op| matches!(op, SurfaceOp::MountNavigation)));

        controller.handle_key(KeyCode::ARROW_RIGHT);
        assert_eq!(controller.current_id(), Some(&MediaId::new("b")));
    }

    #[test]
    fn prev_wraps_from_first_to_last() {
        let harness = Harness::new();
        let mut controller = harness.controller();
        controller.set_media_items(vec![
            harness.ready_item("a"),
            harness.ready_item("b"),
            harness.ready_item("c"),
        ]);
        controller.open_at_id(&MediaId::new("a"));

        controller.prev();

        assert_eq!(controller.current_index(), 2);
        assert_eq!(controller.current_id(), Some(&MediaId::new("c")));
    }

    #[test]
    fn next_wraps_from_last_to_first() {
        let harness = Harness::new();
        let mut controller = harness.controller();
        controller.set_media_items(vec![
            harness.ready_item("a"),
            harness.ready_item("b"),
            harness.ready_item("c"),
        ]);
        controller.open_at_id(&MediaId::new("c"));
        assert_eq!(controller.current_index(), 2);

        controller.next();

        assert_eq!(controller.current_index(), 0);
        assert_eq!(controller.current_id(), Some(&MediaId::new("a")));
    }

    #[test]
    fn navigation_detaches_old_item_before_attaching_new() {
        let harness = Harness::new();
        let mut controller = harness.controller();
        controller.set_media_items(vec![harness.ready_item("a"), harness.ready_item("b")]);
        controller.open_at_id(&MediaId::new("a"));

        controller.next();

        let ops = harness.surface.borrow().ops().to_vec();
        let unmount_a = ops
            .iter()
            .position(|op| matches!(op, SurfaceOp::UnmountMedia(id) if id == "a"))
            .expect("a unmounted");
        let mount_b = ops
            .iter()
            .position(|op| matches!(op, SurfaceOp::MountMedia(id) if id == "b"))
            .expect("b mounted");
        assert!(unmount_a < mount_b);
    }

    #[test]
    fn navigation_fires_observer_with_new_id() {
        let harness = Harness::new();
        let mut controller = harness.controller();
        controller.set_media_items(vec![harness.ready_item("a"), harness.ready_item("b")]);
        controller.open_at_id(&MediaId::new("a"));

        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        controller.set_on_navigate(Box::new(move |id| {
            sink.borrow_mut().push(id.to_string());
        }));

        controller.next();
        controller.prev();

        assert_eq!(*seen.borrow(), vec!["b".to_string(), "a".to_string()]);
    }

    #[test]
    fn navigation_on_empty_collection_is_noop_with_diagnostic() {
        let harness = Harness::new();
        let mut controller = harness.controller();

        controller.next();
        controller.prev();

        assert_eq!(controller.current_index(), 0);
        assert_eq!(controller.diagnostics().len(), 2);
        assert!(controller.diagnostics().iter().all(|event| matches!(
            event,
            DiagnosticEvent::NavigationIgnored {
                reason: IgnoredNavigation::EmptyCollection
            }
        )));
    }

    #[test]
    fn navigation_without_open_session_is_noop_with_diagnostic() {
        let harness = Harness::new();
        let mut controller = harness.controller();
        controller.set_media_items(vec![harness.ready_item("a"), harness.ready_item("b")]);

        controller.next();

        assert_eq!(controller.current_index(), 0);
        assert!(controller.diagnostics().iter().any(|event| matches!(
            event,
            DiagnosticEvent::NavigationIgnored {
                reason: IgnoredNavigation::NoOpenSession
            }
        )));
    }

    #[test]
    fn open_at_unknown_id_changes_nothing_and_opens_no_session() {
        let harness = Harness::new();
        let mut controller = harness.controller();
        controller.set_media_items(vec![harness.ready_item("a")]);

        controller.open_at_id(&MediaId::new("missing"));

        assert!(!controller.is_open());
        assert_eq!(controller.current_id(), None);
        assert!(harness.surface.borrow().ops().is_empty());
        assert!(controller.diagnostics().iter().any(|event| matches!(
            event,
            DiagnosticEvent::UnknownMediaId { id } if id == "missing"
        )));
    }

    #[test]
    fn escape_closes_session_and_clears_reference() {
        let harness = Harness::new();
        let mut controller = harness.controller();
        controller.set_media_items(vec![harness.ready_item("a")]);
        controller.open_at_id(&MediaId::new("a"));
        assert!(controller.is_open());

        controller.handle_key(KeyCode::ESCAPE);

        assert!(!controller.is_open());
        assert_eq!(harness.events.borrow().active_count(), 0);

        // Reopening works: the state machine is Closed → Open again.
        controller.open_lightbox();
        assert!(controller.is_open());
    }

    #[test]
    fn deferred_ready_mounts_item_still_on_display() {
        let harness = Harness::new();
        let mut controller = harness.controller();
        controller.set_media_items(vec![harness.item("slow")]);
        controller.open_at_id(&MediaId::new("slow"));

        // Attachment requested the fetch; nothing mounted yet.
        assert_eq!(harness.fetcher.requests().len(), 1);

        controller.notify_media_ready(&MediaId::new("slow"), 500, 500);

        assert!(harness
            .surface
            .borrow()
            .ops()
            .iter()
            .any(|op| matches!(op, SurfaceOp::MountMedia(id) if id == "slow")));
    }

    #[test]
    fn ready_after_close_updates_state_without_touching_surface() {
        let harness = Harness::new();
        let mut controller = harness.controller();
        let item = harness.item("slow");
        controller.set_media_items(vec![item.clone()]);
        controller.open_at_id(&MediaId::new("slow"));
        controller.close_lightbox();

        let ops_before = harness.surface.borrow().ops().len();
        controller.notify_media_ready(&MediaId::new("slow"), 500, 500);

        assert_eq!(harness.surface.borrow().ops().len(), ops_before);
        assert_eq!(
            item.borrow().natural_size(),
            Some(NaturalSize::new(500, 500))
        );
    }

    #[test]
    fn ready_for_unknown_id_records_stale_diagnostic() {
        let harness = Harness::new();
        let mut controller = harness.controller();

        controller.notify_media_ready(&MediaId::new("ghost"), 100, 100);

        assert!(controller.diagnostics().iter().any(|event| matches!(
            event,
            DiagnosticEvent::StaleMediaReady { id } if id == "ghost"
        )));
    }

    #[test]
    fn zero_dimensions_are_treated_as_load_failure() {
        let harness = Harness::new();
        let mut controller = harness.controller();
        let item = harness.item("broken");
        controller.set_media_items(vec![item.clone()]);
        controller.open_at_id(&MediaId::new("broken"));

        controller.notify_media_ready(&MediaId::new("broken"), 0, 200);

        assert!(matches!(
            item.borrow().load_state(),
            crate::domain::LoadState::Failed(MediaError::InvalidDimensions { .. })
        ));
        assert!(harness
            .surface
            .borrow()
            .ops()
            .iter()
            .any(|op| matches!(op, SurfaceOp::ShowLoadError { id, .. } if id == "broken")));
    }

    #[test]
    fn load_failure_surfaces_error_state_for_attached_item() {
        let harness = Harness::new();
        let mut controller = harness.controller();
        controller.set_media_items(vec![harness.item("broken")]);
        controller.open_at_id(&MediaId::new("broken"));

        controller.notify_media_failed(&MediaId::new("broken"), MediaError::NotFound);

        assert!(controller.is_open());
        assert!(harness
            .surface
            .borrow()
            .ops()
            .iter()
            .any(|op| matches!(op, SurfaceOp::ShowLoadError { id, .. } if id == "broken")));
        assert!(controller.diagnostics().iter().any(|event| matches!(
            event,
            DiagnosticEvent::MediaLoadFailed { id, .. } if id == "broken"
        )));
    }
}
