// SPDX-License-Identifier: MPL-2.0
//! Test doubles for the port traits.
//!
//! Used by the unit tests across the crate. Each fake records the calls it
//! receives so tests can assert on the exact sequence of surface
//! operations, active event registrations, and issued fetches.

use crate::domain::{DisplayBox, DisplaySize, MediaId, Viewport, WindowSize};
use crate::port::{EventInterest, EventSource, ImageFetcher, RenderSurface, SubscriptionId, ViewportProvider};
use std::cell::{Cell, RefCell};
use std::collections::HashSet;

/// A single recorded surface operation.
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceOp {
    MountOverlay(Viewport),
    ResizeOverlay(Viewport),
    UnmountOverlay,
    MountNavigation,
    PlaceWrapper(DisplayBox),
    MountMedia(String),
    ApplyMediaGeometry {
        id: String,
        display: DisplaySize,
        window: WindowSize,
    },
    UnmountMedia(String),
    ShowLoadError {
        id: String,
        message: String,
    },
}

/// Records every surface call in order.
#[derive(Debug, Default)]
pub struct FakeSurface {
    ops: Vec<SurfaceOp>,
}

impl FakeSurface {
    pub fn ops(&self) -> &[SurfaceOp] {
        &self.ops
    }
}

impl RenderSurface for FakeSurface {
    fn mount_overlay(&mut self, viewport: Viewport) {
        self.ops.push(SurfaceOp::MountOverlay(viewport));
    }

    fn resize_overlay(&mut self, viewport: Viewport) {
        self.ops.push(SurfaceOp::ResizeOverlay(viewport));
    }

    fn unmount_overlay(&mut self) {
        self.ops.push(SurfaceOp::UnmountOverlay);
    }

    fn mount_navigation(&mut self) {
        self.ops.push(SurfaceOp::MountNavigation);
    }

    fn place_wrapper(&mut self, frame: DisplayBox) {
        self.ops.push(SurfaceOp::PlaceWrapper(frame));
    }

    fn mount_media(&mut self, id: &MediaId) {
        self.ops.push(SurfaceOp::MountMedia(id.to_string()));
    }

    fn apply_media_geometry(&mut self, id: &MediaId, display: DisplaySize, window: WindowSize) {
        self.ops.push(SurfaceOp::ApplyMediaGeometry {
            id: id.to_string(),
            display,
            window,
        });
    }

    fn unmount_media(&mut self, id: &MediaId) {
        self.ops.push(SurfaceOp::UnmountMedia(id.to_string()));
    }

    fn show_load_error(&mut self, id: &MediaId, message: &str) {
        self.ops.push(SurfaceOp::ShowLoadError {
            id: id.to_string(),
            message: message.to_string(),
        });
    }
}

/// Viewport provider with a settable current size.
#[derive(Debug)]
pub struct FakeViewport {
    current: Cell<Viewport>,
}

impl FakeViewport {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            current: Cell::new(viewport),
        }
    }

    pub fn set(&self, viewport: Viewport) {
        self.current.set(viewport);
    }
}

impl ViewportProvider for FakeViewport {
    fn viewport(&self) -> Viewport {
        self.current.get()
    }
}

/// Tracks active event registrations.
#[derive(Debug, Default)]
pub struct FakeEventSource {
    next_id: u64,
    active: HashSet<u64>,
}

impl FakeEventSource {
    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    pub fn is_active(&self, id: SubscriptionId) -> bool {
        self.active.contains(&id.0)
    }
}

impl EventSource for FakeEventSource {
    fn subscribe(&mut self, _interest: EventInterest) -> SubscriptionId {
        self.next_id += 1;
        self.active.insert(self.next_id);
        SubscriptionId(self.next_id)
    }

    fn unsubscribe(&mut self, id: SubscriptionId) {
        self.active.remove(&id.0);
    }
}

/// Records fetch requests as `(id, url)` pairs.
#[derive(Debug, Default)]
pub struct FakeFetcher {
    requests: RefCell<Vec<(String, String)>>,
}

impl FakeFetcher {
    pub fn requests(&self) -> Vec<(String, String)> {
        self.requests.borrow().clone()
    }
}

impl ImageFetcher for FakeFetcher {
    fn fetch(&self, id: &MediaId, url: &str) {
        self.requests
            .borrow_mut()
            .push((id.to_string(), url.to_string()));
    }
}
