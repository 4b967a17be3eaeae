// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event log.
//!
//! The lightbox deliberately keeps several operations as silent no-ops
//! (unknown id on open, navigation on an empty collection or closed
//! session, stale decode completions). Behavior stays a no-op, but each
//! ignored operation is recorded here so an embedder can inspect or
//! export what the core declined to do.
//!
//! Events are kept in a memory-bounded ring buffer: when capacity is
//! reached, pushing a new event evicts the oldest one.

use crate::config::defaults::DIAGNOSTICS_BUFFER_CAPACITY;
use serde::Serialize;
use std::collections::VecDeque;

/// Why a `prev`/`next` request was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IgnoredNavigation {
    /// The collection holds no items.
    EmptyCollection,
    /// No session is open.
    NoOpenSession,
}

/// An operation the core declined or failed to perform.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum DiagnosticEvent {
    /// `open_at_id` was called with an id not present in the collection.
    UnknownMediaId {
        id: String,
    },

    /// A `prev`/`next` request was ignored.
    NavigationIgnored {
        reason: IgnoredNavigation,
    },

    /// A media item failed to load.
    MediaLoadFailed {
        id: String,
        message: String,
    },

    /// A decode completion arrived for an id no longer in the collection.
    StaleMediaReady {
        id: String,
    },
}

/// Bounded, chronological log of diagnostic events (oldest first).
#[derive(Debug, Clone)]
pub struct DiagnosticsLog {
    events: VecDeque<DiagnosticEvent>,
    capacity: usize,
}

impl DiagnosticsLog {
    /// Creates a log with the given capacity (clamped to at least 1).
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            events: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Records an event, evicting the oldest one if at capacity.
    pub fn record(&mut self, event: DiagnosticEvent) {
        if self.events.len() == self.capacity {
            self.events.pop_front();
        }
        self.events.push_back(event);
    }

    /// Iterates events oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &DiagnosticEvent> {
        self.events.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl Default for DiagnosticsLog {
    fn default() -> Self {
        Self::with_capacity(DIAGNOSTICS_BUFFER_CAPACITY)
    }
}
