//! The controller owning the item collection and all mutations.
//!
//! # Design
//! `TodoListController` is the only writer of both the in-memory items and
//! the visual tree (through `UiSurface`). The host registers thin adapter
//! callbacks that forward UI events to `handle_key_release` and
//! `activate_row`; no business logic lives in the adapters. A controller
//! whose surface failed to resolve is inert: every entry point returns
//! without effect.

use crate::error::SurfaceError;
use crate::surface::{DiagnosticSink, Group, UiSurface};
use crate::types::TodoItem;

/// Mediates all mutations of the todo list and its two visual groups.
///
/// Items are front-inserted on creation and never removed; group order
/// evolves independently as toggles relocate rows. The `completed` flag and
/// the row's group always agree after each operation.
#[derive(Debug)]
pub struct TodoListController<S: UiSurface> {
    items: Vec<TodoItem>,
    surface: Option<S>,
}

impl<S: UiSurface> TodoListController<S> {
    /// Construct the controller from the host's anchor lookup.
    ///
    /// The host resolves the input control and the two group containers; if
    /// any anchor was missing it passes the `SurfaceError` instead. On error
    /// exactly one diagnostic goes to `sink` and the controller comes up
    /// inert — no events will ever have an effect. Never panics.
    pub fn init(surface: Result<S, SurfaceError>, sink: &mut impl DiagnosticSink) -> Self {
        let surface = match surface {
            Ok(surface) => Some(surface),
            Err(err) => {
                sink.report(&format!("required surfaces not found: {err}"));
                None
            }
        };
        Self {
            items: Vec::new(),
            surface,
        }
    }

    /// Whether initialization succeeded and events are being handled.
    pub fn is_ready(&self) -> bool {
        self.surface.is_some()
    }

    /// Items in insertion order, newest first.
    pub fn items(&self) -> &[TodoItem] {
        &self.items
    }

    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    pub fn surface_mut(&mut self) -> Option<&mut S> {
        self.surface.as_mut()
    }

    /// Adapter entry point for the input control's key-released signal.
    ///
    /// Only `"Enter"` submits; every other key is ignored.
    pub fn handle_key_release(&mut self, key: &str) {
        if key != "Enter" {
            return;
        }
        let Some(surface) = self.surface.as_ref() else {
            return;
        };
        let raw = surface.input_value();
        self.submit_text(&raw);
    }

    /// Create a new item from `raw` and show it at the front of the active
    /// group.
    ///
    /// The text is trimmed first; an empty result is a silent no-op that
    /// leaves the input control untouched. On success the input is cleared.
    pub fn submit_text(&mut self, raw: &str) {
        let Some(surface) = self.surface.as_mut() else {
            return;
        };
        let text = raw.trim();
        if text.is_empty() {
            return;
        }
        let item = TodoItem::new(text);
        let row = surface.create_row(&item);
        surface.prepend(Group::Active, &row);
        surface.clear_input();
        self.items.insert(0, item);
    }

    /// Toggle the item behind a clicked row.
    ///
    /// The row's attached id is looked up in the collection; a row with no
    /// id or an id matching no item is ignored. The row is relocated to the
    /// front of the opposite group and the item's `completed` flag is set to
    /// match. Which group the row currently sits in — not the stored flag —
    /// decides the direction, so flag and group re-converge even if a host
    /// ever moved a row on its own.
    pub fn activate_row(&mut self, row: &S::Row) {
        let Some(surface) = self.surface.as_mut() else {
            return;
        };
        let Some(id) = surface.item_id(row) else {
            return;
        };
        let Some(item) = self.items.iter_mut().find(|item| item.id == id) else {
            return;
        };
        if surface.in_group(Group::Completed, row) {
            surface.prepend(Group::Active, row);
            item.completed = false;
        } else {
            surface.prepend(Group::Completed, row);
            item.completed = true;
        }
    }
}
