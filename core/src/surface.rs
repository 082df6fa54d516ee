//! Boundary traits between the controller and its rendering host.
//!
//! # Design
//! These traits describe the visual tree as the minimal interface the core
//! needs: an input control, two ordered row groups, and a way to build rows.
//! The core calls through `UiSurface` and never sees host types — the host
//! (a real UI toolkit, or the in-memory fake used in tests) owns the actual
//! widgets and supplies an opaque row handle. This keeps the controller
//! deterministic and unit-testable without any rendering environment.

use uuid::Uuid;

use crate::types::TodoItem;

/// Which of the two mutually exclusive visual groups a row sits in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Group {
    Active,
    Completed,
}

/// The rendering host as seen by the controller.
///
/// `Row` is an opaque handle to a visual row; the controller only ever
/// passes handles back to the surface, it never inspects them. Rows move
/// between groups by relocation — a handle stays valid across `prepend`
/// calls and is never recreated.
pub trait UiSurface {
    type Row;

    /// Current text of the input control.
    fn input_value(&self) -> String;

    /// Empty the input control.
    fn clear_input(&mut self);

    /// Build a visual row labeled with the item's text and carrying the
    /// item's id as an attached identifier.
    fn create_row(&mut self, item: &TodoItem) -> Self::Row;

    /// Insert the row as the front-most child of `group`, relocating it if
    /// it already sits in a group.
    fn prepend(&mut self, group: Group, row: &Self::Row);

    /// Whether the row is currently a direct child of `group`.
    fn in_group(&self, group: Group, row: &Self::Row) -> bool;

    /// The identifier attached to the row at creation, if any.
    fn item_id(&self, row: &Self::Row) -> Option<Uuid>;
}

/// Write-only channel for the single initialization-failure message.
pub trait DiagnosticSink {
    fn report(&mut self, message: &str);
}

/// `DiagnosticSink` that forwards to the `log` facade at error level.
///
/// The backend is host policy; the core never initializes a logger.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn report(&mut self, message: &str) {
        log::error!("{message}");
    }
}
