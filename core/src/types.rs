//! Domain model for the todo list.
//!
//! # Design
//! A single entity. The id is a v4 UUID rather than a creation timestamp so
//! uniqueness holds even when two items are created within the same clock
//! tick. Serde derives keep the type host-friendly; nothing in the core
//! itself persists or transmits items.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single todo entry.
///
/// `text` is set once at creation and never edited; only `completed` is
/// mutable, flipped each time the item's row is clicked.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TodoItem {
    pub id: Uuid,
    pub text: String,
    pub completed: bool,
}

impl TodoItem {
    /// Create a new item in the active state with a fresh unique id.
    ///
    /// Callers are expected to pass already-trimmed, non-empty text; the
    /// controller performs that normalization before construction.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            completed: false,
        }
    }
}
