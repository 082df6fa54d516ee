//! In-memory `UiSurface` and `DiagnosticSink` implementations for tests.

use uuid::Uuid;

use todo_ui_core::{DiagnosticSink, Group, TodoItem, UiSurface};

struct FakeRow {
    label: String,
    item_id: Option<Uuid>,
}

/// Fake rendering host: rows live in an arena and the two groups hold arena
/// indices in front-first order. Row handles are the arena indices, so a
/// handle stays valid while its row moves between groups.
#[derive(Default)]
pub struct FakeSurface {
    input: String,
    rows: Vec<FakeRow>,
    active: Vec<usize>,
    completed: Vec<usize>,
}

impl FakeSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Type text into the fake input control.
    pub fn set_input(&mut self, text: &str) {
        self.input = text.to_string();
    }

    /// Row labels of `group`, front first.
    pub fn labels_in(&self, group: Group) -> Vec<String> {
        self.group_rows(group)
            .iter()
            .map(|&row| self.rows[row].label.clone())
            .collect()
    }

    /// Handle of the first row carrying `label`, if any.
    pub fn row_labeled(&self, label: &str) -> Option<usize> {
        self.rows.iter().position(|row| row.label == label)
    }

    /// Insert a row into the active group whose id matches no item — the
    /// stale-element case the controller must ignore.
    pub fn push_foreign_row(&mut self, label: &str) -> usize {
        let handle = self.rows.len();
        self.rows.push(FakeRow {
            label: label.to_string(),
            item_id: Some(Uuid::new_v4()),
        });
        self.active.insert(0, handle);
        handle
    }

    fn group_rows(&self, group: Group) -> &[usize] {
        match group {
            Group::Active => &self.active,
            Group::Completed => &self.completed,
        }
    }
}

impl UiSurface for FakeSurface {
    type Row = usize;

    fn input_value(&self) -> String {
        self.input.clone()
    }

    fn clear_input(&mut self) {
        self.input.clear();
    }

    fn create_row(&mut self, item: &TodoItem) -> usize {
        self.rows.push(FakeRow {
            label: item.text.clone(),
            item_id: Some(item.id),
        });
        // Not yet in any group; the controller prepends it next.
        self.rows.len() - 1
    }

    fn prepend(&mut self, group: Group, row: &usize) {
        self.active.retain(|r| r != row);
        self.completed.retain(|r| r != row);
        match group {
            Group::Active => self.active.insert(0, *row),
            Group::Completed => self.completed.insert(0, *row),
        }
    }

    fn in_group(&self, group: Group, row: &usize) -> bool {
        self.group_rows(group).contains(row)
    }

    fn item_id(&self, row: &usize) -> Option<Uuid> {
        self.rows.get(*row).and_then(|r| r.item_id)
    }
}

/// Sink that records every diagnostic message.
#[derive(Default)]
pub struct FakeSink {
    messages: Vec<String>,
}

impl FakeSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }
}

impl DiagnosticSink for FakeSink {
    fn report(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }
}
