//! End-to-end session scenarios driven through the real event entry points.
//!
//! # Design
//! Every interaction goes the same way a host adapter would send it: text is
//! typed into the fake input, a key-released signal fires, and clicks arrive
//! as row handles. Assertions check both the in-memory collection and the
//! visual groups, since the two are only loosely ordered after toggles.

use fake_surface::{FakeSink, FakeSurface};
use todo_ui_core::{Group, SurfaceError, TodoListController, UiSurface};

/// Type `text` into the input and release Enter.
fn submit(ctl: &mut TodoListController<FakeSurface>, text: &str) {
    ctl.surface_mut().unwrap().set_input(text);
    ctl.handle_key_release("Enter");
}

/// Click the row labeled `label`.
fn click(ctl: &mut TodoListController<FakeSurface>, label: &str) {
    let row = ctl
        .surface()
        .unwrap()
        .row_labeled(label)
        .expect("row should exist");
    ctl.activate_row(&row);
}

fn active(ctl: &TodoListController<FakeSurface>) -> Vec<String> {
    ctl.surface().unwrap().labels_in(Group::Active)
}

fn completed(ctl: &TodoListController<FakeSurface>) -> Vec<String> {
    ctl.surface().unwrap().labels_in(Group::Completed)
}

#[test]
fn session_lifecycle() {
    let mut sink = FakeSink::new();
    let mut ctl = TodoListController::init(Ok(FakeSurface::new()), &mut sink);
    assert!(ctl.is_ready());

    // Step 1: a single submission lands in the active group.
    submit(&mut ctl, "Buy milk");
    assert_eq!(active(&ctl), vec!["Buy milk"]);
    assert!(completed(&ctl).is_empty());
    assert_eq!(ctl.surface().unwrap().input_value(), "");

    // Step 2: a second submission front-inserts above the first.
    submit(&mut ctl, "Walk dog");
    assert_eq!(active(&ctl), vec!["Walk dog", "Buy milk"]);

    // Step 3: clicking a row completes it and empties its old slot.
    click(&mut ctl, "Buy milk");
    assert_eq!(active(&ctl), vec!["Walk dog"]);
    assert_eq!(completed(&ctl), vec!["Buy milk"]);
    let milk = ctl
        .items()
        .iter()
        .find(|item| item.text == "Buy milk")
        .unwrap();
    assert!(milk.completed);

    // Step 4: clicking it again reactivates it at the front.
    click(&mut ctl, "Buy milk");
    assert_eq!(active(&ctl), vec!["Buy milk", "Walk dog"]);
    assert!(completed(&ctl).is_empty());
    let milk = ctl
        .items()
        .iter()
        .find(|item| item.text == "Buy milk")
        .unwrap();
    assert!(!milk.completed);

    // Step 5: whitespace submissions change nothing, twice in a row.
    submit(&mut ctl, "   ");
    submit(&mut ctl, "");
    assert_eq!(ctl.items().len(), 2);
    assert_eq!(active(&ctl), vec!["Buy milk", "Walk dog"]);

    // Step 6: the in-memory collection keeps creation order regardless of
    // what toggling did to the visual groups.
    let texts: Vec<_> = ctl.items().iter().map(|item| item.text.as_str()).collect();
    assert_eq!(texts, ["Walk dog", "Buy milk"]);

    // No diagnostics over the whole session.
    assert!(sink.messages().is_empty());
}

#[test]
fn toggle_parity_over_many_clicks() {
    let mut sink = FakeSink::new();
    let mut ctl = TodoListController::init(Ok(FakeSurface::new()), &mut sink);
    submit(&mut ctl, "A");
    submit(&mut ctl, "B");

    for clicks in 1..=6 {
        click(&mut ctl, "A");
        let a = ctl.items().iter().find(|item| item.text == "A").unwrap();
        let expect_completed = clicks % 2 == 1;
        assert_eq!(a.completed, expect_completed, "after {clicks} clicks");
        let group = if expect_completed {
            completed(&ctl)
        } else {
            active(&ctl)
        };
        assert_eq!(group[0], "A", "A should be front-most after {clicks} clicks");
    }

    // B was never touched.
    let b = ctl.items().iter().find(|item| item.text == "B").unwrap();
    assert!(!b.completed);
}

#[test]
fn missing_anchor_leaves_the_controller_inert() {
    let mut sink = FakeSink::new();
    let mut ctl: TodoListController<FakeSurface> =
        TodoListController::init(Err(SurfaceError::MissingCompletedGroup), &mut sink);

    assert!(!ctl.is_ready());
    assert_eq!(sink.messages().len(), 1);
    assert!(sink.messages()[0].contains("required surfaces not found"));

    // Events arriving anyway are swallowed without panicking.
    ctl.handle_key_release("Enter");
    ctl.submit_text("Buy milk");
    assert!(ctl.items().is_empty());
    assert!(ctl.surface().is_none());
}
