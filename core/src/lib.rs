//! In-memory two-list todo controller.
//!
//! # Overview
//! Items are added from a single-line input control and toggled between an
//! "active" and a "completed" ordered group by clicking their row. All state
//! lives in memory for the session; there is no persistence and no network.
//!
//! # Design
//! - `TodoListController` owns the item collection and mediates every
//!   mutation. It never touches a real UI — rendering is reached only
//!   through the `UiSurface` trait, keeping the core deterministic and
//!   testable against a fake.
//! - The host resolves the three visual anchors (input control, active
//!   group, completed group) and hands the controller either a surface or a
//!   `SurfaceError`. A failed resolution leaves the controller inert.
//! - Initialization failures go to a `DiagnosticSink` (logged, never
//!   thrown); empty submissions and clicks on unknown rows are silent no-ops.

pub mod controller;
pub mod error;
pub mod surface;
pub mod types;

pub use controller::TodoListController;
pub use error::SurfaceError;
pub use surface::{DiagnosticSink, Group, LogSink, UiSurface};
pub use types::TodoItem;
