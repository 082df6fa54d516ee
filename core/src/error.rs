//! Error types for controller initialization.
//!
//! # Design
//! The taxonomy is deliberately small: the only failure the core recognizes
//! is a missing visual anchor at startup, one variant per anchor so the
//! diagnostic names what was not found. Empty submissions and clicks on
//! unknown rows are not errors — they are silent no-ops by design.

use std::fmt;

/// A required visual anchor could not be resolved by the host.
///
/// Produced by the host's anchor lookup and consumed by
/// `TodoListController::init`, which reports one diagnostic and constructs
/// an inert controller. Never propagated further.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceError {
    /// The text-input control is absent.
    MissingInput,

    /// The active-group container is absent.
    MissingActiveGroup,

    /// The completed-group container is absent.
    MissingCompletedGroup,
}

impl fmt::Display for SurfaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SurfaceError::MissingInput => write!(f, "input control not found"),
            SurfaceError::MissingActiveGroup => write!(f, "active-group container not found"),
            SurfaceError::MissingCompletedGroup => {
                write!(f, "completed-group container not found")
            }
        }
    }
}

impl std::error::Error for SurfaceError {}
