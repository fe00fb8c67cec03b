//! Session lifecycle states.

use serde::{Deserialize, Serialize};

use crate::events::Cause;

/// Where a session is in its lifecycle.
///
/// `NotStarted → Running → {Won, Lost}`; a reset returns to `NotStarted`
/// from anywhere.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SessionState {
    /// Fresh board, timer dormant until the first action.
    #[default]
    NotStarted,
    Running,
    Won { elapsed_seconds: u32 },
    Lost { cause: Cause },
}

impl SessionState {
    /// Whether the session has ended and needs a reset.
    #[must_use]
    pub const fn is_over(self) -> bool {
        matches!(self, SessionState::Won { .. } | SessionState::Lost { .. })
    }

    #[must_use]
    pub const fn is_running(self) -> bool {
        matches!(self, SessionState::Running)
    }
}

impl std::fmt::Display for SessionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionState::NotStarted => f.write_str("not started"),
            SessionState::Running => f.write_str("running"),
            SessionState::Won { elapsed_seconds } => write!(f, "won in {elapsed_seconds}s"),
            SessionState::Lost { cause } => write!(f, "lost ({cause})"),
        }
    }
}
