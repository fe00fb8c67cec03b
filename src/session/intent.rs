//! Player intents and why they can be refused.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::{Difficulty, Direction};
use crate::rules::{DetonateRejected, Explosive, MoveRejected, PlaceRejected};

/// Something the player asked for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Intent {
    Move(Direction),
    Mine,
    Place(Direction),
    Detonate(Explosive, Direction),
    ChangeDifficulty(Difficulty),
    Reset,
}

impl Intent {
    /// A move intent from a raw `(dx, dy)` step.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::InvalidDirection`] unless the step is a single
    /// orthogonal cell.
    pub fn from_delta(dx: i32, dy: i32) -> Result<Self, ActionError> {
        Direction::from_delta(dx, dy)
            .map(Intent::Move)
            .ok_or(ActionError::InvalidDirection { dx, dy })
    }
}

/// Why an intent was refused.
///
/// None of these are fatal; the session is unchanged.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ActionError {
    #[error("session is over; reset to play again")]
    SessionOver,

    #[error("({dx}, {dy}) is not a single orthogonal step")]
    InvalidDirection { dx: i32, dy: i32 },

    #[error(transparent)]
    Move(#[from] MoveRejected),

    #[error(transparent)]
    Place(#[from] PlaceRejected),

    #[error(transparent)]
    Detonate(#[from] DetonateRejected),
}
