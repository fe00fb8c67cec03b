//! State-change events for presentation adapters.
//!
//! The engine never renders, plays sounds or shows dialogs. Every observable
//! change is instead pushed as a [`GameEvent`]; a renderer or audio adapter
//! drains them after each input and translates them however it likes.

mod event;

pub use event::{Cause, EventLog, GameEvent};
