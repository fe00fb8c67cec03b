//! Session lifecycle.
//!
//! - `machine.rs`: the `Session` state machine
//! - `timer.rs`: countdown with cancellation tokens
//! - `intent.rs`: player intents and `ActionError`
//! - `store.rs`: best-time persistence
//! - `driver.rs`: the `Game` input queue
//! - `snapshot.rs`: serializable view for presentation adapters

mod driver;
mod intent;
mod machine;
mod snapshot;
mod state;
mod store;
mod timer;

pub use driver::{Game, Input};
pub use intent::{ActionError, Intent};
pub use machine::Session;
pub use snapshot::Snapshot;
pub use state::SessionState;
pub use store::{BestTimeStore, JsonFileStore, MemoryStore};
pub use timer::{Timer, TimerToken};
