//! The interaction resolver and monster step.
//!
//! Everything that changes a [`World`](crate::core::World) in response to a
//! single action lives here. The mining behavior of each block kind comes
//! from a data-driven [`MiningTable`], so narrowing the roster never touches
//! control flow.

pub mod engine;
pub mod explosion;
pub mod mining;
pub mod monsters;
pub mod movement;
pub mod placement;
pub mod table;

pub use engine::Resolver;
pub use explosion::{Blast, DetonateRejected, Explosive};
pub use mining::MineOutcome;
pub use monsters::MonsterReport;
pub use movement::{MoveRejected, Moved};
pub use placement::{PlaceRejected, PLACEMENT_PRIORITY};
pub use table::{MiningRule, MiningTable};
