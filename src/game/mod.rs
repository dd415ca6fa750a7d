//! Game state machine and snapshot persistence

mod snapshot;
mod state;

pub use snapshot::SnapshotError;
pub use state::{Game, GameError, GameState, GuessRecord};
