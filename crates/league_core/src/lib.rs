//! League core for casual FIFA tournaments
//!
//! This crate provides:
//! - The entity model (teams, matches, tournaments)
//! - Double round-robin schedule generation with owner exclusion and fixture spacing
//! - Standings and top-scorer aggregation
//! - JSON snapshots of a tournament and a plain-text standings report
//!
//! # Usage
//!
//! ```
//! use league_core::{Tournament, UuidGenerator};
//! use rand::thread_rng;
//!
//! let mut ids = UuidGenerator;
//! let mut league = Tournament::default();
//! league.add_team("Arsenal", "Alice", &mut ids).unwrap();
//! league.add_team("Chelsea", "Bob", &mut ids).unwrap();
//! league.generate_schedule(&mut thread_rng(), &mut ids);
//! assert_eq!(league.matches.len(), 2);
//! ```

mod error;
mod ids;
mod model;
mod report;
mod schedule;
mod snapshot;
mod standings;
mod store;

pub use error::*;
pub use ids::*;
pub use model::*;
pub use report::*;
pub use schedule::*;
pub use snapshot::*;
pub use standings::*;
pub use store::*;
