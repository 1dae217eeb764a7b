//! Wayfare Core — the world-graph engine.
//!
//! A world is an arena of uniquely-named locations joined by directional,
//! independently lockable routes. Game logic registers locations, connects
//! them (bidirectionally by default), moves occupants around, toggles route
//! locks, and asks for shortest paths that only cross unlocked routes.
//!
//! # Architecture
//!
//! - **Arena ownership**: the [`world::World`] owns every [`location::Location`];
//!   routes refer to their endpoints by [`ids::LocationId`] keys, never by
//!   reference, so the graph carries no ownership cycles.
//! - **Pure search**: shortest-path queries delegate to `wayfare-logic`,
//!   feeding it the unlocked adjacency of each location as it is expanded.
//!
//! # Example
//!
//! ```
//! use wayfare_core::prelude::*;
//!
//! let mut world = World::new();
//! let house = world.register_location("The House", "A quaint house.")?;
//! let attic = world.register_location("The Attic", "A musty attic.")?;
//! world.connect(house, Direction::Up, attic)?;
//!
//! assert_eq!(world.find_path(house, attic), Some(vec![house, attic]));
//! # Ok::<(), WorldError>(())
//! ```

pub mod error;
pub mod ids;
pub mod location;
pub mod route;
pub mod world;

/// Commonly used types for convenient importing
pub mod prelude {
    pub use crate::error::WorldError;
    pub use crate::ids::{LocationId, OccupantId};
    pub use crate::location::Location;
    pub use crate::route::Route;
    pub use crate::world::World;
    pub use wayfare_logic::direction::Direction;
}
