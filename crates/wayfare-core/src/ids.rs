//! Strongly-typed arena keys.
//!
//! Locations and occupants live in [`World`](crate::world::World)-owned
//! arenas; everything else refers to them by these keys. Routes store
//! endpoint keys rather than location references, so the graph has no
//! ownership cycles.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies a location within a world.
///
/// Stable for the lifetime of the world: the n-th registered location gets
/// `LocationId(n)`. Keys from one world mean nothing to another.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct LocationId(pub u32);

impl fmt::Display for LocationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifies an occupant registered with a world.
///
/// Assigned sequentially at first registration of the occupant's name.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct OccupantId(pub u32);

impl fmt::Display for OccupantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
