//! Error types for world construction and mutation.

use crate::ids::LocationId;
use std::error::Error;
use std::fmt;
use wayfare_logic::direction::Direction;

/// Errors from building or mutating a [`World`](crate::world::World).
///
/// An unreachable goal is not an error: `World::find_path` returns `None`
/// for a disconnected pair, since a graph that is mid-construction or split
/// by locked routes is a legitimate state. Passing a [`LocationId`] the
/// world never issued is a caller bug and panics at the arena index.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WorldError {
    /// A location with this name is already registered.
    DuplicateLocation(String),
    /// The location already has a route leaving in this direction.
    DuplicateDirection {
        /// The location whose route map is occupied.
        location: LocationId,
        /// The direction that is already taken.
        direction: Direction,
    },
    /// A route's endpoints are the same location; self-loops are forbidden.
    InvalidRoute {
        /// The location that was given as both endpoints.
        location: LocationId,
    },
    /// Location names are identities and must be non-empty.
    EmptyLocationName,
}

impl fmt::Display for WorldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateLocation(name) => {
                write!(f, "a location named \"{name}\" is already registered")
            }
            Self::DuplicateDirection {
                location,
                direction,
            } => {
                write!(
                    f,
                    "location #{location} already has a route {direction} from here"
                )
            }
            Self::InvalidRoute { location } => {
                write!(f, "location #{location} cannot be connected to itself")
            }
            Self::EmptyLocationName => write!(f, "location names must be non-empty"),
        }
    }
}

impl Error for WorldError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offender() {
        let err = WorldError::DuplicateLocation("The Attic".into());
        assert!(err.to_string().contains("The Attic"));

        let err = WorldError::DuplicateDirection {
            location: LocationId(3),
            direction: Direction::Up,
        };
        assert!(err.to_string().contains("#3"));
        assert!(err.to_string().contains("UP"));
    }
}
