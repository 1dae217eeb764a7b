//! Orientation labels for routes between locations.
//!
//! A route leaves its source location in exactly one of these 12 directions.
//! Directions come in mutual opposite pairs (a route registered NORTH of
//! here implies its return route lies SOUTH of the destination), and
//! `opposite` is a total involution — the enum is closed, so there is no
//! failure case.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the 12 fixed orientation labels.
///
/// Serialized in uppercase (`"NORTH"`, `"UP"`, …), matching the rendering
/// used in location descriptions.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    North,
    South,
    East,
    West,
    Northwest,
    Northeast,
    Southwest,
    Southeast,
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Every direction, in declaration order.
    pub const ALL: [Direction; 12] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
        Direction::Northwest,
        Direction::Northeast,
        Direction::Southwest,
        Direction::Southeast,
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// The direction a return route takes: NORTH/SOUTH, EAST/WEST, UP/DOWN,
    /// LEFT/RIGHT, and the diagonal pairs. `d.opposite().opposite() == d`.
    pub fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
            Direction::Northwest => Direction::Southeast,
            Direction::Northeast => Direction::Southwest,
            Direction::Southwest => Direction::Northeast,
            Direction::Southeast => Direction::Northwest,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Uppercase label used in display strings.
    pub fn label(self) -> &'static str {
        match self {
            Direction::North => "NORTH",
            Direction::South => "SOUTH",
            Direction::East => "EAST",
            Direction::West => "WEST",
            Direction::Northwest => "NORTHWEST",
            Direction::Northeast => "NORTHEAST",
            Direction::Southwest => "SOUTHWEST",
            Direction::Southeast => "SOUTHEAST",
            Direction::Up => "UP",
            Direction::Down => "DOWN",
            Direction::Left => "LEFT",
            Direction::Right => "RIGHT",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn opposite_is_an_involution() {
        for d in Direction::ALL {
            assert_eq!(d.opposite().opposite(), d, "{d} round-trips");
        }
    }

    #[test]
    fn opposite_has_no_fixed_point() {
        for d in Direction::ALL {
            assert_ne!(d.opposite(), d, "{d} must not be its own opposite");
        }
    }

    #[test]
    fn all_has_twelve_distinct_values() {
        let unique: HashSet<Direction> = Direction::ALL.into_iter().collect();
        assert_eq!(unique.len(), 12);
    }

    #[test]
    fn cardinal_pairs() {
        assert_eq!(Direction::North.opposite(), Direction::South);
        assert_eq!(Direction::East.opposite(), Direction::West);
        assert_eq!(Direction::Up.opposite(), Direction::Down);
        assert_eq!(Direction::Left.opposite(), Direction::Right);
    }

    #[test]
    fn diagonal_pairs() {
        assert_eq!(Direction::Northwest.opposite(), Direction::Southeast);
        assert_eq!(Direction::Northeast.opposite(), Direction::Southwest);
    }

    #[test]
    fn display_is_uppercase() {
        assert_eq!(Direction::North.to_string(), "NORTH");
        assert_eq!(Direction::Southeast.to_string(), "SOUTHEAST");
    }
}
