//! Pure world-graph logic for Wayfare.
//!
//! This crate contains the algorithmic pieces that are independent of any
//! world state: functions take plain data (node keys and neighbor callbacks)
//! and return results, making them unit-testable in isolation and reusable
//! by any engine built on top.
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`direction`] | The 12 orientation labels and their opposite pairing |
//! | [`pathfinding`] | Shortest-route search over unit-cost connectivity |

pub mod direction;
pub mod pathfinding;
