//! A named place in the world and its outgoing routes.

use crate::error::WorldError;
use crate::ids::{LocationId, OccupantId};
use crate::route::Route;
use std::collections::BTreeMap;
use std::hash::{Hash, Hasher};
use wayfare_logic::direction::Direction;

/// A place an occupant can inhabit, connected to other locations by routes.
///
/// Identity is the name: a world never holds two locations with the same
/// name, and equality/hashing consider the name alone. The route map is
/// ordered by direction, so adjacency iteration, search tie-breaking, and
/// rendering are deterministic across runs. A location has at most one
/// outgoing route per direction.
#[derive(Debug, Clone)]
pub struct Location {
    id: LocationId,
    name: String,
    description: String,
    routes: BTreeMap<Direction, Route>,
    occupants: Vec<OccupantId>,
}

impl Location {
    pub(crate) fn new(id: LocationId, name: &str, description: &str) -> Location {
        Location {
            id,
            name: name.to_string(),
            description: description.to_string(),
            routes: BTreeMap::new(),
            occupants: Vec::new(),
        }
    }

    /// This location's arena key.
    pub fn id(&self) -> LocationId {
        self.id
    }

    /// The unique name identifying this location.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Free-text description shown when rendering the location.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Stores a route to `destination` under `direction`.
    ///
    /// One-way by itself — the return route is the caller's business (the
    /// world's bidirectional `connect` makes both). Fails with
    /// [`WorldError::DuplicateDirection`] when the direction is taken and
    /// [`WorldError::InvalidRoute`] on a self-loop; the existing route map
    /// is untouched on failure.
    pub fn connect_to(
        &mut self,
        destination: LocationId,
        direction: Direction,
    ) -> Result<(), WorldError> {
        let route = Route::new(self.id, destination)?;
        if self.routes.contains_key(&direction) {
            return Err(WorldError::DuplicateDirection {
                location: self.id,
                direction,
            });
        }
        self.routes.insert(direction, route);
        Ok(())
    }

    /// Full adjacency, locked routes included, ordered by direction.
    pub fn routes(&self) -> &BTreeMap<Direction, Route> {
        &self.routes
    }

    /// The traversable subset of [`routes`](Self::routes), computed fresh on
    /// every call so it always reflects current lock state.
    pub fn unlocked_routes(&self) -> impl Iterator<Item = (Direction, &Route)> + '_ {
        self.routes
            .iter()
            .filter(|(_, route)| !route.is_locked())
            .map(|(direction, route)| (*direction, route))
    }

    pub(crate) fn routes_mut(&mut self) -> impl Iterator<Item = &mut Route> + '_ {
        self.routes.values_mut()
    }

    /// Adds the occupant unless already present; insertion order preserved,
    /// duplicates rejected silently.
    pub fn register_occupant(&mut self, occupant: OccupantId) {
        if !self.occupants.contains(&occupant) {
            self.occupants.push(occupant);
        }
    }

    /// Removes the occupant if present; absent occupants are a no-op.
    pub fn unregister_occupant(&mut self, occupant: OccupantId) {
        self.occupants.retain(|&o| o != occupant);
    }

    /// Occupants currently here, in arrival order.
    pub fn occupants(&self) -> &[OccupantId] {
        &self.occupants
    }
}

impl PartialEq for Location {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Location {}

impl Hash for Location {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}
