//! The world: an arena of uniquely-named locations and the operations that
//! connect, lock, and query them.

use crate::error::WorldError;
use crate::ids::{LocationId, OccupantId};
use crate::location::Location;
use std::collections::HashMap;
use wayfare_logic::direction::Direction;
use wayfare_logic::pathfinding;

/// The owning container for one game's location graph.
///
/// Locations live in an arena and are addressed by [`LocationId`]; routes
/// hold ids rather than references, so the graph has no ownership cycles.
/// Location names and occupant names are each unique within a world.
///
/// All operations are synchronous and take `&self`/`&mut self`, so a path
/// query can never observe a graph mid-mutation.
#[derive(Debug, Default)]
pub struct World {
    locations: Vec<Location>,
    location_index: HashMap<String, LocationId>,
    occupants: Vec<String>,
    occupant_index: HashMap<String, OccupantId>,
}

impl World {
    /// An empty world with no locations or occupants.
    pub fn new() -> World {
        World::default()
    }

    // ── Locations ───────────────────────────────────────────────────────

    /// Registers a new location and returns its key.
    ///
    /// Names are identities: blank names fail with
    /// [`WorldError::EmptyLocationName`], and a second registration under an
    /// existing name fails with [`WorldError::DuplicateLocation`].
    pub fn register_location(
        &mut self,
        name: &str,
        description: &str,
    ) -> Result<LocationId, WorldError> {
        if name.trim().is_empty() {
            return Err(WorldError::EmptyLocationName);
        }
        if self.location_index.contains_key(name) {
            return Err(WorldError::DuplicateLocation(name.to_string()));
        }
        let id = LocationId(self.locations.len() as u32);
        self.locations.push(Location::new(id, name, description));
        self.location_index.insert(name.to_string(), id);
        Ok(id)
    }

    /// The location behind `id`. Panics on a key this world never issued.
    pub fn location(&self, id: LocationId) -> &Location {
        &self.locations[id.0 as usize]
    }

    /// Mutable access to a location, for occupant changes and one-way
    /// connections. Panics on a key this world never issued.
    pub fn location_mut(&mut self, id: LocationId) -> &mut Location {
        &mut self.locations[id.0 as usize]
    }

    /// Looks a location up by its unique name.
    pub fn find_location(&self, name: &str) -> Option<LocationId> {
        self.location_index.get(name).copied()
    }

    /// Every location, in registration order.
    pub fn locations(&self) -> impl Iterator<Item = &Location> {
        self.locations.iter()
    }

    /// Number of registered locations.
    pub fn location_count(&self) -> usize {
        self.locations.len()
    }

    // ── Routes ──────────────────────────────────────────────────────────

    /// Connects two locations both ways: `direction` from `from` to `to`,
    /// and the opposite direction back.
    ///
    /// All-or-nothing: both route maps are checked before either side is
    /// committed, so a [`WorldError::DuplicateDirection`] on the return
    /// side leaves the graph untouched.
    pub fn connect(
        &mut self,
        from: LocationId,
        direction: Direction,
        to: LocationId,
    ) -> Result<(), WorldError> {
        if from == to {
            return Err(WorldError::InvalidRoute { location: from });
        }
        let back = direction.opposite();
        if self.location(from).routes().contains_key(&direction) {
            return Err(WorldError::DuplicateDirection {
                location: from,
                direction,
            });
        }
        if self.location(to).routes().contains_key(&back) {
            return Err(WorldError::DuplicateDirection {
                location: to,
                direction: back,
            });
        }
        self.location_mut(from).connect_to(to, direction)?;
        self.location_mut(to).connect_to(from, back)?;
        Ok(())
    }

    /// Connects `from` to `to` without a return route, for deliberately
    /// asymmetric passages (a one-way chute, a door that locks behind you).
    pub fn connect_one_way(
        &mut self,
        from: LocationId,
        direction: Direction,
        to: LocationId,
    ) -> Result<(), WorldError> {
        self.location_mut(from).connect_to(to, direction)
    }

    /// Flips the lock on the route leaving `location` in `direction`.
    ///
    /// Every route at either endpoint equal to it under route identity (the
    /// unordered endpoint pair) is set to the same new state, so a lock is
    /// always visible from both sides. Returns the new lock state, or
    /// `None` when no route leaves `location` that way.
    pub fn toggle_route_lock(
        &mut self,
        location: LocationId,
        direction: Direction,
    ) -> Option<bool> {
        let forward = self.location(location).routes().get(&direction)?.clone();
        let now_locked = !forward.is_locked();
        for side in [location, forward.destination()] {
            for route in self.location_mut(side).routes_mut() {
                if *route == forward {
                    route.set_locked(now_locked);
                }
            }
        }
        Some(now_locked)
    }

    // ── Path queries ────────────────────────────────────────────────────

    /// Finds a shortest sequence of locations from `start` to `goal` using
    /// only unlocked routes.
    ///
    /// Returns the full sequence including both endpoints — `Some([start])`
    /// when `start == goal` — or `None` when every unlocked route sequence
    /// is exhausted without reaching the goal. Ties between equal-length
    /// paths resolve deterministically (direction order, then first-queued
    /// wins), so an unmutated world always answers the same way.
    pub fn find_path(&self, start: LocationId, goal: LocationId) -> Option<Vec<LocationId>> {
        let unlocked_neighbors = |node: u32| -> Vec<u32> {
            self.locations[node as usize]
                .unlocked_routes()
                .map(|(_, route)| route.destination().0)
                .collect()
        };
        // Each location closes at most once, so the location count bounds
        // the search unconditionally.
        let hops = pathfinding::shortest_route_with_limit(
            start.0,
            goal.0,
            &unlocked_neighbors,
            self.locations.len(),
        )?;
        Some(hops.into_iter().map(LocationId).collect())
    }

    // ── Occupants ───────────────────────────────────────────────────────

    /// Registers an occupant name and returns its key; re-registering an
    /// existing name returns the same key (the registry is a set).
    pub fn register_occupant(&mut self, name: &str) -> OccupantId {
        if let Some(&id) = self.occupant_index.get(name) {
            return id;
        }
        let id = OccupantId(self.occupants.len() as u32);
        self.occupants.push(name.to_string());
        self.occupant_index.insert(name.to_string(), id);
        id
    }

    /// The display name behind an occupant key. Panics on a key this world
    /// never issued.
    pub fn occupant_name(&self, id: OccupantId) -> &str {
        &self.occupants[id.0 as usize]
    }

    /// Number of registered occupant names.
    pub fn occupant_count(&self) -> usize {
        self.occupants.len()
    }

    // ── Rendering ───────────────────────────────────────────────────────

    /// Renders one location: name, description, a line per route (locked
    /// routes included), then who is here.
    pub fn describe_location(&self, id: LocationId) -> String {
        let location = self.location(id);
        let mut out = String::new();

        out.push_str(location.name());
        out.push_str("\n\n");
        out.push_str(location.description());
        out.push_str("\n\n");

        for (direction, route) in location.routes() {
            let destination = self.location(route.destination()).name();
            out.push_str(&format!(
                "There is a path to {destination}, {direction} from here.\n"
            ));
        }

        if location.occupants().is_empty() {
            out.push_str("\nThere is no one here.\n");
        } else {
            out.push_str("\nYou can see ");
            for &occupant in location.occupants() {
                out.push_str(self.occupant_name(occupant));
                out.push_str(", ");
            }
            out.push_str("and no one else.\n");
        }

        out
    }

    /// Renders every location once, in registration order.
    pub fn to_display_string(&self) -> String {
        let mut out = String::new();
        for location in &self.locations {
            out.push_str(&self.describe_location(location.id()));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// House with the attic UP and the garden EAST, as a caller would
    /// build it.
    fn demo_world() -> (World, LocationId, LocationId, LocationId) {
        let mut world = World::new();
        let house = world
            .register_location("The House", "A quaint house, with tons of knickknacks.")
            .unwrap();
        let attic = world
            .register_location("The Attic", "A musty old attic.")
            .unwrap();
        let garden = world
            .register_location("The Garden", "A garden full of gnomes.")
            .unwrap();
        world.connect(house, Direction::Up, attic).unwrap();
        world.connect(house, Direction::East, garden).unwrap();
        (world, house, attic, garden)
    }

    // --- Registration ---

    #[test]
    fn distinct_names_register_distinct_locations() {
        let mut world = World::new();
        let a = world.register_location("The Attic", "dusty").unwrap();
        let b = world.register_location("The Garden", "green").unwrap();
        assert_ne!(a, b);
        assert_eq!(world.location_count(), 2);
        assert_eq!(world.find_location("The Attic"), Some(a));
    }

    #[test]
    fn duplicate_name_rejected_and_original_kept() {
        let mut world = World::new();
        world.register_location("The Attic", "dusty").unwrap();
        let err = world
            .register_location("The Attic", "an attic clone!")
            .unwrap_err();
        assert_eq!(err, WorldError::DuplicateLocation("The Attic".into()));
        assert_eq!(world.location_count(), 1);
        let id = world.find_location("The Attic").unwrap();
        assert_eq!(world.location(id).description(), "dusty");
    }

    #[test]
    fn blank_names_rejected() {
        let mut world = World::new();
        assert_eq!(
            world.register_location("", "x").unwrap_err(),
            WorldError::EmptyLocationName
        );
        assert_eq!(
            world.register_location("   ", "x").unwrap_err(),
            WorldError::EmptyLocationName
        );
        assert_eq!(world.location_count(), 0);
    }

    // --- Connecting ---

    #[test]
    fn connect_is_bidirectional() {
        let (world, house, attic, _) = demo_world();
        let up = &world.location(house).routes()[&Direction::Up];
        assert_eq!(up.source(), house);
        assert_eq!(up.destination(), attic);
        let down = &world.location(attic).routes()[&Direction::Down];
        assert_eq!(down.source(), attic);
        assert_eq!(down.destination(), house);
    }

    #[test]
    fn self_connection_rejected() {
        let mut world = World::new();
        let a = world.register_location("A", "x").unwrap();
        assert_eq!(
            world.connect(a, Direction::Up, a).unwrap_err(),
            WorldError::InvalidRoute { location: a }
        );
        assert!(world.location(a).routes().is_empty());
    }

    #[test]
    fn duplicate_forward_direction_leaves_first_connection_intact() {
        let (mut world, house, attic, garden) = demo_world();
        let err = world.connect(house, Direction::Up, garden).unwrap_err();
        assert_eq!(
            err,
            WorldError::DuplicateDirection {
                location: house,
                direction: Direction::Up
            }
        );
        assert_eq!(
            world.location(house).routes()[&Direction::Up].destination(),
            attic
        );
        // The failed connect committed nothing on the garden side either.
        assert_eq!(world.location(garden).routes().len(), 1);
    }

    #[test]
    fn occupied_reverse_direction_aborts_without_committing_forward() {
        let mut world = World::new();
        let a = world.register_location("A", "x").unwrap();
        let b = world.register_location("B", "x").unwrap();
        let c = world.register_location("C", "x").unwrap();
        world.connect(a, Direction::East, b).unwrap(); // b now has WEST→a
        let err = world.connect(c, Direction::East, b).unwrap_err();
        assert_eq!(
            err,
            WorldError::DuplicateDirection {
                location: b,
                direction: Direction::West
            }
        );
        assert!(
            world.location(c).routes().is_empty(),
            "forward edge must not survive an aborted connect"
        );
    }

    #[test]
    fn one_way_connection_is_asymmetric() {
        let mut world = World::new();
        let top = world.register_location("Cliff Top", "windy").unwrap();
        let base = world.register_location("Cliff Base", "rocky").unwrap();
        world.connect_one_way(top, Direction::Down, base).unwrap();
        assert_eq!(world.find_path(top, base), Some(vec![top, base]));
        assert_eq!(world.find_path(base, top), None);
    }

    // --- Locking ---

    #[test]
    fn toggling_a_lock_is_visible_from_both_sides() {
        let (mut world, house, _, garden) = demo_world();
        assert_eq!(world.toggle_route_lock(house, Direction::East), Some(true));
        assert!(world.location(house).routes()[&Direction::East].is_locked());
        assert!(world.location(garden).routes()[&Direction::West].is_locked());

        assert_eq!(world.toggle_route_lock(garden, Direction::West), Some(false));
        assert!(!world.location(house).routes()[&Direction::East].is_locked());
    }

    #[test]
    fn toggling_a_missing_route_reports_none() {
        let (mut world, house, _, _) = demo_world();
        assert_eq!(world.toggle_route_lock(house, Direction::North), None);
    }

    // --- Path queries ---

    #[test]
    fn path_to_self_is_the_trivial_single_location() {
        let (world, house, _, _) = demo_world();
        assert_eq!(world.find_path(house, house), Some(vec![house]));
    }

    #[test]
    fn attic_reaches_garden_through_the_house() {
        let (world, house, attic, garden) = demo_world();
        assert_eq!(
            world.find_path(attic, garden),
            Some(vec![attic, house, garden])
        );
    }

    #[test]
    fn locking_the_only_route_cuts_the_path() {
        let (mut world, house, attic, garden) = demo_world();
        world.toggle_route_lock(house, Direction::East).unwrap();
        assert_eq!(world.find_path(attic, garden), None);

        // Unlocking restores it.
        world.toggle_route_lock(house, Direction::East).unwrap();
        assert_eq!(
            world.find_path(attic, garden),
            Some(vec![attic, house, garden])
        );
    }

    #[test]
    fn search_only_walks_unlocked_routes() {
        // A ring: A-B-Z and A-C-D-Z. Locking A-B forces the long way.
        let mut world = World::new();
        let a = world.register_location("A", "x").unwrap();
        let b = world.register_location("B", "x").unwrap();
        let c = world.register_location("C", "x").unwrap();
        let d = world.register_location("D", "x").unwrap();
        let z = world.register_location("Z", "x").unwrap();
        world.connect(a, Direction::North, b).unwrap();
        world.connect(b, Direction::East, z).unwrap();
        world.connect(a, Direction::South, c).unwrap();
        world.connect(c, Direction::East, d).unwrap();
        world.connect(d, Direction::North, z).unwrap();

        assert_eq!(world.find_path(a, z), Some(vec![a, b, z]));
        world.toggle_route_lock(a, Direction::North).unwrap();
        assert_eq!(world.find_path(a, z), Some(vec![a, c, d, z]));
    }

    #[test]
    fn equal_cost_paths_resolve_deterministically() {
        // Two disjoint 2-hop routes: A-B-Z and A-C-Z. North sorts before
        // South in direction order, so the B branch is queued first.
        let mut world = World::new();
        let a = world.register_location("A", "x").unwrap();
        let b = world.register_location("B", "x").unwrap();
        let c = world.register_location("C", "x").unwrap();
        let z = world.register_location("Z", "x").unwrap();
        world.connect(a, Direction::North, b).unwrap();
        world.connect(a, Direction::South, c).unwrap();
        world.connect(b, Direction::East, z).unwrap();
        world.connect(c, Direction::East, z).unwrap();

        let first = world.find_path(a, z).unwrap();
        assert_eq!(first.len(), 3, "never longer than the shortest");
        assert_eq!(first, vec![a, b, z]);
        for _ in 0..10 {
            assert_eq!(world.find_path(a, z).unwrap(), first);
        }
    }

    #[test]
    fn unreachable_goal_reports_none() {
        let mut world = World::new();
        let a = world.register_location("A", "x").unwrap();
        let island = world.register_location("Island", "x").unwrap();
        assert_eq!(world.find_path(a, island), None);
    }

    // --- Occupants ---

    #[test]
    fn occupant_registry_is_a_set() {
        let mut world = World::new();
        let recardo = world.register_occupant("Recardo");
        let again = world.register_occupant("Recardo");
        assert_eq!(recardo, again);
        assert_eq!(world.occupant_count(), 1);
        assert_eq!(world.occupant_name(recardo), "Recardo");
    }

    #[test]
    fn occupants_come_and_go_at_locations() {
        let (mut world, house, _, _) = demo_world();
        let gnome = world.register_occupant("Gnome");
        world.location_mut(house).register_occupant(gnome);
        world.location_mut(house).register_occupant(gnome);
        assert_eq!(world.location(house).occupants(), &[gnome]);

        world.location_mut(house).unregister_occupant(gnome);
        assert!(world.location(house).occupants().is_empty());
        // Absent again: still fine.
        world.location_mut(house).unregister_occupant(gnome);
    }

    // --- Rendering ---

    #[test]
    fn description_lists_every_route_and_the_emptiness() {
        let (world, house, _, _) = demo_world();
        let text = world.describe_location(house);
        assert!(text.starts_with("The House\n\n"));
        assert!(text.contains("A quaint house, with tons of knickknacks."));
        assert!(text.contains("There is a path to The Attic, UP from here."));
        assert!(text.contains("There is a path to The Garden, EAST from here."));
        assert!(text.contains("There is no one here."));
    }

    #[test]
    fn description_lists_occupants_when_present() {
        let (mut world, house, _, _) = demo_world();
        let gnome = world.register_occupant("Gnome");
        let cat = world.register_occupant("Cat");
        world.location_mut(house).register_occupant(gnome);
        world.location_mut(house).register_occupant(cat);
        let text = world.describe_location(house);
        assert!(text.contains("You can see Gnome, Cat, and no one else."));
        assert!(!text.contains("There is no one here."));
    }

    #[test]
    fn locked_routes_still_render() {
        let (mut world, house, _, _) = demo_world();
        world.toggle_route_lock(house, Direction::East).unwrap();
        let text = world.to_display_string();
        assert!(text.contains("There is a path to The Garden, EAST from here."));
    }

    #[test]
    fn display_covers_every_location_once() {
        let (world, _, _, _) = demo_world();
        let text = world.to_display_string();
        assert_eq!(text.matches("The House\n").count(), 1);
        assert!(text.contains("The Attic"));
        assert!(text.contains("The Garden"));
    }
}
