//! Wayfare Headless Validation Harness
//!
//! Exercises the world-graph engine end to end, the way surrounding game
//! logic would: builds a demo world from a JSON manifest, sweeps graph
//! invariants, runs scripted path/lock scenarios and randomized worlds.
//! Runs entirely in-process — no rendering, no input loop.
//!
//! Usage:
//!   cargo run -p wayfare-simtest
//!   cargo run -p wayfare-simtest -- --verbose

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::Deserialize;
use wayfare_core::prelude::*;

// ── Demo world manifest ─────────────────────────────────────────────────
const MANIFEST_JSON: &str = include_str!("../../../data/world_manifest.json");

#[derive(Debug, Deserialize)]
struct WorldManifest {
    locations: Vec<LocationSpec>,
    routes: Vec<RouteSpec>,
    occupants: Vec<OccupantSpec>,
}

#[derive(Debug, Deserialize)]
struct LocationSpec {
    name: String,
    description: String,
}

#[derive(Debug, Deserialize)]
struct RouteSpec {
    from: String,
    direction: Direction,
    to: String,
    #[serde(default)]
    locked: bool,
}

#[derive(Debug, Deserialize)]
struct OccupantSpec {
    name: String,
    location: String,
}

/// Builds a world from the manifest: every route bidirectional, locks
/// applied after connecting.
fn build_world(manifest: &WorldManifest) -> Result<World, String> {
    let mut world = World::new();
    for spec in &manifest.locations {
        world
            .register_location(&spec.name, &spec.description)
            .map_err(|e| e.to_string())?;
    }
    for spec in &manifest.routes {
        let from = world
            .find_location(&spec.from)
            .ok_or_else(|| format!("unknown location \"{}\"", spec.from))?;
        let to = world
            .find_location(&spec.to)
            .ok_or_else(|| format!("unknown location \"{}\"", spec.to))?;
        world
            .connect(from, spec.direction, to)
            .map_err(|e| e.to_string())?;
        if spec.locked {
            world.toggle_route_lock(from, spec.direction);
        }
    }
    for spec in &manifest.occupants {
        let occupant = world.register_occupant(&spec.name);
        let at = world
            .find_location(&spec.location)
            .ok_or_else(|| format!("unknown location \"{}\"", spec.location))?;
        world.location_mut(at).register_occupant(occupant);
    }
    Ok(world)
}

// ── Test harness ────────────────────────────────────────────────────────

struct TestResult {
    name: String,
    passed: bool,
    detail: String,
}

fn main() {
    let verbose = std::env::args().any(|a| a == "--verbose");
    println!("=== Wayfare Validation Harness ===\n");

    let mut results = Vec::new();

    // 1. Manifest parse + world build
    results.extend(validate_manifest_world(verbose));

    // 2. Graph invariants on the built world
    results.extend(validate_graph_invariants(verbose));

    // 3. Scripted path and lock scenarios
    results.extend(validate_path_queries(verbose));

    // 4. Randomized world sweep
    results.extend(validate_random_worlds(verbose));

    // 5. Display rendering
    results.extend(validate_display(verbose));

    // ── Summary ──
    println!();
    let passed = results.iter().filter(|r| r.passed).count();
    let failed = results.iter().filter(|r| !r.passed).count();
    let total = results.len();

    for r in &results {
        let icon = if r.passed { "✓" } else { "✗" };
        if !r.passed || verbose {
            println!("  {} {}: {}", icon, r.name, r.detail);
        }
    }

    println!(
        "\n=== RESULT: {}/{} passed, {} failed ===",
        passed, total, failed
    );

    if failed > 0 {
        std::process::exit(1);
    }
}

// ── 1. Manifest world ───────────────────────────────────────────────────

fn validate_manifest_world(verbose: bool) -> Vec<TestResult> {
    println!("--- World Manifest ---");
    let mut results = Vec::new();

    let manifest: WorldManifest = match serde_json::from_str(MANIFEST_JSON) {
        Ok(m) => m,
        Err(e) => {
            results.push(TestResult {
                name: "manifest_parse".into(),
                passed: false,
                detail: format!("JSON parse error: {}", e),
            });
            return results;
        }
    };
    results.push(TestResult {
        name: "manifest_parse".into(),
        passed: true,
        detail: format!(
            "{} locations, {} routes, {} occupants",
            manifest.locations.len(),
            manifest.routes.len(),
            manifest.occupants.len()
        ),
    });

    let mut world = match build_world(&manifest) {
        Ok(w) => w,
        Err(e) => {
            results.push(TestResult {
                name: "manifest_build".into(),
                passed: false,
                detail: e,
            });
            return results;
        }
    };
    results.push(TestResult {
        name: "manifest_build".into(),
        passed: world.location_count() == manifest.locations.len(),
        detail: format!("{} locations registered", world.location_count()),
    });

    // Names are identities: re-registering any manifest name must fail.
    let rejected = manifest
        .locations
        .iter()
        .all(|spec| world.register_location(&spec.name, "clone").is_err());
    results.push(TestResult {
        name: "manifest_unique_names".into(),
        passed: rejected && world.location_count() == manifest.locations.len(),
        detail: "duplicate registrations rejected".into(),
    });

    // Occupant registry deduplicates.
    let before = world.occupant_count();
    for spec in &manifest.occupants {
        world.register_occupant(&spec.name);
    }
    results.push(TestResult {
        name: "manifest_occupant_dedup".into(),
        passed: world.occupant_count() == before,
        detail: format!("{} occupants after re-registration", world.occupant_count()),
    });

    if verbose {
        println!("  Locations:");
        for location in world.locations() {
            println!(
                "    {} ({} routes, {} occupants)",
                location.name(),
                location.routes().len(),
                location.occupants().len()
            );
        }
    }

    results
}

// ── 2. Graph invariants ─────────────────────────────────────────────────

fn validate_graph_invariants(_verbose: bool) -> Vec<TestResult> {
    println!("--- Graph Invariants ---");
    let mut results = Vec::new();

    // Direction opposites: involution, no fixed point.
    let involution = Direction::ALL
        .into_iter()
        .all(|d| d.opposite().opposite() == d && d.opposite() != d);
    results.push(TestResult {
        name: "direction_opposites".into(),
        passed: involution,
        detail: "opposite is a fixed-point-free involution over 12 values".into(),
    });

    let manifest: WorldManifest = serde_json::from_str(MANIFEST_JSON).expect("manifest parses");
    let world = build_world(&manifest).expect("manifest builds");

    // Every manifest route produced exactly one edge on each side.
    let total_routes: usize = world.locations().map(|l| l.routes().len()).sum();
    results.push(TestResult {
        name: "bidirectional_edges".into(),
        passed: total_routes == manifest.routes.len() * 2,
        detail: format!(
            "{} stored routes for {} manifest connections",
            total_routes,
            manifest.routes.len()
        ),
    });

    // Symmetry: each route has a return route, and both agree on the lock.
    let mut asymmetric = 0;
    let mut lock_disagreements = 0;
    for location in world.locations() {
        for route in location.routes().values() {
            let far = world.location(route.destination());
            match far
                .routes()
                .values()
                .find(|back| back.destination() == location.id())
            {
                Some(back) => {
                    if back.is_locked() != route.is_locked() {
                        lock_disagreements += 1;
                    }
                }
                None => asymmetric += 1,
            }
        }
    }
    results.push(TestResult {
        name: "route_symmetry".into(),
        passed: asymmetric == 0,
        detail: format!("{} routes without a return route", asymmetric),
    });
    results.push(TestResult {
        name: "mirror_lock_agreement".into(),
        passed: lock_disagreements == 0,
        detail: format!("{} mirror pairs disagree on lock state", lock_disagreements),
    });

    // Route endpoints are sane: source is the holder, no self-loops.
    let mut bad_endpoints = 0;
    for location in world.locations() {
        for route in location.routes().values() {
            if route.source() != location.id() || route.destination() == location.id() {
                bad_endpoints += 1;
            }
        }
    }
    results.push(TestResult {
        name: "route_endpoints".into(),
        passed: bad_endpoints == 0,
        detail: format!("{} routes with bad endpoints", bad_endpoints),
    });

    results
}

// ── 3. Path queries ─────────────────────────────────────────────────────

fn validate_path_queries(_verbose: bool) -> Vec<TestResult> {
    println!("--- Path Queries ---");
    let mut results = Vec::new();

    let manifest: WorldManifest = serde_json::from_str(MANIFEST_JSON).expect("manifest parses");
    let mut world = build_world(&manifest).expect("manifest builds");

    let id = |world: &World, name: &str| world.find_location(name).expect("known location");
    let house = id(&world, "The House");
    let attic = id(&world, "The Attic");
    let kitchen = id(&world, "The Kitchen");
    let cellar = id(&world, "The Cellar");
    let garden = id(&world, "The Garden");
    let meadow = id(&world, "The Meadow");
    let hilltop = id(&world, "The Hilltop");
    let well = id(&world, "The Old Well");

    // Trivial path
    let trivial = world.find_path(house, house);
    results.push(TestResult {
        name: "path_trivial".into(),
        passed: trivial == Some(vec![house]),
        detail: "same location → single-node path".into(),
    });

    // Adjacent
    let adjacent = world.find_path(house, attic);
    results.push(TestResult {
        name: "path_adjacent".into(),
        passed: adjacent == Some(vec![house, attic]),
        detail: "house → attic in one hop".into(),
    });

    // Multi-hop through the hub
    let through = world.find_path(attic, garden);
    results.push(TestResult {
        name: "path_multi_hop".into(),
        passed: through == Some(vec![attic, house, garden]),
        detail: "attic → house → garden".into(),
    });

    // The cellar starts behind a locked route.
    let blocked = world.find_path(house, cellar);
    results.push(TestResult {
        name: "path_blocked_by_lock".into(),
        passed: blocked.is_none(),
        detail: "locked cellar route yields no path".into(),
    });

    // Unlock, path appears; relock, it vanishes again.
    world.toggle_route_lock(kitchen, Direction::Down);
    let open = world.find_path(house, cellar);
    world.toggle_route_lock(kitchen, Direction::Down);
    let reblocked = world.find_path(house, cellar);
    results.push(TestResult {
        name: "path_lock_toggle_roundtrip".into(),
        passed: open == Some(vec![house, kitchen, cellar]) && reblocked.is_none(),
        detail: "unlock opens house → kitchen → cellar, relock closes it".into(),
    });

    // Two equal-cost routes garden → hilltop; the answer must be stable.
    let first = world.find_path(garden, hilltop);
    let stable = (0..10).all(|_| world.find_path(garden, hilltop) == first);
    results.push(TestResult {
        name: "path_equal_cost_stable".into(),
        passed: first == Some(vec![garden, meadow, hilltop]) && stable,
        detail: "2-hop route chosen deterministically across repeats".into(),
    });

    // Longer trek from the bottom of the well.
    let trek = world.find_path(well, hilltop);
    results.push(TestResult {
        name: "path_long_trek".into(),
        passed: trek == Some(vec![well, garden, meadow, hilltop]),
        detail: "well → garden → meadow → hilltop".into(),
    });

    results
}

// ── 4. Randomized worlds ────────────────────────────────────────────────

const RANDOM_WORLDS: usize = 25;
const QUERIES_PER_WORLD: usize = 8;

/// A random world: spanning tree first (everything reachable), then a few
/// extra edges, then random lock toggles from random sides.
fn random_world(rng: &mut StdRng) -> (World, Vec<LocationId>) {
    let count = rng.gen_range(2..=12);
    let mut world = World::new();
    let mut ids = Vec::with_capacity(count);
    for i in 0..count {
        ids.push(
            world
                .register_location(&format!("Room {i}"), "A bare room.")
                .expect("fresh names register"),
        );
    }

    for i in 1..count {
        let parent = ids[rng.gen_range(0..i)];
        let mut directions = Direction::ALL.to_vec();
        directions.shuffle(rng);
        for direction in directions {
            if world.connect(parent, direction, ids[i]).is_ok() {
                break;
            }
        }
    }

    // Extra edges make cycles and equal-cost alternatives.
    for _ in 0..count {
        let a = ids[rng.gen_range(0..count)];
        let b = ids[rng.gen_range(0..count)];
        if a == b {
            continue;
        }
        let mut directions = Direction::ALL.to_vec();
        directions.shuffle(rng);
        for direction in directions {
            if world.connect(a, direction, b).is_ok() {
                break;
            }
        }
    }

    (world, ids)
}

fn validate_random_worlds(verbose: bool) -> Vec<TestResult> {
    println!("--- Randomized Worlds ---");
    let mut results = Vec::new();
    let mut rng = StdRng::seed_from_u64(0x57A7F42E);

    let mut unreachable_before_locks = 0;
    let mut bad_paths = 0;
    let mut asymmetric_answers = 0;
    let mut unstable_answers = 0;
    let mut total_queries = 0;

    for world_index in 0..RANDOM_WORLDS {
        let (mut world, ids) = random_world(&mut rng);

        // The spanning tree guarantees full reachability before any locks.
        for &goal in &ids {
            if world.find_path(ids[0], goal).is_none() {
                unreachable_before_locks += 1;
            }
        }

        // Random lock state, toggled from either side of each route.
        let sides: Vec<(LocationId, Direction)> = world
            .locations()
            .flat_map(|l| l.routes().keys().map(move |&d| (l.id(), d)))
            .collect();
        for (at, direction) in sides {
            if rng.gen_bool(0.3) {
                world.toggle_route_lock(at, direction);
            }
        }

        for _ in 0..QUERIES_PER_WORLD {
            total_queries += 1;
            let start = ids[rng.gen_range(0..ids.len())];
            let goal = ids[rng.gen_range(0..ids.len())];
            let outbound = world.find_path(start, goal);
            let inbound = world.find_path(goal, start);

            if world.find_path(start, goal) != outbound {
                unstable_answers += 1;
            }

            match &outbound {
                Some(path) => {
                    // Locks are mirrored, so reachability and distance are
                    // symmetric in a bidirectionally-built world.
                    match &inbound {
                        Some(back) if back.len() == path.len() => {}
                        _ => asymmetric_answers += 1,
                    }
                    if !path_is_walkable(&world, path, start, goal) {
                        bad_paths += 1;
                    }
                }
                None => {
                    if inbound.is_some() {
                        asymmetric_answers += 1;
                    }
                }
            }
        }

        if verbose {
            println!(
                "  world {}: {} locations, {} routes",
                world_index,
                world.location_count(),
                world.locations().map(|l| l.routes().len()).sum::<usize>()
            );
        }
    }

    results.push(TestResult {
        name: "random_tree_reachability".into(),
        passed: unreachable_before_locks == 0,
        detail: format!(
            "{} unreachable pairs before locking",
            unreachable_before_locks
        ),
    });
    results.push(TestResult {
        name: "random_paths_walkable".into(),
        passed: bad_paths == 0,
        detail: format!("{} invalid paths over {} queries", bad_paths, total_queries),
    });
    results.push(TestResult {
        name: "random_paths_symmetric".into(),
        passed: asymmetric_answers == 0,
        detail: format!("{} asymmetric answers", asymmetric_answers),
    });
    results.push(TestResult {
        name: "random_paths_stable".into(),
        passed: unstable_answers == 0,
        detail: format!("{} unstable answers", unstable_answers),
    });

    results
}

/// A returned path must start and end where asked, stay within the world,
/// and cross only unlocked routes.
fn path_is_walkable(world: &World, path: &[LocationId], start: LocationId, goal: LocationId) -> bool {
    if path.first() != Some(&start) || path.last() != Some(&goal) {
        return false;
    }
    if path.len() > world.location_count() {
        return false;
    }
    path.windows(2).all(|hop| {
        world
            .location(hop[0])
            .unlocked_routes()
            .any(|(_, route)| route.destination() == hop[1])
    })
}

// ── 5. Display rendering ────────────────────────────────────────────────

fn validate_display(verbose: bool) -> Vec<TestResult> {
    println!("--- Display Rendering ---");
    let mut results = Vec::new();

    let manifest: WorldManifest = serde_json::from_str(MANIFEST_JSON).expect("manifest parses");
    let world = build_world(&manifest).expect("manifest builds");
    let text = world.to_display_string();

    let missing: Vec<&str> = manifest
        .locations
        .iter()
        .map(|spec| spec.name.as_str())
        .filter(|name| !text.contains(name))
        .collect();
    results.push(TestResult {
        name: "display_all_locations".into(),
        passed: missing.is_empty(),
        detail: if missing.is_empty() {
            "every location rendered".into()
        } else {
            format!("missing: {}", missing.join(", "))
        },
    });

    // One route line per stored route, locked ones included.
    let route_lines = text.matches("from here.").count();
    let total_routes: usize = world.locations().map(|l| l.routes().len()).sum();
    results.push(TestResult {
        name: "display_route_lines".into(),
        passed: route_lines == total_routes,
        detail: format!("{} route lines for {} routes", route_lines, total_routes),
    });

    let occupied = manifest
        .locations
        .iter()
        .filter(|spec| manifest.occupants.iter().any(|o| o.location == spec.name))
        .count();
    let empty_lines = text.matches("There is no one here.").count();
    let seen_lines = text.matches("You can see ").count();
    results.push(TestResult {
        name: "display_occupancy_lines".into(),
        passed: seen_lines == occupied
            && empty_lines == manifest.locations.len() - occupied,
        detail: format!(
            "{} occupied, {} empty locations rendered",
            seen_lines, empty_lines
        ),
    });

    if verbose {
        println!("{}", text);
    }

    results
}
