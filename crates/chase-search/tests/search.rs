use std::collections::BTreeSet;

use chase_core::{Direction, Level, Location};
use chase_search::{RouteKind, RouteQuery, SearchConfig, Searcher};

fn open(rows: usize, cols: usize) -> Level {
    let row = ".".repeat(cols);
    let layout = vec![row; rows].join("\n");
    Level::parse(&layout).unwrap()
}

fn assert_contiguous(start: Location, steps: &[Location]) {
    let mut prev = start;
    for &at in steps {
        assert_eq!(prev.manhattan(at), 1, "{prev} -> {at} is not a single step");
        prev = at;
    }
}

#[test]
fn path_on_open_grid_is_manhattan_long() {
    let level = open(7, 7);
    let start = Location::new(0, 0);
    let dest = Location::new(5, 6);
    let route = Searcher::new().route(&level, &RouteQuery::new(start, RouteKind::Path { dest }));

    let steps: Vec<_> = route.iter().collect();
    assert_eq!(steps.len() as u32, start.manhattan(dest));
    assert_eq!(route.last(), Some(dest));
    assert!(!route.contains(start));
    assert_contiguous(start, &steps);
}

#[test]
fn path_to_own_cell_is_empty() {
    let level = open(3, 3);
    let at = Location::new(1, 1);
    let route = Searcher::new().route(&level, &RouteQuery::new(at, RouteKind::Path { dest: at }));
    assert!(route.is_empty());
}

#[test]
fn walled_in_start_yields_empty_route() {
    let level = Level::parse(".....\n.+++.\n.+.+.\n.+++.\n.....\n").unwrap();
    let query = RouteQuery::new(
        Location::new(2, 2),
        RouteKind::Path {
            dest: Location::new(0, 0),
        },
    );
    assert!(Searcher::new().route(&level, &query).is_empty());
}

#[test]
fn iteration_cap_gives_up() {
    let level = open(20, 20);
    let query = RouteQuery::new(
        Location::new(0, 0),
        RouteKind::Path {
            dest: Location::new(19, 19),
        },
    );
    let capped = Searcher::with_config(SearchConfig { max_iterations: 3 });
    assert!(capped.route(&level, &query).is_empty());
    assert_eq!(Searcher::new().route(&level, &query).len(), 38);
}

#[test]
fn obstacles_are_never_entered() {
    let level = open(3, 5);
    let obstacles: BTreeSet<_> = [
        Location::new(1, 1),
        Location::new(1, 2),
        Location::new(1, 3),
    ]
    .into_iter()
    .collect();
    let start = Location::new(0, 2);
    let dest = Location::new(2, 2);
    let query = RouteQuery::new(start, RouteKind::Path { dest }).with_obstacles(obstacles.clone());
    let route = Searcher::new().route(&level, &query);

    assert_eq!(route.last(), Some(dest));
    assert!(route.len() >= 6);
    assert!(route.iter().all(|at| !obstacles.contains(&at)));
    assert_contiguous(start, &route.iter().collect::<Vec<_>>());
}

#[test]
fn flank_reaches_its_destination() {
    let level = open(9, 9);
    let start = Location::new(8, 0);
    let dest = Location::new(0, 8);
    let query = RouteQuery::new(
        start,
        RouteKind::Flank {
            dest,
            avoid: Location::new(4, 4),
        },
    );
    let route = Searcher::new().route(&level, &query);
    assert_eq!(route.last(), Some(dest));
    assert_contiguous(start, &route.iter().collect::<Vec<_>>());
}

#[test]
fn flee_ends_far_enough_from_origin() {
    let level = open(9, 9);
    let start = Location::new(4, 4);
    let threat = Location::new(4, 3);
    let query = RouteQuery::new(
        start,
        RouteKind::Flee {
            origin: start,
            from: threat,
            max_dist: 3,
        },
    );
    let route = Searcher::new().route(&level, &query);
    let end = route.last().unwrap();
    assert!(end.manhattan(start) >= 3);
    assert!(end.euclidean(threat) > start.euclidean(threat));
    assert_contiguous(start, &route.iter().collect::<Vec<_>>());
}

#[test]
fn pursue_prefers_the_target_heading() {
    let level = open(11, 11);
    let start = Location::new(5, 5);
    let query = RouteQuery::new(
        start,
        RouteKind::Pursue {
            origin: Location::new(5, 4),
            from: start,
            max_dist: 4,
            heading: Direction::Right,
            facing: Direction::Idle,
        },
    );
    let route = Searcher::new().route(&level, &query);
    assert_eq!(
        route.iter().collect::<Vec<_>>(),
        vec![Location::new(5, 6), Location::new(5, 7), Location::new(5, 8)]
    );
}

#[test]
fn sound_footprint_fills_the_diamond_around_the_emitter() {
    let level = open(5, 5);
    let origin = Location::new(2, 2);
    let footprint = Searcher::new().footprint(&level, origin, 2).without(origin);

    let expected: BTreeSet<_> = (0..5)
        .flat_map(|r| (0..5).map(move |c| Location::new(r, c)))
        .filter(|at| at.manhattan(origin) <= 2 && *at != origin)
        .collect();
    assert_eq!(expected.len(), 12);
    assert_eq!(footprint.cells(), &expected);
    assert!(footprint.contains(Location::new(2, 3)));
    assert!(!footprint.contains(origin));
}

#[test]
fn zero_depth_sound_is_only_the_emitter() {
    let level = open(3, 3);
    let origin = Location::new(1, 1);
    let footprint = Searcher::new().footprint(&level, origin, 0);
    assert_eq!(footprint.len(), 1);
    assert!(footprint.without(origin).is_empty());
}

#[test]
fn walls_block_sound() {
    let level = Level::parse(".....\n.....\n++.++\n.....\n.....\n").unwrap();
    let origin = Location::new(1, 2);
    let footprint = Searcher::new().footprint(&level, origin, 2);
    assert!(footprint.contains(Location::new(3, 2)));
    assert!(!footprint.contains(Location::new(2, 1)));
    assert!(footprint.contains(Location::new(2, 2)));
    assert!(footprint.cells().iter().all(|at| at.manhattan(origin) <= 2));
}
