//! Whole-search scenarios on small block worlds.

use blockpath::{
    DoorPathMode, GridScore, OpenableState, PathOutcome, Pathfinder, SearchConfig, WorldExaminer,
    WorldExaminerConfig,
};
use blockpath_core::{BlockPos, Column, Region};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::block::Block;
use crate::layout::Layout;
use crate::terrain::TerrainGen;
use crate::world::BlockWorld;

const FLAT: &str = "
    #####
    #####
    #####
    #####
    #####
";

const WALL: &str = "
    #####
    #####
    #####
    #####
    #####
    ---
    ..#..
    ..#..
    ..#..
    ..#..
    ..#..
    ---
    ..#..
    ..#..
    ..#..
    ..#..
    ..#..
    ---
    ..#..
    ..#..
    ..#..
    ..#..
    ..#..
";

// A wall with a two-high door at z = 2 under a stone lintel.
const DOOR: &str = "
    #####
    #####
    #####
    #####
    #####
    ---
    ..#..
    ..#..
    ..D..
    ..#..
    ..#..
    ---
    ..#..
    ..#..
    ..D..
    ..#..
    ..#..
    ---
    ..#..
    ..#..
    ..#..
    ..#..
    ..#..
";

fn world(layout: &str) -> BlockWorld {
    Layout::parse(layout).unwrap().to_world(2)
}

fn p(x: i32, y: i32, z: i32) -> BlockPos {
    BlockPos::new(x, y, z)
}

fn door_search(world: &BlockWorld, door_mode: DoorPathMode) -> PathOutcome<BlockPos> {
    let config = WorldExaminerConfig {
        door_mode,
        ..Default::default()
    };
    let examiner = WorldExaminer::with_config(world, config).unwrap();
    Pathfinder::new().find_path(&examiner, p(0, 0, 2), p(4, 0, 2))
}

#[test]
fn flat_platform_walks_the_diagonal() {
    let w = world(FLAT);
    let examiner = WorldExaminer::new(&w);
    let mut pf = Pathfinder::new();
    let outcome = pf.find_path(&examiner, p(0, 0, 0), p(4, 0, 4));
    let path = outcome.path().unwrap();
    assert_eq!(
        path.nodes(),
        &[p(0, 0, 0), p(1, 0, 1), p(2, 0, 2), p(3, 0, 3), p(4, 0, 4)]
    );
    assert!((path.cost() - 4.0 * 0.4).abs() < 1e-5);
    assert_eq!(pf.stats().pruned_columns, 0);
}

#[test]
fn start_equal_to_destination() {
    let w = world(FLAT);
    let examiner = WorldExaminer::new(&w);
    let outcome = Pathfinder::new().find_path(&examiner, p(2, 0, 2), p(2, 0, 2));
    let path = outcome.into_path().unwrap();
    assert_eq!(path.into_nodes(), vec![p(2, 0, 2)]);
}

#[test]
fn solid_wall_is_unreachable_and_pruned() {
    let w = world(WALL);
    let examiner = WorldExaminer::new(&w);
    let mut pf = Pathfinder::new();
    let outcome = pf.find_path(&examiner, p(0, 0, 2), p(4, 0, 2));
    assert!(matches!(outcome, PathOutcome::Unreachable));

    // Only the wall columns are dropped; the near side is fully explored.
    let mut excluded: Vec<Column> = pf.container().excluded_columns().collect();
    excluded.sort_by_key(|c| (c.x, c.z));
    let wall: Vec<Column> = (0..5).map(|z| Column::new(2, z)).collect();
    assert_eq!(excluded, wall);
    assert_eq!(pf.stats().pruned_columns, 5);
    assert_eq!(pf.stats().expanded, 10);
    for y in 0..6 {
        assert!(pf.container().is_closed(p(2, y, 3)));
    }
}

#[test]
fn closed_door_with_ignore_closed_mode() {
    let w = world(DOOR);
    let outcome = door_search(&w, DoorPathMode::IgnoreClosed);
    assert_eq!(
        outcome.path().unwrap().nodes(),
        &[p(0, 0, 2), p(1, 0, 2), p(2, 0, 2), p(3, 0, 2), p(4, 0, 2)]
    );
}

#[test]
fn closed_door_blocks_in_open_mode() {
    let w = world(DOOR);
    assert!(matches!(
        door_search(&w, DoorPathMode::Open),
        PathOutcome::Unreachable
    ));
}

#[test]
fn open_door_passes_in_open_mode() {
    let mut w = world(DOOR);
    assert!(w.set_door(p(2, 1, 2), OpenableState::Open));
    assert!(w.set_door(p(2, 2, 2), OpenableState::Open));
    let outcome = door_search(&w, DoorPathMode::Open);
    let path = outcome.path().unwrap();
    assert_eq!(path.len(), 5);
    assert!(path.nodes().contains(&p(2, 0, 2)));
}

#[test]
fn ignore_open_mode_blocks_open_doors() {
    let mut w = world(DOOR);
    w.set_door(p(2, 1, 2), OpenableState::Open);
    w.set_door(p(2, 2, 2), OpenableState::Open);
    assert!(matches!(
        door_search(&w, DoorPathMode::IgnoreOpen),
        PathOutcome::Unreachable
    ));
}

#[test]
fn step_up_onto_a_ledge() {
    let w = world(
        "
        ##.
        ---
        ..#
        ",
    );
    let examiner = WorldExaminer::new(&w);
    let outcome = Pathfinder::new().find_path(&examiner, p(0, 0, 0), p(2, 1, 0));
    let path = outcome.path().unwrap();
    assert_eq!(path.nodes(), &[p(0, 0, 0), p(1, 0, 0), p(2, 1, 0)]);
    assert!((path.cost() - (0.1 + 0.4)).abs() < 1e-5);
}

#[test]
fn budget_stops_the_search() {
    let w = world(FLAT);
    let examiner = WorldExaminer::new(&w);
    let mut pf = Pathfinder::with_config(SearchConfig::with_max_expansions(2));
    let outcome = pf.find_path(&examiner, p(0, 0, 0), p(4, 0, 4));
    assert!(matches!(outcome, PathOutcome::BudgetExhausted));
    assert_eq!(pf.stats().expanded, 2);
}

#[test]
fn random_pillar_fields_yield_walkable_paths() {
    let mut pf = Pathfinder::new();
    let mut found = 0;
    for seed in 0..10 {
        let bounds = Region::new(0, 0, 0, 12, 7, 12);
        let mut tg = TerrainGen::with_world(BlockWorld::new(bounds), StdRng::seed_from_u64(seed));
        tg.floor(0, Block::Stone);
        tg.scatter_pillars(0, 0.08, 3);
        tg.scatter_plants(0, 0.1);
        let (start, goal) = (p(0, 0, 0), p(11, 0, 11));
        tg.clear_above(start, 3);
        tg.clear_above(goal, 3);

        let examiner = WorldExaminer::new(&tg.world);
        let Some(path) = pf.find_path(&examiner, start, goal).into_path() else {
            continue;
        };
        found += 1;

        assert_eq!(path.start(), start);
        assert_eq!(path.destination(), goal);
        let mut cost = 0.0;
        for pair in path.nodes().windows(2) {
            let (a, b) = (pair[0], pair[1]);
            let d = b - a;
            assert!(d.x.abs() <= 1 && d.y.abs() <= 1 && d.z.abs() <= 1, "seed {seed}: {a} -> {b}");
            cost += GridScore::hop_cost(a, b);
        }
        for &n in path.nodes() {
            assert!(tg.world.at(n).is_some_and(Block::is_surface), "seed {seed}: {n}");
            assert!(examiner.has_room_for_entity(n), "seed {seed}: {n}");
        }
        assert!((path.cost() - cost).abs() < 1e-4, "seed {seed}");
    }
    assert!(found > 0);
}
