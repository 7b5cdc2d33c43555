//! Random terrain walk.
//!
//! Generates a seeded field of pillars and plants, searches from one
//! corner to the opposite one and prints a top-down map.
//!
//! Run: cargo run --bin walk -- [seed] [door-mode]
//! Set `RUST_LOG=debug` to see the search summary.

use blockpath::{DoorPathMode, PathOutcome, Pathfinder, SearchConfig, WorldExaminer, WorldExaminerConfig};
use blockpath_core::{BlockPos, Column, Region};
use blockpath_world::{Block, BlockWorld, TerrainGen};
use rand::SeedableRng;
use rand::rngs::StdRng;

const SIZE: i32 = 24;
const HEIGHT: i32 = 8;
const MAX_EXPANSIONS: usize = 20_000;

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let seed = match args.next().map(|s| s.parse::<u64>()) {
        None => 42,
        Some(Ok(seed)) => seed,
        Some(Err(e)) => {
            eprintln!("Error: invalid seed: {e}");
            std::process::exit(1);
        }
    };
    let door_mode = match args.next().map(|s| s.parse::<DoorPathMode>()) {
        None => DoorPathMode::default(),
        Some(Ok(mode)) => mode,
        Some(Err(e)) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    let bounds = Region::new(0, 0, 0, SIZE, HEIGHT, SIZE);
    let mut tg = TerrainGen::with_world(BlockWorld::new(bounds), StdRng::seed_from_u64(seed));
    tg.floor(0, Block::Stone);
    let pillars = tg.scatter_pillars(0, 0.08, 4);
    let plants = tg.scatter_plants(0, 0.1);

    let start = BlockPos::new(0, 0, 0);
    let goal = BlockPos::new(SIZE - 1, 0, SIZE - 1);
    tg.clear_above(start, HEIGHT);
    tg.clear_above(goal, HEIGHT);
    let world = tg.world;

    let config = WorldExaminerConfig {
        door_mode,
        ..Default::default()
    };
    let examiner = match WorldExaminer::with_config(&world, config) {
        Ok(examiner) => examiner,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    let mut pf = Pathfinder::with_config(SearchConfig::with_max_expansions(MAX_EXPANSIONS));
    let outcome = pf.find_path(&examiner, start, goal);
    let stats = pf.stats();

    println!("seed {seed}: {pillars} pillars, {plants} plants, doors {door_mode}");
    match &outcome {
        PathOutcome::Found(path) => {
            println!("found {} nodes, cost {:.1}", path.len(), path.cost())
        }
        PathOutcome::Unreachable => println!("no path"),
        PathOutcome::BudgetExhausted => println!("gave up after {MAX_EXPANSIONS} expansions"),
    }
    println!(
        "{} expanded, {} opened, {} columns pruned",
        stats.expanded, stats.opened, stats.pruned_columns
    );
    println!();

    let path = outcome.path().map(|p| p.nodes()).unwrap_or_default();
    for z in 0..SIZE {
        let row: String = (0..SIZE)
            .map(|x| {
                let on_path = path.iter().any(|n| n.x == x && n.z == z);
                let above = world.at(BlockPos::new(x, 1, z)).unwrap_or_default();
                if x == start.x && z == start.z {
                    'S'
                } else if x == goal.x && z == goal.z {
                    'G'
                } else if on_path {
                    'o'
                } else if pf.container().is_column_excluded(Column::new(x, z)) {
                    'x'
                } else {
                    above.rune()
                }
            })
            .collect();
        println!("{row}");
    }
}
