use std::error::Error;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;

use bestpath::{AStarSolver, GridMap, Objective, SearchStats, StreamSolver};

#[derive(Parser, Debug)]
#[command(name = "gridpath", about = "Shortest-path solver for grid map files")]
struct Args {
    /// Grid map file: '.' open, '#' wall, '1'..'9' weighted, 'S' start, 'G' goal
    map: PathBuf,

    /// Run the streaming engine and print each improving solution
    #[arg(long)]
    stream: bool,

    /// Emit a JSON summary instead of human-readable lines
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Serialize)]
struct Summary {
    found: bool,
    cost: Option<i64>,
    path_len: Option<usize>,
    states_expanded: Option<u64>,
    solutions_emitted: Option<u64>,
    stale_pops: Option<u64>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let text = fs::read_to_string(&args.map)
        .map_err(|e| format!("Failed to read {}: {e}", args.map.display()))?;
    let map = GridMap::parse(&text)?;

    if !args.json {
        println!(
            "[gridpath] Loaded {}x{} map, start ({}, {}), goal ({}, {}).",
            map.width(),
            map.height(),
            map.start().x,
            map.start().y,
            map.goal().x,
            map.goal().y
        );
    }

    let summary = if args.stream {
        run_stream(map, args.json)
    } else {
        run_sync(&map)
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else if summary.found {
        println!(
            "[gridpath] Best path: cost {}, {} nodes.",
            summary.cost.unwrap_or(0),
            summary.path_len.unwrap_or(0)
        );
        if let (Some(expanded), Some(stale)) = (summary.states_expanded, summary.stale_pops) {
            println!("[gridpath] Expanded {expanded} states ({stale} stale pops skipped).");
        }
    } else {
        println!("[gridpath] No path from start to goal.");
    }

    Ok(())
}

fn run_sync(map: &GridMap) -> Summary {
    let start = map.start();
    let solver = AStarSolver::minimizing(map.clone());
    let solution = solver.solve(start);

    Summary {
        found: solution.is_some(),
        cost: solution.as_ref().map(|s| s.cost),
        path_len: solution.as_ref().map(bestpath::Solution::len),
        states_expanded: None,
        solutions_emitted: None,
        stale_pops: None,
    }
}

fn run_stream(map: GridMap, quiet: bool) -> Summary {
    let start = map.start();
    let solver = StreamSolver::new(map, Objective::Minimize);

    let pb = if quiet {
        ProgressBar::hidden()
    } else {
        let pb = ProgressBar::new_spinner();
        pb.set_style(ProgressStyle::with_template("[{elapsed_precise}] search {spinner} {msg}").unwrap());
        pb.enable_steady_tick(Duration::from_millis(120));
        pb
    };

    let mut stream = solver.solve(start);
    let mut best: Option<(i64, usize)> = None;
    for solution in &mut stream {
        if !quiet {
            pb.println(format!(
                "[gridpath] improved: cost {} ({} nodes)",
                solution.cost,
                solution.len()
            ));
        }
        pb.set_message(format!("best cost {}", solution.cost));
        best = Some((solution.cost, solution.len()));
    }
    let stats: SearchStats = stream.finish();
    pb.finish_and_clear();

    Summary {
        found: best.is_some(),
        cost: best.map(|(cost, _)| cost),
        path_len: best.map(|(_, len)| len),
        states_expanded: Some(stats.states_expanded),
        solutions_emitted: Some(stats.solutions_emitted),
        stale_pops: Some(stats.stale_pops),
    }
}
