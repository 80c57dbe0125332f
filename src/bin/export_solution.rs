use std::path::Path;

use sliding_puzzle::format::load_board;
use sliding_puzzle::puzzles;
use sliding_puzzle::solution::{export_report, ExportOptions, SolutionReport};
use sliding_puzzle::{Solver, SolverConfig};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 3 {
        eprintln!(
            "Usage: export_solution <FILE | builtin:NAME> <OUT.json> [--force]\n\nBuilt-in puzzles:\n  - {}",
            puzzles::names().join("\n  - ")
        );
        std::process::exit(2);
    }

    let source = &args[1];
    let out = Path::new(&args[2]);

    let mut opts = ExportOptions::default();
    for arg in &args[3..] {
        match arg.as_str() {
            "--force" => opts.force = true,
            x => {
                eprintln!("Unknown option: {x}");
                std::process::exit(2);
            }
        }
    }

    let initial = match load_board(source) {
        Ok(b) => b,
        Err(e) => {
            eprintln!("Failed to load {source}: {e}");
            std::process::exit(2);
        }
    };

    let cfg = SolverConfig::default();
    let solver = match Solver::with_config(initial, &cfg) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Search failed: {e}");
            std::process::exit(1);
        }
    };

    let report = SolutionReport::from_solver(&solver, &cfg);
    if let Err(e) = export_report(out, &report, opts) {
        eprintln!("Export failed: {e}");
        std::process::exit(1);
    }

    println!("Exported solution report to {}", out.display());
    match report.moves {
        Some(m) => println!("  solvable in {m} moves, {} rounds", report.search.rounds),
        None => println!("  unsolvable, {} rounds", report.search.rounds),
    }
}
