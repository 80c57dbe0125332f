use sliding_puzzle::format::load_board;
use sliding_puzzle::puzzles;
use sliding_puzzle::{DuplicatePolicy, Heuristic, ResourceLimits, Solver, SolverConfig};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        usage_and_exit(2);
    }

    let source = &args[1];
    let mut cfg = SolverConfig::default();
    let mut show_parity = false;

    let mut i = 2;
    while i < args.len() {
        match args[i].as_str() {
            "--heuristic" => {
                let Some(v) = args.get(i + 1) else {
                    eprintln!("--heuristic requires manhattan or hamming");
                    std::process::exit(2);
                };
                let Some(h) = Heuristic::from_name(v) else {
                    eprintln!("unknown heuristic {v} (expected manhattan or hamming)");
                    std::process::exit(2);
                };
                cfg.heuristic = h;
                i += 2;
            }
            "--closed-set" => {
                cfg.duplicates = DuplicatePolicy::ClosedSet;
                i += 1;
            }
            "--max-nodes" => {
                let Some(v) = args.get(i + 1) else {
                    eprintln!("--max-nodes requires an integer argument");
                    std::process::exit(2);
                };
                let n: usize = match v.parse() {
                    Ok(x) => x,
                    Err(e) => {
                        eprintln!("invalid --max-nodes {v}: {e}");
                        std::process::exit(2);
                    }
                };
                cfg.limits = ResourceLimits {
                    max_nodes: n,
                    ..cfg.limits
                };
                i += 2;
            }
            "--parity" => {
                show_parity = true;
                i += 1;
            }
            "--help" | "-h" => usage_and_exit(0),
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

    if show_parity {
        println!(
            "Parity check: {} ({} inversions)",
            if initial.has_solvable_parity() {
                "solvable"
            } else {
                "unsolvable"
            },
            initial.inversions()
        );
    }

    let solver = match Solver::with_config(initial, &cfg) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Search failed: {e}");
            std::process::exit(1);
        }
    };

    match solver.solution() {
        None => println!("No solution possible"),
        Some(path) => {
            println!("Minimum number of moves = {}", path.len() - 1);
            for board in path {
                println!("{board}");
            }
        }
    }
}

fn usage_and_exit(code: i32) -> ! {
    eprintln!(
        "Usage: solve <FILE | builtin:NAME> [--heuristic manhattan|hamming] [--closed-set] \
         [--max-nodes N] [--parity]\n\nBuilt-in puzzles:\n  - {}",
        puzzles::names().join("\n  - ")
    );
    std::process::exit(code)
}
