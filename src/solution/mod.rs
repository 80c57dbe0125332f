//! Exportable solution reports.
//!
//! A report stores the initial board, the verdict, the full board sequence and
//! the search counters as pretty JSON, so a run can be inspected or replayed
//! without re-running the search. See `src/bin/export_solution.rs`.

use std::fs;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::{DuplicatePolicy, Heuristic, ResourceCounts, SearchError, SolverConfig};
use crate::core::board::Board;
use crate::search::solver::Solver;

const FORMAT_VERSION: u32 = 1;

#[derive(Debug, Clone, Copy, Default)]
pub struct ExportOptions {
    /// Overwrite an existing report file.
    pub force: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchManifest {
    pub heuristic: Heuristic,
    pub duplicates: DuplicatePolicy,
    pub rounds: u64,
    pub counts: ResourceCounts,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolutionReport {
    pub format_version: u32,
    pub created_unix_secs: u64,
    pub initial: Board,
    pub solvable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub moves: Option<usize>,
    /// Empty when unsolvable.
    pub solution: Vec<Board>,
    pub search: SearchManifest,
}

/// Ways a stored board sequence can fail to be a valid solution.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReplayError {
    #[error("unsupported format version {0}")]
    FormatVersion(u32),
    #[error("report claims solvable={solvable}, but the initial board's parity says otherwise")]
    VerdictMismatch { solvable: bool },
    #[error("solvable report has an empty solution")]
    EmptySolution,
    #[error("unsolvable report carries a solution or move count")]
    UnexpectedSolution,
    #[error("solution does not start at the initial board")]
    WrongStart,
    #[error("solution does not end at the goal")]
    NotGoal,
    #[error("step {step} is not a single slide")]
    IllegalStep { step: usize },
    #[error("move count {moves:?} does not match {boards} boards")]
    MoveCount { moves: Option<usize>, boards: usize },
}

impl SolutionReport {
    pub fn from_solver(solver: &Solver, config: &SolverConfig) -> Self {
        let created_unix_secs = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);

        SolutionReport {
            format_version: FORMAT_VERSION,
            created_unix_secs,
            initial: solver.initial().clone(),
            solvable: solver.is_solvable(),
            moves: solver.moves(),
            solution: solver.solution().map(<[Board]>::to_vec).unwrap_or_default(),
            search: SearchManifest {
                heuristic: config.heuristic,
                duplicates: config.duplicates,
                rounds: solver.rounds(),
                counts: solver.counts(),
            },
        }
    }

    /// Check the verdict against the parity of `initial`, then replay the
    /// stored sequence: it must start at `initial`, end at the goal, move one
    /// tile per step, and agree with `moves`.
    pub fn verify(&self) -> Result<(), ReplayError> {
        if self.format_version != FORMAT_VERSION {
            return Err(ReplayError::FormatVersion(self.format_version));
        }
        if self.solvable != self.initial.has_solvable_parity() {
            return Err(ReplayError::VerdictMismatch {
                solvable: self.solvable,
            });
        }
        if !self.solvable {
            if self.moves.is_some() || !self.solution.is_empty() {
                return Err(ReplayError::UnexpectedSolution);
            }
            return Ok(());
        }

        let (first, last) = match (self.solution.first(), self.solution.last()) {
            (Some(f), Some(l)) => (f, l),
            _ => return Err(ReplayError::EmptySolution),
        };
        if *first != self.initial {
            return Err(ReplayError::WrongStart);
        }
        if !last.is_goal() {
            return Err(ReplayError::NotGoal);
        }
        for (step, pair) in self.solution.windows(2).enumerate() {
            if !pair[0].neighbors().contains(&pair[1]) {
                return Err(ReplayError::IllegalStep { step: step + 1 });
            }
        }
        if self.moves != Some(self.solution.len() - 1) {
            return Err(ReplayError::MoveCount {
                moves: self.moves,
                boards: self.solution.len(),
            });
        }
        Ok(())
    }
}

pub fn export_report(
    path: &Path,
    report: &SolutionReport,
    opts: ExportOptions,
) -> Result<(), SearchError> {
    let path_str = path.display().to_string();
    let io_err = |stage: &'static str, error: String| SearchError::Io {
        stage,
        path: path_str.clone(),
        error,
    };

    if path.exists() && !opts.force {
        return Err(io_err(
            "export_report",
            "file already exists (use force to overwrite)".to_string(),
        ));
    }
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir).map_err(|e| io_err("export_mkdir", e.to_string()))?;
    }

    let f = fs::File::create(path).map_err(|e| io_err("export_create", e.to_string()))?;
    let mut w = BufWriter::new(f);
    serde_json::to_writer_pretty(&mut w, report)
        .map_err(|e| io_err("export_write", e.to_string()))?;
    w.write_all(b"\n")
        .and_then(|_| w.flush())
        .map_err(|e| io_err("export_write", e.to_string()))?;
    Ok(())
}

pub fn load_report(path: &Path) -> Result<SolutionReport, SearchError> {
    let io_err = |stage: &'static str, error: String| SearchError::Io {
        stage,
        path: path.display().to_string(),
        error,
    };
    let f = fs::File::open(path).map_err(|e| io_err("load_open", e.to_string()))?;
    serde_json::from_reader(BufReader::new(f)).map_err(|e| io_err("load_parse", e.to_string()))
}
