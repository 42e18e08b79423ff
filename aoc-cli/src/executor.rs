//! Parallel executor for running solvers

use crate::cli::ParallelizeBy;
use crate::config::Config;
use crate::error::{ArcExecutorError, ExecutorError};
use crate::inputs::InputStore;
use aoc_solver::{DynSolver, SolverRegistry};
use chrono::TimeDelta;
use itertools::Itertools;
use rayon::prelude::*;
use std::ops::RangeInclusive;
use std::sync::mpsc::Sender;
use tracing::{debug, info};

/// Result from a single solver execution
#[derive(Debug, Clone)]
pub struct SolverResult {
    pub year: u16,
    pub day: u8,
    pub part: u8,
    pub answer: Result<String, ArcExecutorError>,
    pub solve_duration: TimeDelta,
    /// Parse time, attached to the first part solved from each parse
    pub parse_duration: Option<TimeDelta>,
}

impl SolverResult {
    fn failed(year: u16, day: u8, part: u8, error: ArcExecutorError) -> Self {
        Self {
            year,
            day,
            part,
            answer: Err(error),
            solve_duration: TimeDelta::zero(),
            parse_duration: None,
        }
    }
}

/// Work item representing a solver to execute
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkItem {
    pub year: u16,
    pub day: u8,
    pub parts: RangeInclusive<u8>,
}

/// Parallel executor for running solvers
pub struct Executor {
    sync_executor_config: SyncExecutorConfig,
    thread_pool: rayon::ThreadPool,
}

/// State shared by every worker thread
pub struct SyncExecutorConfig {
    registry: SolverRegistry,
    inputs: InputStore,
    parallelize_by: ParallelizeBy,
    year_filter: Option<u16>,
    day_filter: Option<u8>,
    part_filter: Option<u8>,
}

impl Executor {
    /// Create a new executor from config
    pub fn new(registry: SolverRegistry, config: &Config) -> Result<Self, ExecutorError> {
        let thread_pool = rayon::ThreadPoolBuilder::new()
            .num_threads(config.thread_count)
            .build()
            .map_err(|e| ExecutorError::ThreadPool(e.to_string()))?;

        Ok(Self {
            sync_executor_config: SyncExecutorConfig {
                registry,
                inputs: InputStore::new(config.input_dir.clone()),
                parallelize_by: config.parallelize_by,
                year_filter: config.year_filter,
                day_filter: config.day_filter,
                part_filter: config.part_filter,
            },
            thread_pool,
        })
    }

    pub fn registry(&self) -> &SolverRegistry {
        &self.sync_executor_config.registry
    }

    pub fn inputs(&self) -> &InputStore {
        &self.sync_executor_config.inputs
    }

    /// Collect work items by filtering from registry metadata
    pub fn collect_work_items(&self) -> Vec<WorkItem> {
        let cfg = &self.sync_executor_config;
        cfg.registry
            .iter_info()
            .filter(|info| cfg.year_filter.is_none_or(|y| info.year == y))
            .filter(|info| cfg.day_filter.is_none_or(|d| info.day == d))
            .map(|info| WorkItem {
                year: info.year,
                day: info.day,
                parts: filter_parts(cfg.part_filter, info.parts),
            })
            .filter(|w| !w.parts.is_empty())
            .collect()
    }

    /// Execute all work items and send results to channel
    pub fn execute(&self, tx: Sender<SolverResult>) -> Result<(), ArcExecutorError> {
        let work_items = self.collect_work_items();
        info!(
            solvers = work_items.len(),
            mode = ?self.sync_executor_config.parallelize_by,
            "starting run"
        );

        match self.sync_executor_config.parallelize_by {
            ParallelizeBy::Sequential => {
                let mut collected_error: Option<ArcExecutorError> = None;
                for work in work_items {
                    if let Err(e) = run_work_item(&work, &tx, &self.sync_executor_config) {
                        collected_error = Some(ArcExecutorError::combine_opt(collected_error, e));
                    }
                }
                collected_error.map_or(Ok(()), Err)
            }
            ParallelizeBy::Year => {
                let by_year: Vec<Vec<WorkItem>> = work_items
                    .into_iter()
                    .chunk_by(|w| w.year)
                    .into_iter()
                    .map(|(_, group)| group.collect())
                    .collect();

                self.execute_parallel_grouped(by_year, &tx)
            }
            // Part additionally splits each work item inside run_work_item
            ParallelizeBy::Day | ParallelizeBy::Part => self.execute_parallel(work_items, &tx),
        }
    }

    /// Execute work items in parallel, collecting errors
    fn execute_parallel(
        &self,
        work_items: Vec<WorkItem>,
        tx: &Sender<SolverResult>,
    ) -> Result<(), ArcExecutorError> {
        let sync_executor_config = &self.sync_executor_config;

        self.thread_pool.install(|| {
            work_items
                .into_par_iter()
                .map(|work| run_work_item(&work, tx, sync_executor_config).err())
                .reduce_with(merge_errors)
                .unwrap_or_default()
                .map_or(Ok(()), Err)
        })
    }

    /// Execute grouped work items in parallel (for year-level parallelism)
    fn execute_parallel_grouped(
        &self,
        groups: Vec<Vec<WorkItem>>,
        tx: &Sender<SolverResult>,
    ) -> Result<(), ArcExecutorError> {
        let sync_executor_config = &self.sync_executor_config;

        self.thread_pool.install(|| {
            groups
                .into_par_iter()
                .map(|items| {
                    let mut err = None;
                    for work in items {
                        if let Err(e) = run_work_item(&work, tx, sync_executor_config) {
                            err = Some(ArcExecutorError::combine_opt(err, e))
                        }
                    }
                    err
                })
                .reduce_with(merge_errors)
                .unwrap_or_default()
                .map_or(Ok(()), Err)
        })
    }
}

/// Restrict a solver's parts to the part filter
#[allow(clippy::reversed_empty_ranges)]
fn filter_parts(part_filter: Option<u8>, max_parts: u8) -> RangeInclusive<u8> {
    match part_filter {
        Some(p) if p <= max_parts => p..=p,
        Some(_) => 1..=0,
        None => 1..=max_parts,
    }
}

fn merge_errors(
    first: Option<ArcExecutorError>,
    second: Option<ArcExecutorError>,
) -> Option<ArcExecutorError> {
    match (first, second) {
        (Some(a), Some(b)) => Some(ArcExecutorError::combine(a, b)),
        (a, b) => a.or(b),
    }
}

fn send(tx: &Sender<SolverResult>, result: SolverResult) -> Result<(), ArcExecutorError> {
    tx.send(result)
        .map_err(|_| ExecutorError::ChannelSend.into())
}

/// Send the same failure for every part of a work item
fn send_failure(
    work: &WorkItem,
    tx: &Sender<SolverResult>,
    error: ArcExecutorError,
) -> Result<(), ArcExecutorError> {
    for part in work.parts.clone() {
        send(
            tx,
            SolverResult::failed(work.year, work.day, part, error.clone()),
        )?;
    }
    Ok(())
}

/// Load the input for one work item and solve its parts.
///
/// Input and parse failures become error results; only a closed channel is
/// returned as an error.
fn run_work_item(
    work: &WorkItem,
    tx: &Sender<SolverResult>,
    sync_executor_config: &SyncExecutorConfig,
) -> Result<(), ArcExecutorError> {
    let (year, day) = (work.year, work.day);

    let input = match sync_executor_config.inputs.read(year, day) {
        Ok(input) => input,
        Err(source) => {
            debug!(year, day, error = %source, "input unavailable");
            let error = ExecutorError::Input { year, day, source }.into();
            return send_failure(work, tx, error);
        }
    };

    if matches!(sync_executor_config.parallelize_by, ParallelizeBy::Part) {
        run_solver_parts_parallel(work, &input, tx, &sync_executor_config.registry)
    } else {
        run_solver_sequential(work, &input, tx, &sync_executor_config.registry)
    }
}

/// Solve each part from its own parse, in parallel, emitting in part order
fn run_solver_parts_parallel(
    work: &WorkItem,
    input: &str,
    tx: &Sender<SolverResult>,
    registry: &SolverRegistry,
) -> Result<(), ArcExecutorError> {
    let (year, day) = (work.year, work.day);

    let mut results: Vec<SolverResult> = work
        .parts
        .clone()
        .into_par_iter()
        .map(|part| match registry.create_solver(year, day, input) {
            Ok(mut solver) => {
                let parse_duration = solver.parse_duration();
                let mut result = solve_part(year, day, part, &mut *solver);
                result.parse_duration = Some(parse_duration);
                result
            }
            Err(e) => SolverResult::failed(year, day, part, ExecutorError::from(e).into()),
        })
        .collect();

    results.sort_by_key(|r| r.part);
    for result in results {
        send(tx, result)?;
    }
    Ok(())
}

/// Parse once and solve the parts in order
fn run_solver_sequential(
    work: &WorkItem,
    input: &str,
    tx: &Sender<SolverResult>,
    registry: &SolverRegistry,
) -> Result<(), ArcExecutorError> {
    let (year, day) = (work.year, work.day);

    let mut solver = match registry.create_solver(year, day, input) {
        Ok(solver) => solver,
        Err(e) => return send_failure(work, tx, ExecutorError::from(e).into()),
    };

    let mut parse_duration = Some(solver.parse_duration());
    for part in work.parts.clone() {
        let mut result = solve_part(year, day, part, &mut *solver);
        result.parse_duration = parse_duration.take();
        send(tx, result)?;
    }
    Ok(())
}

/// Solve a single part
fn solve_part(year: u16, day: u8, part: u8, solver: &mut dyn DynSolver) -> SolverResult {
    match solver.solve(part) {
        Ok(solved) => SolverResult {
            year,
            day,
            part,
            solve_duration: solved.duration(),
            answer: Ok(solved.answer),
            parse_duration: None,
        },
        Err(e) => {
            let error = ExecutorError::Solver(aoc_solver::SolverError::from(e));
            SolverResult::failed(year, day, part, error.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Args;
    use aoc_solver::{
        AocParser, AocSolver, ParseError, PartSolver, RegistryBuilder, SolveError, register_solver,
    };
    use clap::Parser;
    use std::fs;
    use tempfile::TempDir;

    #[derive(AocSolver)]
    #[aoc_solver(max_parts = 2)]
    struct Words;

    impl AocParser for Words {
        type SharedData<'a> = Vec<&'a str>;

        fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
            let words: Vec<&str> = input.split_whitespace().collect();
            if words.is_empty() {
                return Err(ParseError::MissingData("no words".into()));
            }
            Ok(words)
        }
    }

    impl PartSolver<1> for Words {
        fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
            Ok(shared.len().to_string())
        }
    }

    impl PartSolver<2> for Words {
        fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
            if shared.contains(&"fail") {
                return Err(SolveError::SolveFailed("asked to fail".into()));
            }
            Ok(shared.join("-"))
        }
    }

    fn executor(dir: &TempDir, extra: &[&str]) -> Executor {
        let registry = RegistryBuilder::new();
        let registry = register_solver!(registry, Words, 2024, 1).unwrap();
        let registry = register_solver!(registry, Words, 2024, 2).unwrap();
        let registry = register_solver!(registry, Words, 2023, 7).unwrap();
        let registry = registry.build();

        let dir = dir.path().to_str().unwrap();
        let mut argv = vec!["aoc", "--input-dir", dir, "--threads", "2"];
        argv.extend_from_slice(extra);
        let config = Config::from_args(Args::try_parse_from(argv).unwrap()).unwrap();
        Executor::new(registry, &config).unwrap()
    }

    fn run(executor: &Executor) -> Vec<SolverResult> {
        let (tx, rx) = std::sync::mpsc::channel();
        executor.execute(tx).unwrap();
        let mut results: Vec<SolverResult> = rx.into_iter().collect();
        results.sort_by_key(|r| (r.year, r.day, r.part));
        results
    }

    fn write_inputs(dir: &TempDir) {
        let store = InputStore::new(dir.path().to_path_buf());
        fs::write(store.path(2023, 7), "a b c").unwrap();
        fs::write(store.path(2024, 1), "x fail").unwrap();
    }

    #[test]
    fn test_collect_work_items_applies_filters() {
        let dir = TempDir::new().unwrap();

        let all = executor(&dir, &[]).collect_work_items();
        assert_eq!(
            all.iter().map(|w| (w.year, w.day)).collect::<Vec<_>>(),
            vec![(2023, 7), (2024, 1), (2024, 2)]
        );
        assert!(all.iter().all(|w| w.parts == (1..=2)));

        let filtered = executor(&dir, &["--year", "2024", "--part", "2"]).collect_work_items();
        assert_eq!(filtered, vec![
            WorkItem {
                year: 2024,
                day: 1,
                parts: 2..=2,
            },
            WorkItem {
                year: 2024,
                day: 2,
                parts: 2..=2,
            },
        ]);
    }

    #[test]
    fn test_every_mode_reports_every_part() {
        let dir = TempDir::new().unwrap();
        write_inputs(&dir);

        for mode in ["sequential", "year", "day", "part"] {
            let results = run(&executor(&dir, &["--parallelize-by", mode]));
            assert_eq!(results.len(), 6, "mode {mode}");

            let answers: Vec<Option<&str>> = results
                .iter()
                .map(|r| r.answer.as_deref().ok())
                .collect();
            assert_eq!(
                answers,
                vec![Some("3"), Some("a-b-c"), Some("2"), None, None, None],
                "mode {mode}"
            );
        }
    }

    #[test]
    fn test_missing_input_fails_only_that_puzzle() {
        let dir = TempDir::new().unwrap();
        write_inputs(&dir);

        let results = run(&executor(&dir, &["--day", "2"]));
        assert_eq!(results.len(), 2);
        for result in &results {
            let err = result.answer.as_ref().unwrap_err();
            assert!(matches!(err.inner(), ExecutorError::Input { year: 2024, day: 2, .. }));
        }
    }

    #[test]
    fn test_parse_time_counted_once_per_parse() {
        let dir = TempDir::new().unwrap();
        write_inputs(&dir);

        let results = run(&executor(&dir, &["--year", "2023", "--parallelize-by", "day"]));
        assert!(results[0].parse_duration.is_some());
        assert!(results[1].parse_duration.is_none());

        let results = run(&executor(&dir, &["--year", "2023", "--parallelize-by", "part"]));
        assert!(results.iter().all(|r| r.parse_duration.is_some()));
    }
}
