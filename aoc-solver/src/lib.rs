//! Advent of Code Solver Library
//!
//! A small, type-safe framework for Advent of Code solutions. Each puzzle is a
//! solver with its own input parsing and one function per part; a registry
//! maps (year, day) to solvers so a runner can drive any of them uniformly.
//!
//! # Quick Example
//!
//! ```
//! use aoc_solver::{AocParser, AocSolver, ParseError, PartSolver, RegistryBuilder, SolveError, register_solver};
//!
//! #[derive(AocSolver)]
//! #[aoc_solver(max_parts = 2)]
//! pub struct Sums;
//!
//! impl AocParser for Sums {
//!     type SharedData<'a> = Vec<i64>;
//!
//!     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
//!         input
//!             .lines()
//!             .map(|l| l.parse().map_err(|_| ParseError::InvalidFormat("expected integer".into())))
//!             .collect()
//!     }
//! }
//!
//! impl PartSolver<1> for Sums {
//!     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
//!         Ok(shared.iter().sum::<i64>().to_string())
//!     }
//! }
//!
//! impl PartSolver<2> for Sums {
//!     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
//!         Ok(shared.iter().map(|n| n * n).sum::<i64>().to_string())
//!     }
//! }
//!
//! let registry = register_solver!(RegistryBuilder::new(), Sums, 2024, 1)
//!     .unwrap()
//!     .build();
//!
//! let mut solver = registry.create_solver(2024, 1, "1\n2\n3").unwrap();
//! assert_eq!(solver.solve(1).unwrap().answer, "6");
//! assert_eq!(solver.solve(2).unwrap().answer, "14");
//! ```
//!
//! # Key Concepts
//!
//! - [`AocParser`] turns raw input into `SharedData`, which every part of the
//!   solver reads and may update (a later part can reuse earlier work).
//! - [`PartSolver<N>`] solves part `N`; `#[derive(AocSolver)]` generates the
//!   [`Solver`] impl that dispatches a runtime part number to it.
//! - [`DynSolver`] is the type-erased view the registry hands out.
//! - `#[derive(AutoRegisterSolver)]` (from `aoc-solver-macros`) submits a
//!   [`SolverPlugin`] so [`RegistryBuilder::register_all_plugins`] finds it.

mod error;
mod instance;
mod registry;
mod solver;

pub use error::{ParseError, RegistrationError, SolveError, SolverError};
pub use instance::{DynSolver, SolveResult, SolverInstance};
pub use registry::{
    FactoryInfo, RegisterableSolver, RegistryBuilder, SolverFactory, SolverPlugin, SolverRegistry,
    BASE_YEAR, CAPACITY, DAYS_PER_YEAR, MAX_YEARS,
};
pub use solver::{AocParser, PartSolver, Solver, SolverExt};

// Re-exported for the derive macros
pub use inventory;

pub use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
