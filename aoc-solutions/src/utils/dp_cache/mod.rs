//! Memoization cache for recursive puzzle computations
//!
//! Values are defined by a [`DpProblem`]: each index names the indices it
//! depends on and how to combine their values. [`DpCache`] resolves those
//! dependencies lazily and computes every index at most once.
//!
//! # Backends
//!
//! - [`VecBackend`]: dense `usize` indices, grows on demand
//! - [`HashMapBackend`]: any `Hash + Eq` index, for sparse or composite keys
//!
//! # Warning: Cycle Behavior
//!
//! There is no cycle detection. A dependency cycle recurses until the stack
//! overflows, so callers must keep the dependency graph acyclic.
//!
//! # Example
//!
//! ```rust
//! use aoc_solutions::utils::dp_cache::{DpCache, DpProblem, HashMapBackend};
//!
//! /// Number of stones one engraved stone becomes after `blinks` blinks
//! struct Stones;
//!
//! impl DpProblem<(u64, u8), u64> for Stones {
//!     fn deps(&self, &(stone, blinks): &(u64, u8)) -> Vec<(u64, u8)> {
//!         if blinks == 0 {
//!             vec![]
//!         } else if stone == 0 {
//!             vec![(1, blinks - 1)]
//!         } else {
//!             vec![(stone * 2024, blinks - 1)]
//!         }
//!     }
//!
//!     fn compute(&self, _index: &(u64, u8), deps: Vec<u64>) -> u64 {
//!         if deps.is_empty() { 1 } else { deps.iter().sum() }
//!     }
//! }
//!
//! let cache = DpCache::with_problem(HashMapBackend::new(), Stones);
//! assert_eq!(cache.get(&(0, 5)), 1);
//! ```
//!
//! # Example: closures
//!
//! ```rust
//! use aoc_solutions::utils::dp_cache::{DpCache, VecBackend};
//!
//! let fib = DpCache::new(
//!     VecBackend::new(),
//!     |n: &usize| if *n <= 1 { vec![] } else { vec![n - 1, n - 2] },
//!     |n: &usize, deps: Vec<u64>| if *n <= 1 { *n as u64 } else { deps[0] + deps[1] },
//! );
//!
//! assert_eq!(fib.get(&10), 55);
//! ```

mod backend;
mod cache;
mod problem;

pub use backend::{Backend, HashMapBackend, VecBackend};
pub use cache::{ClosureProblem, DpCache};
pub use problem::DpProblem;

#[cfg(test)]
mod tests;
