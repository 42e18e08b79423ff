//! Tests for the DP cache module.

use std::cell::Cell;
use std::rc::Rc;

use super::*;

struct Fibonacci;

impl DpProblem<usize, u64> for Fibonacci {
    fn deps(&self, n: &usize) -> Vec<usize> {
        if *n <= 1 { vec![] } else { vec![n - 1, n - 2] }
    }

    fn compute(&self, n: &usize, deps: Vec<u64>) -> u64 {
        if *n <= 1 { *n as u64 } else { deps[0] + deps[1] }
    }
}

/// Collatz steps to reach 1
struct Collatz;

impl DpProblem<u64, u64> for Collatz {
    fn deps(&self, n: &u64) -> Vec<u64> {
        if *n <= 1 {
            vec![]
        } else if n % 2 == 0 {
            vec![n / 2]
        } else {
            vec![3 * n + 1]
        }
    }

    fn compute(&self, _n: &u64, deps: Vec<u64>) -> u64 {
        deps.first().map_or(0, |d| d + 1)
    }
}

#[test]
fn test_fibonacci_linear_dependency_chain() {
    let cache = DpCache::with_problem(VecBackend::new(), Fibonacci);

    assert_eq!(cache.get(&0), 0);
    assert_eq!(cache.get(&1), 1);
    assert_eq!(cache.get(&5), 5);
    assert_eq!(cache.get(&20), 6765);
    assert_eq!(cache.cached_len(), 21);
}

#[test]
fn test_diamond_dependency_memoization() {
    // 0 depends on 1 and 2, both depend on 3
    struct Diamond {
        count: Rc<Cell<i32>>,
    }

    impl DpProblem<usize, i32> for Diamond {
        fn deps(&self, n: &usize) -> Vec<usize> {
            match *n {
                0 => vec![1, 2],
                1 | 2 => vec![3],
                _ => vec![],
            }
        }

        fn compute(&self, n: &usize, deps: Vec<i32>) -> i32 {
            self.count.set(self.count.get() + 1);
            match *n {
                0 => deps[0] + deps[1],
                1 => deps[0] * 2,
                2 => deps[0] * 3,
                _ => 5,
            }
        }
    }

    let count = Rc::new(Cell::new(0));
    let cache = DpCache::with_problem(
        VecBackend::new(),
        Diamond {
            count: Rc::clone(&count),
        },
    );

    assert_eq!(cache.get(&0), 25);
    assert_eq!(count.get(), 4);

    // Cached lookups never recompute
    assert_eq!(cache.get(&0), 25);
    assert_eq!(cache.get(&3), 5);
    assert_eq!(count.get(), 4);
}

#[test]
fn test_hashmap_backend_sparse_indices() {
    let cache = DpCache::with_problem(HashMapBackend::new(), Collatz);

    assert_eq!(cache.get(&1), 0);
    assert_eq!(cache.get(&16), 4);
    assert_eq!(cache.get(&27), 111);
    assert_eq!(cache.get(&97), 118);
}

#[test]
fn test_closure_matches_trait_based() {
    let by_trait = DpCache::with_problem(VecBackend::new(), Fibonacci);
    let by_closure = DpCache::new(
        VecBackend::new(),
        |n: &usize| if *n <= 1 { vec![] } else { vec![n - 1, n - 2] },
        |n: &usize, deps: Vec<u64>| if *n <= 1 { *n as u64 } else { deps[0] + deps[1] },
    );

    for n in 0..40 {
        assert_eq!(by_trait.get(&n), by_closure.get(&n));
    }
}

#[test]
fn test_backend_insert_keeps_first_value() {
    let mut backend: HashMapBackend<&str, i32> = HashMapBackend::new();
    assert!(backend.is_empty());
    backend.insert("a", 1);
    backend.insert("a", 2);
    assert_eq!(backend.get(&"a"), Some(1));
    assert_eq!(backend.get(&"b"), None);

    let mut backend: VecBackend<i32> = VecBackend::with_capacity(4);
    backend.insert(3, 7);
    assert_eq!(backend.get(&3), Some(7));
    assert_eq!(backend.get(&0), None);
    assert_eq!(backend.get(&10), None);
    assert_eq!(backend.len(), 1);
}
