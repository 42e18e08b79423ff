use aoc_solver::{AocParser, AocSolver, ParseError, PartSolver, SolveError, Solver};

#[derive(Debug, Clone)]
struct SharedData {
    numbers: Vec<i32>,
    sum: Option<i32>,
}

#[derive(AocSolver)]
#[aoc_solver(max_parts = 4)]
struct TestResultReturns;

impl AocParser for TestResultReturns {
    type SharedData<'a> = SharedData;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let numbers: Vec<i32> = input
            .lines()
            .map(|line| {
                line.trim()
                    .parse::<i32>()
                    .map_err(|_| ParseError::InvalidFormat("Expected integer".into()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(SharedData { numbers, sum: None })
    }
}

// Part 1: sum, stored for later parts
impl PartSolver<1> for TestResultReturns {
    fn solve(shared: &mut SharedData) -> Result<String, SolveError> {
        let sum: i32 = shared.numbers.iter().sum();
        shared.sum = Some(sum);
        Ok(sum.to_string())
    }
}

// Part 2: product, fails on empty input
impl PartSolver<2> for TestResultReturns {
    fn solve(shared: &mut SharedData) -> Result<String, SolveError> {
        if shared.numbers.is_empty() {
            Err(SolveError::SolveFailed("Empty input".into()))
        } else {
            Ok(shared.numbers.iter().product::<i32>().to_string())
        }
    }
}

impl PartSolver<3> for TestResultReturns {
    fn solve(shared: &mut SharedData) -> Result<String, SolveError> {
        Ok(shared.numbers.len().to_string())
    }
}

// Part 4: needs part 1's sum
impl PartSolver<4> for TestResultReturns {
    fn solve(shared: &mut SharedData) -> Result<String, SolveError> {
        match shared.sum {
            Some(prev_sum) => {
                let product: i32 = shared.numbers.iter().product();
                Ok((prev_sum + product).to_string())
            }
            None => Err(SolveError::SolveFailed("No previous data".into())),
        }
    }
}

fn shared(numbers: Vec<i32>) -> SharedData {
    SharedData { numbers, sum: None }
}

#[test]
fn test_ok_return() {
    let mut data = shared(vec![2, 3, 4]);
    assert_eq!(TestResultReturns::solve_part(&mut data, 2).unwrap(), "24");
}

#[test]
fn test_err_return() {
    let mut data = shared(vec![]);
    let result = TestResultReturns::solve_part(&mut data, 2);
    assert!(matches!(result, Err(SolveError::SolveFailed(_))));
}

#[test]
fn test_four_parts_dispatch() {
    let mut data = shared(vec![2, 3]);
    assert_eq!(TestResultReturns::solve_part(&mut data, 3).unwrap(), "2");
    assert_eq!(TestResultReturns::solve_part(&mut data, 1).unwrap(), "5");
    assert_eq!(TestResultReturns::solve_part(&mut data, 4).unwrap(), "11");
}

#[test]
fn test_part4_without_part1_data() {
    let mut data = shared(vec![2, 3]);
    assert!(TestResultReturns::solve_part(&mut data, 4).is_err());
}

#[test]
fn test_part_beyond_max_not_implemented() {
    let mut data = shared(vec![1]);
    let result = TestResultReturns::solve_part(&mut data, 5);
    assert!(matches!(result, Err(SolveError::PartNotImplemented(5))));
}
