use aoc_solver::{AocParser, AocSolver, ParseError, PartSolver, SolveError, Solver};

#[derive(Debug, Clone)]
struct SharedData {
    numbers: Vec<i32>,
    sum: Option<i32>,
    count: Option<usize>,
}

#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
struct TestDependentSolver;

impl AocParser for TestDependentSolver {
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

        Ok(SharedData {
            numbers,
            sum: None,
            count: None,
        })
    }
}

impl PartSolver<1> for TestDependentSolver {
    fn solve(shared: &mut SharedData) -> Result<String, SolveError> {
        let sum: i32 = shared.numbers.iter().sum();
        shared.sum = Some(sum);
        shared.count = Some(shared.numbers.len());
        Ok(sum.to_string())
    }
}

impl PartSolver<2> for TestDependentSolver {
    fn solve(shared: &mut SharedData) -> Result<String, SolveError> {
        // Reuse part 1's work when it ran first
        let sum = shared.sum.unwrap_or_else(|| shared.numbers.iter().sum());
        let count = shared.count.unwrap_or(shared.numbers.len());

        let avg = if count > 0 {
            sum as f64 / count as f64
        } else {
            0.0
        };
        Ok(format!("{:.2}", avg))
    }
}

#[test]
fn test_part1_stores_data() {
    let mut shared = TestDependentSolver::parse("10\n20\n30").unwrap();

    let result = TestDependentSolver::solve_part(&mut shared, 1).unwrap();
    assert_eq!(result, "60");
    assert_eq!(shared.sum, Some(60));
    assert_eq!(shared.count, Some(3));
}

#[test]
fn test_part2_uses_part1_data() {
    let mut shared = TestDependentSolver::parse("10\n20\n30").unwrap();

    TestDependentSolver::solve_part(&mut shared, 1).unwrap();
    // Tamper with the stored sum to prove part 2 reads it
    shared.sum = Some(90);

    let result = TestDependentSolver::solve_part(&mut shared, 2).unwrap();
    assert_eq!(result, "30.00");
}

#[test]
fn test_part2_solves_independently() {
    let mut shared = TestDependentSolver::parse("10\n20\n30").unwrap();

    let result = TestDependentSolver::solve_part(&mut shared, 2).unwrap();
    assert_eq!(result, "20.00");
}

#[test]
fn test_parts_constant_matches_attribute() {
    assert_eq!(<TestDependentSolver as Solver>::PARTS, 2);
}
