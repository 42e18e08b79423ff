use aoc_solver::{
    AocParser, AocSolver, ParseError, PartSolver, RegistrationError, RegistryBuilder, SolveError,
    SolverError, register_solver,
};

#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
struct LineStats;

impl AocParser for LineStats {
    type SharedData<'a> = Vec<&'a str>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let lines: Vec<&str> = input.lines().collect();
        if lines.is_empty() {
            return Err(ParseError::MissingData("no lines".into()));
        }
        Ok(lines)
    }
}

impl PartSolver<1> for LineStats {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.len().to_string())
    }
}

impl PartSolver<2> for LineStats {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        shared
            .iter()
            .max_by_key(|l| l.len())
            .map(|l| l.to_string())
            .ok_or_else(|| SolveError::SolveFailed("no lines".into()))
    }
}

#[test]
fn test_register_and_create() {
    let registry = register_solver!(RegistryBuilder::new(), LineStats, 2024, 3)
        .unwrap()
        .build();

    assert_eq!(registry.len(), 1);
    assert!(registry.contains(2024, 3));
    assert!(!registry.contains(2024, 4));

    let mut solver = registry.create_solver(2024, 3, "a\nlonger\nmid").unwrap();
    assert_eq!(solver.year(), 2024);
    assert_eq!(solver.day(), 3);
    assert_eq!(solver.solve(1).unwrap().answer, "3");
    assert_eq!(solver.solve(2).unwrap().answer, "longer");
}

#[test]
fn test_duplicate_registration_rejected() {
    let builder = register_solver!(RegistryBuilder::new(), LineStats, 2024, 3).unwrap();
    let result = register_solver!(builder, LineStats, 2024, 3);

    assert!(matches!(
        result,
        Err(RegistrationError::DuplicateSolver(2024, 3))
    ));
}

#[test]
fn test_out_of_range_registration_rejected() {
    let result = register_solver!(RegistryBuilder::new(), LineStats, 2024, 26);
    assert!(matches!(
        result,
        Err(RegistrationError::InvalidYearDay(2024, 26))
    ));

    let result = register_solver!(RegistryBuilder::new(), LineStats, 1999, 1);
    assert!(matches!(
        result,
        Err(RegistrationError::InvalidYearDay(1999, 1))
    ));
}

#[test]
fn test_create_solver_errors() {
    let registry = register_solver!(RegistryBuilder::new(), LineStats, 2024, 3)
        .unwrap()
        .build();

    assert!(matches!(
        registry.create_solver(2024, 5, "x"),
        Err(SolverError::NotFound(2024, 5))
    ));
    assert!(matches!(
        registry.create_solver(2024, 0, "x"),
        Err(SolverError::InvalidYearDay(2024, 0))
    ));
    assert!(matches!(
        registry.create_solver(2024, 3, ""),
        Err(SolverError::ParseError(ParseError::MissingData(_)))
    ));
}

#[test]
fn test_iter_info_sorted_by_year_then_day() {
    let registry = RegistryBuilder::new();
    let registry = register_solver!(registry, LineStats, 2024, 9).unwrap();
    let registry = register_solver!(registry, LineStats, 2023, 20).unwrap();
    let registry = register_solver!(registry, LineStats, 2024, 1).unwrap();
    let registry = registry.build();

    let keys: Vec<(u16, u8)> = registry.iter_info().map(|i| (i.year, i.day)).collect();
    assert_eq!(keys, vec![(2023, 20), (2024, 1), (2024, 9)]);
    assert!(registry.iter_info().all(|i| i.parts == 2 && i.tags.is_empty()));
}

#[test]
fn test_empty_registry() {
    let registry = RegistryBuilder::default().build();
    assert!(registry.is_empty());
    assert_eq!(registry.iter_info().count(), 0);
}
