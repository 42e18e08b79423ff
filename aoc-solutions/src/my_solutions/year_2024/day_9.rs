//! Disk Fragmenter: compacting files on a disk map

use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 9, tags = ["simulation"])]
pub struct Solver;

/// A run of blocks on the disk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    start: usize,
    len: usize,
}

#[derive(Debug)]
pub struct SharedData {
    /// Indexed by file ID
    files: Vec<Span>,
    gaps: Vec<Span>,
}

fn checksum(blocks: impl Iterator<Item = (usize, usize)>) -> u64 {
    blocks.map(|(pos, id)| (pos * id) as u64).sum()
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let mut files = Vec::new();
        let mut gaps = Vec::new();
        let mut start = 0;

        for (idx, c) in input.trim().chars().enumerate() {
            let len = c.to_digit(10).ok_or_else(|| {
                ParseError::InvalidFormat(format!("(column {}) expected a digit, found {c:?}", idx + 1))
            })? as usize;
            let span = Span { start, len };
            if idx % 2 == 0 {
                files.push(span);
            } else {
                gaps.push(span);
            }
            start += len;
        }

        if files.is_empty() {
            return Err(ParseError::MissingData("empty disk map".into()));
        }
        Ok(SharedData { files, gaps })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut blocks: Vec<Option<usize>> = Vec::new();
        for (id, file) in shared.files.iter().enumerate() {
            blocks.resize(file.start, None);
            blocks.extend(std::iter::repeat_n(Some(id), file.len));
        }

        // Move the last file block into the first free block until none are left of it
        let (mut left, mut right) = (0, blocks.len());
        loop {
            while left < right && blocks[left].is_some() {
                left += 1;
            }
            while right > left && blocks[right - 1].is_none() {
                right -= 1;
            }
            if right - left < 2 {
                break;
            }
            blocks.swap(left, right - 1);
        }

        let total = checksum(
            blocks
                .iter()
                .enumerate()
                .filter_map(|(pos, id)| id.map(|id| (pos, id))),
        );
        Ok(total.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut files = shared.files.clone();
        let mut gaps = shared.gaps.clone();

        for file in files.iter_mut().rev() {
            let Some(gap) = gaps
                .iter_mut()
                .take_while(|gap| gap.start < file.start)
                .find(|gap| gap.len >= file.len)
            else {
                continue;
            };
            file.start = gap.start;
            gap.start += file.len;
            gap.len -= file.len;
        }

        let total = checksum(
            files
                .iter()
                .enumerate()
                .flat_map(|(id, file)| (file.start..file.start + file.len).map(move |pos| (pos, id))),
        );
        Ok(total.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    #[test]
    fn test_example() {
        let mut shared = Solver::parse("2333133121414131402\n").unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "1928");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "2858");
    }

    #[test]
    fn test_single_file() {
        let mut shared = Solver::parse("3").unwrap();
        // 0*0 + 1*0 + 2*0
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "0");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "0");
    }

    #[test]
    fn test_rejects_non_digit() {
        assert!(matches!(
            Solver::parse("12a4"),
            Err(ParseError::InvalidFormat(_))
        ));
    }
}
