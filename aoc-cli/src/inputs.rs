//! Puzzle inputs stored as plain files

use crate::error::InputError;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

/// Directory of puzzle inputs
///
/// Layout: `{input_dir}/{year}_day{day:02}.txt`
#[derive(Debug, Clone)]
pub struct InputStore {
    dir: PathBuf,
}

impl InputStore {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Path of the input for a specific year/day
    pub fn path(&self, year: u16, day: u8) -> PathBuf {
        self.dir.join(format!("{}_day{:02}.txt", year, day))
    }

    /// Check if the input file is present
    pub fn contains(&self, year: u16, day: u8) -> bool {
        self.path(year, day).is_file()
    }

    /// Read the input for a year/day
    pub fn read(&self, year: u16, day: u8) -> Result<String, InputError> {
        let path = self.path(year, day);
        fs::read_to_string(&path).map_err(|source| match source.kind() {
            ErrorKind::NotFound => InputError::Missing { path },
            _ => InputError::Io { path, source },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_path_format() {
        let store = InputStore::new(PathBuf::from("/inputs"));

        assert_eq!(store.path(2024, 1), PathBuf::from("/inputs/2024_day01.txt"));
        assert_eq!(store.path(2023, 25), PathBuf::from("/inputs/2023_day25.txt"));
    }

    #[test]
    fn test_read_present_input() {
        let temp = TempDir::new().unwrap();
        let store = InputStore::new(temp.path().to_path_buf());

        assert!(!store.contains(2024, 15));
        fs::write(store.path(2024, 15), "#@#\n\n<\n").unwrap();

        assert!(store.contains(2024, 15));
        assert_eq!(store.read(2024, 15).unwrap(), "#@#\n\n<\n");
    }

    #[test]
    fn test_missing_input() {
        let temp = TempDir::new().unwrap();
        let store = InputStore::new(temp.path().to_path_buf());

        match store.read(2024, 3) {
            Err(InputError::Missing { path }) => assert_eq!(path, store.path(2024, 3)),
            other => panic!("expected missing input, got {other:?}"),
        }
    }

    #[test]
    fn test_directory_in_place_of_file() {
        let temp = TempDir::new().unwrap();
        let store = InputStore::new(temp.path().to_path_buf());
        fs::create_dir(store.path(2024, 4)).unwrap();

        assert!(!store.contains(2024, 4));
        assert!(matches!(store.read(2024, 4), Err(InputError::Io { .. })));
    }
}
