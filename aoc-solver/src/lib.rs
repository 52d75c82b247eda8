//! Advent of Code Solver Library
//!
//! The host side of the toolkit: the signature every solution part
//! implements, the errors it may return, and the registry that routes puzzle
//! input to the right part by `(day, part, year)`.
//!
//! # Quick Example
//!
//! ```
//! use aoc_solver::{Answer, Registration, SolutionRegistry, SolveError};
//!
//! fn part1(input: &str) -> Result<Answer, SolveError> {
//!     input
//!         .lines()
//!         .map(|l| l.parse::<Answer>().map_err(|e| SolveError::InvalidInput(e.to_string())))
//!         .sum()
//! }
//!
//! fn part2(_input: &str) -> Result<Answer, SolveError> {
//!     Err(SolveError::NotImplemented("year_2019_day_01::part2"))
//! }
//!
//! static REGISTRATIONS: &[Registration] = &[
//!     Registration::new(1, 1, 2019, part1),
//!     Registration::new(1, 2, 2019, part2),
//! ];
//!
//! let registry = SolutionRegistry::from_registrations(REGISTRATIONS).unwrap();
//! assert_eq!(registry.dispatch("1\n2\n3", 1, 1, 2019).unwrap(), 6);
//! assert!(registry.dispatch("1\n2\n3", 1, 2, 2019).is_err());
//! ```

mod error;
mod registry;

pub use error::{RegistrationError, SolveError, SolverError};
pub use registry::{
    Answer, MAX_DAY, PARTS, Registration, RegistryBuilder, Solution, SolutionKey, SolutionRegistry,
};

/// Year used when a command is run without `--year`
pub const DEFAULT_YEAR: u16 = 2019;
