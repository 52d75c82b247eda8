//! Dispatch registry mapping (day, part, year) to solution functions

use crate::error::{RegistrationError, SolveError, SolverError};
use std::collections::HashMap;
use std::fmt;

/// Numeric answer produced by a solution
pub type Answer = i64;

/// Signature every solution part implements
pub type Solution = fn(&str) -> Result<Answer, SolveError>;

/// Highest day number accepted for registration
pub const MAX_DAY: u8 = 31;

/// Number of parts per puzzle
pub const PARTS: u8 = 2;

/// Key identifying one solution part
///
/// Field order follows the `(day, part, year)` tuples written into the
/// registry file, while ordering sorts by year, then day, then part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SolutionKey {
    pub day: u8,
    pub part: u8,
    pub year: u16,
}

impl SolutionKey {
    pub const fn new(day: u8, part: u8, year: u16) -> Self {
        Self { day, part, year }
    }
}

impl Ord for SolutionKey {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.year, self.day, self.part).cmp(&(other.year, other.day, other.part))
    }
}

impl PartialOrd for SolutionKey {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for SolutionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{:02} part {}", self.year, self.day, self.part)
    }
}

/// One registration line of the dispatch table
///
/// `new` is a `const fn` so the table can live in a `static` slice:
///
/// ```
/// use aoc_solver::{Answer, Registration, SolveError};
///
/// fn part1(input: &str) -> Result<Answer, SolveError> {
///     Ok(input.lines().count() as Answer)
/// }
///
/// static TABLE: &[Registration] = &[Registration::new(1, 1, 2019, part1)];
/// assert_eq!(TABLE[0].key.year, 2019);
/// ```
#[derive(Clone, Copy)]
pub struct Registration {
    pub key: SolutionKey,
    pub solution: Solution,
}

impl Registration {
    pub const fn new(day: u8, part: u8, year: u16, solution: Solution) -> Self {
        Self {
            key: SolutionKey::new(day, part, year),
            solution,
        }
    }
}

impl fmt::Debug for Registration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registration")
            .field("key", &self.key)
            .finish_non_exhaustive()
    }
}

/// Builder for constructing a [`SolutionRegistry`]
///
/// # Example
///
/// ```
/// use aoc_solver::{Answer, RegistryBuilder, SolutionKey, SolveError};
///
/// fn part1(input: &str) -> Result<Answer, SolveError> {
///     Ok(input.len() as Answer)
/// }
///
/// let registry = RegistryBuilder::new()
///     .register(SolutionKey::new(1, 1, 2019), part1)
///     .unwrap()
///     .build();
///
/// assert_eq!(registry.dispatch("abc", 1, 1, 2019).unwrap(), 3);
/// ```
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    solutions: HashMap<SolutionKey, Solution>,
}

impl RegistryBuilder {
    /// Create a new empty registry builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a solution for a key
    ///
    /// A key that is already present keeps its first solution. Registry
    /// files can legitimately carry duplicated lines, so this only warns.
    pub fn register(mut self, key: SolutionKey, solution: Solution) -> Result<Self, RegistrationError> {
        if !(1..=PARTS).contains(&key.part) {
            return Err(RegistrationError::InvalidPart(key.part));
        }
        if !(1..=MAX_DAY).contains(&key.day) {
            return Err(RegistrationError::InvalidDay(key.day));
        }

        if self.solutions.contains_key(&key) {
            tracing::warn!(%key, "duplicate registration ignored");
        } else {
            self.solutions.insert(key, solution);
        }
        Ok(self)
    }

    /// Register every entry of a dispatch table, in order
    pub fn register_all(mut self, registrations: &[Registration]) -> Result<Self, RegistrationError> {
        for registration in registrations {
            self = self.register(registration.key, registration.solution)?;
        }
        Ok(self)
    }

    /// Finalize the builder into an immutable registry
    pub fn build(self) -> SolutionRegistry {
        SolutionRegistry {
            solutions: self.solutions,
        }
    }
}

/// Immutable registry routing input to solution functions
#[derive(Debug)]
pub struct SolutionRegistry {
    solutions: HashMap<SolutionKey, Solution>,
}

impl SolutionRegistry {
    /// Build a registry straight from a dispatch table
    pub fn from_registrations(registrations: &[Registration]) -> Result<Self, RegistrationError> {
        Ok(RegistryBuilder::new().register_all(registrations)?.build())
    }

    /// Run the solution registered for `(day, part, year)` on `input`
    ///
    /// # Returns
    /// * `Ok(Answer)` - The solution's answer
    /// * `Err(SolverError::NotFound)` - Nothing registered for the key
    /// * `Err(SolverError::Solve)` - The solution itself failed
    pub fn dispatch(&self, input: &str, day: u8, part: u8, year: u16) -> Result<Answer, SolverError> {
        let solution = self
            .solutions
            .get(&SolutionKey::new(day, part, year))
            .ok_or(SolverError::NotFound { day, part, year })?;

        Ok(solution(input)?)
    }

    /// Check if a solution is registered for the key
    pub fn contains(&self, day: u8, part: u8, year: u16) -> bool {
        self.solutions.contains_key(&SolutionKey::new(day, part, year))
    }

    /// All registered keys, sorted by year, day and part
    pub fn keys(&self) -> Vec<SolutionKey> {
        let mut keys: Vec<_> = self.solutions.keys().copied().collect();
        keys.sort();
        keys
    }

    /// Number of registered solution parts
    pub fn len(&self) -> usize {
        self.solutions.len()
    }

    /// Check if nothing is registered
    pub fn is_empty(&self) -> bool {
        self.solutions.is_empty()
    }
}
