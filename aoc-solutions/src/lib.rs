//! Advent of Code puzzle solutions and their dispatch table
//!
//! `aoc-new --day <d> --year <y>` writes `src/year_<y>/day_<dd>.rs` and
//! splices one module line above the year's `IMPORT` marker and two
//! registrations below its `SOLUTION` marker. Keep each marker on a line of
//! its own; add a pair of markers before scaffolding a new year.

use aoc_solver::{Registration, RegistrationError, SolutionRegistry};

// Modules ---------------------------------------------------------------------
#[path = "year_2019/day_01.rs"] pub mod year_2019_day_01;
// << INJECT 2019 IMPORT >>

// << INJECT 2020 IMPORT >>

// Registrations ---------------------------------------------------------------
/// Every solution part, as `(day, part, year) -> function`
pub static REGISTRATIONS: &[Registration] = &[
    // << INJECT 2019 SOLUTION >>
    Registration::new(1, 1, 2019, year_2019_day_01::part1),
    Registration::new(1, 2, 2019, year_2019_day_01::part2),
    // << INJECT 2020 SOLUTION >>
];

/// Build the registry the runner dispatches through
pub fn registry() -> Result<SolutionRegistry, RegistrationError> {
    SolutionRegistry::from_registrations(REGISTRATIONS)
}
