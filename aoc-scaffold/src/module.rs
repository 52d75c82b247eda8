//! Naming and template for a generated solution module

use std::path::PathBuf;

/// Module body written for a new day; both parts fail until implemented
const TEMPLATE: &str = r#"//! Advent of Code {year} day {day} (`{module}`)

use aoc_solver::{Answer, SolveError};

// Helpers ---------------------------------------------------------------------

// Solvers ---------------------------------------------------------------------
pub fn part1(_input: &str) -> Result<Answer, SolveError> {
    Err(SolveError::NotImplemented("{module}::part1"))
}

pub fn part2(_input: &str) -> Result<Answer, SolveError> {
    Err(SolveError::NotImplemented("{module}::part2"))
}
"#;

/// A solution module identified by year and day
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayModule {
    pub year: u16,
    pub day: u8,
}

impl DayModule {
    pub fn new(year: u16, day: u8) -> Self {
        Self { year, day }
    }

    /// Qualified module name, e.g. `year_2019_day_07`
    pub fn name(&self) -> String {
        format!("year_{}_day_{:02}", self.year, self.day)
    }

    /// Path of the module file relative to the `src` directory
    pub fn source_path(&self) -> String {
        format!("year_{}/day_{:02}.rs", self.year, self.day)
    }

    /// Path of the module file relative to the solutions crate root
    pub fn relative_path(&self) -> PathBuf {
        PathBuf::from("src").join(self.source_path())
    }

    /// Module file contents
    pub fn render(&self) -> String {
        TEMPLATE
            .replace("{year}", &self.year.to_string())
            .replace("{day}", &self.day.to_string())
            .replace("{module}", &self.name())
    }

    /// Line declaring the module in the registry
    pub fn import_line(&self) -> String {
        format!("#[path = \"{}\"] pub mod {};", self.source_path(), self.name())
    }

    /// Registration lines for part 1 and part 2, in that order
    pub fn registration_lines(&self) -> [String; 2] {
        [1, 2].map(|part| {
            format!(
                "    Registration::new({}, {}, {}, {}::part{}),",
                self.day,
                part,
                self.year,
                self.name(),
                part
            )
        })
    }
}
