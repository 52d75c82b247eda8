//! Output formatting for solver results

use crate::executor::SolverResult;
use std::time::Duration;

/// Output formatter for solver results
pub struct OutputFormatter {
    quiet: bool,
}

impl OutputFormatter {
    /// Create a new output formatter
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    /// Format and print a single result
    pub fn print_result(&self, result: &SolverResult) {
        println!("{}", self.format_result(result));
    }

    fn format_result(&self, result: &SolverResult) -> String {
        if self.quiet {
            return result.answer.to_string();
        }

        let key = &result.key;
        format!(
            "The result for Advent of Code {} day {} part {} is: {} (solve: {})",
            key.year,
            key.day,
            key.part,
            result.answer,
            format_duration(result.solve_duration)
        )
    }
}

/// Format a Duration for display
fn format_duration(d: Duration) -> String {
    let micros = d.as_micros();
    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", d.as_secs_f64())
    }
}
