//! Advent of Code 2019 day 1 (`year_2019_day_01`)

use aoc_solver::{Answer, SolveError};

// Helpers ---------------------------------------------------------------------
fn masses(input: &str) -> Result<Vec<Answer>, SolveError> {
    input
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .enumerate()
        .map(|(idx, line)| {
            line.parse::<Answer>()
                .map_err(|e| SolveError::InvalidInput(format!("(line {}) {}", idx + 1, e)))
        })
        .collect()
}

fn fuel(mass: Answer) -> Answer {
    (mass / 3 - 2).max(0)
}

/// Fuel for a module plus the fuel for that fuel, until it rounds to nothing
fn total_fuel(mass: Answer) -> Answer {
    std::iter::successors(Some(fuel(mass)), |&f| Some(fuel(f)))
        .take_while(|&f| f > 0)
        .sum()
}

// Solvers ---------------------------------------------------------------------
pub fn part1(input: &str) -> Result<Answer, SolveError> {
    Ok(masses(input)?.into_iter().map(fuel).sum())
}

pub fn part2(input: &str) -> Result<Answer, SolveError> {
    Ok(masses(input)?.into_iter().map(total_fuel).sum())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_part1_examples() {
        assert_eq!(part1("12").unwrap(), 2);
        assert_eq!(part1("14").unwrap(), 2);
        assert_eq!(part1("1969").unwrap(), 654);
        assert_eq!(part1("100756").unwrap(), 33583);
        assert_eq!(part1("12\n14\n1969\n100756\n").unwrap(), 2 + 2 + 654 + 33583);
    }

    #[test]
    fn test_part2_examples() {
        assert_eq!(part2("14").unwrap(), 2);
        assert_eq!(part2("1969").unwrap(), 966);
        assert_eq!(part2("100756").unwrap(), 50346);
    }

    #[test]
    fn test_tiny_mass_needs_no_fuel() {
        assert_eq!(part1("2").unwrap(), 0);
        assert_eq!(part2("2").unwrap(), 0);
    }

    #[test]
    fn test_invalid_line_reported() {
        let err = part1("12\nabc\n").unwrap_err();
        assert!(err.to_string().contains("(line 2)"));
    }

    proptest! {
        /// Counting fuel for the fuel never lowers the total
        #[test]
        fn prop_part2_at_least_part1(masses in prop::collection::vec(0i64..1_000_000, 0..50)) {
            let input: String = masses.iter().map(|m| format!("{}\n", m)).collect();
            let p1 = part1(&input).unwrap();
            let p2 = part2(&input).unwrap();

            prop_assert!(p2 >= p1);
            prop_assert!(p1 >= 0);
        }
    }
}
