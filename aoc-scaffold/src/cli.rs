//! CLI argument parsing using clap

use aoc_solver::{DEFAULT_YEAR, MAX_DAY};
use clap::Parser;
use std::path::PathBuf;

/// Advent of Code solution scaffolding
#[derive(Parser, Debug)]
#[command(name = "aoc-new", about = "Create a solution module and register it for dispatch", version)]
pub struct Args {
    /// Day to scaffold
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=MAX_DAY as i64))]
    pub day: u8,

    /// Year to scaffold
    #[arg(short, long, default_value_t = DEFAULT_YEAR)]
    pub year: u16,

    /// Root of the solutions crate
    #[arg(long, default_value = "aoc-solutions")]
    pub root: PathBuf,

    /// Log injection positions
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["aoc-new", "-d", "7"]).unwrap();
        assert_eq!(args.day, 7);
        assert_eq!(args.year, DEFAULT_YEAR);
        assert_eq!(args.root, PathBuf::from("aoc-solutions"));
    }

    #[test]
    fn test_long_flags() {
        let args = Args::try_parse_from(["aoc-new", "--day", "31", "--year", "2020", "--root", "/tmp/sol"]).unwrap();
        assert_eq!((args.day, args.year), (31, 2020));
        assert_eq!(args.root, PathBuf::from("/tmp/sol"));
    }

    #[test]
    fn test_day_required_and_bounded() {
        assert!(Args::try_parse_from(["aoc-new"]).is_err());
        assert!(Args::try_parse_from(["aoc-new", "-d", "0"]).is_err());
        assert!(Args::try_parse_from(["aoc-new", "-d", "32"]).is_err());
    }
}
