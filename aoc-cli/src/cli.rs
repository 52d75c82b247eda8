//! CLI argument parsing using clap

use aoc_http_client::DEFAULT_BASE_URL;
use aoc_solver::DEFAULT_YEAR;
use clap::Parser;
use std::path::PathBuf;

/// Advent of Code solution runner
#[derive(Parser, Debug)]
#[command(name = "aoc", about = "Run an Advent of Code solution against your puzzle input", version)]
pub struct Args {
    /// Day to run
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=31))]
    pub day: u8,

    /// Part to run
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=2))]
    pub part: u8,

    /// Year to run
    #[arg(short, long, default_value_t = DEFAULT_YEAR)]
    pub year: u16,

    /// Directory holding cached inputs as `<year>/<day>.json`
    #[arg(long, default_value = "data")]
    pub data_dir: PathBuf,

    /// JSON file holding the session cookie [default: <DATA_DIR>/session.json]
    #[arg(long)]
    pub session_file: Option<PathBuf>,

    /// Server to fetch puzzle input from
    #[arg(long, default_value = DEFAULT_BASE_URL, hide = true)]
    pub base_url: String,

    /// Quiet mode - only output the answer
    #[arg(short, long)]
    pub quiet: bool,

    /// Log cache and fetch decisions
    #[arg(short, long)]
    pub verbose: bool,
}
