//! Input resolution and timed dispatch for a single solution part

use crate::cache::InputCache;
use crate::config::{Config, read_session};
use crate::error::{CliError, ExecutorError};
use aoc_http_client::AocClient;
use aoc_solver::{Answer, SolutionKey, SolutionRegistry};
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Result from a single solver execution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverResult {
    pub key: SolutionKey,
    pub answer: Answer,
    pub solve_duration: Duration,
}

/// Resolves input for a key and runs the registered solution on it
pub struct Executor {
    registry: SolutionRegistry,
    cache: InputCache,
    client: AocClient,
    session_file: PathBuf,
}

impl Executor {
    /// Create a new executor from config
    pub fn new(registry: SolutionRegistry, config: &Config) -> Result<Self, ExecutorError> {
        let client = AocClient::builder()
            .base_url(config.base_url.as_str())
            .and_then(|builder| builder.build())
            .map_err(ExecutorError::ClientInit)?;

        Ok(Self {
            registry,
            cache: InputCache::new(config.data_dir.clone()),
            client,
            session_file: config.session_file.clone(),
        })
    }

    /// Resolve the input, then dispatch and time the solution
    pub fn execute(&self, key: SolutionKey) -> Result<SolverResult, CliError> {
        let input = self.resolve_input(key.year, key.day)?;
        dispatch_timed(&self.registry, key, &input)
    }

    /// Get input for a year/day from the cache, fetching it on a miss
    pub fn resolve_input(&self, year: u16, day: u8) -> Result<String, ExecutorError> {
        match self.cache.get(year, day) {
            Ok(input) => {
                tracing::debug!(year, day, "using cached input");
                Ok(input)
            }
            Err(e) => {
                tracing::debug!(year, day, reason = %e, "no usable cached input");
                self.fetch_input(year, day)
            }
        }
    }

    /// Fetch from AoC and cache the response (warn on cache failure, don't fail the operation)
    fn fetch_input(&self, year: u16, day: u8) -> Result<String, ExecutorError> {
        let session = read_session(&self.session_file).map_err(|source| ExecutorError::Session {
            path: self.session_file.clone(),
            source,
        })?;

        tracing::info!(year, day, "fetching puzzle input");
        let input = self
            .client
            .get_input(year, day, &session)
            .map_err(|source| {
                tracing::error!(year, day, error = %source, "input fetch failed");
                ExecutorError::InputFetch { year, day, source }
            })?;
        tracing::info!(year, day, bytes = input.len(), "puzzle input fetched");

        if let Err(e) = self.cache.put(year, day, &input) {
            tracing::warn!(
                year,
                day,
                path = %self.cache.cache_path(year, day).display(),
                error = %e,
                "cache write failed"
            );
        }

        Ok(input)
    }
}

/// Run the registered solution, timing only the dispatch itself
pub fn dispatch_timed(registry: &SolutionRegistry, key: SolutionKey, input: &str) -> Result<SolverResult, CliError> {
    let started = Instant::now();
    let answer = registry
        .dispatch(input, key.day, key.part, key.year)
        .map_err(|source| CliError::Solver { key, source })?;

    Ok(report(key, answer, started))
}

fn report(key: SolutionKey, answer: Answer, started: Instant) -> SolverResult {
    SolverResult {
        key,
        answer,
        solve_duration: started.elapsed(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SESSION_FILE_NAME;
    use crate::error::SessionError;
    use aoc_solver::{Registration, SolveError, SolverError};
    use std::fs;
    use std::thread;
    use tempfile::TempDir;

    const SESSION: &str = "53616c7465645f5f0123456789abcdef";

    fn parse_number(input: &str) -> Result<Answer, SolveError> {
        input.trim().parse().map_err(|e: std::num::ParseIntError| SolveError::InvalidInput(e.to_string()))
    }

    fn slow_line_count(input: &str) -> Result<Answer, SolveError> {
        thread::sleep(Duration::from_millis(20));
        Ok(input.lines().count() as Answer)
    }

    fn placeholder(_input: &str) -> Result<Answer, SolveError> {
        Err(SolveError::NotImplemented("year_2019_day_01::part2"))
    }

    fn test_registry() -> SolutionRegistry {
        SolutionRegistry::from_registrations(&[
            Registration::new(1, 1, 2019, parse_number),
            Registration::new(1, 2, 2019, placeholder),
            Registration::new(2, 1, 2019, slow_line_count),
        ])
        .unwrap()
    }

    fn make_config(data_dir: PathBuf, base_url: String) -> Config {
        Config {
            key: SolutionKey::new(1, 1, 2019),
            session_file: data_dir.join(SESSION_FILE_NAME),
            data_dir,
            base_url,
            quiet: false,
        }
    }

    fn write_session(data_dir: &std::path::Path) {
        fs::create_dir_all(data_dir).unwrap();
        fs::write(data_dir.join(SESSION_FILE_NAME), serde_json::to_string(SESSION).unwrap()).unwrap();
    }

    #[test]
    fn test_cached_input_skips_fetch() {
        let temp = TempDir::new().unwrap();
        let mut server = mockito::Server::new();
        let mock = server.mock("GET", "/2019/day/1/input").expect(0).create();

        let config = make_config(temp.path().to_path_buf(), server.url());
        InputCache::new(config.data_dir.clone()).put(2019, 1, "42\n").unwrap();

        // No session file exists, so any fetch attempt would fail
        let executor = Executor::new(test_registry(), &config).unwrap();
        let result = executor.execute(SolutionKey::new(1, 1, 2019)).unwrap();

        assert_eq!(result.answer, 42);
        mock.assert();
    }

    #[test]
    fn test_cache_miss_fetches_and_caches() {
        let temp = TempDir::new().unwrap();
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/2019/day/1/input")
            .match_header("cookie", format!("session={}", SESSION).as_str())
            .with_status(200)
            .with_body("1969\n")
            .expect(1)
            .create();

        let config = make_config(temp.path().to_path_buf(), server.url());
        write_session(&config.data_dir);

        let executor = Executor::new(test_registry(), &config).unwrap();
        let result = executor.execute(SolutionKey::new(1, 1, 2019)).unwrap();

        assert_eq!(result.answer, 1969);
        mock.assert();

        let cached = fs::read_to_string(temp.path().join("2019").join("1.json")).unwrap();
        assert_eq!(cached, r#""1969\n""#);

        // Second run is served from the cache
        let result = executor.execute(SolutionKey::new(1, 1, 2019)).unwrap();
        assert_eq!(result.answer, 1969);
        mock.assert();
    }

    #[test]
    fn test_fetch_failure_returns_error_and_caches_nothing() {
        let temp = TempDir::new().unwrap();
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/2019/day/1/input")
            .with_status(500)
            .with_body("Internal Server Error")
            .expect(1)
            .create();

        let config = make_config(temp.path().to_path_buf(), server.url());
        write_session(&config.data_dir);

        let executor = Executor::new(test_registry(), &config).unwrap();
        let result = executor.execute(SolutionKey::new(1, 1, 2019));

        assert!(matches!(
            result,
            Err(CliError::Executor(ExecutorError::InputFetch { year: 2019, day: 1, .. }))
        ));
        assert!(!temp.path().join("2019").join("1.json").exists());
        mock.assert();
    }

    #[test]
    fn test_missing_session_is_an_error() {
        let temp = TempDir::new().unwrap();
        let mut server = mockito::Server::new();
        let mock = server.mock("GET", "/2019/day/1/input").expect(0).create();

        let config = make_config(temp.path().to_path_buf(), server.url());
        let executor = Executor::new(test_registry(), &config).unwrap();

        let result = executor.resolve_input(2019, 1);
        assert!(matches!(
            result,
            Err(ExecutorError::Session {
                source: SessionError::Io(_),
                ..
            })
        ));
        mock.assert();
    }

    #[test]
    fn test_malformed_cache_is_refetched() {
        let temp = TempDir::new().unwrap();
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/2019/day/1/input")
            .with_status(200)
            .with_body("14\n")
            .expect(1)
            .create();

        let config = make_config(temp.path().to_path_buf(), server.url());
        write_session(&config.data_dir);
        fs::create_dir_all(temp.path().join("2019")).unwrap();
        fs::write(temp.path().join("2019").join("1.json"), "14\n").unwrap();

        let executor = Executor::new(test_registry(), &config).unwrap();
        assert_eq!(executor.resolve_input(2019, 1).unwrap(), "14\n");
        mock.assert();

        let cached = fs::read_to_string(temp.path().join("2019").join("1.json")).unwrap();
        assert_eq!(cached, r#""14\n""#);
    }

    #[test]
    fn test_cache_write_failure_is_not_fatal() {
        let temp = TempDir::new().unwrap();
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/2019/day/1/input")
            .with_status(200)
            .with_body("12\n")
            .expect(1)
            .create();

        // The year directory cannot be created because a file is in the way
        let data_dir = temp.path().join("data");
        write_session(&data_dir);
        fs::write(data_dir.join("2019"), "not a directory").unwrap();

        let config = make_config(data_dir, server.url());
        let executor = Executor::new(test_registry(), &config).unwrap();
        let result = executor.execute(SolutionKey::new(1, 1, 2019)).unwrap();

        assert_eq!(result.answer, 12);
        mock.assert();
    }

    #[test]
    fn test_unimplemented_part_surfaces_error() {
        let err = dispatch_timed(&test_registry(), SolutionKey::new(1, 2, 2019), "12").unwrap_err();
        match err {
            CliError::Solver {
                key,
                source: SolverError::Solve(SolveError::NotImplemented(name)),
            } => {
                assert_eq!(key, SolutionKey::new(1, 2, 2019));
                assert_eq!(name, "year_2019_day_01::part2");
            }
            other => panic!("Expected NotImplemented, got {:?}", other),
        }
    }

    #[test]
    fn test_unregistered_key_surfaces_error() {
        let err = dispatch_timed(&test_registry(), SolutionKey::new(9, 1, 2019), "").unwrap_err();
        assert!(matches!(
            err,
            CliError::Solver {
                source: SolverError::NotFound { .. },
                ..
            }
        ));
    }

    #[test]
    fn test_duration_covers_dispatch() {
        let result = dispatch_timed(&test_registry(), SolutionKey::new(2, 1, 2019), "a\nb\nc").unwrap();

        assert_eq!(result.answer, 3);
        assert!(result.solve_duration >= Duration::from_millis(20));
    }

    #[test]
    fn test_duration_excludes_time_before_dispatch() {
        let registry = test_registry();
        let input = "7";

        // Stands in for a slow input resolution
        thread::sleep(Duration::from_millis(100));
        let result = dispatch_timed(&registry, SolutionKey::new(1, 1, 2019), input).unwrap();

        assert_eq!(result.answer, 7);
        assert!(result.solve_duration < Duration::from_millis(100));
    }
}
