//! AOC HTTP Client Library
//!
//! Fetches personalised puzzle input from the Advent of Code website using
//! the `session` cookie of a logged-in user.
//!
//! - Secure TLS using rustls (no OpenSSL dependencies)
//! - Blocking synchronous API
//! - Configurable base URL for pointing at a local test server
//!
//! # Example
//!
//! ```no_run
//! use aoc_http_client::AocClient;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = AocClient::new()?;
//!
//! // Your session cookie from adventofcode.com
//! let session = "your_session_cookie_here";
//!
//! let input = client.get_input(2019, 1, session)?;
//! println!("{} bytes of input", input.len());
//! # Ok(())
//! # }
//! ```

mod client;
mod error;

pub use client::{AocClient, AocClientBuilder, DEFAULT_BASE_URL};
pub use error::AocError;
