//! Export the posts a Hacker News account has upvoted to a JSON file.
//!
//! Logs in, walks the paginated `upvoted` listing one page at a time and
//! writes every item it finds once the last page has been read.

mod error;
mod macros;

pub mod config;
pub mod credentials;
pub mod export;
pub mod parse;
pub mod process;
pub mod request;

pub use error::{Error, Result, EXIT_FAILURE, EXIT_OUTPUT_EXISTS};
