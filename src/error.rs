use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = core::result::Result<T, Error>;

/// Exit code used when the output file already exists and `--overwrite` was not given.
pub const EXIT_OUTPUT_EXISTS: u8 = 3;
/// Exit code for every other error that reaches `main`.
pub const EXIT_FAILURE: u8 = 1;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The selector you are trying to scrape for is missing. Selector: {0}")]
    ParseMissingSelector(String),

    #[error("Login failed. Check your username and password.")]
    AuthFailed,

    #[error("Output file '{}' already exists. Pass --overwrite to replace it.", .0.display())]
    OutputExists(PathBuf),

    #[error("Io Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Tokio Join Error, couldn't await a task! {0}")]
    RuntimeJoin(#[from] tokio::task::JoinError),

    #[error("Reqwest Error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Url Error: {0}")]
    Url(#[from] url::ParseError),

    #[error("Json Error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub fn exit_code(&self) -> u8 {
        match self {
            Error::OutputExists(_) => EXIT_OUTPUT_EXISTS,
            _ => EXIT_FAILURE,
        }
    }
}
