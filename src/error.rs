use reqwest::StatusCode;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;
pub type TokenReaderResult<T> = std::result::Result<T, TokenReaderError>;

/// Any failure an operation can surface to the caller.
#[derive(Error, Debug)]
pub enum Error {
    /// The endpoint answered 2xx but the body was unusable.
    #[error(transparent)]
    TokenReader(#[from] TokenReaderError),
    /// The endpoint answered with a non-2xx status.
    #[error("{0}")]
    Status(StatusCode),
    /// The request never completed (connection refused, DNS failure, ...).
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

/// Failures while destructuring the `key=value&key=value` token response
/// body. The display strings are fixed diagnostics.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenReaderError {
    /// Body was empty or not `&`-delimited.
    #[error("Could not parse values.")]
    Malformed,
    /// Body parsed but `oauth_token` or `oauth_token_secret` was missing.
    #[error("Could not find required values")]
    MissingRequiredValues,
}
