//! # Error
//!
//! Module dedicated to library errors. It contains an [`Error`] enum
//! based on [`thiserror::Error`] and a type alias [`Result`].

use thiserror::Error;

use crate::expr::Operator;

/// The global `Result` alias of the library.
pub type Result<T> = std::result::Result<T, Error>;

/// The global `Error` enum of the library.
#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot build {0} expression from {1} operand(s)")]
    InvalidExpressionError(Operator, usize),
    #[error("cannot quote shell argument {0:?}")]
    QuoteArgError(String, #[source] shlex::QuoteError),
    #[error("cannot run notmuch command: {1}")]
    RunCommandError(#[source] process::Error, String),
    #[error("cannot parse notmuch command output as string")]
    ParseOutputError(#[source] process::Error),
}
