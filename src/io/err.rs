use crate::model::{ModelId, ProblemError};
use std::num::ParseIntError;

/// Errors raised while reading an instance file.
#[derive(Debug)]
pub enum LoaderError {
    Io(std::io::Error),
    ParseInt(ParseIntError),
    UnexpectedEof,
    NegativeValue(i64),
    InvalidFlag {
        model: ModelId,
        option: usize,
        value: i64,
    },
    Problem(ProblemError),
}

impl From<std::io::Error> for LoaderError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<ParseIntError> for LoaderError {
    fn from(e: ParseIntError) -> Self {
        Self::ParseInt(e)
    }
}

impl From<ProblemError> for LoaderError {
    fn from(e: ProblemError) -> Self {
        Self::Problem(e)
    }
}

impl std::fmt::Display for LoaderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use LoaderError::*;
        match self {
            Io(e) => write!(f, "I/O error: {e}"),
            ParseInt(e) => write!(f, "parse-int error: {e}"),
            UnexpectedEof => write!(f, "unexpected end of file while parsing instance"),
            NegativeValue(v) => write!(f, "expected a non-negative integer, found {v}"),
            InvalidFlag {
                model,
                option,
                value,
            } => write!(
                f,
                "model {model}, option {option}: requirement flag must be 0 or 1, found {value}"
            ),
            Problem(e) => write!(f, "inconsistent instance: {e}"),
        }
    }
}

impl std::error::Error for LoaderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoaderError::Io(e) => Some(e),
            LoaderError::ParseInt(e) => Some(e),
            LoaderError::Problem(e) => Some(e),
            _ => None,
        }
    }
}
