//! Type-erased errors with a chain of sources.

use crate::SharedString;
use std::{error, fmt};

/// An error type backed by an allocation-optimized string.
#[derive(Debug)]
pub struct Error {
    /// Error message.
    message: SharedString,
    /// Error source.
    source: Option<Box<Error>>,
}

impl Error {
    /// Creates a new instance with the supplied message.
    #[inline]
    pub fn new(message: impl Into<SharedString>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    /// Creates a new instance with the supplied message and the error source.
    #[inline]
    pub fn with_source(message: impl Into<SharedString>, source: impl Into<Error>) -> Self {
        Self {
            message: message.into(),
            source: Some(Box::new(source.into())),
        }
    }

    /// Returns a new instance with the supplied message and `self` as the error source.
    #[inline]
    pub fn wrap(self, message: impl Into<SharedString>) -> Self {
        Self {
            message: message.into(),
            source: Some(Box::new(self)),
        }
    }

    /// Returns the message.
    #[inline]
    pub fn message(&self) -> &str {
        self.message.as_ref()
    }

    /// Returns the source.
    #[inline]
    pub fn source(&self) -> Option<&Error> {
        self.source.as_deref()
    }

    /// Returns the innermost error in the chain.
    pub fn root_source(&self) -> &Error {
        let mut error = self;
        while let Some(source) = error.source() {
            error = source;
        }
        error
    }
}

impl<E: error::Error + 'static> From<E> for Error {
    #[inline]
    fn from(err: E) -> Self {
        Self {
            message: err.to_string().into(),
            source: err.source().map(|err| Box::new(Self::new(err.to_string()))),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = &self.message;
        if let Some(source) = &self.source {
            write!(f, "{message}: {source}")
        } else {
            write!(f, "{message}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Error;

    #[test]
    fn it_formats_error_chain() {
        let err = Error::new("no such file").wrap("fail to read `config.dev.toml`");
        assert_eq!(
            err.to_string(),
            "fail to read `config.dev.toml`: no such file"
        );
        assert_eq!(err.root_source().message(), "no such file");

        let err = Error::with_source("fail to load the roster", Error::new("invalid id"));
        assert_eq!(err.source().map(|e| e.message()), Some("invalid id"));
    }

    #[test]
    fn it_converts_std_errors() {
        let parse_err = "x".parse::<u64>().unwrap_err();
        let err = Error::from(parse_err);
        assert_eq!(err.message(), "invalid digit found in string");
        assert!(err.source().is_none());
    }
}
