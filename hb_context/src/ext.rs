//! Adapters for adding context straight onto `Result` and `Option` values.

use crate::{Cause, ChainedError, Location};
use std::fmt;

/// Wraps the error of a `Result` whose error is already a [ChainedError] (or a [Cause]).
///
/// Frames are located with `#[track_caller]`, which cannot see the calling
/// function, so they render as `file:line | () | msg`. Use `wrap_chained!`
/// or the `#[context]` attribute when the function name matters.
pub trait ResultExt<T> {
    /// Wraps the error in a new frame at the caller's location.
    fn wrap_err<S: Into<String>>(self, msg: S) -> Result<T, ChainedError>;

    /// Wraps the error in a new frame with a code at the caller's location.
    fn wrap_err_with_code<S: Into<String>>(self, msg: S, code: i32) -> Result<T, ChainedError>;

    /// Like [ResultExt::wrap_err] but only builds the message on failure.
    fn with_context<S, F>(self, f: F) -> Result<T, ChainedError>
    where
        S: Into<String>,
        F: FnOnce() -> S;
}

impl<T, E: Into<Cause>> ResultExt<T> for Result<T, E> {
    #[track_caller]
    fn wrap_err<S: Into<String>>(self, msg: S) -> Result<T, ChainedError> {
        match self {
            Ok(v) => Ok(v),
            Err(e) => Err(ChainedError::wrap_at(msg, 0, Location::caller(), e)),
        }
    }

    #[track_caller]
    fn wrap_err_with_code<S: Into<String>>(self, msg: S, code: i32) -> Result<T, ChainedError> {
        match self {
            Ok(v) => Ok(v),
            Err(e) => Err(ChainedError::wrap_at(msg, code, Location::caller(), e)),
        }
    }

    #[track_caller]
    fn with_context<S, F>(self, f: F) -> Result<T, ChainedError>
    where
        S: Into<String>,
        F: FnOnce() -> S,
    {
        match self {
            Ok(v) => Ok(v),
            Err(e) => Err(ChainedError::wrap_at(f(), 0, Location::caller(), e)),
        }
    }
}

/// Wraps the error of a `Result` from outside this crate, such as `std::io::Result`.
///
/// Like [ResultExt], the new frame has no function name.
pub trait ForeignResultExt<T> {
    /// The error's description is merged into the new frame's message.
    fn wrap_foreign<S: Into<String>>(self, msg: S) -> Result<T, ChainedError>;

    fn wrap_foreign_with_code<S: Into<String>>(self, msg: S, code: i32) -> Result<T, ChainedError>;
}

impl<T, E: fmt::Display> ForeignResultExt<T> for Result<T, E> {
    #[track_caller]
    fn wrap_foreign<S: Into<String>>(self, msg: S) -> Result<T, ChainedError> {
        match self {
            Ok(v) => Ok(v),
            Err(e) => Err(ChainedError::wrap_at(msg, 0, Location::caller(), Cause::foreign(&e))),
        }
    }

    #[track_caller]
    fn wrap_foreign_with_code<S: Into<String>>(self, msg: S, code: i32) -> Result<T, ChainedError> {
        match self {
            Ok(v) => Ok(v),
            Err(e) => Err(ChainedError::wrap_at(msg, code, Location::caller(), Cause::foreign(&e))),
        }
    }
}

pub trait OptionExt<T> {
    /// Turns `None` into a fresh error at the caller's location, without a function name.
    fn ok_or_chained<S: Into<String>>(self, msg: S) -> Result<T, ChainedError>;
}

impl<T> OptionExt<T> for Option<T> {
    #[track_caller]
    fn ok_or_chained<S: Into<String>>(self, msg: S) -> Result<T, ChainedError> {
        match self {
            Some(v) => Ok(v),
            None => Err(ChainedError::new_at(msg, 0, Location::caller())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open() -> Result<(), ChainedError> {
        Err(ChainedError::new_at("open failed", 0, Location::new("io.rs", 1, "open")))
    }

    fn read() -> std::io::Result<Vec<u8>> {
        Err(std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "early eof"))
    }

    #[test]
    fn wrap_err_tests() {
        let e = open().wrap_err("load failed").unwrap_err();
        assert_eq!(e.message(), "load failed");
        assert_eq!(e.file(), "ext.rs");
        assert!(e.summary().ends_with(" | () | load failed"));
        assert_eq!(e.history()[0].message(), "open failed");

        let e = open().wrap_err_with_code("load failed", 4).unwrap_err();
        assert_eq!(e.code(), 4);

        assert_eq!(Ok::<u8, ChainedError>(1).wrap_err("unused"), Ok(1));
    }

    #[test]
    fn with_context_is_lazy() {
        let mut called = false;
        let r: Result<u8, ChainedError> = Ok(2);
        let r = r.with_context(|| {
            called = true;
            "never"
        });
        assert_eq!(r, Ok(2));
        assert!(!called);

        let e = open().with_context(|| format!("load {} failed", "cfg")).unwrap_err();
        assert_eq!(e.message(), "load cfg failed");
    }

    #[test]
    fn wrap_foreign_tests() {
        let e = read().wrap_foreign("parse failed").unwrap_err();
        assert_eq!(e.message(), "parse failed, early eof");
        assert!(e.history().is_empty());

        let e = read().wrap_foreign_with_code("", -2).unwrap_err();
        assert_eq!(e.message(), "early eof");
        assert_eq!(e.code(), -2);
    }

    #[test]
    fn ok_or_chained_tests() {
        assert_eq!(Some(3).ok_or_chained("missing"), Ok(3));
        let e = None::<u8>.ok_or_chained("missing").unwrap_err();
        assert_eq!(e.message(), "missing");
        assert_eq!(e.file(), "ext.rs");
    }
}
