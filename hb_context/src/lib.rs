//! Errors that remember what every layer was doing.
//!
//! A [ChainedError] holds the context of the layer that raised it plus an
//! ordered history of every older layer's context. Each frame is stamped with
//! where it was recorded. At the top the error reads as a single line,
//! `{}`, and the whole story is one `{:#}` away.
//!
//! # Example
//!
//! ```
//! use hb_context::{chained, wrap_chained, ChainedError};
//!
//! fn open() -> Result<(), ChainedError> {
//!     Err(chained!("open failed", 2))
//! }
//!
//! fn load() -> Result<(), ChainedError> {
//!     open().map_err(|e| wrap_chained!("load failed", e))
//! }
//!
//! let e = load().unwrap_err();
//! assert_eq!(e.message(), "load failed");
//! assert_eq!(e.history()[0].message(), "open failed");
//! assert!(format!("{:#}", e).contains("[code=2] open failed"));
//! ```
//!
//! # `#[context]`
//! With the default `macros` feature the [context] attribute adds a frame,
//! named after the annotated function, to every error leaving it.
//!
//! ```
//! use hb_context::{chained, context, ChainedError};
//!
//! #[context("could not load '{name}'")]
//! fn load(name: &str) -> Result<(), ChainedError> {
//!     Err(chained!("open failed"))
//! }
//!
//! let e = load("cfg").unwrap_err();
//! assert_eq!(e.message(), "could not load 'cfg'");
//! assert_eq!(e.function(), "load");
//! ```

pub mod cause;
pub mod chained;
pub mod ext;
pub mod format;
pub mod frame;
pub mod location;
mod macros;
#[cfg(feature = "log")]
mod report;
pub mod slot;

pub use cause::Cause;
pub use chained::ChainedError;
pub use ext::{ForeignResultExt, OptionExt, ResultExt};
pub use format::format_frame;
pub use frame::Frame;
pub use location::Location;
pub use slot::safe_chain_onto;

#[cfg(feature = "macros")]
pub use hb_context_macros::*;
