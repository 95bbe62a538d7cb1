use crate::ChainedError;
use std::any::Any;
use std::fmt;

/// Whatever a new frame of context is being wrapped around.
///
/// A [ChainedError] brings its whole history along. Anything else is only
/// known by its description, which gets merged into the new frame's message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Cause {
    ChainAware(ChainedError),
    Foreign(String),
}

impl Cause {
    /// A foreign cause described by its `Display` output.
    pub fn foreign<D: fmt::Display + ?Sized>(error: &D) -> Cause {
        Cause::Foreign(error.to_string())
    }

    /// Takes any error by value, keeping the chain when it is a [ChainedError].
    pub fn capture<E>(error: E) -> Cause
    where
        E: std::error::Error + 'static,
    {
        let mut error = Some(error);
        let any: &mut dyn Any = &mut error;
        if let Some(chained) = any
            .downcast_mut::<Option<ChainedError>>()
            .and_then(Option::take)
        {
            return Cause::ChainAware(chained);
        }
        match error {
            Some(e) => Cause::foreign(&e),
            None => Cause::Foreign(String::new()),
        }
    }

    /// Same as [Cause::capture] for a borrowed error, cloning a chain if there is one.
    pub fn from_error(error: &(dyn std::error::Error + 'static)) -> Cause {
        match error.downcast_ref::<ChainedError>() {
            Some(chained) => Cause::ChainAware(chained.clone()),
            None => Cause::foreign(error),
        }
    }

    /// The single line this cause would contribute to a message.
    pub fn description(&self) -> &str {
        match self {
            Cause::ChainAware(e) => e.summary(),
            Cause::Foreign(d) => d,
        }
    }
}

impl From<ChainedError> for Cause {
    fn from(error: ChainedError) -> Cause {
        Cause::ChainAware(error)
    }
}

impl fmt::Display for Cause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Conversion used by the `#[context]` attribute, chosen by method lookup.
///
/// `CauseOf(error).into_cause()` finds [ChainedCause] on the value itself when
/// the error is a [ChainedError] and keeps its history. For any other error
/// lookup goes on to `&CauseOf<E>` and [ForeignCause], which only needs `Display`.
/// Both traits must be in scope at the call.
#[doc(hidden)]
pub mod dispatch {
    use super::Cause;
    use crate::ChainedError;
    use std::fmt;

    pub struct CauseOf<E>(pub E);

    pub trait ChainedCause {
        fn into_cause(self) -> Cause;
    }

    impl ChainedCause for CauseOf<ChainedError> {
        fn into_cause(self) -> Cause {
            Cause::ChainAware(self.0)
        }
    }

    pub trait ForeignCause {
        fn into_cause(self) -> Cause;
    }

    impl<E: fmt::Display> ForeignCause for &CauseOf<E> {
        fn into_cause(self) -> Cause {
            Cause::foreign(&self.0)
        }
    }
}
