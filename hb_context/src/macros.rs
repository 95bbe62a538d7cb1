//! One line constructors that stamp the enclosing function onto the frame.

/// Creates a fresh [ChainedError](crate::ChainedError) here.
///
/// `chained!(msg)` or `chained!(msg, code)`.
#[macro_export]
macro_rules! chained {
    ($msg:expr) => {
        $crate::ChainedError::new_at($msg, 0, $crate::here!())
    };
    ($msg:expr, $code:expr) => {
        $crate::ChainedError::new_at($msg, $code, $crate::here!())
    };
}

/// Wraps a cause in a new frame here.
///
/// `wrap_chained!(msg, cause)` or `wrap_chained!(msg, code, cause)`, where the
/// cause is a `ChainedError` or a [Cause](crate::Cause).
#[macro_export]
macro_rules! wrap_chained {
    ($msg:expr, $cause:expr) => {
        $crate::ChainedError::wrap_at($msg, 0, $crate::here!(), $cause)
    };
    ($msg:expr, $code:expr, $cause:expr) => {
        $crate::ChainedError::wrap_at($msg, $code, $crate::here!(), $cause)
    };
}

/// Chains a frame onto an `Option<ChainedError>` slot if it holds an error.
///
/// `safe_chain!(slot, msg)` or `safe_chain!(slot, msg, code)`. Evaluates to
/// `Option<&mut ChainedError>`.
#[macro_export]
macro_rules! safe_chain {
    ($slot:expr, $msg:expr) => {
        $crate::safe_chain_onto(&mut $slot, $msg, 0, $crate::here!())
    };
    ($slot:expr, $msg:expr, $code:expr) => {
        $crate::safe_chain_onto(&mut $slot, $msg, $code, $crate::here!())
    };
}

/// Returns early with a fresh error.
#[macro_export]
macro_rules! bail_chained {
    ($($arg:tt)*) => {
        return ::std::result::Result::Err($crate::chained!($($arg)*).into())
    };
}
