//! Chaining onto an error slot that may be empty.
//!
//! Some code threads an `Option<ChainedError>` through a sequence of steps
//! instead of returning at the first failure. [safe_chain_onto] adds a layer
//! of context to whatever is in the slot and does nothing when it is empty.
//! The `&mut` borrow makes the caller the only writer for the whole swap.

use crate::{ChainedError, Location};

/// Puts a new current frame on top of the error in `slot`.
///
/// Returns `None` and leaves the slot alone when there is nothing to chain
/// onto. Otherwise the old error's current frame and history become the
/// new error's history, and the new error is returned.
pub fn safe_chain_onto<S: Into<String>>(
    slot: &mut Option<ChainedError>,
    msg: S,
    code: i32,
    location: Location,
) -> Option<&mut ChainedError> {
    let lower = match slot.take() {
        Some(e) => e,
        None => {
            #[cfg(feature = "log")]
            log::trace!(
                target: "hb_context",
                "nothing to chain at {}:{}",
                location.file(),
                location.line()
            );
            return None;
        }
    };
    let mut upper = ChainedError::new_at(msg, code, location);
    upper.append(lower);
    Some(slot.insert(upper))
}
