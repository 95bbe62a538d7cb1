//! Human readable rendering of frames and chains.

use crate::{ChainedError, Frame};
use std::fmt;

/// Renders one frame as `file:line | function() | [code=N] message`.
///
/// The code segment is left out when the code is 0.
pub fn format_frame(frame: &Frame) -> String {
    frame.to_string()
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{} | {}() | ", self.file(), self.line(), self.function())?;
        if self.code() != 0 {
            write!(f, "[code={}] ", self.code())?;
        }
        f.write_str(self.message())
    }
}

/// `{}` prints the summary, `{:#}` the full chain.
impl fmt::Display for ChainedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            f.write_str(&self.full_chain())
        } else {
            f.write_str(self.summary())
        }
    }
}

impl fmt::Debug for ChainedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full_chain())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Location;

    #[test]
    fn format_frame_tests() {
        let loc = Location::new("io.rs", 12, "read");
        assert_eq!(
            format_frame(&Frame::new("read failed", 0, loc.clone())),
            "io.rs:12 | read() | read failed"
        );
        assert_eq!(
            format_frame(&Frame::new("read failed", 3, loc.clone())),
            "io.rs:12 | read() | [code=3] read failed"
        );
        assert_eq!(
            format_frame(&Frame::new("read failed", -1, loc.clone())),
            "io.rs:12 | read() | [code=-1] read failed"
        );
        assert_eq!(format_frame(&Frame::new("", 0, loc)), "io.rs:12 | read() | ");
    }

    #[test]
    fn display_and_debug() {
        let inner = ChainedError::new_at("open failed", 0, Location::new("io.rs", 1, "open"));
        let e = ChainedError::wrap_at("read failed", 0, Location::new("io.rs", 9, "read"), inner);
        assert_eq!(format!("{}", e), "io.rs:9 | read() | read failed");
        assert_eq!(format!("{:#}", e), e.full_chain());
        assert_eq!(format!("{:?}", e), e.full_chain());
    }
}
