use crate::Location;

/// One layer's recorded context: a message, an optional code and where it was recorded.
///
/// Frames are immutable once built. The `depth` is assigned by the owning
/// [ChainedError](crate::ChainedError) when the frame lands in its history
/// and is 0 everywhere else.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Frame {
    message: String,
    code: i32,
    location: Location,
    pub(crate) depth: usize,
}

impl Frame {
    /// Creates a frame. A `code` of 0 means no code.
    pub fn new<S: Into<String>>(message: S, code: i32, location: Location) -> Frame {
        Frame {
            message: message.into(),
            code,
            location,
            depth: 0,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn code(&self) -> i32 {
        self.code
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    pub fn file(&self) -> &str {
        self.location.file()
    }

    pub fn line(&self) -> u32 {
        self.location.line()
    }

    pub fn function(&self) -> &str {
        self.location.function()
    }

    /// 1-based position in the owning error's history, 0 if not in a history.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Merges a foreign error's description into the message.
    pub(crate) fn absorb_description(&mut self, description: &str) {
        if self.message.is_empty() {
            self.message.push_str(description);
        } else {
            self.message.push_str(", ");
            self.message.push_str(description);
        }
    }
}
