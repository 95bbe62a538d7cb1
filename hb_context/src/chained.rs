use crate::format::format_frame;
use crate::{Cause, Frame, Location};

/// An error that carries one frame of context per layer it passed through.
///
/// `current` is the outermost context, the layer that raised or re-raised
/// the error. `history` holds every older frame, newest cause first, with
/// depths 1..=N. The summary line is rendered from `current` when it is set
/// and never changes afterwards.
#[derive(Clone, PartialEq, Eq)]
pub struct ChainedError {
    current: Frame,
    history: Vec<Frame>,
    summary: String,
}

impl ChainedError {
    /// Creates a fresh error at the caller's location.
    ///
    /// The function name of a `#[track_caller]` location is unknown, so the
    /// frame renders as `file:line | () | msg`. The [chained!](macro@crate::chained)
    /// and [wrap_chained!](macro@crate::wrap_chained) macros fill it in.
    #[track_caller]
    pub fn new<S: Into<String>>(msg: S) -> ChainedError {
        ChainedError::new_at(msg, 0, Location::caller())
    }

    /// Creates a fresh error with a code at the caller's location.
    #[track_caller]
    pub fn with_code<S: Into<String>>(msg: S, code: i32) -> ChainedError {
        ChainedError::new_at(msg, code, Location::caller())
    }

    /// Creates a fresh error with no history.
    pub fn new_at<S: Into<String>>(msg: S, code: i32, location: Location) -> ChainedError {
        ChainedError::from_frame(Frame::new(msg, code, location))
    }

    /// Wraps `cause` in a new frame at the caller's location, without a function name.
    #[track_caller]
    pub fn wrap<S, C>(msg: S, cause: C) -> ChainedError
    where
        S: Into<String>,
        C: Into<Cause>,
    {
        ChainedError::wrap_at(msg, 0, Location::caller(), cause)
    }

    /// Wraps `cause` in a new frame with a code at the caller's location.
    #[track_caller]
    pub fn wrap_with_code<S, C>(msg: S, code: i32, cause: C) -> ChainedError
    where
        S: Into<String>,
        C: Into<Cause>,
    {
        ChainedError::wrap_at(msg, code, Location::caller(), cause)
    }

    /// Wraps `cause` in a new frame.
    ///
    /// A chain-aware cause is flattened into the history: its current frame
    /// becomes the first history entry and its own history follows. A foreign
    /// cause only extends the new frame's message, separated by `", "`.
    pub fn wrap_at<S, C>(msg: S, code: i32, location: Location, cause: C) -> ChainedError
    where
        S: Into<String>,
        C: Into<Cause>,
    {
        let mut current = Frame::new(msg, code, location);
        let mut history = Vec::new();
        match cause.into() {
            Cause::ChainAware(inner) => {
                history.reserve(inner.history.len() + 1);
                history.push(inner.current);
                history.extend(inner.history);
            }
            Cause::Foreign(description) => current.absorb_description(&description),
        }
        let mut error = ChainedError::from_frame(current);
        error.history = history;
        error.normalize_depths();
        error
    }

    /// Merges a sibling failure: `other`'s current frame and then its history
    /// go to the end of this error's history. `current` and the summary stay.
    pub fn append(&mut self, other: ChainedError) {
        self.history.reserve(other.history.len() + 1);
        self.history.push(other.current);
        self.history.extend(other.history);
        self.normalize_depths();
    }

    /// [ChainedError::append] for a borrowed error.
    pub fn append_ref(&mut self, other: &ChainedError) {
        self.append(other.clone());
    }

    fn from_frame(current: Frame) -> ChainedError {
        let summary = format_frame(&current);
        ChainedError {
            current,
            history: Vec::new(),
            summary,
        }
    }

    fn normalize_depths(&mut self) {
        for (idx, frame) in self.history.iter_mut().enumerate() {
            frame.depth = idx + 1;
        }
    }

    pub fn message(&self) -> &str {
        self.current.message()
    }

    pub fn code(&self) -> i32 {
        self.current.code()
    }

    pub fn file(&self) -> &str {
        self.current.file()
    }

    pub fn line(&self) -> u32 {
        self.current.line()
    }

    pub fn function(&self) -> &str {
        self.current.function()
    }

    /// The outermost frame.
    pub fn current(&self) -> &Frame {
        &self.current
    }

    /// Older frames, newest cause first.
    pub fn history(&self) -> &[Frame] {
        &self.history
    }

    /// The current frame followed by the history.
    pub fn frames(&self) -> impl Iterator<Item = &Frame> + '_ {
        std::iter::once(&self.current).chain(self.history.iter())
    }

    /// The headline: the current frame as it was when this error was created.
    pub fn summary(&self) -> &str {
        &self.summary
    }

    /// The summary followed by one indented line per history frame.
    pub fn full_chain(&self) -> String {
        let mut out = self.summary.clone();
        for frame in &self.history {
            out.push_str("\n    ");
            out.push_str(&format_frame(frame));
        }
        out
    }
}

impl Default for ChainedError {
    fn default() -> Self {
        ChainedError::from_frame(Frame::default())
    }
}

impl std::error::Error for ChainedError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn loc(line: u32) -> Location {
        Location::new("app.rs", line, "run")
    }

    fn depths(e: &ChainedError) -> Vec<usize> {
        e.history().iter().map(Frame::depth).collect()
    }

    fn messages(e: &ChainedError) -> Vec<&str> {
        e.history().iter().map(Frame::message).collect()
    }

    #[test]
    fn fresh_error_tests() {
        let e = ChainedError::new_at("open failed", 0, loc(3));
        assert_eq!(e.message(), "open failed");
        assert_eq!(e.code(), 0);
        assert_eq!(e.file(), "app.rs");
        assert_eq!(e.line(), 3);
        assert_eq!(e.function(), "run");
        assert!(e.history().is_empty());
        assert_eq!(e.summary(), "app.rs:3 | run() | open failed");
        assert_eq!(e.full_chain(), e.summary());
        assert_eq!(e.current().depth(), 0);
    }

    #[test]
    fn track_caller_constructors_use_call_site() {
        let e = ChainedError::with_code("bad", 5);
        assert_eq!(e.file(), "chained.rs");
        assert_eq!(e.code(), 5);
        assert_eq!(e.function(), "");
        assert!(e.summary().ends_with(" | () | [code=5] bad"));
        let w = ChainedError::wrap("outer", e);
        assert_eq!(w.file(), "chained.rs");
        assert_eq!(w.history().len(), 1);
    }

    #[test]
    fn wrap_flattens_history() {
        let a = ChainedError::new_at("a", 0, loc(1));
        let mut c = ChainedError::wrap_at("b", 0, loc(2), a);
        c = ChainedError::wrap_at("c", 0, loc(3), c);
        assert_eq!(messages(&c), vec!["b", "a"]);

        let d = ChainedError::wrap_at("d", 0, loc(4), c);
        assert_eq!(d.message(), "d");
        assert_eq!(messages(&d), vec!["c", "b", "a"]);
        assert_eq!(depths(&d), vec![1, 2, 3]);
    }

    #[test]
    fn wrap_chain_aware_keeps_message() {
        let inner = ChainedError::new_at("open failed", 0, loc(1));
        let e = ChainedError::wrap_at("load failed", 0, loc(2), inner);
        assert_eq!(e.message(), "load failed");
        let e = ChainedError::wrap_at("", 0, loc(3), e);
        assert_eq!(e.message(), "");
    }

    #[test]
    fn wrap_foreign_merges_message() {
        let e = ChainedError::wrap_at("", 0, loc(1), Cause::Foreign("disk full".into()));
        assert_eq!(e.message(), "disk full");
        assert!(e.history().is_empty());

        let e = ChainedError::wrap_at("save failed", 7, loc(1), Cause::Foreign("disk full".into()));
        assert_eq!(e.message(), "save failed, disk full");
        assert_eq!(e.summary(), "app.rs:1 | run() | [code=7] save failed, disk full");
        assert!(e.history().is_empty());
    }

    #[test]
    fn append_goes_to_the_back() {
        let mut e = ChainedError::wrap_at("top", 0, loc(1), ChainedError::new_at("x", 0, loc(2)));
        let sibling = ChainedError::wrap_at("y", 0, loc(3), ChainedError::new_at("z", 0, loc(4)));
        let summary = e.summary().to_string();

        e.append(sibling);
        assert_eq!(messages(&e), vec!["x", "y", "z"]);
        assert_eq!(depths(&e), vec![1, 2, 3]);
        assert_eq!(e.summary(), summary);
        assert_eq!(e.message(), "top");

        let other = ChainedError::new_at("w", 0, loc(5));
        e.append_ref(&other);
        assert_eq!(messages(&e), vec!["x", "y", "z", "w"]);
        assert_eq!(depths(&e), vec![1, 2, 3, 4]);
        assert_eq!(e.summary(), summary);
        assert_eq!(other.history().len(), 0);
    }

    #[test]
    fn depths_are_renumbered_not_trusted() {
        let mut stale = Frame::new("stale", 0, loc(1));
        stale.depth = 42;
        let mut inner = ChainedError::new_at("inner", 0, loc(2));
        inner.history.push(stale);
        let e = ChainedError::wrap_at("outer", 0, loc(3), inner);
        assert_eq!(depths(&e), vec![1, 2]);
        assert_eq!(e.current().depth(), 0);
    }

    #[test]
    fn full_chain_lists_history_in_order() {
        let inner = ChainedError::new_at("open failed", 2, Location::new("io.rs", 8, "open"));
        let e = ChainedError::wrap_at("load failed", 0, Location::new("cfg.rs", 20, "load"), inner);
        assert_eq!(
            e.full_chain(),
            "cfg.rs:20 | load() | load failed\n    io.rs:8 | open() | [code=2] open failed"
        );
        let frames: Vec<&str> = e.frames().map(Frame::message).collect();
        assert_eq!(frames, vec!["load failed", "open failed"]);
    }

    #[test]
    fn default_is_empty() {
        let e = ChainedError::default();
        assert_eq!(e.summary(), ":0 | () | ");
        assert!(e.history().is_empty());
    }
}
