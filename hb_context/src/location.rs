//! Source locations stamped onto every frame.

/// Where a frame of context was recorded.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Location {
    file: String,
    line: u32,
    function: String,
}

impl Location {
    /// Creates a location from explicit parts. The file is kept exactly as given.
    pub fn new<F: Into<String>, N: Into<String>>(file: F, line: u32, function: N) -> Location {
        Location {
            file: file.into(),
            line,
            function: function.into(),
        }
    }

    /// Creates a location from `file!()`-style parts, keeping only the file's base name.
    ///
    /// Used by the macros and the `#[context]` attribute.
    #[doc(hidden)]
    pub fn at_source<N: Into<String>>(file: &str, line: u32, function: N) -> Location {
        Location::new(base_name(file), line, function)
    }

    /// The location of whoever called the enclosing `#[track_caller]` function.
    ///
    /// The function name cannot be observed at runtime and is left empty,
    /// use [Location::with_function] or the `here!` macro when it matters.
    #[track_caller]
    pub fn caller() -> Location {
        let loc = std::panic::Location::caller();
        Location::at_source(loc.file(), loc.line(), String::new())
    }

    /// Replaces the function name.
    pub fn with_function<N: Into<String>>(mut self, function: N) -> Location {
        self.function = function.into();
        self
    }

    pub fn file(&self) -> &str {
        &self.file
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn function(&self) -> &str {
        &self.function
    }
}

/// Text after the last path separator of either platform.
pub(crate) fn base_name(path: &str) -> &str {
    match path.rfind(|c| c == '/' || c == '\\') {
        Some(idx) => &path[idx + 1..],
        None => path,
    }
}

/// Turns the type name of a helper item nested in a function into that function's name.
///
/// `my_crate::io::load::{{closure}}::__hb_here` becomes `load`.
#[doc(hidden)]
pub fn function_name(helper_type_name: &'static str) -> &'static str {
    let mut path = helper_type_name
        .rsplit_once("::")
        .map_or(helper_type_name, |(head, _)| head);
    while let Some(head) = path.strip_suffix("::{{closure}}") {
        path = head;
    }
    path.rsplit_once("::").map_or(path, |(_, name)| name)
}

#[doc(hidden)]
pub fn type_name_of<T>(_: T) -> &'static str {
    std::any::type_name::<T>()
}

/// Captures the current file, line and enclosing function name.
///
/// ```
/// fn load() -> hb_context::Location {
///     hb_context::here!()
/// }
///
/// assert_eq!(load().function(), "load");
/// ```
#[macro_export]
macro_rules! here {
    () => {{
        fn __hb_here() {}
        $crate::Location::at_source(
            file!(),
            line!(),
            $crate::location::function_name($crate::location::type_name_of(__hb_here)),
        )
    }};
}
