//! Call-site attribution
//!
//! Every leveled call records where it was made as two fields:
//! `source` (`"<file>:<line>"`, file reduced to its basename) and
//! `source_func` (the fully qualified name of the calling function).
//!
//! Method calls capture file and line through `#[track_caller]`, which is
//! unaffected by inlining. The function is then found by walking the stack
//! for the frame that sits at that file and line, and the result is cached
//! per call site. That lookup needs debug info: in builds without it, or
//! where the caller was inlined into a frame whose line table no longer
//! points at the call, it yields [`UNKNOWN_FUNCTION`]. The logging macros
//! resolve the function at compile time and never depend on the stack.

use crate::core::Entry;
use once_cell::sync::Lazy;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::fmt;
use std::panic::Location;
use std::path::Path;

type SiteKey = (&'static str, u32, u32);

/// Function names resolved so far, one entry per call site
static RESOLVED: Lazy<Mutex<HashMap<SiteKey, &'static str>>> = Lazy::new(Default::default);

pub const SOURCE_KEY: &str = "source";
pub const SOURCE_FUNC_KEY: &str = "source_func";

pub const UNKNOWN_FILE: &str = "<???>";
pub const UNKNOWN_LINE: u32 = 1;
pub const UNKNOWN_FUNCTION: &str = "(unknown)";

/// File, line and function of one logging call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallSite {
    file: &'static str,
    line: u32,
    function: &'static str,
}

impl CallSite {
    /// `file` may be a full path; only its basename is kept
    pub fn new(file: &'static str, line: u32, function: &'static str) -> Self {
        let file = basename(file);
        if file.is_empty() {
            return Self::unknown();
        }
        Self {
            file,
            line,
            function: if function.is_empty() { UNKNOWN_FUNCTION } else { function },
        }
    }

    /// Placeholder used when no frame information is available
    pub const fn unknown() -> Self {
        Self {
            file: UNKNOWN_FILE,
            line: UNKNOWN_LINE,
            function: UNKNOWN_FUNCTION,
        }
    }

    /// Location of the nearest caller not marked `#[track_caller]`, with
    /// the function resolved from the stack
    #[track_caller]
    pub fn caller() -> Self {
        let location = Location::caller();
        Self::new(location.file(), location.line(), resolve_function(location))
    }

    pub fn file(&self) -> &'static str {
        self.file
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn function(&self) -> &'static str {
        self.function
    }

    /// Value of the `source` field
    pub fn source(&self) -> String {
        self.to_string()
    }

    /// Derive an entry carrying `source` and `source_func`
    pub(crate) fn attach(&self, entry: &Entry) -> Entry {
        entry
            .with_field(SOURCE_KEY, self.source())
            .with_field(SOURCE_FUNC_KEY, self.function)
    }
}

impl Default for CallSite {
    fn default() -> Self {
        Self::unknown()
    }
}

impl fmt::Display for CallSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

fn basename(path: &str) -> &str {
    path.rsplit(['/', '\\']).next().unwrap_or(path)
}

fn resolve_function(location: &'static Location<'static>) -> &'static str {
    let key = (location.file(), location.line(), location.column());
    let mut resolved = RESOLVED.lock();
    if let Some(&name) = resolved.get(&key) {
        return name;
    }

    // Leaked once per call site, so bounded by the program's call sites
    let name = match frame_function(location) {
        Some(name) => &*Box::leak(name.into_boxed_str()),
        None => UNKNOWN_FUNCTION,
    };
    resolved.insert(key, name);
    name
}

/// Name of the innermost stack frame executing `location`
fn frame_function(location: &Location<'_>) -> Option<String> {
    let file = Path::new(location.file());
    let mut found = None;

    backtrace::trace(|frame| {
        backtrace::resolve_frame(frame, |symbol| {
            if found.is_some() || symbol.lineno() != Some(location.line()) {
                return;
            }
            if symbol.filename().is_some_and(|path| path.ends_with(file)) {
                // `{:#}` drops the trailing symbol hash
                found = symbol.name().map(|name| format!("{:#}", name));
            }
        });
        found.is_none()
    });

    found.map(|name| trim_function_name(&name).to_string())
}

/// Turn the type name of a marker fn nested in a function into that
/// function's path, dropping closure segments
#[doc(hidden)]
pub fn trim_function_name(name: &str) -> &str {
    let mut name = name.strip_suffix("::__callsite_marker").unwrap_or(name);
    while let Some(outer) = name.strip_suffix("::{{closure}}") {
        name = outer;
    }
    name
}

#[doc(hidden)]
#[macro_export]
macro_rules! __function_name {
    () => {{
        fn __callsite_marker() {}
        fn type_name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        $crate::callsite::trim_function_name(type_name_of(__callsite_marker))
    }};
}

/// The [`CallSite`] of the macro invocation, function name included
///
/// ```
/// use sourced_logger::callsite;
///
/// fn handler() -> sourced_logger::CallSite {
///     callsite!()
/// }
///
/// let site = handler();
/// assert!(site.function().ends_with("::handler"));
/// assert!(site.source().ends_with(&format!(":{}", site.line())));
/// ```
#[macro_export]
macro_rules! callsite {
    () => {
        $crate::CallSite::new(::std::file!(), ::std::line!(), $crate::__function_name!())
    };
}
