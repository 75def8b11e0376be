// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
//! Checking for OpenGL errors after a call.
//!
//! OpenGL records errors in context-wide flags that stay set until read with
//! `glGetError`.  [`check_gl_error`] reads every pending flag and reports each one,
//! tagged with the location that asked.  Normally you call it through the
//! [`check_gl_error!`](crate::check_gl_error!) macro, which fills the location in:
//!
//! ```
//! use prgl::constants;
//! use std::cell::Cell;
//!
//! fn upload(get_error: &dyn Fn() -> u32) {
//!     // gl.tex_image_2d(...);
//!     prgl::check_gl_error!(get_error); // logs "GL_INVALID_VALUE at <file>:<line> (<crate>::upload)"
//! }
//!
//! let flag = Cell::new(constants::INVALID_VALUE);
//! upload(&|| flag.replace(constants::NO_ERROR));
//! assert_eq!(flag.get(), constants::NO_ERROR);
//! ```
//!
//! What "report" means is set by the [`ErrorPolicy`].

use crate::error::GlError;
use logwise::LogRecord;
use logwise::privacy::Loggable;
use std::fmt::Display;
use std::sync::atomic::{AtomicU8, Ordering};

/// Upper bound on flags read by a single check.
///
/// A conforming context has at most one flag per error kind, but a lost context may
/// keep returning the same code.
pub const MAX_PENDING_ERRORS: usize = 16;

/// Read access to the GL error state.
///
/// `get_error` behaves like `glGetError`: it returns one pending error code and clears
/// it, or `GL_NO_ERROR` when nothing is pending.
///
/// Any `Fn() -> u32` is an `ErrorQuery`, so a loader's function can be wrapped in a
/// closure:
///
/// ```ignore
/// prgl::check_gl_error!(&|| unsafe { gl.get_error() });
/// ```
pub trait ErrorQuery {
    fn get_error(&self) -> u32;
}

impl<F: Fn() -> u32 + ?Sized> ErrorQuery for F {
    fn get_error(&self) -> u32 {
        self()
    }
}

/// What [`check_gl_error`] does with the errors it finds.
///
/// Flags are cleared under every policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum ErrorPolicy {
    /// Clear the flags and carry on.
    Ignore = 0,
    /// Log each error at error level.
    #[default]
    Log = 1,
    /// Log each error, then panic.  Useful in debug builds and tests.
    Panic = 2,
}

impl ErrorPolicy {
    const fn from_u8(value: u8) -> ErrorPolicy {
        match value {
            0 => ErrorPolicy::Ignore,
            2 => ErrorPolicy::Panic,
            _ => ErrorPolicy::Log,
        }
    }
}

static ERROR_POLICY: AtomicU8 = AtomicU8::new(ErrorPolicy::Log as u8);

/// Sets the policy used by [`check_gl_error`] and the `check_gl_error!` macro
/// for the whole process.
pub fn set_error_policy(policy: ErrorPolicy) {
    ERROR_POLICY.store(policy as u8, Ordering::Relaxed);
}

/// The process-wide policy.  [`ErrorPolicy::Log`] unless changed.
pub fn error_policy() -> ErrorPolicy {
    ErrorPolicy::from_u8(ERROR_POLICY.load(Ordering::Relaxed))
}

/// Reads and clears every pending error, in the order GL reports them.
pub fn drain_errors<Q: ErrorQuery + ?Sized>(query: &Q) -> Vec<GlError> {
    let mut errors = Vec::new();
    for _ in 0..MAX_PENDING_ERRORS {
        match GlError::from_code(query.get_error()) {
            Some(error) => errors.push(error),
            None => return errors,
        }
    }
    logwise::warn_sync!(
        "glGetError still reporting after {count} reads; is the context lost?",
        count = MAX_PENDING_ERRORS
    );
    errors
}

/// Checks for OpenGL errors under the process-wide [`ErrorPolicy`].
///
/// Prefer the [`check_gl_error!`](crate::check_gl_error!) macro, which passes
/// `file`, `function` and `line` for you.
///
/// * `file`: the file where the check happens.
/// * `function`: the function where the check happens.
/// * `line`: the line where the check happens.
pub fn check_gl_error<Q: ErrorQuery + ?Sized>(query: &Q, file: &str, function: &str, line: u32) {
    check_gl_error_with(query, error_policy(), file, function, line)
}

/// [`check_gl_error`] with an explicit policy.
pub fn check_gl_error_with<Q: ErrorQuery + ?Sized>(
    query: &Q,
    policy: ErrorPolicy,
    file: &str,
    function: &str,
    line: u32,
) {
    let errors = drain_errors(query);
    if errors.is_empty() || policy == ErrorPolicy::Ignore {
        return;
    }
    let site = CallSite {
        file,
        function,
        line,
    };
    for error in &errors {
        logwise::error_sync!("{error} at {site}", error = *error, site = site);
    }
    if policy == ErrorPolicy::Panic {
        let names: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
        panic!("{} at {site}", names.join(", "));
    }
}

/// Where a check happened, rendered as `file:line (function)`.
///
/// Source locations are not private, so they are logged in full even when
/// logwise redacts private data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct CallSite<'a> {
    file: &'a str,
    function: &'a str,
    line: u32,
}

impl Display for CallSite<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{} ({})", self.file, self.line, self.function)
    }
}

impl Loggable for CallSite<'_> {
    fn log_redacting_private_info(&self, record: &mut LogRecord) {
        self.log_all(record);
    }
    fn log_all(&self, record: &mut LogRecord) {
        record.log_owned(self.to_string());
    }
}

/// Strips the helper item name `check_gl_error!` uses to find its enclosing function.
///
/// `path` is the type name of a nested `fn __here`, e.g.
/// `my_crate::render::upload::__here` or `my_crate::run::{{closure}}::__here`.
#[doc(hidden)]
pub fn enclosing_function(path: &'static str) -> &'static str {
    let mut path = path.strip_suffix("::__here").unwrap_or(path);
    while let Some(outer) = path.strip_suffix("::{{closure}}") {
        path = outer;
    }
    path
}

/// Checks for OpenGL errors, attributing them to the current file, function and line.
///
/// Takes anything that is an [`ErrorQuery`] by reference.  Uses the process-wide
/// [`ErrorPolicy`]; pass a policy as the second argument to override it.
///
/// ```
/// use prgl::ErrorPolicy;
///
/// let get_error = || prgl::constants::NO_ERROR;
/// prgl::check_gl_error!(&get_error);
/// prgl::check_gl_error!(&get_error, ErrorPolicy::Panic);
/// ```
#[macro_export]
macro_rules! check_gl_error {
    ($query:expr) => {{
        fn __here() {}
        $crate::diagnostics::check_gl_error(
            $query,
            ::std::file!(),
            $crate::diagnostics::enclosing_function(::std::any::type_name_of_val(&__here)),
            ::std::line!(),
        )
    }};
    ($query:expr, $policy:expr) => {{
        fn __here() {}
        $crate::diagnostics::check_gl_error_with(
            $query,
            $policy,
            ::std::file!(),
            $crate::diagnostics::enclosing_function(::std::any::type_name_of_val(&__here)),
            ::std::line!(),
        )
    }};
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants;
    use crate::testing::FakeErrorQueue;

    #[test]
    fn drains_in_order() {
        let gl = FakeErrorQueue::new();
        gl.push(constants::INVALID_ENUM);
        gl.push(constants::OUT_OF_MEMORY);
        assert_eq!(
            drain_errors(&gl),
            vec![GlError::InvalidEnum, GlError::OutOfMemory]
        );
        assert!(drain_errors(&gl).is_empty());
    }

    #[test]
    fn stuck_context_stops_at_cap() {
        let gl = FakeErrorQueue::stuck(constants::CONTEXT_LOST);
        let errors = drain_errors(&gl);
        assert_eq!(errors.len(), MAX_PENDING_ERRORS);
        assert!(errors.iter().all(|e| *e == GlError::ContextLost));
    }

    #[test]
    fn closures_are_queries() {
        let get_error = || constants::INVALID_VALUE;
        assert_eq!(get_error.get_error(), constants::INVALID_VALUE);
    }

    #[test]
    fn redacted_record_keeps_error_and_location() {
        let site = CallSite {
            file: "src/upload.rs",
            function: "app::upload",
            line: 42,
        };
        let mut redacted = LogRecord::default();
        GlError::InvalidValue.log_redacting_private_info(&mut redacted);
        redacted.log(" at ");
        site.log_redacting_private_info(&mut redacted);
        assert_eq!(
            redacted.to_string(),
            "GL_INVALID_VALUE at src/upload.rs:42 (app::upload)"
        );

        let mut full = LogRecord::default();
        GlError::InvalidValue.log_all(&mut full);
        full.log(" at ");
        site.log_all(&mut full);
        assert_eq!(full.to_string(), redacted.to_string());
    }

    #[test]
    fn log_policy_record_names_the_call_site() {
        let logger = std::sync::Arc::new(logwise::InMemoryLogger::new());
        logwise::add_global_logger(logger.clone());
        let gl = FakeErrorQueue::new();
        gl.push(constants::INVALID_ENUM);
        check_gl_error_with(&gl, ErrorPolicy::Log, "src/shader.rs", "app::compile", 7);
        let logs = logger.drain_logs();
        assert!(
            logs.contains("GL_INVALID_ENUM at src/shader.rs:7 (app::compile)"),
            "{logs}"
        );
    }

    #[test]
    fn enclosing_function_strips_helpers() {
        assert_eq!(
            enclosing_function("app::render::upload::__here"),
            "app::render::upload"
        );
        assert_eq!(
            enclosing_function("app::main::{{closure}}::{{closure}}::__here"),
            "app::main"
        );
        assert_eq!(enclosing_function("app::main"), "app::main");
    }

    #[test]
    fn macro_names_this_function() {
        fn __here() {}
        let name = enclosing_function(std::any::type_name_of_val(&__here));
        assert!(name.ends_with("macro_names_this_function"), "{name}");
    }

    #[test]
    fn policy_round_trips_through_u8() {
        for policy in [ErrorPolicy::Ignore, ErrorPolicy::Log, ErrorPolicy::Panic] {
            assert_eq!(ErrorPolicy::from_u8(policy as u8), policy);
        }
        assert_eq!(ErrorPolicy::default(), ErrorPolicy::Log);
    }

    #[test]
    #[should_panic(expected = "GL_INVALID_OPERATION, GL_INVALID_VALUE at")]
    fn panic_policy_lists_every_error() {
        let gl = FakeErrorQueue::new();
        gl.push(constants::INVALID_OPERATION);
        gl.push(constants::INVALID_VALUE);
        check_gl_error_with(&gl, ErrorPolicy::Panic, file!(), "draw", line!());
    }

    #[test]
    fn panic_policy_is_quiet_without_errors() {
        let gl = FakeErrorQueue::new();
        check_gl_error_with(&gl, ErrorPolicy::Panic, file!(), "draw", line!());
    }

    #[test]
    fn ignore_policy_still_clears() {
        let gl = FakeErrorQueue::new();
        gl.push(constants::STACK_OVERFLOW);
        check_gl_error_with(&gl, ErrorPolicy::Ignore, file!(), "draw", line!());
        assert!(gl.pending().is_empty());
    }
}
