//! In-place editor for freshclam-style configuration files.
//!
//! Parses `name value [# comment]` lines into an order-preserving document,
//! replaces named directives and writes the result back, keeping every other
//! line (comments, blank lines, malformed lines) verbatim. The architecture
//! enforces a strict separation:
//!
//! - **[`core`]**: Pure, deterministic text-in/text-out engine (parse, replace,
//!   render). No I/O, fully testable in isolation.
//! - **[`io`]**: Side-effecting operations (config files, edit profiles).
//!
//! [`fix`] coordinates the two to implement the CLI.

pub mod core;
pub mod exit_codes;
pub mod fix;
pub mod io;
pub mod logging;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
