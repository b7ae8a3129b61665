//! Stable exit codes for the freshclam-fixer CLI.

/// Configuration edited (or rendered, for `--dry-run`).
pub const OK: i32 = 0;
/// Reading, writing or another runtime step failed.
pub const FAILED: i32 = 1;
/// Command-line usage error. Emitted by clap itself, never by [`crate::fix`].
pub const USAGE: i32 = 2;
/// A requested edit could not be applied (a malformed `--custom-value` or a
/// value that cannot be written as a single directive line).
pub const INVALID: i32 = 3;
