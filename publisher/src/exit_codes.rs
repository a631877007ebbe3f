//! Stable exit codes for the `publish` binary.

/// Queue printed (dry run) or fully executed.
pub const OK: i32 = 0;
/// Invalid config, failed redirect write, or a halted command queue.
pub const FAILED: i32 = 1;
