//! Static site publisher.
//!
//! Prepares the `web` checkout next to the site sources, runs the static-site
//! generator, and moves its output into the checkout. The architecture keeps a
//! strict separation:
//!
//! - **[`core`]**: Pure, deterministic logic (run mode, paths, command queue
//!   planning, redirect document). No I/O, fully testable in isolation.
//! - **[`io`]**: Side-effecting operations (config file, redirect page,
//!   process execution). Isolated behind [`io::runner::CommandRunner`] so tests
//!   never spawn the real tools.
//!
//! [`publish`] wires the two together into the initialize → generate →
//! publish pipeline driven by the `publish` binary.

pub mod core;
pub mod exit_codes;
pub mod io;
pub mod logging;
pub mod publish;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
