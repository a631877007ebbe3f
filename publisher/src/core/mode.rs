//! Run mode selected once on the command line.

/// The only recognised argument.
pub const DRY_FLAG: &str = "--dry";

/// Whether side effects are performed or only reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunMode {
    /// Print the command queue, write nothing, run nothing.
    Dry,
    /// Write the redirect page and execute the command queue.
    #[default]
    Live,
}

impl RunMode {
    pub fn from_dry_flag(dry: bool) -> Self {
        if dry { Self::Dry } else { Self::Live }
    }

    /// Dry iff the first argument after the program name is exactly `--dry`.
    ///
    /// Anything else, including `--dry=...` or a later `--dry`, is live.
    pub fn from_args<S: AsRef<str>>(args: &[S]) -> Self {
        Self::from_dry_flag(args.first().is_some_and(|arg| arg.as_ref() == DRY_FLAG))
    }

    pub fn is_dry(self) -> bool {
        self == Self::Dry
    }
}
