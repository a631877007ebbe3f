//! `publish`: build the site and move it into the `web` checkout.
//!
//! Run from the site source directory. `publish --dry` prints the commands
//! that would run instead of running them.

use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;

use publisher::core::mode::RunMode;
use publisher::exit_codes;
use publisher::logging;
use publisher::publish::run_publish;

#[derive(Parser)]
#[command(
    name = "publish",
    version,
    about = "Generate the static site and publish it to the sibling web checkout"
)]
struct Cli {
    /// `--dry` as the first argument prints the command queue instead of
    /// running it and writes nothing. Any other argument is ignored.
    #[arg(
        value_name = "--dry",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    args: Vec<String>,
}

impl Cli {
    fn mode(&self) -> RunMode {
        RunMode::from_args(&self.args)
    }

    fn ignored(&self) -> &[String] {
        match self.mode() {
            RunMode::Dry => &self.args[1..],
            RunMode::Live => &self.args,
        }
    }
}

fn main() {
    logging::init();
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(exit_codes::FAILED);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    if !cli.ignored().is_empty() {
        debug!(ignored = ?cli.ignored(), "ignoring extra arguments");
    }
    let source_dir = std::env::current_dir()
        .and_then(|dir| dir.canonicalize())
        .context("resolve source directory")?;
    let mut stdout = io::stdout().lock();
    run_publish(&source_dir, cli.mode(), &mut stdout)?;
    Ok(())
}
