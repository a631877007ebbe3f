//! Filesystem touch points of a publish run.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, info};

/// True if `web_dir` exists and is a directory.
pub fn web_dir_exists(web_dir: &Path) -> bool {
    let exists = web_dir.is_dir();
    debug!(web_dir = %web_dir.display(), exists, "checked web directory");
    exists
}

/// Write the redirect page, replacing any existing file.
///
/// The parent directory is not created: a missing web checkout is an error.
pub fn write_redirect_page(path: &Path, html: &str) -> Result<()> {
    fs::write(path, html).with_context(|| format!("write redirect page {}", path.display()))?;
    info!(path = %path.display(), "wrote redirect page");
    Ok(())
}
