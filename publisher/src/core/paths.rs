//! Site layout derived from the source directory.

use std::path::{Path, PathBuf};

/// Name of the web checkout, a sibling of the source directory.
pub const WEB_DIR_NAME: &str = "web";

/// Name of the redirect page at the web root.
pub const REDIRECT_PAGE: &str = "index.html";

/// Canonical paths for one publish run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SitePaths {
    pub source_dir: PathBuf,
    pub web_dir: PathBuf,
}

impl SitePaths {
    pub fn new(source_dir: impl Into<PathBuf>) -> Self {
        let source_dir = source_dir.into();
        let web_dir = web_dir_for(&source_dir);
        Self {
            source_dir,
            web_dir,
        }
    }

    /// Generator working directory for `locale`.
    pub fn locale_source_dir(&self, locale: &str) -> PathBuf {
        self.source_dir.join(locale)
    }

    /// Directory the generator writes for `locale` under build profile `env`.
    pub fn generator_output_dir(&self, locale: &str, env: &str) -> PathBuf {
        self.locale_source_dir(locale).join(format!("output_{env}"))
    }

    /// Where the generated `locale` tree is moved to.
    pub fn web_locale_dir(&self, locale: &str) -> PathBuf {
        self.web_dir.join(locale)
    }

    pub fn redirect_page_path(&self) -> PathBuf {
        self.web_dir.join(REDIRECT_PAGE)
    }
}

/// `web` next to `source_dir`: its parent joined with `web`.
///
/// A root path has no parent, so `/` maps to `/web`.
pub fn web_dir_for(source_dir: &Path) -> PathBuf {
    source_dir
        .parent()
        .unwrap_or(source_dir)
        .join(WEB_DIR_NAME)
}
