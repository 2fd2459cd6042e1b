//! # Vocab Path Resolver
//!
//! Static defaults for locating vocabulary artifacts by relative name.

use std::{
    env,
    path::{Path, PathBuf},
};

use directories_next::ProjectDirs;

/// Environment variable key to override the default vocab data directory.
pub const VOCABIN_DATA_DIR: &str = "VOCABIN_DATA_DIR";

/// Default [`PathResolver`] for vocabin.
pub const VOCABIN_PATH_CONFIG: PathResolver = PathResolver {
    qualifier: "io.crates.vocabin",
    organization: "",
    application: "vocabin",
    data_env_vars: &[VOCABIN_DATA_DIR],
};

/// Static configuration for vocab path resolution.
#[derive(Debug, Clone, Copy)]
pub struct PathResolver {
    /// The qualifier for [`ProjectDirs`].
    pub qualifier: &'static str,

    /// The organization for [`ProjectDirs`].
    pub organization: &'static str,

    /// The application for [`ProjectDirs`].
    pub application: &'static str,

    /// The resolution order for data directories environment variables.
    pub data_env_vars: &'static [&'static str],
}

impl Default for PathResolver {
    fn default() -> Self {
        VOCABIN_PATH_CONFIG
    }
}

impl PathResolver {
    /// Get the [`ProjectDirs`] for this config.
    pub fn project_dirs(&self) -> Option<ProjectDirs> {
        ProjectDirs::from(self.organization, self.application, self.qualifier)
    }

    /// Resolve the vocab data directory for this config.
    ///
    /// Resolution Order:
    /// 1. `path`, if present.
    /// 2. ``env[$VAR]`` for each `self.data_env_vars`; in order.
    /// 3. `self.project_dirs().data_dir()`, if present.
    /// 4. `None`
    pub fn resolve_data_dir<P: AsRef<Path>>(
        &self,
        path: Option<P>,
    ) -> Option<PathBuf> {
        if let Some(path) = path.as_ref() {
            return Some(path.as_ref().to_path_buf());
        }

        for env_var in self.data_env_vars {
            if let Ok(path) = env::var(env_var) {
                return Some(PathBuf::from(path));
            }
        }

        self.project_dirs().map(|pds| pds.data_dir().to_path_buf())
    }

    /// Resolve a vocab locator to a path.
    ///
    /// Absolute locators, and relative locators which exist relative to
    /// the working directory, are returned as-is. Other relative locators
    /// are joined onto the resolved data directory.
    ///
    /// Never touches the filesystem beyond an existence check.
    pub fn resolve_locator<L: AsRef<Path>, P: AsRef<Path>>(
        &self,
        locator: L,
        data_dir: Option<P>,
    ) -> PathBuf {
        let locator = locator.as_ref();
        if locator.is_absolute() || locator.exists() {
            return locator.to_path_buf();
        }

        match self.resolve_data_dir(data_dir) {
            Some(dir) => dir.join(locator),
            None => locator.to_path_buf(),
        }
    }
}
