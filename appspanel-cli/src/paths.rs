//! Platform-specific directory paths.
//!
//! Uses XDG on Linux, standard locations on macOS/Windows.

use std::path::PathBuf;

use directories::ProjectDirs;

const QUALIFIER: &str = "org";
const ORGANIZATION: &str = "appspanel";
const APPLICATION: &str = "appspanel";

/// Get project directories, or None if home directory cannot be determined.
fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
}

/// Get the config directory.
///
/// - Linux: `$XDG_CONFIG_HOME/appspanel` or `~/.config/appspanel`
/// - macOS: `~/Library/Application Support/org.appspanel.appspanel`
/// - Windows: `C:\Users\<User>\AppData\Roaming\appspanel\appspanel\config`
pub fn config_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the cache directory, where logs go.
///
/// - Linux: `$XDG_CACHE_HOME/appspanel` or `~/.cache/appspanel`
/// - macOS: `~/Library/Caches/org.appspanel.appspanel`
/// - Windows: `C:\Users\<User>\AppData\Local\appspanel\appspanel\cache`
pub fn cache_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.cache_dir().to_path_buf())
}

/// Get the path to the panel config file. It may not exist.
pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.json"))
}

/// Get the path to the latest log file.
pub fn log_file() -> Option<PathBuf> {
    cache_dir().map(|dir| dir.join("latest.log"))
}
