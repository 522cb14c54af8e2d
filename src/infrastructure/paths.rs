//! Platform path resolution.
//!
//! Locations follow the platform conventions reported by `dirs`:
//!
//! - Linux: `~/.config/photogrid/`, `~/.local/share/photogrid/`
//! - macOS: `~/Library/Application Support/photogrid/`
//! - Windows: `%APPDATA%\photogrid\`

use std::path::PathBuf;

/// Directory name appended to the platform base directories.
pub const APP_NAME: &str = "photogrid";

/// Name of the configuration file inside the config directory.
pub const CONFIG_FILE: &str = "config.toml";

/// Returns the data directory used for log files.
///
/// Falls back to the working directory when the platform reports none.
#[must_use]
pub fn get_data_dir() -> PathBuf {
    dirs::data_dir().map_or_else(|| PathBuf::from("."), |path| path.join(APP_NAME))
}

/// Returns the configuration directory, if the platform has one.
#[must_use]
pub fn get_config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|path| path.join(APP_NAME))
}

/// Returns the default configuration file path.
#[must_use]
pub fn default_config_path() -> Option<PathBuf> {
    get_config_dir().map(|dir| dir.join(CONFIG_FILE))
}

/// Expands a leading `~` to the user's home directory.
///
/// Paths without a leading tilde, and all paths when no home directory is
/// known, are returned unchanged.
///
/// # Examples
///
/// ```
/// use photogrid::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("/absolute/path"), std::path::PathBuf::from("/absolute/path"));
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> PathBuf {
    let home = dirs::home_dir();
    match (path, home) {
        ("~", Some(home)) => home,
        (p, Some(home)) if p.starts_with("~/") => home.join(&p[2..]),
        (p, _) => PathBuf::from(p),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_dir_ends_with_app_name() {
        let dir = get_data_dir();
        if dir != PathBuf::from(".") {
            assert!(dir.ends_with(APP_NAME));
        }
    }

    #[test]
    fn default_config_path_is_inside_config_dir() {
        if let (Some(dir), Some(path)) = (get_config_dir(), default_config_path()) {
            assert_eq!(path.parent(), Some(dir.as_path()));
            assert!(path.ends_with(CONFIG_FILE));
        }
    }

    #[test]
    fn expand_tilde_joins_home() {
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_tilde("~"), home);
            assert_eq!(expand_tilde("~/themes/x.toml"), home.join("themes/x.toml"));
        }
        assert_eq!(expand_tilde("relative/~"), PathBuf::from("relative/~"));
    }
}
