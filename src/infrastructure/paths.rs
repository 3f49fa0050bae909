//! Sandbox path helpers.

use std::path::PathBuf;

/// Host mount point inside the sandbox.
const HOST_ROOT: &str = "/host";

/// Directory holding the plugin's trace file.
///
/// Resolves to `~/.local/share/zellij/popcorn` on the host when Zellij was
/// started from the home directory, since `/host` is the cwd Zellij was
/// launched from.
///
/// ```
/// use popcorn::infrastructure::get_data_dir;
///
/// assert_eq!(get_data_dir().to_str(), Some("/host/.local/share/zellij/popcorn"));
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from(HOST_ROOT)
        .join(".local")
        .join("share")
        .join("zellij")
        .join("popcorn")
}

/// Rewrites a leading `~` to the sandbox's host mount.
///
/// Used for the `theme_file` option, which users write relative to home.
///
/// ```
/// use popcorn::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/themes/dark.toml"), "/host/themes/dark.toml");
/// assert_eq!(expand_tilde("/etc/popcorn.toml"), "/etc/popcorn.toml");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    match path.strip_prefix('~') {
        Some("") => HOST_ROOT.to_string(),
        Some(rest) if rest.starts_with('/') => format!("{HOST_ROOT}{rest}"),
        _ => path.to_string(),
    }
}
