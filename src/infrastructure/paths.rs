//! Filesystem path resolution for configuration and storage.
//!
//! This module decides where the diary keeps its data on disk. Paths follow
//! the XDG-style layout under the user's home directory, with tilde expansion
//! for user-supplied overrides.

use std::path::PathBuf;

/// Returns the data directory for diary storage.
///
/// Resolves to `~/.local/share/whispernote`. The JSON storage file
/// `entries.json` lives within this directory.
#[must_use]
pub fn get_data_dir() -> PathBuf {
    home_dir().join(".local/share/whispernote")
}

/// Returns the default path of the JSON entry store.
#[must_use]
pub fn default_store_path() -> PathBuf {
    get_data_dir().join("entries.json")
}

/// Returns the path of the optional TOML configuration file.
///
/// Resolves to `~/.config/whispernote/config.toml`.
#[must_use]
pub fn get_config_path() -> PathBuf {
    home_dir().join(".config/whispernote/config.toml")
}

/// Expands a leading tilde to the user's home directory.
///
/// Paths without a tilde pass through unchanged.
#[must_use]
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        home_dir().join(rest)
    } else if path == "~" {
        home_dir()
    } else {
        PathBuf::from(path)
    }
}

fn home_dir() -> PathBuf {
    std::env::var_os("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."))
}

#[cfg(test)]
mod tests {
    use super::expand_tilde;
    use std::path::PathBuf;

    #[test]
    fn absolute_paths_pass_through() {
        assert_eq!(
            expand_tilde("/var/lib/diary.json"),
            PathBuf::from("/var/lib/diary.json")
        );
    }

    #[test]
    fn relative_paths_pass_through() {
        assert_eq!(expand_tilde("diary.json"), PathBuf::from("diary.json"));
    }

    #[test]
    fn tilde_prefix_expands_to_home() {
        let expanded = expand_tilde("~/notes/diary.json");
        assert!(expanded.ends_with("notes/diary.json"));
        assert!(!expanded.to_string_lossy().contains('~'));
    }
}
