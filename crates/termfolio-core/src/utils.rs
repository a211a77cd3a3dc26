//! Path helpers.

use std::path::PathBuf;

/// Get the termfolio data directory (e.g. `~/.termfolio/`).
pub fn get_data_path() -> PathBuf {
    let home = dirs_next::home_dir().unwrap_or_else(|| PathBuf::from("."));
    home.join(".termfolio")
}

/// Expand `~` to the home directory in a path string.
pub fn expand_home(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs_next::home_dir() {
            return home.join(rest);
        }
    }
    if path == "~" {
        if let Some(home) = dirs_next::home_dir() {
            return home;
        }
    }
    PathBuf::from(path)
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_path_under_home() {
        let path = get_data_path();
        assert!(path.to_string_lossy().contains(".termfolio"));
    }

    #[test]
    fn expand_home_tilde_prefix() {
        let result = expand_home("~/profile.md");
        assert!(result.ends_with("profile.md"));
        assert!(!result.starts_with("~"));
    }

    #[test]
    fn expand_home_absolute_path() {
        let result = expand_home("/absolute/path.md");
        assert_eq!(result, PathBuf::from("/absolute/path.md"));
    }

    #[test]
    fn expand_home_bare_tilde() {
        let result = expand_home("~");
        assert!(!result.to_string_lossy().contains('~'));
    }
}
