//! Configuration utility functions.

use std::path::{Path, PathBuf};

/// Find config file by searching upward from `start`
///
/// Walks up parent directories until finding `config_name`
/// Returns the path to the config file if found
///
/// # Example
/// ```text
/// /home/user/site/src/routes/  ← start
/// /home/user/site/routemap.toml ← found!
/// ```
pub fn find_config_file_from(start: &Path, config_name: &Path) -> Option<PathBuf> {
    // Absolute path: no search
    if config_name.is_absolute() {
        return config_name.exists().then(|| config_name.to_path_buf());
    }

    let mut current = start;
    loop {
        let candidate = current.join(config_name);
        if candidate.exists() {
            return Some(candidate);
        }

        match current.parent() {
            Some(parent) => current = parent,
            None => return None, // Reached filesystem root
        }
    }
}

/// Resolve a configured path: expand `~`, then anchor relative paths at `root`.
pub fn resolve_config_path(path: &Path, root: &Path) -> PathBuf {
    let expanded = shellexpand::tilde(&path.to_string_lossy()).into_owned();
    let path = PathBuf::from(expanded);
    if path.is_relative() {
        root.join(path)
    } else {
        path
    }
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_find_config_file_upward() {
        let tmp = tempfile::tempdir().unwrap();
        let nested = tmp.path().join("src").join("routes");
        fs::create_dir_all(&nested).unwrap();
        fs::write(tmp.path().join("routemap.toml"), "").unwrap();

        let found = find_config_file_from(&nested, Path::new("routemap.toml")).unwrap();
        assert_eq!(found, tmp.path().join("routemap.toml"));
    }

    #[test]
    fn test_find_config_file_absolute() {
        let tmp = tempfile::tempdir().unwrap();
        let config = tmp.path().join("custom.toml");
        assert!(find_config_file_from(tmp.path(), &config).is_none());

        fs::write(&config, "").unwrap();
        assert_eq!(find_config_file_from(Path::new("/"), &config), Some(config));
    }

    #[test]
    fn test_resolve_config_path() {
        let root = Path::new("/site");
        assert_eq!(
            resolve_config_path(Path::new("public"), root),
            PathBuf::from("/site/public")
        );
        assert_eq!(
            resolve_config_path(Path::new("/var/www"), root),
            PathBuf::from("/var/www")
        );
    }
}
