use directories::ProjectDirs;
use std::path::PathBuf;

/// Environment variable overriding the task database location.
pub const DB_ENV_VAR: &str = "DONEZO_DB";

const DB_FILENAME: &str = "tasks.json";

/// Resolve the task database path.
///
/// Precedence: explicit path (CLI flag) > `DONEZO_DB` > the platform data
/// directory. The file itself need not exist yet; it is created on first
/// write.
pub fn resolve_db_path(explicit: Option<PathBuf>) -> PathBuf {
    if let Some(path) = explicit {
        return path;
    }
    if let Ok(path) = std::env::var(DB_ENV_VAR) {
        if !path.is_empty() {
            return PathBuf::from(path);
        }
    }
    default_db_path()
}

/// The per-user default location, e.g. `~/.local/share/donezo/tasks.json`
/// on Linux. Falls back to the working directory when no home directory
/// can be determined.
pub fn default_db_path() -> PathBuf {
    ProjectDirs::from("com", "donezo", "donezo")
        .map(|dirs| dirs.data_dir().join(DB_FILENAME))
        .unwrap_or_else(|| PathBuf::from(DB_FILENAME))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_path_wins() {
        let path = resolve_db_path(Some(PathBuf::from("/tmp/custom.json")));
        assert_eq!(path, PathBuf::from("/tmp/custom.json"));
    }

    #[test]
    fn default_points_at_the_tasks_file() {
        assert!(default_db_path().ends_with(DB_FILENAME));
    }
}
