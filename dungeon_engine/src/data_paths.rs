use std::env;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

/// Environment variable that overrides data directory detection.
pub const DATA_DIR_VAR: &str = "DUNGEON_DATA";

/// Cached path to the directory containing the engine's runtime data files.
static DATA_ROOT: LazyLock<PathBuf> = LazyLock::new(detect_data_root);

/// Construct a data path relative to the resolved data root.
pub fn data_path(relative: impl AsRef<Path>) -> PathBuf {
    DATA_ROOT.join(relative)
}

/// Resolve the most likely location of the runtime data directory.
fn detect_data_root() -> PathBuf {
    if let Some(dir) = env::var_os(DATA_DIR_VAR) {
        return PathBuf::from(dir);
    }

    let mut candidates = Vec::new();

    // Common layouts: workspace root and flattened `data/`.
    candidates.push(PathBuf::from("dungeon_engine/data"));
    candidates.push(PathBuf::from("data"));

    if let Ok(exe_path) = env::current_exe()
        && let Some(dir) = exe_path.parent()
    {
        candidates.push(dir.join("dungeon_engine/data"));
        candidates.push(dir.join("data"));

        if let Some(parent) = dir.parent() {
            candidates.push(parent.join("dungeon_engine/data"));
            candidates.push(parent.join("data"));
        }
    }

    candidates
        .into_iter()
        .find(|candidate| candidate.is_dir())
        .unwrap_or_else(|| PathBuf::from("dungeon_engine/data"))
}
