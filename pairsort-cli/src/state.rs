/// Session snapshot persistence as JSON.
///
/// The snapshot is rewritten after every answer, through a temp file and a
/// rename so a crash never leaves half a file behind.
use pairsort_core::EngineState;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::bail;

pub type Snapshot = EngineState<String>;

/// Load a snapshot. Returns `None` if the file doesn't exist.
pub fn load_state(path: &Path) -> Option<Snapshot> {
    match std::fs::read_to_string(path) {
        Ok(content) => Some(
            serde_json::from_str(&content)
                .unwrap_or_else(|e| bail(format!("Failed to parse session at {}: {e}", path.display()))),
        ),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
        Err(e) => bail(format!("Failed to read session at {}: {e}", path.display())),
    }
}

pub fn save_state(path: &Path, state: &Snapshot) {
    let json = serde_json::to_string_pretty(state)
        .unwrap_or_else(|e| bail(format!("Failed to serialize session: {e}")));

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .unwrap_or_else(|e| bail(format!("Failed to create directory {}: {e}", parent.display())));
    }

    let tmp = temp_path(path);
    std::fs::write(&tmp, json)
        .unwrap_or_else(|e| bail(format!("Failed to write session to {}: {e}", tmp.display())));
    std::fs::rename(&tmp, path)
        .unwrap_or_else(|e| bail(format!("Failed to move session into {}: {e}", path.display())));

    debug!(path = %path.display(), decisions = state.ledger.len(), "session saved");
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

/// True if `items` holds exactly the snapshot's items, in any order.
pub fn same_items(state: &Snapshot, items: &[String]) -> bool {
    let mut saved: Vec<&str> = state.prior_order.iter().map(String::as_str).collect();
    let mut given: Vec<&str> = items.iter().map(String::as_str).collect();
    saved.sort_unstable();
    given.sort_unstable();
    saved == given
}
