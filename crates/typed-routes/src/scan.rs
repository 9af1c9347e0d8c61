//! Full scans of a router directory

use std::path::Path;

use tracing::{info, warn};
use walkdir::WalkDir;

use crate::error::Result;
use crate::registry::TypedRoutes;

/// Feeds every file under `dir` to the registry
///
/// Files are visited in name order so repeated scans insert in the same
/// order. Symlinked folders are followed. A missing directory scans
/// nothing, and an entry that cannot be read (a permission error, a folder
/// deleted mid-walk, a symlink loop) is skipped with a warning so the
/// remaining routes are still registered. Only an unreadable `dir` is an
/// error. Returns how many files were accepted as routes.
pub fn scan_directory(routes: &mut TypedRoutes, dir: &Path) -> Result<usize> {
    if !dir.is_dir() {
        warn!("Router directory does not exist: {:?}", dir);
        return Ok(0);
    }

    let mut added = 0;

    for entry in WalkDir::new(dir).follow_links(true).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            // The router directory itself is unreadable
            Err(e) if e.depth() == 0 => return Err(e.into()),
            Err(e) => {
                warn!("Skipping unreadable entry: {}", e);
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }

        let Some(file_path) = entry.path().to_str() else {
            warn!("Skipping non UTF-8 path: {:?}", entry.path());
            continue;
        };

        if routes.add_file_path(file_path) {
            added += 1;
        }
    }

    info!(
        "Scanned {:?}: {} route files, {} patterns",
        dir,
        added,
        routes.len()
    );

    Ok(added)
}

/// Clears the registry and scans `dir` again
pub fn rescan_directory(routes: &mut TypedRoutes, dir: &Path) -> Result<usize> {
    routes.clear();
    scan_directory(routes, dir)
}
