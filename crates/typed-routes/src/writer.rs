//! Writes the rendered declaration to disk

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::{Result, TypedRoutesError};
use crate::registry::RouteSnapshot;
use crate::render::render_declaration;

/// File name of the generated declaration
pub const DECLARATION_FILE: &str = "router.d.ts";

/// Reads a custom declaration template
pub fn load_template(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| TypedRoutesError::io(path, e))
}

/// Renders `snapshot` and writes it to `<types_dir>/router.d.ts`
///
/// Creates `types_dir` when needed. Returns the written path.
pub fn write_declaration(
    types_dir: &Path,
    snapshot: &RouteSnapshot,
    template: Option<&str>,
) -> Result<PathBuf> {
    fs::create_dir_all(types_dir).map_err(|e| TypedRoutesError::io(types_dir, e))?;

    let path = types_dir.join(DECLARATION_FILE);
    let declaration = render_declaration(snapshot, template);
    fs::write(&path, declaration).map_err(|e| TypedRoutesError::io(&path, e))?;

    info!(
        "Wrote {:?} ({} static, {} dynamic routes)",
        path,
        snapshot.static_routes.len(),
        snapshot.dynamic_routes.len()
    );

    Ok(path)
}
