/// Path utilities for turning route files into route patterns
///
/// All functions are **pure**: given same input, always produce same output with no side effects.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;

/// Source-file extensions a route file may carry
pub const SOURCE_EXTENSIONS: [&str; 4] = ["tsx", "ts", "jsx", "js"];

/// Layout files and `+`-special files (`+html`, `+not-found`, `user+api`)
///
/// A `+` is allowed in directory names, just not in the last segment.
static EXCLUDED_FILE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:_layout|[^/]*?\+[^/]*?)\.[tj]sx?$").unwrap());

/// Normalize path separators to `/`
///
/// **Pure function** with zero-copy optimization using `Cow<'_, str>`.
/// Returns `Cow::Borrowed` when the input has no backslashes.
///
/// # Examples
///
/// ```
/// use typed_routes::path::normalize_separators;
/// use std::borrow::Cow;
///
/// assert!(matches!(normalize_separators("/app/index.tsx"), Cow::Borrowed(_)));
/// assert_eq!(normalize_separators("C:\\app\\index.tsx"), "C:/app/index.tsx");
/// ```
pub fn normalize_separators(path: &str) -> Cow<'_, str> {
    if path.contains('\\') {
        Cow::Owned(path.replace('\\', "/"))
    } else {
        Cow::Borrowed(path)
    }
}

/// Path of `file_path` relative to `root`, without leading `/`
///
/// Returns `None` when the file is not under `root`.
pub fn relative_to_root(file_path: &str, root: &str) -> Option<String> {
    let file_path = normalize_separators(file_path);
    let root = normalize_separators(root);
    let root = root.trim_end_matches('/');

    let rest = file_path.strip_prefix(root)?;
    if !root.is_empty() && !rest.is_empty() && !rest.starts_with('/') {
        // `/app-other/x.tsx` is not under `/app`
        return None;
    }

    Some(rest.trim_start_matches('/').to_string())
}

/// Strips one recognized source extension from the final segment
///
/// ```
/// use typed_routes::path::strip_source_extension;
///
/// assert_eq!(strip_source_extension("users/[id].tsx"), "users/[id]");
/// assert_eq!(strip_source_extension("notes.md"), "notes.md");
/// ```
pub fn strip_source_extension(path: &str) -> &str {
    path.rsplit_once('.')
        .filter(|(stem, ext)| {
            SOURCE_EXTENSIONS.contains(ext) && !stem.is_empty() && !stem.ends_with('/')
        })
        .map(|(stem, _)| stem)
        .unwrap_or(path)
}

/// Maps a route file to its route pattern
///
/// Steps:
/// 1. make the path relative to `root` (paths outside `root` are taken as root-relative)
/// 2. strip one source extension
/// 3. collapse a final `index` segment into a trailing `/`
/// 4. prefix `/`
///
/// Group and bracket syntax is kept verbatim.
///
/// # Examples
///
/// ```
/// use typed_routes::path::file_path_to_route;
///
/// assert_eq!(file_path_to_route("/app/file.tsx", "/app"), "/file");
/// assert_eq!(file_path_to_route("/app/folder/index.tsx", "/app"), "/folder/");
/// assert_eq!(file_path_to_route("/app/index.tsx", "/app"), "/");
/// assert_eq!(
///     file_path_to_route("folder/(group)/[param].tsx", "/app"),
///     "/folder/(group)/[param]"
/// );
/// ```
pub fn file_path_to_route(file_path: &str, root: &str) -> String {
    let relative = relative_to_root(file_path, root).unwrap_or_else(|| {
        normalize_separators(file_path)
            .trim_start_matches('/')
            .to_string()
    });

    let without_ext = strip_source_extension(&relative);

    let route = match without_ext.rsplit_once('/') {
        Some((dir, "index")) => format!("{}/", dir),
        None if without_ext == "index" => String::new(),
        _ => without_ext.to_string(),
    };

    format!("/{}", route)
}

/// Checks whether a file contributes a route
///
/// A route file lives strictly inside `root`, carries a source extension,
/// and is neither a layout nor a `+`-special file.
///
/// # Examples
///
/// ```
/// use typed_routes::path::is_route_file;
///
/// assert!(is_route_file("/app/users/[id].tsx", "/app"));
/// assert!(!is_route_file("/app/_layout.tsx", "/app"));
/// assert!(!is_route_file("/app/+html.tsx", "/app"));
/// assert!(!is_route_file("/app/readme.md", "/app"));
/// assert!(!is_route_file("/lib/util.ts", "/app"));
/// ```
pub fn is_route_file(file_path: &str, root: &str) -> bool {
    let Some(relative) = relative_to_root(file_path, root) else {
        return false;
    };

    if relative.is_empty() || relative.split('/').any(|segment| segment == "..") {
        return false;
    }

    if strip_source_extension(&relative) == relative {
        return false;
    }

    !EXCLUDED_FILE.is_match(&relative)
}
