//! Route registry bound to one router root
//!
//! Holds two maps from route pattern to the concrete routes derived from it:
//! one for static routes, one for routes with dynamic segments. Every entry
//! also remembers which files produced it, so removing a file only drops a
//! pattern once no other file maps to it.

use std::collections::{BTreeMap, BTreeSet};

use tracing::debug;

use crate::path;
use crate::route::expand::extrapolate_group_routes;
use crate::route::pattern::{has_dynamic_segments, to_dynamic_template};

/// Route pattern → concrete routes
pub type RouteMap = BTreeMap<String, BTreeSet<String>>;

/// Which map a pattern was classified into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteKind {
    Static,
    Dynamic,
}

/// A filesystem event as reported by a watcher
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteEvent {
    Add(String),
    Change(String),
    Remove(String),
}

/// Flattened view of a registry, ready for rendering
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteSnapshot {
    /// Every static concrete route
    pub static_routes: BTreeSet<String>,
    /// Every dynamic concrete route, with placeholders
    pub dynamic_routes: BTreeSet<String>,
    /// Raw dynamic patterns, e.g. `/users/[id]`
    pub dynamic_templates: BTreeSet<String>,
}

/// Typed-route registry for one router root
///
/// # Examples
///
/// ```
/// use typed_routes::TypedRoutes;
///
/// let mut routes = TypedRoutes::new("/app");
/// assert!(routes.add_file_path("/app/(group)/page.tsx"));
/// assert!(routes.add_file_path("/app/folder/[slug].tsx"));
///
/// let page = routes.static_routes().get("/(group)/page").unwrap();
/// assert!(page.contains("/page"));
/// assert!(page.contains("/(group)/page"));
///
/// let slug = routes.dynamic_routes().get("/folder/[slug]").unwrap();
/// assert!(slug.contains("/folder/${SingleRoutePart<T>}"));
/// ```
#[derive(Debug, Clone)]
pub struct TypedRoutes {
    root: String,
    static_routes: RouteMap,
    dynamic_routes: RouteMap,
    sources: BTreeMap<String, BTreeSet<String>>,
}

impl TypedRoutes {
    /// Creates an empty registry for the given router root
    pub fn new(root: impl Into<String>) -> Self {
        let root = root.into();
        Self {
            root: path::normalize_separators(&root).into_owned(),
            static_routes: RouteMap::new(),
            dynamic_routes: RouteMap::new(),
            sources: BTreeMap::new(),
        }
    }

    pub fn root(&self) -> &str {
        &self.root
    }

    /// Route pattern for a file under this root
    pub fn file_path_to_route(&self, file_path: &str) -> String {
        path::file_path_to_route(file_path, &self.root)
    }

    /// Whether a file under this root contributes a route
    pub fn is_route_file(&self, file_path: &str) -> bool {
        path::is_route_file(file_path, &self.root)
    }

    /// Expands and classifies a route pattern without touching the registry
    ///
    /// ```
    /// use typed_routes::{RouteKind, TypedRoutes};
    ///
    /// let (kind, routes) = TypedRoutes::compile_pattern("/(a,b)/[id]");
    /// assert_eq!(kind, RouteKind::Dynamic);
    /// assert_eq!(routes.len(), 3);
    /// ```
    pub fn compile_pattern(pattern: &str) -> (RouteKind, BTreeSet<String>) {
        let variants = extrapolate_group_routes(pattern);

        if has_dynamic_segments(pattern) {
            let templates = variants
                .iter()
                .map(|variant| to_dynamic_template(variant))
                .collect();
            (RouteKind::Dynamic, templates)
        } else {
            (RouteKind::Static, variants)
        }
    }

    /// Adds a route file to the registry
    ///
    /// Returns `false` without touching the registry when the file is not a
    /// route file; otherwise inserts every expanded variant under the file's
    /// pattern and returns `true`. Adding the same file again is a no-op on
    /// the route sets.
    pub fn add_file_path(&mut self, file_path: &str) -> bool {
        if !self.is_route_file(file_path) {
            debug!("Skipping non-route file: {}", file_path);
            return false;
        }

        let pattern = self.file_path_to_route(file_path);
        let (kind, variants) = Self::compile_pattern(&pattern);

        debug!(
            "Adding {} ({:?}, {} variants) from {}",
            pattern,
            kind,
            variants.len(),
            file_path
        );

        let map = match kind {
            RouteKind::Static => &mut self.static_routes,
            RouteKind::Dynamic => &mut self.dynamic_routes,
        };
        map.entry(pattern.clone()).or_default().extend(variants);

        self.sources
            .entry(pattern)
            .or_default()
            .insert(path::normalize_separators(file_path).into_owned());

        true
    }

    /// Removes a route file's contribution
    ///
    /// The pattern's entry is dropped once its last source file is gone.
    /// Returns whether the registry changed.
    pub fn remove_file_path(&mut self, file_path: &str) -> bool {
        let pattern = self.file_path_to_route(file_path);
        let file_path = path::normalize_separators(file_path);

        let Some(files) = self.sources.get_mut(&pattern) else {
            return false;
        };

        if !files.remove(&*file_path) {
            return false;
        }

        if files.is_empty() {
            self.remove_pattern(&pattern);
        } else {
            debug!("Keeping {} ({} sources left)", pattern, files.len());
        }

        true
    }

    /// Drops a pattern from both maps, whatever files produced it
    pub fn remove_pattern(&mut self, pattern: &str) -> bool {
        self.sources.remove(pattern);
        let removed_static = self.static_routes.remove(pattern).is_some();
        let removed_dynamic = self.dynamic_routes.remove(pattern).is_some();

        if removed_static || removed_dynamic {
            debug!("Removed {}", pattern);
        }

        removed_static || removed_dynamic
    }

    /// Drops every entry, e.g. before a full rescan
    pub fn clear(&mut self) {
        self.static_routes.clear();
        self.dynamic_routes.clear();
        self.sources.clear();
    }

    /// Applies a watcher event; returns whether the declaration is stale
    pub fn apply(&mut self, event: &RouteEvent) -> bool {
        match event {
            RouteEvent::Add(file_path) | RouteEvent::Change(file_path) => {
                self.add_file_path(file_path)
            }
            RouteEvent::Remove(file_path) => self.remove_file_path(file_path),
        }
    }

    pub fn static_routes(&self) -> &RouteMap {
        &self.static_routes
    }

    pub fn dynamic_routes(&self) -> &RouteMap {
        &self.dynamic_routes
    }

    /// Files that currently map to a pattern
    pub fn sources(&self, pattern: &str) -> Option<&BTreeSet<String>> {
        self.sources.get(pattern)
    }

    /// Whether any registered file lives below `dir`
    ///
    /// Lets a watcher recognize a vanished directory by what it contained
    /// rather than by the shape of its name (`v1.2/` has an "extension").
    pub fn has_sources_under(&self, dir: &str) -> bool {
        let dir = path::normalize_separators(dir);
        let prefix = format!("{}/", dir.trim_end_matches('/'));

        self.sources
            .values()
            .flatten()
            .any(|file_path| file_path.starts_with(&prefix))
    }

    /// Number of patterns across both maps
    pub fn len(&self) -> usize {
        self.static_routes.len() + self.dynamic_routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.static_routes.is_empty() && self.dynamic_routes.is_empty()
    }

    /// Flattens both maps into the three sets the declaration needs
    pub fn snapshot(&self) -> RouteSnapshot {
        RouteSnapshot {
            static_routes: self.static_routes.values().flatten().cloned().collect(),
            dynamic_routes: self.dynamic_routes.values().flatten().cloned().collect(),
            dynamic_templates: self.dynamic_routes.keys().cloned().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_registry_is_empty() {
        let routes = TypedRoutes::new("/app");
        assert!(routes.is_empty());
        assert_eq!(routes.len(), 0);
        assert_eq!(routes.snapshot(), RouteSnapshot::default());
    }

    #[test]
    fn test_root_separators_normalized() {
        let routes = TypedRoutes::new("C:\\proj\\app");
        assert_eq!(routes.root(), "C:/proj/app");
        assert_eq!(routes.file_path_to_route("C:\\proj\\app\\a.tsx"), "/a");
    }

    #[test]
    fn test_compile_static_pattern() {
        let (kind, routes) = TypedRoutes::compile_pattern("/about");
        assert_eq!(kind, RouteKind::Static);
        assert_eq!(routes.into_iter().collect::<Vec<_>>(), vec!["/about"]);
    }

    #[test]
    fn test_pattern_lives_in_one_map() {
        let mut routes = TypedRoutes::new("/app");
        routes.add_file_path("/app/[id].tsx");
        assert!(routes.dynamic_routes().contains_key("/[id]"));
        assert!(!routes.static_routes().contains_key("/[id]"));
    }

    #[test]
    fn test_apply_events() {
        let mut routes = TypedRoutes::new("/app");
        assert!(routes.apply(&RouteEvent::Add("/app/a.tsx".into())));
        assert!(routes.apply(&RouteEvent::Change("/app/a.tsx".into())));
        assert!(routes.apply(&RouteEvent::Remove("/app/a.tsx".into())));
        assert!(!routes.apply(&RouteEvent::Remove("/app/a.tsx".into())));
        assert!(!routes.apply(&RouteEvent::Add("/app/_layout.tsx".into())));
        assert!(routes.is_empty());
    }

    #[test]
    fn test_has_sources_under() {
        let mut routes = TypedRoutes::new("/app");
        routes.add_file_path("/app/v1.2/page.tsx");
        routes.add_file_path("/app/blog/[slug].tsx");

        assert!(routes.has_sources_under("/app/v1.2"));
        assert!(routes.has_sources_under("/app/v1.2/"));
        assert!(routes.has_sources_under("/app/blog"));
        assert!(routes.has_sources_under("/app"));
        assert!(!routes.has_sources_under("/app/v1"));
        assert!(!routes.has_sources_under("/app/blog/[slug].tsx"));
        assert!(!routes.has_sources_under("/other"));
    }
}
