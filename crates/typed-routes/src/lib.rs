//! # Typed Routes
//!
//! A typed-route compiler for file-based routers. For every route file it
//! derives the URL paths the file can be reached by, with support for:
//! - Static routes (`/about`)
//! - Dynamic segments (`/users/[id]`)
//! - Catch-all segments (`/docs/[...slug]`)
//! - Route groups and alternative groups (`/(tabs)/home`, `/(home,search)/feed`)
//!
//! ## Pipeline
//!
//! file path → [`path::file_path_to_route`] → [`route::pattern`] classification →
//! [`route::expand::extrapolate_group_routes`] → [`TypedRoutes`] →
//! [`set_to_union_type`] → `router.d.ts`
//!
//! The compiler is pure and synchronous; only [`scan`], [`writer`] and
//! [`config`] touch the filesystem.
//!
//! ## Group expansion
//!
//! A group segment is optional. Eliding it also elides every later group,
//! so `/test/(a,b,c)/(d,e)` expands to `1 + 3 * (1 + 2) = 10` routes.
//!
//! ## Example
//!
//! ```
//! use typed_routes::{set_to_union_type, TypedRoutes};
//!
//! let mut routes = TypedRoutes::new("/app");
//! routes.add_file_path("/app/file.tsx");
//! routes.add_file_path("/app/(group)/page.tsx");
//!
//! let snapshot = routes.snapshot();
//! assert_eq!(
//!     set_to_union_type(&snapshot.static_routes),
//!     "`/(group)/page` | `/file` | `/page`"
//! );
//! ```

// ============================================================================
// Module Declarations
// ============================================================================

pub mod config;
pub mod error;
pub mod path;
pub mod registry;
pub mod render;
pub mod route;
pub mod scan;
pub mod writer;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::TypedRoutesConfig;
pub use error::{Result, TypedRoutesError};
pub use path::{file_path_to_route, is_route_file};
pub use registry::{RouteEvent, RouteKind, RouteMap, RouteSnapshot, TypedRoutes};
pub use render::{render_declaration, set_to_union_type};
pub use route::expand::extrapolate_group_routes;
pub use route::pattern::{classify_segment, DynamicSegment, SegmentKind};
pub use scan::{rescan_directory, scan_directory};
pub use writer::{write_declaration, DECLARATION_FILE};
