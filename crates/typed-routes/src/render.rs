//! Literal-union rendering and the `router.d.ts` declaration
//!
//! Strings are emitted as template-literal types, so dynamic placeholders
//! such as `${SingleRoutePart<T>}` stay live interpolations. Nothing is
//! escaped.

use crate::registry::RouteSnapshot;

/// Renders strings as a union of template-literal types
///
/// Keeps the iteration order of the input. An empty input renders `never`.
/// The registry hands over [`RouteSnapshot`] sets, which are `BTreeSet`s,
/// so generated unions come out sorted rather than in file-insertion
/// order; the same routes always render the same declaration.
///
/// # Examples
///
/// ```
/// use typed_routes::set_to_union_type;
///
/// assert_eq!(set_to_union_type(["a", "b", "c"]), "`a` | `b` | `c`");
/// assert_eq!(set_to_union_type(Vec::<String>::new()), "never");
/// ```
pub fn set_to_union_type<I, S>(items: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let members: Vec<String> = items
        .into_iter()
        .map(|item| format!("`{}`", item.as_ref()))
        .collect();

    if members.is_empty() {
        "never".to_string()
    } else {
        members.join(" | ")
    }
}

const NAMESPACE_HEADER: &str = "declare namespace ExpoRouter {";
const MODULE_HEADER: &str = "declare module \"expo-router\" {";
const STATIC_ROUTES_SLOT: &str = "type StaticRoutes = string;";
const DYNAMIC_ROUTES_SLOT: &str = "type DynamicRoutes<T extends string> = string;";
const DYNAMIC_TEMPLATE_SLOT: &str = "type DynamicRouteTemplate = never;";

/// Fills the three route unions into a declaration template
///
/// `template` defaults to [`DEFAULT_TEMPLATE`]. A template written as a
/// namespace is turned into a module declaration first.
///
/// ```
/// use typed_routes::{render_declaration, TypedRoutes};
///
/// let mut routes = TypedRoutes::new("/app");
/// routes.add_file_path("/app/about.tsx");
///
/// let declaration = render_declaration(&routes.snapshot(), None);
/// assert!(declaration.contains("type StaticRoutes = `/about`;"));
/// assert!(declaration.contains("type DynamicRouteTemplate = never;"));
/// ```
pub fn render_declaration(snapshot: &RouteSnapshot, template: Option<&str>) -> String {
    template
        .unwrap_or(DEFAULT_TEMPLATE)
        .replacen(NAMESPACE_HEADER, MODULE_HEADER, 1)
        .replacen(
            STATIC_ROUTES_SLOT,
            &format!(
                "type StaticRoutes = {};",
                set_to_union_type(&snapshot.static_routes)
            ),
            1,
        )
        .replacen(
            DYNAMIC_ROUTES_SLOT,
            &format!(
                "type DynamicRoutes<T extends string> = {};",
                set_to_union_type(&snapshot.dynamic_routes)
            ),
            1,
        )
        .replacen(
            DYNAMIC_TEMPLATE_SLOT,
            &format!(
                "type DynamicRouteTemplate = {};",
                set_to_union_type(&snapshot.dynamic_templates)
            ),
            1,
        )
}

/// Built-in declaration used when no template is configured
pub const DEFAULT_TEMPLATE: &str = r#"/* eslint-disable */
declare namespace ExpoRouter {
  import type { LinkProps as OriginalLinkProps } from 'expo-router/build/link/Link';
  import type { Router as OriginalRouter } from 'expo-router/build/types';
  export * from 'expo-router/build';

  export type StaticRoutes = string;
  export type DynamicRoutes<T extends string> = string;
  export type DynamicRouteTemplate = never;
  export type RelativePathString = `./${string}` | `../${string}` | '..';
  export type ExternalPathString = `${string}:${string}`;
  export type ExpoRouterRoutes = DynamicRouteTemplate | StaticRoutes | RelativePathString;
  export type AllRoutes = ExpoRouterRoutes | ExternalPathString;

  type SearchOrHash = `?${string}` | `#${string}`;
  type UnknownInputParams = Record<string, string | number | (string | number)[]>;
  type UnknownOutputParams = Record<string, string | string[]>;

  /** A single path segment: no `/`, search, hash, group or bracket syntax. */
  type SingleRoutePart<S extends string> = S extends `${string}/${string}`
    ? never
    : S extends `${string}${SearchOrHash}`
      ? never
      : S extends ''
        ? never
        : S extends `(${string})`
          ? never
          : S extends `[${string}]`
            ? never
            : S;

  /** One or more path segments: no search, hash, group or bracket syntax. */
  type CatchAllRoutePart<S extends string> = S extends `${string}${SearchOrHash}`
    ? never
    : S extends ''
      ? never
      : S extends `${string}(${string})${string}`
        ? never
        : S extends `${string}[${string}]${string}`
          ? never
          : S;

  /** '[test]' -> 'test', '[...test]' -> '...test', 'test' -> never */
  type IsParameter<Part> = Part extends `[${infer ParamName}]` ? ParamName : never;

  type ParameterNames<Path> = Path extends `${infer PartA}/${infer PartB}`
    ? IsParameter<PartA> | ParameterNames<PartB>
    : IsParameter<Path>;

  type RouteSegments<Path> = Path extends `${infer PartA}/${infer PartB}`
    ? PartA extends '' | '.'
      ? [...RouteSegments<PartB>]
      : [PartA, ...RouteSegments<PartB>]
    : Path extends ''
      ? []
      : [Path];

  type InputRouteParams<Path> = {
    [Key in ParameterNames<Path> as Key extends `...${infer Name}`
      ? Name
      : Key]: Key extends `...${string}` ? (string | number)[] : string | number;
  } & UnknownInputParams;

  type OutputRouteParams<Path> = {
    [Key in ParameterNames<Path> as Key extends `...${infer Name}`
      ? Name
      : Key]: Key extends `...${string}` ? string[] : string;
  } & UnknownOutputParams;

  export type SearchParams<T extends AllRoutes> = T extends DynamicRouteTemplate
    ? OutputRouteParams<T>
    : T extends StaticRoutes
      ? never
      : UnknownOutputParams;

  export type Route<T> = T extends string
    ? T extends DynamicRouteTemplate
      ? never
      :
          | StaticRoutes
          | RelativePathString
          | ExternalPathString
          | (T extends `${infer P}${SearchOrHash}`
              ? P extends DynamicRoutes<infer _>
                ? T
                : never
              : T extends DynamicRoutes<infer _>
                ? T
                : never)
    : never;

  export type Href<T = string> = T extends object ? HrefObject<T> : Route<T>;

  export type HrefObject<R extends object, P = R['pathname']> = P extends DynamicRouteTemplate
    ? { pathname: P; params: InputRouteParams<P> }
    : P extends Route<P>
      ? {
          pathname: Route<P> | DynamicRouteTemplate;
          params?: never | InputRouteParams<P>;
        }
      : { pathname: DynamicRouteTemplate };

  export type Router = {
    back: () => void;
    canGoBack: () => boolean;
    push: <T>(href: Href<T>) => void;
    replace: <T>(href: Href<T>) => void;
    setParams: <T = ''>(
      params?: T extends '' ? Record<string, string> : InputRouteParams<T>
    ) => void;
  };

  export const router: Router;
  export function useRouter(): Router;
  export function useLocalSearchParams<
    TParams extends AllRoutes | UnknownOutputParams = UnknownOutputParams,
  >(): TParams extends AllRoutes ? SearchParams<TParams> : TParams;
  export function useGlobalSearchParams<
    T extends AllRoutes | UnknownOutputParams = UnknownOutputParams,
  >(): T extends AllRoutes ? SearchParams<T> : T;
  export function useSegments<
    T extends AllRoutes | RouteSegments<AllRoutes> | RelativePathString,
  >(): T extends AllRoutes ? RouteSegments<T> : T extends string ? string[] : T;
}
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn snapshot(static_routes: &[&str], dynamic: &[&str], templates: &[&str]) -> RouteSnapshot {
        let to_set = |items: &[&str]| items.iter().map(|s| s.to_string()).collect::<BTreeSet<_>>();
        RouteSnapshot {
            static_routes: to_set(static_routes),
            dynamic_routes: to_set(dynamic),
            dynamic_templates: to_set(templates),
        }
    }

    #[test]
    fn test_union_of_three() {
        let set: BTreeSet<&str> = ["a", "b", "c"].into_iter().collect();
        assert_eq!(set_to_union_type(&set), "`a` | `b` | `c`");
    }

    #[test]
    fn test_union_keeps_order() {
        assert_eq!(set_to_union_type(vec!["z", "a"]), "`z` | `a`");
    }

    #[test]
    fn test_registry_unions_are_sorted() {
        let mut routes = crate::TypedRoutes::new("/app");
        routes.add_file_path("/app/zeta.tsx");
        routes.add_file_path("/app/alpha.tsx");
        routes.add_file_path("/app/mid/[id].tsx");
        routes.add_file_path("/app/[slug].tsx");

        let snapshot = routes.snapshot();
        assert_eq!(set_to_union_type(&snapshot.static_routes), "`/alpha` | `/zeta`");
        assert_eq!(
            set_to_union_type(&snapshot.dynamic_templates),
            "`/[slug]` | `/mid/[id]`"
        );
    }

    #[test]
    fn test_union_single_and_empty() {
        assert_eq!(set_to_union_type(["/"]), "`/`");
        assert_eq!(set_to_union_type(Vec::<&str>::new()), "never");
    }

    #[test]
    fn test_union_does_not_escape_placeholders() {
        assert_eq!(
            set_to_union_type(["/u/${SingleRoutePart<T>}"]),
            "`/u/${SingleRoutePart<T>}`"
        );
    }

    #[test]
    fn test_render_default_template() {
        let declaration = render_declaration(
            &snapshot(&["/", "/about"], &["/u/${SingleRoutePart<T>}"], &["/u/[id]"]),
            None,
        );

        assert!(declaration.contains("declare module \"expo-router\" {"));
        assert!(!declaration.contains("declare namespace ExpoRouter {"));
        assert!(declaration.contains("export type StaticRoutes = `/` | `/about`;"));
        assert!(declaration
            .contains("export type DynamicRoutes<T extends string> = `/u/${SingleRoutePart<T>}`;"));
        assert!(declaration.contains("export type DynamicRouteTemplate = `/u/[id]`;"));
    }

    #[test]
    fn test_render_empty_snapshot_uses_never() {
        let declaration = render_declaration(&RouteSnapshot::default(), None);
        assert!(declaration.contains("export type StaticRoutes = never;"));
        assert!(declaration.contains("export type DynamicRoutes<T extends string> = never;"));
        assert!(declaration.contains("export type DynamicRouteTemplate = never;"));
    }

    #[test]
    fn test_render_custom_template() {
        let template = "declare module \"expo-router\" {\n  type StaticRoutes = string;\n}\n";
        let declaration = render_declaration(&snapshot(&["/a"], &[], &[]), Some(template));
        assert_eq!(
            declaration,
            "declare module \"expo-router\" {\n  type StaticRoutes = `/a`;\n}\n"
        );
    }
}
