//! # Pressroom Router
//!
//! A static route table that maps a path to exactly one view:
//! - Static routes (`/products`)
//! - Named parameters (`/single/:id`)
//! - Wildcard fallback (`*`, `/docs/*path`)
//! - Base-path prefixes (`/admin/products` → `/products`)
//!
//! ## Matching Policy
//!
//! Routes are evaluated first-match-wins in priority order. Exact literals
//! beat parameters, parameters beat wildcards, and ties keep declaration
//! order. When nothing matches and no wildcard is declared, nothing is
//! resolved.
//!
//! ## Path Normalization
//!
//! - Trailing slashes: `/path/` → `/path`
//! - Double slashes: `/path//to` → `/path/to`
//! - Backslashes: `\path\to` → `/path/to`
//! - Query strings and fragments are ignored
//!
//! ## Example
//!
//! ```
//! use pressroom_router::Router;
//!
//! let router = Router::new()
//!     .with_route("/products", "products").unwrap()
//!     .with_route("/single/:id", "single").unwrap()
//!     .with_route("*", "not-found").unwrap();
//!
//! let route_match = router.resolve("/single/42").unwrap();
//! assert_eq!(*route_match.view(), "single");
//! assert_eq!(route_match.param("id"), Some("42"));
//!
//! assert_eq!(*router.resolve("/nonexistent").unwrap().view(), "not-found");
//! ```

use tracing::debug;

// ============================================================================
// Module Declarations
// ============================================================================

mod error;
mod navigator;
mod params;
pub mod path;
pub mod route;

pub use error::{ParamError, PatternError, RouteError};
pub use navigator::{Navigator, Transition};
pub use params::Params;
pub use path::{is_valid_path, normalize_path};
pub use route::pattern::{classify_segment, PatternSegmentType, RoutePattern};

// ============================================================================
// Core Types
// ============================================================================

/// A single route: a compiled pattern bound to a view
#[derive(Debug, Clone)]
pub struct Route<V> {
    /// Compiled URL pattern like `/single/:id`
    pub pattern: RoutePattern,
    /// View rendered when this route matches
    pub view: V,
    /// Optional name for URL generation
    pub name: Option<String>,
}

impl<V> Route<V> {
    /// Compiles `pattern` and binds it to `view`
    ///
    /// # Examples
    ///
    /// ```
    /// use pressroom_router::Route;
    ///
    /// let route = Route::new("/single/:id", "single").unwrap();
    /// assert_eq!(route.pattern.as_str(), "/single/:id");
    /// assert!(Route::new("single", "single").is_err());
    /// ```
    pub fn new(pattern: &str, view: V) -> Result<Self, PatternError> {
        Ok(Self {
            pattern: RoutePattern::parse(pattern)?,
            view,
            name: None,
        })
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

/// Result of resolving a path against a router
#[derive(Debug)]
pub struct RouteMatch<'r, V> {
    /// The matched route
    pub route: &'r Route<V>,
    /// Parameters bound by the matched pattern
    pub params: Params,
}

impl<'r, V> RouteMatch<'r, V> {
    pub fn view(&self) -> &'r V {
        let route: &'r Route<V> = self.route;
        &route.view
    }

    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name)
    }

    pub fn pattern(&self) -> &'r str {
        let route: &'r Route<V> = self.route;
        route.pattern.as_str()
    }

    /// Whether two matches would render the same thing
    ///
    /// Same route entry and the same bound parameters.
    pub fn is_same_as(&self, other: &RouteMatch<'_, V>) -> bool {
        std::ptr::eq(self.route, other.route) && self.params == other.params
    }
}

impl<V> Clone for RouteMatch<'_, V> {
    fn clone(&self) -> Self {
        Self {
            route: self.route,
            params: self.params.clone(),
        }
    }
}

// ============================================================================
// Router Implementation
// ============================================================================

/// Immutable, ordered route table
///
/// Built once at startup with the functional builder methods, then only read.
#[derive(Debug, Clone)]
pub struct Router<V> {
    routes: Vec<Route<V>>,
    base_path: String,
    case_insensitive: bool,
}

impl<V> Router<V> {
    /// Creates an empty, case-sensitive router without a base path
    pub fn new() -> Self {
        Self {
            routes: Vec::new(),
            base_path: String::new(),
            case_insensitive: false,
        }
    }

    /// Configures case sensitivity (functional builder)
    ///
    /// Set this before adding routes; overlap detection uses it.
    ///
    /// # Examples
    ///
    /// ```
    /// use pressroom_router::Router;
    ///
    /// let router = Router::new()
    ///     .with_case_sensitivity(true)
    ///     .with_route("/orders", "orders").unwrap();
    ///
    /// assert!(router.resolve("/ORDERS").is_some());
    /// ```
    pub fn with_case_sensitivity(mut self, case_insensitive: bool) -> Self {
        self.case_insensitive = case_insensitive;
        self
    }

    /// Sets the base prefix stripped before matching (functional builder)
    ///
    /// An empty string or `/` means no prefix.
    ///
    /// # Examples
    ///
    /// ```
    /// use pressroom_router::Router;
    ///
    /// let router = Router::new()
    ///     .with_base_path("/admin")
    ///     .with_route("/orders", "orders").unwrap();
    ///
    /// assert!(router.resolve("/admin/orders").is_some());
    /// assert!(router.resolve("/orders").is_none());
    /// ```
    pub fn with_base_path(mut self, base_path: &str) -> Self {
        self.base_path = path::normalize_base(base_path);
        self
    }

    /// Compiles and adds a route (functional builder)
    ///
    /// Fails when the pattern is invalid or overlaps an existing pattern.
    pub fn with_route(self, pattern: &str, view: V) -> Result<Self, RouteError> {
        let route = Route::new(pattern, view)?;
        self.with_compiled_route(route)
    }

    /// Compiles and adds a named route (functional builder)
    ///
    /// # Examples
    ///
    /// ```
    /// use pressroom_router::{Params, Router};
    ///
    /// let router = Router::new()
    ///     .with_base_path("/admin")
    ///     .with_named_route("single", "/single/:id", ()).unwrap();
    ///
    /// let params: Params = [("id", "42")].into_iter().collect();
    /// assert_eq!(router.url_for("single", &params), Some("/admin/single/42".to_string()));
    /// ```
    pub fn with_named_route(
        self,
        name: impl Into<String>,
        pattern: &str,
        view: V,
    ) -> Result<Self, RouteError> {
        let route = Route::new(pattern, view)?.with_name(name);
        self.with_compiled_route(route)
    }

    /// Adds an already compiled route (functional builder)
    ///
    /// Routes are kept sorted by priority; the sort is stable so equal
    /// priorities keep declaration order.
    pub fn with_compiled_route(mut self, route: Route<V>) -> Result<Self, RouteError> {
        let shape = route.pattern.shape(self.case_insensitive);

        if let Some(existing) = self
            .routes
            .iter()
            .find(|r| r.pattern.shape(self.case_insensitive) == shape)
        {
            return Err(RouteError::DuplicatePattern {
                pattern: route.pattern.to_string(),
                existing: existing.pattern.to_string(),
            });
        }

        if let Some(name) = route.name.as_deref() {
            if self.routes.iter().any(|r| r.name.as_deref() == Some(name)) {
                return Err(RouteError::DuplicateName(name.to_string()));
            }
        }

        self.routes.push(route);
        self.routes.sort_by_key(|r| r.pattern.priority());
        Ok(self)
    }

    // ========================================================================
    // Route Matching and Lookup Methods
    // ========================================================================

    /// Resolves a path to at most one route
    ///
    /// 1. Normalizes the path (slashes, query, fragment)
    /// 2. Strips the base prefix; a path outside it resolves to nothing
    /// 3. Returns the first route in priority order whose pattern matches
    pub fn resolve(&self, requested: &str) -> Option<RouteMatch<'_, V>> {
        let normalized = normalize_path(requested);

        let Some(relative) = path::strip_base(&normalized, &self.base_path) else {
            debug!(path = requested, base = %self.base_path, "path outside base prefix");
            return None;
        };

        let found = self.routes.iter().find_map(|route| {
            route
                .pattern
                .matches(relative, self.case_insensitive)
                .map(|params| RouteMatch { route, params })
        });

        match &found {
            Some(m) => debug!(path = requested, pattern = m.pattern(), "route resolved"),
            None => debug!(path = requested, "no route matched"),
        }

        found
    }

    /// Generates the full URL (base prefix included) of a named route
    pub fn url_for(&self, name: &str, params: &Params) -> Option<String> {
        self.routes
            .iter()
            .find(|r| r.name.as_deref() == Some(name))
            .and_then(|r| r.pattern.generate_url(params))
            .map(|url| path::join_base(&self.base_path, &url))
    }

    /// Prefixes an application path with the base path
    ///
    /// # Examples
    ///
    /// ```
    /// use pressroom_router::Router;
    ///
    /// let router: Router<()> = Router::new().with_base_path("/admin/");
    /// assert_eq!(router.href("/"), "/admin");
    /// assert_eq!(router.href("/orders"), "/admin/orders");
    /// ```
    pub fn href(&self, app_path: &str) -> String {
        path::join_base(&self.base_path, &normalize_path(app_path))
    }

    /// Returns the route table in matching order
    pub fn routes(&self) -> &[Route<V>] {
        &self.routes
    }

    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    pub fn is_case_insensitive(&self) -> bool {
        self.case_insensitive
    }

    /// Whether a wildcard route guarantees every path inside the base resolves
    pub fn has_fallback(&self) -> bool {
        self.routes.iter().any(|r| r.pattern.is_wildcard() && r.pattern.segments().len() == 1)
    }
}

impl<V> Default for Router<V> {
    fn default() -> Self {
        Self::new()
    }
}
