//! Declarative page routing.
//!
//! A [`RouteTable`] is an ordered list of [`Route`]s and [`Redirect`]s built
//! once at start-up. Paths are `/`-separated patterns whose segments are
//! either literal or a `:name` parameter. Leading and trailing slashes are
//! ignored, so `"/system/ssh"`, `"system/ssh"` and `"system/ssh/"` are the
//! same path.
//!
//! Views are not loaded when the table is built: a route only holds a
//! [`ViewRef`], turned into a view on demand by a [`ViewLoader`].

use std::borrow::Cow;
use std::fmt;

use serde::{Serialize, Serializer};
use smallvec::SmallVec;

use crate::error::RouteError;

/// Redirect chains longer than this are treated as unresolvable.
pub const MAX_REDIRECTS: usize = 8;

/// Path parameters captured while matching, in pattern order.
pub type Params = SmallVec<[(String, String); 1]>;

// ============================================================================
// VIEWS
// ============================================================================

/// Lazily resolved reference to a page view, by module path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ViewRef(Cow<'static, str>);

impl ViewRef {
    /// Creates a reference to a view module.
    pub fn new(module: impl Into<Cow<'static, str>>) -> Self {
        Self(module.into())
    }

    /// Module path of the view.
    pub fn module(&self) -> &str {
        &self.0
    }

    /// Loads the view through `loader`.
    pub fn load<L: ViewLoader + ?Sized>(&self, loader: &L) -> Result<L::View, L::Error> {
        tracing::trace!(view = %self, "loading view");
        loader.load(self)
    }
}

impl fmt::Display for ViewRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Turns a [`ViewRef`] into a concrete view.
pub trait ViewLoader {
    /// The loaded view.
    type View;
    /// Why a view could not be loaded.
    type Error;

    /// Loads the view `view` refers to.
    fn load(&self, view: &ViewRef) -> Result<Self::View, Self::Error>;
}

// ============================================================================
// PATH PATTERNS
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Param(String),
}

/// A parsed path pattern such as `controller/manage/:unit_name`.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Pattern {
    segments: SmallVec<[Segment; 4]>,
}

fn split(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}

impl Pattern {
    fn parse(path: &str) -> Result<Self, RouteError> {
        let invalid = |reason| RouteError::InvalidPath {
            path: path.to_owned(),
            reason,
        };
        let segments = split(path)
            .map(|seg| match seg.strip_prefix(':') {
                Some("") => Err(invalid("empty parameter name")),
                Some(name) => Ok(Segment::Param(name.to_owned())),
                None => Ok(Segment::Literal(seg.to_owned())),
            })
            .collect::<Result<SmallVec<_>, _>>()?;
        Ok(Self { segments })
    }

    fn matches(&self, segments: &[&str]) -> Option<Params> {
        if segments.len() != self.segments.len() {
            return None;
        }
        let mut params = Params::new();
        for (pattern, actual) in self.segments.iter().zip(segments) {
            match pattern {
                Segment::Literal(lit) if lit == actual => {}
                Segment::Literal(_) => return None,
                Segment::Param(name) => params.push((name.clone(), (*actual).to_owned())),
            }
        }
        Some(params)
    }

    /// Substitutes `params` into the pattern. Unknown parameters are kept
    /// as `:name`.
    fn render(&self, params: &Params) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            out.push('/');
            match segment {
                Segment::Literal(lit) => out.push_str(lit),
                Segment::Param(name) => {
                    if let Some((_, value)) = params.iter().find(|(key, _)| key == name) {
                        out.push_str(value);
                    } else {
                        out.push(':');
                        out.push_str(name);
                    }
                }
            }
        }
        if out.is_empty() {
            out.push('/');
        }
        out
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&Params::new()))
    }
}

// ============================================================================
// ROUTES
// ============================================================================

/// A page: path pattern, unique name and view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pattern: Pattern,
    name: String,
    view: ViewRef,
}

impl Route {
    /// Creates a route, checking the path pattern.
    pub fn new(
        path: &str,
        name: impl Into<String>,
        view: impl Into<ViewRef>,
    ) -> Result<Self, RouteError> {
        Ok(Self {
            pattern: Pattern::parse(path)?,
            name: name.into(),
            view: view.into(),
        })
    }

    /// The path pattern, with a leading `/`.
    pub fn path(&self) -> String {
        self.pattern.to_string()
    }

    /// The unique route name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The page view.
    pub const fn view(&self) -> &ViewRef {
        &self.view
    }
}

impl From<&'static str> for ViewRef {
    fn from(module: &'static str) -> Self {
        Self::new(module)
    }
}

impl From<String> for ViewRef {
    fn from(module: String) -> Self {
        Self::new(module)
    }
}

impl Serialize for Route {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("Route", 3)?;
        state.serialize_field("path", &self.path())?;
        state.serialize_field("name", &self.name)?;
        state.serialize_field("view", &self.view)?;
        state.end()
    }
}

/// Sends one path to another. The target may use the parameters captured
/// by `from`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redirect {
    from: Pattern,
    to: Pattern,
}

impl Redirect {
    /// Creates a redirect, checking both patterns.
    pub fn new(from: &str, to: &str) -> Result<Self, RouteError> {
        Ok(Self {
            from: Pattern::parse(from)?,
            to: Pattern::parse(to)?,
        })
    }

    /// The source pattern.
    pub fn from_path(&self) -> String {
        self.from.to_string()
    }

    /// The target pattern.
    pub fn to_path(&self) -> String {
        self.to.to_string()
    }
}

/// A resolved path: the route it landed on and the captured parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch<'a> {
    route: &'a Route,
    path: String,
    params: Params,
}

impl<'a> RouteMatch<'a> {
    /// The matched route.
    pub const fn route(&self) -> &'a Route {
        self.route
    }

    /// The final path, after redirects.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// A captured path parameter.
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// All captured parameters, in pattern order.
    pub fn params(&self) -> &[(String, String)] {
        &self.params
    }
}

// ============================================================================
// TABLE
// ============================================================================

/// An ordered, validated set of routes and redirects.
///
/// # Examples
///
/// ```
/// use netpanel_console::RouteTable;
///
/// let table = RouteTable::builder()
///     .redirect("/", "/dashboard")
///     .route("/dashboard", "Dashboard", "views/DashboardView")
///     .route("/units/:unit/logs", "UnitLogs", "views/LogsView")
///     .build()
///     .unwrap();
///
/// assert_eq!(table.resolve("").unwrap().route().name(), "Dashboard");
/// let logs = table.resolve("units/fw-1/logs").unwrap();
/// assert_eq!(logs.param("unit"), Some("fw-1"));
/// assert!(table.resolve("/missing").is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    routes: Vec<Route>,
    redirects: Vec<Redirect>,
}

impl RouteTable {
    /// Starts building a table.
    pub fn builder() -> RouteTableBuilder {
        RouteTableBuilder::default()
    }

    /// Builds a table, rejecting duplicate paths and names.
    pub fn new(routes: Vec<Route>, redirects: Vec<Redirect>) -> Result<Self, RouteError> {
        let mut paths: Vec<&Pattern> = Vec::with_capacity(routes.len() + redirects.len());
        for pattern in routes.iter().map(|r| &r.pattern).chain(redirects.iter().map(|r| &r.from)) {
            if paths.contains(&pattern) {
                return Err(RouteError::DuplicatePath(pattern.to_string()));
            }
            paths.push(pattern);
        }
        for (i, route) in routes.iter().enumerate() {
            if routes[..i].iter().any(|other| other.name == route.name) {
                return Err(RouteError::DuplicateName(route.name.clone()));
            }
        }
        tracing::debug!(
            routes = routes.len(),
            redirects = redirects.len(),
            "route table built"
        );
        Ok(Self { routes, redirects })
    }

    /// Resolves a concrete path, following redirects.
    pub fn resolve(&self, path: &str) -> Option<RouteMatch<'_>> {
        let mut current: String = path.to_owned();
        for _ in 0..=MAX_REDIRECTS {
            let segments: Vec<&str> = split(&current).collect();
            if let Some(redirect) = self.redirects.iter().find_map(|r| {
                r.from.matches(&segments).map(|params| r.to.render(&params))
            }) {
                tracing::trace!(from = %current, to = %redirect, "following redirect");
                current = redirect;
                continue;
            }
            return self.routes.iter().find_map(|route| {
                route.pattern.matches(&segments).map(|params| RouteMatch {
                    route,
                    path: format!("/{}", segments.join("/")),
                    params,
                })
            });
        }
        tracing::debug!(path, "redirect limit exceeded");
        None
    }

    /// Looks a route up by name.
    pub fn by_name(&self, name: &str) -> Option<&Route> {
        self.routes.iter().find(|route| route.name == name)
    }

    /// Routes in declaration order.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Redirects in declaration order.
    pub fn redirects(&self) -> &[Redirect] {
        &self.redirects
    }

    /// Number of routes.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Returns true when the table has no routes.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

/// Collects routes and redirects; the first invalid entry is reported by
/// [`build`](Self::build).
#[derive(Debug, Default)]
pub struct RouteTableBuilder {
    routes: Vec<Route>,
    redirects: Vec<Redirect>,
    error: Option<RouteError>,
}

impl RouteTableBuilder {
    /// Adds a route.
    #[must_use = "builder methods must be chained or built"]
    pub fn route(mut self, path: &str, name: impl Into<String>, view: impl Into<ViewRef>) -> Self {
        match Route::new(path, name, view) {
            Ok(route) => self.routes.push(route),
            Err(e) => {
                self.error.get_or_insert(e);
            }
        }
        self
    }

    /// Adds a redirect.
    #[must_use = "builder methods must be chained or built"]
    pub fn redirect(mut self, from: &str, to: &str) -> Self {
        match Redirect::new(from, to) {
            Ok(redirect) => self.redirects.push(redirect),
            Err(e) => {
                self.error.get_or_insert(e);
            }
        }
        self
    }

    /// Validates and builds the table.
    pub fn build(self) -> Result<RouteTable, RouteError> {
        if let Some(e) = self.error {
            return Err(e);
        }
        RouteTable::new(self.routes, self.redirects)
    }
}

// ============================================================================
// TESTS
// ============================================================================
