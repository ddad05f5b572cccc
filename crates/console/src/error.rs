//! Console navigation error types.

/// Errors from building a routing table.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    /// Two routes or redirects share a path.
    #[error("path '{0}' is registered twice")]
    DuplicatePath(String),

    /// Two routes share a name.
    #[error("route name '{0}' is registered twice")]
    DuplicateName(String),

    /// A path pattern is malformed.
    #[error("invalid path pattern '{path}': {reason}")]
    InvalidPath {
        /// The offending pattern.
        path: String,
        /// What is wrong with it.
        reason: &'static str,
    },
}

/// Errors from tab selection.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TabError {
    /// A tab binding needs at least one tab.
    #[error("a tab binding needs at least one tab")]
    NoTabs,

    /// The requested tab is not part of the binding.
    #[error("unknown tab '{0}'")]
    UnknownTab(String),
}
