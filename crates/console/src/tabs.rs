//! Page tabs bound to the `tab` query parameter.
//!
//! A [`TabBinding`] keeps the selected tab and the URL in step: the URL is
//! read when the page opens or its query changes, and selecting a tab
//! pushes a new location through a [`Navigator`].

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::TabError;

/// Query parameter holding the selected tab.
pub const TAB_PARAM: &str = "tab";

/// URL query parameters, in URL order.
pub type Query = IndexMap<String, String>;

/// One tab of a page.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tab {
    /// Identifier used in the URL.
    pub name: String,
    /// Translation key of the tab label.
    pub label: String,
}

impl Tab {
    /// Creates a tab.
    pub fn new(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
        }
    }
}

/// A location to navigate to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    /// Page path.
    pub path: String,
    /// Query parameters.
    pub query: Query,
}

/// Pushes locations onto the navigation history.
pub trait Navigator {
    /// Navigates to `location`.
    fn push(&mut self, location: Location);
}

impl Navigator for Vec<Location> {
    fn push(&mut self, location: Location) {
        Vec::push(self, location);
    }
}

/// Tab selection of one page, synchronised with its URL.
///
/// # Examples
///
/// ```
/// use netpanel_console::{Location, Query, Tab, TabBinding};
///
/// let tabs = vec![Tab::new("zones", "firewall.zones"), Tab::new("policies", "firewall.policies")];
/// let mut query = Query::new();
/// query.insert("tab".into(), "policies".into());
///
/// let path = "/standalone/firewall/zones-and-policies";
/// let mut binding = TabBinding::new(path, tabs, None, &query).unwrap();
/// assert_eq!(binding.selected(), "policies");
///
/// let mut history: Vec<Location> = Vec::new();
/// binding.select("zones", &mut history).unwrap();
/// assert_eq!(history[0].query["tab"], "zones");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabBinding {
    path: String,
    tabs: Vec<Tab>,
    initial: Option<String>,
    selected: String,
}

impl TabBinding {
    /// Binds `tabs` on the page at `path`.
    ///
    /// The selection is the `tab` query parameter when present, else
    /// `initial`, else the first tab. The query value is taken as is.
    pub fn new(
        path: impl Into<String>,
        tabs: Vec<Tab>,
        initial: Option<&str>,
        query: &Query,
    ) -> Result<Self, TabError> {
        let first = tabs.first().ok_or(TabError::NoTabs)?.name.clone();
        let initial = initial.map(str::to_owned);
        let selected = Self::pick(query, initial.as_deref(), &first);
        Ok(Self {
            path: path.into(),
            tabs,
            initial,
            selected,
        })
    }

    fn pick(query: &Query, initial: Option<&str>, first: &str) -> String {
        query
            .get(TAB_PARAM)
            .map(String::as_str)
            .or(initial)
            .unwrap_or(first)
            .to_owned()
    }

    /// The page path.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The bound tabs.
    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    /// Name of the selected tab.
    pub fn selected(&self) -> &str {
        &self.selected
    }

    /// Re-reads the selection from a changed query. Returns whether the
    /// selection changed.
    pub fn on_query_change(&mut self, query: &Query) -> bool {
        let first = self.tabs.first().map_or("", |t| t.name.as_str());
        let next = Self::pick(query, self.initial.as_deref(), first);
        if next == self.selected {
            return false;
        }
        tracing::trace!(from = %self.selected, to = %next, "tab changed by query");
        self.selected = next;
        true
    }

    /// Selects a tab and pushes `{ path, query: { tab } }` to `navigator`.
    pub fn select<N: Navigator + ?Sized>(
        &mut self,
        name: &str,
        navigator: &mut N,
    ) -> Result<(), TabError> {
        if !self.tabs.iter().any(|t| t.name == name) {
            return Err(TabError::UnknownTab(name.to_owned()));
        }
        name.clone_into(&mut self.selected);
        tracing::debug!(path = %self.path, tab = name, "tab selected");
        navigator.push(self.location());
        Ok(())
    }

    /// The location describing the current selection.
    pub fn location(&self) -> Location {
        let mut query = Query::new();
        query.insert(TAB_PARAM.to_owned(), self.selected.clone());
        Location {
            path: self.path.clone(),
            query,
        }
    }
}
