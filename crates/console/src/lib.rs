//! # netpanel-console
//!
//! Navigation collaborators of the netpanel console: the page routing
//! table and the binding between a page's tabs and the `tab` query
//! parameter of its URL.
//!
//! ```
//! use netpanel_console::{ConsoleMode, console_routes};
//!
//! let table = console_routes(ConsoleMode::Standalone).unwrap();
//! let page = table.resolve("/").unwrap();
//! assert_eq!(page.route().name(), "StandaloneDashboard");
//! ```

pub mod error;
pub mod pages;
pub mod routes;
pub mod tabs;

pub use error::{RouteError, TabError};
pub use pages::{ConsoleMode, console_routes};
pub use routes::{Redirect, Route, RouteMatch, RouteTable, RouteTableBuilder, ViewLoader, ViewRef};
pub use tabs::{Location, Navigator, Query, Tab, TabBinding};
