//! Combinators for composing rules
//!
//! - [`Or`] - passes when either rule passes
//! - [`WithCode`] - replaces the identifier of a failing rule
//!
//! Composite rules such as `host` are built from these:
//!
//! ```
//! use netpanel_validator::prelude::*;
//!
//! let host = or(hostname(), ip_address()).with_code("invalid_host");
//! assert!(host.validate("10.0.0.1").is_ok());
//! ```

pub mod code;
pub mod or;

pub use code::{WithCode, with_code};
pub use or::{Or, or};
