//! Prelude module for convenient imports.
//!
//! Provides a single `use netpanel_validator::prelude::*;` import that
//! brings in the traits, verdict types, rules, combinators and the bag.
//!
//! # Examples
//!
//! ```
//! use netpanel_validator::prelude::*;
//!
//! let mut bag = MessageBag::new();
//! if let Err(v) = ipv4_subnet_mask().validate("255.0.255.0") {
//!     bag.set("netmask", v);
//! }
//! assert_eq!(bag.first_for("netmask"), "invalid_ip_v4_subnet_mask");
//! ```

// ============================================================================
// FOUNDATION: Core traits, verdicts, signal
// ============================================================================

pub use crate::foundation::{
    ParamValue, Validate, ValidateExt, ValidationError, ValidationResult, Violation,
};

// ============================================================================
// VALIDATORS: All built-in rules
// ============================================================================

#[allow(clippy::wildcard_imports)]
pub use crate::validators::*;

// ============================================================================
// COMBINATORS
// ============================================================================

pub use crate::combinators::{Or, WithCode, or, with_code};

// ============================================================================
// AGGREGATION
// ============================================================================

pub use crate::bag::MessageBag;
pub use crate::form::FormCheck;
pub use crate::settings::{RuleSettings, Rules};
