//! # netpanel-validator
//!
//! Field validation rules and per-field error aggregation for the netpanel
//! appliance console.
//!
//! ## Quick Start
//!
//! ```
//! use netpanel_validator::prelude::*;
//!
//! let mut form = FormCheck::new();
//! form.check("hostname", "gw-01.lan", &host());
//! form.check("vlan", "0", &vlan_id());
//! form.check("lease", "90s", &lease_time());
//!
//! assert_eq!(form.finish(), Err(ValidationError));
//! let bag = form.into_bag();
//! assert_eq!(bag.first_i18n_key_for("vlan"), "error.invalid_vlan_id");
//! assert_eq!(bag.first_for("lease"), "invalid_lease_time_duration");
//! ```
//!
//! ## Layout
//!
//! - [`foundation`]: the [`Validate`](foundation::Validate) trait, the
//!   [`Violation`](foundation::Violation) verdict and the
//!   [`ValidationError`](foundation::ValidationError) signal
//! - [`validators`]: the built-in rules
//! - [`combinators`]: `or` and `with_code`, used to build composite rules
//! - [`bag`]: the [`MessageBag`](bag::MessageBag) error collection
//! - [`form`]: [`FormCheck`](form::FormCheck), submit-time orchestration
//! - [`settings`]: configurable bounds and rule lookup by name
//! - [`checks`]: one-shot `validate_*` functions
//!
//! ## Creating Rules
//!
//! Use the [`rule!`] macro for single-condition rules, or implement
//! [`Validate`](foundation::Validate) by hand when a rule has several
//! failure modes.

// Composite rule types (WithCode<Or<Hostname, WithCode<Or<Ipv4, Ipv6>>>>)
// are spelled out through type aliases.
#![allow(clippy::type_complexity)]

pub mod bag;
pub mod checks;
pub mod combinators;
pub mod form;
pub mod foundation;
mod macros;
pub mod patterns;
pub mod prelude;
pub mod settings;
pub mod validators;
