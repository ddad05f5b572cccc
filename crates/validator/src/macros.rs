//! Macros for declaring rules with minimal boilerplate.
//!
//! [`rule!`] covers the common shape "one predicate, one identifier". Rules
//! with several ordered failure modes (hostname, password, lease time)
//! implement [`Validate`](crate::foundation::Validate) by hand.
//!
//! # Examples
//!
//! ```rust,ignore
//! rule! {
//!     /// Validates MAC addresses.
//!     pub MacAddress for str;
//!     rule(input) { MAC_ADDRESS.is_match(input) }
//!     code "invalid_mac_address";
//!     fn mac_address();
//! }
//!
//! rule! {
//!     pub Equals { other: String } for str;
//!     rule(self, input) { input == self.other }
//!     code "invalid_equal";
//!     fn equals(other: impl Into<String>) { Equals { other: other.into() } }
//! }
//! ```

/// Declares a rule: struct definition, `Validate` implementation and factory
/// function. On failure the rule returns a parameterless
/// [`Violation`](crate::foundation::Violation) with the given code.
///
/// `#[derive(Debug, Clone)]` is always applied; unit rules additionally
/// derive `Copy, PartialEq, Eq, Hash, Default`.
#[macro_export]
macro_rules! rule {
    // ── Unit rule (no fields) + factory fn ──────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident for $input:ty;
        rule($inp:ident) $rule:block
        code $code:literal;
        fn $factory:ident();
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        $vis struct $name;

        impl $name {
            /// The identifier reported when this rule fails.
            pub const CODE: &'static str = $code;
        }

        impl $crate::foundation::Validate for $name {
            type Input = $input;

            fn validate(&self, $inp: &Self::Input) -> $crate::foundation::ValidationResult {
                if $rule {
                    Ok(())
                } else {
                    Err($crate::foundation::Violation::new(Self::CODE))
                }
            }
        }

        #[must_use]
        $vis const fn $factory() -> $name {
            $name
        }
    };

    // ── Struct rule with fields + factory fn with custom body ───────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        code $code:literal;
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?) $body:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $($field: $fty,)+
        }

        impl $name {
            /// The identifier reported when this rule fails.
            pub const CODE: &'static str = $code;
        }

        impl $crate::foundation::Validate for $name {
            type Input = $input;

            fn validate(&$self_, $inp: &Self::Input) -> $crate::foundation::ValidationResult {
                if $rule {
                    Ok(())
                } else {
                    Err($crate::foundation::Violation::new(Self::CODE))
                }
            }
        }

        #[must_use]
        $vis fn $factory($($farg: $faty),*) -> $name $body
    };
}
