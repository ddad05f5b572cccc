//! The failure half of a rule verdict.
//!
//! A [`Violation`] is a symbolic error identifier plus optional named
//! parameters for the localized message template. It never carries a
//! human-readable sentence: rendering code looks the identifier up in its
//! translation catalog and interpolates the parameters.
//!
//! All string fields use `Cow<'static, str>` so that the built-in rule
//! codes never allocate.

use std::borrow::Cow;
use std::fmt;

use serde::{Serialize, Serializer};
use smallvec::SmallVec;

/// Namespace prepended to bare identifiers to form translation keys.
pub const DEFAULT_NAMESPACE: &str = "error";

// ============================================================================
// PARAM VALUE
// ============================================================================

/// A value interpolated into a localized message template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
    /// An integer, e.g. the `num` of `maximum_num_characters_allowed`.
    Int(i64),
    /// Free text.
    Text(Cow<'static, str>),
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl Serialize for ParamValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Int(n) => serializer.serialize_i64(*n),
            Self::Text(s) => serializer.serialize_str(s),
        }
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<usize> for ParamValue {
    fn from(value: usize) -> Self {
        Self::Int(i64::try_from(value).unwrap_or(i64::MAX))
    }
}

impl From<u16> for ParamValue {
    fn from(value: u16) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<&'static str> for ParamValue {
    fn from(value: &'static str) -> Self {
        Self::Text(Cow::Borrowed(value))
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        Self::Text(Cow::Owned(value))
    }
}

// ============================================================================
// VIOLATION
// ============================================================================

/// A failed rule: the error identifier and its template parameters.
///
/// # Examples
///
/// ```
/// use netpanel_validator::foundation::{ParamValue, Violation};
///
/// let v = Violation::new("maximum_num_characters_allowed").with_param("num", 5_i64);
/// assert_eq!(v.code(), "maximum_num_characters_allowed");
/// assert_eq!(v.param("num"), Some(&ParamValue::Int(5)));
/// assert_eq!(v.i18n_key(), "error.maximum_num_characters_allowed");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    code: Cow<'static, str>,
    // Typically zero or one param.
    params: SmallVec<[(Cow<'static, str>, ParamValue); 1]>,
}

impl Violation {
    /// Creates a violation with no parameters.
    pub fn new(code: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code: code.into(),
            params: SmallVec::new(),
        }
    }

    /// Adds a template parameter.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<ParamValue>,
    ) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// The symbolic error identifier, e.g. `invalid_hostname`.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Template parameters in insertion order.
    pub fn params(&self) -> impl ExactSizeIterator<Item = (&str, &ParamValue)> {
        self.params.iter().map(|(k, v)| (k.as_ref(), v))
    }

    /// Looks up a parameter value by key.
    pub fn param(&self, key: &str) -> Option<&ParamValue> {
        self.params
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v)
    }

    /// Returns true when the violation carries template parameters.
    pub fn has_params(&self) -> bool {
        !self.params.is_empty()
    }

    /// The translation key: the code itself when already namespaced,
    /// otherwise `error.<code>`.
    pub fn i18n_key(&self) -> String {
        qualify(&self.code, DEFAULT_NAMESPACE)
    }

    /// Consumes the violation, returning the owned code.
    pub fn into_code(self) -> String {
        self.code.into_owned()
    }
}

/// Prefixes `code` with `namespace` unless it already contains a `.`.
pub(crate) fn qualify(code: &str, namespace: &str) -> String {
    if code.contains('.') {
        code.to_owned()
    } else {
        format!("{namespace}.{code}")
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code)?;
        if !self.params.is_empty() {
            f.write_str(" (")?;
            for (i, (k, v)) in self.params.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{k}={v}")?;
            }
            f.write_str(")")?;
        }
        Ok(())
    }
}

impl std::error::Error for Violation {}

impl Serialize for Violation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::{SerializeMap, SerializeStruct};

        struct Params<'a>(&'a [(Cow<'static, str>, ParamValue)]);

        impl Serialize for Params<'_> {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                let mut map = serializer.serialize_map(Some(self.0.len()))?;
                for (k, v) in self.0 {
                    map.serialize_entry(k.as_ref(), v)?;
                }
                map.end()
            }
        }

        let mut state = serializer.serialize_struct("Violation", 2)?;
        state.serialize_field("code", self.code.as_ref())?;
        state.serialize_field("params", &Params(&self.params))?;
        state.end()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_code_has_no_params() {
        let v = Violation::new("invalid_vlan_id");
        assert_eq!(v.code(), "invalid_vlan_id");
        assert!(!v.has_params());
        assert_eq!(v.params().len(), 0);
    }

    #[test]
    fn static_code_is_borrowed() {
        let v = Violation::new("required");
        assert!(matches!(v.code, Cow::Borrowed(_)));
    }

    #[test]
    fn i18n_key_keeps_existing_namespace() {
        assert_eq!(Violation::new("required").i18n_key(), "error.required");
        assert_eq!(
            Violation::new("standalone.zones.name_taken").i18n_key(),
            "standalone.zones.name_taken"
        );
    }

    #[test]
    fn display_lists_params() {
        let v = Violation::new("maximum_num_characters_allowed").with_param("num", 64_usize);
        assert_eq!(v.to_string(), "maximum_num_characters_allowed (num=64)");
    }

    #[test]
    fn serializes_code_and_params() {
        let v = Violation::new("maximum_num_characters_allowed").with_param("num", 5_i64);
        let json = serde_json::to_value(&v).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "code": "maximum_num_characters_allowed",
                "params": { "num": 5 }
            })
        );
    }
}
