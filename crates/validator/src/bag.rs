//! Per-field error collection for forms.
//!
//! A [`MessageBag`] maps field names to the ordered list of error
//! identifiers raised against them. It only ever grows: identifiers are
//! appended, never replaced, until the whole bag is cleared for the next
//! submission.

use std::borrow::Cow;
use std::fmt;

use indexmap::IndexMap;
use serde::{Serialize, Serializer};
use smallvec::SmallVec;

use crate::foundation::violation::qualify;
use crate::foundation::{DEFAULT_NAMESPACE, Violation};

// Most fields collect one or two identifiers.
type Messages = SmallVec<[String; 2]>;

// ============================================================================
// INTO MESSAGES
// ============================================================================

/// Values accepted by [`MessageBag::set`]: one identifier or a list of them.
pub trait IntoMessages {
    /// Converts into the identifiers to append, in order.
    fn into_messages(self) -> Vec<String>;
}

/// A single identifier.
pub trait IntoMessage {
    /// Converts into an owned identifier.
    fn into_message(self) -> String;
}

macro_rules! single_message {
    ($($ty:ty => |$v:ident| $conv:expr;)+) => {
        $(
            impl IntoMessage for $ty {
                fn into_message(self) -> String {
                    let $v = self;
                    $conv
                }
            }

            impl IntoMessages for $ty {
                fn into_messages(self) -> Vec<String> {
                    vec![self.into_message()]
                }
            }
        )+
    };
}

single_message! {
    &str => |v| v.to_owned();
    String => |v| v;
    &String => |v| v.clone();
    Cow<'static, str> => |v| v.into_owned();
    Violation => |v| v.into_code();
    &Violation => |v| v.code().to_owned();
}

impl<T: IntoMessage> IntoMessages for Vec<T> {
    fn into_messages(self) -> Vec<String> {
        self.into_iter().map(IntoMessage::into_message).collect()
    }
}

impl<T: IntoMessage, const N: usize> IntoMessages for [T; N] {
    fn into_messages(self) -> Vec<String> {
        self.into_iter().map(IntoMessage::into_message).collect()
    }
}

impl<T: IntoMessage + Clone> IntoMessages for &[T] {
    fn into_messages(self) -> Vec<String> {
        self.iter().cloned().map(IntoMessage::into_message).collect()
    }
}

// ============================================================================
// MESSAGE BAG
// ============================================================================

/// Field name to error identifiers, in insertion order.
///
/// Reads never fail: unknown fields read as empty. A field is present only
/// once it holds at least one identifier.
///
/// # Examples
///
/// ```
/// use netpanel_validator::bag::MessageBag;
///
/// let mut bag = MessageBag::new();
/// bag.set("vlan", "invalid_vlan_id").set("vlan", "invalid_port");
///
/// assert_eq!(bag.first_for("vlan"), "invalid_vlan_id");
/// assert_eq!(bag.get("vlan"), ["invalid_vlan_id", "invalid_port"]);
/// assert_eq!(bag.first_i18n_key_for("vlan"), "error.invalid_vlan_id");
/// assert_eq!(bag.first_for("name"), "");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct MessageBag {
    namespace: Cow<'static, str>,
    entries: IndexMap<String, Messages>,
}

impl MessageBag {
    /// Creates an empty bag using the `error` namespace.
    #[must_use]
    pub fn new() -> Self {
        Self::with_namespace(DEFAULT_NAMESPACE)
    }

    /// Creates an empty bag whose translation keys use `namespace`.
    pub fn with_namespace(namespace: impl Into<Cow<'static, str>>) -> Self {
        Self {
            namespace: namespace.into(),
            entries: IndexMap::new(),
        }
    }

    /// The namespace prepended by [`first_i18n_key_for`](Self::first_i18n_key_for).
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Appends one identifier or a list of identifiers to `key`.
    ///
    /// Existing entries are kept. An empty list leaves the bag untouched and
    /// does not create the key.
    pub fn set(&mut self, key: impl Into<String>, messages: impl IntoMessages) -> &mut Self {
        let messages = messages.into_messages();
        if messages.is_empty() {
            return self;
        }
        let key = key.into();
        tracing::trace!(field = %key, ?messages, "recording field errors");
        self.entries.entry(key).or_default().extend(messages);
        self
    }

    /// All identifiers recorded for `key`; empty when there are none.
    pub fn get(&self, key: &str) -> &[String] {
        self.entries
            .get(key)
            .map(SmallVec::as_slice)
            .unwrap_or_default()
    }

    /// The first identifier recorded for `key`, or `""`.
    pub fn first_for(&self, key: &str) -> &str {
        self.get(key).first().map_or("", String::as_str)
    }

    /// The first identifier for `key` as a translation key, or `""`.
    ///
    /// Identifiers that already contain a `.` are taken to be fully
    /// qualified and returned as is; bare ones get the bag's namespace.
    pub fn first_i18n_key_for(&self, key: &str) -> String {
        match self.get(key).first() {
            Some(code) => qualify(code, &self.namespace),
            None => String::new(),
        }
    }

    /// Returns true when `key` has at least one identifier.
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of fields with errors.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true when no field has errors.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Fields and their identifiers, in the order fields were first flagged.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(key, messages)| (key.as_str(), messages.as_slice()))
    }

    /// Removes every entry, for a fresh submission.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl Default for MessageBag {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for MessageBag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl Serialize for MessageBag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn set_appends_in_order() {
        let mut bag = MessageBag::new();
        bag.set("vlan", "invalid_vlan_id");
        bag.set("vlan", "invalid_port");
        assert_eq!(bag.get("vlan"), ["invalid_vlan_id", "invalid_port"]);
        assert_eq!(bag.first_for("vlan"), "invalid_vlan_id");
        assert_eq!(bag.len(), 1);
    }

    #[test]
    fn duplicates_are_kept() {
        let mut bag = MessageBag::new();
        bag.set("name", "required").set("name", "required");
        assert_eq!(bag.get("name").len(), 2);
    }

    #[test]
    fn lists_are_appended_whole() {
        let mut bag = MessageBag::new();
        bag.set("pw", vec!["password_too_short"]);
        bag.set("pw", ["a", "b"]);
        bag.set("pw", &["c".to_owned()][..]);
        assert_eq!(bag.get("pw"), ["password_too_short", "a", "b", "c"]);
    }

    #[test]
    fn empty_list_creates_no_key() {
        let mut bag = MessageBag::new();
        bag.set("ghost", Vec::<String>::new());
        bag.set("ghost", [] as [&str; 0]);
        assert!(!bag.contains("ghost"));
        assert!(bag.is_empty());
    }

    #[test]
    fn unknown_keys_read_empty() {
        let bag = MessageBag::new();
        assert_eq!(bag.first_for("unset"), "");
        assert_eq!(bag.first_i18n_key_for("unset"), "");
        assert!(bag.get("unset").is_empty());
    }

    #[test]
    fn i18n_key_prefixing() {
        let mut bag = MessageBag::new();
        bag.set("vlan", "invalid_vlan_id");
        bag.set("zone", "standalone.zones.name_taken");
        assert_eq!(bag.first_i18n_key_for("vlan"), "error.invalid_vlan_id");
        assert_eq!(
            bag.first_i18n_key_for("zone"),
            "standalone.zones.name_taken"
        );

        let mut custom = MessageBag::with_namespace("form");
        custom.set("vlan", "invalid_vlan_id");
        assert_eq!(custom.first_i18n_key_for("vlan"), "form.invalid_vlan_id");
    }

    #[test]
    fn accepts_violations() {
        let mut bag = MessageBag::new();
        let v = Violation::new("maximum_num_characters_allowed").with_param("num", 5_i64);
        bag.set("name", &v).set("name", v);
        assert_eq!(
            bag.get("name"),
            ["maximum_num_characters_allowed", "maximum_num_characters_allowed"]
        );
    }

    #[test]
    fn iteration_follows_first_insertion() {
        let mut bag = MessageBag::new();
        bag.set("b", "x").set("a", "y").set("b", "z");
        let keys: Vec<_> = bag.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, ["b", "a"]);
    }

    #[test]
    fn clear_empties_the_bag() {
        let mut bag = MessageBag::new();
        bag.set("a", "required");
        bag.clear();
        assert!(bag.is_empty());
        assert_eq!(bag.namespace(), "error");
    }

    #[test]
    fn serializes_as_object() {
        let mut bag = MessageBag::new();
        bag.set("vlan", "invalid_vlan_id").set("host", ["required", "invalid_host"]);
        let json = serde_json::to_value(&bag).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "vlan": ["invalid_vlan_id"],
                "host": ["required", "invalid_host"],
            })
        );
    }
}
