//! Presence marker for partial-update payloads.
//!
//! A JSON field can be missing, explicitly `null`, or carry a value. `Option<T>`
//! alone collapses the first two, so partial updates use [`Patch`] instead:
//!
//! ```
//! use service::Patch;
//!
//! #[derive(serde::Deserialize)]
//! struct Body {
//!     #[serde(default)]
//!     name: Patch<String>,
//! }
//!
//! let b: Body = serde_json::from_str("{}").unwrap();
//! assert_eq!(b.name, Patch::Absent);
//! let b: Body = serde_json::from_str(r#"{"name":null}"#).unwrap();
//! assert_eq!(b.name, Patch::Null);
//! ```

use serde::{Deserialize, Deserializer};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Patch<T> {
    /// Field not present in the payload.
    Absent,
    /// Field present with an explicit `null`.
    Null,
    Value(T),
}

impl<T> Patch<T> {
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Patch<U> {
        match self {
            Patch::Absent => Patch::Absent,
            Patch::Null => Patch::Null,
            Patch::Value(v) => Patch::Value(f(v)),
        }
    }

    /// Overwrite a non-nullable field. Only a supplied value changes it; `null` is ignored.
    pub fn merge_into(self, target: &mut T) {
        if let Patch::Value(v) = self {
            *target = v;
        }
    }

    /// Overwrite a nullable field. `null` clears it, a missing field leaves it untouched.
    pub fn merge_into_option(self, target: &mut Option<T>) {
        match self {
            Patch::Absent => {}
            Patch::Null => *target = None,
            Patch::Value(v) => *target = Some(v),
        }
    }
}

impl<T> Default for Patch<T> {
    fn default() -> Self { Patch::Absent }
}

impl<T> From<Option<T>> for Patch<T> {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(v) => Patch::Value(v),
            None => Patch::Null,
        }
    }
}

// Only reached when the key is present; missing keys fall back to `Default` (Absent).
impl<'de, T: Deserialize<'de>> Deserialize<'de> for Patch<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::Patch;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Body {
        #[serde(default)]
        count: Patch<u32>,
    }

    #[test]
    fn distinguishes_missing_null_and_value() {
        let missing: Body = serde_json::from_str("{}").unwrap();
        let null: Body = serde_json::from_str(r#"{"count":null}"#).unwrap();
        let value: Body = serde_json::from_str(r#"{"count":7}"#).unwrap();
        assert_eq!(missing.count, Patch::Absent);
        assert_eq!(null.count, Patch::Null);
        assert_eq!(value.count, Patch::Value(7));
    }

    #[test]
    fn wrong_type_is_rejected() {
        assert!(serde_json::from_str::<Body>(r#"{"count":"seven"}"#).is_err());
    }

    #[test]
    fn merge_into_ignores_null() {
        let mut n = 3;
        Patch::Null.merge_into(&mut n);
        assert_eq!(n, 3);
        Patch::Absent.merge_into(&mut n);
        assert_eq!(n, 3);
        Patch::Value(9).merge_into(&mut n);
        assert_eq!(n, 9);
    }

    #[test]
    fn merge_into_option_clears_on_null() {
        let mut n = Some(3);
        Patch::Absent.merge_into_option(&mut n);
        assert_eq!(n, Some(3));
        Patch::Null.merge_into_option(&mut n);
        assert_eq!(n, None);
        Patch::Value(4).merge_into_option(&mut n);
        assert_eq!(n, Some(4));
    }
}
