//! Serde support and JSON helpers for [`Set`].
//!
//! A set serializes as a sequence of its elements (a JSON array). The order
//! of the array is whatever iteration yields and carries no meaning.
//! Deserialization accepts any sequence of elements, duplicates included,
//! and keeps each distinct value once.

use std::fmt;
use std::hash::{BuildHasher, Hash};
use std::marker::PhantomData;

use serde::de::DeserializeOwned;

use super::Set;
use crate::error::{DecodeError, EncodeError};

// =============================================================================
// Serde Support
// =============================================================================

impl<T, S> serde::Serialize for Set<T, S>
where
    T: serde::Serialize,
{
    fn serialize<Z>(&self, serializer: Z) -> Result<Z::Ok, Z::Error>
    where
        Z: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for element in self {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

struct SetVisitor<T, S> {
    marker: PhantomData<fn() -> Set<T, S>>,
}

impl<T, S> SetVisitor<T, S> {
    const fn new() -> Self {
        Self {
            marker: PhantomData,
        }
    }
}

impl<'de, T, S> serde::de::Visitor<'de> for SetVisitor<T, S>
where
    T: serde::Deserialize<'de> + Eq + Hash,
    S: BuildHasher + Default,
{
    type Value = Set<T, S>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        // Sequential insert; size hints from untrusted input are not preallocated.
        let mut set = Set::with_hasher(S::default());
        while let Some(element) = seq.next_element()? {
            set.insert(element);
        }
        Ok(set)
    }
}

impl<'de, T, S> serde::Deserialize<'de> for Set<T, S>
where
    T: serde::Deserialize<'de> + Eq + Hash,
    S: BuildHasher + Default,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(SetVisitor::new())
    }
}

// =============================================================================
// JSON Helpers
// =============================================================================

impl<T, S> Set<T, S>
where
    T: serde::Serialize,
{
    /// Encodes the set as a JSON array.
    ///
    /// # Errors
    ///
    /// Returns [`EncodeError`] if an element's `Serialize` implementation
    /// fails. Sets of plain scalars and strings always encode.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setwise::collection::Set;
    ///
    /// let set = Set::from([10]);
    /// assert_eq!(set.to_json().unwrap(), "[10]");
    /// ```
    pub fn to_json(&self) -> Result<String, EncodeError> {
        serde_json::to_string(self).map_err(EncodeError::new)
    }
}

impl<T, S> Set<T, S>
where
    T: DeserializeOwned + Eq + Hash,
    S: BuildHasher + Default,
{
    /// Decodes a set from a JSON array.
    ///
    /// Duplicate entries in the array collapse to a single member.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError`] if `input` is not a well-formed JSON array or
    /// an entry cannot be parsed as `T`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setwise::collection::Set;
    ///
    /// let set: Set<i32> = Set::from_json("[10, 20, 20, 30]").unwrap();
    /// assert_eq!(set, Set::from([10, 20, 30]));
    ///
    /// assert!(Set::<i32>::from_json("10").is_err());
    /// ```
    pub fn from_json(input: &str) -> Result<Self, DecodeError> {
        let mut set = Self::with_hasher(S::default());
        set.replace_from_json(input)?;
        Ok(set)
    }
}

impl<T, S> Set<T, S>
where
    T: DeserializeOwned + Eq + Hash,
    S: BuildHasher,
{
    /// Replaces the contents of this set with the elements of a JSON array.
    ///
    /// The whole input is parsed before the set is touched: on error the set
    /// keeps its previous contents.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError`] if `input` is not a well-formed JSON array or
    /// an entry cannot be parsed as `T`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setwise::collection::Set;
    ///
    /// let mut set = Set::from([1, 2]);
    /// set.replace_from_json("[3, 3]").unwrap();
    /// assert_eq!(set, Set::from([3]));
    ///
    /// assert!(set.replace_from_json("[4, \"five\"]").is_err());
    /// assert_eq!(set, Set::from([3]));
    /// ```
    pub fn replace_from_json(&mut self, input: &str) -> Result<(), DecodeError> {
        let elements: Vec<T> = serde_json::from_str(input).map_err(|source| {
            let error = DecodeError::new(source);
            tracing::debug!(
                category = %error.category(),
                line = error.line(),
                column = error.column(),
                "rejected malformed set json"
            );
            error
        })?;

        let decoded = elements.len();
        self.clear();
        self.extend(elements);
        tracing::trace!(
            decoded,
            members = self.len(),
            duplicates = decoded - self.len(),
            "replaced set contents from json"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_serialize_empty() {
        let set: Set<i32> = Set::new();
        assert_eq!(serde_json::to_string(&set).unwrap(), "[]");
    }

    #[rstest]
    fn test_serialize_single_element() {
        let set: Set<i32> = Set::singleton(42);
        assert_eq!(set.to_json().unwrap(), "[42]");
    }

    #[rstest]
    fn test_deserialize_deduplicates() {
        let set: Set<i32> = serde_json::from_str("[1,2,2,3,3,3]").unwrap();
        assert_eq!(set, Set::from([1, 2, 3]));
    }

    #[rstest]
    #[case("{}")]
    #[case("42")]
    #[case("\"[1,2]\"")]
    #[case("[1, \"two\"]")]
    #[case("[1, 2")]
    #[case("")]
    fn test_from_json_rejects_malformed(#[case] input: &str) {
        assert!(Set::<i32>::from_json(input).is_err());
    }

    #[rstest]
    fn test_replace_from_json_keeps_contents_on_error() {
        let mut set = Set::from([7, 8]);
        assert!(set.replace_from_json("[1, null]").is_err());
        assert_eq!(set, Set::from([7, 8]));
    }

    #[rstest]
    fn test_replace_from_json_discards_previous_contents() {
        let mut set = Set::from([7, 8]);
        set.replace_from_json("[]").unwrap();
        assert!(set.is_empty());
    }
}
