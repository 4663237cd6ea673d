//! Persisted visitor records.
//!
//! Explicit schemas for the three records kept in a visitor's store. Each
//! decodes leniently where the stored shape allows it and otherwise falls
//! back to its `Default`, which is always the safe state: an empty cart, no
//! filter, logged out.

use std::fmt;
use std::marker::PhantomData;

use serde::Deserializer;
use serde::de::{Deserialize, MapAccess, Visitor, value::MapAccessDeserializer};

pub mod cart;
pub mod filter;
pub mod session;

pub use cart::{Cart, CartLine, CartTotals, ResolvedLine};
pub use filter::{FilterState, PriceBound};
pub use session::SessionState;

/// Decode `T` from a JSON object only.
///
/// Derived struct decoding also accepts a JSON array of field values; a
/// stored record in that shape is treated as unreadable instead.
pub(crate) fn from_object<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    struct ObjectVisitor<T>(PhantomData<T>);

    impl<'de, T: Deserialize<'de>> Visitor<'de> for ObjectVisitor<T> {
        type Value = T;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a JSON object")
        }

        fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<T, A::Error> {
            T::deserialize(MapAccessDeserializer::new(map))
        }
    }

    deserializer.deserialize_map(ObjectVisitor(PhantomData))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde::Deserialize;

    #[derive(Debug, Default, PartialEq, Eq, Deserialize)]
    #[serde(default)]
    struct Fields {
        a: bool,
        b: String,
    }

    fn decode(json: &str) -> Result<Fields, serde_json::Error> {
        super::from_object(&mut serde_json::Deserializer::from_str(json))
    }

    #[test]
    fn test_from_object_accepts_objects() {
        assert_eq!(
            decode(r#"{"a":true,"b":"x"}"#).unwrap(),
            Fields {
                a: true,
                b: "x".to_string()
            }
        );
        assert_eq!(decode("{}").unwrap(), Fields::default());
    }

    #[test]
    fn test_from_object_rejects_other_shapes() {
        assert!(decode(r#"[true,"x"]"#).is_err());
        assert!(decode("null").is_err());
        assert!(decode("\"a\"").is_err());
    }
}
