//! Serde support: a `Maybe<T>` has the same wire form as `Option<T>`.
//!
//! Deserializing goes through [`Maybe::from_nullable`], so an explicit `null`
//! and a missing optional field both land on `None`.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::{Maybe, Repr};

impl<T: Serialize> Serialize for Maybe<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match &self.0 {
            Repr::Some(value) => serializer.serialize_some(value),
            Repr::None => serializer.serialize_none(),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Maybe<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Self::from_nullable)
    }
}
