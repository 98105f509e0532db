//! Serde support.
//!
//! A [`GuaranteedStr`] serializes as its content, or `null` when
//! uninitialized. There is no plain `Deserialize` impl since a value cannot
//! exist without its filter; deserialize through the filter instead:
//!
//! ```rust
//! use serde::de::DeserializeSeed;
//! use strguard::StringFilter;
//!
//! let filter = StringFilter::from_pattern("[0-9]+").unwrap();
//! let mut de = serde_json::Deserializer::from_str("\"42\"");
//! let value = (&filter).deserialize(&mut de).unwrap();
//! assert_eq!(value.as_str(), Some("42"));
//! ```
use serde::{Deserialize, Deserializer, Serialize, Serializer, de::DeserializeSeed};

use crate::{filter::StringFilter, guaranteed::GuaranteedStr};

impl Serialize for GuaranteedStr {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.as_str().serialize(serializer)
    }
}

/// `null` yields an uninitialized value, a string goes through
/// [`StringFilter::guarantee`] and a rejection becomes a deserializer error.
impl<'de> DeserializeSeed<'de> for &StringFilter {
    type Value = GuaranteedStr;

    fn deserialize<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            Some(candidate) => self.guarantee(candidate).map_err(serde::de::Error::custom),
            None => Ok(GuaranteedStr::placeholder(self.clone())),
        }
    }
}
