//! Alpha/beta bound values with explicit infinities.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// A search bound: a finite score or one of the two infinities.
///
/// Variant order gives the numeric order, so the derived `Ord` is
/// `NegInfinity < Finite(_) < Infinity`. Serializes as a plain integer or
/// the strings `"-inf"` / `"inf"`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Bound {
    NegInfinity,
    Finite(i64),
    Infinity,
}

impl Bound {
    /// Finite value, if any.
    #[inline]
    #[must_use]
    pub const fn finite(self) -> Option<i64> {
        match self {
            Bound::Finite(v) => Some(v),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_finite(self) -> bool {
        matches!(self, Bound::Finite(_))
    }
}

impl From<i64> for Bound {
    fn from(value: i64) -> Self {
        Bound::Finite(value)
    }
}

impl std::fmt::Display for Bound {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Bound::NegInfinity => write!(f, "-∞"),
            Bound::Finite(v) => write!(f, "{}", v),
            Bound::Infinity => write!(f, "+∞"),
        }
    }
}

impl Serialize for Bound {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Bound::NegInfinity => serializer.serialize_str("-inf"),
            Bound::Finite(v) => serializer.serialize_i64(*v),
            Bound::Infinity => serializer.serialize_str("inf"),
        }
    }
}

impl<'de> Deserialize<'de> for Bound {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Int(i64),
            Text(String),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Int(v) => Ok(Bound::Finite(v)),
            Repr::Text(s) => match s.as_str() {
                "-inf" => Ok(Bound::NegInfinity),
                "inf" | "+inf" => Ok(Bound::Infinity),
                other => Err(de::Error::custom(format!("invalid bound: {other}"))),
            },
        }
    }
}
