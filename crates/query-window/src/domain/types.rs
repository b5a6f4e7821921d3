use std::fmt;
use std::time::Duration;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Object store backing the chunks of a schema period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObjectKind {
    Filesystem,
    #[serde(rename = "inmemory")]
    InMemory,
    S3,
    Gcs,
    Azure,
    Swift,
    Bos,
}

impl ObjectKind {
    /// Only a local filesystem store paired with a resynced local index replica
    /// can bound how far back the replica is trusted on its own.
    pub fn supports_lookback_restriction(self) -> bool {
        matches!(self, Self::Filesystem)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Filesystem => "filesystem",
            Self::InMemory => "inmemory",
            Self::S3 => "s3",
            Self::Gcs => "gcs",
            Self::Azure => "azure",
            Self::Swift => "swift",
            Self::Bos => "bos",
        }
    }
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Operator override for how far back the local index replica may be queried
/// without also consulting ingesters.
///
/// The raw signed form is `0` for [`LookbackRequest::UseDefault`], any negative
/// value for [`LookbackRequest::Unlimited`] and a positive duration for
/// [`LookbackRequest::Explicit`]. Every negative value collapses to
/// `Unlimited` and reads back as `-1`. Note that zero here means "compute the
/// default", unlike [`IngesterWindowRequest::Disabled`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LookbackRequest {
    #[default]
    UseDefault,
    Unlimited,
    Explicit(Duration),
}

impl LookbackRequest {
    pub fn from_signed_secs(secs: i64) -> Self {
        match secs {
            0 => Self::UseDefault,
            s if s < 0 => Self::Unlimited,
            s => Self::Explicit(Duration::from_secs(s.unsigned_abs())),
        }
    }

    /// `Explicit(0)` collapses to `UseDefault`, matching the raw form.
    pub fn normalized(self) -> Self {
        match self {
            Self::Explicit(d) if d.is_zero() => Self::UseDefault,
            other => other,
        }
    }

    /// Whether the operator set a value, which includes `Unlimited`.
    pub fn is_explicit(self) -> bool {
        !matches!(self.normalized(), Self::UseDefault)
    }

    pub fn as_signed_secs(self) -> i64 {
        match self.normalized() {
            Self::UseDefault => 0,
            Self::Unlimited => -1,
            Self::Explicit(d) => saturating_signed_secs(d),
        }
    }
}

/// Operator override for the minimum window in which ingesters are queried.
///
/// Zero means the restriction is off, which is the opposite of
/// [`LookbackRequest::UseDefault`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IngesterWindowRequest {
    #[default]
    Disabled,
    Window(Duration),
}

impl IngesterWindowRequest {
    pub fn from_secs(secs: u64) -> Self {
        Self::from_duration(Duration::from_secs(secs))
    }

    pub fn from_duration(window: Duration) -> Self {
        if window.is_zero() {
            Self::Disabled
        } else {
            Self::Window(window)
        }
    }

    pub fn as_duration(self) -> Duration {
        match self {
            Self::Disabled => Duration::ZERO,
            Self::Window(d) => d,
        }
    }
}

/// Resolved lookback for the historical tier's local index replica.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookbackBound {
    /// The store does not support the restriction and none was requested.
    Inapplicable,
    /// Never trust the replica alone; always also ask ingesters.
    Unlimited,
    Limited(Duration),
}

impl LookbackBound {
    pub fn limit(self) -> Option<Duration> {
        match self {
            Self::Limited(d) => Some(d),
            Self::Inapplicable | Self::Unlimited => None,
        }
    }

    pub fn is_unlimited(self) -> bool {
        matches!(self, Self::Unlimited)
    }

    /// Raw sentinel form: `-1` unlimited, `0` inapplicable, seconds otherwise.
    pub fn as_signed_secs(self) -> i64 {
        match self {
            Self::Inapplicable => 0,
            Self::Unlimited => -1,
            Self::Limited(d) => saturating_signed_secs(d),
        }
    }
}

/// Resolved minimum window for querying ingesters. `Disabled` is the raw zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IngesterWindowBound {
    Disabled,
    Window(Duration),
}

impl IngesterWindowBound {
    pub fn min_age(self) -> Option<Duration> {
        match self {
            Self::Disabled => None,
            Self::Window(d) => Some(d),
        }
    }

    pub fn is_disabled(self) -> bool {
        matches!(self, Self::Disabled)
    }

    pub fn as_duration(self) -> Duration {
        self.min_age().unwrap_or(Duration::ZERO)
    }

    pub fn as_secs(self) -> u64 {
        nonzero_secs(self.as_duration())
    }
}

/// Whole seconds, but never `0` for a non-zero duration: zero is a sentinel
/// in the raw form, so a sub-second value rounds to `1`.
fn nonzero_secs(d: Duration) -> u64 {
    if d.is_zero() { 0 } else { d.as_secs().max(1) }
}

fn saturating_signed_secs(d: Duration) -> i64 {
    i64::try_from(nonzero_secs(d)).unwrap_or(i64::MAX)
}

impl Serialize for LookbackRequest {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self.normalized() {
            Self::UseDefault => serializer.serialize_str("default"),
            Self::Unlimited => serializer.serialize_str("unlimited"),
            Self::Explicit(d) => serializer.serialize_u64(nonzero_secs(d)),
        }
    }
}

impl<'de> Deserialize<'de> for LookbackRequest {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct LookbackRequestVisitor;
        impl<'de> Visitor<'de> for LookbackRequestVisitor {
            type Value = LookbackRequest;
            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "\"default\", \"unlimited\" or integer seconds")
            }
            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                match v {
                    "default" => Ok(LookbackRequest::UseDefault),
                    "unlimited" => Ok(LookbackRequest::Unlimited),
                    _ => Err(E::custom(
                        "max_look_back string form must be \"default\" or \"unlimited\"",
                    )),
                }
            }
            fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(LookbackRequest::from_signed_secs(v))
            }
            fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                if v == 0 {
                    Ok(LookbackRequest::UseDefault)
                } else {
                    Ok(LookbackRequest::Explicit(Duration::from_secs(v)))
                }
            }
        }
        deserializer.deserialize_any(LookbackRequestVisitor)
    }
}

impl Serialize for IngesterWindowRequest {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Disabled => serializer.serialize_str("disabled"),
            Self::Window(d) => serializer.serialize_u64(nonzero_secs(*d)),
        }
    }
}

impl<'de> Deserialize<'de> for IngesterWindowRequest {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct IngesterWindowVisitor;
        impl<'de> Visitor<'de> for IngesterWindowVisitor {
            type Value = IngesterWindowRequest;
            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "\"disabled\" or non-negative integer seconds")
            }
            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                if v == "disabled" {
                    Ok(IngesterWindowRequest::Disabled)
                } else {
                    Err(E::custom(
                        "query_ingesters_within string form must be \"disabled\"",
                    ))
                }
            }
            fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                if v < 0 {
                    Err(E::custom("query_ingesters_within must be >= 0"))
                } else {
                    Ok(IngesterWindowRequest::from_secs(v.unsigned_abs()))
                }
            }
            fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(IngesterWindowRequest::from_secs(v))
            }
        }
        deserializer.deserialize_any(IngesterWindowVisitor)
    }
}

impl Serialize for LookbackBound {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_i64(self.as_signed_secs())
    }
}

impl Serialize for IngesterWindowBound {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u64(self.as_secs())
    }
}
