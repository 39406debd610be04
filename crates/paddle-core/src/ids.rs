//! Identifier types for Paddle resources.
//!
//! Paddle assigns every resource an opaque string id that is unique within its
//! resource type. Each resource type gets its own newtype so a price id cannot
//! be passed where a product id is expected.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::SchemaError;

/// Anything addressed by a server-assigned identifier.
///
/// Resource instances and update payloads implement this; the client uses it
/// to build `{path}/{id}` URLs and to derive pagination cursors.
pub trait Identified {
    /// The identifier as it appears in URLs and cursors.
    fn id(&self) -> &str;
}

/// Define a string identifier newtype with standard trait implementations.
///
/// Generates:
/// - `Clone`, `PartialEq`, `Eq`, `Hash`, `PartialOrd`, `Ord`
/// - `Serialize`, `Deserialize` (transparent string)
/// - `FromStr` (rejects empty input), `Display`, `Debug`
/// - `From<String>`, `From<&str>`, `AsRef<str>`
macro_rules! string_id_type {
    ($name:ident, $kind:literal, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wrap an identifier returned by the API.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Borrow the identifier as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl FromStr for $name {
            type Err = SchemaError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                if s.is_empty() {
                    return Err(SchemaError::EmptyId { kind: $kind });
                }
                Ok(Self(s.to_string()))
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

string_id_type!(ProductId, "product", "A product identifier (`pro_...`).");
string_id_type!(PriceId, "price", "A price identifier (`pri_...`).");
