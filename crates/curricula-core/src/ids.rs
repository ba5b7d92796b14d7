//! Identifier types used across the resolution engine.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, Hash, Eq, PartialEq, PartialOrd, Ord, Serialize, Deserialize)]
        pub struct $name(pub String);

        impl $name {
            /// Create a new identifier.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the ID as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// True when the identifier is blank.
            pub fn is_blank(&self) -> bool {
                self.0.trim().is_empty()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

string_id!(
    /// Identifier of a standard (e.g. `CCSS.MATH.4.OA.1`).
    ///
    /// Unique within one resolution result. Note that a state override
    /// substitutes a new identifier, so callers must not assume it is stable
    /// across state-override application.
    StandardId
);

string_id!(
    /// Store-generated identifier of a persisted override or custom standard.
    RecordId
);

string_id!(
    /// District identifier.
    DistrictId
);

string_id!(
    /// School identifier.
    SchoolId
);

impl RecordId {
    /// Generate a fresh random record ID.
    pub fn generate() -> Self {
        Self(format!("rec_{}", uuid::Uuid::new_v4().simple()))
    }

    /// Derive a stable record ID from `name`.
    ///
    /// The same name always yields the same ID, so reloading the same seed
    /// record overwrites it instead of adding a copy.
    pub fn derive(name: &str) -> Self {
        let uuid = uuid::Uuid::new_v5(&uuid::Uuid::NAMESPACE_OID, name.as_bytes());
        Self(format!("seed_{}", uuid.simple()))
    }
}
