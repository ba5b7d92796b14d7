//! # Curricula Core
//!
//! Core types for the Curricula standards resolution engine.
//!
//! This crate provides the vocabulary shared by every other crate:
//!
//! - **Types**: `Subject`, `Grade`, `Jurisdiction`, `ResolvedStandard`
//! - **Identifiers**: `StandardId`, `RecordId`, `DistrictId`, `SchoolId`
//! - **Records**: the persisted override and custom-standard records
//! - **Validation**: field-level validation for records entering the store
//!
//! ## Example
//!
//! ```rust
//! use curricula_core::prelude::*;
//!
//! let subject: Subject = "Math".into();
//! assert!(subject.is_builtin());
//! assert_eq!(Grade::new(0).label(), "K");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod ids;
pub mod records;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{Validate, ValidationError};
    pub use crate::ids::{DistrictId, RecordId, SchoolId, StandardId};
    pub use crate::records::{DistrictStandard, Persisted, SchoolOverride, StateOverride};
    pub use crate::types::{Grade, Jurisdiction, ResolvedFrom, ResolvedStandard, Subject};
}

pub use error::{Validate, ValidationError};
pub use ids::{DistrictId, RecordId, SchoolId, StandardId};
pub use records::{sort_in_query_order, DistrictStandard, Persisted, SchoolOverride, StateOverride};
pub use types::{Grade, Jurisdiction, ResolvedFrom, ResolvedStandard, Subject};
