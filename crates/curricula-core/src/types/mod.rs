//! Domain types for standards resolution.

mod grade;
mod jurisdiction;
mod standard;
mod subject;

pub use grade::Grade;
pub use jurisdiction::Jurisdiction;
pub use standard::{ResolvedFrom, ResolvedStandard};
pub use subject::Subject;
