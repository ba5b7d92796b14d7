//! # Curricula Catalog
//!
//! Built-in baseline standards for the Curricula resolution engine.
//!
//! This crate provides:
//! - [`FrameworkMapper`]: which standards family a jurisdiction adopted for a subject
//! - [`BuiltinCatalog`]: the [`CatalogProvider`](curricula_traits::CatalogProvider)
//!   that builds national and state baseline sets from static tables
//!
//! Both are pure lookups with no I/O. Seven subjects have hand-curated
//! content; any other subject gets a three-entry generic set, so every
//! `(subject, grade)` pair resolves to at least one standard.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod catalog;
pub mod framework;

mod tables;

pub use catalog::{standard_id, BuiltinCatalog};
pub use framework::{national_framework, Framework, FrameworkMapper, COMMON_CORE};
