//! Scout Catalog crate - event storage and filtered search.
//!
//! Provides the [`Catalog`] trait the conversation engine searches through,
//! a JSON-backed [`MemoryCatalog`] implementation, and the date-window
//! resolution used by date filters ("today", "next_week", "3_days", weekday
//! names, ISO dates).

pub mod catalog;
pub mod dates;
pub mod error;

pub use catalog::{Catalog, MemoryCatalog};
pub use error::CatalogError;
