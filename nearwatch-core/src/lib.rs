//! # NEARWATCH Core Library
//!
//! An in-memory relational store over two record collections:
//!
//! - [`NearEarthObject`] — a physical body with a unique primary
//!   designation, an optional IAU name, and physical parameters.
//! - [`CloseApproach`] — an observed encounter referencing exactly one
//!   NEO through a foreign-key designation string.
//!
//! Loaders (see the `nearwatch-io` crate) produce the two collections
//! unlinked; [`NeoDatabase`] joins them exactly once at construction and
//! is read-only thereafter. It exposes:
//!
//! - lookup by primary designation (case-insensitive, O(1) amortized),
//! - lookup by name (case-insensitive, linear, never matching unnamed
//!   bodies),
//! - a lazy, short-circuiting predicate query over the approach
//!   collection.
//!
//! The store is single-threaded by design and carries no internal
//! locking; wrap it in external synchronization before sharing it
//! across threads.

#![deny(clippy::unwrap_used)]
#![deny(missing_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod database;
pub mod error;
pub mod models;
pub mod query;

pub use config::{DatabaseConfig, LinkPolicy};
pub use database::{LookupIndex, NeoDatabase};
pub use error::DatabaseError;
pub use models::{ApproachId, CloseApproach, NearEarthObject, NeoId};
pub use query::{LinkedApproach, Predicate};
