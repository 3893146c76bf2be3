//! Wisata Core - Shared domain types.
//!
//! This crate provides the common types used across all Wisata components:
//! - `client` - Typed client for the content REST API
//! - `cli` - Command-line management tools
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients. Entities are
//! client-side projections of server truth: the API owns persistence, this
//! crate only describes the shapes that flow over the wire.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, and statuses
//! - [`entities`] - Cached entity projections (packages, posts, categories, admins)
//! - [`page`] - Pagination metadata and list results

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod entities;
pub mod page;
pub mod types;

pub use entities::*;
pub use page::{Listing, PageMeta};
pub use types::*;
