//! Typed client for the Wisata travel-agency content API.
//!
//! [`WisataClient`] wraps the public and admin REST endpoints behind typed
//! methods, with a process-wide [`ResourceCache`] in front of all reads and
//! automatic invalidation after mutations. Admin operations require a bearer
//! token and fail fast without one.
//!
//! ```no_run
//! use wisata_client::{ClientConfig, PackageQuery, WisataClient};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let client = WisataClient::new(ClientConfig::from_env()?);
//! let listing = client.list_packages(&PackageQuery::default()).await?;
//! for package in &listing.items {
//!     println!("{}: {}", package.slug, package.title);
//! }
//! # Ok(())
//! # }
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

mod admins;
pub mod cache;
mod categories;
mod client;
pub mod config;
mod envelope;
pub mod error;
mod http;
mod images;
mod packages;
mod pending;
mod posts;
pub mod upload;

pub use cache::{CacheKey, CacheValue, Resource, ResourceCache, STALE_AFTER};
pub use client::WisataClient;
pub use config::{ClientConfig, ConfigError};
pub use error::ApiError;
pub use packages::PackageQuery;
pub use posts::PostQuery;
pub use upload::{FailedUpload, ImageFile, UploadReport};
