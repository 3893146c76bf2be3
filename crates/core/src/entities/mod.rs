//! Client-side entity projections of server truth.
//!
//! The REST API owns persistence; these structs only describe the JSON that
//! crosses the wire. Fields the API sometimes omits are defaulted rather than
//! required so a degraded response never fails wholesale deserialization.

pub mod admin;
pub mod category;
pub mod package;
pub mod post;

pub use admin::{AdminDraft, AdminPatch, AdminUser};
pub use category::{Category, CategoryDraft};
pub use package::{PackageDraft, PackageImage, TourPackage};
pub use post::{Post, PostDraft, PostPatch};
