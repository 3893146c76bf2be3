//! CLI subcommand implementations.

pub mod admins;
pub mod categories;
pub mod images;
pub mod packages;
pub mod posts;
