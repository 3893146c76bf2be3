//! Status and role enums shared across entities.

use serde::{Deserialize, Serialize};

/// Editorial category of a post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum PostType {
    #[default]
    Blog,
    Catalog,
    News,
    Information,
}

/// Publication status of a post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum PostStatus {
    #[default]
    Draft,
    Published,
}

impl PostType {
    /// Wire name as used in query strings and form fields.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Blog => "BLOG",
            Self::Catalog => "CATALOG",
            Self::News => "NEWS",
            Self::Information => "INFORMATION",
        }
    }
}

impl PostStatus {
    /// Wire name as used in query strings and form fields.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "DRAFT",
            Self::Published => "PUBLISHED",
        }
    }
}

/// Privilege level of a back-office admin account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum AdminRole {
    Super,
    #[default]
    Normal,
}

impl AdminRole {
    /// Wire name as used in payloads.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Super => "SUPER",
            Self::Normal => "NORMAL",
        }
    }
}

impl std::str::FromStr for AdminRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "SUPER" => Ok(Self::Super),
            "NORMAL" => Ok(Self::Normal),
            other => Err(format!("unknown admin role: {other}")),
        }
    }
}
