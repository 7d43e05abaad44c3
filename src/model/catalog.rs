//! Enumerations shared by the catalog and order DTOs.
//!
//! They serialize as lowercase strings and are stored in the database the same
//! way, via `as_str` / `FromStr`.

use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use utoipa::ToSchema;

/// Visibility of a trainer, class, program or membership.
///
/// Only `Active` items appear on public endpoints and can be ordered.
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug, Default, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum CatalogStatus {
    #[default]
    Active,
    Inactive,
}

impl CatalogStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
        }
    }
}

impl FromStr for CatalogStatus {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "active" => Ok(Self::Active),
            "inactive" => Ok(Self::Inactive),
            other => Err(format!("unknown catalog status '{}'", other)),
        }
    }
}

impl fmt::Display for CatalogStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of catalog item an order refers to.
#[derive(Serialize, Deserialize, PartialEq, Eq, Hash, Clone, Copy, Debug, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Class,
    Program,
    Membership,
}

impl ItemKind {
    pub const ALL: [ItemKind; 3] = [ItemKind::Class, ItemKind::Program, ItemKind::Membership];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Class => "class",
            Self::Program => "program",
            Self::Membership => "membership",
        }
    }
}

impl FromStr for ItemKind {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "class" => Ok(Self::Class),
            "program" => Ok(Self::Program),
            "membership" => Ok(Self::Membership),
            other => Err(format!("unknown item kind '{}'", other)),
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
