use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub String);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A sellable product as the recommendation engine sees it. Read-only for the
/// duration of a ranking call.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CatalogItem {
    pub id: ItemId,
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub price: f64,
}

/// A catalog item paired with its relevance score for one query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredItem<'a> {
    pub item: &'a CatalogItem,
    pub score: u32,
}

/// The loaded catalog together with a fingerprint of the files it came from.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub items: Vec<CatalogItem>,
    pub digest: String,
}

#[derive(Error, Debug)]
pub enum CuratorError {
    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),

    #[error("File system error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Database failure: {0}")]
    DbError(#[from] sqlx::Error),

    #[error("Git repository error: {0}")]
    GitError(#[from] git2::Error),

    #[error("Catalog parsing error: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Config serialization error: {0}")]
    SerializeError(#[from] toml::ser::Error),
}
