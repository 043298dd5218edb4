use crate::core::{Catalog, CatalogItem, CuratorError, ItemId};
use git2::Repository;
use serde::Deserialize;
use sha2::{Digest, Sha256};
use std::collections::HashSet;
use std::path::PathBuf;
use std::process::Command;
use tracing::{debug, info, warn};
use walkdir::WalkDir;

#[derive(Deserialize)]
struct CatalogFile {
    #[serde(default)]
    items: Vec<CatalogItem>,
}

pub struct CatalogSource {
    local_path: PathBuf,
    remote_url: String,
}

impl CatalogSource {
    pub fn new(local_path: PathBuf, remote_url: String) -> Self {
        Self {
            local_path,
            remote_url,
        }
    }

    pub fn sync(&self) -> Result<(), CuratorError> {
        if !self.local_path.exists() {
            info!(url = %self.remote_url, "cloning catalog");
            Repository::clone(&self.remote_url, &self.local_path)?;
        } else {
            let status = Command::new("git")
                .current_dir(&self.local_path)
                .arg("pull")
                .status()?;

            if !status.success() {
                warn!("Failed to update catalog (offline mode?)");
            }
        }
        Ok(())
    }

    /// Reads every `*.toml` file under the catalog directory in file-name order.
    pub fn load(&self) -> Result<Catalog, CuratorError> {
        let mut items = Vec::new();
        let mut seen = HashSet::new();
        let mut hasher = Sha256::new();

        if !self.local_path.exists() {
            warn!(path = %self.local_path.display(), "catalog directory missing");
            return Ok(Catalog {
                items,
                digest: hex::encode(hasher.finalize()),
            });
        }

        for entry in WalkDir::new(&self.local_path)
            .min_depth(1)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
        {
            if entry.path().extension().and_then(|s| s.to_str()) != Some("toml") {
                continue;
            }

            let content = std::fs::read_to_string(entry.path())?;
            hasher.update(content.as_bytes());

            let file: CatalogFile = toml::from_str(&content)?;
            debug!(path = %entry.path().display(), count = file.items.len(), "loaded catalog file");

            for item in file.items {
                validate(&item)?;
                if !seen.insert(item.id.clone()) {
                    return Err(CuratorError::InvalidCatalog(format!(
                        "Duplicate item id '{}' in {}",
                        item.id,
                        entry.path().display()
                    )));
                }
                items.push(item);
            }
        }

        info!(items = items.len(), "catalog loaded");
        Ok(Catalog {
            items,
            digest: hex::encode(hasher.finalize()),
        })
    }
}

fn validate(item: &CatalogItem) -> Result<(), CuratorError> {
    let ItemId(id) = &item.id;
    if id.trim().is_empty() {
        return Err(CuratorError::InvalidCatalog(format!(
            "Item '{}' has an empty id",
            item.name
        )));
    }
    if item.name.trim().is_empty() {
        return Err(CuratorError::InvalidCatalog(format!(
            "Item '{}' has an empty name",
            id
        )));
    }
    if !item.price.is_finite() || item.price < 0.0 {
        return Err(CuratorError::InvalidCatalog(format!(
            "Item '{}' has an invalid price: {}",
            id, item.price
        )));
    }
    Ok(())
}
