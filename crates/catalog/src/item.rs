use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use vendora_core::{CatalogItemId, PrincipalId};

/// A sellable unit.
///
/// Every item has exactly one owning principal; ownership never spans
/// principals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: CatalogItemId,
    pub owner: PrincipalId,
    pub name: String,
    /// Price in smallest currency unit (e.g., cents).
    pub price: u64,
    pub stock: i64,
}

impl CatalogItem {
    pub fn new(id: CatalogItemId, owner: PrincipalId, name: impl Into<String>, price: u64) -> Self {
        Self {
            id,
            owner,
            name: name.into(),
            price,
            stock: 0,
        }
    }
}

/// Id-indexed catalog snapshot supplied by the persistence layer.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: HashMap<CatalogItemId, CatalogItem>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_items(items: impl IntoIterator<Item = CatalogItem>) -> Self {
        Self {
            items: items.into_iter().map(|item| (item.id, item)).collect(),
        }
    }

    pub fn insert(&mut self, item: CatalogItem) {
        self.items.insert(item.id, item);
    }

    pub fn get(&self, id: CatalogItemId) -> Option<&CatalogItem> {
        self.items.get(&id)
    }

    pub fn contains(&self, id: CatalogItemId) -> bool {
        self.items.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CatalogItem> {
        self.items.values()
    }

    /// Ids of every item owned by any principal in `owners`.
    pub fn owned_by(&self, owners: &HashSet<PrincipalId>) -> HashSet<CatalogItemId> {
        self.items
            .values()
            .filter(|item| owners.contains(&item.owner))
            .map(|item| item.id)
            .collect()
    }
}
