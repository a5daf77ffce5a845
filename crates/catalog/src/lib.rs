//! `vendora-catalog` — catalog items and the ownership scope calculator.

pub mod item;
pub mod scope;

pub use item::{Catalog, CatalogItem};
pub use scope::{OwnershipScope, owned_scope, scoped_item_ids};
