//! # Inventory
//!
//! Where the vehicle list comes from. The storefront loads it once at
//! startup through an [`InventorySource`]; any failure along the way
//! degrades to an empty inventory rather than an error screen.

pub mod source;
pub mod sources;

pub use source::{InventoryError, InventorySource, decode_inventory, load_or_empty};
pub use sources::{FileInventory, HttpInventory};

use std::sync::Arc;

use crate::core::config::FeedLocation;

/// Build the inventory source named by the resolved config.
pub fn build_source(feed: &FeedLocation) -> Arc<dyn InventorySource> {
    match feed {
        FeedLocation::Url(url) => Arc::new(HttpInventory::new(url.clone())),
        FeedLocation::File(path) => Arc::new(FileInventory::new(path.clone())),
    }
}
