//! Inventory from a local `cars.json`, for running without the web server.

use std::path::PathBuf;

use async_trait::async_trait;
use log::info;

use crate::core::vehicle::VehicleRecord;
use crate::inventory::{InventoryError, InventorySource, decode_inventory};

pub struct FileInventory {
    path: PathBuf,
}

impl FileInventory {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

#[async_trait]
impl InventorySource for FileInventory {
    fn name(&self) -> &str {
        "file"
    }

    async fn fetch(&self) -> Result<Vec<VehicleRecord>, InventoryError> {
        info!("Reading inventory from {}", self.path.display());
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|e| InventoryError::Io(format!("{}: {e}", self.path.display())))?;
        decode_inventory(&bytes)
    }
}
