//! Inventory over HTTP: a single `GET` of the dealership's `cars.json`.

use async_trait::async_trait;
use log::{debug, info, warn};

use crate::core::vehicle::VehicleRecord;
use crate::inventory::{InventoryError, InventorySource, decode_inventory};

pub struct HttpInventory {
    url: String,
    client: reqwest::Client,
}

impl HttpInventory {
    pub fn new(url: String) -> Self {
        Self {
            url,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl InventorySource for HttpInventory {
    fn name(&self) -> &str {
        "http"
    }

    async fn fetch(&self) -> Result<Vec<VehicleRecord>, InventoryError> {
        info!("Fetching inventory from {}", self.url);

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| InventoryError::Network(e.to_string()))?;

        debug!("Inventory response status: {}", response.status());

        if !response.status().is_success() {
            let status = response.status().as_u16();
            warn!("Inventory feed error: HTTP {}", status);
            return Err(InventoryError::Status { status });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| InventoryError::Network(e.to_string()))?;
        debug!("Inventory body: {} bytes", body.len());

        decode_inventory(&body)
    }
}
