//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use async_trait::async_trait;

use crate::core::action::{Action, update};
use crate::core::contact::ContactLinks;
use crate::core::filter::PRICE_MAX;
use crate::core::state::App;
use crate::core::vehicle::VehicleRecord;
use crate::inventory::{InventoryError, InventorySource};

pub fn car(id: i64, title: &str) -> VehicleRecord {
    VehicleRecord::new(id, title)
}

/// Six vehicles covering every filter edge the tests care about:
/// a record with no gearbox (4), one above the slider maximum (5),
/// and one with neither fuel nor price (6).
pub fn sample_inventory() -> Vec<VehicleRecord> {
    vec![
        VehicleRecord {
            price: Some(8000.0),
            year: Some(2017.0),
            km: Some(98000.0),
            power: Some(90.0),
            fuel: Some("Diésel".into()),
            gearbox: Some("Manual".into()),
            engine: Some("1.5 dCi".into()),
            color: Some("Blanco".into()),
            ..car(1, "Renault Clio")
        },
        VehicleRecord {
            price: Some(15000.0),
            year: Some(2021.0),
            km: Some(31000.0),
            power: Some(110.0),
            doors: Some(5.0),
            fuel: Some("Gasolina".into()),
            gearbox: Some("Manual".into()),
            engine: Some("1.0 TSI".into()),
            color: Some("Rojo".into()),
            location: Some("Puertollano".into()),
            consumption: Some("5,1 l/100km".into()),
            images: vec!["ibiza-1.jpg".into(), "ibiza-2.jpg".into(), "ibiza-3.jpg".into()],
            highlights: vec!["Garantía 12 meses".into(), "Un solo dueño".into()],
            features: vec!["Apple CarPlay".into(), "Control de crucero".into()],
            ..car(2, "Seat Ibiza")
        },
        VehicleRecord {
            price: Some(21500.0),
            fuel: Some("Diésel".into()),
            gearbox: Some("Automático".into()),
            engine: Some("2.0 TDI".into()),
            color: Some("Gris".into()),
            ..car(3, "Volkswagen Golf")
        },
        VehicleRecord {
            price: Some(9900.0),
            fuel: Some("Gasolina".into()),
            engine: Some("1.2".into()),
            color: Some("Blanco perla".into()),
            ..car(4, "Opel Corsa")
        },
        VehicleRecord {
            price: Some(72000.0),
            fuel: Some("Híbrido".into()),
            gearbox: Some("Automático".into()),
            engine: Some("2.5 Hybrid".into()),
            color: Some("Azul".into()),
            ..car(5, "Toyota RAV4")
        },
        VehicleRecord {
            gearbox: Some("Manual".into()),
            engine: Some("1.1".into()),
            color: Some("Negro".into()),
            ..car(6, "Ford Fiesta")
        },
    ]
}

/// Creates a test App that is still waiting for its inventory.
pub fn test_app() -> App {
    App::new(ContactLinks::new("666 27 07 07", "+34 666 27 07 07"), PRICE_MAX)
}

/// Creates a test App with `sample_inventory()` loaded.
pub fn loaded_app() -> App {
    let mut app = test_app();
    update(&mut app, Action::InventoryLoaded(sample_inventory()));
    app
}

/// An inventory source that returns a fixed result.
pub struct StaticSource(pub Result<Vec<VehicleRecord>, InventoryError>);

#[async_trait]
impl InventorySource for StaticSource {
    fn name(&self) -> &str {
        "static"
    }

    async fn fetch(&self) -> Result<Vec<VehicleRecord>, InventoryError> {
        self.0.clone()
    }
}
