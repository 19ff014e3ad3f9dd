//! # Application State
//!
//! Core business state for the storefront. This module contains domain logic
//! only, no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── inventory: Vec<VehicleRecord>   // loaded once, never edited
//! ├── filter: FilterState             // query, fuel, gearbox, max price
//! ├── selection: Selection            // vehicle open in the detail view
//! ├── booking: BookingStatus          // Editing | Submitted
//! ├── booking_error: Option<..>       // last validation failure
//! ├── contact: ContactLinks           // phone + WhatsApp numbers
//! ├── is_loading: bool                // inventory fetch in flight
//! └── status_message: String          // footer status text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! Filtered results and selector options are derived from it on demand.

use crate::core::booking::{BookingError, BookingStatus};
use crate::core::config::ResolvedConfig;
use crate::core::contact::ContactLinks;
use crate::core::filter::{self, FilterState};
use crate::core::selection::Selection;
use crate::core::vehicle::VehicleRecord;

pub struct App {
    pub inventory: Vec<VehicleRecord>,
    pub filter: FilterState,
    pub selection: Selection,
    pub booking: BookingStatus,
    pub booking_error: Option<BookingError>,
    pub contact: ContactLinks,
    pub is_loading: bool,
    pub status_message: String,
}

impl App {
    /// Empty storefront waiting for its inventory.
    pub fn new(contact: ContactLinks, max_price: u32) -> Self {
        Self {
            inventory: Vec::new(),
            filter: FilterState::with_max_price(filter::clamp_price(max_price)),
            selection: Selection::default(),
            booking: BookingStatus::default(),
            booking_error: None,
            contact,
            is_loading: true,
            status_message: String::from("Cargando inventario..."),
        }
    }

    pub fn from_config(config: &ResolvedConfig) -> Self {
        Self::new(
            ContactLinks::new(config.phone.clone(), config.whatsapp.clone()),
            config.max_price,
        )
    }

    /// Records matching the current filters, in inventory order.
    pub fn visible(&self) -> Vec<&VehicleRecord> {
        filter::apply(&self.inventory, &self.filter)
    }

    pub fn fuel_options(&self) -> Vec<String> {
        filter::fuel_options(&self.inventory)
    }

    pub fn gearbox_options(&self) -> Vec<String> {
        filter::gearbox_options(&self.inventory)
    }

    /// The record open in the detail view, if any.
    pub fn selected(&self) -> Option<&VehicleRecord> {
        self.selection.resolve(&self.inventory)
    }
}
