//! # Actions
//!
//! Everything that can happen in the storefront becomes an `Action`.
//! Visitor types in the search box? That's `Action::SetQuery(text)`.
//! Inventory arrives? That's `Action::InventoryLoaded(records)`.
//!
//! The `update()` function takes the current state and an action,
//! mutates the state, and returns an `Effect` for the caller to carry out.
//! No I/O here. Logging the booking, quitting the terminal: that happens elsewhere.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::{debug, info};

use crate::core::booking::{BookingForm, BookingRequest, BookingStatus};
use crate::core::filter;
use crate::core::state::App;
use crate::core::vehicle::{VehicleId, VehicleRecord};

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// The one-shot inventory fetch finished (empty on failure).
    InventoryLoaded(Vec<VehicleRecord>),
    SetQuery(String),
    SetFuel(String),
    SetGearbox(String),
    SetMaxPrice(u32),
    OpenVehicle(VehicleId),
    CloseVehicle,
    SubmitBooking(BookingForm),
    Quit,
}

/// Side effects requested by `update()`.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    Quit,
    /// A valid appointment request to be recorded (logged only).
    RecordBooking(BookingRequest),
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("update: {:?}", action);
    match action {
        Action::InventoryLoaded(records) => {
            info!("Inventory loaded: {} vehicles", records.len());
            app.inventory = records;
            app.is_loading = false;
            app.selection.close();
            reset_booking(app);
            app.status_message = inventory_status(app.inventory.len());
            Effect::None
        }
        Action::SetQuery(query) => {
            app.filter.query = query;
            Effect::None
        }
        Action::SetFuel(fuel) => {
            app.filter.fuel = fuel;
            Effect::None
        }
        Action::SetGearbox(gearbox) => {
            app.filter.gearbox = gearbox;
            Effect::None
        }
        Action::SetMaxPrice(max_price) => {
            app.filter.max_price = filter::clamp_price(max_price);
            Effect::None
        }
        Action::OpenVehicle(id) => {
            if app.selection.open(&app.inventory, &id) {
                reset_booking(app);
            } else {
                debug!("Ignoring open for unknown vehicle {}", id);
            }
            Effect::None
        }
        Action::CloseVehicle => {
            app.selection.close();
            reset_booking(app);
            Effect::None
        }
        Action::SubmitBooking(form) => submit_booking(app, form),
        Action::Quit => Effect::Quit,
    }
}

fn submit_booking(app: &mut App, form: BookingForm) -> Effect {
    if app.booking.is_submitted() {
        return Effect::None;
    }
    let Some(id) = app.selection.id().cloned() else {
        debug!("Booking submitted with no vehicle open");
        return Effect::None;
    };

    match form.validate(&id) {
        Ok(request) => {
            app.booking_error = None;
            app.booking = BookingStatus::Submitted(request.clone());
            app.status_message = String::from("Solicitud enviada");
            Effect::RecordBooking(request)
        }
        Err(err) => {
            debug!("Booking rejected: {}", err);
            app.booking_error = Some(err);
            Effect::None
        }
    }
}

fn reset_booking(app: &mut App) {
    app.booking = BookingStatus::Editing;
    app.booking_error = None;
}

fn inventory_status(count: usize) -> String {
    match count {
        0 => String::from("Sin vehículos disponibles"),
        1 => String::from("1 vehículo"),
        n => format!("{n} vehículos"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::booking::BookingError;
    use crate::core::filter::{PRICE_MAX, PRICE_MIN};
    use crate::test_support::{car, loaded_app, sample_inventory, test_app};

    fn ids(app: &App) -> Vec<String> {
        app.visible().iter().map(|r| r.id.to_string()).collect()
    }

    fn booking_form() -> BookingForm {
        BookingForm {
            name: "Pedro".to_string(),
            phone: "666 27 07 07".to_string(),
            date: "2026-10-30".to_string(),
            notes: "Mañanas".to_string(),
        }
    }

    #[test]
    fn test_inventory_loaded() {
        let mut app = test_app();
        let effect = update(&mut app, Action::InventoryLoaded(sample_inventory()));
        assert_eq!(effect, Effect::None);
        assert!(!app.is_loading);
        assert_eq!(app.inventory.len(), 6);
        assert_eq!(app.status_message, "6 vehículos");
    }

    #[test]
    fn test_empty_inventory_loaded() {
        let mut app = test_app();
        update(&mut app, Action::InventoryLoaded(Vec::new()));
        assert!(!app.is_loading);
        assert!(app.visible().is_empty());
        assert_eq!(app.fuel_options(), vec!["Todos"]);
        assert_eq!(app.status_message, "Sin vehículos disponibles");
    }

    #[test]
    fn test_filter_actions_rederive_results() {
        let mut app = loaded_app();
        update(&mut app, Action::SetFuel("Diésel".to_string()));
        assert_eq!(ids(&app), vec!["1", "3"]);
        update(&mut app, Action::SetGearbox("Manual".to_string()));
        assert_eq!(ids(&app), vec!["1"]);
        update(&mut app, Action::SetFuel("Todos".to_string()));
        update(&mut app, Action::SetQuery("IBIZA".to_string()));
        assert_eq!(ids(&app), vec!["2"]);
    }

    #[test]
    fn test_max_price_is_clamped() {
        let mut app = loaded_app();
        update(&mut app, Action::SetMaxPrice(1));
        assert_eq!(app.filter.max_price, PRICE_MIN);
        update(&mut app, Action::SetMaxPrice(u32::MAX));
        assert_eq!(app.filter.max_price, PRICE_MAX);
    }

    #[test]
    fn test_options_unchanged_by_filters() {
        let mut app = loaded_app();
        let before = app.fuel_options();
        update(&mut app, Action::SetFuel("Gasolina".to_string()));
        update(&mut app, Action::SetMaxPrice(PRICE_MIN));
        assert_eq!(app.fuel_options(), before);
    }

    #[test]
    fn test_selection_survives_filter_change() {
        let mut app = loaded_app();
        update(&mut app, Action::OpenVehicle(VehicleId::from(2_i64)));
        update(&mut app, Action::SetFuel("Diésel".to_string()));
        update(&mut app, Action::SetMaxPrice(PRICE_MIN));

        assert!(!ids(&app).contains(&"2".to_string()));
        assert_eq!(app.selected().map(|r| &r.id), Some(&VehicleId::from(2_i64)));

        update(&mut app, Action::CloseVehicle);
        assert!(app.selected().is_none());
    }

    #[test]
    fn test_open_unknown_vehicle_is_ignored() {
        let mut app = loaded_app();
        update(&mut app, Action::OpenVehicle(VehicleId::from(404_i64)));
        assert!(app.selected().is_none());
    }

    #[test]
    fn test_reload_clears_selection() {
        let mut app = loaded_app();
        update(&mut app, Action::OpenVehicle(VehicleId::from(1_i64)));
        update(&mut app, Action::InventoryLoaded(vec![car(10, "Dacia Sandero")]));
        assert!(!app.selection.is_open());
    }

    #[test]
    fn test_valid_booking_records_and_terminates() {
        let mut app = loaded_app();
        update(&mut app, Action::OpenVehicle(VehicleId::from(3_i64)));

        let request = match update(&mut app, Action::SubmitBooking(booking_form())) {
            Effect::RecordBooking(request) => request,
            other => panic!("Expected RecordBooking, got {:?}", other),
        };
        assert_eq!(request.vehicle_id, VehicleId::from(3_i64));
        assert_eq!(request.notes.as_deref(), Some("Mañanas"));
        assert_eq!(app.booking, BookingStatus::Submitted(request));

        // Submitted is terminal: a second submit does nothing.
        let again = update(&mut app, Action::SubmitBooking(booking_form()));
        assert_eq!(again, Effect::None);
    }

    #[test]
    fn test_invalid_booking_stays_editing() {
        let mut app = loaded_app();
        update(&mut app, Action::OpenVehicle(VehicleId::from(3_i64)));

        let form = BookingForm {
            phone: "12".to_string(),
            ..booking_form()
        };
        let effect = update(&mut app, Action::SubmitBooking(form));
        assert_eq!(effect, Effect::None);
        assert_eq!(app.booking, BookingStatus::Editing);
        assert_eq!(app.booking_error, Some(BookingError::InvalidPhone));

        // Fixing the form clears the error.
        update(&mut app, Action::SubmitBooking(booking_form()));
        assert!(app.booking_error.is_none());
        assert!(app.booking.is_submitted());
    }

    #[test]
    fn test_booking_without_open_vehicle_is_ignored() {
        let mut app = loaded_app();
        let effect = update(&mut app, Action::SubmitBooking(booking_form()));
        assert_eq!(effect, Effect::None);
        assert_eq!(app.booking, BookingStatus::Editing);
    }

    #[test]
    fn test_opening_vehicle_starts_fresh_form() {
        let mut app = loaded_app();
        update(&mut app, Action::OpenVehicle(VehicleId::from(3_i64)));
        update(&mut app, Action::SubmitBooking(booking_form()));
        assert!(app.booking.is_submitted());

        update(&mut app, Action::CloseVehicle);
        update(&mut app, Action::OpenVehicle(VehicleId::from(1_i64)));
        assert_eq!(app.booking, BookingStatus::Editing);
    }

    #[test]
    fn test_quit() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
    }
}
