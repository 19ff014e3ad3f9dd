//! # Filter Engine
//!
//! Narrows the inventory with four conjunctive predicates:
//!
//! ```text
//! text     lowercase(query) ⊆ lowercase(title + engine + color)
//! fuel     state.fuel == "Todos"    || record.fuel == state.fuel
//! gearbox  state.gearbox == "Todos" || record.gearbox == state.gearbox
//! price    record.price absent      || record.price <= state.max_price
//! ```
//!
//! Results and selector options are derived on demand from the inventory and
//! the current `FilterState`. Nothing here is cached, so there is nothing to
//! invalidate when either side changes.

use crate::core::vehicle::VehicleRecord;

/// Selector sentinel meaning "no constraint on this field".
pub const ANY: &str = "Todos";

/// Price slider bounds, in euros.
pub const PRICE_MIN: u32 = 5_000;
pub const PRICE_MAX: u32 = 60_000;
pub const PRICE_STEP: u32 = 500;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    pub query: String,
    pub fuel: String,
    pub gearbox: String,
    pub max_price: u32,
}

impl Default for FilterState {
    fn default() -> Self {
        Self::with_max_price(PRICE_MAX)
    }
}

impl FilterState {
    pub fn with_max_price(max_price: u32) -> Self {
        Self {
            query: String::new(),
            fuel: ANY.to_string(),
            gearbox: ANY.to_string(),
            max_price,
        }
    }

    pub fn matches(&self, record: &VehicleRecord) -> bool {
        self.matches_query(record)
            && matches_choice(&self.fuel, record.fuel.as_deref())
            && matches_choice(&self.gearbox, record.gearbox.as_deref())
            && self.matches_price(record)
    }

    fn matches_query(&self, record: &VehicleRecord) -> bool {
        if self.query.is_empty() {
            return true;
        }
        haystack(record).contains(&self.query.to_lowercase())
    }

    fn matches_price(&self, record: &VehicleRecord) -> bool {
        record
            .price
            .is_none_or(|price| price <= f64::from(self.max_price))
    }
}

fn matches_choice(selected: &str, value: Option<&str>) -> bool {
    selected == ANY || value == Some(selected)
}

/// Lowercased searchable text: title, engine and color joined by single spaces.
pub fn haystack(record: &VehicleRecord) -> String {
    [&record.title, &record.engine, &record.color]
        .into_iter()
        .flatten()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Every record that satisfies `state`, in inventory order.
pub fn apply<'a>(inventory: &'a [VehicleRecord], state: &FilterState) -> Vec<&'a VehicleRecord> {
    inventory.iter().filter(|record| state.matches(record)).collect()
}

/// `"Todos"` followed by each distinct fuel in order of first appearance.
pub fn fuel_options(inventory: &[VehicleRecord]) -> Vec<String> {
    distinct_options(inventory, |record| record.fuel.as_deref())
}

/// `"Todos"` followed by each distinct gearbox in order of first appearance.
pub fn gearbox_options(inventory: &[VehicleRecord]) -> Vec<String> {
    distinct_options(inventory, |record| record.gearbox.as_deref())
}

fn distinct_options<F>(inventory: &[VehicleRecord], field: F) -> Vec<String>
where
    F: Fn(&VehicleRecord) -> Option<&str>,
{
    let mut options = vec![ANY.to_string()];
    for value in inventory.iter().filter_map(&field) {
        if !options.iter().any(|existing| existing == value) {
            options.push(value.to_string());
        }
    }
    options
}

/// Move the price ceiling by `steps` slider notches, clamped to the slider range.
pub fn step_price(max_price: u32, steps: i32) -> u32 {
    let moved = i64::from(max_price) + i64::from(steps) * i64::from(PRICE_STEP);
    clamp_price(moved.clamp(0, i64::from(u32::MAX)) as u32)
}

pub fn clamp_price(max_price: u32) -> u32 {
    max_price.clamp(PRICE_MIN, PRICE_MAX)
}
