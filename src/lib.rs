//! valcar: a terminal storefront for a used-car dealership.
//!
//! `core` holds the pure storefront logic, `inventory` loads the vehicle
//! feed and `tui` is the ratatui front end.

pub mod core;
pub mod inventory;
pub mod tui;

#[cfg(test)]
pub mod test_support;
