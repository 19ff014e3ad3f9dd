//! # Core Application Logic
//!
//! This module contains the storefront's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (app data)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │  • filter engine        │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!            ┌───────────────────┼───────────────────┐
//!            ▼                   ▼                   ▼
//!     ┌────────────┐      ┌────────────┐      ┌────────────┐
//!     │    TUI     │      │ Inventory  │      │    Web     │
//!     │  Adapter   │      │  sources   │      │  (future)  │
//!     │ (ratatui)  │      │ (HTTP/file)│      │            │
//!     └────────────┘      └────────────┘      └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct, all application state in one place
//! - [`action`]: The `Action` enum and `update()` reducer
//! - [`filter`]: Filter predicates and selector options
//! - [`vehicle`]: The inventory record type
//! - [`selection`]: The vehicle open in the detail view
//! - [`booking`]: The local appointment-request form
//! - [`contact`]: `tel:` and WhatsApp links
//! - [`format`]: es-ES number and currency formatting
//! - [`config`]: Layered configuration

pub mod action;
pub mod booking;
pub mod config;
pub mod contact;
pub mod filter;
pub mod format;
pub mod selection;
pub mod state;
pub mod vehicle;
