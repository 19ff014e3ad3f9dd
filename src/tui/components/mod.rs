//! # TUI Components
//!
//! This module contains all UI components for the storefront screen.
//!
//! ## Component Architecture
//!
//! Components in this directory follow two patterns:
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as props:
//! - `TitleBar`: brand, status and contact links
//!
//! ### Stateful Components (Event-Driven)
//!
//! Components that keep presentation state across frames and emit events:
//! - `TextField`: single-line editor used by search and the booking form
//! - `FilterBar`: search box, selectors and price slider
//! - `CarList`: the filtered inventory as cards
//! - `CarDetail`: the drawer for the open vehicle, hosting `BookingFormView`
//!
//! Stateful components split into a persistent `FooState` kept in `TuiState`
//! and a transient `Foo<'a>` wrapper built each frame around
//! `&'a mut FooState` plus borrowed props from the core `App`.
//!
//! ## Props-Based Data Flow
//!
//! Components never read the core `App` directly and never mutate it. They
//! emit events (`FilterEvent`, `ListEvent`, `BookingEvent`) that the event
//! loop turns into `Action`s for `update()`.
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── title_bar.rs     (Header)
//! ├── text_field.rs    (Single-line input)
//! ├── filter_bar.rs    (Filters)
//! ├── car_list.rs      (Vehicle cards)
//! ├── car_detail.rs    (Detail drawer)
//! └── booking_form.rs  (Appointment request form)
//! ```

pub mod booking_form;
pub mod car_detail;
pub mod car_list;
pub mod filter_bar;
pub mod text_field;
mod title_bar;

pub use booking_form::{BookingEvent, BookingFormState, BookingFormView};
pub use car_detail::{CarDetail, CarDetailState};
pub use car_list::{CarList, CarListState, ListEvent};
pub use filter_bar::{FilterBar, FilterBarState, FilterEvent, cycle_option};
pub use text_field::{FieldEvent, TextField};
pub use title_bar::{BRAND, TAGLINE, TitleBar};
