//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the storefront,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Flow
//!
//! ```text
//! crossterm ─▶ TuiEvent ─▶ handle_event() ─▶ Action ─▶ update() ─▶ Effect
//!                                                          ▲
//! inventory task ─────────── Action::InventoryLoaded ──────┘ (mpsc)
//! ```
//!
//! `handle_event` is pure with respect to the terminal: it only touches
//! `App` (through `update`) and `TuiState`, so key handling is unit tested
//! without a terminal.
//!
//! ## Redraw Strategy
//!
//! The loop only draws after an input event or a background action. It
//! polls every 100ms while the inventory is loading and every 500ms when idle.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};
use std::time::Duration;

use crossterm::cursor::{SetCursorStyle, Show};
use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
    KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::execute;

use crate::core::action::{Action, Effect, update};
use crate::core::booking::BookingRequest;
use crate::core::config::ResolvedConfig;
use crate::core::filter;
use crate::core::state::App;
use crate::inventory::{self, InventorySource, load_or_empty};
use crate::tui::component::EventHandler;
use crate::tui::components::{
    BookingEvent, CarDetailState, CarListState, FilterBarState, FilterEvent, ListEvent,
    cycle_option,
};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// Which control receives keys while no vehicle is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Search,
    Fuel,
    Gearbox,
    Price,
    /// Navigate the cards. Typing auto-switches to Search.
    List,
}

impl Focus {
    /// Tab order.
    const ORDER: [Focus; 5] = [
        Focus::Search,
        Focus::Fuel,
        Focus::Gearbox,
        Focus::Price,
        Focus::List,
    ];

    fn position(self) -> usize {
        Self::ORDER
            .iter()
            .position(|focus| *focus == self)
            .unwrap_or(0)
    }

    pub fn next(self) -> Focus {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Focus {
        Self::ORDER[(self.position() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub focus: Focus,
    // Persistent component states
    pub filter_bar: FilterBarState,
    pub car_list: CarListState,
    pub detail: CarDetailState,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            focus: Focus::List,
            filter_bar: FilterBarState::new(),
            car_list: CarListState::new(),
            detail: CarDetailState::new(),
        }
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        // Kitty keyboard protocol lets Shift+Tab and Esc arrive unambiguously;
        // terminals without it ignore the request
        execute!(
            stdout(),
            EnableMouseCapture,
            EnableBracketedPaste,
            Show,
            SetCursorStyle::SteadyBlock,
            PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES
                    | KeyboardEnhancementFlags::REPORT_EVENT_TYPES
            )
        )?;
        info!("Terminal modes enabled (mouse, bracketed paste, keyboard enhancement)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            PopKeyboardEnhancementFlags,
            DisableMouseCapture,
            DisableBracketedPaste,
            SetCursorStyle::DefaultUserShape
        );
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let mut app = App::from_config(&config);
    let mut tui = TuiState::new();

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();
    spawn_inventory_fetch(inventory::build_source(&config.feed), tx);

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = match TerminalModeGuard::new() {
        Ok(guard) => Some(guard),
        Err(e) => {
            warn!("Could not enable terminal modes: {}", e);
            None
        }
    };

    let mut needs_redraw = true; // Force first frame

    loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui))?;
            needs_redraw = false;
        }

        let timeout = if app.is_loading {
            Duration::from_millis(100)
        } else {
            Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            if apply_effect(handle_event(&mut app, &mut tui, event)) {
                should_quit = true;
                break;
            }
        }

        if should_quit {
            break;
        }

        // Handle background task actions (the inventory fetch)
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            if apply_effect(update(&mut app, action)) {
                should_quit = true;
            }
        }

        if should_quit {
            break;
        }
    }

    ratatui::restore();
    Ok(())
}

/// Carry out an effect. Returns true when the loop should stop.
fn apply_effect(effect: Effect) -> bool {
    match effect {
        Effect::Quit => true,
        Effect::RecordBooking(request) => {
            record_booking(&request);
            false
        }
        Effect::None => false,
    }
}

/// Translate one terminal event into state changes.
pub fn handle_event(app: &mut App, tui: &mut TuiState, event: TuiEvent) -> Effect {
    match event {
        // Ctrl+C always quits, drawer or not
        TuiEvent::ForceQuit => return update(app, Action::Quit),
        // Resize just needs a redraw
        TuiEvent::Resize => return Effect::None,
        _ => {}
    }

    // While a vehicle is open the drawer gets every key
    if app.selection.is_open() {
        return handle_detail_event(app, tui, &event);
    }

    match (tui.focus, &event) {
        (_, TuiEvent::Tab) => {
            tui.focus = tui.focus.next();
            Effect::None
        }
        (_, TuiEvent::BackTab) => {
            tui.focus = tui.focus.prev();
            Effect::None
        }
        (Focus::List, TuiEvent::Escape) => update(app, Action::Quit),
        (_, TuiEvent::Escape) => {
            tui.focus = Focus::List;
            Effect::None
        }
        // Typing in the list starts a search
        (Focus::List, TuiEvent::InputChar(_) | TuiEvent::Paste(_)) => {
            tui.focus = Focus::Search;
            handle_filter_event(app, tui, &event)
        }
        // The mouse wheel always scrolls the list
        (Focus::List, _) | (_, TuiEvent::ScrollUp | TuiEvent::ScrollDown) => {
            handle_list_event(app, tui, &event)
        }
        _ => handle_filter_event(app, tui, &event),
    }
}

fn handle_list_event(app: &mut App, tui: &mut TuiState, event: &TuiEvent) -> Effect {
    let visible = app.visible();
    tui.car_list.sync(visible.len());
    let Some(ListEvent::Open(index)) = tui.car_list.handle_event(event) else {
        return Effect::None;
    };
    let Some(id) = visible.get(index).map(|record| record.id.clone()) else {
        return Effect::None;
    };
    tui.detail.reset();
    update(app, Action::OpenVehicle(id))
}

fn handle_filter_event(app: &mut App, tui: &mut TuiState, event: &TuiEvent) -> Effect {
    let Some(filter_event) = tui.filter_bar.handle_event(tui.focus, event) else {
        return Effect::None;
    };
    let action = match filter_event {
        FilterEvent::QueryChanged(query) => Action::SetQuery(query),
        FilterEvent::FuelStep(step) => {
            Action::SetFuel(cycle_option(&app.fuel_options(), &app.filter.fuel, step))
        }
        FilterEvent::GearboxStep(step) => Action::SetGearbox(cycle_option(
            &app.gearbox_options(),
            &app.filter.gearbox,
            step,
        )),
        FilterEvent::PriceStep(steps) => {
            Action::SetMaxPrice(filter::step_price(app.filter.max_price, steps))
        }
        FilterEvent::Done => {
            tui.focus = Focus::List;
            return Effect::None;
        }
    };
    update(app, action)
}

fn handle_detail_event(app: &mut App, tui: &mut TuiState, event: &TuiEvent) -> Effect {
    if matches!(event, TuiEvent::Escape) {
        return update(app, Action::CloseVehicle);
    }
    if tui.detail.scroll(event) {
        return Effect::None;
    }
    // A submitted form is final
    if app.booking.is_submitted() {
        return Effect::None;
    }

    match tui.detail.form.handle_event(event) {
        Some(BookingEvent::Submit(form)) => {
            let effect = update(app, Action::SubmitBooking(form));
            if let Some(err) = &app.booking_error {
                tui.detail.form.focus(err.field());
            }
            effect
        }
        None => Effect::None,
    }
}

/// Fetch the inventory once in the background and report it as an action.
fn spawn_inventory_fetch(
    source: Arc<dyn InventorySource>,
    tx: mpsc::Sender<Action>,
) -> tokio::task::JoinHandle<()> {
    info!("Spawning inventory fetch ({})", source.name());
    tokio::spawn(async move {
        let records = load_or_empty(source.as_ref()).await;
        if tx.send(Action::InventoryLoaded(records)).is_err() {
            warn!("Failed to deliver inventory: receiver dropped");
        }
    })
}

/// Appointment requests are only recorded in the log.
fn record_booking(request: &BookingRequest) {
    match serde_json::to_string(request) {
        Ok(json) => info!(
            "Appointment request {} for vehicle {}: {}",
            request.reference, request.vehicle_id, json
        ),
        Err(e) => warn!(
            "Appointment request {} for vehicle {} could not be serialized: {}",
            request.reference, request.vehicle_id, e
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::booking::{BookingError, BookingField};
    use crate::core::filter::{ANY, PRICE_MAX, PRICE_STEP};
    use crate::core::vehicle::VehicleId;
    use crate::inventory::InventoryError;
    use crate::test_support::{StaticSource, loaded_app, sample_inventory};

    fn send(app: &mut App, tui: &mut TuiState, events: &[TuiEvent]) -> Effect {
        let mut last = Effect::None;
        for event in events {
            last = handle_event(app, tui, event.clone());
        }
        last
    }

    fn typed(text: &str) -> Vec<TuiEvent> {
        text.chars().map(TuiEvent::InputChar).collect()
    }

    fn open_second(app: &mut App, tui: &mut TuiState) {
        send(app, tui, &[TuiEvent::CursorDown, TuiEvent::Submit]);
        assert_eq!(app.selection.id(), Some(&VehicleId::from(2_i64)));
    }

    #[test]
    fn test_focus_cycles_in_tab_order() {
        assert_eq!(Focus::List.next(), Focus::Search);
        assert_eq!(Focus::Search.prev(), Focus::List);
        assert_eq!(Focus::Fuel.next(), Focus::Gearbox);

        let mut app = loaded_app();
        let mut tui = TuiState::new();
        send(&mut app, &mut tui, &[TuiEvent::Tab, TuiEvent::Tab]);
        assert_eq!(tui.focus, Focus::Fuel);
        send(&mut app, &mut tui, &[TuiEvent::BackTab]);
        assert_eq!(tui.focus, Focus::Search);
    }

    #[test]
    fn test_typing_in_list_starts_search() {
        let mut app = loaded_app();
        let mut tui = TuiState::new();
        send(&mut app, &mut tui, &typed("golf"));

        assert_eq!(tui.focus, Focus::Search);
        assert_eq!(app.filter.query, "golf");
        let titles: Vec<&str> = app.visible().iter().map(|r| r.display_title()).collect();
        assert_eq!(titles, vec!["Volkswagen Golf"]);
    }

    #[test]
    fn test_escape_returns_to_list_then_quits() {
        let mut app = loaded_app();
        let mut tui = TuiState::new();
        tui.focus = Focus::Price;

        assert_eq!(send(&mut app, &mut tui, &[TuiEvent::Escape]), Effect::None);
        assert_eq!(tui.focus, Focus::List);
        assert_eq!(send(&mut app, &mut tui, &[TuiEvent::Escape]), Effect::Quit);
    }

    #[test]
    fn test_enter_in_search_returns_to_list() {
        let mut app = loaded_app();
        let mut tui = TuiState::new();
        tui.focus = Focus::Search;
        send(&mut app, &mut tui, &[TuiEvent::Submit]);
        assert_eq!(tui.focus, Focus::List);
        assert!(!app.selection.is_open());
    }

    #[test]
    fn test_selectors_cycle_options() {
        let mut app = loaded_app();
        let mut tui = TuiState::new();

        tui.focus = Focus::Fuel;
        send(&mut app, &mut tui, &[TuiEvent::CursorRight]);
        assert_eq!(app.filter.fuel, "Diésel");
        send(&mut app, &mut tui, &[TuiEvent::CursorLeft, TuiEvent::CursorLeft]);
        assert_eq!(app.filter.fuel, "Híbrido");

        tui.focus = Focus::Gearbox;
        send(&mut app, &mut tui, &[TuiEvent::CursorLeft]);
        assert_eq!(app.filter.gearbox, "Automático");
        send(&mut app, &mut tui, &[TuiEvent::CursorRight]);
        assert_eq!(app.filter.gearbox, ANY);
    }

    #[test]
    fn test_price_slider_steps_and_clamps() {
        let mut app = loaded_app();
        let mut tui = TuiState::new();
        tui.focus = Focus::Price;

        send(&mut app, &mut tui, &[TuiEvent::CursorLeft]);
        assert_eq!(app.filter.max_price, PRICE_MAX - PRICE_STEP);
        send(&mut app, &mut tui, &[TuiEvent::PageUp, TuiEvent::PageUp]);
        assert_eq!(app.filter.max_price, PRICE_MAX);
    }

    #[test]
    fn test_enter_opens_highlighted_vehicle() {
        let mut app = loaded_app();
        let mut tui = TuiState::new();
        open_second(&mut app, &mut tui);
        assert_eq!(app.selected().map(|r| r.display_title()), Some("Seat Ibiza"));
    }

    #[test]
    fn test_open_follows_filtered_order() {
        let mut app = loaded_app();
        let mut tui = TuiState::new();
        send(&mut app, &mut tui, &typed("golf"));
        send(&mut app, &mut tui, &[TuiEvent::Escape, TuiEvent::Submit]);
        assert_eq!(app.selection.id(), Some(&VehicleId::from(3_i64)));
    }

    #[test]
    fn test_escape_closes_drawer_without_quitting() {
        let mut app = loaded_app();
        let mut tui = TuiState::new();
        open_second(&mut app, &mut tui);

        assert_eq!(send(&mut app, &mut tui, &[TuiEvent::Escape]), Effect::None);
        assert!(!app.selection.is_open());
    }

    #[test]
    fn test_force_quit_from_drawer() {
        let mut app = loaded_app();
        let mut tui = TuiState::new();
        open_second(&mut app, &mut tui);
        assert_eq!(send(&mut app, &mut tui, &[TuiEvent::ForceQuit]), Effect::Quit);
    }

    #[test]
    fn test_drawer_keys_do_not_touch_filters() {
        let mut app = loaded_app();
        let mut tui = TuiState::new();
        open_second(&mut app, &mut tui);

        send(&mut app, &mut tui, &typed("Ana"));
        assert!(app.filter.query.is_empty());
        assert_eq!(tui.detail.form.field(BookingField::Name).value(), "Ana");
    }

    #[test]
    fn test_rejected_booking_focuses_offending_field() {
        let mut app = loaded_app();
        let mut tui = TuiState::new();
        open_second(&mut app, &mut tui);

        send(&mut app, &mut tui, &typed("Ana"));
        let effect = send(&mut app, &mut tui, &[TuiEvent::Submit]);

        assert_eq!(effect, Effect::None);
        assert_eq!(app.booking_error, Some(BookingError::MissingPhone));
        assert_eq!(tui.detail.form.active, BookingField::Phone);
        assert!(!app.booking.is_submitted());
    }

    #[test]
    fn test_valid_booking_is_recorded_once() {
        let mut app = loaded_app();
        let mut tui = TuiState::new();
        open_second(&mut app, &mut tui);

        let mut events = typed("Ana");
        events.push(TuiEvent::Tab);
        events.extend(typed("+34 600 000 000"));
        events.push(TuiEvent::Tab);
        events.extend(typed("2030-01-15"));
        send(&mut app, &mut tui, &events);

        match send(&mut app, &mut tui, &[TuiEvent::Submit]) {
            Effect::RecordBooking(request) => {
                assert_eq!(request.vehicle_id, VehicleId::from(2_i64));
                assert_eq!(request.name, "Ana");
            }
            other => panic!("expected RecordBooking, got {other:?}"),
        }
        assert!(app.booking.is_submitted());

        // Terminal state: further submits do nothing
        assert_eq!(send(&mut app, &mut tui, &[TuiEvent::Submit]), Effect::None);
    }

    #[test]
    fn test_reopening_starts_fresh_form() {
        let mut app = loaded_app();
        let mut tui = TuiState::new();
        open_second(&mut app, &mut tui);
        send(&mut app, &mut tui, &typed("Ana"));
        send(&mut app, &mut tui, &[TuiEvent::Escape, TuiEvent::Submit]);

        assert!(app.selection.is_open());
        assert!(tui.detail.form.field(BookingField::Name).value().is_empty());
    }

    #[test]
    fn test_apply_effect() {
        assert!(apply_effect(Effect::Quit));
        assert!(!apply_effect(Effect::None));
    }

    #[tokio::test]
    async fn test_inventory_fetch_reports_records() {
        let (tx, rx) = mpsc::channel();
        let source = Arc::new(StaticSource(Ok(sample_inventory())));
        spawn_inventory_fetch(source, tx).await.unwrap();

        match rx.try_recv() {
            Ok(Action::InventoryLoaded(records)) => assert_eq!(records.len(), 6),
            other => panic!("expected InventoryLoaded, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_inventory_fetch_failure_reports_empty() {
        let (tx, rx) = mpsc::channel();
        let source = Arc::new(StaticSource(Err(InventoryError::Status { status: 500 })));
        spawn_inventory_fetch(source, tx).await.unwrap();

        assert_eq!(rx.try_recv(), Ok(Action::InventoryLoaded(Vec::new())));
    }
}
