//! # FilterBar Component
//!
//! Search box, fuel and gearbox selectors, and the max-price slider.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `FilterBarState` lives in `TuiState` and owns the search field buffer
//! - `FilterBar` is created each frame with borrowed state and the current
//!   filter values as props
//!
//! The bar never edits `FilterState` directly. It emits `FilterEvent`s that
//! the event loop turns into `Action`s for `update()`.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Gauge, Padding, Paragraph};

use crate::core::filter::{ANY, FilterState, PRICE_MAX, PRICE_MIN};
use crate::core::format::format_price;
use crate::tui::Focus;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::text_field::{FieldEvent, TextField};
use crate::tui::event::TuiEvent;

/// Slider notches moved by PageUp/PageDown.
pub const PRICE_PAGE: i32 = 10;

pub const SEARCH_PLACEHOLDER: &str = "Buscar por modelo, motor, color...";

/// Events emitted by the filter bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterEvent {
    QueryChanged(String),
    FuelStep(i32),
    GearboxStep(i32),
    PriceStep(i32),
    /// Enter in the search box: hand focus to the list.
    Done,
}

/// Persistent state for the filter bar.
pub struct FilterBarState {
    pub search: TextField,
}

impl FilterBarState {
    pub fn new() -> Self {
        Self {
            search: TextField::new(SEARCH_PLACEHOLDER),
        }
    }

    /// Handle an event for whichever control has focus.
    pub fn handle_event(&mut self, focus: Focus, event: &TuiEvent) -> Option<FilterEvent> {
        match focus {
            Focus::Search => match self.search.handle_event(event)? {
                FieldEvent::Changed => Some(FilterEvent::QueryChanged(self.search.buffer.clone())),
                FieldEvent::Submit => Some(FilterEvent::Done),
            },
            Focus::Fuel => selector_step(event).map(FilterEvent::FuelStep),
            Focus::Gearbox => selector_step(event).map(FilterEvent::GearboxStep),
            Focus::Price => match event {
                TuiEvent::CursorLeft | TuiEvent::CursorDown => Some(FilterEvent::PriceStep(-1)),
                TuiEvent::CursorRight | TuiEvent::CursorUp => Some(FilterEvent::PriceStep(1)),
                TuiEvent::PageDown => Some(FilterEvent::PriceStep(-PRICE_PAGE)),
                TuiEvent::PageUp => Some(FilterEvent::PriceStep(PRICE_PAGE)),
                _ => None,
            },
            Focus::List => None,
        }
    }
}

impl Default for FilterBarState {
    fn default() -> Self {
        Self::new()
    }
}

fn selector_step(event: &TuiEvent) -> Option<i32> {
    match event {
        TuiEvent::CursorLeft | TuiEvent::CursorUp => Some(-1),
        TuiEvent::CursorRight | TuiEvent::CursorDown | TuiEvent::InputChar(' ') => Some(1),
        _ => None,
    }
}

/// The option `step` places away from `current`, wrapping around.
///
/// A value that is no longer offered (the inventory changed underneath it)
/// steps from the start of the list.
pub fn cycle_option(options: &[String], current: &str, step: i32) -> String {
    if options.is_empty() {
        return ANY.to_string();
    }
    let len = options.len() as i64;
    let index = options
        .iter()
        .position(|option| option == current)
        .unwrap_or(0) as i64;
    let next = (index + i64::from(step)).rem_euclid(len) as usize;
    options[next].clone()
}

/// Transient render wrapper for the filter bar.
pub struct FilterBar<'a> {
    state: &'a mut FilterBarState,
    filter: &'a FilterState,
    focus: Focus,
}

impl<'a> FilterBar<'a> {
    pub fn new(
        state: &'a mut FilterBarState,
        filter: &'a FilterState,
        focus: Focus,
    ) -> Self {
        Self {
            state,
            filter,
            focus,
        }
    }

    fn label(&self, text: &'static str, control: Focus) -> Span<'static> {
        if self.focus == control {
            Span::styled(
                text,
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            )
        } else {
            Span::styled(text, Style::default().fg(Color::Gray))
        }
    }

    fn selector(&self, value: &str, control: Focus) -> Vec<Span<'static>> {
        let value_style = if self.focus == control {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default().add_modifier(Modifier::BOLD)
        };
        let arrows = Style::default().fg(Color::DarkGray);
        vec![
            Span::styled("‹ ", arrows),
            Span::styled(value.to_string(), value_style),
            Span::styled(" ›", arrows),
        ]
    }
}

impl Component for FilterBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Filtros ")
            .padding(Padding::horizontal(1));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [search_row, selector_row, price_row] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(inner);

        // Search
        let [search_label, search_input] =
            Layout::horizontal([Constraint::Length(13), Constraint::Min(0)]).areas(search_row);
        frame.render_widget(
            Paragraph::new(self.label("Buscar", Focus::Search)),
            search_label,
        );
        self.state.search.focused = self.focus == Focus::Search;
        self.state.search.render(frame, search_input);

        // Selectors
        let mut spans = vec![self.label("Combustible  ", Focus::Fuel)];
        spans.extend(self.selector(&self.filter.fuel, Focus::Fuel));
        spans.push(Span::raw("     "));
        spans.push(self.label("Cambio  ", Focus::Gearbox));
        spans.extend(self.selector(&self.filter.gearbox, Focus::Gearbox));
        frame.render_widget(Paragraph::new(Line::from(spans)), selector_row);

        // Price slider
        let [price_label, price_gauge] =
            Layout::horizontal([Constraint::Length(13), Constraint::Min(0)]).areas(price_row);
        frame.render_widget(
            Paragraph::new(self.label("Precio máx.", Focus::Price)),
            price_label,
        );
        let gauge_color = if self.focus == Focus::Price {
            Color::Yellow
        } else {
            Color::Green
        };
        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(gauge_color).bg(Color::Black))
            .ratio(price_ratio(self.filter.max_price))
            .label(format_price(Some(f64::from(self.filter.max_price))));
        frame.render_widget(gauge, price_gauge);
    }
}

/// Slider position of `max_price` in `0.0..=1.0`.
fn price_ratio(max_price: u32) -> f64 {
    let clamped = max_price.clamp(PRICE_MIN, PRICE_MAX);
    f64::from(clamped - PRICE_MIN) / f64::from(PRICE_MAX - PRICE_MIN)
}
