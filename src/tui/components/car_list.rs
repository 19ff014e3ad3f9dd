//! # CarList Component
//!
//! The filtered inventory as a list of three-line cards:
//!
//! ```text
//! ▶ Seat Ibiza                                  15.000 €
//!   2019 · 64.000 km · Puertollano
//!   [Gasolina] [Manual]  95 CV · 1.0 TSI
//! ```
//!
//! `CarListState` keeps the highlighted row across frames. The list it
//! indexes is re-derived from the filters every frame, so the state is
//! re-synced to the current length before every render and every event.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Padding, Paragraph, Wrap};
use unicode_width::UnicodeWidthStr;

use crate::core::format::{format_power, format_price, summary_line};
use crate::core::vehicle::VehicleRecord;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

pub const EMPTY_MESSAGE: &str = "No hay vehículos que coincidan con los filtros.";
pub const LOADING_MESSAGE: &str = "Cargando inventario...";

/// Rows moved by PageUp/PageDown.
const PAGE: usize = 5;

/// Events emitted by the car list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListEvent {
    /// Enter on the card at this index of the visible list.
    Open(usize),
}

/// Persistent state for the car list.
#[derive(Default)]
pub struct CarListState {
    pub list_state: ListState,
    len: usize,
}

impl CarListState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clamp the highlight to a list of `len` cards.
    pub fn sync(&mut self, len: usize) {
        self.len = len;
        if len == 0 {
            self.list_state.select(None);
        } else {
            let index = self.list_state.selected().unwrap_or(0).min(len - 1);
            self.list_state.select(Some(index));
        }
    }

    pub fn selected(&self) -> Option<usize> {
        self.list_state.selected()
    }

    fn move_by(&mut self, delta: isize) {
        if self.len == 0 {
            return;
        }
        let current = self.list_state.selected().unwrap_or(0);
        let target = current.saturating_add_signed(delta).min(self.len - 1);
        self.list_state.select(Some(target));
    }
}

impl EventHandler for CarListState {
    type Event = ListEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::CursorUp | TuiEvent::ScrollUp => self.move_by(-1),
            TuiEvent::CursorDown | TuiEvent::ScrollDown => self.move_by(1),
            TuiEvent::PageUp => self.move_by(-(PAGE as isize)),
            TuiEvent::PageDown => self.move_by(PAGE as isize),
            TuiEvent::CursorHome => self.move_by(isize::MIN),
            TuiEvent::CursorEnd => self.move_by(isize::MAX),
            TuiEvent::Submit => return self.selected().map(ListEvent::Open),
            _ => {}
        }
        None
    }
}

/// Transient render wrapper for the car list.
pub struct CarList<'a> {
    state: &'a mut CarListState,
    records: &'a [&'a VehicleRecord],
    is_loading: bool,
    focused: bool,
}

impl<'a> CarList<'a> {
    pub fn new(
        state: &'a mut CarListState,
        records: &'a [&'a VehicleRecord],
        is_loading: bool,
        focused: bool,
    ) -> Self {
        Self {
            state,
            records,
            is_loading,
            focused,
        }
    }
}

impl Component for CarList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.state.sync(self.records.len());

        let border = if self.focused {
            Color::Gray
        } else {
            Color::DarkGray
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border))
            .title(format!(" Vehículos ({}) ", self.records.len()))
            .padding(Padding::horizontal(1));

        if self.records.is_empty() {
            let message = if self.is_loading {
                LOADING_MESSAGE
            } else {
                EMPTY_MESSAGE
            };
            let empty = Paragraph::new(message)
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true })
                .block(block);
            frame.render_widget(empty, area);
            return;
        }

        // Title and price share the first line; leave room for the highlight symbol
        let card_width = area.width.saturating_sub(6) as usize;
        let items: Vec<ListItem> = self
            .records
            .iter()
            .map(|record| ListItem::new(card_lines(record, card_width)))
            .collect();

        let highlight = if self.focused {
            Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD)
        } else {
            Style::default().add_modifier(Modifier::BOLD)
        };
        let list = List::new(items)
            .block(block)
            .highlight_style(highlight)
            .highlight_symbol("▶ ");

        frame.render_stateful_widget(list, area, &mut self.state.list_state);
    }
}

/// The three lines of one card.
pub fn card_lines(record: &VehicleRecord, width: usize) -> Vec<Line<'static>> {
    let title = record.display_title().to_string();
    let price = format_price(record.price);
    let gap = width
        .saturating_sub(title.width())
        .saturating_sub(price.width())
        .max(2);

    let headline = Line::from(vec![
        Span::styled(title, Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(" ".repeat(gap)),
        Span::styled(
            price,
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ),
    ]);

    let summary = Line::styled(summary_line(record), Style::default().fg(Color::Gray));

    let badge = Style::default().fg(Color::Black).bg(Color::Gray);
    let mut tags = Vec::new();
    for value in [record.fuel.as_deref(), record.gearbox.as_deref()]
        .into_iter()
        .flatten()
    {
        tags.push(Span::styled(format!(" {value} "), badge));
        tags.push(Span::raw(" "));
    }
    let mut chips = Vec::new();
    if record.power.is_some() {
        chips.push(format_power(record.power));
    }
    if let Some(engine) = &record.engine {
        chips.push(engine.clone());
    }
    if !chips.is_empty() {
        tags.push(Span::styled(
            format!(" {}", chips.join(" · ")),
            Style::default().fg(Color::DarkGray),
        ));
    }

    vec![headline, summary, Line::from(tags)]
}
