//! # CarDetail Component
//!
//! The drawer shown over the list while a vehicle is open.
//!
//! ```text
//! ┌ Ficha ───────────────────────────────────────────────────────────┐
//! │ 15.000 €                          │ ¿Te interesa?                │
//! │ Seat Ibiza                        │ Llamar 666 27 07 07          │
//! │ 2019 · 64.000 km · Puertollano    │ WhatsApp https://wa.me/...   │
//! │ ...scrollable specs...            │ Reservar cita (form)         │
//! └ Esc Cerrar ──────────────────────────────────────────────────────┘
//! ```
//!
//! The left column is a `ScrollView` over pre-wrapped lines. The aside
//! with contact links and the booking form is rendered straight into the
//! frame so its text fields can own the terminal cursor.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect, Size};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::core::booking::{BookingError, BookingStatus};
use crate::core::contact::ContactLinks;
use crate::core::format::{format_plain, format_power, format_price, format_text, summary_line};
use crate::core::vehicle::VehicleRecord;
use crate::tui::component::Component;
use crate::tui::components::booking_form::{BookingFormState, BookingFormView, FORM_HEIGHT};
use crate::tui::event::TuiEvent;

/// Drawer width from which specs and aside sit side by side.
const SIDE_BY_SIDE_MIN_WIDTH: u16 = 84;
const ASIDE_WIDTH: u16 = 46;
/// Contact block (4 rows), a gap and the form heading.
const ASIDE_HEADER_HEIGHT: u16 = 6;

/// Width of one stat column (label + value) when two fit on a row.
const STAT_LABEL_WIDTH: usize = 13;
const TWO_COLUMN_MIN_WIDTH: usize = 52;

pub const HELP: &str = " Esc Cerrar  ↑↓ Desplazar  Tab Campo  Enter Reservar ";

/// Persistent state for the detail drawer.
pub struct CarDetailState {
    pub scroll: ScrollViewState,
    pub form: BookingFormState,
}

impl CarDetailState {
    pub fn new() -> Self {
        Self {
            scroll: ScrollViewState::default(),
            form: BookingFormState::new(),
        }
    }

    /// Fresh scroll position and empty form, for a newly opened vehicle.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Scroll the specifications column. Returns false for events it does not use.
    pub fn scroll(&mut self, event: &TuiEvent) -> bool {
        match event {
            TuiEvent::CursorUp | TuiEvent::ScrollUp => self.scroll.scroll_up(),
            TuiEvent::CursorDown | TuiEvent::ScrollDown => self.scroll.scroll_down(),
            TuiEvent::PageUp => self.scroll.scroll_page_up(),
            TuiEvent::PageDown => self.scroll.scroll_page_down(),
            _ => return false,
        }
        true
    }
}

impl Default for CarDetailState {
    fn default() -> Self {
        Self::new()
    }
}

/// Transient render wrapper for the detail drawer.
pub struct CarDetail<'a> {
    state: &'a mut CarDetailState,
    record: &'a VehicleRecord,
    booking: &'a BookingStatus,
    error: Option<&'a BookingError>,
    contact: &'a ContactLinks,
}

impl<'a> CarDetail<'a> {
    pub fn new(
        state: &'a mut CarDetailState,
        record: &'a VehicleRecord,
        booking: &'a BookingStatus,
        error: Option<&'a BookingError>,
        contact: &'a ContactLinks,
    ) -> Self {
        Self {
            state,
            record,
            booking,
            error,
            contact,
        }
    }

    fn render_specs(&mut self, frame: &mut Frame, area: Rect) {
        // Leave a column for the scrollbar
        let content_width = area.width.saturating_sub(1);
        let lines = detail_lines(self.record, content_width as usize);
        let height = lines.len() as u16;

        let mut scroll_view = ScrollView::new(Size::new(content_width, height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);
        scroll_view.render_widget(
            Paragraph::new(lines),
            Rect::new(0, 0, content_width, height),
        );
        frame.render_stateful_widget(scroll_view, area, &mut self.state.scroll);
    }

    fn render_aside(&mut self, frame: &mut Frame, area: Rect) {
        let [header_area, body_area] = Layout::vertical([
            Constraint::Length(ASIDE_HEADER_HEIGHT),
            Constraint::Min(0),
        ])
        .areas(area);

        let dim = Style::default().fg(Color::DarkGray);
        let header = vec![
            Line::styled(
                "¿Te interesa?",
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Line::styled("Reserva una cita o llámanos ahora.", Style::default().fg(Color::Gray)),
            Line::from(vec![
                Span::styled(
                    format!("Llamar {}", self.contact.phone()),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::styled(format!("  {}", self.contact.tel_uri()), dim),
            ]),
            Line::from(vec![
                Span::styled("WhatsApp ", Style::default().fg(Color::Green)),
                Span::styled(
                    self.contact.whatsapp_uri(),
                    Style::default().fg(Color::Green).add_modifier(Modifier::UNDERLINED),
                ),
            ]),
            Line::raw(""),
            Line::styled(
                "Reservar cita",
                Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ),
        ];
        frame.render_widget(Paragraph::new(header), header_area);

        match self.booking {
            BookingStatus::Editing => {
                let [form_area, _] =
                    Layout::vertical([Constraint::Length(FORM_HEIGHT), Constraint::Min(0)])
                        .areas(body_area);
                BookingFormView::new(&mut self.state.form, self.error).render(frame, form_area);
            }
            BookingStatus::Submitted(request) => {
                let confirmation = vec![
                    Line::styled(
                        "¡Solicitud enviada!",
                        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
                    ),
                    Line::raw(confirmation_text(self.record)),
                    Line::styled(format!("Ref. {}", request.reference), dim),
                ];
                frame.render_widget(
                    Paragraph::new(confirmation).wrap(Wrap { trim: true }),
                    body_area,
                );
            }
        }
    }
}

impl Component for CarDetail<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(Clear, area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Gray))
            .title(" Ficha ")
            .title_bottom(Line::from(HELP).centered())
            .padding(Padding::horizontal(1));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let (specs_area, aside_area) = if inner.width >= SIDE_BY_SIDE_MIN_WIDTH {
            let [specs, _, aside] = Layout::horizontal([
                Constraint::Min(0),
                Constraint::Length(2),
                Constraint::Length(ASIDE_WIDTH),
            ])
            .areas(inner);
            (specs, aside)
        } else {
            let [specs, aside] = Layout::vertical([
                Constraint::Min(0),
                Constraint::Length(ASIDE_HEADER_HEIGHT + FORM_HEIGHT),
            ])
            .areas(inner);
            (specs, aside)
        };

        self.render_specs(frame, specs_area);
        self.render_aside(frame, aside_area);
    }
}

/// "Te contactaremos pronto..." message shown after a valid request.
pub fn confirmation_text(record: &VehicleRecord) -> String {
    format!(
        "Te contactaremos pronto para confirmar tu cita para ver el {}.",
        record.display_title()
    )
}

/// Label/value pairs of the stats grid, in display order.
pub fn stats(record: &VehicleRecord) -> [(&'static str, String); 6] {
    [
        ("Combustible", format_text(record.fuel.as_deref())),
        ("Cambio", format_text(record.gearbox.as_deref())),
        ("Potencia", format_power(record.power)),
        ("Motor", format_text(record.engine.as_deref())),
        ("Puertas", format_plain(record.doors)),
        ("Consumo", format_text(record.consumption.as_deref())),
    ]
}

/// Every line of the specifications column, wrapped to `width`.
pub fn detail_lines(record: &VehicleRecord, width: usize) -> Vec<Line<'static>> {
    let width = width.max(10);
    let bold = Style::default().add_modifier(Modifier::BOLD);
    let heading = Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
    let label = Style::default().fg(Color::Gray);

    let mut lines = vec![
        Line::styled(
            format_price(record.price),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ),
        Line::styled(record.display_title().to_string(), bold),
        Line::styled(summary_line(record), label),
    ];

    if !record.highlights.is_empty() {
        lines.push(Line::raw(""));
        let joined = record.highlights.join(" · ");
        for row in textwrap::wrap(&joined, width) {
            lines.push(Line::styled(row.into_owned(), Style::default().fg(Color::Cyan)));
        }
    }

    lines.push(Line::raw(""));
    lines.push(Line::styled("Ficha técnica", heading));
    let stats = stats(record);
    let per_row = if width >= TWO_COLUMN_MIN_WIDTH { 2 } else { 1 };
    let column_width = width / per_row;
    for row in stats.chunks(per_row) {
        let mut spans = Vec::new();
        for (name, value) in row {
            let value_width = column_width.saturating_sub(STAT_LABEL_WIDTH);
            spans.push(Span::styled(format!("{name:<STAT_LABEL_WIDTH$}"), label));
            spans.push(Span::styled(format!("{value:<value_width$}"), bold));
        }
        lines.push(Line::from(spans));
    }

    if !record.features.is_empty() {
        lines.push(Line::raw(""));
        lines.push(Line::styled("Equipamiento", heading));
        let options = textwrap::Options::new(width)
            .initial_indent("• ")
            .subsequent_indent("  ");
        for feature in &record.features {
            for row in textwrap::wrap(feature, &options) {
                lines.push(Line::raw(row.into_owned()));
            }
        }
    }

    if let Some(cover) = record.cover_image() {
        lines.push(Line::raw(""));
        lines.push(Line::styled("Fotos", heading));
        lines.push(Line::from(vec![
            Span::styled("Portada  ", label),
            Span::raw(cover.to_string()),
        ]));
        for (i, url) in record.gallery().iter().enumerate() {
            lines.push(Line::from(vec![
                Span::styled(format!("Foto {}   ", i + 2), label),
                Span::raw(url.clone()),
            ]));
        }
    }

    lines
}
