//! # BookingForm Component
//!
//! The "Reservar cita" form inside the detail drawer: four single-line
//! fields, an inline error line and a submit button.
//!
//! `BookingFormState` owns the field buffers and which field is active.
//! Validation is not done here; Enter hands the raw values to the core as a
//! `BookingForm` and the result comes back through `App::booking_error`.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::core::booking::{BookingError, BookingField, BookingForm};
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::text_field::TextField;
use crate::tui::event::TuiEvent;

/// Rows taken by the form: one per field, the error line and the button.
pub const FORM_HEIGHT: u16 = BookingField::ALL.len() as u16 + 2;

const LABEL_WIDTH: u16 = 17;

/// Events emitted by the booking form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookingEvent {
    Submit(BookingForm),
}

/// Persistent state for the booking form.
pub struct BookingFormState {
    fields: [TextField; 4],
    pub active: BookingField,
}

impl BookingFormState {
    pub fn new() -> Self {
        Self {
            fields: BookingField::ALL.map(|field| TextField::new(field.placeholder())),
            active: BookingField::Name,
        }
    }

    fn index(field: BookingField) -> usize {
        match field {
            BookingField::Name => 0,
            BookingField::Phone => 1,
            BookingField::Date => 2,
            BookingField::Notes => 3,
        }
    }

    pub fn field(&self, field: BookingField) -> &TextField {
        &self.fields[Self::index(field)]
    }

    /// Current values as typed.
    pub fn form(&self) -> BookingForm {
        let mut form = BookingForm::default();
        for field in BookingField::ALL {
            *form.field_mut(field) = self.field(field).value().to_string();
        }
        form
    }

    /// Move the caret to `field`, e.g. the one a rejected submit points at.
    pub fn focus(&mut self, field: BookingField) {
        self.active = field;
    }
}

impl Default for BookingFormState {
    fn default() -> Self {
        Self::new()
    }
}

impl EventHandler for BookingFormState {
    type Event = BookingEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::Tab => {
                self.active = self.active.next();
                None
            }
            TuiEvent::BackTab => {
                self.active = self.active.prev();
                None
            }
            TuiEvent::Submit => Some(BookingEvent::Submit(self.form())),
            _ => {
                self.fields[Self::index(self.active)].handle_event(event);
                None
            }
        }
    }
}

/// Transient render wrapper for the booking form.
pub struct BookingFormView<'a> {
    state: &'a mut BookingFormState,
    error: Option<&'a BookingError>,
}

impl<'a> BookingFormView<'a> {
    pub fn new(state: &'a mut BookingFormState, error: Option<&'a BookingError>) -> Self {
        Self { state, error }
    }
}

impl Component for BookingFormView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let rows = Layout::vertical([Constraint::Length(1); FORM_HEIGHT as usize]).split(area);
        let error_field = self.error.map(BookingError::field);

        for (row, field) in rows.iter().zip(BookingField::ALL) {
            let [label_area, input_area] =
                Layout::horizontal([Constraint::Length(LABEL_WIDTH), Constraint::Min(0)])
                    .areas(*row);

            let active = self.state.active == field;
            let label_style = if error_field == Some(field) {
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
            } else if active {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            let marker = if field == BookingField::Notes { "" } else { " *" };
            frame.render_widget(
                Paragraph::new(Line::from(vec![
                    Span::styled(field.label(), label_style),
                    Span::styled(marker, Style::default().fg(Color::DarkGray)),
                ])),
                label_area,
            );

            let input = &mut self.state.fields[BookingFormState::index(field)];
            input.focused = active;
            input.render(frame, input_area);
        }

        let fields = BookingField::ALL.len();
        if let (Some(err), Some(error_row)) = (self.error, rows.get(fields)) {
            frame.render_widget(
                Paragraph::new(Span::styled(err.to_string(), Style::default().fg(Color::Red))),
                *error_row,
            );
        }
        if let Some(button_row) = rows.get(fields + 1) {
            frame.render_widget(
                Paragraph::new(Line::from(vec![
                    Span::styled(
                        "[ Reservar cita ]",
                        Style::default()
                            .fg(Color::Black)
                            .bg(Color::White)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled("  Enter", Style::default().fg(Color::DarkGray)),
                ])),
                *button_row,
            );
        }
    }
}
