//! # TitleBar Component
//!
//! Two-line header: brand and status on top, contact links below.
//!
//! ## Design Decisions
//!
//! ### Stateless Component
//!
//! TitleBar is purely presentational. It borrows everything it shows from the
//! core `App` for the duration of one frame:
//!
//! ```rust,ignore
//! let mut title_bar = TitleBar::new(&app.contact, &app.status_message);
//! title_bar.render(frame, area);
//! ```
//!
//! ### Props-in-Struct Pattern
//!
//! Props live in struct fields rather than render() parameters so the
//! component fits the fixed `Component::render` signature.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::core::contact::ContactLinks;
use crate::tui::component::Component;

pub const BRAND: &str = "rrrvehiculos";
pub const TAGLINE: &str = "Coches de ocasión · Ciudad Real";

pub struct TitleBar<'a> {
    /// Phone and WhatsApp numbers (Prop)
    pub contact: &'a ContactLinks,
    /// Transient status, e.g. "Cargando inventario..." (Prop)
    pub status_message: &'a str,
}

impl<'a> TitleBar<'a> {
    pub fn new(contact: &'a ContactLinks, status_message: &'a str) -> Self {
        Self {
            contact,
            status_message,
        }
    }
}

impl Component for TitleBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [brand_row, contact_row] =
            Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(area);

        let brand = Line::from(vec![
            Span::styled(
                BRAND,
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(TAGLINE, Style::default().fg(Color::Gray)),
        ]);
        frame.render_widget(Paragraph::new(brand), brand_row);

        if !self.status_message.is_empty() {
            let status = Paragraph::new(Span::styled(
                self.status_message,
                Style::default().fg(Color::Yellow),
            ))
            .alignment(Alignment::Right);
            frame.render_widget(status, brand_row);
        }

        let contact = Line::from(vec![
            Span::styled(
                format!("Llamar {}", self.contact.phone()),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(" ({})", self.contact.tel_uri()),
                Style::default().fg(Color::DarkGray),
            ),
            Span::raw("   "),
            Span::styled("WhatsApp ", Style::default().fg(Color::Green)),
            Span::styled(
                self.contact.whatsapp_uri(),
                Style::default().fg(Color::Green).add_modifier(Modifier::UNDERLINED),
            ),
        ]);
        frame.render_widget(Paragraph::new(contact), contact_row);
    }
}
