//! # TextField Component
//!
//! Single-line text input used by the search box and the booking form.
//!
//! ## State Management
//!
//! The buffer and cursor are internal state. `focused` and `placeholder` are
//! props set by the parent each frame. When the text is wider than the field
//! the view scrolls horizontally so the cursor stays visible.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::Paragraph;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// High-level events emitted by a TextField
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldEvent {
    /// Buffer content changed
    Changed,
    /// Enter pressed
    Submit,
}

pub struct TextField {
    /// Text buffer (Internal State)
    pub buffer: String,
    /// Cursor position as byte offset in buffer (0..=buffer.len())
    cursor: usize,
    /// Whether this field owns the terminal cursor (Prop)
    pub focused: bool,
    /// Dimmed hint shown while empty (Prop)
    pub placeholder: &'static str,
}

impl TextField {
    pub fn new(placeholder: &'static str) -> Self {
        Self {
            buffer: String::new(),
            cursor: 0,
            focused: false,
            placeholder,
        }
    }

    pub fn value(&self) -> &str {
        &self.buffer
    }

    fn insert_str(&mut self, text: &str) {
        self.buffer.insert_str(self.cursor, text);
        self.cursor += text.len();
    }

    /// Byte offset where the visible window starts, and the cursor column
    /// inside it, for a field `width` cells wide.
    fn visible_window(&self, width: usize) -> (usize, u16) {
        let before = &self.buffer[..self.cursor];
        let mut cursor_col = before.width();
        let mut start = 0;
        for (i, ch) in before.char_indices() {
            if cursor_col < width {
                break;
            }
            cursor_col -= ch.width().unwrap_or(0);
            start = i + ch.len_utf8();
        }
        (start, cursor_col as u16)
    }
}

impl Component for TextField {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        if self.buffer.is_empty() {
            let hint = Paragraph::new(self.placeholder)
                .style(Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC));
            frame.render_widget(hint, area);
            if self.focused {
                frame.set_cursor_position((area.x, area.y));
            }
            return;
        }

        let (start, cursor_col) = self.visible_window(area.width as usize);
        let text = Paragraph::new(&self.buffer[start..]);
        frame.render_widget(text, area);

        if self.focused {
            frame.set_cursor_position((area.x + cursor_col, area.y));
        }
    }
}

impl EventHandler for TextField {
    type Event = FieldEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) if !c.is_control() => {
                self.buffer.insert(self.cursor, *c);
                self.cursor += c.len_utf8();
                Some(FieldEvent::Changed)
            }
            TuiEvent::Paste(text) => {
                let single_line: String = text
                    .chars()
                    .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
                    .filter(|c| !c.is_control())
                    .collect();
                if single_line.is_empty() {
                    return None;
                }
                self.insert_str(&single_line);
                Some(FieldEvent::Changed)
            }
            TuiEvent::Backspace => {
                if self.cursor > 0 {
                    let prev = prev_char_boundary(&self.buffer, self.cursor);
                    self.buffer.drain(prev..self.cursor);
                    self.cursor = prev;
                    Some(FieldEvent::Changed)
                } else {
                    None
                }
            }
            TuiEvent::Delete => {
                if self.cursor < self.buffer.len() {
                    let next = next_char_boundary(&self.buffer, self.cursor);
                    self.buffer.drain(self.cursor..next);
                    Some(FieldEvent::Changed)
                } else {
                    None
                }
            }
            TuiEvent::CursorLeft => {
                self.cursor = prev_char_boundary(&self.buffer, self.cursor);
                None
            }
            TuiEvent::CursorRight => {
                self.cursor = next_char_boundary(&self.buffer, self.cursor);
                None
            }
            TuiEvent::CursorHome => {
                self.cursor = 0;
                None
            }
            TuiEvent::CursorEnd => {
                self.cursor = self.buffer.len();
                None
            }
            TuiEvent::Submit => Some(FieldEvent::Submit),
            _ => None,
        }
    }
}

/// Find the byte offset of the previous character boundary before `pos` in `text`.
fn prev_char_boundary(text: &str, pos: usize) -> usize {
    text[..pos]
        .char_indices()
        .next_back()
        .map(|(i, _)| i)
        .unwrap_or(0)
}

/// Find the byte offset of the next character boundary after `pos` in `text`.
fn next_char_boundary(text: &str, pos: usize) -> usize {
    text[pos..]
        .char_indices()
        .nth(1)
        .map(|(i, _)| pos + i)
        .unwrap_or(text.len())
}
