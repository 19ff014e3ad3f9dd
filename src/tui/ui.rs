use crate::core::filter::PRICE_STEP;
use crate::core::format::format_price;
use crate::core::state::App;
use crate::tui::component::Component;
use crate::tui::components::filter_bar::PRICE_PAGE;
use crate::tui::components::{BRAND, CarDetail, CarList, FilterBar, TAGLINE, TitleBar};
use crate::tui::{Focus, TuiState};

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

/// Opening hours shown in the footer.
pub const HOURS: &str = "L-V 10:00-14:00 / 16:00-20:00";

const FILTER_HEIGHT: u16 = 5;
/// Below this width the drawer covers the whole body.
const DRAWER_FULL_WIDTH_BELOW: u16 = 100;

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(2), Length(FILTER_HEIGHT), Min(0), Length(2)]);
    let [title_area, filter_area, list_area, footer_area] = layout.areas(frame.area());
    let drawer_open = app.selection.is_open();

    TitleBar::new(&app.contact, &app.status_message).render(frame, title_area);

    // The drawer owns the keyboard while open, so nothing underneath looks focused
    let focus = if drawer_open { None } else { Some(tui.focus) };

    FilterBar::new(
        &mut tui.filter_bar,
        &app.filter,
        focus.unwrap_or(Focus::List),
    )
    .render(frame, filter_area);

    let visible = app.visible();
    CarList::new(
        &mut tui.car_list,
        &visible,
        app.is_loading,
        focus == Some(Focus::List),
    )
    .render(frame, list_area);

    draw_footer(frame, footer_area, app, focus);

    if let Some(record) = app.selected() {
        let body = filter_area.union(list_area);
        let area = drawer_rect(body);
        CarDetail::new(
            &mut tui.detail,
            record,
            &app.booking,
            app.booking_error.as_ref(),
            &app.contact,
        )
        .render(frame, area);
    }
}

fn draw_footer(frame: &mut Frame, area: Rect, app: &App, focus: Option<Focus>) {
    let [info_row, help_row] =
        Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(area);

    let dim = Style::default().fg(Color::DarkGray);
    let info = Line::from(vec![
        Span::styled(BRAND, Style::default().add_modifier(Modifier::BOLD)),
        Span::styled(format!(" · Ciudad Real · {HOURS}"), Style::default().fg(Color::Gray)),
        Span::raw("   "),
        Span::styled("¿Quieres vender tu coche? Tasación sin compromiso: ", dim),
        Span::styled(app.contact.tel_uri(), Style::default().fg(Color::Gray)),
        Span::styled(" · ", dim),
        Span::styled(app.contact.whatsapp_uri(), Style::default().fg(Color::Green)),
    ]);
    frame.render_widget(Paragraph::new(info), info_row);

    frame.render_widget(
        Paragraph::new(Span::styled(key_help(focus), dim)),
        help_row,
    );
}

/// Key hints for the current focus (`None` while the drawer is open).
pub fn key_help(focus: Option<Focus>) -> String {
    match focus {
        None => "Esc Cerrar ficha  Tab Campo  Enter Reservar  ↑↓ Desplazar  Ctrl+C Salir".into(),
        Some(Focus::List) => {
            "↑↓ Mover  Enter Ver ficha  Tab Filtros  Escribe para buscar  Esc Salir".into()
        }
        Some(Focus::Search) => "Escribe para buscar  Enter/Esc Lista  Tab Siguiente filtro".into(),
        Some(Focus::Fuel | Focus::Gearbox) => {
            "←→ Cambiar  Esc Lista  Tab Siguiente filtro".into()
        }
        Some(Focus::Price) => {
            let step = f64::from(PRICE_STEP);
            format!(
                "←→ ±{}  PgUp/PgDn ±{}  Esc Lista  Tab Siguiente",
                format_price(Some(step)),
                format_price(Some(step * f64::from(PRICE_PAGE)))
            )
        }
    }
}

/// Area of the detail drawer within the body (between header and footer):
/// right-aligned, or the whole body on narrow terminals.
pub fn drawer_rect(body: Rect) -> Rect {
    if body.width < DRAWER_FULL_WIDTH_BELOW {
        return body;
    }
    let three_quarters = u32::from(body.width) * 3 / 4;
    let width = u16::try_from(three_quarters)
        .unwrap_or(body.width)
        .max(DRAWER_FULL_WIDTH_BELOW - 10);
    Rect::new(body.x + body.width - width, body.y, width, body.height)
}
