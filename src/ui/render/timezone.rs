use super::Frame;
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::Span,
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
};

const POPUP_WIDTH_PERCENT: u16 = 50;
const POPUP_HEIGHT_PERCENT: u16 = 60;

/// Return a rectangle centered in `area` covering the given percentages.
///
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(rows[1])[1]
}

/// Render the timezone selector popup when it is open.
///
pub fn timezone(frame: &mut Frame, size: Rect, state: &mut State) {
    let theme = state.theme().clone();
    let selector = match state.timezone_selector() {
        Some(selector) => selector,
        None => return,
    };

    let area = centered_rect(POPUP_WIDTH_PERCENT, POPUP_HEIGHT_PERCENT, size);
    frame.render_widget(Clear, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(1)])
        .split(area);

    let query = Paragraph::new(format!("/{}", selector.query()))
        .style(styling::normal_text_style(&theme))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(styling::active_block_border_style(&theme))
                .title(Span::styled(
                    " Timezone ",
                    styling::active_block_title_style(),
                )),
        );
    frame.render_widget(query, rows[0]);

    let title = format!(" {} match(es) ", selector.matches().len());
    let items: Vec<ListItem> = if selector.matches().is_empty() {
        vec![ListItem::new("No results found")]
    } else {
        selector
            .matches()
            .iter()
            .map(|name| ListItem::new(*name))
            .collect()
    };
    let list = List::new(items)
        .style(styling::normal_text_style(&theme))
        .highlight_style(styling::mode_badge_style(&theme))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(styling::active_block_border_style(&theme))
                .title(title),
        );
    frame.render_stateful_widget(list, rows[1], selector.list_state());
}
