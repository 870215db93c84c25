use super::Frame;
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Alignment, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Render the clock widget in the selected timezone.
///
pub fn clock(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.theme();
    let clock = state.clock();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styling::normal_block_border_style(theme))
        .title(Span::styled(
            format!(" {} ", clock.zone_label()),
            styling::active_block_title_style(),
        ));

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            clock.time_text().to_owned(),
            styling::banner_style(theme).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            clock.date_text().to_owned(),
            styling::normal_text_style(theme),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "t: change timezone",
            styling::muted_text_style(theme),
        )),
    ];
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center).block(block),
        size,
    );
}
