use super::Frame;
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::Rect,
    text::Span,
    widgets::{Block, Borders, Paragraph},
};

/// Render the single-line text input for the current mode and place the
/// cursor after the typed text.
///
pub fn input(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.theme();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styling::active_block_border_style(theme))
        .title(Span::styled(
            format!(" {} ", state.input_mode().prompt()),
            styling::active_block_title_style(),
        ));
    frame.render_widget(
        Paragraph::new(state.input().to_owned())
            .style(styling::normal_text_style(theme))
            .block(block),
        size,
    );

    let typed = state.input().chars().count() as u16;
    let max_x = size.x + size.width.saturating_sub(2);
    frame.set_cursor((size.x + 1 + typed).min(max_x), size.y + 1);
}
