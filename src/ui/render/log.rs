use super::Frame;
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};

/// Render log widget according to state, newest entries at the bottom.
///
pub fn log(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.theme();
    let block = Block::default()
        .title(" Log (press l to hide) ")
        .borders(Borders::ALL)
        .border_style(styling::normal_block_border_style(theme));

    let entries = state.log_entries();
    let visible = size.height.saturating_sub(2) as usize;
    let skip = entries.len().saturating_sub(visible);
    let items: Vec<ListItem> = entries
        .into_iter()
        .skip(skip)
        .map(|entry| {
            let style = if entry.contains(" ERROR ") {
                styling::error_text_style(theme)
            } else {
                styling::normal_text_style(theme)
            };
            ListItem::new(Line::from(vec![Span::styled(entry, style)]))
        })
        .collect();

    frame.render_widget(
        List::new(items)
            .style(styling::normal_text_style(theme))
            .block(block),
        size,
    );
}
