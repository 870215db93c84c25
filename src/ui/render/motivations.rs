use super::Frame;
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};

/// Render the motivations list.
///
pub fn motivations(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.theme();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styling::normal_block_border_style(theme))
        .title(" Motivations ");

    let items: Vec<ListItem> = if state.motivations().is_empty() {
        vec![ListItem::new(Span::styled(
            "Press m to add one",
            styling::muted_text_style(theme),
        ))]
    } else {
        state
            .motivations()
            .iter()
            .map(|m| {
                ListItem::new(Line::from(vec![
                    Span::styled("• ", styling::accent_text_style(theme)),
                    Span::styled(m.to_owned(), styling::normal_text_style(theme)),
                ]))
            })
            .collect()
    };

    frame.render_widget(List::new(items).block(block), size);
}
