use super::Frame;
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

const BLOCK_TITLE: &str = " Focus ";

/// Render the current task and the recently completed ones.
///
pub fn tasks(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.theme();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styling::active_block_border_style(theme))
        .title(Span::styled(BLOCK_TITLE, styling::active_block_title_style()));

    let tracker = state.tasks();
    let mut lines = vec![Line::from("")];
    match tracker.current() {
        Some(task) => lines.push(Line::from(vec![
            Span::styled("[ ] ", styling::active_list_item_style(theme)),
            Span::styled(task.text.to_owned(), styling::current_list_item_style(theme)),
        ])),
        None => lines.push(Line::from(Span::styled(
            "No focus yet. Press n to set one.",
            styling::muted_text_style(theme),
        ))),
    }

    if !tracker.history().is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Recently completed",
            styling::muted_text_style(theme),
        )));
        for task in tracker.history() {
            lines.push(Line::from(vec![
                Span::styled("[x] ", styling::completed_text_style(theme)),
                Span::styled(task.text.to_owned(), styling::completed_text_style(theme)),
            ]));
        }
    }

    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: false }).block(block),
        size,
    );
}
