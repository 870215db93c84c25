use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::Alignment,
    text::{Line, Span},
    widgets::Paragraph,
};

/// Braille frames cycled while a request is in flight.
///
pub const FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Return the spinner frame for the given index, wrapping around.
///
pub fn frame(index: usize) -> &'static str {
    FRAMES[index % FRAMES.len()]
}

/// Return a centered spinner paragraph for an area of `height` rows.
///
pub fn widget(state: &State, height: u16) -> Paragraph<'static> {
    let theme = state.theme();
    let mut lines: Vec<Line> = (0..height.saturating_sub(2) / 2)
        .map(|_| Line::from(""))
        .collect();
    lines.push(Line::from(vec![
        Span::styled(
            format!("{} ", frame(*state.get_spinner_index())),
            styling::accent_text_style(theme),
        ),
        Span::styled("Loading...", styling::muted_text_style(theme)),
    ]));
    Paragraph::new(lines).alignment(Alignment::Center)
}
