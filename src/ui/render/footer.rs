use super::Frame;
use crate::state::{InputMode, State};
use crate::ui::widgets::styling;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
};

/// Return the key hints for the given input mode.
///
pub fn hints(mode: InputMode) -> &'static str {
    match mode {
        InputMode::Normal => {
            " n: new task, space: done, u: undo, c: city, r: refresh, t: timezone, m/M: motivation, l: log, q: quit"
        }
        InputMode::Timezone => " Type to filter, ↑↓: navigate, Enter: select, Esc: cancel",
        InputMode::NewTask | InputMode::City | InputMode::Motivation => {
            " Type to edit, Enter: submit, Esc: cancel"
        }
    }
}

fn badge(mode: InputMode) -> &'static str {
    match mode {
        InputMode::Normal => "NORMAL",
        InputMode::NewTask => "TASK",
        InputMode::City => "CITY",
        InputMode::Motivation => "MOTIVATION",
        InputMode::Timezone => "TIMEZONE",
    }
}

/// Render footer widget.
///
pub fn footer(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.theme();
    let mode = state.input_mode();
    let content = Line::from(vec![
        Span::styled(format!(" {} ", badge(mode)), styling::mode_badge_style(theme)),
        Span::styled(hints(mode), styling::muted_text_style(theme)),
    ]);
    frame.render_widget(Paragraph::new(content), size);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn editing_modes_share_submit_hints() {
        assert_eq!(hints(InputMode::NewTask), hints(InputMode::City));
        assert!(hints(InputMode::Motivation).contains("Esc: cancel"));
    }

    #[test]
    fn normal_hints_list_quit() {
        assert!(hints(InputMode::Normal).contains("q: quit"));
        assert!(hints(InputMode::Timezone).contains("Enter: select"));
    }
}
