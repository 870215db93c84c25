use super::*;
use crate::state::{InputMode, State};
use ratatui::layout::{Constraint, Direction, Layout};

const HEADER_HEIGHT: u16 = 9;
const INPUT_HEIGHT: u16 = 3;
const LOG_HEIGHT: u16 = 10;
const FOOTER_HEIGHT: u16 = 1;

/// Render all widgets according to state.
///
pub fn all(frame: &mut Frame, state: &mut State) {
    let size = frame.size();
    let mode = state.input_mode();
    let show_input = mode.is_editing() && mode != InputMode::Timezone;
    let show_log = state.is_log_visible();

    let mut constraints = vec![Constraint::Length(HEADER_HEIGHT), Constraint::Min(6)];
    if show_input {
        constraints.push(Constraint::Length(INPUT_HEIGHT));
    }
    if show_log {
        constraints.push(Constraint::Length(LOG_HEIGHT));
    }
    constraints.push(Constraint::Length(FOOTER_HEIGHT));
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(size);

    let header = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ])
        .split(rows[0]);
    clock(frame, header[0], state);
    weather(frame, header[1], state);
    advice(frame, header[2], state);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(rows[1]);
    tasks(frame, body[0], state);
    motivations(frame, body[1], state);

    let mut next = 2;
    if show_input {
        input(frame, rows[next], state);
        next += 1;
    }
    if show_log {
        log(frame, rows[next], state);
        next += 1;
    }
    footer(frame, rows[next], state);

    timezone(frame, size, state);
    if let Some(confetti) = state.celebration() {
        celebration(frame, size, confetti);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{Advice, Dashboard, Weather};
    use ratatui::{backend::TestBackend, Terminal};

    fn screen(state: &mut State) -> String {
        let mut terminal = Terminal::new(TestBackend::new(140, 30)).unwrap();
        terminal.draw(|frame| all(frame, state)).unwrap();
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer.get(x, y).symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn renders_weather_advice_and_task() {
        let mut state = State::default();
        state.request_dashboard();
        state.settle_dashboard(1, Ok(Dashboard {
            weather: Weather {
                location_name: "Chicago".to_string(),
                region: "Illinois".to_string(),
                temp_f: 71.6,
                condition: "Sunny".to_string(),
                humidity: 64,
                wind_mph: 8.4,
            },
            advice: Advice {
                id: 42,
                text: "Stay hydrated.".to_string(),
            },
        }));
        state.add_task("Buy milk").unwrap();

        let text = screen(&mut state);
        assert!(text.contains("72°F"));
        assert!(text.contains("Chicago, Illinois"));
        assert!(text.contains("Stay hydrated."));
        assert!(text.contains("Buy milk"));
    }

    #[test]
    fn renders_error_message() {
        let mut state = State::default();
        state.request_dashboard();
        state.settle_dashboard(1, Err(&crate::api::FetchError::Unavailable(
            "closed".to_string(),
        )));
        let text = screen(&mut state);
        assert!(text.contains("Could not load weather"));
    }

    #[test]
    fn renders_input_prompt_and_timezone_popup() {
        let mut state = State::default();
        state.begin_input(InputMode::NewTask);
        let text = screen(&mut state);
        assert!(text.contains("What is your main focus today?"));

        state.cancel_input();
        state.open_timezone_selector();
        let text = screen(&mut state);
        assert!(text.contains(" Timezone "));
    }
}
