use super::widgets::spinner;
use super::Frame;
use crate::state::{FetchState, State};
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

/// Render the weather panel according to the fetch state.
///
pub fn weather(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.theme();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styling::normal_block_border_style(theme))
        .title(Span::styled(
            format!(" Weather · {} ", state.city()),
            styling::active_block_title_style(),
        ));

    let lines = match state.fetch_state() {
        FetchState::Loading(_) => {
            frame.render_widget(spinner::widget(state, size.height).block(block), size);
            return;
        }
        FetchState::Idle => vec![
            Line::from(""),
            Line::from(Span::styled(
                "Press r to fetch the weather",
                styling::muted_text_style(theme),
            )),
        ],
        FetchState::Error(message) => vec![
            Line::from(""),
            Line::from(Span::styled(
                "Could not load weather",
                styling::error_text_style(theme),
            )),
            Line::from(Span::styled(
                message.to_owned(),
                styling::muted_text_style(theme),
            )),
        ],
        FetchState::Data(dashboard) => {
            let weather = &dashboard.weather;
            vec![
                Line::from(vec![
                    Span::styled(
                        format!("{} ", weather.icon()),
                        styling::accent_text_style(theme),
                    ),
                    Span::styled(
                        weather.temperature_display(),
                        styling::current_list_item_style(theme),
                    ),
                ]),
                Line::from(Span::styled(
                    weather.condition.to_owned(),
                    styling::normal_text_style(theme),
                )),
                Line::from(Span::styled(
                    format!(
                        "Humidity {}  Wind {}",
                        weather.humidity_display(),
                        weather.wind_display()
                    ),
                    styling::normal_text_style(theme),
                )),
                Line::from(Span::styled(
                    weather.location_display(),
                    styling::muted_text_style(theme),
                )),
            ]
        }
    };
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(block),
        size,
    );
}

/// Render the advice panel. It shares the weather panel's fetch state, so
/// the two always load and fail together.
///
pub fn advice(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.theme();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styling::normal_block_border_style(theme))
        .title(Span::styled(" Advice ", styling::active_block_title_style()));

    let lines = match state.fetch_state() {
        FetchState::Loading(_) => {
            frame.render_widget(spinner::widget(state, size.height).block(block), size);
            return;
        }
        FetchState::Data(dashboard) => vec![
            Line::from(""),
            Line::from(Span::styled(
                format!("“{}”", dashboard.advice.text),
                styling::normal_text_style(theme),
            )),
            Line::from(""),
            Line::from(Span::styled(
                format!("#{}", dashboard.advice.id),
                styling::muted_text_style(theme),
            )),
        ],
        FetchState::Idle | FetchState::Error(_) => vec![
            Line::from(""),
            Line::from(Span::styled("—", styling::muted_text_style(theme))),
        ],
    };
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(block),
        size,
    );
}
