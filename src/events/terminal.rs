use crate::state::{InputMode, State, StateError};
use anyhow::Result;
use chrono::Utc;
use crossterm::{
    event,
    event::{Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
};
use log::*;
use std::{sync::mpsc, thread, time::Duration};

/// Specify terminal event poll rate in milliseconds.
///
const TICK_RATE_IN_MS: u64 = 100;

/// Specify different terminal event types.
///
#[derive(Debug)]
pub enum Event<I> {
    Input(I),
    Tick,
}

/// Specify struct for managing terminal events channel.
///
pub struct Handler {
    rx: mpsc::Receiver<Event<KeyEvent>>,
    _tx: mpsc::Sender<Event<KeyEvent>>,
}

impl Handler {
    /// Return new instance after spawning new input polling thread.
    ///
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        let tx_clone = tx.clone();
        thread::spawn(move || {
            let tick_rate = Duration::from_millis(TICK_RATE_IN_MS);
            loop {
                match event::poll(tick_rate) {
                    Ok(true) => match event::read() {
                        Ok(CrosstermEvent::Key(key)) if key.kind == KeyEventKind::Press => {
                            if tx_clone.send(Event::Input(key)).is_err() {
                                break;
                            }
                        }
                        Ok(_) => {}
                        Err(e) => error!("Failed to read terminal event: {}", e),
                    },
                    Ok(false) => {}
                    Err(e) => error!("Failed to poll terminal events: {}", e),
                }
                if tx_clone.send(Event::Tick).is_err() {
                    break;
                }
            }
        });
        Handler { rx, _tx: tx }
    }

    /// Receive next terminal event and handle it accordingly. Returns result
    /// with value true if should continue or false if exit was requested.
    ///
    pub fn handle_next(&self, state: &mut State) -> Result<bool> {
        match self.rx.recv()? {
            Event::Input(event) => Ok(handle_key(event, state)),
            Event::Tick => {
                state.tick(Utc::now());
                Ok(true)
            }
        }
    }
}

impl Default for Handler {
    fn default() -> Self {
        Handler::new()
    }
}

/// Apply one key press to state. Returns false if exit was requested.
///
pub fn handle_key(event: KeyEvent, state: &mut State) -> bool {
    if let KeyEvent {
        code: KeyCode::Char('c'),
        modifiers: KeyModifiers::CONTROL,
        ..
    } = event
    {
        debug!("Processing exit terminal event '{:?}'...", event);
        return false;
    }

    match state.input_mode() {
        InputMode::Normal => return handle_normal_key(event, state),
        InputMode::Timezone => match event.code {
            KeyCode::Down => {
                if let Some(selector) = state.timezone_selector() {
                    selector.next();
                }
            }
            KeyCode::Up => {
                if let Some(selector) = state.timezone_selector() {
                    selector.previous();
                }
            }
            KeyCode::Enter => state.submit_input(),
            KeyCode::Esc => state.cancel_input(),
            KeyCode::Backspace => state.pop_input_char(),
            KeyCode::Char(c) => state.push_input_char(c),
            _ => {}
        },
        InputMode::NewTask | InputMode::City | InputMode::Motivation => match event.code {
            KeyCode::Enter => state.submit_input(),
            KeyCode::Esc => state.cancel_input(),
            KeyCode::Backspace => state.pop_input_char(),
            KeyCode::Char(c) => state.push_input_char(c),
            _ => {}
        },
    }
    true
}

fn handle_normal_key(event: KeyEvent, state: &mut State) -> bool {
    match event.code {
        KeyCode::Char('q') => {
            debug!("Processing exit terminal event '{:?}'...", event);
            return false;
        }
        KeyCode::Char('n') => state.begin_input(InputMode::NewTask),
        KeyCode::Char(' ') | KeyCode::Char('x') => report(state.toggle_current_task()),
        KeyCode::Char('u') => report(state.reopen_last_task()),
        KeyCode::Char('c') => state.begin_input(InputMode::City),
        KeyCode::Char('r') => state.request_dashboard(),
        KeyCode::Char('t') => state.begin_input(InputMode::Timezone),
        KeyCode::Char('m') => state.begin_input(InputMode::Motivation),
        KeyCode::Char('M') => state.remove_last_motivation(),
        KeyCode::Char('l') => state.toggle_log(),
        _ => {}
    }
    true
}

fn report<T>(result: Result<T, StateError>) {
    if let Err(e) = result {
        info!("{}", e);
    }
}
