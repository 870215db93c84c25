use crate::api::Remote;
use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::events::network::{Event as NetworkEvent, Handler as NetworkEventHandler};
use crate::events::terminal::Handler as TerminalEventHandler;
use crate::logger::{self, LogBuffer};
use crate::state::State;
use crate::storage::Store;
use crate::ui::Theme;
use anyhow::Result;
use chrono::Utc;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::*;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, stdout};
use std::sync::Arc;
use tokio::sync::Mutex;

pub type NetworkEventSender = std::sync::mpsc::Sender<NetworkEvent>;
type NetworkEventReceiver = std::sync::mpsc::Receiver<NetworkEvent>;

/// Oversees event processing, state management, and terminal output.
///
pub struct App {
    state: Arc<Mutex<State>>,
    config: Config,
}

impl App {
    /// Start a new application according to the given configuration. The
    /// optional `city` overrides the configured default for this session.
    /// Returns the result of the application execution.
    ///
    pub async fn start(config: Config, city: Option<String>) -> Result<()> {
        let log_buffer = LogBuffer::default();
        logger::init(config.log_level_filter()?, log_buffer.clone())?;

        info!("Starting application...");
        let (tx, rx) = std::sync::mpsc::channel::<NetworkEvent>();
        let store = Store::open(config.storage_path()?);
        let theme = Theme::from_name(&config.theme_name).unwrap_or_else(|| {
            warn!(
                "Unknown theme '{}'; available themes are {}.",
                config.theme_name,
                Theme::available_themes().join(", ")
            );
            Theme::default()
        });
        let city = city.unwrap_or_else(|| config.default_city.to_owned());
        let app = App {
            state: Arc::new(Mutex::new(State::new(tx, store, city, theme, log_buffer))),
            config,
        };
        app.start_network(rx)?;
        app.start_ui().await?;

        info!("Exiting application...");
        Ok(())
    }

    /// Start a separate thread for asynchronous state mutations.
    ///
    fn start_network(&self, net_receiver: NetworkEventReceiver) -> AppResult<()> {
        debug!("Creating new thread for asynchronous networking...");
        let cloned_state = Arc::clone(&self.state);
        let remote = Remote::new(&self.config);
        std::thread::Builder::new()
            .name("network".to_string())
            .spawn(move || {
                let runtime = match tokio::runtime::Builder::new_multi_thread()
                    .enable_all()
                    .build()
                {
                    Ok(runtime) => runtime,
                    Err(e) => {
                        error!("Failed to build network runtime: {}", e);
                        return;
                    }
                };
                runtime.block_on(async {
                    let mut network_event_handler =
                        NetworkEventHandler::new(&cloned_state, &remote);
                    while let Ok(network_event) = net_receiver.recv() {
                        if let Err(e) = network_event_handler.handle(network_event).await {
                            error!("Failed to handle network event: {:#}", e);
                        }
                    }
                    debug!("Network channel closed; stopping network thread.");
                })
            })?;
        Ok(())
    }

    /// Begin the terminal event poll on a separate thread before starting the
    /// render loop on the main thread. Return the result following an exit
    /// request or unrecoverable error.
    ///
    async fn start_ui(&self) -> Result<()> {
        debug!("Starting user interface on main thread...");
        let mut stdout = stdout();
        enable_raw_mode().map_err(|e| AppError::Terminal(format!("raw mode: {}", e)))?;
        execute!(stdout, EnterAlternateScreen)?;

        let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        terminal.hide_cursor()?;

        {
            let mut state = self.state.lock().await;
            state.tick(Utc::now());
            state.request_dashboard();
        }

        let result = self.render_loop(&mut terminal).await;

        disable_raw_mode()?;
        execute!(io::stdout(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    async fn render_loop(
        &self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> Result<()> {
        let terminal_event_handler = TerminalEventHandler::new();
        loop {
            let mut state = self.state.lock().await;
            if let Ok(size) = terminal.size() {
                state.set_terminal_size(size);
            };
            terminal.draw(|frame| crate::ui::render(frame, &mut state))?;
            if !terminal_event_handler.handle_next(&mut state)? {
                debug!("Received application exit request.");
                break;
            }
        }
        Ok(())
    }
}
