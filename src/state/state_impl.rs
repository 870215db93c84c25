use super::{
    Celebration, Clock, FetchState, InputMode, StateError, Task, TaskTracker, TimezoneSelector,
    Toggle,
};
use crate::api::{Dashboard, FetchError};
use crate::app::NetworkEventSender;
use crate::events::network::Event as NetworkEvent;
use crate::logger::LogBuffer;
use crate::storage::{StorageKey, Store};
use crate::ui::{Theme, SPINNER_FRAME_COUNT};
use chrono::{DateTime, Utc};
use log::*;
use ratatui::layout::Rect;

/// Motivations shown until the user stores their own.
///
pub const DEFAULT_MOTIVATIONS: [&str; 3] = [
    "Ship one small thing today.",
    "Be kind to future you.",
    "Progress over perfection.",
];

const DEFAULT_CITY: &str = "London";

/// Houses data representative of application state.
///
pub struct State {
    net_sender: Option<NetworkEventSender>,
    store: Store,
    tasks: TaskTracker,
    motivations: Vec<String>,
    clock: Clock,
    fetch: FetchState,
    fetch_generation: u64,
    city: String,
    input_mode: InputMode,
    input: String,
    timezone_selector: Option<TimezoneSelector>,
    celebration: Option<Celebration>,
    show_log: bool,
    log_buffer: LogBuffer,
    spinner_index: usize,
    terminal_size: Rect,
    theme: Theme,
}

impl Default for State {
    fn default() -> Self {
        State {
            net_sender: None,
            store: Store::in_memory(),
            tasks: TaskTracker::default(),
            motivations: default_motivations(),
            clock: Clock::new(None),
            fetch: FetchState::default(),
            fetch_generation: 0,
            city: DEFAULT_CITY.to_string(),
            input_mode: InputMode::default(),
            input: String::new(),
            timezone_selector: None,
            celebration: None,
            show_log: false,
            log_buffer: LogBuffer::default(),
            spinner_index: 0,
            terminal_size: Rect::default(),
            theme: Theme::default(),
        }
    }
}

fn default_motivations() -> Vec<String> {
    DEFAULT_MOTIVATIONS.iter().map(|m| m.to_string()).collect()
}

impl State {
    /// Return new state wired to the network channel and loaded from `store`.
    ///
    pub fn new(
        net_sender: NetworkEventSender,
        store: Store,
        city: String,
        theme: Theme,
        log_buffer: LogBuffer,
    ) -> Self {
        let mut state = State {
            net_sender: Some(net_sender),
            store,
            city,
            theme,
            log_buffer,
            ..State::default()
        };
        state.load_persisted();
        state
    }

    /// Read every persisted value, falling back to each key's default when
    /// it is absent or unreadable.
    ///
    pub fn load_persisted(&mut self) {
        let timezone = self.store.get_text(StorageKey::Timezone);
        let current = self
            .store
            .get_json::<Option<Task>>(StorageKey::CurrentTask)
            .flatten();
        let history = self
            .store
            .get_json::<Vec<Task>>(StorageKey::CompletedTasks)
            .unwrap_or_default();
        self.motivations = self
            .store
            .get_json::<Vec<String>>(StorageKey::Motivations)
            .unwrap_or_else(default_motivations);
        self.tasks = TaskTracker::new(current, history);
        self.clock.set_timezone(timezone);
        info!(
            "Loaded persisted state: timezone {}, {} completed task(s), {} motivation(s).",
            self.clock.zone_label(),
            self.tasks.history().len(),
            self.motivations.len()
        );
    }

    /// Mark the panel Loading and ask the network thread for weather and
    /// advice for the current city. Each request gets a new generation so
    /// only the latest one can settle the panel.
    ///
    pub fn request_dashboard(&mut self) {
        self.fetch_generation += 1;
        let generation = self.fetch_generation;
        self.fetch.begin(generation);
        let event = NetworkEvent::Dashboard {
            city: self.city.to_owned(),
            generation,
        };
        match &self.net_sender {
            Some(sender) => {
                if let Err(e) = sender.send(event) {
                    error!("Failed to dispatch dashboard request: {}", e);
                    self.fetch.settle(
                        generation,
                        Err(&FetchError::Unavailable(e.to_string())),
                    );
                }
            }
            None => warn!("No network channel; dashboard request for '{}' dropped.", self.city),
        }
    }

    /// Apply the joined outcome of dashboard request `generation`.
    ///
    pub fn settle_dashboard(
        &mut self,
        generation: u64,
        result: Result<Dashboard, &FetchError>,
    ) {
        if self.fetch.settle(generation, result) {
            if let Some(message) = self.fetch.error() {
                warn!("Dashboard request failed: {}", message);
            } else {
                debug!("Dashboard updated.");
            }
        }
    }

    pub fn fetch_state(&self) -> &FetchState {
        &self.fetch
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    /// Switch city and fetch for it. Blank names are ignored.
    ///
    pub fn set_city(&mut self, city: &str) {
        let city = city.trim();
        if city.is_empty() {
            return;
        }
        self.city = city.to_owned();
        self.request_dashboard();
    }

    pub fn tasks(&self) -> &TaskTracker {
        &self.tasks
    }

    /// Start a new current task and persist it.
    ///
    pub fn add_task(&mut self, text: &str) -> Result<(), StateError> {
        let task = self.tasks.add_task(text, Utc::now())?;
        info!("Started task '{}'.", task.text);
        self.persist_tasks();
        Ok(())
    }

    /// Toggle the task with `id`, celebrating completions, and persist.
    ///
    pub fn toggle_task(&mut self, id: i64) -> Result<Toggle, StateError> {
        let toggle = self.tasks.toggle_task(id)?;
        match &toggle {
            Toggle::Completed(task) => {
                info!("Completed task '{}'.", task.text);
                self.celebration = Some(Celebration::new());
            }
            Toggle::Reopened(task) => info!("Reopened task '{}'.", task.text),
        }
        self.persist_tasks();
        Ok(toggle)
    }

    pub fn toggle_current_task(&mut self) -> Result<Toggle, StateError> {
        let id = self.tasks.current().ok_or(StateError::NoCurrentTask)?.id;
        self.toggle_task(id)
    }

    pub fn reopen_last_task(&mut self) -> Result<Toggle, StateError> {
        let id = self
            .tasks
            .history()
            .first()
            .ok_or(StateError::NoCompletedTask)?
            .id;
        self.toggle_task(id)
    }

    fn persist_tasks(&mut self) {
        self.store
            .set_json(StorageKey::CurrentTask, &self.tasks.current());
        self.store
            .set_json(StorageKey::CompletedTasks, &self.tasks.history());
    }

    pub fn motivations(&self) -> &[String] {
        &self.motivations
    }

    pub fn add_motivation(&mut self, text: &str) {
        let text = text.trim();
        if text.is_empty() {
            return;
        }
        self.motivations.push(text.to_owned());
        self.store
            .set_json(StorageKey::Motivations, &self.motivations);
    }

    pub fn remove_last_motivation(&mut self) {
        if let Some(removed) = self.motivations.pop() {
            debug!("Removed motivation '{}'.", removed);
            self.store
                .set_json(StorageKey::Motivations, &self.motivations);
        }
    }

    pub fn clock(&self) -> &Clock {
        &self.clock
    }

    /// Switch the clock zone, persist it, reformat now and hide the selector.
    ///
    pub fn set_timezone(&mut self, name: &str) {
        info!("Switching timezone to '{}'.", name);
        self.clock.set_timezone(Some(name.to_owned()));
        self.store.set_text(StorageKey::Timezone, name);
        self.clock.refresh(Utc::now());
        self.close_timezone_selector();
    }

    pub fn timezone_selector(&mut self) -> Option<&mut TimezoneSelector> {
        self.timezone_selector.as_mut()
    }

    pub fn open_timezone_selector(&mut self) {
        self.timezone_selector = Some(TimezoneSelector::with_selected(self.clock.timezone()));
        self.input_mode = InputMode::Timezone;
    }

    pub fn close_timezone_selector(&mut self) {
        self.timezone_selector = None;
        if self.input_mode == InputMode::Timezone {
            self.input_mode = InputMode::Normal;
        }
    }

    pub fn input_mode(&self) -> InputMode {
        self.input_mode
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn begin_input(&mut self, mode: InputMode) {
        if mode == InputMode::Timezone {
            self.open_timezone_selector();
            return;
        }
        self.input.clear();
        self.input_mode = mode;
    }

    pub fn push_input_char(&mut self, c: char) {
        match (self.input_mode, self.timezone_selector.as_mut()) {
            (InputMode::Timezone, Some(selector)) => selector.push_char(c),
            (InputMode::Normal, _) => {}
            _ => self.input.push(c),
        }
    }

    pub fn pop_input_char(&mut self) {
        match (self.input_mode, self.timezone_selector.as_mut()) {
            (InputMode::Timezone, Some(selector)) => selector.pop_char(),
            _ => {
                self.input.pop();
            }
        }
    }

    pub fn cancel_input(&mut self) {
        self.input.clear();
        self.close_timezone_selector();
        self.input_mode = InputMode::Normal;
    }

    /// Apply the buffered input according to the current mode and return to
    /// normal mode.
    ///
    pub fn submit_input(&mut self) {
        let text = std::mem::take(&mut self.input);
        match self.input_mode {
            InputMode::Normal => {}
            InputMode::NewTask => {
                if let Err(e) = self.add_task(&text) {
                    debug!("Ignoring task submission: {}", e);
                }
            }
            InputMode::City => self.set_city(&text),
            InputMode::Motivation => self.add_motivation(&text),
            InputMode::Timezone => {
                match self.timezone_selector.as_ref().and_then(|s| s.selected()) {
                    Some(name) => self.set_timezone(name),
                    None => warn!("No timezone matches; keeping current zone."),
                }
            }
        }
        self.close_timezone_selector();
        self.input_mode = InputMode::Normal;
    }

    /// Advance time-driven state: clock text, spinner and confetti.
    ///
    pub fn tick(&mut self, now: DateTime<Utc>) {
        self.clock.refresh(now);
        if self.fetch.is_loading() {
            self.advance_spinner_index();
        }
        if let Some(celebration) = self.celebration.as_mut() {
            if !celebration.advance() {
                self.celebration = None;
            }
        }
    }

    pub fn celebration(&self) -> Option<&Celebration> {
        self.celebration.as_ref()
    }

    pub fn get_spinner_index(&self) -> &usize {
        &self.spinner_index
    }

    pub fn advance_spinner_index(&mut self) {
        self.spinner_index = (self.spinner_index + 1) % SPINNER_FRAME_COUNT;
    }

    pub fn get_terminal_size(&self) -> Rect {
        self.terminal_size
    }

    pub fn set_terminal_size(&mut self, size: Rect) {
        self.terminal_size = size;
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn is_log_visible(&self) -> bool {
        self.show_log
    }

    pub fn toggle_log(&mut self) {
        self.show_log = !self.show_log;
    }

    pub fn log_entries(&self) -> Vec<String> {
        self.log_buffer.entries()
    }
}
