use chrono::{DateTime, Local, Utc};
use chrono_tz::{Tz, TZ_VARIANTS};
use log::*;
use ratatui::widgets::ListState;

pub const TIME_FORMAT: &str = "%I:%M:%S %p";
pub const DATE_FORMAT: &str = "%A, %B %-d, %Y";

/// Format `now` as (time, date) in `zone`, or in host local time when no
/// zone is given.
///
pub fn format_clock(now: DateTime<Utc>, zone: Option<&Tz>) -> (String, String) {
    match zone {
        Some(tz) => {
            let zoned = now.with_timezone(tz);
            (
                zoned.format(TIME_FORMAT).to_string(),
                zoned.format(DATE_FORMAT).to_string(),
            )
        }
        None => {
            let local = now.with_timezone(&Local);
            (
                local.format(TIME_FORMAT).to_string(),
                local.format(DATE_FORMAT).to_string(),
            )
        }
    }
}

/// Wall clock shown at the top of the page.
///
/// The chosen timezone name is kept verbatim even when it does not parse;
/// in that case rendering falls back to host local time.
///
#[derive(Clone, Debug, Default)]
pub struct Clock {
    timezone: Option<String>,
    zone: Option<Tz>,
    time_text: String,
    date_text: String,
    last_second: Option<i64>,
}

impl Clock {
    pub fn new(timezone: Option<String>) -> Self {
        let mut clock = Clock::default();
        clock.set_timezone(timezone);
        clock
    }

    pub fn timezone(&self) -> Option<&str> {
        self.timezone.as_deref()
    }

    /// Label for the active zone: the zone name, or "Local".
    ///
    pub fn zone_label(&self) -> String {
        match (&self.timezone, &self.zone) {
            (Some(name), Some(_)) => name.to_owned(),
            (Some(name), None) => format!("{} (unknown, showing local)", name),
            (None, _) => "Local".to_string(),
        }
    }

    pub fn time_text(&self) -> &str {
        &self.time_text
    }

    pub fn date_text(&self) -> &str {
        &self.date_text
    }

    /// Change the zone. The next refresh reformats regardless of the second.
    ///
    pub fn set_timezone(&mut self, timezone: Option<String>) {
        self.zone = timezone.as_deref().and_then(|name| match name.parse::<Tz>() {
            Ok(tz) => Some(tz),
            Err(_) => {
                warn!("Unrecognized timezone '{}', using local time.", name);
                None
            }
        });
        self.timezone = timezone;
        self.last_second = None;
    }

    /// Reformat when the wall-clock second has changed. Returns whether the
    /// text changed.
    ///
    pub fn refresh(&mut self, now: DateTime<Utc>) -> bool {
        let second = now.timestamp();
        if self.last_second == Some(second) {
            return false;
        }
        let (time_text, date_text) = format_clock(now, self.zone.as_ref());
        self.time_text = time_text;
        self.date_text = date_text;
        self.last_second = Some(second);
        true
    }
}

/// Popup list of every known timezone, narrowed by a typed query.
///
#[derive(Debug)]
pub struct TimezoneSelector {
    query: String,
    matches: Vec<&'static str>,
    list_state: ListState,
}

impl Default for TimezoneSelector {
    fn default() -> Self {
        TimezoneSelector::new()
    }
}

impl TimezoneSelector {
    pub fn new() -> Self {
        let mut selector = TimezoneSelector {
            query: String::new(),
            matches: vec![],
            list_state: ListState::default(),
        };
        selector.refilter();
        selector
    }

    /// Open with `current` preselected when it is a known zone.
    ///
    pub fn with_selected(current: Option<&str>) -> Self {
        let mut selector = TimezoneSelector::new();
        if let Some(index) = current.and_then(|name| selector.matches.iter().position(|m| *m == name)) {
            selector.list_state.select(Some(index));
        }
        selector
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn matches(&self) -> &[&'static str] {
        &self.matches
    }

    pub fn list_state(&mut self) -> &mut ListState {
        &mut self.list_state
    }

    pub fn selected(&self) -> Option<&'static str> {
        self.list_state
            .selected()
            .and_then(|index| self.matches.get(index).copied())
    }

    pub fn push_char(&mut self, c: char) {
        self.query.push(c);
        self.refilter();
    }

    pub fn pop_char(&mut self) {
        self.query.pop();
        self.refilter();
    }

    pub fn next(&mut self) {
        if self.matches.is_empty() {
            return;
        }
        let index = match self.list_state.selected() {
            Some(i) if i + 1 < self.matches.len() => i + 1,
            Some(_) => 0,
            None => 0,
        };
        self.list_state.select(Some(index));
    }

    pub fn previous(&mut self) {
        if self.matches.is_empty() {
            return;
        }
        let index = match self.list_state.selected() {
            Some(0) | None => self.matches.len() - 1,
            Some(i) => i - 1,
        };
        self.list_state.select(Some(index));
    }

    /// Case-insensitive substring match; spaces in the query match the
    /// underscores zone names use ("new york" finds America/New_York).
    ///
    fn refilter(&mut self) {
        let needle = self.query.to_lowercase().replace(' ', "_");
        self.matches = TZ_VARIANTS
            .iter()
            .map(|tz| tz.name())
            .filter(|name| name.to_lowercase().contains(&needle))
            .collect();
        self.list_state
            .select(if self.matches.is_empty() { None } else { Some(0) });
    }
}
