use crate::api::{Dashboard, FetchError};
use log::*;

/// Display state of the weather/advice panel. `Loading` carries the
/// generation of the request the panel is waiting for.
///
#[derive(Clone, Debug, Default, PartialEq)]
pub enum FetchState {
    #[default]
    Idle,
    Loading(u64),
    Error(String),
    Data(Dashboard),
}

impl FetchState {
    /// Enter Loading for request `generation` from any state. A newer
    /// request supersedes any still in flight.
    ///
    pub fn begin(&mut self, generation: u64) {
        *self = FetchState::Loading(generation);
    }

    /// Settle the panel with the joined outcome of request `generation`.
    /// Outcomes of superseded requests, or arriving while not Loading, are
    /// dropped; returns whether the panel changed.
    ///
    pub fn settle(
        &mut self,
        generation: u64,
        result: Result<Dashboard, &FetchError>,
    ) -> bool {
        match self {
            FetchState::Loading(expected) if *expected == generation => {}
            FetchState::Loading(expected) => {
                debug!(
                    "Dropping outcome of request {} while waiting for {}.",
                    generation, expected
                );
                return false;
            }
            _ => {
                warn!("Dropping fetch outcome that arrived outside of a request.");
                return false;
            }
        }
        *self = match result {
            Ok(dashboard) => FetchState::Data(dashboard),
            Err(e) => FetchState::Error(e.to_string()),
        };
        true
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading(_))
    }

    pub fn dashboard(&self) -> Option<&Dashboard> {
        match self {
            FetchState::Data(dashboard) => Some(dashboard),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            FetchState::Error(message) => Some(message),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fake::{Fake, Faker};

    fn status_error() -> FetchError {
        FetchError::Status {
            url: "http://localhost/advice".to_string(),
            status: 500,
            message: "Internal Server Error".to_string(),
        }
    }

    #[test]
    fn starts_idle() {
        assert_eq!(FetchState::default(), FetchState::Idle);
    }

    #[test]
    fn loading_to_data() {
        let dashboard: Dashboard = Faker.fake();
        let mut state = FetchState::Idle;
        state.begin(1);
        assert!(state.is_loading());
        assert!(state.settle(1, Ok(dashboard.clone())));
        assert_eq!(state.dashboard(), Some(&dashboard));
        assert_eq!(state.error(), None);
    }

    #[test]
    fn loading_to_error_shows_message() {
        let mut state = FetchState::Idle;
        state.begin(1);
        let expected = status_error().to_string();
        assert!(state.settle(1, Err(&status_error())));
        assert_eq!(state.error(), Some(expected.as_str()));
        assert_eq!(state.dashboard(), None);
    }

    #[test]
    fn error_and_data_restart_at_loading() {
        let mut state = FetchState::Error("boom".to_string());
        state.begin(2);
        assert_eq!(state, FetchState::Loading(2));

        let mut state = FetchState::Data(Faker.fake());
        state.begin(3);
        assert!(state.is_loading());
    }

    #[test]
    fn settle_outside_loading_is_ignored() {
        let dashboard: Dashboard = Faker.fake();
        let mut state = FetchState::Data(dashboard.clone());
        assert!(!state.settle(1, Err(&status_error())));
        assert_eq!(state.dashboard(), Some(&dashboard));

        let mut state = FetchState::Idle;
        assert!(!state.settle(1, Ok(Faker.fake())));
        assert_eq!(state, FetchState::Idle);
    }

    #[test]
    fn superseded_outcome_is_dropped_and_latest_settles() {
        let older: Dashboard = Faker.fake();
        let newer: Dashboard = Faker.fake();
        let mut state = FetchState::Idle;
        state.begin(1);
        state.begin(2);

        assert!(!state.settle(1, Ok(older)));
        assert_eq!(state, FetchState::Loading(2));
        assert!(state.settle(2, Ok(newer.clone())));
        assert_eq!(state.dashboard(), Some(&newer));
    }
}
