use crate::api::Remote;
use crate::error::AppError;
use crate::state::State;
use anyhow::Result;
use log::*;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Specify different network event types. `generation` identifies the
/// request so a superseded outcome cannot overwrite a newer one.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Dashboard { city: String, generation: u64 },
}

/// Specify struct for managing state with network events.
///
pub struct Handler<'a> {
    state: &'a Arc<Mutex<State>>,
    remote: &'a Remote,
}

impl<'a> Handler<'a> {
    /// Return new instance with reference to state.
    ///
    pub fn new(state: &'a Arc<Mutex<State>>, remote: &'a Remote) -> Self {
        Handler { state, remote }
    }

    /// Handle network events by type.
    ///
    pub async fn handle(&mut self, event: Event) -> Result<()> {
        debug!("Processing network event '{:?}'...", event);
        match event {
            Event::Dashboard { city, generation } => self.dashboard(city, generation).await?,
        }
        Ok(())
    }

    /// Fetch weather and advice together and settle the panel. The state
    /// lock is only taken once both requests are done. A failed fetch is
    /// shown on the panel and also returned to the caller.
    ///
    async fn dashboard(&mut self, city: String, generation: u64) -> Result<(), AppError> {
        info!("Fetching weather and advice for '{}'...", city);
        let result = self.remote.dashboard(&city).await;
        let mut state = self.state.lock().await;
        match result {
            Ok(dashboard) => {
                info!(
                    "Received weather for {} and advice #{}.",
                    dashboard.weather.location_display(),
                    dashboard.advice.id
                );
                state.settle_dashboard(generation, Ok(dashboard));
                Ok(())
            }
            Err(e) => {
                state.settle_dashboard(generation, Err(&e));
                Err(AppError::Fetch(e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logger::LogBuffer;
    use crate::storage::Store;
    use crate::ui::Theme;
    use httpmock::MockServer;
    use serde_json::json;

    fn shared_state() -> (Arc<Mutex<State>>, std::sync::mpsc::Receiver<Event>) {
        let (tx, rx) = std::sync::mpsc::channel();
        let state = State::new(
            tx,
            Store::in_memory(),
            "Chicago".to_string(),
            Theme::default(),
            LogBuffer::default(),
        );
        (Arc::new(Mutex::new(state)), rx)
    }

    fn weather_body(name: &str, condition: &str) -> serde_json::Value {
        json!({
            "location": { "name": name, "region": "" },
            "current": {
                "temp_f": 71.6,
                "condition": { "text": condition },
                "humidity": 64,
                "wind_mph": 8.4
            }
        })
    }

    async fn mock_advice(server: &MockServer) {
        server
            .mock_async(|when, then| {
                when.method("GET").path("/advice");
                then.status(200)
                    .json_body(json!({ "slip": { "id": 42, "advice": "Stay hydrated." } }));
            })
            .await;
    }

    #[tokio::test]
    async fn dashboard_event_settles_data() -> Result<()> {
        let server = MockServer::start();
        server
            .mock_async(|when, then| {
                when.method("GET").path("/current.json").query_param("q", "Chicago");
                then.status(200).json_body(json!({
                    "location": { "name": "Chicago", "region": "Illinois" },
                    "current": {
                        "temp_f": 71.6,
                        "condition": { "text": "Light rain" },
                        "humidity": 64,
                        "wind_mph": 8.4
                    }
                }));
            })
            .await;
        mock_advice(&server).await;

        let (state, rx) = shared_state();
        let remote = Remote::with_endpoints(&server.base_url(), &server.base_url(), "key");
        let event = {
            let mut guard = state.lock().await;
            guard.request_dashboard();
            rx.try_recv()?
        };

        Handler::new(&state, &remote).handle(event).await?;

        let guard = state.lock().await;
        let dashboard = guard.fetch_state().dashboard().unwrap();
        assert_eq!(dashboard.weather.temperature_display(), "72°F");
        assert_eq!(dashboard.weather.wind_display(), "8 mph");
        assert_eq!(dashboard.weather.icon(), crate::api::RAIN_ICON);
        assert_eq!(dashboard.advice.text, "Stay hydrated.");
        Ok(())
    }

    #[tokio::test]
    async fn dashboard_event_settles_error_when_one_side_fails() -> Result<()> {
        let server = MockServer::start();
        server
            .mock_async(|when, then| {
                when.method("GET").path("/current.json");
                then.status(200).json_body(weather_body("Chicago", "Sunny"));
            })
            .await;
        server
            .mock_async(|when, then| {
                when.method("GET").path("/advice");
                then.status(500);
            })
            .await;

        let (state, rx) = shared_state();
        let remote = Remote::with_endpoints(&server.base_url(), &server.base_url(), "key");
        state.lock().await.request_dashboard();

        let error = Handler::new(&state, &remote)
            .handle(rx.try_recv()?)
            .await
            .unwrap_err();
        assert!(matches!(
            error.downcast_ref::<AppError>(),
            Some(AppError::Fetch(_))
        ));

        let guard = state.lock().await;
        assert!(guard.fetch_state().dashboard().is_none());
        assert!(guard.fetch_state().error().unwrap().contains("500"));
        Ok(())
    }

    #[tokio::test]
    async fn queued_requests_display_the_latest_city() -> Result<()> {
        let server = MockServer::start();
        server
            .mock_async(|when, then| {
                when.method("GET").path("/current.json").query_param("q", "Chicago");
                then.status(200).json_body(weather_body("Chicago", "Sunny"));
            })
            .await;
        server
            .mock_async(|when, then| {
                when.method("GET").path("/current.json").query_param("q", "Oslo");
                then.status(200).json_body(weather_body("Oslo", "Light snow"));
            })
            .await;
        mock_advice(&server).await;

        let (state, rx) = shared_state();
        let remote = Remote::with_endpoints(&server.base_url(), &server.base_url(), "key");
        {
            let mut guard = state.lock().await;
            guard.request_dashboard();
            guard.set_city("Oslo");
        }

        let mut handler = Handler::new(&state, &remote);
        let queued: Vec<Event> = rx.try_iter().collect();
        assert_eq!(queued.len(), 2);
        for event in queued {
            handler.handle(event).await?;
        }

        let guard = state.lock().await;
        let dashboard = guard.fetch_state().dashboard().unwrap();
        assert_eq!(guard.city(), "Oslo");
        assert_eq!(dashboard.weather.location_name, "Oslo");
        assert_eq!(dashboard.weather.icon(), crate::api::SNOW_ICON);
        Ok(())
    }

    #[tokio::test]
    async fn unreachable_weather_service_keeps_key_off_the_panel() -> Result<()> {
        let server = MockServer::start();
        mock_advice(&server).await;

        let (state, rx) = shared_state();
        let remote = Remote::with_endpoints(
            "http://127.0.0.1:9",
            &server.base_url(),
            "SUPERSECRETKEY",
        );
        state.lock().await.request_dashboard();

        let error = Handler::new(&state, &remote)
            .handle(rx.try_recv()?)
            .await
            .unwrap_err();
        assert!(!format!("{:#}", error).contains("SUPERSECRETKEY"));

        let guard = state.lock().await;
        let message = guard.fetch_state().error().unwrap();
        assert!(message.contains("127.0.0.1:9/current.json"));
        assert!(!message.contains("SUPERSECRETKEY"));
        Ok(())
    }
}
