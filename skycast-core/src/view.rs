//! Client-held view state and its transitions.
//!
//! The page is a small state machine: Loading on every request, then Success
//! (a fresh snapshot) or Error (a message), either of which holds until the
//! next request. Requests are awaited inline, so a second search submitted
//! while one is in flight simply applies whichever result lands last.

use crate::{
    client::{FetchError, LocationQuery, WeatherSource},
    display::UnitPreference,
    model::{Envelope, WeatherSnapshot},
};

const DEFAULT_LOAD_API_FALLBACK: &str = "Failed to fetch default weather data";
const DEFAULT_LOAD_TRANSPORT_FALLBACK: &str =
    "Failed to fetch default weather data. Please try searching manually.";
const SEARCH_API_FALLBACK: &str = "Failed to fetch weather data";
const SEARCH_TRANSPORT_FALLBACK: &str = "Failed to fetch weather data. Please try again.";

/// The pieces of state the page owns: current snapshot, loading flag, error
/// message, unit preference, and the search text.
#[derive(Debug, Default)]
pub struct ViewState {
    pub snapshot: Option<WeatherSnapshot>,
    pub loading: bool,
    pub error: Option<String>,
    pub unit: UnitPreference,
    pub search_text: String,
}

/// The weather page: owns the view state and the source it fetches from.
#[derive(Debug)]
pub struct WeatherView<S: WeatherSource> {
    source: S,
    default_location: String,
    pub state: ViewState,
}

impl<S: WeatherSource> WeatherView<S> {
    /// The view starts out loading, before the initial fetch resolves.
    pub fn new(source: S, default_location: impl Into<String>) -> Self {
        Self {
            source,
            default_location: default_location.into(),
            state: ViewState {
                loading: true,
                ..ViewState::default()
            },
        }
    }

    /// Initial load of the configured default location.
    pub async fn load_default(&mut self) {
        self.state.loading = true;

        let query = LocationQuery::parse(&self.default_location);
        let outcome = self.source.fetch(&query).await;

        self.apply(outcome, DEFAULT_LOAD_API_FALLBACK, DEFAULT_LOAD_TRANSPORT_FALLBACK);
    }

    /// Submit the current search text. Empty or whitespace-only input is a
    /// no-op: no state change, no request.
    pub async fn submit_search(&mut self) {
        let trimmed = self.state.search_text.trim().to_string();
        if trimmed.is_empty() {
            return;
        }

        self.state.loading = true;
        self.state.error = None;

        let query = LocationQuery::parse(&trimmed);
        let outcome = self.source.fetch(&query).await;

        self.apply(outcome, SEARCH_API_FALLBACK, SEARCH_TRANSPORT_FALLBACK);
    }

    /// Pure state change; no request.
    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.state.search_text = text.into();
    }

    /// Pure state change; affects only the presentation transforms.
    pub fn set_unit(&mut self, unit: UnitPreference) {
        self.state.unit = unit;
    }

    pub fn toggle_unit(&mut self) {
        self.state.unit = self.state.unit.toggled();
    }

    fn apply(
        &mut self,
        outcome: Result<Envelope, FetchError>,
        api_fallback: &str,
        transport_fallback: &str,
    ) {
        match outcome {
            Ok(envelope) => {
                if envelope.success && envelope.data.is_some() {
                    self.state.snapshot = envelope.data;
                } else {
                    // Only a truly empty message falls back; whatever else the
                    // API said is shown verbatim.
                    let message = if envelope.message.is_empty() {
                        api_fallback.to_string()
                    } else {
                        envelope.message
                    };
                    self.state.error = Some(message);
                }
            }
            Err(_) => {
                self.state.error = Some(transport_fallback.to_string());
            }
        }

        // Loading clears regardless of outcome.
        self.state.loading = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Coord;
    use async_trait::async_trait;
    use std::sync::{
        Mutex,
        atomic::{AtomicUsize, Ordering},
    };

    fn sample_snapshot() -> WeatherSnapshot {
        WeatherSnapshot {
            temp: 25.0,
            feels_like: 26.0,
            temp_min: 21.0,
            temp_max: 28.0,
            humidity: 60,
            pressure: 1015.0,
            wind_speed: 3.0,
            wind_deg: 180,
            clouds: 10,
            visibility: 10_000,
            conditions: "Clear".to_string(),
            description: "clear sky".to_string(),
            icon: "01d".to_string(),
            location: "Nairobi".to_string(),
            country: "KE".to_string(),
            sunrise: 1_717_383_600,
            sunset: 1_717_426_800,
            timezone: 10_800,
            dt: 1_717_400_000,
            coord: Coord {
                lon: 36.82,
                lat: -1.28,
            },
        }
    }

    fn success_envelope() -> Envelope {
        Envelope {
            success: true,
            message: String::new(),
            data: Some(sample_snapshot()),
        }
    }

    fn failure_envelope(message: &str) -> Envelope {
        Envelope {
            success: false,
            message: message.to_string(),
            data: None,
        }
    }

    fn transport_error() -> FetchError {
        FetchError::Status {
            status: reqwest::StatusCode::BAD_GATEWAY,
            body: "upstream down".to_string(),
        }
    }

    /// Pops one canned result per fetch and counts the calls.
    #[derive(Debug)]
    struct StubSource {
        responses: Mutex<Vec<Result<Envelope, FetchError>>>,
        calls: AtomicUsize,
    }

    impl StubSource {
        fn with(responses: Vec<Result<Envelope, FetchError>>) -> Self {
            Self {
                responses: Mutex::new(responses),
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl WeatherSource for StubSource {
        async fn fetch(&self, _query: &LocationQuery) -> Result<Envelope, FetchError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.responses
                .lock()
                .expect("stub lock")
                .remove(0)
        }
    }

    #[tokio::test]
    async fn initial_load_stores_the_snapshot() {
        let source = StubSource::with(vec![Ok(success_envelope())]);
        let mut view = WeatherView::new(source, "Kenya");

        assert!(view.state.loading);
        view.load_default().await;

        assert!(!view.state.loading);
        assert!(view.state.error.is_none());
        let snapshot = view.state.snapshot.as_ref().expect("snapshot stored");
        assert_eq!(snapshot.location, "Nairobi");
        assert_eq!(snapshot.country, "KE");
    }

    #[tokio::test]
    async fn initial_load_api_failure_uses_its_message() {
        let source = StubSource::with(vec![Ok(failure_envelope("City not found"))]);
        let mut view = WeatherView::new(source, "Atlantis");

        view.load_default().await;

        assert!(!view.state.loading);
        assert_eq!(view.state.error.as_deref(), Some("City not found"));
        assert!(view.state.snapshot.is_none());
    }

    #[tokio::test]
    async fn initial_load_empty_message_falls_back() {
        let source = StubSource::with(vec![Ok(failure_envelope(""))]);
        let mut view = WeatherView::new(source, "Kenya");

        view.load_default().await;

        assert_eq!(
            view.state.error.as_deref(),
            Some("Failed to fetch default weather data")
        );
    }

    #[tokio::test]
    async fn initial_load_transport_failure_uses_its_own_fallback() {
        let source = StubSource::with(vec![Err(transport_error())]);
        let mut view = WeatherView::new(source, "Kenya");

        view.load_default().await;

        assert!(!view.state.loading);
        assert_eq!(
            view.state.error.as_deref(),
            Some("Failed to fetch default weather data. Please try searching manually.")
        );
    }

    #[tokio::test]
    async fn empty_search_is_a_complete_no_op() {
        let source = StubSource::with(vec![]);
        let mut view = WeatherView::new(source, "Kenya");
        view.state.loading = false;

        view.set_search_text("   ");
        view.submit_search().await;

        assert!(!view.state.loading);
        assert!(view.state.error.is_none());
        assert_eq!(view.source.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn search_trims_clears_error_and_stores_result() {
        let source = StubSource::with(vec![Ok(success_envelope())]);
        let mut view = WeatherView::new(source, "Kenya");
        view.state.error = Some("City not found".to_string());

        view.set_search_text("  Nairobi  ");
        view.submit_search().await;

        assert!(view.state.error.is_none());
        assert!(view.state.snapshot.is_some());
        assert_eq!(view.source.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn search_transport_failure_message_differs_from_api_case() {
        let source = StubSource::with(vec![Err(transport_error())]);
        let mut view = WeatherView::new(source, "Kenya");

        view.set_search_text("Nairobi");
        view.submit_search().await;

        assert_eq!(
            view.state.error.as_deref(),
            Some("Failed to fetch weather data. Please try again.")
        );
    }

    #[tokio::test]
    async fn search_api_failure_with_empty_message_falls_back() {
        let source = StubSource::with(vec![Ok(failure_envelope(""))]);
        let mut view = WeatherView::new(source, "Kenya");

        view.set_search_text("Atlantis");
        view.submit_search().await;

        assert_eq!(
            view.state.error.as_deref(),
            Some("Failed to fetch weather data")
        );
    }

    #[tokio::test]
    async fn whitespace_only_message_is_displayed_verbatim() {
        let source = StubSource::with(vec![Ok(failure_envelope(" "))]);
        let mut view = WeatherView::new(source, "Kenya");

        view.set_search_text("Atlantis");
        view.submit_search().await;

        assert_eq!(view.state.error.as_deref(), Some(" "));
    }

    #[tokio::test]
    async fn successful_true_without_data_is_treated_as_failure() {
        let envelope = Envelope {
            success: true,
            message: String::new(),
            data: None,
        };
        let source = StubSource::with(vec![Ok(envelope)]);
        let mut view = WeatherView::new(source, "Kenya");

        view.load_default().await;

        assert!(view.state.snapshot.is_none());
        assert_eq!(
            view.state.error.as_deref(),
            Some("Failed to fetch default weather data")
        );
    }

    #[tokio::test]
    async fn failed_search_keeps_the_previous_snapshot() {
        let source = StubSource::with(vec![
            Ok(success_envelope()),
            Ok(failure_envelope("City not found")),
        ]);
        let mut view = WeatherView::new(source, "Kenya");

        view.load_default().await;
        view.set_search_text("Atlantis");
        view.submit_search().await;

        // The snapshot stays; the error notice replaces it at render time.
        assert!(view.state.snapshot.is_some());
        assert_eq!(view.state.error.as_deref(), Some("City not found"));
    }

    #[tokio::test]
    async fn unit_toggle_is_pure_state() {
        let source = StubSource::with(vec![]);
        let mut view = WeatherView::new(source, "Kenya");

        assert_eq!(view.state.unit, UnitPreference::Celsius);
        view.toggle_unit();
        assert_eq!(view.state.unit, UnitPreference::Fahrenheit);
        view.toggle_unit();
        assert_eq!(view.state.unit, UnitPreference::Celsius);
        assert_eq!(view.source.calls.load(Ordering::SeqCst), 0);
    }
}
