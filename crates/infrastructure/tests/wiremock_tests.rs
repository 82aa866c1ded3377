//! Integration tests for infrastructure crate
//!
//! Tests cover:
//! - Nominatim geocoding adapter against a mock server
//! - Suggestion service running on top of the adapter

use std::sync::Arc;

use application::ports::GeocodingPort;
use application::{ApplicationError, SearchOutcome, SuggestionService};
use domain::value_objects::Coordinate;
use integration_nominatim::NominatimConfig;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use infrastructure::NominatimGeocodingAdapter;

fn adapter_for(server: &MockServer) -> NominatimGeocodingAdapter {
    let config = NominatimConfig {
        base_url: server.uri(),
        ..NominatimConfig::for_testing()
    };
    NominatimGeocodingAdapter::from_config(&config).unwrap()
}

fn london_body() -> serde_json::Value {
    serde_json::json!([{
        "place_id": 1,
        "display_name": "London, UK",
        "lat": "51.5074",
        "lon": "-0.1278",
        "address": {
            "city": "London",
            "country": "United Kingdom",
            "country_code": "gb"
        }
    }])
}

// ============================================================================
// Geocoding adapter
// ============================================================================

mod geocoding_adapter_tests {
    use super::*;

    #[tokio::test]
    async fn search_converts_places() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search"))
            .and(query_param("q", "Lond"))
            .and(query_param("addressdetails", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(london_body()))
            .expect(1)
            .mount(&server)
            .await;

        let suggestions = adapter_for(&server).search("Lond", 5).await.unwrap();

        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].display_name(), "London, UK");
        assert_eq!(suggestions[0].coordinate().unwrap(), Coordinate::london());
        assert_eq!(
            suggestions[0].address().and_then(|a| a.city.as_deref()),
            Some("London")
        );
    }

    #[tokio::test]
    async fn server_error_is_external_service_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let err = adapter_for(&server).search("Lond", 5).await.unwrap_err();
        assert!(matches!(err, ApplicationError::ExternalService(_)));
    }

    #[tokio::test]
    async fn reverse_returns_label() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/reverse"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "display_name": "Westminster, London",
                "lat": "51.5074",
                "lon": "-0.1278"
            })))
            .mount(&server)
            .await;

        let label = adapter_for(&server)
            .reverse(&Coordinate::london())
            .await
            .unwrap();
        assert_eq!(label.as_deref(), Some("Westminster, London"));
    }

    #[tokio::test]
    async fn reverse_nothing_found_is_none() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/reverse"))
            .respond_with(
                ResponseTemplate::new(200).set_body_string(r#"{"error": "Unable to geocode"}"#),
            )
            .mount(&server)
            .await;

        let label = adapter_for(&server)
            .reverse(&Coordinate::new(0.0, 0.0).unwrap())
            .await
            .unwrap();
        assert!(label.is_none());
    }
}

// ============================================================================
// Suggestion service over HTTP
// ============================================================================

mod suggestion_service_tests {
    use super::*;

    #[tokio::test]
    async fn malformed_entries_are_dropped_end_to_end() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                { "display_name": "Broken", "lat": "n/a", "lon": "0" },
                { "display_name": "London, UK", "lat": "51.5074", "lon": "-0.1278" }
            ])))
            .mount(&server)
            .await;

        let service = SuggestionService::new(Arc::new(adapter_for(&server)));
        let SearchOutcome::Suggestions(list) = service.fetch("Lond").await else {
            panic!("expected suggestions");
        };
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].display_name(), "London, UK");
    }

    #[tokio::test]
    async fn short_query_sends_nothing() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(london_body()))
            .expect(0)
            .mount(&server)
            .await;

        let service = SuggestionService::new(Arc::new(adapter_for(&server)));
        assert_eq!(service.fetch("Lo").await, SearchOutcome::Suggestions(vec![]));
    }

    #[tokio::test]
    async fn garbage_body_is_unavailable() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let service = SuggestionService::new(Arc::new(adapter_for(&server)));
        assert!(matches!(
            service.fetch("Lond").await,
            SearchOutcome::Unavailable(_)
        ));
    }
}
