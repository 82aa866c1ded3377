//! Integration tests for the Nominatim client (wiremock-based)

use std::time::Duration;

use wiremock::matchers::{header_exists, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use integration_nominatim::{
    GeocodingClient, GeocodingError, NominatimConfig, NominatimGeocodingClient,
};

fn config_for_mock(base_url: &str) -> NominatimConfig {
    NominatimConfig {
        base_url: base_url.to_string(),
        timeout_secs: 2,
        cache_ttl_minutes: 0,
        ..NominatimConfig::default()
    }
}

const fn london_json() -> &'static str {
    r#"[{
        "place_id": 1,
        "lat": "51.5074",
        "lon": "-0.1278",
        "display_name": "London, UK",
        "address": { "city": "London", "country": "United Kingdom", "country_code": "gb" }
    }]"#
}

fn many_places_json(count: usize) -> String {
    let places: Vec<String> = (0..count)
        .map(|i| format!(r#"{{"lat": "1.{i}", "lon": "2.{i}", "display_name": "Place {i}"}}"#))
        .collect();
    format!("[{}]", places.join(","))
}

#[tokio::test]
async fn test_search_sends_expected_query() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("q", "Lond"))
        .and(query_param("format", "json"))
        .and(query_param("addressdetails", "1"))
        .and(query_param("limit", "5"))
        .and(header_exists("user-agent"))
        .respond_with(ResponseTemplate::new(200).set_body_string(london_json()))
        .expect(1)
        .mount(&server)
        .await;

    let client = NominatimGeocodingClient::new(&config_for_mock(&server.uri())).unwrap();
    let places = client.search("Lond", 5).await.unwrap();

    assert_eq!(places.len(), 1);
    assert_eq!(places[0].display_name, "London, UK");
    assert_eq!(places[0].lat, "51.5074");
    assert_eq!(places[0].lon, "-0.1278");
}

#[tokio::test]
async fn test_search_url_encodes_query() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("q", "MG Road & Brigade"))
        .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
        .expect(1)
        .mount(&server)
        .await;

    let client = NominatimGeocodingClient::new(&config_for_mock(&server.uri())).unwrap();
    let places = client.search("MG Road & Brigade", 5).await.unwrap();
    assert!(places.is_empty());
}

#[tokio::test]
async fn test_search_caps_results_in_provider_order() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_string(many_places_json(8)))
        .mount(&server)
        .await;

    let client = NominatimGeocodingClient::new(&config_for_mock(&server.uri())).unwrap();
    let places = client.search("Place", 5).await.unwrap();

    let names: Vec<&str> = places.iter().map(|p| p.display_name.as_str()).collect();
    assert_eq!(names, ["Place 0", "Place 1", "Place 2", "Place 3", "Place 4"]);
}

#[tokio::test]
async fn test_search_rate_limited() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(429).insert_header("retry-after", "30"))
        .mount(&server)
        .await;

    let client = NominatimGeocodingClient::new(&config_for_mock(&server.uri())).unwrap();
    let err = client.search("London", 5).await.unwrap_err();

    assert!(matches!(
        err,
        GeocodingError::RateLimitExceeded {
            retry_after_secs: Some(30)
        }
    ));
    assert!(err.is_retryable());
}

#[tokio::test]
async fn test_search_server_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let client = NominatimGeocodingClient::new(&config_for_mock(&server.uri())).unwrap();
    let err = client.search("London", 5).await.unwrap_err();
    assert!(matches!(err, GeocodingError::ServiceUnavailable(_)));
}

#[tokio::test]
async fn test_search_malformed_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let client = NominatimGeocodingClient::new(&config_for_mock(&server.uri())).unwrap();
    let err = client.search("London", 5).await.unwrap_err();
    assert!(matches!(err, GeocodingError::ParseError(_)));
}

#[tokio::test]
async fn test_search_timeout() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("[]")
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let config = NominatimConfig {
        timeout_secs: 1,
        ..config_for_mock(&server.uri())
    };
    let client = NominatimGeocodingClient::new(&config).unwrap();
    let err = client.search("London", 5).await.unwrap_err();
    assert!(matches!(err, GeocodingError::Timeout { timeout_secs: 1 }));
}

#[tokio::test]
async fn test_search_cache_hit_skips_second_request() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_string(london_json()))
        .expect(1)
        .mount(&server)
        .await;

    let config = NominatimConfig {
        cache_ttl_minutes: 10,
        ..config_for_mock(&server.uri())
    };
    let client = NominatimGeocodingClient::new(&config).unwrap();

    let first = client.search("London", 5).await.unwrap();
    let second = client.search("  LONDON ", 5).await.unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_search_without_cache_hits_provider_every_time() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_string(london_json()))
        .expect(2)
        .mount(&server)
        .await;

    let client = NominatimGeocodingClient::new(&config_for_mock(&server.uri())).unwrap();
    client.search("London", 5).await.unwrap();
    client.search("London", 5).await.unwrap();
}

#[tokio::test]
async fn test_search_passes_language_and_country_filters() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("accept-language", "en"))
        .and(query_param("countrycodes", "in"))
        .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
        .expect(1)
        .mount(&server)
        .await;

    let config = NominatimConfig {
        accept_language: Some("en".to_string()),
        country_codes: Some("in".to_string()),
        ..config_for_mock(&server.uri())
    };
    let client = NominatimGeocodingClient::new(&config).unwrap();
    client.search("Koramangala", 5).await.unwrap();
}

#[tokio::test]
async fn test_reverse_success() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/reverse"))
        .and(query_param("lat", "51.5074"))
        .and(query_param("lon", "-0.1278"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"lat": "51.5074", "lon": "-0.1278", "display_name": "Charing Cross, London"}"#,
        ))
        .mount(&server)
        .await;

    let client = NominatimGeocodingClient::new(&config_for_mock(&server.uri())).unwrap();
    let place = client.reverse(51.5074, -0.1278).await.unwrap();
    assert_eq!(place.display_name, "Charing Cross, London");
}

#[tokio::test]
async fn test_reverse_nothing_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/reverse"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(r#"{"error": "Unable to geocode"}"#),
        )
        .mount(&server)
        .await;

    let client = NominatimGeocodingClient::new(&config_for_mock(&server.uri())).unwrap();
    let err = client.reverse(0.0, 0.0).await.unwrap_err();
    assert!(matches!(err, GeocodingError::NotFound(ref msg) if msg == "Unable to geocode"));
}
