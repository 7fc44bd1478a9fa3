//! HttpProvider against a mock ephemeris service.

use chrono::{NaiveDate, NaiveTime};
use kundali_charts::*;
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn birth() -> BirthInput {
    BirthInput::new(
        NaiveDate::from_ymd_opt(2001, 3, 21).unwrap(),
        NaiveTime::from_hms_opt(23, 45, 10).unwrap(),
        -4.0,
        40.71,
        -74.0,
    )
}

fn core_body() -> serde_json::Value {
    json!({
        "planets": [
            {"planet": "Ascendant", "longitude": 125.0},
            {"planet": "Sun", "longitude": 95.0},
            {"planet": "Rahu", "longitude": 200.0}
        ],
        "ayanamsha": 23.86,
        "houseCusps": [125.0, 155.0, 185.0, 215.0, 245.0, 275.0,
                       305.0, 335.0, 365.0, 35.0, 65.0, 95.0]
    })
}

fn provider_for(server: &MockServer, api_key: Option<&str>) -> HttpProvider {
    let mut config = ProviderConfig::new(server.uri());
    config.api_key = api_key.map(str::to_string);
    HttpProvider::new(&config).unwrap()
}

#[tokio::test]
async fn posts_birth_input_and_decodes_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/core"))
        .and(body_partial_json(json!({"date": "2001-03-21", "nodeType": "true"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(core_body()))
        .expect(1)
        .mount(&server)
        .await;

    let provider = provider_for(&server, None);
    let charts = build_vedic_charts(&provider, &birth()).await.unwrap();

    assert_eq!(charts.d1.ascendant.sign, 4);
    assert_eq!(charts.meta.ayanamsha, Some(23.86));
    let cusps = charts.meta.house_cusps.unwrap();
    assert!((cusps[8] - 5.0).abs() < 1e-10, "cusp normalized: {}", cusps[8]);
}

#[tokio::test]
async fn sends_bearer_token_when_configured() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/core"))
        .and(header("authorization", "Bearer s3cret"))
        .respond_with(ResponseTemplate::new(200).set_body_json(core_body()))
        .expect(1)
        .mount(&server)
        .await;

    let provider = provider_for(&server, Some("s3cret"));
    let response = provider.get_core(&birth()).await.unwrap();
    assert_eq!(response.planets.len(), 3);
}

#[tokio::test]
async fn error_status_maps_to_api_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/core"))
        .respond_with(ResponseTemplate::new(422).set_body_string("date out of range"))
        .mount(&server)
        .await;

    let provider = provider_for(&server, None);
    let err = build_vedic_charts(&provider, &birth()).await.unwrap_err();
    assert_eq!(
        err,
        ChartError::Provider(ProviderError::Api {
            status: 422,
            message: "date out of range".into()
        })
    );
}

#[tokio::test]
async fn empty_error_body_falls_back_to_reason_phrase() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/core"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let provider = provider_for(&server, None);
    let err = provider.get_core(&birth()).await.unwrap_err();
    assert_eq!(
        err,
        ProviderError::Api {
            status: 503,
            message: "Service Unavailable".into()
        }
    );
}

#[tokio::test]
async fn malformed_body_maps_to_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/core"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"planets": "nope"})))
        .mount(&server)
        .await;

    let provider = provider_for(&server, None);
    let err = provider.get_core(&birth()).await.unwrap_err();
    assert!(matches!(err, ProviderError::Decode(_)), "{err}");
}

#[tokio::test]
async fn unreachable_service_maps_to_network_error() {
    let mut config = ProviderConfig::new("http://127.0.0.1:1");
    config.timeout_secs = 5;
    let provider = HttpProvider::new(&config).unwrap();
    let err = provider.get_core(&birth()).await.unwrap_err();
    assert!(matches!(err, ProviderError::Network(_)), "{err}");
}

#[tokio::test]
async fn service_from_config_uses_http_provider() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/core"))
        .respond_with(ResponseTemplate::new(200).set_body_json(core_body()))
        .mount(&server)
        .await;

    let service = ChartService::from_config(&ProviderConfig::new(server.uri())).unwrap();
    assert_eq!(service.provider_name(), "http");
    let charts = service.build(&birth()).await.unwrap();
    assert!(charts.d1.planet(Planet::Ketu).is_some());
}
