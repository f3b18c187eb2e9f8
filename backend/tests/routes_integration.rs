//! End-to-end tests of the HTTP surface through `tower::ServiceExt::oneshot`.

use axum::http::{header, StatusCode};
use roman_numeral::http::dto::{ConversionResponse, HealthResponse};
use roman_numeral::services::RequestLabels;

mod support;
use support::{get, test_app};

#[tokio::test]
async fn test_ping_returns_pong() {
    let (router, _) = test_app();
    let res = get(&router, "/ping").await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body, "pong");
}

#[tokio::test]
async fn test_romannumeral_converts() {
    let (router, state) = test_app();
    let res = get(&router, "/romannumeral?query=123").await;
    assert_eq!(res.status, StatusCode::OK);

    let body: ConversionResponse = serde_json::from_str(&res.body).unwrap();
    assert_eq!(
        body,
        ConversionResponse {
            input: "123".to_string(),
            output: "CXXIII".to_string(),
        }
    );
    assert_eq!(state.metrics.conversion_count(), 1);
    assert_eq!(state.metrics.failure_count(), 0);
}

#[tokio::test]
async fn test_romannumeral_echoes_original_input() {
    let (router, _) = test_app();
    let res = get(&router, "/romannumeral?query=%201994").await;
    assert_eq!(res.status, StatusCode::OK);

    let body: ConversionResponse = serde_json::from_str(&res.body).unwrap();
    assert_eq!(body.input, " 1994");
    assert_eq!(body.output, "MCMXCIV");
}

#[tokio::test]
async fn test_romannumeral_rejections() {
    let cases = [
        ("/romannumeral", "Input must not be null or undefined"),
        ("/romannumeral?query=", "Input must not be null or undefined"),
        ("/romannumeral?query=invalid", "Input must be a number"),
        ("/romannumeral?query=3.14", "Only integer values are allowed"),
        ("/romannumeral?query=-2.5", "Only integer values are allowed"),
        ("/romannumeral?query=0", "Number must be between 1 and 3999"),
        ("/romannumeral?query=-5", "Number must be between 1 and 3999"),
        ("/romannumeral?query=4000", "Number must be between 1 and 3999"),
    ];

    let (router, state) = test_app();
    for (uri, message) in cases {
        let res = get(&router, uri).await;
        assert_eq!(res.status, StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(res.body, message, "{uri}");
    }
    assert_eq!(state.metrics.failure_count(), cases.len() as u64);
    assert_eq!(state.metrics.conversion_count(), 0);
}

#[tokio::test]
async fn test_metrics_exposition() {
    let (router, _) = test_app();
    get(&router, "/romannumeral?query=10").await;
    get(&router, "/romannumeral?query=abc").await;

    let res = get(&router, "/metrics").await;
    assert_eq!(res.status, StatusCode::OK);
    assert!(res.headers[header::CONTENT_TYPE]
        .to_str()
        .unwrap()
        .starts_with("text/plain"));
    assert!(res.body.contains("# HELP roman_conversion_total"));
    assert!(res.body.contains("roman_conversion_total{input=\"10\"} 1"));
    assert!(res.body.contains("roman_conversion_failures_total 1"));
    assert!(res
        .body
        .contains("http_requests_total{method=\"GET\",route=\"/romannumeral\",status=\"400\"} 1"));
}

#[tokio::test]
async fn test_requests_are_counted_by_status() {
    let (router, state) = test_app();
    get(&router, "/ping").await;
    get(&router, "/ping").await;

    let labels = RequestLabels {
        method: "GET".to_string(),
        route: "/ping".to_string(),
        status: 200,
    };
    assert_eq!(state.metrics.request_count(&labels), 2);
}

#[tokio::test]
async fn test_request_id_header() {
    let (router, _) = test_app();
    let res = get(&router, "/ping").await;
    let id = res.headers["x-request-id"].to_str().unwrap();
    assert!(uuid::Uuid::parse_str(id).is_ok());
}

#[tokio::test]
async fn test_health() {
    let (router, _) = test_app();
    let res = get(&router, "/health").await;
    assert_eq!(res.status, StatusCode::OK);

    let health: HealthResponse = serde_json::from_str(&res.body).unwrap();
    assert_eq!(health.status, "ok");
    assert_eq!(health.version, env!("CARGO_PKG_VERSION"));
    assert!(health.uptime_seconds >= 0);
}

#[tokio::test]
async fn test_index_serves_client() {
    let (router, _) = test_app();
    let res = get(&router, "/").await;
    assert_eq!(res.status, StatusCode::OK);
    assert!(res.body.contains("Roman Numeral Converter"));
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let (router, _) = test_app();
    let res = get(&router, "/nope").await;
    assert_eq!(res.status, StatusCode::NOT_FOUND);
    assert_eq!(res.body, "No route for /nope");
}

#[tokio::test]
async fn test_repeated_query_key_uses_first_value() {
    let (router, state) = test_app();
    let res = get(&router, "/romannumeral?query=1&query=2").await;
    assert_eq!(res.status, StatusCode::OK);

    let body: ConversionResponse = serde_json::from_str(&res.body).unwrap();
    assert_eq!(body.input, "1");
    assert_eq!(body.output, "I");
    assert_eq!(state.metrics.conversion_count(), 1);
    assert_eq!(state.metrics.failure_count(), 0);
}

#[tokio::test]
async fn test_non_utf8_query_is_a_counted_rejection() {
    let (router, state) = test_app();
    let res = get(&router, "/romannumeral?query=%FF").await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(res.body, "Input must be a number");
    assert_eq!(state.metrics.failure_count(), 1);
}

#[tokio::test]
async fn test_unmatched_paths_share_one_series() {
    let (router, state) = test_app();
    for n in 0..50 {
        let res = get(&router, &format!("/junk{n}")).await;
        assert_eq!(res.status, StatusCode::NOT_FOUND);
    }

    let labels = RequestLabels {
        method: "GET".to_string(),
        route: "<unmatched>".to_string(),
        status: 404,
    };
    assert_eq!(state.metrics.request_count(&labels), 50);
    assert_eq!(state.metrics.request_series(), 1);
    assert!(!state.metrics.render().contains("/junk"));
}

#[tokio::test]
async fn test_conversion_series_keyed_by_value() {
    let (router, state) = test_app();
    for zeros in 1..=50 {
        let uri = format!("/romannumeral?query=12.{}", "0".repeat(zeros));
        let res = get(&router, &uri).await;
        assert_eq!(res.status, StatusCode::OK, "{uri}");
    }

    assert_eq!(state.metrics.conversion_count(), 50);
    assert_eq!(state.metrics.conversion_series(), 1);
    assert!(state
        .metrics
        .render()
        .contains("roman_conversion_total{input=\"12\"} 50"));
}
