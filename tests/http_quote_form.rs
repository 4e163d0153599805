/// Integration tests for the HTML form and the JSON quote API
use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use rental_quote::{
    config::Config,
    handlers::{api::QuoteApiResponse, AppState},
    pricing::{CarClass, PricingEngine, PricingPolicy},
    server::create_router,
    templates::TemplateSet,
};
use tower::ServiceExt;

fn app_with_policy(policy: PricingPolicy) -> Router {
    let state = AppState::new(PricingEngine::new(policy), TemplateSet::builtin());
    create_router(&Config::default(), state, None)
}

fn app() -> Router {
    app_with_policy(PricingPolicy::default())
}

async fn body_string(response: axum::response::Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn form_post(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn json_post(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/quote")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_get_returns_empty_form() {
    let response = app()
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let page = body_string(response).await;
    assert!(page.contains("<form"));
    assert!(!page.contains("Your quotes"));
}

#[tokio::test]
async fn test_post_renders_all_classes() {
    let response = app()
        .oneshot(form_post(
            "pickupDate=2020-01-01&dropoffDate=2020-01-04&driverAge=20&driverLicenseAge=20",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let page = body_string(response).await;

    assert!(page.contains("<p class=\"price\">$80</p>"));
    assert_eq!(
        page.matches("Drivers 21 y/o or less can only rent Compact vehicles").count(),
        3
    );
    assert!(!page.contains("$price"));
}

#[tokio::test]
async fn test_post_without_license_age_uses_simple_rules() {
    let response = app()
        .oneshot(form_post("pickupDate=2020-05-01&dropoffDate=2020-05-04&driverAge=25"))
        .await
        .unwrap();

    let page = body_string(response).await;
    assert!(page.contains("<p class=\"price\">$115</p>"));
    assert!(page.contains("<p class=\"price\">$173</p>"));
}

#[tokio::test]
async fn test_post_with_bad_date_is_bad_request() {
    let response = app()
        .oneshot(form_post("pickupDate=yesterday&dropoffDate=2020-01-04&driverAge=30"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_string(response).await;
    assert!(body.contains("pickupDate"));
    assert!(body.contains("invalid_request"));
}

#[tokio::test]
async fn test_post_with_missing_field_is_bad_request() {
    let response = app()
        .oneshot(form_post("pickupDate=2020-01-01&dropoffDate=2020-01-04"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_api_quote_single_class() {
    let response = app()
        .oneshot(json_post(
            r#"{"pickupDate":"2020-05-01","dropoffDate":"2020-05-04","driverAge":25,"driverLicenseAge":20,"carType":"Racer"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let parsed: QuoteApiResponse = serde_json::from_str(&body_string(response).await).unwrap();

    assert_eq!(parsed.quotes.len(), 1);
    assert_eq!(parsed.quotes[0].car_class, CarClass::Racer);
    assert_eq!(parsed.quotes[0].quote, "$173");
    assert_eq!(parsed.quotes[0].amount, Some(173.0));
    assert_eq!(parsed.quotes[0].rejection, None);
}

#[tokio::test]
async fn test_api_quote_all_classes_with_rejections() {
    let response = app()
        .oneshot(json_post(
            r#"{"pickupDate":"2020-01-01","dropoffDate":"2020-01-04","driverAge":50,"driverLicenseAge":0}"#,
        ))
        .await
        .unwrap();

    let parsed: QuoteApiResponse = serde_json::from_str(&body_string(response).await).unwrap();

    assert_eq!(parsed.quotes.len(), 4);
    for entry in &parsed.quotes {
        assert_eq!(entry.rejection.as_deref(), Some("license_too_new"));
        assert_eq!(entry.amount, None);
    }
}

#[tokio::test]
async fn test_api_unknown_car_type_is_priced() {
    let response = app()
        .oneshot(json_post(
            r#"{"pickupDate":"2020-01-01","dropoffDate":"2020-01-04","driverAge":40,"carType":"Minivan"}"#,
        ))
        .await
        .unwrap();

    let parsed: QuoteApiResponse = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(parsed.quotes[0].car_class, CarClass::Unknown);
    assert_eq!(parsed.quotes[0].quote, "$160");
}

#[tokio::test]
async fn test_api_rejects_malformed_json() {
    let response = app()
        .oneshot(json_post(r#"{"pickupDate":"2020-01-01"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_weekend_policy_applies_through_http() {
    let policy = PricingPolicy {
        weekend_pricing: true,
        ..PricingPolicy::default()
    };

    let response = app_with_policy(policy)
        .oneshot(json_post(
            r#"{"pickupDate":"2020-01-01","dropoffDate":"2020-01-04","driverAge":50,"carType":"Compact"}"#,
        ))
        .await
        .unwrap();

    let parsed: QuoteApiResponse = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(parsed.quotes[0].quote, "$210");
}

#[tokio::test]
async fn test_static_files_served_from_public() {
    let response = app()
        .oneshot(Request::builder().uri("/style.css").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}
