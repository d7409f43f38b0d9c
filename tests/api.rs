use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use tower::ServiceExt;

use insolation_calc::config::Config;
use insolation_calc::shared_state::{AppState, SharedState};
use insolation_calc::{
    calculate_insolation, CollectorOrientation, Degrees, InsolationError, InsolationInput,
    ObservationInstant, Site,
};

fn shared() -> SharedState {
    SharedState { app: AppState::new(), config: Config::default() }
}

async fn json_body(resp: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[test]
fn reference_scenario_through_public_api() {
    let input = InsolationInput::new(
        Site { latitude: Degrees(33.7), longitude: Degrees(84.4), elevation_m: 75.5 },
        CollectorOrientation { azimuth: Degrees(20.0), tilt: Degrees(52.0) },
        ObservationInstant { day: 141, solar_time: 12.0 },
    );
    let (beam, diffuse, reflected, total) = calculate_insolation(&input).unwrap().as_tuple();
    assert!((beam - 696.548).abs() < 1e-3);
    assert!((diffuse - 88.138).abs() < 1e-3);
    assert!((reflected - 37.898).abs() < 1e-3);
    assert!((total - 822.584).abs() < 1e-3);
}

#[test]
fn longitude_and_elevation_do_not_change_the_result() {
    let base = InsolationInput::new(
        Site { latitude: Degrees(33.7), longitude: Degrees(0.0), elevation_m: 0.0 },
        CollectorOrientation { azimuth: Degrees(20.0), tilt: Degrees(52.0) },
        ObservationInstant { day: 141, solar_time: 9.5 },
    );
    let mut moved = base;
    moved.site.longitude = Degrees(-120.0);
    moved.site.elevation_m = 3000.0;
    assert_eq!(
        calculate_insolation(&base).unwrap().as_tuple(),
        calculate_insolation(&moved).unwrap().as_tuple()
    );
}

#[test]
fn concurrent_calls_agree() {
    let input = InsolationInput::new(
        Site { latitude: Degrees(-12.0), longitude: Degrees(0.0), elevation_m: 0.0 },
        CollectorOrientation { azimuth: Degrees(180.0), tilt: Degrees(15.0) },
        ObservationInstant { day: 200, solar_time: 11.0 },
    );
    let expected = calculate_insolation(&input).unwrap();
    let handles: Vec<_> = (0..8)
        .map(|_| std::thread::spawn(move || calculate_insolation(&input).unwrap()))
        .collect();
    for h in handles {
        assert_eq!(h.join().unwrap(), expected);
    }
}

#[test]
fn day_zero_is_rejected() {
    let input = InsolationInput::new(
        Site { latitude: Degrees(33.7), longitude: Degrees(0.0), elevation_m: 0.0 },
        CollectorOrientation { azimuth: Degrees(20.0), tilt: Degrees(52.0) },
        ObservationInstant { day: 0, solar_time: 12.0 },
    );
    assert_eq!(calculate_insolation(&input), Err(InsolationError::InvalidDay(0)));
}

#[tokio::test]
async fn post_insolation_returns_components() {
    let app = insolation_calc::app(shared());
    let body = serde_json::json!({
        "site": { "latitude": 33.7, "longitude": 84.4, "elevation_m": 75.5 },
        "collector": { "azimuth": 20.0, "tilt": 52.0 },
        "instant": { "day": 141, "solar_time": 12.0 }
    });
    let resp = app.oneshot(post_json("/api/insolation", body)).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let json = json_body(resp).await;
    let total = json["insolation"]["total"].as_f64().unwrap();
    assert!((total - 822.584).abs() < 1e-3);
    assert_eq!(json["sun_above_horizon"], true);
    assert_eq!(json["unmodeled_effects"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn post_insolation_rejects_out_of_domain() {
    let app = insolation_calc::app(shared());
    let body = serde_json::json!({
        "site": { "latitude": 91.0 },
        "collector": { "azimuth": 20.0, "tilt": 52.0 },
        "instant": { "day": 141, "solar_time": 12.0 }
    });
    let resp = app.oneshot(post_json("/api/insolation", body)).await.unwrap();
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json = json_body(resp).await;
    assert!(json["error"].as_str().unwrap().contains("latitude 91"));
}

#[tokio::test]
async fn daily_profile_endpoint() {
    let app = insolation_calc::app(shared());
    let body = serde_json::json!({
        "site": { "latitude": 33.7 },
        "collector": { "azimuth": 20.0, "tilt": 52.0 },
        "day": 141,
        "step_hours": 1.0
    });
    let resp = app.oneshot(post_json("/api/insolation/daily", body)).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let json = json_body(resp).await;
    assert_eq!(json["samples"].as_array().unwrap().len(), 25);
    assert!(json["totals"]["total_wh_m2"].as_f64().unwrap() > 0.0);
}

#[tokio::test]
async fn unsampled_site_is_not_found() {
    let app = insolation_calc::app(shared());
    let req = Request::builder()
        .uri("/api/sites/reference/insolation")
        .body(Body::empty())
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn health_and_sites() {
    let app = insolation_calc::app(shared());
    let req = Request::builder().uri("/api/health").body(Body::empty()).unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let json = json_body(resp).await;
    assert_eq!(json["sites_total"], 1);
    assert_eq!(json["sites_sampled"], 0);

    let req = Request::builder().uri("/api/sites").body(Body::empty()).unwrap();
    let resp = app.oneshot(req).await.unwrap();
    let json = json_body(resp).await;
    assert_eq!(json[0]["id"], "reference");
}

#[tokio::test]
async fn daily_profile_rejects_vanishing_step() {
    let app = insolation_calc::app(shared());
    let body = serde_json::json!({
        "site": { "latitude": 33.7 },
        "collector": { "azimuth": 20.0, "tilt": 52.0 },
        "day": 141,
        "step_hours": 1e-300
    });
    let resp = app.oneshot(post_json("/api/insolation/daily", body)).await.unwrap();
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json = json_body(resp).await;
    assert!(json["error"].as_str().unwrap().contains("profile step"));
}
