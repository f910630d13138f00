use std::sync::Arc;

use axum::{
    Router,
    routing::get,
};

use appointment_cell::router::appointment_routes;
use doctor_cell::router::doctor_routes;
use shared_config::AppConfig;

pub fn create_router(state: Arc<AppConfig>) -> Router {
    Router::new()
        .route("/", get(|| async { "MediBook API is running!" }))
        .nest("/doctors", doctor_routes(state.clone()))
        .nest("/appointments", appointment_routes(state))
}

#[cfg(test)]
mod tests {
    use super::*;

    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    fn app() -> Router {
        create_router(Arc::new(AppConfig::default()))
    }

    #[tokio::test]
    async fn root_reports_liveness() {
        let response = app()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn window_slots_route_is_mounted_under_doctors() {
        let body = r#"{"window":{"days":["Monday"],"start_hour":9,"end_hour":10}}"#;
        let response = app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/doctors/availability/window/slots")
                    .header("content-type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["slots"], serde_json::json!(["09:00", "09:30"]));
    }

    #[tokio::test]
    async fn invalid_window_is_bad_request() {
        let body = r#"{"window":{"days":["Monday"],"start_hour":9,"end_hour":9}}"#;
        let response = app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/doctors/availability/window/slots")
                    .header("content-type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    async fn post_json(uri: &str, body: &str) -> (StatusCode, serde_json::Value) {
        let response = app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header("content-type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn unknown_weekday_is_the_same_json_error_on_every_route() {
        let doctor = r#"{"id":"0b5e5a9e-1d7e-4c4f-9d55-3f0f4b6a7c11","available_days":["Moonday"],"available_time_start":"09:00","available_time_end":"12:00"}"#;
        let expected = serde_json::json!({ "error": "Unknown weekday name: Moonday" });

        let window = post_json(
            "/doctors/availability/window/slots",
            r#"{"window":{"days":["Moonday"],"start_hour":9,"end_hour":12}}"#,
        )
        .await;
        let slots = post_json(
            "/doctors/availability/slots",
            &format!(r#"{{"doctor":{},"date":"2099-01-05"}}"#, doctor),
        )
        .await;
        let dates = post_json(
            "/doctors/availability/dates",
            &format!(r#"{{"doctor":{},"days":7}}"#, doctor),
        )
        .await;

        for (status, body) in [window, slots, dates] {
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(body, expected);
        }
    }

    #[tokio::test]
    async fn malformed_booking_date_is_json_bad_request() {
        let body = r#"{"doctor":{"id":"0b5e5a9e-1d7e-4c4f-9d55-3f0f4b6a7c11","available_days":["Monday"],"available_time_start":"09:00","available_time_end":"12:00"},"user_id":"5d0c1f7e-2a7b-4c1e-8f3a-9b6d4e2c1a00","appointment_date":"next monday","time_slot":"09:00"}"#;

        let (status, json) = post_json("/appointments/prepare", body).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(json["error"].as_str().is_some_and(|msg| msg.contains("appointment_date")));
    }

    #[tokio::test]
    async fn unreadable_cancel_body_is_json_bad_request() {
        let (status, json) = post_json(
            "/appointments/0b5e5a9e-1d7e-4c4f-9d55-3f0f4b6a7c11/cancel",
            r#"{"status":"archived"}"#,
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(json["error"].is_string());
    }

    #[tokio::test]
    async fn cancel_route_is_mounted_under_appointments() {
        let response = app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/appointments/0b5e5a9e-1d7e-4c4f-9d55-3f0f4b6a7c11/cancel")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"status":"completed"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CONFLICT);
    }
}
