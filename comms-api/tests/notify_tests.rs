/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 */

//! Integration tests for `/register` and `/send-notification` against a fake Notify API.


use axum::body::Body;
use axum::http::StatusCode;
use comms_api_types::{responses::MessageResponse, APIError, APIResponse};
use test_helpers::*;
use tower::ServiceExt;

#[tokio::test]
async fn test_register_forwards_binding_fields() {
    let (_server, addr, calls) = spawn_fake_notify().await;
    let mut config = test_config();
    config.notify_base_url = format!("http://{addr}");
    let app = build_app(config);

    let req = request("POST", "/register")
        .header("Content-Type", "application/json")
        .body(Body::from(
            r#"{"identity":"alice","BindingType":"fcm","Address":"device-token","endpoint":"alice-web"}"#,
        ))
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: MessageResponse = response_json(resp).await;
    assert_eq!(body.message, "Binding created!");

    let calls = calls.lock().unwrap();
    assert_eq!(calls.len(), 1);
    let call = &calls[0];
    assert_eq!(call.service_sid, "IS1");
    assert_eq!(call.resource, "Bindings");
    assert_eq!(call.authorization.as_deref(), Some(EXPECTED_BASIC_AUTH));
    assert_eq!(call.form.get("Identity").map(String::as_str), Some("alice"));
    assert_eq!(call.form.get("BindingType").map(String::as_str), Some("fcm"));
    assert_eq!(
        call.form.get("Address").map(String::as_str),
        Some("device-token")
    );
    assert_eq!(
        call.form.get("Endpoint").map(String::as_str),
        Some("alice-web")
    );
}

#[tokio::test]
async fn test_register_without_endpoint_omits_field() {
    let (_server, addr, calls) = spawn_fake_notify().await;
    let mut config = test_config();
    config.notify_base_url = format!("http://{addr}");
    let app = build_app(config);

    let req = request("POST", "/register")
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(Body::from("identity=bob&BindingType=sms&Address=%2B15555550100"))
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let calls = calls.lock().unwrap();
    assert_eq!(
        calls[0].form.get("Address").map(String::as_str),
        Some("+15555550100")
    );
    assert!(!calls[0].form.contains_key("Endpoint"));
}

#[tokio::test]
async fn test_register_missing_address_is_bad_request() {
    let (_server, addr, calls) = spawn_fake_notify().await;
    let mut config = test_config();
    config.notify_base_url = format!("http://{addr}");
    let app = build_app(config);

    let req = request("POST", "/register")
        .header("Content-Type", "application/json")
        .body(Body::from(r#"{"identity":"alice","BindingType":"fcm"}"#))
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: APIResponse<APIError> = response_json(resp).await;
    assert_eq!(body.result.code, "INVALID_REQUEST");
    assert!(calls.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_register_upstream_failure_is_bad_gateway() {
    let (_server, addr) = spawn_failing_notify(StatusCode::INTERNAL_SERVER_ERROR).await;
    let mut config = test_config();
    config.notify_base_url = format!("http://{addr}");
    let app = build_app(config);

    let req = request("POST", "/register")
        .header("Content-Type", "application/json")
        .body(Body::from(
            r#"{"identity":"alice","BindingType":"fcm","Address":"device-token"}"#,
        ))
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
    let body: APIResponse<APIError> = response_json(resp).await;
    assert_eq!(body.result.code, "UPSTREAM_ERROR");
}

#[tokio::test]
async fn test_register_without_notification_service_is_configuration_error() {
    let mut config = test_config();
    config.notification_service_sid = None;
    let app = build_app(config);

    let req = request("POST", "/register")
        .header("Content-Type", "application/json")
        .body(Body::from(
            r#"{"identity":"alice","BindingType":"fcm","Address":"device-token"}"#,
        ))
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: APIResponse<APIError> = response_json(resp).await;
    assert_eq!(body.result.code, "CONFIGURATION_ERROR");
}

#[tokio::test]
async fn test_send_notification_greets_identity() {
    let (_server, addr, calls) = spawn_fake_notify().await;
    let mut config = test_config();
    config.notify_base_url = format!("http://{addr}");
    let app = build_app(config);

    let req = request("POST", "/send-notification")
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(Body::from("identity=alice"))
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: MessageResponse = response_json(resp).await;
    assert_eq!(body.message, "Notification created!");

    let calls = calls.lock().unwrap();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].resource, "Notifications");
    assert_eq!(calls[0].form.get("Identity").map(String::as_str), Some("alice"));
    assert_eq!(
        calls[0].form.get("Body").map(String::as_str),
        Some("Hello alice!")
    );
}

#[tokio::test]
async fn test_send_notification_missing_identity_is_bad_request() {
    let (_server, addr, calls) = spawn_fake_notify().await;
    let mut config = test_config();
    config.notify_base_url = format!("http://{addr}");
    let app = build_app(config);

    let req = request("POST", "/send-notification")
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(Body::from(""))
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(calls.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_send_notification_upstream_unreachable_is_bad_gateway() {
    // Nothing listens on the discard port configured by `test_config`.
    let app = build_app(test_config());

    let req = request("POST", "/send-notification")
        .header("Content-Type", "application/json")
        .body(Body::from(r#"{"identity":"alice"}"#))
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn test_register_body_without_content_type_is_rejected() {
    let (_server, addr, calls) = spawn_fake_notify().await;
    let mut config = test_config();
    config.notify_base_url = format!("http://{addr}");
    let app = build_app(config);

    let req = request("POST", "/register")
        .body(Body::from(
            r#"{"identity":"alice","BindingType":"fcm","Address":"device-token"}"#,
        ))
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: APIResponse<APIError> = response_json(resp).await;
    assert_eq!(body.result.code, "INVALID_REQUEST");
    assert!(body.result.message.contains("unsupported content type"));
    assert!(calls.lock().unwrap().is_empty());
}
