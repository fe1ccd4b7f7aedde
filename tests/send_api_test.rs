//
// Copyright (c) 2025 Nathan Fiedler
//
#![cfg(feature = "ssr")]

use actix_web::http::StatusCode;
use actix_web::{test, web, App};
use anyhow::{anyhow, Error};
use immo1301::domain::entities::InquiryMessage;
use immo1301::domain::sources::MailDataSource;
use immo1301::preso::api;
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};

// Records every message it is asked to deliver, optionally failing each
// attempt, so the tests can assert on send attempts without a live relay.
struct SpyMailSource {
    sent: Mutex<Vec<InquiryMessage>>,
    fail: bool,
}

impl SpyMailSource {
    fn new(fail: bool) -> Arc<Self> {
        Arc::new(Self {
            sent: Mutex::new(Vec::new()),
            fail,
        })
    }

    fn sent_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }

    fn last_message(&self) -> Option<InquiryMessage> {
        self.sent.lock().unwrap().last().cloned()
    }
}

impl MailDataSource for SpyMailSource {
    fn send_message(&self, message: &InquiryMessage) -> Result<(), Error> {
        self.sent.lock().unwrap().push(message.clone());
        if self.fail {
            Err(anyhow!("relay rejected the message"))
        } else {
            Ok(())
        }
    }
}

macro_rules! send_app {
    ($spy:expr) => {{
        let source: Arc<dyn MailDataSource> = $spy.clone();
        test::init_service(
            App::new()
                .app_data(web::Data::new(source))
                .service(web::resource("/api/send").route(web::post().to(api::send))),
        )
        .await
    }};
}

#[actix_rt::test]
async fn test_send_success_without_phone() {
    // arrange
    let spy = SpyMailSource::new(false);
    let app = send_app!(spy);
    // act
    let req = test::TestRequest::post()
        .uri("/api/send")
        .insert_header(("content-type", "application/json"))
        .set_payload(r#"{"name":"Anna Muster","email":"anna@example.ch"}"#)
        .to_request();
    let resp = test::call_service(&app, req).await;
    // assert
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "success": true }));
    assert_eq!(spy.sent_count(), 1);
    let message = spy.last_message().unwrap();
    assert!(message.text_body.contains("Telefon: Nicht angegeben"));
}

#[actix_rt::test]
async fn test_send_success_with_phone() {
    // arrange
    let spy = SpyMailSource::new(false);
    let app = send_app!(spy);
    // act
    let req = test::TestRequest::post()
        .uri("/api/send")
        .insert_header(("content-type", "application/json"))
        .set_payload(
            r#"{"name":"Anna Muster","email":"anna@example.ch","phone":"+41 79 123 45 67"}"#,
        )
        .to_request();
    let resp = test::call_service(&app, req).await;
    // assert
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(spy.sent_count(), 1);
    let message = spy.last_message().unwrap();
    assert!(message.text_body.contains("Telefon: +41 79 123 45 67"));
    assert!(message.html_body.contains("anna@example.ch"));
}

#[actix_rt::test]
async fn test_send_missing_name() {
    // arrange
    let spy = SpyMailSource::new(false);
    let app = send_app!(spy);
    // act
    let req = test::TestRequest::post()
        .uri("/api/send")
        .insert_header(("content-type", "application/json"))
        .set_payload(r#"{"name":"","email":"x@y.ch"}"#)
        .to_request();
    let resp = test::call_service(&app, req).await;
    // assert
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "error": "Name und E-Mail sind erforderlich." }));
    assert_eq!(spy.sent_count(), 0);
}

#[actix_rt::test]
async fn test_send_empty_object() {
    // arrange
    let spy = SpyMailSource::new(false);
    let app = send_app!(spy);
    // act
    let req = test::TestRequest::post()
        .uri("/api/send")
        .insert_header(("content-type", "application/json"))
        .set_payload("{}")
        .to_request();
    let resp = test::call_service(&app, req).await;
    // assert
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "error": "Name und E-Mail sind erforderlich." }));
    assert_eq!(spy.sent_count(), 0);
}

#[actix_rt::test]
async fn test_send_unparseable_body() {
    // arrange
    let spy = SpyMailSource::new(false);
    let app = send_app!(spy);
    // act
    let req = test::TestRequest::post()
        .uri("/api/send")
        .set_payload("this is not json")
        .to_request();
    let resp = test::call_service(&app, req).await;
    // assert
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "error": "Name und E-Mail sind erforderlich." }));
    assert_eq!(spy.sent_count(), 0);
}

#[actix_rt::test]
async fn test_send_relay_failure() {
    // arrange
    let spy = SpyMailSource::new(true);
    let app = send_app!(spy);
    // act
    let req = test::TestRequest::post()
        .uri("/api/send")
        .insert_header(("content-type", "application/json"))
        .set_payload(r#"{"name":"Anna Muster","email":"anna@example.ch"}"#)
        .to_request();
    let resp = test::call_service(&app, req).await;
    // assert
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "error": "Email konnte nicht gesendet werden." }));
    assert_eq!(spy.sent_count(), 1);
}

#[actix_rt::test]
async fn test_send_duplicate_submission() {
    // arrange
    let spy = SpyMailSource::new(false);
    let app = send_app!(spy);
    // act: the same payload twice triggers two independent deliveries
    for _ in 0..2 {
        let req = test::TestRequest::post()
            .uri("/api/send")
            .insert_header(("content-type", "application/json"))
            .set_payload(r#"{"name":"Anna Muster","email":"anna@example.ch"}"#)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }
    // assert
    assert_eq!(spy.sent_count(), 2);
}
