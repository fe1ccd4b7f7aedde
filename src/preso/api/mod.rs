//
// Copyright (c) 2025 Nathan Fiedler
//

//! The `api` module defines the JSON endpoint behind the contact form.

use crate::data::repositories::MailRepositoryImpl;
use crate::domain::entities::ContactSubmission;
use crate::domain::sources::MailDataSource;
use crate::domain::usecases::submit_inquiry::{InquiryError, Params, SubmitInquiry};
use crate::domain::usecases::UseCase;
use actix_web::{web, HttpResponse};
use log::error;
use serde_json::json;
use std::sync::Arc;

///
/// Handle one contact-form submission: validate the required fields, relay
/// the inquiry as an email, and report the outcome as JSON. An unparseable
/// body is treated as an empty submission, which then fails validation
/// rather than crashing the endpoint.
///
pub async fn send(
    source: web::Data<Arc<dyn MailDataSource>>,
    body: web::Bytes,
) -> HttpResponse {
    let submission: ContactSubmission = serde_json::from_slice(&body).unwrap_or_default();
    let repo = MailRepositoryImpl::new(source.get_ref().clone());
    let usecase = SubmitInquiry::new(Box::new(repo));
    match usecase.call(Params::new(submission)) {
        Ok(()) => HttpResponse::Ok().json(json!({ "success": true })),
        Err(err) => match err.downcast_ref::<InquiryError>() {
            Some(cause @ InquiryError::MissingFields) => {
                HttpResponse::BadRequest().json(json!({ "error": cause.to_string() }))
            }
            Some(cause) => {
                error!("inquiry mail delivery failed: {:?}", err);
                HttpResponse::InternalServerError().json(json!({ "error": cause.to_string() }))
            }
            None => {
                error!("inquiry mail delivery failed: {:?}", err);
                HttpResponse::InternalServerError()
                    .json(json!({ "error": "Email konnte nicht gesendet werden." }))
            }
        },
    }
}
