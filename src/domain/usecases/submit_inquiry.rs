//
// Copyright (c) 2025 Nathan Fiedler
//
use crate::domain::entities::{ContactSubmission, InquiryMessage};
use crate::domain::repositories::MailRepository;
use anyhow::Error;
use std::cmp;
use std::fmt;

/// Errors that can arise from submitting an inquiry. The display text is the
/// exact message returned to the client.
#[derive(thiserror::Error, Debug)]
pub enum InquiryError {
    /// One or both of the required fields were missing or blank.
    #[error("Name und E-Mail sind erforderlich.")]
    MissingFields,
    /// The mail relay rejected the message or could not be reached.
    #[error("Email konnte nicht gesendet werden.")]
    SendFailed(anyhow::Error),
}

///
/// Validate one contact submission, compose the notification mail, and
/// dispatch it through the mail relay. Validation failures never reach the
/// relay, and a failed dispatch is surfaced directly without any retry.
///
pub struct SubmitInquiry {
    repo: Box<dyn MailRepository>,
}

impl SubmitInquiry {
    pub fn new(repo: Box<dyn MailRepository>) -> Self {
        Self { repo }
    }
}

impl super::UseCase<(), Params> for SubmitInquiry {
    fn call(&self, params: Params) -> Result<(), Error> {
        if !params.submission.is_complete() {
            return Err(InquiryError::MissingFields.into());
        }
        let message = InquiryMessage::compose(&params.submission);
        self.repo
            .send_message(&message)
            .map_err(|err| InquiryError::SendFailed(err).into())
    }
}

pub struct Params {
    /// The submission received from the contact form.
    submission: ContactSubmission,
}

impl Params {
    pub fn new(submission: ContactSubmission) -> Self {
        Self { submission }
    }
}

impl fmt::Display for Params {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Params({})", self.submission)
    }
}

impl cmp::PartialEq for Params {
    fn eq(&self, other: &Self) -> bool {
        self.submission == other.submission
    }
}

impl cmp::Eq for Params {}
