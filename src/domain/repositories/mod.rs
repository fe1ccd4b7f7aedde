//
// Copyright (c) 2025 Nathan Fiedler
//
use crate::domain::entities::InquiryMessage;
use anyhow::Error;
#[cfg(test)]
use mockall::{automock, predicate::*};

///
/// Repository for dispatching inquiry mails. The mail relay is an opaque
/// collaborator behind this interface, so the use case logic can be tested
/// without a live network dependency.
///
#[cfg_attr(test, automock)]
pub trait MailRepository: Send + Sync {
    /// Deliver the given message through the mail relay.
    fn send_message(&self, message: &InquiryMessage) -> Result<(), Error>;
}
