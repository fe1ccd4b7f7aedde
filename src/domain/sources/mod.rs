//
// Copyright (c) 2025 Nathan Fiedler
//
use crate::domain::entities::InquiryMessage;
use anyhow::Error;
#[cfg(test)]
use mockall::automock;

/// Data source that delivers inquiry mails to the outside world.
#[cfg_attr(test, automock)]
pub trait MailDataSource: Send + Sync {
    /// Deliver the given message, blocking until the relay has either
    /// accepted or rejected it. A single attempt is made, there is no retry.
    fn send_message(&self, message: &InquiryMessage) -> Result<(), Error>;
}
