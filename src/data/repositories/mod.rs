//
// Copyright (c) 2025 Nathan Fiedler
//
use crate::domain::entities::InquiryMessage;
use crate::domain::repositories::MailRepository;
use crate::domain::sources::MailDataSource;
use anyhow::Error;
use std::sync::Arc;

// Use an `Arc` to hold the data source to make cloning easy for the caller.
// If using a `Box` instead, cloning it would involve adding fake clone
// operations to the data source trait, which works, but is ugly. It gets even
// uglier when mocking the calls on the data source, which gets cloned during
// the test.
pub struct MailRepositoryImpl {
    datasource: Arc<dyn MailDataSource>,
}

impl MailRepositoryImpl {
    pub fn new(datasource: Arc<dyn MailDataSource>) -> Self {
        Self { datasource }
    }
}

impl MailRepository for MailRepositoryImpl {
    fn send_message(&self, message: &InquiryMessage) -> Result<(), Error> {
        self.datasource.send_message(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::ContactSubmission;
    use crate::domain::sources::MockMailDataSource;
    use anyhow::anyhow;

    #[test]
    fn test_send_message_ok() {
        // arrange
        let mut mock = MockMailDataSource::new();
        mock.expect_send_message().times(1).returning(|_| Ok(()));
        // act
        let repo = MailRepositoryImpl::new(Arc::new(mock));
        let submission = ContactSubmission {
            name: "Anna Muster".into(),
            email: "anna@example.ch".into(),
            phone: None,
        };
        let message = InquiryMessage::compose(&submission);
        let result = repo.send_message(&message);
        // assert
        assert!(result.is_ok());
    }

    #[test]
    fn test_send_message_err() {
        // arrange
        let mut mock = MockMailDataSource::new();
        mock.expect_send_message()
            .returning(|_| Err(anyhow!("oh no")));
        // act
        let repo = MailRepositoryImpl::new(Arc::new(mock));
        let submission = ContactSubmission {
            name: "Anna Muster".into(),
            email: "anna@example.ch".into(),
            phone: None,
        };
        let message = InquiryMessage::compose(&submission);
        let result = repo.send_message(&message);
        // assert
        assert!(result.is_err());
    }
}
