//
// Copyright (c) 2025 Nathan Fiedler
//
use serde::{Deserialize, Serialize};
use std::fmt;

/// Placeholder shown in the notification mail when no phone number was given.
pub static PHONE_FALLBACK: &str = "Nicht angegeben";

///
/// A `ContactSubmission` is the transient name/email/phone payload collected
/// by the sales banner on the marketing page. It lives for the duration of a
/// single request and is never persisted.
///
/// Every field defaults when deserializing so that a malformed or empty
/// request body becomes an empty submission rather than a parse failure.
///
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct ContactSubmission {
    /// Name of the interested party.
    #[serde(default)]
    pub name: String,
    /// E-mail address for the follow-up. Presence is required but the format
    /// is deliberately not checked to keep the form friction low.
    #[serde(default)]
    pub email: String,
    /// Optional phone number.
    #[serde(default)]
    pub phone: Option<String>,
}

impl ContactSubmission {
    /// Return `true` if both required fields carry a non-blank value.
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty() && !self.email.trim().is_empty()
    }

    /// The phone number as it should appear in the notification mail,
    /// substituting the fallback text when the field is missing or blank.
    pub fn phone_display(&self) -> &str {
        match self.phone.as_deref() {
            Some(value) if !value.trim().is_empty() => value,
            _ => PHONE_FALLBACK,
        }
    }
}

impl fmt::Display for ContactSubmission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ContactSubmission({})", self.email)
    }
}

///
/// An `InquiryMessage` is the composed notification mail for one submission,
/// in both a plain-text and an HTML rendition.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InquiryMessage {
    pub subject: String,
    pub text_body: String,
    pub html_body: String,
}

impl InquiryMessage {
    ///
    /// Compose the notification mail for the given submission. Both body
    /// variants embed the name, e-mail, and phone fields, the latter with the
    /// fallback text applied.
    ///
    pub fn compose(submission: &ContactSubmission) -> Self {
        let phone = submission.phone_display();
        let text_body = format!(
            "Neue Kaufanfrage über immo1301.ch\n\n\
             Name: {}\n\
             E-Mail: {}\n\
             Telefon: {}\n\n\
             Gesendet über den Verkaufsbanner auf der Webseite.\n",
            submission.name, submission.email, phone
        );
        let html_body = format!(
            r#"<div style="font-family:Arial,sans-serif;max-width:500px;margin:0 auto;padding:24px;">
  <h2 style="color:#0f3460;">Neue Kaufanfrage</h2>
  <p>Jemand hat Interesse an der Webseite <strong>immo1301.ch</strong> gezeigt und m&ouml;chte diese erwerben.</p>
  <p>Name: {}<br>E-Mail: {}<br>Telefon: {}</p>
  <p style="color:#666;font-size:14px;">Gesendet &uuml;ber den Verkaufsbanner auf der Webseite.</p>
</div>"#,
            submission.name, submission.email, phone
        );
        Self {
            subject: "Kaufanfrage – immo1301.ch Webseite".into(),
            text_body,
            html_body,
        }
    }
}

impl fmt::Display for InquiryMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "InquiryMessage({})", self.subject)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submission_is_complete() {
        let mut submission = ContactSubmission {
            name: "Anna Muster".into(),
            email: "anna@example.ch".into(),
            phone: None,
        };
        assert!(submission.is_complete());
        submission.name = "   ".into();
        assert!(!submission.is_complete());
        submission.name = "Anna Muster".into();
        submission.email = "".into();
        assert!(!submission.is_complete());
        let blank = ContactSubmission::default();
        assert!(!blank.is_complete());
    }

    #[test]
    fn test_submission_phone_display() {
        let mut submission = ContactSubmission {
            name: "Anna Muster".into(),
            email: "anna@example.ch".into(),
            phone: Some("+41 79 123 45 67".into()),
        };
        assert_eq!(submission.phone_display(), "+41 79 123 45 67");
        submission.phone = Some("  ".into());
        assert_eq!(submission.phone_display(), PHONE_FALLBACK);
        submission.phone = None;
        assert_eq!(submission.phone_display(), PHONE_FALLBACK);
    }

    #[test]
    fn test_submission_deserialize_defaults() {
        // missing fields come up empty rather than failing
        let submission: ContactSubmission = serde_json::from_str("{}").unwrap();
        assert_eq!(submission, ContactSubmission::default());
        let submission: ContactSubmission =
            serde_json::from_str(r#"{"name":"Anna Muster"}"#).unwrap();
        assert_eq!(submission.name, "Anna Muster");
        assert_eq!(submission.email, "");
        assert!(submission.phone.is_none());
    }

    #[test]
    fn test_message_compose_embeds_fields() {
        let submission = ContactSubmission {
            name: "Anna Muster".into(),
            email: "anna@example.ch".into(),
            phone: Some("+41 79 123 45 67".into()),
        };
        let message = InquiryMessage::compose(&submission);
        assert_eq!(message.subject, "Kaufanfrage – immo1301.ch Webseite");
        assert!(message.text_body.contains("Name: Anna Muster"));
        assert!(message.text_body.contains("E-Mail: anna@example.ch"));
        assert!(message.text_body.contains("Telefon: +41 79 123 45 67"));
        assert!(message.html_body.contains("Neue Kaufanfrage"));
        assert!(message.html_body.contains("anna@example.ch"));
        assert!(message.html_body.contains("+41 79 123 45 67"));
    }

    #[test]
    fn test_message_compose_phone_fallback() {
        let submission = ContactSubmission {
            name: "Anna Muster".into(),
            email: "anna@example.ch".into(),
            phone: None,
        };
        let message = InquiryMessage::compose(&submission);
        assert!(message.text_body.contains("Telefon: Nicht angegeben"));
        assert!(message.html_body.contains("Telefon: Nicht angegeben"));
    }
}
