//
// Copyright (c) 2025 Nathan Fiedler
//

//! Delivers inquiry mails through an external SMTP relay.

use crate::domain::entities::InquiryMessage;
use crate::domain::sources::MailDataSource;
use anyhow::{Context, Error};
use lettre::message::{Mailbox, MultiPart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Address, Message, SmtpTransport, Transport};
use log::debug;
use std::env;

// Submission host used when SMTP_HOST is not set.
static DEFAULT_SMTP_HOST: &str = "smtp.gmail.com";

// Display name on the From header of every notification mail.
static SENDER_NAME: &str = "Immo 1301 Webseite";

///
/// Relay account settings, taken from the process environment. The account
/// identity doubles as the sender and the recipient of every notification.
///
#[derive(Clone, Debug)]
pub struct SmtpConfig {
    /// Host name of the SMTP submission endpoint.
    pub host: String,
    /// Account identity, also the sender and recipient address.
    pub username: String,
    /// Account secret.
    pub password: String,
}

impl SmtpConfig {
    /// Read the relay settings from the environment. The host falls back to
    /// the default submission endpoint, the credentials are required.
    pub fn from_env() -> Result<Self, Error> {
        let host = env::var("SMTP_HOST").unwrap_or_else(|_| DEFAULT_SMTP_HOST.to_owned());
        let username = env::var("EMAIL_USER").context("EMAIL_USER is not set")?;
        let password = env::var("EMAIL_PASS").context("EMAIL_PASS is not set")?;
        Ok(Self {
            host,
            username,
            password,
        })
    }
}

///
/// Implementation of the mail data source backed by an SMTP relay. Each send
/// opens its own connection over implicit TLS, so concurrent submissions are
/// independent of one another.
///
pub struct SmtpMailSource {
    config: SmtpConfig,
}

impl SmtpMailSource {
    pub fn new(config: SmtpConfig) -> Self {
        Self { config }
    }
}

impl MailDataSource for SmtpMailSource {
    fn send_message(&self, message: &InquiryMessage) -> Result<(), Error> {
        let address: Address = self.config.username.parse()?;
        let email = Message::builder()
            .from(Mailbox::new(Some(SENDER_NAME.to_owned()), address.clone()))
            .to(Mailbox::new(None, address))
            .subject(message.subject.clone())
            .multipart(MultiPart::alternative_plain_html(
                message.text_body.clone(),
                message.html_body.clone(),
            ))?;
        let credentials = Credentials::new(
            self.config.username.clone(),
            self.config.password.clone(),
        );
        let mailer = SmtpTransport::relay(&self.config.host)?
            .credentials(credentials)
            .build();
        debug!("submitting inquiry mail via {}", self.config.host);
        mailer.send(&email)?;
        Ok(())
    }
}
