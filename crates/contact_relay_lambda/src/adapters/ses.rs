use aws_config::{BehaviorVersion, Region};
use aws_sdk_sesv2::error::DisplayErrorContext;
use aws_sdk_sesv2::types::{Body, Content, Destination, EmailContent, Message};
use contact_core::email::OutboundEmail;

use crate::adapters::mailer::EmailSender;

const CHARSET: &str = "UTF-8";

/// Sends relay notifications through the SES v2 `SendEmail` API.
#[derive(Clone)]
pub struct SesEmailSender {
    client: aws_sdk_sesv2::Client,
}

impl SesEmailSender {
    pub fn new(client: aws_sdk_sesv2::Client) -> Self {
        Self { client }
    }

    /// Builds a client for `region` using the default credential chain.
    pub async fn from_region(region: &str) -> Self {
        let aws_config = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(region.to_string()))
            .load()
            .await;
        Self::new(aws_sdk_sesv2::Client::new(&aws_config))
    }
}

impl EmailSender for SesEmailSender {
    fn send_email(&self, email: &OutboundEmail) -> Result<(), String> {
        let content = EmailContent::builder()
            .simple(build_message(email)?)
            .build();
        let destination = Destination::builder()
            .set_to_addresses(Some(email.to.clone()))
            .build();
        let source = email.from.clone();
        let reply_to = email.reply_to.clone();
        let client = self.client.clone();

        tokio::task::block_in_place(|| {
            tokio::runtime::Handle::current().block_on(async move {
                client
                    .send_email()
                    .from_email_address(source)
                    .destination(destination)
                    .set_reply_to_addresses(Some(reply_to))
                    .content(content)
                    .send()
                    .await
                    .map(|_| ())
                    .map_err(|error| {
                        format!(
                            "failed to send email through ses: {}",
                            DisplayErrorContext(&error)
                        )
                    })
            })
        })
    }
}

fn build_message(email: &OutboundEmail) -> Result<Message, String> {
    let subject = text_content(&email.subject)?;
    let text = text_content(&email.text_body)?;

    Ok(Message::builder()
        .subject(subject)
        .body(Body::builder().text(text).build())
        .build())
}

fn text_content(data: &str) -> Result<Content, String> {
    Content::builder()
        .data(data)
        .charset(CHARSET)
        .build()
        .map_err(|error| format!("invalid ses content: {error}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_plain_text_message() {
        let email = OutboundEmail {
            from: "noreply@portfolio.dev".to_string(),
            to: vec!["owner@portfolio.dev".to_string()],
            reply_to: vec!["jo@x.com".to_string()],
            subject: "Portfolio Contact: Jo".to_string(),
            text_body: "New contact form submission:\n\nFrom: Jo".to_string(),
        };

        let message = build_message(&email).expect("message should build");

        assert_eq!(
            message.subject().map(Content::data),
            Some("Portfolio Contact: Jo")
        );
        let text = message
            .body()
            .and_then(Body::text)
            .expect("text part should be set");
        assert_eq!(text.data(), "New contact form submission:\n\nFrom: Jo");
        assert_eq!(text.charset(), Some("UTF-8"));
        assert!(message.body().and_then(Body::html).is_none());
    }
}
