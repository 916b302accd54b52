use anyhow::Context as _;
use reqwest::Client;

use crate::domain::repository::{InviteEmail, Mailer};
use crate::domain::types::{INVITE_TTL_HOURS, OTP_TTL_MINS};

/// Mailer backed by an HTTP mail API (JSON body, bearer auth).
#[derive(Clone)]
pub struct HttpMailer {
    client: Client,
    api_url: String,
    api_key: String,
    from: String,
}

impl HttpMailer {
    pub fn new(api_url: String, api_key: String, from: String) -> Self {
        Self {
            client: Client::new(),
            api_url,
            api_key,
            from,
        }
    }

    async fn deliver(&self, to: &str, subject: &str, html: &str) -> anyhow::Result<()> {
        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&serde_json::json!({
                "from": self.from,
                "to": to,
                "subject": subject,
                "html": html,
            }))
            .send()
            .await
            .context("send mail request")?;
        if !response.status().is_success() {
            anyhow::bail!("mail API returned {}", response.status());
        }
        Ok(())
    }
}

impl Mailer for HttpMailer {
    async fn send_invite(&self, mail: &InviteEmail) -> anyhow::Result<()> {
        let subject = format!(
            "You're invited to join {} on Transify",
            mail.organization_name
        );
        let html = format!(
            "<p><strong>{inviter}</strong> has invited you to join \
             <strong>{org}</strong> as a <strong>{role}</strong> on Transify.</p>\
             <p><a href=\"{url}\">Accept Invitation</a></p>\
             <p>This invite expires in {ttl} hours. If you didn't expect this \
             invitation, you can safely ignore this email.</p>",
            inviter = mail.inviter_name,
            org = mail.organization_name,
            role = mail.role.label(),
            url = mail.accept_url,
            ttl = INVITE_TTL_HOURS,
        );
        self.deliver(&mail.to, &subject, &html).await
    }

    async fn send_otp(&self, to: &str, otp: &str) -> anyhow::Result<()> {
        let subject = format!("{otp} is your Transify verification code");
        let html = format!(
            "<p>Your one-time verification code is:</p>\
             <p style=\"font-size:36px;letter-spacing:8px\"><strong>{otp}</strong></p>\
             <p>This code expires in {ttl} minutes. If you didn't request this \
             code, please ignore this email.</p>",
            ttl = OTP_TTL_MINS,
        );
        self.deliver(to, &subject, &html).await
    }
}
