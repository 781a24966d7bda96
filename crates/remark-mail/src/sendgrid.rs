use async_trait::async_trait;
use serde_json::json;

use remark_types::models::AuthenticationCodeEmail;

use crate::MailError;
use crate::sender::EmailSender;

const SENDGRID_SEND_URL: &str = "https://api.sendgrid.com/v3/mail/send";

/// Delivers authentication emails through the SendGrid v3 API.
pub struct SendgridEmailSender {
    client: reqwest::Client,
    api_key: String,
    from_name: String,
    from_address: String,
    subject: String,
    base_url: String,
}

impl SendgridEmailSender {
    pub fn new(
        api_key: impl Into<String>,
        from_name: impl Into<String>,
        from_address: impl Into<String>,
        subject: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.into(),
            from_name: from_name.into(),
            from_address: from_address.into(),
            subject: subject.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn plain_text(&self, code: &str) -> String {
        format!(
            "Your authentication code is: {code}\n\n\
             Click this link to authenticate: {base}/userauthentication/{code}\n\n\
             If you prefer to enter the code manually, you can do so at {base}/userauthentication/\n\n\
             This code will expire in 15 minutes.",
            base = self.base_url,
        )
    }

    fn html(&self, code: &str) -> String {
        format!(
            "<p>Your authentication code is: <strong>{code}</strong></p>\n\
             <p><a href=\"{base}/userauthentication/{code}\">Click here to authenticate</a></p>\n\
             <p>If you prefer to enter the code manually, you can do so at \
             <a href=\"{base}/userauthentication/\">{base}/userauthentication/</a></p>\n\
             <p>This code will expire in 15 minutes.</p>",
            base = self.base_url,
        )
    }
}

#[async_trait]
impl EmailSender for SendgridEmailSender {
    async fn send(&self, email: &AuthenticationCodeEmail) -> Result<(), MailError> {
        let body = json!({
            "personalizations": [{ "to": [{ "email": email.email_address }] }],
            "from": { "email": self.from_address, "name": self.from_name },
            "subject": self.subject,
            "content": [
                { "type": "text/plain", "value": self.plain_text(&email.code) },
                { "type": "text/html", "value": self.html(&email.code) },
            ],
        });

        let response = self
            .client
            .post(SENDGRID_SEND_URL)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        Err(MailError::Provider {
            status: status.as_u16(),
            body: response.text().await.unwrap_or_default(),
        })
    }
}
