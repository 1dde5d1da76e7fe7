use crate::models::inquiry::Inquiry;
use reqwest::Client;
use serde_json::json;

const SENDGRID_SEND_URL: &str = "https://api.sendgrid.com/v3/mail/send";

#[derive(Debug, Clone)]
struct Transport {
    api_key: String,
    to: String,
    from: String,
}

/// Operator notification over the SendGrid v3 mail API. Deliberately
/// infallible from the caller's point of view: every transport problem is
/// logged and reported as `false`.
#[derive(Clone)]
pub struct EmailService {
    client: Client,
    transport: Option<Transport>,
    send_url: String,
}

impl EmailService {
    pub fn new(api_key: Option<String>, to: Option<String>, from: Option<String>) -> Self {
        let transport = match (api_key, to, from) {
            (Some(api_key), Some(to), Some(from)) => Some(Transport { api_key, to, from }),
            _ => None,
        };
        Self {
            client: Client::new(),
            transport,
            send_url: SENDGRID_SEND_URL.to_string(),
        }
    }

    /// Override the mail API endpoint. Tests point this at an address
    /// that refuses connections to exercise the failed-delivery path.
    pub fn with_send_url(mut self, url: impl Into<String>) -> Self {
        self.send_url = url.into();
        self
    }

    pub fn is_configured(&self) -> bool {
        self.transport.is_some()
    }

    pub async fn send_new_inquiry_notification(&self, inquiry: &Inquiry) -> bool {
        let subject = format!(
            "New Rental Inquiry from {} {}",
            inquiry.first_name, inquiry.last_name
        );

        let Some(transport) = &self.transport else {
            tracing::info!("Email would be sent: {}", subject);
            return false;
        };

        let body = json!({
            "personalizations": [{ "to": [{ "email": transport.to }] }],
            "from": { "email": transport.from },
            "subject": subject,
            "content": [
                { "type": "text/plain", "value": notification_text(inquiry) },
                { "type": "text/html", "value": notification_html(inquiry) },
            ],
        });

        match self
            .client
            .post(&self.send_url)
            .bearer_auth(&transport.api_key)
            .json(&body)
            .send()
            .await
        {
            Ok(resp) if resp.status().is_success() => {
                tracing::info!("Email sent successfully: {}", subject);
                true
            }
            Ok(resp) => {
                let status = resp.status();
                let detail = resp.text().await.unwrap_or_default();
                tracing::error!("SendGrid rejected email ({}): {}", status, detail);
                false
            }
            Err(err) => {
                tracing::error!("SendGrid email error: {}", err);
                false
            }
        }
    }
}

fn notification_text(inquiry: &Inquiry) -> String {
    format!(
        "New Rental Inquiry Received!\n\n\
         Guest: {} {}\n\
         Email: {}\n\
         Phone: {}\n\
         Check-in: {}\n\
         Check-out: {}\n\n\
         Message:\n{}\n\n\
         Received: {}",
        inquiry.first_name,
        inquiry.last_name,
        inquiry.email,
        inquiry.phone.as_deref().unwrap_or("Not provided"),
        inquiry.check_in.as_deref().unwrap_or("Not specified"),
        inquiry.check_out.as_deref().unwrap_or("Not specified"),
        inquiry.message,
        inquiry.created_at.to_rfc3339(),
    )
}

fn notification_html(inquiry: &Inquiry) -> String {
    format!(
        "<h2>New Rental Inquiry Received!</h2>\
         <p><strong>Guest:</strong> {} {}</p>\
         <p><strong>Email:</strong> {}</p>\
         <p><strong>Phone:</strong> {}</p>\
         <p><strong>Check-in:</strong> {}</p>\
         <p><strong>Check-out:</strong> {}</p>\
         <p><strong>Message:</strong></p>\
         <p>{}</p>\
         <p><strong>Received:</strong> {}</p>",
        inquiry.first_name,
        inquiry.last_name,
        inquiry.email,
        inquiry.phone.as_deref().unwrap_or("Not provided"),
        inquiry.check_in.as_deref().unwrap_or("Not specified"),
        inquiry.check_out.as_deref().unwrap_or("Not specified"),
        inquiry.message,
        inquiry.created_at.to_rfc3339(),
    )
}
