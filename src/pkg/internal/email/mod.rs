use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};
use tokio::sync::mpsc;

pub mod application;
pub mod logincode;

use crate::{conf::settings, prelude::Result};

pub trait SendEmail {
    fn send(&self, mailer: &Mailer, email: &str) -> Result<()>;
}

#[derive(Debug)]
pub struct Envelope {
    pub to: String,
    pub subject: String,
    pub body: String,
    pub is_html: bool,
}

/// Handle to the background delivery worker. Dispatch is a one-way send:
/// the caller never observes delivery outcome, which is only logged.
#[derive(Debug, Clone)]
pub struct Mailer {
    tx: mpsc::Sender<Envelope>,
}

impl Mailer {
    pub fn start() -> Self {
        let (tx, mut rx) = mpsc::channel::<Envelope>(settings.mailer_queue_depth);
        tokio::spawn(async move {
            while let Some(envelope) = rx.recv().await {
                let to = envelope.to.clone();
                let result = tokio::task::spawn_blocking(move || deliver(envelope)).await;
                match result {
                    Ok(Ok(())) => tracing::info!("email sent to {}", &to),
                    Ok(Err(e)) => tracing::error!("could not send email to {}: {}", &to, &e),
                    Err(e) => tracing::error!("mail task failed to execute: {e:?}"),
                }
            }
        });
        Mailer { tx }
    }

    pub fn dispatch(&self, to: &str, subject: &str, body: &str, is_html: bool) -> Result<()> {
        tracing::debug!("queueing email to {}", to);
        let envelope = Envelope {
            to: to.to_string(),
            subject: subject.to_string(),
            body: body.to_string(),
            is_html,
        };
        if let Err(e) = self.tx.try_send(envelope) {
            tracing::warn!("mailer queue full, dropping email: {}", &e);
        }
        Ok(())
    }
}

// Runs on the blocking pool: lettre's SmtpTransport is synchronous.
fn deliver(envelope: Envelope) -> core::result::Result<(), String> {
    let Envelope {
        to,
        subject,
        body,
        is_html,
    } = envelope;
    let (name, _) = to.split_once("@").unwrap_or(("unknown", ""));
    let content_type = if is_html {
        ContentType::TEXT_HTML
    } else {
        ContentType::TEXT_PLAIN
    };

    let message = Message::builder()
        .from(
            format!("{} <{}>", &settings.service_name, &settings.from_email)
                .parse()
                .map_err(|e| format!("bad sender address: {e}"))?,
        )
        .to(format!("{} <{}>", name, &to)
            .parse()
            .map_err(|e| format!("bad recipient address: {e}"))?)
        .subject(subject)
        .header(content_type)
        .body(body)
        .map_err(|e| format!("message build failed: {e}"))?;

    let creds = Credentials::new(settings.smtp_user.clone(), settings.smtp_pass.clone());
    let transport = SmtpTransport::relay(&settings.smtp_server)
        .map_err(|e| format!("relay setup failed: {e}"))?
        .port(settings.smtp_port)
        .credentials(creds)
        .build();

    transport.send(&message).map_err(|e| e.to_string())?;
    Ok(())
}
