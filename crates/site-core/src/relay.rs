//! Email relay seam: the outbound call that mails a contact payload through a
//! hosted template, plus the EmailJS request body.

use crate::payload::ContactPayload;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RelayError {
    #[error("relay request could not be sent: {0}")]
    Transport(String),
    #[error("relay rejected the request with status {status}: {body}")]
    Rejected { status: u16, body: String },
    #[error("relay is not configured: {0}")]
    NotConfigured(&'static str),
}

/// One outbound relay call. Implementations make a single attempt.
#[allow(async_fn_in_trait)]
pub trait EmailRelay {
    async fn send(&self, template_id: &str, payload: &ContactPayload) -> Result<(), RelayError>;
}

/// Template pair used by a submission: the customer acknowledgment goes out
/// first, the internal notification only after it succeeded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RelayTemplates {
    pub acknowledgment: &'static str,
    pub notification: &'static str,
}

impl Default for RelayTemplates {
    fn default() -> Self {
        Self {
            acknowledgment: crate::constants::ACK_TEMPLATE_ID,
            notification: crate::constants::NOTIFY_TEMPLATE_ID,
        }
    }
}

/// JSON body accepted by the EmailJS `email/send` endpoint.
#[derive(Debug, Serialize)]
pub struct EmailJsRequest<'a> {
    pub service_id: &'a str,
    pub template_id: &'a str,
    pub user_id: &'a str,
    pub template_params: &'a ContactPayload,
}
