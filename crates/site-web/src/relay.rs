use crate::constants::EMAILJS_KEY_META;
use gloo_net::http::Request;
use site_core::constants::{EMAILJS_ENDPOINT, EMAILJS_SERVICE_ID};
use site_core::{ContactPayload, EmailJsRequest, EmailRelay, RelayError};
use web_sys as web;

/// EmailJS over its REST endpoint. One POST per call, no retries.
pub struct EmailJsRelay {
    endpoint: &'static str,
    service_id: &'static str,
    public_key: Option<String>,
}

impl EmailJsRelay {
    /// Reads the public key from `<meta name="emailjs-public-key">`.
    pub fn from_document(document: &web::Document) -> Self {
        let public_key = document
            .query_selector(EMAILJS_KEY_META)
            .ok()
            .flatten()
            .and_then(|meta| meta.get_attribute("content"))
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty());
        if public_key.is_none() {
            log::warn!("[relay] no EmailJS public key in page; submissions will fail");
        }
        Self {
            endpoint: EMAILJS_ENDPOINT,
            service_id: EMAILJS_SERVICE_ID,
            public_key,
        }
    }
}

impl EmailRelay for EmailJsRelay {
    async fn send(&self, template_id: &str, payload: &ContactPayload) -> Result<(), RelayError> {
        let user_id = self
            .public_key
            .as_deref()
            .ok_or(RelayError::NotConfigured("EmailJS public key"))?;
        let body = EmailJsRequest {
            service_id: self.service_id,
            template_id,
            user_id,
            template_params: payload,
        };
        let response = Request::post(self.endpoint)
            .json(&body)
            .map_err(|e| RelayError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| RelayError::Transport(e.to_string()))?;
        if response.ok() {
            log::debug!("[relay] {} accepted", template_id);
            return Ok(());
        }
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Err(RelayError::Rejected { status, body })
    }
}
