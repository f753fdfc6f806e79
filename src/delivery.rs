//! Server-side hand-off of contact messages to EmailJS.

use std::{sync::LazyLock, time::Duration};

use reqwest::Client;
use serde::Serialize;
use tracing::{debug, warn};

use crate::contact::{ContactError, ContactForm};

pub const EMAILJS_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";
pub const DELIVERY_TIMEOUT: Duration = Duration::from_secs(10);

const SERVICE_ID_VAR: &str = "EMAILJS_SERVICE_ID";
const TEMPLATE_ID_VAR: &str = "EMAILJS_TEMPLATE_ID";
const PUBLIC_KEY_VAR: &str = "EMAILJS_PUBLIC_KEY";

static SHARED: LazyLock<Result<MessageDelivery, ContactError>> =
    LazyLock::new(|| DeliveryCredentials::from_env().and_then(MessageDelivery::new));

/// The process-wide delivery client, configured from the environment.
pub fn shared() -> Result<&'static MessageDelivery, ContactError> {
    SHARED.as_ref().map_err(Clone::clone)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryCredentials {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

impl DeliveryCredentials {
    pub fn from_env() -> Result<Self, ContactError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Blank or missing values leave delivery unconfigured.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ContactError> {
        let get = |key: &str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .ok_or(ContactError::NotConfigured)
        };
        Ok(Self {
            service_id: get(SERVICE_ID_VAR)?,
            template_id: get(TEMPLATE_ID_VAR)?,
            public_key: get(PUBLIC_KEY_VAR)?,
        })
    }
}

#[derive(Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a ContactForm,
}

fn build_client(timeout: Duration) -> Result<Client, ContactError> {
    Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| ContactError::Delivery(e.to_string()))
}

#[derive(Debug, Clone)]
pub struct MessageDelivery {
    client: Client,
    endpoint: String,
    credentials: DeliveryCredentials,
}

impl MessageDelivery {
    pub fn new(credentials: DeliveryCredentials) -> Result<Self, ContactError> {
        Ok(Self {
            client: build_client(DELIVERY_TIMEOUT)?,
            endpoint: EMAILJS_ENDPOINT.to_string(),
            credentials,
        })
    }

    /// Replaces the whole-request timeout (10s by default).
    pub fn with_timeout(mut self, timeout: Duration) -> Result<Self, ContactError> {
        self.client = build_client(timeout)?;
        Ok(self)
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Posts the message. Only success or failure is observed; the response
    /// body is ignored.
    pub async fn send(&self, form: &ContactForm) -> Result<(), ContactError> {
        let request = SendRequest {
            service_id: &self.credentials.service_id,
            template_id: &self.credentials.template_id,
            user_id: &self.credentials.public_key,
            template_params: form,
        };
        let response = self
            .client
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                warn!("contact delivery request failed: {e}");
                ContactError::Delivery(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!("contact delivery rejected with status {status}");
            return Err(ContactError::Delivery(format!("status {status}")));
        }
        debug!("contact message delivered");
        Ok(())
    }
}
