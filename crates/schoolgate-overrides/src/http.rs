//! HTTP-backed override source.
//!
//! One round trip per subject: the override service returns every role-level
//! record for the subject's role together with every user-level record for
//! the subject's identity, as a JSON array of [`RawOverride`] objects.

use schoolgate_models::{RawOverride, Subject};
use serde_json::Value;
use std::env;
use tracing::{debug, instrument};

use crate::{OverrideFetchError, OverrideSource, merge::decode_records};

/// Override service configuration loaded from environment variables.
///
/// # Environment Variables
///
/// - `OVERRIDES_API_URL`: base URL of the override service
///   (default: `http://127.0.0.1:8080/api`)
#[derive(Clone, Debug)]
pub struct OverrideStoreConfig {
    /// Base URL of the override service.
    pub base_url: String,
}

impl OverrideStoreConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            base_url: env::var("OVERRIDES_API_URL")
                .unwrap_or_else(|_| "http://127.0.0.1:8080/api".into()),
        }
    }
}

impl Default for OverrideStoreConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8080/api".into(),
        }
    }
}

/// [`OverrideSource`] backed by the override REST service.
#[derive(Clone, Debug)]
pub struct HttpOverrideSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpOverrideSource {
    /// Creates a source from configuration.
    ///
    /// # Errors
    ///
    /// Returns `OverrideFetchError::Request` if the HTTP client cannot be
    /// constructed.
    pub fn new(config: &OverrideStoreConfig) -> Result<Self, OverrideFetchError> {
        let client = reqwest::Client::builder().build()?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Creates a source from an existing client, for callers that share one.
    pub fn with_client(client: reqwest::Client, config: &OverrideStoreConfig) -> Self {
        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }
}

impl OverrideSource for HttpOverrideSource {
    #[instrument(skip(self), fields(role = %subject.role, user_id = %subject.user_id))]
    async fn fetch(&self, subject: &Subject) -> Result<Vec<RawOverride>, OverrideFetchError> {
        let url = format!("{}/permission-overrides", self.base_url);
        let user_id = subject.user_id.to_string();
        let values: Vec<Value> = self
            .client
            .get(&url)
            .query(&[
                ("role", subject.role.as_str()),
                ("user_id", user_id.as_str()),
            ])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let records = decode_records(values);
        debug!(count = records.len(), "Fetched override records");
        Ok(records)
    }
}
