//! reqwest-backed responder client.

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;
use url::Url;

use super::{BotReply, ProcessRequest, ProcessResponse, Responder, ResponderError};
use crate::config::ResponderConfig;

/// Responder reached over HTTP.
///
/// # Example
///
/// ```rust,no_run
/// use chat_panel::responder::{HttpResponder, Responder};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let responder = HttpResponder::new("http://localhost:5000", "/process")?;
/// let reply = responder.process("Show me a cat").await?;
/// println!("{}", reply.message);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct HttpResponder {
    endpoint: Url,
    http: reqwest::Client,
}

impl HttpResponder {
    /// Create a client for `{base_url}{path}`.
    pub fn new(base_url: impl AsRef<str>, path: impl AsRef<str>) -> Result<Self, ResponderError> {
        Self::with_client(base_url, path, reqwest::Client::new())
    }

    /// Create a client with a custom reqwest client.
    ///
    /// `path` is resolved below any path already on `base_url`, so
    /// `http://h/api` with `/process` posts to `http://h/api/process`.
    pub fn with_client(
        base_url: impl AsRef<str>,
        path: impl AsRef<str>,
        http: reqwest::Client,
    ) -> Result<Self, ResponderError> {
        let mut base = Url::parse(base_url.as_ref())?;
        if !base.path().ends_with('/') {
            let dir = format!("{}/", base.path());
            base.set_path(&dir);
        }
        let endpoint = base.join(path.as_ref().trim_start_matches('/'))?;
        Ok(Self { endpoint, http })
    }

    /// Build the client described by the `responder` config section.
    pub fn from_config(config: &ResponderConfig) -> Result<Self, ResponderError> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        Self::with_client(&config.base_url, &config.path, builder.build()?)
    }

    /// Full URL requests are posted to.
    #[must_use]
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl Responder for HttpResponder {
    async fn process(&self, input: &str) -> Result<BotReply, ResponderError> {
        let body = ProcessRequest {
            input: input.to_owned(),
        };

        debug!(
            name: "responder.request.sent",
            endpoint = %self.endpoint,
            input_len = input.len(),
            "Sending input to responder"
        );

        let response = self
            .http
            .post(self.endpoint.clone())
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            return Err(ResponderError::Status {
                status: status.as_u16(),
                body: text,
            });
        }

        let parsed: ProcessResponse = serde_json::from_str(&text)?;
        Ok(parsed.response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_path() {
        let responder = HttpResponder::new("http://localhost:5000", "/process").unwrap();
        assert_eq!(responder.endpoint().as_str(), "http://localhost:5000/process");
    }

    #[test]
    fn test_endpoint_keeps_base_path_prefix() {
        let responder = HttpResponder::new("http://h/api", "/process").unwrap();
        assert_eq!(responder.endpoint().as_str(), "http://h/api/process");

        let responder = HttpResponder::new("http://h/api/", "process").unwrap();
        assert_eq!(responder.endpoint().as_str(), "http://h/api/process");
    }

    #[test]
    fn test_rejects_invalid_base_url() {
        let err = HttpResponder::new("not a url", "/process").unwrap_err();
        assert_eq!(err.kind(), "invalid_url");
    }

    #[test]
    fn test_from_config_with_timeout() {
        let config = ResponderConfig {
            base_url: "http://127.0.0.1:5000/".into(),
            path: "/process".into(),
            timeout_secs: Some(5),
        };
        let responder = HttpResponder::from_config(&config).unwrap();
        assert_eq!(responder.endpoint().as_str(), "http://127.0.0.1:5000/process");
    }
}
