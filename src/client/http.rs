use std::time::Duration;

use reqwest::StatusCode;
use reqwest::blocking::Client;
use reqwest::header::{CONTENT_TYPE, HeaderValue};

use crate::core::PaketError;
use crate::soap::{ApiConfig, Transport};

const SOAP_CONTENT_TYPE: &str = "text/xml; charset=utf-8";

/// [`Transport`] over a blocking `reqwest` client.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: Client,
}

impl HttpTransport {
    /// Client with the timeout from `config`.
    pub fn new(config: &ApiConfig) -> Result<Self, PaketError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| PaketError::Transport(format!("client init: {e}")))?;
        Ok(Self { http })
    }

    /// Wrap an already configured client.
    pub fn with_client(http: Client) -> Self {
        Self { http }
    }
}

impl Transport for HttpTransport {
    fn post(&self, url: &str, soap_action: &str, envelope: &str) -> Result<String, PaketError> {
        let action = HeaderValue::from_str(&format!("\"{soap_action}\""))
            .map_err(|e| PaketError::Transport(format!("invalid SOAPAction: {e}")))?;
        let response = self
            .http
            .post(url)
            .header(CONTENT_TYPE, SOAP_CONTENT_TYPE)
            .header("SOAPAction", action)
            .body(envelope.to_owned())
            .send()
            .map_err(|e| PaketError::Transport(format!("POST {url}: {e}")))?;

        let status = response.status();
        let body = response
            .text()
            .map_err(|e| PaketError::Transport(format!("reading reply from {url}: {e}")))?;

        // SOAP 1.1 delivers faults with status 500.
        if status.is_success() || status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::debug!(%status, bytes = body.len(), "carrier reply received");
            Ok(body)
        } else {
            Err(PaketError::Transport(format!(
                "HTTP {status}: {}",
                body.chars().take(200).collect::<String>()
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_from_config() {
        let config = ApiConfig {
            timeout_secs: 5,
            ..ApiConfig::default()
        };
        assert!(HttpTransport::new(&config).is_ok());
    }

    #[test]
    fn unreachable_host_is_transport_error() {
        let config = ApiConfig {
            timeout_secs: 1,
            ..ApiConfig::default()
        };
        let transport = HttpTransport::new(&config).unwrap();
        let err = transport
            .post("http://127.0.0.1:9/services/", "urn:test", "<x/>")
            .unwrap_err();
        assert!(matches!(err, PaketError::Transport(_)));
    }
}
