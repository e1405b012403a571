//! Envío del lote al servicio de análisis.

use std::future::Future;

use reqwest::Client;
use tracing::debug;
use url::Url;

use crate::{error::AnalysisError, models::AnalyzeRequest};

/// Respuesta cruda: estado HTTP y cuerpo sin interpretar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawReply {
    pub status: u16,
    pub body: String,
}

impl RawReply {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Canal de salida hacia el servicio de análisis. Una llamada es exactamente una petición.
pub trait Transport: Send + Sync {
    fn post_comments(
        &self,
        request: &AnalyzeRequest<'_>,
    ) -> impl Future<Output = Result<RawReply, AnalysisError>> + Send;
}

/// Transporte HTTP real basado en reqwest.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    endpoint: Url,
}

impl HttpTransport {
    pub fn new(endpoint: Url) -> Self {
        Self {
            client: Client::new(),
            endpoint,
        }
    }
}

impl Transport for HttpTransport {
    async fn post_comments(&self, request: &AnalyzeRequest<'_>) -> Result<RawReply, AnalysisError> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .json(request)
            .send()
            .await?;

        let status = response.status().as_u16();
        debug!(status, endpoint = %self.endpoint, "respuesta recibida del servicio de análisis");
        let body = response.text().await?;
        Ok(RawReply { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_range() {
        let reply = |status| RawReply { status, body: String::new() };
        assert!(reply(200).is_success());
        assert!(reply(204).is_success());
        assert!(!reply(302).is_success());
        assert!(!reply(500).is_success());
    }
}
