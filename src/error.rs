//! Taxonomía de errores del ciclo de análisis.

use axum::http::StatusCode;
use thiserror::Error;

/// Mensaje genérico mostrado cuando la respuesta del servicio no tiene la forma esperada.
pub const MALFORMED_NOTICE: &str =
    "The analysis service returned an unexpected response. Please try again later.";

/// Fallos posibles de una petición de análisis.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// El servicio respondió con un estado HTTP distinto de éxito.
    #[error("HTTP error! status: {status}")]
    Request { status: u16, detail: Option<String> },

    /// La petición no llegó a obtener respuesta (red caída, conexión rechazada...).
    #[error("no se pudo contactar con el servicio de análisis: {0}")]
    Unreachable(String),

    /// El servicio informa explícitamente de un error semántico.
    #[error("el servicio de análisis devolvió un error: {0}")]
    Analysis(String),

    /// El cuerpo no respeta el contrato esperado.
    #[error("respuesta mal formada: {0}")]
    MalformedResponse(String),

    /// Ya hay un análisis en curso.
    #[error("ya hay un análisis en curso")]
    Busy,

    #[error("error renderizando resultados: {0}")]
    Render(#[from] minijinja::Error),
}

impl AnalysisError {
    /// Texto de la notificación bloqueante que verá el usuario.
    pub fn notification(&self) -> String {
        match self {
            Self::Request { status, detail: Some(detail) } => format!(
                "An error occurred while analyzing comments: HTTP error! status: {status} ({detail})"
            ),
            Self::Request { status, detail: None } => format!(
                "An error occurred while analyzing comments: HTTP error! status: {status}"
            ),
            Self::Unreachable(reason) => {
                format!("An error occurred while analyzing comments: {reason}")
            }
            Self::Analysis(message) => format!("Error: {message}"),
            Self::MalformedResponse(_) | Self::Render(_) => MALFORMED_NOTICE.to_string(),
            Self::Busy => "An analysis is already running. Please wait for it to finish.".to_string(),
        }
    }

    /// Código HTTP con el que la API del panel informa del fallo.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Busy => StatusCode::CONFLICT,
            Self::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Request { .. }
            | Self::Unreachable(_)
            | Self::Analysis(_)
            | Self::MalformedResponse(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl From<reqwest::Error> for AnalysisError {
    fn from(err: reqwest::Error) -> Self {
        Self::Unreachable(err.to_string())
    }
}
