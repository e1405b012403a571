//! Ciclo de vida de una petición de análisis:
//!   1. Pone la interfaz en estado ocupado (rechaza envíos concurrentes).
//!   2. Envía el lote una sola vez, sin reintentos.
//!   3. Valida el estado HTTP, el campo `error` y la forma del cuerpo.
//!   4. Renderiza las ranuras y muestra los resultados.
//!   5. Cualquier fallo se devuelve como un único error; su `notification()` es lo que ve el usuario.
//!
//! El estado ocupado se revierte siempre al salir, haya éxito o error.

use tracing::{error, info, warn};
use uuid::Uuid;

use crate::{
    error::AnalysisError,
    models::{error_field, AnalysisResponse, AnalyzeRequest},
    normalize::{normalize, CommentBatch},
    render::{RenderedResults, Renderer},
    surface::{self, BusyGuard, SharedSurface},
    transport::Transport,
};

pub struct Coordinator<T> {
    transport: T,
    renderer: Renderer,
    surface: SharedSurface,
}

impl<T: Transport> Coordinator<T> {
    pub fn new(transport: T, renderer: Renderer, surface: SharedSurface) -> Self {
        Self {
            transport,
            renderer,
            surface,
        }
    }

    pub fn surface(&self) -> &SharedSurface {
        &self.surface
    }

    /// Normaliza el texto del usuario y lo envía.
    pub async fn analyze_text(&self, raw_text: &str) -> Result<AnalysisResponse, AnalysisError> {
        let batch = normalize(raw_text);
        self.submit(&batch).await
    }

    pub async fn submit(&self, batch: &CommentBatch) -> Result<AnalysisResponse, AnalysisError> {
        let Some(_busy) = BusyGuard::acquire(&self.surface) else {
            warn!("Envío ignorado: ya hay un análisis en curso.");
            return Err(AnalysisError::Busy);
        };

        let run_id = Uuid::new_v4();
        info!(%run_id, comments = batch.len(), "Enviando lote al servicio de análisis...");

        let outcome = self.request_and_render(batch).await;

        match outcome {
            Ok((response, rendered)) => {
                surface::lock(&self.surface).show_results(rendered);
                info!(
                    %run_id,
                    total = response.total_comments,
                    results = response.per_comment_results.len(),
                    "Análisis completado."
                );
                Ok(response)
            }
            Err(err) => {
                error!(%run_id, "Error en el análisis: {}", err);
                Err(err)
            }
        }
    }

    async fn request_and_render(
        &self,
        batch: &CommentBatch,
    ) -> Result<(AnalysisResponse, RenderedResults), AnalysisError> {
        let request = AnalyzeRequest {
            comments: batch.as_slice(),
        };
        let reply = self.transport.post_comments(&request).await?;

        if !reply.is_success() {
            return Err(AnalysisError::Request {
                status: reply.status,
                detail: error_field(&reply.body),
            });
        }

        let response = AnalysisResponse::from_body(&reply.body)?;
        if !batch.is_empty() && response.per_comment_results.len() != batch.len() {
            warn!(
                sent = batch.len(),
                received = response.per_comment_results.len(),
                "El número de resultados no coincide con el lote enviado."
            );
        }

        let rendered = self.renderer.render(&response)?;
        Ok((response, rendered))
    }
}
