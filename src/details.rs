//! Vista por comentario: un bloque por resultado, en el orden de la respuesta.

use serde::Serialize;

use crate::models::PerCommentResult;

/// Datos ya formateados de un bloque de detalle. El texto se escapa al renderizar.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetailView {
    pub heading: String,
    pub tone: &'static str,
    pub badge: String,
    pub confidence: String,
    pub text: String,
    pub summary: String,
}

pub fn present(results: &[PerCommentResult]) -> Vec<DetailView> {
    results
        .iter()
        .enumerate()
        .map(|(index, result)| DetailView {
            heading: format!("Comment {}", index + 1),
            tone: result.sentiment.tone().name(),
            badge: result.sentiment.display_name(),
            confidence: format!("{:.1}", result.confidence * 100.0),
            text: result.original_text.clone(),
            summary: result.summary.clone(),
        })
        .collect()
}
