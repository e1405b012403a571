//! Normalización del texto introducido por el usuario en un lote de comentarios.

use serde::Serialize;

/// Lote ordenado de comentarios no vacíos que se envía en una sola petición.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CommentBatch(Vec<String>);

impl CommentBatch {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

/// Divide por líneas, recorta cada una y descarta las vacías conservando el orden.
/// Un texto vacío produce un lote vacío, no un error.
pub fn normalize(raw_text: &str) -> CommentBatch {
    CommentBatch(
        raw_text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect(),
    )
}
