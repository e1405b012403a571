//! Estadísticas derivadas de la distribución de sentimiento y de la frecuencia de palabras.

use serde::Serialize;

use crate::models::{KeywordFrequency, SentimentDistribution, SentimentLabel};

/// Fila del resumen: etiqueta, conteo y porcentaje sobre el total.
#[derive(Debug, Clone, PartialEq)]
pub struct DistributionRow {
    pub label: SentimentLabel,
    pub count: u64,
    pub percentage: f64,
}

impl DistributionRow {
    /// Porcentaje con un decimal, sin el símbolo `%`.
    pub fn percentage_text(&self) -> String {
        format!("{:.1}", self.percentage)
    }
}

/// Vista serializable de una fila para las plantillas.
#[derive(Debug, Clone, Serialize)]
pub struct DistributionRowView {
    pub label: String,
    pub count: u64,
    pub percentage: String,
    pub tone: &'static str,
}

impl From<&DistributionRow> for DistributionRowView {
    fn from(row: &DistributionRow) -> Self {
        Self {
            label: row.label.as_str().to_string(),
            count: row.count,
            percentage: row.percentage_text(),
            tone: row.label.tone().name(),
        }
    }
}

/// Calcula el porcentaje de cada etiqueta en el orden de la distribución.
/// Con `total == 0` todos los porcentajes son 0.
pub fn aggregate(distribution: &SentimentDistribution, total: u64) -> Vec<DistributionRow> {
    distribution
        .iter()
        .map(|(label, count)| DistributionRow {
            label: label.clone(),
            count: *count,
            percentage: if total == 0 {
                0.0
            } else {
                *count as f64 / total as f64 * 100.0
            },
        })
        .collect()
}

/// Devuelve las `n` primeras palabras en el orden del payload.
///
/// El orden del payload no es el de frecuencia: un servicio que serializa el objeto
/// con claves ordenadas (p. ej. `jsonify` de Flask) las entrega alfabéticamente, y
/// entonces el extracto son las `n` primeras por orden alfabético, no las más frecuentes.
pub fn top_keywords(freq: &KeywordFrequency, n: usize) -> Vec<&str> {
    freq.iter().take(n).map(|(word, _)| word.as_str()).collect()
}
