//! Modelos de dominio del análisis (etiquetas, resultados por comentario y respuesta agregada)
//! y validación del cuerpo JSON devuelto por el servicio.

use std::fmt;
use std::marker::PhantomData;

use serde::de::{Deserializer, MapAccess, Visitor};
use serde::{Deserialize, Serialize};

use crate::error::AnalysisError;

/// Color asociado a una etiqueta de sentimiento.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Green,
    Red,
    Gray,
}

impl Tone {
    /// Nombre usado en las clases CSS (`bg-green-100`, `text-red-600`...).
    pub fn name(self) -> &'static str {
        match self {
            Self::Green => "green",
            Self::Red => "red",
            Self::Gray => "gray",
        }
    }

    /// Color de relleno para el gráfico.
    pub fn hex(self) -> &'static str {
        match self {
            Self::Green => "#10B981",
            Self::Red => "#EF4444",
            Self::Gray => "#6B7280",
        }
    }
}

/// Etiqueta de sentimiento. Cualquier valor desconocido se conserva en `Unknown`
/// y se pinta como neutral.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
    Unknown(String),
}

impl SentimentLabel {
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        match trimmed.to_lowercase().as_str() {
            "positive" => Self::Positive,
            "negative" => Self::Negative,
            "neutral" => Self::Neutral,
            _ => Self::Unknown(trimmed.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
            Self::Neutral => "neutral",
            Self::Unknown(raw) => raw,
        }
    }

    pub fn tone(&self) -> Tone {
        match self {
            Self::Positive => Tone::Green,
            Self::Negative => Tone::Red,
            Self::Neutral | Self::Unknown(_) => Tone::Gray,
        }
    }

    /// Texto para mostrar: primera letra en mayúscula.
    pub fn display_name(&self) -> String {
        capitalize(self.as_str())
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Resultado individual de un comentario analizado.
#[derive(Debug, Clone, PartialEq)]
pub struct PerCommentResult {
    pub original_text: String,
    pub sentiment: SentimentLabel,
    pub confidence: f64,
    pub summary: String,
}

/// Conteo por etiqueta, en el orden en que llegan en la respuesta.
pub type SentimentDistribution = Vec<(SentimentLabel, u64)>;

/// Frecuencia por palabra, en el orden en que llegan en la respuesta.
pub type KeywordFrequency = Vec<(String, u64)>;

/// Información opcional del modelo que usa el servicio.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ModelInfo {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub accuracy: String,
    #[serde(default, rename = "type")]
    pub kind: String,
}

/// Raíz agregada devuelta por una petición de análisis ya validada.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisResponse {
    pub total_comments: u64,
    pub sentiment_distribution: SentimentDistribution,
    pub keyword_frequency: KeywordFrequency,
    pub per_comment_results: Vec<PerCommentResult>,
    pub model_info: Option<ModelInfo>,
}

// --- Contrato de red ---

/// Cuerpo de la petición `{ "comments": [...] }`.
#[derive(Debug, Clone, Serialize)]
pub struct AnalyzeRequest<'a> {
    pub comments: &'a [String],
}

type JsonObject = serde_json::Map<String, serde_json::Value>;

#[derive(Debug, Deserialize)]
struct WireResponse {
    total_comments: u64,
    #[serde(deserialize_with = "ordered_entries")]
    sentiment_distribution: Vec<(String, u64)>,
    #[serde(deserialize_with = "ordered_entries")]
    wordcloud_data: Vec<(String, u64)>,
    individual_results: Vec<WireComment>,
    #[serde(default)]
    model_info: Option<ModelInfo>,
}

#[derive(Debug, Deserialize)]
struct WireComment {
    comment: String,
    sentiment: String,
    confidence: f64,
    summary: String,
}

/// Deserializa un objeto JSON como lista de pares conservando el orden de las claves.
fn ordered_entries<'de, D, V>(deserializer: D) -> Result<Vec<(String, V)>, D::Error>
where
    D: Deserializer<'de>,
    V: Deserialize<'de>,
{
    struct EntriesVisitor<V>(PhantomData<V>);

    impl<'de, V: Deserialize<'de>> Visitor<'de> for EntriesVisitor<V> {
        type Value = Vec<(String, V)>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("un objeto JSON")
        }

        fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
            let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
            while let Some((key, value)) = map.next_entry::<String, V>()? {
                entries.push((key, value));
            }
            Ok(entries)
        }
    }

    deserializer.deserialize_map(EntriesVisitor(PhantomData))
}

/// Solo acepta cuerpos cuyo valor raíz sea un objeto JSON.
fn json_object(body: &str) -> Option<JsonObject> {
    serde_json::from_str(body).ok()
}

fn truthy_error(object: &JsonObject) -> Option<String> {
    match object.get("error")? {
        serde_json::Value::Null | serde_json::Value::Bool(false) => None,
        serde_json::Value::Number(n) if n.as_f64() == Some(0.0) => None,
        serde_json::Value::String(s) if s.is_empty() => None,
        serde_json::Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// Extrae el campo `error` si el cuerpo es un objeto JSON y lo trae con un valor "verdadero".
pub fn error_field(body: &str) -> Option<String> {
    truthy_error(&json_object(body)?)
}

impl AnalysisResponse {
    /// Interpreta y valida un cuerpo de respuesta con estado de éxito.
    pub fn from_body(body: &str) -> Result<Self, AnalysisError> {
        let object = json_object(body).ok_or_else(|| {
            AnalysisError::MalformedResponse("el cuerpo no es un objeto JSON".to_string())
        })?;
        if let Some(message) = truthy_error(&object) {
            return Err(AnalysisError::Analysis(message));
        }

        // Se vuelve a leer el texto: `Map` no conserva el orden de las claves.
        let wire: WireResponse = serde_json::from_str(body)
            .map_err(|e| AnalysisError::MalformedResponse(e.to_string()))?;

        let counted = wire
            .sentiment_distribution
            .iter()
            .try_fold(0u64, |acc, (_, n)| acc.checked_add(*n))
            .ok_or_else(|| {
                AnalysisError::MalformedResponse("la distribución desborda u64".to_string())
            })?;
        if counted != wire.total_comments {
            return Err(AnalysisError::MalformedResponse(format!(
                "la distribución suma {counted} pero total_comments es {}",
                wire.total_comments
            )));
        }

        let mut per_comment_results = Vec::with_capacity(wire.individual_results.len());
        for (index, item) in wire.individual_results.into_iter().enumerate() {
            if !item.confidence.is_finite() || !(0.0..=1.0).contains(&item.confidence) {
                return Err(AnalysisError::MalformedResponse(format!(
                    "confianza fuera de rango en el resultado {index}: {}",
                    item.confidence
                )));
            }
            per_comment_results.push(PerCommentResult {
                original_text: item.comment,
                sentiment: SentimentLabel::parse(&item.sentiment),
                confidence: item.confidence,
                summary: item.summary,
            });
        }

        Ok(Self {
            total_comments: wire.total_comments,
            sentiment_distribution: wire
                .sentiment_distribution
                .into_iter()
                .map(|(label, count)| (SentimentLabel::parse(&label), count))
                .collect(),
            keyword_frequency: wire.wordcloud_data,
            per_comment_results,
            model_info: wire.model_info,
        })
    }
}
