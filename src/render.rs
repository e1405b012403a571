//! Renderizado de los bloques de resultados con plantillas minijinja.
//!
//! Todas las plantillas usan la extensión `.html`, de modo que minijinja escapa
//! automáticamente cualquier valor insertado (texto de comentarios, resúmenes,
//! etiquetas desconocidas...). Nunca se concatena HTML a mano.

use minijinja::{context, Environment};
use serde::Serialize;

use crate::{
    aggregate::{self, DistributionRowView},
    chart::{self, ChartConfig},
    details,
    models::AnalysisResponse,
};

const SUMMARY_TEMPLATE: &str = r#"<h3 class="text-lg font-semibold mb-3">Analysis Summary</h3>
<p class="text-gray-600 mb-4">Total Comments Analyzed: <span class="font-semibold">{{ total }}</span></p>
{%- for row in rows %}
<div class="flex justify-between items-center py-2 border-b">
  <span class="capitalize font-medium">{{ row.label }}</span>
  <span class="text-{{ row.tone }}-600 font-semibold">{{ row.count }} ({{ row.percentage }}%)</span>
</div>
{%- endfor %}
"#;

const KEYWORDS_TEMPLATE: &str = r#"{% if words -%}
<p class="text-gray-600">Word frequency analysis completed. Top words: {{ words | join(", ") }}</p>
{%- else -%}
<p class="text-gray-600">No significant words found.</p>
{%- endif %}
"#;

const DETAILS_TEMPLATE: &str = r#"{% for item in items -%}
<div class="border border-gray-200 rounded-lg p-4">
  <div class="flex justify-between items-start mb-3">
    <h4 class="font-semibold text-gray-800">{{ item.heading }}</h4>
    <div class="flex items-center space-x-2">
      <span class="px-2 py-1 rounded text-sm bg-{{ item.tone }}-100 text-{{ item.tone }}-800">{{ item.badge }}</span>
      <span class="text-sm text-gray-500">Confidence: {{ item.confidence }}%</span>
    </div>
  </div>
  <p class="text-gray-700 mb-3">{{ item.text }}</p>
  <div class="bg-blue-50 rounded p-3">
    <h5 class="font-medium text-blue-800 mb-1">Summary:</h5>
    <p class="text-blue-700 text-sm">{{ item.summary }}</p>
  </div>
</div>
{% endfor %}"#;

const MODEL_TEMPLATE: &str = r#"{% if model -%}
<div class="bg-gray-50 rounded p-3 text-sm text-gray-700">
  <span class="font-semibold">Model: {{ model.name }}</span>
  {%- if model.description %} &middot; {{ model.description }}{% endif %}
  {%- if model["type"] %} &middot; {{ model["type"] }}{% endif %}
  {%- if model.accuracy %} &middot; Accuracy: {{ model.accuracy }}{% endif %}
</div>
{%- endif %}"#;

/// Contenido de todas las ranuras de resultados tras un render completo.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RenderedResults {
    pub summary_html: String,
    pub chart: Option<ChartConfig>,
    pub keywords_html: String,
    pub details_html: String,
    pub model_html: String,
}

/// Entorno de plantillas precargado.
pub struct Renderer {
    env: Environment<'static>,
    top_keywords: usize,
}

impl Renderer {
    pub fn new(top_keywords: usize) -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        env.add_template("summary.html", SUMMARY_TEMPLATE)?;
        env.add_template("keywords.html", KEYWORDS_TEMPLATE)?;
        env.add_template("details.html", DETAILS_TEMPLATE)?;
        env.add_template("model.html", MODEL_TEMPLATE)?;
        Ok(Self { env, top_keywords })
    }

    /// Renderiza todas las ranuras a partir de una respuesta validada.
    /// No muta la respuesta; dos llamadas con la misma entrada dan la misma salida.
    pub fn render(&self, response: &AnalysisResponse) -> Result<RenderedResults, minijinja::Error> {
        let rows = aggregate::aggregate(&response.sentiment_distribution, response.total_comments);
        let row_views: Vec<DistributionRowView> = rows.iter().map(Into::into).collect();

        let summary_html = self.env.get_template("summary.html")?.render(context! {
            total => response.total_comments,
            rows => row_views,
        })?;

        let words = aggregate::top_keywords(&response.keyword_frequency, self.top_keywords);
        let keywords_html = self
            .env
            .get_template("keywords.html")?
            .render(context! { words => words })?;

        let details_html = self
            .env
            .get_template("details.html")?
            .render(context! { items => details::present(&response.per_comment_results) })?;

        let model_html = self
            .env
            .get_template("model.html")?
            .render(context! { model => &response.model_info })?;

        Ok(RenderedResults {
            summary_html,
            chart: Some(chart::present(&rows)),
            keywords_html,
            details_html,
            model_html,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ModelInfo, PerCommentResult, SentimentLabel};

    fn response() -> AnalysisResponse {
        AnalysisResponse {
            total_comments: 4,
            sentiment_distribution: vec![
                (SentimentLabel::Positive, 3),
                (SentimentLabel::Negative, 1),
                (SentimentLabel::Neutral, 0),
            ],
            keyword_frequency: vec![
                ("proposed".into(), 3),
                ("amendments".into(), 2),
                ("beneficial".into(), 1),
            ],
            per_comment_results: vec![
                PerCommentResult {
                    original_text: "<script>alert('x')</script> great".into(),
                    sentiment: SentimentLabel::Positive,
                    confidence: 0.8,
                    summary: "<b>bold</b> summary".into(),
                },
                PerCommentResult {
                    original_text: "bad".into(),
                    sentiment: SentimentLabel::Negative,
                    confidence: 0.7,
                    summary: "bad".into(),
                },
            ],
            model_info: None,
        }
    }

    #[test]
    fn summary_lists_rows_with_percentages() {
        let out = Renderer::new(5).unwrap().render(&response()).unwrap();
        assert!(out.summary_html.contains("Total Comments Analyzed: <span class=\"font-semibold\">4</span>"));
        assert!(out.summary_html.contains("3 (75.0%)"));
        assert!(out.summary_html.contains("1 (25.0%)"));
        assert!(out.summary_html.contains("0 (0.0%)"));
        assert!(out.summary_html.contains("text-green-600"));
        let pos = out.summary_html.find("positive").unwrap();
        let neg = out.summary_html.find("negative").unwrap();
        assert!(pos < neg);
    }

    #[test]
    fn comment_text_is_escaped() {
        let out = Renderer::new(5).unwrap().render(&response()).unwrap();
        assert!(!out.details_html.contains("<script>"));
        assert!(out.details_html.contains("&lt;script&gt;"));
        assert!(!out.details_html.contains("<b>bold</b>"));
        assert!(out.details_html.contains("&lt;b&gt;bold"));
    }

    #[test]
    fn details_are_sequential_with_badges() {
        let out = Renderer::new(5).unwrap().render(&response()).unwrap();
        let first = out.details_html.find("Comment 1").unwrap();
        let second = out.details_html.find("Comment 2").unwrap();
        assert!(first < second);
        assert!(out.details_html.contains("bg-green-100 text-green-800\">Positive</span>"));
        assert!(out.details_html.contains("bg-red-100 text-red-800\">Negative</span>"));
        assert!(out.details_html.contains("Confidence: 80.0%"));
        assert!(out.details_html.contains("Confidence: 70.0%"));
    }

    #[test]
    fn keywords_respect_limit() {
        let out = Renderer::new(2).unwrap().render(&response()).unwrap();
        assert!(out.keywords_html.contains("Top words: proposed, amendments</p>"));
        assert!(!out.keywords_html.contains("beneficial"));

        let mut empty = response();
        empty.keyword_frequency.clear();
        let out = Renderer::new(2).unwrap().render(&empty).unwrap();
        assert!(out.keywords_html.contains("No significant words found."));
    }

    #[test]
    fn zero_total_renders_zero_percent() {
        let resp = AnalysisResponse {
            total_comments: 0,
            sentiment_distribution: vec![(SentimentLabel::Positive, 0)],
            keyword_frequency: Vec::new(),
            per_comment_results: Vec::new(),
            model_info: None,
        };
        let out = Renderer::new(5).unwrap().render(&resp).unwrap();
        assert!(out.summary_html.contains("0 (0.0%)"));
        assert!(out.details_html.trim().is_empty());
    }

    #[test]
    fn model_card_only_when_present() {
        let renderer = Renderer::new(5).unwrap();
        assert!(renderer.render(&response()).unwrap().model_html.is_empty());

        let mut resp = response();
        resp.model_info = Some(ModelInfo {
            name: "TextBlob".into(),
            description: "Rule-based sentiment analysis".into(),
            accuracy: "75-80%".into(),
            kind: "Lexicon-based".into(),
        });
        let html = renderer.render(&resp).unwrap().model_html;
        assert!(html.contains("Model: TextBlob"));
        assert!(html.contains("Lexicon-based"));
        assert!(html.contains("Accuracy: 75-80%"));
    }

    #[test]
    fn rendering_twice_is_identical() {
        let renderer = Renderer::new(5).unwrap();
        let resp = response();
        assert_eq!(renderer.render(&resp).unwrap(), renderer.render(&resp).unwrap());
    }
}
