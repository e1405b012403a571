//! Servicio de análisis falso para los tests de integración.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    routing::post,
    Json, Router,
};
use serde_json::{json, Value};

/// Cuerpos recibidos por el servicio falso, en orden de llegada.
pub type Received = Arc<Mutex<Vec<Value>>>;

pub async fn spawn(router: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    addr
}

/// Arranca el servicio falso y devuelve su dirección y el registro de peticiones.
pub async fn spawn_backend() -> (SocketAddr, Received) {
    let received: Received = Arc::default();
    let router = Router::new()
        .route("/analyze", post(analyze))
        .route("/rate-limited", post(rate_limited))
        .route("/slow-rate-limited", post(slow_rate_limited))
        .route("/broken", post(broken))
        .route("/garbage", post(garbage))
        .with_state(Arc::clone(&received));
    (spawn(router).await, received)
}

fn classify(comment: &str) -> (&'static str, f64) {
    let lower = comment.to_lowercase();
    if lower.contains("great") {
        ("positive", 0.8)
    } else if lower.contains("terrible") {
        ("negative", 1.0)
    } else {
        ("neutral", 0.0)
    }
}

async fn analyze(
    State(received): State<Received>,
    Json(body): Json<Value>,
) -> impl IntoResponse {
    received.lock().unwrap().push(body.clone());
    let comments: Vec<String> = body["comments"]
        .as_array()
        .map(|items| {
            items
                .iter()
                .filter_map(|c| c.as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default();

    let mut counts = [0u64; 3];
    let mut words: Vec<(String, u64)> = Vec::new();
    let mut results = Vec::new();
    for comment in &comments {
        let (sentiment, confidence) = classify(comment);
        let slot = match sentiment {
            "positive" => 0,
            "negative" => 1,
            _ => 2,
        };
        counts[slot] += 1;
        for word in comment
            .split(|c: char| !c.is_ascii_alphabetic())
            .filter(|w| w.len() >= 4)
        {
            let word = word.to_lowercase();
            match words.iter_mut().find(|(w, _)| *w == word) {
                Some((_, n)) => *n += 1,
                None => words.push((word, 1)),
            }
        }
        results.push(json!({
            "comment": comment,
            "sentiment": sentiment,
            "confidence": confidence,
            "summary": comment,
        }));
    }
    words.sort_by(|a, b| b.1.cmp(&a.1));

    let wordcloud: Vec<String> = words
        .iter()
        .map(|(word, n)| format!("{}: {n}", Value::from(word.as_str())))
        .collect();

    // Se construye a mano para fijar el orden de las claves en el JSON.
    let body = format!(
        r#"{{"individual_results": {}, "sentiment_distribution": {{"positive": {}, "negative": {}, "neutral": {}}}, "wordcloud_data": {{{}}}, "total_comments": {}}}"#,
        Value::Array(results),
        counts[0],
        counts[1],
        counts[2],
        wordcloud.join(", "),
        comments.len()
    );
    ([(header::CONTENT_TYPE, "application/json")], body)
}

async fn rate_limited() -> Json<Value> {
    Json(json!({ "error": "rate limited" }))
}

async fn slow_rate_limited() -> Json<Value> {
    tokio::time::sleep(std::time::Duration::from_millis(300)).await;
    rate_limited().await
}

async fn broken() -> (StatusCode, Json<Value>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": "boom" })),
    )
}

async fn garbage() -> &'static str {
    "<html>not the analysis service</html>"
}
