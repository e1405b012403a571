//! Panel de análisis de sentimiento: normaliza los comentarios, los envía al
//! servicio de análisis y convierte la respuesta en resumen, gráfico, palabras
//! clave y detalle por comentario.

pub mod aggregate;
pub mod api;
pub mod app_state;
pub mod chart;
pub mod config;
pub mod coordinator;
pub mod details;
pub mod error;
pub mod models;
pub mod normalize;
pub mod render;
pub mod samples;
pub mod surface;
pub mod transport;
