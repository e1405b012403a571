use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use tokio::sync::oneshot;

use crate::{
    config::AppConfig,
    coordinator::Coordinator,
    render::Renderer,
    surface::Surface,
    transport::HttpTransport,
};

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub coordinator: Arc<Coordinator<HttpTransport>>,
    pub shutdown_sender: Arc<Mutex<Option<oneshot::Sender<()>>>>,
}

impl AppState {
    /// Monta el coordinador (transporte HTTP + plantillas + superficie vacía).
    pub fn from_config(config: AppConfig, shutdown_tx: oneshot::Sender<()>) -> Result<Self> {
        let renderer =
            Renderer::new(config.top_keywords).context("Error cargando las plantillas HTML")?;
        let transport = HttpTransport::new(config.analysis_endpoint.clone());
        let coordinator = Coordinator::new(transport, renderer, Surface::shared());

        Ok(Self {
            config,
            coordinator: Arc::new(coordinator),
            shutdown_sender: Arc::new(Mutex::new(Some(shutdown_tx))),
        })
    }
}
