//! Estado de la interfaz: ranuras de resultados e indicador de carga.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde::Serialize;

use crate::render::RenderedResults;

pub type SharedSurface = Arc<Mutex<Surface>>;

/// Ranuras conocidas de la página y su visibilidad.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Surface {
    pub trigger_enabled: bool,
    pub loading_visible: bool,
    pub results_visible: bool,
    pub results: RenderedResults,
}

impl Default for Surface {
    fn default() -> Self {
        Self {
            trigger_enabled: true,
            loading_visible: false,
            results_visible: false,
            results: RenderedResults::default(),
        }
    }
}

impl Surface {
    pub fn shared() -> SharedSurface {
        Arc::new(Mutex::new(Self::default()))
    }

    pub fn is_busy(&self) -> bool {
        !self.trigger_enabled
    }

    /// Sustituye por completo el contenido de las ranuras y las muestra.
    pub fn show_results(&mut self, results: RenderedResults) {
        self.results = results;
        self.results_visible = true;
    }
}

/// Bloquea la superficie recuperándola aunque otro hilo haya entrado en pánico con ella.
pub fn lock(surface: &SharedSurface) -> MutexGuard<'_, Surface> {
    surface.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Marca la interfaz como ocupada mientras vive; al soltarse la devuelve a reposo.
pub struct BusyGuard {
    surface: SharedSurface,
}

impl BusyGuard {
    /// Devuelve `None` si ya hay una petición en curso.
    pub fn acquire(surface: &SharedSurface) -> Option<Self> {
        let mut state = lock(surface);
        if state.is_busy() {
            return None;
        }
        state.trigger_enabled = false;
        state.loading_visible = true;
        state.results_visible = false;
        Some(Self {
            surface: Arc::clone(surface),
        })
    }
}

impl Drop for BusyGuard {
    fn drop(&mut self) {
        let mut state = lock(&self.surface);
        state.loading_visible = false;
        state.trigger_enabled = true;
    }
}
