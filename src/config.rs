//! Carga y gestión de configuración del panel (servidor + servicio de análisis).

use std::env;
use std::path::PathBuf;

use anyhow::{anyhow, Result};
use url::Url;

const DEFAULT_SERVER_ADDR: &str = "127.0.0.1:3323";
const DEFAULT_ANALYSIS_ENDPOINT: &str = "http://127.0.0.1:5000/analyze";
const DEFAULT_TOP_KEYWORDS: usize = 5;

/// Configuración completa de la aplicación.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub server_addr: String,
    pub analysis_endpoint: Url,
    pub top_keywords: usize,
    pub frontend_dir: PathBuf,
    pub open_browser: bool,
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno (usando .env si existe).
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Construye la configuración a partir de una función de consulta arbitraria.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let server_addr = lookup("SERVER_ADDR").unwrap_or_else(|| DEFAULT_SERVER_ADDR.to_string());

        let endpoint_str =
            lookup("ANALYSIS_ENDPOINT").unwrap_or_else(|| DEFAULT_ANALYSIS_ENDPOINT.to_string());
        let analysis_endpoint = parse_endpoint(&endpoint_str)?;

        let top_keywords = match lookup("TOP_KEYWORDS") {
            Some(raw) => match raw.trim().parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(anyhow!(
                        "TOP_KEYWORDS debe ser un entero positivo, recibido: {raw}"
                    ))
                }
            },
            None => DEFAULT_TOP_KEYWORDS,
        };

        let frontend_dir = lookup("FRONTEND_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("frontend"));

        let open_browser = match lookup("OPEN_BROWSER") {
            Some(raw) => parse_flag(&raw)
                .ok_or_else(|| anyhow!("OPEN_BROWSER no es un booleano válido: {raw}"))?,
            None => true,
        };

        Ok(Self {
            server_addr,
            analysis_endpoint,
            top_keywords,
            frontend_dir,
            open_browser,
        })
    }
}

fn parse_endpoint(raw: &str) -> Result<Url> {
    let url = Url::parse(raw)
        .map_err(|e| anyhow!("ANALYSIS_ENDPOINT no es una URL válida ({raw}): {e}"))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(anyhow!(
            "ANALYSIS_ENDPOINT debe usar http o https, no '{other}'"
        )),
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
