//! Configuración declarativa del gráfico de proporciones (formato Chart.js).

use serde::Serialize;

use crate::aggregate::DistributionRow;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartConfig {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub data: ChartData,
    pub options: ChartOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<ChartDataset>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartDataset {
    pub data: Vec<u64>,
    pub background_color: Vec<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartOptions {
    pub responsive: bool,
    pub plugins: ChartPlugins,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPlugins {
    pub legend: Legend,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Legend {
    pub position: &'static str,
}

/// Construye un donut con leyenda inferior a partir de las filas agregadas.
pub fn present(rows: &[DistributionRow]) -> ChartConfig {
    ChartConfig {
        kind: "doughnut",
        data: ChartData {
            labels: rows.iter().map(|r| r.label.display_name()).collect(),
            datasets: vec![ChartDataset {
                data: rows.iter().map(|r| r.count).collect(),
                background_color: rows.iter().map(|r| r.label.tone().hex()).collect(),
            }],
        },
        options: ChartOptions {
            responsive: true,
            plugins: ChartPlugins {
                legend: Legend { position: "bottom" },
            },
        },
    }
}
