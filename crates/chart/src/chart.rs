//! Chart.js configuration model.
//!
//! Only the subset of the schema the histogram uses is modelled. Field names
//! serialize to the keys Chart.js expects.

use serde::Serialize;

use crate::config::{ChartSettings, TitlePadding};
use crate::error::{ChartError, Result};
use crate::histogram::HistogramSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Bar,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub label: String,
    pub data: Vec<f64>,
    pub background_color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub labels: Vec<u32>,
    pub datasets: Vec<Dataset>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CategoryScale {}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinearScale {
    pub begin_at_zero: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Scales {
    pub x: CategoryScale,
    pub y: LinearScale,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Font {
    pub size: u32,
    pub weight: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Padding {
    pub top: u32,
    pub bottom: u32,
}

impl From<TitlePadding> for Padding {
    fn from(p: TitlePadding) -> Self {
        Self {
            top: p.top,
            bottom: p.bottom,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Title {
    pub display: bool,
    pub text: String,
    pub font: Font,
    pub color: String,
    pub padding: Padding,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Plugins {
    pub title: Title,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartOptions {
    pub scales: Scales,
    pub plugins: Plugins,
}

/// Declarative chart description passed to `new Chart(ctx, config)`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartConfig {
    #[serde(rename = "type")]
    pub kind: ChartKind,
    pub data: ChartData,
    pub options: ChartOptions,
}

impl ChartConfig {
    /// Three-series bar chart over intensities 0-255, one dataset per channel
    pub fn rgb_histogram(histograms: &HistogramSet) -> Self {
        let settings = ChartSettings::default();
        let datasets = histograms
            .iter()
            .map(|hist| Dataset {
                label: hist.channel().label().to_string(),
                data: hist.counts().to_vec(),
                background_color: hist.channel().background_color().to_string(),
            })
            .collect();

        Self {
            kind: ChartKind::Bar,
            data: ChartData {
                labels: (0..=u8::MAX).map(u32::from).collect(),
                datasets,
            },
            options: ChartOptions {
                scales: Scales {
                    x: CategoryScale::default(),
                    y: LinearScale {
                        begin_at_zero: settings.begin_at_zero,
                    },
                },
                plugins: Plugins {
                    title: Title {
                        display: true,
                        text: settings.title,
                        font: Font {
                            size: settings.title_size,
                            weight: settings.title_weight,
                        },
                        color: settings.title_color,
                        padding: settings.title_padding.into(),
                    },
                },
            },
        }
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(ChartError::Serialize)
    }
}
