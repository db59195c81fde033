use crate::histogram::Channel;

/// Errors raised while reading the page or rendering the chart
#[derive(Debug, thiserror::Error)]
pub enum ChartError {
    #[error("marker element #{0} not found")]
    MissingMarker(String),
    #[error("marker element has no `{0}` attribute")]
    MissingAttribute(String),
    #[error("invalid JSON in {channel} histogram: {source}")]
    InvalidJson {
        channel: Channel,
        #[source]
        source: serde_json::Error,
    },
    #[error("{channel} histogram has {actual} bins, expected {expected}")]
    WrongLength {
        channel: Channel,
        expected: usize,
        actual: usize,
    },
    #[error("{channel} histogram bin {index} holds {value}, expected a non-negative count")]
    InvalidCount {
        channel: Channel,
        index: usize,
        value: f64,
    },
    #[error("chart serialization failed: {0}")]
    Serialize(#[source] serde_json::Error),
    #[error("chart library error: {0}")]
    Render(String),
}

pub type Result<T> = std::result::Result<T, ChartError>;
