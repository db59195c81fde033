//! rgb-histogram-chart
//!
//! Platform-independent half of the RGB histogram widget: the histogram data
//! model, the page contract, the Chart.js configuration model and the
//! initializer that ties them together. The wasm crate supplies the DOM and
//! Chart.js implementations of [`HistogramPage`] and [`ChartRenderer`].

pub mod chart;
pub mod config;
pub mod error;
pub mod histogram;
pub mod init;
pub mod page;

pub use chart::ChartConfig;
pub use config::{ChartSettings, PageContract};
pub use error::{ChartError, Result};
pub use histogram::{Channel, ChannelHistogram, HistogramSet, BIN_COUNT};
pub use init::{initialize, Outcome};
pub use page::{ChartRenderer, HistogramPage};
