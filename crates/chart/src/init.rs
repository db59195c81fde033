//! One-shot chart initialization run on page load.

use crate::chart::ChartConfig;
use crate::config::PageContract;
use crate::error::Result;
use crate::histogram::HistogramSet;
use crate::page::{ChartRenderer, HistogramPage};

/// How an initialization that did not fail ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Rendered,
    /// Canvas missing; logged and skipped
    NoDrawingSurface,
}

/// Read the histograms, locate the canvas and hand the chart to the renderer.
///
/// A missing drawing surface is logged and reported as
/// [`Outcome::NoDrawingSurface`]. Every other problem is returned as an error.
pub fn initialize<P, R>(page: &P, renderer: &mut R, contract: &PageContract) -> Result<Outcome>
where
    P: HistogramPage + ?Sized,
    R: ChartRenderer<P::Surface> + ?Sized,
{
    let histograms = HistogramSet::from_page(page, contract)?;

    let Some(surface) = page.drawing_surface(&contract.canvas_id) else {
        tracing::error!(canvas_id = %contract.canvas_id, "canvas not found, histogram not drawn");
        return Ok(Outcome::NoDrawingSurface);
    };

    let config = ChartConfig::rgb_histogram(&histograms);
    renderer.render(&surface, &config)?;
    tracing::debug!(
        datasets = config.data.datasets.len(),
        labels = config.data.labels.len(),
        pixels = histograms.blue.total(),
        "histogram chart rendered"
    );
    Ok(Outcome::Rendered)
}
