//! Seams between the initializer and its host environment.

use crate::chart::ChartConfig;
use crate::config::PageContract;
use crate::error::{ChartError, Result};
use crate::histogram::{Channel, ChannelHistogram, HistogramSet};

/// Read access to the server-rendered page
pub trait HistogramPage {
    /// Handle to a 2D drawing surface
    type Surface;

    fn has_element(&self, id: &str) -> bool;

    /// Attribute value of the element with `id`, if both exist
    fn attribute(&self, id: &str, name: &str) -> Option<String>;

    /// 2D surface of the canvas with `id`; `None` when the element is absent,
    /// is not a canvas or has no 2D context
    fn drawing_surface(&self, id: &str) -> Option<Self::Surface>;
}

/// Charting library boundary
pub trait ChartRenderer<S> {
    fn render(&mut self, surface: &S, config: &ChartConfig) -> Result<()>;
}

impl HistogramSet {
    /// Parse the three channel arrays from the marker element's attributes
    pub fn from_page<P: HistogramPage + ?Sized>(page: &P, contract: &PageContract) -> Result<Self> {
        if !page.has_element(&contract.marker_id) {
            return Err(ChartError::MissingMarker(contract.marker_id.clone()));
        }
        let read = |channel: Channel| -> Result<ChannelHistogram> {
            let name = contract.attribute(channel);
            let text = page
                .attribute(&contract.marker_id, name)
                .ok_or_else(|| ChartError::MissingAttribute(name.to_string()))?;
            ChannelHistogram::from_json(channel, &text)
        };
        Ok(Self {
            blue: read(Channel::Blue)?,
            green: read(Channel::Green)?,
            red: read(Channel::Red)?,
        })
    }
}
