//! Page contract and chart presentation settings.
//!
//! Defaults match the server-rendered histogram page.

use crate::histogram::Channel;

/// Element ids and attribute names the page must provide
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageContract {
    pub marker_id: String,
    pub canvas_id: String,
    pub blue_attribute: String,
    pub green_attribute: String,
    pub red_attribute: String,
}

impl Default for PageContract {
    fn default() -> Self {
        Self {
            marker_id: "drawHistogram".to_string(),
            canvas_id: "rgbHistogramCanvas".to_string(),
            blue_attribute: Channel::Blue.attribute().to_string(),
            green_attribute: Channel::Green.attribute().to_string(),
            red_attribute: Channel::Red.attribute().to_string(),
        }
    }
}

impl PageContract {
    /// Default contract with custom element ids
    pub fn with_ids(marker_id: &str, canvas_id: &str) -> Self {
        Self {
            marker_id: marker_id.to_string(),
            canvas_id: canvas_id.to_string(),
            ..Self::default()
        }
    }

    pub fn attribute(&self, channel: Channel) -> &str {
        match channel {
            Channel::Blue => &self.blue_attribute,
            Channel::Green => &self.green_attribute,
            Channel::Red => &self.red_attribute,
        }
    }
}

/// Title padding in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TitlePadding {
    pub top: u32,
    pub bottom: u32,
}

impl Default for TitlePadding {
    fn default() -> Self {
        Self { top: 10, bottom: 30 }
    }
}

/// Fixed presentation of the histogram chart
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartSettings {
    pub title: String,
    pub title_size: u32,
    pub title_weight: String,
    pub title_color: String,
    pub title_padding: TitlePadding,
    pub begin_at_zero: bool,
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self {
            title: "RGB Histogram of the Image".to_string(),
            title_size: 18,
            title_weight: "bold".to_string(),
            title_color: "blue".to_string(),
            title_padding: TitlePadding::default(),
            begin_at_zero: true,
        }
    }
}
