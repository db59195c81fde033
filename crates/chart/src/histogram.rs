//! Per-channel histogram arrays as handed over by the server.

use crate::error::{ChartError, Result};

/// Number of intensity levels per channel (0-255)
pub const BIN_COUNT: usize = 256;

/// Colour channel of an 8-bit RGB image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Blue,
    Green,
    Red,
}

impl Channel {
    /// Dataset order used by the chart
    pub const ALL: [Self; 3] = [Self::Blue, Self::Green, Self::Red];

    /// Legend label of the dataset
    pub const fn label(self) -> &'static str {
        match self {
            Self::Blue => "Blue",
            Self::Green => "Green",
            Self::Red => "Red",
        }
    }

    /// Default marker attribute carrying this channel's JSON array
    pub const fn attribute(self) -> &'static str {
        match self {
            Self::Blue => "histogram_blue",
            Self::Green => "histogram_green",
            Self::Red => "histogram_red",
        }
    }

    /// Fully opaque fill for the channel's bars
    pub const fn background_color(self) -> &'static str {
        match self {
            Self::Blue => "rgba(0, 0, 255, 1)",
            Self::Green => "rgba(0, 255, 0, 1)",
            Self::Red => "rgba(255, 0, 0, 1)",
        }
    }
}

impl std::fmt::Display for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Pixel counts for one channel, indexed by intensity
#[derive(Debug, Clone, PartialEq)]
pub struct ChannelHistogram {
    channel: Channel,
    counts: Vec<f64>,
}

impl ChannelHistogram {
    /// Parse a JSON array of exactly [`BIN_COUNT`] non-negative numbers.
    ///
    /// The server serializes counts as floats (`12.0`), so any finite
    /// non-negative number is accepted.
    pub fn from_json(channel: Channel, text: &str) -> Result<Self> {
        let counts: Vec<f64> = serde_json::from_str(text)
            .map_err(|source| ChartError::InvalidJson { channel, source })?;
        Self::new(channel, counts)
    }

    pub fn new(channel: Channel, counts: Vec<f64>) -> Result<Self> {
        if counts.len() != BIN_COUNT {
            return Err(ChartError::WrongLength {
                channel,
                expected: BIN_COUNT,
                actual: counts.len(),
            });
        }
        if let Some((index, &value)) = counts
            .iter()
            .enumerate()
            .find(|(_, v)| !v.is_finite() || **v < 0.0)
        {
            return Err(ChartError::InvalidCount {
                channel,
                index,
                value,
            });
        }
        Ok(Self { channel, counts })
    }

    pub const fn channel(&self) -> Channel {
        self.channel
    }

    pub fn counts(&self) -> &[f64] {
        &self.counts
    }

    /// Total number of pixels counted in this channel
    pub fn total(&self) -> f64 {
        self.counts.iter().sum()
    }
}

/// The three channel histograms of one image
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramSet {
    pub blue: ChannelHistogram,
    pub green: ChannelHistogram,
    pub red: ChannelHistogram,
}

impl HistogramSet {
    pub fn get(&self, channel: Channel) -> &ChannelHistogram {
        match channel {
            Channel::Blue => &self.blue,
            Channel::Green => &self.green,
            Channel::Red => &self.red,
        }
    }

    /// Channels in dataset order
    pub fn iter(&self) -> impl Iterator<Item = &ChannelHistogram> {
        Channel::ALL.into_iter().map(|c| self.get(c))
    }
}
