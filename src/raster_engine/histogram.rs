//! Per-channel histograms over the sample range 0..=255.

use std::fmt::Write as _;

use crate::raster_engine::raster::{ChannelLayout, Raster};

/// Occurrence count for every sample value 0..=255.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistogramTable {
    counts: [u64; 256],
}

impl Default for HistogramTable {
    fn default() -> Self {
        Self { counts: [0; 256] }
    }
}

impl HistogramTable {
    pub fn count(&self, value: u8) -> u64 {
        self.counts[value as usize]
    }

    pub fn counts(&self) -> &[u64; 256] {
        &self.counts
    }

    /// Sum over all 256 keys; equals the pixel count of the source raster.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Lowest sample value with a nonzero count.
    pub fn min_value(&self) -> Option<u8> {
        self.counts.iter().position(|&c| c != 0).map(|i| i as u8)
    }

    /// Highest sample value with a nonzero count.
    pub fn max_value(&self) -> Option<u8> {
        self.counts.iter().rposition(|&c| c != 0).map(|i| i as u8)
    }

    /// `(value, count)` pairs in ascending value order, zeros included.
    pub fn iter(&self) -> impl Iterator<Item = (u8, u64)> + '_ {
        self.counts.iter().enumerate().map(|(v, &c)| (v as u8, c))
    }

    fn record(&mut self, value: u8) {
        self.counts[value as usize] += 1;
    }
}

/// Which channel a table was built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistogramChannel {
    Luma,
    Red,
    Green,
    Blue,
}

impl HistogramChannel {
    pub fn label(self) -> &'static str {
        match self {
            HistogramChannel::Luma => "luma",
            HistogramChannel::Red => "red channel",
            HistogramChannel::Green => "green channel",
            HistogramChannel::Blue => "blue channel",
        }
    }
}

/// One table per intensity channel of a raster. Alpha is never counted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Histogram {
    channels: Vec<(HistogramChannel, HistogramTable)>,
}

impl Histogram {
    pub fn channels(&self) -> &[(HistogramChannel, HistogramTable)] {
        &self.channels
    }

    pub fn table(&self, channel: HistogramChannel) -> Option<&HistogramTable> {
        self.channels
            .iter()
            .find(|(c, _)| *c == channel)
            .map(|(_, table)| table)
    }

    /// Copyable text rendering: a heading per channel followed by one
    /// `value: count` line for every value 0..=255.
    pub fn to_text_table(&self) -> String {
        let mut out = String::new();
        for (channel, table) in &self.channels {
            let _ = writeln!(out, "# {}", channel.label());
            for (value, count) in table.iter() {
                let _ = writeln!(out, "{}: {}", value, count);
            }
        }
        out
    }
}

/// Counts sample values per channel.
pub fn build_histogram(raster: &Raster) -> Histogram {
    let channels = match raster.layout() {
        ChannelLayout::Luma => {
            let mut luma = HistogramTable::default();
            for &s in raster.samples() {
                luma.record(s);
            }
            vec![(HistogramChannel::Luma, luma)]
        }
        ChannelLayout::Rgb | ChannelLayout::Rgba => {
            let mut red = HistogramTable::default();
            let mut green = HistogramTable::default();
            let mut blue = HistogramTable::default();
            for pixel in raster.samples().chunks_exact(raster.channel_count()) {
                red.record(pixel[0]);
                green.record(pixel[1]);
                blue.record(pixel[2]);
            }
            vec![
                (HistogramChannel::Red, red),
                (HistogramChannel::Green, green),
                (HistogramChannel::Blue, blue),
            ]
        }
    };

    Histogram { channels }
}
