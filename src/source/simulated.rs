//! Deterministic synthetic data source
//!
//! Every channel gets a sinusoid sampled on the absolute grid `k / rate`, so
//! separate fetches of neighbouring intervals line up sample for sample and
//! coalesce cleanly. The phase is derived from the channel name, which keeps
//! channels distinguishable while staying reproducible between runs.

use super::{DataSource, FetchOptions, SourceError, SourceResult};
use crate::detector::{Channel, ChannelList};
use crate::timeseries::{TimeSeries, TimeSeriesDict};
use serde::Deserialize;
use std::f64::consts::PI;

/// Settings for [`SimulatedSource`]
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SimulatedConfig {
    /// Default sample rate in Hz
    #[serde(default = "default_sample_rate")]
    pub sample_rate: f64,

    /// Signal frequency in Hz
    #[serde(default = "default_frequency")]
    pub frequency: f64,

    #[serde(default = "default_amplitude")]
    pub amplitude: f64,
}

fn default_sample_rate() -> f64 {
    256.0
}

fn default_frequency() -> f64 {
    1.0
}

fn default_amplitude() -> f64 {
    1.0
}

impl Default for SimulatedConfig {
    fn default() -> Self {
        Self {
            sample_rate: default_sample_rate(),
            frequency: default_frequency(),
            amplitude: default_amplitude(),
        }
    }
}

/// Source producing synthetic sinusoids
#[derive(Debug, Clone, Default)]
pub struct SimulatedSource {
    config: SimulatedConfig,
}

impl SimulatedSource {
    pub fn new(config: SimulatedConfig) -> Self {
        Self { config }
    }

    fn phase(channel: &Channel) -> f64 {
        let sum = channel
            .ndsname()
            .bytes()
            .fold(0u32, |acc, b| acc.wrapping_mul(31).wrapping_add(u32::from(b)));
        f64::from(sum % 360) * PI / 180.0
    }

    fn generate(&self, channel: &Channel, rate: f64, start: f64, end: f64) -> TimeSeries {
        // Sample indices on the absolute grid covering [start, end)
        let k0 = (start * rate - 1e-6).ceil() as i64;
        let k1 = ((end * rate - 1e-6).ceil() as i64).max(k0);
        let phase = Self::phase(channel);
        let omega = 2.0 * PI * self.config.frequency;

        let values = (k0..k1)
            .map(|k| {
                let t = k as f64 / rate;
                self.config.amplitude * (omega * t + phase).sin()
            })
            .collect();

        TimeSeries::new(k0 as f64 / rate, 1.0 / rate, values).with_channel(channel.clone())
    }
}

impl DataSource for SimulatedSource {
    fn name(&self) -> &str {
        "simulated"
    }

    fn fetch(
        &mut self,
        channels: &ChannelList,
        start: f64,
        end: f64,
        options: &FetchOptions,
    ) -> SourceResult<TimeSeriesDict> {
        if !(start < end) {
            return Err(SourceError::Fetch(format!(
                "empty or reversed interval [{}, {})",
                start, end
            )));
        }

        let option_rate = options.get_f64("sample_rate")?;
        let mut out = TimeSeriesDict::new();

        for channel in channels {
            let rate = channel
                .sample_rate
                .or(option_rate)
                .unwrap_or(self.config.sample_rate);
            if !(rate.is_finite() && rate > 0.0) {
                return Err(SourceError::InvalidOption {
                    key: "sample_rate".to_string(),
                    reason: format!("{} is not a positive rate", rate),
                });
            }

            tracing::debug!("Simulating {} at {} Hz over [{}, {})", channel, rate, start, end);
            out.push_series(channel, self.generate(channel, rate, start, end));
        }

        Ok(out)
    }
}
