//! One-call histogram computation
//!
//! The engine runs the whole pipeline: choose a geometry, count values, then
//! merge bins while saw-toothing shows. [`HistogramBinEngine::compute_shared`]
//! does the same for several series drawn on one x-axis, so every series gets
//! identical bin edges.

use crate::config::BinningConfig;
use crate::frequency::BinFrequencyAssigner;
use crate::sawtooth::SawToothCorrector;
use crate::selector::BinWidthSelector;
use crate::traits::BinningStrategy;
use crate::types::{BinFrequencies, BinGeometry, Histogram};
use chart_core::{Error, Result};
use serde::Serialize;
use tracing::{debug, instrument, warn};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Raw values in, final geometry and frequencies out
///
/// The geometry strategy defaults to [`BinWidthSelector`]; any
/// [`BinningStrategy`] can be plugged in with [`with_strategy`](Self::with_strategy).
///
/// # Example
///
/// ```rust
/// use chart_histogram::HistogramBinEngine;
///
/// let mut sample: Vec<f64> = (0..10).map(|i| (i * 10) as f64).collect();
/// sample.push(93.0);
/// let histogram = HistogramBinEngine::default().compute(&sample).unwrap();
///
/// // 19 bins of width 5 fill only every other bin, so they are merged
/// assert_eq!(histogram.len(), 10);
/// assert_eq!(histogram.counts().iter().sum::<usize>(), 11);
/// ```
#[derive(Debug, Clone)]
pub struct HistogramBinEngine<S = BinWidthSelector> {
    strategy: S,
    config: BinningConfig,
}

impl Default for HistogramBinEngine {
    fn default() -> Self {
        Self {
            strategy: BinWidthSelector::default(),
            config: BinningConfig::default(),
        }
    }
}

impl HistogramBinEngine {
    /// Create an engine with nice-width binning from a validated config
    pub fn new(config: BinningConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            strategy: BinWidthSelector::new(config.target_n_bins),
            config,
        })
    }
}

impl<S: BinningStrategy> HistogramBinEngine<S> {
    /// Create an engine with a custom geometry strategy
    ///
    /// `config.target_n_bins` is ignored; the strategy decides the bins.
    pub fn with_strategy(strategy: S, config: BinningConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { strategy, config })
    }

    /// The engine configuration
    pub fn config(&self) -> &BinningConfig {
        &self.config
    }

    /// The geometry strategy
    pub fn strategy(&self) -> &S {
        &self.strategy
    }

    /// Bin a non-empty sample of finite values
    #[instrument(skip(self, sample), fields(n = sample.len()))]
    pub fn compute(&self, sample: &[f64]) -> Result<Histogram> {
        let geometry = self.strategy.select(sample)?;
        let frequencies = BinFrequencyAssigner.assign(sample, &geometry);
        let (geometry, frequencies) = self.correct(sample, geometry, frequencies)?;

        if frequencies.extra_points() > 0 {
            warn!(
                extra_points = frequencies.extra_points(),
                "sample values fell outside the selected bins"
            );
        }
        debug!(%geometry, "histogram computed");
        Ok(Histogram::new(geometry, frequencies))
    }

    /// Bin several series against one geometry
    ///
    /// The geometry comes from the union of every series, saw-tooth
    /// correction included. Each series is then counted against it on its
    /// own. Empty series are allowed as long as the union is not empty.
    #[instrument(skip(self, series), fields(n_series = series.len()))]
    pub fn compute_shared<V: AsRef<[f64]> + Sync>(&self, series: &[V]) -> Result<SharedHistogram> {
        let union: Vec<f64> = series
            .iter()
            .flat_map(|values| values.as_ref().iter().copied())
            .collect();
        if union.is_empty() {
            return Err(Error::empty_sample("shared histogram"));
        }

        let geometry = *self.compute(&union)?.geometry();
        let frequencies = assign_series(series, &geometry);
        debug!(n_series = frequencies.len(), %geometry, "shared histogram computed");

        Ok(SharedHistogram {
            geometry,
            series: frequencies,
        })
    }

    fn correct(
        &self,
        sample: &[f64],
        geometry: BinGeometry,
        frequencies: BinFrequencies,
    ) -> Result<(BinGeometry, BinFrequencies)> {
        if !self.config.correct_saw_toothing {
            return Ok((geometry, frequencies));
        }
        SawToothCorrector::new(self.config.saw_tooth_floor).correct(sample, geometry, frequencies)
    }
}

#[cfg(feature = "parallel")]
fn assign_series<V: AsRef<[f64]> + Sync>(series: &[V], geometry: &BinGeometry) -> Vec<BinFrequencies> {
    series
        .par_iter()
        .map(|values| BinFrequencyAssigner.assign(values.as_ref(), geometry))
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn assign_series<V: AsRef<[f64]>>(series: &[V], geometry: &BinGeometry) -> Vec<BinFrequencies> {
    series
        .iter()
        .map(|values| BinFrequencyAssigner.assign(values.as_ref(), geometry))
        .collect()
}

/// Several series counted against one shared geometry
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SharedHistogram {
    geometry: BinGeometry,
    series: Vec<BinFrequencies>,
}

impl SharedHistogram {
    /// The geometry every series was counted against
    pub fn geometry(&self) -> &BinGeometry {
        &self.geometry
    }

    /// Frequencies per series, in input order
    pub fn series(&self) -> &[BinFrequencies] {
        &self.series
    }

    /// Number of series
    pub fn len(&self) -> usize {
        self.series.len()
    }

    /// Check if there are no series
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// Series `idx` as a standalone histogram
    pub fn histogram(&self, idx: usize) -> Option<Histogram> {
        self.series
            .get(idx)
            .map(|frequencies| Histogram::new(self.geometry, frequencies.clone()))
    }

    /// Labels shared by every series
    pub fn bin_labels(&self, dp: u32) -> Vec<String> {
        self.geometry.bin_labels(dp)
    }
}
