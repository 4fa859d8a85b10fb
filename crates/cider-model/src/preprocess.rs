//! Resampling and normalization of raw spectra.
//!
//! Mirrors the training-time pipeline of the classification network:
//! non-finite samples dropped, flux linearly resampled onto a fixed
//! wavelength grid, then z-scored.

use cider_core::config::ModelConfig;
use cider_core::errors::SpectrumError;

/// Target wavelength grid, inclusive on both edges.
#[derive(Debug, Clone)]
pub struct WavelengthGrid {
    min_angstrom: f64,
    max_angstrom: f64,
    points: usize,
}

impl WavelengthGrid {
    pub fn new(min_angstrom: f64, max_angstrom: f64, points: usize) -> Self {
        Self {
            min_angstrom,
            max_angstrom,
            points,
        }
    }

    pub fn from_config(config: &ModelConfig) -> Self {
        Self::new(
            config.grid_min_angstrom,
            config.grid_max_angstrom,
            config.grid_points,
        )
    }

    /// Number of grid points.
    pub fn points(&self) -> usize {
        self.points
    }

    /// Wavelength of grid point `i`; the last point lands exactly on the
    /// upper edge.
    fn wavelength_at(&self, i: usize) -> f64 {
        if self.points < 2 {
            return self.min_angstrom;
        }
        let t = i as f64 / (self.points - 1) as f64;
        self.min_angstrom + (self.max_angstrom - self.min_angstrom) * t
    }
}

/// Prepare one spectrum for inference.
///
/// Drops samples where either value is non-finite, sorts by wavelength,
/// resamples the flux onto `grid` by linear interpolation (grid points
/// outside the observed range take the nearest edge flux), and z-scores
/// the result with the population standard deviation.
///
/// A constant flux has no scale to normalize by and comes back as all
/// zeros rather than a division by zero.
pub fn preprocess(
    wavelengths: &[f64],
    fluxes: &[f64],
    grid: &WavelengthGrid,
) -> Result<Vec<f32>, SpectrumError> {
    if wavelengths.len() != fluxes.len() {
        return Err(SpectrumError::LengthMismatch {
            wavelengths: wavelengths.len(),
            fluxes: fluxes.len(),
        });
    }

    let mut samples: Vec<(f64, f64)> = wavelengths
        .iter()
        .zip(fluxes.iter())
        .filter(|(w, f)| w.is_finite() && f.is_finite())
        .map(|(&w, &f)| (w, f))
        .collect();

    if samples.is_empty() {
        return Err(SpectrumError::NoFiniteValues);
    }
    if samples.len() < 2 {
        return Err(SpectrumError::TooFewPoints {
            remaining: samples.len(),
        });
    }

    samples.sort_unstable_by(|a, b| a.0.total_cmp(&b.0));

    let resampled = resample_linear(&samples, grid);
    Ok(zscore(&resampled))
}

/// Linear interpolation onto the grid.
///
/// `samples` must be sorted by wavelength. Grid points left of the first
/// sample take the first flux, points right of the last take the last.
fn resample_linear(samples: &[(f64, f64)], grid: &WavelengthGrid) -> Vec<f64> {
    let first = samples[0];
    let last = samples[samples.len() - 1];

    let mut out = Vec::with_capacity(grid.points());
    let mut seg = 0usize;

    for i in 0..grid.points() {
        let x = grid.wavelength_at(i);
        if x <= first.0 {
            out.push(first.1);
            continue;
        }
        if x >= last.0 {
            out.push(last.1);
            continue;
        }
        // Grid wavelengths ascend, so the segment index only moves forward.
        while seg + 1 < samples.len() && samples[seg + 1].0 < x {
            seg += 1;
        }
        let (w0, f0) = samples[seg];
        let (w1, f1) = samples[seg + 1];
        let dw = w1 - w0;
        if dw > 0.0 {
            out.push(f0 + (f1 - f0) * (x - w0) / dw);
        } else {
            out.push(f1);
        }
    }
    out
}

/// Z-score with the population standard deviation (ddof = 0).
fn zscore(values: &[f64]) -> Vec<f32> {
    if values.is_empty() {
        return Vec::new();
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
    let std = variance.sqrt();

    if std > 0.0 {
        values.iter().map(|v| ((v - mean) / std) as f32).collect()
    } else {
        vec![0.0; values.len()]
    }
}
