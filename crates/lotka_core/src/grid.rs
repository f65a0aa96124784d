use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

/// Uniform sampling of one coordinate axis, endpoints included.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridAxis {
    pub min: f64,
    pub max: f64,
    pub samples: usize,
}

impl GridAxis {
    pub fn new(min: f64, max: f64, samples: usize) -> Self {
        Self { min, max, samples }
    }

    pub fn validate(&self) -> Result<()> {
        if !self.min.is_finite() || !self.max.is_finite() || self.max <= self.min {
            bail!("Each axis range must be finite with max > min.");
        }
        if self.samples < 2 {
            bail!("Each axis needs at least 2 samples.");
        }
        Ok(())
    }

    pub fn step(&self) -> f64 {
        (self.max - self.min) / (self.samples.saturating_sub(1) as f64)
    }

    pub fn value(&self, index: usize) -> f64 {
        self.min + self.step() * index as f64
    }

    pub fn values(&self) -> Vec<f64> {
        (0..self.samples).map(|i| self.value(i)).collect()
    }
}
