use crate::model::ModelParams;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("step size dt must be finite and positive (got {0})")]
    InvalidStepSize(f64),
    #[error("step count must be at least 1")]
    NoSteps,
    #[error("parameter {name} must be finite (got {value})")]
    NonFiniteParameter { name: &'static str, value: f64 },
    #[error("initial {name} population must be finite (got {value})")]
    NonFiniteInitialValue { name: &'static str, value: f64 },
}

/// Everything one analysis run needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Initial predator population.
    pub initial_predator: f64,
    /// Initial prey population.
    pub initial_prey: f64,
    pub params: ModelParams,
    pub dt: f64,
    pub steps: usize,
    /// Exclusive bound of the integer equilibrium scan.
    pub scan_bound: i64,
    /// Name handed to whatever renders the plots. Not interpreted here.
    pub output_name: Option<String>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            initial_predator: 10.0,
            initial_prey: 2.0,
            params: ModelParams::default(),
            dt: 0.01,
            steps: 1000,
            scan_bound: 10,
            output_name: None,
        }
    }
}

impl SimulationConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.dt.is_finite() || self.dt <= 0.0 {
            return Err(ConfigError::InvalidStepSize(self.dt));
        }
        if self.steps == 0 {
            return Err(ConfigError::NoSteps);
        }
        for (name, value) in [("alpha", self.params.alpha), ("beta", self.params.beta)] {
            if !value.is_finite() {
                return Err(ConfigError::NonFiniteParameter { name, value });
            }
        }
        for (name, value) in [
            ("predator", self.initial_predator),
            ("prey", self.initial_prey),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::NonFiniteInitialValue { name, value });
            }
        }
        Ok(())
    }

    pub fn initial(&self) -> (f64, f64) {
        (self.initial_predator, self.initial_prey)
    }
}
