//! The two-species predator-prey vector field.
//!
//! ```text
//! dx/dt = f(x, y) = alpha*x - x^2 - x*y     (predator, logistic self-limitation)
//! dy/dt = g(x, y) = -beta*y + x*y           (prey, mass-action growth)
//! ```
//!
//! The field is defined for every real (x, y); negative populations are not
//! clamped.

use crate::traits::{DynamicalSystem, Scalar};
use serde::{Deserialize, Serialize};

/// Model parameters. Immutable for the lifetime of a run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModelParams {
    /// Predator intrinsic growth rate.
    pub alpha: f64,
    /// Prey death rate.
    pub beta: f64,
}

impl Default for ModelParams {
    fn default() -> Self {
        Self {
            alpha: 2.0,
            beta: 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LotkaVolterra {
    pub alpha: f64,
    pub beta: f64,
}

impl LotkaVolterra {
    pub fn new(alpha: f64, beta: f64) -> Self {
        Self { alpha, beta }
    }

    /// Rate of change of the predator population, f(x, y).
    pub fn predator_rate(&self, x: f64, y: f64) -> f64 {
        self.alpha * x - x * x - x * y
    }

    /// Rate of change of the prey population, g(x, y).
    pub fn prey_rate(&self, x: f64, y: f64) -> f64 {
        -self.beta * y + x * y
    }

    /// Both components of the field at (x, y).
    pub fn field(&self, x: f64, y: f64) -> (f64, f64) {
        (self.predator_rate(x, y), self.prey_rate(x, y))
    }

    pub fn params(&self) -> ModelParams {
        ModelParams {
            alpha: self.alpha,
            beta: self.beta,
        }
    }
}

impl From<ModelParams> for LotkaVolterra {
    fn from(params: ModelParams) -> Self {
        Self::new(params.alpha, params.beta)
    }
}

impl<T: Scalar> DynamicalSystem<T> for LotkaVolterra {
    fn dimension(&self) -> usize {
        2
    }

    fn apply(&self, _t: T, x: &[T], out: &mut [T]) {
        let alpha = T::from_f64(self.alpha).unwrap_or_else(T::nan);
        let beta = T::from_f64(self.beta).unwrap_or_else(T::nan);
        let (predator, prey) = (x[0], x[1]);
        out[0] = alpha * predator - predator * predator - predator * prey;
        out[1] = -beta * prey + predator * prey;
    }
}
