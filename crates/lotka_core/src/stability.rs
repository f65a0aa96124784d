//! Linear stability of equilibria.
//!
//! The field is linearized at each equilibrium with the analytic Jacobian
//!
//! ```text
//! J = | alpha - 2x - y    -x        |
//!     | y                 x - beta  |
//! ```
//!
//! and the two eigenvalues follow from the trace and determinant,
//! `(tr -/+ sqrt(tr^2 - 4 det)) / 2`. A negative discriminant yields a
//! complex-conjugate pair sharing the real part `tr / 2`.

use crate::equilibrium::Equilibrium;
use crate::model::LotkaVolterra;
use nalgebra::Matrix2;
use num_complex::Complex;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Jacobian {
    pub a11: f64,
    pub a12: f64,
    pub a21: f64,
    pub a22: f64,
}

impl Jacobian {
    /// Analytic Jacobian of the field at (x, y).
    pub fn at(model: &LotkaVolterra, x: f64, y: f64) -> Self {
        Self {
            a11: model.alpha - 2.0 * x - y,
            a12: -x,
            a21: y,
            a22: -model.beta + x,
        }
    }

    pub fn trace(&self) -> f64 {
        self.a11 + self.a22
    }

    pub fn determinant(&self) -> f64 {
        self.a11 * self.a22 - self.a12 * self.a21
    }

    pub fn discriminant(&self) -> f64 {
        let trace = self.trace();
        trace * trace - 4.0 * self.determinant()
    }

    /// Eigenvalues ordered as `(tr - sqrt(disc)) / 2`, `(tr + sqrt(disc)) / 2`.
    pub fn eigenvalues(&self) -> [Complex<f64>; 2] {
        let trace = Complex::new(self.trace(), 0.0);
        let root = complex_sqrt(self.discriminant());
        [(trace - root) / 2.0, (trace + root) / 2.0]
    }

    pub fn matrix(&self) -> Matrix2<f64> {
        Matrix2::new(self.a11, self.a12, self.a21, self.a22)
    }
}

/// Square root extended to negative reals: `sqrt(-d) = i * sqrt(d)`.
fn complex_sqrt(value: f64) -> Complex<f64> {
    if value >= 0.0 {
        Complex::new(value.sqrt(), 0.0)
    } else {
        Complex::new(0.0, (-value).sqrt())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Stability {
    /// Both real parts negative.
    Sink,
    /// Both real parts positive.
    Source,
    /// Real parts of opposite sign.
    Saddle,
    /// Any other sign pattern: a zero real part (non-hyperbolic) or NaN.
    Unstable,
}

impl Stability {
    pub fn from_real_parts(first: f64, second: f64) -> Self {
        if first < 0.0 && second < 0.0 {
            Stability::Sink
        } else if first > 0.0 && second > 0.0 {
            Stability::Source
        } else if (first > 0.0 && second < 0.0) || (first < 0.0 && second > 0.0) {
            Stability::Saddle
        } else {
            Stability::Unstable
        }
    }

    pub fn from_eigenvalues(eigenvalues: &[Complex<f64>; 2]) -> Self {
        Self::from_real_parts(eigenvalues[0].re, eigenvalues[1].re)
    }

    pub fn label(self) -> &'static str {
        match self {
            Stability::Sink => "sink",
            Stability::Source => "source",
            Stability::Saddle => "saddle",
            Stability::Unstable => "unstable",
        }
    }

    pub fn is_stable(self) -> bool {
        matches!(self, Stability::Sink)
    }
}

impl fmt::Display for Stability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StabilityReport {
    pub equilibrium: Equilibrium,
    pub jacobian: Jacobian,
    pub trace: f64,
    pub determinant: f64,
    pub eigenvalues: [Complex<f64>; 2],
    pub stability: Stability,
}

impl StabilityReport {
    pub fn analyze(model: &LotkaVolterra, equilibrium: Equilibrium) -> Self {
        let jacobian = Jacobian::at(model, equilibrium.x, equilibrium.y);
        let eigenvalues = jacobian.eigenvalues();
        Self {
            equilibrium,
            jacobian,
            trace: jacobian.trace(),
            determinant: jacobian.determinant(),
            eigenvalues,
            stability: Stability::from_eigenvalues(&eigenvalues),
        }
    }
}

impl fmt::Display for StabilityReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Check the equilibrium point {}", self.equilibrium)?;
        writeln!(
            f,
            "The real part of the first eigenvalue is {}",
            self.eigenvalues[0].re
        )?;
        writeln!(
            f,
            "The real part of the second eigenvalue is {}",
            self.eigenvalues[1].re
        )?;
        match self.stability {
            Stability::Sink => write!(
                f,
                "The equilibrium in {} is a sink. It is stable",
                self.equilibrium
            ),
            Stability::Source => write!(
                f,
                "The equilibrium in {} is a source. It is unstable",
                self.equilibrium
            ),
            Stability::Saddle => write!(
                f,
                "The equilibrium in {} is a saddle. It is unstable",
                self.equilibrium
            ),
            Stability::Unstable => write!(f, "The equilibrium in {} is unstable", self.equilibrium),
        }
    }
}

/// Classifies every equilibrium, preserving input order.
pub fn classify(model: &LotkaVolterra, equilibria: &[Equilibrium]) -> Vec<StabilityReport> {
    equilibria
        .iter()
        .map(|&point| {
            let report = StabilityReport::analyze(model, point);
            tracing::info!(
                x = point.x,
                y = point.y,
                lambda1_re = report.eigenvalues[0].re,
                lambda2_re = report.eigenvalues[1].re,
                stability = report.stability.label(),
                "The equilibrium in {point} is a {}",
                report.stability
            );
            report
        })
        .collect()
}
