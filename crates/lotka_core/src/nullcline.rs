//! Nullclines: curves along which one component of the field vanishes.
//!
//! For this model they are straight lines:
//! - predator (`f = x(alpha - x - y) = 0`): `x = 0` and `y = alpha - x`
//! - prey (`g = y(x - beta) = 0`): `y = 0` and `x = beta`
//!
//! `sample_nullcline` recovers them numerically with marching squares, which
//! is what a plot of an arbitrary level set would use.

use crate::grid::GridAxis;
use crate::model::LotkaVolterra;
use anyhow::Result;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldComponent {
    /// `f(x, y)`, the predator rate.
    Predator,
    /// `g(x, y)`, the prey rate.
    Prey,
}

impl FieldComponent {
    pub fn evaluate(self, model: &LotkaVolterra, x: f64, y: f64) -> f64 {
        match self {
            FieldComponent::Predator => model.predator_rate(x, y),
            FieldComponent::Prey => model.prey_rate(x, y),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NullclineLine {
    Vertical { x: f64 },
    Horizontal { y: f64 },
    /// `y = slope * x + intercept`
    Sloped { slope: f64, intercept: f64 },
}

impl NullclineLine {
    /// Signed distance-like residual; zero when (x, y) lies on the line.
    pub fn offset(&self, x: f64, y: f64) -> f64 {
        match *self {
            NullclineLine::Vertical { x: x0 } => x - x0,
            NullclineLine::Horizontal { y: y0 } => y - y0,
            NullclineLine::Sloped { slope, intercept } => y - (slope * x + intercept),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Nullcline {
    pub component: FieldComponent,
    pub line: NullclineLine,
}

pub fn analytic_nullclines(model: &LotkaVolterra) -> Vec<Nullcline> {
    vec![
        Nullcline {
            component: FieldComponent::Predator,
            line: NullclineLine::Vertical { x: 0.0 },
        },
        Nullcline {
            component: FieldComponent::Predator,
            line: NullclineLine::Sloped {
                slope: -1.0,
                intercept: model.alpha,
            },
        },
        Nullcline {
            component: FieldComponent::Prey,
            line: NullclineLine::Horizontal { y: 0.0 },
        },
        Nullcline {
            component: FieldComponent::Prey,
            line: NullclineLine::Vertical { x: model.beta },
        },
    ]
}

/// Line segments approximating `component = 0` on the sampled grid.
///
/// `points` is a flat `[x0, y0, x1, y1, ...]` list; `segments` holds index
/// pairs into it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NullclineGeometry {
    pub component: FieldComponent,
    pub points: Vec<f64>,
    pub segments: Vec<u32>,
}

pub fn sample_nullcline(
    model: &LotkaVolterra,
    component: FieldComponent,
    x_axis: &GridAxis,
    y_axis: &GridAxis,
) -> Result<NullclineGeometry> {
    x_axis.validate()?;
    y_axis.validate()?;

    let nx = x_axis.samples;
    let ny = y_axis.samples;
    let index = |ix: usize, iy: usize| -> usize { ix + iy * nx };
    let mut values = vec![0.0; nx * ny];
    for iy in 0..ny {
        let y = y_axis.value(iy);
        for ix in 0..nx {
            values[index(ix, iy)] = component.evaluate(model, x_axis.value(ix), y);
        }
    }

    let mut points = Vec::new();
    let mut segments = Vec::new();
    let mut point_count = 0u32;
    for iy in 0..ny - 1 {
        let y0 = y_axis.value(iy);
        let y1 = y_axis.value(iy + 1);
        for ix in 0..nx - 1 {
            let x0 = x_axis.value(ix);
            let x1 = x_axis.value(ix + 1);
            let square = Square {
                x0,
                x1,
                y0,
                y1,
                v: [
                    values[index(ix, iy)],
                    values[index(ix + 1, iy)],
                    values[index(ix + 1, iy + 1)],
                    values[index(ix, iy + 1)],
                ],
            };

            for (edge_a, edge_b) in marching_squares_edge_pairs(square.case_index()) {
                let (ax, ay) = square.interpolate_edge(*edge_a);
                let (bx, by) = square.interpolate_edge(*edge_b);
                points.extend([ax, ay, bx, by]);
                segments.push(point_count);
                segments.push(point_count + 1);
                point_count += 2;
            }
        }
    }

    Ok(NullclineGeometry {
        component,
        points,
        segments,
    })
}

/// One grid cell; corner values counter-clockwise from `(x0, y0)`.
struct Square {
    x0: f64,
    x1: f64,
    y0: f64,
    y1: f64,
    v: [f64; 4],
}

impl Square {
    fn case_index(&self) -> u8 {
        self.v
            .iter()
            .enumerate()
            .filter(|(_, value)| **value >= 0.0)
            .fold(0u8, |acc, (corner, _)| acc | (1 << corner))
    }

    fn interpolate_edge(&self, edge: u8) -> (f64, f64) {
        let [v0, v1, v2, v3] = self.v;
        let (x0, x1, y0, y1) = (self.x0, self.x1, self.y0, self.y1);
        match edge {
            0 => (x0 + (x1 - x0) * interpolate_factor(v0, v1), y0),
            1 => (x1, y0 + (y1 - y0) * interpolate_factor(v1, v2)),
            2 => (x1 + (x0 - x1) * interpolate_factor(v2, v3), y1),
            3 => (x0, y1 + (y0 - y1) * interpolate_factor(v3, v0)),
            _ => (x0, y0),
        }
    }
}

fn marching_squares_edge_pairs(case_index: u8) -> &'static [(u8, u8)] {
    match case_index {
        0 | 15 => &[],
        1 | 14 => &[(3, 0)],
        2 | 13 => &[(0, 1)],
        3 | 12 => &[(3, 1)],
        4 | 11 => &[(1, 2)],
        5 => &[(3, 2), (0, 1)],
        6 | 9 => &[(0, 2)],
        7 | 8 => &[(3, 2)],
        10 => &[(0, 3), (1, 2)],
        _ => &[],
    }
}

fn interpolate_factor(v0: f64, v1: f64) -> f64 {
    let denominator = v0 - v1;
    if denominator.abs() <= 1e-12 {
        0.5
    } else {
        (v0 / denominator).clamp(0.0, 1.0)
    }
}
