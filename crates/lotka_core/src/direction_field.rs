use crate::grid::GridAxis;
use crate::model::LotkaVolterra;
use anyhow::Result;
use serde::Serialize;

/// Unit-length field directions sampled on a grid, for quiver plots.
///
/// Node `k = ix + iy * xs.len()` sits at `(xs[ix], ys[iy])` and points along
/// `(dx[k], dy[k])`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DirectionField {
    pub xs: Vec<f64>,
    pub ys: Vec<f64>,
    pub dx: Vec<f64>,
    pub dy: Vec<f64>,
}

pub fn direction_field(
    model: &LotkaVolterra,
    x_axis: &GridAxis,
    y_axis: &GridAxis,
) -> Result<DirectionField> {
    x_axis.validate()?;
    y_axis.validate()?;

    let xs = x_axis.values();
    let ys = y_axis.values();
    let mut dx = Vec::with_capacity(xs.len() * ys.len());
    let mut dy = Vec::with_capacity(xs.len() * ys.len());

    for &y in &ys {
        for &x in &xs {
            let (f, g) = normalize(model.field(x, y));
            dx.push(f);
            dy.push(g);
        }
    }

    Ok(DirectionField { xs, ys, dx, dy })
}

/// Scales a vector to unit length. A zero vector is divided by 1 instead.
pub fn normalize((f, g): (f64, f64)) -> (f64, f64) {
    let mut magnitude = f.hypot(g);
    if magnitude == 0.0 {
        magnitude = 1.0;
    }
    (f / magnitude, g / magnitude)
}
