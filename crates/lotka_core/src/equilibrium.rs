use crate::model::LotkaVolterra;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Equilibrium {
    pub x: f64,
    pub y: f64,
}

impl Equilibrium {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Equilibrium {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Scans the integer grid `[0, bound) x [0, bound)` for points where both
/// rates vanish exactly.
///
/// Points come back in row-major order (x outer, y inner). Equilibria with
/// non-integer coordinates are not found. A non-positive `bound` scans
/// nothing.
pub fn find_equilibria(model: &LotkaVolterra, bound: i64) -> Vec<Equilibrium> {
    let mut equilibria = Vec::new();
    for gx in 0..bound {
        for gy in 0..bound {
            let (x, y) = (gx as f64, gy as f64);
            if is_equilibrium(model, x, y) {
                let point = Equilibrium::new(x, y);
                tracing::info!(x, y, "The system has an equilibrium in {point}");
                equilibria.push(point);
            }
        }
    }
    equilibria
}

/// Exact test: both field components equal zero.
pub fn is_equilibrium(model: &LotkaVolterra, x: f64, y: f64) -> bool {
    let (f, g) = model.field(x, y);
    f == 0.0 && g == 0.0
}

#[cfg(test)]
mod tests {
    use super::{find_equilibria, is_equilibrium, Equilibrium};
    use crate::model::LotkaVolterra;

    #[test]
    fn finds_all_integer_equilibria_in_row_major_order() {
        let model = LotkaVolterra::new(2.0, 1.0);
        let equilibria = find_equilibria(&model, 10);
        assert_eq!(
            equilibria,
            vec![
                Equilibrium::new(0.0, 0.0),
                Equilibrium::new(1.0, 1.0),
                Equilibrium::new(2.0, 0.0),
            ]
        );
    }

    #[test]
    fn origin_is_always_an_equilibrium() {
        for (alpha, beta) in [(2.0, 1.0), (0.3, 0.7), (5.0, 3.0), (-1.0, 2.5)] {
            let model = LotkaVolterra::new(alpha, beta);
            let equilibria = find_equilibria(&model, 4);
            assert_eq!(equilibria.first(), Some(&Equilibrium::new(0.0, 0.0)));
        }
    }

    #[test]
    fn non_positive_bound_yields_empty_result() {
        let model = LotkaVolterra::new(2.0, 1.0);
        assert!(find_equilibria(&model, 0).is_empty());
        assert!(find_equilibria(&model, -5).is_empty());
    }

    #[test]
    fn bound_is_exclusive() {
        let model = LotkaVolterra::new(2.0, 1.0);
        assert_eq!(find_equilibria(&model, 1), vec![Equilibrium::new(0.0, 0.0)]);
        assert_eq!(find_equilibria(&model, 2).len(), 2);
    }

    #[test]
    fn non_integer_equilibria_are_missed() {
        // Interior equilibrium sits at (beta, alpha - beta) = (0.5, 1.0).
        let model = LotkaVolterra::new(1.5, 0.5);
        assert!(is_equilibrium(&model, 0.5, 1.0));
        let equilibria = find_equilibria(&model, 10);
        assert!(!equilibria.contains(&Equilibrium::new(0.5, 1.0)));
        assert!(equilibria.contains(&Equilibrium::new(0.0, 0.0)));
    }

    #[test]
    fn every_returned_point_zeroes_the_field() {
        let model = LotkaVolterra::new(4.0, 3.0);
        let equilibria = find_equilibria(&model, 10);
        assert!(!equilibria.is_empty());
        for point in &equilibria {
            assert_eq!(model.field(point.x, point.y), (0.0, 0.0));
        }
    }

    #[test]
    fn display_formats_point() {
        assert_eq!(Equilibrium::new(2.0, 0.0).to_string(), "(2, 0)");
    }
}
