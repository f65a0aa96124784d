use crate::model::LotkaVolterra;
use crate::solvers::Euler;
use crate::traits::Steppable;
use anyhow::{bail, Result};
use serde::Serialize;

/// Population time series, one entry per integration step.
///
/// `predator[0]`, `prey[0]` hold the initial condition. Both series always
/// have the same length.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trajectory {
    pub dt: f64,
    pub predator: Vec<f64>,
    pub prey: Vec<f64>,
}

impl Trajectory {
    pub fn len(&self) -> usize {
        self.predator.len()
    }

    pub fn is_empty(&self) -> bool {
        self.predator.is_empty()
    }

    /// Time of each sample, `i * dt`.
    pub fn times(&self) -> Vec<f64> {
        (0..self.len()).map(|i| i as f64 * self.dt).collect()
    }

    /// (predator, prey) pairs for a phase-space plot.
    pub fn phase_points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.predator.iter().copied().zip(self.prey.iter().copied())
    }

    /// Last sampled state.
    pub fn final_state(&self) -> Option<(f64, f64)> {
        Some((*self.predator.last()?, *self.prey.last()?))
    }
}

/// Integrates the model with fixed-step explicit Euler.
///
/// Produces `steps` samples, the first being `initial`. Overflow from a large
/// `dt` or a long horizon is not caught: it shows up as infinities/NaNs in the
/// series.
pub fn integrate(
    model: &LotkaVolterra,
    initial: (f64, f64),
    dt: f64,
    steps: usize,
) -> Result<Trajectory> {
    if steps == 0 {
        bail!("Integration requires at least one step.");
    }
    if !dt.is_finite() || dt == 0.0 {
        bail!("Step size dt must be finite and nonzero (got {dt}).");
    }

    let mut predator = Vec::with_capacity(steps);
    let mut prey = Vec::with_capacity(steps);
    let mut stepper = Euler::new(2);
    let mut state = [initial.0, initial.1];
    let mut t = 0.0;

    predator.push(state[0]);
    prey.push(state[1]);
    for _ in 1..steps {
        stepper.step(model, &mut t, &mut state, dt);
        predator.push(state[0]);
        prey.push(state[1]);
    }

    tracing::debug!(steps, dt, final_predator = state[0], final_prey = state[1], "integration finished");

    Ok(Trajectory { dt, predator, prey })
}

#[cfg(test)]
mod tests {
    use super::integrate;
    use crate::model::LotkaVolterra;

    fn assert_err_contains<T: std::fmt::Debug>(result: anyhow::Result<T>, needle: &str) {
        let err = result.expect_err("expected error");
        let message = format!("{err}");
        assert!(
            message.contains(needle),
            "expected error to contain \"{needle}\", got \"{message}\""
        );
    }

    #[test]
    fn integrate_rejects_invalid_inputs() {
        let model = LotkaVolterra::new(2.0, 1.0);
        assert_err_contains(integrate(&model, (1.0, 1.0), 0.01, 0), "at least one step");
        assert_err_contains(integrate(&model, (1.0, 1.0), 0.0, 10), "dt must be finite");
        assert_err_contains(
            integrate(&model, (1.0, 1.0), f64::NAN, 10),
            "dt must be finite",
        );
        assert_err_contains(
            integrate(&model, (1.0, 1.0), f64::INFINITY, 10),
            "dt must be finite",
        );
    }

    #[test]
    fn integrate_matches_hand_computed_euler_steps() {
        let model = LotkaVolterra::new(2.0, 1.0);
        let trajectory = integrate(&model, (10.0, 2.0), 0.01, 3).expect("integration");

        assert_eq!(trajectory.len(), 3);
        assert_eq!(trajectory.predator[0], 10.0);
        assert_eq!(trajectory.prey[0], 2.0);

        // f(10, 2) = -100, g(10, 2) = 18
        assert!((trajectory.predator[1] - 9.0).abs() < 1e-12);
        assert!((trajectory.prey[1] - 2.18).abs() < 1e-12);
        // f(9, 2.18) = -82.62, g(9, 2.18) = 17.44
        assert!((trajectory.predator[2] - 8.1738).abs() < 1e-12);
        assert!((trajectory.prey[2] - 2.3544).abs() < 1e-12);
    }

    #[test]
    fn integrate_follows_euler_recurrence_exactly() {
        let (alpha, beta, dt) = (2.0, 1.0, 0.01);
        let model = LotkaVolterra::new(alpha, beta);
        let trajectory = integrate(&model, (10.0, 2.0), dt, 50).expect("integration");

        for i in 0..trajectory.len() - 1 {
            let (x, y) = (trajectory.predator[i], trajectory.prey[i]);
            assert_eq!(
                trajectory.predator[i + 1],
                x + (alpha * x - x * x - x * y) * dt
            );
            assert_eq!(trajectory.prey[i + 1], y + (-beta * y + x * y) * dt);
        }
    }

    #[test]
    fn integrate_is_deterministic() {
        let model = LotkaVolterra::new(2.0, 1.0);
        let a = integrate(&model, (10.0, 2.0), 0.01, 1000).expect("integration");
        let b = integrate(&model, (10.0, 2.0), 0.01, 1000).expect("integration");
        for (lhs, rhs) in a.predator.iter().zip(&b.predator) {
            assert_eq!(lhs.to_bits(), rhs.to_bits());
        }
        for (lhs, rhs) in a.prey.iter().zip(&b.prey) {
            assert_eq!(lhs.to_bits(), rhs.to_bits());
        }
    }

    #[test]
    fn single_step_holds_only_initial_condition() {
        let model = LotkaVolterra::new(2.0, 1.0);
        let trajectory = integrate(&model, (3.0, 4.0), 0.5, 1).expect("integration");
        assert_eq!(trajectory.predator, vec![3.0]);
        assert_eq!(trajectory.prey, vec![4.0]);
        assert_eq!(trajectory.final_state(), Some((3.0, 4.0)));
    }

    #[test]
    fn equilibrium_initial_condition_stays_put() {
        let model = LotkaVolterra::new(2.0, 1.0);
        let trajectory = integrate(&model, (1.0, 1.0), 0.01, 100).expect("integration");
        assert!(trajectory.predator.iter().all(|&x| x == 1.0));
        assert!(trajectory.prey.iter().all(|&y| y == 1.0));
    }

    #[test]
    fn large_step_blows_up_without_error() {
        let model = LotkaVolterra::new(2.0, 1.0);
        let trajectory = integrate(&model, (10.0, 2.0), 10.0, 200).expect("integration");
        let (x, y) = trajectory.final_state().expect("non-empty");
        assert!(!x.is_finite() || !y.is_finite());
    }

    #[test]
    fn trajectory_reports_times_and_phase_points() {
        let model = LotkaVolterra::new(2.0, 1.0);
        let trajectory = integrate(&model, (10.0, 2.0), 0.5, 4).expect("integration");
        assert_eq!(trajectory.times(), vec![0.0, 0.5, 1.0, 1.5]);
        let pairs: Vec<(f64, f64)> = trajectory.phase_points().collect();
        assert_eq!(pairs.len(), 4);
        assert_eq!(pairs[0], (10.0, 2.0));
    }

    #[test]
    fn trajectory_approaches_interior_equilibrium() {
        let model = LotkaVolterra::new(2.0, 1.0);
        let trajectory = integrate(&model, (10.0, 2.0), 0.01, 5000).expect("integration");
        let (x, y) = trajectory.final_state().expect("non-empty");
        assert!((x - 1.0).abs() < 1e-3, "predator did not settle: {x}");
        assert!((y - 1.0).abs() < 1e-3, "prey did not settle: {y}");
    }
}
