use crate::traits::{DynamicalSystem, Scalar, Steppable};

/// Explicit (forward) Euler solver.
///
/// `y_{n+1} = y_n + f(t_n, y_n) * dt`
///
/// Fixed step, first order, no stability correction. A step size that is too
/// large for the dynamics blows up into infinities/NaNs, which are left to
/// propagate.
pub struct Euler<T: Scalar> {
    k: Vec<T>,
}

impl<T: Scalar> Euler<T> {
    pub fn new(dim: usize) -> Self {
        Self {
            k: vec![T::zero(); dim],
        }
    }
}

impl<T: Scalar> Steppable<T> for Euler<T> {
    fn step(&mut self, system: &impl DynamicalSystem<T>, t: &mut T, state: &mut [T], dt: T) {
        let t0 = *t;

        // k = f(t, y)
        system.apply(t0, state, &mut self.k);

        for i in 0..state.len() {
            state[i] = state[i] + self.k[i] * dt;
        }

        *t = t0 + dt;
    }
}
