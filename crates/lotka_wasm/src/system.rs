//! Core WASM model wrapper and low-level utilities.

use js_sys::Float64Array;
use lotka_core::model::LotkaVolterra;
use lotka_core::simulation::integrate;
use lotka_core::solvers::Euler;
use lotka_core::stability::Jacobian;
use lotka_core::traits::Steppable;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct WasmLotkaVolterra {
    pub(crate) model: LotkaVolterra,
    state: [f64; 2],
    t: f64,
    stepper: Euler<f64>,
}

pub(crate) fn to_js_error(err: anyhow::Error) -> JsValue {
    JsValue::from_str(&format!("{err:#}"))
}

#[wasm_bindgen]
impl WasmLotkaVolterra {
    #[wasm_bindgen(constructor)]
    pub fn new(alpha: f64, beta: f64) -> WasmLotkaVolterra {
        console_error_panic_hook::set_once();

        WasmLotkaVolterra {
            model: LotkaVolterra::new(alpha, beta),
            state: [0.0; 2],
            t: 0.0,
            stepper: Euler::new(2),
        }
    }

    pub fn alpha(&self) -> f64 {
        self.model.alpha
    }

    pub fn beta(&self) -> f64 {
        self.model.beta
    }

    /// Sets `(predator, prey)`. Extra entries are ignored, missing ones
    /// keep their current value.
    pub fn set_state(&mut self, state: &[f64]) {
        for (slot, value) in self.state.iter_mut().zip(state) {
            *slot = *value;
        }
    }

    pub fn get_state(&self) -> Vec<f64> {
        self.state.to_vec()
    }

    pub fn set_t(&mut self, t: f64) {
        self.t = t;
    }

    pub fn get_t(&self) -> f64 {
        self.t
    }

    /// One explicit Euler step of the live state, for animation.
    pub fn step(&mut self, dt: f64) {
        self.stepper
            .step(&self.model, &mut self.t, &mut self.state, dt);
    }

    pub fn predator_rate(&self, x: f64, y: f64) -> f64 {
        self.model.predator_rate(x, y)
    }

    pub fn prey_rate(&self, x: f64, y: f64) -> f64 {
        self.model.prey_rate(x, y)
    }

    /// Row-major analytic Jacobian at the live state.
    pub fn compute_jacobian(&self) -> Vec<f64> {
        let jacobian = Jacobian::at(&self.model, self.state[0], self.state[1]);
        vec![jacobian.a11, jacobian.a12, jacobian.a21, jacobian.a22]
    }

    /// Integrates from `(x0, y0)` and returns the full trajectory object.
    pub fn integrate(&self, x0: f64, y0: f64, dt: f64, steps: u32) -> Result<JsValue, JsValue> {
        let trajectory =
            integrate(&self.model, (x0, y0), dt, steps as usize).map_err(to_js_error)?;
        serde_wasm_bindgen::to_value(&trajectory)
            .map_err(|err| JsValue::from_str(&format!("Failed to serialize trajectory: {err}")))
    }

    /// Predator series only, as a typed array for the time-domain plot.
    pub fn integrate_predator(
        &self,
        x0: f64,
        y0: f64,
        dt: f64,
        steps: u32,
    ) -> Result<Float64Array, JsValue> {
        let trajectory =
            integrate(&self.model, (x0, y0), dt, steps as usize).map_err(to_js_error)?;
        Ok(Float64Array::from(trajectory.predator.as_slice()))
    }

    /// Prey series only, as a typed array for the time-domain plot.
    pub fn integrate_prey(
        &self,
        x0: f64,
        y0: f64,
        dt: f64,
        steps: u32,
    ) -> Result<Float64Array, JsValue> {
        let trajectory =
            integrate(&self.model, (x0, y0), dt, steps as usize).map_err(to_js_error)?;
        Ok(Float64Array::from(trajectory.prey.as_slice()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_advances_state_and_time() {
        let mut system = WasmLotkaVolterra::new(2.0, 1.0);
        system.set_state(&[10.0, 2.0]);
        system.set_t(0.0);
        system.step(0.01);

        let state = system.get_state();
        assert!((system.get_t() - 0.01).abs() < 1e-15);
        assert!((state[0] - 9.0).abs() < 1e-12);
        assert!((state[1] - 2.18).abs() < 1e-12);
    }

    #[test]
    fn set_state_ignores_extra_entries() {
        let mut system = WasmLotkaVolterra::new(2.0, 1.0);
        system.set_state(&[1.0, 2.0, 3.0]);
        assert_eq!(system.get_state(), vec![1.0, 2.0]);
        system.set_state(&[5.0]);
        assert_eq!(system.get_state(), vec![5.0, 2.0]);
    }

    #[test]
    fn compute_jacobian_at_interior_equilibrium() {
        let mut system = WasmLotkaVolterra::new(2.0, 1.0);
        system.set_state(&[1.0, 1.0]);
        assert_eq!(system.compute_jacobian(), vec![-1.0, -1.0, 1.0, 0.0]);
    }

    #[test]
    fn rates_delegate_to_model() {
        let system = WasmLotkaVolterra::new(2.0, 1.0);
        assert_eq!(system.predator_rate(10.0, 2.0), -100.0);
        assert_eq!(system.prey_rate(10.0, 2.0), 18.0);
        assert_eq!((system.alpha(), system.beta()), (2.0, 1.0));
    }

    #[test]
    #[cfg(target_arch = "wasm32")]
    fn integrate_rejects_zero_steps() {
        let system = WasmLotkaVolterra::new(2.0, 1.0);
        let result = system.integrate(10.0, 2.0, 0.01, 0);
        assert!(result.is_err(), "expected step-count error");
    }
}
