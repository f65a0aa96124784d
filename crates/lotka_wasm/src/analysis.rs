//! Phase-plane geometry and the full analysis runner.

use crate::system::{to_js_error, WasmLotkaVolterra};
use lotka_core::analysis::run_analysis as core_run_analysis;
use lotka_core::config::SimulationConfig;
use lotka_core::direction_field::direction_field;
use lotka_core::grid::GridAxis;
use lotka_core::nullcline::{analytic_nullclines, sample_nullcline, FieldComponent};
use serde_wasm_bindgen::{from_value, to_value};
use wasm_bindgen::prelude::*;

fn parse_component(name: &str) -> Option<FieldComponent> {
    match name {
        "predator" | "x" | "f" => Some(FieldComponent::Predator),
        "prey" | "y" | "g" => Some(FieldComponent::Prey),
        _ => None,
    }
}

#[wasm_bindgen]
impl WasmLotkaVolterra {
    pub fn direction_field(
        &self,
        x_min: f64,
        x_max: f64,
        x_samples: usize,
        y_min: f64,
        y_max: f64,
        y_samples: usize,
    ) -> Result<JsValue, JsValue> {
        let field = direction_field(
            &self.model,
            &GridAxis::new(x_min, x_max, x_samples),
            &GridAxis::new(y_min, y_max, y_samples),
        )
        .map_err(to_js_error)?;
        to_value(&field)
            .map_err(|err| JsValue::from_str(&format!("Failed to serialize direction field: {err}")))
    }

    pub fn nullclines(&self) -> Result<JsValue, JsValue> {
        to_value(&analytic_nullclines(&self.model))
            .map_err(|err| JsValue::from_str(&format!("Failed to serialize nullclines: {err}")))
    }

    #[allow(clippy::too_many_arguments)]
    pub fn sample_nullcline(
        &self,
        component: &str,
        x_min: f64,
        x_max: f64,
        x_samples: usize,
        y_min: f64,
        y_max: f64,
        y_samples: usize,
    ) -> Result<JsValue, JsValue> {
        let component = parse_component(component)
            .ok_or_else(|| JsValue::from_str(&format!("Unknown field component: {component}")))?;
        let geometry = sample_nullcline(
            &self.model,
            component,
            &GridAxis::new(x_min, x_max, x_samples),
            &GridAxis::new(y_min, y_max, y_samples),
        )
        .map_err(to_js_error)?;
        to_value(&geometry)
            .map_err(|err| JsValue::from_str(&format!("Failed to serialize nullcline: {err}")))
    }
}

/// Runs integrate, equilibrium scan and classification from a config object.
/// Missing fields fall back to the defaults.
#[wasm_bindgen]
pub fn run_analysis(config: JsValue) -> Result<JsValue, JsValue> {
    console_error_panic_hook::set_once();

    let config: SimulationConfig = if config.is_undefined() || config.is_null() {
        SimulationConfig::default()
    } else {
        from_value(config).map_err(|err| JsValue::from_str(&format!("Invalid config: {err}")))?
    };
    let analysis = core_run_analysis(&config).map_err(to_js_error)?;
    to_value(&analysis)
        .map_err(|err| JsValue::from_str(&format!("Failed to serialize analysis: {err}")))
}
