//! Equilibrium scan and stability classification bindings.

use crate::system::WasmLotkaVolterra;
use lotka_core::equilibrium::find_equilibria;
use lotka_core::stability::classify;
use serde_wasm_bindgen::to_value;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
impl WasmLotkaVolterra {
    /// Equilibria on the integer grid `[0, bound)^2` as a flat
    /// `[x0, y0, x1, y1, ...]` list, for drawing markers.
    pub fn find_equilibria(&self, bound: i32) -> Vec<f64> {
        find_equilibria(&self.model, i64::from(bound))
            .into_iter()
            .flat_map(|point| [point.x, point.y])
            .collect()
    }

    /// Stability reports for every equilibrium on the integer grid.
    pub fn classify_equilibria(&self, bound: i32) -> Result<JsValue, JsValue> {
        let equilibria = find_equilibria(&self.model, i64::from(bound));
        let reports = classify(&self.model, &equilibria);
        to_value(&reports)
            .map_err(|err| JsValue::from_str(&format!("Failed to serialize reports: {err}")))
    }

    /// Stability labels (`"sink"`, `"source"`, `"saddle"`, `"unstable"`) in
    /// the same order as `find_equilibria`.
    pub fn stability_labels(&self, bound: i32) -> Vec<String> {
        let equilibria = find_equilibria(&self.model, i64::from(bound));
        classify(&self.model, &equilibria)
            .into_iter()
            .map(|report| report.stability.label().to_string())
            .collect()
    }
}
