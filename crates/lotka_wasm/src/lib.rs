//! WASM bridge between `lotka_core` and the plotting front end.
//!
//! The front end renders; this crate only hands it numbers. Series and flat
//! point lists cross as typed arrays, structured results as
//! `serde-wasm-bindgen` values.

mod analysis;
mod equilibrium;
mod system;

pub use analysis::run_analysis;
pub use system::WasmLotkaVolterra;
