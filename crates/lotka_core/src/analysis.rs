use crate::config::SimulationConfig;
use crate::equilibrium::{find_equilibria, Equilibrium};
use crate::model::{LotkaVolterra, ModelParams};
use crate::simulation::{integrate, Trajectory};
use crate::stability::{classify, StabilityReport};
use anyhow::{Context, Result};
use serde::Serialize;

/// Results of one full run: the time series, the equilibria found by the
/// scan and their stability reports.
#[derive(Debug, Clone, Serialize)]
pub struct Analysis {
    pub params: ModelParams,
    pub trajectory: Trajectory,
    pub equilibria: Vec<Equilibrium>,
    pub reports: Vec<StabilityReport>,
    pub output_name: Option<String>,
}

/// Runs integrate, equilibrium scan and classification in order.
pub fn run_analysis(config: &SimulationConfig) -> Result<Analysis> {
    config.validate().context("Invalid simulation configuration.")?;

    let model = LotkaVolterra::from(config.params);
    let _span = tracing::info_span!("analysis", alpha = model.alpha, beta = model.beta).entered();

    tracing::debug!(steps = config.steps, dt = config.dt, "integrating");
    let trajectory = integrate(&model, config.initial(), config.dt, config.steps)?;

    tracing::debug!(bound = config.scan_bound, "scanning for equilibria");
    let equilibria = find_equilibria(&model, config.scan_bound);

    tracing::debug!(count = equilibria.len(), "classifying equilibria");
    let reports = classify(&model, &equilibria);

    Ok(Analysis {
        params: config.params,
        trajectory,
        equilibria,
        reports,
        output_name: config.output_name.clone(),
    })
}
