//! CLI argument definitions for the predator-prey runner.

use std::path::PathBuf;

use clap::Parser;
use clap_verbosity_flag::{InfoLevel, Verbosity};
use lotka_core::config::SimulationConfig;

#[derive(Parser)]
#[command(
    name = "lotka",
    version,
    about = "Simulate a Lotka-Volterra predator-prey system and classify its equilibria",
    long_about = "Integrates the predator-prey model with explicit Euler steps, scans an \
                  integer grid for equilibria and classifies each one from the \
                  eigenvalues of its Jacobian."
)]
pub struct Cli {
    /// Adjust log verbosity (-v for debug, -vv for trace, -q for warnings only).
    #[command(flatten)]
    pub verbosity: Verbosity<InfoLevel>,

    /// JSON file with a simulation config; flags override its values.
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Initial predator population.
    #[arg(long = "predator", value_name = "X0")]
    pub initial_predator: Option<f64>,

    /// Initial prey population.
    #[arg(long = "prey", value_name = "Y0")]
    pub initial_prey: Option<f64>,

    /// Predator growth rate.
    #[arg(long, allow_negative_numbers = true)]
    pub alpha: Option<f64>,

    /// Prey death rate.
    #[arg(long, allow_negative_numbers = true)]
    pub beta: Option<f64>,

    /// Integration step size.
    #[arg(long)]
    pub dt: Option<f64>,

    /// Number of samples in each time series.
    #[arg(long)]
    pub steps: Option<usize>,

    /// Exclusive bound of the integer equilibrium scan.
    #[arg(long = "scan-bound", allow_negative_numbers = true)]
    pub scan_bound: Option<i64>,

    /// Name passed on to plot rendering.
    #[arg(long = "output-name")]
    pub output_name: Option<String>,
}

impl Cli {
    /// Applies every flag that was given on top of `base`.
    pub fn apply_overrides(&self, base: SimulationConfig) -> SimulationConfig {
        let mut config = base;
        if let Some(value) = self.initial_predator {
            config.initial_predator = value;
        }
        if let Some(value) = self.initial_prey {
            config.initial_prey = value;
        }
        if let Some(value) = self.alpha {
            config.params.alpha = value;
        }
        if let Some(value) = self.beta {
            config.params.beta = value;
        }
        if let Some(value) = self.dt {
            config.dt = value;
        }
        if let Some(value) = self.steps {
            config.steps = value;
        }
        if let Some(value) = self.scan_bound {
            config.scan_bound = value;
        }
        if let Some(name) = &self.output_name {
            config.output_name = Some(name.clone());
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::Cli;
    use clap::{CommandFactory, Parser};
    use lotka_core::config::SimulationConfig;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_flags_keep_defaults() {
        let cli = Cli::parse_from(["lotka"]);
        assert_eq!(
            cli.apply_overrides(SimulationConfig::default()),
            SimulationConfig::default()
        );
    }

    #[test]
    fn flags_override_config() {
        let cli = Cli::parse_from([
            "lotka",
            "--alpha",
            "3",
            "--beta",
            "-0.5",
            "--steps",
            "20",
            "--scan-bound",
            "5",
            "--output-name",
            "run1",
        ]);
        let config = cli.apply_overrides(SimulationConfig::default());
        assert_eq!(config.params.alpha, 3.0);
        assert_eq!(config.params.beta, -0.5);
        assert_eq!(config.steps, 20);
        assert_eq!(config.scan_bound, 5);
        assert_eq!(config.output_name.as_deref(), Some("run1"));
        assert_eq!(config.dt, 0.01);
    }
}
