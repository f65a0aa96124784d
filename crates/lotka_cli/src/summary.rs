use std::fmt::Write;

use lotka_core::analysis::Analysis;

const SEPARATOR: &str = "----------------------------";

/// Renders the end-of-run report printed on stdout.
pub fn render_summary(analysis: &Analysis) -> String {
    let mut out = String::new();
    let trajectory = &analysis.trajectory;

    let _ = writeln!(
        out,
        "alpha = {}, beta = {}, dt = {}, samples = {}",
        analysis.params.alpha,
        analysis.params.beta,
        trajectory.dt,
        trajectory.len()
    );
    if let Some((predator, prey)) = trajectory.final_state() {
        let _ = writeln!(out, "Final populations: predator = {predator}, prey = {prey}");
    }
    if let Some(name) = &analysis.output_name {
        let _ = writeln!(out, "Plot output name: {name}");
    }

    if analysis.equilibria.is_empty() {
        let _ = writeln!(out, "No integer equilibria found.");
        return out;
    }
    for point in &analysis.equilibria {
        let _ = writeln!(out, "The system has an equilibrium in {point}");
    }
    let _ = writeln!(out, "{SEPARATOR}");
    for report in &analysis.reports {
        let _ = writeln!(out, "{report}");
        let _ = writeln!(out, "{SEPARATOR}");
    }
    out
}
