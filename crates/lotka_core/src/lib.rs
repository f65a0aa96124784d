pub mod analysis;
pub mod config;
pub mod direction_field;
pub mod equilibrium;
pub mod grid;
pub mod model;
pub mod nullcline;
pub mod simulation;
pub mod solvers;
pub mod stability;
/// The `lotka_core` crate provides the mathematical engine for predator-prey
/// analysis. Plot rendering lives elsewhere; everything here returns plain
/// numeric data.
///
/// Key components:
/// - **Traits**: `Scalar`, `DynamicalSystem` (flows), `Steppable` (solvers).
/// - **Model**: the Lotka-Volterra field with logistic predator growth.
/// - **Simulation**: fixed-step explicit Euler integration into a `Trajectory`.
/// - **Equilibrium / Stability**: integer-grid equilibrium scan and Jacobian
///   eigenvalue classification.
/// - **Nullcline / Direction field**: geometry for phase-plane diagrams.
pub mod traits;
