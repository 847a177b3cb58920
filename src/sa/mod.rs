//! Simulated Annealing (SA) route refinement.
//!
//! A single-solution trajectory metaheuristic inspired by the physical
//! annealing process. Works on an open path that always starts at point 0,
//! proposing segment reversals and segment transports and accepting
//! worsening moves with a probability that decreases with temperature.
//!
//! Runs a fixed number of temperature steps, so runtime depends only on
//! the point count and configuration. The result varies with the seed.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Cerny (1985), "Thermodynamical Approach to the Travelling Salesman Problem"
//! - Press, Teukolsky, Vetterling & Flannery, *Numerical Recipes in C*,
//!   2nd ed., §10.9 "Simulated Annealing Methods"

mod config;
mod moves;
mod runner;

pub use config::{AnnealingStart, CoolingSchedule, SaConfig, DEFAULT_ANNEALING_STEPS};
pub(crate) use runner::anneal;
pub use runner::{SaResult, SaRunner};
