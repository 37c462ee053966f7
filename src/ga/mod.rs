//! GA-based timetable optimization.
//!
//! # Encoding
//!
//! A chromosome is a [`Schedule`](crate::models::Schedule): one
//! `(student, time_slot)` gene per class, indexed by class id.
//!
//! # Submodules
//!
//! - [`chromosome`]: random genes, single-point crossover, per-gene mutation
//! - [`fitness`]: the fitness evaluator and population evaluation
//! - [`operators`]: population initialization and truncation selection
//! - [`runner`]: the generational loop
//!
//! # Reference
//! Goldberg (1989), "Genetic Algorithms in Search, Optimization, and Machine Learning"

pub mod chromosome;
mod config;
pub mod fitness;
pub mod operators;
pub mod runner;

pub use chromosome::{
    crossover_at, random_gene, random_schedule, single_point_crossover, uniform_gene_mutation,
};
pub use config::{GaConfig, TimetableConfig};
pub use fitness::{
    Candidate, FITNESS_FLOOR_PER_CLASS, FitnessBreakdown, PopulationStats, evaluate_population,
    fitness, fitness_breakdown, fitness_lower_bound,
};
pub use operators::{initialize_population, sample_parents, select, truncation_select};
pub use runner::{GaResult, GaRunner, GenerationReport, Signal, Visualizer};
