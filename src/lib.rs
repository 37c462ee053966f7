//! Class timetabling for the U-Engine ecosystem.
//!
//! Assigns a fixed set of classes to (student, time slot) cells so that
//! few classes land where a student is unavailable and most land in slots
//! the student prefers. The search is a generational genetic algorithm.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `DomainModel`, `ProblemDimensions`,
//!   `Gene`, `Schedule`, `StudentTimetable`
//! - **`ga`**: Fitness, genetic operators, configuration, and `GaRunner`
//! - **`kpi`**: Read-only schedule quality metrics
//! - **`validation`**: Configuration and instance checks
//!
//! # Example
//!
//! ```
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use u_timetable::ga::{GaConfig, GaRunner};
//! use u_timetable::models::{DomainModel, ProblemDimensions};
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let model = DomainModel::random(ProblemDimensions::default(), &mut rng).unwrap();
//! let config = GaConfig::default().with_max_generations(10).with_seed(42);
//! let result = GaRunner::new(&model, config).unwrap().run().unwrap();
//! assert!(result.best.fitness >= u_timetable::ga::fitness_lower_bound(8));
//! ```
//!
//! Rendering and interactive control live outside this crate; they plug in
//! through [`ga::Visualizer`].

pub mod error;
pub mod ga;
pub mod kpi;
pub mod models;
pub mod validation;

pub use error::{Result, ScheduleError};
