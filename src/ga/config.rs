//! GA and instance configuration.
//!
//! # Usage
//!
//! ```
//! use u_timetable::ga::GaConfig;
//!
//! let config = GaConfig::default()
//!     .with_population_size(40)
//!     .with_mutation_rate(0.05)
//!     .with_max_generations(200)
//!     .with_seed(42);
//! assert!(config.validate().is_ok());
//! ```

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::ProblemDimensions;
use crate::validation::{validate_dimensions, validate_ga_config};

/// Genetic algorithm parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GaConfig {
    /// Individuals per generation (at least 2).
    pub population_size: usize,
    /// Per-gene replacement probability in `[0, 1]`.
    pub mutation_rate: f64,
    /// Number of generations to run. Termination is count-driven only.
    pub max_generations: usize,
    /// Random seed for reproducibility. `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Whether to evaluate fitness in parallel using rayon.
    pub parallel: bool,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 50,
            mutation_rate: 0.1,
            max_generations: 100,
            seed: None,
            parallel: false,
        }
    }
}

impl GaConfig {
    /// Creates a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the mutation rate, clamped to `[0, 1]`.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Number of individuals kept as breeding stock each generation.
    #[inline]
    pub fn breeding_stock_size(&self) -> usize {
        self.population_size / 2
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        validate_ga_config(self)
    }
}

/// Full startup configuration: instance size plus GA parameters.
///
/// # Example
///
/// ```
/// use u_timetable::ga::TimetableConfig;
///
/// let config = TimetableConfig::from_json_str(
///     r#"{ "problem": { "num_classes": 4, "num_students": 2, "num_time_slots": 3 },
///          "ga": { "population_size": 10, "seed": 7 } }"#,
/// ).unwrap();
/// assert_eq!(config.ga.population_size, 10);
/// assert_eq!(config.ga.mutation_rate, 0.1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimetableConfig {
    pub problem: ProblemDimensions,
    pub ga: GaConfig,
}

impl TimetableConfig {
    /// Parses and validates a JSON configuration.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Validates both the instance size and the GA parameters.
    pub fn validate(&self) -> Result<()> {
        validate_dimensions(&self.problem)?;
        self.ga.validate()
    }
}
