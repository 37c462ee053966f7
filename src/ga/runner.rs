//! Generational GA driver.
//!
//! Each generation runs, in order:
//!
//! 1. **Select**: keep the best `population_size / 2` candidates.
//! 2. **Breed**: sample two distinct parents, single-point crossover,
//!    per-gene mutation, until `population_size` children exist.
//! 3. **Evaluate**: score every child (optionally in parallel).
//! 4. **Track**: replace the best-ever candidate on strict improvement and
//!    report to the [`Visualizer`].
//!
//! Termination is count-driven: exactly `max_generations` iterations unless
//! the visualizer asks to stop or the cancel handle is raised. Both are only
//! honored between generations.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::chromosome::{single_point_crossover, uniform_gene_mutation};
use super::config::GaConfig;
use super::fitness::{Candidate, PopulationStats, evaluate_population};
use super::operators::{initialize_population, sample_parents, truncation_select};
use crate::error::{Result, ScheduleError};
use crate::models::DomainModel;

/// Visualizer reply after each generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    Continue,
    /// Stop after the current generation.
    Stop,
}

/// Snapshot handed to the visualizer once per generation.
#[derive(Debug, Clone)]
pub struct GenerationReport<'a> {
    /// Zero-based index of the generation just completed.
    pub generation: usize,
    /// Configured generation count.
    pub max_generations: usize,
    /// Best candidate seen so far, across all generations.
    pub best: &'a Candidate,
    /// Statistics of the generation just evaluated.
    pub current: PopulationStats,
}

/// Receives per-generation progress. Never consulted for anything but the
/// returned [`Signal`].
pub trait Visualizer {
    fn on_generation(&mut self, report: &GenerationReport<'_>) -> Signal;
}

/// No-op visualizer.
impl Visualizer for () {
    fn on_generation(&mut self, _report: &GenerationReport<'_>) -> Signal {
        Signal::Continue
    }
}

/// Result of a GA run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GaResult {
    /// Best candidate found, including the initial population.
    pub best: Candidate,
    /// Generations completed.
    pub generations: usize,
    /// Whether the run ended before `max_generations`.
    pub stopped_early: bool,
    /// Best-ever fitness: `history[0]` for the initial population, then one
    /// entry per completed generation.
    pub history: Vec<f64>,
}

/// Genetic algorithm runner over one problem instance.
///
/// # Example
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use u_timetable::ga::{GaConfig, GaRunner};
/// use u_timetable::models::{DomainModel, ProblemDimensions};
///
/// let model = DomainModel::random(ProblemDimensions::default(), &mut StdRng::seed_from_u64(1))
///     .unwrap();
/// let config = GaConfig::default().with_max_generations(20).with_seed(42);
/// let result = GaRunner::new(&model, config).unwrap().run().unwrap();
/// assert_eq!(result.generations, 20);
/// assert_eq!(result.history.len(), 21);
/// ```
pub struct GaRunner<'a> {
    model: &'a DomainModel,
    config: GaConfig,
    cancelled: Arc<AtomicBool>,
}

impl<'a> GaRunner<'a> {
    /// Creates a runner, rejecting invalid configurations up front.
    pub fn new(model: &'a DomainModel, config: GaConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            model,
            config,
            cancelled: Arc::new(AtomicBool::new(false)),
        })
    }

    pub fn config(&self) -> &GaConfig {
        &self.config
    }

    /// Returns a handle that stops the run at the next generation boundary.
    pub fn cancel_handle(&self) -> Arc<AtomicBool> {
        self.cancelled.clone()
    }

    /// Runs without a visualizer.
    pub fn run(&self) -> Result<GaResult> {
        self.run_with_visualizer(&mut ())
    }

    /// Runs with the configured seed (or an OS seed) and a visualizer.
    pub fn run_with_visualizer<V: Visualizer + ?Sized>(
        &self,
        visualizer: &mut V,
    ) -> Result<GaResult> {
        let mut rng = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        self.run_with_rng(&mut rng, visualizer)
    }

    /// Runs with an explicit random source.
    ///
    /// Every random draw of the run (initialization, parent sampling, cut
    /// points, mutation) comes from `rng`.
    pub fn run_with_rng<R: Rng, V: Visualizer + ?Sized>(
        &self,
        rng: &mut R,
        visualizer: &mut V,
    ) -> Result<GaResult> {
        let dims = self.model.dimensions();
        let population_size = self.config.population_size;
        let keep = self.config.breeding_stock_size();

        info!(
            num_classes = dims.num_classes,
            num_students = dims.num_students,
            num_time_slots = dims.num_time_slots,
            population_size,
            max_generations = self.config.max_generations,
            seed = ?self.config.seed,
            "starting timetable GA"
        );

        let initial = initialize_population(self.model, population_size, rng);
        let mut population = evaluate_population(initial, self.model, self.config.parallel)?;
        let mut best = fittest(&population)?.clone();
        let mut history = vec![best.fitness];
        let mut generations = 0;
        let mut stopped_early = false;

        for generation in 0..self.config.max_generations {
            if self.cancelled.load(Ordering::Relaxed) {
                warn!(generation, "run cancelled");
                stopped_early = true;
                break;
            }

            let stock = truncation_select(population, keep);
            if stock.len() < 2 {
                warn!(
                    available = stock.len(),
                    population_size, "aborting run: breeding stock too small"
                );
                return Err(ScheduleError::InsufficientBreedingStock {
                    available: stock.len(),
                });
            }

            let mut offspring = Vec::with_capacity(population_size);
            while offspring.len() < population_size {
                let (p1, p2) = sample_parents(&stock, rng)?;
                let mut child = single_point_crossover(&p1.schedule, &p2.schedule, rng);
                uniform_gene_mutation(&mut child, &dims, self.config.mutation_rate, rng);
                offspring.push(child);
            }

            population = evaluate_population(offspring, self.model, self.config.parallel)?;
            let current = fittest(&population)?;
            let stats = PopulationStats::of(&population).ok_or_else(empty_population)?;

            if current.fitness < best.fitness {
                best = current.clone();
            }
            history.push(best.fitness);
            generations = generation + 1;

            debug!(
                generation,
                current_best = stats.best,
                best_ever = best.fitness,
                worst = stats.worst,
                mean = stats.mean,
                "generation complete"
            );

            let report = GenerationReport {
                generation,
                max_generations: self.config.max_generations,
                best: &best,
                current: stats,
            };
            if visualizer.on_generation(&report) == Signal::Stop {
                warn!(generation, "visualizer requested stop");
                stopped_early = generations < self.config.max_generations;
                break;
            }
        }

        info!(
            best_fitness = best.fitness,
            generations, stopped_early, "timetable GA finished"
        );

        Ok(GaResult {
            best,
            generations,
            stopped_early,
            history,
        })
    }
}

fn fittest(population: &[Candidate]) -> Result<&Candidate> {
    population
        .iter()
        .min_by(|a, b| a.fitness.total_cmp(&b.fitness))
        .ok_or_else(empty_population)
}

fn empty_population() -> ScheduleError {
    ScheduleError::invalid("population_size", "population is empty")
}
