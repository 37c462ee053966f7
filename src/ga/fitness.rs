//! Fitness evaluation.
//!
//! The single source of truth for schedule cost. Lower is better.
//!
//! For each class `c` with gene `(s, t)`:
//!
//! ```text
//! cost(c) = [available(s, t) == false] + 1 / preference(s, t)
//! ```
//!
//! and the schedule's fitness is the sum over all classes. Since preferences
//! are at most 5, every class costs at least 0.2, so [`fitness_lower_bound`] is a
//! reachable lower bound and zero is only an asymptotic one.
//!
//! Class durations and priorities do not enter the cost, and two classes
//! sharing a (student, slot) cell are not penalized.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::{Result, ScheduleError};
use crate::models::{DomainModel, MAX_PREFERENCE, Schedule};

/// Cost of a class placed in an available, most-preferred cell.
pub const FITNESS_FLOOR_PER_CLASS: f64 = 1.0 / MAX_PREFERENCE as f64;

/// Smallest fitness any schedule over `num_classes` classes can reach.
///
/// Accumulated one class at a time, exactly as the evaluator sums, so a
/// schedule with every class at the floor scores this value bit for bit.
/// Rounded addition is monotone, so no schedule scores below it.
pub fn fitness_lower_bound(num_classes: usize) -> f64 {
    (0..num_classes).fold(0.0, |acc, _| acc + FITNESS_FLOOR_PER_CLASS)
}

/// Fitness split into its two penalty terms.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FitnessBreakdown {
    /// Classes placed in cells the student cannot attend.
    pub conflicts: usize,
    /// Conflict term (1.0 per conflict).
    pub conflict_penalty: f64,
    /// Sum of `1 / preference` over all classes.
    pub preference_penalty: f64,
}

impl FitnessBreakdown {
    /// Total cost.
    #[inline]
    pub fn total(&self) -> f64 {
        self.conflict_penalty + self.preference_penalty
    }
}

/// Computes both penalty terms for a schedule.
///
/// Fails with `ScheduleLength` if the gene count differs from the number of
/// classes, and with `InvalidGene` on the first out-of-range gene.
pub fn fitness_breakdown(schedule: &Schedule, model: &DomainModel) -> Result<FitnessBreakdown> {
    if schedule.len() != model.num_classes() {
        return Err(ScheduleError::ScheduleLength {
            expected: model.num_classes(),
            actual: schedule.len(),
        });
    }

    let mut breakdown = FitnessBreakdown::default();
    for (class_id, gene) in schedule.genes().iter().enumerate() {
        let invalid = || ScheduleError::InvalidGene {
            class_id,
            student: gene.student,
            time_slot: gene.time_slot,
        };
        let available = model
            .is_available(gene.student, gene.time_slot)
            .ok_or_else(invalid)?;
        let preference = model
            .preference(gene.student, gene.time_slot)
            .ok_or_else(invalid)?;

        if !available {
            breakdown.conflicts += 1;
            breakdown.conflict_penalty += 1.0;
        }
        breakdown.preference_penalty += 1.0 / f64::from(preference);
    }
    Ok(breakdown)
}

/// Fitness of a schedule (lower is better).
pub fn fitness(schedule: &Schedule, model: &DomainModel) -> Result<f64> {
    fitness_breakdown(schedule, model).map(|b| b.total())
}

/// A schedule paired with its fitness.
///
/// The runner publishes its best-ever result as one `Candidate`, so the
/// schedule and its fitness are always replaced together.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub schedule: Schedule,
    pub fitness: f64,
}

impl Candidate {
    /// Evaluates a schedule and wraps it.
    pub fn evaluate(schedule: Schedule, model: &DomainModel) -> Result<Self> {
        let fitness = fitness(&schedule, model)?;
        Ok(Self { schedule, fitness })
    }
}

/// Evaluates a whole population, preserving order.
///
/// With `parallel` the work fans out over rayon's pool; fitness is pure, so
/// the result is identical to the sequential path.
pub fn evaluate_population(
    population: Vec<Schedule>,
    model: &DomainModel,
    parallel: bool,
) -> Result<Vec<Candidate>> {
    if parallel {
        population
            .into_par_iter()
            .map(|s| Candidate::evaluate(s, model))
            .collect()
    } else {
        population
            .into_iter()
            .map(|s| Candidate::evaluate(s, model))
            .collect()
    }
}

/// Summary statistics of an evaluated population.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PopulationStats {
    /// Lowest fitness.
    pub best: f64,
    /// Highest fitness.
    pub worst: f64,
    /// Mean fitness.
    pub mean: f64,
}

impl PopulationStats {
    /// Computes statistics, or `None` for an empty population.
    pub fn of(population: &[Candidate]) -> Option<Self> {
        if population.is_empty() {
            return None;
        }
        let (best, worst, sum) = population.iter().fold(
            (f64::INFINITY, f64::NEG_INFINITY, 0.0),
            |(lo, hi, sum), c| (lo.min(c.fitness), hi.max(c.fitness), sum + c.fitness),
        );
        Some(Self {
            best,
            worst,
            mean: sum / population.len() as f64,
        })
    }
}
