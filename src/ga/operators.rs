//! Population-level operators: initialization, selection, parent sampling.
//!
//! # Usage
//!
//! ```
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use u_timetable::ga::{initialize_population, select};
//! use u_timetable::models::{DomainModel, ProblemDimensions};
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let model = DomainModel::random(ProblemDimensions::default(), &mut rng).unwrap();
//! let population = initialize_population(&model, 10, &mut rng);
//! let stock = select(&population, &model, 5).unwrap();
//! assert_eq!(stock.len(), 5);
//! ```

use rand::Rng;
use rand::seq::index;

use super::chromosome::random_schedule;
use super::fitness::{Candidate, evaluate_population};
use crate::error::{Result, ScheduleError};
use crate::models::{DomainModel, Schedule};

/// Creates `size` random schedules over the model's grid.
pub fn initialize_population<R: Rng>(
    model: &DomainModel,
    size: usize,
    rng: &mut R,
) -> Vec<Schedule> {
    let dims = model.dimensions();
    (0..size).map(|_| random_schedule(&dims, rng)).collect()
}

/// Truncation selection over evaluated candidates.
///
/// Sorts ascending by fitness and keeps the first `keep`. Ties are not
/// ordered in any particular way.
pub fn truncation_select(mut population: Vec<Candidate>, keep: usize) -> Vec<Candidate> {
    population.sort_unstable_by(|a, b| a.fitness.total_cmp(&b.fitness));
    population.truncate(keep);
    population
}

/// Evaluates a population and returns its best `keep` schedules, best first.
pub fn select(population: &[Schedule], model: &DomainModel, keep: usize) -> Result<Vec<Schedule>> {
    let evaluated = evaluate_population(population.to_vec(), model, false)?;
    Ok(truncation_select(evaluated, keep)
        .into_iter()
        .map(|c| c.schedule)
        .collect())
}

/// Draws two distinct members of the breeding stock, uniformly without
/// replacement.
///
/// Fails with `InsufficientBreedingStock` if the stock has fewer than two
/// members.
pub fn sample_parents<'a, T, R: Rng>(stock: &'a [T], rng: &mut R) -> Result<(&'a T, &'a T)> {
    if stock.len() < 2 {
        return Err(ScheduleError::InsufficientBreedingStock {
            available: stock.len(),
        });
    }
    let picks = index::sample(rng, stock.len(), 2);
    Ok((&stock[picks.index(0)], &stock[picks.index(1)]))
}
