//! Schedule quality metrics (KPIs).
//!
//! Computes read-only indicators for a schedule against its instance.
//! These complement fitness for reporting; none of them feed back into
//! the search.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Fitness | Conflict term + preference term |
//! | Conflicts | Classes placed where the student is unavailable |
//! | Availability Rate | Fraction of classes in available cells |
//! | Mean Preference | Average preference weight of assigned cells |
//! | Double Bookings | Cells holding more than one class |
//! | Classes per Student | Assignment count per student |
//! | Priority Load | Sum of class priorities per student |

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScheduleError};
use crate::ga::fitness_breakdown;
use crate::models::{DomainModel, Schedule};

/// Schedule performance indicators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleKpi {
    /// Total fitness (lower = better).
    pub fitness: f64,
    /// Number of classes in unavailable cells.
    pub conflicts: usize,
    /// Preference term of the fitness.
    pub preference_penalty: f64,
    /// Fraction of classes in available cells (0.0..1.0).
    pub availability_rate: f64,
    /// Mean preference weight over all classes (1.0..5.0).
    pub mean_preference: f64,
    /// Number of (student, slot) cells assigned more than one class.
    pub double_bookings: usize,
    /// Classes per student, indexed by student.
    pub classes_per_student: Vec<usize>,
    /// Summed class priority per student, indexed by student.
    pub priority_load: Vec<u32>,
}

impl ScheduleKpi {
    /// Computes KPIs for a schedule.
    ///
    /// Fails on the same malformed schedules the fitness evaluator rejects.
    pub fn calculate(schedule: &Schedule, model: &DomainModel) -> Result<Self> {
        let breakdown = fitness_breakdown(schedule, model)?;
        let n = schedule.len();

        let mut classes_per_student = vec![0usize; model.num_students()];
        let mut priority_load = vec![0u32; model.num_students()];
        let mut cell_counts: HashMap<(usize, usize), usize> = HashMap::new();
        let mut preference_sum: u32 = 0;

        for (class_id, gene) in schedule.genes().iter().enumerate() {
            let invalid = || ScheduleError::InvalidGene {
                class_id,
                student: gene.student,
                time_slot: gene.time_slot,
            };
            *classes_per_student.get_mut(gene.student).ok_or_else(invalid)? += 1;
            *priority_load.get_mut(gene.student).ok_or_else(invalid)? +=
                u32::from(model.class_priority(class_id).unwrap_or(0));
            preference_sum += u32::from(
                model
                    .preference(gene.student, gene.time_slot)
                    .ok_or_else(invalid)?,
            );
            *cell_counts.entry((gene.student, gene.time_slot)).or_insert(0) += 1;
        }

        let double_bookings = cell_counts.values().filter(|&&c| c > 1).count();
        let (availability_rate, mean_preference) = if n == 0 {
            (1.0, 0.0)
        } else {
            (
                (n - breakdown.conflicts) as f64 / n as f64,
                f64::from(preference_sum) / n as f64,
            )
        };

        Ok(Self {
            fitness: breakdown.total(),
            conflicts: breakdown.conflicts,
            preference_penalty: breakdown.preference_penalty,
            availability_rate,
            mean_preference,
            double_bookings,
            classes_per_student,
            priority_load,
        })
    }

    /// Whether the schedule is conflict-free with at most `max_double_bookings`
    /// shared cells.
    pub fn meets_thresholds(&self, max_double_bookings: usize) -> bool {
        self.conflicts == 0 && self.double_bookings <= max_double_bookings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Gene;

    fn sample_model() -> DomainModel {
        DomainModel::from_parts(
            vec![1, 2, 1, 2],
            vec![5, 3, 1, 2],
            vec![vec![true, false], vec![true, true]],
            vec![vec![5, 2], vec![1, 4]],
        )
        .unwrap()
    }

    #[test]
    fn test_kpi_calculation() {
        let model = sample_model();
        let schedule = Schedule::new(vec![
            Gene::new(0, 0),
            Gene::new(0, 1),
            Gene::new(1, 1),
            Gene::new(1, 1),
        ]);
        let kpi = ScheduleKpi::calculate(&schedule, &model).unwrap();

        assert_eq!(kpi.conflicts, 1);
        assert!((kpi.availability_rate - 0.75).abs() < 1e-12);
        assert!((kpi.mean_preference - (5.0 + 2.0 + 4.0 + 4.0) / 4.0).abs() < 1e-12);
        assert_eq!(kpi.double_bookings, 1);
        assert_eq!(kpi.classes_per_student, vec![2, 2]);
        assert_eq!(kpi.priority_load, vec![8, 3]);
        assert!((kpi.fitness - (1.0 + 0.2 + 0.5 + 0.25 + 0.25)).abs() < 1e-12);
        assert!(!kpi.meets_thresholds(1));
    }

    #[test]
    fn test_kpi_thresholds() {
        let model = sample_model();
        let schedule = Schedule::new(vec![
            Gene::new(0, 0),
            Gene::new(1, 0),
            Gene::new(1, 1),
            Gene::new(1, 1),
        ]);
        let kpi = ScheduleKpi::calculate(&schedule, &model).unwrap();
        assert_eq!(kpi.conflicts, 0);
        assert!(kpi.meets_thresholds(1));
        assert!(!kpi.meets_thresholds(0));
    }

    #[test]
    fn test_kpi_rejects_gene_outside_student_tables() {
        let model = sample_model();
        let schedule = Schedule::new(vec![
            Gene::new(0, 0),
            Gene::new(1, 0),
            Gene::new(2, 0),
            Gene::new(1, 1),
        ]);
        assert_eq!(
            ScheduleKpi::calculate(&schedule, &model).unwrap_err(),
            ScheduleError::InvalidGene {
                class_id: 2,
                student: 2,
                time_slot: 0
            }
        );
    }

    #[test]
    fn test_kpi_rejects_invalid_schedule() {
        let model = sample_model();
        let schedule = Schedule::new(vec![Gene::new(3, 0); 4]);
        assert!(ScheduleKpi::calculate(&schedule, &model).is_err());
    }
}
