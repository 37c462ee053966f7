//! Problem instance model.
//!
//! A [`DomainModel`] describes one timetabling instance: how many classes,
//! students, and time slots exist, the per-class attributes, and each
//! student's availability and preference for every slot. It is built once
//! and read-only for the rest of a run.
//!
//! # Random instances
//!
//! [`DomainModel::random`] draws every attribute from a fixed distribution so
//! that seeded runs are reproducible:
//!
//! | Attribute | Distribution |
//! |-----------|-------------|
//! | Class duration | uniform over {1, 2} |
//! | Class priority | uniform over {1..5} |
//! | Availability | Bernoulli(0.8) per (student, slot) |
//! | Preference | uniform over {1..5} per (student, slot) |

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{Result, ScheduleError};
use crate::validation::{validate_dimensions, validate_domain_parts};

/// Probability that a student is available in a given slot.
pub const AVAILABILITY_PROBABILITY: f64 = 0.8;

/// Largest preference weight. A fully satisfied class costs `1 / MAX_PREFERENCE`.
pub const MAX_PREFERENCE: u8 = 5;

/// Largest class priority.
pub const MAX_PRIORITY: u8 = 5;

/// Largest class duration (hours).
pub const MAX_DURATION: u8 = 2;

/// Size of a timetabling instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProblemDimensions {
    /// Number of classes (genes per schedule).
    pub num_classes: usize,
    /// Number of students.
    pub num_students: usize,
    /// Number of time slots.
    pub num_time_slots: usize,
}

impl Default for ProblemDimensions {
    fn default() -> Self {
        Self {
            num_classes: 8,
            num_students: 5,
            num_time_slots: 6,
        }
    }
}

impl ProblemDimensions {
    /// Creates dimensions from explicit counts.
    pub fn new(num_classes: usize, num_students: usize, num_time_slots: usize) -> Self {
        Self {
            num_classes,
            num_students,
            num_time_slots,
        }
    }

    /// Whether `(student, time_slot)` addresses a cell of the instance.
    #[inline]
    pub fn contains(&self, student: usize, time_slot: usize) -> bool {
        student < self.num_students && time_slot < self.num_time_slots
    }
}

/// Immutable description of one timetabling instance.
///
/// Deserialization runs the same checks as [`DomainModel::from_parts`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "DomainModelParts")]
pub struct DomainModel {
    dimensions: ProblemDimensions,
    class_durations: Vec<u8>,
    class_priorities: Vec<u8>,
    student_availability: Vec<Vec<bool>>,
    student_preferences: Vec<Vec<u8>>,
}

/// Unchecked wire form of a [`DomainModel`].
#[derive(Deserialize)]
struct DomainModelParts {
    dimensions: ProblemDimensions,
    class_durations: Vec<u8>,
    class_priorities: Vec<u8>,
    student_availability: Vec<Vec<bool>>,
    student_preferences: Vec<Vec<u8>>,
}

impl TryFrom<DomainModelParts> for DomainModel {
    type Error = ScheduleError;

    fn try_from(parts: DomainModelParts) -> Result<Self> {
        let declared = parts.dimensions;
        let model = Self::from_parts(
            parts.class_durations,
            parts.class_priorities,
            parts.student_availability,
            parts.student_preferences,
        )?;
        if model.dimensions != declared {
            return Err(ScheduleError::invalid(
                "dimensions",
                format!(
                    "declared {declared:?} but tables describe {:?}",
                    model.dimensions
                ),
            ));
        }
        Ok(model)
    }
}

impl DomainModel {
    /// Draws a random instance of the given size.
    ///
    /// Draw order is fixed (durations, priorities, availability rows,
    /// preference rows) so a seeded RNG always yields the same instance.
    pub fn random<R: Rng>(dimensions: ProblemDimensions, rng: &mut R) -> Result<Self> {
        validate_dimensions(&dimensions)?;
        let ProblemDimensions {
            num_classes,
            num_students,
            num_time_slots,
        } = dimensions;

        let class_durations = (0..num_classes)
            .map(|_| rng.random_range(1..=MAX_DURATION))
            .collect();
        let class_priorities = (0..num_classes)
            .map(|_| rng.random_range(1..=MAX_PRIORITY))
            .collect();
        let student_availability = (0..num_students)
            .map(|_| {
                (0..num_time_slots)
                    .map(|_| rng.random_bool(AVAILABILITY_PROBABILITY))
                    .collect()
            })
            .collect();
        let student_preferences = (0..num_students)
            .map(|_| {
                (0..num_time_slots)
                    .map(|_| rng.random_range(1..=MAX_PREFERENCE))
                    .collect()
            })
            .collect();

        Ok(Self {
            dimensions,
            class_durations,
            class_priorities,
            student_availability,
            student_preferences,
        })
    }

    /// Builds an instance from explicit tables.
    ///
    /// `availability` and `preferences` are indexed `[student][time_slot]`.
    /// Fails with `InvalidConfiguration` on empty or ragged tables, durations
    /// outside `1..=2`, priorities outside `1..=5`, or zero preferences.
    pub fn from_parts(
        class_durations: Vec<u8>,
        class_priorities: Vec<u8>,
        student_availability: Vec<Vec<bool>>,
        student_preferences: Vec<Vec<u8>>,
    ) -> Result<Self> {
        let dimensions = validate_domain_parts(
            &class_durations,
            &class_priorities,
            &student_availability,
            &student_preferences,
        )?;
        Ok(Self {
            dimensions,
            class_durations,
            class_priorities,
            student_availability,
            student_preferences,
        })
    }

    /// Instance size.
    #[inline]
    pub fn dimensions(&self) -> ProblemDimensions {
        self.dimensions
    }

    #[inline]
    pub fn num_classes(&self) -> usize {
        self.dimensions.num_classes
    }

    #[inline]
    pub fn num_students(&self) -> usize {
        self.dimensions.num_students
    }

    #[inline]
    pub fn num_time_slots(&self) -> usize {
        self.dimensions.num_time_slots
    }

    /// Duration of a class in hours (1 or 2).
    pub fn class_duration(&self, class_id: usize) -> Option<u8> {
        self.class_durations.get(class_id).copied()
    }

    /// Priority of a class (1..=5).
    pub fn class_priority(&self, class_id: usize) -> Option<u8> {
        self.class_priorities.get(class_id).copied()
    }

    /// Whether a student can attend in a slot. `None` if out of range.
    pub fn is_available(&self, student: usize, time_slot: usize) -> Option<bool> {
        self.student_availability
            .get(student)
            .and_then(|row| row.get(time_slot))
            .copied()
    }

    /// Preference weight (1..=5) of a student for a slot. `None` if out of range.
    pub fn preference(&self, student: usize, time_slot: usize) -> Option<u8> {
        self.student_preferences
            .get(student)
            .and_then(|row| row.get(time_slot))
            .copied()
    }

    /// Number of slots in which a student is available.
    pub fn available_slot_count(&self, student: usize) -> usize {
        self.student_availability
            .get(student)
            .map(|row| row.iter().filter(|&&a| a).count())
            .unwrap_or(0)
    }
}
