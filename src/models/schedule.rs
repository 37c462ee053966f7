//! Schedule (candidate solution) model.
//!
//! A schedule assigns every class to one (student, time slot) cell. The
//! position of a gene in the schedule is the class id, so gene order is
//! meaningful and every operator preserves it.

use serde::{Deserialize, Serialize};

use super::{DomainModel, ProblemDimensions};

/// A single (student, time slot) assignment for one class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Gene {
    /// Student index in `[0, num_students)`.
    pub student: usize,
    /// Time slot index in `[0, num_time_slots)`.
    pub time_slot: usize,
}

impl Gene {
    /// Creates a gene.
    #[inline]
    pub fn new(student: usize, time_slot: usize) -> Self {
        Self { student, time_slot }
    }
}

/// A complete assignment of classes to cells, in class-id order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Schedule {
    genes: Vec<Gene>,
}

impl Schedule {
    /// Wraps genes ordered by class id.
    pub fn new(genes: Vec<Gene>) -> Self {
        Self { genes }
    }

    /// Genes in class-id order.
    #[inline]
    pub fn genes(&self) -> &[Gene] {
        &self.genes
    }

    pub(crate) fn genes_mut(&mut self) -> &mut [Gene] {
        &mut self.genes
    }

    /// Consumes the schedule, returning its genes.
    pub fn into_genes(self) -> Vec<Gene> {
        self.genes
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.genes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    /// Gene assigned to a class.
    pub fn gene(&self, class_id: usize) -> Option<Gene> {
        self.genes.get(class_id).copied()
    }

    /// First class placed in a (student, slot) cell, if any.
    pub fn class_at(&self, student: usize, time_slot: usize) -> Option<usize> {
        self.genes
            .iter()
            .position(|g| g.student == student && g.time_slot == time_slot)
    }

    /// Whether the schedule has one in-range gene per class.
    pub fn is_in_range(&self, dimensions: &ProblemDimensions) -> bool {
        self.genes.len() == dimensions.num_classes
            && self
                .genes
                .iter()
                .all(|g| dimensions.contains(g.student, g.time_slot))
    }
}

impl From<Vec<Gene>> for Schedule {
    fn from(genes: Vec<Gene>) -> Self {
        Self::new(genes)
    }
}

/// One class as seen from a student's timetable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassSlot {
    pub class_id: usize,
    pub time_slot: usize,
    /// Whether the student is available in this slot.
    pub available: bool,
    /// Student's preference weight for this slot.
    pub preference: u8,
}

/// Per-student view of a schedule.
///
/// Derived on demand from a [`Schedule`]; it holds no state of its own and
/// goes stale as soon as the schedule it was projected from is replaced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentTimetable {
    pub student: usize,
    /// Classes assigned to the student, ordered by time slot then class id.
    pub classes: Vec<ClassSlot>,
}

impl StudentTimetable {
    /// Projects the classes a schedule assigns to `student`.
    ///
    /// Genes that fall outside the model are skipped.
    pub fn project(schedule: &Schedule, model: &DomainModel, student: usize) -> Self {
        let mut classes: Vec<ClassSlot> = schedule
            .genes()
            .iter()
            .enumerate()
            .filter(|(_, g)| g.student == student)
            .filter_map(|(class_id, g)| {
                let available = model.is_available(g.student, g.time_slot)?;
                let preference = model.preference(g.student, g.time_slot)?;
                Some(ClassSlot {
                    class_id,
                    time_slot: g.time_slot,
                    available,
                    preference,
                })
            })
            .collect();
        classes.sort_by_key(|c| (c.time_slot, c.class_id));
        Self { student, classes }
    }

    /// Classes placed in slots the student cannot attend.
    pub fn conflicts(&self) -> impl Iterator<Item = &ClassSlot> {
        self.classes.iter().filter(|c| !c.available)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}
