//! Input validation for timetabling problems.
//!
//! Checks configuration and instance tables before any generation runs.
//! Detects:
//! - Zero-sized dimensions
//! - Populations too small to select from
//! - Mutation rates outside `[0, 1]`
//! - Ragged availability/preference tables
//! - Class attributes and preferences outside their ranges
//!
//! All checks fail fast with [`ScheduleError::InvalidConfiguration`].

use crate::error::{Result, ScheduleError};
use crate::ga::GaConfig;
use crate::models::{MAX_DURATION, MAX_PREFERENCE, MAX_PRIORITY, ProblemDimensions};

/// Validates instance dimensions: every count must be positive.
pub fn validate_dimensions(dims: &ProblemDimensions) -> Result<()> {
    if dims.num_classes == 0 {
        return Err(ScheduleError::invalid("num_classes", "must be at least 1"));
    }
    if dims.num_students == 0 {
        return Err(ScheduleError::invalid("num_students", "must be at least 1"));
    }
    if dims.num_time_slots == 0 {
        return Err(ScheduleError::invalid("num_time_slots", "must be at least 1"));
    }
    Ok(())
}

/// Validates GA parameters.
///
/// Checks:
/// 1. `population_size >= 2`
/// 2. If any generation will run, `population_size / 2 >= 2` so selection
///    leaves two distinct parents
/// 3. `mutation_rate` is finite and within `[0, 1]`
pub fn validate_ga_config(config: &GaConfig) -> Result<()> {
    if config.population_size < 2 {
        return Err(ScheduleError::invalid(
            "population_size",
            format!("must be at least 2, got {}", config.population_size),
        ));
    }
    if config.max_generations > 0 && config.breeding_stock_size() < 2 {
        return Err(ScheduleError::invalid(
            "population_size",
            format!(
                "must be at least 4 to breed, got {} (breeding stock of {})",
                config.population_size,
                config.breeding_stock_size()
            ),
        ));
    }
    if !config.mutation_rate.is_finite() || !(0.0..=1.0).contains(&config.mutation_rate) {
        return Err(ScheduleError::invalid(
            "mutation_rate",
            format!("must be within [0, 1], got {}", config.mutation_rate),
        ));
    }
    Ok(())
}

/// Validates explicit instance tables and returns their dimensions.
///
/// Checks:
/// 1. At least one class, one student, and one time slot
/// 2. `class_priorities` has one entry per class
/// 3. Both student tables have the same number of rows, all of equal width
/// 4. Durations in `1..=2`, priorities in `1..=5`
/// 5. Preferences in `1..=5` (never zero)
pub fn validate_domain_parts(
    class_durations: &[u8],
    class_priorities: &[u8],
    student_availability: &[Vec<bool>],
    student_preferences: &[Vec<u8>],
) -> Result<ProblemDimensions> {
    let num_classes = class_durations.len();
    let num_students = student_availability.len();
    let num_time_slots = student_availability.first().map_or(0, Vec::len);
    let dims = ProblemDimensions::new(num_classes, num_students, num_time_slots);
    validate_dimensions(&dims)?;

    if class_priorities.len() != num_classes {
        return Err(ScheduleError::invalid(
            "class_priorities",
            format!("expected {num_classes} entries, got {}", class_priorities.len()),
        ));
    }
    if student_preferences.len() != num_students {
        return Err(ScheduleError::invalid(
            "student_preferences",
            format!("expected {num_students} rows, got {}", student_preferences.len()),
        ));
    }
    if let Some(s) = student_availability
        .iter()
        .position(|row| row.len() != num_time_slots)
    {
        return Err(ScheduleError::invalid(
            "student_availability",
            format!("row {s} does not have {num_time_slots} slots"),
        ));
    }
    if let Some(s) = student_preferences
        .iter()
        .position(|row| row.len() != num_time_slots)
    {
        return Err(ScheduleError::invalid(
            "student_preferences",
            format!("row {s} does not have {num_time_slots} slots"),
        ));
    }

    if let Some(c) = class_durations
        .iter()
        .position(|d| !(1..=MAX_DURATION).contains(d))
    {
        return Err(ScheduleError::invalid(
            "class_durations",
            format!("class {c} duration must be within 1..={MAX_DURATION}"),
        ));
    }
    if let Some(c) = class_priorities
        .iter()
        .position(|p| !(1..=MAX_PRIORITY).contains(p))
    {
        return Err(ScheduleError::invalid(
            "class_priorities",
            format!("class {c} priority must be within 1..={MAX_PRIORITY}"),
        ));
    }

    for (s, row) in student_preferences.iter().enumerate() {
        if let Some(t) = row.iter().position(|p| !(1..=MAX_PREFERENCE).contains(p)) {
            return Err(ScheduleError::invalid(
                "student_preferences",
                format!("student {s}, slot {t}: preference must be within 1..={MAX_PREFERENCE}"),
            ));
        }
    }

    Ok(dims)
}
