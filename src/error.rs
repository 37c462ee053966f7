//! Error types for timetabling.
//!
//! Every error is either a startup failure (bad configuration) or a
//! structural invariant violation (an operator produced a malformed
//! schedule). None of them are retried.

use thiserror::Error;

/// Errors raised while building a problem instance or running the GA.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScheduleError {
    /// A configuration or domain value lies outside its allowed range.
    #[error("invalid configuration for `{field}`: {reason}")]
    InvalidConfiguration {
        /// Name of the offending option.
        field: &'static str,
        /// Human-readable description.
        reason: String,
    },

    /// Selection left fewer than two distinct parents to breed from.
    #[error("insufficient breeding stock: need at least 2 parents, have {available}")]
    InsufficientBreedingStock {
        /// Size of the breeding stock.
        available: usize,
    },

    /// A gene refers to a student or time slot outside the domain.
    #[error("invalid gene for class {class_id}: student {student}, time slot {time_slot}")]
    InvalidGene {
        /// Position of the gene in the schedule.
        class_id: usize,
        /// Student index carried by the gene.
        student: usize,
        /// Time slot index carried by the gene.
        time_slot: usize,
    },

    /// A schedule does not carry exactly one gene per class.
    #[error("schedule has {actual} genes, expected {expected}")]
    ScheduleLength {
        /// Number of classes in the domain.
        expected: usize,
        /// Number of genes in the schedule.
        actual: usize,
    },

    /// Configuration text could not be parsed.
    #[error("malformed configuration: {0}")]
    ConfigFormat(String),
}

impl ScheduleError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            field,
            reason: reason.into(),
        }
    }
}

impl From<serde_json::Error> for ScheduleError {
    fn from(err: serde_json::Error) -> Self {
        ScheduleError::ConfigFormat(err.to_string())
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ScheduleError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = ScheduleError::invalid("population_size", "must be at least 2");
        assert_eq!(
            err.to_string(),
            "invalid configuration for `population_size`: must be at least 2"
        );

        let err = ScheduleError::InvalidGene {
            class_id: 3,
            student: 9,
            time_slot: 1,
        };
        assert!(err.to_string().contains("class 3"));
    }

    #[test]
    fn test_from_json_error() {
        let parse: std::result::Result<u32, _> = serde_json::from_str("not json");
        let err: ScheduleError = parse.unwrap_err().into();
        assert!(matches!(err, ScheduleError::ConfigFormat(_)));
    }
}
