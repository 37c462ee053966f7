//! Timetabling domain models.
//!
//! Provides the problem instance ([`DomainModel`]) and the candidate
//! solution ([`Schedule`]) the genetic algorithm evolves.
//!
//! # Domain Mappings
//!
//! | u-timetable | School | Tutoring | Clinic |
//! |-------------|--------|----------|--------|
//! | Class | Course section | Lesson | Appointment |
//! | Student | Pupil | Learner | Patient |
//! | Time slot | Period | Session | Visit window |

mod domain;
mod schedule;

pub use domain::{
    AVAILABILITY_PROBABILITY, DomainModel, MAX_DURATION, MAX_PREFERENCE, MAX_PRIORITY,
    ProblemDimensions,
};
pub use schedule::{ClassSlot, Gene, Schedule, StudentTimetable};
