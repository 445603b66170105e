#![forbid(unsafe_code)]

//! Core domain model and planning engine for Repkit.
//!
//! This crate provides:
//! - Domain types (exercises, profiles, sessions, check-ins)
//! - The queryable exercise catalog
//! - The rules-based workout generation engine
//! - Check-in driven session adjustment
//! - Post-hoc plan validation

pub mod types;
pub mod error;
pub mod profile;
pub mod checkin;
pub mod session;
pub mod catalog;
pub mod config;
pub mod logging;
pub mod validation;
pub mod engine;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use profile::{UserProfile, WorkoutSchedule};
pub use checkin::PreWorkoutCheckIn;
pub use session::{SetLog, WeeklyPlan, WorkoutExercise, WorkoutSession};
pub use catalog::{build_default_catalog, default_catalog, Catalog};
pub use config::Config;
pub use validation::{validate_plan, ValidationResult};
pub use engine::{
    adjust, available_exercises, generate_session, generate_week, is_allowed,
    session_statistics, start_of_current_week, SessionStatistics,
};
