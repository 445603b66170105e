//! Rules-based workout generation engine.
//!
//! This module implements the plan generation logic:
//! - Filter the catalog by equipment and knee constraints
//! - Rotate muscle groups across workout days (push / pull / lower+core)
//! - Top up arm work for arm-focused goals
//! - Fill remaining slots compound-first
//!
//! Generation never fails: overly restrictive profiles degrade to shorter
//! exercise lists rather than errors, so the user always gets some plan.

use crate::catalog::Catalog;
use crate::checkin::PreWorkoutCheckIn;
use crate::profile::UserProfile;
use crate::session::{WeeklyPlan, WorkoutExercise, WorkoutSession};
use crate::types::{Exercise, MuscleGroup};
use chrono::{Days, Local, NaiveDate, Weekday};
use std::collections::BTreeSet;

/// Muscle group rotation for balanced training.
///
/// Workout day N uses group `(N - 1) % 3`. Within a group, muscles are
/// visited in the listed order.
const MUSCLE_ROTATION: [&[MuscleGroup]; 3] = [
    // Day 1: Push
    &[MuscleGroup::Chest, MuscleGroup::Triceps, MuscleGroup::Shoulders],
    // Day 2: Pull
    &[MuscleGroup::Back, MuscleGroup::Biceps],
    // Day 3: Lower + Core
    &[MuscleGroup::Legs, MuscleGroup::Glutes, MuscleGroup::Core],
];

/// Checks if an exercise meets all of a profile's constraints
pub fn is_allowed(exercise: &Exercise, profile: &UserProfile) -> bool {
    exercise.is_allowed_for(profile.knee_profile)
        && exercise.can_perform_with(&profile.equipment)
}

/// All catalog exercises available to a profile, in catalog order
pub fn available_exercises<'a>(catalog: &'a Catalog, profile: &UserProfile) -> Vec<&'a Exercise> {
    catalog.by_equipment_and_knee(&profile.equipment, profile.knee_profile)
}

/// Generates a weekly workout plan (Monday through Friday).
///
/// Workout days are laid out by `days_per_week` (1 → Wed; 2 → Mon, Thu;
/// 3 → Mon, Wed, Fri); the remaining weekdays become rest days.
pub fn generate_week(catalog: &Catalog, profile: &UserProfile, start_date: NaiveDate) -> WeeklyPlan {
    let workout_day_indices = workout_day_indices(profile.schedule.days_per_week);
    let mut sessions = Vec::with_capacity(5);

    for day_offset in 0..5u64 {
        let date = start_date + Days::new(day_offset);
        let calendar_day_index = day_offset as u32 + 1;

        if let Some(rank) = workout_day_indices
            .iter()
            .position(|&d| d == calendar_day_index)
        {
            // Workout sessions carry their 1-based rank among workout days,
            // which also drives the muscle rotation.
            let workout_day_number = rank as u32 + 1;
            sessions.push(generate_session(catalog, profile, workout_day_number, date));
        } else {
            sessions.push(WorkoutSession::rest_day(date, calendar_day_index));
        }
    }

    tracing::info!(
        "Generated week starting {}: {} workout days for goal {:?}",
        start_date,
        workout_day_indices.len(),
        profile.primary_goal
    );

    WeeklyPlan::new(start_date, sessions)
}

/// Generates a single workout session for the given workout-day ordinal.
///
/// `day_index` is 1-based among workout days only, not the calendar weekday.
pub fn generate_session(
    catalog: &Catalog,
    profile: &UserProfile,
    day_index: u32,
    date: NaiveDate,
) -> WorkoutSession {
    let exercises = select_exercises(catalog, profile, day_index)
        .into_iter()
        .map(WorkoutExercise::from_exercise)
        .collect();

    WorkoutSession::new(date, day_index, exercises)
}

/// Adjusts a session based on a pre-workout check-in, returning a copy.
///
/// The mutate-in-place form is `PreWorkoutCheckIn::adjust`.
pub fn adjust(session: &WorkoutSession, check_in: &PreWorkoutCheckIn) -> WorkoutSession {
    check_in.adjusted_session(session)
}

/// Monday of the current local week, the default plan start date
pub fn start_of_current_week() -> NaiveDate {
    Local::now().date_naive().week(Weekday::Mon).first_day()
}

/// Selects exercises for a single workout day.
///
/// Deterministic: all "first available" choices break ties by catalog
/// declaration order. The result may be shorter than the target count for
/// restrictive profiles; that is valid, not an error.
fn select_exercises<'a>(
    catalog: &'a Catalog,
    profile: &UserProfile,
    day_index: u32,
) -> Vec<&'a Exercise> {
    let available = available_exercises(catalog, profile);
    let exercise_count = profile.schedule.estimated_exercise_count();

    let rotation_index = (day_index as usize).saturating_sub(1) % MUSCLE_ROTATION.len();
    let target_muscles = MUSCLE_ROTATION[rotation_index];

    let mut selected: Vec<&Exercise> = Vec::new();

    // One exercise per target muscle; muscles with no available exercise are
    // silently skipped.
    for &muscle in target_muscles {
        let pick = available
            .iter()
            .find(|e| e.primary_muscle == muscle && !selected.contains(e));
        match pick {
            Some(&exercise) => selected.push(exercise),
            None => {
                tracing::debug!(
                    "No available exercise for {:?} on workout day {}",
                    muscle,
                    day_index
                );
            }
        }
    }

    // Arm-focused goal: top up to the per-session arm quota
    if profile.is_arm_focused() {
        let current_arm_count = selected.iter().filter(|e| e.is_arm_exercise()).count();
        let needed = profile
            .arm_exercises_per_session()
            .saturating_sub(current_arm_count);

        if needed > 0 {
            let candidates: Vec<&Exercise> = available
                .iter()
                .filter(|e| e.is_arm_exercise() && !selected.contains(e))
                .copied()
                .collect();
            for exercise in candidates.into_iter().take(needed) {
                selected.push(exercise);
            }
        }
    }

    // Fill remaining slots, preferring compound movements
    while selected.len() < exercise_count {
        let compound = available
            .iter()
            .find(|e| e.is_compound() && !selected.contains(e));

        if let Some(&exercise) = compound {
            selected.push(exercise);
        } else if let Some(&exercise) = available.iter().find(|e| !selected.contains(e)) {
            selected.push(exercise);
        } else {
            tracing::debug!(
                "Only {} of {} exercises available for workout day {}",
                selected.len(),
                exercise_count,
                day_index
            );
            break;
        }
    }

    selected.truncate(exercise_count);
    selected
}

/// Returns the calendar day indices (1=Mon..5=Fri) that are workout days
fn workout_day_indices(days_per_week: u32) -> &'static [u32] {
    match days_per_week {
        1 => &[3],
        2 => &[1, 4],
        _ => &[1, 3, 5],
    }
}

// ============================================================================
// Session Statistics
// ============================================================================

/// Aggregate numbers about a workout session
#[derive(Clone, Debug, PartialEq)]
pub struct SessionStatistics {
    pub exercise_count: usize,
    pub total_sets: u32,
    pub completed_sets: u32,
    pub muscle_groups: BTreeSet<MuscleGroup>,
    pub progress: f64,
}

impl SessionStatistics {
    /// Sets left to complete. Zero when a check-in adjustment lowered the
    /// targets below what was already logged.
    pub fn remaining_sets(&self) -> u32 {
        self.total_sets.saturating_sub(self.completed_sets)
    }
}

/// Computes statistics for a workout session
pub fn session_statistics(session: &WorkoutSession) -> SessionStatistics {
    let total_sets = session.exercises.iter().map(|e| e.target_sets).sum();
    let completed_sets = session.exercises.iter().map(|e| e.completed_sets()).sum();
    let muscle_groups = session.exercises.iter().map(|e| e.primary_muscle).collect();

    SessionStatistics {
        exercise_count: session.exercise_count(),
        total_sets,
        completed_sets,
        muscle_groups,
        progress: session.progress(),
    }
}
