//! Workout sessions, planned exercises, set logs and weekly plans.
//!
//! `WorkoutExercise` holds a snapshot of the catalog exercise it was planned
//! from rather than a live reference, so a session stays valid even if the
//! catalog changes after planning.

use crate::checkin::PreWorkoutCheckIn;
use crate::types::{DayType, Exercise, KneeLoadLevel, MuscleGroup, WorkoutStatus};
use chrono::{DateTime, Local, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// Set Log
// ============================================================================

/// A completed set within an exercise. Immutable once appended.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct SetLog {
    pub id: Uuid,
    /// 1-based, sequential within the exercise
    pub set_number: u32,
    pub reps: Option<u32>,
    pub weight: Option<f64>,
    pub completed_at: DateTime<Utc>,
}

// ============================================================================
// Workout Exercise
// ============================================================================

/// A planned instance of a catalog exercise within one session.
///
/// The exercise fields are copied at planning time ("snapshot"), not
/// referenced.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct WorkoutExercise {
    pub id: Uuid,
    pub exercise_id: String,
    pub exercise_name: String,
    pub primary_muscle: MuscleGroup,
    pub knee_load: KneeLoadLevel,
    /// Reducible, never below 1
    pub target_sets: u32,
    pub target_reps: String,
    pub target_weight: Option<f64>,
    pub completed_sets_log: Vec<SetLog>,
    pub knee_pain_flagged: bool,
}

impl WorkoutExercise {
    /// Snapshot a catalog exercise into a planned instance
    pub fn from_exercise(exercise: &Exercise) -> Self {
        Self {
            id: Uuid::new_v4(),
            exercise_id: exercise.id.clone(),
            exercise_name: exercise.name.clone(),
            primary_muscle: exercise.primary_muscle,
            knee_load: exercise.knee_load,
            target_sets: exercise.default_sets,
            target_reps: exercise.default_reps.clone(),
            target_weight: None,
            completed_sets_log: Vec::new(),
            knee_pain_flagged: false,
        }
    }

    /// Number of completed sets, derived from the log
    pub fn completed_sets(&self) -> u32 {
        self.completed_sets_log.len() as u32
    }

    /// True if all target sets have been completed
    pub fn is_completed(&self) -> bool {
        self.completed_sets() >= self.target_sets
    }

    /// Current set number (1-based)
    pub fn current_set_number(&self) -> u32 {
        (self.completed_sets() + 1).min(self.target_sets)
    }

    /// Progress fraction, 0.0 to 1.0
    pub fn progress(&self) -> f64 {
        if self.target_sets == 0 {
            return 0.0;
        }
        f64::from(self.completed_sets()) / f64::from(self.target_sets)
    }

    /// Complete the current set with optional rep and weight data.
    ///
    /// Does nothing once all target sets are logged.
    pub fn complete_set(&mut self, reps: Option<u32>, weight: Option<f64>) {
        if self.is_completed() {
            return;
        }
        let log = SetLog {
            id: Uuid::new_v4(),
            set_number: self.current_set_number(),
            reps,
            weight: weight.or(self.target_weight),
            completed_at: Utc::now(),
        };
        self.completed_sets_log.push(log);
    }

    pub fn toggle_knee_pain_flag(&mut self) {
        self.knee_pain_flagged = !self.knee_pain_flagged;
    }

    /// Reduce target sets by the given amount, flooring at 1
    pub fn reduce_sets(&mut self, amount: u32) {
        self.target_sets = self.target_sets.saturating_sub(amount).max(1);
    }
}

// ============================================================================
// Workout Session
// ============================================================================

/// A single workout (or rest) on a specific date.
///
/// Status transitions are caller-invoked: planned → in_progress (`start`) →
/// completed (`complete`). Skipped is terminal and set by the caller directly.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct WorkoutSession {
    pub id: Uuid,
    pub date: NaiveDate,
    /// 1-based day index within the week
    pub day_index: u32,
    pub day_type: DayType,
    pub exercises: Vec<WorkoutExercise>,
    pub status: WorkoutStatus,
    pub check_in: Option<PreWorkoutCheckIn>,
    pub started_at: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
    pub notes: String,
}

impl WorkoutSession {
    pub fn new(date: NaiveDate, day_index: u32, exercises: Vec<WorkoutExercise>) -> Self {
        Self {
            id: Uuid::new_v4(),
            date,
            day_index,
            day_type: DayType::Workout,
            exercises,
            status: WorkoutStatus::Planned,
            check_in: None,
            started_at: None,
            completed_at: None,
            notes: String::new(),
        }
    }

    /// A rest day session. Rest days always have an empty exercise list.
    pub fn rest_day(date: NaiveDate, day_index: u32) -> Self {
        Self {
            day_type: DayType::Rest,
            ..Self::new(date, day_index, Vec::new())
        }
    }

    pub fn is_workout_day(&self) -> bool {
        self.day_type == DayType::Workout
    }

    pub fn is_completed(&self) -> bool {
        self.status == WorkoutStatus::Completed
    }

    pub fn is_in_progress(&self) -> bool {
        self.status == WorkoutStatus::InProgress
    }

    pub fn exercise_count(&self) -> usize {
        self.exercises.len()
    }

    pub fn completed_exercise_count(&self) -> usize {
        self.exercises.iter().filter(|e| e.is_completed()).count()
    }

    /// Overall progress fraction across all target sets, 0.0 to 1.0
    pub fn progress(&self) -> f64 {
        let total_sets: u32 = self.exercises.iter().map(|e| e.target_sets).sum();
        if total_sets == 0 {
            return 0.0;
        }
        let completed: u32 = self.exercises.iter().map(|e| e.completed_sets()).sum();
        f64::from(completed) / f64::from(total_sets)
    }

    /// Index of the first incomplete exercise
    pub fn current_exercise_index(&self) -> Option<usize> {
        self.exercises.iter().position(|e| !e.is_completed())
    }

    /// The first incomplete exercise
    pub fn current_exercise(&self) -> Option<&WorkoutExercise> {
        self.current_exercise_index().map(|i| &self.exercises[i])
    }

    /// Complete a set for the exercise at the given index.
    ///
    /// Out-of-range indices are ignored.
    pub fn complete_set_for(&mut self, index: usize) {
        if let Some(exercise) = self.exercises.get_mut(index) {
            exercise.complete_set(None, None);
        }
    }

    /// Mark the session as started
    pub fn start(&mut self) {
        self.status = WorkoutStatus::InProgress;
        self.started_at = Some(Utc::now());
    }

    /// Mark the session as completed
    pub fn complete(&mut self) {
        self.status = WorkoutStatus::Completed;
        self.completed_at = Some(Utc::now());
    }
}

// ============================================================================
// Weekly Plan
// ============================================================================

/// A week's worth of workout sessions (Monday through Friday)
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct WeeklyPlan {
    pub id: Uuid,
    pub week_start_date: NaiveDate,
    /// 5 sessions in date order
    pub sessions: Vec<WorkoutSession>,
    pub created_at: DateTime<Utc>,
}

impl WeeklyPlan {
    pub fn new(week_start_date: NaiveDate, sessions: Vec<WorkoutSession>) -> Self {
        Self {
            id: Uuid::new_v4(),
            week_start_date,
            sessions,
            created_at: Utc::now(),
        }
    }

    /// The session for a specific date, if any
    pub fn session_for(&self, date: NaiveDate) -> Option<&WorkoutSession> {
        self.sessions.iter().find(|s| s.date == date)
    }

    /// The session for today, if any
    pub fn session_for_today(&self) -> Option<&WorkoutSession> {
        self.session_for(Local::now().date_naive())
    }

    /// All workout days, excluding rest days
    pub fn workout_days(&self) -> Vec<&WorkoutSession> {
        self.sessions.iter().filter(|s| s.is_workout_day()).collect()
    }

    /// Number of completed workouts
    pub fn completed_workouts(&self) -> usize {
        self.workout_days().iter().filter(|s| s.is_completed()).count()
    }

    /// Total number of planned workouts
    pub fn planned_workouts(&self) -> usize {
        self.workout_days().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{EquipmentType, ExerciseType};

    fn sample_exercise() -> Exercise {
        Exercise {
            id: "pushup".into(),
            name: "Push-Up".into(),
            primary_muscle: MuscleGroup::Chest,
            secondary_muscles: vec![MuscleGroup::Triceps],
            knee_load: KneeLoadLevel::Low,
            equipment_required: [EquipmentType::Bodyweight].into(),
            exercise_type: ExerciseType::Compound,
            default_sets: 2,
            default_reps: "10-15".into(),
            instructions: String::new(),
        }
    }

    fn sample_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 2).unwrap()
    }

    #[test]
    fn test_snapshot_copies_catalog_fields() {
        let exercise = sample_exercise();
        let planned = WorkoutExercise::from_exercise(&exercise);

        assert_eq!(planned.exercise_id, "pushup");
        assert_eq!(planned.exercise_name, "Push-Up");
        assert_eq!(planned.target_sets, 2);
        assert_eq!(planned.target_reps, "10-15");
        assert!(planned.completed_sets_log.is_empty());
        assert!(planned.target_weight.is_none());
    }

    #[test]
    fn test_complete_set_stops_at_target() {
        let mut planned = WorkoutExercise::from_exercise(&sample_exercise());

        planned.complete_set(Some(12), None);
        assert_eq!(planned.completed_sets(), 1);
        assert_eq!(planned.completed_sets_log[0].set_number, 1);
        assert!(!planned.is_completed());

        planned.complete_set(Some(10), None);
        assert_eq!(planned.completed_sets(), 2);
        assert!(planned.is_completed());

        // Further completions are ignored
        planned.complete_set(None, None);
        assert_eq!(planned.completed_sets(), 2);
    }

    #[test]
    fn test_reduce_sets_floors_at_one() {
        let mut planned = WorkoutExercise::from_exercise(&sample_exercise());
        planned.reduce_sets(1);
        assert_eq!(planned.target_sets, 1);
        planned.reduce_sets(1);
        assert_eq!(planned.target_sets, 1);
        planned.reduce_sets(10);
        assert_eq!(planned.target_sets, 1);
    }

    #[test]
    fn test_session_progress() {
        let exercise = sample_exercise();
        let exercises = vec![
            WorkoutExercise::from_exercise(&exercise),
            WorkoutExercise::from_exercise(&exercise),
        ];
        let mut session = WorkoutSession::new(sample_date(), 1, exercises);

        assert_eq!(session.progress(), 0.0);

        session.complete_set_for(0);
        assert!((session.progress() - 0.25).abs() < f64::EPSILON);

        session.complete_set_for(0);
        assert!((session.progress() - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_current_exercise_advances() {
        let exercise = sample_exercise();
        let exercises = vec![
            WorkoutExercise::from_exercise(&exercise),
            WorkoutExercise::from_exercise(&exercise),
        ];
        let mut session = WorkoutSession::new(sample_date(), 1, exercises);

        assert_eq!(session.current_exercise_index(), Some(0));
        session.complete_set_for(0);
        session.complete_set_for(0);
        assert_eq!(session.current_exercise_index(), Some(1));
    }

    #[test]
    fn test_status_transitions() {
        let mut session = WorkoutSession::new(sample_date(), 1, Vec::new());
        assert_eq!(session.status, WorkoutStatus::Planned);

        session.start();
        assert!(session.is_in_progress());
        assert!(session.started_at.is_some());

        session.complete();
        assert!(session.is_completed());
        assert!(session.completed_at.is_some());
    }

    #[test]
    fn test_rest_day_has_no_exercises() {
        let rest = WorkoutSession::rest_day(sample_date(), 2);
        assert_eq!(rest.day_type, DayType::Rest);
        assert!(rest.exercises.is_empty());
        assert!(!rest.is_workout_day());
    }

    #[test]
    fn test_weekly_plan_views() {
        let start = sample_date();
        let mut workout = WorkoutSession::new(start, 1, Vec::new());
        workout.complete();
        let sessions = vec![
            workout,
            WorkoutSession::rest_day(start.succ_opt().unwrap(), 2),
            WorkoutSession::new(start + chrono::Days::new(2), 3, Vec::new()),
        ];
        let plan = WeeklyPlan::new(start, sessions);

        assert_eq!(plan.planned_workouts(), 2);
        assert_eq!(plan.completed_workouts(), 1);
        assert!(plan.session_for(start).is_some());
        assert!(plan
            .session_for(NaiveDate::from_ymd_opt(2030, 1, 1).unwrap())
            .is_none());
    }

    #[test]
    fn test_session_json_roundtrip() {
        let mut session = WorkoutSession::new(
            sample_date(),
            1,
            vec![WorkoutExercise::from_exercise(&sample_exercise())],
        );
        session.complete_set_for(0);

        let json = serde_json::to_string(&session).unwrap();
        assert!(json.contains("\"planned\""));
        assert!(json.contains("\"workout\""));

        let parsed: WorkoutSession = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, session);
        assert_eq!(parsed.exercises[0].completed_sets(), 1);
    }
}
