//! User profile and schedule preferences.

use crate::types::{EquipmentType, KneeProfile, PrimaryGoal};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use uuid::Uuid;

/// The user's workout schedule preferences
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct WorkoutSchedule {
    /// Number of workout days per week (clamped to 1-3)
    pub days_per_week: u32,
    /// Target minutes per workout session
    pub minutes_per_session: u32,
}

impl WorkoutSchedule {
    pub const DAYS_PER_WEEK_OPTIONS: [u32; 3] = [1, 2, 3];
    pub const MINUTES_PER_SESSION_OPTIONS: [u32; 3] = [20, 30, 45];

    pub fn new(days_per_week: u32, minutes_per_session: u32) -> Self {
        Self {
            days_per_week: days_per_week.clamp(1, 3),
            minutes_per_session,
        }
    }

    /// Estimated number of exercises based on session duration
    pub fn estimated_exercise_count(&self) -> usize {
        match self.minutes_per_session {
            20 => 3,
            30 => 4,
            45 => 5,
            _ => 4,
        }
    }
}

impl Default for WorkoutSchedule {
    fn default() -> Self {
        Self::new(3, 30)
    }
}

/// The user's fitness profile with goals, constraints and preferences.
///
/// Owned by the application layer; the engine only reads it.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct UserProfile {
    pub id: Uuid,
    pub name: String,
    pub primary_goal: PrimaryGoal,
    pub knee_profile: KneeProfile,
    pub schedule: WorkoutSchedule,
    pub equipment: BTreeSet<EquipmentType>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserProfile {
    pub fn new(
        name: impl Into<String>,
        primary_goal: PrimaryGoal,
        knee_profile: KneeProfile,
        schedule: WorkoutSchedule,
        equipment: BTreeSet<EquipmentType>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            primary_goal,
            knee_profile,
            schedule,
            equipment,
            created_at: now,
            updated_at: now,
        }
    }

    /// True if the user's goal emphasizes arm training
    pub fn is_arm_focused(&self) -> bool {
        self.primary_goal == PrimaryGoal::Arms
    }

    /// Number of arm exercises to aim for per session
    pub fn arm_exercises_per_session(&self) -> usize {
        if self.is_arm_focused() {
            2
        } else {
            1
        }
    }
}

impl Default for UserProfile {
    fn default() -> Self {
        Self::new(
            "",
            PrimaryGoal::GeneralFitness,
            KneeProfile::Healthy,
            WorkoutSchedule::default(),
            [EquipmentType::Bodyweight].into(),
        )
    }
}
