//! Core domain types for the Repkit planner.
//!
//! This module defines the fundamental types used throughout the system:
//! - Muscle groups, equipment and knee-load classifications
//! - User goals and knee-health profiles
//! - Exercise catalog entries

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::hash::{Hash, Hasher};

// ============================================================================
// Goal and Knee Profile Types
// ============================================================================

/// User's primary fitness goal
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PrimaryGoal {
    GeneralFitness,
    Arms,
    Knees,
    FatLoss,
    Strength,
}

impl PrimaryGoal {
    pub fn label(&self) -> &'static str {
        match self {
            PrimaryGoal::GeneralFitness => "General Fitness",
            PrimaryGoal::Arms => "Build Stronger Arms",
            PrimaryGoal::Knees => "Knee-Friendly Training",
            PrimaryGoal::FatLoss => "Fat Loss",
            PrimaryGoal::Strength => "Build Strength",
        }
    }
}

/// User's knee health status for exercise filtering
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum KneeProfile {
    Healthy,
    Sensitive,
    Restricted,
}

impl KneeProfile {
    pub fn label(&self) -> &'static str {
        match self {
            KneeProfile::Healthy => "Healthy",
            KneeProfile::Sensitive => "Sensitive",
            KneeProfile::Restricted => "Restricted",
        }
    }

    /// Knee load levels this profile tolerates
    pub fn allowed_knee_loads(&self) -> BTreeSet<KneeLoadLevel> {
        match self {
            KneeProfile::Healthy => [
                KneeLoadLevel::Low,
                KneeLoadLevel::Moderate,
                KneeLoadLevel::High,
            ]
            .into(),
            KneeProfile::Sensitive => [KneeLoadLevel::Low, KneeLoadLevel::Moderate].into(),
            KneeProfile::Restricted => [KneeLoadLevel::Low].into(),
        }
    }
}

// ============================================================================
// Muscle, Equipment and Load Types
// ============================================================================

/// Primary muscle groups targeted by exercises
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MuscleGroup {
    Chest,
    Back,
    Shoulders,
    Biceps,
    Triceps,
    Legs,
    Glutes,
    Core,
    FullBody,
}

impl MuscleGroup {
    pub fn label(&self) -> &'static str {
        match self {
            MuscleGroup::Chest => "Chest",
            MuscleGroup::Back => "Back",
            MuscleGroup::Shoulders => "Shoulders",
            MuscleGroup::Biceps => "Biceps",
            MuscleGroup::Triceps => "Triceps",
            MuscleGroup::Legs => "Legs",
            MuscleGroup::Glutes => "Glutes",
            MuscleGroup::Core => "Core",
            MuscleGroup::FullBody => "Full Body",
        }
    }

    /// Whether this muscle group counts as "arms" for arm-focused goals
    pub fn is_arm_muscle(&self) -> bool {
        matches!(self, MuscleGroup::Biceps | MuscleGroup::Triceps)
    }
}

/// Equipment available for workouts
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum EquipmentType {
    Bodyweight,
    Dumbbells,
}

impl EquipmentType {
    pub fn label(&self) -> &'static str {
        match self {
            EquipmentType::Bodyweight => "Bodyweight",
            EquipmentType::Dumbbells => "Dumbbells",
        }
    }
}

/// How much stress an exercise places on the knees.
///
/// Variant order defines the severity ordering: low < moderate < high.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum KneeLoadLevel {
    Low,
    Moderate,
    High,
}

impl KneeLoadLevel {
    pub fn label(&self) -> &'static str {
        match self {
            KneeLoadLevel::Low => "Low",
            KneeLoadLevel::Moderate => "Moderate",
            KneeLoadLevel::High => "High",
        }
    }
}

/// Whether an exercise is a multi-joint or single-joint movement
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ExerciseType {
    Compound,
    Isolation,
}

// ============================================================================
// Schedule Day Types
// ============================================================================

/// Type of day in the workout schedule
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DayType {
    Workout,
    Rest,
}

/// Status of a workout session
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WorkoutStatus {
    Planned,
    InProgress,
    Completed,
    Skipped,
}

impl WorkoutStatus {
    pub fn label(&self) -> &'static str {
        match self {
            WorkoutStatus::Planned => "Planned",
            WorkoutStatus::InProgress => "In Progress",
            WorkoutStatus::Completed => "Completed",
            WorkoutStatus::Skipped => "Skipped",
        }
    }
}

// ============================================================================
// Exercise
// ============================================================================

/// An immutable exercise catalog entry.
///
/// Equality and hashing are based on `id` only; the id is unique within a
/// catalog.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Exercise {
    pub id: String,
    pub name: String,
    pub primary_muscle: MuscleGroup,
    #[serde(default)]
    pub secondary_muscles: Vec<MuscleGroup>,
    pub knee_load: KneeLoadLevel,
    pub equipment_required: BTreeSet<EquipmentType>,
    pub exercise_type: ExerciseType,
    #[serde(default = "default_sets")]
    pub default_sets: u32,
    #[serde(default = "default_reps")]
    pub default_reps: String,
    #[serde(default)]
    pub instructions: String,
}

fn default_sets() -> u32 {
    3
}

fn default_reps() -> String {
    "8-12".into()
}

impl Exercise {
    /// True if this is an arm exercise (biceps or triceps)
    pub fn is_arm_exercise(&self) -> bool {
        self.primary_muscle.is_arm_muscle()
    }

    /// True if the exercise is a multi-joint movement
    pub fn is_compound(&self) -> bool {
        self.exercise_type == ExerciseType::Compound
    }

    /// True if the exercise can be performed with the given equipment
    pub fn can_perform_with(&self, equipment: &BTreeSet<EquipmentType>) -> bool {
        self.equipment_required.is_subset(equipment)
    }

    /// True if the exercise is allowed for the given knee profile
    pub fn is_allowed_for(&self, knee_profile: KneeProfile) -> bool {
        knee_profile.allowed_knee_loads().contains(&self.knee_load)
    }
}

impl PartialEq for Exercise {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Exercise {}

impl Hash for Exercise {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_exercise(id: &str, name: &str) -> Exercise {
        Exercise {
            id: id.into(),
            name: name.into(),
            primary_muscle: MuscleGroup::Chest,
            secondary_muscles: vec![MuscleGroup::Triceps],
            knee_load: KneeLoadLevel::Low,
            equipment_required: [EquipmentType::Bodyweight].into(),
            exercise_type: ExerciseType::Compound,
            default_sets: 3,
            default_reps: "10-15".into(),
            instructions: String::new(),
        }
    }

    #[test]
    fn test_knee_profile_allowed_loads() {
        assert_eq!(KneeProfile::Healthy.allowed_knee_loads().len(), 3);
        assert_eq!(KneeProfile::Sensitive.allowed_knee_loads().len(), 2);
        assert_eq!(
            KneeProfile::Restricted.allowed_knee_loads(),
            [KneeLoadLevel::Low].into()
        );
        assert!(!KneeProfile::Sensitive
            .allowed_knee_loads()
            .contains(&KneeLoadLevel::High));
    }

    #[test]
    fn test_knee_load_ordering() {
        assert!(KneeLoadLevel::Low < KneeLoadLevel::Moderate);
        assert!(KneeLoadLevel::Moderate < KneeLoadLevel::High);
    }

    #[test]
    fn test_exercise_equality_is_id_based() {
        let a = sample_exercise("pushup", "Push-Up");
        let b = sample_exercise("pushup", "Different Name");
        let c = sample_exercise("plank", "Push-Up");

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_equipment_subset_check() {
        let mut exercise = sample_exercise("dumbbell_curl", "Dumbbell Curl");
        exercise.equipment_required = [EquipmentType::Dumbbells].into();

        let bodyweight_only: BTreeSet<_> = [EquipmentType::Bodyweight].into();
        let full: BTreeSet<_> = [EquipmentType::Bodyweight, EquipmentType::Dumbbells].into();

        assert!(!exercise.can_perform_with(&bodyweight_only));
        assert!(exercise.can_perform_with(&full));
    }

    #[test]
    fn test_enum_serde_tags() {
        assert_eq!(
            serde_json::to_string(&PrimaryGoal::GeneralFitness).unwrap(),
            "\"general_fitness\""
        );
        assert_eq!(
            serde_json::to_string(&PrimaryGoal::FatLoss).unwrap(),
            "\"fat_loss\""
        );
        assert_eq!(
            serde_json::to_string(&WorkoutStatus::InProgress).unwrap(),
            "\"in_progress\""
        );
        assert_eq!(
            serde_json::to_string(&ExerciseType::Compound).unwrap(),
            "\"compound\""
        );
        assert_eq!(
            serde_json::from_str::<KneeProfile>("\"sensitive\"").unwrap(),
            KneeProfile::Sensitive
        );
    }

    #[test]
    fn test_exercise_decode_defaults_and_set_semantics() {
        let json = r#"{
            "id": "pushup",
            "name": "Push-Up",
            "primary_muscle": "chest",
            "knee_load": "low",
            "equipment_required": ["bodyweight", "bodyweight"],
            "exercise_type": "compound"
        }"#;

        let exercise: Exercise = serde_json::from_str(json).unwrap();
        assert_eq!(exercise.default_sets, 3);
        assert_eq!(exercise.default_reps, "8-12");
        assert!(exercise.secondary_muscles.is_empty());
        // Duplicate equipment entries collapse
        assert_eq!(exercise.equipment_required.len(), 1);
    }
}
