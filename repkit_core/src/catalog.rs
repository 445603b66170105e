//! Exercise catalog: the queryable set of known exercises.
//!
//! The catalog is an injectable, read-only data source: every engine entry
//! point takes `&Catalog`, and tests can substitute smaller catalogs. The
//! declaration order of the exercises is the stable iteration order that
//! selection ties break by.

use crate::types::{
    EquipmentType, Exercise, ExerciseType, KneeLoadLevel, KneeProfile, MuscleGroup,
};
use once_cell::sync::Lazy;
use std::collections::{BTreeMap, BTreeSet};

/// Cached default catalog - built once and reused across all operations
static DEFAULT_CATALOG: Lazy<Catalog> = Lazy::new(build_default_catalog);

/// Get a reference to the cached default catalog
pub fn default_catalog() -> &'static Catalog {
    &DEFAULT_CATALOG
}

/// The queryable collection of exercises.
///
/// All queries are pure O(N) scans preserving declaration order.
#[derive(Clone, Debug)]
pub struct Catalog {
    exercises: Vec<Exercise>,
}

impl Catalog {
    pub fn new(exercises: Vec<Exercise>) -> Self {
        Self { exercises }
    }

    pub fn len(&self) -> usize {
        self.exercises.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exercises.is_empty()
    }

    /// All exercises in declaration order
    pub fn iter(&self) -> impl Iterator<Item = &Exercise> {
        self.exercises.iter()
    }

    /// Exercises whose required equipment is a subset of `allowed`
    pub fn by_equipment(&self, allowed: &BTreeSet<EquipmentType>) -> Vec<&Exercise> {
        self.exercises
            .iter()
            .filter(|e| e.can_perform_with(allowed))
            .collect()
    }

    /// Exercises whose knee load is tolerated by the given profile
    pub fn by_knee_profile(&self, profile: KneeProfile) -> Vec<&Exercise> {
        self.exercises
            .iter()
            .filter(|e| e.is_allowed_for(profile))
            .collect()
    }

    /// Exercises satisfying both the equipment and knee constraints
    pub fn by_equipment_and_knee(
        &self,
        allowed: &BTreeSet<EquipmentType>,
        profile: KneeProfile,
    ) -> Vec<&Exercise> {
        self.exercises
            .iter()
            .filter(|e| e.can_perform_with(allowed) && e.is_allowed_for(profile))
            .collect()
    }

    /// Exercises whose primary muscle matches
    pub fn by_muscle_group(&self, muscle: MuscleGroup) -> Vec<&Exercise> {
        self.exercises
            .iter()
            .filter(|e| e.primary_muscle == muscle)
            .collect()
    }

    /// All arm exercises (biceps and triceps)
    pub fn arm_exercises(&self) -> Vec<&Exercise> {
        self.exercises.iter().filter(|e| e.is_arm_exercise()).collect()
    }

    /// All compound exercises
    pub fn compound_exercises(&self) -> Vec<&Exercise> {
        self.exercises.iter().filter(|e| e.is_compound()).collect()
    }

    /// Look up an exercise by id
    pub fn by_id(&self, id: &str) -> Option<&Exercise> {
        self.exercises.iter().find(|e| e.id == id)
    }

    /// Number of exercises per knee load level
    pub fn knee_load_breakdown(&self) -> BTreeMap<KneeLoadLevel, usize> {
        let mut breakdown = BTreeMap::new();
        for exercise in &self.exercises {
            *breakdown.entry(exercise.knee_load).or_insert(0) += 1;
        }
        breakdown
    }

    /// Number of exercises per primary muscle group
    pub fn muscle_group_breakdown(&self) -> BTreeMap<MuscleGroup, usize> {
        let mut breakdown = BTreeMap::new();
        for exercise in &self.exercises {
            *breakdown.entry(exercise.primary_muscle).or_insert(0) += 1;
        }
        breakdown
    }

    /// Validate the catalog for consistency and completeness
    ///
    /// Returns a list of validation errors, or empty Vec if valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        let mut seen = BTreeSet::new();

        for exercise in &self.exercises {
            if exercise.id.is_empty() {
                errors.push("Exercise has empty ID".to_string());
            }
            if !seen.insert(exercise.id.clone()) {
                errors.push(format!("Duplicate exercise ID '{}'", exercise.id));
            }
            if exercise.name.is_empty() {
                errors.push(format!("Exercise '{}' has empty name", exercise.id));
            }
            if exercise.default_sets == 0 {
                errors.push(format!("Exercise '{}' has zero default sets", exercise.id));
            }
        }

        // The selection policy rotates over these muscle groups; a catalog
        // with no exercise for one of them silently shortens every plan.
        let rotation_muscles = [
            MuscleGroup::Chest,
            MuscleGroup::Back,
            MuscleGroup::Shoulders,
            MuscleGroup::Biceps,
            MuscleGroup::Triceps,
            MuscleGroup::Legs,
            MuscleGroup::Glutes,
            MuscleGroup::Core,
        ];
        for muscle in rotation_muscles {
            if self.by_muscle_group(muscle).is_empty() {
                errors.push(format!("Catalog has no {} exercises", muscle.label()));
            }
        }

        errors
    }
}

/// Builds the default catalog with the built-in exercises
///
/// **Note**: For production use, prefer `default_catalog()` which returns a
/// cached reference. This function is retained for testing and custom catalog
/// creation.
pub fn build_default_catalog() -> Catalog {
    let mut exercises = Vec::new();

    // ========================================================================
    // Chest
    // ========================================================================

    exercises.push(Exercise {
        id: "pushup".into(),
        name: "Push-Up".into(),
        primary_muscle: MuscleGroup::Chest,
        secondary_muscles: vec![MuscleGroup::Triceps, MuscleGroup::Shoulders],
        knee_load: KneeLoadLevel::Low,
        equipment_required: [EquipmentType::Bodyweight].into(),
        exercise_type: ExerciseType::Compound,
        default_sets: 3,
        default_reps: "10-15".into(),
        instructions: "Keep body straight, lower chest to floor, push back up".into(),
    });

    exercises.push(Exercise {
        id: "incline_pushup".into(),
        name: "Incline Push-Up".into(),
        primary_muscle: MuscleGroup::Chest,
        secondary_muscles: vec![MuscleGroup::Triceps, MuscleGroup::Shoulders],
        knee_load: KneeLoadLevel::Low,
        equipment_required: [EquipmentType::Bodyweight].into(),
        exercise_type: ExerciseType::Compound,
        default_sets: 3,
        default_reps: "12-15".into(),
        instructions: "Hands elevated on bench or step, easier variation".into(),
    });

    exercises.push(Exercise {
        id: "dumbbell_chest_press".into(),
        name: "Dumbbell Chest Press".into(),
        primary_muscle: MuscleGroup::Chest,
        secondary_muscles: vec![MuscleGroup::Triceps, MuscleGroup::Shoulders],
        knee_load: KneeLoadLevel::Low,
        equipment_required: [EquipmentType::Dumbbells].into(),
        exercise_type: ExerciseType::Compound,
        default_sets: 3,
        default_reps: "8-12".into(),
        instructions: "Lie on back, press dumbbells up from chest level".into(),
    });

    // ========================================================================
    // Back
    // ========================================================================

    exercises.push(Exercise {
        id: "dumbbell_row".into(),
        name: "Dumbbell Row".into(),
        primary_muscle: MuscleGroup::Back,
        secondary_muscles: vec![MuscleGroup::Biceps],
        knee_load: KneeLoadLevel::Low,
        equipment_required: [EquipmentType::Dumbbells].into(),
        exercise_type: ExerciseType::Compound,
        default_sets: 3,
        default_reps: "8-12".into(),
        instructions: "Hinge at hips, pull dumbbell to hip, squeeze back".into(),
    });

    exercises.push(Exercise {
        id: "superman".into(),
        name: "Superman Hold".into(),
        primary_muscle: MuscleGroup::Back,
        secondary_muscles: vec![MuscleGroup::Glutes],
        knee_load: KneeLoadLevel::Low,
        equipment_required: [EquipmentType::Bodyweight].into(),
        exercise_type: ExerciseType::Isolation,
        default_sets: 3,
        default_reps: "10-15".into(),
        instructions: "Lie face down, lift arms and legs off ground, hold".into(),
    });

    // ========================================================================
    // Shoulders
    // ========================================================================

    exercises.push(Exercise {
        id: "dumbbell_shoulder_press".into(),
        name: "Dumbbell Shoulder Press".into(),
        primary_muscle: MuscleGroup::Shoulders,
        secondary_muscles: vec![MuscleGroup::Triceps],
        knee_load: KneeLoadLevel::Low,
        equipment_required: [EquipmentType::Dumbbells].into(),
        exercise_type: ExerciseType::Compound,
        default_sets: 3,
        default_reps: "8-12".into(),
        instructions: "Press dumbbells overhead from shoulder height".into(),
    });

    exercises.push(Exercise {
        id: "lateral_raise".into(),
        name: "Lateral Raise".into(),
        primary_muscle: MuscleGroup::Shoulders,
        secondary_muscles: vec![],
        knee_load: KneeLoadLevel::Low,
        equipment_required: [EquipmentType::Dumbbells].into(),
        exercise_type: ExerciseType::Isolation,
        default_sets: 3,
        default_reps: "12-15".into(),
        instructions: "Raise arms out to sides until parallel to floor".into(),
    });

    exercises.push(Exercise {
        id: "pike_pushup".into(),
        name: "Pike Push-Up".into(),
        primary_muscle: MuscleGroup::Shoulders,
        secondary_muscles: vec![MuscleGroup::Triceps],
        knee_load: KneeLoadLevel::Low,
        equipment_required: [EquipmentType::Bodyweight].into(),
        exercise_type: ExerciseType::Compound,
        default_sets: 3,
        default_reps: "8-12".into(),
        instructions: "Hips high, body in inverted V, lower head toward floor".into(),
    });

    // ========================================================================
    // Biceps
    // ========================================================================

    exercises.push(Exercise {
        id: "dumbbell_curl".into(),
        name: "Dumbbell Curl".into(),
        primary_muscle: MuscleGroup::Biceps,
        secondary_muscles: vec![],
        knee_load: KneeLoadLevel::Low,
        equipment_required: [EquipmentType::Dumbbells].into(),
        exercise_type: ExerciseType::Isolation,
        default_sets: 3,
        default_reps: "10-12".into(),
        instructions: "Curl dumbbells up, squeeze at top, control the descent".into(),
    });

    exercises.push(Exercise {
        id: "hammer_curl".into(),
        name: "Hammer Curl".into(),
        primary_muscle: MuscleGroup::Biceps,
        secondary_muscles: vec![],
        knee_load: KneeLoadLevel::Low,
        equipment_required: [EquipmentType::Dumbbells].into(),
        exercise_type: ExerciseType::Isolation,
        default_sets: 3,
        default_reps: "10-12".into(),
        instructions: "Curl with palms facing each other (neutral grip)".into(),
    });

    // ========================================================================
    // Triceps
    // ========================================================================

    exercises.push(Exercise {
        id: "tricep_dip".into(),
        name: "Tricep Dip (Chair)".into(),
        primary_muscle: MuscleGroup::Triceps,
        secondary_muscles: vec![MuscleGroup::Shoulders],
        knee_load: KneeLoadLevel::Low,
        equipment_required: [EquipmentType::Bodyweight].into(),
        exercise_type: ExerciseType::Compound,
        default_sets: 3,
        default_reps: "10-15".into(),
        instructions: "Hands on chair behind you, lower body, push back up".into(),
    });

    exercises.push(Exercise {
        id: "tricep_kickback".into(),
        name: "Tricep Kickback".into(),
        primary_muscle: MuscleGroup::Triceps,
        secondary_muscles: vec![],
        knee_load: KneeLoadLevel::Low,
        equipment_required: [EquipmentType::Dumbbells].into(),
        exercise_type: ExerciseType::Isolation,
        default_sets: 3,
        default_reps: "10-12".into(),
        instructions: "Hinge forward, extend arm back, squeeze tricep".into(),
    });

    exercises.push(Exercise {
        id: "diamond_pushup".into(),
        name: "Diamond Push-Up".into(),
        primary_muscle: MuscleGroup::Triceps,
        secondary_muscles: vec![MuscleGroup::Chest],
        knee_load: KneeLoadLevel::Low,
        equipment_required: [EquipmentType::Bodyweight].into(),
        exercise_type: ExerciseType::Compound,
        default_sets: 3,
        default_reps: "8-12".into(),
        instructions: "Hands close together forming diamond shape".into(),
    });

    // ========================================================================
    // Legs
    // ========================================================================

    exercises.push(Exercise {
        id: "bodyweight_squat".into(),
        name: "Bodyweight Squat".into(),
        primary_muscle: MuscleGroup::Legs,
        secondary_muscles: vec![MuscleGroup::Glutes],
        knee_load: KneeLoadLevel::High,
        equipment_required: [EquipmentType::Bodyweight].into(),
        exercise_type: ExerciseType::Compound,
        default_sets: 3,
        default_reps: "12-15".into(),
        instructions: "Feet shoulder-width, squat down until thighs parallel".into(),
    });

    exercises.push(Exercise {
        id: "goblet_squat".into(),
        name: "Goblet Squat".into(),
        primary_muscle: MuscleGroup::Legs,
        secondary_muscles: vec![MuscleGroup::Glutes, MuscleGroup::Core],
        knee_load: KneeLoadLevel::High,
        equipment_required: [EquipmentType::Dumbbells].into(),
        exercise_type: ExerciseType::Compound,
        default_sets: 3,
        default_reps: "10-12".into(),
        instructions: "Hold dumbbell at chest, squat deep with upright torso".into(),
    });

    exercises.push(Exercise {
        id: "lunge".into(),
        name: "Forward Lunge".into(),
        primary_muscle: MuscleGroup::Legs,
        secondary_muscles: vec![MuscleGroup::Glutes],
        knee_load: KneeLoadLevel::High,
        equipment_required: [EquipmentType::Bodyweight].into(),
        exercise_type: ExerciseType::Compound,
        default_sets: 3,
        default_reps: "10 each leg".into(),
        instructions: "Step forward, lower back knee toward floor, push back".into(),
    });

    exercises.push(Exercise {
        id: "step_up".into(),
        name: "Step-Up".into(),
        primary_muscle: MuscleGroup::Legs,
        secondary_muscles: vec![MuscleGroup::Glutes],
        knee_load: KneeLoadLevel::Moderate,
        equipment_required: [EquipmentType::Bodyweight].into(),
        exercise_type: ExerciseType::Compound,
        default_sets: 3,
        default_reps: "10 each leg".into(),
        instructions: "Step onto elevated surface, drive through front heel".into(),
    });

    // ========================================================================
    // Glutes
    // ========================================================================

    exercises.push(Exercise {
        id: "glute_bridge".into(),
        name: "Glute Bridge".into(),
        primary_muscle: MuscleGroup::Glutes,
        secondary_muscles: vec![MuscleGroup::Core],
        knee_load: KneeLoadLevel::Low,
        equipment_required: [EquipmentType::Bodyweight].into(),
        exercise_type: ExerciseType::Isolation,
        default_sets: 3,
        default_reps: "15-20".into(),
        instructions: "Lie on back, drive hips up, squeeze glutes at top".into(),
    });

    exercises.push(Exercise {
        id: "romanian_deadlift".into(),
        name: "Romanian Deadlift".into(),
        primary_muscle: MuscleGroup::Glutes,
        secondary_muscles: vec![MuscleGroup::Back],
        knee_load: KneeLoadLevel::Low,
        equipment_required: [EquipmentType::Dumbbells].into(),
        exercise_type: ExerciseType::Compound,
        default_sets: 3,
        default_reps: "10-12".into(),
        instructions: "Hinge at hips, lower dumbbells along legs, squeeze glutes to stand".into(),
    });

    // ========================================================================
    // Core
    // ========================================================================

    exercises.push(Exercise {
        id: "plank".into(),
        name: "Plank".into(),
        primary_muscle: MuscleGroup::Core,
        secondary_muscles: vec![MuscleGroup::Shoulders],
        knee_load: KneeLoadLevel::Low,
        equipment_required: [EquipmentType::Bodyweight].into(),
        exercise_type: ExerciseType::Isolation,
        default_sets: 3,
        default_reps: "30-60 sec".into(),
        instructions: "Hold straight body position on forearms and toes".into(),
    });

    exercises.push(Exercise {
        id: "dead_bug".into(),
        name: "Dead Bug".into(),
        primary_muscle: MuscleGroup::Core,
        secondary_muscles: vec![],
        knee_load: KneeLoadLevel::Low,
        equipment_required: [EquipmentType::Bodyweight].into(),
        exercise_type: ExerciseType::Isolation,
        default_sets: 3,
        default_reps: "10 each side".into(),
        instructions: "Lie on back, alternate extending opposite arm and leg".into(),
    });

    Catalog::new(exercises)
}
