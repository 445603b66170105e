//! Pre-workout check-in and session adjustment.
//!
//! A check-in captures the user's subjective readiness (energy, knee pain)
//! right before a session. When it signals low readiness, the planned volume
//! is reduced by one set per exercise.

use crate::session::WorkoutSession;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The user's pre-workout state assessment
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct PreWorkoutCheckIn {
    pub id: Uuid,
    pub date: DateTime<Utc>,
    /// Energy level, 1 (very low) to 5 (excellent)
    pub energy_level: i32,
    /// Knee pain level, 0 (none) to 2 (significant)
    pub knee_pain_level: i32,
    pub notes: String,
}

impl PreWorkoutCheckIn {
    pub const ENERGY_RANGE: std::ops::RangeInclusive<i32> = 1..=5;
    pub const KNEE_PAIN_RANGE: std::ops::RangeInclusive<i32> = 0..=2;

    /// Create a check-in, clamping out-of-range inputs into the valid ranges.
    pub fn new(energy_level: i32, knee_pain_level: i32, notes: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            date: Utc::now(),
            energy_level: energy_level.clamp(*Self::ENERGY_RANGE.start(), *Self::ENERGY_RANGE.end()),
            knee_pain_level: knee_pain_level
                .clamp(*Self::KNEE_PAIN_RANGE.start(), *Self::KNEE_PAIN_RANGE.end()),
            notes: notes.into(),
        }
    }

    /// True if energy is low (≤ 2)
    pub fn is_low_energy(&self) -> bool {
        self.energy_level <= 2
    }

    /// True if any knee pain is present (≥ 1)
    pub fn has_knee_pain(&self) -> bool {
        self.knee_pain_level >= 1
    }

    /// True if knee pain is significant (= 2)
    pub fn has_high_knee_pain(&self) -> bool {
        self.knee_pain_level == 2
    }

    /// True if the workout should be adjusted (low energy or knee pain)
    pub fn should_adjust_workout(&self) -> bool {
        self.is_low_energy() || self.has_knee_pain()
    }

    /// Number of sets to drop from each exercise.
    ///
    /// Low energy and knee pain each trigger a reduction of 1; the reduction
    /// is not cumulative when both apply.
    pub fn sets_reduction(&self) -> u32 {
        if self.should_adjust_workout() {
            1
        } else {
            0
        }
    }

    pub fn energy_description(&self) -> &'static str {
        match self.energy_level {
            1 => "Very Low",
            2 => "Low",
            3 => "Moderate",
            4 => "Good",
            5 => "Excellent",
            _ => "Unknown",
        }
    }

    pub fn knee_pain_description(&self) -> &'static str {
        match self.knee_pain_level {
            0 => "None",
            1 => "Mild",
            2 => "Significant",
            _ => "Unknown",
        }
    }

    /// Apply this check-in's adjustments to a session in place.
    ///
    /// A check-in that triggers no adjustment leaves the session untouched
    /// and is not attached to it.
    pub fn adjust(&self, session: &mut WorkoutSession) {
        if !self.should_adjust_workout() {
            return;
        }

        let reduction = self.sets_reduction();
        for exercise in &mut session.exercises {
            exercise.reduce_sets(reduction);
        }

        tracing::info!(
            "Check-in adjustment applied: energy={}, knee_pain={}, reduced sets by {}",
            self.energy_level,
            self.knee_pain_level,
            reduction
        );

        session.check_in = Some(self.clone());
    }

    /// Return an adjusted copy of the session
    pub fn adjusted_session(&self, session: &WorkoutSession) -> WorkoutSession {
        let mut adjusted = session.clone();
        self.adjust(&mut adjusted);
        adjusted
    }
}
