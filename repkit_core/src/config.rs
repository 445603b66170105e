//! Configuration file support for Repkit.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/repkit/config.toml` and
//! carries the user's fitness profile.

use crate::profile::{UserProfile, WorkoutSchedule};
use crate::types::{EquipmentType, KneeProfile, PrimaryGoal};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub profile: ProfileConfig,
}

/// User profile configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ProfileConfig {
    #[serde(default)]
    pub name: String,

    #[serde(default = "default_goal")]
    pub goal: PrimaryGoal,

    #[serde(default = "default_knee_profile")]
    pub knee_profile: KneeProfile,

    #[serde(default)]
    pub schedule: ScheduleConfig,

    #[serde(default)]
    pub equipment: EquipmentConfig,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            name: String::new(),
            goal: default_goal(),
            knee_profile: default_knee_profile(),
            schedule: ScheduleConfig::default(),
            equipment: EquipmentConfig::default(),
        }
    }
}

/// Schedule configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ScheduleConfig {
    #[serde(default = "default_days_per_week")]
    pub days_per_week: u32,

    #[serde(default = "default_minutes_per_session")]
    pub minutes_per_session: u32,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            days_per_week: default_days_per_week(),
            minutes_per_session: default_minutes_per_session(),
        }
    }
}

/// Equipment availability configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EquipmentConfig {
    #[serde(default = "default_equipment")]
    pub available: Vec<EquipmentType>,
}

impl Default for EquipmentConfig {
    fn default() -> Self {
        Self {
            available: default_equipment(),
        }
    }
}

// Default value functions
fn default_goal() -> PrimaryGoal {
    PrimaryGoal::GeneralFitness
}

fn default_knee_profile() -> KneeProfile {
    KneeProfile::Healthy
}

fn default_days_per_week() -> u32 {
    3
}

fn default_minutes_per_session() -> u32 {
    30
}

fn default_equipment() -> Vec<EquipmentType> {
    vec![EquipmentType::Bodyweight]
}

impl Config {
    /// Load configuration from the standard config path
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path();
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            tracing::info!(
                "No config file found at {:?}, using defaults",
                config_path
            );
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Get the default config file path
    pub fn default_config_path() -> PathBuf {
        let base = dirs::config_dir().unwrap_or_else(|| {
            let home = std::env::var("HOME").expect("HOME environment variable not set");
            PathBuf::from(home).join(".config")
        });
        base.join("repkit").join("config.toml")
    }

    /// Save the current configuration to the default path
    pub fn save(&self) -> Result<()> {
        let config_path = Self::default_config_path();
        self.save_to(&config_path)
    }

    /// Save the current configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, contents)?;
        tracing::info!("Saved config to {:?}", path);
        Ok(())
    }

    /// Build the domain profile described by this configuration.
    ///
    /// Equipment duplicates collapse and the schedule is clamped via
    /// `WorkoutSchedule::new`.
    pub fn user_profile(&self) -> UserProfile {
        UserProfile::new(
            self.profile.name.clone(),
            self.profile.goal,
            self.profile.knee_profile,
            WorkoutSchedule::new(
                self.profile.schedule.days_per_week,
                self.profile.schedule.minutes_per_session,
            ),
            self.profile.equipment.available.iter().copied().collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.profile.goal, PrimaryGoal::GeneralFitness);
        assert_eq!(config.profile.schedule.days_per_week, 3);
        assert_eq!(config.profile.schedule.minutes_per_session, 30);
        assert_eq!(config.profile.equipment.available, vec![EquipmentType::Bodyweight]);
    }

    #[test]
    fn test_config_roundtrip() {
        let config = Config::default();
        let toml_str = toml::to_string(&config).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();

        assert_eq!(parsed.profile.goal, config.profile.goal);
        assert_eq!(
            parsed.profile.schedule.days_per_week,
            config.profile.schedule.days_per_week
        );
        assert_eq!(
            parsed.profile.equipment.available,
            config.profile.equipment.available
        );
    }

    #[test]
    fn test_partial_config() {
        let toml_str = r#"
[profile]
goal = "arms"
knee_profile = "sensitive"

[profile.schedule]
days_per_week = 2
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.profile.goal, PrimaryGoal::Arms);
        assert_eq!(config.profile.knee_profile, KneeProfile::Sensitive);
        assert_eq!(config.profile.schedule.days_per_week, 2);
        assert_eq!(config.profile.schedule.minutes_per_session, 30); // default
    }

    #[test]
    fn test_user_profile_conversion() {
        let toml_str = r#"
[profile]
name = "Sam"
goal = "arms"

[profile.schedule]
days_per_week = 9

[profile.equipment]
available = ["bodyweight", "dumbbells", "dumbbells"]
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        let profile = config.user_profile();

        assert_eq!(profile.name, "Sam");
        assert!(profile.is_arm_focused());
        // Out-of-range days are clamped, duplicate equipment collapses
        assert_eq!(profile.schedule.days_per_week, 3);
        assert_eq!(profile.equipment.len(), 2);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.profile.name = "Sam".into();
        config.profile.goal = PrimaryGoal::Strength;
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.profile.name, "Sam");
        assert_eq!(loaded.profile.goal, PrimaryGoal::Strength);
    }
}
