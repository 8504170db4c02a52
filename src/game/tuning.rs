//! Physics tuning
//!
//! Movement and damage constants, overridable from a RON file. Values are
//! validated on load; a missing or invalid file is reported and the
//! defaults are used instead.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Movement and damage constants for the player
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Downward acceleration (units per second squared)
    pub gravity: f32,
    /// Initial upward velocity when jumping (units per second)
    pub jump_impulse: f32,
    /// Walk speed (units per second)
    pub walk_speed: f32,
    /// Sprint speed (units per second); sprinting only engages from the ground
    pub sprint_speed: f32,
    /// How long damage is ignored after a hit (seconds)
    pub invincibility_window: f32,
    /// Lives at the start of a session
    pub starting_lives: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: 1000.0,
            jump_impulse: 500.0,
            walk_speed: 200.0,
            sprint_speed: 350.0,
            invincibility_window: 2.0,
            starting_lives: 3,
        }
    }
}

impl Tuning {
    /// Check that every value is finite and usable
    pub fn validate(&self) -> Result<(), String> {
        let fields = [
            ("gravity", self.gravity),
            ("jump_impulse", self.jump_impulse),
            ("walk_speed", self.walk_speed),
            ("sprint_speed", self.sprint_speed),
            ("invincibility_window", self.invincibility_window),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value <= 0.0 {
                return Err(format!("{}: must be positive and finite, got {}", name, value));
            }
        }
        if self.starting_lives == 0 {
            return Err("starting_lives: must be at least 1".to_string());
        }
        Ok(())
    }
}

/// Error type for tuning load
#[derive(Debug)]
pub enum TuningError {
    IoError(std::io::Error),
    ParseError(ron::error::SpannedError),
    ValidationError(String),
}

impl From<std::io::Error> for TuningError {
    fn from(e: std::io::Error) -> Self {
        TuningError::IoError(e)
    }
}

impl From<ron::error::SpannedError> for TuningError {
    fn from(e: ron::error::SpannedError) -> Self {
        TuningError::ParseError(e)
    }
}

impl std::fmt::Display for TuningError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TuningError::IoError(e) => write!(f, "IO error: {}", e),
            TuningError::ParseError(e) => write!(f, "Parse error: {}", e),
            TuningError::ValidationError(e) => write!(f, "Validation error: {}", e),
        }
    }
}

impl std::error::Error for TuningError {}

/// Load and validate tuning from a RON file
pub fn load_tuning(path: &Path) -> Result<Tuning, TuningError> {
    let contents = fs::read_to_string(path)?;
    let tuning: Tuning = ron::from_str(&contents)?;
    tuning.validate().map_err(TuningError::ValidationError)?;
    Ok(tuning)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let tuning = Tuning::default();
        assert_eq!(tuning.gravity, 1000.0);
        assert_eq!(tuning.jump_impulse, 500.0);
        assert_eq!(tuning.walk_speed, 200.0);
        assert_eq!(tuning.sprint_speed, 350.0);
        assert_eq!(tuning.invincibility_window, 2.0);
        assert_eq!(tuning.starting_lives, 3);
        assert!(tuning.validate().is_ok());
    }

    #[test]
    fn test_partial_ron_keeps_defaults() {
        let tuning: Tuning = ron::from_str("(gravity: 1500.0)").unwrap();
        assert_eq!(tuning.gravity, 1500.0);
        assert_eq!(tuning.jump_impulse, 500.0);
        assert_eq!(tuning.starting_lives, 3);
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let mut tuning = Tuning::default();
        tuning.gravity = -9.8;
        assert!(tuning.validate().is_err());

        let mut tuning = Tuning::default();
        tuning.walk_speed = f32::NAN;
        assert!(tuning.validate().is_err());

        let mut tuning = Tuning::default();
        tuning.starting_lives = 0;
        assert!(tuning.validate().is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "(jump_impulse: 650.0, starting_lives: 5)").unwrap();

        let tuning = load_tuning(file.path()).unwrap();
        assert_eq!(tuning.jump_impulse, 650.0);
        assert_eq!(tuning.starting_lives, 5);
        assert_eq!(tuning.gravity, 1000.0);
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "(gravity: -1.0)").unwrap();
        assert!(matches!(
            load_tuning(file.path()),
            Err(TuningError::ValidationError(_))
        ));

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not ron at all").unwrap();
        assert!(matches!(
            load_tuning(file.path()),
            Err(TuningError::ParseError(_))
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.ron");
        assert!(matches!(load_tuning(&path), Err(TuningError::IoError(_))));
    }
}
