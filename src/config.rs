//! Navigation tunables and control policies
//!
//! Loaded from JSON so ship handling can be tuned without recompiling.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{NavigationError, Result};

/// What releasing the thrust input does to a running burst
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum BurstPolicy {
    /// Pulse always runs for the full burst duration
    #[default]
    TimeGated,
    /// Releasing thrust cuts the pulse short
    CancelOnRelease,
}

impl BurstPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            BurstPolicy::TimeGated => "time_gated",
            BurstPolicy::CancelOnRelease => "cancel_on_release",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "time_gated" | "timed" => Some(BurstPolicy::TimeGated),
            "cancel_on_release" | "cancel" => Some(BurstPolicy::CancelOnRelease),
            _ => None,
        }
    }
}

/// How long a rotating state lasts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RotationPolicy {
    /// One step per request, then back to idle (input must re-assert each tick)
    #[default]
    SelfTerminating,
    /// Keep rotating every tick until idle is requested
    Sustained,
}

impl RotationPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            RotationPolicy::SelfTerminating => "self_terminating",
            RotationPolicy::Sustained => "sustained",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "self_terminating" | "step" => Some(RotationPolicy::SelfTerminating),
            "sustained" | "hold" => Some(RotationPolicy::Sustained),
            _ => None,
        }
    }
}

/// Engine tunables
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationConfig {
    /// Thrust magnitude added per burst
    pub engine_burst_amount: f64,
    /// Rotation step in degrees per tick
    pub engine_rotation_amount: f64,
    /// Burst pulse length in caller time units
    pub burst_duration: f64,

    pub burst_policy: BurstPolicy,
    pub rotation_policy: RotationPolicy,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            engine_burst_amount: DEFAULT_ENGINE_BURST_AMOUNT,
            engine_rotation_amount: DEFAULT_ENGINE_ROTATION_AMOUNT,
            burst_duration: DEFAULT_BURST_DURATION,
            burst_policy: BurstPolicy::default(),
            rotation_policy: RotationPolicy::default(),
        }
    }
}

impl NavigationConfig {
    /// Handling for a held-key feel: continuous rotation, thrust stops on release
    pub fn live_controls() -> Self {
        Self {
            burst_policy: BurstPolicy::CancelOnRelease,
            rotation_policy: RotationPolicy::Sustained,
            ..Self::default()
        }
    }

    /// Check every tunable is finite and non-negative
    pub fn validate(&self) -> Result<()> {
        let tunables = [
            ("engine_burst_amount", self.engine_burst_amount),
            ("engine_rotation_amount", self.engine_rotation_amount),
            ("burst_duration", self.burst_duration),
        ];
        for (name, value) in tunables {
            if !value.is_finite() || value < 0.0 {
                return Err(NavigationError::InvalidTunable { name, value });
            }
        }
        Ok(())
    }

    /// Parse and validate a JSON document (missing fields take defaults)
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load config from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded navigation config from {}", path.display());
        Ok(config)
    }

    /// Save config as pretty JSON
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        std::fs::write(path, self.to_json()?)?;
        log::info!("Navigation config saved to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = NavigationConfig::default();
        assert_eq!(config.engine_burst_amount, 1.0);
        assert_eq!(config.engine_rotation_amount, 1.0);
        assert_eq!(config.burst_duration, 1000.0);
        assert_eq!(config.burst_policy, BurstPolicy::TimeGated);
        assert_eq!(config.rotation_policy, RotationPolicy::SelfTerminating);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = NavigationConfig::from_json(r#"{ "burst_duration": 250.0 }"#).unwrap();
        assert_eq!(config.burst_duration, 250.0);
        assert_eq!(config.engine_burst_amount, 1.0);
        assert_eq!(config.burst_policy, BurstPolicy::TimeGated);
    }

    #[test]
    fn test_policies_from_json() {
        let config = NavigationConfig::from_json(
            r#"{ "burst_policy": "cancel_on_release", "rotation_policy": "sustained" }"#,
        )
        .unwrap();
        assert_eq!(config, NavigationConfig::live_controls());
    }

    #[test]
    fn test_rejects_negative_tunable() {
        let err = NavigationConfig::from_json(r#"{ "engine_burst_amount": -2.0 }"#).unwrap_err();
        assert!(matches!(
            err,
            NavigationError::InvalidTunable {
                name: "engine_burst_amount",
                ..
            }
        ));
    }

    #[test]
    fn test_rejects_non_finite_tunable() {
        let config = NavigationConfig {
            burst_duration: f64::NAN,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_bad_json() {
        let err = NavigationConfig::from_json("{ nope").unwrap_err();
        assert!(matches!(err, NavigationError::Config(_)));
    }

    #[test]
    fn test_save_and_load_file() {
        let path = std::env::temp_dir().join(format!("spacetruck_nav_cfg_{}.json", std::process::id()));
        let config = NavigationConfig {
            engine_rotation_amount: 5.0,
            ..NavigationConfig::live_controls()
        };
        config.save(&path).unwrap();
        let loaded = NavigationConfig::load(&path).unwrap();
        let _ = std::fs::remove_file(&path);
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_missing_file() {
        let err = NavigationConfig::load("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, NavigationError::Io(_)));
    }

    #[test]
    fn test_policy_names() {
        assert_eq!(BurstPolicy::from_str("Cancel"), Some(BurstPolicy::CancelOnRelease));
        assert_eq!(RotationPolicy::from_str("hold"), Some(RotationPolicy::Sustained));
        assert_eq!(RotationPolicy::from_str("spin"), None);
        assert_eq!(BurstPolicy::TimeGated.as_str(), "time_gated");
    }

    #[test]
    fn test_policy_names_round_trip() {
        for policy in [BurstPolicy::TimeGated, BurstPolicy::CancelOnRelease] {
            assert_eq!(BurstPolicy::from_str(policy.as_str()), Some(policy));
        }
        for policy in [RotationPolicy::SelfTerminating, RotationPolicy::Sustained] {
            assert_eq!(RotationPolicy::from_str(policy.as_str()), Some(policy));
        }
        assert_eq!(BurstPolicy::from_str(""), None);
    }
}
