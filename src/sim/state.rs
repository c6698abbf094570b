//! Navigation modes and the transition table
//!
//! Transitions are a static lookup; requests outside the table are dropped.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::NavigationError;

/// Current navigation mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NavState {
    /// Coasting: no rotation, no thrust
    #[default]
    Idle,
    RotatingLeft,
    RotatingRight,
    /// Engine burst pulse in progress
    Burst,
}

impl NavState {
    pub const ALL: [NavState; 4] = [
        NavState::Idle,
        NavState::RotatingLeft,
        NavState::RotatingRight,
        NavState::Burst,
    ];

    /// Modes reachable from this one
    pub fn allowed_next(self) -> &'static [NavState] {
        match self {
            NavState::Idle => &[
                NavState::RotatingLeft,
                NavState::RotatingRight,
                NavState::Burst,
                NavState::Idle,
            ],
            NavState::RotatingLeft | NavState::RotatingRight => &[NavState::Idle],
            NavState::Burst => &[NavState::Burst, NavState::Idle],
        }
    }

    #[inline]
    pub fn can_transition_to(self, next: NavState) -> bool {
        self.allowed_next().contains(&next)
    }

    #[inline]
    pub fn is_rotating(self) -> bool {
        matches!(self, NavState::RotatingLeft | NavState::RotatingRight)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            NavState::Idle => "idle",
            NavState::RotatingLeft => "rotatingLeft",
            NavState::RotatingRight => "rotatingRight",
            NavState::Burst => "burst",
        }
    }
}

impl fmt::Display for NavState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NavState {
    type Err = NavigationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NavState::ALL
            .into_iter()
            .find(|state| state.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| NavigationError::UnknownState(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_reaches_everything() {
        for next in NavState::ALL {
            assert!(NavState::Idle.can_transition_to(next), "idle -> {next}");
        }
    }

    #[test]
    fn test_rotating_only_returns_to_idle() {
        for from in [NavState::RotatingLeft, NavState::RotatingRight] {
            assert!(from.can_transition_to(NavState::Idle));
            assert!(!from.can_transition_to(NavState::Burst));
            assert!(!from.can_transition_to(NavState::RotatingLeft));
            assert!(!from.can_transition_to(NavState::RotatingRight));
        }
    }

    #[test]
    fn test_burst_transitions() {
        assert!(NavState::Burst.can_transition_to(NavState::Burst));
        assert!(NavState::Burst.can_transition_to(NavState::Idle));
        assert!(!NavState::Burst.can_transition_to(NavState::RotatingLeft));
        assert!(!NavState::Burst.can_transition_to(NavState::RotatingRight));
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("rotatingLeft".parse::<NavState>().unwrap(), NavState::RotatingLeft);
        assert_eq!("BURST".parse::<NavState>().unwrap(), NavState::Burst);
        assert!(matches!(
            "rotateLeft".parse::<NavState>(),
            Err(NavigationError::UnknownState(_))
        ));
        for state in NavState::ALL {
            assert_eq!(state.to_string().parse::<NavState>().unwrap(), state);
        }
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(
            serde_json::to_string(&NavState::RotatingRight).unwrap(),
            "\"rotatingRight\""
        );
    }
}
