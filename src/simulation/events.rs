//! Behavioral events: scheduled population-wide speed changes
//!
//! Events model policy interventions (distancing, lockdown, reopening)
//! applied uniformly to every agent; there is no per-agent targeting. The
//! event list is caller-supplied configuration, so a malformed entry is
//! ignored rather than fatal.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::types::Tick;

/// The recognized intervention kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventKind {
    SocialDistancing,
    Lockdown,
    ReturnToNormal,
}

impl FromStr for EventKind {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "social-distancing" | "social_distancing" => Ok(EventKind::SocialDistancing),
            "lockdown" => Ok(EventKind::Lockdown),
            "return-to-normal" | "return_to_normal" => Ok(EventKind::ReturnToNormal),
            _ => Err(()),
        }
    }
}

/// One caller-supplied event entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BehaviorEvent {
    pub enabled: bool,
    /// Free-form kind string; unrecognized kinds are treated as disabled
    pub kind: String,
    /// Tick at which the event fires; `None` never matches
    pub trigger_tick: Option<Tick>,
    /// New behavior multiplier for every agent
    pub multiplier: f32,
}

impl BehaviorEvent {
    fn applies_at(&self, tick: Tick) -> bool {
        if !self.enabled || self.trigger_tick != Some(tick) {
            return false;
        }
        if EventKind::from_str(&self.kind).is_err() {
            tracing::warn!(kind = %self.kind, "ignoring event with unrecognized kind");
            return false;
        }
        if !self.multiplier.is_finite() || self.multiplier <= 0.0 {
            tracing::warn!(
                kind = %self.kind,
                multiplier = self.multiplier,
                "ignoring event with invalid multiplier"
            );
            return false;
        }
        true
    }
}

/// Resolve the behavior multiplier the event list dictates for this tick
///
/// Events are scanned in list order; the last applicable entry wins.
/// Returns `None` when no event fires, leaving agents' multipliers as
/// they are.
pub fn resolve_multiplier(events: &[BehaviorEvent], tick: Tick) -> Option<f32> {
    events
        .iter()
        .filter(|event| event.applies_at(tick))
        .map(|event| event.multiplier)
        .last()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(kind: &str, trigger: Option<Tick>, multiplier: f32) -> BehaviorEvent {
        BehaviorEvent {
            enabled: true,
            kind: kind.to_string(),
            trigger_tick: trigger,
            multiplier,
        }
    }

    #[test]
    fn test_event_fires_on_its_tick_only() {
        let events = vec![event("lockdown", Some(100), 0.2)];
        assert_eq!(resolve_multiplier(&events, 99), None);
        assert_eq!(resolve_multiplier(&events, 100), Some(0.2));
        assert_eq!(resolve_multiplier(&events, 101), None);
    }

    #[test]
    fn test_disabled_event_never_fires() {
        let mut lockdown = event("lockdown", Some(100), 0.2);
        lockdown.enabled = false;
        assert_eq!(resolve_multiplier(&[lockdown], 100), None);
    }

    #[test]
    fn test_unrecognized_kind_is_ignored() {
        let events = vec![
            event("quarantine-drones", Some(50), 0.0001),
            event("social-distancing", Some(50), 0.5),
        ];
        assert_eq!(resolve_multiplier(&events, 50), Some(0.5));
    }

    #[test]
    fn test_last_matching_event_wins() {
        let events = vec![
            event("social-distancing", Some(10), 0.5),
            event("lockdown", Some(10), 0.1),
        ];
        assert_eq!(resolve_multiplier(&events, 10), Some(0.1));
    }

    #[test]
    fn test_missing_trigger_never_matches() {
        let events = vec![event("lockdown", None, 0.2)];
        assert_eq!(resolve_multiplier(&events, 0), None);
    }

    #[test]
    fn test_invalid_multiplier_is_ignored() {
        let events = vec![event("lockdown", Some(5), -1.0)];
        assert_eq!(resolve_multiplier(&events, 5), None);
        let events = vec![event("lockdown", Some(5), f32::NAN)];
        assert_eq!(resolve_multiplier(&events, 5), None);
    }

    #[test]
    fn test_kind_parsing() {
        assert_eq!(
            EventKind::from_str("return_to_normal"),
            Ok(EventKind::ReturnToNormal)
        );
        assert!(EventKind::from_str("herd-immunity").is_err());
    }
}
