//! Trajectory classification into accuracy tiers
//!
//! Tier 0 is the tightest window around the predicted bounce time; the last
//! tier catches everything outside the loosest threshold.

use crate::consts::POINTS_PER_STEP;
use crate::settings::{Settings, SettingsError};

/// Ordered tier thresholds and their status messages
#[derive(Debug, Clone, PartialEq)]
pub struct TierClassifier {
    thresholds: Vec<f32>,
    messages: Vec<String>,
}

impl TierClassifier {
    /// Build from validated settings
    pub fn from_settings(settings: &Settings) -> Result<Self, SettingsError> {
        settings.validate()?;
        Ok(Self {
            thresholds: settings.tier_thresholds.clone(),
            messages: settings.tier_messages.clone(),
        })
    }

    /// Number of tiers
    #[inline]
    pub fn len(&self) -> usize {
        self.thresholds.len()
    }

    /// Always false for a validated classifier
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.thresholds.is_empty()
    }

    /// The loosest (lowest scoring) tier
    #[inline]
    pub fn worst_tier(&self) -> usize {
        self.thresholds.len().saturating_sub(1)
    }

    /// Largest tier whose threshold |time_difference| still reaches
    pub fn classify(&self, time_difference: f32) -> usize {
        let distance = time_difference.abs();
        if distance.is_nan() {
            return self.worst_tier();
        }
        // thresholds ascend, so the count of reached thresholds is one past the tier
        self.thresholds
            .iter()
            .take_while(|&&threshold| distance >= threshold)
            .count()
            .saturating_sub(1)
    }

    /// Status message for a tier (empty past the last tier)
    pub fn message(&self, tier: usize) -> &str {
        self.messages.get(tier).map(String::as_str).unwrap_or("")
    }

    /// Points for a tap scored at `tier`: `(2 * (N - 1 - tier) - 1) * 100`.
    ///
    /// The worst tier scores negative.
    pub fn points(&self, tier: usize) -> i64 {
        let steps_from_worst = self.worst_tier() as i64 - tier as i64;
        (2 * steps_from_worst - 1) * POINTS_PER_STEP
    }
}

impl Default for TierClassifier {
    fn default() -> Self {
        let settings = Settings::default();
        Self {
            thresholds: settings.tier_thresholds,
            messages: settings.tier_messages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_classify_default_windows() {
        let classifier = TierClassifier::default();
        assert_eq!(classifier.classify(0.0), 0);
        assert_eq!(classifier.classify(0.1), 0);
        assert_eq!(classifier.classify(-0.3), 1);
        assert_eq!(classifier.classify(0.6), 2);
        assert_eq!(classifier.classify(-0.99), 2);
        assert_eq!(classifier.classify(1.0), 3);
        assert_eq!(classifier.classify(42.0), 3);
        assert_eq!(classifier.classify(f32::NAN), 3);
    }

    #[test]
    fn test_points_per_tier() {
        let classifier = TierClassifier::default();
        assert_eq!(classifier.points(0), 500);
        assert_eq!(classifier.points(1), 300);
        assert_eq!(classifier.points(2), 100);
        assert_eq!(classifier.points(3), -100);
    }

    #[test]
    fn test_messages() {
        let classifier = TierClassifier::default();
        assert_eq!(classifier.message(0), "MEGA fPRIME!");
        assert_eq!(classifier.message(3), "");
        assert_eq!(classifier.message(9), "");
    }

    #[test]
    fn test_first_threshold_above_zero() {
        let settings = Settings {
            tier_thresholds: vec![0.1, 0.5],
            tier_messages: vec!["close".into(), "far".into()],
            ..Default::default()
        };
        let classifier = TierClassifier::from_settings(&settings).expect("valid");
        assert_eq!(classifier.classify(0.05), 0);
        assert_eq!(classifier.classify(0.2), 0);
        assert_eq!(classifier.classify(0.5), 1);
    }

    proptest! {
        #[test]
        fn classify_is_monotonic(a in -10.0f32..10.0, b in -10.0f32..10.0) {
            let classifier = TierClassifier::default();
            let (near, far) = if a.abs() <= b.abs() { (a, b) } else { (b, a) };
            prop_assert!(classifier.classify(near) <= classifier.classify(far));
        }

        #[test]
        fn classify_stays_in_range(diff in proptest::num::f32::ANY) {
            let classifier = TierClassifier::default();
            prop_assert!(classifier.classify(diff) < classifier.len());
        }
    }
}
