//! On-screen text readouts
//!
//! Six debug lines that exist only in debug mode, plus the score texts that
//! are always shown. The host copies these strings into its own text objects.

use crate::sim::BallState;

/// Seconds as `SS.ss` plus an `s` suffix, wrapped to a minute with a leading zero below ten
pub fn formatted_time(seconds: f32) -> String {
    let wrapped = seconds % 60.0;
    if seconds < 10.0 {
        format!("0{:.2}s", wrapped)
    } else {
        format!("{:.2}s", wrapped)
    }
}

/// Debug-only readouts
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DebugReadouts {
    pub position: String,
    pub velocity: String,
    pub timing: String,
    pub collision: String,
    pub status: String,
    pub hit: String,
}

/// All text the controller publishes
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Hud {
    /// `None` outside debug mode (readouts removed)
    pub debug: Option<DebugReadouts>,
    /// Cumulative score
    pub total_points: String,
    /// Status message and points of the last scoring tap
    pub earned_points: String,
}

impl Hud {
    pub fn new(debug_mode: bool) -> Self {
        Self {
            debug: debug_mode.then(DebugReadouts::default),
            total_points: "0".to_string(),
            earned_points: String::new(),
        }
    }

    /// Rewrite the debug readouts from live state; no-op outside debug mode
    pub fn refresh(&mut self, state: &BallState, status: &str) {
        let Some(debug) = self.debug.as_mut() else {
            return;
        };

        *debug = DebugReadouts {
            position: format!("Pos.: ({}, {})", state.pos.x, state.pos.y),
            velocity: format!("Vel.: ({}, {})", state.vel.x, state.vel.y),
            timing: format!(
                "Ex.T.: {} | Ac.T.: {}",
                formatted_time(state.timing.expected),
                formatted_time(state.timing.elapsed)
            ),
            collision: format!("Last Collider Hit: {}", state.last_surface_tag()),
            status: format!("Status: {}", status),
            hit: format!("Hit: {}", state.did_hit),
        };
    }

    /// Publish a scoring tap
    pub fn set_earned(&mut self, status: &str, points: i64) {
        self.earned_points = format!("{}\n+{}", status, points);
    }

    pub fn set_total(&mut self, total: i64) {
        self.total_points = total.to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formatted_time() {
        assert_eq!(formatted_time(1.5), "01.50s");
        assert_eq!(formatted_time(12.25), "12.25s");
        assert_eq!(formatted_time(75.0), "15.00s");
    }

    #[test]
    fn test_refresh_outside_debug_keeps_readouts_removed() {
        let mut hud = Hud::new(false);
        hud.refresh(&BallState::new(3), "fPRIME!");
        assert!(hud.debug.is_none());
    }

    #[test]
    fn test_refresh_reports_state() {
        let mut hud = Hud::new(true);
        let mut state = BallState::new(3);
        state.did_hit = true;
        hud.refresh(&state, "fPRIME!");

        let debug = hud.debug.expect("debug readouts");
        assert_eq!(debug.collision, "Last Collider Hit: NULL");
        assert_eq!(debug.status, "Status: fPRIME!");
        assert_eq!(debug.hit, "Hit: true");
    }

    #[test]
    fn test_earned_text() {
        let mut hud = Hud::new(false);
        hud.set_earned("MEGA fPRIME!", 500);
        assert_eq!(hud.earned_points, "MEGA fPRIME!\n+500");
    }
}
