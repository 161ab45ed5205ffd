//! Ball controller
//!
//! Wires timing, classification, taps and bounces together. The host calls
//! `start` once, `update` every frame, `fixed_update` every physics step and
//! `on_trigger_enter` from its collision pass.

use glam::Vec2;

use super::classifier::TierClassifier;
use super::host::{FrameInput, Host};
use super::state::BallState;
use super::surface::Surface;
use crate::hud::Hud;
use crate::settings::{Settings, SettingsError};

/// A tap that landed on the ball
#[derive(Debug, Clone, PartialEq)]
pub struct TapHit {
    pub tier: usize,
    pub points: i64,
    /// World-space tap position
    pub world: Vec2,
}

/// Result of one surface contact
#[derive(Debug, Clone, PartialEq)]
pub struct Bounce {
    pub surface: Surface,
    /// Velocity written back to the host
    pub velocity: Vec2,
    /// The strong modifier was applied
    pub strong: bool,
}

/// Single-ball gameplay controller
#[derive(Debug, Clone)]
pub struct BallController {
    settings: Settings,
    classifier: TierClassifier,
    state: BallState,
    hud: Hud,
}

impl BallController {
    /// Validate settings and build an idle controller
    pub fn new(settings: Settings) -> Result<Self, SettingsError> {
        let classifier = TierClassifier::from_settings(&settings)?;
        let state = BallState::new(classifier.worst_tier());
        let hud = Hud::new(settings.debug_mode);
        Ok(Self {
            settings,
            classifier,
            state,
            hud,
        })
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn state(&self) -> &BallState {
        &self.state
    }

    pub fn hud(&self) -> &Hud {
        &self.hud
    }

    /// Status message of the current tier
    pub fn status(&self) -> &str {
        self.classifier.message(self.state.tier)
    }

    /// Place and launch the ball; `now` becomes the first timing baseline
    pub fn start(&mut self, host: &mut impl Host, now: f32) {
        host.set_gravity(Vec2::new(0.0, self.settings.gravity));
        host.set_position(self.settings.initial_position);

        if self.settings.initial_position.y > 0.0 {
            host.apply_velocity_change(self.settings.initial_velocity);
        }

        self.state.timing.restart(now);
        self.state
            .timing
            .set_expected(self.settings.initial_velocity.y, self.settings.gravity);
        self.sync_body(host);
        self.refresh_hud();

        log::info!(
            "Ball launched at {:?} with {:?}",
            self.settings.initial_position,
            self.settings.initial_velocity
        );
    }

    /// Drop all session state and launch again
    pub fn reset(&mut self, host: &mut impl Host, now: f32) {
        host.reset_velocity();
        self.state = BallState::new(self.classifier.worst_tier());
        self.hud = Hud::new(self.settings.debug_mode);
        self.start(host, now);
    }

    /// Per-frame step: clock, tap input, debug readouts
    pub fn update(
        &mut self,
        host: &mut impl Host,
        now: f32,
        input: &FrameInput,
    ) -> Option<TapHit> {
        self.state.timing.tick(now);
        self.sync_body(host);

        let hit = if input.fire_down {
            self.check_tap(host, input)
        } else {
            None
        };

        if self.settings.debug_mode {
            self.refresh_hud();
        }
        hit
    }

    /// Per-physics-step: reclassify the trajectory
    pub fn fixed_update(&mut self) {
        self.state.tier = self
            .classifier
            .classify(self.state.timing.time_difference());
    }

    /// Collision callback for the collider tagged `tag`
    pub fn on_trigger_enter(&mut self, host: &mut impl Host, tag: &str, now: f32) -> Bounce {
        let surface = Surface::from_tag(tag);
        let incoming = host.velocity();
        let rebound = surface.rebound(incoming, self.settings.min_rebound_speed);

        if surface == Surface::Floor {
            self.state.timing.restart(now);
            self.state.timing.set_expected(rebound.y, self.settings.gravity);
        }

        let strong = self.state.did_hit;
        let modifier = if strong {
            self.settings.strong_impact_modifier
        } else {
            self.settings.weak_impact_modifier
        };
        self.state.did_hit = false;

        let velocity = rebound * modifier;
        host.replace_velocity(velocity);

        log::debug!(
            "Trigger {}: {:?} -> {:?} ({})",
            surface,
            incoming,
            velocity,
            if strong { "strong" } else { "weak" }
        );

        self.state.last_surface = Some(surface.clone());
        self.sync_body(host);

        Bounce {
            surface,
            velocity,
            strong,
        }
    }

    /// Score and push the ball if the pointer lands within its collider
    fn check_tap(&mut self, host: &mut impl Host, input: &FrameInput) -> Option<TapHit> {
        let screen = input.pointer()?;
        let world = host.screen_to_world(screen, self.settings.tap_depth);
        let offset = world - host.position();

        log::debug!("Tap at world ({}, {})", world.x, world.y);

        if offset.length() > host.collider_radius() {
            return None;
        }

        self.state.did_hit = true;
        host.replace_velocity(-offset * self.settings.click_acceleration);

        let tier = self.state.tier;
        let points = self.classifier.points(tier);
        self.state.total_points += points;
        let status = self.status().to_owned();
        self.hud.set_earned(&status, points);
        self.hud.set_total(self.state.total_points);
        self.sync_body(host);

        log::info!(
            "Tap hit at tier {} for {} points (total {})",
            tier,
            points,
            self.state.total_points
        );

        Some(TapHit {
            tier,
            points,
            world,
        })
    }

    fn sync_body(&mut self, host: &impl Host) {
        self.state.pos = host.position();
        self.state.vel = host.velocity();
    }

    fn refresh_hud(&mut self) {
        let status = self.status().to_owned();
        self.hud.refresh(&self.state, &status);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Host double: identity camera, no integration
    #[derive(Debug, Default)]
    struct StubHost {
        gravity: Vec2,
        pos: Vec2,
        vel: Vec2,
        radius: f32,
    }

    impl Host for StubHost {
        fn set_gravity(&mut self, gravity: Vec2) {
            self.gravity = gravity;
        }
        fn position(&self) -> Vec2 {
            self.pos
        }
        fn set_position(&mut self, pos: Vec2) {
            self.pos = pos;
        }
        fn velocity(&self) -> Vec2 {
            self.vel
        }
        fn reset_velocity(&mut self) {
            self.vel = Vec2::ZERO;
        }
        fn apply_velocity_change(&mut self, delta: Vec2) {
            self.vel += delta;
        }
        fn collider_radius(&self) -> f32 {
            self.radius
        }
        fn screen_to_world(&self, screen: Vec2, _depth: f32) -> Vec2 {
            screen
        }
    }

    fn started(settings: Settings) -> (BallController, StubHost) {
        let mut host = StubHost {
            radius: 0.5,
            ..Default::default()
        };
        let mut controller = BallController::new(settings).expect("valid settings");
        controller.start(&mut host, 0.0);
        (controller, host)
    }

    #[test]
    fn test_new_rejects_zero_gravity() {
        let settings = Settings {
            gravity: 0.0,
            ..Default::default()
        };
        assert!(BallController::new(settings).is_err());
    }

    #[test]
    fn test_start_sets_gravity_and_launches() {
        let (controller, host) = started(Settings {
            initial_position: Vec2::new(1.0, 4.0),
            initial_velocity: Vec2::new(2.0, -9.81),
            ..Default::default()
        });
        assert_eq!(host.gravity, Vec2::new(0.0, -9.81));
        assert_eq!(host.pos, Vec2::new(1.0, 4.0));
        assert_eq!(host.vel, Vec2::new(2.0, -9.81));
        assert!((controller.state().timing.expected - 1.0).abs() < 1e-6);
        assert_eq!(controller.state().tier, 3);
    }

    #[test]
    fn test_start_on_ground_skips_launch_impulse() {
        let (_, host) = started(Settings {
            initial_position: Vec2::new(0.0, 0.0),
            initial_velocity: Vec2::new(0.0, 5.0),
            ..Default::default()
        });
        assert_eq!(host.vel, Vec2::ZERO);
    }

    #[test]
    fn test_slow_floor_bounce_doubles_upward() {
        let (mut controller, mut host) = started(Settings {
            weak_impact_modifier: 1.0,
            ..Default::default()
        });
        host.vel = Vec2::new(0.0, -0.4);

        let bounce = controller.on_trigger_enter(&mut host, "Floor", 2.0);
        assert_eq!(bounce.surface, Surface::Floor);
        assert!((host.vel.y - 0.8).abs() < 1e-6);
        assert_eq!(controller.state().timing.bounce_start, 2.0);
        assert!((controller.state().timing.expected - 0.8 / 9.81).abs() < 1e-6);
        assert_eq!(controller.state().last_surface_tag(), "Floor");
    }

    #[test]
    fn test_ceiling_and_wall_apply_weak_modifier() {
        let (mut controller, mut host) = started(Settings::default());
        host.vel = Vec2::new(2.0, 3.0);
        controller.on_trigger_enter(&mut host, "Ceiling", 1.0);
        assert!((host.vel - Vec2::new(2.0 * 0.97, -3.0 * 0.97)).length() < 1e-5);

        host.vel = Vec2::new(2.0, 3.0);
        controller.on_trigger_enter(&mut host, "Wall", 1.0);
        assert!((host.vel - Vec2::new(-2.0 * 0.97, 3.0 * 0.97)).length() < 1e-5);

        // non-floor contacts keep the timing baseline
        assert_eq!(controller.state().timing.bounce_start, 0.0);
    }

    #[test]
    fn test_strong_modifier_only_after_tap() {
        let (mut controller, mut host) = started(Settings::default());
        host.pos = Vec2::new(0.0, 3.0);
        host.vel = Vec2::new(0.0, -5.0);

        let hit = controller.update(&mut host, 0.5, &FrameInput::click(Vec2::new(0.0, 3.2)));
        assert!(hit.is_some());
        assert!(controller.state().did_hit);

        host.vel = Vec2::new(0.0, -5.0);
        let bounce = controller.on_trigger_enter(&mut host, "Floor", 0.6);
        assert!(bounce.strong);
        assert!((host.vel.y - 5.0 * 0.65).abs() < 1e-5);
        assert!(!controller.state().did_hit);

        host.vel = Vec2::new(0.0, -5.0);
        let bounce = controller.on_trigger_enter(&mut host, "Floor", 1.6);
        assert!(!bounce.strong);
        assert!((host.vel.y - 5.0 * 0.97).abs() < 1e-5);
    }

    #[test]
    fn test_tap_scores_current_tier_and_pushes_ball() {
        let (mut controller, mut host) = started(Settings::default());
        host.pos = Vec2::new(0.0, 0.0);
        host.vel = Vec2::new(0.0, -3.0);

        // expected 0, elapsed 0: tightest tier
        controller.fixed_update();
        assert_eq!(controller.state().tier, 0);

        let hit = controller
            .update(&mut host, 0.0, &FrameInput::click(Vec2::new(0.1, 0.2)))
            .expect("tap within radius");
        assert_eq!(hit.tier, 0);
        assert_eq!(hit.points, 500);
        assert_eq!(controller.state().total_points, 500);
        assert!((host.vel - Vec2::new(-3.0, -6.0)).length() < 1e-4);
        assert_eq!(controller.hud().total_points, "500");
        assert_eq!(controller.hud().earned_points, "MEGA fPRIME!\n+500");
    }

    #[test]
    fn test_worst_tier_tap_scores_negative() {
        let (mut controller, mut host) = started(Settings::default());
        controller.update(&mut host, 5.0, &FrameInput::default());
        controller.fixed_update();
        assert_eq!(controller.state().tier, 3);

        host.pos = Vec2::new(0.0, 2.0);
        let hit = controller
            .update(&mut host, 5.0, &FrameInput::click(Vec2::new(0.0, 2.0)))
            .expect("tap on center");
        assert_eq!(hit.points, -100);
        assert_eq!(controller.state().total_points, -100);
    }

    #[test]
    fn test_tap_outside_radius_changes_nothing() {
        let (mut controller, mut host) = started(Settings::default());
        host.pos = Vec2::new(0.0, 3.0);
        host.vel = Vec2::new(1.0, -2.0);
        controller.update(&mut host, 0.25, &FrameInput::default());
        let before = controller.state().clone();
        let hud_before = controller.hud().clone();

        let hit = controller.update(&mut host, 0.25, &FrameInput::click(Vec2::new(3.0, 3.0)));
        assert!(hit.is_none());
        assert_eq!(controller.state(), &before);
        assert_eq!(controller.hud(), &hud_before);
        assert_eq!(host.vel, Vec2::new(1.0, -2.0));
    }

    #[test]
    fn test_mobile_tap_scores_through_touch() {
        let (mut controller, mut host) = started(Settings::default());
        host.pos = Vec2::new(2.0, 1.0);
        controller.update(&mut host, 0.4, &FrameInput::default());
        controller.fixed_update();
        assert_eq!(controller.state().tier, 1);
        assert_eq!(controller.status(), "SUPER fPRIME!");

        let mut input = FrameInput::tap(Vec2::new(2.0, 1.3));
        // the mouse is ignored on mobile
        input.mouse = Vec2::new(50.0, 50.0);
        let hit = controller
            .update(&mut host, 0.4, &input)
            .expect("touch within radius");
        assert_eq!(hit.tier, 1);
        assert_eq!(hit.points, 300);
        assert!(controller.state().did_hit);
        assert_eq!(controller.state().total_points, 300);
        assert!((host.vel - Vec2::new(0.0, -9.0)).length() < 1e-4);
        assert_eq!(controller.hud().earned_points, "SUPER fPRIME!\n+300");
    }

    #[test]
    fn test_status_follows_tier() {
        let (mut controller, mut host) = started(Settings {
            debug_mode: true,
            ..Default::default()
        });
        assert_eq!(controller.status(), "");

        controller.fixed_update();
        assert_eq!(controller.status(), "MEGA fPRIME!");

        controller.update(&mut host, 0.7, &FrameInput::default());
        controller.fixed_update();
        assert_eq!(controller.status(), "fPRIME!");
        controller.update(&mut host, 0.7, &FrameInput::default());
        let debug = controller.hud().debug.as_ref().expect("debug readouts");
        assert_eq!(debug.status, "Status: fPRIME!");
    }

    #[test]
    fn test_mobile_without_touch_is_ignored() {
        let (mut controller, mut host) = started(Settings::default());
        let input = FrameInput {
            fire_down: true,
            platform: crate::sim::Platform::Mobile,
            touch: None,
            ..Default::default()
        };
        assert!(controller.update(&mut host, 0.1, &input).is_none());
    }

    #[test]
    fn test_debug_hud_refreshes_each_frame() {
        let (mut controller, mut host) = started(Settings {
            debug_mode: true,
            ..Default::default()
        });
        host.pos = Vec2::new(1.0, 2.0);
        controller.update(&mut host, 0.1, &FrameInput::default());
        let debug = controller.hud().debug.as_ref().expect("debug readouts");
        assert_eq!(debug.position, "Pos.: (1, 2)");

        let (controller, _) = started(Settings::default());
        assert!(controller.hud().debug.is_none());
    }

    #[test]
    fn test_reset_clears_session() {
        let (mut controller, mut host) = started(Settings::default());
        host.pos = Vec2::ZERO;
        controller.fixed_update();
        controller.update(&mut host, 0.0, &FrameInput::click(Vec2::ZERO));
        assert_eq!(controller.state().total_points, 500);

        controller.reset(&mut host, 10.0);
        assert_eq!(controller.state().total_points, 0);
        assert!(!controller.state().did_hit);
        assert_eq!(controller.state().timing.bounce_start, 10.0);
        assert_eq!(controller.hud().total_points, "0");
    }
}
