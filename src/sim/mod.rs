//! Ball simulation module
//!
//! All gameplay logic lives here. Nothing in this module integrates motion,
//! reads the clock or polls devices:
//! - Host time, input and rigid-body state come in through [`Host`] and [`FrameInput`]
//! - Configuration is validated once, up front
//! - No rendering or platform dependencies

pub mod arena;
pub mod classifier;
pub mod controller;
pub mod host;
pub mod state;
pub mod surface;
pub mod timing;

pub use arena::{ArenaBounds, BoxArena};
pub use classifier::TierClassifier;
pub use controller::{BallController, Bounce, TapHit};
pub use host::{FrameInput, Host, Platform};
pub use state::{BallState, NO_SURFACE_TAG};
pub use surface::Surface;
pub use timing::{TimingEstimator, expected_duration};
