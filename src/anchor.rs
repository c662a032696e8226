//! Label anchoring policies.
//!
//! Two interchangeable strategies keep a label synchronized with the
//! camera: [`AnchorPolicy::Billboard`] rotates the label with the camera
//! inside the 3-D scene, [`AnchorPolicy::ScreenAnchor`] projects it into
//! the host's 2-D overlay layer. Both are pure functions of the actor's
//! world position and the current camera state.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::actor::LabelPlacement;
use crate::camera::CameraState;
use crate::input::RecomputeGating;
use crate::projection;

/// Vertical world-space lift applied to billboard labels so they float
/// above the actor's origin.
pub const LABEL_LIFT: f32 = 0.25;

/// Pixel offset applied to screen-anchored labels after projection.
pub const SCREEN_OFFSET: Vec2 = Vec2::new(0.0, -30.0);

/// The anchoring strategy a scene applies to every label, selected once
/// at scene construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnchorPolicy {
    /// Label lives in the 3-D scene and adopts the camera's rotation so
    /// it always faces the viewer.
    #[default]
    Billboard,
    /// Label lives in the host's 2-D overlay, placed by perspective
    /// projection of the actor's position.
    ScreenAnchor,
}

impl AnchorPolicy {
    /// Compute the label placement for an actor at `world_position` under
    /// this policy.
    ///
    /// Returns `None` when the screen-anchor projection is degenerate
    /// (actor at the camera's eye plane, or a NaN-carrying transform);
    /// the caller keeps the label's previous placement for that pass.
    /// Idempotent: unchanged inputs yield an identical placement.
    #[must_use]
    pub fn place(self, world_position: Vec3, camera: &CameraState) -> Option<LabelPlacement> {
        match self {
            Self::Billboard => Some(billboard(camera)),
            Self::ScreenAnchor => screen_anchor(world_position, camera),
        }
    }

    /// The event-gating variant this policy historically pairs with.
    ///
    /// Used as the default when the configuration does not pick a gating
    /// explicitly.
    #[must_use]
    pub fn default_gating(self) -> RecomputeGating {
        match self {
            Self::Billboard => RecomputeGating::PrimaryDrag,
            Self::ScreenAnchor => RecomputeGating::AnyButtonOrWheel,
        }
    }
}

/// Orient the label with the camera and counter-translate it so it sits a
/// fixed lift above the actor's origin regardless of the orbit pivot.
fn billboard(camera: &CameraState) -> LabelPlacement {
    let mut offset = -camera.center;
    offset.z += LABEL_LIFT;
    LabelPlacement::World {
        orientation: camera.rotation_part(),
        offset,
    }
}

/// Project the actor into overlay space and nudge the label up by a fixed
/// pixel offset so it clears the actor's silhouette.
fn screen_anchor(world_position: Vec3, camera: &CameraState) -> Option<LabelPlacement> {
    let pos = projection::project(world_position, camera.transform)?;
    Some(LabelPlacement::Screen {
        pos: pos + SCREEN_OFFSET,
    })
}
