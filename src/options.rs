//! Runtime configuration with TOML preset support.
//!
//! All process-level settings (window framing, camera field of view,
//! anchoring policy, spawn seed) are consolidated here. Options
//! serialize to/from TOML; every sub-struct uses `#[serde(default)]` so
//! partial files (e.g. only overriding `[anchor]`) work correctly.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::actor::Color;
use crate::anchor::AnchorPolicy;
use crate::error::NameplateError;
use crate::input::RecomputeGating;

/// Top-level options container.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Options {
    /// Host window parameters.
    pub window: WindowOptions,
    /// Camera framing parameters.
    pub camera: CameraOptions,
    /// Label anchoring strategy selection.
    pub anchor: AnchorOptions,
    /// Deterministic actor spawning parameters.
    pub spawn: SpawnOptions,
}

/// Host window parameters. Not consumed by the core; documented
/// configuration for the hosting application.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WindowOptions {
    /// Window width in pixels.
    pub width: u32,
    /// Window height in pixels.
    pub height: u32,
    /// Background clear color.
    pub background: Color,
}

impl Default for WindowOptions {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            background: [1.0, 1.0, 1.0, 1.0],
        }
    }
}

/// Camera framing parameters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct CameraOptions {
    /// Vertical field of view in degrees. The default 0 selects
    /// orthographic-like framing; 60 the reference perspective framing.
    pub fov: f32,
}

/// Label anchoring selection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct AnchorOptions {
    /// Anchoring strategy applied to every label.
    pub policy: AnchorPolicy,
    /// Recomputation gating override. When absent, the policy's
    /// historical pairing applies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gating: Option<RecomputeGating>,
}

impl AnchorOptions {
    /// The effective gating: the explicit override if set, otherwise the
    /// policy's historical pairing.
    #[must_use]
    pub fn gating(&self) -> RecomputeGating {
        self.gating.unwrap_or_else(|| self.policy.default_gating())
    }
}

/// Deterministic actor spawning parameters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SpawnOptions {
    /// Seed string hashed into the position RNG; the same string always
    /// reproduces the same layout.
    pub seed: String,
    /// Number of actors to spawn.
    pub actor_count: usize,
    /// Uniform scale applied to each spawned actor.
    pub actor_scale: f32,
}

impl Default for SpawnOptions {
    fn default() -> Self {
        Self {
            seed: "vispy is life".into(),
            actor_count: 5,
            actor_scale: 0.1,
        }
    }
}

impl Options {
    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, NameplateError> {
        let content = std::fs::read_to_string(path).map_err(NameplateError::Io)?;
        let options = toml::from_str(&content)
            .map_err(|e| NameplateError::OptionsParse(e.to_string()))?;
        log::info!("loaded options from {}", path.display());
        Ok(options)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), NameplateError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| NameplateError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(NameplateError::Io)?;
        }
        std::fs::write(path, content).map_err(NameplateError::Io)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r#"
[anchor]
policy = "screen_anchor"
"#;
        let opts: Options = toml::from_str(toml_str).unwrap();
        assert_eq!(opts.anchor.policy, AnchorPolicy::ScreenAnchor);
        // Everything else should be default
        assert_eq!(opts.spawn.seed, "vispy is life");
        assert_eq!(opts.spawn.actor_count, 5);
        assert_eq!(opts.camera.fov, 0.0);
        assert_eq!(opts.window.width, 800);
    }

    #[test]
    fn gating_falls_back_to_the_policy_pairing() {
        let mut opts = AnchorOptions::default();
        assert_eq!(opts.gating(), RecomputeGating::PrimaryDrag);

        opts.policy = AnchorPolicy::ScreenAnchor;
        assert_eq!(opts.gating(), RecomputeGating::AnyButtonOrWheel);

        opts.gating = Some(RecomputeGating::PrimaryDrag);
        assert_eq!(opts.gating(), RecomputeGating::PrimaryDrag);
    }

    #[test]
    fn explicit_gating_survives_toml() {
        let toml_str = r#"
[anchor]
policy = "billboard"
gating = "any_button_or_wheel"
"#;
        let opts: Options = toml::from_str(toml_str).unwrap();
        assert_eq!(opts.anchor.gating(), RecomputeGating::AnyButtonOrWheel);
    }
}
