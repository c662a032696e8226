//! Authoritative actor registry: owns the camera state, wires mouse
//! events to bulk label recomputation, and attaches actors to the host
//! scene graph.
//!
//! The registry is append-only; no removal operation exists. All work is
//! synchronous on the event-loop thread and O(actor count) per pass.

mod spawn;

pub use spawn::spawn_actors;

use crate::actor::Actor;
use crate::anchor::AnchorPolicy;
use crate::camera::CameraState;
use crate::graph::{NodeHandle, SceneGraph};
use crate::input::{InputEvent, InteractionState, InteractionTracker, RecomputeGating};
use crate::options::Options;

/// An actor plus the host node its label was attached as.
struct ActorEntry {
    actor: Actor,
    label_node: NodeHandle,
}

/// The actor registry and event hub.
///
/// Owns the actor collection (insertion-ordered, append-only), the
/// camera state, and the interaction tracker. The host implements
/// [`SceneGraph`] and supplies two parent handles at construction: the
/// 3-D scene root and the 2-D overlay layer.
///
/// The host camera controller mutates [`camera_mut`](Self::camera_mut)
/// directly when the user rotates or zooms, then delivers the triggering
/// event via [`handle_event`](Self::handle_event); the recomputation
/// pass for event N therefore always observes the camera state as of
/// event N.
pub struct Scene<S: SceneGraph> {
    graph: S,
    root: NodeHandle,
    overlay: NodeHandle,
    camera: CameraState,
    policy: AnchorPolicy,
    tracker: InteractionTracker,
    entries: Vec<ActorEntry>,
}

impl<S: SceneGraph> Scene<S> {
    /// Create a scene with the gating variant the policy historically
    /// pairs with.
    #[must_use]
    pub fn new(
        graph: S,
        root: NodeHandle,
        overlay: NodeHandle,
        camera: CameraState,
        policy: AnchorPolicy,
    ) -> Self {
        Self::with_gating(graph, root, overlay, camera, policy, policy.default_gating())
    }

    /// Create a scene with an explicit gating variant, overriding the
    /// policy's historical pairing.
    #[must_use]
    pub fn with_gating(
        graph: S,
        root: NodeHandle,
        overlay: NodeHandle,
        camera: CameraState,
        policy: AnchorPolicy,
        gating: RecomputeGating,
    ) -> Self {
        Self {
            graph,
            root,
            overlay,
            camera,
            policy,
            tracker: InteractionTracker::new(gating),
            entries: Vec::new(),
        }
    }

    /// Create a scene configured from [`Options`]: camera framing from
    /// `options.camera.fov`, policy and gating from `options.anchor`.
    #[must_use]
    pub fn from_options(
        graph: S,
        root: NodeHandle,
        overlay: NodeHandle,
        options: &Options,
    ) -> Self {
        Self::with_gating(
            graph,
            root,
            overlay,
            CameraState::perspective(options.camera.fov),
            options.anchor.policy,
            options.anchor.gating(),
        )
    }

    /// Add an actor to the registry and attach it to the host graph.
    ///
    /// Computes the actor's initial label placement against the current
    /// camera state before the actor becomes visible, assigns the label
    /// a render order strictly greater than the actor's own, and
    /// attaches actor and label under the correct parents. Duplicate
    /// names are permitted; no deduplication is performed.
    ///
    /// Must not be called from within an event callback: a recomputation
    /// pass iterates the actor collection.
    pub fn add_actor(&mut self, mut actor: Actor) {
        actor.label_mut().render_order = actor.render_order + 1;
        if let Some(placement) = self.policy.place(actor.world_position, &self.camera) {
            actor.label_mut().placement = placement;
        }

        let node = self
            .graph
            .attach_actor(self.root, actor.world_transform(), actor.render_order);
        actor.set_parent(node);

        // Billboard labels inherit the actor's transform; screen-anchored
        // labels live in the overlay, outside the 3-D chain.
        let label_parent = match self.policy {
            AnchorPolicy::Billboard => node,
            AnchorPolicy::ScreenAnchor => self.overlay,
        };
        let label_node = self.graph.attach_label(label_parent, actor.label());

        log::debug!("attached actor '{}' with label node {label_node:?}", actor.name);
        self.entries.push(ActorEntry { actor, label_node });
    }

    /// Process one input event, recomputing every label placement if the
    /// event satisfies the gating rule.
    ///
    /// Returns whether a recomputation pass ran. Completes synchronously
    /// before returning control to the event loop.
    pub fn handle_event(&mut self, event: InputEvent) -> bool {
        let recompute = self.tracker.handle_event(event);
        if recompute {
            self.recompute_labels();
        }
        recompute
    }

    /// Recompute all label placements against the current camera state,
    /// in insertion order, pushing updates to the host.
    ///
    /// An actor whose projection is degenerate this pass keeps its last
    /// valid placement and receives no update.
    fn recompute_labels(&mut self) {
        log::debug!("recomputing {} label placements", self.entries.len());
        for entry in &mut self.entries {
            match self.policy.place(entry.actor.world_position, &self.camera) {
                Some(placement) => {
                    entry.actor.label_mut().placement = placement;
                    self.graph.update_label(entry.label_node, &placement);
                }
                None => {
                    log::trace!(
                        "degenerate projection for '{}'; keeping previous placement",
                        entry.actor.name
                    );
                }
            }
        }
    }

    /// Read access to the actors, in insertion order.
    pub fn actors(&self) -> impl Iterator<Item = &Actor> {
        self.entries.iter().map(|e| &e.actor)
    }

    /// Number of actors in the registry.
    #[must_use]
    pub fn actor_count(&self) -> usize {
        self.entries.len()
    }

    /// Read access to the camera state.
    #[must_use]
    pub fn camera(&self) -> &CameraState {
        &self.camera
    }

    /// Write access for the host camera controller. The core itself
    /// never mutates the camera.
    pub fn camera_mut(&mut self) -> &mut CameraState {
        &mut self.camera
    }

    /// The anchoring policy selected at construction.
    #[must_use]
    pub fn policy(&self) -> AnchorPolicy {
        self.policy
    }

    /// Current drag state of the interaction tracker.
    #[must_use]
    pub fn interaction_state(&self) -> InteractionState {
        self.tracker.state()
    }

    /// Read access to the host graph sink.
    #[must_use]
    pub fn graph(&self) -> &S {
        &self.graph
    }
}
