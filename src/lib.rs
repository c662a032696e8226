// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Camera-synchronized floating-label anchoring for 3D actor scenes.
//!
//! Nameplate keeps each actor's text label legible and correctly placed
//! while the user orbits and zooms the camera. Labels follow one of two
//! anchoring strategies: **billboard** (the label adopts the camera's
//! rotation so it always faces the viewer) or **screen anchor** (the
//! label is projected into 2-D overlay coordinates via perspective
//! divide, decoupled from scene rotation).
//!
//! # Key entry points
//!
//! - [`scene::Scene`] - the actor registry that wires mouse events to
//!   bulk label recomputation
//! - [`anchor::AnchorPolicy`] - the anchoring strategy, selected once at
//!   scene construction
//! - [`graph::SceneGraph`] - the narrow boundary the host rendering
//!   engine implements
//! - [`options::Options`] - runtime configuration (window, camera,
//!   anchoring, spawning)
//!
//! # Architecture
//!
//! The host event loop feeds [`input::InputEvent`]s into the scene one at
//! a time. An interaction state machine decides which events trigger a
//! recomputation pass; when one fires, the scene walks its actors in
//! insertion order, recomputes every label placement against the current
//! camera state, and pushes the results back to the host through
//! [`graph::SceneGraph`]. Everything runs synchronously on the event-loop
//! thread; no work is deferred past the callback.

pub mod actor;
pub mod anchor;
pub mod camera;
pub mod error;
pub mod graph;
pub mod input;
pub mod options;
pub mod projection;
pub mod scene;
