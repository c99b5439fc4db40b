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

//! Sequencing and parameter-blending engine for a scripted talking-figure
//! performance.
//!
//! Oration drives a rigged talking figure through a fixed narrative
//! timeline: a three-image intro, a ~126-second scripted performance with
//! speech and emotion beats, and a TV-static outro. The engine owns the
//! phase state machine, the play/pause clock, the time-indexed behavior
//! tables and the per-frame exponential smoothing; rendering is left to a
//! [`rig::RigAdapter`] fed one immutable snapshot per frame.
//!
//! # Key entry points
//!
//! - [`engine::PerformanceEngine`] - the sequencing engine; `tick(now)` once
//!   per display refresh
//! - [`engine::EngineCommand`] - the whole operator-facing control surface
//! - [`script::Script`] - the narrative period tables
//! - [`options::Options`] - runtime tuning (tempo, smoothing, camera)
//! - [`rig::HeadRig`] - reference rig turning snapshots into node transforms
//!
//! # Architecture
//!
//! Single-threaded and frame-driven: one `tick` per display refresh, no
//! blocking I/O, no locks. Each tick the clock advances, the phase machine
//! checks transitions, the behavior resolver samples the script, the blender
//! updates smoothed values, and the resulting snapshot is handed out.
//! Pausing is a logical flag — hosts keep ticking so camera and
//! pointer-follow smoothing stay alive while the performance clock is
//! frozen.

pub mod audio;
pub mod blend;
pub mod clock;
pub mod engine;
pub mod error;
pub mod input;
pub mod options;
pub mod overlay;
pub mod phase;
pub mod rig;
pub mod script;
