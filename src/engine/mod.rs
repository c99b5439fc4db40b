//! The performance engine: one explicit instance owning the script, the
//! clocks, the phase machine, and the blend state.
//!
//! Hosts drive the engine with one [`tick`](PerformanceEngine::tick) per
//! display refresh and render whatever the returned snapshot says. There is
//! no ambient/global state: dropping the engine drops the whole
//! performance. Pausing is a logical flag — hosts keep ticking every frame
//! so the camera and pointer-follow smoothing keep converging.
//!
//! The engine holds no callbacks and is inert between ticks; at teardown
//! the host must stop its own frame loop and deregister the pointer/resize
//! listeners it wired up, then drop the engine.

mod command;
mod snapshot;

use std::collections::VecDeque;

pub use command::EngineCommand;
use glam::Vec2;
pub use snapshot::FrameSnapshot;
use web_time::Instant;

use crate::audio::{AudioError, AudioSink};
use crate::blend::{zoom_target, BlendState};
use crate::clock::PerformanceClock;
use crate::options::Options;
use crate::phase::{Phase, PhaseEvent, PhaseTracker};
use crate::script::Script;

/// Sequencing engine for one scripted performance.
pub struct PerformanceEngine {
    script: Script,
    options: Options,
    clock: PerformanceClock,
    phases: PhaseTracker,
    blend: BlendState,
    pointer: Vec2,
    audio: Option<Box<dyn AudioSink>>,
    pending_events: VecDeque<PhaseEvent>,
}

impl PerformanceEngine {
    /// Engine for `script`, mounted at `now` (the intro begins immediately).
    pub fn new(script: Script, options: Options, now: Instant) -> Self {
        let blend = BlendState::new(&options);
        Self {
            script,
            options,
            clock: PerformanceClock::new(),
            phases: PhaseTracker::new(now),
            blend,
            pointer: Vec2::ZERO,
            audio: None,
            pending_events: VecDeque::new(),
        }
    }

    /// Engine for the built-in narrative with the given options.
    pub fn with_standard_script(options: Options, now: Instant) -> Self {
        Self::new(Script::standard(), options, now)
    }

    /// Attach the external audio player. The engine pauses/rewinds it on
    /// phase transitions; playback failures are logged and never interrupt
    /// the visual timeline.
    pub fn set_audio_sink(&mut self, sink: Box<dyn AudioSink>) {
        self.audio = Some(sink);
    }

    /// Current engine options.
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Replace options, applying new smoothing coefficients without
    /// disturbing the currently displayed values.
    pub fn set_options(&mut self, new: Options) {
        self.options = new;
        self.blend.set_coefficients(&self.options.smoothing);
    }

    /// Current macro-phase.
    pub fn phase(&self) -> Phase {
        self.phases.phase()
    }

    /// Seconds on the current intro/outro sub-clock (drives the overlay
    /// helpers in [`crate::overlay`]).
    pub fn phase_elapsed(&self, now: Instant) -> f64 {
        self.phases.phase_elapsed(now)
    }

    /// Whether the performance clock is advancing.
    pub fn is_playing(&self) -> bool {
        self.clock.is_running()
    }

    /// Advance the engine one frame and produce the snapshot to render.
    pub fn tick(&mut self, now: Instant) -> FrameSnapshot {
        let main_complete = self.phases.phase() == Phase::Main
            && self.clock.is_running()
            && self.clock.elapsed(now) >= self.script.main_end();

        if let Some(event) = self.phases.advance(now, main_complete) {
            self.apply_event(event, now);
            self.pending_events.push_back(event);
        }

        if self.phases.phase() == Phase::Main {
            let elapsed = self.clock.elapsed(now);

            if self.clock.is_running() {
                let sample = self.script.sample(elapsed);
                self.blend.step_performance(
                    &sample,
                    self.options.playback.frame_step,
                );
            }

            // Camera and pointer-follow converge even while paused.
            let target = zoom_target(elapsed as f32, &self.options.camera);
            self.blend.step_ambient(
                target,
                self.pointer,
                &self.options.smoothing,
            );
        }

        self.snapshot(now)
    }

    /// Next phase transition event, if any occurred since the last poll.
    ///
    /// Hosts without an [`AudioSink`] can react to these directly.
    pub fn poll_event(&mut self) -> Option<PhaseEvent> {
        self.pending_events.pop_front()
    }

    /// Execute an operator command.
    pub fn execute(&mut self, command: EngineCommand, now: Instant) {
        match command {
            EngineCommand::TogglePause => {
                if self.phases.phase() == Phase::Main {
                    self.clock.toggle(now);
                    log::info!(
                        "performance {}",
                        if self.clock.is_running() {
                            "resumed"
                        } else {
                            "paused"
                        }
                    );
                } else {
                    log::debug!("pause toggle ignored outside the main phase");
                }
            }
            EngineCommand::Reset => {
                self.phases.reset(now);
                self.clock.reset();
                self.blend.reset(&self.options);
                self.pending_events.clear();
                self.with_audio(|a| a.pause().and_then(|()| a.rewind()));
                log::info!("presentation reset");
            }
            EngineCommand::PointerMoved { position } => {
                self.pointer =
                    position.clamp(Vec2::splat(-1.0), Vec2::splat(1.0));
            }
        }
    }

    fn apply_event(&mut self, event: PhaseEvent, now: Instant) {
        match event {
            PhaseEvent::PerformanceStarted => {
                self.clock.start(now);
                log::info!("intro complete, performance started");
                self.with_audio(|a| a.play());
            }
            PhaseEvent::PerformanceEnded => {
                log::info!(
                    "performance ended at {:.2}s",
                    self.clock.elapsed(now)
                );
                self.with_audio(|a| a.pause());
            }
        }
    }

    /// Run an audio side effect, logging failure instead of propagating —
    /// a silent performance still keeps perfect time.
    fn with_audio(
        &mut self,
        f: impl FnOnce(&mut dyn AudioSink) -> Result<(), AudioError>,
    ) {
        if let Some(sink) = self.audio.as_deref_mut() {
            if let Err(e) = f(sink) {
                log::warn!("{e}; continuing without audio");
            }
        }
    }

    fn snapshot(&self, now: Instant) -> FrameSnapshot {
        FrameSnapshot {
            jaw_open: self.blend.jaw_open(),
            angry_blend: self.blend.angry_blend(),
            grin_blend: self.blend.grin_blend(),
            camera_zoom: self.blend.camera_zoom(),
            head_yaw: self.blend.head_yaw(),
            head_pitch: self.blend.head_pitch(),
            phase: self.blend.phase_acc(),
            elapsed_seconds: self.clock.elapsed(now),
            phase_state: self.phases.phase(),
        }
    }
}

impl std::fmt::Debug for PerformanceEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PerformanceEngine")
            .field("phase", &self.phases.phase())
            .field("playing", &self.clock.is_running())
            .field("has_audio", &self.audio.is_some())
            .finish_non_exhaustive()
    }
}
