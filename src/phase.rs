//! Macro-phase state machine: intro → main → outro.
//!
//! Transitions are one-directional. The intro states share one sub-clock
//! anchored at mount (thresholds 2 s / 4 s / 6 s); the outro states share
//! another anchored at main exit (thresholds 0.5 s / 2.5 s). The main phase
//! has no sub-clock of its own — its exit is driven by the performance
//! clock, which the engine consults and feeds in as `main_complete`.

use web_time::Instant;

/// Intro sub-clock threshold: first image holds until here.
pub const INTRO_SHOW_END: f64 = 2.0;
/// Intro sub-clock threshold: crossfade to the middle image ends here.
pub const INTRO_MIDDLE_END: f64 = 4.0;
/// Intro sub-clock threshold: the intro is over and the performance begins.
pub const INTRO_END: f64 = 6.0;
/// Outro sub-clock threshold: plain white static holds until here.
pub const OUTRO_WHITE_END: f64 = 0.5;
/// Outro sub-clock threshold: the green tint completes here.
pub const OUTRO_GREEN_END: f64 = 2.5;

/// Macro-stage of the overall presentation.
///
/// Ordering follows presentation order, so later phases compare greater —
/// the tracker relies on this to stay one-directional.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Phase {
    /// First intro image, fully opaque.
    IntroShowStart,
    /// Crossfading toward the middle intro image.
    IntroFadeMiddle,
    /// Crossfading toward the final intro image.
    IntroFadeEnd,
    /// The scripted performance.
    Main,
    /// Plain white TV static.
    OutroStaticWhite,
    /// TV static desaturating toward green.
    OutroStaticGreen,
    /// Terminal end screen.
    OutroEnd,
}

impl Phase {
    /// Whether this is one of the intro stages.
    pub fn is_intro(self) -> bool {
        self < Phase::Main
    }

    /// Whether this is one of the outro stages.
    pub fn is_outro(self) -> bool {
        self > Phase::Main
    }

    /// Whether no further transition is possible.
    pub fn is_terminal(self) -> bool {
        self == Phase::OutroEnd
    }
}

/// Transition notifications for external collaborators (audio).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseEvent {
    /// The intro finished; the performance clock and audio should start.
    PerformanceStarted,
    /// The performance finished; audio should pause.
    PerformanceEnded,
}

/// Owns the current [`Phase`] and the intro/outro sub-clock.
#[derive(Debug, Clone, Copy)]
pub struct PhaseTracker {
    phase: Phase,
    /// Anchor of the active sub-clock (mount/reset for intro, main exit
    /// for outro).
    anchor: Instant,
}

impl PhaseTracker {
    /// Tracker at mount: `IntroShowStart`, sub-clock anchored at `now`.
    pub fn new(now: Instant) -> Self {
        Self {
            phase: Phase::IntroShowStart,
            anchor: now,
        }
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Seconds on the current intro/outro sub-clock.
    pub fn phase_elapsed(&self, now: Instant) -> f64 {
        now.saturating_duration_since(self.anchor).as_secs_f64()
    }

    /// Advance the machine one frame.
    ///
    /// `main_complete` is the engine's verdict on whether the performance is
    /// over (elapsed past the script's end *and* the clock running); it is
    /// ignored outside the main phase. A large frame gap may cross several
    /// thresholds at once — the tracker lands directly on the right state
    /// and still reports the boundary event exactly once.
    pub fn advance(
        &mut self,
        now: Instant,
        main_complete: bool,
    ) -> Option<PhaseEvent> {
        match self.phase {
            p if p.is_intro() => {
                let next = intro_phase_at(self.phase_elapsed(now));
                if next > self.phase {
                    self.phase = next;
                }
                (self.phase == Phase::Main)
                    .then_some(PhaseEvent::PerformanceStarted)
            }
            Phase::Main => {
                if main_complete {
                    self.phase = Phase::OutroStaticWhite;
                    self.anchor = now;
                    Some(PhaseEvent::PerformanceEnded)
                } else {
                    None
                }
            }
            Phase::OutroEnd => None,
            _ => {
                let next = outro_phase_at(self.phase_elapsed(now));
                if next > self.phase {
                    self.phase = next;
                }
                None
            }
        }
    }

    /// Unconditionally re-enter `IntroShowStart` with a fresh sub-clock.
    pub fn reset(&mut self, now: Instant) {
        self.phase = Phase::IntroShowStart;
        self.anchor = now;
    }
}

/// Intro stage for a given intro sub-clock reading.
fn intro_phase_at(elapsed: f64) -> Phase {
    if elapsed < INTRO_SHOW_END {
        Phase::IntroShowStart
    } else if elapsed < INTRO_MIDDLE_END {
        Phase::IntroFadeMiddle
    } else if elapsed < INTRO_END {
        Phase::IntroFadeEnd
    } else {
        Phase::Main
    }
}

/// Outro stage for a given outro sub-clock reading.
fn outro_phase_at(elapsed: f64) -> Phase {
    if elapsed < OUTRO_WHITE_END {
        Phase::OutroStaticWhite
    } else if elapsed < OUTRO_GREEN_END {
        Phase::OutroStaticGreen
    } else {
        Phase::OutroEnd
    }
}
