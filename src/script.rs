//! The narrative script: time-indexed behavior tables.
//!
//! A [`Script`] holds the sorted interval tables that decide what the figure
//! is doing at any instant of the performance — when it is talking, when the
//! brows go angry, when the grin appears — plus the piecewise-constant
//! cadence steps that modulate talking speed. The tables are static data;
//! every lookup is a pure function of elapsed time.

use std::fmt;

/// A closed time range during which a behavior is active.
///
/// Bounds are inclusive on both ends. An interval may be open-ended
/// (active through the end of the performance).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    start: f64,
    end: f64,
}

impl Interval {
    /// Bounded interval. Fails if `start > end` or either bound is negative.
    pub fn new(start: f64, end: f64) -> Result<Self, ScriptError> {
        if start < 0.0 || end < 0.0 || start > end {
            return Err(ScriptError::InvalidInterval { start, end });
        }
        Ok(Self { start, end })
    }

    /// Interval with no upper bound — active from `start` onward.
    pub fn open(start: f64) -> Self {
        Self {
            start,
            end: f64::INFINITY,
        }
    }

    /// Whether `t` falls inside the interval (inclusive bounds).
    #[inline]
    pub fn contains(&self, t: f64) -> bool {
        t >= self.start && t <= self.end
    }

    /// Lower bound in seconds.
    pub fn start(&self) -> f64 {
        self.start
    }

    /// Upper bound in seconds (`f64::INFINITY` for open intervals).
    pub fn end(&self) -> f64 {
        self.end
    }
}

/// One step of the talking cadence: from `at` seconds onward, the jaw
/// oscillates at `speed` until the next step takes over.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CadenceStep {
    /// Time the step takes effect.
    pub at: f64,
    /// Speech oscillation speed multiplier.
    pub speed: f64,
}

/// Behavior tracks a script can be queried for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Track {
    /// Jaw/mouth speech motion.
    Talking,
    /// Angry eyebrow set.
    Angry,
    /// Toothy grin.
    Grin,
}

/// Raw behavior facts sampled from the script at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BehaviorSample {
    /// Inside a talking interval.
    pub talking: bool,
    /// Inside an angry interval.
    pub angry: bool,
    /// Inside a grin interval.
    pub grinning: bool,
    /// Current talking cadence speed.
    pub cadence: f64,
}

/// Script construction errors. Malformed tables are a programmer error and
/// fail fast here rather than being tolerated at query time.
#[derive(Debug, Clone, PartialEq)]
pub enum ScriptError {
    /// Interval with `start > end` or a negative bound.
    InvalidInterval {
        /// Offending lower bound.
        start: f64,
        /// Offending upper bound.
        end: f64,
    },
    /// Cadence table is empty.
    EmptyCadence,
    /// Cadence steps not sorted ascending by time.
    UnsortedCadence {
        /// Index of the out-of-order step.
        index: usize,
    },
}

impl fmt::Display for ScriptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInterval { start, end } => {
                write!(f, "invalid interval [{start}, {end}]")
            }
            Self::EmptyCadence => write!(f, "cadence table is empty"),
            Self::UnsortedCadence { index } => {
                write!(f, "cadence step {index} is out of order")
            }
        }
    }
}

impl std::error::Error for ScriptError {}

/// Immutable period table for one performance.
///
/// Intervals within a track may overlap (overlap is a union) and need not be
/// sorted; the tables are small enough that linear scans are fine.
#[derive(Debug, Clone)]
pub struct Script {
    talking: Vec<Interval>,
    angry: Vec<Interval>,
    grin: Vec<Interval>,
    cadence: Vec<CadenceStep>,
    main_end: f64,
}

impl Script {
    /// Build a script from raw tables, validating every interval and the
    /// cadence ordering.
    pub fn new(
        talking: Vec<Interval>,
        angry: Vec<Interval>,
        grin: Vec<Interval>,
        cadence: Vec<CadenceStep>,
    ) -> Result<Self, ScriptError> {
        if cadence.is_empty() {
            return Err(ScriptError::EmptyCadence);
        }
        for (i, pair) in cadence.windows(2).enumerate() {
            if pair[1].at < pair[0].at {
                return Err(ScriptError::UnsortedCadence { index: i + 1 });
            }
        }

        // The performance ends when the last talking interval does.
        let main_end = talking
            .iter()
            .map(Interval::end)
            .filter(|e| e.is_finite())
            .fold(0.0f64, f64::max);

        Ok(Self {
            talking,
            angry,
            grin,
            cadence,
            main_end,
        })
    }

    /// The hard-coded narrative this engine exists to perform.
    ///
    /// The tables are pre-validated static data (see the construction test
    /// below), so this constructor is infallible.
    pub fn standard() -> Self {
        let intervals = |pairs: &[(f64, f64)]| -> Vec<Interval> {
            pairs
                .iter()
                .map(|&(start, end)| Interval { start, end })
                .collect()
        };

        let cadence = STANDARD_CADENCE
            .iter()
            .map(|&(at, speed)| CadenceStep { at, speed })
            .collect();

        Self {
            main_end: 126.25,
            talking: intervals(STANDARD_TALKING),
            angry: intervals(STANDARD_ANGRY),
            grin: intervals(STANDARD_GRIN),
            cadence,
        }
    }

    /// Whether a track is active at time `t` (inclusive bounds; overlapping
    /// intervals union).
    pub fn is_active(&self, track: Track, t: f64) -> bool {
        self.intervals(track).iter().any(|iv| iv.contains(t))
    }

    /// Talking cadence at time `t`: the speed of the last step at or before
    /// `t`. Queries before the first step get the first step's speed;
    /// queries past the last step hold its value forever.
    pub fn cadence_at(&self, t: f64) -> f64 {
        let mut speed = self.cadence[0].speed;
        for step in &self.cadence {
            if t >= step.at {
                speed = step.speed;
            } else {
                break;
            }
        }
        speed
    }

    /// Sample all behavior facts at once.
    pub fn sample(&self, t: f64) -> BehaviorSample {
        BehaviorSample {
            talking: self.is_active(Track::Talking, t),
            angry: self.is_active(Track::Angry, t),
            grinning: self.is_active(Track::Grin, t),
            cadence: self.cadence_at(t),
        }
    }

    /// End of the performance: the close of the last talking interval.
    pub fn main_end(&self) -> f64 {
        self.main_end
    }

    fn intervals(&self, track: Track) -> &[Interval] {
        match track {
            Track::Talking => &self.talking,
            Track::Angry => &self.angry,
            Track::Grin => &self.grin,
        }
    }
}

// Narrative tables. Entries meant to stay active through the end of the
// performance carry an unbounded end.
const STANDARD_TALKING: &[(f64, f64)] = &[
    (1.5, 3.0),
    (3.75, 6.5),
    (7.5, 14.5),
    (15.75, 27.5),
    (28.5, 33.0),
    (34.75, 36.75),
    (37.25, 42.0),
    (43.0, 44.0),
    (45.5, 58.5),
    (59.75, 63.5),
    (65.0, 74.5),
    (75.25, 76.5),
    (77.5, 78.25),
    (78.6, 82.5),
    (84.0, 85.5),
    (86.5, 87.5),
    (88.8, 91.4),
    (93.2, 93.7),
    (95.0, 98.1),
    (98.9, 100.1),
    (101.7, 114.0),
    (115.2, 118.6),
    (119.2, 126.25),
];

const STANDARD_ANGRY: &[(f64, f64)] =
    &[(42.75, 44.5), (67.0, 75.0), (80.0, 95.0), (119.0, f64::INFINITY)];

const STANDARD_GRIN: &[(f64, f64)] =
    &[(29.0, 34.0), (39.0, 42.0), (108.0, f64::INFINITY)];

const STANDARD_CADENCE: &[(f64, f64)] = &[
    (0.0, 1.6),
    (15.0, 2.5),
    (27.0, 1.6),
    (45.0, 2.5),
    (59.0, 1.6),
    (75.0, 2.5),
    (93.0, 1.6),
    (102.0, 2.5),
    (105.0, 1.6),
    (119.0, 3.75),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_tables_validate() {
        // Every static pair must pass the checked constructor.
        for table in [STANDARD_TALKING, STANDARD_ANGRY, STANDARD_GRIN] {
            for &(start, end) in table {
                assert!(Interval::new(start, end).is_ok(), "[{start}, {end}]");
            }
        }

        let s = Script::standard();
        let rebuilt = Script::new(
            s.talking.clone(),
            s.angry.clone(),
            s.grin.clone(),
            s.cadence.clone(),
        )
        .unwrap();
        assert_eq!(rebuilt.main_end(), 126.25);
    }

    #[test]
    fn open_constructor_matches_unbounded_table_entries() {
        assert_eq!(Interval::open(119.0).end(), f64::INFINITY);
        assert!(Interval::open(119.0).contains(1e12));
    }

    #[test]
    fn interval_rejects_inverted_bounds() {
        assert!(Interval::new(5.0, 4.0).is_err());
        assert!(Interval::new(-1.0, 4.0).is_err());
        assert!(Interval::new(4.0, 4.0).is_ok());
    }

    #[test]
    fn interval_bounds_are_inclusive() {
        let s = Script::standard();
        // First talking interval is [1.5, 3.0].
        assert!(s.is_active(Track::Talking, 1.5));
        assert!(s.is_active(Track::Talking, 3.0));
        assert!(s.is_active(Track::Talking, 2.0));
        assert!(!s.is_active(Track::Talking, 1.49));
        assert!(!s.is_active(Track::Talking, 3.01));
    }

    #[test]
    fn inactive_outside_all_intervals() {
        let s = Script::standard();
        // Gap between [43, 44] and [45.5, 58.5].
        assert!(!s.is_active(Track::Talking, 44.5));
        assert!(!s.is_active(Track::Angry, 0.0));
        assert!(!s.is_active(Track::Grin, 50.0));
    }

    #[test]
    fn open_intervals_never_end() {
        let s = Script::standard();
        assert!(s.is_active(Track::Angry, 119.0));
        assert!(s.is_active(Track::Angry, 10_000.0));
    }

    #[test]
    fn cadence_step_function_values() {
        let s = Script::standard();
        assert_eq!(s.cadence_at(0.0), 1.6);
        assert_eq!(s.cadence_at(14.99), 1.6);
        assert_eq!(s.cadence_at(15.0), 2.5);
        assert_eq!(s.cadence_at(20.0), 2.5);
        // Holds the last value past the final step.
        assert_eq!(s.cadence_at(119.0), 3.75);
        assert_eq!(s.cadence_at(200.0), 3.75);
    }

    #[test]
    fn cadence_before_first_step_uses_first_speed() {
        let cadence = vec![
            CadenceStep { at: 10.0, speed: 2.0 },
            CadenceStep { at: 20.0, speed: 3.0 },
        ];
        let s = Script::new(vec![], vec![], vec![], cadence).unwrap();
        assert_eq!(s.cadence_at(5.0), 2.0);
    }

    #[test]
    fn unsorted_cadence_fails_fast() {
        let cadence = vec![
            CadenceStep { at: 20.0, speed: 2.0 },
            CadenceStep { at: 10.0, speed: 3.0 },
        ];
        assert!(matches!(
            Script::new(vec![], vec![], vec![], cadence),
            Err(ScriptError::UnsortedCadence { index: 1 })
        ));
    }

    #[test]
    fn empty_cadence_fails_fast() {
        assert!(matches!(
            Script::new(vec![], vec![], vec![], vec![]),
            Err(ScriptError::EmptyCadence)
        ));
    }

    #[test]
    fn sample_combines_all_tracks() {
        let s = Script::standard();
        // t = 81: talking [78.6, 82.5], angry [80, 95], not grinning.
        let sample = s.sample(81.0);
        assert!(sample.talking);
        assert!(sample.angry);
        assert!(!sample.grinning);
        assert_eq!(sample.cadence, 2.5);
    }

    #[test]
    fn main_ends_with_last_talking_interval() {
        assert_eq!(Script::standard().main_end(), 126.25);
    }
}
