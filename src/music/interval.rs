// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Intervals between pitch classes.
//!
//! An interval is a directed distance in semitones, always normalized
//! into a single octave. Construction never fails: any integer wraps.

use std::fmt;
use std::ops::{Add, Neg, Sub};

use serde::{Deserialize, Serialize};

use super::tone::Tone;

/// Directed semitone distance, normalized to 0-11
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(from = "i32", into = "i32")]
pub struct Interval(u8);

impl Interval {
    /// Quality names indexed by semitone count
    pub const ALL_NAMES: [&'static str; 12] = [
        "perfect unison",
        "minor 2nd",
        "major 2nd",
        "minor 3rd",
        "major 3rd",
        "perfect 4th",
        "tritone",
        "perfect 5th",
        "minor 6th",
        "major 6th",
        "minor 7th",
        "major 7th",
    ];

    pub const UNISON: Interval = Interval(0);
    pub const MINOR_THIRD: Interval = Interval(3);
    pub const MAJOR_THIRD: Interval = Interval(4);
    pub const PERFECT_FIFTH: Interval = Interval(7);

    /// Create an interval, wrapping the semitone count into 0-11
    pub fn new(semitones: i32) -> Self {
        Interval(semitones.rem_euclid(12) as u8)
    }

    /// Interval climbing from `from` up to `to`
    pub fn between(from: Tone, to: Tone) -> Self {
        Interval::new(to.pitch_class() as i32 - from.pitch_class() as i32)
    }

    /// Semitone count (0-11)
    pub fn semitones(self) -> u8 {
        self.0
    }

    /// Quality name, e.g. "major 3rd"
    pub fn name(self) -> &'static str {
        Self::ALL_NAMES[self.0 as usize]
    }

    pub fn is_unison(self) -> bool {
        self.0 == 0
    }
}

impl From<i32> for Interval {
    fn from(semitones: i32) -> Self {
        Interval::new(semitones)
    }
}

impl From<Interval> for i32 {
    fn from(interval: Interval) -> Self {
        interval.0 as i32
    }
}

impl Add for Interval {
    type Output = Interval;

    fn add(self, rhs: Interval) -> Interval {
        Interval::new(self.0 as i32 + rhs.0 as i32)
    }
}

impl Neg for Interval {
    type Output = Interval;

    fn neg(self) -> Interval {
        Interval::new(-(self.0 as i32))
    }
}

impl Sub for Interval {
    type Output = Interval;

    fn sub(self, rhs: Interval) -> Interval {
        self + -rhs
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
