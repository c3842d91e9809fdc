// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Pitch classes.
//!
//! A [`Tone`] is one of the 12 semitone positions of the octave. Tones
//! shift by intervals, measure intervals between each other, and combine
//! into chords.

use std::fmt;
use std::ops::{Add, Sub};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::chord::Chord;
use super::error::{TheoryError, TheoryResult};
use super::interval::Interval;

/// Note names (pitch classes)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Tone {
    C,
    Cs, // C#
    D,
    Ds, // D#
    E,
    F,
    Fs, // F#
    G,
    Gs, // G#
    A,
    As, // A#
    B,
}

impl Tone {
    /// All tones in chromatic order
    pub const ALL: [Tone; 12] = [
        Tone::C,
        Tone::Cs,
        Tone::D,
        Tone::Ds,
        Tone::E,
        Tone::F,
        Tone::Fs,
        Tone::G,
        Tone::Gs,
        Tone::A,
        Tone::As,
        Tone::B,
    ];

    /// Canonical names, indexed by pitch class
    pub const NAMES: [&'static str; 12] = [
        "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
    ];

    /// Parse one of the 12 canonical names
    pub fn new(name: &str) -> TheoryResult<Self> {
        Self::NAMES
            .iter()
            .position(|&n| n == name)
            .map(|pc| Self::ALL[pc])
            .ok_or_else(|| TheoryError::InvalidPitchName(name.to_string()))
    }

    /// Get tone from a pitch class index (0-11)
    pub fn from_pitch_class(pc: i64) -> TheoryResult<Self> {
        if (0..12).contains(&pc) {
            Ok(Self::ALL[pc as usize])
        } else {
            Err(TheoryError::InvalidPitchClass(pc))
        }
    }

    /// Get the pitch class (0-11) for this tone
    pub fn pitch_class(self) -> u8 {
        self as u8
    }

    pub fn name(self) -> &'static str {
        Self::NAMES[self as usize]
    }

    /// Shift up by an interval, wrapping at the octave
    pub fn shifted(self, interval: Interval) -> Self {
        Self::ALL[(self.pitch_class() + interval.semitones()) as usize % 12]
    }

    /// Shift down by an interval, wrapping at the octave
    pub fn lowered(self, interval: Interval) -> Self {
        self.shifted(-interval)
    }

    /// Two-note chord rooted on this tone
    pub fn with(self, other: Tone) -> TheoryResult<Chord> {
        Chord::new(self, [other])
    }
}

impl FromStr for Tone {
    type Err = TheoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tone::new(s)
    }
}

impl TryFrom<String> for Tone {
    type Error = TheoryError;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        Tone::new(&name)
    }
}

impl From<Tone> for String {
    fn from(tone: Tone) -> Self {
        tone.name().to_string()
    }
}

impl Add<Interval> for Tone {
    type Output = Tone;

    fn add(self, rhs: Interval) -> Tone {
        self.shifted(rhs)
    }
}

impl Add<Tone> for Tone {
    type Output = TheoryResult<Chord>;

    fn add(self, rhs: Tone) -> TheoryResult<Chord> {
        self.with(rhs)
    }
}

/// Interval climbing from `rhs` up to `self`
impl Sub<Tone> for Tone {
    type Output = Interval;

    fn sub(self, rhs: Tone) -> Interval {
        Interval::between(rhs, self)
    }
}

impl Sub<Interval> for Tone {
    type Output = Tone;

    fn sub(self, rhs: Interval) -> Tone {
        self.lowered(rhs)
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tone_from_name() {
        assert_eq!(Tone::new("C"), Ok(Tone::C));
        assert_eq!(Tone::new("C#"), Ok(Tone::Cs));
        assert_eq!("A#".parse::<Tone>(), Ok(Tone::As));
        assert_eq!(
            Tone::new("Db"),
            Err(TheoryError::InvalidPitchName("Db".to_string()))
        );
        assert!(Tone::new("c").is_err());
        assert!(Tone::new("").is_err());
    }

    #[test]
    fn test_tone_from_pitch_class() {
        assert_eq!(Tone::from_pitch_class(0), Ok(Tone::C));
        assert_eq!(Tone::from_pitch_class(11), Ok(Tone::B));
        assert_eq!(Tone::from_pitch_class(12), Err(TheoryError::InvalidPitchClass(12)));
        assert_eq!(Tone::from_pitch_class(-1), Err(TheoryError::InvalidPitchClass(-1)));
    }

    #[test]
    fn test_tone_names_round_trip() {
        for tone in Tone::ALL {
            assert_eq!(Tone::new(&tone.to_string()), Ok(tone));
            assert_eq!(Tone::ALL[tone.pitch_class() as usize], tone);
        }
    }

    #[test]
    fn test_tone_plus_interval() {
        assert_eq!(Tone::C + Interval::MAJOR_THIRD, Tone::E);
        assert_eq!(Tone::B + Interval::new(1), Tone::C);
        assert_eq!(Tone::G + Interval::PERFECT_FIFTH, Tone::D);
    }

    #[test]
    fn test_tone_minus_interval() {
        assert_eq!(Tone::E - Interval::MAJOR_THIRD, Tone::C);
        assert_eq!(Tone::C - Interval::new(1), Tone::B);
    }

    #[test]
    fn test_tone_minus_tone_is_directed() {
        assert_eq!(Tone::E - Tone::C, Interval::MAJOR_THIRD);
        assert_eq!(Tone::C - Tone::E, Interval::new(8));
        assert_eq!(Tone::D - Tone::D, Interval::UNISON);
    }

    #[test]
    fn test_tone_plus_tone_builds_chord() {
        let chord = (Tone::C + Tone::G).unwrap();
        assert_eq!(chord.root(), Tone::C);
        assert_eq!(chord.to_string(), "C-G");

        assert_eq!(Tone::C + Tone::C, Err(TheoryError::DegenerateChord(1)));
    }

    #[test]
    fn test_tone_serde_uses_names() {
        let yaml = serde_yaml::to_string(&Tone::Fs).unwrap();
        assert!(yaml.contains("F#"));
        assert_eq!(serde_yaml::from_str::<Tone>(&yaml).unwrap(), Tone::Fs);

        let tone: Tone = serde_yaml::from_str("G#").unwrap();
        assert_eq!(tone, Tone::Gs);
        assert!(serde_yaml::from_str::<Tone>("H").is_err());
    }
}
