// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Chords: sets of tones anchored on a root.
//!
//! A chord always holds at least two distinct tones, one of which is the
//! root. Every operation returns a new chord; chords never change in place.

use std::collections::BTreeSet;
use std::fmt;
use std::ops::{Add, Sub};

use super::error::{TheoryError, TheoryResult};
use super::interval::Interval;
use super::tone::Tone;

/// Chord classification by the third above the root
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChordQuality {
    Major,
    Minor,
    /// No third present
    Power,
}

impl ChordQuality {
    pub fn name(self) -> &'static str {
        match self {
            ChordQuality::Major => "major",
            ChordQuality::Minor => "minor",
            ChordQuality::Power => "power",
        }
    }
}

impl fmt::Display for ChordQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A set of at least two unique tones with a designated root
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Chord {
    root: Tone,
    notes: BTreeSet<Tone>,
}

impl Chord {
    /// Minimum number of unique tones in a chord
    pub const MIN_TONES: usize = 2;

    /// Build a chord from a root and further tones
    ///
    /// Duplicates collapse, including repeats of the root. Fails with
    /// [`TheoryError::DegenerateChord`] when fewer than two unique tones remain.
    pub fn new<I>(root: Tone, notes: I) -> TheoryResult<Self>
    where
        I: IntoIterator<Item = Tone>,
    {
        let mut set = BTreeSet::from([root]);
        set.extend(notes);
        Self::from_set(root, set)
    }

    fn from_set(root: Tone, notes: BTreeSet<Tone>) -> TheoryResult<Self> {
        if notes.len() < Self::MIN_TONES {
            return Err(TheoryError::DegenerateChord(notes.len()));
        }
        debug_assert!(notes.contains(&root));
        Ok(Self { root, notes })
    }

    /// Get the root tone
    pub fn root(&self) -> Tone {
        self.root
    }

    /// Number of unique tones, root included
    pub fn len(&self) -> usize {
        self.notes.len()
    }

    /// Always false; chords hold at least two tones
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn contains(&self, tone: Tone) -> bool {
        self.notes.contains(&tone)
    }

    /// Member tones in ascending distance from the root, root first
    pub fn tones(&self) -> Vec<Tone> {
        let mut tones: Vec<Tone> = self.notes.iter().copied().collect();
        tones.sort_by_key(|&t| t - self.root);
        tones
    }

    /// Interval of each member above the root, in the order of [`Chord::tones`]
    pub fn intervals(&self) -> Vec<Interval> {
        let mut intervals: Vec<Interval> = self.notes.iter().map(|&t| t - self.root).collect();
        intervals.sort();
        intervals
    }

    fn has_interval(&self, interval: Interval) -> bool {
        self.notes.iter().any(|&t| t - self.root == interval)
    }

    /// A tone sits a minor third above the root
    pub fn is_minor(&self) -> bool {
        self.has_interval(Interval::MINOR_THIRD)
    }

    /// A tone sits a major third above the root
    pub fn is_major(&self) -> bool {
        self.has_interval(Interval::MAJOR_THIRD)
    }

    /// Neither third is present. A fifth is not required.
    pub fn is_power_chord(&self) -> bool {
        !(self.is_minor() || self.is_major())
    }

    /// Major wins when both thirds are present
    pub fn quality(&self) -> ChordQuality {
        if self.is_major() {
            ChordQuality::Major
        } else if self.is_minor() {
            ChordQuality::Minor
        } else {
            ChordQuality::Power
        }
    }

    /// Add a tone, keeping the root. Adding a member is a no-op.
    pub fn with_tone(&self, tone: Tone) -> Chord {
        let mut notes = self.notes.clone();
        notes.insert(tone);
        Chord {
            root: self.root,
            notes,
        }
    }

    /// Union of both chords' tones, rooted on `self`'s root
    pub fn union(&self, other: &Chord) -> Chord {
        Chord {
            root: self.root,
            notes: self.notes.union(&other.notes).copied().collect(),
        }
    }

    /// Remove a tone from the chord
    ///
    /// Fails with [`TheoryError::NotAMember`] if the tone is absent, and with
    /// [`TheoryError::DegenerateChord`] if fewer than two tones would remain.
    /// Removing the root promotes the remaining member closest above it.
    pub fn without(&self, tone: Tone) -> TheoryResult<Chord> {
        if !self.contains(tone) {
            return Err(TheoryError::NotAMember {
                tone: tone.to_string(),
                chord: self.to_string(),
            });
        }

        let mut notes = self.notes.clone();
        notes.remove(&tone);
        if notes.len() < Self::MIN_TONES {
            return Err(TheoryError::DegenerateChord(notes.len()));
        }

        let root = if tone == self.root {
            notes
                .iter()
                .copied()
                .min_by_key(|&t| t - self.root)
                .unwrap_or(self.root)
        } else {
            self.root
        };

        Self::from_set(root, notes)
    }

    /// Shift every tone, root included, by an interval or raw semitone count
    pub fn transposed<I: Into<Interval>>(&self, interval: I) -> Chord {
        let interval = interval.into();
        Chord {
            root: self.root + interval,
            notes: self.notes.iter().map(|&t| t + interval).collect(),
        }
    }
}

impl Add<Tone> for &Chord {
    type Output = Chord;

    fn add(self, rhs: Tone) -> Chord {
        self.with_tone(rhs)
    }
}

impl Add<&Chord> for &Chord {
    type Output = Chord;

    fn add(self, rhs: &Chord) -> Chord {
        self.union(rhs)
    }
}

impl Sub<Tone> for &Chord {
    type Output = TheoryResult<Chord>;

    fn sub(self, rhs: Tone) -> TheoryResult<Chord> {
        self.without(rhs)
    }
}

impl fmt::Display for Chord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, tone) in self.tones().iter().enumerate() {
            if i > 0 {
                f.write_str("-")?;
            }
            write!(f, "{}", tone)?;
        }
        Ok(())
    }
}
