// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Errors raised by the theory types.

use thiserror::Error;

/// Result alias for theory operations
pub type TheoryResult<T> = Result<T, TheoryError>;

/// Failures of tone, interval, and chord operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TheoryError {
    /// Name is not one of the 12 canonical note names
    #[error("invalid pitch name: {0:?} (expected one of C, C#, D, D#, E, F, F#, G, G#, A, A#, B)")]
    InvalidPitchName(String),

    /// Pitch class index outside 0-11
    #[error("invalid pitch class: {0} (expected 0-11)")]
    InvalidPitchClass(i64),

    /// Operator applied to an operand combination with no defined meaning
    #[error("invalid operation: {lhs} {op} {rhs}")]
    InvalidOperation {
        op: &'static str,
        lhs: String,
        rhs: String,
    },

    /// Chord would contain fewer than 2 unique tones
    #[error("cannot have a chord made of only {0} unique tone(s)")]
    DegenerateChord(usize),

    /// Tone is not part of the chord it was removed from
    #[error("cannot remove tone {tone} from chord {chord}: not a member")]
    NotAMember { tone: String, chord: String },
}
