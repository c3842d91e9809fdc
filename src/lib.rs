// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Pitch-class music theory: tones, intervals and chords.
//!
//! All types are small immutable values. Arithmetic between them wraps
//! modulo the 12-tone octave.

pub mod config;
pub mod music;

pub use music::{
    Chord, ChordQuality, Interval, TheoryError, TheoryResult, Tone, Value,
};
