// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Music theory value types.
//!
//! This module provides pitch classes, the intervals between them, and
//! chords built on a root, along with a dynamically typed [`Value`] for
//! evaluating mixed arithmetic.

pub mod chord;
pub mod error;
pub mod interval;
pub mod tone;
pub mod value;

pub use chord::{Chord, ChordQuality};
pub use error::{TheoryError, TheoryResult};
pub use interval::Interval;
pub use tone::Tone;
pub use value::Value;
