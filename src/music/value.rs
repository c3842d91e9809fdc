// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Dynamically typed theory values.
//!
//! Used where operand types are only known at runtime, such as expressions
//! typed on the command line. Operator dispatch is an explicit match over
//! both operands; any pairing without a defined meaning fails with
//! [`TheoryError::InvalidOperation`].

use std::fmt;

use super::chord::Chord;
use super::error::{TheoryError, TheoryResult};
use super::interval::Interval;
use super::tone::Tone;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Tone(Tone),
    Interval(Interval),
    Chord(Chord),
}

impl Value {
    /// Parse an operand: an integer is an interval in semitones, anything
    /// else must be a tone name
    pub fn parse(token: &str) -> TheoryResult<Self> {
        match token.parse::<i32>() {
            Ok(semitones) => Ok(Value::Interval(Interval::new(semitones))),
            Err(_) => Tone::new(token).map(Value::Tone),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Value::Tone(_) => "tone",
            Value::Interval(_) => "interval",
            Value::Chord(_) => "chord",
        }
    }

    pub fn as_tone(&self) -> Option<Tone> {
        match self {
            Value::Tone(tone) => Some(*tone),
            _ => None,
        }
    }

    pub fn as_interval(&self) -> Option<Interval> {
        match self {
            Value::Interval(interval) => Some(*interval),
            _ => None,
        }
    }

    pub fn as_chord(&self) -> Option<&Chord> {
        match self {
            Value::Chord(chord) => Some(chord),
            _ => None,
        }
    }

    pub fn add(&self, rhs: &Value) -> TheoryResult<Value> {
        match (self, rhs) {
            (Value::Tone(a), Value::Interval(i)) => Ok(Value::Tone(*a + *i)),
            (Value::Tone(a), Value::Tone(b)) => Ok(Value::Chord((*a + *b)?)),
            (Value::Interval(a), Value::Interval(b)) => Ok(Value::Interval(*a + *b)),
            (Value::Chord(c), Value::Tone(t)) => Ok(Value::Chord(c + *t)),
            (Value::Chord(a), Value::Chord(b)) => Ok(Value::Chord(a + b)),
            _ => Err(self.invalid("+", rhs)),
        }
    }

    pub fn sub(&self, rhs: &Value) -> TheoryResult<Value> {
        match (self, rhs) {
            (Value::Tone(a), Value::Tone(b)) => Ok(Value::Interval(*a - *b)),
            (Value::Tone(a), Value::Interval(i)) => Ok(Value::Tone(*a - *i)),
            (Value::Interval(a), Value::Interval(b)) => Ok(Value::Interval(*a - *b)),
            (Value::Chord(c), Value::Tone(t)) => Ok(Value::Chord((c - *t)?)),
            _ => Err(self.invalid("-", rhs)),
        }
    }

    pub fn neg(&self) -> TheoryResult<Value> {
        match self {
            Value::Interval(i) => Ok(Value::Interval(-*i)),
            _ => Err(TheoryError::InvalidOperation {
                op: "-",
                lhs: "unary".to_string(),
                rhs: self.describe(),
            }),
        }
    }

    fn describe(&self) -> String {
        format!("{} {}", self.kind(), self)
    }

    fn invalid(&self, op: &'static str, rhs: &Value) -> TheoryError {
        TheoryError::InvalidOperation {
            op,
            lhs: self.describe(),
            rhs: rhs.describe(),
        }
    }
}

impl From<Tone> for Value {
    fn from(tone: Tone) -> Self {
        Value::Tone(tone)
    }
}

impl From<Interval> for Value {
    fn from(interval: Interval) -> Self {
        Value::Interval(interval)
    }
}

impl From<Chord> for Value {
    fn from(chord: Chord) -> Self {
        Value::Chord(chord)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Tone(tone) => write!(f, "{}", tone),
            Value::Interval(interval) => write!(f, "{}", interval),
            Value::Chord(chord) => write!(f, "{}", chord),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tone(name: &str) -> Value {
        Value::Tone(Tone::new(name).unwrap())
    }

    #[test]
    fn test_value_parse() {
        assert_eq!(Value::parse("C#"), Ok(Value::Tone(Tone::Cs)));
        assert_eq!(Value::parse("4"), Ok(Value::Interval(Interval::MAJOR_THIRD)));
        assert_eq!(Value::parse("-1"), Ok(Value::Interval(Interval::new(11))));
        assert_eq!(
            Value::parse("Q"),
            Err(TheoryError::InvalidPitchName("Q".to_string()))
        );
    }

    #[test]
    fn test_value_add_dispatch() {
        let e = tone("C").add(&Value::Interval(Interval::MAJOR_THIRD)).unwrap();
        assert_eq!(e, tone("E"));

        let chord = tone("C").add(&tone("E")).unwrap().add(&tone("G")).unwrap();
        assert_eq!(chord.kind(), "chord");
        assert_eq!(chord.to_string(), "C-E-G");

        let merged = chord
            .add(&tone("G").add(&tone("D")).unwrap())
            .unwrap();
        assert_eq!(merged.to_string(), "C-D-E-G");

        let interval = Value::Interval(Interval::new(9))
            .add(&Value::Interval(Interval::MAJOR_THIRD))
            .unwrap();
        assert_eq!(interval.to_string(), "minor 2nd");
    }

    #[test]
    fn test_value_sub_dispatch() {
        assert_eq!(
            tone("E").sub(&tone("C")).unwrap(),
            Value::Interval(Interval::MAJOR_THIRD)
        );
        assert_eq!(
            tone("C").sub(&Value::Interval(Interval::new(1))).unwrap(),
            tone("B")
        );

        let chord = tone("C").add(&tone("E")).unwrap().add(&tone("G")).unwrap();
        assert_eq!(chord.sub(&tone("E")).unwrap().to_string(), "C-G");
        assert!(matches!(
            chord.sub(&tone("F")),
            Err(TheoryError::NotAMember { .. })
        ));
    }

    #[test]
    fn test_value_undefined_combinations() {
        let interval = Value::Interval(Interval::MAJOR_THIRD);
        let chord = tone("C").add(&tone("G")).unwrap();

        let err = interval.add(&tone("C")).unwrap_err();
        assert_eq!(
            err,
            TheoryError::InvalidOperation {
                op: "+",
                lhs: "interval major 3rd".to_string(),
                rhs: "tone C".to_string(),
            }
        );

        assert!(matches!(chord.add(&interval), Err(TheoryError::InvalidOperation { .. })));
        assert!(matches!(tone("C").add(&chord), Err(TheoryError::InvalidOperation { .. })));
        assert!(matches!(interval.sub(&tone("C")), Err(TheoryError::InvalidOperation { .. })));
        assert!(matches!(chord.sub(&chord), Err(TheoryError::InvalidOperation { .. })));
        assert!(matches!(tone("C").neg(), Err(TheoryError::InvalidOperation { .. })));
    }

    #[test]
    fn test_value_neg() {
        let neg = Value::Interval(Interval::MAJOR_THIRD).neg().unwrap();
        assert_eq!(neg.as_interval(), Some(Interval::new(8)));
    }
}
