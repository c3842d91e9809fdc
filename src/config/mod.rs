// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Chord sheet files.
//!
//! A chord sheet is a named list of chords stored as YAML or TOML. Entries
//! are validated into [`Chord`] values only when [`ChordSheet::chords`] is
//! called, so a sheet can be loaded, edited, and saved without every entry
//! being a valid chord.

use std::fs;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::music::{Chord, Interval, Tone};

/// File formats a chord sheet can be stored in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetFormat {
    Yaml,
    Toml,
}

impl SheetFormat {
    /// Pick the format from a file extension
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let ext = path
            .as_ref()
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        match ext.as_deref() {
            Some("yaml") | Some("yml") => Ok(SheetFormat::Yaml),
            Some("toml") => Ok(SheetFormat::Toml),
            _ => Err(anyhow!(
                "Unsupported chord sheet extension: {:?} (expected .yaml, .yml or .toml)",
                path.as_ref()
            )),
        }
    }
}

/// A named collection of chord definitions
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChordSheet {
    /// Sheet title
    #[serde(default = "default_name")]
    pub name: String,
    /// Chord entries, in sheet order
    #[serde(default)]
    pub chords: Vec<ChordSpec>,
}

fn default_name() -> String {
    "Untitled".to_string()
}

impl Default for ChordSheet {
    fn default() -> Self {
        Self {
            name: default_name(),
            chords: Vec::new(),
        }
    }
}

/// A single chord entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChordSpec {
    /// Label for the entry (e.g., "verse I")
    pub name: String,
    /// Root tone
    pub root: Tone,
    /// Further tones; the root may be repeated here
    #[serde(default)]
    pub notes: Vec<Tone>,
    /// Transposition applied after building, in semitones
    #[serde(default)]
    pub transpose: Interval,
}

impl ChordSpec {
    /// Build the chord this entry describes
    pub fn to_chord(&self) -> Result<Chord> {
        let chord = Chord::new(self.root, self.notes.iter().copied())
            .with_context(|| format!("Invalid chord '{}'", self.name))?;
        Ok(chord.transposed(self.transpose))
    }
}

impl ChordSheet {
    /// Load a chord sheet, choosing the format by file extension
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let format = SheetFormat::from_path(path.as_ref())?;
        let contents = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read chord sheet: {:?}", path.as_ref()))?;
        let sheet = match format {
            SheetFormat::Yaml => Self::from_yaml(&contents)?,
            SheetFormat::Toml => Self::from_toml(&contents)?,
        };
        info!(
            path = ?path.as_ref(),
            chords = sheet.chords.len(),
            "Loaded chord sheet '{}'",
            sheet.name
        );
        Ok(sheet)
    }

    /// Parse a chord sheet from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).context("Failed to parse YAML chord sheet")
    }

    /// Parse a chord sheet from TOML string
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).context("Failed to parse TOML chord sheet")
    }

    /// Serialize to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).context("Failed to serialize chord sheet to YAML")
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string(self).context("Failed to serialize chord sheet to TOML")
    }

    /// Save the sheet, choosing the format by file extension
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let text = match SheetFormat::from_path(path.as_ref())? {
            SheetFormat::Yaml => self.to_yaml()?,
            SheetFormat::Toml => self.to_toml()?,
        };
        fs::write(path.as_ref(), text)
            .with_context(|| format!("Failed to write chord sheet: {:?}", path.as_ref()))
    }

    /// Build every entry into a chord, failing on the first invalid one
    pub fn chords(&self) -> Result<Vec<(String, Chord)>> {
        self.chords
            .iter()
            .map(|entry| {
                let chord = entry.to_chord()?;
                debug!(entry = %entry.name, chord = %chord, "Built chord");
                Ok((entry.name.clone(), chord))
            })
            .collect()
    }
}
