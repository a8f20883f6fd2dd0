//! Core Data Model for Sensor Readings

use serde::{Deserialize, Serialize};

/// One of the three orthogonal sensor axes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// All axes in canonical order
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Lowercase axis name, as used in column headers
    pub fn name(self) -> &'static str {
        match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        }
    }

    /// Raw value of this axis for a reading
    pub fn value(self, reading: &Reading) -> i32 {
        match self {
            Axis::X => reading.x,
            Axis::Y => reading.y,
            Axis::Z => reading.z,
        }
    }
}

/// A parsed log line before an operating-condition label is attached
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLine {
    /// Opaque timestamp segment, source format `HH:MM:SS:mmm`
    pub timestamp: String,
    /// Raw X-axis count
    pub x: i32,
    /// Raw Y-axis count
    pub y: i32,
    /// Raw Z-axis count
    pub z: i32,
}

impl ParsedLine {
    /// Attach an operating-condition label, producing a finished reading
    pub fn labeled(self, label: impl Into<String>) -> Reading {
        Reading {
            timestamp: self.timestamp,
            x: self.x,
            y: self.y,
            z: self.z,
            label: label.into(),
        }
    }
}

/// One timestamped 3-axis sensor sample with its operating-condition label.
///
/// Values are raw sensor counts, no unit conversion. Immutable once parsed;
/// an unparseable timestamp never drops the reading (ordering falls back to
/// the positional index downstream).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reading {
    pub timestamp: String,
    pub x: i32,
    pub y: i32,
    pub z: i32,
    pub label: String,
}

impl Reading {
    /// Euclidean norm of the three axis values, always >= 0
    pub fn magnitude(&self) -> f64 {
        let (x, y, z) = (self.x as f64, self.y as f64, self.z as f64);
        (x * x + y * y + z * z).sqrt()
    }
}

/// Ordered collection of readings.
///
/// Per-file insertion order is preserved; files are merged by concatenation
/// in configuration order, never interleaved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    readings: Vec<Reading>,
}

impl Dataset {
    /// Build a dataset from an already-ordered collection
    pub fn new(readings: Vec<Reading>) -> Self {
        Self { readings }
    }

    /// Number of readings
    pub fn len(&self) -> usize {
        self.readings.len()
    }

    /// Whether the dataset holds no readings
    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }

    /// Readings in insertion order
    pub fn readings(&self) -> &[Reading] {
        &self.readings
    }

    /// Iterator over readings in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Reading> {
        self.readings.iter()
    }

    /// Append readings, preserving their order
    pub fn extend(&mut self, readings: Vec<Reading>) {
        self.readings.extend(readings);
    }

    /// Values of one axis across the dataset, in insertion order
    pub fn axis_values(&self, axis: Axis) -> Vec<f64> {
        self.readings.iter().map(|r| axis.value(r) as f64).collect()
    }

    /// Magnitude of every reading, in insertion order
    pub fn magnitudes(&self) -> Vec<f64> {
        self.readings.iter().map(Reading::magnitude).collect()
    }

    /// Distinct labels in order of first appearance
    pub fn labels(&self) -> Vec<&str> {
        let mut labels: Vec<&str> = Vec::new();
        for reading in &self.readings {
            if !labels.contains(&reading.label.as_str()) {
                labels.push(&reading.label);
            }
        }
        labels
    }
}
