//! The velocity-field adapter handed to the external advection step.

use plasmetch_core::Triple;

/// How the advection engine maps its own points onto the velocity array.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TranslationMode {
    /// Point indices already match; no translation.
    Disabled,
    /// Translate through an exact index lookup table.
    Lookup,
    /// Translate by nearest-neighbour search.
    #[default]
    NearestNeighbour,
}

impl TranslationMode {
    /// Integer selector understood by the advection engine.
    pub fn code(self) -> u8 {
        match self {
            Self::Disabled => 0,
            Self::Lookup => 1,
            Self::NearestNeighbour => 2,
        }
    }

    /// Inverse of [`code`](Self::code).
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Disabled),
            1 => Some(Self::Lookup),
            2 => Some(Self::NearestNeighbour),
            _ => None,
        }
    }
}

/// Scalar-only velocity field: one normal speed per surface point.
///
/// Holds the array produced by the most recent iteration. The vector
/// component is always zero; motion is purely along the surface normal.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DefaultVelocityField {
    velocities: Vec<f64>,
    mode: TranslationMode,
}

impl DefaultVelocityField {
    /// Empty field with the given translation mode.
    pub fn new(mode: TranslationMode) -> Self {
        Self {
            velocities: Vec::new(),
            mode,
        }
    }

    /// Replace the stored velocities.
    pub fn set_velocities(&mut self, velocities: Vec<f64>) {
        self.velocities = velocities;
    }

    /// Normal speed at `point`.
    ///
    /// Panics if `point` is out of range.
    pub fn scalar_velocity(&self, point: usize) -> f64 {
        self.velocities[point]
    }

    /// Always zero.
    pub fn vector_velocity(&self, _point: usize) -> Triple {
        [0.0; 3]
    }

    /// All stored velocities.
    pub fn velocities(&self) -> &[f64] {
        &self.velocities
    }

    /// Translation mode selector for the advection engine.
    pub fn translation_mode(&self) -> TranslationMode {
        self.mode
    }
}
