//! Error types for the plasmetch model.
//!
//! Two concerns: precondition violations raised by the surface-kinetics
//! model at iteration time ([`KineticsError`]), and invalid configuration
//! detected while validating parameters or building an assembly
//! ([`ConfigError`]). Near-zero-flux degeneracies are handled in place by
//! the kinetics model and never become errors.

use std::error::Error;
use std::fmt;

use crate::vector::Dimension;

/// Precondition violations of the surface-kinetics model.
///
/// These indicate a driver bug (wrong call order or inconsistent array
/// sizes). The run must halt; nothing is resized or defaulted silently.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum KineticsError {
    /// A kinetics operation was called before `initialize_coverages`.
    NotInitialized,
    /// A rate channel the model depends on is absent from the rate field.
    MissingChannel {
        /// Name of the missing channel.
        name: String,
    },
    /// An input array does not have one entry per surface point.
    LengthMismatch {
        /// Which input was mis-sized (a channel name, `"materials"`,
        /// or `"coordinates"`).
        what: String,
        /// Current number of surface points.
        expected: usize,
        /// Length actually supplied.
        actual: usize,
    },
}

impl fmt::Display for KineticsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotInitialized => write!(f, "coverages used before initialization"),
            Self::MissingChannel { name } => write!(f, "rate channel '{name}' missing"),
            Self::LengthMismatch {
                what,
                expected,
                actual,
            } => write!(
                f,
                "'{what}' has {actual} entries, expected {expected} (one per point)"
            ),
        }
    }
}

impl Error for KineticsError {}

/// Invalid parameters or an incomplete process assembly.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// A parameter is out of its admissible range.
    InvalidParameter {
        /// Dotted path of the parameter (e.g. `"substrate.k_sigma"`).
        name: &'static str,
        /// Why the value was rejected.
        reason: String,
    },
    /// A required assembly component was not supplied.
    MissingComponent {
        /// Name of the missing component.
        component: &'static str,
    },
    /// Two particle species declare the same channel label.
    DuplicateLabel {
        /// The clashing label.
        label: String,
    },
    /// The surface model reads a channel that no particle writes.
    UncoveredChannel {
        /// The unwritten channel.
        channel: String,
    },
    /// The surface model was built for a different dimensionality than
    /// the assembly.
    DimensionMismatch {
        /// Dimensionality of the assembly (and its particles).
        process: Dimension,
        /// Dimensionality of the surface model.
        surface_model: Dimension,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter { name, reason } => {
                write!(f, "invalid parameter '{name}': {reason}")
            }
            Self::MissingComponent { component } => {
                write!(f, "process model has no {component}")
            }
            Self::DuplicateLabel { label } => {
                write!(f, "channel label '{label}' declared by more than one particle")
            }
            Self::UncoveredChannel { channel } => {
                write!(f, "surface model reads channel '{channel}' but no particle writes it")
            }
            Self::DimensionMismatch {
                process,
                surface_model,
            } => write!(
                f,
                "surface model is {surface_model:?} but the process is {process:?}"
            ),
        }
    }
}

impl Error for ConfigError {}
