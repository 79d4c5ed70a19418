//! Core types for the plasmetch SF6/O2 etching model.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! data shared by the particle contract, the surface-kinetics model and the
//! process assembly: vector maths on [`Triple`], material tags, process
//! [`Parameters`], the per-iteration [`RateField`], the persistent
//! [`CoverageState`], and the error enums.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod coverage;
pub mod error;
pub mod material;
pub mod params;
pub mod rates;
pub mod vector;

pub use coverage::CoverageState;
pub use error::{ConfigError, KineticsError};
pub use material::Material;
pub use params::{
    IonParameters, MaskParameters, Parameters, PassivationParameters, SubstrateParameters,
};
pub use rates::RateField;
pub use vector::{Dimension, Triple};

/// Channel and coverage labels shared across the workspace.
///
/// Labels are globally unique: every particle species declares a disjoint
/// subset, and the kinetics model looks channels up by these names.
pub mod labels {
    /// Ion sputtering yield channel (written by the ion).
    pub const ION_SPUTTERING_RATE: &str = "ionSputteringRate";
    /// Ion-enhanced chemical etching yield channel (written by the ion).
    pub const ION_ENHANCED_RATE: &str = "ionEnhancedRate";
    /// Ion-enhanced passivation removal yield channel (written by the ion).
    pub const OXYGEN_SPUTTERING_RATE: &str = "oxygenSputteringRate";
    /// Normalised etchant flux channel.
    pub const ETCHANT_RATE: &str = "etchantRate";
    /// Normalised oxygen flux channel.
    pub const OXYGEN_RATE: &str = "oxygenRate";

    /// Fluorine (etchant) surface coverage.
    pub const E_COVERAGE: &str = "eCoverage";
    /// Oxygen (passivation) surface coverage.
    pub const O_COVERAGE: &str = "oCoverage";
}
