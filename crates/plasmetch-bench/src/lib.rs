//! Benchmark profiles for the plasmetch etching model.
//!
//! - [`trench_profile`]: a 2D trench cross-section with mask shoulders
//!   and randomised rate channels, sized by point count.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use plasmetch_core::labels::{
    ETCHANT_RATE, ION_ENHANCED_RATE, ION_SPUTTERING_RATE, OXYGEN_RATE, OXYGEN_SPUTTERING_RATE,
};
use plasmetch_core::{Material, RateField, Triple};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Inputs for one kinetics iteration.
pub struct Profile {
    /// Aggregated rate channels.
    pub rates: RateField,
    /// Point positions (2D, depth on component 1).
    pub coordinates: Vec<Triple>,
    /// Per-point materials.
    pub materials: Vec<Material>,
}

/// Build a trench profile with `point_count` points.
///
/// The outer quarter on each side is mask at depth 0; the middle half is
/// a trench floor at depth -1. Rates are uniform random draws seeded by
/// `seed`, with the etchant and oxygen channels scaled to realistic
/// normalised fluxes.
pub fn trench_profile(point_count: usize, seed: u64) -> Profile {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let quarter = point_count / 4;

    let mut coordinates = Vec::with_capacity(point_count);
    let mut materials = Vec::with_capacity(point_count);
    for i in 0..point_count {
        let on_mask = i < quarter || i >= point_count - quarter;
        let depth = if on_mask { 0.0 } else { -1.0 };
        coordinates.push([i as f64, depth, 0.0]);
        materials.push(if on_mask { Material::Mask } else { Material::Other });
    }

    let mut channel = |scale: f64| -> Vec<f64> {
        (0..point_count)
            .map(|_| scale * rng.random::<f64>())
            .collect()
    };
    let mut rates = RateField::new();
    rates.insert(ION_SPUTTERING_RATE, channel(0.5));
    rates.insert(ION_ENHANCED_RATE, channel(1.0));
    rates.insert(OXYGEN_SPUTTERING_RATE, channel(1.0));
    rates.insert(ETCHANT_RATE, channel(2.0));
    rates.insert(OXYGEN_RATE, channel(2.0));

    Profile {
        rates,
        coordinates,
        materials,
    }
}
