//! Test fixtures for plasmetch development.
//!
//! Provides a [`RatesBuilder`] for assembling rate fields with the SF6/O2
//! channel layout, flat-surface geometry helpers, and a seeded RNG.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use plasmetch_core::labels::{
    ETCHANT_RATE, ION_ENHANCED_RATE, ION_SPUTTERING_RATE, OXYGEN_RATE, OXYGEN_SPUTTERING_RATE,
};
use plasmetch_core::{Dimension, Material, RateField, Triple};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Builder for [`RateField`]s with one entry per point.
///
/// Setters fill a channel with a uniform value; [`channel`](Self::channel)
/// installs arbitrary per-point values.
pub struct RatesBuilder {
    point_count: usize,
    rates: RateField,
}

impl RatesBuilder {
    /// Empty builder for `point_count` points.
    pub fn new(point_count: usize) -> Self {
        Self {
            point_count,
            rates: RateField::new(),
        }
    }

    /// All five SF6/O2 channels, zero-filled, in particle declaration order.
    pub fn sf6o2(point_count: usize) -> Self {
        let mut builder = Self::new(point_count);
        for label in [
            ION_SPUTTERING_RATE,
            ION_ENHANCED_RATE,
            OXYGEN_SPUTTERING_RATE,
            ETCHANT_RATE,
            OXYGEN_RATE,
        ] {
            builder.rates.insert(label, vec![0.0; point_count]);
        }
        builder
    }

    /// Set a channel to per-point `values`.
    pub fn channel(mut self, name: &str, values: Vec<f64>) -> Self {
        self.rates.insert(name, values);
        self
    }

    /// Set a channel to `value` at every point.
    pub fn uniform(self, name: &str, value: f64) -> Self {
        let n = self.point_count;
        self.channel(name, vec![value; n])
    }

    pub fn ion_sputtering(self, value: f64) -> Self {
        self.uniform(ION_SPUTTERING_RATE, value)
    }

    pub fn ion_enhanced(self, value: f64) -> Self {
        self.uniform(ION_ENHANCED_RATE, value)
    }

    pub fn oxygen_sputtering(self, value: f64) -> Self {
        self.uniform(OXYGEN_SPUTTERING_RATE, value)
    }

    pub fn etchant(self, value: f64) -> Self {
        self.uniform(ETCHANT_RATE, value)
    }

    pub fn oxygen(self, value: f64) -> Self {
        self.uniform(OXYGEN_RATE, value)
    }

    pub fn build(self) -> RateField {
        self.rates
    }
}

/// `n` points spaced one unit apart along x, all at `depth`.
pub fn flat_surface(n: usize, depth: f64, dim: Dimension) -> Vec<Triple> {
    (0..n)
        .map(|i| {
            let mut p = [i as f64, 0.0, 0.0];
            p[dim.depth_axis()] = depth;
            p
        })
        .collect()
}

/// Materials with every `mask_every`-th point tagged as mask.
pub fn striped_materials(n: usize, mask_every: usize) -> Vec<Material> {
    (0..n)
        .map(|i| {
            if mask_every > 0 && i % mask_every == 0 {
                Material::Mask
            } else {
                Material::Other
            }
        })
        .collect()
}

/// Deterministic RNG for reproducible tests.
pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}
