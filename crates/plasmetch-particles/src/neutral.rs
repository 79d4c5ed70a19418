//! Neutral species: fluorine etchant and oxygen.
//!
//! Neutrals record their (normalised) flux on every hit and stick with a
//! probability proportional to the free surface sites of the previous
//! iteration. Reflection is diffuse and independent of incidence.

use plasmetch_core::labels::{ETCHANT_RATE, OXYGEN_RATE};
use plasmetch_core::{CoverageState, Dimension, Material, Parameters};
use rand::Rng;
use smallvec::smallvec;

use crate::accumulator::LocalAccumulators;
use crate::contract::{Labels, ParticleContract, ParticleState, Reflection, SurfaceHit};
use crate::reflection::diffuse;

/// Sticking probability `beta · max(1 − θ_F − θ_O, 0)` at `point`.
pub fn sticking_probability(beta: f64, coverages: &CoverageState, point: usize) -> f64 {
    let (e, o) = coverages.at(point);
    beta * (1.0 - e - o).max(0.0)
}

fn diffuse_reflection<R: Rng + ?Sized>(
    beta: f64,
    hit: &SurfaceHit,
    coverages: &CoverageState,
    dim: Dimension,
    rng: &mut R,
) -> Reflection {
    Reflection {
        absorb_probability: sticking_probability(beta, coverages, hit.point),
        direction: diffuse(&hit.normal, dim, rng),
    }
}

/// Fluorine radical from the SF6 plasma.
#[derive(Clone, Debug)]
pub struct Etchant<'p> {
    params: &'p Parameters,
    dim: Dimension,
}

impl<'p> Etchant<'p> {
    /// Etchant bound to `params` for a run of dimensionality `dim`.
    pub fn new(params: &'p Parameters, dim: Dimension) -> Self {
        Self { params, dim }
    }

    /// Sticking coefficient on `material`.
    pub fn beta(&self, material: Material) -> f64 {
        if material.is_mask() {
            self.params.mask.beta_f
        } else {
            self.params.beta_f
        }
    }
}

impl ParticleContract for Etchant<'_> {
    fn name(&self) -> &str {
        "Etchant"
    }

    fn sample_initial_state<R: Rng + ?Sized>(&self, _rng: &mut R) -> ParticleState {
        ParticleState::default()
    }

    fn source_exponent(&self) -> f64 {
        1.0
    }

    fn local_data_labels(&self) -> Labels {
        smallvec![ETCHANT_RATE]
    }

    fn on_surface_hit<R: Rng + ?Sized>(
        &self,
        _state: &ParticleState,
        hit: &SurfaceHit,
        accumulators: &LocalAccumulators,
        _coverages: &CoverageState,
        _rng: &mut R,
    ) {
        accumulators.add(0, hit.point, hit.weight);
    }

    fn reflect<R: Rng + ?Sized>(
        &self,
        _state: &mut ParticleState,
        hit: &SurfaceHit,
        coverages: &CoverageState,
        rng: &mut R,
    ) -> Reflection {
        diffuse_reflection(self.beta(hit.material), hit, coverages, self.dim, rng)
    }
}

/// Atomic oxygen, the passivating species.
#[derive(Clone, Debug)]
pub struct Oxygen<'p> {
    params: &'p Parameters,
    dim: Dimension,
}

impl<'p> Oxygen<'p> {
    /// Oxygen bound to `params` for a run of dimensionality `dim`.
    pub fn new(params: &'p Parameters, dim: Dimension) -> Self {
        Self { params, dim }
    }

    /// Sticking coefficient on `material`.
    pub fn beta(&self, material: Material) -> f64 {
        if material.is_mask() {
            self.params.mask.beta_o
        } else {
            self.params.beta_o
        }
    }
}

impl ParticleContract for Oxygen<'_> {
    fn name(&self) -> &str {
        "Oxygen"
    }

    fn sample_initial_state<R: Rng + ?Sized>(&self, _rng: &mut R) -> ParticleState {
        ParticleState::default()
    }

    fn source_exponent(&self) -> f64 {
        1.0
    }

    fn local_data_labels(&self) -> Labels {
        smallvec![OXYGEN_RATE]
    }

    fn on_surface_hit<R: Rng + ?Sized>(
        &self,
        _state: &ParticleState,
        hit: &SurfaceHit,
        accumulators: &LocalAccumulators,
        _coverages: &CoverageState,
        _rng: &mut R,
    ) {
        accumulators.add(0, hit.point, hit.weight);
    }

    fn reflect<R: Rng + ?Sized>(
        &self,
        _state: &mut ParticleState,
        hit: &SurfaceHit,
        coverages: &CoverageState,
        rng: &mut R,
    ) -> Reflection {
        diffuse_reflection(self.beta(hit.material), hit, coverages, self.dim, rng)
    }
}
