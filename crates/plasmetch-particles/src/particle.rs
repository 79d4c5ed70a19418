//! The closed set of species as one enum.

use plasmetch_core::{CoverageState, Dimension, Parameters};
use rand::Rng;

use crate::accumulator::LocalAccumulators;
use crate::contract::{Labels, ParticleContract, ParticleState, Reflection, SurfaceHit};
use crate::ion::Ion;
use crate::neutral::{Etchant, Oxygen};

/// Any of the three particle species, dispatched per call.
#[derive(Clone, Debug)]
pub enum Particle<'p> {
    /// Energetic ion.
    Ion(Ion<'p>),
    /// Fluorine etchant.
    Etchant(Etchant<'p>),
    /// Oxygen.
    Oxygen(Oxygen<'p>),
}

impl<'p> Particle<'p> {
    /// The ion species.
    pub fn ion(params: &'p Parameters, dim: Dimension) -> Self {
        Self::Ion(Ion::new(params, dim))
    }

    /// The etchant species.
    pub fn etchant(params: &'p Parameters, dim: Dimension) -> Self {
        Self::Etchant(Etchant::new(params, dim))
    }

    /// The oxygen species.
    pub fn oxygen(params: &'p Parameters, dim: Dimension) -> Self {
        Self::Oxygen(Oxygen::new(params, dim))
    }
}

impl ParticleContract for Particle<'_> {
    fn name(&self) -> &str {
        match self {
            Self::Ion(p) => p.name(),
            Self::Etchant(p) => p.name(),
            Self::Oxygen(p) => p.name(),
        }
    }

    fn sample_initial_state<R: Rng + ?Sized>(&self, rng: &mut R) -> ParticleState {
        match self {
            Self::Ion(p) => p.sample_initial_state(rng),
            Self::Etchant(p) => p.sample_initial_state(rng),
            Self::Oxygen(p) => p.sample_initial_state(rng),
        }
    }

    fn source_exponent(&self) -> f64 {
        match self {
            Self::Ion(p) => p.source_exponent(),
            Self::Etchant(p) => p.source_exponent(),
            Self::Oxygen(p) => p.source_exponent(),
        }
    }

    fn local_data_labels(&self) -> Labels {
        match self {
            Self::Ion(p) => p.local_data_labels(),
            Self::Etchant(p) => p.local_data_labels(),
            Self::Oxygen(p) => p.local_data_labels(),
        }
    }

    fn on_surface_hit<R: Rng + ?Sized>(
        &self,
        state: &ParticleState,
        hit: &SurfaceHit,
        accumulators: &LocalAccumulators,
        coverages: &CoverageState,
        rng: &mut R,
    ) {
        match self {
            Self::Ion(p) => p.on_surface_hit(state, hit, accumulators, coverages, rng),
            Self::Etchant(p) => p.on_surface_hit(state, hit, accumulators, coverages, rng),
            Self::Oxygen(p) => p.on_surface_hit(state, hit, accumulators, coverages, rng),
        }
    }

    fn reflect<R: Rng + ?Sized>(
        &self,
        state: &mut ParticleState,
        hit: &SurfaceHit,
        coverages: &CoverageState,
        rng: &mut R,
    ) -> Reflection {
        match self {
            Self::Ion(p) => p.reflect(state, hit, coverages, rng),
            Self::Etchant(p) => p.reflect(state, hit, coverages, rng),
            Self::Oxygen(p) => p.reflect(state, hit, coverages, rng),
        }
    }
}
