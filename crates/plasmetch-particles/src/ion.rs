//! The energetic ion species.
//!
//! An ion is launched with an energy drawn from a normal distribution and
//! carries that energy along its trajectory. Each hit deposits three yields
//! at the struck point; each reflection loses energy and ends the
//! trajectory once the energy falls to the ion-enhanced threshold.

use std::f64::consts::{FRAC_PI_2, PI};

use plasmetch_core::labels::{ION_ENHANCED_RATE, ION_SPUTTERING_RATE, OXYGEN_SPUTTERING_RATE};
use plasmetch_core::{CoverageState, Dimension, Material, Parameters};
use rand::Rng;
use smallvec::smallvec;

use crate::accumulator::LocalAccumulators;
use crate::contract::{Labels, ParticleContract, ParticleState, Reflection, SurfaceHit};
use crate::reflection::coned_cosine;
use crate::sampling::sample_truncated_normal;

/// Relative spread of the reflected energy around its peak.
const REFLECTED_ENERGY_SPREAD: f64 = 0.1;

/// Yields deposited by one ion hit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IonYields {
    /// Physical sputtering yield.
    pub sputter: f64,
    /// Ion-enhanced chemical etching yield.
    pub enhanced: f64,
    /// Ion-enhanced passivation (oxygen) removal yield.
    pub passivation: f64,
}

/// Energetic ion.
#[derive(Clone, Debug)]
pub struct Ion<'p> {
    params: &'p Parameters,
    dim: Dimension,
    /// Peak reflected-energy fraction at the inflection angle.
    inflection_fraction: f64,
}

impl<'p> Ion<'p> {
    /// Ion bound to `params` for a run of dimensionality `dim`.
    pub fn new(params: &'p Parameters, dim: Dimension) -> Self {
        let ions = &params.ions;
        let inflection_fraction = 1.0 / (1.0 + ions.n_l * (FRAC_PI_2 / ions.inflect_angle - 1.0));
        Self {
            params,
            dim,
            inflection_fraction,
        }
    }

    /// Yields of an ion with `energy` striking `material` at incidence
    /// cosine `cos_theta`.
    ///
    /// Each yield is `A · max(√E − √E_th, 0) · f(θ)`, never negative.
    pub fn yields(&self, energy: f64, cos_theta: f64, material: Material) -> IonYields {
        let p = self.params;
        let cos_theta = cos_theta.clamp(0.0, 1.0);
        let theta = cos_theta.acos();

        let (a_sp, b_sp, eth_sp) = if material.is_mask() {
            (p.mask.a_sp, p.mask.b_sp, p.mask.eth_sp)
        } else {
            (p.substrate.a_sp, p.substrate.b_sp, p.substrate.eth_sp)
        };

        let f_sp = (1.0 + b_sp * (1.0 - cos_theta * cos_theta)) * cos_theta;
        // Full enhancement up to 60 degrees, linear decay to zero at grazing.
        let f_ie = if cos_theta > 0.5 {
            1.0
        } else {
            (6.0 * (FRAC_PI_2 - theta) / PI).max(0.0)
        };

        let sqrt_e = energy.max(0.0).sqrt();
        let above = |threshold: f64| (sqrt_e - threshold.sqrt()).max(0.0);

        IonYields {
            sputter: (a_sp * above(eth_sp) * f_sp).max(0.0),
            enhanced: (p.substrate.a_ie * above(p.substrate.eth_ie) * f_ie).max(0.0),
            passivation: (p.passivation.a_ie * above(p.passivation.eth_ie) * f_ie).max(0.0),
        }
    }

    /// Peak of the reflected energy, as a fraction of the incident energy.
    ///
    /// Below the inflection angle the fraction ramps up as a power law;
    /// above it, it rises linearly to 1 at grazing incidence.
    pub fn reflected_energy_peak(&self, incidence_angle: f64) -> f64 {
        let ions = &self.params.ions;
        let a = self.inflection_fraction;
        if incidence_angle >= ions.inflect_angle {
            1.0 - (1.0 - a) * (FRAC_PI_2 - incidence_angle) / (FRAC_PI_2 - ions.inflect_angle)
        } else {
            a * (incidence_angle / ions.inflect_angle).powf(ions.n_l)
        }
    }
}

impl ParticleContract for Ion<'_> {
    fn name(&self) -> &str {
        "Ion"
    }

    fn sample_initial_state<R: Rng + ?Sized>(&self, rng: &mut R) -> ParticleState {
        let ions = &self.params.ions;
        let energy = sample_truncated_normal(
            rng,
            ions.mean_energy,
            ions.sigma_energy,
            0.0,
            f64::INFINITY,
        );
        ParticleState { energy }
    }

    fn source_exponent(&self) -> f64 {
        self.params.ions.exponent
    }

    fn local_data_labels(&self) -> Labels {
        smallvec![ION_SPUTTERING_RATE, ION_ENHANCED_RATE, OXYGEN_SPUTTERING_RATE]
    }

    fn on_surface_hit<R: Rng + ?Sized>(
        &self,
        state: &ParticleState,
        hit: &SurfaceHit,
        accumulators: &LocalAccumulators,
        _coverages: &CoverageState,
        _rng: &mut R,
    ) {
        let y = self.yields(state.energy, hit.cos_incidence(), hit.material);
        accumulators.add(0, hit.point, y.sputter);
        accumulators.add(1, hit.point, y.enhanced);
        accumulators.add(2, hit.point, y.passivation);
    }

    fn reflect<R: Rng + ?Sized>(
        &self,
        state: &mut ParticleState,
        hit: &SurfaceHit,
        _coverages: &CoverageState,
        rng: &mut R,
    ) -> Reflection {
        let incidence = hit.incidence_angle();
        let incident_energy = state.energy;
        let peak = self.reflected_energy_peak(incidence);
        let energy = sample_truncated_normal(
            rng,
            peak * incident_energy,
            REFLECTED_ENERGY_SPREAD * incident_energy,
            0.0,
            incident_energy,
        );

        if energy > self.params.substrate.eth_ie {
            state.energy = energy;
            let direction = coned_cosine(
                &hit.direction,
                &hit.normal,
                self.params.ions.min_angle,
                self.dim,
                rng,
            );
            Reflection {
                absorb_probability: 0.0,
                direction,
            }
        } else {
            Reflection::absorbed()
        }
    }
}
