//! The [`ParticleContract`] trait and the per-event data it exchanges.

use plasmetch_core::vector::{dot, Triple};
use plasmetch_core::{CoverageState, Material};
use rand::Rng;
use smallvec::SmallVec;

use crate::accumulator::LocalAccumulators;

/// Ordered channel labels declared by a particle species.
pub type Labels = SmallVec<[&'static str; 3]>;

/// Per-trajectory internal state of a particle.
///
/// Only the ion carries meaningful state (its current kinetic energy in
/// eV). Neutral species return the default state and never read it.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ParticleState {
    /// Kinetic energy in eV.
    pub energy: f64,
}

/// One ray-surface event as reported by the transport engine.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceHit {
    /// Current ray weight (> 0).
    pub weight: f64,
    /// Unit direction of the incoming ray.
    pub direction: Triple,
    /// Unit outward surface normal at the hit.
    pub normal: Triple,
    /// Index of the surface point that was hit.
    pub point: usize,
    /// Material of that point.
    pub material: Material,
}

impl SurfaceHit {
    /// Cosine of the incidence angle, clamped to `[0, 1]`.
    pub fn cos_incidence(&self) -> f64 {
        (-dot(&self.direction, &self.normal)).clamp(0.0, 1.0)
    }

    /// Incidence angle against the normal, in `[0, π/2]`.
    pub fn incidence_angle(&self) -> f64 {
        self.cos_incidence().acos()
    }
}

/// Outcome of a reflection event.
///
/// The engine terminates the particle with probability
/// `absorb_probability`; otherwise it continues tracing with weight
/// `weight * (1 - absorb_probability)` along `direction`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Reflection {
    /// Probability in `[0, 1]` that the particle ends here.
    pub absorb_probability: f64,
    /// Unit direction of the continuing ray. Zero when fully absorbed.
    pub direction: Triple,
}

impl Reflection {
    /// The particle ends here.
    pub fn absorbed() -> Self {
        Self {
            absorb_probability: 1.0,
            direction: [0.0; 3],
        }
    }

    /// Weight carried forward by a particle of weight `weight`.
    pub fn surviving_weight(&self, weight: f64) -> f64 {
        weight * (1.0 - self.absorb_probability)
    }
}

/// Behaviour of one particle species at the surface.
///
/// Implementations are stateless apart from borrowed parameters; the
/// per-trajectory state lives in [`ParticleState`], owned by the engine.
///
/// # Examples
///
/// ```
/// use plasmetch_core::{CoverageState, Dimension, Material, Parameters};
/// use plasmetch_particles::{Etchant, LocalAccumulators, ParticleContract, SurfaceHit};
/// use rand::SeedableRng;
///
/// let params = Parameters::default();
/// let etchant = Etchant::new(&params, Dimension::Three);
/// let coverages = CoverageState::new(1);
/// let acc = LocalAccumulators::for_particle(&etchant, 1);
/// let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(7);
///
/// let hit = SurfaceHit {
///     weight: 1.0,
///     direction: [0.0, 0.0, -1.0],
///     normal: [0.0, 0.0, 1.0],
///     point: 0,
///     material: Material::Other,
/// };
/// let state = etchant.sample_initial_state(&mut rng);
/// etchant.on_surface_hit(&state, &hit, &acc, &coverages, &mut rng);
/// assert_eq!(acc.value(0, 0), 1.0);
/// ```
pub trait ParticleContract {
    /// Human-readable species name.
    fn name(&self) -> &str;

    /// Draw the internal state of a newly launched particle.
    fn sample_initial_state<R: Rng + ?Sized>(&self, rng: &mut R) -> ParticleState;

    /// Cosine power of the angular launch distribution at the source plane.
    fn source_exponent(&self) -> f64;

    /// Channel labels this species writes, in accumulator order.
    fn local_data_labels(&self) -> Labels;

    /// Record the contribution of one hit at `hit.point`.
    ///
    /// Only adds into `accumulators`; never reads it.
    fn on_surface_hit<R: Rng + ?Sized>(
        &self,
        state: &ParticleState,
        hit: &SurfaceHit,
        accumulators: &LocalAccumulators,
        coverages: &CoverageState,
        rng: &mut R,
    );

    /// Decide absorption and the continuing direction after a hit.
    ///
    /// May update `state` (the ion loses energy on reflection).
    fn reflect<R: Rng + ?Sized>(
        &self,
        state: &mut ParticleState,
        hit: &SurfaceHit,
        coverages: &CoverageState,
        rng: &mut R,
    ) -> Reflection;
}
