//! Plasmetch: particle contracts and surface kinetics for SF6/O2 plasma
//! etching of silicon through a mask.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all plasmetch sub-crates. An external ray-tracing engine drives the
//! particles; an external advection step consumes the velocities.
//!
//! # Quick start
//!
//! ```rust
//! use plasmetch::prelude::*;
//! use rand::SeedableRng;
//!
//! let n = 4;
//! let mut model = ProcessModel::sf6o2(Parameters::default(), Dimension::Three).unwrap();
//! model.initialize(n);
//!
//! let materials = vec![Material::Mask, Material::Other, Material::Other, Material::Mask];
//! let coordinates: Vec<Triple> = (0..n).map(|i| [i as f64, 0.0, 0.0]).collect();
//! let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(1);
//!
//! // One tracing pass per species: every point is hit once, head on.
//! let mut rates = RateField::new();
//! {
//!     let coverages = model.surface_model().and_then(|m| m.coverages()).unwrap();
//!     for particle in model.particles() {
//!         let acc = LocalAccumulators::for_particle(&particle, n);
//!         for point in 0..n {
//!             let hit = SurfaceHit {
//!                 weight: 1.0,
//!                 direction: [0.0, 0.0, -1.0],
//!                 normal: [0.0, 0.0, 1.0],
//!                 point,
//!                 material: materials[point],
//!             };
//!             let state = particle.sample_initial_state(&mut rng);
//!             particle.on_surface_hit(&state, &hit, &acc, coverages, &mut rng);
//!         }
//!         acc.merge_into(&mut rates);
//!     }
//! }
//!
//! let velocities = model.advance(&rates, &coordinates, &materials).unwrap();
//! assert_eq!(velocities.len(), n);
//! assert!(velocities[1] < velocities[0]);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `plasmetch-core` | Parameters, rate fields, coverages, materials, errors |
//! | [`particles`] | `plasmetch-particles` | Particle contract, ion and neutrals, accumulators |
//! | [`kinetics`] | `plasmetch-kinetics` | Surface model trait and the SF6/O2 model |
//! | [`process`] | `plasmetch-process` | Process assembly and velocity-field adapter |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types, parameters and errors (`plasmetch-core`).
pub use plasmetch_core as types;

/// Particle contracts (`plasmetch-particles`).
///
/// The [`particles::ParticleContract`] trait is what the transport engine
/// calls per ray-surface event.
pub use plasmetch_particles as particles;

/// Surface kinetics (`plasmetch-kinetics`).
pub use plasmetch_kinetics as kinetics;

/// Process assembly (`plasmetch-process`).
///
/// Start from [`process::ProcessModel::sf6o2`].
pub use plasmetch_process as process;

/// Common imports for typical plasmetch usage.
///
/// ```rust
/// use plasmetch::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use plasmetch_core::{
        CoverageState, Dimension, Material, Parameters, RateField, Triple,
    };

    // Errors
    pub use plasmetch_core::{ConfigError, KineticsError};

    // Particles
    pub use plasmetch_particles::{
        LocalAccumulators, Particle, ParticleContract, ParticleState, Reflection, SurfaceHit,
    };

    // Kinetics
    pub use plasmetch_kinetics::{Sf6O2SurfaceModel, SurfaceModel};

    // Process
    pub use plasmetch_process::{
        DefaultVelocityField, ParticleKind, ProcessModel, TranslationMode,
    };
}
