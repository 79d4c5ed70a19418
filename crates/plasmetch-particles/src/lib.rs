//! Particle contracts for the SF6/O2 etching model.
//!
//! The external ray-tracing engine launches particles of one species per
//! tracing pass and calls into the [`ParticleContract`] on every
//! ray-surface event. Three species implement it:
//!
//! - [`Ion`]: energetic; carries its energy along the trajectory and
//!   writes sputtering and ion-enhanced yields. Reflects near-specularly.
//! - [`Etchant`]: neutral fluorine. Writes its flux and sticks with a
//!   coverage-dependent probability; reflects diffusely.
//! - [`Oxygen`]: neutral oxygen with its own sticking coefficients.
//!
//! The closed set is also available as the [`Particle`] enum for engines
//! that hold all species in one list.
//!
//! # Concurrency
//!
//! All callbacks take `&self`. Hits write into [`LocalAccumulators`] with
//! atomic adds, so one accumulator set may be shared by every worker of a
//! tracing pass. The coverages passed in are read-only for the whole pass.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod accumulator;
pub mod contract;
pub mod ion;
pub mod neutral;
pub mod particle;
pub mod reflection;
pub mod sampling;

pub use accumulator::LocalAccumulators;
pub use contract::{Labels, ParticleContract, ParticleState, Reflection, SurfaceHit};
pub use ion::{Ion, IonYields};
pub use neutral::{Etchant, Oxygen};
pub use particle::Particle;
