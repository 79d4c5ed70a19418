//! Process model assembly for plasmetch.
//!
//! A [`ProcessModel`] bundles everything the external driver needs for one
//! etching process: the ordered particle species to trace, the surface
//! model that turns aggregated rates into velocities, a
//! [`DefaultVelocityField`] adapter for the advection step, a process
//! name, and the [`Parameters`](plasmetch_core::Parameters) every
//! component reads.
//!
//! Use [`ProcessModel::sf6o2`] for the standard SF6/O2 etch or
//! [`ProcessModel::builder`] to assemble a custom one.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod kind;
pub mod model;
pub mod velocity;

pub use kind::ParticleKind;
pub use model::{ProcessModel, ProcessModelBuilder, SF6O2_PROCESS_NAME};
pub use velocity::{DefaultVelocityField, TranslationMode};
