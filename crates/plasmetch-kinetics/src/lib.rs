//! Surface kinetics for the plasmetch SF6/O2 model.
//!
//! After every tracing pass the driver hands the aggregated rate channels
//! to a [`SurfaceModel`], which updates the persistent surface coverages
//! and turns rates and coverages into one signed velocity per point
//! (negative = material removal).
//!
//! The only implementation shipped is [`Sf6O2SurfaceModel`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod model;
pub mod sf6o2;

pub use model::SurfaceModel;
pub use sf6o2::{Sf6O2SurfaceModel, FLUX_EPSILON};
