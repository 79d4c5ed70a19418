//! The [`SurfaceModel`] trait.

use plasmetch_core::{CoverageState, Dimension, KineticsError, Material, Parameters, RateField, Triple};

/// A surface-kinetics model with persistent per-point coverage state.
///
/// # Contract
///
/// - [`initialize_coverages`](Self::initialize_coverages) must be called
///   before any other operation and again whenever the point count changes.
/// - Every per-point input (each required rate channel, `materials`,
///   `coordinates`) must have exactly one entry per point. A mismatch is a
///   [`KineticsError`]; the model never resizes silently.
/// - Rates must be fully aggregated: the driver calls these methods only
///   after every worker of the tracing pass has finished.
/// - `params` is the assembly's parameter set, read-only for the call.
pub trait SurfaceModel: Send {
    /// Human-readable model name.
    fn name(&self) -> &str;

    /// Dimensionality the model was built for; selects the depth axis.
    fn dimension(&self) -> Dimension;

    /// (Re)allocate zero coverages for `point_count` points.
    fn initialize_coverages(&mut self, point_count: usize);

    /// Current coverages, or `None` before initialization.
    fn coverages(&self) -> Option<&CoverageState>;

    /// Rate channels the model reads. An assembly must have particles
    /// writing every one of them.
    fn required_channels(&self) -> &[&'static str];

    /// Recompute the coverages from this iteration's rates.
    fn update_coverages(
        &mut self,
        params: &Parameters,
        rates: &RateField,
        materials: &[Material],
    ) -> Result<(), KineticsError>;

    /// Per-point surface velocity from the rates and current coverages.
    fn compute_velocities(
        &self,
        params: &Parameters,
        rates: &RateField,
        coordinates: &[Triple],
        materials: &[Material],
    ) -> Result<Vec<f64>, KineticsError>;

    /// Update coverages, then compute velocities from the new coverages.
    fn calculate_velocities(
        &mut self,
        params: &Parameters,
        rates: &RateField,
        coordinates: &[Triple],
        materials: &[Material],
    ) -> Result<Vec<f64>, KineticsError> {
        self.update_coverages(params, rates, materials)?;
        self.compute_velocities(params, rates, coordinates, materials)
    }
}
