//! The [`ProcessModel`] assembly and its builder.

use std::collections::HashSet;

use plasmetch_core::{
    ConfigError, Dimension, KineticsError, Material, Parameters, RateField, Triple,
};
use plasmetch_kinetics::{Sf6O2SurfaceModel, SurfaceModel};
use plasmetch_particles::Particle;

use crate::kind::ParticleKind;
use crate::velocity::{DefaultVelocityField, TranslationMode};

/// Process name of the [`ProcessModel::sf6o2`] preset.
pub const SF6O2_PROCESS_NAME: &str = "SF6O2Etching";

/// One etching process: particles, surface model, velocity adapter and
/// the parameters they share.
///
/// Parameters are owned here. [`particles`](Self::particles) hands out
/// views borrowing them, so the borrow checker rules out
/// [`set_parameters`](Self::set_parameters) while a tracing pass holds
/// particles. Parameters therefore change only between iterations.
///
/// # Examples
///
/// ```
/// use plasmetch_core::{Dimension, Material, Parameters};
/// use plasmetch_process::ProcessModel;
///
/// let mut model = ProcessModel::sf6o2(Parameters::default(), Dimension::Three).unwrap();
/// assert_eq!(model.process_name(), "SF6O2Etching");
/// assert_eq!(model.all_labels().len(), 5);
///
/// model.initialize(2);
/// let rates = plasmetch_core::RateField::from_iter(
///     model.all_labels().into_iter().map(|l| (l.to_string(), vec![0.0; 2])),
/// );
/// let v = model
///     .advance(&rates, &[[0.0; 3]; 2], &[Material::Other; 2])
///     .unwrap();
/// assert_eq!(v, vec![0.0, 0.0]);
/// ```
pub struct ProcessModel {
    name: String,
    dim: Dimension,
    params: Parameters,
    particles: Vec<ParticleKind>,
    surface_model: Option<Box<dyn SurfaceModel>>,
    velocity_field: Option<DefaultVelocityField>,
}

impl std::fmt::Debug for ProcessModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProcessModel")
            .field("name", &self.name)
            .field("dim", &self.dim)
            .field("particles", &self.particles)
            .field(
                "surface_model",
                &self.surface_model.as_ref().map(|m| m.name().to_string()),
            )
            .field("velocity_field", &self.velocity_field)
            .finish_non_exhaustive()
    }
}

impl ProcessModel {
    /// Start a custom assembly.
    pub fn builder() -> ProcessModelBuilder {
        ProcessModelBuilder {
            name: None,
            dim: Dimension::Three,
            params: Parameters::default(),
            particles: Vec::new(),
            surface_model: None,
            velocity_field: None,
        }
    }

    /// The SF6/O2 etch: ion, etchant and oxygen with the SF6/O2 surface
    /// model and a nearest-neighbour velocity field.
    ///
    /// # Errors
    ///
    /// [`ConfigError::InvalidParameter`] if `params` fails validation.
    pub fn sf6o2(params: Parameters, dim: Dimension) -> Result<Self, ConfigError> {
        Self::builder()
            .process_name(SF6O2_PROCESS_NAME)
            .dimension(dim)
            .parameters(params)
            .particle(ParticleKind::Ion)
            .particle(ParticleKind::Etchant)
            .particle(ParticleKind::Oxygen)
            .surface_model(Sf6O2SurfaceModel::new(dim))
            .velocity_field(DefaultVelocityField::new(TranslationMode::NearestNeighbour))
            .build()
    }

    /// Process name tag reported to the driver.
    pub fn process_name(&self) -> &str {
        &self.name
    }

    /// Dimensionality of the run.
    pub fn dimension(&self) -> Dimension {
        self.dim
    }

    /// The shared parameter set.
    pub fn parameters(&self) -> &Parameters {
        &self.params
    }

    /// Replace the parameters between iterations.
    ///
    /// # Errors
    ///
    /// [`ConfigError::InvalidParameter`] if `params` fails validation; the
    /// current parameters are kept.
    pub fn set_parameters(&mut self, params: Parameters) -> Result<(), ConfigError> {
        params.validate()?;
        self.params = params;
        Ok(())
    }

    /// Species in tracing order.
    pub fn particle_kinds(&self) -> &[ParticleKind] {
        &self.particles
    }

    /// Particles bound to this model's parameters, in tracing order.
    pub fn particles(&self) -> Vec<Particle<'_>> {
        self.particles
            .iter()
            .map(|kind| kind.bind(&self.params, self.dim))
            .collect()
    }

    /// Every channel label written by the particles, in tracing order.
    pub fn all_labels(&self) -> Vec<&'static str> {
        self.particles
            .iter()
            .flat_map(|kind| kind.local_data_labels())
            .collect()
    }

    /// The surface-kinetics model, if one was supplied.
    pub fn surface_model(&self) -> Option<&dyn SurfaceModel> {
        self.surface_model.as_deref()
    }

    /// Mutable access to the surface-kinetics model.
    pub fn surface_model_mut(&mut self) -> Option<&mut (dyn SurfaceModel + 'static)> {
        self.surface_model.as_deref_mut()
    }

    /// The velocity-field adapter, holding the last iteration's velocities.
    pub fn velocity_field(&self) -> Option<&DefaultVelocityField> {
        self.velocity_field.as_ref()
    }

    /// (Re)initialize the surface model's coverages for `point_count`
    /// points. Call whenever the geometry's point count changes.
    ///
    /// Without a surface model this logs a warning and does nothing.
    pub fn initialize(&mut self, point_count: usize) {
        match self.surface_model.as_deref_mut() {
            Some(model) => model.initialize_coverages(point_count),
            None => log::warn!(
                "process '{}' has no surface model; coverages not initialized",
                self.name
            ),
        }
    }

    /// Run one iteration's kinetics: update coverages, compute velocities
    /// and load them into the velocity field.
    ///
    /// Must be called only after the tracing pass has fully aggregated
    /// `rates`. Returns the velocities.
    ///
    /// With no surface model, or no geometry (empty `coordinates`), this
    /// logs a warning and returns an empty vector.
    ///
    /// # Errors
    ///
    /// Any [`KineticsError`] from the surface model (not initialized, a
    /// missing channel, or a length mismatch). These are fatal for the run.
    pub fn advance(
        &mut self,
        rates: &RateField,
        coordinates: &[Triple],
        materials: &[Material],
    ) -> Result<Vec<f64>, KineticsError> {
        let Some(model) = self.surface_model.as_deref_mut() else {
            log::warn!("process '{}' has no surface model", self.name);
            return Ok(Vec::new());
        };
        if coordinates.is_empty() {
            log::warn!("process '{}' advanced without geometry", self.name);
            return Ok(Vec::new());
        }

        let velocities = model.calculate_velocities(&self.params, rates, coordinates, materials)?;
        if let Some(field) = self.velocity_field.as_mut() {
            field.set_velocities(velocities.clone());
        }
        Ok(velocities)
    }
}

/// Builder for [`ProcessModel`].
///
/// Required: a process name. Particles, surface model and velocity field
/// may be left out; [`ProcessModel::advance`] then degrades to a logged
/// no-op.
pub struct ProcessModelBuilder {
    name: Option<String>,
    dim: Dimension,
    params: Parameters,
    particles: Vec<ParticleKind>,
    surface_model: Option<Box<dyn SurfaceModel>>,
    velocity_field: Option<DefaultVelocityField>,
}

impl ProcessModelBuilder {
    /// Set the process name tag.
    pub fn process_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Dimensionality of the run (default: 3D).
    pub fn dimension(mut self, dim: Dimension) -> Self {
        self.dim = dim;
        self
    }

    /// Parameter set (default: [`Parameters::default`]).
    pub fn parameters(mut self, params: Parameters) -> Self {
        self.params = params;
        self
    }

    /// Append a species to the tracing order.
    pub fn particle(mut self, kind: ParticleKind) -> Self {
        self.particles.push(kind);
        self
    }

    /// Set the surface-kinetics model.
    pub fn surface_model(mut self, model: impl SurfaceModel + 'static) -> Self {
        self.surface_model = Some(Box::new(model));
        self
    }

    /// Set the velocity-field adapter.
    pub fn velocity_field(mut self, field: DefaultVelocityField) -> Self {
        self.velocity_field = Some(field);
        self
    }

    /// Build the assembly, validating all configuration.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::MissingComponent`] without a process name.
    /// - [`ConfigError::InvalidParameter`] if the parameters fail validation.
    /// - [`ConfigError::DuplicateLabel`] if two particles write the same
    ///   channel (including the same species added twice).
    /// - [`ConfigError::DimensionMismatch`] if the surface model was built
    ///   for a different dimensionality than the process.
    /// - [`ConfigError::UncoveredChannel`] if the surface model reads a
    ///   channel no particle writes.
    pub fn build(self) -> Result<ProcessModel, ConfigError> {
        let name = self.name.ok_or(ConfigError::MissingComponent {
            component: "process name",
        })?;
        if let Err(e) = self.params.validate() {
            log::warn!("process '{name}' rejected: {e}");
            return Err(e);
        }

        let mut seen = HashSet::new();
        for kind in &self.particles {
            for label in kind.local_data_labels() {
                if !seen.insert(label) {
                    return Err(ConfigError::DuplicateLabel {
                        label: label.to_string(),
                    });
                }
            }
        }

        if let Some(model) = &self.surface_model {
            if model.dimension() != self.dim {
                return Err(ConfigError::DimensionMismatch {
                    process: self.dim,
                    surface_model: model.dimension(),
                });
            }
            if let Some(channel) = model
                .required_channels()
                .iter()
                .find(|c| !seen.contains(*c))
            {
                log::warn!("process '{name}' rejected: nothing writes '{channel}'");
                return Err(ConfigError::UncoveredChannel {
                    channel: channel.to_string(),
                });
            }
        }

        Ok(ProcessModel {
            name,
            dim: self.dim,
            params: self.params,
            particles: self.particles,
            surface_model: self.surface_model,
            velocity_field: self.velocity_field,
        })
    }
}
