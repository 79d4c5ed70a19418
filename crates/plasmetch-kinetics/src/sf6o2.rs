//! Coverage and velocity model for SF6/O2 etching of silicon.
//!
//! Fluorine and oxygen compete for the same surface sites. At steady
//! state the fluorine coverage θ_F and oxygen coverage θ_O at a point are
//!
//! ```text
//! θ_F = Γ_F / (Γ_F + L_F · (1 + Γ_O / L_O))
//! θ_O = Γ_O / (Γ_O + L_O · (1 + Γ_F / L_F))
//! ```
//!
//! with adsorption terms `Γ_X = rate_X · flux_X · β_X` and loss terms
//! `L_F = k_σ + 2 · Y_ie · Γ_ion` and `L_O = β_σ + Y_O · Γ_ion`. The etch
//! velocity combines chemical etching by adsorbed fluorine, physical
//! sputtering, and ion-enhanced etching.

use plasmetch_core::labels::{
    ETCHANT_RATE, ION_ENHANCED_RATE, ION_SPUTTERING_RATE, OXYGEN_RATE, OXYGEN_SPUTTERING_RATE,
};
use plasmetch_core::{
    CoverageState, Dimension, KineticsError, Material, Parameters, RateField, Triple,
};

use crate::model::SurfaceModel;

/// Normalised flux below which a species is treated as absent and its
/// coverage is set to exactly zero.
pub const FLUX_EPSILON: f64 = 1e-6;

const REQUIRED_CHANNELS: [&str; 5] = [
    ION_SPUTTERING_RATE,
    ION_ENHANCED_RATE,
    OXYGEN_SPUTTERING_RATE,
    ETCHANT_RATE,
    OXYGEN_RATE,
];

/// SF6/O2 surface model with fluorine and oxygen coverages.
#[derive(Clone, Debug)]
pub struct Sf6O2SurfaceModel {
    dim: Dimension,
    coverages: Option<CoverageState>,
}

impl Sf6O2SurfaceModel {
    /// Uninitialized model for a run of dimensionality `dim`.
    pub fn new(dim: Dimension) -> Self {
        Self {
            dim,
            coverages: None,
        }
    }

    fn initialized(&self) -> Result<&CoverageState, KineticsError> {
        self.coverages.as_ref().ok_or(KineticsError::NotInitialized)
    }
}

fn check_len(what: &str, expected: usize, actual: usize) -> Result<(), KineticsError> {
    if expected != actual {
        return Err(KineticsError::LengthMismatch {
            what: what.to_string(),
            expected,
            actual,
        });
    }
    Ok(())
}

impl SurfaceModel for Sf6O2SurfaceModel {
    fn name(&self) -> &str {
        "SF6O2SurfaceModel"
    }

    fn dimension(&self) -> Dimension {
        self.dim
    }

    fn initialize_coverages(&mut self, point_count: usize) {
        log::debug!("initializing SF6/O2 coverages for {point_count} points");
        self.coverages = Some(CoverageState::new(point_count));
    }

    fn coverages(&self) -> Option<&CoverageState> {
        self.coverages.as_ref()
    }

    fn required_channels(&self) -> &[&'static str] {
        &REQUIRED_CHANNELS
    }

    fn update_coverages(
        &mut self,
        params: &Parameters,
        rates: &RateField,
        materials: &[Material],
    ) -> Result<(), KineticsError> {
        let n = self.initialized()?.len();
        let etchant = rates.channel(ETCHANT_RATE, n)?;
        let ion_enhanced = rates.channel(ION_ENHANCED_RATE, n)?;
        let oxygen = rates.channel(OXYGEN_RATE, n)?;
        let oxygen_sputtering = rates.channel(OXYGEN_SPUTTERING_RATE, n)?;
        check_len("materials", n, materials.len())?;

        let si = &params.substrate;
        let mut e_new = Vec::with_capacity(n);
        let mut o_new = Vec::with_capacity(n);

        // Coverage adsorption uses the global sticking coefficients at every
        // point; mask-specific sticking applies only to per-hit reflection.
        for i in 0..n {
            let gain_f = etchant[i] * params.etchant_flux * params.beta_f;
            let gain_o = oxygen[i] * params.oxygen_flux * params.beta_o;
            let loss_f = si.k_sigma + 2.0 * ion_enhanced[i] * params.ion_flux;
            let loss_o = si.beta_sigma + oxygen_sputtering[i] * params.ion_flux;

            e_new.push(if etchant[i] < FLUX_EPSILON {
                0.0
            } else {
                gain_f / (gain_f + loss_f * (1.0 + gain_o / loss_o))
            });
            o_new.push(if oxygen[i] < FLUX_EPSILON {
                0.0
            } else {
                gain_o / (gain_o + loss_o * (1.0 + gain_f / loss_f))
            });
        }

        // Both arrays were derived from the same inputs; commit together.
        if let Some(coverages) = self.coverages.as_mut() {
            coverages.commit(e_new, o_new);
        }
        Ok(())
    }

    fn compute_velocities(
        &self,
        params: &Parameters,
        rates: &RateField,
        coordinates: &[Triple],
        materials: &[Material],
    ) -> Result<Vec<f64>, KineticsError> {
        let coverages = self.initialized()?;
        let n = coverages.len();
        let sputtering = rates.channel(ION_SPUTTERING_RATE, n)?;
        let ion_enhanced = rates.channel(ION_ENHANCED_RATE, n)?;
        check_len("coordinates", n, coordinates.len())?;
        check_len("materials", n, materials.len())?;

        let e_coverage = coverages.e_coverage();
        let depth_axis = self.dim.depth_axis();
        let mut velocities = vec![0.0; n];

        for i in 0..n {
            if coordinates[i][depth_axis] < params.etch_stop_depth {
                log::info!("etch stop depth reached");
                return Ok(vec![0.0; n]);
            }

            velocities[i] = if materials[i].is_mask() {
                -(1.0 / params.mask.rho) * sputtering[i] * params.ion_flux
            } else {
                -(1.0 / params.substrate.rho)
                    * (params.substrate.k_sigma * e_coverage[i] / 4.0
                        + sputtering[i] * params.ion_flux
                        + e_coverage[i] * ion_enhanced[i] * params.ion_flux)
            };
        }

        Ok(velocities)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use plasmetch_test_utils::{flat_surface, RatesBuilder};

    fn rates(n: usize) -> RatesBuilder {
        RatesBuilder::sf6o2(n)
    }

    #[test]
    fn operations_before_initialization_fail() {
        let params = Parameters::default();
        let mut model = Sf6O2SurfaceModel::new(Dimension::Three);
        let r = rates(2).build();
        assert_eq!(
            model.update_coverages(&params, &r, &[Material::Other; 2]),
            Err(KineticsError::NotInitialized)
        );
        let coords = flat_surface(2, 0.0, Dimension::Three);
        assert_eq!(
            model.compute_velocities(&params, &r, &coords, &[Material::Other; 2]),
            Err(KineticsError::NotInitialized)
        );
        assert!(model.coverages().is_none());
    }

    #[test]
    fn zero_rates_give_zero_coverages() {
        let params = Parameters::default();
        let mut model = Sf6O2SurfaceModel::new(Dimension::Three);
        model.initialize_coverages(5);
        model
            .update_coverages(&params, &rates(5).build(), &[Material::Other; 5])
            .unwrap();
        let cov = model.coverages().unwrap();
        assert!(cov.e_coverage().iter().all(|&v| v == 0.0));
        assert!(cov.o_coverage().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn closed_form_matches_hand_computation() {
        let params = Parameters::default();
        let mut model = Sf6O2SurfaceModel::new(Dimension::Three);
        model.initialize_coverages(1);
        let r = rates(1)
            .etchant(1.0)
            .oxygen(0.5)
            .ion_enhanced(2.0)
            .oxygen_sputtering(3.0)
            .build();
        model
            .update_coverages(&params, &r, &[Material::Other])
            .unwrap();

        let gain_f = 1.0 * 1800.0 * 0.7;
        let gain_o = 0.5 * 100.0 * 1.0;
        let loss_f = 300.0 + 2.0 * 2.0 * 12.0;
        let loss_o = 0.05 + 3.0 * 12.0;
        let e = gain_f / (gain_f + loss_f * (1.0 + gain_o / loss_o));
        let o = gain_o / (gain_o + loss_o * (1.0 + gain_f / loss_f));
        let (ce, co) = model.coverages().unwrap().at(0);
        assert!((ce - e).abs() < 1e-12);
        assert!((co - o).abs() < 1e-12);
    }

    #[test]
    fn zero_etchant_zeroes_only_etchant_coverage() {
        let params = Parameters::default();
        let mut model = Sf6O2SurfaceModel::new(Dimension::Three);
        model.initialize_coverages(1);
        let r = rates(1).etchant(0.0).oxygen(5.0).build();
        model
            .update_coverages(&params, &r, &[Material::Other])
            .unwrap();
        let (e, o) = model.coverages().unwrap().at(0);
        assert_eq!(e, 0.0);
        assert!(o > 0.0);
    }

    #[test]
    fn zero_oxygen_zeroes_only_oxygen_coverage() {
        let params = Parameters::default();
        let mut model = Sf6O2SurfaceModel::new(Dimension::Three);
        for oxygen in [0.0, FLUX_EPSILON / 2.0] {
            model.initialize_coverages(1);
            let r = rates(1).etchant(5.0).oxygen(oxygen).build();
            model
                .update_coverages(&params, &r, &[Material::Other])
                .unwrap();
            let (e, o) = model.coverages().unwrap().at(0);
            assert_eq!(o, 0.0, "oxygen rate {oxygen}");
            assert!(e > 0.0);
        }
    }

    #[test]
    fn mask_and_substrate_points_share_coverage_solution() {
        let params = Parameters::default();
        let mut model = Sf6O2SurfaceModel::new(Dimension::Three);
        model.initialize_coverages(2);
        let r = rates(2)
            .etchant(1.0)
            .oxygen(0.5)
            .ion_enhanced(2.0)
            .oxygen_sputtering(3.0)
            .build();
        model
            .update_coverages(&params, &r, &[Material::Other, Material::Mask])
            .unwrap();
        let cov = model.coverages().unwrap();
        assert_eq!(cov.at(0), cov.at(1));
        assert!(cov.at(1).0 > 0.0 && cov.at(1).1 > 0.0);
    }

    #[test]
    fn flux_below_epsilon_is_treated_as_absent() {
        let params = Parameters::default();
        let mut model = Sf6O2SurfaceModel::new(Dimension::Three);
        model.initialize_coverages(1);
        let r = rates(1).etchant(FLUX_EPSILON / 2.0).oxygen(FLUX_EPSILON / 2.0).build();
        model
            .update_coverages(&params, &r, &[Material::Other])
            .unwrap();
        assert_eq!(model.coverages().unwrap().at(0), (0.0, 0.0));
    }

    #[test]
    fn update_rejects_missing_or_mis_sized_channels() {
        let params = Parameters::default();
        let mut model = Sf6O2SurfaceModel::new(Dimension::Three);
        model.initialize_coverages(3);

        let mut r = rates(3).build();
        r.insert(OXYGEN_RATE, vec![0.0; 2]);
        let err = model
            .update_coverages(&params, &r, &[Material::Other; 3])
            .unwrap_err();
        assert_eq!(
            err,
            KineticsError::LengthMismatch {
                what: OXYGEN_RATE.into(),
                expected: 3,
                actual: 2,
            }
        );

        let mut partial = RateField::new();
        partial.insert(ETCHANT_RATE, vec![0.0; 3]);
        assert!(matches!(
            model.update_coverages(&params, &partial, &[Material::Other; 3]),
            Err(KineticsError::MissingChannel { .. })
        ));

        assert!(matches!(
            model.update_coverages(&params, &rates(3).build(), &[Material::Other; 2]),
            Err(KineticsError::LengthMismatch { .. })
        ));
        // A failed update leaves the coverage length untouched.
        assert_eq!(model.coverages().unwrap().len(), 3);
    }

    #[test]
    fn mask_velocity_scenario() {
        let params = Parameters::default();
        let mut model = Sf6O2SurfaceModel::new(Dimension::Three);
        model.initialize_coverages(1);
        let r = rates(1).ion_sputtering(0.1).build();
        let coords = flat_surface(1, 0.0, Dimension::Three);
        let v = model
            .compute_velocities(&params, &r, &coords, &[Material::Mask])
            .unwrap();
        assert!((v[0] - (-0.0024)).abs() < 1e-15);
    }

    #[test]
    fn substrate_velocity_combines_three_mechanisms() {
        let params = Parameters::default();
        let mut model = Sf6O2SurfaceModel::new(Dimension::Two);
        model.initialize_coverages(1);
        let r = rates(1)
            .etchant(1.0)
            .ion_sputtering(0.2)
            .ion_enhanced(0.5)
            .build();
        let coords = flat_surface(1, 0.0, Dimension::Two);
        let v = model
            .calculate_velocities(&params, &r, &coords, &[Material::Other])
            .unwrap();
        let e = model.coverages().unwrap().e_coverage()[0];
        assert!(e > 0.0);
        let expected = -(1.0 / 5.02) * (300.0 * e / 4.0 + 0.2 * 12.0 + e * 0.5 * 12.0);
        assert!((v[0] - expected).abs() < 1e-12);
    }

    #[test]
    fn one_point_below_stop_depth_freezes_everything() {
        let params = Parameters {
            etch_stop_depth: -1.0,
            ..Parameters::default()
        };
        let mut model = Sf6O2SurfaceModel::new(Dimension::Three);
        model.initialize_coverages(4);
        let r = rates(4).ion_sputtering(0.3).etchant(1.0).build();
        let mut coords = flat_surface(4, 0.0, Dimension::Three);
        let materials = [Material::Other; 4];

        let moving = model
            .calculate_velocities(&params, &r, &coords, &materials)
            .unwrap();
        assert!(moving.iter().all(|&v| v < 0.0));

        // Only the last point crosses the stop depth.
        coords[3][2] = -1.5;
        let frozen = model
            .compute_velocities(&params, &r, &coords, &materials)
            .unwrap();
        assert_eq!(frozen, vec![0.0; 4]);
    }

    #[test]
    fn depth_axis_follows_dimension() {
        let params = Parameters {
            etch_stop_depth: -1.0,
            ..Parameters::default()
        };
        let mut model = Sf6O2SurfaceModel::new(Dimension::Two);
        model.initialize_coverages(1);
        let r = rates(1).ion_sputtering(0.3).build();
        // z is ignored in 2D; y is the depth.
        let v = model
            .compute_velocities(&params, &r, &[[0.0, 0.0, -5.0]], &[Material::Other])
            .unwrap();
        assert!(v[0] < 0.0);
        let v = model
            .compute_velocities(&params, &r, &[[0.0, -5.0, 0.0]], &[Material::Other])
            .unwrap();
        assert_eq!(v, vec![0.0]);
    }

    #[test]
    fn reinitialization_resets_and_resizes() {
        let params = Parameters::default();
        let mut model = Sf6O2SurfaceModel::new(Dimension::Three);
        model.initialize_coverages(2);
        model
            .update_coverages(
                &params,
                &rates(2).etchant(1.0).oxygen(1.0).build(),
                &[Material::Other; 2],
            )
            .unwrap();
        assert!(model.coverages().unwrap().e_coverage()[0] > 0.0);

        model.initialize_coverages(3);
        let cov = model.coverages().unwrap();
        assert_eq!(cov.len(), 3);
        assert!(cov.e_coverage().iter().all(|&v| v == 0.0));
    }
}
