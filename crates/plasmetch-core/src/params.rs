//! Process parameters for SF6/O2 plasma etching of silicon through a mask.
//!
//! Units: fluxes in 1e15 cm⁻² s⁻¹, energies in eV, densities in
//! 1e22 atoms/cm³, angles in radians. Resulting velocities are in µm/s.
//!
//! [`Parameters`] is read-only while an iteration is running. The process
//! assembly owns it; particles and the kinetics model only borrow it.

use crate::error::ConfigError;

/// Coefficients of the masking layer.
#[derive(Clone, Debug, PartialEq)]
pub struct MaskParameters {
    /// Atomic density.
    pub rho: f64,
    /// Etchant sticking coefficient on the mask.
    pub beta_f: f64,
    /// Oxygen sticking coefficient on the mask.
    pub beta_o: f64,
    /// Sputtering threshold energy.
    pub eth_sp: f64,
    /// Sputtering yield prefactor.
    pub a_sp: f64,
    /// Sputtering angular coefficient.
    pub b_sp: f64,
}

impl Default for MaskParameters {
    fn default() -> Self {
        Self {
            rho: 500.0,
            beta_f: 0.01,
            beta_o: 0.1,
            eth_sp: 20.0,
            a_sp: 0.0139,
            b_sp: 9.3,
        }
    }
}

/// Coefficients of the substrate (silicon).
#[derive(Clone, Debug, PartialEq)]
pub struct SubstrateParameters {
    /// Atomic density.
    pub rho: f64,
    /// Sputtering threshold energy.
    pub eth_sp: f64,
    /// Ion-enhanced etching threshold energy. Also the energy below which a
    /// reflected ion is terminated.
    pub eth_ie: f64,
    /// Sputtering yield prefactor.
    pub a_sp: f64,
    /// Sputtering angular coefficient.
    pub b_sp: f64,
    /// Ion-enhanced etching yield prefactor.
    pub a_ie: f64,
    /// Chemical etch rate constant.
    pub k_sigma: f64,
    /// Oxygen (passivation) chemical removal constant.
    pub beta_sigma: f64,
}

impl Default for SubstrateParameters {
    fn default() -> Self {
        Self {
            rho: 5.02,
            eth_sp: 20.0,
            eth_ie: 4.0,
            a_sp: 0.0337,
            b_sp: 9.3,
            a_ie: 0.0361,
            k_sigma: 3.0e2,
            beta_sigma: 5.0e-2,
        }
    }
}

/// Ion-enhanced removal of the oxygen passivation layer.
#[derive(Clone, Debug, PartialEq)]
pub struct PassivationParameters {
    /// Threshold energy.
    pub eth_ie: f64,
    /// Yield prefactor.
    pub a_ie: f64,
}

impl Default for PassivationParameters {
    fn default() -> Self {
        Self {
            eth_ie: 4.0,
            a_ie: 0.0361,
        }
    }
}

/// Ion energy distribution and reflection parameters.
#[derive(Clone, Debug, PartialEq)]
pub struct IonParameters {
    /// Mean of the source energy distribution.
    pub mean_energy: f64,
    /// Standard deviation of the source energy distribution.
    pub sigma_energy: f64,
    /// Cosine power of the angular source distribution.
    pub exponent: f64,
    /// Incidence angle separating the two reflected-energy regimes.
    pub inflect_angle: f64,
    /// Power of the low-angle reflected-energy ramp.
    pub n_l: f64,
    /// Minimum incidence angle used to size the reflection cone.
    pub min_angle: f64,
}

impl Default for IonParameters {
    fn default() -> Self {
        Self {
            mean_energy: 100.0,
            sigma_energy: 10.0,
            exponent: 500.0,
            inflect_angle: 1.553_343_03,
            n_l: 10.0,
            min_angle: 1.396_263_4,
        }
    }
}

/// Full parameter set of the SF6/O2 model.
#[derive(Clone, Debug, PartialEq)]
pub struct Parameters {
    /// Ion flux.
    pub ion_flux: f64,
    /// Etchant (fluorine) flux.
    pub etchant_flux: f64,
    /// Oxygen flux.
    pub oxygen_flux: f64,
    /// Depth below which the whole etch stops. `f64::MIN` disables it.
    pub etch_stop_depth: f64,
    /// Etchant sticking coefficient on non-mask material.
    pub beta_f: f64,
    /// Oxygen sticking coefficient on non-mask material.
    pub beta_o: f64,
    /// Mask coefficients.
    pub mask: MaskParameters,
    /// Substrate coefficients.
    pub substrate: SubstrateParameters,
    /// Passivation layer coefficients.
    pub passivation: PassivationParameters,
    /// Ion source and reflection parameters.
    pub ions: IonParameters,
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            ion_flux: 12.0,
            etchant_flux: 1.8e3,
            oxygen_flux: 1.0e2,
            etch_stop_depth: f64::MIN,
            beta_f: 0.7,
            beta_o: 1.0,
            mask: MaskParameters::default(),
            substrate: SubstrateParameters::default(),
            passivation: PassivationParameters::default(),
            ions: IonParameters::default(),
        }
    }
}

impl Parameters {
    /// Parameters for the given plasma conditions.
    ///
    /// Starts from the defaults, sets the three fluxes and the ion energy
    /// distribution, and uses an ion source exponent of 300 with a
    /// passivation removal prefactor of 2.
    pub fn with_conditions(
        ion_flux: f64,
        etchant_flux: f64,
        oxygen_flux: f64,
        mean_energy: f64,
        sigma_energy: f64,
    ) -> Self {
        let mut params = Self {
            ion_flux,
            etchant_flux,
            oxygen_flux,
            ..Self::default()
        };
        params.ions.mean_energy = mean_energy;
        params.ions.sigma_energy = sigma_energy;
        params.ions.exponent = 300.0;
        params.passivation.a_ie = 2.0;
        params
    }

    /// Check every parameter against its admissible range.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError::InvalidParameter`] found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        non_negative("ion_flux", self.ion_flux)?;
        non_negative("etchant_flux", self.etchant_flux)?;
        non_negative("oxygen_flux", self.oxygen_flux)?;
        if self.etch_stop_depth.is_nan() {
            return Err(ConfigError::InvalidParameter {
                name: "etch_stop_depth",
                reason: "must not be NaN".to_string(),
            });
        }

        probability("beta_f", self.beta_f)?;
        probability("beta_o", self.beta_o)?;
        probability("mask.beta_f", self.mask.beta_f)?;
        probability("mask.beta_o", self.mask.beta_o)?;

        positive("mask.rho", self.mask.rho)?;
        non_negative("mask.eth_sp", self.mask.eth_sp)?;
        non_negative("mask.a_sp", self.mask.a_sp)?;
        non_negative("mask.b_sp", self.mask.b_sp)?;

        positive("substrate.rho", self.substrate.rho)?;
        non_negative("substrate.eth_sp", self.substrate.eth_sp)?;
        non_negative("substrate.eth_ie", self.substrate.eth_ie)?;
        non_negative("substrate.a_sp", self.substrate.a_sp)?;
        non_negative("substrate.b_sp", self.substrate.b_sp)?;
        non_negative("substrate.a_ie", self.substrate.a_ie)?;
        // Both constants appear in coverage denominators.
        positive("substrate.k_sigma", self.substrate.k_sigma)?;
        positive("substrate.beta_sigma", self.substrate.beta_sigma)?;

        non_negative("passivation.eth_ie", self.passivation.eth_ie)?;
        non_negative("passivation.a_ie", self.passivation.a_ie)?;

        positive("ions.mean_energy", self.ions.mean_energy)?;
        non_negative("ions.sigma_energy", self.ions.sigma_energy)?;
        positive("ions.exponent", self.ions.exponent)?;
        positive("ions.n_l", self.ions.n_l)?;
        let half_pi = std::f64::consts::FRAC_PI_2;
        if !(self.ions.inflect_angle > 0.0 && self.ions.inflect_angle < half_pi) {
            return Err(ConfigError::InvalidParameter {
                name: "ions.inflect_angle",
                reason: format!("must lie in (0, pi/2), got {}", self.ions.inflect_angle),
            });
        }
        if !(0.0..=half_pi).contains(&self.ions.min_angle) {
            return Err(ConfigError::InvalidParameter {
                name: "ions.min_angle",
                reason: format!("must lie in [0, pi/2], got {}", self.ions.min_angle),
            });
        }
        Ok(())
    }
}

fn non_negative(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if !value.is_finite() || value < 0.0 {
        return Err(ConfigError::InvalidParameter {
            name,
            reason: format!("must be finite and >= 0, got {value}"),
        });
    }
    Ok(())
}

fn positive(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(ConfigError::InvalidParameter {
            name,
            reason: format!("must be finite and > 0, got {value}"),
        });
    }
    Ok(())
}

fn probability(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if !(0.0..=1.0).contains(&value) {
        return Err(ConfigError::InvalidParameter {
            name,
            reason: format!("must lie in [0, 1], got {value}"),
        });
    }
    Ok(())
}
