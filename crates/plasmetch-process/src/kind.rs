//! Species selectors stored by the assembly.

use plasmetch_core::labels::{
    ETCHANT_RATE, ION_ENHANCED_RATE, ION_SPUTTERING_RATE, OXYGEN_RATE, OXYGEN_SPUTTERING_RATE,
};
use plasmetch_core::{Dimension, Parameters};
use plasmetch_particles::{Labels, Particle};

/// Which particle species a process traces.
///
/// The assembly stores kinds rather than bound particles so that it can own
/// its [`Parameters`] while handing out particles that borrow them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ParticleKind {
    /// Energetic ion.
    Ion,
    /// Fluorine etchant.
    Etchant,
    /// Oxygen.
    Oxygen,
}

impl ParticleKind {
    /// Bind this species to a parameter set.
    pub fn bind(self, params: &Parameters, dim: Dimension) -> Particle<'_> {
        match self {
            Self::Ion => Particle::ion(params, dim),
            Self::Etchant => Particle::etchant(params, dim),
            Self::Oxygen => Particle::oxygen(params, dim),
        }
    }

    /// Channel labels the species writes. Independent of parameters.
    pub fn local_data_labels(self) -> Labels {
        match self {
            Self::Ion => Labels::from_slice(&[
                ION_SPUTTERING_RATE,
                ION_ENHANCED_RATE,
                OXYGEN_SPUTTERING_RATE,
            ]),
            Self::Etchant => Labels::from_slice(&[ETCHANT_RATE]),
            Self::Oxygen => Labels::from_slice(&[OXYGEN_RATE]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use plasmetch_particles::ParticleContract;

    #[test]
    fn bound_particle_matches_kind() {
        let params = Parameters::default();
        for (kind, name) in [
            (ParticleKind::Ion, "Ion"),
            (ParticleKind::Etchant, "Etchant"),
            (ParticleKind::Oxygen, "Oxygen"),
        ] {
            assert_eq!(kind.bind(&params, Dimension::Two).name(), name);
        }
    }

    #[test]
    fn ion_writes_three_channels() {
        assert_eq!(ParticleKind::Ion.local_data_labels().len(), 3);
        assert_eq!(
            ParticleKind::Etchant.local_data_labels().as_slice(),
            &["etchantRate"]
        );
    }

    #[test]
    fn kind_labels_agree_with_bound_particle() {
        let params = Parameters::default();
        for kind in [ParticleKind::Ion, ParticleKind::Etchant, ParticleKind::Oxygen] {
            for dim in [Dimension::Two, Dimension::Three] {
                assert_eq!(
                    kind.local_data_labels(),
                    kind.bind(&params, dim).local_data_labels()
                );
            }
        }
    }
}
