//! Per-point material classification.

/// Material tag of a surface point.
///
/// The kinetics model only distinguishes the masking layer from everything
/// else; richer material taxonomies are mapped onto these two tags by the
/// geometry layer before the tags reach this crate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Material {
    /// Masking layer. Only sputtered, never chemically etched.
    Mask,
    /// Substrate (silicon) or any other non-mask material.
    #[default]
    Other,
}

impl Material {
    /// Returns `true` for [`Material::Mask`].
    pub fn is_mask(self) -> bool {
        matches!(self, Self::Mask)
    }

    /// Map a numeric material id onto a tag, given the id used for the mask.
    ///
    /// Geometry engines commonly carry material ids as floating-point point
    /// data; the id is rounded before comparison.
    pub fn from_id(id: f64, mask_id: i32) -> Self {
        if id.round() as i32 == mask_id {
            Self::Mask
        } else {
            Self::Other
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_id_rounds() {
        assert_eq!(Material::from_id(0.0, 0), Material::Mask);
        assert_eq!(Material::from_id(0.9999, 1), Material::Mask);
        assert_eq!(Material::from_id(2.0, 1), Material::Other);
        assert!(!Material::default().is_mask());
    }
}
