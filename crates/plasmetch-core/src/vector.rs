//! Small fixed-size vector helpers on [`Triple`] and the [`Dimension`] tag.
//!
//! The transport engine hands directions and normals over as three
//! components regardless of the run's dimensionality; 2D runs keep the
//! third component at zero.

/// A position, direction or normal in model space.
pub type Triple = [f64; 3];

/// Dot product.
pub fn dot(a: &Triple, b: &Triple) -> f64 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

/// Cross product `a × b`.
pub fn cross(a: &Triple, b: &Triple) -> Triple {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

/// Scale a vector by `s`.
pub fn scale(a: &Triple, s: f64) -> Triple {
    [a[0] * s, a[1] * s, a[2] * s]
}

/// Component-wise `a + b`.
pub fn add(a: &Triple, b: &Triple) -> Triple {
    [a[0] + b[0], a[1] + b[1], a[2] + b[2]]
}

/// Component-wise `a - b`.
pub fn sub(a: &Triple, b: &Triple) -> Triple {
    [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
}

/// Euclidean length.
pub fn norm(a: &Triple) -> f64 {
    dot(a, a).sqrt()
}

/// Return `a / |a|`, or `a` unchanged if its length is zero.
pub fn normalize(a: &Triple) -> Triple {
    let n = norm(a);
    if n > 0.0 {
        scale(a, 1.0 / n)
    } else {
        *a
    }
}

/// Mirror `direction` about the plane with unit normal `normal`.
///
/// For an incoming ray (`direction · normal < 0`) this is the specular
/// reflection, pointing away from the surface.
pub fn specular(direction: &Triple, normal: &Triple) -> Triple {
    sub(direction, &scale(normal, 2.0 * dot(direction, normal)))
}

/// Dimensionality of a run.
///
/// Fixed for the lifetime of a process model; selects the depth axis used
/// for the etch-stop test and how reflection directions are sampled.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Dimension {
    /// Cross-section simulation in the x-y plane; depth is `y`.
    Two,
    /// Full 3D simulation; depth is `z`.
    Three,
}

impl Dimension {
    /// Index of the coordinate component that measures depth.
    pub fn depth_axis(self) -> usize {
        match self {
            Self::Two => 1,
            Self::Three => 2,
        }
    }

    /// Number of spatial components in use.
    pub fn components(self) -> usize {
        match self {
            Self::Two => 2,
            Self::Three => 3,
        }
    }
}
