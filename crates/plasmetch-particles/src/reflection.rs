//! Direction samplers for reflected particles.
//!
//! Both samplers return unit vectors in the hemisphere above `normal`. In
//! 2D runs directions stay in the x-y plane.

use std::f64::consts::{FRAC_PI_2, PI};

use plasmetch_core::vector::{add, cross, dot, normalize, scale, specular, Triple};
use plasmetch_core::Dimension;
use rand::Rng;

use crate::sampling::MAX_RESAMPLE_ATTEMPTS;

/// Two unit vectors completing `axis` to an orthonormal basis.
fn orthonormal_basis(axis: &Triple) -> (Triple, Triple) {
    let helper = if axis[0].abs() < 0.9 {
        [1.0, 0.0, 0.0]
    } else {
        [0.0, 1.0, 0.0]
    };
    let t1 = normalize(&cross(axis, &helper));
    let t2 = cross(axis, &t1);
    (t1, t2)
}

/// In-plane unit vector perpendicular to `axis` (2D runs).
fn in_plane_tangent(axis: &Triple) -> Triple {
    normalize(&[-axis[1], axis[0], 0.0])
}

/// Cosine-weighted (Lambertian) direction about `normal`.
pub fn diffuse<R: Rng + ?Sized>(normal: &Triple, dim: Dimension, rng: &mut R) -> Triple {
    match dim {
        Dimension::Three => {
            let (t1, t2) = orthonormal_basis(normal);
            let phi = 2.0 * PI * rng.random::<f64>();
            let r2: f64 = rng.random();
            let sin_theta = r2.sqrt();
            let cos_theta = (1.0 - r2).sqrt();
            let tangential = add(
                &scale(&t1, phi.cos() * sin_theta),
                &scale(&t2, phi.sin() * sin_theta),
            );
            normalize(&add(&tangential, &scale(normal, cos_theta)))
        }
        Dimension::Two => {
            // Uniform sin(theta) gives a density proportional to cos(theta).
            let sin_theta = 2.0 * rng.random::<f64>() - 1.0;
            let cos_theta = (1.0 - sin_theta * sin_theta).sqrt();
            let t = in_plane_tangent(normal);
            normalize(&add(&scale(normal, cos_theta), &scale(&t, sin_theta)))
        }
    }
}

/// Half-width of the reflection cone for a given incidence angle.
///
/// The cone narrows as the incidence angle (raised to at least
/// `min_angle`) approaches grazing.
pub fn cone_half_width(incidence_angle: f64, min_angle: f64) -> f64 {
    (FRAC_PI_2 - incidence_angle.max(min_angle)).max(0.0)
}

/// Direction from a cosine lobe centred on the specular reflection of
/// `direction` about `normal`.
///
/// The polar angle from the specular direction lies in
/// `[0, cone_half_width(incidence, min_angle)]`, with density vanishing at
/// the cone edge.
pub fn coned_cosine<R: Rng + ?Sized>(
    direction: &Triple,
    normal: &Triple,
    min_angle: f64,
    dim: Dimension,
    rng: &mut R,
) -> Triple {
    let incidence = (-dot(direction, normal)).clamp(0.0, 1.0).acos();
    let axis = normalize(&specular(direction, normal));
    let half_width = cone_half_width(incidence, min_angle);
    if half_width <= 0.0 {
        return axis;
    }

    let psi = sample_lobe_angle(half_width, dim, rng);
    let offset = match dim {
        Dimension::Three => {
            let (t1, t2) = orthonormal_basis(&axis);
            let phi = 2.0 * PI * rng.random::<f64>();
            add(&scale(&t1, phi.cos()), &scale(&t2, phi.sin()))
        }
        Dimension::Two => {
            let t = in_plane_tangent(&axis);
            if rng.random::<bool>() {
                t
            } else {
                scale(&t, -1.0)
            }
        }
    };
    normalize(&add(&scale(&axis, psi.cos()), &scale(&offset, psi.sin())))
}

/// Polar angle in `[0, half_width]` with density `cos(π/2 · ψ/half_width)`,
/// times `sin ψ` in 3D for the solid-angle measure.
fn sample_lobe_angle<R: Rng + ?Sized>(half_width: f64, dim: Dimension, rng: &mut R) -> f64 {
    let bound = match dim {
        Dimension::Three => half_width.sin(),
        Dimension::Two => 1.0,
    };
    for _ in 0..MAX_RESAMPLE_ATTEMPTS {
        let psi = half_width * rng.random::<f64>();
        let mut density = (FRAC_PI_2 * psi / half_width).cos();
        if dim == Dimension::Three {
            density *= psi.sin();
        }
        if rng.random::<f64>() * bound <= density {
            return psi;
        }
    }
    0.5 * half_width
}
