//! Property tests for the SF6/O2 coverage and velocity model.

use plasmetch_core::labels::{ETCHANT_RATE, ION_ENHANCED_RATE, OXYGEN_RATE};
use plasmetch_core::{Dimension, Material, Parameters};
use plasmetch_kinetics::{Sf6O2SurfaceModel, SurfaceModel, FLUX_EPSILON};
use plasmetch_test_utils::{flat_surface, striped_materials, RatesBuilder};
use proptest::prelude::*;

fn rate_vec(n: usize) -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(0.0f64..10.0, n)
}

proptest! {
    #[test]
    fn coverages_stay_in_unit_interval(
        (etchant, oxygen, enhanced) in (1usize..16).prop_flat_map(|n| (rate_vec(n), rate_vec(n), rate_vec(n))),
        oxygen_sputtering in 0.0f64..5.0,
    ) {
        let n = etchant.len();
        let params = Parameters::default();
        let rates = RatesBuilder::sf6o2(n)
            .channel(ETCHANT_RATE, etchant)
            .channel(OXYGEN_RATE, oxygen)
            .channel(ION_ENHANCED_RATE, enhanced)
            .oxygen_sputtering(oxygen_sputtering)
            .build();
        let mut model = Sf6O2SurfaceModel::new(Dimension::Three);
        model.initialize_coverages(n);
        model
            .update_coverages(&params, &rates, &striped_materials(n, 3))
            .unwrap();

        let cov = model.coverages().unwrap();
        for i in 0..n {
            let (e, o) = cov.at(i);
            prop_assert!((0.0..=1.0).contains(&e), "eCoverage {e}");
            prop_assert!((0.0..=1.0).contains(&o), "oCoverage {o}");
            prop_assert!(e + o <= 1.0 + 1e-12);
        }
    }

    #[test]
    fn absent_etchant_zeroes_fluorine_coverage(
        oxygen in 0.0f64..10.0,
        enhanced in 0.0f64..10.0,
    ) {
        let params = Parameters::default();
        let rates = RatesBuilder::sf6o2(4)
            .etchant(FLUX_EPSILON / 2.0)
            .oxygen(oxygen)
            .ion_enhanced(enhanced)
            .build();
        let mut model = Sf6O2SurfaceModel::new(Dimension::Two);
        model.initialize_coverages(4);
        model.update_coverages(&params, &rates, &[Material::Other; 4]).unwrap();
        prop_assert!(model.coverages().unwrap().e_coverage().iter().all(|&e| e == 0.0));
    }

    #[test]
    fn absent_oxygen_zeroes_oxygen_coverage(
        etchant in 0.1f64..10.0,
        oxygen in prop_oneof![Just(0.0), Just(FLUX_EPSILON / 2.0)],
        sputtering in 0.0f64..5.0,
    ) {
        let params = Parameters::default();
        let rates = RatesBuilder::sf6o2(4)
            .etchant(etchant)
            .oxygen(oxygen)
            .oxygen_sputtering(sputtering)
            .build();
        let mut model = Sf6O2SurfaceModel::new(Dimension::Three);
        model.initialize_coverages(4);
        model.update_coverages(&params, &rates, &striped_materials(4, 2)).unwrap();
        let cov = model.coverages().unwrap();
        for i in 0..4 {
            let (e, o) = cov.at(i);
            prop_assert_eq!(o, 0.0);
            prop_assert!(e > 0.0);
        }
    }

    #[test]
    fn coverages_do_not_depend_on_material(
        etchant in 0.0f64..10.0,
        oxygen in 0.0f64..10.0,
        enhanced in 0.0f64..10.0,
    ) {
        let params = Parameters::default();
        let rates = RatesBuilder::sf6o2(2)
            .etchant(etchant)
            .oxygen(oxygen)
            .ion_enhanced(enhanced)
            .build();
        let mut model = Sf6O2SurfaceModel::new(Dimension::Three);
        model.initialize_coverages(2);
        model
            .update_coverages(&params, &rates, &[Material::Mask, Material::Other])
            .unwrap();
        let cov = model.coverages().unwrap();
        prop_assert_eq!(cov.at(0), cov.at(1));
    }

    #[test]
    fn substrate_velocity_never_positive(
        etchant in 0.0f64..10.0,
        sputtering in 0.0f64..10.0,
        enhanced in 0.0f64..10.0,
    ) {
        let params = Parameters::default();
        let rates = RatesBuilder::sf6o2(3)
            .etchant(etchant)
            .ion_sputtering(sputtering)
            .ion_enhanced(enhanced)
            .build();
        let coords = flat_surface(3, 0.0, Dimension::Three);
        let mut model = Sf6O2SurfaceModel::new(Dimension::Three);
        model.initialize_coverages(3);
        let v = model
            .calculate_velocities(&params, &rates, &coords, &[Material::Other; 3])
            .unwrap();
        prop_assert!(v.iter().all(|&x| x <= 0.0));
    }
}

#[test]
fn repeated_updates_are_memoryless() {
    // Coverages are a steady-state solve, not an integration: feeding the
    // same rates twice gives the same answer.
    let params = Parameters::default();
    let rates = RatesBuilder::sf6o2(2)
        .etchant(1.0)
        .oxygen(0.5)
        .ion_enhanced(0.2)
        .oxygen_sputtering(0.1)
        .build();
    let mut model = Sf6O2SurfaceModel::new(Dimension::Three);
    model.initialize_coverages(2);
    model
        .update_coverages(&params, &rates, &[Material::Other; 2])
        .unwrap();
    let first = model.coverages().unwrap().clone();
    model
        .update_coverages(&params, &rates, &[Material::Other; 2])
        .unwrap();
    assert_eq!(model.coverages().unwrap(), &first);
}

#[test]
fn stop_applies_when_any_point_is_below_depth() {
    let params = Parameters {
        etch_stop_depth: -5.0,
        ..Parameters::default()
    };
    let rates = RatesBuilder::sf6o2(3)
        .etchant(1.0)
        .ion_sputtering(1.0)
        .build();
    let mut coords = flat_surface(3, 0.0, Dimension::Three);
    coords[2][2] = -6.0;
    let mut model = Sf6O2SurfaceModel::new(Dimension::Three);
    model.initialize_coverages(3);
    let v = model
        .calculate_velocities(&params, &rates, &coords, &[Material::Other; 3])
        .unwrap();
    assert_eq!(v, vec![0.0; 3]);
}
