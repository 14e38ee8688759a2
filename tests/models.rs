//! 재료별 구성 방정식 동작 테스트.
use isochronous_toolbox::models::{select_model, ConstitutiveModel, SATURATED_STRAIN};
use isochronous_toolbox::{DataError, MaterialId, TableStore};

fn assert_close(label: &str, actual: f64, expected: f64, rel_tol: f64) {
    let denom = expected.abs().max(1.0);
    let diff = (actual - expected).abs();
    assert!(
        diff <= rel_tol * denom,
        "{label} expected {expected:.6} got {actual:.6} (diff {diff:.6}, tol {rel_tol})"
    );
}

fn model(material: MaterialId) -> Box<dyn ConstitutiveModel> {
    select_model(&TableStore::bundled(), material).expect("model")
}

#[test]
fn every_material_has_a_model() {
    let store = TableStore::bundled();
    for m in MaterialId::all() {
        let model = select_model(&store, m).expect("model");
        assert_eq!(model.material(), m);
    }
}

#[test]
fn material_codes_parse_case_insensitively() {
    assert_eq!(MaterialId::from_code("a617"), Ok(MaterialId::A617));
    assert_eq!(" 800h ".parse::<MaterialId>(), Ok(MaterialId::Alloy800H));
    assert_eq!(MaterialId::Cr2Mo.to_string(), "2.25Cr-1Mo");
    assert_eq!(
        MaterialId::from_code("steel"),
        Err(DataError::UnknownMaterial("steel".to_string()))
    );
}

#[test]
fn total_strain_is_sum_of_parts() {
    for (m, t, s, h) in [
        (MaterialId::A617, 800.0, 150.0, 1000.0),
        (MaterialId::Gr91, 550.0, 200.0, 1000.0),
        (MaterialId::Ss316, 600.0, 120.0, 100.0),
        (MaterialId::Alloy800H, 650.0, 100.0, 1000.0),
        (MaterialId::Cr2Mo, 500.0, 150.0, 1000.0),
    ] {
        let model = model(m);
        let parts = model.elastic(s, t).expect("elastic")
            + model.plastic(s, t).expect("plastic")
            + model.creep(s, t, h).expect("creep");
        assert_close(
            &format!("{m} total"),
            model.total(s, t, h).expect("total"),
            parts,
            1e-12,
        );
    }
}

/// 재료별로 모델이 정의된 대표 온도 (°C).
fn working_temperature(material: MaterialId) -> f64 {
    match material {
        MaterialId::Ss304 | MaterialId::Ss316 => 600.0,
        MaterialId::Cr2Mo => 500.0,
        MaterialId::Gr91 => 550.0,
        MaterialId::Alloy800H => 650.0,
        MaterialId::A617 => 800.0,
        MaterialId::A740H => 700.0,
    }
}

#[test]
fn total_strain_increases_with_stress() {
    for m in MaterialId::all() {
        let t = working_temperature(m);
        let model = model(m);
        // 포화 구간 이전까지만 본다.
        let ceiling = isochronous_toolbox::curves::inversion::hot_tensile(model.as_ref(), 0.02, t)
            .unwrap_or_else(|_| model.bracket().1);
        let mut previous_tensile = model.tensile(0.0, t).expect("zero stress");
        let mut previous = model.total(0.0, t, 1000.0).expect("zero stress");
        for i in 1..=40 {
            let s = ceiling * i as f64 / 40.0;
            let e = model.tensile(s, t).expect("tensile");
            assert!(e >= previous_tensile, "{m} tensile at {s} MPa: {e} < {previous_tensile}");
            previous_tensile = e;
            let e = model.total(s, t, 1000.0).expect("total");
            assert!(e >= previous, "{m} at {s} MPa: {e} < {previous}");
            previous = e;
        }
    }
}

#[test]
fn stress_above_ultimate_saturates_plasticity() {
    let a617 = model(MaterialId::A617);
    assert_eq!(a617.plastic(400.0, 800.0), Ok(SATURATED_STRAIN));
    assert_eq!(a617.plastic(100.0, 800.0), Ok(0.0));
    let gr91 = model(MaterialId::Gr91);
    assert_eq!(gr91.plastic(790.0, 550.0), Ok(SATURATED_STRAIN));
}

#[test]
fn stainless_models_are_unstrained_at_zero_stress() {
    let m316 = model(MaterialId::Ss316);
    assert!(m316.unstrained_at_zero_stress());
    assert_eq!(m316.tensile(0.0, 600.0), Ok(0.0));
    assert_eq!(m316.bracket(), (0.0, 215.0));
    assert_eq!(model(MaterialId::A617).bracket(), (0.0, 800.0));
}

#[test]
fn creep_outside_fitted_range_is_rejected() {
    let m316 = model(MaterialId::Ss316);
    assert_eq!(
        m316.creep(100.0, 400.0, 1000.0),
        Err(DataError::OutOfRange("temperature".to_string()))
    );
    assert!(model(MaterialId::A617)
        .plastic(100.0, 400.0)
        .unwrap_err()
        .is_out_of_range());
    assert!(model(MaterialId::Alloy800H)
        .creep(100.0, 800.0, 10.0)
        .unwrap_err()
        .is_out_of_range());
    assert!(model(MaterialId::Gr91)
        .creep(100.0, 700.0, 10.0)
        .unwrap_err()
        .is_out_of_range());
}

#[test]
fn low_alloy_steel_has_no_creep_below_onset() {
    let m = model(MaterialId::Cr2Mo);
    assert_eq!(m.creep(200.0, 371.0, 10_000.0), Ok(0.0));
    assert!(m.creep(100.0, 550.0, 10_000.0).expect("creep") > 0.0);
}

#[test]
fn alloy_617_creep_is_linear_in_time() {
    let m = model(MaterialId::A617);
    let one = m.creep(100.0, 800.0, 100.0).expect("100 h");
    let two = m.creep(100.0, 800.0, 200.0).expect("200 h");
    assert!(one > 0.0);
    assert_close("doubling", two / one, 2.0, 1e-12);
}

#[test]
fn creep_grows_with_time() {
    for (m, t, s) in [
        (MaterialId::Ss316, 600.0, 120.0),
        (MaterialId::Ss304, 600.0, 100.0),
        (MaterialId::Gr91, 550.0, 150.0),
        (MaterialId::Alloy800H, 650.0, 100.0),
        (MaterialId::Cr2Mo, 500.0, 150.0),
    ] {
        let model = model(m);
        let early = model.creep(s, t, 10.0).expect("10 h");
        let late = model.creep(s, t, 10_000.0).expect("10000 h");
        assert!(late > early, "{m}: {late} <= {early}");
    }
}
