//! 고온 인장/등시 곡선 생성과 시간 역산 테스트.
use approx::assert_relative_eq;

use std::sync::atomic::{AtomicUsize, Ordering};

use isochronous_toolbox::curves::inversion;
use isochronous_toolbox::curves::{
    default_strains, linspace, offset, CurveGenerator, CurveKind, TimeBounds, DEFAULT_OFFSET,
};
use isochronous_toolbox::models::ConstitutiveModel;
use isochronous_toolbox::{DataError, MaterialId};

fn assert_close(label: &str, actual: f64, expected: f64, rel_tol: f64) {
    let denom = expected.abs().max(1.0);
    let diff = (actual - expected).abs();
    assert!(
        diff <= rel_tol * denom,
        "{label} expected {expected:.6} got {actual:.6} (diff {diff:.6}, tol {rel_tol})"
    );
}

#[test]
fn default_strain_grid() {
    let strains = default_strains();
    assert_eq!(strains.len(), 50);
    assert_eq!(strains[0], 0.0);
    assert_eq!(strains[49], 0.022);
    assert_relative_eq!(strains[1], 0.022 / 49.0, max_relative = 1e-12);
    assert!(linspace(0.0, 1.0, 0).is_empty());
    assert_eq!(linspace(2.0, 5.0, 1), vec![2.0]);
}

#[test]
fn hot_tensile_inverts_tensile_strain() {
    let generator = CurveGenerator::default();
    let model = generator.model(MaterialId::Ss316).expect("316");
    for strain in [0.0005, 0.001, 0.005, 0.01, 0.02] {
        let p = generator
            .hot_tensile(MaterialId::Ss316, strain, 600.0)
            .expect("stress");
        assert_eq!(p.time, 0.0);
        assert_eq!(p.temperature, 600.0);
        let back = model.tensile(p.stress, 600.0).expect("strain");
        assert_relative_eq!(back, strain, max_relative = 1e-8);
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
fn hot_tensile_round_trips_for_every_material() {
    let generator = CurveGenerator::default();
    for material in MaterialId::all() {
        let t = working_temperature(material);
        let model = generator.model(material).expect("model");
        for strain in [0.0005, 0.001, 0.002, 0.005, 0.01] {
            let p = generator
                .hot_tensile(material, strain, t)
                .unwrap_or_else(|e| panic!("{material} {strain}: {e}"));
            let back = model.tensile(p.stress, t).expect("strain");
            assert_close(&format!("{material} {strain}"), back, strain, 1e-8);
        }
    }
}

#[test]
fn a740h_strain_past_saturation_pins_stress_at_ultimate() {
    // 825 °C 에서는 극한강도 직전에서 소성 변형률이 발산하고 위에서는 포화값으로 떨어진다.
    let generator = CurveGenerator::default();
    let model = generator.model(MaterialId::A740H).expect("A740H");
    let p = generator
        .hot_tensile(MaterialId::A740H, 0.022, 825.0)
        .expect("stress");
    assert_close("ultimate", p.stress, 521.631, 1e-6);
    let back = model.tensile(p.stress, 825.0).expect("strain");
    assert!((back - 0.022).abs() > 1e-3, "{back}");

    let p = generator
        .hot_tensile(MaterialId::A740H, 0.005, 825.0)
        .expect("stress");
    let back = model.tensile(p.stress, 825.0).expect("strain");
    assert_close("below saturation", back, 0.005, 1e-8);
}

/// 선형 탄성 모델. `bracket` 상한에서도 목표 변형률에 닿지 않는다.
struct LinearStub {
    compliance: f64,
    upper: f64,
    calls: AtomicUsize,
}

impl LinearStub {
    fn new(compliance: f64, upper: f64) -> Self {
        Self {
            compliance,
            upper,
            calls: AtomicUsize::new(0),
        }
    }
}

impl ConstitutiveModel for LinearStub {
    fn material(&self) -> MaterialId {
        MaterialId::Ss316
    }

    fn elastic(&self, stress: f64, _t_c: f64) -> Result<f64, DataError> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        Ok(stress * self.compliance)
    }

    fn plastic(&self, _stress: f64, _t_c: f64) -> Result<f64, DataError> {
        Ok(0.0)
    }

    fn creep(&self, _stress: f64, _t_c: f64, _time_h: f64) -> Result<f64, DataError> {
        Ok(0.0)
    }

    fn bracket(&self) -> (f64, f64) {
        (0.0, self.upper)
    }
}

#[test]
fn hot_tensile_falls_back_to_secant_outside_bracket() {
    // 구간 [0, 10] 의 변형률은 최대 0.01 이므로 0.05 는 구간 밖이다.
    let stub = LinearStub::new(1.0e-3, 10.0);
    let stress = inversion::hot_tensile(&stub, 0.05, 600.0).expect("secant");
    assert_close("secant root", stress, 50.0, 1e-6);
    assert!(stub.calls.load(Ordering::Relaxed) > 2);
}

#[test]
fn hot_tensile_secant_failure_is_out_of_range() {
    // 변형률이 응력에 무관하면 할선 기울기가 0 이다.
    let stub = LinearStub::new(0.0, 10.0);
    assert_eq!(
        inversion::hot_tensile(&stub, 0.05, 600.0),
        Err(DataError::OutOfRange("stress".to_string()))
    );
}

#[test]
fn stainless_strain_beyond_bracket_is_out_of_range() {
    let generator = CurveGenerator::default();
    assert_eq!(
        generator
            .hot_tensile(MaterialId::Ss316, 0.05, 600.0)
            .map(|p| p.stress),
        Err(DataError::OutOfRange("stress".to_string()))
    );
}

#[test]
fn zero_strain_gives_zero_stress() {
    let generator = CurveGenerator::default();
    let p = generator.hot_tensile(MaterialId::Ss316, 0.0, 600.0).expect("zero");
    assert_close("316 zero", p.stress, 0.0, 1e-9);
    let p = generator.hot_tensile(MaterialId::A617, 0.0, 800.0).expect("zero");
    assert_close("A617 zero", p.stress, 0.0, 1e-9);
}

#[test]
fn isochronous_inverts_total_strain() {
    let generator = CurveGenerator::default();
    let model = generator.model(MaterialId::A617).expect("A617");
    for strain in [0.002, 0.005, 0.01, 0.02] {
        let p = generator
            .isochronous(MaterialId::A617, strain, 800.0, 1000.0)
            .expect("stress");
        assert_eq!(p.time, 1000.0);
        let back = model.total(p.stress, 800.0, 1000.0).expect("strain");
        assert_relative_eq!(back, strain, max_relative = 1e-8);
    }
}

#[test]
fn creep_lowers_isochronous_stress() {
    let generator = CurveGenerator::default();
    for strain in [0.005, 0.01, 0.02] {
        let hot = generator
            .hot_tensile(MaterialId::A617, strain, 800.0)
            .expect("hot");
        let iso = generator
            .isochronous(MaterialId::A617, strain, 800.0, 1000.0)
            .expect("iso");
        assert!(iso.stress < hot.stress, "{strain}: {} >= {}", iso.stress, hot.stress);
    }
}

#[test]
fn without_creep_isochronous_matches_hot_tensile() {
    let generator = CurveGenerator::default();
    for strain in [0.001, 0.005, 0.01] {
        let hot = generator
            .hot_tensile(MaterialId::Cr2Mo, strain, 371.0)
            .expect("hot");
        let iso = generator
            .isochronous(MaterialId::Cr2Mo, strain, 371.0, 100_000.0)
            .expect("iso");
        assert_eq!(iso.stress, hot.stress);
    }
}

#[test]
fn curve_points_are_lazy_and_restartable() {
    let generator = CurveGenerator::default();
    let strains = linspace(0.0, 0.01, 6);
    let curve = generator
        .isochronous_curve(MaterialId::Gr91, 550.0, 1000.0, strains.clone())
        .expect("curve");
    assert_eq!(curve.kind(), CurveKind::Isochronous { time_h: 1000.0 });
    assert_eq!(curve.points().len(), 6);

    let first: Vec<f64> = curve
        .points()
        .map(|p| p.expect("point").stress)
        .collect();
    let second: Vec<f64> = curve
        .points()
        .map(|p| p.expect("point").stress)
        .collect();
    assert_eq!(first, second);

    let (xs, ys) = curve.evaluate().expect("evaluate");
    assert_eq!(xs, strains);
    assert_eq!(ys, first);
    assert!(ys.windows(2).all(|w| w[1] > w[0]));
}

#[test]
fn curve_reports_failures_per_point() {
    let generator = CurveGenerator::default();
    let curve = generator
        .hot_tensile_curve(MaterialId::A617, 300.0, vec![0.001, 0.002])
        .expect("curve");
    for p in curve.points() {
        assert!(p.unwrap_err().is_out_of_range());
    }
    assert!(curve.evaluate().is_err());
}

#[test]
fn unknown_material_is_rejected() {
    assert_eq!(
        MaterialId::from_code("inconel"),
        Err(DataError::UnknownMaterial("inconel".to_string()))
    );
}

#[test]
fn total_strain_and_time_are_consistent() {
    let generator = CurveGenerator::default();
    let strain = generator
        .total_strain(MaterialId::A617, 800.0, 1000.0, 50.0)
        .expect("strain");
    let t = generator
        .time_from_stress_strain(MaterialId::A617, 800.0, 50.0, strain, TimeBounds::default())
        .expect("time");
    assert_close("time", t, 1000.0, 1e-6);
}

#[test]
fn unreachable_strain_has_no_time() {
    let generator = CurveGenerator::default();
    let err = generator
        .time_from_stress_strain(MaterialId::A617, 800.0, 50.0, 10.0, TimeBounds::default())
        .unwrap_err();
    assert_eq!(err, DataError::OutOfRange("time".to_string()));
}

#[test]
fn offset_yield_of_bilinear_curve() {
    let strains = [0.0, 0.0005, 0.001, 0.002, 0.003, 0.004, 0.01];
    let stresses: Vec<f64> = strains
        .iter()
        .map(|&e: &f64| (200_000.0 * e).min(200.0 + 2000.0 * (e - 0.001)))
        .collect();
    let (e, s) = offset(&strains, &stresses, DEFAULT_OFFSET).expect("offset");
    // 200000(e - 0.002) = 200 + 2000(e - 0.001)
    let expected = (200.0 - 2.0 + 400.0) / (200_000.0 - 2000.0);
    assert_relative_eq!(e, expected, max_relative = 1e-9);
    assert_relative_eq!(s, 200_000.0 * (expected - DEFAULT_OFFSET), max_relative = 1e-9);
}

#[test]
fn offset_needs_two_points() {
    assert!(offset(&[0.0], &[0.0], DEFAULT_OFFSET)
        .unwrap_err()
        .is_out_of_range());
}
