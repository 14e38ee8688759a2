//! 설정 기본값, TOML 직렬화, 단위 변환 테스트.
use std::path::Path;

use isochronous_toolbox::config::{load_from, Config, ConfigError};
use isochronous_toolbox::units::{
    celsius_to_fahrenheit, celsius_to_rankine, convert_stress, convert_temperature, StressUnit,
    TemperatureUnit,
};

fn assert_close(label: &str, actual: f64, expected: f64, rel_tol: f64) {
    let denom = expected.abs().max(1.0);
    let diff = (actual - expected).abs();
    assert!(
        diff <= rel_tol * denom,
        "{label} expected {expected:.6} got {actual:.6} (diff {diff:.6}, tol {rel_tol})"
    );
}

#[test]
fn defaults_match_library_constants() {
    let cfg = Config::default();
    assert!(cfg.data_dir.is_none());
    assert_eq!(cfg.curve.strain_max, 0.022);
    assert_eq!(cfg.curve.strain_points, 50);
    assert_eq!(cfg.relaxation.dt, 0.1);
    assert_eq!(cfg.relaxation.check_strain, 0.01);
    assert_eq!(cfg.time_bounds.min, 0.0);
    assert_eq!(cfg.time_bounds.max, 300_000.0);
    assert_eq!(cfg.strains().len(), 50);
    assert_eq!(cfg.rate_settings().dt, 0.1);
}

#[test]
fn toml_round_trip() {
    let mut cfg = Config::default();
    cfg.units.temperature = TemperatureUnit::Fahrenheit;
    cfg.units.stress = StressUnit::Ksi;
    cfg.relaxation.dt = 0.05;
    cfg.data_dir = Some("tables".into());

    let text = toml::to_string_pretty(&cfg).expect("serialize");
    let back: Config = toml::from_str(&text).expect("deserialize");
    assert_eq!(back.units.temperature, TemperatureUnit::Fahrenheit);
    assert_eq!(back.units.stress, StressUnit::Ksi);
    assert_eq!(back.relaxation.dt, 0.05);
    assert_eq!(back.data_dir.as_deref(), Some(Path::new("tables")));
}

#[test]
fn partial_file_keeps_other_defaults() {
    let cfg: Config = toml::from_str("[curve]\nstrain_max = 0.02\nstrain_points = 3\n")
        .expect("partial");
    assert_eq!(cfg.strains(), vec![0.0, 0.01, 0.02]);
    assert_eq!(cfg.units.temperature, TemperatureUnit::Celsius);
    assert_eq!(cfg.time_bounds.max, 300_000.0);
}

#[test]
fn load_reports_missing_and_malformed_files() {
    let dir = std::env::temp_dir().join(format!("isochronous_config_{}", std::process::id()));
    std::fs::create_dir_all(&dir).expect("mkdir");

    assert!(matches!(
        load_from(&dir.join("absent.toml")),
        Err(ConfigError::Io(_))
    ));

    let bad = dir.join("bad.toml");
    std::fs::write(&bad, "[curve]\nstrain_max = \"wide\"\n").expect("write");
    assert!(matches!(load_from(&bad), Err(ConfigError::Serde(_))));

    let good = dir.join("good.toml");
    std::fs::write(&good, "[relaxation]\ndt = 0.2\n").expect("write");
    assert_eq!(load_from(&good).expect("good").relaxation.dt, 0.2);

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn temperature_units() {
    assert_close("F", celsius_to_fahrenheit(600.0), 1112.0, 1e-12);
    assert_close("R", celsius_to_rankine(600.0), 1571.67, 1e-12);
    assert_close(
        "F to K",
        convert_temperature(1112.0, TemperatureUnit::Fahrenheit, TemperatureUnit::Kelvin),
        873.15,
        1e-12,
    );
}

#[test]
fn stress_units() {
    assert_close(
        "ksi",
        convert_stress(10.0, StressUnit::Ksi, StressUnit::MegaPascal),
        68.9476,
        1e-9,
    );
    assert_close(
        "psi",
        convert_stress(100.0, StressUnit::MegaPascal, StressUnit::Psi),
        100.0 / 0.00689476,
        1e-9,
    );
}
