use serde::{Deserialize, Serialize};

/// 응력 단위. 내부 기준은 항상 MPa 이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StressUnit {
    MegaPascal,
    Psi,
    Ksi,
}

/// 1 psi 에 해당하는 MPa.
pub const MPA_PER_PSI: f64 = 0.00689476;

/// 주어진 응력을 MPa 로 변환한다.
pub fn to_mpa(value: f64, unit: StressUnit) -> f64 {
    match unit {
        StressUnit::MegaPascal => value,
        StressUnit::Psi => value * MPA_PER_PSI,
        StressUnit::Ksi => value * MPA_PER_PSI * 1000.0,
    }
}

/// MPa 값을 원하는 단위로 변환한다.
pub fn from_mpa(value_mpa: f64, unit: StressUnit) -> f64 {
    match unit {
        StressUnit::MegaPascal => value_mpa,
        StressUnit::Psi => value_mpa / MPA_PER_PSI,
        StressUnit::Ksi => value_mpa / MPA_PER_PSI / 1000.0,
    }
}

/// 응력을 원하는 단위로 변환한다.
pub fn convert_stress(value: f64, from: StressUnit, to: StressUnit) -> f64 {
    from_mpa(to_mpa(value, from), to)
}
