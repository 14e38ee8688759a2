//! 재구성한 Alloy 800H 모델. 유효 온도 426–761 °C.

use super::{check_window, ConstitutiveModel};
use crate::error::DataError;
use crate::material::MaterialId;
use crate::properties::elastic::YoungsModulus;
use crate::solver::brentq;
use crate::tables::TableStore;
use crate::units::celsius_to_rankine;

const T_MIN_C: f64 = 426.0;
const T_MAX_C: f64 = 761.0;
const MPA_PER_KSI: f64 = 6.895;

// 정규화 랭킨 온도에 대한 4차 다항식 계수
const B1: [f64; 5] = [
    3.18312201e+00,
    -1.94465649e-01,
    -2.53179862e-02,
    7.99351461e-02,
    -4.54091288e-02,
];
const B2: [f64; 5] = [
    1.72297330e-01,
    -6.54008012e-04,
    2.66280150e-02,
    -9.36658919e-02,
    5.86915202e-02,
];
const B3: [f64; 5] = [
    3.75671539e-02,
    1.32897986e-02,
    -2.96225929e-02,
    6.14678657e-03,
    5.12025443e-03,
];
const B4: [f64; 5] = [
    4.50390345e-03,
    4.98519009e-03,
    4.82573850e-02,
    -1.01054504e-01,
    5.47052447e-02,
];
const TR_MIN: f64 = 1259.67;
const TR_MAX: f64 = 1859.67;

// 인장 곡선 역산 구간 (변형률)
const FLOW_LB: f64 = 1.0e-10;
const FLOW_UB: f64 = 1.0;

const U1: f64 = -1.84503305e+04;
const U2: f64 = 1.09662615e+04;
const U3: f64 = -4.62117596e+00;
const U4: f64 = 1.77459417e+05;
const U5: f64 = -6.75590904e+01;

fn quartic(c: &[f64; 5], x: f64) -> f64 {
    c.iter().rev().fold(0.0, |acc, &ci| acc * x + ci)
}

/// 총 변형률에 대한 유동 응력 (MPa). 원식은 % 변형률, ksi 기준이다.
fn flow_stress(strain: f64, t_c: f64) -> f64 {
    let x = (celsius_to_rankine(t_c) - TR_MIN) / (TR_MAX - TR_MIN);
    let le = (strain * 100.0).ln();
    (quartic(&B1, x) + quartic(&B2, x) * le + quartic(&B3, x) * le.powi(2)
        + quartic(&B4, x) * le.powi(3))
    .exp()
        * MPA_PER_KSI
}

/// Alloy 800H.
#[derive(Debug, Clone)]
pub struct Alloy800HModel {
    youngs: YoungsModulus,
}

impl Alloy800HModel {
    pub fn load(store: &TableStore) -> Result<Self, DataError> {
        Ok(Self {
            youngs: YoungsModulus::load(store, MaterialId::Alloy800H)?,
        })
    }
}

impl ConstitutiveModel for Alloy800HModel {
    fn material(&self) -> MaterialId {
        MaterialId::Alloy800H
    }

    fn elastic(&self, stress: f64, t_c: f64) -> Result<f64, DataError> {
        check_window(t_c, T_MIN_C, T_MAX_C)?;
        // 탄성계수 표가 상한 온도까지 닿지 않아 외삽한다.
        Ok(stress / self.youngs.at(t_c, true)?)
    }

    fn plastic(&self, stress: f64, t_c: f64) -> Result<f64, DataError> {
        check_window(t_c, T_MIN_C, T_MAX_C)?;
        if stress == 0.0 {
            return Ok(0.0);
        }
        let ee = self.elastic(stress, t_c)?;
        if stress < flow_stress(ee, t_c) {
            return Ok(0.0);
        }
        let total = brentq(|e| Ok(stress - flow_stress(e, t_c)), FLOW_LB, FLOW_UB)
            .map_err(|e| e.into_data_error("stress"))?;
        Ok(total - ee)
    }

    fn creep(&self, stress: f64, t_c: f64, time_h: f64) -> Result<f64, DataError> {
        check_window(t_c, T_MIN_C, T_MAX_C)?;
        if stress == 0.0 || time_h == 0.0 {
            return Ok(0.0);
        }
        let tr = celsius_to_rankine(t_c);
        let sk = stress / MPA_PER_KSI;
        let t1 = U1 / tr;
        let t2 = U2 / tr + U3;
        let t3 = U4 / tr + U5;
        Ok(((time_h.ln() - t1 * sk.ln() - t3) / t2).exp() / 100.0)
    }
}
