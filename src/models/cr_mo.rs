//! Booker 의 2.25Cr-1Mo 모델. 유효 온도 371–649 °C.

use super::{check_window, coefficient, ConstitutiveModel, SATURATED_STRAIN};
use crate::error::DataError;
use crate::material::MaterialId;
use crate::properties::elastic::YoungsModulus;
use crate::tables::TableStore;
use crate::units::celsius_to_kelvin;

const T_MIN_C: f64 = 371.0;
const T_MAX_C: f64 = 649.0;

const TEMPS: [f64; 11] = [
    371.0, 399.0, 427.0, 454.0, 482.0, 510.0, 538.0, 566.0, 593.0, 621.0, 649.0,
];
const YIELD: [f64; 11] = [
    210.26110788,
    193.41696677,
    199.53334023,
    194.17852203,
    183.83060583,
    180.77609127,
    183.2855386,
    173.75745429,
    169.39649398,
    153.29557145,
    133.87945406,
];
const SATURATION: [f64; 11] = [
    576.81250335,
    541.04380868,
    477.98193045,
    487.8576125,
    601.36801303,
    418.50675089,
    389.22730052,
    317.15988506,
    300.7890696,
    277.60111266,
    239.8507004,
];
const HARDENING: [f64; 11] = [
    -25.5946613,
    -32.08696447,
    -39.89889061,
    -35.38462892,
    -26.44939313,
    -45.34906153,
    -40.45340962,
    -60.25435782,
    -52.15993414,
    -58.78196275,
    -65.16805611,
];

// 인장강도 U 의 온도 표
const U_TEMPS: [f64; 15] = [
    20.0, 50.0, 100.0, 150.0, 200.0, 250.0, 300.0, 350.0, 400.0, 450.0, 500.0, 550.0, 600.0,
    621.0, 650.0,
];
const U_VALUES: [f64; 15] = [
    508.0, 486.0, 464.0, 455.0, 456.0, 462.0, 469.0, 473.0, 468.0, 452.0, 418.0, 364.0, 284.0,
    300.0, 269.0,
];

// 이 온도 이하에서는 크리프가 없다.
const CREEP_ONSET_C: f64 = 372.0;
const BLEND_LO_C: f64 = 454.0;
const BLEND_HI_C: f64 = 510.0;

/// 2.25Cr-1Mo.
#[derive(Debug, Clone)]
pub struct CrMoModel {
    youngs: YoungsModulus,
}

impl CrMoModel {
    pub fn load(store: &TableStore) -> Result<Self, DataError> {
        Ok(Self {
            youngs: YoungsModulus::load(store, MaterialId::Cr2Mo)?,
        })
    }
}

/// 1차/2차 크리프 곡선 하나: ε(t) = C·p·t / (1 + p·t) + ε̇·t (%)
#[derive(Debug, Clone, Copy)]
struct CreepBranch {
    c: f64,
    p: f64,
    rate: f64,
}

impl CreepBranch {
    fn strain(&self, t: f64) -> f64 {
        self.c * self.p * t / (1.0 + self.p * t) + self.rate * t
    }
}

impl ConstitutiveModel for CrMoModel {
    fn material(&self) -> MaterialId {
        MaterialId::Cr2Mo
    }

    fn elastic(&self, stress: f64, t_c: f64) -> Result<f64, DataError> {
        check_window(t_c, T_MIN_C, T_MAX_C)?;
        Ok(stress / self.youngs.at(t_c, false)?)
    }

    fn plastic(&self, stress: f64, t_c: f64) -> Result<f64, DataError> {
        check_window(t_c, T_MIN_C, T_MAX_C)?;
        if stress == 0.0 {
            return Ok(0.0);
        }
        let sy = coefficient(&TEMPS, &YIELD, t_c)?;
        let sat = coefficient(&TEMPS, &SATURATION, t_c)?;
        let c = coefficient(&TEMPS, &HARDENING, t_c)?;

        if stress < sy {
            Ok(0.0)
        } else if stress > sat {
            Ok(SATURATED_STRAIN)
        } else {
            Ok(((stress - sat) / (sy - sat)).ln() / c)
        }
    }

    fn creep(&self, stress: f64, t_c: f64, time_h: f64) -> Result<f64, DataError> {
        check_window(t_c, T_MIN_C, T_MAX_C)?;
        if t_c <= CREEP_ONSET_C || stress == 0.0 || time_h == 0.0 {
            return Ok(0.0);
        }

        let tk = celsius_to_kelvin(t_c);
        let u = coefficient(&U_TEMPS, &U_VALUES, t_c)?;
        let ls = stress.log10();

        let t_ia = 10f64.powf(-13.528 + 6.5196 * u / tk + 23349.0 / tk - 5693.8 / tk * ls);
        let t_ib = 10f64.powf(-11.098 - 4.0951 * stress / u + 11965.0 / tk);
        let t_i = if t_c <= BLEND_LO_C {
            t_ia
        } else if t_c > BLEND_HI_C {
            t_ib
        } else {
            t_ia + (t_c - BLEND_LO_C) / (BLEND_HI_C - BLEND_LO_C) * (t_ib - t_ia)
        };

        let first = CreepBranch {
            c: 10f64.powf(1.0328 + 168680.0 / (tk * u) - 0.023772 * u + 0.0079141 * u * ls),
            p: 10f64.powf(7.6026 + 3.3396 * ls - 12323.0 / tk),
            rate: 10f64.powf(6.7475 + 0.011426 * stress + 987.72 / u * ls - 13494.0 / tk),
        };
        let second = CreepBranch {
            c: 10f64.powf(-0.051086 + 140730.0 / (tk * u) - 0.01 * u + 0.0037345 * u * ls),
            p: 10f64.powf(8.1242 + 0.0179678 * stress + 404.63 / u * ls - 11659.0 / tk),
            rate: 10f64.powf(11.498 - 8.2226 * u / tk - 20448.0 / tk + 5862.4 / tk * ls),
        };

        let e1 = first.strain(time_h);
        let e2 = second.strain(time_h);
        if e2 < e1 {
            return Ok(e2 / 100.0);
        }
        if time_h < t_i {
            return Ok(e1 / 100.0);
        }

        // 전환 시각 t_i 의 변형률을 2차 곡선에서 주는 등가 시각
        let e_i = first.strain(t_i);
        let (cp, pp, emp) = (second.c, second.p, second.rate);
        let t_c_eq = (-emp - cp * pp + e_i * pp
            + (4.0 * e_i * emp * pp + (emp + (cp - e_i) * pp).powi(2)).sqrt())
            / (2.0 * emp * pp);
        let shifted = time_h - (t_i - t_c_eq);
        Ok(second.strain(shifted) / 100.0)
    }
}
