//! Messner 의 Alloy 617 모델.

use super::{check_window, coefficient, ConstitutiveModel, SATURATED_STRAIN};
use crate::error::DataError;
use crate::material::MaterialId;
use crate::properties::elastic::{shear_modulus, YoungsModulus};
use crate::tables::TableStore;
use crate::units::celsius_to_kelvin;

const HIGH_TEMPS: [f64; 5] = [750.0, 800.0, 850.0, 900.0, 955.0];
const HIGH_ONSET: [f64; 5] = [228.0, 178.0, 50.0, 51.0, 54.0];
const HIGH_ULTIMATE: [f64; 5] = [522.0, 317.0, 214.0, 164.0, 122.0];
const HIGH_RATE: [f64; 5] = [9.70, 35.5, 482.0, 1250.0, 1240.0];

const LOW_TEMPS: [f64; 8] = [425.0, 450.0, 500.0, 550.0, 600.0, 650.0, 700.0, 750.0];
const LOW_ONSET: [f64; 8] = [175.0, 170.0, 166.0, 165.0, 178.0, 209.0, 206.0, 205.0];
const LOW_K: [f64; 8] = [0.056, 0.053, 0.050, 0.052, 0.067, 0.13, 0.12, 0.093];
const LOW_N: [f64; 8] = [1.96, 1.97, 2.01, 1.84, 1.50, 2.13, 2.29, 1.55];

/// Alloy 617 크리프 식 상수. Messner 등이 발표한 Kocks-Mecking 정규화 상관식의 값이다.
///
/// 크리프 변형률은 `EPS0 · exp(B·g) · (σ/μ)^(-g) · t`, `g = μ·b³ / (A·k·T)` 이다.
/// 시간에 선형이라 일정 변형률 이완의 닫힌 해를 구할 때도 이 값을 쓴다.
pub mod creep_constants {
    pub const A: f64 = -4.480;
    pub const B_HIGH: f64 = -3.174;
    pub const B_LOW: f64 = -2.510;
    /// B 전환 온도 (°C)
    pub const T0: f64 = 775.0;
    pub const EPS0: f64 = 1.656e7;
    /// 볼츠만 상수 (mJ/K, MPa·mm³ 단위계)
    pub const K_BOLTZ: f64 = 1.38064e-23 * 1000.0;
    /// 버거스 벡터 (mm)
    pub const BURGERS: f64 = 2.019e-7;
}

/// Alloy 617.
#[derive(Debug, Clone)]
pub struct A617Model {
    youngs: YoungsModulus,
}

impl A617Model {
    pub fn load(store: &TableStore) -> Result<Self, DataError> {
        Ok(Self {
            youngs: YoungsModulus::load(store, MaterialId::A617)?,
        })
    }
}

impl ConstitutiveModel for A617Model {
    fn material(&self) -> MaterialId {
        MaterialId::A617
    }

    fn elastic(&self, stress: f64, t_c: f64) -> Result<f64, DataError> {
        Ok(stress / self.youngs.at(t_c, false)?)
    }

    fn plastic(&self, stress: f64, t_c: f64) -> Result<f64, DataError> {
        check_window(t_c, 425.0, 955.0)?;
        if stress == 0.0 {
            return Ok(0.0);
        }

        if t_c > 750.0 {
            let onset = coefficient(&HIGH_TEMPS, &HIGH_ONSET, t_c)?;
            let ultimate = coefficient(&HIGH_TEMPS, &HIGH_ULTIMATE, t_c)?;
            let rate = coefficient(&HIGH_TEMPS, &HIGH_RATE, t_c)?;
            if stress < onset {
                Ok(0.0)
            } else if stress > ultimate {
                Ok(SATURATED_STRAIN)
            } else {
                Ok(-(1.0 - (stress - onset) / (ultimate - onset)).ln() / rate)
            }
        } else {
            let onset = coefficient(&LOW_TEMPS, &LOW_ONSET, t_c)?;
            let k = coefficient(&LOW_TEMPS, &LOW_K, t_c)?;
            let n = coefficient(&LOW_TEMPS, &LOW_N, t_c)?;
            if stress < onset {
                Ok(0.0)
            } else {
                Ok(k * ((stress - onset) / onset).powf(n))
            }
        }
    }

    fn creep(&self, stress: f64, t_c: f64, time_h: f64) -> Result<f64, DataError> {
        use creep_constants::*;

        let mu = shear_modulus(self.youngs.at(t_c, false)?, MaterialId::A617.poissons());
        let tk = celsius_to_kelvin(t_c);
        let b = if t_c <= T0 { B_LOW } else { B_HIGH };
        let scale = mu * BURGERS.powi(3) / (A * K_BOLTZ * tk);

        Ok(EPS0 * (b * scale).exp() * (stress / mu).powf(-scale) * time_h)
    }
}
