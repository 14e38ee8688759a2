//! Alloy 740H 모델. 소성은 600–850 °C 에서만 정의된다.

use super::{check_window, coefficient, ConstitutiveModel, SATURATED_STRAIN};
use crate::error::DataError;
use crate::material::MaterialId;
use crate::properties::elastic::{shear_modulus, YoungsModulus};
use crate::tables::TableStore;
use crate::units::celsius_to_kelvin;

const LOW_TEMPS: [f64; 6] = [600.0, 700.0, 725.0, 750.0, 775.0, 800.0];
const LOW_ONSET: [f64; 6] = [400.24, 400.24, 374.20, 348.16, 312.255, 276.35];
const LOW_K: [f64; 6] = [0.0704, 0.0704, 0.0357, 0.0181, 0.0055, 0.0017];
const LOW_N: [f64; 6] = [6.6480, 6.6480, 7.1315, 7.6150, 10.971, 14.327];

const HIGH_TEMPS: [f64; 3] = [800.0, 825.0, 850.0];
const HIGH_ULTIMATE: [f64; 3] = [574.991, 521.631, 468.271];
const HIGH_ONSET: [f64; 3] = [455.850, 319.315, 182.780];
const HIGH_RATE: [f64; 3] = [908.324, 2212.205, 3516.087];

const EPS0: f64 = 1.19e10;
const K_BOLTZ: f64 = 1.38064e-20;
const BURGERS: f64 = 2.53e-7;
const A: f64 = -10.98557;
const B: f64 = -0.53098;

/// Alloy 740H.
#[derive(Debug, Clone)]
pub struct A740HModel {
    youngs: YoungsModulus,
}

impl A740HModel {
    pub fn load(store: &TableStore) -> Result<Self, DataError> {
        Ok(Self {
            youngs: YoungsModulus::load(store, MaterialId::A740H)?,
        })
    }
}

impl ConstitutiveModel for A740HModel {
    fn material(&self) -> MaterialId {
        MaterialId::A740H
    }

    fn elastic(&self, stress: f64, t_c: f64) -> Result<f64, DataError> {
        Ok(stress / self.youngs.at(t_c, false)?)
    }

    fn plastic(&self, stress: f64, t_c: f64) -> Result<f64, DataError> {
        check_window(t_c, 600.0, 850.0)?;

        if t_c <= 800.0 {
            let onset = coefficient(&LOW_TEMPS, &LOW_ONSET, t_c)?;
            // K 는 로그 공간에서 보간한다.
            let log_k: Vec<f64> = LOW_K.iter().map(|k| k.log10()).collect();
            let k = 10f64.powf(coefficient(&LOW_TEMPS, &log_k, t_c)?);
            let n = coefficient(&LOW_TEMPS, &LOW_N, t_c)?;
            if stress < onset {
                Ok(0.0)
            } else {
                Ok(k * ((stress - onset) / onset).powf(n))
            }
        } else {
            let ultimate = coefficient(&HIGH_TEMPS, &HIGH_ULTIMATE, t_c)?;
            let onset = coefficient(&HIGH_TEMPS, &HIGH_ONSET, t_c)?;
            let rate = coefficient(&HIGH_TEMPS, &HIGH_RATE, t_c)?;
            if stress < onset {
                Ok(0.0)
            } else if stress > ultimate {
                Ok(SATURATED_STRAIN)
            } else {
                Ok(-(1.0 - (stress - onset) / (ultimate - onset)).ln() / rate)
            }
        }
    }

    fn creep(&self, stress: f64, t_c: f64, time_h: f64) -> Result<f64, DataError> {
        let mu = shear_modulus(self.youngs.at(t_c, false)?, MaterialId::A740H.poissons());
        let scale = mu * BURGERS.powi(3) / (A * K_BOLTZ * celsius_to_kelvin(t_c));
        Ok(EPS0 * (B * scale).exp() * (stress / mu).powf(-scale) * time_h)
    }
}
