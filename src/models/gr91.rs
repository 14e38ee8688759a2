//! Swindeman 의 Grade 91 모델. 탄성계수와 소성 계수를 자체 표로 가진다.

use super::{
    check_window, coefficient, coefficient_extrapolated, ConstitutiveModel, SATURATED_STRAIN,
};
use crate::error::DataError;
use crate::material::MaterialId;
use crate::units::celsius_to_kelvin;

const TEMPS: [f64; 14] = [
    371.0, 399.0, 427.0, 454.0, 482.0, 500.0, 510.0, 538.0, 550.0, 566.0, 593.0, 600.0, 621.0,
    649.0,
];
const MODULUS_MPA: [f64; 14] = [
    188.0e3, 184.0e3, 180.0e3, 175.0e3, 170.0e3, 166.0e3, 163.0e3, 157.0e3, 150.0e3, 149.0e3,
    141.0e3, 139.0e3, 133.0e3, 125.0e3,
];
const PROPORTIONAL: [f64; 14] = [
    317.0, 310.0, 303.0, 296.0, 283.0, 269.0, 262.0, 228.0, 207.0, 186.0, 145.0, 138.0, 110.0,
    83.0,
];
const ULTIMATE: [f64; 14] = [
    603.0, 586.0, 569.0, 541.0, 507.0, 483.0, 469.0, 431.0, 410.0, 386.0, 338.0, 324.0, 283.0,
    234.0,
];
const SHAPE: [f64; 14] = [
    3.73, 4.49, 4.77, 5.88, 8.24, 9.30, 10.59, 14.11, 15.70, 17.36, 14.84, 14.80, 14.70, 10.97,
];
const YIELD: [f64; 14] = [
    483.0, 479.0, 469.0, 459.0, 445.0, 431.0, 421.0, 393.0, 410.0, 355.0, 303.0, 296.0, 252.0,
    200.0,
];
// 첫 온도(371 °C)를 뺀 나머지 온도에 대한 값
const YIELD_MIN: [f64; 13] = [
    358.0, 350.0, 336.0, 319.0, 307.0, 298.0, 273.0, 262.0, 245.0, 214.0, 206.0, 183.0, 152.0,
];

/// Grade 91.
#[derive(Debug, Clone, Copy, Default)]
pub struct Gr91Model;

impl ConstitutiveModel for Gr91Model {
    fn material(&self) -> MaterialId {
        MaterialId::Gr91
    }

    fn elastic(&self, stress: f64, t_c: f64) -> Result<f64, DataError> {
        check_window(t_c, TEMPS[0], TEMPS[TEMPS.len() - 1])?;
        Ok(stress / coefficient(&TEMPS, &MODULUS_MPA, t_c)?)
    }

    fn plastic(&self, stress: f64, t_c: f64) -> Result<f64, DataError> {
        check_window(t_c, TEMPS[0], TEMPS[TEMPS.len() - 1])?;
        let p = coefficient(&TEMPS, &PROPORTIONAL, t_c)?;
        let u = coefficient(&TEMPS, &ULTIMATE, t_c)?;
        let b = coefficient(&TEMPS, &SHAPE, t_c)?;
        let y = coefficient(&TEMPS, &YIELD, t_c)?;
        let y1 = coefficient_extrapolated(&TEMPS[1..], &YIELD_MIN, t_c);

        let ratio = 1.25 * y1 / y;
        let (p, u) = (p * ratio, u * ratio);
        if stress > u {
            Ok(SATURATED_STRAIN)
        } else if stress > p {
            Ok(((p - u) / (stress - u)).ln().powi(2) / b / 100.0)
        } else {
            Ok(0.0)
        }
    }

    fn creep(&self, stress: f64, t_c: f64, time_h: f64) -> Result<f64, DataError> {
        const V0: f64 = 0.023;
        const C: f64 = 2.25e22;
        const N: f64 = 5.0;
        const V: f64 = 0.038;
        const Q: f64 = 77280.0;

        check_window(t_c, 371.0, 650.0)?;
        let d = if t_c < 482.0 {
            847000.0
        } else if t_c >= 537.0 {
            5450000.0
        } else {
            (t_c - 482.0) * (5450000.0 - 847000.0) / (538.0 - 482.0) + 847000.0
        };
        let q0 = if t_c < 537.0 { 25330.0 } else { 23260.0 };
        let tk = celsius_to_kelvin(t_c);

        let primary = d * stress * (V0 * stress).exp() * (-q0 / tk).exp() * time_h.cbrt();
        let secondary = C * stress.powf(N) * (V * stress).exp() * (-Q / tk).exp() * time_h;
        Ok((primary + secondary) / 100.0)
    }
}
