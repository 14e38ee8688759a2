//! 304H, 316H Blackburn 방정식. 원식은 psi, °F 기준이며 결과 크리프는 % 단위이다.

use super::ConstitutiveModel;
use crate::error::DataError;
use crate::interp::is_close;
use crate::material::MaterialId;
use crate::units::{celsius_to_fahrenheit, celsius_to_kelvin, MPA_PER_PSI};

const Q: f64 = 67000.0;
const R: f64 = 1.987;

fn blackburn_modulus(tk: f64) -> f64 {
    (3.3675e7 - 13823.0 * tk) * MPA_PER_PSI
}

/// Type 316H.
#[derive(Debug, Clone, Copy, Default)]
pub struct Blackburn316H;

struct Regime316 {
    g: f64,
    h: f64,
    d: f64,
    beta: f64,
    n: f64,
    c: f64,
    b: f64,
    l: f64,
    a: f64,
}

impl Regime316 {
    fn at(tk: f64, tf: f64) -> Result<Self, DataError> {
        let beta = -4.257e-4 + 7.733e-7 * tk;
        let regime = if (799.0..1000.0).contains(&tf) {
            Self {
                g: 0.0,
                h: 0.0,
                d: 5.7078e13,
                beta,
                n: 4.6,
                c: 7.1,
                b: 5.7078e13,
                l: 43.1255f64.exp() * (-49995.0 / tk).exp(),
                a: 5.6229e12,
            }
        } else if (1000.0..1075.0).contains(&tf) {
            let z = tk - 610.0;
            let m = -1153.38 + 16.4457 * z - 0.0754331 * z.powi(2) + 0.000107956 * z.powi(3);
            Self {
                g: 1.28221 - 1.58103e-3 * tk,
                h: -3.20553e-4 + 3.95256e-7 * tk,
                d: -4.4989e17 + 5.54768e14 * tk,
                beta,
                n: -80.9236 + 0.105455 * tk,
                c: 25.5318 - 0.0227273 * tk,
                b: -3.92183e16 + 4.84416e13 * tk,
                l: m.exp(),
                a: -7.85348e15 + 9.69329e12 * tk,
            }
        } else if (1075.0..1100.0).contains(&tf) {
            let z = tk - 610.0;
            let m = -274.235 + 1.15596 * z - 0.00115945 * z.powi(2);
            Self {
                g: 1.28221 - 1.58103e-3 * tk,
                h: -3.20553e-4 + 3.95256e-7 * tk,
                d: 2.86941e17 - 3.09286e14 * tk,
                beta,
                n: 50.1136 - 0.0482143 * tk,
                c: 25.5318 - 0.0227273 * tk,
                b: 1.44225e-8 * (45475.8 / tk).exp(),
                l: m.exp(),
                a: 5.28787e-6 * (39057.1 / tk).exp(),
            }
        } else if (1100.0..=1200.0).contains(&tf) {
            let z = tk - 610.0;
            let m = -274.235 + 1.15598 * z - 0.00115945 * z.powi(2);
            Self {
                g: -0.271855 + 2.13509e-4 * tk,
                h: 6.79633e-5 - 5.33787e-8 * tk,
                d: 2.86941e17 - 3.09286e14 * tk,
                beta,
                n: 50.1136 - 0.0482143 * tk,
                c: 54.5625 - 0.05625 * tk,
                b: 1.44225e-8 * (45475.8 / tk).exp(),
                l: m.exp(),
                a: 5.28787e-6 * (39057.1 / tk).exp(),
            }
        } else if (1200.0..1300.0).contains(&tf) {
            let w = tk - 680.0;
            let m = -54.6029 + 0.118486 * w - 8.63568e-6 * w.powi(2);
            Self {
                g: -0.692411 + 6.69643e-4 * tk,
                h: 1.73103e-4 - 1.67411e-7 * tk,
                d: 1.3369e10 * (10878.5 / tk).exp(),
                beta,
                n: 14.4647 - 9.54954e-3 * tk,
                c: 7.68378 - 5.4054e-3 * tk,
                b: 2.85517e8 * (10878.5 / tk).exp(),
                l: m.exp(),
                a: 6.03371e10 * (4967.76 / tk).exp(),
            }
        } else if (1300.0..=1500.0).contains(&tf) {
            let w = tk - 680.0;
            let m = -54.6029 + 0.118486 * w - 8.63568e-6 * w.powi(2);
            Self {
                g: -0.704318 + 6.61818e-4 * tk,
                h: 1.7608e-4 - 1.70455e-7 * tk,
                d: 1.3369e10 * (10878.5 / tk).exp(),
                beta,
                n: 14.4647 - 9.54954e-3 * tk,
                c: 7.68378 - 5.4054e-3 * tk,
                b: 2.85517e8 * (10878.5 / tk).exp(),
                l: m.exp(),
                a: 6.03371e10 * (4967.76 / tk).exp(),
            }
        } else {
            return Err(DataError::out_of_range("temperature"));
        };
        Ok(regime)
    }
}

impl ConstitutiveModel for Blackburn316H {
    fn material(&self) -> MaterialId {
        MaterialId::Ss316
    }

    fn bracket(&self) -> (f64, f64) {
        (0.0, 215.0)
    }

    fn unstrained_at_zero_stress(&self) -> bool {
        true
    }

    fn elastic(&self, stress: f64, t_c: f64) -> Result<f64, DataError> {
        Ok(stress / blackburn_modulus(celsius_to_kelvin(t_c)))
    }

    fn plastic(&self, stress: f64, t_c: f64) -> Result<f64, DataError> {
        let tk = celsius_to_kelvin(t_c);
        let sy = 1.25 * (23402.6 - 8.04798 * tk) * MPA_PER_PSI;
        let sp = sy + (-8188.8 + 3.51356 * tk) * MPA_PER_PSI;
        let k1 = (60786.5 - 13.7959 * tk) * MPA_PER_PSI;
        let m1 = 0.309503 + 6.13276e-5 * tk;

        if stress < sp {
            Ok(0.0)
        } else if (588.0..=1088.8).contains(&tk) {
            Ok(((stress - sp) / k1).powf(1.0 / m1))
        } else {
            Err(DataError::out_of_range("temperature"))
        }
    }

    fn creep(&self, stress: f64, t_c: f64, time_h: f64) -> Result<f64, DataError> {
        let tk = celsius_to_kelvin(t_c);
        let k = Regime316::at(tk, celsius_to_fahrenheit(t_c))?;
        if stress == 0.0 {
            return Ok(0.0);
        }
        let psi = stress / MPA_PER_PSI;

        let ex = if psi < 4000.0 { 0.0 } else { k.g + k.h * psi };
        let arrhenius = (-Q / (R * tk)).exp();
        let sinh_n = (k.beta * psi / k.n).sinh().powf(k.n);

        let s = (k.d * sinh_n * arrhenius).max(2.5e-2);
        let r = (k.b * sinh_n * arrhenius).max(k.l * psi.powf(k.n - 3.6));
        let edm = k.a * sinh_n * arrhenius;
        let et = k.c * edm / r;

        Ok((ex * (1.0 - (-s * time_h).exp()) + et * (1.0 - (-r * time_h).exp()) + edm * time_h)
            / 100.0)
    }
}

/// Type 304H.
#[derive(Debug, Clone, Copy, Default)]
pub struct Blackburn304H;

struct Regime304 {
    g: f64,
    h: f64,
    d: f64,
    beta_r: f64,
    c: f64,
}

impl Regime304 {
    fn at(tk: f64, tf: f64) -> Result<Self, DataError> {
        let beta_r = -2.252e-4 + 5.401e-7 * tk;
        let regime = if (799.0..850.0).contains(&tf) {
            Self {
                g: 0.0,
                h: 0.0,
                d: 2.266e15,
                beta_r,
                c: 2.469e-3 * (6580.986 / tk).exp(),
            }
        } else if (850.0..=1000.0).contains(&tf) {
            Self {
                g: 2.24449 - 3.08547e-3 * tk,
                h: -3.74081e-4 + 5.14244e-7 * tk,
                d: 2.266e15,
                beta_r,
                c: 2.469e-3 * (6580.986 / tk).exp(),
            }
        } else if tf > 1000.0 && tf < 1100.0 {
            Self {
                g: -0.257143,
                h: 4.28571e-5,
                d: 3.19663e16 * (-3.66218e-3 * tk).exp(),
                beta_r,
                c: 56.2405 - 5.91691e-2 * tk,
            }
        } else if (1100.0..=1500.0).contains(&tf) {
            Self {
                g: -0.257143,
                h: 4.28571e-5,
                d: 2.518e14,
                beta_r: -2.252e-4 + 5.407e-7 * tk,
                c: 5.0,
            }
        } else {
            return Err(DataError::out_of_range("temperature"));
        };
        Ok(regime)
    }
}

impl ConstitutiveModel for Blackburn304H {
    fn material(&self) -> MaterialId {
        MaterialId::Ss304
    }

    fn unstrained_at_zero_stress(&self) -> bool {
        true
    }

    fn elastic(&self, stress: f64, t_c: f64) -> Result<f64, DataError> {
        Ok(stress / blackburn_modulus(celsius_to_kelvin(t_c)))
    }

    fn plastic(&self, stress: f64, t_c: f64) -> Result<f64, DataError> {
        let tk = celsius_to_kelvin(t_c);
        let sy = 1.25 * (25850.5 - 12.8179 * tk) * MPA_PER_PSI;
        let sp = sy + (-12198.0 + 6.7093 * tk) * MPA_PER_PSI;
        let k1 = (69964.0 - 25.4491 * tk) * MPA_PER_PSI;
        let m1 = 0.25824 + 7.749e-5 * tk;

        if stress < sp {
            Ok(0.0)
        } else if t_c <= 1088.8 {
            // 상한은 °C 값과 비교한다.
            Ok(((stress - sp) / k1).powf(1.0 / m1))
        } else {
            Err(DataError::out_of_range("temperature"))
        }
    }

    fn creep(&self, stress: f64, t_c: f64, time_h: f64) -> Result<f64, DataError> {
        const N_R: f64 = 3.5;
        const N_E: f64 = 6.0;
        const B: f64 = 2.518e13;
        const A: f64 = 1.38e13;

        let tk = celsius_to_kelvin(t_c);
        let k = Regime304::at(tk, celsius_to_fahrenheit(t_c))?;
        let psi = stress / MPA_PER_PSI;
        if is_close(psi, 0.0) {
            return Ok(0.0);
        }

        let beta_e = -3.652e-4 + 7.518e-7 * tk;
        let ex = if psi < 6000.0 { 0.0 } else { k.g + k.h * psi };
        let arrhenius = (-Q / (R * tk)).exp();
        let sinh_r = (k.beta_r * psi / N_R).sinh().powf(N_R);

        let s = k.d * sinh_r * arrhenius;
        let r = B * sinh_r * arrhenius;
        let edm = A * (beta_e * psi / N_E).sinh().powf(N_E) * arrhenius;
        let et = k.c * edm / r;

        Ok((ex * (1.0 - (-s * time_h).exp()) + et * (1.0 - (-r * time_h).exp()) + edm * time_h)
            / 100.0)
    }
}
