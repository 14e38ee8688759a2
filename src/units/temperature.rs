use serde::{Deserialize, Serialize};

/// 온도 단위를 정의한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TemperatureUnit {
    Celsius,
    Kelvin,
    Fahrenheit,
    Rankine,
}

const ZERO_C_IN_K: f64 = 273.15;

/// °C 를 K 로 변환한다.
pub fn celsius_to_kelvin(t_c: f64) -> f64 {
    t_c + ZERO_C_IN_K
}

/// °C 를 °F 로 변환한다.
pub fn celsius_to_fahrenheit(t_c: f64) -> f64 {
    t_c * 9.0 / 5.0 + 32.0
}

/// °C 를 °R 로 변환한다.
pub fn celsius_to_rankine(t_c: f64) -> f64 {
    celsius_to_kelvin(t_c) * 1.8
}

/// 주어진 값을 °C 로 변환한다.
pub fn to_celsius(value: f64, unit: TemperatureUnit) -> f64 {
    match unit {
        TemperatureUnit::Celsius => value,
        TemperatureUnit::Kelvin => value - ZERO_C_IN_K,
        TemperatureUnit::Fahrenheit => (value - 32.0) * 5.0 / 9.0,
        TemperatureUnit::Rankine => value * 5.0 / 9.0 - ZERO_C_IN_K,
    }
}

/// °C 값을 원하는 단위로 변환한다.
pub fn from_celsius(t_c: f64, unit: TemperatureUnit) -> f64 {
    match unit {
        TemperatureUnit::Celsius => t_c,
        TemperatureUnit::Kelvin => celsius_to_kelvin(t_c),
        TemperatureUnit::Fahrenheit => celsius_to_fahrenheit(t_c),
        TemperatureUnit::Rankine => celsius_to_rankine(t_c),
    }
}

/// 온도를 서로 다른 단위로 변환한다.
pub fn convert_temperature(value: f64, from: TemperatureUnit, to: TemperatureUnit) -> f64 {
    from_celsius(to_celsius(value, from), to)
}
