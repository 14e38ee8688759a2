//! 단위 정의 및 변환 모듈 모음. 내부 기준은 °C, MPa 이다.

pub mod stress;
pub mod temperature;

pub use stress::{convert_stress, StressUnit, MPA_PER_PSI};
pub use temperature::{
    celsius_to_fahrenheit, celsius_to_kelvin, celsius_to_rankine, convert_temperature,
    TemperatureUnit,
};
