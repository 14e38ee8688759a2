//! 고온 재료의 등시 응력-변형률 곡선, 고온 인장 곡선, 응력 이완 계산 라이브러리.
//! CLI 는 얇은 껍데기이며 계산은 모두 여기서 한다.

pub mod app;
pub mod cli;
pub mod config;
pub mod curves;
pub mod error;
pub mod interp;
pub mod material;
pub mod models;
pub mod properties;
pub mod solver;
pub mod tables;
pub mod units;

pub use curves::{CurveGenerator, CurvePoint};
pub use error::DataError;
pub use material::MaterialId;
pub use tables::TableStore;
