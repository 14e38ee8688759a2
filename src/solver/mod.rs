//! 구간 근 찾기(Brent)와 할선법. 반복 자체는 `roots` 크레이트가 한다.
//!
//! 평가 함수는 `Result` 를 돌려주며 그 오류는 [`SolveError::Eval`] 로 그대로 전달된다.

pub mod brent;
pub mod secant;

pub use brent::{brentq, Bracket};
pub use secant::secant;

use roots::{Convergency, SearchError};

use crate::error::DataError;

/// 수치 해법 실패.
#[derive(Debug, Clone, PartialEq)]
pub enum SolveError {
    /// 구간 양 끝 함수값의 부호가 같음
    NotBracketed { f_lo: f64, f_hi: f64 },
    /// 반복 횟수 안에 수렴하지 못함
    NotConverged(usize),
    /// 함수값 또는 스텝이 유한하지 않음
    NonFinite,
    /// 평가 함수 자체의 오류
    Eval(DataError),
}

impl SolveError {
    /// 평가 오류는 그대로, 나머지는 `variable` 의 `OutOfRange` 로 바꾼다.
    pub fn into_data_error(self, variable: &str) -> DataError {
        match self {
            SolveError::Eval(e) => e,
            _ => DataError::out_of_range(variable),
        }
    }
}

impl std::fmt::Display for SolveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SolveError::NotBracketed { f_lo, f_hi } => {
                write!(f, "구간 양 끝의 부호가 같음: f(lo)={f_lo}, f(hi)={f_hi}")
            }
            SolveError::NotConverged(iter) => write!(f, "{iter}회 반복 후에도 수렴하지 않음"),
            SolveError::NonFinite => write!(f, "유한하지 않은 값이 발생함"),
            SolveError::Eval(e) => write!(f, "함수 평가 오류: {e}"),
        }
    }
}

impl std::error::Error for SolveError {}

impl From<DataError> for SolveError {
    fn from(value: DataError) -> Self {
        SolveError::Eval(value)
    }
}

/// `|x1 - x2| <= xtol + rtol·|x2|` 이면 수렴. 함수값은 정확히 0 일 때만 근으로 본다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Tolerance {
    pub xtol: f64,
    pub rtol: f64,
    pub max_iter: usize,
}

impl Convergency<f64> for Tolerance {
    fn is_root_found(&mut self, y: f64) -> bool {
        y == 0.0
    }

    fn is_converged(&mut self, x1: f64, x2: f64) -> bool {
        (x1 - x2).abs() <= self.xtol + self.rtol * x2.abs()
    }

    fn is_iteration_limit_reached(&mut self, iter: usize) -> bool {
        iter >= self.max_iter
    }
}

/// 실패할 수 있는 평가 함수를 `roots` 가 받는 `f64 -> f64` 로 감싼다.
///
/// 첫 실패를 기록한 뒤에는 0 을 돌려 탐색을 바로 끝낸다.
pub(crate) struct Guarded<'f, F> {
    f: &'f mut F,
    failure: Option<SolveError>,
}

impl<'f, F> Guarded<'f, F>
where
    F: FnMut(f64) -> Result<f64, DataError>,
{
    pub fn new(f: &'f mut F) -> Self {
        Self { f, failure: None }
    }

    pub fn eval(&mut self, x: f64) -> f64 {
        if self.failure.is_some() {
            return 0.0;
        }
        match (self.f)(x) {
            Ok(v) if v.is_nan() => {
                self.failure = Some(SolveError::NonFinite);
                0.0
            }
            Ok(v) => v,
            Err(e) => {
                self.failure = Some(SolveError::Eval(e));
                0.0
            }
        }
    }

    /// 기록된 실패를 우선하고, 없으면 `roots` 결과를 옮긴다.
    pub fn finish(
        self,
        found: Result<f64, SearchError>,
        max_iter: usize,
    ) -> Result<f64, SolveError> {
        if let Some(failure) = self.failure {
            return Err(failure);
        }
        match found {
            Ok(x) if x.is_finite() => Ok(x),
            Ok(_) => Err(SolveError::NonFinite),
            Err(SearchError::NoConvergency) => Err(SolveError::NotConverged(max_iter)),
            Err(_) => Err(SolveError::NonFinite),
        }
    }
}
