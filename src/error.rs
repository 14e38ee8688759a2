//! 재료 데이터 조회와 곡선 계산 전반에서 공유하는 오류 분류.

/// 테이블 조회, 보간, 구성 방정식 계산 시 발생 가능한 오류.
#[derive(Debug, Clone, PartialEq)]
pub enum DataError {
    /// 지원하지 않는 재료 코드
    UnknownMaterial(String),
    /// 해당 재료/데이터 종류의 테이블이 없거나 읽을 수 없음
    MissingData(String),
    /// 입력 변수가 유효 범위를 벗어남 (변수 이름)
    OutOfRange(String),
    /// 요청한 열 값이 모든 열 헤더보다 큼
    ColumnOutOfRange(f64),
}

impl DataError {
    pub(crate) fn out_of_range(variable: &str) -> Self {
        DataError::OutOfRange(variable.to_string())
    }

    /// 범위 이탈 계열 오류인지 확인한다.
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, DataError::OutOfRange(_))
    }
}

impl std::fmt::Display for DataError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DataError::UnknownMaterial(code) => write!(
                f,
                "알 수 없는 재료 {code}: 304, 316, 2.25Cr-1Mo, gr91, 800H, A617, A740H 중 하나여야 함"
            ),
            DataError::MissingData(mat) => write!(f, "재료 {mat}의 데이터가 없음"),
            DataError::OutOfRange(var) => write!(f, "범위를 벗어남: {var}"),
            DataError::ColumnOutOfRange(val) => {
                write!(f, "열 값 {val}이(가) 모든 열 헤더보다 큼")
            }
        }
    }
}

impl std::error::Error for DataError {}
