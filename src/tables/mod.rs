//! 코드 테이블(1차원/2차원 격자)의 표현, 파싱, 캐시 조회.

pub mod grid;
pub mod parse;
pub mod store;

pub use grid::{Grid1D, Grid2D};
pub use parse::{parse_table_1d, parse_table_2d, ABSENT_MARKER};
pub use store::{BundledSource, DataKind, DirectorySource, TableSource, TableStore};

/// 테이블 텍스트 해석 및 격자 검증 시 발생 가능한 오류.
#[derive(Debug, Clone, PartialEq)]
pub enum TableError {
    /// 데이터 행이 하나도 없음
    Empty,
    /// 숫자로 해석할 수 없는 토큰
    BadNumber { line: usize, token: String },
    /// 행의 값 개수가 헤더와 맞지 않음
    Ragged {
        line: usize,
        expected: usize,
        found: usize,
    },
    /// 축 값이 엄격한 오름차순이 아님
    NotAscending(&'static str),
    /// 축 길이와 값 개수가 다름
    LengthMismatch(&'static str),
}

impl std::fmt::Display for TableError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TableError::Empty => write!(f, "테이블에 데이터가 없음"),
            TableError::BadNumber { line, token } => {
                write!(f, "{line}행: 숫자가 아닌 값 '{token}'")
            }
            TableError::Ragged {
                line,
                expected,
                found,
            } => write!(f, "{line}행: 값 {expected}개가 필요하지만 {found}개임"),
            TableError::NotAscending(axis) => write!(f, "{axis} 축이 오름차순이 아님"),
            TableError::LengthMismatch(axis) => write!(f, "{axis} 길이가 맞지 않음"),
        }
    }
}

impl std::error::Error for TableError {}
