//! 공백 구분 코드 테이블 텍스트 해석.
//!
//! 빈 줄과 `#` 으로 시작하는 줄은 건너뛴다.
//! 2차원 테이블은 첫 데이터 줄이 열 헤더이고, 이후 각 줄이 `행헤더 값1 값2 ...` 이다.
//! 1차원 테이블은 각 줄이 `x y` 두 값이다.

use super::{Grid1D, Grid2D, TableError};

/// 값이 없는 칸을 나타내는 표시.
pub const ABSENT_MARKER: &str = "-";

fn data_lines(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.lines()
        .enumerate()
        .map(|(i, l)| (i + 1, l.trim()))
        .filter(|(_, l)| !l.is_empty() && !l.starts_with('#'))
}

fn number(line: usize, token: &str) -> Result<f64, TableError> {
    token.parse::<f64>().map_err(|_| TableError::BadNumber {
        line,
        token: token.to_string(),
    })
}

fn cell(line: usize, token: &str) -> Result<Option<f64>, TableError> {
    if token == ABSENT_MARKER {
        Ok(None)
    } else {
        number(line, token).map(Some)
    }
}

/// 2차원 테이블 텍스트를 격자로 변환한다.
pub fn parse_table_2d(text: &str) -> Result<Grid2D, TableError> {
    let mut lines = data_lines(text);
    let (header_line, header) = lines.next().ok_or(TableError::Empty)?;
    let cols = header
        .split_whitespace()
        .map(|t| number(header_line, t))
        .collect::<Result<Vec<_>, _>>()?;

    let mut rows = Vec::new();
    let mut cells = Vec::new();
    for (line, content) in lines {
        let mut tokens = content.split_whitespace();
        let Some(label) = tokens.next() else {
            continue;
        };
        rows.push(number(line, label)?);
        let values = tokens
            .map(|t| cell(line, t))
            .collect::<Result<Vec<_>, _>>()?;
        if values.len() != cols.len() {
            return Err(TableError::Ragged {
                line,
                expected: cols.len(),
                found: values.len(),
            });
        }
        cells.push(values);
    }
    if rows.is_empty() {
        return Err(TableError::Empty);
    }
    Grid2D::new(cols, rows, cells)
}

/// 1차원 (x, y) 테이블 텍스트를 격자로 변환한다.
pub fn parse_table_1d(text: &str) -> Result<Grid1D, TableError> {
    let mut xs = Vec::new();
    let mut ys = Vec::new();
    for (line, content) in data_lines(text) {
        let tokens: Vec<&str> = content.split_whitespace().collect();
        if tokens.len() != 2 {
            return Err(TableError::Ragged {
                line,
                expected: 2,
                found: tokens.len(),
            });
        }
        xs.push(number(line, tokens[0])?);
        ys.push(number(line, tokens[1])?);
    }
    Grid1D::new(xs, ys)
}
