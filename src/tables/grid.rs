use super::TableError;

/// 엄격한 오름차순 x 에 대응하는 (x, y) 쌍. 생성 후 변경되지 않는다.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid1D {
    xs: Vec<f64>,
    ys: Vec<f64>,
}

impl Grid1D {
    pub fn new(xs: Vec<f64>, ys: Vec<f64>) -> Result<Self, TableError> {
        if xs.is_empty() {
            return Err(TableError::Empty);
        }
        if xs.len() != ys.len() {
            return Err(TableError::LengthMismatch("x/y"));
        }
        if !strictly_ascending(&xs) {
            return Err(TableError::NotAscending("x"));
        }
        Ok(Self { xs, ys })
    }

    pub fn xs(&self) -> &[f64] {
        &self.xs
    }

    pub fn ys(&self) -> &[f64] {
        &self.ys
    }

    pub fn len(&self) -> usize {
        self.xs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }
}

/// 행 헤더 × 열 헤더 격자. 값이 없는 칸은 `None` 이며 0 으로 취급하지 않는다.
///
/// 열 축은 외삽이 허용되는 축(보통 시간/사이클), 행 축은 엄격히 제한되는 축(보통 온도)이다.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid2D {
    cols: Vec<f64>,
    rows: Vec<f64>,
    // 행 우선 배열
    cells: Vec<Option<f64>>,
}

impl Grid2D {
    pub fn new(
        cols: Vec<f64>,
        rows: Vec<f64>,
        cells: Vec<Vec<Option<f64>>>,
    ) -> Result<Self, TableError> {
        if cols.is_empty() || rows.is_empty() {
            return Err(TableError::Empty);
        }
        if cells.len() != rows.len() {
            return Err(TableError::LengthMismatch("rows"));
        }
        if cells.iter().any(|r| r.len() != cols.len()) {
            return Err(TableError::LengthMismatch("columns"));
        }
        if !strictly_ascending(&cols) {
            return Err(TableError::NotAscending("column headers"));
        }
        if !strictly_ascending(&rows) {
            return Err(TableError::NotAscending("row headers"));
        }
        Ok(Self {
            cols,
            rows,
            cells: cells.into_iter().flatten().collect(),
        })
    }

    /// 모든 칸이 채워진 격자를 만든다.
    pub fn from_values(
        cols: Vec<f64>,
        rows: Vec<f64>,
        values: Vec<Vec<f64>>,
    ) -> Result<Self, TableError> {
        let cells = values
            .into_iter()
            .map(|r| r.into_iter().map(Some).collect())
            .collect();
        Self::new(cols, rows, cells)
    }

    pub fn cols(&self) -> &[f64] {
        &self.cols
    }

    pub fn rows(&self) -> &[f64] {
        &self.rows
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<f64> {
        if row >= self.rows.len() || col >= self.cols.len() {
            return None;
        }
        self.cells[row * self.cols.len() + col]
    }

    /// 한 열의 칸들을 행 순서대로 돌려준다.
    pub fn column(&self, col: usize) -> impl Iterator<Item = Option<f64>> + '_ {
        (0..self.rows.len()).map(move |r| self.cell(r, col))
    }
}

fn strictly_ascending(v: &[f64]) -> bool {
    v.iter().all(|x| x.is_finite()) && v.windows(2).all(|w| w[0] < w[1])
}
