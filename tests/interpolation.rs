//! 격자 보간/외삽, 역조회, 열 선택 회귀 테스트.
use isochronous_toolbox::interp::{
    interpolate_1d, interpolate_2d, inverse_column_lookup, is_close, max_column_interpolate,
    select_column_by_threshold, Interp2d,
};
use isochronous_toolbox::tables::{Grid1D, Grid2D};
use isochronous_toolbox::DataError;

fn assert_close(label: &str, actual: f64, expected: f64, rel_tol: f64) {
    let denom = expected.abs().max(1.0);
    let diff = (actual - expected).abs();
    assert!(
        diff <= rel_tol * denom,
        "{label} expected {expected:.6} got {actual:.6} (diff {diff:.6}, tol {rel_tol})"
    );
}

/// z = 3xy + 2x + 6y + 5, 열 x ∈ {0,1,2}, 행 y ∈ {0,1}
fn polynomial_grid() -> Grid2D {
    Grid2D::from_values(
        vec![0.0, 1.0, 2.0],
        vec![0.0, 1.0],
        vec![vec![5.0, 7.0, 9.0], vec![11.0, 16.0, 21.0]],
    )
    .expect("grid")
}

fn polynomial(x: f64, y: f64) -> f64 {
    3.0 * x * y + 2.0 * x + 6.0 * y + 5.0
}

#[test]
fn bilinear_reproduces_polynomial_inside_grid() {
    let grid = polynomial_grid();
    for (x, y) in [(0.5, 0.5), (0.25, 0.25), (1.25, 0.8), (2.0, 1.0), (0.0, 0.0)] {
        let z = interpolate_2d(&grid, x, y, Interp2d::LINEAR).expect("inside");
        assert_close(&format!("z({x},{y})"), z, polynomial(x, y), 1e-12);
    }
    // 다항식 값은 9.75
    let mid = interpolate_2d(&grid, 0.5, 0.5, Interp2d::LINEAR).expect("mid");
    assert_close("mid", mid, 9.75, 1e-12);
}

#[test]
fn bilinear_rejects_points_outside_without_extrapolation() {
    let grid = polynomial_grid();
    for (x, y) in [
        (-1.0, 0.5),
        (0.5, -0.25),
        (-0.2, -0.3),
        (2.3, 0.5),
        (0.5, 1.2),
        (3.0, 2.0),
    ] {
        let err = interpolate_2d(&grid, x, y, Interp2d::LINEAR).unwrap_err();
        assert!(err.is_out_of_range(), "({x},{y}) gave {err:?}");
    }
}

#[test]
fn extrapolation_extends_columns_but_not_rows() {
    let grid = polynomial_grid();
    let opts = Interp2d::LINEAR.extrapolating(true);
    for (x, y) in [(3.0, 0.5), (-1.0, 0.25), (2.3, 1.0)] {
        let z = interpolate_2d(&grid, x, y, opts).expect("column extrapolation");
        assert_close(&format!("z({x},{y})"), z, polynomial(x, y), 1e-12);
    }
    for (x, y) in [(0.5, 1.2), (0.5, -0.25), (3.0, 2.0)] {
        let err = interpolate_2d(&grid, x, y, opts).unwrap_err();
        assert!(err.is_out_of_range());
    }
}

#[test]
fn log_axes_and_data_map_back_out_of_log_space() {
    // 값이 시간의 거듭제곱이면 로그-로그 보간이 정확하다.
    let grid = Grid2D::from_values(
        vec![10.0, 100.0, 1000.0],
        vec![500.0, 600.0],
        vec![vec![400.0, 200.0, 100.0], vec![300.0, 150.0, 75.0]],
    )
    .expect("grid");
    let opts = Interp2d {
        log_col: true,
        log_row: false,
        log_data: true,
        extrapolate: false,
    };
    let z = interpolate_2d(&grid, 10f64.powf(1.5), 500.0, opts).expect("inside");
    assert_close("log mid", z, (400.0f64 * 200.0).sqrt(), 1e-10);

    let far = interpolate_2d(&grid, 10_000.0, 600.0, opts.extrapolating(true)).expect("extrap");
    assert_close("log extrapolated", far, 37.5, 1e-10);
}

#[test]
fn absent_cells_are_not_interpolable() {
    let grid = Grid2D::new(
        vec![1.0, 2.0, 3.0],
        vec![0.0, 1.0],
        vec![
            vec![Some(1.0), Some(2.0), None],
            vec![Some(3.0), Some(4.0), Some(5.0)],
        ],
    )
    .expect("grid");
    let err = interpolate_2d(&grid, 2.5, 0.5, Interp2d::LINEAR).unwrap_err();
    assert!(err.is_out_of_range());
    // 가중치 0 인 빈 칸은 문제되지 않는다.
    let z = interpolate_2d(&grid, 2.5, 1.0, Interp2d::LINEAR).expect("top row");
    assert_close("top row", z, 4.5, 1e-12);
}

#[test]
fn one_dimensional_bounds_and_extrapolation() {
    let grid = Grid1D::new(vec![0.0, 10.0, 20.0], vec![1.0, 3.0, 4.0]).expect("grid");
    assert_close("mid", interpolate_1d(&grid, 5.0, false).expect("mid"), 2.0, 1e-12);
    assert!(interpolate_1d(&grid, 25.0, false).unwrap_err().is_out_of_range());
    assert_close(
        "right",
        interpolate_1d(&grid, 30.0, true).expect("right"),
        5.0,
        1e-12,
    );
    assert_close(
        "left",
        interpolate_1d(&grid, -10.0, true).expect("left"),
        -1.0,
        1e-12,
    );
}

#[test]
fn ceiling_column_selection() {
    let grid = Grid2D::from_values(
        vec![10.0, 100.0, 1000.0],
        vec![1.0, 2.0],
        vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]],
    )
    .expect("grid");
    assert_eq!(select_column_by_threshold(&grid, 50.0, false), Ok(1));
    assert_eq!(select_column_by_threshold(&grid, 100.0, false), Ok(1));
    assert_eq!(select_column_by_threshold(&grid, 5.0, false), Ok(0));
    assert_eq!(
        select_column_by_threshold(&grid, 5000.0, false),
        Err(DataError::ColumnOutOfRange(5000.0))
    );
    assert_eq!(select_column_by_threshold(&grid, 5000.0, true), Ok(2));

    let v = max_column_interpolate(&grid, 50.0, 1.5, false, false, false).expect("column 100");
    assert_close("column value", v, 3.5, 1e-12);
}

#[test]
fn inverse_lookup_on_monotone_row() {
    let grid = Grid2D::from_values(
        vec![10.0, 100.0, 1000.0],
        vec![500.0, 600.0],
        vec![vec![300.0, 200.0, 100.0], vec![200.0, 120.0, 60.0]],
    )
    .expect("grid");
    let t = inverse_column_lookup(&grid, 500.0, 150.0, false, true).expect("inverse");
    assert_close("log inverse", t, 10f64.powf(2.5), 1e-10);

    // 행 사이: 원값을 선형 보간한 뒤 역보간
    let t = inverse_column_lookup(&grid, 550.0, 160.0, false, false).expect("inverse");
    assert_close("linear inverse", t, 100.0, 1e-10);

    let err = inverse_column_lookup(&grid, 650.0, 150.0, true, true).unwrap_err();
    assert!(err.is_out_of_range());
}

#[test]
fn flat_region_resolves_by_rank() {
    // 앞쪽 열이 같은 값이면 평탄 구간의 마지막 열을 고른다.
    let grid = Grid2D::from_values(
        vec![10.0, 100.0, 1000.0, 10000.0],
        vec![0.0, 1.0],
        vec![vec![50.0, 50.0, 50.0, 40.0], vec![50.0, 50.0, 50.0, 40.0]],
    )
    .expect("grid");
    let t = inverse_column_lookup(&grid, 0.5, 50.0, true, true).expect("flat");
    assert_eq!(t, 1000.0);
}

#[test]
fn flat_region_below_every_value_wraps_to_last_rank() {
    let grid = Grid2D::from_values(
        vec![1.0, 10.0, 100.0],
        vec![0.0, 1.0],
        vec![vec![5.0, 6.0, 7.0], vec![5.0, 6.0, 7.0]],
    )
    .expect("grid");
    let target = 4.99999;
    assert!(is_close(target, 5.0));
    let t = inverse_column_lookup(&grid, 0.0, target, true, true).expect("wrap");
    assert_eq!(t, 100.0);
}

#[test]
fn is_close_is_relative_to_second_argument() {
    assert!(is_close(100.0005, 100.0));
    assert!(!is_close(100.01, 100.0));
    assert!(is_close(1e-9, 0.0));
    assert!(!is_close(1e-7, 0.0));
}
