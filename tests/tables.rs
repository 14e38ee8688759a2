//! 테이블 파싱과 저장소 캐시 동작 테스트.
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use isochronous_toolbox::tables::{
    parse_table_2d, DataKind, DirectorySource, TableSource, TableStore,
};
use isochronous_toolbox::{DataError, MaterialId};

/// 읽은 횟수를 세고, 앞의 `failures` 번은 실패하는 소스.
struct CountingSource {
    reads: Arc<AtomicUsize>,
    failures: usize,
}

impl TableSource for CountingSource {
    fn read(&self, _material: MaterialId, kind: DataKind) -> std::io::Result<String> {
        let n = self.reads.fetch_add(1, Ordering::SeqCst);
        if n < self.failures {
            return Err(std::io::Error::from(std::io::ErrorKind::NotFound));
        }
        Ok(match kind {
            DataKind::Youngs => "20 200\n500 180\n".to_string(),
            _ => "10 100\n400 300 200\n500 250 150\n".to_string(),
        })
    }
}

#[test]
fn parses_header_rows_and_absent_cells() {
    let grid = parse_table_2d(
        "# 주석\n10 30 100\n\n425 496 - 496\n450 480 470 460\n",
    )
    .expect("table");
    assert_eq!(grid.cols(), &[10.0, 30.0, 100.0]);
    assert_eq!(grid.rows(), &[425.0, 450.0]);
    assert_eq!(grid.cell(0, 1), None);
    assert_eq!(grid.cell(1, 2), Some(460.0));
}

#[test]
fn bundled_tables_cover_expected_materials() {
    let store = TableStore::bundled();
    for m in MaterialId::all() {
        let youngs = store.load_1d(m, DataKind::Youngs).expect("youngs");
        assert!(youngs.len() >= 2, "{m}");
    }
    let sr = store.load_2d(MaterialId::Ss316, DataKind::RuptureStress).expect("316 Sr");
    assert_eq!(sr.cols().len(), 10);
    assert_eq!(sr.cell(7, 4), Some(228.0));
    assert!(store.load_2d(MaterialId::A617, DataKind::RuptureStress).is_ok());
    assert!(store.load_2d(MaterialId::Ss304, DataKind::Fatigue).is_ok());
}

#[test]
fn bundled_allowable_and_thermal_tables_parse() {
    let store = TableStore::bundled();
    for m in [MaterialId::Ss316, MaterialId::A617] {
        for kind in [
            DataKind::Yield,
            DataKind::Ultimate,
            DataKind::AllowableSo,
            DataKind::Cte,
            DataKind::Ctc,
            DataKind::Ctd,
        ] {
            let grid = store.load_1d(m, kind).unwrap_or_else(|e| panic!("{m} {kind:?}: {e}"));
            assert!(grid.len() >= 2, "{m} {kind:?}");
        }
        assert!(store.load_2d(m, DataKind::AllowableSt).is_ok(), "{m}");
    }
    for m in MaterialId::all().filter(|&m| m != MaterialId::A740H) {
        let knee = store.load_1d(m, DataKind::Interaction).expect("interaction");
        assert_eq!(knee.len(), 1, "{m}");
    }
}

#[test]
fn missing_table_reports_material_code() {
    let store = TableStore::bundled();
    assert_eq!(
        store.load_2d(MaterialId::Ss304, DataKind::RuptureStress).unwrap_err(),
        DataError::MissingData("304".to_string())
    );
    assert_eq!(
        store.load_2d(MaterialId::Gr91, DataKind::Fatigue).unwrap_err(),
        DataError::MissingData("gr91".to_string())
    );
}

#[test]
fn unknown_code_is_rejected_before_lookup() {
    let reads = Arc::new(AtomicUsize::new(0));
    let store = TableStore::new(CountingSource {
        reads: Arc::clone(&reads),
        failures: 0,
    });
    assert_eq!(
        store.load_2d_by_code("999", DataKind::RuptureStress).unwrap_err(),
        DataError::UnknownMaterial("999".to_string())
    );
    assert_eq!(reads.load(Ordering::SeqCst), 0);
    assert!(store.load_1d_by_code(" a617 ", DataKind::Youngs).is_ok());
}

#[test]
fn loaded_tables_are_cached() {
    let reads = Arc::new(AtomicUsize::new(0));
    let store = TableStore::new(CountingSource {
        reads: Arc::clone(&reads),
        failures: 0,
    });
    let a = store.load_2d(MaterialId::Ss316, DataKind::RuptureStress).expect("first");
    let b = store.load_2d(MaterialId::Ss316, DataKind::RuptureStress).expect("second");
    assert!(Arc::ptr_eq(&a, &b));
    assert_eq!(reads.load(Ordering::SeqCst), 1);

    store.load_2d(MaterialId::A617, DataKind::RuptureStress).expect("other material");
    assert_eq!(reads.load(Ordering::SeqCst), 2);
}

#[test]
fn failed_lookups_are_retried() {
    let reads = Arc::new(AtomicUsize::new(0));
    let store = TableStore::new(CountingSource {
        reads: Arc::clone(&reads),
        failures: 1,
    });
    assert!(matches!(
        store.load_1d(MaterialId::A617, DataKind::Youngs),
        Err(DataError::MissingData(_))
    ));
    let grid = store.load_1d(MaterialId::A617, DataKind::Youngs).expect("retry");
    assert_eq!(grid.ys(), &[200.0, 180.0]);
    assert_eq!(reads.load(Ordering::SeqCst), 2);
}

#[test]
fn concurrent_readers_share_one_table() {
    let store = Arc::new(TableStore::bundled());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let store = Arc::clone(&store);
            std::thread::spawn(move || {
                store
                    .load_2d(MaterialId::Ss316, DataKind::RuptureStress)
                    .expect("table")
            })
        })
        .collect();
    let grids: Vec<_> = handles
        .into_iter()
        .map(|h| h.join().expect("thread"))
        .collect();
    let first = store
        .load_2d(MaterialId::Ss316, DataKind::RuptureStress)
        .expect("table");
    for g in &grids {
        assert_eq!(g.cols(), first.cols());
    }
}

#[test]
fn directory_source_reads_and_validates_files() {
    let root = std::env::temp_dir().join(format!("isochronous_tables_{}", std::process::id()));
    let source = DirectorySource::new(&root);
    let good = source.path_for(MaterialId::Gr91, DataKind::Youngs);
    let bad = source.path_for(MaterialId::A740H, DataKind::Youngs);
    std::fs::create_dir_all(good.parent().expect("parent")).expect("mkdir");
    std::fs::write(&good, "20 218\n600 170\n").expect("write");
    std::fs::write(&bad, "20 218\n600 abc\n").expect("write");

    let store = TableStore::from_dir(&root);
    let grid = store.load_1d(MaterialId::Gr91, DataKind::Youngs).expect("gr91");
    assert_eq!(grid.xs(), &[20.0, 600.0]);
    assert_eq!(
        store.load_1d(MaterialId::A740H, DataKind::Youngs).unwrap_err(),
        DataError::MissingData("A740H".to_string())
    );
    assert_eq!(
        store.load_1d(MaterialId::A617, DataKind::Youngs).unwrap_err(),
        DataError::MissingData("A617".to_string())
    );

    let _ = std::fs::remove_dir_all(&root);
}
