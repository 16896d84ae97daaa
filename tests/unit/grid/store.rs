use super::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn desktop() -> Viewport {
    Viewport::new(1440.0, 900.0).unwrap()
}

#[test]
fn regenerate_fills_row_major_cells() {
    let mut store = TriangleStore::new();
    assert!(store.is_empty());
    assert_eq!(store.dims(), None);

    let mut rng = StdRng::seed_from_u64(1);
    let dims = store
        .regenerate(&GridConfig::default(), &desktop(), &mut rng)
        .unwrap();
    assert_eq!(dims, GridDims { rows: 6, cols: 11 });
    assert_eq!(store.len(), 66);

    for (i, cell) in store.cells().iter().enumerate() {
        assert_eq!(cell.row as usize, i / 11);
        assert_eq!(cell.col as usize, i % 11);
        assert_eq!(cell.scale, 0.0);
    }
    assert_eq!(store.get(2, 3).map(|c| (c.row, c.col)), Some((2, 3)));
    assert!(store.get(6, 0).is_none());
}

#[test]
fn resize_replaces_every_cell() {
    let mut store = TriangleStore::new();
    let mut rng = StdRng::seed_from_u64(9);
    store
        .regenerate(&GridConfig::default(), &desktop(), &mut rng)
        .unwrap();
    for cell in store.cells_mut() {
        cell.scale = 1.0;
    }

    let phone = Viewport::new(375.0, 812.0).unwrap();
    let dims = store
        .regenerate(&GridConfig::default(), &phone, &mut rng)
        .unwrap();
    // (375 + 200) / 150 -> 4 columns, 812 / 150 -> 6 rows.
    assert_eq!(dims, GridDims { rows: 6, cols: 4 });
    assert_eq!(store.len(), 24);
    assert!(store.cells().iter().all(|c| c.scale == 0.0));
}

#[test]
fn failed_regeneration_keeps_previous_grid() {
    let mut store = TriangleStore::new();
    let mut rng = StdRng::seed_from_u64(3);
    store
        .regenerate(&GridConfig::default(), &desktop(), &mut rng)
        .unwrap();
    let bad = GridConfig {
        cell_size: -5.0,
        ..GridConfig::default()
    };
    assert!(store.regenerate(&bad, &desktop(), &mut rng).is_err());
    assert_eq!(store.len(), 66);
}

#[test]
fn checkerboard_orientation() {
    let cell = |row, col| TriangleCell {
        row,
        col,
        order: 0.0,
        scale: 0.0,
    };
    assert!(!cell(0, 0).flipped());
    assert!(cell(0, 1).flipped());
    assert!(cell(1, 0).flipped());
    assert!(!cell(1, 1).flipped());
}
