use rat_schema_table::grid::offset_address;
use rat_schema_table::{CellPos, CellValue, ViewGrid};

#[test]
fn test_from_raw() {
    let grid = ViewGrid::from_raw(
        3,
        vec![
            vec![CellValue::from(1), CellValue::from(2)],
            vec![
                CellValue::from(1),
                CellValue::from(2),
                CellValue::from(3),
                CellValue::from(4),
            ],
            vec![],
        ],
    );

    assert_eq!(grid.rows(), 3);
    assert_eq!(grid.cells(), 9);
    assert_eq!(
        grid.row(0),
        Some([CellValue::from(1), CellValue::from(2), CellValue::Null].as_slice())
    );
    assert_eq!(
        grid.row(1),
        Some([CellValue::from(1), CellValue::from(2), CellValue::from(3)].as_slice())
    );
    assert_eq!(grid.row(2), Some(vec![CellValue::Null; 3].as_slice()));
    assert!(grid.iter().all(|v| v.len() == 3));
}

#[test]
fn test_push_replace() {
    let mut grid = ViewGrid::new(2);
    assert!(grid.is_empty());
    grid.push_empty_row();
    assert_eq!(grid.rows(), 1);
    assert_eq!(grid.get(CellPos::new(0, 1)), Some(&CellValue::Null));
    assert_eq!(grid.get(CellPos::new(0, 2)), None);

    grid.replace_rows(vec![vec![CellValue::from("a")], vec![]]);
    assert_eq!(
        grid.to_vec(),
        vec![
            vec![CellValue::from("a"), CellValue::Null],
            vec![CellValue::Null, CellValue::Null]
        ]
    );
}

#[test]
fn test_address() {
    assert_eq!(CellPos::new(0, 0).address(3), 1);
    assert_eq!(CellPos::new(1, 1).address(3), 5);
    assert_eq!(CellPos::new(2, 2).address(3), 9);

    assert_eq!(CellPos::from_address(5, 9, 3), Some(CellPos::new(1, 1)));
    assert_eq!(CellPos::from_address(3, 9, 3), Some(CellPos::new(0, 2)));
    assert_eq!(CellPos::from_address(4, 9, 3), Some(CellPos::new(1, 0)));
    assert_eq!(CellPos::from_address(0, 9, 3), None);
    assert_eq!(CellPos::from_address(1, 0, 0), None);
    assert_eq!(CellPos::from_address(1, 0, 2), None);
}

#[test]
fn test_offset_address() {
    assert_eq!(offset_address(0, 3, 6), Some(3));
    assert_eq!(offset_address(0, -3, 6), None);
    assert_eq!(offset_address(1, -1, 6), None);
    assert_eq!(offset_address(6, 1, 6), None);
    assert_eq!(offset_address(4, -3, 6), Some(1));
    assert_eq!(offset_address(3, 3, 6), Some(6));
    assert_eq!(offset_address(1, 1, 0), None);
}
