//!
//! The normalized data grid and cell addressing.
//!
//! Cells are addressed two ways. [CellPos] is the plain (row, column)
//! pair. The cell address is the 1-based row-major index of the cell,
//! `row * columns + column + 1`. Keyboard navigation works on the
//! address, so moving right from the last column lands on the first
//! column of the next row.
//!
use crate::value::CellValue;

/// Position of a cell. Both 0-based.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellPos {
    pub row: usize,
    pub col: usize,
}

impl CellPos {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// 1-based row-major address of the cell.
    pub fn address(&self, columns: usize) -> usize {
        self.row * columns + self.col + 1
    }

    /// Position for a 1-based address.
    ///
    /// The column count is derived as `cells / rows`. There is no
    /// position for address 0 or an empty grid.
    pub fn from_address(address: usize, cells: usize, rows: usize) -> Option<CellPos> {
        if address == 0 || rows == 0 {
            return None;
        }
        let columns = cells / rows;
        if columns == 0 {
            return None;
        }
        Some(CellPos {
            row: (address - 1) / columns,
            col: (address - 1) % columns,
        })
    }
}

/// Add an offset to an address.
///
/// Returns None if the target is not one of `1..=cells`.
pub fn offset_address(address: usize, delta: isize, cells: usize) -> Option<usize> {
    let target = address.checked_add_signed(delta)?;
    if (1..=cells).contains(&target) {
        Some(target)
    } else {
        None
    }
}

/// Rectangular grid of cell values.
///
/// Every row has exactly `columns` cells.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ViewGrid {
    columns: usize,
    rows: Vec<Vec<CellValue>>,
}

impl ViewGrid {
    /// Empty grid.
    pub fn new(columns: usize) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Grid from raw rows.
    ///
    /// Short rows are padded with Null, long rows are cut.
    pub fn from_raw<I, R>(columns: usize, raw: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = CellValue>,
    {
        Self {
            columns,
            rows: raw
                .into_iter()
                .map(|row| normalize_row(columns, row))
                .collect(),
        }
    }

    /// Column count.
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Row count.
    pub fn rows(&self) -> usize {
        self.rows.len()
    }

    /// Total number of cells.
    pub fn cells(&self) -> usize {
        self.rows.len() * self.columns
    }

    /// No rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// One row.
    pub fn row(&self, row: usize) -> Option<&[CellValue]> {
        self.rows.get(row).map(|v| v.as_slice())
    }

    /// One cell.
    pub fn get(&self, pos: CellPos) -> Option<&CellValue> {
        self.rows.get(pos.row).and_then(|v| v.get(pos.col))
    }

    /// Iterate the rows.
    pub fn iter(&self) -> impl Iterator<Item = &[CellValue]> {
        self.rows.iter().map(|v| v.as_slice())
    }

    /// Append a row of Null cells.
    pub fn push_empty_row(&mut self) {
        self.rows.push(vec![CellValue::Null; self.columns]);
    }

    /// Replace all rows. The rows are normalized like
    /// with [ViewGrid::from_raw].
    pub fn replace_rows(&mut self, rows: Vec<Vec<CellValue>>) {
        let columns = self.columns;
        self.rows = rows
            .into_iter()
            .map(|row| normalize_row(columns, row))
            .collect();
    }

    /// Copy of the data.
    pub fn to_vec(&self) -> Vec<Vec<CellValue>> {
        self.rows.clone()
    }
}

fn normalize_row(columns: usize, row: impl IntoIterator<Item = CellValue>) -> Vec<CellValue> {
    let mut row = row.into_iter().take(columns).collect::<Vec<_>>();
    row.resize(columns, CellValue::Null);
    row
}
