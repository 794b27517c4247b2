//! Source × target distance matrix.

/// A row-major matrix of shortest-path costs.
///
/// Rows are sources, columns targets, in the order they were passed to the
/// engine.  Unreachable pairs hold [`DistanceMatrix::UNREACHABLE`]
/// (infinity); the typed accessor [`get`](Self::get) hides the marker.
/// Built once per run and read-only afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct DistanceMatrix {
    n_rows: usize,
    n_cols: usize,
    data: Vec<f64>,
}

impl DistanceMatrix {
    /// Marker for "no path exists".  Larger than any real cost, but never
    /// fed back into cost arithmetic.
    pub const UNREACHABLE: f64 = f64::INFINITY;

    /// A matrix with every entry unreachable.
    pub fn filled_unreachable(n_rows: usize, n_cols: usize) -> Self {
        Self {
            n_rows,
            n_cols,
            data: vec![Self::UNREACHABLE; n_rows * n_cols],
        }
    }

    /// Assemble from per-source rows.  Every row must have `n_cols` entries.
    pub fn from_rows(n_cols: usize, rows: Vec<Vec<f64>>) -> Self {
        let n_rows = rows.len();
        let mut data = Vec::with_capacity(n_rows * n_cols);
        for row in rows {
            assert_eq!(row.len(), n_cols, "ragged distance row");
            data.extend(row);
        }
        Self { n_rows, n_cols, data }
    }

    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    pub fn n_cols(&self) -> usize {
        self.n_cols
    }

    /// The cost for `(row, col)`, or `None` when unreachable.
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        let v = self.data[row * self.n_cols + col];
        v.is_finite().then_some(v)
    }

    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        self.data[row * self.n_cols + col] = value;
    }

    /// One source's full row of costs (unreachable entries included).
    pub fn row(&self, row: usize) -> &[f64] {
        &self.data[row * self.n_cols..(row + 1) * self.n_cols]
    }
}
