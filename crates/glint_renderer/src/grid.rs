//! Column-major sample storage.

/// A `columns × rows` grid stored column by column.
///
/// Columns are contiguous so a whole column can be handed to worker threads
/// as one slice.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid<T> {
    columns: usize,
    rows: usize,
    cells: Vec<T>,
}

impl<T> Grid<T> {
    /// Build a grid, filling each cell from its `(column, row)`.
    pub fn new_with(columns: usize, rows: usize, mut f: impl FnMut(usize, usize) -> T) -> Self {
        let mut cells = Vec::with_capacity(columns * rows);
        for column in 0..columns {
            for row in 0..rows {
                cells.push(f(column, row));
            }
        }
        Self {
            columns,
            rows,
            cells,
        }
    }

    #[inline]
    pub fn columns(&self) -> usize {
        self.columns
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    fn offset(&self, column: usize, row: usize) -> usize {
        column * self.rows + row
    }

    pub fn get(&self, column: usize, row: usize) -> Option<&T> {
        if column >= self.columns || row >= self.rows {
            return None;
        }
        self.cells.get(self.offset(column, row))
    }

    pub fn set(&mut self, column: usize, row: usize, value: T) {
        if column < self.columns && row < self.rows {
            let offset = self.offset(column, row);
            self.cells[offset] = value;
        }
    }

    /// Cells of one column, top row first. Empty past the last column.
    pub fn column(&self, column: usize) -> &[T] {
        if column >= self.columns {
            return &[];
        }
        let start = self.offset(column, 0);
        &self.cells[start..start + self.rows]
    }

    pub fn column_mut(&mut self, column: usize) -> &mut [T] {
        if column >= self.columns {
            return Default::default();
        }
        let start = self.offset(column, 0);
        let rows = self.rows;
        &mut self.cells[start..start + rows]
    }

    /// All cells, column-major.
    pub fn cells(&self) -> &[T] {
        &self.cells
    }

    pub fn cells_mut(&mut self) -> &mut [T] {
        &mut self.cells
    }

    /// Iterate `(column, row, cell)`.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, &T)> + '_ {
        let rows = self.rows.max(1);
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, cell)| (i / rows, i % rows, cell))
    }
}

impl<T: Clone> Grid<T> {
    /// Twice as many columns and rows; cell `(c, r)` moves to `(2c, 2r)`
    /// and every new cell gets `fill`.
    pub fn refined(&self, fill: T) -> Self {
        let mut next = Grid::new_with(self.columns * 2, self.rows * 2, |_, _| fill.clone());
        for (column, row, cell) in self.iter() {
            next.set(column * 2, row * 2, cell.clone());
        }
        next
    }
}
