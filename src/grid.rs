use crate::{Error, Result, Topology, MOORE_OFFSETS};

/// Linear index of the cell `(x, y)` in a row-major grid of the given width.
pub fn index(width: usize, x: usize, y: usize) -> usize {
    x + y * width
}

/// Inverse of [`index`].
pub fn coords(width: usize, index: usize) -> (usize, usize) {
    (index % width, index / width)
}

/// Fixed-size rectangular field of cells stored row by row.
///
/// A `Grid` is a value: stepping produces a new one and never touches the old.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid<C> {
    width: usize,
    height: usize,
    cells: Vec<C>,
}

impl<C> Grid<C> {
    /// Wraps an existing row-major cell vector.
    pub fn new(width: usize, height: usize, cells: Vec<C>) -> Result<Self> {
        let expected = checked_area(width, height)?;
        if cells.len() != expected {
            return Err(Error::DimensionMismatch {
                expected,
                actual: cells.len(),
            });
        }
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Builds a grid by calling `f(x, y)` for every cell in row-major order.
    pub fn from_fn(
        width: usize,
        height: usize,
        mut f: impl FnMut(usize, usize) -> C,
    ) -> Result<Self> {
        let area = checked_area(width, height)?;
        let cells = (0..area)
            .map(|i| {
                let (x, y) = coords(width, i);
                f(x, y)
            })
            .collect();
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of cells, always `width * height`.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cells(&self) -> &[C] {
        &self.cells
    }

    pub fn into_cells(self) -> Vec<C> {
        self.cells
    }

    pub fn get(&self, x: usize, y: usize) -> Option<&C> {
        if x < self.width && y < self.height {
            self.cells.get(index(self.width, x, y))
        } else {
            None
        }
    }

    /// Like [`Grid::get`], but accepts coordinates that may lie past the edges.
    pub fn get_signed(&self, x: i64, y: i64) -> Option<&C> {
        if x < 0 || y < 0 {
            return None;
        }
        self.get(x as usize, y as usize)
    }

    /// Iterates over `(x, y, cell)` in the order of [`index`].
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, &C)> + '_ {
        self.cells.iter().enumerate().map(|(i, cell)| {
            let (x, y) = coords(self.width, i);
            (x, y, cell)
        })
    }

    /// Present Moore neighbors of `(x, y)`.
    ///
    /// Off-field candidates of a bounded grid are left out, so edge cells have
    /// fewer than eight neighbors.
    pub fn neighbors(&self, x: usize, y: usize, topology: Topology) -> Vec<&C> {
        let mut buf = Vec::with_capacity(MOORE_OFFSETS.len());
        self.neighbors_into(x, y, topology, &mut buf);
        buf
    }

    fn neighbors_into<'a>(
        &'a self,
        x: usize,
        y: usize,
        topology: Topology,
        buf: &mut Vec<&'a C>,
    ) {
        let rx = topology.resolver(self.width);
        let ry = topology.resolver(self.height);
        buf.clear();
        buf.extend(MOORE_OFFSETS.iter().filter_map(|&(dx, dy)| {
            self.get_signed(rx.resolve(x as i64, dx), ry.resolve(y as i64, dy))
        }));
    }

    /// Computes the next generation: `f(cell, neighbors)` for every cell,
    /// reading only `self`.
    pub fn step_with(&self, topology: Topology, mut f: impl FnMut(&C, &[&C]) -> C) -> Self {
        let mut buf = Vec::with_capacity(MOORE_OFFSETS.len());
        let cells = self
            .iter()
            .map(|(x, y, cell)| {
                self.neighbors_into(x, y, topology, &mut buf);
                f(cell, &buf)
            })
            .collect();
        Self {
            width: self.width,
            height: self.height,
            cells,
        }
    }
}

fn checked_area(width: usize, height: usize) -> Result<usize> {
    match width.checked_mul(height) {
        Some(area) if area > 0 => Ok(area),
        _ => Err(Error::InvalidDimension { width, height }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_and_coords_agree() {
        let width = 7;
        for i in 0..35 {
            let (x, y) = coords(width, i);
            assert!(x < width);
            assert_eq!(index(width, x, y), i);
        }
        assert_eq!(index(4, 3, 2), 11);
        assert_eq!(coords(4, 11), (3, 2));
    }

    #[test]
    fn rejects_bad_shapes() {
        assert_eq!(
            Grid::new(0, 3, Vec::<u8>::new()),
            Err(Error::InvalidDimension { width: 0, height: 3 })
        );
        assert_eq!(
            Grid::new(2, 2, vec![0u8; 3]),
            Err(Error::DimensionMismatch { expected: 4, actual: 3 })
        );
        assert!(Grid::from_fn(usize::MAX, 2, |_, _| 0u8).is_err());
    }

    #[test]
    fn corner_neighbor_counts() {
        let grid = Grid::from_fn(4, 5, |x, y| (x, y)).unwrap();
        assert_eq!(grid.neighbors(0, 0, Topology::Bounded).len(), 3);
        assert_eq!(grid.neighbors(3, 4, Topology::Bounded).len(), 3);
        assert_eq!(grid.neighbors(1, 0, Topology::Bounded).len(), 5);
        assert_eq!(grid.neighbors(1, 1, Topology::Bounded).len(), 8);
        assert_eq!(grid.neighbors(0, 0, Topology::Torus).len(), 8);
    }

    #[test]
    fn torus_neighbors_wrap() {
        let grid = Grid::from_fn(3, 3, |x, y| (x, y)).unwrap();
        let mut n: Vec<_> = grid
            .neighbors(0, 0, Topology::Torus)
            .into_iter()
            .copied()
            .collect();
        n.sort();
        assert_eq!(
            n,
            vec![(0, 1), (0, 2), (1, 0), (1, 1), (1, 2), (2, 0), (2, 1), (2, 2)]
        );
    }

    #[test]
    fn get_signed_outside_is_none() {
        let grid = Grid::from_fn(2, 2, |_, _| true).unwrap();
        assert!(grid.get_signed(-1, 0).is_none());
        assert!(grid.get_signed(0, 2).is_none());
        assert!(grid.get_signed(1, 1).is_some());
    }
}
