use serde::{Deserialize, Serialize};

/// Single coordinate axis used for board width, height, and positions.
pub type Coord = u16;

/// Count type used for bomb counts, flag counts and total-cell counts.
pub type CellCount = u32;

/// Two-dimensional coordinates `(x, y)`.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

/// Number of cells strictly inside the outer ring of a board of `size`.
pub const fn interior_cells((size_x, size_y): Coord2) -> CellCount {
    mult(size_x.saturating_sub(2), size_y.saturating_sub(2))
}

/// Whether `coords` lies on the outermost row or column of a board of `size`.
pub const fn is_border((x, y): Coord2, (size_x, size_y): Coord2) -> bool {
    x == 0 || y == 0 || x + 1 >= size_x || y + 1 >= size_y
}

/// Which cells count as neighbours.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Adjacency {
    /// The four orthogonal neighbours, north/east/south/west.
    Four,
    /// All eight surrounding cells.
    Eight,
}

impl Adjacency {
    const fn displacements(self) -> &'static [(isize, isize)] {
        match self {
            Self::Four => &NESW_DISPLACEMENTS,
            Self::Eight => &DISPLACEMENTS,
        }
    }
}

/// Cursor movement and directional flagging.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }

    /// Steps once from `coords`, `None` when that leaves the board.
    pub fn step(self, coords: Coord2, bounds: Coord2) -> Option<Coord2> {
        apply_delta(coords, self.delta(), bounds)
    }

    /// Steps once from `coords`, wrapping around to the opposite edge.
    pub fn step_wrapping(self, (x, y): Coord2, (size_x, size_y): Coord2) -> Coord2 {
        let wrap = |value: Coord, delta: isize, size: Coord| -> Coord {
            match delta {
                -1 if value == 0 => size - 1,
                -1 => value - 1,
                1 if value + 1 >= size => 0,
                1 => value + 1,
                _ => value,
            }
        };
        let (dx, dy) = self.delta();
        (wrap(x, dx, size_x), wrap(y, dy, size_y))
    }
}

const DISPLACEMENTS: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

const NESW_DISPLACEMENTS: [(isize, isize); 4] = [(0, -1), (1, 0), (0, 1), (-1, 0)];

/// Applies `delta` to `coords`, returning a value only when it remains in bounds.
fn apply_delta(coords: Coord2, delta: (isize, isize), bounds: Coord2) -> Option<Coord2> {
    let (x, y) = coords;
    let (dx, dy) = delta;
    let (max_x, max_y) = bounds;

    let next_x = x.checked_add_signed(dx.try_into().ok()?)?;
    if next_x >= max_x {
        return None;
    }

    let next_y = y.checked_add_signed(dy.try_into().ok()?)?;
    if next_y >= max_y {
        return None;
    }

    Some((next_x, next_y))
}

#[derive(Debug)]
pub struct NeighborIter {
    center: Coord2,
    bounds: Coord2,
    displacements: &'static [(isize, isize)],
    index: u8,
}

impl NeighborIter {
    pub fn new(center: Coord2, bounds: Coord2, adjacency: Adjacency) -> Self {
        Self {
            center,
            bounds,
            displacements: adjacency.displacements(),
            index: 0,
        }
    }
}

impl Iterator for NeighborIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let delta = *self.displacements.get(usize::from(self.index))?;
            self.index += 1;

            if let Some(next_item) = apply_delta(self.center, delta, self.bounds) {
                return Some(next_item);
            }
        }
    }
}

/// Iterates every coordinate of a board column by column (`x` outer, `y` inner).
pub fn iter_coords((size_x, size_y): Coord2) -> impl Iterator<Item = Coord2> {
    (0..size_x).flat_map(move |x| (0..size_y).map(move |y| (x, y)))
}

/// Iterates the outer ring of a board: top and bottom rows, then the side columns.
pub fn iter_border((size_x, size_y): Coord2) -> impl Iterator<Item = Coord2> {
    let top = (0..size_x).map(|x| (x, 0));
    let bottom = (0..size_x)
        .filter(move |_| size_y > 1)
        .map(move |x| (x, size_y - 1));
    let sides = (1..size_y.saturating_sub(1)).flat_map(move |y| {
        core::iter::once((0, y)).chain((size_x > 1).then(|| (size_x - 1, y)))
    });
    top.chain(bottom).chain(sides)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn neighbors_exclude_center_and_out_of_bounds() {
        let corner: Vec<_> = NeighborIter::new((0, 0), (3, 3), Adjacency::Eight).collect();
        assert_eq!(corner, [(1, 0), (0, 1), (1, 1)]);

        let center = NeighborIter::new((1, 1), (3, 3), Adjacency::Eight).count();
        assert_eq!(center, 8);
    }

    #[test]
    fn nesw_neighbors_are_orthogonal_only() {
        let around: Vec<_> = NeighborIter::new((1, 1), (3, 3), Adjacency::Four).collect();
        assert_eq!(around, [(1, 0), (2, 1), (1, 2), (0, 1)]);

        let edge: Vec<_> = NeighborIter::new((2, 0), (3, 3), Adjacency::Four).collect();
        assert_eq!(edge, [(2, 1), (1, 0)]);
    }

    #[test]
    fn wrapping_steps_cross_edges() {
        assert_eq!(Direction::Left.step_wrapping((0, 2), (4, 3)), (3, 2));
        assert_eq!(Direction::Down.step_wrapping((1, 2), (4, 3)), (1, 0));
        assert_eq!(Direction::Right.step_wrapping((1, 1), (4, 3)), (2, 1));
        assert_eq!(Direction::Up.step((1, 0), (4, 3)), None);
    }

    #[test]
    fn border_ring_visits_each_outer_cell_once() {
        let mut ring: Vec<_> = iter_border((4, 3)).collect();
        ring.sort();
        let mut expected: Vec<_> = iter_coords((4, 3))
            .filter(|&c| is_border(c, (4, 3)))
            .collect();
        expected.sort();
        assert_eq!(ring, expected);
        assert_eq!(ring.len(), 10);

        assert_eq!(iter_border((1, 1)).count(), 1);
        assert_eq!(iter_border((3, 1)).count(), 3);
        assert_eq!(iter_border((1, 3)).count(), 3);
    }

    #[test]
    fn interior_excludes_outer_ring() {
        assert_eq!(interior_cells((10, 10)), 64);
        assert_eq!(interior_cells((2, 7)), 0);
        assert_eq!(interior_cells((1, 1)), 0);
    }
}
