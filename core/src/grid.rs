use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Truth grid of a game: where the bombs are and what every safe cell counts.
///
/// Written only while a generator builds it, read-only afterwards.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Minefield {
    cells: Array2<Cell>,
    bomb_count: CellCount,
}

impl Minefield {
    /// A bomb-free, un-numbered field, the starting point for generators.
    pub(crate) fn blank(size: Coord2) -> Self {
        Self {
            cells: Array2::default(size.to_nd_index()),
            bomb_count: 0,
        }
    }

    /// Builds a numbered field from explicit bomb positions, without any enclosure repair.
    pub fn from_bomb_coords(size: Coord2, bomb_coords: &[Coord2]) -> Result<Self> {
        if size.0 == 0 || size.1 == 0 {
            return Err(GameError::EmptyBoard);
        }

        let mut minefield = Self::blank(size);
        for &coords in bomb_coords {
            let coords = minefield.validate_coords(coords)?;
            if is_border(coords, size) {
                return Err(GameError::BombOnBorder);
            }
            minefield.set(coords, Cell::Bomb);
        }
        compute_numbers(&mut minefield);
        Ok(minefield)
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        if self.contains(coords) {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    pub fn contains(&self, (x, y): Coord2) -> bool {
        let size = self.size();
        x < size.0 && y < size.1
    }

    pub fn size(&self) -> Coord2 {
        let (size_x, size_y) = self.cells.dim();
        // dimensions always come from a Coord2
        (size_x as Coord, size_y as Coord)
    }

    pub fn interior_cells(&self) -> CellCount {
        interior_cells(self.size())
    }

    pub fn bomb_count(&self) -> CellCount {
        self.bomb_count
    }

    pub fn get(&self, coords: Coord2) -> Option<Cell> {
        self.cells.get(coords.to_nd_index()).copied()
    }

    pub fn is_border(&self, coords: Coord2) -> bool {
        is_border(coords, self.size())
    }

    pub fn neighbors(&self, coords: Coord2, adjacency: Adjacency) -> NeighborIter {
        NeighborIter::new(coords, self.size(), adjacency)
    }

    pub fn adjacent_bomb_count(&self, coords: Coord2) -> u8 {
        // at most 8 neighbours
        self.neighbors(coords, Adjacency::Eight)
            .filter(|&pos| self[pos].is_bomb())
            .count() as u8
    }

    /// Read-only view answering "is there a bomb here", borrowing the truth grid.
    pub fn bomb_mask(&self) -> BombMask<'_> {
        BombMask { minefield: self }
    }

    /// Every cell with its coordinates, column by column.
    pub fn iter(&self) -> impl Iterator<Item = (Coord2, Cell)> + '_ {
        iter_coords(self.size()).map(|coords| (coords, self[coords]))
    }

    /// Overwrites a cell, keeping the bomb count in step.
    pub(crate) fn set(&mut self, coords: Coord2, cell: Cell) {
        let slot = &mut self.cells[coords.to_nd_index()];
        match (slot.is_bomb(), cell.is_bomb()) {
            (false, true) => self.bomb_count += 1,
            (true, false) => self.bomb_count -= 1,
            _ => {}
        }
        *slot = cell;
    }
}

impl Index<Coord2> for Minefield {
    type Output = Cell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}

#[derive(Copy, Clone, Debug)]
pub struct BombMask<'a> {
    minefield: &'a Minefield,
}

impl BombMask<'_> {
    pub fn size(&self) -> Coord2 {
        self.minefield.size()
    }

    /// Out-of-bounds coordinates hold no bomb.
    pub fn is_bomb(&self, coords: Coord2) -> bool {
        self.minefield
            .get(coords)
            .is_some_and(|cell| cell.is_bomb())
    }

    pub fn is_safe(&self, coords: Coord2) -> bool {
        self.minefield.contains(coords) && !self.is_bomb(coords)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn from_bomb_coords_numbers_the_field() {
        let field = Minefield::from_bomb_coords((4, 4), &[(1, 1), (2, 1)]).unwrap();

        assert_eq!(field.bomb_count(), 2);
        assert_eq!(field[(1, 1)], Cell::Bomb);
        assert_eq!(field[(0, 0)], Cell::Numbered(1));
        assert_eq!(field[(1, 0)], Cell::Numbered(2));
        assert_eq!(field[(3, 3)], Cell::Empty);
    }

    #[test]
    fn from_bomb_coords_rejects_border_and_out_of_bounds() {
        assert_eq!(
            Minefield::from_bomb_coords((4, 4), &[(0, 2)]),
            Err(GameError::BombOnBorder)
        );
        assert_eq!(
            Minefield::from_bomb_coords((4, 4), &[(4, 1)]),
            Err(GameError::InvalidCoords)
        );
        assert_eq!(
            Minefield::from_bomb_coords((0, 4), &[]),
            Err(GameError::EmptyBoard)
        );
    }

    #[test]
    fn accessors_are_bounds_checked() {
        let field = Minefield::from_bomb_coords((3, 3), &[(1, 1)]).unwrap();

        assert_eq!(field.get((3, 0)), None);
        assert_eq!(field.get((2, 2)), Some(Cell::Numbered(1)));
        assert_eq!(field.validate_coords((0, 3)), Err(GameError::InvalidCoords));
    }

    #[test]
    fn bomb_mask_reflects_truth_grid() {
        let field = Minefield::from_bomb_coords((5, 5), &[(2, 2), (3, 1)]).unwrap();
        let mask = field.bomb_mask();

        let bombs: Vec<_> = iter_coords(mask.size())
            .filter(|&c| mask.is_bomb(c))
            .collect();
        assert_eq!(bombs, [(2, 2), (3, 1)]);
        assert!(!mask.is_bomb((9, 9)));
        assert!(!mask.is_safe((9, 9)));
        assert!(mask.is_safe((0, 0)));
    }

    #[test]
    fn set_tracks_bomb_count() {
        let mut field = Minefield::blank((4, 4));
        field.set((1, 1), Cell::Bomb);
        field.set((1, 1), Cell::Bomb);
        field.set((2, 2), Cell::Bomb);
        assert_eq!(field.bomb_count(), 2);

        field.set((1, 1), Cell::Empty);
        assert_eq!(field.bomb_count(), 1);
    }
}
