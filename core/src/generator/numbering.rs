use crate::*;

/// Stores the adjacent bomb count in every safe cell, border included.
///
/// Must run once the bomb layout is final.
pub fn compute_numbers(minefield: &mut Minefield) {
    let size = minefield.size();
    for coords in iter_coords(size) {
        if minefield[coords].is_bomb() {
            continue;
        }
        let count = minefield.adjacent_bomb_count(coords);
        minefield.set(coords, Cell::from_adjacent(count));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_bombs_in_all_eight_directions() {
        let mut field = Minefield::blank((5, 5));
        for coords in [(1, 1), (2, 1), (3, 1), (1, 3)] {
            field.set(coords, Cell::Bomb);
        }

        compute_numbers(&mut field);

        assert_eq!(field[(2, 2)], Cell::Numbered(4));
        assert_eq!(field[(2, 0)], Cell::Numbered(3));
        assert_eq!(field[(0, 4)], Cell::Numbered(1));
        assert_eq!(field[(4, 4)], Cell::Empty);
        assert_eq!(field[(1, 1)], Cell::Bomb);
        assert_eq!(field.bomb_count(), 4);
    }

    #[test]
    fn renumbering_is_stable() {
        let mut field = Minefield::from_bomb_coords((6, 4), &[(2, 1), (3, 2)]).unwrap();
        let before = field.clone();

        compute_numbers(&mut field);

        assert_eq!(field, before);
    }
}
