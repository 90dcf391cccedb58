use alloc::collections::{BTreeSet, VecDeque};
use alloc::vec::Vec;
use ndarray::Array2;

use crate::*;

/// A maximal set of connected coordinates.
pub type Component = BTreeSet<Coord2>;

/// Partitions every coordinate matching `predicate` into maximal connected components.
///
/// The board is scanned column by column (`x` outer, `y` inner) and components are returned in the order their first
/// cell is met by that scan. Callers should treat any other ordering property as unspecified.
pub fn connected_components<P>(size: Coord2, adjacency: Adjacency, predicate: P) -> Vec<Component>
where
    P: Fn(Coord2) -> bool,
{
    let mut visited: Array2<bool> = Array2::default(size.to_nd_index());
    let mut components = Vec::new();

    for coords in iter_coords(size) {
        if visited[coords.to_nd_index()] || !predicate(coords) {
            continue;
        }
        components.push(flood(size, adjacency, coords, &predicate, &mut visited));
    }

    components
}

/// The single component containing `seed`, empty when `seed` does not match `predicate` or is out of bounds.
pub fn component_from<P>(
    size: Coord2,
    adjacency: Adjacency,
    seed: Coord2,
    predicate: P,
) -> Component
where
    P: Fn(Coord2) -> bool,
{
    if seed.0 >= size.0 || seed.1 >= size.1 || !predicate(seed) {
        return Component::new();
    }

    let mut visited: Array2<bool> = Array2::default(size.to_nd_index());
    flood(size, adjacency, seed, &predicate, &mut visited)
}

/// Labels every matching cell with the index of its component in [`connected_components`] order.
///
/// Handy for eyeballing enclosures in debug logs.
pub fn label_components<P>(
    size: Coord2,
    adjacency: Adjacency,
    predicate: P,
) -> Array2<Option<usize>>
where
    P: Fn(Coord2) -> bool,
{
    let mut labels = Array2::from_elem(size.to_nd_index(), None);
    for (label, component) in connected_components(size, adjacency, predicate)
        .into_iter()
        .enumerate()
    {
        for coords in component {
            labels[coords.to_nd_index()] = Some(label);
        }
    }
    labels
}

/// Breadth-first fill from `seed`, which must match and be unvisited.
fn flood<P>(
    size: Coord2,
    adjacency: Adjacency,
    seed: Coord2,
    predicate: &P,
    visited: &mut Array2<bool>,
) -> Component
where
    P: Fn(Coord2) -> bool,
{
    let mut component = Component::new();
    let mut to_visit = VecDeque::from([seed]);
    visited[seed.to_nd_index()] = true;

    while let Some(coords) = to_visit.pop_front() {
        component.insert(coords);
        for next in NeighborIter::new(coords, size, adjacency) {
            let seen = &mut visited[next.to_nd_index()];
            if !*seen && predicate(next) {
                *seen = true;
                to_visit.push_back(next);
            }
        }
    }

    component
}

#[cfg(test)]
mod tests {
    use super::*;

    fn walls(size: Coord2, blocked: &[Coord2]) -> impl Fn(Coord2) -> bool + '_ {
        move |coords| coords.0 < size.0 && coords.1 < size.1 && !blocked.contains(&coords)
    }

    #[test]
    fn open_board_is_one_component() {
        let components = connected_components((4, 3), Adjacency::Four, |_| true);

        assert_eq!(components.len(), 1);
        assert_eq!(components[0].len(), 12);
    }

    #[test]
    fn diagonal_gap_splits_only_four_way() {
        // a diagonal line of walls cuts the corner off for NESW movement only
        let blocked = [(1, 0), (0, 1)];
        let four = connected_components((3, 3), Adjacency::Four, walls((3, 3), &blocked));
        let eight = connected_components((3, 3), Adjacency::Eight, walls((3, 3), &blocked));

        assert_eq!(four.len(), 2);
        assert_eq!(four[0], Component::from([(0, 0)]));
        assert_eq!(four[1].len(), 6);
        assert_eq!(eight.len(), 1);
    }

    #[test]
    fn components_partition_matching_cells() {
        let blocked = [(2, 0), (2, 1), (2, 2), (2, 3)];
        let components = connected_components((5, 4), Adjacency::Eight, walls((5, 4), &blocked));

        assert_eq!(components.len(), 2);
        let total: usize = components.iter().map(|c| c.len()).sum();
        assert_eq!(total, 16);
        assert!(components[0].is_disjoint(&components[1]));
        assert!(components[0].contains(&(0, 0)));
        assert!(components[1].contains(&(4, 3)));
    }

    #[test]
    fn component_from_seed() {
        let blocked = [(1, 0), (1, 1), (1, 2)];
        let left = component_from((3, 3), Adjacency::Four, (0, 1), walls((3, 3), &blocked));
        assert_eq!(left, Component::from([(0, 0), (0, 1), (0, 2)]));

        let none = component_from((3, 3), Adjacency::Four, (1, 1), walls((3, 3), &blocked));
        assert!(none.is_empty());

        let outside = component_from((3, 3), Adjacency::Four, (7, 7), |_| true);
        assert!(outside.is_empty());
    }

    #[test]
    fn labels_follow_discovery_order() {
        let blocked = [(1, 0), (1, 1), (1, 2)];
        let labels = label_components((3, 3), Adjacency::Four, walls((3, 3), &blocked));

        assert_eq!(labels[[0, 0]], Some(0));
        assert_eq!(labels[[1, 1]], None);
        assert_eq!(labels[[2, 2]], Some(1));
    }
}
