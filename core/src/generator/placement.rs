use alloc::vec::Vec;
use rand::Rng;

use crate::*;

/// Enclosure cells sampled per interior cell before repair gives up.
pub const REPAIR_ATTEMPTS_PER_CELL: CellCount = 256;

/// Floor for the repair budget so tiny boards still get a fair number of samples.
pub const MIN_REPAIR_ATTEMPTS: CellCount = 256;

/// Upper bound on the random samples spent opening enclosures.
///
/// Every enclosure cell drawn costs one sample, whether or not it borders a bomb. Only a draw that does leads to a
/// relocation, so `spent` is at least the number of bombs moved.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RepairBudget {
    limit: CellCount,
    spent: CellCount,
}

impl RepairBudget {
    pub const fn new(limit: CellCount) -> Self {
        Self { limit, spent: 0 }
    }

    /// Budget proportional to the interior of a board of `size`.
    pub const fn for_size(size: Coord2) -> Self {
        let scaled = interior_cells(size).saturating_mul(REPAIR_ATTEMPTS_PER_CELL);
        Self::new(if scaled > MIN_REPAIR_ATTEMPTS {
            scaled
        } else {
            MIN_REPAIR_ATTEMPTS
        })
    }

    pub const fn limit(&self) -> CellCount {
        self.limit
    }

    pub const fn spent(&self) -> CellCount {
        self.spent
    }

    fn spend(&mut self) -> Result<()> {
        if self.spent >= self.limit {
            return Err(GameError::EnclosureRepairExhausted {
                attempts: self.spent,
            });
        }
        self.spent += 1;
        Ok(())
    }
}

/// Scatters `count` more bombs uniformly over free interior cells.
///
/// Samples that land on an existing bomb are retried and not counted.
pub fn place_bombs<R: Rng + ?Sized>(
    minefield: &mut Minefield,
    count: CellCount,
    rng: &mut R,
) -> Result<()> {
    let capacity = minefield.interior_cells() - minefield.bomb_count();
    if count > capacity {
        return Err(GameError::TooManyBombs {
            requested: count,
            capacity,
        });
    }

    log::info!("Placing {} bombs", count);
    for _ in 0..count {
        place_one(minefield, rng);
    }
    Ok(())
}

/// Places a single bomb on a random free interior cell, which must exist.
fn place_one<R: Rng + ?Sized>(minefield: &mut Minefield, rng: &mut R) -> Coord2 {
    let (size_x, size_y) = minefield.size();
    loop {
        let coords = (
            rng.random_range(1..size_x - 1),
            rng.random_range(1..size_y - 1),
        );
        if !minefield[coords].is_bomb() {
            minefield.set(coords, Cell::Bomb);
            return coords;
        }
    }
}

/// Merges every region of safe cells unreachable from the first one into it.
///
/// Each enclosure gets one of its walling bombs cleared and relocated elsewhere, then the whole board is checked
/// again, until a single NESW-connected safe region remains. The bomb count never changes. Returns how many bombs
/// were relocated.
pub fn resolve_enclosures<R: Rng + ?Sized>(
    minefield: &mut Minefield,
    rng: &mut R,
    mut budget: RepairBudget,
) -> Result<CellCount> {
    let size = minefield.size();
    let mut relocated = 0;

    loop {
        let mask = minefield.bomb_mask();
        let regions = connected_components(size, Adjacency::Four, |coords| !mask.is_bomb(coords));
        if regions.len() <= 1 {
            if relocated > 0 {
                log::info!(
                    "Enclosures opened after relocating {} bombs ({} attempts)",
                    relocated,
                    budget.spent()
                );
            }
            return Ok(relocated);
        }

        log::debug!("{} enclosures detected, opening", regions.len() - 1);
        for enclosure in &regions[1..] {
            open_enclosure(minefield, enclosure, rng, &mut budget)?;
            relocated += 1;
        }
    }
}

fn open_enclosure<R: Rng + ?Sized>(
    minefield: &mut Minefield,
    enclosure: &Component,
    rng: &mut R,
    budget: &mut RepairBudget,
) -> Result<()> {
    let cells: Vec<Coord2> = enclosure.iter().copied().collect();

    loop {
        budget.spend()?;
        let coords = cells[rng.random_range(0..cells.len())];
        let wall = minefield
            .neighbors(coords, Adjacency::Four)
            .find(|&pos| minefield[pos].is_bomb());

        if let Some(wall) = wall {
            minefield.set(wall, Cell::Empty);
            let moved_to = place_one(minefield, rng);
            log::trace!("Bomb at {:?} moved to {:?}", wall, moved_to);
            return Ok(());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    /// Bombs ringing (5, 5) on a 10x10 board, cutting it off from the rest.
    const RING: [Coord2; 8] = [
        (4, 4),
        (5, 4),
        (6, 4),
        (4, 5),
        (6, 5),
        (4, 6),
        (5, 6),
        (6, 6),
    ];

    fn safe_regions(minefield: &Minefield) -> usize {
        let mask = minefield.bomb_mask();
        connected_components(minefield.size(), Adjacency::Four, |c| !mask.is_bomb(c)).len()
    }

    #[test]
    fn place_bombs_keeps_out_of_border() {
        let mut rng = SmallRng::seed_from_u64(7);
        let mut field = Minefield::blank((6, 5));

        place_bombs(&mut field, 12, &mut rng).unwrap();

        assert_eq!(field.bomb_count(), 12);
        assert!(field.iter().all(|(c, cell)| !(cell.is_bomb() && field.is_border(c))));
    }

    #[test]
    fn place_bombs_rejects_overfull_interior() {
        let mut rng = SmallRng::seed_from_u64(7);
        let mut field = Minefield::blank((4, 4));

        assert_eq!(
            place_bombs(&mut field, 5, &mut rng),
            Err(GameError::TooManyBombs {
                requested: 5,
                capacity: 4
            })
        );
        assert_eq!(field.bomb_count(), 0);
    }

    #[test]
    fn zero_bombs_on_a_thin_board() {
        let mut rng = SmallRng::seed_from_u64(1);
        let mut field = Minefield::blank((2, 9));

        place_bombs(&mut field, 0, &mut rng).unwrap();
        let budget = RepairBudget::for_size((2, 9));
        assert_eq!(resolve_enclosures(&mut field, &mut rng, budget), Ok(0));
    }

    #[test]
    fn ringed_cell_is_merged_back() {
        let mut field = Minefield::from_bomb_coords((10, 10), &RING).unwrap();
        assert_eq!(safe_regions(&field), 2);

        for seed in 0..20 {
            let mut rng = SmallRng::seed_from_u64(seed);
            let mut repaired = field.clone();

            let budget = RepairBudget::for_size((10, 10));
            let relocated = resolve_enclosures(&mut repaired, &mut rng, budget).unwrap();

            assert!(relocated >= 1);
            assert_eq!(safe_regions(&repaired), 1);
            assert_eq!(repaired.bomb_count(), 8);
            assert!(repaired.iter().all(|(c, cell)| !(cell.is_bomb() && repaired.is_border(c))));
        }

        field.set((5, 4), Cell::Empty);
        assert_eq!(safe_regions(&field), 1);
    }

    #[test]
    fn connected_layout_is_left_alone() {
        let field = Minefield::from_bomb_coords((10, 10), &[(3, 3), (6, 6)]).unwrap();
        let mut repaired = field.clone();
        let mut rng = SmallRng::seed_from_u64(3);

        assert_eq!(
            resolve_enclosures(&mut repaired, &mut rng, RepairBudget::for_size((10, 10))),
            Ok(0)
        );
        assert_eq!(repaired, field);
    }

    #[test]
    fn exhausted_budget_fails_fast() {
        let mut field = Minefield::from_bomb_coords((10, 10), &RING).unwrap();
        let mut rng = SmallRng::seed_from_u64(0);

        assert_eq!(
            resolve_enclosures(&mut field, &mut rng, RepairBudget::new(0)),
            Err(GameError::EnclosureRepairExhausted { attempts: 0 })
        );
    }

    #[test]
    fn budget_counts_each_sample() {
        let mut budget = RepairBudget::new(2);
        assert_eq!(budget.spend(), Ok(()));
        assert_eq!(budget.spend(), Ok(()));
        assert_eq!(budget.spent(), 2);
        assert_eq!(
            budget.spend(),
            Err(GameError::EnclosureRepairExhausted { attempts: 2 })
        );
        assert_eq!(budget.spent(), 2);
    }

    #[test]
    fn budget_scales_with_interior() {
        assert_eq!(RepairBudget::for_size((3, 3)).limit(), MIN_REPAIR_ATTEMPTS);
        assert_eq!(
            RepairBudget::for_size((12, 12)).limit(),
            100 * REPAIR_ATTEMPTS_PER_CELL
        );
    }
}
